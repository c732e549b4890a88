//! Application layer - Controllers over the domain and ports.
//!
//! The client detail controller sequences repository reads, applies the
//! results to its state, and reports every failure through a notice.

pub mod handlers;

pub use handlers::{
    ClientDetailController, ClientDetailState, LoadOutcome, LoadPhase, LoadedClientDetail,
};
