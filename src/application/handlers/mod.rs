//! Application handlers.
//!
//! Controllers that orchestrate domain operations over the ports.

pub mod client_detail;

pub use client_detail::{
    ClientDetailController, ClientDetailState, LoadOutcome, LoadPhase, LoadedClientDetail,
};
