//! Client detail page: load sequence, edits, and state.

mod controller;
mod state;

pub use controller::{
    ClientDetailController, LoadOutcome, CLIENT_NOT_FOUND_MESSAGE, CLIENT_UPDATED_MESSAGE,
    PROJECTS_UNAVAILABLE_MESSAGE, UPDATE_FAILED_MESSAGE,
};
pub use state::{ClientDetailState, LoadPhase, LoadedClientDetail};
