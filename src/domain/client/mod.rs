//! Client records, the edit payload, and client errors.

mod record;
mod errors;
mod update;

pub use record::{Client, Profile, ProfileFolder};
pub use errors::ClientError;
pub use update::ClientUpdate;
