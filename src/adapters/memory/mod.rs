//! In-memory adapters for tests and fixture-backed runs.

mod in_memory_client_store;

pub use in_memory_client_store::{FixtureError, InMemoryClientStore, StoreFixture};
