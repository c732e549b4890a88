//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Fixture-backed client store
//! - `postgres` - PostgreSQL client store
//! - `signals` - Notifier and navigator implementations

mod joined_record;
pub mod memory;
pub mod postgres;
pub mod signals;

pub use joined_record::JoinedClientRecord;
pub use memory::{FixtureError, InMemoryClientStore, StoreFixture};
pub use postgres::{connect_pool, PostgresClientRepository};
pub use signals::{RecordingNavigator, RecordingNotifier, TracingNavigator, TracingNotifier};
