//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ClientRepository` - client/project reads and client edits
//! - `Notifier` - user-visible notices
//! - `Navigator` - view changes requested by the detail flow

mod client_repository;
mod navigator;
mod notifier;

pub use client_repository::ClientRepository;
pub use navigator::Navigator;
pub use notifier::{Notice, NoticeLevel, Notifier};
