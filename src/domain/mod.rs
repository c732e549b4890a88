//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, money, errors)
//! - `client` - Client record, edit payload, client errors
//! - `project` - Projects, payment ledger, portfolio totals, status display
//! - `presentation` - Formatting policy and the client detail view model

pub mod client;
pub mod foundation;
pub mod presentation;
pub mod project;
