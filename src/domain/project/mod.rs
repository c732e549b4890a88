//! Projects, payment installments, and the derivations over them.
//!
//! - `ledger` - paid-to-date and outstanding debt per project
//! - `aggregator` - portfolio totals across a client's projects
//! - `status` - status codes, display labels and tags

mod aggregator;
mod ledger;
mod record;
mod status;

pub use aggregator::{PortfolioStats, ProjectAggregator};
pub use ledger::{Installment, PaymentLedger, ProjectLedger};
pub use record::{Payment, Project};
pub use status::{DisplayTag, ProjectStatus, StatusDisplay, StatusResolver, UNKNOWN_STATUS_LABEL};
