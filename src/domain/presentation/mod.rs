//! Presentation boundary: formatting policy and the detail page model.

pub mod client_detail;
pub mod format;
pub mod route;

pub use client_detail::{
    ClientDetailView, ClientHeader, FolderSummary, InfoField, InstallmentBadge, OverviewSummary,
    ProjectCard, ProjectListing, RECENT_PROJECT_LIMIT,
};
pub use format::{DisplayFormat, SymbolPosition};
pub use route::Route;
