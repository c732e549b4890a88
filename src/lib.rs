//! Client Desk - Client detail core for a back-office tool
//!
//! Reads a client with its profiles, folders and projects, derives contract
//! totals and per-project debt, resolves project status labels, and drives
//! the detail page through its load and edit flow.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
