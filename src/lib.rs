//! Stockpile: Single-User Inventory Tracking
//!
//! A flat-file inventory tracker: an in-memory record store that
//! re-persists the full collection after every mutation, plus the
//! line-oriented text format that keeps the backing file human-editable.

pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod store;
pub mod tooling;
pub mod views;
