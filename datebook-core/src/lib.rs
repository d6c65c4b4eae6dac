//! Core types and logic for datebook.
//!
//! This crate provides everything the terminal frontend calls into:
//! - `Item` and its enums (the persisted record)
//! - `recurrence` for deciding which items occur on a day
//! - `grid` for building the 6×7 month sheet
//! - `Store` for loading and appending the persisted collection

pub mod config;
pub mod datebook;
pub mod error;
pub mod grid;
pub mod item;
pub mod recurrence;
pub mod store;

// Re-export the item types and errors at crate root for convenience
pub use error::{DatebookError, DatebookResult};
pub use item::{Item, ItemKind, Repeat};
