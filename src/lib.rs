//! Core logic for LoveNote, a greeting-card composition app.
//!
//! This crate owns the message history (a JSON-file-backed store with
//! create / mark-sent / delete operations), the static template and
//! pickup-line catalogs, and deterministic love-letter generation. The UI
//! layer owns all navigation and presentation; it drives the
//! [`store::MessageStore`] and plugs into the trait seams in [`ops::send`].

pub mod catalog;
pub mod io;
pub mod model;
pub mod ops;
pub mod store;
