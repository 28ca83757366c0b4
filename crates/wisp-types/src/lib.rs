//! Foundation types for the wisp viewer.
//!
//! This crate contains the error taxonomy shared by every wisp crate.
//! Everything else (transport, parsing, layout) lives further up the
//! dependency chain.

pub mod error;

pub use error::{Result, WispError};
