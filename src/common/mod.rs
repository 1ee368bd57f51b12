//! Common types and utilities shared across the content model, the deck
//! builder and the OOXML writer.

// Submodule declarations
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
