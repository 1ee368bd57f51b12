//! Office Open XML (OOXML) writer.
//!
//! The module is organized into three layers:
//!
//! 1. **OPC Layer** (`opc`): ZIP container, content types and relationships
//! 2. **Charts** (`charts`): DrawingML chart parts
//! 3. **PresentationML** (`pptx`): presentation, slides, shapes, tables and
//!    the package writer that ties all parts together
pub mod charts;
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export error types
pub use error::{OoxmlError, Result};
