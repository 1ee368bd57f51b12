//! Presentation writer components for PPTX.

pub mod pres;
pub(crate) mod relmap;
pub mod shape;
pub mod slide;
pub mod table;

// Re-export main types
pub use pres::{Presentation, WIDESCREEN_HEIGHT, WIDESCREEN_WIDTH};
pub use shape::{Frame, Paragraph, Shape, ShapeKind, ShapeStyle, TextFrame, TextRun};
pub use slide::Slide;
pub use table::{CellStyle, Table, TableCell};
