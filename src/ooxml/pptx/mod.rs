//! PowerPoint (.pptx) presentation writer.
//!
//! Builds presentations in memory and serializes them as Office Open XML
//! PresentationML packages.
//!
//! - [`Presentation`]: ordered slides and the widescreen slide size
//! - [`Slide`]: shapes, tables and charts with an optional background
//! - [`write_package`]: OPC assembly of every part into .pptx bytes
//!
//! # Example
//!
//! ```rust
//! use scaleup_deck::ooxml::pptx::{
//!     Frame, Presentation, Slide, TextAlign, TextFrame, TextStyle, template, write_package,
//! };
//!
//! let mut pres = Presentation::new();
//! let slide = pres.push_slide(Slide::new("Title"));
//! slide.add_text_box(
//!     "Headline",
//!     Frame::inches(1.0, 1.0, 8.0, 1.0),
//!     TextFrame::single("Hello", TextStyle::new().size(32.0), TextAlign::Left),
//! );
//!
//! let bytes = write_package(&pres, template::DEFAULT_THEME_XML, chrono::Utc::now()).unwrap();
//! assert_eq!(&bytes[0..2], b"PK");
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use backgrounds::{GradientStop, SlideBackground};
pub use format::{Geometry, Outline, TextAlign, TextStyle, VerticalAnchor};
pub use package::write_package;
pub use writer::{
    CellStyle, Frame, Paragraph, Presentation, Shape, ShapeKind, ShapeStyle, Slide, Table,
    TableCell, TextFrame, TextRun, WIDESCREEN_HEIGHT, WIDESCREEN_WIDTH,
};
