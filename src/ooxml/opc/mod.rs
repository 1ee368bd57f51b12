//! Open Packaging Conventions (OPC) writer.
//!
//! An OPC package is a ZIP archive holding XML parts, a `[Content_Types].xml`
//! map and per-part relationship files.

pub mod constants;
pub mod pkgwriter;
pub mod rel;

pub use pkgwriter::PackageWriter;
pub use rel::Relationships;
