//! DrawingML chart parts.
//!
//! Charts embedded in slides are separate `chartN.xml` parts referenced from
//! a graphic frame. Data is written as literals (`c:strLit`/`c:numLit`), so no
//! embedded workbook is required to render them.

pub mod chart;
pub mod types;
pub mod writer;

pub use chart::{ChartSeries, ChartSpec};
pub use types::{ChartKind, LegendPosition};
pub use writer::{chart_to_xml, write_chart};
