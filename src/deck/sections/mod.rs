//! One constructor per deck section.
//!
//! Each constructor is a pure function of its section record and the layout
//! constants, and returns a finished [`Slide`].

mod business_model;
mod competitive;
mod contact;
mod cover;
mod exec_summary;
mod funding;
mod insight;
mod problem;
mod roadmap;
mod solution;
mod team;
mod traction;
mod unit_economics;

pub use business_model::business_model;
pub use competitive::competitive;
pub use contact::contact;
pub use cover::cover;
pub use exec_summary::exec_summary;
pub use funding::funding;
pub use insight::insight;
pub use problem::problem;
pub use roadmap::roadmap;
pub use solution::solution;
pub use team::team;
pub use traction::traction;
pub use unit_economics::unit_economics;

use super::table::build_table;
use crate::content::TableData;
use crate::ooxml::pptx::{Frame, Slide};

/// Tallest table row (0.42").
const MAX_ROW_HEIGHT: i64 = 384_048;

/// Place a table built from `data` at the top of `frame`, shrinking row
/// height so every row fits.
pub(crate) fn place_table(slide: &mut Slide, name: &str, frame: Frame, data: &TableData) -> u32 {
    let row_count = data.rows.len() as i64 + 1;
    let row_height = (frame.height / row_count).min(MAX_ROW_HEIGHT);
    let table = build_table(data, frame.width, row_height);
    slide.add_table(
        name,
        Frame::new(frame.x, frame.y, frame.width, row_height * row_count),
        table,
    )
}
