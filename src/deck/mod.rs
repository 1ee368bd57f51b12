//! Deck construction: content records to a thirteen-slide presentation.
//!
//! [`build_deck`] runs the section constructors in deck order. Everything
//! here is synchronous and free of I/O; serialization is the export engine's
//! job.

pub mod charts;
pub mod components;
pub mod layout;
pub mod numeric;
pub mod sections;
pub mod table;

use crate::common::error::Result;
use crate::content::DeckContent;
use crate::export::Capability;
use crate::ooxml::pptx::{Presentation, Slide};

/// Slide names in deck order.
pub const SLIDE_ORDER: [&str; 13] = [
    "Cover",
    "Executive Summary",
    "Problem",
    "Solution",
    "Insight",
    "Traction",
    "Business Model",
    "Unit Economics",
    "Competitive Landscape",
    "Roadmap",
    "Team",
    "Funding",
    "Contact",
];

/// Build the full deck from `content`.
///
/// The content is validated first, so a malformed table or chart figure
/// fails here rather than producing a mis-rendered slide.
pub fn build_deck(content: &DeckContent, capability: &Capability) -> Result<Presentation> {
    content.validate()?;

    let mut pres = capability.new_presentation();
    pres.set_title(&format!("{} Investor Deck", content.company.name));
    pres.set_author(&content.company.name);

    let slides: [Slide; 13] = [
        sections::cover(&content.company),
        sections::exec_summary(&content.exec_summary),
        sections::problem(&content.problem),
        sections::solution(&content.solution),
        sections::insight(&content.insight),
        sections::traction(&content.traction),
        sections::business_model(&content.business_model),
        sections::unit_economics(&content.unit_economics),
        sections::competitive(&content.competitive),
        sections::roadmap(&content.roadmap),
        sections::team(&content.team),
        sections::funding(&content.funding),
        sections::contact(&content.contact),
    ];

    for slide in slides {
        tracing::debug!(
            slide = slide.name(),
            shapes = slide.shape_count(),
            "built slide"
        );
        pres.push_slide(slide);
    }

    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::Error;
    use crate::content::bundled;
    use crate::ooxml::pptx::ShapeKind;

    fn deck() -> Presentation {
        build_deck(bundled(), &Capability::bundled()).unwrap()
    }

    #[test]
    fn test_thirteen_slides_in_order() {
        let pres = deck();
        let names: Vec<&str> = pres.slides().iter().map(Slide::name).collect();
        assert_eq!(names, SLIDE_ORDER);
    }

    #[test]
    fn test_header_band_on_content_slides_only() {
        let pres = deck();
        for slide in pres.slides() {
            let has_band = slide.shape_by_name("Header Accent").is_some();
            let is_bookend = matches!(slide.name(), "Cover" | "Contact");
            assert_eq!(has_band, !is_bookend, "{}", slide.name());
            assert_eq!(
                slide.background().is_some_and(|bg| bg.is_gradient()),
                is_bookend,
                "{}",
                slide.name()
            );
        }
    }

    #[test]
    fn test_chart_bearing_slides() {
        let pres = deck();
        let with_charts: Vec<(&str, usize)> = pres
            .slides()
            .iter()
            .map(|s| (s.name(), s.charts().count()))
            .filter(|&(_, n)| n > 0)
            .collect();
        assert_eq!(
            with_charts,
            vec![("Traction", 2), ("Business Model", 1), ("Funding", 1)]
        );
        assert_eq!(pres.chart_count(), 4);
    }

    #[test]
    fn test_all_shapes_on_page() {
        let pres = deck();
        for slide in pres.slides() {
            for shape in slide.shapes() {
                let frame = shape.frame();
                assert!(frame.x >= 0 && frame.y >= 0, "{}", shape.name());
                assert!(frame.right() <= pres.slide_width(), "{}", shape.name());
                assert!(frame.bottom() <= pres.slide_height(), "{}", shape.name());
                if let ShapeKind::Table(table) = shape.kind() {
                    assert!(table.column_widths.iter().sum::<i64>() <= frame.width);
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = deck();
        let b = deck();
        for (x, y) in a.slides().iter().zip(b.slides()) {
            assert_eq!(x.shapes(), y.shapes());
        }
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let mut content = bundled().clone();
        content.traction.growth.rows[0][1] = "lots".to_string();
        let err = build_deck(&content, &Capability::bundled()).unwrap_err();
        assert!(matches!(err, Error::InvalidContent(_)));
    }
}
