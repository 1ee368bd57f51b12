use super::place_table;
use crate::content::{Funding, TableData};
use crate::deck::charts::funding_doughnut_chart;
use crate::deck::components::{caption, header_band, style};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, CARD_PADDING, GAP, font, palette, split_columns};
use crate::ooxml::pptx::{
    Frame, Geometry, Paragraph, ShapeStyle, Slide, TextAlign, TextFrame, VerticalAnchor,
};

const ASK_HEIGHT: i64 = 1_188_720;
const CAPTION_HEIGHT: i64 = 365_760;

fn uses_table(section: &Funding) -> TableData {
    TableData {
        header: ["Category", "Amount", "Share", "Purpose"]
            .map(str::to_string)
            .to_vec(),
        rows: section
            .uses
            .iter()
            .map(|u| {
                vec![
                    u.category.clone(),
                    u.amount.clone(),
                    u.allocation.clone(),
                    u.purpose.clone(),
                ]
            })
            .collect(),
    }
}

fn milestones_table(section: &Funding) -> TableData {
    TableData {
        header: ["Milestone", "Today", "Target", "By"]
            .map(str::to_string)
            .to_vec(),
        rows: section
            .milestones
            .iter()
            .map(|m| {
                vec![
                    m.metric.clone(),
                    m.now.clone(),
                    m.target.clone(),
                    m.timeline.clone(),
                ]
            })
            .collect(),
    }
}

/// Funding: the ask, an allocation doughnut, use of funds and the
/// milestones the round buys.
pub fn funding(section: &Funding) -> Slide {
    let mut slide = Slide::new("Funding");
    header_band(&mut slide, &section.title, &section.subtitle);

    let (left, right) = split_columns(0.38, BODY_TOP, BODY_BOTTOM - BODY_TOP);

    slide.add_labeled_shape(
        "Ask Card",
        Frame::new(left.x, left.y, left.width, ASK_HEIGHT),
        ShapeStyle::filled(Geometry::RoundRect, palette::NAVY),
        TextFrame::new()
            .with_paragraph(
                Paragraph::new(&section.ask, style(font::HERO - 8.0, palette::WHITE).bold())
                    .aligned(TextAlign::Center),
            )
            .with_paragraph(
                Paragraph::new(&section.instrument, style(font::BODY, palette::ON_DARK_MUTED))
                    .aligned(TextAlign::Center),
            )
            .anchored(VerticalAnchor::Middle)
            .with_inset(CARD_PADDING),
    );

    let chart_top = left.y + ASK_HEIGHT + GAP;
    slide.add_chart(
        "Use of Funds Chart",
        Frame::new(left.x, chart_top, left.width, left.bottom() - chart_top),
        funding_doughnut_chart(&section.uses),
    );

    let half = (right.height - GAP) / 2;
    for (top, label, name, data) in [
        (right.y, "Use of funds", "Use of Funds Table", uses_table(section)),
        (right.y + half + GAP, "Milestones", "Milestones Table", milestones_table(section)),
    ] {
        caption(
            &mut slide,
            &format!("{name} Caption"),
            Frame::new(right.x, top, right.width, CAPTION_HEIGHT),
            label,
        );
        place_table(
            &mut slide,
            name,
            Frame::new(right.x, top + CAPTION_HEIGHT, right.width, half - CAPTION_HEIGHT),
            &data,
        );
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;
    use crate::ooxml::charts::ChartKind;

    #[test]
    fn test_funding_doughnut_and_tables() {
        let section = &bundled().funding;
        let slide = funding(section);

        let chart = slide.charts().next().unwrap();
        assert_eq!(chart.kind, ChartKind::Doughnut);
        assert_eq!(chart.category_count(), section.uses.len());

        let uses = slide
            .shape_by_name("Use of Funds Table")
            .and_then(|s| s.as_table())
            .unwrap();
        assert_eq!(uses.row_count(), section.uses.len() + 1);
        assert!(slide.shape_by_name("Ask Card").unwrap().text().starts_with(&section.ask));
    }
}
