use crate::content::{Roadmap, TimelineMilestone};
use crate::deck::components::{header_band, style};
use crate::deck::layout::{
    BODY_BOTTOM, BODY_TOP, CARD_PADDING, CONTENT_WIDTH, HIGHLIGHT_BUDGET, MARGIN, MAX_HIGHLIGHTS,
    card_row, font, palette, truncate,
};
use crate::ooxml::pptx::{Frame, Geometry, Paragraph, ShapeStyle, Slide, TextFrame};

/// Diameter of a timeline marker (0.24").
const MARKER: i64 = 219_456;
/// Space reserved above the cards for the timeline rule.
const RULE_BAND: i64 = 457_200;

fn card_text(milestone: &TimelineMilestone, accent: &str) -> TextFrame {
    let mut text = TextFrame::new()
        .with_paragraph(Paragraph::new(
            &milestone.quarter,
            style(font::HEADING + 3.0, accent).bold(),
        ))
        .with_paragraph(
            Paragraph::new(&milestone.theme, style(font::BODY, palette::NAVY).bold()).spaced(6.0),
        );

    for (label, value) in [
        ("Users", &milestone.users),
        ("Retention", &milestone.retention),
        ("Revenue", &milestone.revenue),
    ] {
        text = text.with_paragraph(
            Paragraph::new(format!("{label}: "), style(font::SMALL, palette::MUTED))
                .with_run(value.as_str(), style(font::SMALL, palette::TEXT).bold()),
        );
    }

    let mut highlights = milestone.highlights.iter().take(MAX_HIGHLIGHTS).peekable();
    if highlights.peek().is_some() {
        text = text.with_paragraph(Paragraph::new("", style(font::CAPTION, palette::TEXT)));
    }
    for highlight in highlights {
        text = text.with_paragraph(
            Paragraph::new(
                truncate(highlight, HIGHLIGHT_BUDGET),
                style(font::SMALL, palette::TEXT),
            )
            .bulleted()
            .spaced(3.0),
        );
    }

    if let Some(ref note) = milestone.funding_note {
        text = text.with_paragraph(Paragraph::new(
            note,
            style(font::CAPTION, palette::ACCENT).italic().bold(),
        ));
    }

    text.with_inset(CARD_PADDING).shrink()
}

/// Roadmap: a timeline rule with one equally sized card per milestone.
pub fn roadmap(section: &Roadmap) -> Slide {
    let mut slide = Slide::new("Roadmap");
    header_band(&mut slide, &section.title, &section.subtitle);

    let rule_y = BODY_TOP + RULE_BAND / 2;
    slide.add_shape(
        "Timeline Rule",
        Frame::new(MARGIN, rule_y - 12_700, CONTENT_WIDTH, 25_400),
        ShapeStyle::filled(Geometry::Rect, palette::BORDER),
    );

    let cards_top = BODY_TOP + RULE_BAND;
    let frames = card_row(section.timeline.len(), cards_top, BODY_BOTTOM - cards_top);
    for (index, (milestone, frame)) in section.timeline.iter().zip(frames).enumerate() {
        let accent = palette::SERIES[index % palette::SERIES.len()];

        slide.add_shape(
            format!("Milestone Marker {}", index + 1),
            Frame::new(
                frame.x + frame.width / 2 - MARKER / 2,
                rule_y - MARKER / 2,
                MARKER,
                MARKER,
            ),
            ShapeStyle::filled(Geometry::Ellipse, accent),
        );

        slide.add_labeled_shape(
            format!("Roadmap Card {}", index + 1),
            frame,
            ShapeStyle::filled(Geometry::RoundRect, palette::WHITE).with_outline(accent, 1.5),
            card_text(milestone, accent),
        );
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;
    use crate::ooxml::pptx::ShapeKind;

    fn milestone(quarter: &str, highlights: &[&str]) -> TimelineMilestone {
        TimelineMilestone {
            quarter: quarter.to_string(),
            theme: "Grow".to_string(),
            users: "1,000".to_string(),
            retention: "80%".to_string(),
            revenue: "₹5L".to_string(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
            funding_note: None,
        }
    }

    fn card_paragraphs(slide: &Slide, name: &str) -> Vec<String> {
        match slide.shape_by_name(name).map(|s| s.kind()) {
            Some(ShapeKind::Auto { text: Some(text), .. }) => {
                text.paragraphs.iter().map(|p| p.text()).collect()
            },
            _ => panic!("{name} is not a text card"),
        }
    }

    #[test]
    fn test_four_milestones_make_four_equal_cards() {
        let long = "A highlight that is far longer than the budget allows on a card";
        let section = Roadmap {
            title: "Roadmap".to_string(),
            subtitle: String::new(),
            timeline: vec![
                milestone("Q1", &["one"]),
                milestone("Q2", &[long, "two", "three", "four", "five"]),
                milestone("Q3", &[]),
                milestone("Q4", &["a", "b"]),
            ],
        };
        let slide = roadmap(&section);

        let cards: Vec<Frame> = slide.shapes_named("Roadmap Card ").map(|s| s.frame()).collect();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|f| f.width == cards[0].width
            && f.height == cards[0].height
            && f.y == cards[0].y));

        let paragraphs = card_paragraphs(&slide, "Roadmap Card 2");
        assert_eq!(paragraphs[0], "Q2");
        assert_eq!(paragraphs[1], "Grow");
        assert_eq!(paragraphs[2], "Users: 1,000");
        assert_eq!(paragraphs[3], "Retention: 80%");
        assert_eq!(paragraphs[4], "Revenue: ₹5L");

        let bullets = &paragraphs[6..];
        assert_eq!(bullets.len(), MAX_HIGHLIGHTS);
        assert_eq!(bullets[0].chars().count(), HIGHLIGHT_BUDGET);
        assert!(bullets[0].ends_with('…'));
        assert_eq!(bullets[1], "two");
    }

    #[test]
    fn test_funding_note_is_shown() {
        let slide = roadmap(&bundled().roadmap);
        let first = slide.shape_by_name("Roadmap Card 1").unwrap().text();
        assert!(first.ends_with("Seed extension closes"));
        assert_eq!(slide.shapes_named("Milestone Marker ").count(), 4);
    }
}
