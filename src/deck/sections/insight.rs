use super::place_table;
use crate::content::Insight;
use crate::deck::components::{bullet_box, caption, header_band, style};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, CARD_PADDING, GAP, font, palette, split_columns};
use crate::ooxml::pptx::{Frame, Geometry, Paragraph, ShapeStyle, Slide, TextFrame, VerticalAnchor};

const QUOTE_HEIGHT: i64 = 1_554_480;
const CAPTION_HEIGHT: i64 = 365_760;

/// Insight: customer quote and observations beside a before/after table.
pub fn insight(section: &Insight) -> Slide {
    let mut slide = Slide::new("Insight");
    header_band(&mut slide, &section.title, &section.subtitle);

    let (left, right) = split_columns(0.45, BODY_TOP, BODY_BOTTOM - BODY_TOP);

    slide.add_labeled_shape(
        "Quote",
        Frame::new(left.x, left.y, left.width, QUOTE_HEIGHT),
        ShapeStyle::filled(Geometry::RoundRect, palette::SURFACE),
        TextFrame::new()
            .with_paragraph(Paragraph::new(
                "\u{201C}",
                style(font::HERO, palette::PRIMARY).bold(),
            ))
            .with_paragraph(Paragraph::new(
                &section.quote,
                style(font::BODY + 2.0, palette::NAVY).italic(),
            ))
            .anchored(VerticalAnchor::Middle)
            .with_inset(CARD_PADDING)
            .shrink(),
    );

    let observations_top = left.y + QUOTE_HEIGHT + GAP;
    bullet_box(
        &mut slide,
        "Observations",
        Frame::new(left.x, observations_top, left.width, left.bottom() - observations_top),
        section.observations.iter().map(String::as_str),
    );

    caption(
        &mut slide,
        "Comparison Caption",
        Frame::new(right.x, right.y, right.width, CAPTION_HEIGHT),
        "Before and after",
    );
    place_table(
        &mut slide,
        "Comparison Table",
        Frame::new(
            right.x,
            right.y + CAPTION_HEIGHT,
            right.width,
            right.height - CAPTION_HEIGHT,
        ),
        &section.comparison,
    );

    slide
}
