use crate::content::ExecSummary;
use crate::deck::components::{CardTheme, bullet_box, header_band, metric_card, style};
use crate::deck::layout::{
    BODY_BOTTOM, BODY_TOP, CONTENT_WIDTH, GAP, MARGIN, card_row, font, palette,
};
use crate::ooxml::pptx::{Frame, Slide, TextAlign, TextFrame};

const SUMMARY_HEIGHT: i64 = 822_960;
const CARD_HEIGHT: i64 = 1_280_160;

/// Executive summary: one-paragraph pitch, highlight cards, key points.
pub fn exec_summary(section: &ExecSummary) -> Slide {
    let mut slide = Slide::new("Executive Summary");
    header_band(&mut slide, &section.title, &section.subtitle);

    slide.add_text_box(
        "Summary",
        Frame::new(MARGIN, BODY_TOP, CONTENT_WIDTH, SUMMARY_HEIGHT),
        TextFrame::single(&section.summary, style(font::BODY + 2.0, palette::TEXT), TextAlign::Left)
            .with_inset(0)
            .shrink(),
    );

    let cards_top = BODY_TOP + SUMMARY_HEIGHT + GAP;
    let frames = card_row(section.highlights.len(), cards_top, CARD_HEIGHT);
    for (index, (metric, frame)) in section.highlights.iter().zip(frames).enumerate() {
        metric_card(
            &mut slide,
            &format!("Highlight Card {}", index + 1),
            frame,
            metric,
            CardTheme::LIGHT,
        );
    }

    let points_top = cards_top + CARD_HEIGHT + GAP;
    bullet_box(
        &mut slide,
        "Key Points",
        Frame::new(MARGIN, points_top, CONTENT_WIDTH, BODY_BOTTOM - points_top),
        section.key_points.iter().map(String::as_str),
    );

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;

    #[test]
    fn test_exec_summary_layout() {
        let section = &bundled().exec_summary;
        let slide = exec_summary(section);

        assert_eq!(slide.shapes_named("Highlight Card ").count(), section.highlights.len());
        let points = slide.shape_by_name("Key Points").unwrap();
        assert_eq!(points.text().lines().count(), section.key_points.len());
        assert!(points.frame().bottom() <= BODY_BOTTOM);
    }
}
