use crate::common::unit::inches_to_emu;
use crate::content::Company;
use crate::deck::components::{CardTheme, hero_background, metric_card, style};
use crate::deck::layout::{CONTENT_WIDTH, MARGIN, at_inches, card_row, font, palette};
use crate::ooxml::pptx::{Frame, Geometry, ShapeStyle, Slide, TextAlign, TextFrame, VerticalAnchor};

/// Cover: brand, tagline, mission and one card per headline metric.
pub fn cover(company: &Company) -> Slide {
    let mut slide = Slide::new("Cover");
    slide.set_background(hero_background());

    slide.add_labeled_shape(
        "Stage Badge",
        at_inches(0.5, 0.6, 2.2, 0.4),
        ShapeStyle::filled(Geometry::RoundRect, palette::PRIMARY),
        TextFrame::single(
            &company.stage,
            style(font::SMALL, palette::WHITE).bold(),
            TextAlign::Center,
        )
        .anchored(VerticalAnchor::Middle)
        .with_inset(0),
    );

    slide.add_text_box(
        "Company Name",
        Frame::new(MARGIN, inches_to_emu(1.3), CONTENT_WIDTH, inches_to_emu(1.1)),
        TextFrame::single(
            &company.name,
            style(font::HERO, palette::WHITE).bold(),
            TextAlign::Left,
        )
        .anchored(VerticalAnchor::Bottom)
        .with_inset(0),
    );

    slide.add_text_box(
        "Tagline",
        Frame::new(MARGIN, inches_to_emu(2.5), CONTENT_WIDTH, inches_to_emu(0.6)),
        TextFrame::single(
            &company.tagline,
            style(font::TITLE - 6.0, palette::ON_DARK_MUTED),
            TextAlign::Left,
        )
        .with_inset(0),
    );

    slide.add_text_box(
        "Mission",
        Frame::new(MARGIN, inches_to_emu(3.2), CONTENT_WIDTH * 3 / 4, inches_to_emu(1.0)),
        TextFrame::single(
            &company.mission,
            style(font::BODY + 2.0, palette::WHITE).italic(),
            TextAlign::Left,
        )
        .with_inset(0)
        .shrink(),
    );

    let frames = card_row(
        company.metrics.len(),
        inches_to_emu(4.75),
        inches_to_emu(1.6),
    );
    for (index, (metric, frame)) in company.metrics.iter().zip(frames).enumerate() {
        metric_card(
            &mut slide,
            &format!("Metric Card {}", index + 1),
            frame,
            metric,
            CardTheme::DARK,
        );
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MetricHighlight, bundled};

    #[test]
    fn test_three_metrics_make_three_equal_cards() {
        let mut company = bundled().company.clone();
        company.metrics = vec![
            MetricHighlight::new("A", "1", None),
            MetricHighlight::new("B", "2", None),
            MetricHighlight::new("C", "3", None),
        ];
        let slide = cover(&company);

        let cards: Vec<Frame> = slide.shapes_named("Metric Card ").map(|s| s.frame()).collect();
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|f| f.width == cards[0].width && f.y == cards[0].y));

        let gaps: Vec<i64> = cards.windows(2).map(|w| w[1].x - w[0].right()).collect();
        assert_eq!(gaps[0], gaps[1]);

        let spanned = cards[2].right() - cards[0].x;
        assert!((CONTENT_WIDTH - spanned).abs() < 3);
    }

    #[test]
    fn test_cover_has_gradient_and_no_header_band() {
        let slide = cover(&bundled().company);
        assert!(slide.background().is_some_and(|bg| bg.is_gradient()));
        assert!(slide.shape_by_name("Title").is_none());
        assert!(slide.texts().iter().any(|t| t == "ScaleUp"));
    }
}
