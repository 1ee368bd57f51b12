use crate::content::Problem;
use crate::deck::components::{CardTheme, header_band, metric_card, style, text_card};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, GAP, card_row, font, palette};
use crate::ooxml::pptx::{Paragraph, Slide};

const STAT_HEIGHT: i64 = 1_463_040;

/// Problem: headline statistics above one card per pain point.
pub fn problem(section: &Problem) -> Slide {
    let mut slide = Slide::new("Problem");
    header_band(&mut slide, &section.title, &section.subtitle);

    let stat_theme = CardTheme {
        value: palette::DANGER,
        ..CardTheme::LIGHT
    };
    let frames = card_row(section.statistics.len(), BODY_TOP, STAT_HEIGHT);
    for (index, (metric, frame)) in section.statistics.iter().zip(frames).enumerate() {
        metric_card(
            &mut slide,
            &format!("Statistic Card {}", index + 1),
            frame,
            metric,
            stat_theme,
        );
    }

    let pains_top = BODY_TOP + STAT_HEIGHT + GAP;
    let frames = card_row(section.pain_points.len(), pains_top, BODY_BOTTOM - pains_top);
    for (index, (pain, frame)) in section.pain_points.iter().zip(frames).enumerate() {
        text_card(
            &mut slide,
            &format!("Pain Point {}", index + 1),
            frame,
            &pain.title,
            vec![Paragraph::new(&pain.description, style(font::BODY, palette::TEXT))],
            palette::DANGER,
        );
    }

    slide
}
