use crate::content::Traction;
use crate::deck::charts::{traction_bar_chart, traction_line_chart};
use crate::deck::components::{CardTheme, header_band, metric_card};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, GAP, card_row, split_columns};
use crate::ooxml::pptx::Slide;

const METRIC_HEIGHT: i64 = 1_097_280;

/// Traction: headline metrics above a growth line chart and a bar chart.
pub fn traction(section: &Traction) -> Slide {
    let mut slide = Slide::new("Traction");
    header_band(&mut slide, &section.title, &section.subtitle);

    let frames = card_row(section.metrics.len(), BODY_TOP, METRIC_HEIGHT);
    for (index, (metric, frame)) in section.metrics.iter().zip(frames).enumerate() {
        metric_card(
            &mut slide,
            &format!("Metric Card {}", index + 1),
            frame,
            metric,
            CardTheme::LIGHT,
        );
    }

    let charts_top = BODY_TOP + METRIC_HEIGHT + GAP;
    let (left, right) = split_columns(0.5, charts_top, BODY_BOTTOM - charts_top);
    slide.add_chart("Growth Chart", left, traction_line_chart(&section.growth));
    slide.add_chart("Revenue Chart", right, traction_bar_chart(&section.growth));

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;
    use crate::ooxml::charts::ChartKind;

    #[test]
    fn test_traction_has_line_and_bar_charts() {
        let slide = traction(&bundled().traction);
        let kinds: Vec<ChartKind> = slide.charts().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChartKind::Line, ChartKind::Column]);
    }
}
