//! Reusable slide fragments: header band, metric cards and text helpers.

use super::layout::{
    CARD_PADDING, CONTENT_WIDTH, HEADER_HEIGHT, HEADER_TOP, MARGIN, font, palette,
};
use crate::content::MetricHighlight;
use crate::ooxml::pptx::{
    Frame, Geometry, GradientStop, Paragraph, ShapeStyle, Slide, SlideBackground, TextAlign,
    TextFrame, TextStyle, VerticalAnchor,
};

/// Text style in the deck font.
#[inline]
pub fn style(size: f64, color: &str) -> TextStyle {
    TextStyle::new().font(font::FACE).size(size).color(color)
}

/// Title, optional subtitle and accent bar across the top of a content slide.
pub fn header_band(slide: &mut Slide, title: &str, subtitle: &str) {
    let accent_height = HEADER_HEIGHT / 2;
    slide.add_shape(
        "Header Accent",
        Frame::new(MARGIN, HEADER_TOP + 45_720, 54_864, accent_height - 91_440),
        ShapeStyle::filled(Geometry::Rect, palette::PRIMARY),
    );

    let text_left = MARGIN + 182_880;
    let text_width = CONTENT_WIDTH - 182_880;
    slide.add_text_box(
        "Title",
        Frame::new(text_left, HEADER_TOP, text_width, accent_height),
        TextFrame::single(
            title,
            style(font::TITLE, palette::NAVY).bold(),
            TextAlign::Left,
        )
        .anchored(VerticalAnchor::Middle)
        .with_inset(0),
    );

    if !subtitle.is_empty() {
        slide.add_text_box(
            "Subtitle",
            Frame::new(
                text_left,
                HEADER_TOP + accent_height,
                text_width,
                HEADER_HEIGHT - accent_height,
            ),
            TextFrame::single(subtitle, style(font::SUBTITLE, palette::MUTED), TextAlign::Left)
                .anchored(VerticalAnchor::Top)
                .with_inset(0),
        );
    }

    slide.add_shape(
        "Header Rule",
        Frame::new(MARGIN, HEADER_TOP + HEADER_HEIGHT, CONTENT_WIDTH, 9_525),
        ShapeStyle::filled(Geometry::Rect, palette::BORDER),
    );
}

/// Full-bleed gradient used by the cover and closing slides.
pub fn hero_background() -> SlideBackground {
    SlideBackground::linear_gradient(
        135.0,
        vec![
            GradientStop::new(0.0, palette::NAVY),
            GradientStop::new(0.6, palette::INDIGO),
            GradientStop::new(1.0, palette::PRIMARY),
        ],
    )
}

/// Colours of a metric card.
#[derive(Debug, Clone, Copy)]
pub struct CardTheme {
    pub fill: &'static str,
    pub outline: Option<&'static str>,
    pub value: &'static str,
    pub label: &'static str,
}

impl CardTheme {
    /// Light card on a white slide.
    pub const LIGHT: Self = Self {
        fill: palette::SURFACE,
        outline: Some(palette::BORDER),
        value: palette::PRIMARY,
        label: palette::TEXT,
    };

    /// Translucent-looking card on a dark gradient.
    pub const DARK: Self = Self {
        fill: palette::INDIGO,
        outline: Some(palette::PRIMARY),
        value: palette::WHITE,
        label: palette::ON_DARK_MUTED,
    };

    fn shape_style(&self) -> ShapeStyle {
        let base = ShapeStyle::filled(Geometry::RoundRect, self.fill);
        match self.outline {
            Some(color) => base.with_outline(color, 1.0),
            None => base,
        }
    }
}

/// A rounded card showing a metric value, its label and optional detail.
pub fn metric_card(
    slide: &mut Slide,
    name: &str,
    frame: Frame,
    metric: &MetricHighlight,
    theme: CardTheme,
) -> u32 {
    let mut text = TextFrame::new()
        .with_paragraph(
            Paragraph::new(&metric.value, style(font::METRIC, theme.value).bold())
                .aligned(TextAlign::Center),
        )
        .with_paragraph(
            Paragraph::new(&metric.label, style(font::SMALL, theme.label).bold())
                .aligned(TextAlign::Center),
        );
    if let Some(ref detail) = metric.detail {
        text = text.with_paragraph(
            Paragraph::new(detail, style(font::CAPTION, theme.label)).aligned(TextAlign::Center),
        );
    }

    slide.add_labeled_shape(
        name,
        frame,
        theme.shape_style(),
        text.anchored(VerticalAnchor::Middle)
            .with_inset(CARD_PADDING)
            .shrink(),
    )
}

/// A plain rounded card with a bold heading followed by body paragraphs.
pub fn text_card(
    slide: &mut Slide,
    name: &str,
    frame: Frame,
    heading: &str,
    body: Vec<Paragraph>,
    accent: &str,
) -> u32 {
    let mut text = TextFrame::new().with_paragraph(
        Paragraph::new(heading, style(font::HEADING, accent).bold()).spaced(6.0),
    );
    for paragraph in body {
        text = text.with_paragraph(paragraph);
    }

    slide.add_labeled_shape(
        name,
        frame,
        ShapeStyle::filled(Geometry::RoundRect, palette::WHITE).with_outline(palette::BORDER, 1.0),
        text.with_inset(CARD_PADDING).shrink(),
    )
}

/// Bulleted paragraphs in body style.
pub fn bullets<'a>(
    items: impl IntoIterator<Item = &'a str>,
    size: f64,
    color: &str,
) -> Vec<Paragraph> {
    items
        .into_iter()
        .map(|item| Paragraph::new(item, style(size, color)).bulleted().spaced(4.0))
        .collect()
}

/// A text box holding bulleted items.
pub fn bullet_box<'a>(
    slide: &mut Slide,
    name: &str,
    frame: Frame,
    items: impl IntoIterator<Item = &'a str>,
) -> u32 {
    let mut text = TextFrame::new();
    for paragraph in bullets(items, font::BODY, palette::TEXT) {
        text = text.with_paragraph(paragraph);
    }
    slide.add_text_box(name, frame, text.shrink())
}

/// A small bold caption above a table or chart.
pub fn caption(slide: &mut Slide, name: &str, frame: Frame, text: &str) -> u32 {
    slide.add_text_box(
        name,
        frame,
        TextFrame::single(text, style(font::HEADING, palette::NAVY).bold(), TextAlign::Left)
            .anchored(VerticalAnchor::Bottom)
            .with_inset(0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_band_without_subtitle() {
        let mut slide = Slide::new("Team");
        header_band(&mut slide, "Team", "");
        assert!(slide.shape_by_name("Title").is_some());
        assert!(slide.shape_by_name("Subtitle").is_none());
    }

    #[test]
    fn test_header_band_stays_in_strip() {
        let mut slide = Slide::new("Problem");
        header_band(&mut slide, "The Problem", "Why now");
        for shape in slide.shapes() {
            let frame = shape.frame();
            assert!(frame.y >= HEADER_TOP);
            assert!(frame.bottom() <= HEADER_TOP + HEADER_HEIGHT + 9_525);
        }
    }

    #[test]
    fn test_metric_card_text() {
        let mut slide = Slide::new("Cover");
        let metric = MetricHighlight::new("MRR", "₹6L", Some("Dec 2024"));
        metric_card(&mut slide, "Metric Card 1", Frame::default(), &metric, CardTheme::LIGHT);

        let text = slide.shapes()[0].text();
        assert_eq!(text, "₹6L\nMRR\nDec 2024");
    }
}
