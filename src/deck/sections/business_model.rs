use super::place_table;
use crate::content::BusinessModel;
use crate::deck::charts::revenue_pie_chart;
use crate::deck::components::{caption, header_band, style};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, GAP, font, palette, split_columns};
use crate::ooxml::pptx::{Frame, Paragraph, Slide, TextFrame};

const CAPTION_HEIGHT: i64 = 365_760;
const STREAMS_HEIGHT: i64 = 2_103_120;

/// Business model: revenue-mix pie beside the stream list and pricing table.
pub fn business_model(section: &BusinessModel) -> Slide {
    let mut slide = Slide::new("Business Model");
    header_band(&mut slide, &section.title, &section.subtitle);

    let (left, right) = split_columns(0.42, BODY_TOP, BODY_BOTTOM - BODY_TOP);

    caption(
        &mut slide,
        "Revenue Mix Caption",
        Frame::new(left.x, left.y, left.width, CAPTION_HEIGHT),
        "Revenue mix",
    );
    slide.add_chart(
        "Revenue Mix Chart",
        Frame::new(left.x, left.y + CAPTION_HEIGHT, left.width, left.height - CAPTION_HEIGHT),
        revenue_pie_chart(&section.streams),
    );

    let mut streams = TextFrame::new();
    for stream in &section.streams {
        streams = streams
            .with_paragraph(
                Paragraph::new(&stream.name, style(font::HEADING, palette::NAVY).bold())
                    .with_run(
                        format!("  {} · {}", stream.price, stream.share),
                        style(font::BODY, palette::PRIMARY).bold(),
                    ),
            )
            .with_paragraph(
                Paragraph::new(&stream.description, style(font::SMALL, palette::MUTED)).spaced(8.0),
            );
    }
    slide.add_text_box(
        "Revenue Streams",
        Frame::new(right.x, right.y, right.width, STREAMS_HEIGHT),
        streams.with_inset(0).shrink(),
    );

    let pricing_top = right.y + STREAMS_HEIGHT + GAP;
    place_table(
        &mut slide,
        "Pricing Table",
        Frame::new(right.x, pricing_top, right.width, right.bottom() - pricing_top),
        &section.pricing,
    );

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;
    use crate::ooxml::charts::ChartKind;

    #[test]
    fn test_business_model_pie() {
        let section = &bundled().business_model;
        let slide = business_model(section);

        let pie = slide.charts().next().unwrap();
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.category_count(), section.streams.len());
        assert!(slide.shape_by_name("Pricing Table").is_some());
    }
}
