use super::place_table;
use crate::content::UnitEconomics;
use crate::deck::components::{CardTheme, caption, header_band, metric_card};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, GAP, card_row, split_columns};
use crate::ooxml::pptx::{Frame, Slide};

const CARD_HEIGHT: i64 = 1_097_280;
const CAPTION_HEIGHT: i64 = 365_760;

/// Unit economics: highlight cards above the CAC and LTV breakdown tables.
pub fn unit_economics(section: &UnitEconomics) -> Slide {
    let mut slide = Slide::new("Unit Economics");
    header_band(&mut slide, &section.title, &section.subtitle);

    let frames = card_row(section.highlights.len(), BODY_TOP, CARD_HEIGHT);
    for (index, (metric, frame)) in section.highlights.iter().zip(frames).enumerate() {
        metric_card(
            &mut slide,
            &format!("Highlight Card {}", index + 1),
            frame,
            metric,
            CardTheme::LIGHT,
        );
    }

    let tables_top = BODY_TOP + CARD_HEIGHT + GAP;
    let (left, right) = split_columns(0.5, tables_top, BODY_BOTTOM - tables_top);
    for (column, label, name, data) in [
        (left, "Customer acquisition cost", "CAC Table", &section.cac),
        (right, "Lifetime value", "LTV Table", &section.ltv),
    ] {
        caption(
            &mut slide,
            &format!("{name} Caption"),
            Frame::new(column.x, column.y, column.width, CAPTION_HEIGHT),
            label,
        );
        place_table(
            &mut slide,
            name,
            Frame::new(
                column.x,
                column.y + CAPTION_HEIGHT,
                column.width,
                column.height - CAPTION_HEIGHT,
            ),
            data,
        );
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;

    #[test]
    fn test_both_tables_present() {
        let section = &bundled().unit_economics;
        let slide = unit_economics(section);

        let cac = slide.shape_by_name("CAC Table").and_then(|s| s.as_table()).unwrap();
        let ltv = slide.shape_by_name("LTV Table").and_then(|s| s.as_table()).unwrap();
        assert_eq!(cac.row_count(), section.cac.rows.len() + 1);
        assert_eq!(ltv.column_count(), section.ltv.header.len());
        assert!(
            slide.shape_by_name("CAC Table").unwrap().frame().right()
                < slide.shape_by_name("LTV Table").unwrap().frame().x
        );
    }
}
