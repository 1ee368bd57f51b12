use super::place_table;
use crate::content::Competitive;
use crate::deck::components::{bullet_box, header_band};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, CONTENT_WIDTH, GAP, MARGIN};
use crate::ooxml::pptx::{Frame, Slide};

const TABLE_HEIGHT: i64 = 2_926_080;

/// Competitive landscape: check/cross comparison table and our advantages.
pub fn competitive(section: &Competitive) -> Slide {
    let mut slide = Slide::new("Competitive Landscape");
    header_band(&mut slide, &section.title, &section.subtitle);

    let table_id = place_table(
        &mut slide,
        "Comparison Table",
        Frame::new(MARGIN, BODY_TOP, CONTENT_WIDTH, TABLE_HEIGHT),
        &section.comparison,
    );
    let table_bottom = slide
        .shapes()
        .iter()
        .find(|s| s.id() == table_id)
        .map_or(BODY_TOP + TABLE_HEIGHT, |s| s.frame().bottom());

    let advantages_top = table_bottom + GAP;
    bullet_box(
        &mut slide,
        "Advantages",
        Frame::new(MARGIN, advantages_top, CONTENT_WIDTH, BODY_BOTTOM - advantages_top),
        section.advantages.iter().map(String::as_str),
    );

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;
    use crate::deck::layout::palette;

    #[test]
    fn test_sentinel_cells_are_coloured() {
        let slide = competitive(&bundled().competitive);
        let table = slide
            .shape_by_name("Comparison Table")
            .and_then(|s| s.as_table())
            .unwrap();

        let first_body = &table.rows[1];
        let check = first_body.iter().find(|c| c.text == "✓").unwrap();
        let cross = first_body.iter().find(|c| c.text == "✗").unwrap();
        assert_eq!(check.style.text.color.as_deref(), Some(palette::SUCCESS));
        assert_eq!(cross.style.text.color.as_deref(), Some(palette::DANGER));
    }
}
