use crate::content::Solution;
use crate::deck::components::{bullets, header_band, style, text_card};
use crate::deck::layout::{BODY_BOTTOM, BODY_TOP, card_row, font, palette};
use crate::ooxml::pptx::{Paragraph, Slide};

/// Solution: one card per product module with outcome, bullets and the cost
/// of going without it.
pub fn solution(section: &Solution) -> Slide {
    let mut slide = Slide::new("Solution");
    header_band(&mut slide, &section.title, &section.subtitle);

    let frames = card_row(section.modules.len(), BODY_TOP, BODY_BOTTOM - BODY_TOP);
    for (index, (module, frame)) in section.modules.iter().zip(frames).enumerate() {
        let accent = palette::SERIES[index % palette::SERIES.len()];

        let mut body = vec![
            Paragraph::new(&module.outcome, style(font::BODY, palette::TEXT).bold()).spaced(6.0),
        ];
        body.extend(bullets(
            module.bullets.iter().map(String::as_str),
            font::SMALL,
            palette::TEXT,
        ));
        body.push(
            Paragraph::new("Without it: ", style(font::CAPTION, palette::MUTED).bold()).with_run(
                &module.failure_if_missing,
                style(font::CAPTION, palette::MUTED).italic(),
            ),
        );

        text_card(
            &mut slide,
            &format!("Module Card {}", index + 1),
            frame,
            &module.name,
            body,
            accent,
        );
    }

    slide
}
