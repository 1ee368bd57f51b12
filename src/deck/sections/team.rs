use crate::content::Team;
use crate::deck::components::{bullets, header_band, style};
use crate::deck::layout::{
    BODY_BOTTOM, BODY_TOP, CARD_PADDING, CONTENT_WIDTH, GAP, MARGIN, card_row, font, palette,
};
use crate::ooxml::pptx::{
    Frame, Geometry, Paragraph, ShapeStyle, Slide, TextAlign, TextFrame, VerticalAnchor,
};

const NOTE_HEIGHT: i64 = 457_200;
/// Diameter of the initials avatar (1.0").
const AVATAR: i64 = 914_400;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Team: one card per founder with an initials avatar, and the hiring note.
pub fn team(section: &Team) -> Slide {
    let mut slide = Slide::new("Team");
    header_band(&mut slide, &section.title, &section.subtitle);

    let cards_bottom = if section.hiring_note.is_empty() {
        BODY_BOTTOM
    } else {
        BODY_BOTTOM - NOTE_HEIGHT - GAP
    };

    let frames = card_row(section.founders.len(), BODY_TOP, cards_bottom - BODY_TOP);
    for (index, (founder, frame)) in section.founders.iter().zip(frames).enumerate() {
        let accent = palette::SERIES[index % palette::SERIES.len()];

        slide.add_shape(
            format!("Founder Card {}", index + 1),
            frame,
            ShapeStyle::filled(Geometry::RoundRect, palette::WHITE)
                .with_outline(palette::BORDER, 1.0),
        );

        slide.add_labeled_shape(
            format!("Founder Avatar {}", index + 1),
            Frame::new(
                frame.x + frame.width / 2 - AVATAR / 2,
                frame.y + CARD_PADDING,
                AVATAR,
                AVATAR,
            ),
            ShapeStyle::filled(Geometry::Ellipse, accent),
            TextFrame::single(
                initials(&founder.name),
                style(font::TITLE - 4.0, palette::WHITE).bold(),
                TextAlign::Center,
            )
            .anchored(VerticalAnchor::Middle)
            .with_inset(0),
        );

        let text_top = frame.y + CARD_PADDING * 2 + AVATAR;
        let mut text = TextFrame::new()
            .with_paragraph(
                Paragraph::new(&founder.name, style(font::HEADING + 1.0, palette::NAVY).bold())
                    .aligned(TextAlign::Center),
            )
            .with_paragraph(
                Paragraph::new(&founder.role, style(font::BODY, accent).bold())
                    .aligned(TextAlign::Center),
            )
            .with_paragraph(
                Paragraph::new(&founder.focus, style(font::SMALL, palette::MUTED))
                    .aligned(TextAlign::Center)
                    .spaced(8.0),
            );
        for paragraph in bullets(
            founder.achievements.iter().map(String::as_str),
            font::SMALL,
            palette::TEXT,
        ) {
            text = text.with_paragraph(paragraph);
        }

        slide.add_text_box(
            format!("Founder Details {}", index + 1),
            Frame::new(frame.x, text_top, frame.width, frame.bottom() - text_top),
            text.with_inset(CARD_PADDING).shrink(),
        );
    }

    if !section.hiring_note.is_empty() {
        slide.add_text_box(
            "Hiring Note",
            Frame::new(MARGIN, BODY_BOTTOM - NOTE_HEIGHT, CONTENT_WIDTH, NOTE_HEIGHT),
            TextFrame::single(
                &section.hiring_note,
                style(font::BODY, palette::PRIMARY).bold(),
                TextAlign::Center,
            )
            .anchored(VerticalAnchor::Middle),
        );
    }

    slide
}
