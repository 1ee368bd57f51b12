use crate::common::unit::inches_to_emu;
use crate::content::Contact;
use crate::deck::components::{hero_background, style};
use crate::deck::layout::{CARD_PADDING, CONTENT_WIDTH, MARGIN, card_row, font, palette};
use crate::ooxml::pptx::{
    Frame, Geometry, Paragraph, ShapeStyle, Slide, TextAlign, TextFrame, VerticalAnchor,
};

/// Closing slide: thank-you line, one card per contact and the website.
pub fn contact(section: &Contact) -> Slide {
    let mut slide = Slide::new("Contact");
    slide.set_background(hero_background());

    slide.add_text_box(
        "Closing Line",
        Frame::new(MARGIN, inches_to_emu(0.8), CONTENT_WIDTH, inches_to_emu(1.0)),
        TextFrame::single(
            &section.closing_line,
            style(font::HERO, palette::WHITE).bold(),
            TextAlign::Center,
        )
        .anchored(VerticalAnchor::Bottom)
        .with_inset(0),
    );

    slide.add_text_box(
        "Heading",
        Frame::new(MARGIN, inches_to_emu(1.85), CONTENT_WIDTH, inches_to_emu(0.55)),
        TextFrame::single(
            &section.title,
            style(font::TITLE - 4.0, palette::ON_DARK_MUTED).bold(),
            TextAlign::Center,
        )
        .with_inset(0),
    );

    if !section.subtitle.is_empty() {
        slide.add_text_box(
            "Subtitle",
            Frame::new(MARGIN, inches_to_emu(2.4), CONTENT_WIDTH, inches_to_emu(0.45)),
            TextFrame::single(
                &section.subtitle,
                style(font::SUBTITLE, palette::ON_DARK_MUTED),
                TextAlign::Center,
            )
            .with_inset(0),
        );
    }

    let frames = card_row(section.cards.len(), inches_to_emu(3.2), inches_to_emu(2.2));
    for (index, (card, frame)) in section.cards.iter().zip(frames).enumerate() {
        let line = |text: &str| {
            Paragraph::new(text, style(font::SMALL, palette::WHITE)).aligned(TextAlign::Center)
        };
        let text = TextFrame::new()
            .with_paragraph(
                Paragraph::new(&card.name, style(font::HEADING + 2.0, palette::WHITE).bold())
                    .aligned(TextAlign::Center),
            )
            .with_paragraph(
                Paragraph::new(&card.role, style(font::BODY, palette::ON_DARK_MUTED))
                    .aligned(TextAlign::Center)
                    .spaced(8.0),
            )
            .with_paragraph(line(card.email.as_str()))
            .with_paragraph(line(card.phone.as_str()))
            .with_paragraph(line(card.linkedin.as_str()))
            .anchored(VerticalAnchor::Middle)
            .with_inset(CARD_PADDING)
            .shrink();

        slide.add_labeled_shape(
            format!("Contact Card {}", index + 1),
            frame,
            ShapeStyle::filled(Geometry::RoundRect, palette::INDIGO)
                .with_outline(palette::PRIMARY, 1.0),
            text,
        );
    }

    slide.add_text_box(
        "Website",
        Frame::new(MARGIN, inches_to_emu(5.8), CONTENT_WIDTH, inches_to_emu(0.5)),
        TextFrame::single(
            &section.website,
            style(font::HEADING, palette::WHITE).bold(),
            TextAlign::Center,
        )
        .anchored(VerticalAnchor::Middle),
    );

    slide
}
