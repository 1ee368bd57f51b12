/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::slide::Slide;

/// Widescreen 16:9 slide width (13.333").
pub const WIDESCREEN_WIDTH: i64 = 12_192_000;
/// Widescreen 16:9 slide height (7.5").
pub const WIDESCREEN_HEIGHT: i64 = 6_858_000;

/// First slide ID; PowerPoint requires IDs of 256 and above.
const FIRST_SLIDE_ID: u32 = 256;

/// A PowerPoint presentation being assembled for writing.
#[derive(Debug)]
pub struct Presentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<Slide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title, written to the core properties
    title: Option<String>,
    /// Document author, written to the core properties
    author: Option<String>,
}

impl Presentation {
    /// Create a new empty widescreen presentation (13.333" x 7.5").
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: WIDESCREEN_WIDTH,
            slide_height: WIDESCREEN_HEIGHT,
            title: None,
            author: None,
        }
    }

    /// Append a slide and assign its slide ID.
    pub fn push_slide(&mut self, mut slide: Slide) -> &mut Slide {
        slide.slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(slide);
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the document title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the document author.
    pub fn set_author(&mut self, author: &str) {
        self.author = Some(author.to_string());
    }

    /// Get the document author.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Total number of charts across all slides.
    pub fn chart_count(&self) -> usize {
        self.slides.iter().map(|s| s.charts().count()).sum()
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `master_rel_id` - Relationship ID of the slide master
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::InvalidFormat(format!(
                "{} slides but {} slide relationships",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("<p:defaultTextStyle>");
        xml.push_str(r#"<a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#);
        xml.push_str("</p:defaultTextStyle>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 12_192_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_push_slide_assigns_ids() {
        let mut pres = Presentation::new();
        pres.push_slide(Slide::new("Cover"));
        pres.push_slide(Slide::new("Contact"));
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide(0).map(Slide::slide_id), Some(256));
        assert_eq!(pres.slide(1).map(Slide::name), Some("Contact"));
    }

    #[test]
    fn test_xml_generation() {
        let mut pres = Presentation::new();
        pres.push_slide(Slide::new("Cover"));

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains("<p:presentation"));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));

        assert!(pres.generate_presentation_xml("rId1", &[]).is_err());
    }
}
