/// Slide types and implementation for PPTX presentations.
use crate::ooxml::charts::ChartSpec;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use std::fmt::Write as FmtWrite;

use super::relmap::RelationshipMapper;
use super::shape::{Frame, Shape, ShapeKind, ShapeStyle, TextFrame};
use super::table::Table;

/// A slide in a presentation.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID, assigned when the slide is pushed onto a presentation
    pub(crate) slide_id: u32,
    /// Slide name, written to `cSld@name`
    pub(crate) name: String,
    pub(crate) shapes: Vec<Shape>,
    pub(crate) background: Option<SlideBackground>,
    /// Next shape ID. The group shape uses id 1.
    next_shape_id: u32,
}

impl Slide {
    /// Create a new empty slide.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            slide_id: 0,
            name: name.into(),
            shapes: Vec::new(),
            background: None,
            next_shape_id: 2,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Get the slide name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a background for the slide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scaleup_deck::ooxml::pptx::{Slide, SlideBackground};
    ///
    /// let mut slide = Slide::new("Cover");
    /// slide.set_background(SlideBackground::solid("0F172A"));
    /// assert!(slide.background().is_some());
    /// ```
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = Some(background);
    }

    /// Get the slide background.
    pub fn background(&self) -> Option<&SlideBackground> {
        self.background.as_ref()
    }

    fn push_shape(&mut self, name: impl Into<String>, frame: Frame, kind: ShapeKind) -> u32 {
        let shape_id = self.next_shape_id;
        self.next_shape_id += 1;
        self.shapes.push(Shape {
            shape_id,
            name: name.into(),
            frame,
            kind,
        });
        shape_id
    }

    /// Add a text box (no fill, no outline). Returns the shape ID.
    pub fn add_text_box(&mut self, name: impl Into<String>, frame: Frame, text: TextFrame) -> u32 {
        self.push_shape(name, frame, ShapeKind::Text(text))
    }

    /// Add an auto shape without text. Returns the shape ID.
    pub fn add_shape(&mut self, name: impl Into<String>, frame: Frame, style: ShapeStyle) -> u32 {
        self.push_shape(name, frame, ShapeKind::Auto { style, text: None })
    }

    /// Add an auto shape holding text. Returns the shape ID.
    pub fn add_labeled_shape(
        &mut self,
        name: impl Into<String>,
        frame: Frame,
        style: ShapeStyle,
        text: TextFrame,
    ) -> u32 {
        self.push_shape(
            name,
            frame,
            ShapeKind::Auto {
                style,
                text: Some(text),
            },
        )
    }

    /// Add a table. Returns the shape ID.
    pub fn add_table(&mut self, name: impl Into<String>, frame: Frame, table: Table) -> u32 {
        self.push_shape(name, frame, ShapeKind::Table(table))
    }

    /// Add a chart. The chart part is created when the package is written.
    /// Returns the shape ID.
    pub fn add_chart(&mut self, name: impl Into<String>, frame: Frame, chart: ChartSpec) -> u32 {
        self.push_shape(name, frame, ShapeKind::Chart(Box::new(chart)))
    }

    /// Shapes in z-order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// First shape with the given name.
    pub fn shape_by_name(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Shapes whose name starts with `prefix`, in z-order.
    pub fn shapes_named<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Shape> + 'a {
        self.shapes.iter().filter(move |s| s.name.starts_with(prefix))
    }

    /// Charts on the slide, in z-order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.shapes.iter().filter_map(Shape::as_chart)
    }

    /// All text on the slide, one entry per text-bearing shape.
    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .map(Shape::text)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Generate slide XML with chart relationship IDs from the mapper.
    pub(crate) fn to_xml(
        &self,
        slide_index: usize,
        rel_mapper: &RelationshipMapper,
    ) -> Result<String> {
        let mut xml = String::with_capacity(8192);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        write!(
            xml,
            r#"<p:cSld name="{}">"#,
            crate::common::xml::escape_xml(&self.name)
        )?;

        // Background must come before spTree
        if let Some(ref background) = self.background {
            background.write_xml(&mut xml)?;
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        let mut chart_idx = 0;
        for shape in &self.shapes {
            let chart_rel_id = match shape.kind {
                ShapeKind::Chart(_) => {
                    let rid = rel_mapper.get_chart_id(slide_index, chart_idx);
                    chart_idx += 1;
                    rid
                },
                _ => None,
            };
            shape.to_xml(&mut xml, chart_rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::{ChartKind, ChartSeries};
    use crate::ooxml::pptx::format::{Geometry, TextAlign, TextStyle};

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = Slide::new("Problem");
        let a = slide.add_text_box(
            "Title",
            Frame::inches(0.5, 0.3, 12.0, 0.6),
            TextFrame::single("The Problem", TextStyle::new().bold(), TextAlign::Left),
        );
        let b = slide.add_shape(
            "Accent Bar",
            Frame::inches(0.5, 1.0, 1.0, 0.05),
            ShapeStyle::filled(Geometry::Rect, "2563EB"),
        );
        assert_eq!((a, b), (2, 3));
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.shape_by_name("Accent Bar").map(Shape::id), Some(3));
        assert_eq!(slide.texts(), vec!["The Problem".to_string()]);
    }

    #[test]
    fn test_slide_xml_with_background_and_chart() {
        let mut slide = Slide::new("Traction");
        slide.set_background(SlideBackground::solid("FFFFFF"));
        slide.add_chart(
            "Growth Chart",
            Frame::inches(1.0, 2.0, 5.0, 3.0),
            ChartSpec::new(ChartKind::Line)
                .with_categories(vec!["Q1".into()])
                .add_series(ChartSeries::new("Users", vec![10.0])),
        );

        let mut mapper = RelationshipMapper::new();
        mapper.add_chart(0, 0, "rId2".to_string(), 1);

        let xml = slide.to_xml(0, &mapper).unwrap();
        assert!(xml.contains(r#"<p:cSld name="Traction">"#));
        assert!(xml.find("<p:bg>").unwrap() < xml.find("<p:spTree>").unwrap());
        assert!(xml.contains(r#"r:id="rId2""#));
        assert_eq!(slide.charts().count(), 1);
    }

    #[test]
    fn test_missing_chart_relationship_is_an_error() {
        let mut slide = Slide::new("Funding");
        slide.add_chart(
            "Use of Funds",
            Frame::default(),
            ChartSpec::new(ChartKind::Doughnut),
        );
        assert!(slide.to_xml(0, &RelationshipMapper::new()).is_err());
    }
}
