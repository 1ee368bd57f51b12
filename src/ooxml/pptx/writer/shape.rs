/// Shape types and implementation for PPTX slides.
use crate::common::unit::{inches_to_emu, pt_to_centipoints, pt_to_emu};
use crate::common::xml::escape_xml;
use crate::ooxml::charts::ChartSpec;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{Geometry, Outline, TextAlign, TextStyle, VerticalAnchor};
use super::table::Table;

/// Position and size of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    /// Create a frame from EMU values.
    #[inline]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a frame from inches.
    #[inline]
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            inches_to_emu(x),
            inches_to_emu(y),
            inches_to_emu(width),
            inches_to_emu(height),
        )
    }

    /// Right edge in EMUs.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x + self.width
    }

    /// Bottom edge in EMUs.
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Shrink the frame by `inset` EMUs on every side.
    #[inline]
    pub const fn inset(&self, inset: i64) -> Self {
        Self::new(
            self.x + inset,
            self.y + inset,
            self.width - 2 * inset,
            self.height - 2 * inset,
        )
    }

    fn write_xfrm(&self, xml: &mut String, prefix: &str) -> std::fmt::Result {
        write!(
            xml,
            r#"<{p}:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{p}:xfrm>"#,
            self.x,
            self.y,
            self.width.max(0),
            self.height.max(0),
            p = prefix
        )
    }
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: TextStyle,
}

impl TextRun {
    /// Create a run.
    #[inline]
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A paragraph of one or more runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: SmallVec<[TextRun; 2]>,
    pub align: TextAlign,
    pub bullet: bool,
    /// Space after the paragraph in points
    pub space_after: Option<f64>,
}

impl Paragraph {
    /// Create a paragraph holding a single run.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        let mut runs = SmallVec::new();
        runs.push(TextRun::new(text, style));
        Self {
            runs,
            ..Default::default()
        }
    }

    /// Append a run.
    #[inline]
    pub fn with_run(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.runs.push(TextRun::new(text, style));
        self
    }

    /// Set the alignment.
    #[inline]
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Render with a bullet character.
    #[inline]
    pub fn bulleted(mut self) -> Self {
        self.bullet = true;
        self
    }

    /// Set the space after the paragraph.
    #[inline]
    pub fn spaced(mut self, pt: f64) -> Self {
        self.space_after = Some(pt);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> std::fmt::Result {
        xml.push_str("<a:p>");

        write!(xml, r#"<a:pPr algn="{}""#, self.align.xml_value())?;
        if self.bullet {
            xml.push_str(r#" marL="228600" indent="-228600""#);
        }
        xml.push('>');
        if let Some(after) = self.space_after {
            write!(
                xml,
                r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                pt_to_centipoints(after)
            )?;
        }
        if self.bullet {
            xml.push_str(r#"<a:buFont typeface="Arial"/><a:buChar char="•"/>"#);
        } else {
            xml.push_str("<a:buNone/>");
        }
        xml.push_str("</a:pPr>");

        for run in &self.runs {
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", &run.style)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text))?;
            xml.push_str("</a:r>");
        }

        let end_style = self
            .runs
            .last()
            .map(|r| r.style.clone())
            .unwrap_or_default();
        write_run_properties(xml, "a:endParaRPr", &end_style)?;

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Write `a:rPr`/`a:endParaRPr` for a style. Child order is fill, then latin font.
pub(crate) fn write_run_properties(
    xml: &mut String,
    element: &str,
    style: &TextStyle,
) -> std::fmt::Result {
    write!(xml, r#"<{} lang="en-US""#, element)?;
    if let Some(size) = style.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if style.bold {
        xml.push_str(r#" b="1""#);
    }
    if style.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0""#);

    if style.color.is_none() && style.font.is_none() {
        xml.push_str("/>");
        return Ok(());
    }

    xml.push('>');
    if let Some(ref color) = style.color {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
    }
    if let Some(ref font) = style.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
    }
    write!(xml, "</{}>", element)
}

/// Text content of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub anchor: VerticalAnchor,
    /// Inner margin on every side in EMUs
    pub inset: i64,
    /// Shrink text on overflow
    pub shrink_to_fit: bool,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            paragraphs: Vec::new(),
            anchor: VerticalAnchor::Top,
            inset: 91_440,
            shrink_to_fit: false,
        }
    }
}

impl TextFrame {
    /// Create an empty text frame.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame holding one single-run paragraph.
    pub fn single(text: impl Into<String>, style: TextStyle, align: TextAlign) -> Self {
        Self::new().with_paragraph(Paragraph::new(text, style).aligned(align))
    }

    /// Append a paragraph.
    #[inline]
    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Set the vertical anchor.
    #[inline]
    pub fn anchored(mut self, anchor: VerticalAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the inner margin.
    #[inline]
    pub fn with_inset(mut self, inset: i64) -> Self {
        self.inset = inset;
        self
    }

    /// Shrink text on overflow.
    #[inline]
    pub fn shrink(mut self) -> Self {
        self.shrink_to_fit = true;
        self
    }

    /// Concatenated text, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn write_xml(&self, xml: &mut String) -> std::fmt::Result {
        xml.push_str("<p:txBody>");
        write!(
            xml,
            r#"<a:bodyPr wrap="square" lIns="{0}" tIns="{0}" rIns="{0}" bIns="{0}" anchor="{1}" rtlCol="0">"#,
            self.inset,
            self.anchor.xml_value()
        )?;
        if self.shrink_to_fit {
            xml.push_str("<a:normAutofit/>");
        } else {
            xml.push_str("<a:noAutofit/>");
        }
        xml.push_str("</a:bodyPr>");
        xml.push_str("<a:lstStyle/>");

        if self.paragraphs.is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
        }
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }

        xml.push_str("</p:txBody>");
        Ok(())
    }
}

/// Fill and outline of an auto shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeStyle {
    pub geometry: Geometry,
    /// Fill color in hex RGB, `None` for no fill
    pub fill: Option<String>,
    pub outline: Option<Outline>,
}

impl ShapeStyle {
    /// Create a filled shape style.
    #[inline]
    pub fn filled(geometry: Geometry, fill: &str) -> Self {
        Self {
            geometry,
            fill: Some(fill.to_string()),
            outline: None,
        }
    }

    /// Add an outline.
    #[inline]
    pub fn with_outline(mut self, color: &str, width: f64) -> Self {
        self.outline = Some(Outline::new(color, width));
        self
    }
}

/// What a shape draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// Text box: no fill, no outline
    Text(TextFrame),
    /// Auto shape (rectangle, rounded card, ellipse) with optional text
    Auto {
        style: ShapeStyle,
        text: Option<TextFrame>,
    },
    /// Table graphic frame
    Table(Table),
    /// Chart graphic frame; the chart part is written by the package writer
    Chart(Box<ChartSpec>),
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Shape ID, unique within its slide
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) frame: Frame,
    pub(crate) kind: ShapeKind,
}

impl Shape {
    /// Shape ID.
    #[inline]
    pub fn id(&self) -> u32 {
        self.shape_id
    }

    /// Shape name as shown in the selection pane.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position and size.
    #[inline]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Shape content.
    #[inline]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// The table, if this is a table frame.
    pub fn as_table(&self) -> Option<&Table> {
        match &self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// The chart, if this is a chart frame.
    pub fn as_chart(&self) -> Option<&ChartSpec> {
        match &self.kind {
            ShapeKind::Chart(chart) => Some(chart),
            _ => None,
        }
    }

    /// Text content, empty for shapes without text.
    pub fn text(&self) -> String {
        match &self.kind {
            ShapeKind::Text(frame) => frame.text(),
            ShapeKind::Auto {
                text: Some(frame), ..
            } => frame.text(),
            _ => String::new(),
        }
    }

    /// Generate XML for this shape.
    ///
    /// `chart_rel_id` is required for chart frames and ignored otherwise.
    pub(crate) fn to_xml(&self, xml: &mut String, chart_rel_id: Option<&str>) -> Result<()> {
        match &self.kind {
            ShapeKind::Text(text) => {
                self.write_sp(xml, true, &ShapeStyle::default(), Some(text))?;
            },
            ShapeKind::Auto { style, text } => {
                self.write_sp(xml, false, style, text.as_ref())?;
            },
            ShapeKind::Table(table) => {
                self.write_graphic_frame_head(xml, true)?;
                write!(
                    xml,
                    r#"<a:graphic><a:graphicData uri="{}">"#,
                    namespace::DML_TABLE
                )?;
                table.write_xml(xml)?;
                xml.push_str("</a:graphicData></a:graphic></p:graphicFrame>");
            },
            ShapeKind::Chart(_) => {
                let rel_id = chart_rel_id.ok_or_else(|| {
                    crate::ooxml::error::OoxmlError::PartNotFound(format!(
                        "chart part for shape '{}'",
                        self.name
                    ))
                })?;
                self.write_graphic_frame_head(xml, false)?;
                write!(
                    xml,
                    r#"<a:graphic><a:graphicData uri="{0}"><c:chart xmlns:c="{0}" r:id="{1}"/></a:graphicData></a:graphic>"#,
                    namespace::DML_CHART,
                    rel_id
                )?;
                xml.push_str("</p:graphicFrame>");
            },
        }

        Ok(())
    }

    fn write_sp(
        &self,
        xml: &mut String,
        text_box: bool,
        style: &ShapeStyle,
        text: Option<&TextFrame>,
    ) -> std::fmt::Result {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        if text_box {
            xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
        } else {
            xml.push_str("<p:cNvSpPr/>");
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        self.frame.write_xfrm(xml, "a")?;
        write!(
            xml,
            r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
            style.geometry.preset()
        )?;
        match style.fill {
            Some(ref color) => {
                write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?
            },
            None => xml.push_str("<a:noFill/>"),
        }
        match style.outline {
            Some(ref outline) => write!(
                xml,
                r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                pt_to_emu(outline.width),
                outline.color
            )?,
            None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
        }
        xml.push_str("</p:spPr>");

        if let Some(text) = text {
            text.write_xml(xml)?;
        }

        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_graphic_frame_head(&self, xml: &mut String, lock_grouping: bool) -> std::fmt::Result {
        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        if lock_grouping {
            xml.push_str(
                r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#,
            );
        } else {
            xml.push_str("<p:cNvGraphicFramePr/>");
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");
        self.frame.write_xfrm(xml, "p")
    }
}
