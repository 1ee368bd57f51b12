//! DrawingML tables (`a:tbl`) hosted in a slide graphic frame.

use super::shape::write_run_properties;
use crate::common::unit::pt_to_emu;
use crate::common::xml::escape_xml;
use crate::ooxml::pptx::format::{TextAlign, TextStyle};
use std::fmt::Write as FmtWrite;

/// Fill, border and text formatting of one cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    pub text: TextStyle,
    pub align: TextAlign,
    /// Background color in hex RGB
    pub fill: Option<String>,
    /// Border color in hex RGB, drawn 1pt on every side
    pub border: Option<String>,
}

impl CellStyle {
    /// Create a style from text formatting.
    #[inline]
    pub fn new(text: TextStyle) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }

    /// Set the background color.
    #[inline]
    pub fn with_fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    /// Set the border color.
    #[inline]
    pub fn with_border(mut self, color: &str) -> Self {
        self.border = Some(color.to_string());
        self
    }

    /// Set the alignment.
    #[inline]
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub style: CellStyle,
}

impl TableCell {
    /// Create a cell.
    #[inline]
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn write_xml(&self, xml: &mut String) -> std::fmt::Result {
        xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
        write!(xml, r#"<a:p><a:pPr algn="{}"/>"#, self.style.align.xml_value())?;
        if !self.text.is_empty() {
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", &self.style.text)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
            xml.push_str("</a:r>");
        }
        write_run_properties(xml, "a:endParaRPr", &self.style.text)?;
        xml.push_str("</a:p></a:txBody>");

        xml.push_str(
            r#"<a:tcPr marL="68580" marR="68580" marT="45720" marB="45720" anchor="ctr">"#,
        );
        // Borders precede the cell fill in CT_TableCellProperties
        if let Some(ref border) = self.style.border {
            for side in ["lnL", "lnR", "lnT", "lnB"] {
                write!(
                    xml,
                    r#"<a:{side} w="{w}"><a:solidFill><a:srgbClr val="{border}"/></a:solidFill></a:{side}>"#,
                    w = pt_to_emu(1.0),
                )?;
            }
        }
        match self.style.fill {
            Some(ref fill) => {
                write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, fill)?
            },
            None => xml.push_str("<a:noFill/>"),
        }
        xml.push_str("</a:tcPr></a:tc>");
        Ok(())
    }
}

/// A table: column widths, a uniform row height and rows of cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// Column widths in EMUs
    pub column_widths: Vec<i64>,
    /// Row height in EMUs
    pub row_height: i64,
    pub rows: Vec<Vec<TableCell>>,
    /// Render the first row with header emphasis
    pub first_row: bool,
    /// Render alternate body rows banded
    pub band_rows: bool,
}

impl Table {
    /// Number of rows, header included.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Cell at `(row, col)`.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub(crate) fn write_xml(&self, xml: &mut String) -> std::fmt::Result {
        write!(
            xml,
            r#"<a:tbl><a:tblPr firstRow="{}" bandRow="{}"/>"#,
            u8::from(self.first_row),
            u8::from(self.band_rows)
        )?;

        xml.push_str("<a:tblGrid>");
        for width in &self.column_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
        }
        xml.push_str("</a:tblGrid>");

        for row in &self.rows {
            write!(xml, r#"<a:tr h="{}">"#, self.row_height)?;
            for cell in row {
                cell.write_xml(xml)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        Ok(())
    }
}
