//! Slide background support for PowerPoint presentations.
//!
//! This module provides solid and linear-gradient slide backgrounds.

use crate::common::unit::{degrees_to_ooxml_angle, fraction_to_ooxml_pct};
use std::fmt::Write as FmtWrite;

/// Slide background configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideBackground {
    /// Solid color background
    Solid {
        /// RGB color in hexadecimal format (e.g., "FFFFFF" for white)
        color: String,
    },
    /// Linear gradient background
    Gradient {
        /// Gradient angle in degrees (0 = left to right, 90 = top to bottom)
        angle: f64,
        /// Gradient stops
        stops: Vec<GradientStop>,
    },
}

/// A gradient stop (position and color).
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f64,
    /// RGB color in hex format
    pub color: String,
}

impl GradientStop {
    /// Create a gradient stop.
    #[inline]
    pub fn new(position: f64, color: &str) -> Self {
        Self {
            position,
            color: color.to_string(),
        }
    }
}

impl SlideBackground {
    /// Create a solid color background.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scaleup_deck::ooxml::pptx::SlideBackground;
    ///
    /// let bg = SlideBackground::solid("0F172A");
    /// ```
    pub fn solid(color: impl Into<String>) -> Self {
        SlideBackground::Solid {
            color: color.into(),
        }
    }

    /// Create a linear gradient background.
    pub fn linear_gradient(angle: f64, stops: Vec<GradientStop>) -> Self {
        SlideBackground::Gradient { angle, stops }
    }

    /// Whether this background fills the slide with a gradient.
    pub fn is_gradient(&self) -> bool {
        matches!(self, SlideBackground::Gradient { .. })
    }

    /// Generate the `p:bg` element.
    pub(crate) fn write_xml(&self, xml: &mut String) -> std::fmt::Result {
        xml.push_str("<p:bg><p:bgPr>");

        match self {
            SlideBackground::Solid { color } => {
                write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
            },
            SlideBackground::Gradient { angle, stops } => {
                xml.push_str(r#"<a:gradFill rotWithShape="1"><a:gsLst>"#);
                for stop in stops {
                    write!(
                        xml,
                        r#"<a:gs pos="{}"><a:srgbClr val="{}"/></a:gs>"#,
                        fraction_to_ooxml_pct(stop.position),
                        stop.color
                    )?;
                }
                xml.push_str("</a:gsLst>");
                write!(
                    xml,
                    r#"<a:lin ang="{}" scaled="0"/>"#,
                    degrees_to_ooxml_angle(*angle)
                )?;
                xml.push_str("</a:gradFill>");
            },
        }

        xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_background_xml() {
        let mut xml = String::new();
        SlideBackground::solid("FFFFFF").write_xml(&mut xml).unwrap();
        assert_eq!(
            xml,
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
        );
    }

    #[test]
    fn test_gradient_background_xml() {
        let bg = SlideBackground::linear_gradient(
            45.0,
            vec![GradientStop::new(0.0, "0F172A"), GradientStop::new(1.0, "1E3A8A")],
        );
        assert!(bg.is_gradient());

        let mut xml = String::new();
        bg.write_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<a:gs pos="0"><a:srgbClr val="0F172A"/></a:gs>"#));
        assert!(xml.contains(r#"<a:gs pos="100000"><a:srgbClr val="1E3A8A"/></a:gs>"#));
        assert!(xml.contains(r#"<a:lin ang="2700000" scaled="0"/>"#));
    }
}
