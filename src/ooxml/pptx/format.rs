//! Format types for PPTX shapes and text.

/// Text formatting properties for a run.
///
/// `None` fields inherit from the slide master's text styles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Text color in hex RGB (e.g., "FF0000" for red)
    pub color: Option<String>,
}

impl TextStyle {
    /// Create a style that inherits everything.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set font size in points.
    #[inline]
    pub fn size(mut self, pt: f64) -> Self {
        self.size = Some(pt);
        self
    }

    /// Builder method: set bold.
    #[inline]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder method: set italic.
    #[inline]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder method: set text color.
    #[inline]
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Builder method: set font family.
    #[inline]
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Returns the `algn` attribute value.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical text anchoring inside a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    /// Returns the `anchor` attribute value.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Geometry {
    #[default]
    Rect,
    RoundRect,
    Ellipse,
}

impl Geometry {
    /// Returns the `prst` attribute value.
    #[inline]
    pub const fn preset(&self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::RoundRect => "roundRect",
            Self::Ellipse => "ellipse",
        }
    }
}

/// Shape outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Line color in hex RGB
    pub color: String,
    /// Line width in points
    pub width: f64,
}

impl Outline {
    /// Create an outline.
    #[inline]
    pub fn new(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
        }
    }
}
