//! Core chart enumerations.

use std::fmt;

/// Chart type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Vertical bars
    Column,
    /// Horizontal bars
    Bar,
    /// Line chart with markers
    Line,
    /// Pie chart
    Pie,
    /// Doughnut chart
    Doughnut,
}

impl ChartKind {
    /// Returns the XML element name of the plot group for this chart type.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Column | Self::Bar => "barChart",
            Self::Line => "lineChart",
            Self::Pie => "pieChart",
            Self::Doughnut => "doughnutChart",
        }
    }

    /// Returns true if this chart type is drawn against category/value axes.
    #[inline]
    pub const fn has_axes(&self) -> bool {
        matches!(self, Self::Column | Self::Bar | Self::Line)
    }

    /// Returns true if each data point gets its own colour.
    #[inline]
    pub const fn varies_colors(&self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xml_element_name())
    }
}

/// Legend position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    Bottom,
    Right,
    Top,
    Left,
}

impl LegendPosition {
    /// Returns the XML attribute value.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bottom => "b",
            Self::Right => "r",
            Self::Top => "t",
            Self::Left => "l",
        }
    }
}
