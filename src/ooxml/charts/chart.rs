//! Chart part model.

use crate::ooxml::charts::types::{ChartKind, LegendPosition};

/// One named series of values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Series name, shown in the legend
    pub name: String,
    /// One value per category
    pub values: Vec<f64>,
    /// Series colour in hex RGB
    pub color: Option<String>,
}

impl ChartSeries {
    /// Create a new series.
    #[inline]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            color: None,
        }
    }

    /// Set the series colour.
    #[inline]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A complete chart: type, categories, series and presentation options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
    /// Per-point colours for pie and doughnut charts
    pub point_colors: Vec<String>,
    pub legend: Option<LegendPosition>,
    pub show_values: bool,
    /// Doughnut hole size in percent (10-90)
    pub hole_size: u8,
    /// Font size of axis labels, legend and data labels in points
    pub font_size: f64,
}

impl ChartSpec {
    /// Create a chart with no data.
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            title: None,
            categories: Vec::new(),
            series: Vec::new(),
            point_colors: Vec::new(),
            legend: None,
            show_values: false,
            hole_size: 55,
            font_size: 10.0,
        }
    }

    /// Set the chart title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the category labels.
    #[inline]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Add a series.
    #[inline]
    pub fn add_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Set per-point colours (pie and doughnut).
    #[inline]
    pub fn with_point_colors(mut self, colors: Vec<String>) -> Self {
        self.point_colors = colors;
        self
    }

    /// Show a legend at the given position.
    #[inline]
    pub fn with_legend(mut self, position: LegendPosition) -> Self {
        self.legend = Some(position);
        self
    }

    /// Show value labels on data points.
    #[inline]
    pub fn with_values_shown(mut self) -> Self {
        self.show_values = true;
        self
    }

    /// Set the doughnut hole size.
    #[inline]
    pub fn with_hole_size(mut self, percent: u8) -> Self {
        self.hole_size = percent.clamp(10, 90);
        self
    }

    /// Set the label font size in points.
    #[inline]
    pub fn with_font_size(mut self, pt: f64) -> Self {
        self.font_size = pt;
        self
    }

    /// Number of categories.
    #[inline]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}
