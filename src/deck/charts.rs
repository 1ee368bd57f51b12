//! Adapters from content records to chart models.
//!
//! Values come from display strings through [`extract_number_or_zero`], so
//! content that skipped validation still renders, with zero for figures that
//! hold no number.

use super::layout::{font, palette};
use super::numeric::extract_number_or_zero;
use crate::content::{FundingUse, RevenueStream, TableData};
use crate::ooxml::charts::{ChartKind, ChartSeries, ChartSpec, LegendPosition};

fn series_color(index: usize) -> &'static str {
    palette::SERIES[index % palette::SERIES.len()]
}

fn point_colors(count: usize) -> Vec<String> {
    (0..count).map(|i| series_color(i).to_string()).collect()
}

/// Category labels (first column) and one series per remaining column.
pub fn growth_series(growth: &TableData) -> (Vec<String>, Vec<ChartSeries>) {
    let categories = growth.column(0).map(str::to_string).collect();
    let series = growth
        .header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(column, name)| {
            let values = growth.column(column).map(extract_number_or_zero).collect();
            ChartSeries::new(name.as_str(), values).with_color(series_color(column - 1))
        })
        .collect();
    (categories, series)
}

/// Line chart of the first growth series.
pub fn traction_line_chart(growth: &TableData) -> ChartSpec {
    let (categories, series) = growth_series(growth);
    let mut chart = ChartSpec::new(ChartKind::Line)
        .with_categories(categories)
        .with_font_size(font::CAPTION);
    if let Some(first) = series.into_iter().next() {
        chart = chart.with_title(first.name.clone()).add_series(first);
    }
    chart
}

/// Column chart of the last growth series, with value labels.
pub fn traction_bar_chart(growth: &TableData) -> ChartSpec {
    let (categories, series) = growth_series(growth);
    let mut chart = ChartSpec::new(ChartKind::Column)
        .with_categories(categories)
        .with_values_shown()
        .with_font_size(font::CAPTION);
    if let Some(last) = series.into_iter().last() {
        chart = chart.with_title(last.name.clone()).add_series(last);
    }
    chart
}

/// Pie chart of revenue-stream shares.
pub fn revenue_pie_chart(streams: &[RevenueStream]) -> ChartSpec {
    let categories = streams.iter().map(|s| s.name.clone()).collect();
    let values = streams
        .iter()
        .map(|s| extract_number_or_zero(&s.share))
        .collect();

    ChartSpec::new(ChartKind::Pie)
        .with_categories(categories)
        .add_series(ChartSeries::new("Revenue share", values))
        .with_point_colors(point_colors(streams.len()))
        .with_legend(LegendPosition::Bottom)
        .with_values_shown()
        .with_font_size(font::CAPTION)
}

/// Doughnut chart of use-of-funds allocations.
pub fn funding_doughnut_chart(uses: &[FundingUse]) -> ChartSpec {
    let categories = uses.iter().map(|u| u.category.clone()).collect();
    let values = uses
        .iter()
        .map(|u| extract_number_or_zero(&u.allocation))
        .collect();

    ChartSpec::new(ChartKind::Doughnut)
        .with_categories(categories)
        .add_series(ChartSeries::new("Allocation", values))
        .with_point_colors(point_colors(uses.len()))
        .with_legend(LegendPosition::Right)
        .with_hole_size(55)
        .with_values_shown()
        .with_font_size(font::CAPTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundled;

    #[test]
    fn test_growth_series_parses_formatted_cells() {
        let growth = TableData::new(
            &["Month", "Users", "MRR"],
            &[&["Jan", "1,500", "₹6L"], &["Feb", "2,000", "n/a"]],
        );
        let (categories, series) = growth_series(&growth);

        assert_eq!(categories, vec!["Jan", "Feb"]);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].values, vec![1500.0, 2000.0]);
        assert_eq!(series[1].values, vec![6.0, 0.0]);
    }

    #[test]
    fn test_traction_charts_use_distinct_series() {
        let growth = &bundled().traction.growth;
        let line = traction_line_chart(growth);
        let bar = traction_bar_chart(growth);

        assert_eq!(line.kind, ChartKind::Line);
        assert_eq!(bar.kind, ChartKind::Column);
        assert_eq!(line.category_count(), growth.row_count());
        assert_ne!(line.series[0].name, bar.series[0].name);
    }

    #[test]
    fn test_pie_values_from_shares() {
        let chart = revenue_pie_chart(&bundled().business_model.streams);
        assert_eq!(chart.series[0].values, vec![55.0, 30.0, 15.0]);
        assert_eq!(chart.point_colors.len(), 3);
    }

    #[test]
    fn test_doughnut_values_from_allocations() {
        let chart = funding_doughnut_chart(&bundled().funding.uses);
        assert_eq!(chart.kind, ChartKind::Doughnut);
        let total: f64 = chart.series[0].values.iter().sum();
        assert_eq!(total, 100.0);
    }
}
