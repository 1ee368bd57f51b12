//! Chart XML writer.
//!
//! This module generates `c:chartSpace` parts for the chart kinds the deck
//! uses. Element order follows the DrawingML chart schema sequences.

use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::charts::chart::{ChartSeries, ChartSpec};
use crate::ooxml::charts::types::ChartKind;
use crate::ooxml::opc::constants::namespace;
use std::io::Write;

const CAT_AX_ID: u32 = 111_111;
const VAL_AX_ID: u32 = 222_222;

/// Write a chart to XML.
pub fn write_chart<W: Write>(writer: &mut W, chart: &ChartSpec) -> std::io::Result<()> {
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
    )?;
    write!(
        writer,
        r#"<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}">"#,
        namespace::DML_CHART,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS
    )?;
    write!(writer, r#"<c:date1904 val="0"/>"#)?;
    write!(writer, r#"<c:lang val="en-US"/>"#)?;
    write!(writer, r#"<c:roundedCorners val="0"/>"#)?;

    write!(writer, "<c:chart>")?;

    if let Some(ref title) = chart.title {
        write_title(writer, title, chart.font_size + 2.0)?;
        write!(writer, r#"<c:autoTitleDeleted val="0"/>"#)?;
    } else {
        write!(writer, r#"<c:autoTitleDeleted val="1"/>"#)?;
    }

    write!(writer, "<c:plotArea><c:layout/>")?;
    match chart.kind {
        ChartKind::Column | ChartKind::Bar => write_bar_chart(writer, chart)?,
        ChartKind::Line => write_line_chart(writer, chart)?,
        ChartKind::Pie | ChartKind::Doughnut => write_round_chart(writer, chart)?,
    }
    if chart.kind.has_axes() {
        write_axes(writer, chart)?;
    }
    write!(writer, "</c:plotArea>")?;

    if let Some(position) = chart.legend {
        write!(writer, "<c:legend>")?;
        write!(writer, r#"<c:legendPos val="{}"/>"#, position.xml_value())?;
        write!(writer, r#"<c:overlay val="0"/>"#)?;
        write_text_properties(writer, chart.font_size)?;
        write!(writer, "</c:legend>")?;
    }

    write!(writer, r#"<c:plotVisOnly val="1"/>"#)?;
    write!(writer, r#"<c:dispBlanksAs val="gap"/>"#)?;
    write!(writer, "</c:chart>")?;

    // Transparent chart area so the slide background shows through
    write!(
        writer,
        "<c:spPr><a:noFill/><a:ln><a:noFill/></a:ln></c:spPr>"
    )?;

    write!(writer, "</c:chartSpace>")?;

    Ok(())
}

/// Serialize a chart into an in-memory XML string.
pub fn chart_to_xml(chart: &ChartSpec) -> std::io::Result<String> {
    let mut buf = Vec::with_capacity(2048 + chart.categories.len() * 64);
    write_chart(&mut buf, chart)?;
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

fn write_title<W: Write>(writer: &mut W, title: &str, size: f64) -> std::io::Result<()> {
    let sz = pt_to_centipoints(size);
    write!(writer, "<c:title>")?;
    write!(writer, "<c:tx><c:rich>")?;
    write!(writer, "<a:bodyPr/><a:lstStyle/>")?;
    write!(writer, r#"<a:p><a:pPr><a:defRPr sz="{}" b="1"/></a:pPr>"#, sz)?;
    write!(
        writer,
        r#"<a:r><a:rPr lang="en-US" sz="{}" b="1"/><a:t>{}</a:t></a:r>"#,
        sz,
        escape_xml(title)
    )?;
    write!(writer, "</a:p></c:rich></c:tx>")?;
    write!(writer, r#"<c:overlay val="0"/>"#)?;
    write!(writer, "</c:title>")?;

    Ok(())
}

fn write_text_properties<W: Write>(writer: &mut W, size: f64) -> std::io::Result<()> {
    write!(
        writer,
        r#"<c:txPr><a:bodyPr/><a:lstStyle/><a:p><a:pPr><a:defRPr sz="{}"/></a:pPr><a:endParaRPr lang="en-US"/></a:p></c:txPr>"#,
        pt_to_centipoints(size)
    )
}

fn write_bar_chart<W: Write>(writer: &mut W, chart: &ChartSpec) -> std::io::Result<()> {
    let direction = if chart.kind == ChartKind::Bar {
        "bar"
    } else {
        "col"
    };

    write!(writer, "<c:barChart>")?;
    write!(writer, r#"<c:barDir val="{}"/>"#, direction)?;
    write!(writer, r#"<c:grouping val="clustered"/>"#)?;
    write!(writer, r#"<c:varyColors val="0"/>"#)?;

    for (index, series) in chart.series.iter().enumerate() {
        write_series_head(writer, index, series)?;
        if let Some(ref color) = series.color {
            write!(
                writer,
                r#"<c:spPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></c:spPr>"#,
                color
            )?;
        }
        write!(writer, r#"<c:invertIfNegative val="0"/>"#)?;
        write_data_labels(writer, chart, false)?;
        write_categories(writer, &chart.categories)?;
        write_values(writer, &series.values)?;
        write!(writer, "</c:ser>")?;
    }

    write!(writer, r#"<c:gapWidth val="80"/>"#)?;
    write!(
        writer,
        r#"<c:axId val="{}"/><c:axId val="{}"/>"#,
        CAT_AX_ID, VAL_AX_ID
    )?;
    write!(writer, "</c:barChart>")?;

    Ok(())
}

fn write_line_chart<W: Write>(writer: &mut W, chart: &ChartSpec) -> std::io::Result<()> {
    write!(writer, "<c:lineChart>")?;
    write!(writer, r#"<c:grouping val="standard"/>"#)?;
    write!(writer, r#"<c:varyColors val="0"/>"#)?;

    for (index, series) in chart.series.iter().enumerate() {
        write_series_head(writer, index, series)?;
        if let Some(ref color) = series.color {
            write!(
                writer,
                r#"<c:spPr><a:ln w="28575" cap="rnd"><a:solidFill><a:srgbClr val="{0}"/></a:solidFill><a:round/></a:ln></c:spPr>"#,
                color
            )?;
            write!(
                writer,
                r#"<c:marker><c:symbol val="circle"/><c:size val="6"/><c:spPr><a:solidFill><a:srgbClr val="{0}"/></a:solidFill></c:spPr></c:marker>"#,
                color
            )?;
        }
        write_data_labels(writer, chart, false)?;
        write_categories(writer, &chart.categories)?;
        write_values(writer, &series.values)?;
        write!(writer, r#"<c:smooth val="0"/>"#)?;
        write!(writer, "</c:ser>")?;
    }

    write!(writer, r#"<c:marker val="1"/>"#)?;
    write!(
        writer,
        r#"<c:axId val="{}"/><c:axId val="{}"/>"#,
        CAT_AX_ID, VAL_AX_ID
    )?;
    write!(writer, "</c:lineChart>")?;

    Ok(())
}

/// Pie and doughnut share one layout; doughnut adds the hole size.
fn write_round_chart<W: Write>(writer: &mut W, chart: &ChartSpec) -> std::io::Result<()> {
    let element = chart.kind.xml_element_name();

    write!(writer, "<c:{}>", element)?;
    write!(writer, r#"<c:varyColors val="1"/>"#)?;

    for (index, series) in chart.series.iter().enumerate() {
        write_series_head(writer, index, series)?;
        for (point, color) in chart.point_colors.iter().enumerate() {
            write!(
                writer,
                r#"<c:dPt><c:idx val="{}"/><c:bubble3D val="0"/><c:spPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></c:spPr></c:dPt>"#,
                point, color
            )?;
        }
        write_data_labels(writer, chart, true)?;
        write_categories(writer, &chart.categories)?;
        write_values(writer, &series.values)?;
        write!(writer, "</c:ser>")?;
    }

    write!(writer, r#"<c:firstSliceAng val="0"/>"#)?;
    if chart.kind == ChartKind::Doughnut {
        write!(writer, r#"<c:holeSize val="{}"/>"#, chart.hole_size)?;
    }
    write!(writer, "</c:{}>", element)?;

    Ok(())
}

fn write_series_head<W: Write>(
    writer: &mut W,
    index: usize,
    series: &ChartSeries,
) -> std::io::Result<()> {
    write!(writer, "<c:ser>")?;
    write!(writer, r#"<c:idx val="{0}"/><c:order val="{0}"/>"#, index)?;
    write!(writer, "<c:tx><c:v>{}</c:v></c:tx>", escape_xml(&series.name))
}

fn write_data_labels<W: Write>(
    writer: &mut W,
    chart: &ChartSpec,
    round: bool,
) -> std::io::Result<()> {
    if !chart.show_values {
        return Ok(());
    }
    write!(writer, "<c:dLbls>")?;
    write_text_properties(writer, chart.font_size)?;
    // Round charts label with the share, axis charts with the raw value
    write!(
        writer,
        r#"<c:showLegendKey val="0"/><c:showVal val="{}"/><c:showCatName val="0"/><c:showSerName val="0"/><c:showPercent val="{}"/><c:showBubbleSize val="0"/>"#,
        if round { "0" } else { "1" },
        if round { "1" } else { "0" }
    )?;
    write!(writer, "</c:dLbls>")
}

fn write_categories<W: Write>(writer: &mut W, categories: &[String]) -> std::io::Result<()> {
    write!(writer, "<c:cat><c:strLit>")?;
    write!(writer, r#"<c:ptCount val="{}"/>"#, categories.len())?;
    for (idx, category) in categories.iter().enumerate() {
        write!(
            writer,
            r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#,
            idx,
            escape_xml(category)
        )?;
    }
    write!(writer, "</c:strLit></c:cat>")
}

fn write_values<W: Write>(writer: &mut W, values: &[f64]) -> std::io::Result<()> {
    let mut buffer = ryu::Buffer::new();

    write!(writer, "<c:val><c:numLit>")?;
    write!(writer, "<c:formatCode>General</c:formatCode>")?;
    write!(writer, r#"<c:ptCount val="{}"/>"#, values.len())?;
    for (idx, value) in values.iter().enumerate() {
        let value = if value.is_finite() { *value } else { 0.0 };
        write!(
            writer,
            r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#,
            idx,
            buffer.format(value)
        )?;
    }
    write!(writer, "</c:numLit></c:val>")
}

fn write_axes<W: Write>(writer: &mut W, chart: &ChartSpec) -> std::io::Result<()> {
    let (cat_pos, val_pos) = if chart.kind == ChartKind::Bar {
        ("l", "b")
    } else {
        ("b", "l")
    };

    write!(writer, "<c:catAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, CAT_AX_ID)?;
    write!(
        writer,
        r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#
    )?;
    write!(writer, r#"<c:delete val="0"/>"#)?;
    write!(writer, r#"<c:axPos val="{}"/>"#, cat_pos)?;
    write!(writer, r#"<c:numFmt formatCode="General" sourceLinked="0"/>"#)?;
    write!(
        writer,
        r#"<c:majorTickMark val="none"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#
    )?;
    write_text_properties(writer, chart.font_size)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, VAL_AX_ID)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    write!(
        writer,
        r#"<c:auto val="1"/><c:lblAlgn val="ctr"/><c:lblOffset val="100"/><c:noMultiLvlLbl val="0"/>"#
    )?;
    write!(writer, "</c:catAx>")?;

    write!(writer, "<c:valAx>")?;
    write!(writer, r#"<c:axId val="{}"/>"#, VAL_AX_ID)?;
    write!(
        writer,
        r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#
    )?;
    write!(writer, r#"<c:delete val="0"/>"#)?;
    write!(writer, r#"<c:axPos val="{}"/>"#, val_pos)?;
    write!(
        writer,
        r#"<c:majorGridlines><c:spPr><a:ln w="6350"><a:solidFill><a:srgbClr val="D9D9D9"/></a:solidFill></a:ln></c:spPr></c:majorGridlines>"#
    )?;
    write!(writer, r#"<c:numFmt formatCode="General" sourceLinked="0"/>"#)?;
    write!(
        writer,
        r#"<c:majorTickMark val="none"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#
    )?;
    write_text_properties(writer, chart.font_size)?;
    write!(writer, r#"<c:crossAx val="{}"/>"#, CAT_AX_ID)?;
    write!(writer, r#"<c:crosses val="autoZero"/>"#)?;
    write!(writer, r#"<c:crossBetween val="between"/>"#)?;
    write!(writer, "</c:valAx>")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::types::LegendPosition;

    fn sample(kind: ChartKind) -> ChartSpec {
        ChartSpec::new(kind)
            .with_title("Users & Revenue")
            .with_categories(vec!["Q1".into(), "Q2".into(), "Q3".into()])
            .add_series(ChartSeries::new("Users", vec![10.0, 25.0, 55.0]).with_color("2563EB"))
    }

    #[test]
    fn test_column_chart_has_axes_and_literals() {
        let xml = chart_to_xml(&sample(ChartKind::Column)).unwrap();
        assert!(xml.contains(r#"<c:barDir val="col"/>"#));
        assert!(xml.contains("<c:catAx>"));
        assert!(xml.contains("<c:valAx>"));
        assert!(xml.contains(r#"<c:pt idx="2"><c:v>55.0</c:v></c:pt>"#));
        assert!(xml.contains("Users &amp; Revenue"));
        assert!(xml.ends_with("</c:chartSpace>"));
    }

    #[test]
    fn test_doughnut_has_hole_and_point_colors() {
        let chart = sample(ChartKind::Doughnut)
            .with_point_colors(vec!["111111".into(), "222222".into()])
            .with_hole_size(60)
            .with_legend(LegendPosition::Right)
            .with_values_shown();
        let xml = chart_to_xml(&chart).unwrap();
        assert!(xml.contains("<c:doughnutChart>"));
        assert!(xml.contains(r#"<c:holeSize val="60"/>"#));
        assert_eq!(xml.matches("<c:dPt>").count(), 2);
        assert!(xml.contains(r#"<c:showPercent val="1"/>"#));
        assert!(xml.contains(r#"<c:legendPos val="r"/>"#));
        assert!(!xml.contains("<c:catAx>"));
    }

    #[test]
    fn test_non_finite_values_are_written_as_zero() {
        let chart = ChartSpec::new(ChartKind::Line)
            .with_categories(vec!["a".into()])
            .add_series(ChartSeries::new("s", vec![f64::NAN]));
        let xml = chart_to_xml(&chart).unwrap();
        assert!(xml.contains("<c:v>0.0</c:v>"));
        assert!(xml.contains(r#"<c:autoTitleDeleted val="1"/>"#));
    }
}
