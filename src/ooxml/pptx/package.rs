//! Package assembly for generated PowerPoint presentations.
//!
//! Lays a [`Presentation`] out as OPC parts: the presentation part, one slide
//! master with a blank layout, the theme, the property parts, one part per
//! slide and one chart part per chart frame.

use crate::ooxml::charts::chart_to_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{PackageWriter, Relationships};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::Presentation;
use crate::ooxml::pptx::writer::relmap::RelationshipMapper;
use chrono::{DateTime, Utc};

const PRESENTATION_PART: &str = "/ppt/presentation.xml";
const MASTER_PART: &str = "/ppt/slideMasters/slideMaster1.xml";
const LAYOUT_PART: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_PART: &str = "/ppt/theme/theme1.xml";

/// Serialize a presentation into .pptx bytes.
///
/// # Arguments
/// * `pres` - The presentation to write
/// * `theme_xml` - Content of the theme part
/// * `created` - Timestamp recorded in the core properties
pub fn write_package(
    pres: &Presentation,
    theme_xml: &str,
    created: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let mut writer = PackageWriter::new();

    // Package-level relationships
    let mut pkg_rels = Relationships::new();
    pkg_rels.add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
    pkg_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
    pkg_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");
    writer.add_rels("/", &pkg_rels);

    writer.add_part(
        "/docProps/core.xml",
        ct::OPC_CORE_PROPERTIES,
        template::core_props_xml(pres.title(), pres.author(), created).into_bytes(),
    );
    writer.add_part(
        "/docProps/app.xml",
        ct::OFC_EXTENDED_PROPERTIES,
        template::app_props_xml(pres.slide_count()).into_bytes(),
    );

    // Presentation relationships: master first, then slides, then properties
    let mut pres_rels = Relationships::new();
    let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    let slide_rel_ids: Vec<String> = (1..=pres.slide_count())
        .map(|n| pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", n)))
        .collect();
    pres_rels.add(rt::PRES_PROPS, "presProps.xml");
    pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
    pres_rels.add(rt::THEME, "theme/theme1.xml");
    pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

    writer.add_part(
        PRESENTATION_PART,
        ct::PML_PRESENTATION_MAIN,
        pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?
            .into_bytes(),
    );
    writer.add_rels(PRESENTATION_PART, &pres_rels);

    // Slide master and its single blank layout
    let mut master_rels = Relationships::new();
    let layout_rel_id = master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add(rt::THEME, "../theme/theme1.xml");
    writer.add_part(
        MASTER_PART,
        ct::PML_SLIDE_MASTER,
        template::slide_master_xml(&layout_rel_id).into_bytes(),
    );
    writer.add_rels(MASTER_PART, &master_rels);

    let mut layout_rels = Relationships::new();
    layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    writer.add_part(
        LAYOUT_PART,
        ct::PML_SLIDE_LAYOUT,
        template::blank_layout_xml().into_bytes(),
    );
    writer.add_rels(LAYOUT_PART, &layout_rels);

    writer.add_part(THEME_PART, ct::OFC_THEME, theme_xml.as_bytes().to_vec());
    writer.add_part(
        "/ppt/presProps.xml",
        ct::PML_PRES_PROPS,
        template::PRES_PROPS_XML.as_bytes().to_vec(),
    );
    writer.add_part(
        "/ppt/viewProps.xml",
        ct::PML_VIEW_PROPS,
        template::VIEW_PROPS_XML.as_bytes().to_vec(),
    );
    writer.add_part(
        "/ppt/tableStyles.xml",
        ct::PML_TABLE_STYLES,
        template::TABLE_STYLES_XML.as_bytes().to_vec(),
    );

    // Slides and their charts. Relationships are created before slide XML so
    // chart frames can reference the actual IDs.
    let mut rel_mapper = RelationshipMapper::new();
    let mut chart_number = 0;
    for (slide_index, slide) in pres.slides().iter().enumerate() {
        let partname = format!("/ppt/slides/slide{}.xml", slide_index + 1);

        let mut slide_rels = Relationships::new();
        slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

        for (chart_index, chart) in slide.charts().enumerate() {
            chart_number += 1;
            let rel_id = slide_rels.add(rt::CHART, format!("../charts/chart{}.xml", chart_number));
            rel_mapper.add_chart(slide_index, chart_index, rel_id, chart_number);

            writer.add_part(
                &format!("/ppt/charts/chart{}.xml", chart_number),
                ct::DML_CHART,
                chart_to_xml(chart)?.into_bytes(),
            );
        }

        writer.add_part(
            &partname,
            ct::PML_SLIDE,
            slide.to_xml(slide_index, &rel_mapper)?.into_bytes(),
        );
        writer.add_rels(&partname, &slide_rels);
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::{ChartKind, ChartSeries, ChartSpec};
    use crate::ooxml::pptx::writer::{Frame, Slide};
    use std::io::{Cursor, Read};

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_layout() {
        let mut pres = Presentation::new();
        pres.set_title("Deck");
        pres.push_slide(Slide::new("One"));
        let chart_slide = pres.push_slide(Slide::new("Two"));
        chart_slide.add_chart(
            "Chart",
            Frame::inches(1.0, 1.0, 4.0, 3.0),
            ChartSpec::new(ChartKind::Pie)
                .with_categories(vec!["A".into(), "B".into()])
                .add_series(ChartSeries::new("Share", vec![60.0, 40.0])),
        );

        let bytes = write_package(&pres, template::DEFAULT_THEME_XML, Utc::now()).unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "ppt/charts/chart1.xml",
            "ppt/theme/theme1.xml",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }

        let slide_rels = read_entry(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(slide_rels.contains("../charts/chart1.xml"));

        let content_types = read_entry(&bytes, "[Content_Types].xml");
        assert!(content_types.contains("/ppt/charts/chart1.xml"));
        assert!(content_types.contains("/ppt/slides/slide2.xml"));
    }
}
