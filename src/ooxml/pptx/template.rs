//! Presentation template module.
//!
//! Provides the fixed parts every generated .pptx carries: one slide master,
//! one blank layout, the bundled theme and the presentation/view/table-style
//! properties. Document properties are generated per package.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Bundled Office-compatible theme (`ppt/theme/theme1.xml`).
///
/// Exposed as the theme part of the built-in presentation capability.
pub const DEFAULT_THEME_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="ScaleUp">"#,
    r#"<a:themeElements>"#,
    r#"<a:clrScheme name="ScaleUp">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="0F172A"/></a:dk2>"#,
    r#"<a:lt2><a:srgbClr val="F1F5F9"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="2563EB"/></a:accent1>"#,
    r#"<a:accent2><a:srgbClr val="7C3AED"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="16A34A"/></a:accent3>"#,
    r#"<a:accent4><a:srgbClr val="F59E0B"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="DC2626"/></a:accent5>"#,
    r#"<a:accent6><a:srgbClr val="0891B2"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="2563EB"/></a:hlink>"#,
    r#"<a:folHlink><a:srgbClr val="7C3AED"/></a:folHlink>"#,
    r#"</a:clrScheme>"#,
    r#"<a:fontScheme name="ScaleUp">"#,
    r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    r#"</a:fontScheme>"#,
    r#"<a:fmtScheme name="Office">"#,
    r#"<a:fillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="80000"/></a:schemeClr></a:solidFill>"#,
    r#"</a:fillStyleLst>"#,
    r#"<a:lnStyleLst>"#,
    r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"</a:lnStyleLst>"#,
    r#"<a:effectStyleLst>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"<a:effectStyle><a:effectLst/></a:effectStyle>"#,
    r#"</a:effectStyleLst>"#,
    r#"<a:bgFillStyleLst>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="90000"/></a:schemeClr></a:solidFill>"#,
    r#"</a:bgFillStyleLst>"#,
    r#"</a:fmtScheme>"#,
    r#"</a:themeElements>"#,
    r#"<a:objectDefaults/><a:extraClrSchemeLst/>"#,
    r#"</a:theme>"#
);

/// Text style levels shared by the master's title, body and other styles.
const MASTER_TEXT_STYLES: &str = concat!(
    r#"<p:txStyles>"#,
    r#"<p:titleStyle><a:lvl1pPr algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#,
    r#"<a:defRPr sz="3200" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr>"#,
    r#"</a:lvl1pPr></p:titleStyle>"#,
    r#"<p:bodyStyle><a:lvl1pPr marL="0" indent="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPts val="0"/></a:spcBef><a:buNone/>"#,
    r#"<a:defRPr sz="1400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    r#"</a:lvl1pPr></p:bodyStyle>"#,
    r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr>"#,
    r#"<a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:defRPr sz="1400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    r#"</a:lvl1pPr></p:otherStyle>"#,
    r#"</p:txStyles>"#
);

/// Empty shape tree used by the master and the blank layout.
const EMPTY_SP_TREE: &str = concat!(
    r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    r#"</p:spTree>"#
);

/// Generate slideMaster1.xml with its layout list pointing at `layout_rel_id`.
pub fn slide_master_xml(layout_rel_id: &str) -> String {
    let mut xml = String::with_capacity(3072);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str(EMPTY_SP_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#);
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id=""#);
    xml.push_str(layout_rel_id);
    xml.push_str(r#""/></p:sldLayoutIdLst>"#);
    xml.push_str(MASTER_TEXT_STYLES);
    xml.push_str("</p:sldMaster>");
    xml
}

/// Generate slideLayout1.xml (Blank).
pub fn blank_layout_xml() -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">"#);
    xml.push_str(r#"<p:cSld name="Blank">"#);
    xml.push_str(EMPTY_SP_TREE);
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");
    xml
}

/// presProps.xml content.
pub const PRES_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:presentationPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"/>"#
);

/// viewProps.xml content.
pub const VIEW_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:viewPr xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
    r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
    r#"</p:viewPr>"#
);

/// tableStyles.xml content; tables carry direct cell formatting.
pub const TABLE_STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#
);

/// Generate docProps/core.xml.
pub fn core_props_xml(title: Option<&str>, author: Option<&str>, created: DateTime<Utc>) -> String {
    let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
    if let Some(title) = title {
        xml.push_str("<dc:title>");
        xml.push_str(&escape_xml(title));
        xml.push_str("</dc:title>");
    }
    if let Some(author) = author {
        xml.push_str("<dc:creator>");
        xml.push_str(&escape_xml(author));
        xml.push_str("</dc:creator>");
        xml.push_str("<cp:lastModifiedBy>");
        xml.push_str(&escape_xml(author));
        xml.push_str("</cp:lastModifiedBy>");
    }
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&stamp);
    xml.push_str("</dcterms:created>");
    xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&stamp);
    xml.push_str("</dcterms:modified>");
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Generate docProps/app.xml.
pub fn app_props_xml(slide_count: usize) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            r#"<Application>{}</Application>"#,
            r#"<PresentationFormat>Widescreen</PresentationFormat>"#,
            r#"<Slides>{}</Slides>"#,
            r#"<AppVersion>16.0000</AppVersion>"#,
            r#"</Properties>"#
        ),
        env!("CARGO_PKG_NAME"),
        slide_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_master_references_layout() {
        let xml = slide_master_xml("rId1");
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains("<p:txStyles>"));
    }

    #[test]
    fn test_core_props_escape_and_stamp() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let xml = core_props_xml(Some("R&D Deck"), Some("ScaleUp"), created);
        assert!(xml.contains("<dc:title>R&amp;D Deck</dc:title>"));
        assert!(xml.contains("2025-03-01T09:30:00Z"));
    }

    #[test]
    fn test_app_props_slide_count() {
        assert!(app_props_xml(13).contains("<Slides>13</Slides>"));
    }

    #[test]
    fn test_theme_entry_point() {
        assert!(DEFAULT_THEME_XML.contains("<a:theme "));
    }
}
