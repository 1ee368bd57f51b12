//! Package writer for OPC packages.
//!
//! This module serializes parts into a ZIP archive, writing the
//! `[Content_Types].xml` map first and each part's relationships next to it.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// Package writer that collects parts in memory and emits a ZIP archive.
///
/// Parts are buffered so the content-type map, which has to be the first
/// archive entry, can describe every part.
///
/// # Example
///
/// ```
/// use scaleup_deck::ooxml::opc::PackageWriter;
///
/// let mut writer = PackageWriter::new();
/// writer.add_part("/ppt/presentation.xml", "application/xml", b"<p:presentation/>".to_vec());
/// let bytes = writer.finish().unwrap();
/// assert_eq!(&bytes[0..2], b"PK");
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    content_types: ContentTypesItem,
    parts: Vec<(String, Vec<u8>)>,
}

impl PackageWriter {
    /// Create an empty package writer.
    pub fn new() -> Self {
        Self {
            content_types: ContentTypesItem::new(),
            parts: Vec::new(),
        }
    }

    /// Add a part with its content type.
    ///
    /// # Arguments
    /// * `partname` - Absolute part name, e.g. `/ppt/slides/slide1.xml`
    /// * `content_type` - Content type of the part
    /// * `blob` - Serialized part content
    pub fn add_part(&mut self, partname: &str, content_type: &str, blob: Vec<u8>) {
        self.content_types.add_content_type(partname, content_type);
        self.parts.push((partname.to_string(), blob));
    }

    /// Add the relationships part belonging to `source_partname`.
    ///
    /// `/` is the package itself and maps to `/_rels/.rels`.
    pub fn add_rels(&mut self, source_partname: &str, rels: &Relationships) {
        self.parts
            .push((rels_partname(source_partname), rels.to_xml().into_bytes()));
    }

    /// Number of parts added so far, relationship parts included.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types.to_xml().as_bytes())?;

        for (partname, blob) in &self.parts {
            zip.start_file(partname.trim_start_matches('/'), options)?;
            zip.write_all(blob)?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

/// Relationship part name for a source part.
///
/// `/ppt/slides/slide1.xml` becomes `/ppt/slides/_rels/slide1.xml.rels`.
pub fn rels_partname(source_partname: &str) -> String {
    if source_partname == "/" {
        return "/_rels/.rels".to_string();
    }
    match source_partname.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("/_rels/{}.rels", source_partname),
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
#[derive(Debug)]
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl Default for ContentTypesItem {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();

        // Add standard defaults
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Add a content type for a part.
    ///
    /// Uses the default mapping if the extension already maps to this type,
    /// otherwise records an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, content_type: &str) {
        let ext = partname.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

        if self.defaults.get(ext).map(String::as_str) != Some(content_type) {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        // BTreeMap keeps both lists sorted
        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_rels_partname() {
        assert_eq!(rels_partname("/"), "/_rels/.rels");
        assert_eq!(
            rels_partname("/ppt/slides/slide1.xml"),
            "/ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(
            rels_partname("/ppt/presentation.xml"),
            "/ppt/_rels/presentation.xml.rels"
        );
    }

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type("/ppt/slides/slide1.xml", ct::PML_SLIDE);
        cti.add_content_type("/docProps/custom.xml", ct::XML);

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        // Parts matching the extension default need no override
        assert!(!xml.contains("/docProps/custom.xml"));
    }

    #[test]
    fn test_content_types_is_first_entry() {
        let mut writer = PackageWriter::new();
        writer.add_part("/ppt/slides/slide1.xml", ct::PML_SLIDE, b"<p:sld/>".to_vec());
        let mut rels = Relationships::new();
        rels.add(
            crate::ooxml::opc::constants::relationship_type::OFFICE_DOCUMENT,
            "ppt/presentation.xml",
        );
        writer.add_rels("/", &rels);
        assert_eq!(writer.part_count(), 2);

        let bytes = writer.finish().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut slide = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide)
            .unwrap();
        assert_eq!(slide, "<p:sld/>");
        assert!(archive.by_name("_rels/.rels").is_ok());
    }
}
