//! Relationship collections for OPC parts.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: &'static str,
    target: String,
}

impl Relationship {
    /// Relationship ID, e.g. `rId3`.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Relationship type URI.
    #[inline]
    pub fn reltype(&self) -> &str {
        self.reltype
    }

    /// Target reference relative to the source part.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target
    }
}

/// Ordered relationships of one source part.
///
/// IDs are allocated sequentially (`rId1`, `rId2`, ...) in insertion order,
/// so the caller can write a part's XML with the IDs returned by [`add`].
///
/// [`add`]: Relationships::add
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID.
    pub fn add(&mut self, reltype: &'static str, target: impl Into<String>) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target: target.into(),
        });
        r_id
    }

    /// Number of relationships.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Whether there are no relationships.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Iterate relationships in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Serialize to a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"), "rId1");
        assert_eq!(rels.add(rt::CHART, "../charts/chart1.xml"), "rId2");
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_rels_xml() {
        let mut rels = Relationships::new();
        rels.add(rt::THEME, "theme/theme1.xml");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="theme/theme1.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
