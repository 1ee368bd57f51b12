/// Relationship ID mapper for tracking chart relationships during package generation.
///
/// Relationships are created first and the mapper hands the actual IDs to the
/// slide XML writer. It is organised per slide, as each slide has its own
/// relationship part.
use std::collections::HashMap;

/// Maps charts to their slide relationship IDs and package part numbers.
#[derive(Debug, Default)]
pub struct RelationshipMapper {
    /// Maps (slide_index, chart_index_in_slide) to relationship ID
    chart_ids: HashMap<(usize, usize), String>,
    /// Maps (slide_index, chart_index_in_slide) to the N of `ppt/charts/chartN.xml`
    chart_numbers: HashMap<(usize, usize), usize>,
}

impl RelationshipMapper {
    /// Create a new empty relationship mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chart relationship mapping for a specific slide.
    ///
    /// # Arguments
    /// * `slide_index` - The index of the slide (0-based)
    /// * `chart_index_in_slide` - The index of the chart within that slide (0-based)
    /// * `rel_id` - The relationship ID (e.g., "rId2")
    /// * `chart_number` - The package-wide chart part number (1-based)
    pub fn add_chart(
        &mut self,
        slide_index: usize,
        chart_index_in_slide: usize,
        rel_id: String,
        chart_number: usize,
    ) {
        let key = (slide_index, chart_index_in_slide);
        self.chart_ids.insert(key, rel_id);
        self.chart_numbers.insert(key, chart_number);
    }

    /// Get the relationship ID for a chart in a specific slide.
    pub fn get_chart_id(&self, slide_index: usize, chart_index_in_slide: usize) -> Option<&str> {
        self.chart_ids
            .get(&(slide_index, chart_index_in_slide))
            .map(|s| s.as_str())
    }

    /// Get the package-wide chart number for a chart in a specific slide.
    pub fn get_chart_number(
        &self,
        slide_index: usize,
        chart_index_in_slide: usize,
    ) -> Option<usize> {
        self.chart_numbers
            .get(&(slide_index, chart_index_in_slide))
            .copied()
    }

    /// Total number of registered charts.
    pub fn chart_count(&self) -> usize {
        self.chart_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_lookup() {
        let mut mapper = RelationshipMapper::new();
        mapper.add_chart(5, 0, "rId2".to_string(), 1);
        mapper.add_chart(5, 1, "rId3".to_string(), 2);

        assert_eq!(mapper.get_chart_id(5, 1), Some("rId3"));
        assert_eq!(mapper.get_chart_number(5, 0), Some(1));
        assert_eq!(mapper.get_chart_id(6, 0), None);
        assert_eq!(mapper.chart_count(), 2);
    }
}
