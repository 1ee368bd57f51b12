//! Schema checks run once when content is loaded.

use super::model::{DeckContent, TableData};
use crate::common::error::{Error, Result};
use crate::deck::numeric::extract_number;

fn check_table(section: &str, name: &str, table: &TableData) -> Result<()> {
    if table.header.is_empty() {
        return Err(Error::InvalidContent(format!(
            "{section}.{name}: table header is empty"
        )));
    }
    for (index, row) in table.rows.iter().enumerate() {
        if row.len() != table.header.len() {
            return Err(Error::InvalidContent(format!(
                "{section}.{name}: row {index} has {} cells, header has {}",
                row.len(),
                table.header.len()
            )));
        }
    }
    Ok(())
}

fn check_numeric(section: &str, field: &str, value: &str) -> Result<()> {
    match extract_number(value) {
        Some(_) => Ok(()),
        None => Err(Error::InvalidContent(format!(
            "{section}.{field}: no leading number in {value:?}"
        ))),
    }
}

fn check_non_empty<T>(section: &str, field: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::InvalidContent(format!("{section}.{field} is empty")));
    }
    Ok(())
}

impl DeckContent {
    /// Check the invariants slide construction relies on.
    ///
    /// Fails on the first violation with [`Error::InvalidContent`] naming the
    /// section and field.
    pub fn validate(&self) -> Result<()> {
        check_non_empty("company", "metrics", &self.company.metrics)?;

        check_table("insight", "comparison", &self.insight.comparison)?;

        check_table("traction", "growth", &self.traction.growth)?;
        if self.traction.growth.column_count() < 2 {
            return Err(Error::InvalidContent(
                "traction.growth: needs a label column and at least one series".to_string(),
            ));
        }
        check_non_empty("traction", "growth.rows", &self.traction.growth.rows)?;
        for (index, row) in self.traction.growth.rows.iter().enumerate() {
            for cell in row.iter().skip(1) {
                check_numeric("traction", &format!("growth.rows[{index}]"), cell)?;
            }
        }

        check_non_empty("business_model", "streams", &self.business_model.streams)?;
        for stream in &self.business_model.streams {
            check_numeric("business_model", "streams.share", &stream.share)?;
        }
        check_table("business_model", "pricing", &self.business_model.pricing)?;

        check_table("unit_economics", "cac", &self.unit_economics.cac)?;
        check_table("unit_economics", "ltv", &self.unit_economics.ltv)?;

        check_table("competitive", "comparison", &self.competitive.comparison)?;

        check_non_empty("roadmap", "timeline", &self.roadmap.timeline)?;
        check_non_empty("team", "founders", &self.team.founders)?;

        check_non_empty("funding", "uses", &self.funding.uses)?;
        for use_of_funds in &self.funding.uses {
            check_numeric("funding", "uses.allocation", &use_of_funds.allocation)?;
        }

        check_non_empty("contact", "cards", &self.contact.cards)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::common::error::Error;
    use crate::content::bundled;

    #[test]
    fn test_bundled_content_is_valid() {
        bundled().validate().unwrap();
    }

    #[test]
    fn test_row_length_mismatch_is_rejected() {
        let mut content = bundled().clone();
        content.competitive.comparison.rows[2].pop();

        let err = content.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidContent(_)));
        assert!(err.to_string().contains("competitive.comparison: row 2"));
    }

    #[test]
    fn test_unparseable_chart_value_is_rejected() {
        let mut content = bundled().clone();
        content.business_model.streams[0].share = "about half".to_string();

        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("business_model.streams.share"));
    }

    #[test]
    fn test_empty_required_list_is_rejected() {
        let mut content = bundled().clone();
        content.roadmap.timeline.clear();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_empty_header_is_rejected() {
        let mut content = bundled().clone();
        content.unit_economics.ltv.header.clear();
        content.unit_economics.ltv.rows.clear();
        assert!(content.validate().unwrap_err().to_string().contains("header is empty"));
    }
}
