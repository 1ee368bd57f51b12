//! Shared table builder: [`TableData`] to a styled slide table.
//!
//! The header row is filled and bold, body rows alternate between two stripe
//! fills, and cells that exactly equal a check or cross glyph are coloured.

use super::components::style;
use super::layout::{font, palette};
use crate::content::TableData;
use crate::ooxml::pptx::{CellStyle, Table, TableCell, TextAlign};
use phf::phf_map;

/// How a body cell is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    /// Check mark: bold success green
    Positive,
    /// Cross: danger red
    Negative,
    /// Anything else
    Plain,
}

static SENTINELS: phf::Map<&'static str, CellTone> = phf_map! {
    "✓" => CellTone::Positive,
    "✔" => CellTone::Positive,
    "✗" => CellTone::Negative,
    "✘" => CellTone::Negative,
    "✕" => CellTone::Negative,
};

/// Classify a cell by exact match against the sentinel glyphs.
#[inline]
pub fn classify(cell: &str) -> CellTone {
    SENTINELS.get(cell).copied().unwrap_or(CellTone::Plain)
}

fn body_style(tone: CellTone, stripe: &str) -> CellStyle {
    let (text, align) = match tone {
        CellTone::Positive => (
            style(font::TABLE + 2.0, palette::SUCCESS).bold(),
            TextAlign::Center,
        ),
        CellTone::Negative => (style(font::TABLE + 2.0, palette::DANGER), TextAlign::Center),
        CellTone::Plain => (style(font::TABLE, palette::TEXT), TextAlign::Left),
    };
    CellStyle::new(text)
        .aligned(align)
        .with_fill(stripe)
        .with_border(palette::BORDER)
}

fn header_style() -> CellStyle {
    CellStyle::new(style(font::TABLE, palette::WHITE).bold())
        .with_fill(palette::TABLE_HEADER)
        .with_border(palette::TABLE_HEADER)
}

/// Build a table of `data.rows.len() + 1` rows and `data.header.len()`
/// columns, splitting `width` evenly across the columns.
///
/// Rows are taken as given; row lengths are checked when content is loaded.
pub fn build_table(data: &TableData, width: i64, row_height: i64) -> Table {
    let columns = data.header.len().max(1);
    let column_width = width / columns as i64;

    let mut rows = Vec::with_capacity(data.rows.len() + 1);

    let header = header_style();
    rows.push(
        data.header
            .iter()
            .map(|title| TableCell::new(title.as_str(), header.clone()))
            .collect(),
    );

    for (index, row) in data.rows.iter().enumerate() {
        let stripe = if index % 2 == 0 {
            palette::STRIPE_EVEN
        } else {
            palette::STRIPE_ODD
        };
        rows.push(
            row.iter()
                .map(|cell| TableCell::new(cell.as_str(), body_style(classify(cell), stripe)))
                .collect(),
        );
    }

    Table {
        column_widths: vec![column_width; data.header.len()],
        row_height,
        rows,
        first_row: true,
        band_rows: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(classify("✓"), CellTone::Positive);
        assert_eq!(classify("✔"), CellTone::Positive);
        assert_eq!(classify("✗"), CellTone::Negative);
        assert_eq!(classify("✕"), CellTone::Negative);
        assert_eq!(classify("✓ yes"), CellTone::Plain);
        assert_eq!(classify(" ✓"), CellTone::Plain);
        assert_eq!(classify("Yes"), CellTone::Plain);
    }

    #[test]
    fn test_sentinel_styling_is_distinct() {
        let data = TableData::new(&["Feature", "Us", "Them"], &[&["Ledger", "✓", "✗"]]);
        let table = build_table(&data, 3_000_000, 300_000);

        let plain = &table.cell(1, 0).unwrap().style;
        let positive = &table.cell(1, 1).unwrap().style;
        let negative = &table.cell(1, 2).unwrap().style;

        assert_ne!(positive.text, negative.text);
        assert_ne!(positive.text, plain.text);
        assert_ne!(negative.text, plain.text);
        assert_eq!(positive.text.color.as_deref(), Some(palette::SUCCESS));
        assert_eq!(negative.text.color.as_deref(), Some(palette::DANGER));
        assert_eq!(plain.text.color.as_deref(), Some(palette::TEXT));
    }

    #[test]
    fn test_header_and_striping() {
        let data = TableData::new(&["A", "B"], &[&["1", "2"], &["3", "4"], &["5", "6"]]);
        let table = build_table(&data, 2_000_000, 300_000);

        let header = &table.cell(0, 0).unwrap().style;
        assert!(header.text.bold);
        assert_eq!(header.fill.as_deref(), Some(palette::TABLE_HEADER));

        let fill = |row| table.cell(row, 0).unwrap().style.fill.clone();
        assert_eq!(fill(1), fill(3));
        assert_ne!(fill(1), fill(2));
        assert_ne!(fill(0), fill(1));
        assert_eq!(table.column_widths, vec![1_000_000, 1_000_000]);
    }

    fn table_data() -> impl Strategy<Value = TableData> {
        (1usize..8, 0usize..12).prop_flat_map(|(columns, rows)| {
            let cell = prop::sample::select(vec!["✓", "✗", "₹6L", "55%", "text", ""]);
            (
                prop::collection::vec("[A-Za-z ]{1,12}", columns),
                prop::collection::vec(
                    prop::collection::vec(cell.prop_map(str::to_string), columns),
                    rows,
                ),
            )
                .prop_map(|(header, rows)| TableData { header, rows })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_table_shape(data in table_data()) {
            let table = build_table(&data, 9_000_000, 300_000);
            prop_assert_eq!(table.row_count(), data.rows.len() + 1);
            prop_assert_eq!(table.column_count(), data.header.len());
            for row in &table.rows {
                prop_assert_eq!(row.len(), data.header.len());
            }
        }

        #[test]
        fn prop_plain_cells_share_default_text_style(data in table_data()) {
            let table = build_table(&data, 9_000_000, 300_000);
            let default_text = style(font::TABLE, palette::TEXT);
            for (row, source) in table.rows.iter().skip(1).zip(&data.rows) {
                for (cell, text) in row.iter().zip(source) {
                    if classify(text) == CellTone::Plain {
                        prop_assert_eq!(&cell.style.text, &default_text);
                    } else {
                        prop_assert_ne!(&cell.style.text, &default_text);
                    }
                }
            }
        }
    }
}
