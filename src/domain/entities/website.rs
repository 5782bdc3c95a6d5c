//! Website entity: one listed site and its ingestion from sheet rows.

use crate::domain::filter::parse_traffic;
use crate::domain::table::Table;
use crate::utils::numeric::{parse_float_prefix, parse_int_prefix};
use serde::Serialize;

/// Column labels used by the listing sheet.
pub mod columns {
    pub const DOMAIN: &str = "WEBSITE";
    pub const AUTHORITY: &str = "DA";
    pub const DOMAIN_RATING: &str = "AHRF DR";
    pub const TRUST_FLOW: &str = "AHRF TF";
    pub const SPAM_SCORE: &str = "Spam Score";
    pub const TRAFFIC_TIER: &str = "Base Traffic";
    pub const CATEGORY: &str = "CATEGORY";
    pub const DOFOLLOW: &str = "DOFOLLOW";
    pub const SPONSORED: &str = "SPONSORED";
    pub const INDEXING: &str = "INDEXING";
    pub const PRICE: &str = "PayPal";
}

/// One sheet row as ordered `(label, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    cells: Vec<(String, String)>,
}

impl SheetRow {
    /// Zips column labels to a row's cells.
    ///
    /// Cells beyond the last label are ignored; labels without a cell read as `""`.
    pub fn zip(columns: &[String], cells: &[String]) -> Self {
        let cells = columns
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let value = cells.get(i).map(|v| v.trim()).unwrap_or_default();
                (label.clone(), value.to_string())
            })
            .collect();
        Self { cells }
    }

    /// Value of the last column carrying `label`, or `""`.
    pub fn get(&self, label: &str) -> &str {
        self.cells
            .iter()
            .rev()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }

    /// Pairs in column order.
    pub fn cells(&self) -> &[(String, String)] {
        &self.cells
    }
}

/// A website listed for link insertion.
///
/// Every field is trimmed text; an empty string means the sheet had no value.
/// `domain` is never empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Website {
    pub domain: String,
    pub authority: String,
    pub domain_rating: String,
    pub trust_flow: String,
    pub spam_score: String,
    pub traffic_tier: String,
    pub category: String,
    pub dofollow: String,
    pub sponsored: String,
    pub indexing: String,
    pub price: String,
}

impl Website {
    /// Builds a website from a sheet row, or `None` when the domain is empty.
    pub fn from_row(row: &SheetRow) -> Option<Self> {
        let domain = row.get(columns::DOMAIN);
        if domain.is_empty() {
            return None;
        }

        Some(Self {
            domain: domain.to_string(),
            authority: row.get(columns::AUTHORITY).to_string(),
            domain_rating: row.get(columns::DOMAIN_RATING).to_string(),
            trust_flow: row.get(columns::TRUST_FLOW).to_string(),
            spam_score: row.get(columns::SPAM_SCORE).to_string(),
            traffic_tier: row.get(columns::TRAFFIC_TIER).to_string(),
            category: row.get(columns::CATEGORY).to_string(),
            dofollow: row.get(columns::DOFOLLOW).to_string(),
            sponsored: row.get(columns::SPONSORED).to_string(),
            indexing: row.get(columns::INDEXING).to_string(),
            price: row.get(columns::PRICE).to_string(),
        })
    }

    /// Authority score, 0 when not numeric.
    pub fn authority_score(&self) -> i64 {
        parse_int_prefix(&self.authority).unwrap_or(0)
    }

    /// Domain rating score, 0 when not numeric.
    pub fn domain_rating_score(&self) -> i64 {
        parse_int_prefix(&self.domain_rating).unwrap_or(0)
    }

    /// Traffic figure used by the traffic range filter.
    ///
    /// Read from the trust-flow column, which the sheet fills with
    /// suffixed figures such as `12K`.
    pub fn traffic_value(&self) -> f64 {
        parse_traffic(&self.trust_flow)
    }

    /// Listed price, 0 when absent or not numeric.
    pub fn price_value(&self) -> f64 {
        parse_float_prefix(&self.price)
            .filter(|p| p.is_finite())
            .unwrap_or(0.0)
    }
}

/// Zips every row of `table` and keeps the ones with a domain.
///
/// Row order is preserved.
pub fn ingest(table: &Table) -> Vec<Website> {
    table
        .rows
        .iter()
        .map(|cells| SheetRow::zip(&table.columns, cells))
        .filter_map(|row| Website::from_row(&row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["WEBSITE", "DA", "AHRF DR", "AHRF TF", "CATEGORY", "PayPal"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_ingest_drops_rows_without_domain() {
        let table = Table {
            columns: labels(),
            rows: vec![
                row(&["alpha.com", "40", "30", "1K", "Tech", "50"]),
                row(&["", "90", "90", "", "", ""]),
                row(&["   ", "10", "", "", "", ""]),
                row(&["beta.org", "", "", "", "News", ""]),
            ],
        };

        let websites = ingest(&table);

        assert_eq!(websites.len(), 2);
        assert_eq!(websites[0].domain, "alpha.com");
        assert_eq!(websites[1].domain, "beta.org");
    }

    #[test]
    fn test_sheet_row_preserves_column_order() {
        let row = SheetRow::zip(&labels(), &row(&["a.com", "1", "2", "3", "Tech", "9"]));
        let order: Vec<&str> = row.cells().iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(order, vec!["WEBSITE", "DA", "AHRF DR", "AHRF TF", "CATEGORY", "PayPal"]);
    }

    #[test]
    fn test_short_rows_default_to_empty() {
        let table = Table {
            columns: labels(),
            rows: vec![row(&["short.com", "25"])],
        };

        let site = &ingest(&table)[0];
        assert_eq!(site.authority, "25");
        assert_eq!(site.category, "");
        assert_eq!(site.price, "");
        assert_eq!(site.spam_score, "");
    }

    #[test]
    fn test_cells_are_trimmed() {
        let table = Table {
            columns: labels(),
            rows: vec![row(&["  spaced.com ", " 40 ", "", "", " Tech ", ""])],
        };

        let site = &ingest(&table)[0];
        assert_eq!(site.domain, "spaced.com");
        assert_eq!(site.category, "Tech");
        assert_eq!(site.authority_score(), 40);
    }

    #[test]
    fn test_duplicate_labels_resolve_to_last() {
        let columns = row(&["WEBSITE", "DA", "DA"]);
        let row = SheetRow::zip(&columns, &row(&["a.com", "10", "20"]));
        assert_eq!(row.get("DA"), "20");
    }

    #[test]
    fn test_numeric_coercion_defaults_to_zero() {
        let site = Website {
            domain: "x.com".into(),
            authority: "n/a".into(),
            domain_rating: "".into(),
            trust_flow: "unknown".into(),
            price: "free".into(),
            ..Default::default()
        };

        assert_eq!(site.authority_score(), 0);
        assert_eq!(site.domain_rating_score(), 0);
        assert_eq!(site.traffic_value(), 0.0);
        assert_eq!(site.price_value(), 0.0);
    }

    #[test]
    fn test_numeric_coercion_reads_values() {
        let site = Website {
            domain: "x.com".into(),
            authority: "55".into(),
            domain_rating: "61.5".into(),
            trust_flow: "2.5K".into(),
            price: "120.50".into(),
            ..Default::default()
        };

        assert_eq!(site.authority_score(), 55);
        assert_eq!(site.domain_rating_score(), 61);
        assert_eq!(site.traffic_value(), 2500.0);
        assert_eq!(site.price_value(), 120.5);
    }
}
