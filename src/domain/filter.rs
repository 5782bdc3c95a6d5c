//! Marketplace filter engine.
//!
//! [`filter`] is pure: it keeps the websites satisfying every predicate of a
//! [`FilterCriteria`] snapshot. Unparseable figures count as zero instead of
//! excluding the site.

use crate::domain::entities::Website;
use crate::utils::numeric::parse_float_prefix;

/// Upper bound used when a traffic or price maximum is not given.
pub const UNBOUNDED: i64 = 999_999_999;

/// Upper bound used when a score maximum is not given.
pub const MAX_SCORE: i64 = 100;

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min as f64 && value <= self.max as f64
    }
}

/// Snapshot of the visitor's filter inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Free text matched against the domain, stored lower-cased.
    pub search: String,
    pub authority: Range,
    pub domain_rating: Range,
    pub traffic: Range,
    pub price: Range,
    /// Exact category; empty means any.
    pub category: String,
    /// Exact traffic tier; empty means any.
    pub region: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            authority: Range::new(0, MAX_SCORE),
            domain_rating: Range::new(0, MAX_SCORE),
            traffic: Range::new(0, UNBOUNDED),
            price: Range::new(0, UNBOUNDED),
            category: String::new(),
            region: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Sets the search text, lower-casing it for comparison.
    pub fn with_search(mut self, text: &str) -> Self {
        self.search = text.to_lowercase();
        self
    }

    /// True when no predicate narrows the listing.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `site` satisfies every active predicate.
    pub fn matches(&self, site: &Website) -> bool {
        let match_search = site.domain.to_lowercase().contains(&self.search);
        let match_authority = self.authority.contains(site.authority_score() as f64);
        let match_rating = self.domain_rating.contains(site.domain_rating_score() as f64);
        let match_traffic = self.traffic.contains(site.traffic_value());
        let match_price = self.price.contains(site.price_value());
        let match_category = self.category.is_empty() || site.category == self.category;
        let match_region = self.region.is_empty() || site.traffic_tier == self.region;

        match_search
            && match_authority
            && match_rating
            && match_traffic
            && match_price
            && match_category
            && match_region
    }
}

/// Returns the websites matching `criteria`, in listing order.
pub fn filter<'a>(records: &'a [Website], criteria: &FilterCriteria) -> Vec<&'a Website> {
    records.iter().filter(|site| criteria.matches(site)).collect()
}

/// Parses a traffic figure such as `"1.2K"`, `"3M"` or `"12,500"`.
///
/// Thousands separators are dropped; a `K` anywhere multiplies by 1,000 and
/// an `M` by 1,000,000. Text without a leading number yields 0.
pub fn parse_traffic(raw: &str) -> f64 {
    let upper = raw.to_uppercase();
    let Some(mut value) = parse_float_prefix(&upper.replace(',', "")) else {
        return 0.0;
    };

    if upper.contains('K') {
        value *= 1_000.0;
    }
    if upper.contains('M') {
        value *= 1_000_000.0;
    }

    if value.is_nan() { 0.0 } else { value }
}
