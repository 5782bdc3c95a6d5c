//! Listing query parameters and response bodies.

use crate::domain::cart::CartNotice;
use crate::domain::entities::Website;
use crate::domain::filter::{FilterCriteria, MAX_SCORE, Range, UNBOUNDED};
use crate::utils::numeric::parse_int_prefix;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use url::form_urlencoded;

/// Filter inputs, page cursor and carried notice of a listing request.
///
/// Bounds arrive as raw text; anything that is not a number falls back to
/// the default bound. An empty `page` is treated as absent.
#[serde_as]
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub min_da: Option<String>,
    pub max_da: Option<String>,
    pub min_dr: Option<String>,
    pub max_dr: Option<String>,
    pub min_traffic: Option<String>,
    pub max_traffic: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    pub page: Option<u32>,

    pub notice: Option<String>,
    pub notice_domain: Option<String>,
}

fn bound(raw: &Option<String>, default: i64) -> i64 {
    raw.as_deref().and_then(parse_int_prefix).unwrap_or(default)
}

fn selector(raw: &Option<String>) -> String {
    raw.as_deref().map(str::trim).unwrap_or_default().to_string()
}

impl ListingQuery {
    /// Filter criteria described by this query.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            authority: Range::new(bound(&self.min_da, 0), bound(&self.max_da, MAX_SCORE)),
            domain_rating: Range::new(bound(&self.min_dr, 0), bound(&self.max_dr, MAX_SCORE)),
            traffic: Range::new(
                bound(&self.min_traffic, 0),
                bound(&self.max_traffic, UNBOUNDED),
            ),
            price: Range::new(bound(&self.min_price, 0), bound(&self.max_price, UNBOUNDED)),
            category: selector(&self.category),
            region: selector(&self.region),
            ..FilterCriteria::default()
        }
        .with_search(self.search.as_deref().unwrap_or_default())
    }

    /// Requested page, 1 when absent.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Notice carried over from a cart redirect, if it is a known one.
    pub fn notice(&self) -> Option<CartNotice> {
        let code = self.notice.as_deref()?;
        CartNotice::from_code(code, self.notice_domain.as_deref())
    }

    /// Whether any filter input is present; without one the listing is shown
    /// unfiltered.
    pub fn has_filters(&self) -> bool {
        !self.filter_pairs().is_empty()
    }

    /// Non-empty filter inputs as `(name, value)` pairs, in form order.
    pub fn filter_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", &self.search),
            ("min_da", &self.min_da),
            ("max_da", &self.max_da),
            ("min_dr", &self.min_dr),
            ("max_dr", &self.max_dr),
            ("min_traffic", &self.min_traffic),
            ("max_traffic", &self.max_traffic),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
            ("category", &self.category),
            ("region", &self.region),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        })
        .collect()
    }

    /// URL-encoded filter inputs, without page and notice.
    pub fn filter_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.filter_pairs())
            .finish()
    }
}

/// One page of filtered websites.
#[derive(Debug, Serialize)]
pub struct WebsitesResponse {
    pub items: Vec<Website>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: u32,
}

/// Options for the category and region selectors.
#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub categories: Vec<String>,
    pub regions: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> ListingQuery {
        let pairs: Vec<(String, String)> = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }

    #[test]
    fn test_empty_query_gives_default_criteria() {
        let q = query("");
        assert!(q.criteria().is_default());
        assert_eq!(q.page(), 1);
        assert!(q.notice().is_none());
    }

    #[test]
    fn test_has_filters_ignores_page_and_notice() {
        assert!(!query("").has_filters());
        assert!(!query("page=2&notice=added&notice_domain=x.com").has_filters());
        assert!(!query("search=&min_da=").has_filters());
        assert!(query("min_da=10").has_filters());
    }

    #[test]
    fn test_non_numeric_bounds_fall_back() {
        let q = query("min_da=abc&max_da=&max_price=50&min_traffic=1.5K");
        let c = q.criteria();

        assert_eq!(c.authority, Range::new(0, MAX_SCORE));
        assert_eq!(c.price, Range::new(0, 50));
        assert_eq!(c.traffic, Range::new(1, UNBOUNDED));
    }

    #[test]
    fn test_search_is_lowercased_and_selectors_trimmed() {
        let q = query("search=TechBlog&category=%20News%20");
        let c = q.criteria();

        assert_eq!(c.search, "techblog");
        assert_eq!(c.category, "News");
        assert!(c.region.is_empty());
    }

    #[test]
    fn test_page_and_notice() {
        let q = query("page=3&notice=duplicate&notice_domain=x.com");
        assert_eq!(q.page(), 3);
        assert_eq!(
            q.notice(),
            Some(CartNotice::AlreadyInCart { domain: "x.com".into() })
        );

        assert_eq!(query("page=").page(), 1);
        assert!(query("notice=bogus").notice().is_none());
    }

    #[test]
    fn test_filter_query_skips_empty_inputs() {
        let q = query("search=a%20b&min_da=&category=News&page=2&notice=added");
        assert_eq!(q.filter_query(), "search=a+b&category=News");
    }
}
