//! Presentation models rendered by the page templates.
//!
//! Everything here is plain text ready for interpolation; templates escape
//! it on output.

use crate::api::dto::listing::ListingQuery;
use crate::domain::cart::{CartNotice, NoticeKind};
use crate::domain::entities::{CartItem, LINK_INSERTION, Website};
use crate::domain::pagination::PageControl;

/// Shown for a metric the sheet left empty.
pub const PLACEHOLDER: &str = "-";

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// Price as shown to visitors.
pub fn price_label(price: f64) -> String {
    format!("${price}")
}

/// One label/value pair of the collapsible detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// One website row of the marketplace table.
#[derive(Debug, Clone, PartialEq)]
pub struct WebsiteRow {
    pub domain: String,
    /// Outbound link to the website.
    pub href: String,
    /// Element id of the narrow-viewport detail panel.
    pub detail_id: String,
    pub authority: String,
    pub domain_rating: String,
    pub trust_flow: String,
    pub spam_score: String,
    pub traffic_tier: String,
    pub category: String,
    pub dofollow: String,
    pub sponsored: String,
    pub indexing: String,
    pub price_label: String,
    /// Numeric price submitted by the row's cart forms.
    pub price: String,
    pub product_type: &'static str,
    pub details: Vec<DetailField>,
}

impl WebsiteRow {
    /// Projects `site`, the `index`-th website of the filtered listing.
    pub fn project(index: usize, site: &Website) -> Self {
        let price_label = if site.price.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            format!("${}", site.price)
        };

        let mut row = Self {
            domain: site.domain.clone(),
            href: format!("https://{}", site.domain),
            detail_id: format!("site-details-{index}"),
            authority: or_placeholder(&site.authority),
            domain_rating: or_placeholder(&site.domain_rating),
            trust_flow: or_placeholder(&site.trust_flow),
            spam_score: or_placeholder(&site.spam_score),
            traffic_tier: or_placeholder(&site.traffic_tier),
            category: or_placeholder(&site.category),
            dofollow: or_placeholder(&site.dofollow),
            sponsored: or_placeholder(&site.sponsored),
            indexing: or_placeholder(&site.indexing),
            price_label,
            price: site.price_value().to_string(),
            product_type: LINK_INSERTION,
            details: Vec::new(),
        };

        row.details = vec![
            DetailField { label: "DA", value: row.authority.clone() },
            DetailField { label: "DR", value: row.domain_rating.clone() },
            DetailField { label: "TF", value: row.trust_flow.clone() },
            DetailField { label: "Spam Score", value: row.spam_score.clone() },
            DetailField { label: "Traffic", value: row.traffic_tier.clone() },
            DetailField { label: "Category", value: row.category.clone() },
            DetailField { label: "Dofollow", value: row.dofollow.clone() },
            DetailField { label: "Sponsored", value: row.sponsored.clone() },
            DetailField { label: "Indexing", value: row.indexing.clone() },
            DetailField { label: "Price", value: row.price_label.clone() },
        ];

        row
    }
}

/// Marketplace URL of `page` under the given filter query.
pub fn page_path(filter_query: &str, page: u32) -> String {
    if filter_query.is_empty() {
        format!("/websites?page={page}")
    } else {
        format!("/websites?{filter_query}&page={page}")
    }
}

/// One rendered pagination item.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: String,
    /// Link target; `None` for the active page, disabled arrows and ellipses.
    pub href: Option<String>,
    pub active: bool,
    pub disabled: bool,
    pub ellipsis: bool,
}

impl NavItem {
    fn link(label: String, target: u32, filter_query: &str) -> Self {
        Self {
            label,
            href: Some(format!("{}#results", page_path(filter_query, target))),
            active: false,
            disabled: false,
            ellipsis: false,
        }
    }

    fn inert(label: String, active: bool, disabled: bool, ellipsis: bool) -> Self {
        Self {
            label,
            href: None,
            active,
            disabled,
            ellipsis,
        }
    }

    pub fn from_control(control: &PageControl, filter_query: &str) -> Self {
        match *control {
            PageControl::Previous { disabled: true, .. } => {
                Self::inert("Previous".into(), false, true, false)
            }
            PageControl::Previous { target, .. } => {
                Self::link("Previous".into(), target, filter_query)
            }
            PageControl::Page { number, active: true } => {
                Self::inert(number.to_string(), true, false, false)
            }
            PageControl::Page { number, .. } => {
                Self::link(number.to_string(), number, filter_query)
            }
            PageControl::Ellipsis => Self::inert("…".into(), false, true, true),
            PageControl::Next { disabled: true, .. } => {
                Self::inert("Next".into(), false, true, false)
            }
            PageControl::Next { target, .. } => Self::link("Next".into(), target, filter_query),
        }
    }
}

/// Cart counter shown in the header.
#[derive(Debug, Clone, PartialEq)]
pub struct CartBadge {
    pub count: usize,
    pub class: &'static str,
}

impl CartBadge {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            class: if count > 0 { "bg-danger" } else { "bg-secondary" },
        }
    }
}

/// A cart notice ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeView {
    /// `toast` or `alert`.
    pub kind: &'static str,
    pub message: String,
}

impl From<&CartNotice> for NoticeView {
    fn from(notice: &CartNotice) -> Self {
        Self {
            kind: match notice.kind() {
                NoticeKind::Toast => "toast",
                NoticeKind::Alert => "alert",
            },
            message: notice.message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// Selector options with the current choice marked.
pub fn select_options(values: &[String], current: &str) -> Vec<SelectOption> {
    values
        .iter()
        .map(|value| SelectOption {
            value: value.clone(),
            selected: value == current,
        })
        .collect()
}

/// Filter inputs echoed back into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterForm {
    pub search: String,
    pub min_da: String,
    pub max_da: String,
    pub min_dr: String,
    pub max_dr: String,
    pub min_traffic: String,
    pub max_traffic: String,
    pub min_price: String,
    pub max_price: String,
}

impl From<&ListingQuery> for FilterForm {
    fn from(query: &ListingQuery) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            search: text(&query.search),
            min_da: text(&query.min_da),
            max_da: text(&query.max_da),
            min_dr: text(&query.min_dr),
            max_dr: text(&query.max_dr),
            min_traffic: text(&query.min_traffic),
            max_traffic: text(&query.max_traffic),
            min_price: text(&query.min_price),
            max_price: text(&query.max_price),
        }
    }
}

/// One line of the cart and checkout pages.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub domain: String,
    pub product_type: String,
    pub price_label: String,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            domain: item.domain.clone(),
            product_type: item.product_type.clone(),
            price_label: price_label(item.price),
        }
    }
}

/// Cart total with two decimals.
pub fn total_label(total: f64) -> String {
    format!("${total:.2}")
}
