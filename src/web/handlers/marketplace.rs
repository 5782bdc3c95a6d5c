//! Marketplace page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::Redirect,
};

use crate::api::dto::listing::ListingQuery;
use crate::application::services::CatalogStatus;
use crate::application::services::catalog_service::LOAD_FAILED_MESSAGE;
use crate::domain::marketplace::MarketplaceView;
use crate::state::AppState;
use crate::utils::return_path::DEFAULT_RETURN_PATH;
use crate::web::view::{
    CartBadge, FilterForm, NavItem, NoticeView, SelectOption, WebsiteRow, page_path,
    select_options,
};

/// Template for the marketplace page.
///
/// Renders `templates/websites.html`: the filter form, the results table
/// (or the loading / failure state) and the pagination bar.
#[derive(Template, WebTemplate)]
#[template(path = "websites.html")]
pub struct WebsitesTemplate {
    pub badge: CartBadge,
    pub notice: Option<NoticeView>,
    pub filters: FilterForm,
    pub categories: Vec<SelectOption>,
    pub regions: Vec<SelectOption>,
    pub loading: bool,
    pub error: Option<&'static str>,
    pub rows: Vec<WebsiteRow>,
    pub nav: Vec<NavItem>,
    pub total_items: usize,
    /// Path the row forms return to after adding.
    pub return_to: String,
}

/// `GET /`
pub async fn index_handler() -> Redirect {
    Redirect::to(DEFAULT_RETURN_PATH)
}

/// Renders the marketplace page.
///
/// # Endpoint
///
/// `GET /websites?search=...&min_da=...&page=2`
///
/// Filters, when any input is present, are applied first, which puts the
/// view on page 1; the requested page is then applied and ignored when out
/// of range.
pub async fn websites_page_handler(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> WebsitesTemplate {
    let filter_query = query.filter_query();

    let mut page = WebsitesTemplate {
        badge: CartBadge::new(state.cart.count().await),
        notice: query.notice().as_ref().map(NoticeView::from),
        filters: FilterForm::from(&query),
        categories: Vec::new(),
        regions: Vec::new(),
        loading: false,
        error: None,
        rows: Vec::new(),
        nav: Vec::new(),
        total_items: 0,
        return_to: page_path(&filter_query, 1),
    };

    match state.catalog.status() {
        CatalogStatus::Loading => page.loading = true,
        CatalogStatus::Failed(_) => page.error = Some(LOAD_FAILED_MESSAGE),
        CatalogStatus::Ready(catalog) => {
            let criteria = query.criteria();
            let mut view = MarketplaceView::new(&catalog.websites);
            if query.has_filters() {
                view.apply_filters(&criteria);
            }
            view.change_page(query.page());

            let offset = view.window_offset();
            page.rows = view
                .window()
                .iter()
                .enumerate()
                .map(|(i, site)| WebsiteRow::project(offset + i, site))
                .collect();
            page.nav = view
                .controls()
                .iter()
                .map(|control| NavItem::from_control(control, &filter_query))
                .collect();
            page.categories = select_options(&catalog.categories, &criteria.category);
            page.regions = select_options(&catalog.regions, &criteria.region);
            page.total_items = view.total_items();
            page.return_to = page_path(&filter_query, view.current_page());
        }
    }

    page
}
