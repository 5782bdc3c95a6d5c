//! Handlers for the listing endpoints.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::listing::{FiltersResponse, ListingQuery, PaginationMeta, WebsitesResponse};
use crate::domain::marketplace::MarketplaceView;
use crate::domain::pagination::PAGE_SIZE;
use crate::error::AppError;
use crate::state::AppState;

/// Returns one page of websites matching the query filters.
///
/// # Endpoint
///
/// `GET /api/websites?search=blog&min_da=20&page=2`
///
/// A page outside the filtered range leaves the cursor on page 1.
///
/// # Response
///
/// ```json
/// {
///   "items": [{"domain": "techblog.com", "authority": "45", "price": "120", ...}],
///   "pagination": {"page": 1, "page_size": 50, "total_items": 1, "total_pages": 1}
/// }
/// ```
///
/// # Errors
///
/// Returns 503 while the catalog is loading or after the load failed.
pub async fn websites_handler(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<WebsitesResponse>, AppError> {
    let catalog = state.catalog.ready()?;

    let mut view = MarketplaceView::new(&catalog.websites);
    if query.has_filters() {
        view.apply_filters(&query.criteria());
    }
    view.change_page(query.page());

    Ok(Json(WebsitesResponse {
        items: view.window().iter().map(|site| (*site).clone()).collect(),
        pagination: PaginationMeta {
            page: view.current_page(),
            page_size: PAGE_SIZE,
            total_items: view.total_items(),
            total_pages: view.page_count(),
        },
    }))
}

/// Returns the category and region selector options.
///
/// # Endpoint
///
/// `GET /api/filters`
///
/// # Errors
///
/// Returns 503 while the catalog is loading or after the load failed.
pub async fn filters_handler(
    State(state): State<AppState>,
) -> Result<Json<FiltersResponse>, AppError> {
    let catalog = state.catalog.ready()?;

    Ok(Json(FiltersResponse {
        categories: catalog.categories.clone(),
        regions: catalog.regions.clone(),
        loaded_at: catalog.loaded_at,
    }))
}
