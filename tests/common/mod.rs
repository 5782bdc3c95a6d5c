#![allow(dead_code)]

use async_trait::async_trait;
use link_market::application::services::{CartService, CatalogService};
use link_market::application::services::cart_service::DEFAULT_CART_KEY;
use link_market::domain::entities::website::columns;
pub use link_market::domain::table::Table;
use link_market::domain::table::{FetchError, TableSource};
use link_market::infrastructure::storage::MemoryStorage;
use link_market::state::AppState;
use std::sync::Arc;

/// Serves a fixed table.
pub struct StaticSource(pub Table);

#[async_trait]
impl TableSource for StaticSource {
    async fn fetch_table(&self) -> Result<Table, FetchError> {
        Ok(self.0.clone())
    }
}

/// Always fails like an unreachable sheet.
pub struct FailingSource;

#[async_trait]
impl TableSource for FailingSource {
    async fn fetch_table(&self) -> Result<Table, FetchError> {
        Err(FetchError::Transport("connection refused".to_string()))
    }
}

pub fn columns() -> Vec<String> {
    [
        columns::DOMAIN,
        columns::AUTHORITY,
        columns::DOMAIN_RATING,
        columns::TRUST_FLOW,
        columns::SPAM_SCORE,
        columns::TRAFFIC_TIER,
        columns::CATEGORY,
        columns::DOFOLLOW,
        columns::SPONSORED,
        columns::INDEXING,
        columns::PRICE,
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

/// A sheet row in column order.
pub fn row(domain: &str, authority: &str, category: &str, region: &str, price: &str) -> Vec<String> {
    vec![
        domain.to_string(),
        authority.to_string(),
        "30".to_string(),
        "12K".to_string(),
        "2".to_string(),
        region.to_string(),
        category.to_string(),
        "Yes".to_string(),
        "No".to_string(),
        "Google News".to_string(),
        price.to_string(),
    ]
}

/// `n` websites named `site0.com`, `site1.com`, ...
pub fn numbered_table(n: usize) -> Table {
    Table {
        columns: columns(),
        rows: (0..n)
            .map(|i| row(&format!("site{i}.com"), "40", "Tech", "US", "25"))
            .collect(),
    }
}

pub fn sample_table() -> Table {
    Table {
        columns: columns(),
        rows: vec![
            row("techblog.com", "45", "Tech", "US", "120"),
            row("newsportal.org", "62", "News", "UK", "250"),
            row("freebie.net", "20", "Tech", "US", ""),
        ],
    }
}

pub struct TestContext {
    pub state: AppState,
    pub storage: Arc<MemoryStorage>,
}

async fn build(source: Arc<dyn TableSource>, load: bool, storage: Arc<MemoryStorage>) -> TestContext {
    let catalog = Arc::new(CatalogService::new(source));
    if load {
        let _ = catalog.load().await;
    }

    let cart = Arc::new(CartService::restore(storage.clone(), DEFAULT_CART_KEY).await);

    TestContext {
        state: AppState::new(catalog, cart),
        storage,
    }
}

/// State with `table` already loaded and an empty cart.
pub async fn loaded_state(table: Table) -> TestContext {
    build(Arc::new(StaticSource(table)), true, Arc::new(MemoryStorage::new())).await
}

/// State over shared storage, for restart scenarios.
pub async fn loaded_state_with_storage(table: Table, storage: Arc<MemoryStorage>) -> TestContext {
    build(Arc::new(StaticSource(table)), true, storage).await
}

/// State whose catalog load failed.
pub async fn failed_state() -> TestContext {
    build(Arc::new(FailingSource), true, Arc::new(MemoryStorage::new())).await
}

/// State whose catalog load has not finished.
pub async fn loading_state() -> TestContext {
    build(
        Arc::new(StaticSource(sample_table())),
        false,
        Arc::new(MemoryStorage::new()),
    )
    .await
}
