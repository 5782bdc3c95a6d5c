//! Catalog loading and status.

use crate::domain::entities::{Website, ingest};
use crate::domain::table::{FetchError, Table, TableSource};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Message shown in place of the listing when the load failed.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please refresh...";

/// The loaded listing and the filter options derived from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub websites: Vec<Website>,
    /// Sorted distinct non-empty categories.
    pub categories: Vec<String>,
    /// Sorted distinct non-empty traffic tiers.
    pub regions: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(websites: Vec<Website>) -> Self {
        let categories: BTreeSet<&str> = websites
            .iter()
            .map(|w| w.category.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        let regions: BTreeSet<&str> = websites
            .iter()
            .map(|w| w.traffic_tier.as_str())
            .filter(|r| !r.is_empty())
            .collect();

        Self {
            categories: categories.into_iter().map(String::from).collect(),
            regions: regions.into_iter().map(String::from).collect(),
            websites,
            loaded_at: Utc::now(),
        }
    }

    pub fn from_table(table: &Table) -> Self {
        Self::new(ingest(table))
    }
}

/// Where the one-time load stands.
#[derive(Debug, Clone)]
pub enum CatalogStatus {
    Loading,
    Ready(Arc<Catalog>),
    Failed(FetchError),
}

/// Owns the single catalog load of the process.
///
/// The first call to [`load`](Self::load) issues the request; concurrent and
/// later callers share its outcome. A failure is final until restart.
pub struct CatalogService {
    source: Arc<dyn TableSource>,
    state: OnceCell<Result<Arc<Catalog>, FetchError>>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self {
            source,
            state: OnceCell::new(),
        }
    }

    /// Loads the catalog once and returns the stored outcome.
    pub async fn load(&self) -> Result<Arc<Catalog>, FetchError> {
        self.state
            .get_or_init(|| async {
                match self.source.fetch_table().await {
                    Ok(table) => {
                        let catalog = Catalog::from_table(&table);
                        info!(
                            "✅ Loaded {} websites ({} categories, {} regions)",
                            catalog.websites.len(),
                            catalog.categories.len(),
                            catalog.regions.len()
                        );
                        Ok(Arc::new(catalog))
                    }
                    Err(e) => {
                        error!("Catalog load failed: {}", e);
                        Err(e)
                    }
                }
            })
            .await
            .clone()
    }

    pub fn status(&self) -> CatalogStatus {
        match self.state.get() {
            None => CatalogStatus::Loading,
            Some(Ok(catalog)) => CatalogStatus::Ready(catalog.clone()),
            Some(Err(e)) => CatalogStatus::Failed(e.clone()),
        }
    }

    /// The loaded catalog, or an unavailable error while loading or after failure.
    pub fn ready(&self) -> Result<Arc<Catalog>, AppError> {
        match self.status() {
            CatalogStatus::Ready(catalog) => Ok(catalog),
            CatalogStatus::Loading => Err(AppError::unavailable(
                "Catalog is still loading",
                serde_json::json!({}),
            )),
            CatalogStatus::Failed(e) => Err(e.into()),
        }
    }
}
