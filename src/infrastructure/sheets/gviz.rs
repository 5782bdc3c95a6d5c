//! Google Visualization query endpoint client.

use super::payload::{decode_table, unwrap_callback};
use crate::domain::table::{FetchError, Table, TableSource};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Fetches a sheet through `{endpoint}/{sheet_id}/gviz/tq`.
pub struct GvizSource {
    client: reqwest::Client,
    endpoint: String,
    sheet_id: String,
    sheet_name: String,
}

impl GvizSource {
    /// Builds a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(
        endpoint: impl Into<String>,
        sheet_id: impl Into<String>,
        sheet_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            sheet_id: sheet_id.into(),
            sheet_name: sheet_name.into(),
        })
    }

    /// Request URL for one fetch answered through `callback`.
    pub fn request_url(&self, callback: &str) -> Result<Url, FetchError> {
        let base = format!(
            "{}/{}/gviz/tq",
            self.endpoint.trim_end_matches('/'),
            self.sheet_id
        );
        Url::parse_with_params(
            &base,
            &[
                ("tqx", format!("out:json;responseHandler:{callback}")),
                ("sheet", self.sheet_name.clone()),
            ],
        )
        .map_err(|e| FetchError::Transport(format!("invalid sheet URL {base}: {e}")))
    }
}

/// Unique callback name for one request.
fn callback_name() -> String {
    format!("gvizCallback_{}", Utc::now().timestamp_millis())
}

#[async_trait]
impl TableSource for GvizSource {
    async fn fetch_table(&self) -> Result<Table, FetchError> {
        let callback = callback_name();
        let url = self.request_url(&callback)?;
        debug!("Fetching sheet {} via {}", self.sheet_name, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "sheet endpoint returned {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let table = decode_table(unwrap_callback(&body, &callback)?)?;
        info!(
            "Fetched sheet {}: {} columns, {} rows",
            self.sheet_name,
            table.columns.len(),
            table.rows.len()
        );

        Ok(table)
    }
}
