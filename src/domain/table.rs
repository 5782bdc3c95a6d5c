//! Tabular source abstraction for the website listing.
//!
//! The listing lives in a remote spreadsheet. The domain only sees a
//! [`Table`] of column labels and text cells; how it is fetched is the
//! business of [`crate::infrastructure::sheets`].

use async_trait::async_trait;

/// Errors raised while loading the listing table.
///
/// Both kinds collapse to the same visitor-facing "failed to load" state.
/// The error is clonable so a stored load failure can be reported on every
/// request without re-fetching.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// Network failure, timeout, or a non-success HTTP status.
    #[error("Failed to fetch table: {0}")]
    Transport(String),

    /// The response did not have the expected table/rows shape.
    #[error("Invalid table payload: {0}")]
    Format(String),
}

/// A fetched table: column labels and rows of cell text.
///
/// Cells are already rendered to text with absent values as `""`.
/// Rows may be shorter than `columns`; missing trailing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Source of the listing table.
///
/// # Implementations
///
/// - [`crate::infrastructure::sheets::GvizSource`] - Google Visualization endpoint
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Issues one request for the table.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] if the request fails
    /// - [`FetchError::Format`] if the payload is missing its table or rows
    async fn fetch_table(&self) -> Result<Table, FetchError>;
}
