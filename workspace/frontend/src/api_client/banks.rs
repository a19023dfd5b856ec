use async_trait::async_trait;
use bankscope::{CatalogError, CatalogSource};
use common::BankCatalog;
use crate::api_client::{self, ApiError};

/// Get the catalog of banks the backend has data for
pub async fn fetch_available_banks() -> Result<BankCatalog, ApiError> {
    log::trace!("Fetching available banks");
    let result: Result<BankCatalog, ApiError> = api_client::get("/banks/available").await;
    match &result {
        Ok(catalog) => log::info!("Fetched {} banks", catalog.all.len()),
        Err(e) => log::error!("Failed to fetch banks: {}", e),
    }
    result
}

impl From<ApiError> for CatalogError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(e) => CatalogError::Transport(e),
            ApiError::Status { status, .. } => CatalogError::Http(status),
            ApiError::Decode(e) => CatalogError::Decode(e),
        }
    }
}

/// Catalog source backed by `GET /banks/available`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpCatalogSource;

#[async_trait(?Send)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_banks(&self) -> Result<BankCatalog, CatalogError> {
        Ok(fetch_available_banks().await?)
    }
}
