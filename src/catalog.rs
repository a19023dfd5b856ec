//! Bank catalog loading shared by every form.
//!
//! A form asks its [`CatalogSource`] for the catalog exactly once, on mount.
//! Failures never reach the user: they are logged and replaced with a fixed
//! fallback list. There is no retry, timeout or cancellation.

use async_trait::async_trait;
use common::BankCatalog;
use tracing::{debug, error, info};

use crate::error::CatalogError;

/// Fallback used by the trends forms when the catalog cannot be fetched.
pub const TRENDS_FALLBACK_BANKS: [&str; 4] = ["Сбербанк", "ВТБ", "Альфа-Банк", "Т-Банк"];

/// Fallback used by the urgent form when the catalog cannot be fetched.
pub const URGENT_FALLBACK_BANKS: [&str; 8] = [
    "Сбербанк",
    "ВТБ",
    "Альфа-Банк",
    "Т-Банк",
    "Газпромбанк",
    "Локо-Банк",
    "МТС Банк",
    "Райффайзенбанк",
];

/// Anything that can produce the bank catalog.
///
/// The browser implementation wraps `fetch`, whose futures are not `Send`.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_banks(&self) -> Result<BankCatalog, CatalogError>;
}

/// Result of a finished catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// The API answered; banks are in API order (possibly empty).
    Loaded(Vec<String>),
    /// The fetch failed and the fixed list was substituted.
    Fallback(Vec<String>),
}

impl CatalogOutcome {
    pub fn banks(&self) -> &[String] {
        match self {
            CatalogOutcome::Loaded(banks) | CatalogOutcome::Fallback(banks) => banks,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CatalogOutcome::Fallback(_))
    }
}

/// Fetches the catalog once, substituting `fallback` on any error.
pub async fn load_catalog<S>(source: &S, fallback: &[&str]) -> CatalogOutcome
where
    S: CatalogSource + ?Sized,
{
    debug!("Loading bank catalog");
    match source.fetch_banks().await {
        Ok(catalog) => {
            info!(count = catalog.all.len(), "Bank catalog loaded");
            CatalogOutcome::Loaded(catalog.all)
        }
        Err(err) => {
            error!(%err, "Failed to load banks, using fallback list");
            CatalogOutcome::Fallback(fallback.iter().map(|bank| bank.to_string()).collect())
        }
    }
}

/// Catalog as held by a form: empty and loading until the fetch resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    banks: Vec<String>,
    loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            banks: Vec::new(),
            loading: true,
        }
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome and marks loading finished, whatever the outcome.
    pub fn apply(&mut self, outcome: &CatalogOutcome) {
        self.banks = outcome.banks().to_vec();
        self.loading = false;
    }

    pub fn banks(&self) -> &[String] {
        &self.banks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// In-memory source answering with a fixed result.
    pub struct StaticSource(pub Result<BankCatalog, CatalogError>);

    impl StaticSource {
        pub fn banks(banks: &[&str]) -> Self {
            Self(Ok(BankCatalog::new(
                banks.iter().map(|b| b.to_string()).collect(),
            )))
        }

        pub fn failing() -> Self {
            Self(Err(CatalogError::Transport("connection refused".to_string())))
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for StaticSource {
        async fn fetch_banks(&self) -> Result<BankCatalog, CatalogError> {
            self.0.clone()
        }
    }

    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{StaticSource, init_tracing};
    use super::*;

    #[tokio::test]
    async fn test_successful_fetch_populates_banks() {
        init_tracing();
        let source = StaticSource::banks(&["X", "Y"]);

        let outcome = load_catalog(&source, &TRENDS_FALLBACK_BANKS).await;
        let mut state = CatalogState::new();
        assert!(state.is_loading());
        state.apply(&outcome);

        assert_eq!(outcome, CatalogOutcome::Loaded(vec!["X".into(), "Y".into()]));
        assert_eq!(state.banks(), ["X", "Y"]);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_rejected_fetch_uses_fallback() {
        init_tracing();
        let source = StaticSource::failing();

        let outcome = load_catalog(&source, &TRENDS_FALLBACK_BANKS).await;
        let mut state = CatalogState::new();
        state.apply(&outcome);

        assert!(outcome.is_fallback());
        assert_eq!(state.banks(), TRENDS_FALLBACK_BANKS);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_every_error_kind_falls_back() {
        for err in [
            CatalogError::Http(500),
            CatalogError::Decode("expected value".to_string()),
        ] {
            let source = StaticSource(Err(err));
            let outcome = load_catalog(&source, &URGENT_FALLBACK_BANKS).await;
            assert_eq!(outcome.banks(), URGENT_FALLBACK_BANKS);
        }
    }

    #[tokio::test]
    async fn test_catalog_without_banks_is_empty_not_fallback() {
        let source = StaticSource(Ok(BankCatalog::default()));

        let outcome = load_catalog(&source, &TRENDS_FALLBACK_BANKS).await;

        assert_eq!(outcome, CatalogOutcome::Loaded(Vec::new()));
    }

    #[test]
    fn test_fallback_lists() {
        assert_eq!(TRENDS_FALLBACK_BANKS.len(), 4);
        assert_eq!(URGENT_FALLBACK_BANKS.len(), 8);
        assert!(
            TRENDS_FALLBACK_BANKS
                .iter()
                .all(|bank| URGENT_FALLBACK_BANKS.contains(bank))
        );
    }
}
