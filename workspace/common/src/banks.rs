use serde::{Deserialize, Serialize};

/// Bank catalog returned by `GET /banks/available`.
///
/// Only `all` is required by the forms; the per-product breakdown and the
/// product type list are carried along for callers that want them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BankCatalog {
    /// Every known bank, in display order.
    #[serde(default)]
    pub all: Vec<String>,
    #[serde(default)]
    pub by_product: Option<BanksByProduct>,
    #[serde(default)]
    pub product_types: Vec<String>,
}

/// Banks that have data for a given product family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BanksByProduct {
    #[serde(default)]
    pub debit: Vec<String>,
    #[serde(default)]
    pub credit: Vec<String>,
}

impl BankCatalog {
    pub fn new(all: Vec<String>) -> Self {
        Self {
            all,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
