//! View-model behind the trends report form.
//!
//! One type covers both variants: [`BankSelectionMode::Single`] behaves like a
//! dropdown (the selection is replaced), [`BankSelectionMode::Multiple`] like a
//! checkbox list (the selection is toggled).

use common::{Period, TrendsRequest};
use tracing::debug;

use crate::catalog::{CatalogOutcome, CatalogState, TRENDS_FALLBACK_BANKS};
use crate::error::FormError;
use crate::selection::Selection;

pub const DEFAULT_BANK: &str = "Сбербанк";
pub const DEFAULT_PRODUCT_TYPE: &str = "Кредитная карта";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BankSelectionMode {
    #[default]
    Single,
    Multiple,
}

impl BankSelectionMode {
    pub fn allows_multiple(&self) -> bool {
        matches!(self, BankSelectionMode::Multiple)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendsForm {
    mode: BankSelectionMode,
    catalog: CatalogState,
    selected: Selection,
    product_type: String,
    period: Period,
}

impl TrendsForm {
    pub fn new(mode: BankSelectionMode) -> Self {
        Self {
            mode,
            catalog: CatalogState::new(),
            selected: Selection::from_names([DEFAULT_BANK]),
            product_type: DEFAULT_PRODUCT_TYPE.to_string(),
            period: Period::default(),
        }
    }

    /// Banks substituted when the catalog fetch fails.
    pub fn fallback_banks() -> &'static [&'static str] {
        &TRENDS_FALLBACK_BANKS
    }

    /// Writes the catalog load result back into the form.
    ///
    /// In single mode the first loaded bank becomes the default selection,
    /// and a fallback resets the selection to the default bank. The multi
    /// selection is left untouched.
    pub fn apply_catalog(&mut self, outcome: &CatalogOutcome) {
        self.catalog.apply(outcome);
        if self.mode.allows_multiple() {
            return;
        }
        match outcome {
            CatalogOutcome::Loaded(banks) => {
                if let Some(first) = banks.first() {
                    debug!(bank = %first, "Auto-selecting first catalog bank");
                    self.selected.replace_with(first);
                }
            }
            CatalogOutcome::Fallback(_) => self.selected.replace_with(DEFAULT_BANK),
        }
    }

    /// Handles a pick from the bank list: replaces in single mode, toggles in
    /// multiple mode.
    pub fn select_bank(&mut self, name: &str) {
        match self.mode {
            BankSelectionMode::Single => self.selected.replace_with(name),
            BankSelectionMode::Multiple => {
                self.selected.toggle(name);
            }
        }
    }

    pub fn set_product_type(&mut self, product_type: impl Into<String>) {
        self.product_type = product_type.into();
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn available_banks(&self) -> &[String] {
        self.catalog.banks()
    }

    pub fn is_loading_banks(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn selected_banks(&self) -> &[String] {
        self.selected.as_slice()
    }

    /// Single-mode selection, `None` when nothing is selected.
    pub fn selected_bank(&self) -> Option<&str> {
        self.selected.first()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Whether the submit control is enabled. `loading` is the caller's
    /// report-in-flight flag.
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.catalog.is_loading() && !self.selected.is_empty()
    }

    /// Validates the form and builds the request to hand to the caller.
    pub fn submit(&self) -> Result<TrendsRequest, FormError> {
        if self.selected.is_empty() {
            return Err(match self.mode {
                BankSelectionMode::Single => FormError::NoBankSelected,
                BankSelectionMode::Multiple => FormError::NoBanksSelected,
            });
        }

        let bank_names = match self.mode {
            BankSelectionMode::Single => self.selected.as_slice()[..1].to_vec(),
            BankSelectionMode::Multiple => self.selected.to_vec(),
        };

        Ok(TrendsRequest {
            bank_names,
            product_type: self.product_type.clone(),
            period: self.period,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(banks: &[&str]) -> CatalogOutcome {
        CatalogOutcome::Loaded(banks.iter().map(|b| b.to_string()).collect())
    }

    fn fallback() -> CatalogOutcome {
        CatalogOutcome::Fallback(
            TrendsForm::fallback_banks()
                .iter()
                .map(|b| b.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_single_defaults() {
        let form = TrendsForm::new(BankSelectionMode::Single);

        assert_eq!(form.selected_bank(), Some("Сбербанк"));
        assert_eq!(form.product_type(), "Кредитная карта");
        assert_eq!(form.period(), Period::TwelveMonths);
        assert!(form.is_loading_banks());
        assert!(form.available_banks().is_empty());
    }

    #[test]
    fn test_single_auto_selects_first_catalog_bank() {
        let mut form = TrendsForm::new(BankSelectionMode::Single);

        form.apply_catalog(&loaded(&["ВТБ", "Т-Банк"]));

        assert_eq!(form.selected_bank(), Some("ВТБ"));
        assert_eq!(form.available_banks(), ["ВТБ", "Т-Банк"]);
        assert!(!form.is_loading_banks());
    }

    #[test]
    fn test_single_empty_catalog_keeps_default() {
        let mut form = TrendsForm::new(BankSelectionMode::Single);

        form.apply_catalog(&loaded(&[]));

        assert_eq!(form.selected_bank(), Some("Сбербанк"));
        assert!(!form.is_loading_banks());
    }

    #[test]
    fn test_single_fallback_resets_to_default_bank() {
        let mut form = TrendsForm::new(BankSelectionMode::Single);
        form.select_bank("Т-Банк");

        form.apply_catalog(&fallback());

        assert_eq!(form.selected_bank(), Some("Сбербанк"));
        assert_eq!(form.available_banks().len(), 4);
    }

    #[test]
    fn test_single_select_replaces() {
        let mut form = TrendsForm::new(BankSelectionMode::Single);
        form.apply_catalog(&loaded(&["A", "B"]));

        form.select_bank("B");
        form.select_bank("B");

        assert_eq!(form.selected_banks(), ["B"]);
    }

    #[test]
    fn test_single_mode_never_holds_more_than_one_bank() {
        let mut form = TrendsForm::new(BankSelectionMode::Single);
        form.apply_catalog(&loaded(&["A", "B", "C"]));

        for name in ["B", "C", "A", "C"] {
            form.select_bank(name);
            assert_eq!(form.selected_banks().len(), 1);
            assert!(form.is_selected(name));
        }
        assert!(!form.is_selected("A"));
    }

    #[test]
    fn test_single_submit_builds_one_bank_request() {
        let mut form = TrendsForm::new(BankSelectionMode::Single);
        form.apply_catalog(&loaded(&["A", "B"]));
        form.select_bank("B");
        form.set_product_type("Ипотека");
        form.set_period(Period::SixMonths);

        let request = form.submit().expect("Should submit");

        assert_eq!(
            request,
            TrendsRequest {
                bank_names: vec!["B".to_string()],
                product_type: "Ипотека".to_string(),
                period: Period::SixMonths,
            }
        );
    }

    #[test]
    fn test_single_submit_without_bank_is_rejected() {
        let mut form = TrendsForm::new(BankSelectionMode::Single);
        form.apply_catalog(&loaded(&["A"]));
        form.select_bank("");

        assert_eq!(form.submit(), Err(FormError::NoBankSelected));
        assert!(!form.can_submit(false));
    }

    #[test]
    fn test_multi_catalog_load_keeps_selection() {
        let mut form = TrendsForm::new(BankSelectionMode::Multiple);

        form.apply_catalog(&loaded(&["ВТБ", "Сбербанк"]));

        assert_eq!(form.selected_banks(), ["Сбербанк"]);
    }

    #[test]
    fn test_multi_toggle_and_submit_in_selection_order() {
        let mut form = TrendsForm::new(BankSelectionMode::Multiple);
        form.apply_catalog(&loaded(&["Альфа-Банк", "ВТБ", "Сбербанк"]));

        form.select_bank("ВТБ");
        form.select_bank("Альфа-Банк");
        form.select_bank("Сбербанк");

        let request = form.submit().expect("Should submit");
        assert_eq!(request.bank_names, vec!["ВТБ", "Альфа-Банк"]);
        assert_eq!(request.product_type, "Кредитная карта");
        assert_eq!(request.period, Period::TwelveMonths);
    }

    #[test]
    fn test_multi_empty_selection_is_rejected() {
        let mut form = TrendsForm::new(BankSelectionMode::Multiple);
        form.apply_catalog(&loaded(&["Сбербанк"]));

        form.select_bank("Сбербанк");

        assert_eq!(form.submit(), Err(FormError::NoBanksSelected));
        assert!(!form.can_submit(false));
    }

    #[test]
    fn test_can_submit_conditions() {
        let mut form = TrendsForm::new(BankSelectionMode::Multiple);
        assert!(!form.can_submit(false), "catalog still loading");

        form.apply_catalog(&loaded(&["Сбербанк"]));
        assert!(form.can_submit(false));
        assert!(!form.can_submit(true), "report in flight");
    }
}
