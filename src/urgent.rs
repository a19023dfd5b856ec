//! View-model behind the urgent (base bank vs competitors) report form.

use common::{ProductType, UrgentRequest};
use tracing::debug;

use crate::catalog::{CatalogOutcome, CatalogState, URGENT_FALLBACK_BANKS};
use crate::error::FormError;
use crate::selection::Selection;

pub const DEFAULT_BASE_BANK: &str = "Сбербанк";
pub const DEFAULT_COMPETITOR: &str = "ВТБ";

/// What happens to the competitor selection when the base bank changes.
///
/// `Keep` leaves a competitor selected even if it becomes the base bank; it
/// is then hidden from the candidate list but still submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompetitorPruning {
    #[default]
    Keep,
    OnBaseChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgentForm {
    catalog: CatalogState,
    base_bank: String,
    competitors: Selection,
    product_type: ProductType,
    pruning: CompetitorPruning,
}

impl Default for UrgentForm {
    fn default() -> Self {
        Self::new(CompetitorPruning::default())
    }
}

impl UrgentForm {
    pub fn new(pruning: CompetitorPruning) -> Self {
        Self {
            catalog: CatalogState::new(),
            base_bank: DEFAULT_BASE_BANK.to_string(),
            competitors: Selection::from_names([DEFAULT_COMPETITOR]),
            product_type: ProductType::default(),
            pruning,
        }
    }

    pub fn fallback_banks() -> &'static [&'static str] {
        &URGENT_FALLBACK_BANKS
    }

    pub fn apply_catalog(&mut self, outcome: &CatalogOutcome) {
        self.catalog.apply(outcome);
    }

    pub fn set_base_bank(&mut self, name: &str) {
        self.base_bank = name.to_string();
        if self.pruning == CompetitorPruning::OnBaseChange && self.competitors.remove(name) {
            debug!(bank = %name, "Removed new base bank from competitors");
        }
    }

    pub fn toggle_competitor(&mut self, name: &str) -> bool {
        self.competitors.toggle(name)
    }

    pub fn set_product_type(&mut self, product_type: ProductType) {
        self.product_type = product_type;
    }

    /// Catalog banks that may be picked as competitors: everything except
    /// the current base bank, in catalog order.
    pub fn competitor_banks(&self) -> Vec<&str> {
        self.catalog
            .banks()
            .iter()
            .map(String::as_str)
            .filter(|bank| *bank != self.base_bank)
            .collect()
    }

    pub fn available_banks(&self) -> &[String] {
        self.catalog.banks()
    }

    pub fn is_loading_banks(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn base_bank(&self) -> &str {
        &self.base_bank
    }

    pub fn selected_competitors(&self) -> &[String] {
        self.competitors.as_slice()
    }

    pub fn is_competitor(&self, name: &str) -> bool {
        self.competitors.contains(name)
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn pruning(&self) -> CompetitorPruning {
        self.pruning
    }

    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.catalog.is_loading() && !self.competitors.is_empty()
    }

    pub fn submit(&self) -> Result<UrgentRequest, FormError> {
        if self.competitors.is_empty() {
            return Err(FormError::NoCompetitorsSelected);
        }

        Ok(UrgentRequest {
            bank_name: self.base_bank.clone(),
            competitor_names: self.competitors.to_vec(),
            product_type: self.product_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_form(pruning: CompetitorPruning) -> UrgentForm {
        let mut form = UrgentForm::new(pruning);
        form.apply_catalog(&CatalogOutcome::Fallback(
            UrgentForm::fallback_banks()
                .iter()
                .map(|b| b.to_string())
                .collect(),
        ));
        form
    }

    #[test]
    fn test_defaults() {
        let form = UrgentForm::default();

        assert_eq!(form.base_bank(), "Сбербанк");
        assert_eq!(form.selected_competitors(), ["ВТБ"]);
        assert_eq!(form.product_type(), ProductType::CreditCard);
        assert_eq!(form.pruning(), CompetitorPruning::Keep);
        assert!(form.is_loading_banks());
        assert!(form.competitor_banks().is_empty());
    }

    #[test]
    fn test_candidates_never_contain_base_bank() {
        let mut form = loaded_form(CompetitorPruning::Keep);

        for base in UrgentForm::fallback_banks() {
            form.set_base_bank(base);
            let candidates = form.competitor_banks();
            assert!(!candidates.contains(base));
            assert_eq!(candidates.len(), UrgentForm::fallback_banks().len() - 1);
        }
    }

    #[test]
    fn test_candidates_keep_catalog_order() {
        let mut form = UrgentForm::default();
        form.apply_catalog(&CatalogOutcome::Loaded(vec![
            "Т-Банк".to_string(),
            "Сбербанк".to_string(),
            "ВТБ".to_string(),
        ]));

        assert_eq!(form.competitor_banks(), vec!["Т-Банк", "ВТБ"]);
    }

    #[test]
    fn test_base_change_keeps_selected_competitor_by_default() {
        let mut form = loaded_form(CompetitorPruning::Keep);

        form.set_base_bank("ВТБ");

        assert!(!form.competitor_banks().contains(&"ВТБ"));
        assert!(form.is_competitor("ВТБ"));
        let request = form.submit().expect("Should submit");
        assert_eq!(request.bank_name, "ВТБ");
        assert_eq!(request.competitor_names, vec!["ВТБ"]);
    }

    #[test]
    fn test_base_change_prunes_when_configured() {
        let mut form = loaded_form(CompetitorPruning::OnBaseChange);
        form.toggle_competitor("Т-Банк");

        form.set_base_bank("ВТБ");

        assert_eq!(form.selected_competitors(), ["Т-Банк"]);
    }

    #[test]
    fn test_submit_builds_request() {
        let mut form = loaded_form(CompetitorPruning::Keep);
        form.toggle_competitor("Альфа-Банк");
        form.toggle_competitor("Райффайзенбанк");
        form.set_product_type(ProductType::DebitCard);

        let request = form.submit().expect("Should submit");

        assert_eq!(
            request,
            UrgentRequest {
                bank_name: "Сбербанк".to_string(),
                competitor_names: vec![
                    "ВТБ".to_string(),
                    "Альфа-Банк".to_string(),
                    "Райффайзенбанк".to_string(),
                ],
                product_type: ProductType::DebitCard,
            }
        );
    }

    #[test]
    fn test_empty_competitors_rejected() {
        let mut form = loaded_form(CompetitorPruning::Keep);

        form.toggle_competitor("ВТБ");

        assert_eq!(form.submit(), Err(FormError::NoCompetitorsSelected));
        assert!(!form.can_submit(false));
    }

    #[test]
    fn test_can_submit_waits_for_catalog_and_report() {
        let form = UrgentForm::default();
        assert!(!form.can_submit(false));

        let form = loaded_form(CompetitorPruning::Keep);
        assert!(form.can_submit(false));
        assert!(!form.can_submit(true));
    }
}
