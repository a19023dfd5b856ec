use bankscope::{load_catalog, CatalogOutcome};
use yew::prelude::*;
use crate::api_client::banks::HttpCatalogSource;

/// Loads the bank catalog once on mount.
///
/// Returns `None` until the fetch settles. Failures are already replaced by
/// `fallback` inside [`load_catalog`], so the caller only ever sees banks.
/// A response landing after unmount is written into a dead handle and dropped.
#[hook]
pub fn use_bank_catalog(fallback: &'static [&'static str]) -> Option<CatalogOutcome> {
    let outcome = use_state(|| None::<CatalogOutcome>);

    {
        let outcome = outcome.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let loaded = load_catalog(&HttpCatalogSource, fallback).await;
                if loaded.is_fallback() {
                    log::warn!("Bank catalog unavailable, using {} fallback banks", loaded.banks().len());
                }
                outcome.set(Some(loaded));
            });
            || ()
        });
    }

    (*outcome).clone()
}
