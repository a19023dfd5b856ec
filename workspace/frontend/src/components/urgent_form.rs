use bankscope::{CompetitorPruning, UrgentForm as UrgentFormState};
use common::{ProductType, UrgentRequest};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use crate::common::catalog_hook::use_bank_catalog;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct UrgentFormProps {
    pub on_submit: Callback<UrgentRequest>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub pruning: CompetitorPruning,
}

#[function_component(UrgentForm)]
pub fn urgent_form(props: &UrgentFormProps) -> Html {
    let pruning = props.pruning;
    let form = use_state(|| UrgentFormState::new(pruning));
    let catalog = use_bank_catalog(UrgentFormState::fallback_banks());
    let toast_ctx = use_context::<ToastContext>();

    {
        let form = form.clone();
        use_effect_with(catalog, move |catalog| {
            if let Some(outcome) = catalog {
                let mut next = (*form).clone();
                next.apply_catalog(outcome);
                form.set(next);
            }
            || ()
        });
    }

    let on_base_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.set_base_bank(&target.value());
                form.set(next);
            }
        })
    };

    let on_product_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<HtmlSelectElement>() {
                match target.value().parse::<ProductType>() {
                    Ok(product_type) => {
                        let mut next = (*form).clone();
                        next.set_product_type(product_type);
                        form.set(next);
                    }
                    Err(err) => log::warn!("Ignoring product change: {}", err),
                }
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.submit() {
                Ok(request) => {
                    log::debug!(
                        "Submitting urgent request: {} vs {:?}",
                        request.bank_name,
                        request.competitor_names
                    );
                    on_submit.emit(request);
                }
                Err(err) => {
                    log::debug!("Urgent form rejected: {}", err);
                    match &toast_ctx {
                        Some(toast) => toast.show_warning(err.to_string()),
                        None => log::warn!("{}", err),
                    }
                }
            }
        })
    };

    let selected_count = form.selected_competitors().len();
    let candidates: Vec<String> = form
        .competitor_banks()
        .into_iter()
        .map(str::to_string)
        .collect();

    html! {
        <form onsubmit={on_submit} class="card bg-base-100 shadow">
            <div class="card-body space-y-3">
                <div class="flex items-center justify-between gap-3">
                    <div>
                        <p class="text-xs opacity-60">{"Режим"}</p>
                        <p class="text-sm font-medium">{"Urgent report"}</p>
                    </div>
                    <span class="badge badge-ghost text-xs">{format!("Multi-banking · {} банков", selected_count)}</span>
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Базовый банк (эталон)"}</span></label>
                    <select
                        class="select select-bordered select-sm w-full"
                        onchange={on_base_change}
                        disabled={form.is_loading_banks()}
                    >
                        if form.is_loading_banks() {
                            <option>{"Загрузка..."}</option>
                        } else {
                            { for form.available_banks().iter().map(|bank| html! {
                                <option key={bank.clone()} value={bank.clone()} selected={bank.as_str() == form.base_bank()}>{bank}</option>
                            }) }
                        }
                    </select>
                </div>

                <div class="form-control">
                    <label class="label">
                        <span class="label-text">{format!("Конкуренты ({} выбрано)", selected_count)}</span>
                    </label>
                    <div class="max-h-40 overflow-y-auto rounded-box border border-base-300 p-2 space-y-1">
                        if form.is_loading_banks() {
                            <p class="text-center text-sm opacity-60 py-2">{"Загрузка..."}</p>
                        } else if candidates.is_empty() {
                            <p class="text-center text-sm opacity-60 py-2">{"Нет доступных банков"}</p>
                        } else {
                            { for candidates.into_iter().map(|bank| {
                                let checked = form.is_competitor(&bank);
                                let on_toggle = {
                                    let form = form.clone();
                                    let bank = bank.clone();
                                    Callback::from(move |_: Event| {
                                        let mut next = (*form).clone();
                                        next.toggle_competitor(&bank);
                                        form.set(next);
                                    })
                                };
                                html! {
                                    <label key={bank.clone()} class="label cursor-pointer justify-start gap-2">
                                        <input
                                            type="checkbox"
                                            class="checkbox checkbox-sm checkbox-primary"
                                            checked={checked}
                                            onchange={on_toggle}
                                        />
                                        <span class="label-text">{bank}</span>
                                    </label>
                                }
                            }) }
                        }
                    </div>
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Тип продукта"}</span></label>
                    <select class="select select-bordered select-sm w-full" onchange={on_product_change}>
                        { for ProductType::ALL.iter().map(|product| html! {
                            <option value={product.label()} selected={*product == form.product_type()}>{product.label()}</option>
                        }) }
                    </select>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary btn-sm w-full"
                    disabled={!form.can_submit(props.loading)}
                >
                    if props.loading {
                        <span class="loading loading-spinner loading-sm"></span>
                        {" Генерируем отчёт..."}
                    } else {
                        {"Сгенерировать отчёт"}
                    }
                </button>
                <p class="text-xs opacity-60">{"Выберите несколько конкурентов для multi-bank сравнения."}</p>
            </div>
        </form>
    }
}
