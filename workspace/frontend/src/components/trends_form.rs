use bankscope::{BankSelectionMode, TrendsForm as TrendsFormState};
use common::{Period, TrendsRequest};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use crate::common::catalog_hook::use_bank_catalog;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct TrendsFormProps {
    pub on_submit: Callback<TrendsRequest>,
    /// Report generation in flight (owned by the caller)
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub mode: BankSelectionMode,
}

#[function_component(TrendsForm)]
pub fn trends_form(props: &TrendsFormProps) -> Html {
    let mode = props.mode;
    let form = use_state(|| TrendsFormState::new(mode));
    let catalog = use_bank_catalog(TrendsFormState::fallback_banks());
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

    let on_bank_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.select_bank(&target.value());
                form.set(next);
            }
        })
    };

    let on_product_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            next.set_product_type(value);
            form.set(next);
        })
    };

    let on_period_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<HtmlSelectElement>() {
                match target.value().parse::<Period>() {
                    Ok(period) => {
                        let mut next = (*form).clone();
                        next.set_period(period);
                        form.set(next);
                    }
                    Err(err) => log::warn!("Ignoring period change: {}", err),
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
                    log::debug!("Submitting trends request for {:?}", request.bank_names);
                    on_submit.emit(request);
                }
                Err(err) => {
                    log::debug!("Trends form rejected: {}", err);
                    match &toast_ctx {
                        Some(toast) => toast.show_warning(err.to_string()),
                        None => log::warn!("{}", err),
                    }
                }
            }
        })
    };

    let bank_picker = if mode.allows_multiple() {
        let banks = form.available_banks().to_vec();
        html! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{format!("Банки для трендов ({} выбрано)", form.selected_banks().len())}</span>
                </label>
                <div class="max-h-40 overflow-y-auto rounded-box border border-base-300 p-2 space-y-1">
                    if form.is_loading_banks() {
                        <p class="text-center text-sm opacity-60 py-2">{"Загрузка..."}</p>
                    } else if banks.is_empty() {
                        <p class="text-center text-sm opacity-60 py-2">{"Нет доступных банков"}</p>
                    } else {
                        { for banks.into_iter().map(|bank| {
                            let checked = form.is_selected(&bank);
                            let on_toggle = {
                                let form = form.clone();
                                let bank = bank.clone();
                                Callback::from(move |_: Event| {
                                    let mut next = (*form).clone();
                                    next.select_bank(&bank);
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
        }
    } else {
        let selected = form.selected_bank().unwrap_or_default().to_string();
        html! {
            <div class="form-control">
                <label class="label"><span class="label-text">{"Банк для трендов"}</span></label>
                <select
                    class="select select-bordered select-sm w-full"
                    onchange={on_bank_change}
                    disabled={form.is_loading_banks()}
                >
                    if form.is_loading_banks() {
                        <option>{"Загрузка..."}</option>
                    } else if form.available_banks().is_empty() {
                        <option disabled={true}>{"Нет доступных банков"}</option>
                    } else {
                        { for form.available_banks().iter().map(|bank| html! {
                            <option key={bank.clone()} value={bank.clone()} selected={*bank == selected}>{bank}</option>
                        }) }
                    }
                </select>
            </div>
        }
    };

    let (badge, footer) = if mode.allows_multiple() {
        ("Один или несколько банков", "Выберите банки для трендового анализа.")
    } else {
        ("Только 1 банк для трендов", "Выберите один банк для трендового анализа.")
    };

    html! {
        <form onsubmit={on_submit} class="card bg-base-100 shadow">
            <div class="card-body space-y-3">
                <div class="flex items-center justify-between gap-3">
                    <div>
                        <p class="text-xs opacity-60">{"Режим"}</p>
                        <p class="text-sm font-medium">{"Trends report"}</p>
                    </div>
                    <span class="badge badge-ghost text-xs">{badge}</span>
                </div>

                {bank_picker}

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Тип продукта"}</span></label>
                    <input
                        type="text"
                        class="input input-bordered input-sm w-full"
                        value={form.product_type().to_string()}
                        oninput={on_product_input}
                    />
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Период анализа"}</span></label>
                    <select class="select select-bordered select-sm w-full" onchange={on_period_change}>
                        { for Period::ALL.iter().map(|period| html! {
                            <option value={period.code()} selected={*period == form.period()}>{period.label()}</option>
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
                        {" Строим тренды..."}
                    } else {
                        {"Построить тренды"}
                    }
                </button>
                <p class="text-xs opacity-60">{footer}</p>
            </div>
        </form>
    }
}
