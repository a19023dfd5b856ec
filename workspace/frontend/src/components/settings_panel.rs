use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::settings::{self, AppSettings};

/// Bumped whenever the user changes a display setting, so pages that read
/// [`settings::get_settings`] re-render and remount their forms.
#[derive(Clone, PartialEq)]
pub struct SettingsContext {
    pub revision: usize,
    pub changed: Callback<()>,
}

fn toggle_setting(
    ctx: Option<SettingsContext>,
    apply: fn(&mut AppSettings, bool),
) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
        settings::update_settings(|s| apply(s, checked));
        if let Err(err) = settings::get_settings().save_display_flags() {
            log::warn!("Failed to persist settings: {:?}", err);
        }
        if let Some(ctx) = &ctx {
            ctx.changed.emit(());
        }
    })
}

#[function_component(SettingsPanel)]
pub fn settings_panel() -> Html {
    let ctx = use_context::<SettingsContext>();
    let current = settings::get_settings();

    let options: [(&str, bool, fn(&mut AppSettings, bool)); 3] = [
        ("Несколько банков в трендах", current.trends_multi_bank, |s, v| s.trends_multi_bank = v),
        (
            "Убирать базовый банк из конкурентов",
            current.urgent_prune_on_base_change,
            |s, v| s.urgent_prune_on_base_change = v,
        ),
        (
            "Показывать только график трендов",
            current.preview_trends_chart_only,
            |s, v| s.preview_trends_chart_only = v,
        ),
    ];

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-sm">{"Настройки"}</div>
            <div tabindex="0" class="dropdown-content z-50 card card-compact bg-base-100 shadow w-72">
                <div class="card-body">
                    { for options.into_iter().map(|(label, checked, apply)| html! {
                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="toggle toggle-sm toggle-primary"
                                checked={checked}
                                onchange={toggle_setting(ctx.clone(), apply)}
                            />
                            <span class="label-text text-xs">{label}</span>
                        </label>
                    }) }
                </div>
            </div>
        </div>
    }
}
