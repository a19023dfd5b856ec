use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod router;
pub mod settings;

use crate::common::toast::ToastProvider;
use components::settings_panel::SettingsContext;
use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    let revision = use_state(|| 0usize);

    let settings_ctx = {
        let bump = revision.clone();
        SettingsContext {
            revision: *revision,
            changed: Callback::from(move |_| {
                log::debug!("Display settings changed");
                bump.set(*bump + 1);
            }),
        }
    };

    html! {
        <ToastProvider>
            <ContextProvider<SettingsContext> context={settings_ctx}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<SettingsContext>>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Bankscope Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
