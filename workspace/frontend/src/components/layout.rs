use yew::prelude::*;
use yew_router::prelude::*;
use crate::api_client::reports::health_check;
use crate::router::Route;
use super::settings_panel::SettingsPanel;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(ApiStatus)]
fn api_status() -> Html {
    let online = use_state(|| None::<bool>);

    {
        let online = online.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let ok = match health_check().await {
                    Ok(health) => health.status == "ok",
                    Err(e) => {
                        log::warn!("Backend health check failed: {}", e);
                        false
                    }
                };
                online.set(Some(ok));
            });
            || ()
        });
    }

    match *online {
        None => html! { <span class="badge badge-ghost badge-sm">{"API…"}</span> },
        Some(true) => html! { <span class="badge badge-success badge-sm">{"API online"}</span> },
        Some(false) => html! { <span class="badge badge-error badge-sm">{"API offline"}</span> },
    }
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let route = use_route::<Route>();
    let tab_class = |target: Route| {
        let active = match (&route, &target) {
            (Some(Route::Home), Route::Trends) => true,
            (Some(current), target) => current == target,
            (None, _) => false,
        };
        classes!("tab", active.then_some("tab-active"))
    };

    html! {
        <div class="min-h-screen bg-base-200 flex flex-col">
            <div class="navbar bg-base-100 shadow-sm sticky top-0 z-40">
                <div class="flex-1 px-4 gap-4">
                    <span class="text-xl font-bold">{"Bankscope"}</span>
                    <div role="tablist" class="tabs tabs-boxed tabs-sm">
                        <Link<Route> to={Route::Trends} classes={tab_class(Route::Trends)}>{"Тренды"}</Link<Route>>
                        <Link<Route> to={Route::Urgent} classes={tab_class(Route::Urgent)}>{"Срочный отчёт"}</Link<Route>>
                    </div>
                </div>
                <div class="flex-none gap-2">
                    <ApiStatus />
                    <SettingsPanel />
                </div>
            </div>
            <main class="flex-1 p-6">
                <h1 class="text-lg font-semibold mb-4">{&props.title}</h1>
                { for props.children.iter() }
            </main>
        </div>
    }
}
