use common::{ReportResponse, TrendsRequest};
use yew::prelude::*;
use crate::api_client::reports::create_trends_report;
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::components::layout::Layout;
use crate::components::settings_panel::SettingsContext;
use crate::components::trends_form::TrendsForm;
use crate::components::trends_preview::TrendsPreview;
use crate::hooks::FetchState;
use crate::settings;

#[function_component(TrendsPage)]
pub fn trends_page() -> Html {
    // Subscribed only to re-render on settings changes
    let _settings_ctx = use_context::<SettingsContext>();
    let settings = settings::get_settings();
    let mode = settings.trends_mode();
    let chart_selection = settings.chart_selection();

    let report = use_state(FetchState::<ReportResponse>::default);
    let last_request = use_state(|| None::<TrendsRequest>);
    let toast_ctx = use_context::<ToastContext>();

    let generate = {
        let report = report.clone();
        let last_request = last_request.clone();
        Callback::from(move |request: TrendsRequest| {
            let report = report.clone();
            let toast_ctx = toast_ctx.clone();
            last_request.set(Some(request.clone()));
            report.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match create_trends_report(request).await {
                    Ok(data) => {
                        report.set(FetchState::Success(data));
                        if let Some(toast) = &toast_ctx {
                            toast.show_success("Тренды построены".to_string());
                        }
                    }
                    Err(e) => {
                        let message = e.to_string();
                        report.set(FetchState::Error(message.clone()));
                        if let Some(toast) = &toast_ctx {
                            toast.show_error(message);
                        }
                    }
                }
            });
        })
    };

    let on_retry = (*last_request).clone().map(|request| {
        let generate = generate.clone();
        Callback::from(move |_: ()| generate.emit(request.clone()))
    });

    let render = Callback::from(move |data: ReportResponse| {
        html! { <TrendsPreview data={data} charts={chart_selection} /> }
    });

    html! {
        <Layout title="Трендовый отчёт">
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div>
                    <TrendsForm
                        key={format!("{:?}", mode)}
                        mode={mode}
                        loading={report.is_loading()}
                        on_submit={generate}
                    />
                </div>
                <div class="lg:col-span-2 card bg-base-100 shadow">
                    <div class="card-body">
                        <FetchRender<ReportResponse>
                            state={(*report).clone()}
                            render={render}
                            on_retry={on_retry}
                            loading_text={Some(AttrValue::from("Строим тренды..."))}
                            placeholder={Some(AttrValue::from("Заполните форму, чтобы построить отчёт."))}
                        />
                    </div>
                </div>
            </div>
        </Layout>
    }
}
