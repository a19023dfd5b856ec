use bankscope::{ChartSelection, ReportPreview};
use common::ReportResponse;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TrendsPreviewProps {
    pub data: ReportResponse,
    #[prop_or_default]
    pub charts: ChartSelection,
}

/// Read-only rendering of a generated report.
///
/// The chart fragment comes pre-rendered from the report generator and is
/// inserted as-is; escaping it is the generator's job.
#[function_component(TrendsPreview)]
pub fn trends_preview(props: &TrendsPreviewProps) -> Html {
    let preview = ReportPreview::from_response(&props.data, props.charts);

    html! {
        <div class="space-y-4">
            <div>
                <p class="text-xs opacity-60">{"Банк и продукт"}</p>
                <p class="text-sm font-semibold">{&preview.header}</p>
            </div>

            if let Some(chart_html) = preview.chart_html.clone() {
                <div class="my-2 rounded-box border border-base-300 overflow-hidden bg-white">
                    <div class="w-full">
                        {Html::from_html_unchecked(AttrValue::from(chart_html))}
                    </div>
                </div>
            }

            if preview.has_summary() {
                <div>
                    <p class="text-xs opacity-60 mb-1">{"Резюме по тренду"}</p>
                    <ul class="space-y-1">
                        { for preview.summary.iter().enumerate().map(|(idx, item)| html! {
                            <li key={idx} class="flex gap-2">
                                <span class="mt-2 h-1 w-1 rounded-full bg-info"></span>
                                <p class="text-xs">{item}</p>
                            </li>
                        }) }
                    </ul>
                </div>
            }
        </div>
    }
}
