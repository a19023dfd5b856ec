//! Normalization of a [`ReportResponse`] into what the preview displays.

use common::ReportResponse;
use serde_json::{Map, Value};

const TRENDS_CHART_KEY: &str = "trends";

/// Which chart fragment the preview is allowed to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartSelection {
    /// `trends` if present, otherwise the first chart in the mapping.
    #[default]
    AnyChart,
    /// Only the `trends` chart; no chart section without it.
    TrendsOnly,
}

/// Display-ready view of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPreview {
    pub header: String,
    /// Pre-rendered markup, inserted verbatim. Sanitized by the report generator.
    pub chart_html: Option<String>,
    pub summary: Vec<String>,
}

impl ReportPreview {
    pub fn from_response(report: &ReportResponse, charts: ChartSelection) -> Self {
        Self {
            header: header_line(report),
            chart_html: report
                .charts
                .as_ref()
                .and_then(|map| select_chart(map, charts))
                .map(str::to_string),
            summary: report
                .summary
                .as_ref()
                .map(normalize_summary)
                .unwrap_or_default(),
        }
    }

    pub fn has_chart(&self) -> bool {
        self.chart_html.is_some()
    }

    pub fn has_summary(&self) -> bool {
        !self.summary.is_empty()
    }
}

/// `"<bank> · <product> (<period>)"`; the bank is the first of `bank_names`,
/// else `bank_name`.
pub fn header_line(report: &ReportResponse) -> String {
    let bank = report
        .bank_names
        .as_ref()
        .and_then(|names| names.first())
        .filter(|name| !name.is_empty())
        .or(report.bank_name.as_ref())
        .map(String::as_str)
        .unwrap_or_default();

    format!(
        "{} · {} ({})",
        bank,
        report.product_type.as_deref().unwrap_or_default(),
        report.period.as_deref().unwrap_or_default()
    )
}

/// Picks the chart fragment to render, if any.
pub fn select_chart(charts: &Map<String, Value>, selection: ChartSelection) -> Option<&str> {
    if let Some(html) = charts.get(TRENDS_CHART_KEY).and_then(non_empty_str) {
        return Some(html);
    }
    match selection {
        ChartSelection::TrendsOnly => None,
        ChartSelection::AnyChart => charts.values().next().and_then(non_empty_str),
    }
}

/// Turns a summary payload into display items.
///
/// A lone string is one item (never split into characters); in a list only
/// string entries survive; any other shape yields nothing.
pub fn normalize_summary(summary: &Value) -> Vec<String> {
    match summary {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(value: Value) -> ReportResponse {
        serde_json::from_value(value).expect("Should deserialize report")
    }

    #[test]
    fn test_string_summary_is_single_item() {
        assert_eq!(normalize_summary(&json!("hello")), vec!["hello"]);
    }

    #[test]
    fn test_non_string_summary_entries_dropped() {
        assert_eq!(normalize_summary(&json!(["a", 3, "b"])), vec!["a", "b"]);
    }

    #[test]
    fn test_other_summary_shapes_are_empty() {
        assert!(normalize_summary(&json!(null)).is_empty());
        assert!(normalize_summary(&json!(42)).is_empty());
        assert!(normalize_summary(&json!({"text": "x"})).is_empty());
        assert!(normalize_summary(&json!([1, null, {}])).is_empty());
    }

    #[test]
    fn test_empty_charts_renders_header_only() {
        let preview = ReportPreview::from_response(
            &report(json!({
                "bank_names": ["Сбербанк"],
                "product_type": "Кредитная карта",
                "period": "12m",
                "charts": {}
            })),
            ChartSelection::AnyChart,
        );

        assert_eq!(preview.header, "Сбербанк · Кредитная карта (12m)");
        assert!(!preview.has_chart());
        assert!(!preview.has_summary());
    }

    #[test]
    fn test_header_falls_back_to_bank_name() {
        let header = header_line(&report(json!({
            "bank_names": [],
            "bank_name": "ВТБ",
            "product_type": "Ипотека",
            "period": "6m"
        })));
        assert_eq!(header, "ВТБ · Ипотека (6m)");

        let header = header_line(&report(json!({"bank_names": [""], "bank_name": "ВТБ"})));
        assert_eq!(header, "ВТБ ·  ()");
    }

    #[test]
    fn test_trends_chart_preferred() {
        let charts = json!({"rates": "<svg>rates</svg>", "trends": "<svg>trends</svg>"});
        let charts = charts.as_object().expect("object");

        assert_eq!(select_chart(charts, ChartSelection::AnyChart), Some("<svg>trends</svg>"));
        assert_eq!(select_chart(charts, ChartSelection::TrendsOnly), Some("<svg>trends</svg>"));
    }

    #[test]
    fn test_other_chart_only_in_any_chart_variant() {
        let preview_any = ReportPreview::from_response(
            &report(json!({"charts": {"fees": "<div>fees</div>", "rates": "<div>rates</div>"}})),
            ChartSelection::AnyChart,
        );
        let preview_strict = ReportPreview::from_response(
            &report(json!({"charts": {"fees": "<div>fees</div>"}})),
            ChartSelection::TrendsOnly,
        );

        assert_eq!(preview_any.chart_html.as_deref(), Some("<div>fees</div>"));
        assert!(preview_strict.chart_html.is_none());
    }

    #[test]
    fn test_chart_fragment_is_not_altered() {
        let html = r#"<div id="c"><script>Plotly.newPlot("c", [])</script></div>"#;
        let preview = ReportPreview::from_response(
            &report(json!({"charts": {"trends": html}, "summary": ["Ставки снизились"]})),
            ChartSelection::TrendsOnly,
        );

        assert_eq!(preview.chart_html.as_deref(), Some(html));
        assert_eq!(preview.summary, vec!["Ставки снизились"]);
    }
}
