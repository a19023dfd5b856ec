use common::{HealthResponse, ReportResponse, TrendsRequest, UrgentRequest};
use crate::api_client::{self, ApiError};
use crate::settings;

/// Generate a trends report for one or more banks
pub async fn create_trends_report(request: TrendsRequest) -> Result<ReportResponse, ApiError> {
    log::debug!(
        "Requesting trends report: {:?} / {} / {}",
        request.bank_names,
        request.product_type,
        request.period
    );
    let result = api_client::post("/trends/", &request).await;
    match &result {
        Ok(_) => log::info!("Trends report generated for {:?}", request.bank_names),
        Err(e) => log::error!("Failed to generate trends report: {}", e),
    }
    result
}

/// Generate an urgent comparison report: base bank vs competitors
pub async fn create_urgent_report(request: UrgentRequest) -> Result<ReportResponse, ApiError> {
    log::debug!(
        "Requesting urgent report: {} vs {:?} / {}",
        request.bank_name,
        request.competitor_names,
        request.product_type
    );
    let result = api_client::post("/urgent/", &request).await;
    match &result {
        Ok(_) => log::info!(
            "Urgent report generated for {} ({} competitors)",
            request.bank_name,
            request.competitor_names.len()
        ),
        Err(e) => log::error!("Failed to generate urgent report: {}", e),
    }
    result
}

/// Check that the backend is up
pub async fn health_check() -> Result<HealthResponse, ApiError> {
    let url = format!("{}/health", settings::get_settings().server_url());
    api_client::get_url(&url).await
}
