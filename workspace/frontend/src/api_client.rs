pub mod banks;
pub mod reports;

use common::ErrorResponse;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::settings;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Failure of a call to the report backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never got an answer
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-OK status, with the backend's `detail` when it sent one
    #[error("HTTP error {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// The body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default()
}

async fn error_from_response(endpoint: &str, response: Response) -> ApiError {
    log::warn!("{} - Non-OK response: {}", endpoint, response.status());
    let detail = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| match body.detail {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        });
    let err = ApiError::Status {
        status: response.status(),
        detail,
    };
    log::error!("{} - {}", endpoint, err);
    err
}

async fn decode<T>(endpoint: &str, response: Response) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("{} - Response received, parsing JSON", endpoint);
    response.json::<T>().await.map_err(|e| {
        let err = ApiError::Decode(e.to_string());
        log::error!("{} - {}", endpoint, err);
        err
    })
}

/// GET an absolute URL and decode the JSON body
pub async fn get_url<T>(url: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url).send().await.map_err(|e| {
        let err = ApiError::Transport(e.to_string());
        log::error!("GET {} - {}", url, err);
        err
    })?;

    if !response.ok() {
        return Err(error_from_response(url, response).await);
    }

    let data = decode(url, response).await?;
    log::info!("GET {} - Success", url);
    Ok(data)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    get_url(&format!("{}{}", api_base(), endpoint)).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let err = ApiError::Transport(format!("Failed to serialize request: {}", e));
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Transport(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        return Err(error_from_response(endpoint, response).await);
    }

    let data = decode(endpoint, response).await?;
    log::info!("POST {} - Success", endpoint);
    Ok(data)
}
