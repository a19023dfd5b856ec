//! Common transport-layer types shared with the report backend.
//! These structs mirror the API's request/response payloads so the form
//! view-models and the frontend deserialize responses without duplicating shapes.

mod banks;
mod reports;

pub use banks::{BankCatalog, BanksByProduct};
pub use reports::{Period, ProductType, ReportResponse, TrendsRequest, UrgentRequest};

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

/// Health check payload (`GET /health`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}
