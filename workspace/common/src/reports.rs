use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Historical window a trends report aggregates over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Period {
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "12m")]
    #[default]
    TwelveMonths,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::SixMonths, Period::TwelveMonths];

    /// Wire code, e.g. `"12m"`.
    pub fn code(&self) -> &'static str {
        match self {
            Period::SixMonths => "6m",
            Period::TwelveMonths => "12m",
        }
    }

    /// Label shown in the period picker.
    pub fn label(&self) -> &'static str {
        match self {
            Period::SixMonths => "6 месяцев",
            Period::TwelveMonths => "12 месяцев",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "6m" => Ok(Period::SixMonths),
            "12m" => Ok(Period::TwelveMonths),
            other => Err(format!("Unknown period: {}", other)),
        }
    }
}

/// Product families supported by the urgent comparison report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ProductType {
    #[serde(rename = "Кредитная карта")]
    #[default]
    CreditCard,
    #[serde(rename = "Потребительский кредит")]
    ConsumerLoan,
    #[serde(rename = "Дебетовая карта")]
    DebitCard,
    #[serde(rename = "Ипотека")]
    Mortgage,
}

impl ProductType {
    /// Picker order; the first entry is the form default.
    pub const ALL: [ProductType; 4] = [
        ProductType::CreditCard,
        ProductType::ConsumerLoan,
        ProductType::DebitCard,
        ProductType::Mortgage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::CreditCard => "Кредитная карта",
            ProductType::ConsumerLoan => "Потребительский кредит",
            ProductType::DebitCard => "Дебетовая карта",
            ProductType::Mortgage => "Ипотека",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| format!("Unknown product type: {}", s))
    }
}

/// Request body for `POST /trends/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendsRequest {
    pub bank_names: Vec<String>,
    pub product_type: String,
    pub period: Period,
}

/// Request body for `POST /urgent/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UrgentRequest {
    /// Base (reference) bank.
    pub bank_name: String,
    pub competitor_names: Vec<String>,
    pub product_type: ProductType,
}

/// Report produced by the backend report generator.
///
/// Every field is optional: the shape differs between trends and urgent
/// reports and between backend versions, so the preview tolerates gaps.
/// `charts` keeps the key order of the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReportResponse {
    #[serde(default)]
    pub bank_names: Option<Vec<String>>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    /// Chart key to pre-rendered HTML fragment.
    #[serde(default)]
    pub charts: Option<Map<String, Value>>,
    /// Either a single string or a list of strings.
    #[serde(default)]
    pub summary: Option<Value>,
}
