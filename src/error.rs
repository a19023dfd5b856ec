use thiserror::Error;

/// Failure to obtain the bank catalog.
///
/// Never shown to the user: forms recover by substituting a fallback list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The request could not be sent or the connection failed
    #[error("Request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("HTTP error: {0}")]
    Http(u16),

    /// The body was not a bank catalog
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Rejected submit attempt. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Выберите один банк")]
    NoBankSelected,

    #[error("Выберите хотя бы один банк")]
    NoBanksSelected,

    #[error("Выберите хотя бы одного конкурента")]
    NoCompetitorsSelected,
}
