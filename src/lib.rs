//! View-models for the bank comparison report forms.
//!
//! Everything here is platform neutral: the Yew components in the
//! `frontend` crate hold these types in component state and render them.

pub mod catalog;
pub mod error;
pub mod preview;
pub mod selection;
pub mod trends;
pub mod urgent;

pub use catalog::{CatalogOutcome, CatalogSource, CatalogState, load_catalog};
pub use error::{CatalogError, FormError};
pub use preview::{ChartSelection, ReportPreview};
pub use selection::Selection;
pub use trends::{BankSelectionMode, TrendsForm};
pub use urgent::{CompetitorPruning, UrgentForm};
