use std::path::PathBuf;

use thiserror::Error;

/// Failures of inventory operations. The `Display` text of the
/// validation variants is what the console shows after `Error: `.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Quantity '{qty}' for item '{item}' is not a number.")]
    NotANumber { item: String, qty: String },
    #[error("Invalid quantity '{qty}' for item '{item}'.")]
    InvalidQuantity { item: String, qty: String },
    #[error("Item '{item}' not found in inventory. Cannot remove.")]
    NotFound { item: String },
    #[error("io error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode '{}'", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ServiceError {
    pub fn not_found(item: &str) -> Self { Self::NotFound { item: item.to_string() } }

    pub fn invalid_quantity(item: &str, qty: impl ToString) -> Self {
        Self::InvalidQuantity { item: item.to_string(), qty: qty.to_string() }
    }

    /// Validation and missing-item errors leave state untouched and are safe to
    /// report and continue past; I/O and encoding errors are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotANumber { .. } | Self::InvalidQuantity { .. } | Self::NotFound { .. })
    }
}
