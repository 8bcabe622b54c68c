//! Error types for catalog authoring
//!
//! Calculations themselves never fail: an invalid salary is a no-op and an
//! unknown method id falls back to the default method. The only errors in
//! this crate are violations of the catalog's data contract, raised when a
//! catalog is built.

use thiserror::Error;

/// Violations of the allocation method authoring contract
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A catalog must contain at least one method to fall back to
    #[error("Catalog error: the catalog contains no allocation methods")]
    Empty,

    /// A method with no shares cannot split anything
    #[error("Catalog error: method '{method_id}' has no shares")]
    NoShares { method_id: String },

    /// A share fraction is not finite or falls outside `(0, 1]`
    #[error("Catalog error: method '{method_id}' share '{label}' has invalid fraction {fraction}")]
    InvalidFraction { method_id: String, label: String, fraction: f64 },

    /// The fractions of a method do not add up to one
    #[error("Catalog error: method '{method_id}' fractions sum to {sum}, expected 1.0")]
    SharesDoNotSumToOne { method_id: String, sum: f64 },

    /// Two methods share the same id, making lookup ambiguous
    #[error("Catalog error: duplicate method id '{method_id}'")]
    DuplicateId { method_id: String },
}

impl CatalogError {
    /// Id of the offending method, when the error concerns a single method
    pub fn method_id(&self) -> Option<&str> {
        match self {
            CatalogError::Empty => None,
            CatalogError::NoShares { method_id }
            | CatalogError::InvalidFraction { method_id, .. }
            | CatalogError::SharesDoNotSumToOne { method_id, .. }
            | CatalogError::DuplicateId { method_id } => Some(method_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_method() {
        let err = CatalogError::SharesDoNotSumToOne { method_id: "70/20".to_string(), sum: 0.9 };
        assert_eq!(err.to_string(), "Catalog error: method '70/20' fractions sum to 0.9, expected 1.0");
        assert_eq!(err.method_id(), Some("70/20"));
        assert_eq!(CatalogError::Empty.method_id(), None);
    }
}
