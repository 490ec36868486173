//! Error types for construct creation, list access and synthesis.

use thiserror::Error;

/// Result alias used across the runtime.
pub type Result<T> = std::result::Result<T, BindingError>;

/// Errors raised while building or synthesizing constructs.
#[derive(Debug, Error)]
pub enum BindingError {
    /// A required property was not supplied to a builder.
    #[error("Missing required property '{property}' in {owner}")]
    MissingRequiredProperty {
        /// Struct the property belongs to.
        owner: &'static str,
        /// Terraform attribute or block name.
        property: &'static str,
    },

    /// A construct id cannot be used within a scope.
    #[error("Invalid construct id {id:?}: {reason}")]
    InvalidConstructId { id: String, reason: &'static str },

    /// Two constructs synthesize to the same terraform address.
    #[error("Duplicate construct: {address} is already defined in stack {stack}")]
    DuplicateConstruct { stack: String, address: String },

    /// A list with a known length was indexed past its end.
    #[error("Index {index} out of range for {attribute} (length {len})")]
    IndexOutOfRange {
        attribute: String,
        index: usize,
        len: usize,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BindingError {
    /// Shorthand used by generated builders.
    pub fn missing_property(owner: &'static str, property: &'static str) -> Self {
        BindingError::MissingRequiredProperty { owner, property }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_message() {
        let err = BindingError::missing_property("ServicecatalogPortfolioConfig", "name");
        assert_eq!(
            err.to_string(),
            "Missing required property 'name' in ServicecatalogPortfolioConfig"
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = BindingError::IndexOutOfRange {
            attribute: "provisioning_parameters".to_string(),
            index: 3,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Index 3 out of range for provisioning_parameters (length 2)"
        );
    }
}
