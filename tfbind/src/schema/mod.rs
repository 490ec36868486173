//! Provider schema model.
//!
//! Parses the document printed by `terraform providers schema -json`:
//!
//! ```json
//! {
//!   "format_version": "1.0",
//!   "provider_schemas": {
//!     "registry.terraform.io/hashicorp/aws": {
//!       "provider": { "version": 0, "block": { ... } },
//!       "resource_schemas": { "aws_servicecatalog_portfolio": { "version": 0, "block": { ... } } },
//!       "data_source_schemas": { ... }
//!     }
//!   }
//! }
//! ```
//!
//! ## Submodules
//!
//! - [`block`] - Blocks, attributes and nested block types
//! - [`types`] - Attribute type expressions

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Blocks, attributes and nested block types.
pub mod block;

/// Attribute type expressions.
pub mod types;

pub use block::{Attribute, Block, NestedBlock, NestingMode};
pub use types::AttributeType;

const SUPPORTED_FORMAT_VERSIONS: &[&str] = &["0.1", "0.2", "1.0"];

/// Errors raised while loading or validating a provider schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A value does not have the expected shape.
    #[error("Type mismatch at {path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// An attribute or block declaration is inconsistent.
    #[error("Invalid declaration at {path}: {reason}")]
    InvalidAttribute { path: String, reason: &'static str },

    /// The requested provider is not part of the document.
    #[error("Provider {name:?} not found, available: {available:?}")]
    ProviderNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root of the `terraform providers schema -json` document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProvidersSchema {
    pub format_version: String,
    #[serde(default)]
    pub provider_schemas: BTreeMap<String, ProviderSchema>,
}

/// Schemas of one provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderSchema {
    /// The provider configuration block.
    pub provider: Schema,
    #[serde(default)]
    pub resource_schemas: BTreeMap<String, Schema>,
    #[serde(default)]
    pub data_source_schemas: BTreeMap<String, Schema>,
}

/// A versioned block schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub version: u64,
    pub block: Block,
}

impl ProvidersSchema {
    /// Parse and validate a schema document.
    pub fn parse(content: &str) -> Result<Self, SchemaError> {
        let schema: ProvidersSchema = serde_json::from_str(content)?;
        if !SUPPORTED_FORMAT_VERSIONS.contains(&schema.format_version.as_str()) {
            warn!(
                "untested schema format version {}, supported: {:?}",
                schema.format_version, SUPPORTED_FORMAT_VERSIONS
            );
        }
        schema.validate()?;
        Ok(schema)
    }

    /// Read, parse and validate a schema file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded provider schema from {}", path.display());
        Self::parse(&content)
    }

    /// Validate every block of every provider.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (source, provider) in &self.provider_schemas {
            provider
                .provider
                .block
                .validate(&format!("{source}.provider"))?;
            for (name, schema) in provider
                .resource_schemas
                .iter()
                .chain(provider.data_source_schemas.iter())
            {
                schema.block.validate(name)?;
            }
        }
        Ok(())
    }

    /// Look up a provider by full source address, `namespace/name` or name.
    ///
    /// Returns the full source address together with the schema.
    pub fn provider_entry(&self, name: &str) -> Result<(&str, &ProviderSchema), SchemaError> {
        let suffix = format!("/{name}");
        self.provider_schemas
            .iter()
            .find(|(source, _)| source.as_str() == name || source.ends_with(&suffix))
            .map(|(source, schema)| (source.as_str(), schema))
            .ok_or_else(|| SchemaError::ProviderNotFound {
                name: name.to_string(),
                available: self.provider_schemas.keys().cloned().collect(),
            })
    }

    /// Look up a provider schema, see [`ProvidersSchema::provider_entry`].
    pub fn provider(&self, name: &str) -> Result<&ProviderSchema, SchemaError> {
        self.provider_entry(name).map(|(_, schema)| schema)
    }
}

impl ProviderSchema {
    /// Number of resource and data source schemas.
    pub fn len(&self) -> usize {
        self.resource_schemas.len() + self.data_source_schemas.len()
    }

    /// Whether the provider declares no resources or data sources.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Short registry source for `required_providers`.
///
/// `registry.terraform.io/hashicorp/aws` becomes `hashicorp/aws`; other
/// hosts are kept as-is.
pub fn short_source(source: &str) -> &str {
    source
        .strip_prefix("registry.terraform.io/")
        .unwrap_or(source)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document() -> serde_json::Value {
        json!({
            "format_version": "1.0",
            "provider_schemas": {
                "registry.terraform.io/hashicorp/aws": {
                    "provider": {
                        "version": 0,
                        "block": {
                            "attributes": {
                                "region": { "type": "string", "optional": true }
                            }
                        }
                    },
                    "resource_schemas": {
                        "aws_servicecatalog_tag_option": {
                            "version": 0,
                            "block": {
                                "attributes": {
                                    "key": { "type": "string", "required": true },
                                    "value": { "type": "string", "required": true },
                                    "owner": { "type": "string", "computed": true }
                                },
                                "block_types": {
                                    "timeouts": {
                                        "nesting_mode": "single",
                                        "block": {
                                            "attributes": {
                                                "create": { "type": "string", "optional": true }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "data_source_schemas": {}
                }
            }
        })
    }

    #[test]
    fn test_parse_document() {
        let schema = ProvidersSchema::parse(&document().to_string()).unwrap();
        let (source, aws) = schema.provider_entry("aws").unwrap();
        assert_eq!(source, "registry.terraform.io/hashicorp/aws");
        assert_eq!(short_source(source), "hashicorp/aws");
        assert_eq!(aws.len(), 1);

        let tag_option = &aws.resource_schemas["aws_servicecatalog_tag_option"];
        assert_eq!(tag_option.block.required_attributes(), vec!["key", "value"]);
        assert!(tag_option.block.attributes["owner"].is_computed_only());
        assert_eq!(
            tag_option.block.block_types["timeouts"].nesting_mode,
            NestingMode::Single
        );
    }

    #[test]
    fn test_provider_lookup() {
        let schema = ProvidersSchema::parse(&document().to_string()).unwrap();
        assert!(schema.provider("hashicorp/aws").is_ok());
        assert!(
            schema
                .provider("registry.terraform.io/hashicorp/aws")
                .is_ok()
        );

        match schema.provider("gcp") {
            Err(SchemaError::ProviderNotFound { available, .. }) => {
                assert_eq!(available, vec!["registry.terraform.io/hashicorp/aws"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_attribute_is_rejected() {
        let mut doc = document();
        doc["provider_schemas"]["registry.terraform.io/hashicorp/aws"]["resource_schemas"]
            ["aws_servicecatalog_tag_option"]["block"]["attributes"]["key"]["optional"] =
            json!(true);

        match ProvidersSchema::parse(&doc.to_string()) {
            Err(SchemaError::InvalidAttribute { path, .. }) => {
                assert_eq!(path, "aws_servicecatalog_tag_option.key");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ProvidersSchema::from_path("/nonexistent/schema.json").unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }
}
