//! Generator configuration.
//!
//! Generation is driven by a `.tfgen.toml` file next to the crate that owns
//! the bindings:
//!
//! ```toml
//! schema = "${workspaceFolder}/schema/servicecatalog.json"
//! out_dir = "${workspaceFolder}/src/generated"
//! provider = "aws"
//! resources = ["aws_servicecatalog_*"]
//! data_sources = ["aws_servicecatalog_*"]
//! ```
//!
//! String values may use `${workspaceFolder}` (the directory holding the
//! config file) and `${env:NAME}` placeholders.

use std::path::Path;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tfbind::codegen::GeneratorOptions;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".tfgen.toml";

/// Root generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GenConfig {
    /// Path to the JSON printed by `terraform providers schema -json`.
    pub schema: String,
    /// Directory the generated modules are written to.
    pub out_dir: String,
    /// Provider name (`aws`) or full source (`registry.terraform.io/hashicorp/aws`).
    pub provider: String,
    /// Resource types to generate. Empty means all; a trailing `*` matches a prefix.
    #[serde(default)]
    pub resources: Vec<String>,
    /// Data source types to generate, same rules as `resources`.
    #[serde(default)]
    pub data_sources: Vec<String>,
    /// Emit the provider configuration module.
    #[serde(default = "default_true")]
    pub provider_block: bool,
    /// Run `rustfmt` over the generated files.
    #[serde(default)]
    pub rustfmt: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            schema: "${workspaceFolder}/schema.json".to_string(),
            out_dir: "${workspaceFolder}/src/generated".to_string(),
            provider: "aws".to_string(),
            resources: Vec::new(),
            data_sources: Vec::new(),
            provider_block: true,
            rustfmt: false,
        }
    }
}

impl GenConfig {
    /// Parses a config from file content, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported extensions and malformed content.
    pub fn parse(content: &str, path: &Path) -> anyhow::Result<Self> {
        let ext = path
            .extension()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let config = match ext.as_str() {
            "toml" => toml::from_str::<Self>(content)
                .with_context(|| format!("invalid config {}", path.display()))?,
            "json" => serde_json::from_str::<Self>(content)
                .with_context(|| format!("invalid config {}", path.display()))?,
            _ => bail!("unsupported config file extension: {}", path.display()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.provider.trim().is_empty() {
            bail!("`provider` must not be empty");
        }
        if self.schema.trim().is_empty() {
            bail!("`schema` must not be empty");
        }
        if self.out_dir.trim().is_empty() {
            bail!("`out_dir` must not be empty");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generator options described by this config.
    pub fn options(&self) -> GeneratorOptions {
        let options = GeneratorOptions::new(&self.provider)
            .with_resources(&self.resources)
            .with_data_sources(&self.data_sources);
        if self.provider_block {
            options
        } else {
            options.without_provider()
        }
    }

    /// JSON Schema of the config file.
    pub fn json_schema() -> anyhow::Result<String> {
        let schema = schemars::schema_for!(GenConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml() {
        let content = r#"
schema = "schema/aws.json"
out_dir = "src/generated"
provider = "aws"
resources = ["aws_servicecatalog_*"]
"#;
        let config = GenConfig::parse(content, Path::new(".tfgen.toml")).unwrap();
        assert_eq!(config.resources, vec!["aws_servicecatalog_*"]);
        assert!(config.data_sources.is_empty());
        assert!(config.provider_block);
        assert!(!config.rustfmt);

        let options = config.options();
        assert_eq!(options.provider, "aws");
        assert!(options.with_provider);
        assert_eq!(options.resources, vec!["aws_servicecatalog_*"]);
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{
            "schema": "aws.json",
            "out_dir": "out",
            "provider": "hashicorp/aws",
            "provider_block": false
        }"#;
        let config = GenConfig::parse(content, Path::new("tfgen.json")).unwrap();
        assert!(!config.options().with_provider);
    }

    #[test]
    fn test_missing_field() {
        let err = GenConfig::parse("provider = \"aws\"", Path::new("a.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("missing field `schema`"));
    }

    #[test]
    fn test_empty_provider_rejected() {
        let config = GenConfig {
            provider: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = GenConfig::parse("", Path::new("tfgen.yaml")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unsupported config file extension"));
    }

    #[test]
    fn test_default_round_trip() {
        let text = GenConfig::default().to_toml().unwrap();
        let config = GenConfig::parse(&text, Path::new(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, GenConfig::default());
    }

    #[test]
    fn test_json_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&GenConfig::json_schema().unwrap()).unwrap();
        assert_eq!(schema["title"], "GenConfig");
        assert!(schema["properties"]["out_dir"].is_object());
    }
}
