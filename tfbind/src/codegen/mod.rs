//! Schema-to-Rust binding generator.
//!
//! The generator turns one provider of a [`ProvidersSchema`] into a set of
//! Rust modules: one per resource and data source, one for the provider
//! block, and a `mod.rs` index re-exporting them.
//!
//! Each module contains:
//!
//! - the construct wrapper with typed getters, `set_x` / `put_x` / `reset_x`
//!   mutators and interpolation accessors for computed attributes;
//! - a config struct with a builder that reports missing required
//!   properties;
//! - one struct per nested block (timeouts included) and one item reference
//!   per repeated block or computed object list.
//!
//! Generation is pure: nothing is written to disk here.

use std::path::PathBuf;

use crate::schema::{ProvidersSchema, SchemaError};

pub mod emit;
pub mod model;
pub mod naming;

use model::Construct;

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Provider name, also stripped from resource type names (`aws`).
    pub provider: String,
    /// Resource types to include; empty means all. A trailing `*` matches a
    /// prefix.
    pub resources: Vec<String>,
    /// Data source types to include, same rules as `resources`.
    pub data_sources: Vec<String>,
    /// Emit the provider configuration module.
    pub with_provider: bool,
}

impl GeneratorOptions {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            resources: Vec::new(),
            data_sources: Vec::new(),
            with_provider: true,
        }
    }

    pub fn with_resources<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_data_sources<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_sources = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn without_provider(mut self) -> Self {
        self.with_provider = false;
        self
    }
}

/// One generated source file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Generates binding modules from a provider schema.
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Build the model of every selected construct.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ProviderNotFound`] if the provider is not part
    /// of the schema.
    pub fn constructs(&self, schema: &ProvidersSchema) -> Result<Vec<Construct>, SchemaError> {
        let prefix = self.options.provider.as_str();
        let (source, provider) = schema.provider_entry(prefix)?;
        let short_name = source.rsplit('/').next().unwrap_or(prefix);

        let mut constructs = Vec::new();
        if self.options.with_provider {
            constructs.push(Construct::provider(short_name, &provider.provider, source));
        }

        for (tf_type, resource) in &provider.resource_schemas {
            if matches_any(&self.options.resources, tf_type) {
                constructs.push(Construct::resource(tf_type, resource, short_name, source));
            }
        }
        for (tf_type, data_source) in &provider.data_source_schemas {
            if matches_any(&self.options.data_sources, tf_type) {
                constructs.push(Construct::data_source(tf_type, data_source, source));
            }
        }

        for (label, patterns, available) in [
            ("resource", &self.options.resources, &provider.resource_schemas),
            ("data source", &self.options.data_sources, &provider.data_source_schemas),
        ] {
            for pattern in patterns {
                if !available.keys().any(|name| matches(pattern, name)) {
                    warn!("{label} pattern {pattern:?} matches nothing in {source}");
                }
            }
        }

        info!(
            "{}: {} constructs selected from {} schemas",
            source,
            constructs.len(),
            provider.len()
        );
        Ok(constructs)
    }

    /// Generate every selected module plus the `mod.rs` index.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ProviderNotFound`] if the provider is not part
    /// of the schema.
    pub fn generate(&self, schema: &ProvidersSchema) -> Result<Vec<GeneratedFile>, SchemaError> {
        let constructs = self.constructs(schema)?;
        let mut files: Vec<GeneratedFile> = constructs
            .iter()
            .map(|construct| {
                debug!("emit {} as {}.rs", construct.tf_type, construct.module);
                GeneratedFile {
                    path: PathBuf::from(format!("{}.rs", construct.module)),
                    contents: emit::construct(construct),
                }
            })
            .collect();

        let source = constructs
            .first()
            .map(|construct| construct.source.clone())
            .unwrap_or_else(|| self.options.provider.clone());
        files.push(GeneratedFile {
            path: PathBuf::from("mod.rs"),
            contents: emit::index(&source, &constructs),
        });
        Ok(files)
    }
}

fn matches(pattern: &str, name: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => name.starts_with(prefix),
        None => pattern == name,
    }
}

fn matches_any(patterns: &[String], name: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|pattern| matches(pattern, name))
}
