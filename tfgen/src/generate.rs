//! Binding generation and schema inspection commands.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Context;
use colored::Colorize;
use tfbind::{
    codegen::{Generator, model::ConstructKind},
    schema::ProvidersSchema,
};
use tokio::fs;

use crate::{config::GenConfig, ctx::AppContext};

/// Outcome of a generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub out_dir: PathBuf,
    /// Files whose content changed (or would change in check mode).
    pub changed: Vec<PathBuf>,
    /// Files already up to date.
    pub unchanged: Vec<PathBuf>,
    /// `.rs` files in the output directory the generator no longer produces.
    pub stale: Vec<PathBuf>,
}

impl GenerateReport {
    pub fn is_up_to_date(&self) -> bool {
        self.changed.is_empty() && self.stale.is_empty()
    }
}

/// One row of `tfgen schema`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub kind: ConstructKind,
    pub tf_type: String,
    pub selected: bool,
    pub required: Vec<String>,
}

impl AppContext {
    /// Reads and validates the provider schema named by `config`.
    pub async fn load_schema(&self, config: &GenConfig) -> anyhow::Result<ProvidersSchema> {
        let path = self.resolve_path(&config.schema)?;
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("can not read schema {}", path.display()))?;
        let schema = ProvidersSchema::parse(&content)
            .with_context(|| format!("invalid provider schema {}", path.display()))?;
        info!("loaded provider schema {}", self.display_path(&path));
        Ok(schema)
    }

    /// Generates the bindings described by `config`.
    ///
    /// Files are only rewritten when their content changes. With `check`
    /// set nothing is written and the report lists what would change. When
    /// `config.rustfmt` is set every module goes through `rustfmt` before it
    /// is compared, so formatted output stays up to date on the next run.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be loaded, the provider is
    /// missing from it, formatting fails or the output cannot be written.
    /// Nothing is written when schema loading, model building or formatting
    /// fails.
    pub async fn generate(
        &self,
        config: &GenConfig,
        check: bool,
    ) -> anyhow::Result<GenerateReport> {
        let schema = self.load_schema(config).await?;
        let mut files = Generator::new(config.options()).generate(&schema)?;
        if config.rustfmt {
            for file in &mut files {
                file.contents = self
                    .rustfmt(&file.contents)
                    .await
                    .with_context(|| format!("can not format {}", file.path.display()))?;
            }
        }
        let out_dir = self.resolve_path(&config.out_dir)?;

        if !check {
            fs::create_dir_all(&out_dir)
                .await
                .with_context(|| format!("can not create {}", out_dir.display()))?;
        }

        let mut report = GenerateReport {
            out_dir: out_dir.clone(),
            ..Default::default()
        };
        let mut produced = BTreeSet::new();
        for file in &files {
            let path = out_dir.join(&file.path);
            produced.insert(path.clone());

            let current = fs::read_to_string(&path).await.ok();
            if current.as_deref() == Some(file.contents.as_str()) {
                debug!("{} is up to date", path.display());
                report.unchanged.push(path);
                continue;
            }

            if !check {
                fs::write(&path, &file.contents)
                    .await
                    .with_context(|| format!("can not write {}", path.display()))?;
                debug!("wrote {}", path.display());
            }
            report.changed.push(path);
        }

        report.stale = stale_files(&out_dir, &produced).await?;
        for path in &report.stale {
            warn!("{} is no longer generated", path.display());
        }

        Ok(report)
    }

    /// Formats one module with `rustfmt`, in memory.
    pub async fn rustfmt(&self, source: &str) -> anyhow::Result<String> {
        let mut cmd = self.command("rustfmt");
        cmd.args(["--edition", "2024", "--emit", "stdout"]);
        cmd.filter(source).await
    }

    /// Lists every resource and data source of the configured provider,
    /// marking the ones the filters select.
    pub async fn schema_entries(
        &self,
        config: &GenConfig,
    ) -> anyhow::Result<(String, Vec<SchemaEntry>)> {
        let schema = self.load_schema(config).await?;
        let (source, provider) = schema.provider_entry(&config.provider)?;
        let selected = Generator::new(config.options()).constructs(&schema)?;

        let entries = provider
            .resource_schemas
            .iter()
            .map(|(name, schema)| (ConstructKind::Resource, name, schema))
            .chain(
                provider
                    .data_source_schemas
                    .iter()
                    .map(|(name, schema)| (ConstructKind::DataSource, name, schema)),
            )
            .map(|(kind, name, schema)| SchemaEntry {
                kind,
                tf_type: name.clone(),
                selected: selected
                    .iter()
                    .any(|c| c.kind == kind && &c.tf_type == name),
                required: schema
                    .block
                    .required_attributes()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect();
        Ok((source.to_string(), entries))
    }
}

async fn stale_files(
    out_dir: &Path,
    produced: &BTreeSet<PathBuf>,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    let mut entries = match fs::read_dir(out_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(stale),
        Err(e) => return Err(e).with_context(|| format!("can not list {}", out_dir.display())),
    };
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "rs") && !produced.contains(&path) {
            stale.push(path);
        }
    }
    stale.sort();
    Ok(stale)
}

/// Prints a generation report.
pub fn print_report(ctx: &AppContext, report: &GenerateReport, check: bool) {
    let verb = if check { "would update" } else { "updated" };
    for path in &report.changed {
        println!("  {} {}", verb.yellow(), ctx.display_path(path));
    }
    for path in &report.stale {
        println!("  {} {}", "stale".red(), ctx.display_path(path));
    }
    println!(
        "{}",
        format!(
            "{} changed, {} unchanged in {}",
            report.changed.len(),
            report.unchanged.len(),
            ctx.display_path(&report.out_dir)
        )
        .bold()
        .green()
    );
}

/// Prints the `tfgen schema` listing.
pub fn print_schema(source: &str, entries: &[SchemaEntry]) {
    println!("{}", source.bold().purple());
    for (kind, title) in [
        (ConstructKind::Resource, "resources"),
        (ConstructKind::DataSource, "data sources"),
    ] {
        println!("{}", title.bold());
        for entry in entries.iter().filter(|entry| entry.kind == kind) {
            let marker = if entry.selected {
                "*".green()
            } else {
                " ".normal()
            };
            let required = if entry.required.is_empty() {
                String::new()
            } else {
                format!(" (requires {})", entry.required.join(", "))
            };
            println!("  {marker} {}{}", entry.tf_type, required.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{
        "format_version": "1.0",
        "provider_schemas": {
            "registry.terraform.io/hashicorp/aws": {
                "provider": { "version": 0, "block": {} },
                "resource_schemas": {
                    "aws_servicecatalog_tag_option": {
                        "version": 0,
                        "block": {
                            "attributes": {
                                "key": { "type": "string", "required": true },
                                "value": { "type": "string", "required": true },
                                "id": { "type": "string", "optional": true, "computed": true }
                            }
                        }
                    },
                    "aws_s3_bucket": {
                        "version": 0,
                        "block": {
                            "attributes": {
                                "bucket": { "type": "string", "optional": true }
                            }
                        }
                    }
                },
                "data_source_schemas": {}
            }
        }
    }"#;

    fn workspace() -> (tempfile::TempDir, AppContext, GenConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("schema.json"), SCHEMA).unwrap();
        let ctx = AppContext::new(dir.path());
        let config = GenConfig {
            schema: "${workspaceFolder}/schema.json".to_string(),
            out_dir: "generated".to_string(),
            provider: "aws".to_string(),
            resources: vec!["aws_servicecatalog_*".to_string()],
            ..Default::default()
        };
        (dir, ctx, config)
    }

    #[tokio::test]
    async fn test_generate_into_directory() {
        let (dir, ctx, config) = workspace();
        let report = ctx.generate(&config, false).await.unwrap();

        let out = dir.path().join("generated");
        assert_eq!(report.out_dir, out);
        assert_eq!(
            report.changed,
            vec![
                out.join("provider.rs"),
                out.join("servicecatalog_tag_option.rs"),
                out.join("mod.rs"),
            ]
        );
        let module = std::fs::read_to_string(out.join("servicecatalog_tag_option.rs")).unwrap();
        assert!(module.contains("pub struct ServicecatalogTagOption {"));
        assert!(!out.join("s3_bucket.rs").exists());

        let again = ctx.generate(&config, false).await.unwrap();
        assert!(again.changed.is_empty());
        assert_eq!(again.unchanged.len(), 3);
        assert!(again.is_up_to_date());
    }

    #[tokio::test]
    async fn test_check_mode_writes_nothing() {
        let (dir, ctx, config) = workspace();
        let report = ctx.generate(&config, true).await.unwrap();
        assert_eq!(report.changed.len(), 3);
        assert!(!report.is_up_to_date());
        assert!(!dir.path().join("generated").exists());
    }

    #[tokio::test]
    async fn test_formatted_output_stays_up_to_date() {
        let (dir, ctx, mut config) = workspace();
        config.rustfmt = true;
        let report = ctx.generate(&config, false).await.unwrap();
        assert_eq!(report.changed.len(), 3);

        let module = dir
            .path()
            .join("generated")
            .join("servicecatalog_tag_option.rs");
        let written = std::fs::read_to_string(&module).unwrap();
        assert_eq!(ctx.rustfmt(&written).await.unwrap(), written);

        let check = ctx.generate(&config, true).await.unwrap();
        assert!(check.changed.is_empty(), "{:?}", check.changed);
        assert_eq!(check.unchanged.len(), 3);
        assert!(check.is_up_to_date());
    }

    #[tokio::test]
    async fn test_stale_files_reported() {
        let (dir, ctx, config) = workspace();
        ctx.generate(&config, false).await.unwrap();
        let old = dir
            .path()
            .join("generated")
            .join("servicecatalog_portfolio.rs");
        std::fs::write(&old, "// old").unwrap();

        let report = ctx.generate(&config, true).await.unwrap();
        assert!(report.changed.is_empty());
        assert_eq!(report.stale, vec![old]);
        assert!(!report.is_up_to_date());
    }

    #[tokio::test]
    async fn test_unknown_provider() {
        let (_dir, ctx, mut config) = workspace();
        config.provider = "google".to_string();
        let err = ctx.generate(&config, false).await.unwrap_err();
        assert!(format!("{err:#}").contains("google"));
    }

    #[tokio::test]
    async fn test_missing_schema_file() {
        let (_dir, ctx, mut config) = workspace();
        config.schema = "missing.json".to_string();
        let err = ctx.generate(&config, false).await.unwrap_err();
        assert!(err.to_string().contains("can not read schema"));
    }

    #[tokio::test]
    async fn test_schema_entries() {
        let (_dir, ctx, config) = workspace();
        let (source, entries) = ctx.schema_entries(&config).await.unwrap();
        assert_eq!(source, "registry.terraform.io/hashicorp/aws");
        assert_eq!(entries.len(), 2);

        let bucket = &entries[0];
        assert_eq!(bucket.tf_type, "aws_s3_bucket");
        assert!(!bucket.selected);
        assert!(bucket.required.is_empty());

        let tag_option = &entries[1];
        assert!(tag_option.selected);
        assert_eq!(tag_option.required, vec!["key", "value"]);
    }
}
