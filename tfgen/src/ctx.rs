//! Application context.
//!
//! [`AppContext`] knows the workspace directory the command operates in and
//! resolves the placeholders used in config values.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;

use crate::{
    config::{CONFIG_FILE_NAME, GenConfig},
    utils::{Command, replace_env_placeholders},
};

/// State shared by the command handlers.
#[derive(Debug, Default, Clone)]
pub struct AppContext {
    /// Directory `${workspaceFolder}` expands to and relative paths resolve
    /// against.
    pub workspace: PathBuf,
    /// Loaded generator configuration.
    pub config: Option<GenConfig>,
    /// Path the configuration was loaded from.
    pub config_path: Option<PathBuf>,
}

impl AppContext {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            ..Default::default()
        }
    }

    /// Context rooted at the current directory.
    pub fn from_current_dir() -> anyhow::Result<Self> {
        let dir = std::env::current_dir().context("cannot determine current directory")?;
        Ok(Self::new(dir))
    }

    /// Default config path inside the workspace.
    pub fn default_config_path(&self) -> PathBuf {
        self.workspace.join(CONFIG_FILE_NAME)
    }

    /// Replaces `${workspaceFolder}` with the workspace directory.
    pub fn value_replace_with_var<S>(&self, value: S) -> String
    where
        S: AsRef<std::ffi::OsStr>,
    {
        let raw = value.as_ref().to_string_lossy();
        raw.replace("${workspaceFolder}", &self.workspace.display().to_string())
    }

    /// Expands every placeholder in `value` and resolves it against the
    /// workspace.
    pub fn resolve_path(&self, value: &str) -> anyhow::Result<PathBuf> {
        let expanded = replace_env_placeholders(&self.value_replace_with_var(value))?;
        let path = PathBuf::from(expanded);
        Ok(if path.is_absolute() {
            path
        } else {
            self.workspace.join(path)
        })
    }

    /// Loads the generator configuration.
    ///
    /// When `config_path` is given, the workspace moves to the directory that
    /// holds the file so that `${workspaceFolder}` refers to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load_config(&mut self, config_path: Option<PathBuf>) -> anyhow::Result<GenConfig> {
        let config_path = match config_path {
            Some(path) => {
                let path = if path.is_absolute() {
                    path
                } else {
                    self.workspace.join(path)
                };
                if let Some(parent) = path.parent() {
                    self.workspace = parent.to_path_buf();
                }
                path
            }
            None => self.default_config_path(),
        };

        let content = fs::read_to_string(&config_path).await.with_context(|| {
            format!(
                "can not open config file {} (run `tfgen init` to create one)",
                config_path.display()
            )
        })?;
        let config = GenConfig::parse(&content, &config_path)?;
        debug!("loaded {}: {config:?}", config_path.display());

        self.config = Some(config.clone());
        self.config_path = Some(config_path);
        Ok(config)
    }

    /// Creates a command that runs in the workspace with placeholder
    /// expansion on its arguments.
    pub fn command(&self, program: &str) -> Command {
        let this = self.clone();
        Command::new(program, &self.workspace, move |s| {
            this.value_replace_with_var(s)
        })
    }

    /// Path shown to the user, relative to the workspace when possible.
    pub fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.workspace).unwrap_or(path).display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_placeholder() {
        let ctx = AppContext::new("/work/catalog");
        assert_eq!(
            ctx.value_replace_with_var("${workspaceFolder}/schema.json"),
            "/work/catalog/schema.json"
        );
        assert_eq!(
            ctx.resolve_path("${workspaceFolder}/generated").unwrap(),
            PathBuf::from("/work/catalog/generated")
        );
        assert_eq!(
            ctx.resolve_path("schema/aws.json").unwrap(),
            PathBuf::from("/work/catalog/schema/aws.json")
        );
    }

    #[test]
    fn test_env_placeholder_in_path() {
        unsafe {
            std::env::set_var("TFGEN_TEST_DIR", "/schemas");
        }
        let ctx = AppContext::new("/work");
        assert_eq!(
            ctx.resolve_path("${env:TFGEN_TEST_DIR}/aws.json").unwrap(),
            PathBuf::from("/schemas/aws.json")
        );
    }

    #[tokio::test]
    async fn test_load_config_moves_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let crate_dir = dir.path().join("bindings");
        std::fs::create_dir_all(&crate_dir).unwrap();
        let content = r#"
schema = "${workspaceFolder}/schema.json"
out_dir = "src/generated"
provider = "aws"
"#;
        std::fs::write(crate_dir.join(CONFIG_FILE_NAME), content).unwrap();

        let mut ctx = AppContext::new(dir.path());
        let config = ctx
            .load_config(Some(PathBuf::from("bindings/.tfgen.toml")))
            .await
            .unwrap();
        assert_eq!(ctx.workspace, crate_dir);
        assert_eq!(
            ctx.resolve_path(&config.schema).unwrap(),
            crate_dir.join("schema.json")
        );
        assert_eq!(
            ctx.resolve_path(&config.out_dir).unwrap(),
            crate_dir.join("src/generated")
        );
        assert!(ctx.config.is_some());
    }

    #[tokio::test]
    async fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::new(dir.path());
        let err = ctx.load_config(None).await.unwrap_err();
        assert!(err.to_string().contains("tfgen init"));
    }
}
