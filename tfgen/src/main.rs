use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use tfgen::{
    config::{CONFIG_FILE_NAME, GenConfig},
    ctx::AppContext,
    generate::{print_report, print_schema},
    panel::{self, PageFormat},
};
use tokio::fs;

/// Generate typed Terraform bindings from provider schemas.
#[derive(Parser, Debug)]
#[command(name = "tfgen", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate bindings as described by the config file.
    Generate {
        /// Path to the config file, defaults to `.tfgen.toml`.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Run rustfmt over the written files.
        #[arg(long)]
        fmt: bool,
        /// Write nothing; fail if the bindings are out of date.
        #[arg(long)]
        check: bool,
    },
    /// List the resources and data sources of the configured provider.
    Schema {
        /// Path to the config file, defaults to `.tfgen.toml`.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Inspect panel button pages.
    Panel {
        #[command(subcommand)]
        command: PanelCommands,
    },
    /// Write a default `.tfgen.toml` in the current directory.
    Init {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
        /// Also write the config JSON Schema next to it.
        #[arg(long)]
        json_schema: bool,
    },
}

#[derive(Subcommand, Debug)]
enum PanelCommands {
    /// Render a page grid.
    Show {
        /// Page file; the built-in camera page when omitted.
        #[arg(short, long)]
        page: Option<PathBuf>,
        /// Print one line per button instead of the grid.
        #[arg(long)]
        legend: bool,
    },
    /// Export a page to a file.
    Export {
        /// Destination file.
        file: PathBuf,
        /// Page file to convert; the built-in camera page when omitted.
        #[arg(short, long)]
        page: Option<PathBuf>,
        /// Output format, inferred from the extension when omitted.
        #[arg(short, long, value_enum)]
        format: Option<PageFormat>,
    },
    /// Print the JSON Schema of page files.
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut ctx = AppContext::from_current_dir()?;

    match cli.command {
        Commands::Generate { config, fmt, check } => {
            let mut config = ctx.load_config(config).await?;
            config.rustfmt |= fmt;
            let report = ctx.generate(&config, check).await?;
            print_report(&ctx, &report, check);
            if check && !report.is_up_to_date() {
                bail!("generated bindings are out of date, run `tfgen generate`");
            }
        }
        Commands::Schema { config } => {
            let config = ctx.load_config(config).await?;
            let (source, entries) = ctx.schema_entries(&config).await?;
            print_schema(&source, &entries);
        }
        Commands::Panel { command } => match command {
            PanelCommands::Show { page, legend } => {
                let page = panel::load_page(page.as_deref()).await?;
                println!("{}", page.name().bold().purple());
                if legend {
                    print!("{}", panel::legend(&*page));
                } else {
                    print!("{}", panel::render(&*page));
                }
            }
            PanelCommands::Export { file, page, format } => {
                let page = panel::load_page(page.as_deref()).await?;
                let format = panel::export(&*page, &file, format).await?;
                let message = format!("Exported page {} to {}", page.name(), file.display());
                println!("{}", format!("{message} ({format:?})").green());
            }
            PanelCommands::Schema => println!("{}", panel::json_schema()?),
        },
        Commands::Init { force, json_schema } => {
            let path = ctx.default_config_path();
            if path.exists() && !force {
                bail!("{} exists, pass --force to overwrite", path.display());
            }
            fs::write(&path, GenConfig::default().to_toml()?)
                .await
                .with_context(|| format!("can not write {}", path.display()))?;
            info!("wrote {}", path.display());

            if json_schema {
                let schema_path = path.with_file_name(".tfgen.schema.json");
                fs::write(&schema_path, GenConfig::json_schema()?).await?;
                info!("wrote {}", schema_path.display());
            }
            println!("{}", format!("Created {CONFIG_FILE_NAME}").green());
        }
    }

    Ok(())
}
