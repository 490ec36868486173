//! # tfgen
//!
//! Command-line front end for the `tfbind` binding generator and the
//! `buttonpage` panel tables.
//!
//! ## Features
//!
//! - **Binding generation**: reads `.tfgen.toml`, loads the provider schema
//!   and writes one Rust module per resource and data source
//! - **Drift check**: `tfgen generate --check` fails when checked-in bindings
//!   differ from what the schema produces
//! - **Schema listing**: shows which resources the filters select
//! - **Panel pages**: renders, exports and describes button pages
//!
//! ## Modules
//!
//! - [`config`] - Generator configuration file
//! - [`ctx`] - Application context and placeholder expansion
//! - [`generate`] - Generation and schema inspection commands
//! - [`panel`] - Panel page rendering and export
//! - [`utils`] - Command execution and placeholder helpers

/// Generator configuration file.
pub mod config;

/// Application context and placeholder expansion.
pub mod ctx;

/// Generation and schema inspection commands.
pub mod generate;

/// Panel page rendering and export.
pub mod panel;

/// Command execution and placeholder helpers.
pub mod utils;

#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
