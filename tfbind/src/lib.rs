//! # tfbind
//!
//! Typed Terraform constructs and a schema-driven binding generator.
//!
//! Provider bindings are plain Rust structs generated from the JSON printed by
//! `terraform providers schema -json`. This crate holds both halves of that
//! pipeline:
//!
//! - the runtime the generated code builds on (scopes, construct nodes,
//!   meta-arguments, list references and stack synthesis), and
//! - the schema model and the generator that emits the bindings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tfbind::{Stack, schema::ProvidersSchema, codegen::{Generator, GeneratorOptions}};
//!
//! // Generate bindings from a provider schema
//! let schema = ProvidersSchema::from_path("aws-schema.json").unwrap();
//! let files = Generator::new(GeneratorOptions::new("aws")).generate(&schema).unwrap();
//!
//! // Synthesize a stack built from generated resources
//! let stack = Stack::new("catalog");
//! let json = stack.synth();
//! ```
//!
//! ## Modules
//!
//! - [`construct`] - Scopes and construct identifiers
//! - [`resource`] - Resource traits and terraform meta-arguments
//! - [`list`] - Index-based references into repeated blocks
//! - [`stack`] - Collecting resources and synthesizing Terraform JSON
//! - [`schema`] - Provider schema model
//! - [`codegen`] - Schema-to-Rust generator

#[macro_use]
extern crate log;

/// Scopes and construct identifiers.
pub mod construct;

/// Error type shared by the runtime.
pub mod error;

/// Index-based references into repeated nested blocks.
pub mod list;

/// Resource traits and terraform meta-arguments.
pub mod resource;

/// Collecting constructs and synthesizing Terraform JSON.
pub mod stack;

/// Provider schema model.
///
/// Parses the output of `terraform providers schema -json` into typed
/// blocks, attributes and attribute types.
pub mod schema;

/// Schema-to-Rust binding generator.
pub mod codegen;

pub use construct::{ConstructNode, Scope};
pub use error::{BindingError, Result};
pub use list::{ComplexList, ListItemRef};
pub use resource::{BlockKind, Lifecycle, MetaArguments, TerraformProvider, TerraformResource};
pub use stack::Stack;
