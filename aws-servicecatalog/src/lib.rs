//! # aws-servicecatalog
//!
//! Typed Terraform bindings for the AWS Service Catalog resources and data
//! sources, plus the `aws` provider block.
//!
//! Everything under `generated` is produced by `tfgen generate` from
//! `schema/servicecatalog.json`; edit the schema or the generator, never the
//! bindings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aws_servicecatalog::{
//!     AwsProvider, AwsProviderConfig, ServicecatalogPortfolio, ServicecatalogPortfolioConfig,
//!     servicecatalog_portfolio::ServicecatalogPortfolioTimeouts,
//! };
//! use tfbind::Stack;
//!
//! let mut stack = Stack::new("catalog");
//! let scope = stack.scope();
//!
//! let provider = AwsProvider::new(
//!     &scope,
//!     "aws",
//!     AwsProviderConfig::builder().region("eu-west-1").build(),
//! )?;
//!
//! let mut portfolio = ServicecatalogPortfolio::new(
//!     &scope,
//!     "main",
//!     ServicecatalogPortfolioConfig::builder()
//!         .name("platform")
//!         .provider_name("platform-team")
//!         .build()?,
//! )?;
//! portfolio.put_timeouts(ServicecatalogPortfolioTimeouts::builder().create("10m").build());
//!
//! stack.add_provider(&provider)?;
//! stack.add(&portfolio)?;
//! stack.write("cdktf.out/catalog.tf.json")?;
//! # Ok::<(), tfbind::BindingError>(())
//! ```

#[rustfmt::skip]
mod generated;

pub use generated::*;

/// Provider schema the bindings were generated from.
pub const SCHEMA_JSON: &str = include_str!("../schema/servicecatalog.json");

#[cfg(test)]
mod tests;
