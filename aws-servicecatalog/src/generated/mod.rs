//! Bindings for the `registry.terraform.io/hashicorp/aws` provider.
//!
//! Code generated from the provider schema. DO NOT EDIT.

pub mod data_aws_servicecatalog_launch_paths;
pub mod data_aws_servicecatalog_portfolio;
pub mod provider;
pub mod servicecatalog_portfolio;
pub mod servicecatalog_portfolio_share;
pub mod servicecatalog_product;
pub mod servicecatalog_provisioned_product;
pub mod servicecatalog_tag_option;

pub use data_aws_servicecatalog_launch_paths::{DataAwsServicecatalogLaunchPaths, DataAwsServicecatalogLaunchPathsConfig};
pub use data_aws_servicecatalog_portfolio::{DataAwsServicecatalogPortfolio, DataAwsServicecatalogPortfolioConfig};
pub use provider::{AwsProvider, AwsProviderConfig};
pub use servicecatalog_portfolio::{ServicecatalogPortfolio, ServicecatalogPortfolioConfig};
pub use servicecatalog_portfolio_share::{ServicecatalogPortfolioShare, ServicecatalogPortfolioShareConfig};
pub use servicecatalog_product::{ServicecatalogProduct, ServicecatalogProductConfig};
pub use servicecatalog_provisioned_product::{ServicecatalogProvisionedProduct, ServicecatalogProvisionedProductConfig};
pub use servicecatalog_tag_option::{ServicecatalogTagOption, ServicecatalogTagOptionConfig};
