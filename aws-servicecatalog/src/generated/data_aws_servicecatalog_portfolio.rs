//! Bindings for the `aws_servicecatalog_portfolio` data source.
//!
//! Provides information for a Service Catalog Portfolio.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, BlockKind, ConstructNode, MetaArguments, Scope, TerraformResource};

/// The `aws_servicecatalog_portfolio` data source.
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsServicecatalogPortfolio {
    node: ConstructNode,
    config: DataAwsServicecatalogPortfolioConfig,
}

impl DataAwsServicecatalogPortfolio {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_servicecatalog_portfolio";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: DataAwsServicecatalogPortfolioConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &DataAwsServicecatalogPortfolioConfig {
        &self.config
    }

    pub fn meta_mut(&mut self) -> &mut MetaArguments {
        &mut self.config.meta
    }

    pub fn accept_language(&self) -> Option<&str> {
        self.config.accept_language.as_deref()
    }

    pub fn set_accept_language(&mut self, value: impl Into<String>) {
        self.config.accept_language = Some(value.into());
    }

    pub fn reset_accept_language(&mut self) {
        self.config.accept_language = None;
    }

    /// Portfolio identifier.
    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.config.id = value.into();
    }

    pub fn tags(&self) -> Option<&HashMap<String, String>> {
        self.config.tags.as_ref()
    }

    pub fn set_tags(&mut self, value: HashMap<String, String>) {
        self.config.tags = Some(value);
    }

    pub fn reset_tags(&mut self) {
        self.config.tags = None;
    }

    pub fn timeouts(&self) -> Option<&DataAwsServicecatalogPortfolioTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: DataAwsServicecatalogPortfolioTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }

    pub fn arn(&self) -> String {
        self.interpolation_for_attribute("arn")
    }

    pub fn created_time(&self) -> String {
        self.interpolation_for_attribute("created_time")
    }

    pub fn description(&self) -> String {
        self.interpolation_for_attribute("description")
    }

    pub fn name(&self) -> String {
        self.interpolation_for_attribute("name")
    }

    pub fn provider_name(&self) -> String {
        self.interpolation_for_attribute("provider_name")
    }
}

impl TerraformResource for DataAwsServicecatalogPortfolio {
    fn terraform_resource_type(&self) -> &'static str {
        Self::TF_RESOURCE_TYPE
    }

    fn kind(&self) -> BlockKind {
        BlockKind::DataSource
    }

    fn node(&self) -> &ConstructNode {
        &self.node
    }

    fn synthesize_attributes(&self) -> tfbind::Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.config)?)
    }
}

/// Configuration of [`DataAwsServicecatalogPortfolio`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAwsServicecatalogPortfolioConfig {
    #[serde(flatten)]
    pub meta: MetaArguments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    /// Portfolio identifier.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<DataAwsServicecatalogPortfolioTimeouts>,
}

impl DataAwsServicecatalogPortfolioConfig {
    pub fn builder() -> DataAwsServicecatalogPortfolioConfigBuilder {
        DataAwsServicecatalogPortfolioConfigBuilder::default()
    }
}

/// Builder for [`DataAwsServicecatalogPortfolioConfig`].
#[derive(Debug, Clone, Default)]
pub struct DataAwsServicecatalogPortfolioConfigBuilder {
    meta: MetaArguments,
    accept_language: Option<String>,
    id: Option<String>,
    tags: Option<HashMap<String, String>>,
    timeouts: Option<DataAwsServicecatalogPortfolioTimeouts>,
}

impl DataAwsServicecatalogPortfolioConfigBuilder {
    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn tags(mut self, value: HashMap<String, String>) -> Self {
        self.tags = Some(value);
        self
    }

    pub fn timeouts(mut self, value: DataAwsServicecatalogPortfolioTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<DataAwsServicecatalogPortfolioConfig, BindingError> {
        Ok(DataAwsServicecatalogPortfolioConfig {
            meta: self.meta,
            accept_language: self.accept_language,
            id: self
                .id
                .ok_or_else(|| BindingError::missing_property("DataAwsServicecatalogPortfolioConfig", "id"))?,
            tags: self.tags,
            timeouts: self.timeouts,
        })
    }
}

/// The `timeouts` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataAwsServicecatalogPortfolioTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
}

impl DataAwsServicecatalogPortfolioTimeouts {
    pub fn builder() -> DataAwsServicecatalogPortfolioTimeoutsBuilder {
        DataAwsServicecatalogPortfolioTimeoutsBuilder::default()
    }
}

/// Builder for [`DataAwsServicecatalogPortfolioTimeouts`].
#[derive(Debug, Clone, Default)]
pub struct DataAwsServicecatalogPortfolioTimeoutsBuilder {
    read: Option<String>,
}

impl DataAwsServicecatalogPortfolioTimeoutsBuilder {
    pub fn read(mut self, value: impl Into<String>) -> Self {
        self.read = Some(value.into());
        self
    }

    pub fn build(self) -> DataAwsServicecatalogPortfolioTimeouts {
        DataAwsServicecatalogPortfolioTimeouts {
            read: self.read,
        }
    }
}
