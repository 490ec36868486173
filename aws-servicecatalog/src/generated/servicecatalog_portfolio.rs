//! Bindings for the `aws_servicecatalog_portfolio` resource.
//!
//! Provides a resource to create a Service Catalog Portfolio.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, ConstructNode, MetaArguments, Scope, TerraformResource};

/// The `aws_servicecatalog_portfolio` resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicecatalogPortfolio {
    node: ConstructNode,
    config: ServicecatalogPortfolioConfig,
}

impl ServicecatalogPortfolio {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_servicecatalog_portfolio";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: ServicecatalogPortfolioConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &ServicecatalogPortfolioConfig {
        &self.config
    }

    pub fn meta_mut(&mut self) -> &mut MetaArguments {
        &mut self.config.meta
    }

    /// Description of the portfolio.
    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.config.description = Some(value.into());
    }

    pub fn reset_description(&mut self) {
        self.config.description = None;
    }

    pub fn id(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.config.id = Some(value.into());
    }

    pub fn reset_id(&mut self) {
        self.config.id = None;
    }

    /// The name of the portfolio.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.config.name = value.into();
    }

    /// Name of the person or organization who owns the portfolio.
    pub fn provider_name(&self) -> &str {
        &self.config.provider_name
    }

    pub fn set_provider_name(&mut self, value: impl Into<String>) {
        self.config.provider_name = value.into();
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

    pub fn tags_all(&self) -> Option<&HashMap<String, String>> {
        self.config.tags_all.as_ref()
    }

    pub fn set_tags_all(&mut self, value: HashMap<String, String>) {
        self.config.tags_all = Some(value);
    }

    pub fn reset_tags_all(&mut self) {
        self.config.tags_all = None;
    }

    pub fn timeouts(&self) -> Option<&ServicecatalogPortfolioTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: ServicecatalogPortfolioTimeouts) {
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
}

impl TerraformResource for ServicecatalogPortfolio {
    fn terraform_resource_type(&self) -> &'static str {
        Self::TF_RESOURCE_TYPE
    }

    fn node(&self) -> &ConstructNode {
        &self.node
    }

    fn synthesize_attributes(&self) -> tfbind::Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.config)?)
    }
}

/// Configuration of [`ServicecatalogPortfolio`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogPortfolioConfig {
    #[serde(flatten)]
    pub meta: MetaArguments,
    /// Description of the portfolio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The name of the portfolio.
    pub name: String,
    /// Name of the person or organization who owns the portfolio.
    pub provider_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<ServicecatalogPortfolioTimeouts>,
}

impl ServicecatalogPortfolioConfig {
    pub fn builder() -> ServicecatalogPortfolioConfigBuilder {
        ServicecatalogPortfolioConfigBuilder::default()
    }
}

/// Builder for [`ServicecatalogPortfolioConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogPortfolioConfigBuilder {
    meta: MetaArguments,
    description: Option<String>,
    id: Option<String>,
    name: Option<String>,
    provider_name: Option<String>,
    tags: Option<HashMap<String, String>>,
    tags_all: Option<HashMap<String, String>>,
    timeouts: Option<ServicecatalogPortfolioTimeouts>,
}

impl ServicecatalogPortfolioConfigBuilder {
    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn provider_name(mut self, value: impl Into<String>) -> Self {
        self.provider_name = Some(value.into());
        self
    }

    pub fn tags(mut self, value: HashMap<String, String>) -> Self {
        self.tags = Some(value);
        self
    }

    pub fn tags_all(mut self, value: HashMap<String, String>) -> Self {
        self.tags_all = Some(value);
        self
    }

    pub fn timeouts(mut self, value: ServicecatalogPortfolioTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<ServicecatalogPortfolioConfig, BindingError> {
        Ok(ServicecatalogPortfolioConfig {
            meta: self.meta,
            description: self.description,
            id: self.id,
            name: self
                .name
                .ok_or_else(|| BindingError::missing_property("ServicecatalogPortfolioConfig", "name"))?,
            provider_name: self
                .provider_name
                .ok_or_else(|| BindingError::missing_property("ServicecatalogPortfolioConfig", "provider_name"))?,
            tags: self.tags,
            tags_all: self.tags_all,
            timeouts: self.timeouts,
        })
    }
}

/// The `timeouts` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogPortfolioTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl ServicecatalogPortfolioTimeouts {
    pub fn builder() -> ServicecatalogPortfolioTimeoutsBuilder {
        ServicecatalogPortfolioTimeoutsBuilder::default()
    }
}

/// Builder for [`ServicecatalogPortfolioTimeouts`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogPortfolioTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    read: Option<String>,
    update: Option<String>,
}

impl ServicecatalogPortfolioTimeoutsBuilder {
    pub fn create(mut self, value: impl Into<String>) -> Self {
        self.create = Some(value.into());
        self
    }

    pub fn delete(mut self, value: impl Into<String>) -> Self {
        self.delete = Some(value.into());
        self
    }

    pub fn read(mut self, value: impl Into<String>) -> Self {
        self.read = Some(value.into());
        self
    }

    pub fn update(mut self, value: impl Into<String>) -> Self {
        self.update = Some(value.into());
        self
    }

    pub fn build(self) -> ServicecatalogPortfolioTimeouts {
        ServicecatalogPortfolioTimeouts {
            create: self.create,
            delete: self.delete,
            read: self.read,
            update: self.update,
        }
    }
}
