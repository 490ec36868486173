//! Bindings for the `aws_servicecatalog_portfolio_share` resource.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, ConstructNode, MetaArguments, Scope, TerraformResource};

/// The `aws_servicecatalog_portfolio_share` resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicecatalogPortfolioShare {
    node: ConstructNode,
    config: ServicecatalogPortfolioShareConfig,
}

impl ServicecatalogPortfolioShare {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_servicecatalog_portfolio_share";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: ServicecatalogPortfolioShareConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &ServicecatalogPortfolioShareConfig {
        &self.config
    }

    pub fn meta_mut(&mut self) -> &mut MetaArguments {
        &mut self.config.meta
    }

    /// Language code. Valid values: `en`, `jp`, `zh`.
    pub fn accept_language(&self) -> Option<&str> {
        self.config.accept_language.as_deref()
    }

    pub fn set_accept_language(&mut self, value: impl Into<String>) {
        self.config.accept_language = Some(value.into());
    }

    pub fn reset_accept_language(&mut self) {
        self.config.accept_language = None;
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

    /// Portfolio identifier.
    pub fn portfolio_id(&self) -> &str {
        &self.config.portfolio_id
    }

    pub fn set_portfolio_id(&mut self, value: impl Into<String>) {
        self.config.portfolio_id = value.into();
    }

    /// Identifier of the principal with whom you will share the portfolio.
    pub fn principal_id(&self) -> &str {
        &self.config.principal_id
    }

    pub fn set_principal_id(&mut self, value: impl Into<String>) {
        self.config.principal_id = value.into();
    }

    pub fn share_principals(&self) -> Option<bool> {
        self.config.share_principals
    }

    pub fn set_share_principals(&mut self, value: bool) {
        self.config.share_principals = Some(value);
    }

    pub fn reset_share_principals(&mut self) {
        self.config.share_principals = None;
    }

    pub fn share_tag_options(&self) -> Option<bool> {
        self.config.share_tag_options
    }

    pub fn set_share_tag_options(&mut self, value: bool) {
        self.config.share_tag_options = Some(value);
    }

    pub fn reset_share_tag_options(&mut self) {
        self.config.share_tag_options = None;
    }

    /// Type of portfolio share. Valid values are `ACCOUNT`, `ORGANIZATION`, `ORGANIZATIONAL_UNIT`, `ORGANIZATION_MEMBER_ACCOUNT`.
    pub fn r#type(&self) -> &str {
        &self.config.r#type
    }

    pub fn set_type(&mut self, value: impl Into<String>) {
        self.config.r#type = value.into();
    }

    pub fn wait_for_acceptance(&self) -> Option<bool> {
        self.config.wait_for_acceptance
    }

    pub fn set_wait_for_acceptance(&mut self, value: bool) {
        self.config.wait_for_acceptance = Some(value);
    }

    pub fn reset_wait_for_acceptance(&mut self) {
        self.config.wait_for_acceptance = None;
    }

    pub fn timeouts(&self) -> Option<&ServicecatalogPortfolioShareTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: ServicecatalogPortfolioShareTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }

    pub fn accepted(&self) -> String {
        self.interpolation_for_attribute("accepted")
    }
}

impl TerraformResource for ServicecatalogPortfolioShare {
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

/// Configuration of [`ServicecatalogPortfolioShare`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogPortfolioShareConfig {
    #[serde(flatten)]
    pub meta: MetaArguments,
    /// Language code. Valid values: `en`, `jp`, `zh`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Portfolio identifier.
    pub portfolio_id: String,
    /// Identifier of the principal with whom you will share the portfolio.
    pub principal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_principals: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_tag_options: Option<bool>,
    /// Type of portfolio share. Valid values are `ACCOUNT`, `ORGANIZATION`, `ORGANIZATIONAL_UNIT`, `ORGANIZATION_MEMBER_ACCOUNT`.
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_acceptance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<ServicecatalogPortfolioShareTimeouts>,
}

impl ServicecatalogPortfolioShareConfig {
    pub fn builder() -> ServicecatalogPortfolioShareConfigBuilder {
        ServicecatalogPortfolioShareConfigBuilder::default()
    }
}

/// Builder for [`ServicecatalogPortfolioShareConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogPortfolioShareConfigBuilder {
    meta: MetaArguments,
    accept_language: Option<String>,
    id: Option<String>,
    portfolio_id: Option<String>,
    principal_id: Option<String>,
    share_principals: Option<bool>,
    share_tag_options: Option<bool>,
    r#type: Option<String>,
    wait_for_acceptance: Option<bool>,
    timeouts: Option<ServicecatalogPortfolioShareTimeouts>,
}

impl ServicecatalogPortfolioShareConfigBuilder {
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

    pub fn portfolio_id(mut self, value: impl Into<String>) -> Self {
        self.portfolio_id = Some(value.into());
        self
    }

    pub fn principal_id(mut self, value: impl Into<String>) -> Self {
        self.principal_id = Some(value.into());
        self
    }

    pub fn share_principals(mut self, value: bool) -> Self {
        self.share_principals = Some(value);
        self
    }

    pub fn share_tag_options(mut self, value: bool) -> Self {
        self.share_tag_options = Some(value);
        self
    }

    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn wait_for_acceptance(mut self, value: bool) -> Self {
        self.wait_for_acceptance = Some(value);
        self
    }

    pub fn timeouts(mut self, value: ServicecatalogPortfolioShareTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<ServicecatalogPortfolioShareConfig, BindingError> {
        Ok(ServicecatalogPortfolioShareConfig {
            meta: self.meta,
            accept_language: self.accept_language,
            id: self.id,
            portfolio_id: self
                .portfolio_id
                .ok_or_else(|| BindingError::missing_property("ServicecatalogPortfolioShareConfig", "portfolio_id"))?,
            principal_id: self
                .principal_id
                .ok_or_else(|| BindingError::missing_property("ServicecatalogPortfolioShareConfig", "principal_id"))?,
            share_principals: self.share_principals,
            share_tag_options: self.share_tag_options,
            r#type: self
                .r#type
                .ok_or_else(|| BindingError::missing_property("ServicecatalogPortfolioShareConfig", "type"))?,
            wait_for_acceptance: self.wait_for_acceptance,
            timeouts: self.timeouts,
        })
    }
}

/// The `timeouts` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogPortfolioShareTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl ServicecatalogPortfolioShareTimeouts {
    pub fn builder() -> ServicecatalogPortfolioShareTimeoutsBuilder {
        ServicecatalogPortfolioShareTimeoutsBuilder::default()
    }
}

/// Builder for [`ServicecatalogPortfolioShareTimeouts`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogPortfolioShareTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    read: Option<String>,
    update: Option<String>,
}

impl ServicecatalogPortfolioShareTimeoutsBuilder {
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

    pub fn build(self) -> ServicecatalogPortfolioShareTimeouts {
        ServicecatalogPortfolioShareTimeouts {
            create: self.create,
            delete: self.delete,
            read: self.read,
            update: self.update,
        }
    }
}
