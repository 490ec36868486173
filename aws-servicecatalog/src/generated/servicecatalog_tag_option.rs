//! Bindings for the `aws_servicecatalog_tag_option` resource.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, ConstructNode, MetaArguments, Scope, TerraformResource};

/// The `aws_servicecatalog_tag_option` resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicecatalogTagOption {
    node: ConstructNode,
    config: ServicecatalogTagOptionConfig,
}

impl ServicecatalogTagOption {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_servicecatalog_tag_option";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: ServicecatalogTagOptionConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &ServicecatalogTagOptionConfig {
        &self.config
    }

    pub fn meta_mut(&mut self) -> &mut MetaArguments {
        &mut self.config.meta
    }

    pub fn active(&self) -> Option<bool> {
        self.config.active
    }

    pub fn set_active(&mut self, value: bool) {
        self.config.active = Some(value);
    }

    pub fn reset_active(&mut self) {
        self.config.active = None;
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

    /// Tag option key.
    pub fn key(&self) -> &str {
        &self.config.key
    }

    pub fn set_key(&mut self, value: impl Into<String>) {
        self.config.key = value.into();
    }

    /// Tag option value.
    pub fn value(&self) -> &str {
        &self.config.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.config.value = value.into();
    }

    pub fn timeouts(&self) -> Option<&ServicecatalogTagOptionTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: ServicecatalogTagOptionTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }

    pub fn owner(&self) -> String {
        self.interpolation_for_attribute("owner")
    }
}

impl TerraformResource for ServicecatalogTagOption {
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

/// Configuration of [`ServicecatalogTagOption`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogTagOptionConfig {
    #[serde(flatten)]
    pub meta: MetaArguments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tag option key.
    pub key: String,
    /// Tag option value.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<ServicecatalogTagOptionTimeouts>,
}

impl ServicecatalogTagOptionConfig {
    pub fn builder() -> ServicecatalogTagOptionConfigBuilder {
        ServicecatalogTagOptionConfigBuilder::default()
    }
}

/// Builder for [`ServicecatalogTagOptionConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogTagOptionConfigBuilder {
    meta: MetaArguments,
    active: Option<bool>,
    id: Option<String>,
    key: Option<String>,
    value: Option<String>,
    timeouts: Option<ServicecatalogTagOptionTimeouts>,
}

impl ServicecatalogTagOptionConfigBuilder {
    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn active(mut self, value: bool) -> Self {
        self.active = Some(value);
        self
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }

    pub fn key(mut self, value: impl Into<String>) -> Self {
        self.key = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn timeouts(mut self, value: ServicecatalogTagOptionTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<ServicecatalogTagOptionConfig, BindingError> {
        Ok(ServicecatalogTagOptionConfig {
            meta: self.meta,
            active: self.active,
            id: self.id,
            key: self
                .key
                .ok_or_else(|| BindingError::missing_property("ServicecatalogTagOptionConfig", "key"))?,
            value: self
                .value
                .ok_or_else(|| BindingError::missing_property("ServicecatalogTagOptionConfig", "value"))?,
            timeouts: self.timeouts,
        })
    }
}

/// The `timeouts` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogTagOptionTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl ServicecatalogTagOptionTimeouts {
    pub fn builder() -> ServicecatalogTagOptionTimeoutsBuilder {
        ServicecatalogTagOptionTimeoutsBuilder::default()
    }
}

/// Builder for [`ServicecatalogTagOptionTimeouts`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogTagOptionTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    read: Option<String>,
    update: Option<String>,
}

impl ServicecatalogTagOptionTimeoutsBuilder {
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

    pub fn build(self) -> ServicecatalogTagOptionTimeouts {
        ServicecatalogTagOptionTimeouts {
            create: self.create,
            delete: self.delete,
            read: self.read,
            update: self.update,
        }
    }
}
