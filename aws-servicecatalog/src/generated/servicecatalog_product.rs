//! Bindings for the `aws_servicecatalog_product` resource.
//!
//! Manages a Service Catalog Product.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, ConstructNode, MetaArguments, Scope, TerraformResource};

/// The `aws_servicecatalog_product` resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicecatalogProduct {
    node: ConstructNode,
    config: ServicecatalogProductConfig,
}

impl ServicecatalogProduct {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_servicecatalog_product";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: ServicecatalogProductConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &ServicecatalogProductConfig {
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

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.config.description = Some(value.into());
    }

    pub fn reset_description(&mut self) {
        self.config.description = None;
    }

    pub fn distributor(&self) -> Option<&str> {
        self.config.distributor.as_deref()
    }

    pub fn set_distributor(&mut self, value: impl Into<String>) {
        self.config.distributor = Some(value.into());
    }

    pub fn reset_distributor(&mut self) {
        self.config.distributor = None;
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

    /// Name of the product.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.config.name = value.into();
    }

    /// Owner of the product.
    pub fn owner(&self) -> &str {
        &self.config.owner
    }

    pub fn set_owner(&mut self, value: impl Into<String>) {
        self.config.owner = value.into();
    }

    pub fn support_description(&self) -> Option<&str> {
        self.config.support_description.as_deref()
    }

    pub fn set_support_description(&mut self, value: impl Into<String>) {
        self.config.support_description = Some(value.into());
    }

    pub fn reset_support_description(&mut self) {
        self.config.support_description = None;
    }

    pub fn support_email(&self) -> Option<&str> {
        self.config.support_email.as_deref()
    }

    pub fn set_support_email(&mut self, value: impl Into<String>) {
        self.config.support_email = Some(value.into());
    }

    pub fn reset_support_email(&mut self) {
        self.config.support_email = None;
    }

    pub fn support_url(&self) -> Option<&str> {
        self.config.support_url.as_deref()
    }

    pub fn set_support_url(&mut self, value: impl Into<String>) {
        self.config.support_url = Some(value.into());
    }

    pub fn reset_support_url(&mut self) {
        self.config.support_url = None;
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

    /// Type of product. Valid values are `CLOUD_FORMATION_TEMPLATE`, `MARKETPLACE`.
    pub fn r#type(&self) -> &str {
        &self.config.r#type
    }

    pub fn set_type(&mut self, value: impl Into<String>) {
        self.config.r#type = value.into();
    }

    /// Configuration block for provisioning artifact (i.e., version) parameters.
    pub fn provisioning_artifact_parameters(&self) -> &ServicecatalogProductProvisioningArtifactParameters {
        &self.config.provisioning_artifact_parameters
    }

    pub fn put_provisioning_artifact_parameters(&mut self, value: ServicecatalogProductProvisioningArtifactParameters) {
        self.config.provisioning_artifact_parameters = value;
    }

    pub fn timeouts(&self) -> Option<&ServicecatalogProductTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: ServicecatalogProductTimeouts) {
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

    pub fn has_default_path(&self) -> String {
        self.interpolation_for_attribute("has_default_path")
    }

    pub fn status(&self) -> String {
        self.interpolation_for_attribute("status")
    }
}

impl TerraformResource for ServicecatalogProduct {
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

/// Configuration of [`ServicecatalogProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogProductConfig {
    #[serde(flatten)]
    pub meta: MetaArguments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distributor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the product.
    pub name: String,
    /// Owner of the product.
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<HashMap<String, String>>,
    /// Type of product. Valid values are `CLOUD_FORMATION_TEMPLATE`, `MARKETPLACE`.
    pub r#type: String,
    /// Configuration block for provisioning artifact (i.e., version) parameters.
    pub provisioning_artifact_parameters: ServicecatalogProductProvisioningArtifactParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<ServicecatalogProductTimeouts>,
}

impl ServicecatalogProductConfig {
    pub fn builder() -> ServicecatalogProductConfigBuilder {
        ServicecatalogProductConfigBuilder::default()
    }
}

/// Builder for [`ServicecatalogProductConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogProductConfigBuilder {
    meta: MetaArguments,
    accept_language: Option<String>,
    description: Option<String>,
    distributor: Option<String>,
    id: Option<String>,
    name: Option<String>,
    owner: Option<String>,
    support_description: Option<String>,
    support_email: Option<String>,
    support_url: Option<String>,
    tags: Option<HashMap<String, String>>,
    tags_all: Option<HashMap<String, String>>,
    r#type: Option<String>,
    provisioning_artifact_parameters: Option<ServicecatalogProductProvisioningArtifactParameters>,
    timeouts: Option<ServicecatalogProductTimeouts>,
}

impl ServicecatalogProductConfigBuilder {
    pub fn meta(mut self, meta: MetaArguments) -> Self {
        self.meta = meta;
        self
    }

    pub fn accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = Some(value.into());
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn distributor(mut self, value: impl Into<String>) -> Self {
        self.distributor = Some(value.into());
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

    pub fn owner(mut self, value: impl Into<String>) -> Self {
        self.owner = Some(value.into());
        self
    }

    pub fn support_description(mut self, value: impl Into<String>) -> Self {
        self.support_description = Some(value.into());
        self
    }

    pub fn support_email(mut self, value: impl Into<String>) -> Self {
        self.support_email = Some(value.into());
        self
    }

    pub fn support_url(mut self, value: impl Into<String>) -> Self {
        self.support_url = Some(value.into());
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

    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn provisioning_artifact_parameters(mut self, value: ServicecatalogProductProvisioningArtifactParameters) -> Self {
        self.provisioning_artifact_parameters = Some(value);
        self
    }

    pub fn timeouts(mut self, value: ServicecatalogProductTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<ServicecatalogProductConfig, BindingError> {
        Ok(ServicecatalogProductConfig {
            meta: self.meta,
            accept_language: self.accept_language,
            description: self.description,
            distributor: self.distributor,
            id: self.id,
            name: self
                .name
                .ok_or_else(|| BindingError::missing_property("ServicecatalogProductConfig", "name"))?,
            owner: self
                .owner
                .ok_or_else(|| BindingError::missing_property("ServicecatalogProductConfig", "owner"))?,
            support_description: self.support_description,
            support_email: self.support_email,
            support_url: self.support_url,
            tags: self.tags,
            tags_all: self.tags_all,
            r#type: self
                .r#type
                .ok_or_else(|| BindingError::missing_property("ServicecatalogProductConfig", "type"))?,
            provisioning_artifact_parameters: self
                .provisioning_artifact_parameters
                .ok_or_else(|| BindingError::missing_property("ServicecatalogProductConfig", "provisioning_artifact_parameters"))?,
            timeouts: self.timeouts,
        })
    }
}

/// Configuration block for provisioning artifact (i.e., version) parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogProductProvisioningArtifactParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_template_validation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_physical_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl ServicecatalogProductProvisioningArtifactParameters {
    pub fn builder() -> ServicecatalogProductProvisioningArtifactParametersBuilder {
        ServicecatalogProductProvisioningArtifactParametersBuilder::default()
    }
}

/// Builder for [`ServicecatalogProductProvisioningArtifactParameters`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogProductProvisioningArtifactParametersBuilder {
    description: Option<String>,
    disable_template_validation: Option<bool>,
    name: Option<String>,
    template_physical_id: Option<String>,
    template_url: Option<String>,
    r#type: Option<String>,
}

impl ServicecatalogProductProvisioningArtifactParametersBuilder {
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn disable_template_validation(mut self, value: bool) -> Self {
        self.disable_template_validation = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn template_physical_id(mut self, value: impl Into<String>) -> Self {
        self.template_physical_id = Some(value.into());
        self
    }

    pub fn template_url(mut self, value: impl Into<String>) -> Self {
        self.template_url = Some(value.into());
        self
    }

    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }

    pub fn build(self) -> ServicecatalogProductProvisioningArtifactParameters {
        ServicecatalogProductProvisioningArtifactParameters {
            description: self.description,
            disable_template_validation: self.disable_template_validation,
            name: self.name,
            template_physical_id: self.template_physical_id,
            template_url: self.template_url,
            r#type: self.r#type,
        }
    }
}

/// The `timeouts` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogProductTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl ServicecatalogProductTimeouts {
    pub fn builder() -> ServicecatalogProductTimeoutsBuilder {
        ServicecatalogProductTimeoutsBuilder::default()
    }
}

/// Builder for [`ServicecatalogProductTimeouts`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogProductTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    read: Option<String>,
    update: Option<String>,
}

impl ServicecatalogProductTimeoutsBuilder {
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

    pub fn build(self) -> ServicecatalogProductTimeouts {
        ServicecatalogProductTimeouts {
            create: self.create,
            delete: self.delete,
            read: self.read,
            update: self.update,
        }
    }
}
