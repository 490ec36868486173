//! Bindings for the `aws_servicecatalog_provisioned_product` resource.
//!
//! This resource provisions and manages a Service Catalog provisioned product.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, ComplexList, ConstructNode, ListItemRef, MetaArguments, Scope, TerraformResource};

/// The `aws_servicecatalog_provisioned_product` resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicecatalogProvisionedProduct {
    node: ConstructNode,
    config: ServicecatalogProvisionedProductConfig,
}

impl ServicecatalogProvisionedProduct {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_servicecatalog_provisioned_product";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: ServicecatalogProvisionedProductConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &ServicecatalogProvisionedProductConfig {
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

    pub fn id(&self) -> Option<&str> {
        self.config.id.as_deref()
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.config.id = Some(value.into());
    }

    pub fn reset_id(&mut self) {
        self.config.id = None;
    }

    pub fn ignore_errors(&self) -> Option<bool> {
        self.config.ignore_errors
    }

    pub fn set_ignore_errors(&mut self, value: bool) {
        self.config.ignore_errors = Some(value);
    }

    pub fn reset_ignore_errors(&mut self) {
        self.config.ignore_errors = None;
    }

    /// User-friendly name of the provisioned product.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.config.name = value.into();
    }

    pub fn notification_arns(&self) -> Option<&[String]> {
        self.config.notification_arns.as_deref()
    }

    pub fn set_notification_arns(&mut self, value: Vec<String>) {
        self.config.notification_arns = Some(value);
    }

    pub fn reset_notification_arns(&mut self) {
        self.config.notification_arns = None;
    }

    pub fn path_id(&self) -> Option<&str> {
        self.config.path_id.as_deref()
    }

    pub fn set_path_id(&mut self, value: impl Into<String>) {
        self.config.path_id = Some(value.into());
    }

    pub fn reset_path_id(&mut self) {
        self.config.path_id = None;
    }

    pub fn path_name(&self) -> Option<&str> {
        self.config.path_name.as_deref()
    }

    pub fn set_path_name(&mut self, value: impl Into<String>) {
        self.config.path_name = Some(value.into());
    }

    pub fn reset_path_name(&mut self) {
        self.config.path_name = None;
    }

    pub fn product_id(&self) -> Option<&str> {
        self.config.product_id.as_deref()
    }

    pub fn set_product_id(&mut self, value: impl Into<String>) {
        self.config.product_id = Some(value.into());
    }

    pub fn reset_product_id(&mut self) {
        self.config.product_id = None;
    }

    pub fn product_name(&self) -> Option<&str> {
        self.config.product_name.as_deref()
    }

    pub fn set_product_name(&mut self, value: impl Into<String>) {
        self.config.product_name = Some(value.into());
    }

    pub fn reset_product_name(&mut self) {
        self.config.product_name = None;
    }

    pub fn provisioning_artifact_id(&self) -> Option<&str> {
        self.config.provisioning_artifact_id.as_deref()
    }

    pub fn set_provisioning_artifact_id(&mut self, value: impl Into<String>) {
        self.config.provisioning_artifact_id = Some(value.into());
    }

    pub fn reset_provisioning_artifact_id(&mut self) {
        self.config.provisioning_artifact_id = None;
    }

    pub fn provisioning_artifact_name(&self) -> Option<&str> {
        self.config.provisioning_artifact_name.as_deref()
    }

    pub fn set_provisioning_artifact_name(&mut self, value: impl Into<String>) {
        self.config.provisioning_artifact_name = Some(value.into());
    }

    pub fn reset_provisioning_artifact_name(&mut self) {
        self.config.provisioning_artifact_name = None;
    }

    pub fn retain_physical_resources(&self) -> Option<bool> {
        self.config.retain_physical_resources
    }

    pub fn set_retain_physical_resources(&mut self, value: bool) {
        self.config.retain_physical_resources = Some(value);
    }

    pub fn reset_retain_physical_resources(&mut self) {
        self.config.retain_physical_resources = None;
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

    pub fn provisioning_parameters(&self) -> Option<&[ServicecatalogProvisionedProductProvisioningParameters]> {
        self.config.provisioning_parameters.as_deref()
    }

    pub fn put_provisioning_parameters(&mut self, value: Vec<ServicecatalogProvisionedProductProvisioningParameters>) {
        self.config.provisioning_parameters = Some(value);
    }

    pub fn reset_provisioning_parameters(&mut self) {
        self.config.provisioning_parameters = None;
    }

    pub fn provisioning_parameters_ref(&self) -> ComplexList<ServicecatalogProvisionedProductProvisioningParametersOutputReference> {
        let list = ComplexList::new(self.fqn(), "provisioning_parameters", false);
        match &self.config.provisioning_parameters {
            Some(items) => list.with_len(items.len()),
            None => list,
        }
    }

    pub fn stack_set_provisioning_preferences(&self) -> Option<&ServicecatalogProvisionedProductStackSetProvisioningPreferences> {
        self.config.stack_set_provisioning_preferences.as_ref()
    }

    pub fn put_stack_set_provisioning_preferences(&mut self, value: ServicecatalogProvisionedProductStackSetProvisioningPreferences) {
        self.config.stack_set_provisioning_preferences = Some(value);
    }

    pub fn reset_stack_set_provisioning_preferences(&mut self) {
        self.config.stack_set_provisioning_preferences = None;
    }

    pub fn timeouts(&self) -> Option<&ServicecatalogProvisionedProductTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: ServicecatalogProvisionedProductTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }

    pub fn arn(&self) -> String {
        self.interpolation_for_attribute("arn")
    }

    pub fn cloudwatch_dashboard_names(&self) -> String {
        self.interpolation_for_attribute("cloudwatch_dashboard_names")
    }

    pub fn created_time(&self) -> String {
        self.interpolation_for_attribute("created_time")
    }

    pub fn last_provisioning_record_id(&self) -> String {
        self.interpolation_for_attribute("last_provisioning_record_id")
    }

    pub fn launch_role_arn(&self) -> String {
        self.interpolation_for_attribute("launch_role_arn")
    }

    /// The set of outputs for the product created.
    pub fn outputs(&self) -> ComplexList<ServicecatalogProvisionedProductOutputsOutputReference> {
        ComplexList::new(self.fqn(), "outputs", true)
    }

    pub fn status(&self) -> String {
        self.interpolation_for_attribute("status")
    }
}

impl TerraformResource for ServicecatalogProvisionedProduct {
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

/// Configuration of [`ServicecatalogProvisionedProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogProvisionedProductConfig {
    #[serde(flatten)]
    pub meta: MetaArguments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_errors: Option<bool>,
    /// User-friendly name of the provisioned product.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_arns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_artifact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain_physical_resources: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_all: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_parameters: Option<Vec<ServicecatalogProvisionedProductProvisioningParameters>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_set_provisioning_preferences: Option<ServicecatalogProvisionedProductStackSetProvisioningPreferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<ServicecatalogProvisionedProductTimeouts>,
}

impl ServicecatalogProvisionedProductConfig {
    pub fn builder() -> ServicecatalogProvisionedProductConfigBuilder {
        ServicecatalogProvisionedProductConfigBuilder::default()
    }
}

/// Builder for [`ServicecatalogProvisionedProductConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogProvisionedProductConfigBuilder {
    meta: MetaArguments,
    accept_language: Option<String>,
    id: Option<String>,
    ignore_errors: Option<bool>,
    name: Option<String>,
    notification_arns: Option<Vec<String>>,
    path_id: Option<String>,
    path_name: Option<String>,
    product_id: Option<String>,
    product_name: Option<String>,
    provisioning_artifact_id: Option<String>,
    provisioning_artifact_name: Option<String>,
    retain_physical_resources: Option<bool>,
    tags: Option<HashMap<String, String>>,
    tags_all: Option<HashMap<String, String>>,
    provisioning_parameters: Option<Vec<ServicecatalogProvisionedProductProvisioningParameters>>,
    stack_set_provisioning_preferences: Option<ServicecatalogProvisionedProductStackSetProvisioningPreferences>,
    timeouts: Option<ServicecatalogProvisionedProductTimeouts>,
}

impl ServicecatalogProvisionedProductConfigBuilder {
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

    pub fn ignore_errors(mut self, value: bool) -> Self {
        self.ignore_errors = Some(value);
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn notification_arns(mut self, value: Vec<String>) -> Self {
        self.notification_arns = Some(value);
        self
    }

    pub fn path_id(mut self, value: impl Into<String>) -> Self {
        self.path_id = Some(value.into());
        self
    }

    pub fn path_name(mut self, value: impl Into<String>) -> Self {
        self.path_name = Some(value.into());
        self
    }

    pub fn product_id(mut self, value: impl Into<String>) -> Self {
        self.product_id = Some(value.into());
        self
    }

    pub fn product_name(mut self, value: impl Into<String>) -> Self {
        self.product_name = Some(value.into());
        self
    }

    pub fn provisioning_artifact_id(mut self, value: impl Into<String>) -> Self {
        self.provisioning_artifact_id = Some(value.into());
        self
    }

    pub fn provisioning_artifact_name(mut self, value: impl Into<String>) -> Self {
        self.provisioning_artifact_name = Some(value.into());
        self
    }

    pub fn retain_physical_resources(mut self, value: bool) -> Self {
        self.retain_physical_resources = Some(value);
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

    pub fn provisioning_parameters(mut self, value: Vec<ServicecatalogProvisionedProductProvisioningParameters>) -> Self {
        self.provisioning_parameters = Some(value);
        self
    }

    pub fn stack_set_provisioning_preferences(mut self, value: ServicecatalogProvisionedProductStackSetProvisioningPreferences) -> Self {
        self.stack_set_provisioning_preferences = Some(value);
        self
    }

    pub fn timeouts(mut self, value: ServicecatalogProvisionedProductTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<ServicecatalogProvisionedProductConfig, BindingError> {
        Ok(ServicecatalogProvisionedProductConfig {
            meta: self.meta,
            accept_language: self.accept_language,
            id: self.id,
            ignore_errors: self.ignore_errors,
            name: self
                .name
                .ok_or_else(|| BindingError::missing_property("ServicecatalogProvisionedProductConfig", "name"))?,
            notification_arns: self.notification_arns,
            path_id: self.path_id,
            path_name: self.path_name,
            product_id: self.product_id,
            product_name: self.product_name,
            provisioning_artifact_id: self.provisioning_artifact_id,
            provisioning_artifact_name: self.provisioning_artifact_name,
            retain_physical_resources: self.retain_physical_resources,
            tags: self.tags,
            tags_all: self.tags_all,
            provisioning_parameters: self.provisioning_parameters,
            stack_set_provisioning_preferences: self.stack_set_provisioning_preferences,
            timeouts: self.timeouts,
        })
    }
}

/// The `provisioning_parameters` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogProvisionedProductProvisioningParameters {
    /// Parameter key.
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_previous_value: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ServicecatalogProvisionedProductProvisioningParameters {
    pub fn builder() -> ServicecatalogProvisionedProductProvisioningParametersBuilder {
        ServicecatalogProvisionedProductProvisioningParametersBuilder::default()
    }
}

/// Builder for [`ServicecatalogProvisionedProductProvisioningParameters`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogProvisionedProductProvisioningParametersBuilder {
    key: Option<String>,
    use_previous_value: Option<bool>,
    value: Option<String>,
}

impl ServicecatalogProvisionedProductProvisioningParametersBuilder {
    pub fn key(mut self, value: impl Into<String>) -> Self {
        self.key = Some(value.into());
        self
    }

    pub fn use_previous_value(mut self, value: bool) -> Self {
        self.use_previous_value = Some(value);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<ServicecatalogProvisionedProductProvisioningParameters, BindingError> {
        Ok(ServicecatalogProvisionedProductProvisioningParameters {
            key: self
                .key
                .ok_or_else(|| BindingError::missing_property("ServicecatalogProvisionedProductProvisioningParameters", "key"))?,
            use_previous_value: self.use_previous_value,
            value: self.value,
        })
    }
}

/// The `stack_set_provisioning_preferences` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogProvisionedProductStackSetProvisioningPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_tolerance_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_tolerance_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency_count: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
}

impl ServicecatalogProvisionedProductStackSetProvisioningPreferences {
    pub fn builder() -> ServicecatalogProvisionedProductStackSetProvisioningPreferencesBuilder {
        ServicecatalogProvisionedProductStackSetProvisioningPreferencesBuilder::default()
    }
}

/// Builder for [`ServicecatalogProvisionedProductStackSetProvisioningPreferences`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogProvisionedProductStackSetProvisioningPreferencesBuilder {
    accounts: Option<Vec<String>>,
    failure_tolerance_count: Option<f64>,
    failure_tolerance_percentage: Option<f64>,
    max_concurrency_count: Option<f64>,
    max_concurrency_percentage: Option<f64>,
    regions: Option<Vec<String>>,
}

impl ServicecatalogProvisionedProductStackSetProvisioningPreferencesBuilder {
    pub fn accounts(mut self, value: Vec<String>) -> Self {
        self.accounts = Some(value);
        self
    }

    pub fn failure_tolerance_count(mut self, value: f64) -> Self {
        self.failure_tolerance_count = Some(value);
        self
    }

    pub fn failure_tolerance_percentage(mut self, value: f64) -> Self {
        self.failure_tolerance_percentage = Some(value);
        self
    }

    pub fn max_concurrency_count(mut self, value: f64) -> Self {
        self.max_concurrency_count = Some(value);
        self
    }

    pub fn max_concurrency_percentage(mut self, value: f64) -> Self {
        self.max_concurrency_percentage = Some(value);
        self
    }

    pub fn regions(mut self, value: Vec<String>) -> Self {
        self.regions = Some(value);
        self
    }

    pub fn build(self) -> ServicecatalogProvisionedProductStackSetProvisioningPreferences {
        ServicecatalogProvisionedProductStackSetProvisioningPreferences {
            accounts: self.accounts,
            failure_tolerance_count: self.failure_tolerance_count,
            failure_tolerance_percentage: self.failure_tolerance_percentage,
            max_concurrency_count: self.max_concurrency_count,
            max_concurrency_percentage: self.max_concurrency_percentage,
            regions: self.regions,
        }
    }
}

/// The `timeouts` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServicecatalogProvisionedProductTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl ServicecatalogProvisionedProductTimeouts {
    pub fn builder() -> ServicecatalogProvisionedProductTimeoutsBuilder {
        ServicecatalogProvisionedProductTimeoutsBuilder::default()
    }
}

/// Builder for [`ServicecatalogProvisionedProductTimeouts`].
#[derive(Debug, Clone, Default)]
pub struct ServicecatalogProvisionedProductTimeoutsBuilder {
    create: Option<String>,
    delete: Option<String>,
    read: Option<String>,
    update: Option<String>,
}

impl ServicecatalogProvisionedProductTimeoutsBuilder {
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

    pub fn build(self) -> ServicecatalogProvisionedProductTimeouts {
        ServicecatalogProvisionedProductTimeouts {
            create: self.create,
            delete: self.delete,
            read: self.read,
            update: self.update,
        }
    }
}

/// Reference to one computed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicecatalogProvisionedProductOutputsOutputReference(ListItemRef);

impl From<ListItemRef> for ServicecatalogProvisionedProductOutputsOutputReference {
    fn from(item: ListItemRef) -> Self {
        Self(item)
    }
}

impl ServicecatalogProvisionedProductOutputsOutputReference {
    pub fn item(&self) -> &ListItemRef {
        &self.0
    }

    pub fn description(&self) -> String {
        self.0.interpolation_for_attribute("description")
    }

    pub fn key(&self) -> String {
        self.0.interpolation_for_attribute("key")
    }

    pub fn value(&self) -> String {
        self.0.interpolation_for_attribute("value")
    }
}

/// Reference to one [`ServicecatalogProvisionedProductProvisioningParameters`] item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicecatalogProvisionedProductProvisioningParametersOutputReference(ListItemRef);

impl From<ListItemRef> for ServicecatalogProvisionedProductProvisioningParametersOutputReference {
    fn from(item: ListItemRef) -> Self {
        Self(item)
    }
}

impl ServicecatalogProvisionedProductProvisioningParametersOutputReference {
    pub fn item(&self) -> &ListItemRef {
        &self.0
    }

    pub fn key(&self) -> String {
        self.0.interpolation_for_attribute("key")
    }

    pub fn use_previous_value(&self) -> String {
        self.0.interpolation_for_attribute("use_previous_value")
    }

    pub fn value(&self) -> String {
        self.0.interpolation_for_attribute("value")
    }
}
