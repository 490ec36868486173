//! Bindings for the `aws_servicecatalog_launch_paths` data source.
//!
//! Lists the paths to the specified product.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, BlockKind, ComplexList, ConstructNode, ListItemRef, MetaArguments, Scope, TerraformResource};

/// The `aws_servicecatalog_launch_paths` data source.
#[derive(Debug, Clone, PartialEq)]
pub struct DataAwsServicecatalogLaunchPaths {
    node: ConstructNode,
    config: DataAwsServicecatalogLaunchPathsConfig,
}

impl DataAwsServicecatalogLaunchPaths {
    pub const TF_RESOURCE_TYPE: &'static str = "aws_servicecatalog_launch_paths";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: DataAwsServicecatalogLaunchPathsConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &DataAwsServicecatalogLaunchPathsConfig {
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

    /// Product identifier.
    pub fn product_id(&self) -> &str {
        &self.config.product_id
    }

    pub fn set_product_id(&mut self, value: impl Into<String>) {
        self.config.product_id = value.into();
    }

    pub fn timeouts(&self) -> Option<&DataAwsServicecatalogLaunchPathsTimeouts> {
        self.config.timeouts.as_ref()
    }

    pub fn put_timeouts(&mut self, value: DataAwsServicecatalogLaunchPathsTimeouts) {
        self.config.timeouts = Some(value);
    }

    pub fn reset_timeouts(&mut self) {
        self.config.timeouts = None;
    }

    /// Block with information about the launch path.
    pub fn summaries(&self) -> ComplexList<DataAwsServicecatalogLaunchPathsSummariesOutputReference> {
        ComplexList::new(self.fqn(), "summaries", false)
    }
}

impl TerraformResource for DataAwsServicecatalogLaunchPaths {
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

/// Configuration of [`DataAwsServicecatalogLaunchPaths`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataAwsServicecatalogLaunchPathsConfig {
    #[serde(flatten)]
    pub meta: MetaArguments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Product identifier.
    pub product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<DataAwsServicecatalogLaunchPathsTimeouts>,
}

impl DataAwsServicecatalogLaunchPathsConfig {
    pub fn builder() -> DataAwsServicecatalogLaunchPathsConfigBuilder {
        DataAwsServicecatalogLaunchPathsConfigBuilder::default()
    }
}

/// Builder for [`DataAwsServicecatalogLaunchPathsConfig`].
#[derive(Debug, Clone, Default)]
pub struct DataAwsServicecatalogLaunchPathsConfigBuilder {
    meta: MetaArguments,
    accept_language: Option<String>,
    id: Option<String>,
    product_id: Option<String>,
    timeouts: Option<DataAwsServicecatalogLaunchPathsTimeouts>,
}

impl DataAwsServicecatalogLaunchPathsConfigBuilder {
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

    pub fn product_id(mut self, value: impl Into<String>) -> Self {
        self.product_id = Some(value.into());
        self
    }

    pub fn timeouts(mut self, value: DataAwsServicecatalogLaunchPathsTimeouts) -> Self {
        self.timeouts = Some(value);
        self
    }

    /// # Errors
    ///
    /// Returns [`BindingError::MissingRequiredProperty`] if a required
    /// property was not set.
    pub fn build(self) -> Result<DataAwsServicecatalogLaunchPathsConfig, BindingError> {
        Ok(DataAwsServicecatalogLaunchPathsConfig {
            meta: self.meta,
            accept_language: self.accept_language,
            id: self.id,
            product_id: self
                .product_id
                .ok_or_else(|| BindingError::missing_property("DataAwsServicecatalogLaunchPathsConfig", "product_id"))?,
            timeouts: self.timeouts,
        })
    }
}

/// The `timeouts` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataAwsServicecatalogLaunchPathsTimeouts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
}

impl DataAwsServicecatalogLaunchPathsTimeouts {
    pub fn builder() -> DataAwsServicecatalogLaunchPathsTimeoutsBuilder {
        DataAwsServicecatalogLaunchPathsTimeoutsBuilder::default()
    }
}

/// Builder for [`DataAwsServicecatalogLaunchPathsTimeouts`].
#[derive(Debug, Clone, Default)]
pub struct DataAwsServicecatalogLaunchPathsTimeoutsBuilder {
    read: Option<String>,
}

impl DataAwsServicecatalogLaunchPathsTimeoutsBuilder {
    pub fn read(mut self, value: impl Into<String>) -> Self {
        self.read = Some(value.into());
        self
    }

    pub fn build(self) -> DataAwsServicecatalogLaunchPathsTimeouts {
        DataAwsServicecatalogLaunchPathsTimeouts {
            read: self.read,
        }
    }
}

/// Reference to one computed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsServicecatalogLaunchPathsSummariesConstraintSummariesOutputReference(ListItemRef);

impl From<ListItemRef> for DataAwsServicecatalogLaunchPathsSummariesConstraintSummariesOutputReference {
    fn from(item: ListItemRef) -> Self {
        Self(item)
    }
}

impl DataAwsServicecatalogLaunchPathsSummariesConstraintSummariesOutputReference {
    pub fn item(&self) -> &ListItemRef {
        &self.0
    }

    pub fn description(&self) -> String {
        self.0.interpolation_for_attribute("description")
    }

    pub fn r#type(&self) -> String {
        self.0.interpolation_for_attribute("type")
    }
}

/// Reference to one computed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataAwsServicecatalogLaunchPathsSummariesOutputReference(ListItemRef);

impl From<ListItemRef> for DataAwsServicecatalogLaunchPathsSummariesOutputReference {
    fn from(item: ListItemRef) -> Self {
        Self(item)
    }
}

impl DataAwsServicecatalogLaunchPathsSummariesOutputReference {
    pub fn item(&self) -> &ListItemRef {
        &self.0
    }

    pub fn name(&self) -> String {
        self.0.interpolation_for_attribute("name")
    }

    pub fn path_id(&self) -> String {
        self.0.interpolation_for_attribute("path_id")
    }

    pub fn tags(&self) -> String {
        self.0.interpolation_for_attribute("tags")
    }

    pub fn constraint_summaries(&self) -> ComplexList<DataAwsServicecatalogLaunchPathsSummariesConstraintSummariesOutputReference> {
        self.0.list("constraint_summaries", false)
    }
}
