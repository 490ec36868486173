//! Resource traits and terraform meta-arguments.
//!
//! Generated resource, data source and provider types implement the traits in
//! this module so a [`Stack`](crate::Stack) can synthesize them without
//! knowing their concrete configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{construct::ConstructNode, error::Result};

/// Top-level section a construct synthesizes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Managed resource (`resource` section).
    Resource,
    /// Read-only data source (`data` section).
    DataSource,
}

impl BlockKind {
    /// Name of the Terraform JSON section.
    pub fn section(&self) -> &'static str {
        match self {
            BlockKind::Resource => "resource",
            BlockKind::DataSource => "data",
        }
    }
}

/// Terraform meta-arguments accepted by every resource and data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaArguments {
    /// Number of instances to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Addresses of constructs this one depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Expression to iterate over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_each: Option<String>,
    /// Provider reference in `name.alias` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Lifecycle customizations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
}

impl MetaArguments {
    /// Sets the instance count.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the `for_each` expression.
    pub fn with_for_each(mut self, expression: impl Into<String>) -> Self {
        self.for_each = Some(expression.into());
        self
    }

    /// Adds an explicit dependency on another construct.
    pub fn depends_on(mut self, other: &dyn TerraformResource) -> Self {
        self.depends_on.push(other.fqn());
        self
    }

    /// Binds the construct to a (usually aliased) provider configuration.
    pub fn with_provider(mut self, provider: &dyn TerraformProvider) -> Self {
        self.provider = Some(provider.fqn());
        self
    }

    /// Sets lifecycle customizations.
    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }
}

/// The `lifecycle` meta-argument block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_before_destroy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevent_destroy: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore_changes: Vec<String>,
}

/// A resource or data source that can be synthesized.
pub trait TerraformResource {
    /// Terraform type name, e.g. `aws_servicecatalog_portfolio`.
    fn terraform_resource_type(&self) -> &'static str;

    /// Whether this is a managed resource or a data source.
    fn kind(&self) -> BlockKind {
        BlockKind::Resource
    }

    /// Scoped identity of the construct.
    fn node(&self) -> &ConstructNode;

    /// Attribute body as it appears under `resource.<type>.<logical id>`.
    fn synthesize_attributes(&self) -> Result<Value>;

    /// Terraform address, e.g. `aws_servicecatalog_portfolio.main` or
    /// `data.aws_servicecatalog_portfolio.main`.
    fn fqn(&self) -> String {
        let address = format!(
            "{}.{}",
            self.terraform_resource_type(),
            self.node().logical_id()
        );
        match self.kind() {
            BlockKind::Resource => address,
            BlockKind::DataSource => format!("data.{address}"),
        }
    }

    /// Interpolation token referencing one attribute of this construct.
    fn interpolation_for_attribute(&self, attribute: &str) -> String {
        format!("${{{}.{}}}", self.fqn(), attribute)
    }
}

/// A provider configuration block.
pub trait TerraformProvider {
    /// Local provider name, e.g. `aws`.
    fn terraform_provider_name(&self) -> &'static str;

    /// Registry source, e.g. `hashicorp/aws`.
    fn terraform_provider_source(&self) -> &'static str;

    /// Scoped identity of the provider construct.
    fn node(&self) -> &ConstructNode;

    /// Alias distinguishing several configurations of the same provider.
    fn alias(&self) -> Option<&str>;

    /// Attribute body as it appears under `provider.<name>`.
    fn synthesize_attributes(&self) -> Result<Value>;

    /// Provider reference used by the `provider` meta-argument.
    fn fqn(&self) -> String {
        match self.alias() {
            Some(alias) => format!("{}.{}", self.terraform_provider_name(), alias),
            None => self.terraform_provider_name().to_string(),
        }
    }
}
