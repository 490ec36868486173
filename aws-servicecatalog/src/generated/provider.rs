//! Bindings for the `aws` provider.
//!
//! Code generated from the `registry.terraform.io/hashicorp/aws` schema. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use tfbind::{BindingError, ConstructNode, Scope, TerraformProvider};

/// The `aws` provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AwsProvider {
    node: ConstructNode,
    config: AwsProviderConfig,
}

impl AwsProvider {
    pub const TF_PROVIDER_NAME: &'static str = "aws";
    pub const TF_PROVIDER_SOURCE: &'static str = "hashicorp/aws";

    /// Defines `id` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn new(scope: &Scope, id: &str, config: AwsProviderConfig) -> Result<Self, BindingError> {
        Ok(Self {
            node: scope.node(id)?,
            config,
        })
    }

    pub fn config(&self) -> &AwsProviderConfig {
        &self.config
    }

    /// Alias distinguishing several provider configurations.
    pub fn alias(&self) -> Option<&str> {
        self.config.alias.as_deref()
    }

    pub fn set_alias(&mut self, value: impl Into<String>) {
        self.config.alias = Some(value.into());
    }

    pub fn reset_alias(&mut self) {
        self.config.alias = None;
    }

    /// The access key for API operations.
    pub fn access_key(&self) -> Option<&str> {
        self.config.access_key.as_deref()
    }

    pub fn set_access_key(&mut self, value: impl Into<String>) {
        self.config.access_key = Some(value.into());
    }

    pub fn reset_access_key(&mut self) {
        self.config.access_key = None;
    }

    pub fn allowed_account_ids(&self) -> Option<&[String]> {
        self.config.allowed_account_ids.as_deref()
    }

    pub fn set_allowed_account_ids(&mut self, value: Vec<String>) {
        self.config.allowed_account_ids = Some(value);
    }

    pub fn reset_allowed_account_ids(&mut self) {
        self.config.allowed_account_ids = None;
    }

    /// The profile for API operations. If not set, the default profile created with `aws configure` will be used.
    pub fn profile(&self) -> Option<&str> {
        self.config.profile.as_deref()
    }

    pub fn set_profile(&mut self, value: impl Into<String>) {
        self.config.profile = Some(value.into());
    }

    pub fn reset_profile(&mut self) {
        self.config.profile = None;
    }

    /// The region where AWS operations will take place.
    pub fn region(&self) -> Option<&str> {
        self.config.region.as_deref()
    }

    pub fn set_region(&mut self, value: impl Into<String>) {
        self.config.region = Some(value.into());
    }

    pub fn reset_region(&mut self) {
        self.config.region = None;
    }

    /// The secret key for API operations.
    pub fn secret_key(&self) -> Option<&str> {
        self.config.secret_key.as_deref()
    }

    pub fn set_secret_key(&mut self, value: impl Into<String>) {
        self.config.secret_key = Some(value.into());
    }

    pub fn reset_secret_key(&mut self) {
        self.config.secret_key = None;
    }

    /// Skip the credentials validation via STS API.
    pub fn skip_credentials_validation(&self) -> Option<bool> {
        self.config.skip_credentials_validation
    }

    pub fn set_skip_credentials_validation(&mut self, value: bool) {
        self.config.skip_credentials_validation = Some(value);
    }

    pub fn reset_skip_credentials_validation(&mut self) {
        self.config.skip_credentials_validation = None;
    }
}

impl TerraformProvider for AwsProvider {
    fn terraform_provider_name(&self) -> &'static str {
        Self::TF_PROVIDER_NAME
    }

    fn terraform_provider_source(&self) -> &'static str {
        Self::TF_PROVIDER_SOURCE
    }

    fn node(&self) -> &ConstructNode {
        &self.node
    }

    fn alias(&self) -> Option<&str> {
        self.config.alias.as_deref()
    }

    fn synthesize_attributes(&self) -> tfbind::Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.config)?)
    }
}

/// Configuration of [`AwsProvider`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwsProviderConfig {
    /// Alias distinguishing several provider configurations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// The access key for API operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_account_ids: Option<Vec<String>>,
    /// The profile for API operations. If not set, the default profile created with `aws configure` will be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// The region where AWS operations will take place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// The secret key for API operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    /// Skip the credentials validation via STS API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_credentials_validation: Option<bool>,
}

impl AwsProviderConfig {
    pub fn builder() -> AwsProviderConfigBuilder {
        AwsProviderConfigBuilder::default()
    }
}

/// Builder for [`AwsProviderConfig`].
#[derive(Debug, Clone, Default)]
pub struct AwsProviderConfigBuilder {
    alias: Option<String>,
    access_key: Option<String>,
    allowed_account_ids: Option<Vec<String>>,
    profile: Option<String>,
    region: Option<String>,
    secret_key: Option<String>,
    skip_credentials_validation: Option<bool>,
}

impl AwsProviderConfigBuilder {
    pub fn alias(mut self, value: impl Into<String>) -> Self {
        self.alias = Some(value.into());
        self
    }

    pub fn access_key(mut self, value: impl Into<String>) -> Self {
        self.access_key = Some(value.into());
        self
    }

    pub fn allowed_account_ids(mut self, value: Vec<String>) -> Self {
        self.allowed_account_ids = Some(value);
        self
    }

    pub fn profile(mut self, value: impl Into<String>) -> Self {
        self.profile = Some(value.into());
        self
    }

    pub fn region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(value.into());
        self
    }

    pub fn secret_key(mut self, value: impl Into<String>) -> Self {
        self.secret_key = Some(value.into());
        self
    }

    pub fn skip_credentials_validation(mut self, value: bool) -> Self {
        self.skip_credentials_validation = Some(value);
        self
    }

    pub fn build(self) -> AwsProviderConfig {
        AwsProviderConfig {
            alias: self.alias,
            access_key: self.access_key,
            allowed_account_ids: self.allowed_account_ids,
            profile: self.profile,
            region: self.region,
            secret_key: self.secret_key,
            skip_credentials_validation: self.skip_credentials_validation,
        }
    }
}
