use std::collections::BTreeMap;

use serde::Deserialize;

use crate::schema::{SchemaError, types::AttributeType};

/// A configuration block: attributes plus nested block types.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    pub block_types: BTreeMap<String, NestedBlock>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
}

/// A single attribute of a block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default)]
    pub sensitive: bool,
    #[serde(default)]
    pub deprecated: bool,
}

/// How a nested block repeats inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestingMode {
    Single,
    Group,
    List,
    Set,
    Map,
}

/// A nested block type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NestedBlock {
    pub nesting_mode: NestingMode,
    pub block: Block,
    #[serde(default)]
    pub min_items: u64,
    #[serde(default)]
    pub max_items: u64,
}

impl Attribute {
    /// Whether the attribute can be set in configuration.
    pub fn is_configurable(&self) -> bool {
        self.required || self.optional
    }

    /// Whether the attribute is only known after apply.
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.is_configurable()
    }

    fn validate(&self, path: &str) -> Result<(), SchemaError> {
        let reason = if self.required && self.optional {
            "attribute cannot be both required and optional"
        } else if self.required && self.computed {
            "attribute cannot be both required and computed"
        } else if !self.required && !self.optional && !self.computed {
            "attribute must be required, optional or computed"
        } else {
            return Ok(());
        };
        Err(SchemaError::InvalidAttribute {
            path: path.to_string(),
            reason,
        })
    }
}

impl NestedBlock {
    /// Whether the block holds at most one item.
    pub fn is_single(&self) -> bool {
        match self.nesting_mode {
            NestingMode::Single | NestingMode::Group => true,
            NestingMode::List | NestingMode::Set => self.max_items == 1,
            NestingMode::Map => false,
        }
    }

    /// Whether at least one item must be configured.
    pub fn is_required(&self) -> bool {
        self.min_items > 0
    }

    /// Whether the block is a set, so index access needs `tolist()`.
    pub fn wraps_set(&self) -> bool {
        self.nesting_mode == NestingMode::Set
    }
}

impl Block {
    /// Validate attribute flags of this block and every nested block.
    pub fn validate(&self, path: &str) -> Result<(), SchemaError> {
        for (name, attribute) in &self.attributes {
            attribute.validate(&format!("{path}.{name}"))?;
        }
        for (name, nested) in &self.block_types {
            let nested_path = format!("{path}.{name}");
            if nested.max_items != 0 && nested.min_items > nested.max_items {
                return Err(SchemaError::InvalidAttribute {
                    path: nested_path,
                    reason: "min_items exceeds max_items",
                });
            }
            nested.block.validate(&nested_path)?;
        }
        Ok(())
    }

    /// Names of required attributes, sorted.
    pub fn required_attributes(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|(_, attribute)| attribute.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
