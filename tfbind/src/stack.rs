//! Collecting constructs and synthesizing Terraform JSON.
//!
//! A [`Stack`] snapshots the configuration of every construct added to it and
//! renders the whole set as a Terraform JSON configuration document:
//!
//! ```json
//! {
//!   "//": { "metadata": { "stack_name": "catalog", ... } },
//!   "terraform": { "required_providers": { "aws": { "source": "hashicorp/aws" } } },
//!   "provider": { "aws": [ { "region": "eu-west-1" } ] },
//!   "resource": { "aws_servicecatalog_portfolio": { "main": { ... } } },
//!   "data": { ... }
//! }
//! ```

use std::{
    collections::{BTreeMap, btree_map::Entry},
    fs,
    path::Path,
};

use serde_json::{Map, Value, json};

use crate::{
    construct::Scope,
    error::{BindingError, Result},
    resource::{TerraformProvider, TerraformResource},
};

type Section = BTreeMap<String, BTreeMap<String, Value>>;

struct ProviderEntry {
    name: &'static str,
    body: Value,
}

/// A synthesis target holding the snapshot of every added construct.
pub struct Stack {
    name: String,
    required_providers: BTreeMap<&'static str, &'static str>,
    providers: BTreeMap<String, ProviderEntry>,
    resources: Section,
    data: Section,
}

impl Stack {
    /// Creates an empty stack.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required_providers: BTreeMap::new(),
            providers: BTreeMap::new(),
            resources: BTreeMap::new(),
            data: BTreeMap::new(),
        }
    }

    /// Name of the stack.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root scope for constructs of this stack.
    pub fn scope(&self) -> Scope {
        Scope::root(&self.name)
    }

    /// Number of resources and data sources added so far.
    pub fn len(&self) -> usize {
        self.resources.values().map(BTreeMap::len).sum::<usize>()
            + self.data.values().map(BTreeMap::len).sum::<usize>()
    }

    /// Whether no resource or data source has been added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a snapshot of a resource or data source.
    ///
    /// Later changes to the construct are not reflected; add it once its
    /// configuration is final.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::DuplicateConstruct`] if a construct with the
    /// same address was already added, or a serialization error.
    pub fn add(&mut self, construct: &dyn TerraformResource) -> Result<()> {
        let node = construct.node();
        if node.stack_name() != self.name {
            warn!(
                "construct {} was created in stack {} but added to {}",
                node.path(),
                node.stack_name(),
                self.name
            );
        }

        let body = construct.synthesize_attributes()?;
        let section = match construct.kind() {
            crate::BlockKind::Resource => &mut self.resources,
            crate::BlockKind::DataSource => &mut self.data,
        };

        let by_id = section
            .entry(construct.terraform_resource_type().to_string())
            .or_default();
        match by_id.entry(node.logical_id()) {
            Entry::Occupied(_) => Err(BindingError::DuplicateConstruct {
                stack: self.name.clone(),
                address: construct.fqn(),
            }),
            Entry::Vacant(slot) => {
                debug!("stack {}: add {}", self.name, construct.fqn());
                slot.insert(body);
                Ok(())
            }
        }
    }

    /// Adds a provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::DuplicateConstruct`] if a provider with the
    /// same name and alias was already added.
    pub fn add_provider(&mut self, provider: &dyn TerraformProvider) -> Result<()> {
        let fqn = provider.fqn();
        if self.providers.contains_key(&fqn) {
            return Err(BindingError::DuplicateConstruct {
                stack: self.name.clone(),
                address: format!("provider.{fqn}"),
            });
        }

        let body = provider.synthesize_attributes()?;
        self.required_providers.insert(
            provider.terraform_provider_name(),
            provider.terraform_provider_source(),
        );
        debug!("stack {}: add provider {}", self.name, fqn);
        self.providers.insert(
            fqn,
            ProviderEntry {
                name: provider.terraform_provider_name(),
                body,
            },
        );
        Ok(())
    }

    /// Renders the Terraform JSON document.
    pub fn synth(&self) -> Value {
        let mut root = Map::new();
        root.insert(
            "//".to_string(),
            json!({
                "metadata": {
                    "stack_name": self.name,
                    "generator": "tfbind",
                    "version": env!("CARGO_PKG_VERSION"),
                }
            }),
        );

        if !self.required_providers.is_empty() {
            let required: Map<String, Value> = self
                .required_providers
                .iter()
                .map(|(name, source)| (name.to_string(), json!({ "source": source })))
                .collect();
            root.insert(
                "terraform".to_string(),
                json!({ "required_providers": required }),
            );
        }

        if !self.providers.is_empty() {
            let mut providers: Map<String, Value> = Map::new();
            for entry in self.providers.values() {
                let list = providers
                    .entry(entry.name.to_string())
                    .or_insert_with(|| Value::Array(Vec::new()));
                if let Value::Array(items) = list {
                    items.push(entry.body.clone());
                }
            }
            root.insert("provider".to_string(), Value::Object(providers));
        }

        for (key, section) in [("resource", &self.resources), ("data", &self.data)] {
            if section.is_empty() {
                continue;
            }
            let rendered: Map<String, Value> = section
                .iter()
                .map(|(tf_type, blocks)| (tf_type.clone(), Value::Object(to_object(blocks))))
                .collect();
            root.insert(key.to_string(), Value::Object(rendered));
        }

        Value::Object(root)
    }

    /// Renders the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.synth())?)
    }

    /// Writes the document to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_pretty()?)?;
        info!("stack {} written to {}", self.name, path.display());
        Ok(())
    }
}

fn to_object(blocks: &BTreeMap<String, Value>) -> Map<String, Value> {
    blocks
        .iter()
        .map(|(id, body)| (id.clone(), body.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockKind, ConstructNode};

    struct Item {
        node: ConstructNode,
        kind: BlockKind,
        body: Value,
    }

    impl TerraformResource for Item {
        fn terraform_resource_type(&self) -> &'static str {
            "test_item"
        }

        fn kind(&self) -> BlockKind {
            self.kind
        }

        fn node(&self) -> &ConstructNode {
            &self.node
        }

        fn synthesize_attributes(&self) -> Result<Value> {
            Ok(self.body.clone())
        }
    }

    struct Provider {
        node: ConstructNode,
        alias: Option<String>,
    }

    impl TerraformProvider for Provider {
        fn terraform_provider_name(&self) -> &'static str {
            "test"
        }

        fn terraform_provider_source(&self) -> &'static str {
            "example/test"
        }

        fn node(&self) -> &ConstructNode {
            &self.node
        }

        fn alias(&self) -> Option<&str> {
            self.alias.as_deref()
        }

        fn synthesize_attributes(&self) -> Result<Value> {
            Ok(match &self.alias {
                Some(alias) => json!({ "alias": alias }),
                None => json!({}),
            })
        }
    }

    fn item(stack: &Stack, id: &str, kind: BlockKind) -> Item {
        Item {
            node: stack.scope().node(id).unwrap(),
            kind,
            body: json!({ "name": id }),
        }
    }

    #[test]
    fn test_synth_layout() {
        let mut stack = Stack::new("demo");
        stack
            .add_provider(&Provider {
                node: stack.scope().node("default").unwrap(),
                alias: None,
            })
            .unwrap();
        stack
            .add_provider(&Provider {
                node: stack.scope().node("west").unwrap(),
                alias: Some("west".to_string()),
            })
            .unwrap();
        stack.add(&item(&stack, "a", BlockKind::Resource)).unwrap();
        let data = item(&stack, "b", BlockKind::DataSource);
        stack.add(&data).unwrap();

        assert_eq!(stack.len(), 2);

        let doc = stack.synth();
        assert_eq!(doc["//"]["metadata"]["stack_name"], "demo");
        assert_eq!(
            doc["terraform"]["required_providers"]["test"]["source"],
            "example/test"
        );
        assert_eq!(doc["provider"]["test"], json!([{}, { "alias": "west" }]));
        assert_eq!(doc["resource"]["test_item"]["a"], json!({ "name": "a" }));
        assert_eq!(doc["data"]["test_item"]["b"], json!({ "name": "b" }));
    }

    #[test]
    fn test_sections_hold_every_block() {
        let mut stack = Stack::new("demo");
        for id in ["web", "api", "db"] {
            let resource = item(&stack, id, BlockKind::Resource);
            stack.add(&resource).unwrap();
        }

        let doc = stack.synth();
        let expected = json!({
            "test_item": {
                "api": { "name": "api" },
                "db": { "name": "db" },
                "web": { "name": "web" }
            }
        });
        assert_eq!(doc["resource"], expected);

        let ids: Vec<&String> = doc["resource"]["test_item"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(ids, ["api", "db", "web"]);
    }

    #[test]
    fn test_empty_sections_omitted() {
        let stack = Stack::new("empty");
        assert!(stack.is_empty());
        let doc = stack.synth();
        assert!(doc.get("resource").is_none());
        assert!(doc.get("data").is_none());
        assert!(doc.get("provider").is_none());
    }

    #[test]
    fn test_duplicate_address_rejected() {
        let mut stack = Stack::new("demo");
        stack.add(&item(&stack, "a", BlockKind::Resource)).unwrap();

        let err = stack
            .add(&item(&stack, "a", BlockKind::Resource))
            .unwrap_err();
        assert!(matches!(
            err,
            BindingError::DuplicateConstruct { ref address, .. } if address == "test_item.a"
        ));

        // Same id in the data section is a different address.
        let data = item(&stack, "a", BlockKind::DataSource);
        stack.add(&data).unwrap();
    }

    #[test]
    fn test_duplicate_provider_rejected() {
        let mut stack = Stack::new("demo");
        let provider = Provider {
            node: stack.scope().node("default").unwrap(),
            alias: None,
        };
        stack.add_provider(&provider).unwrap();
        assert!(stack.add_provider(&provider).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("main.tf.json");

        let mut stack = Stack::new("demo");
        stack.add(&item(&stack, "a", BlockKind::Resource)).unwrap();
        stack.write(&path).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, stack.synth());
    }
}
