//! Intermediate model between a block schema and emitted Rust code.
//!
//! A [`Construct`] is one resource, data source or provider with all the
//! structs, item references and computed accessors it needs. Names are
//! decided here; the emitter only prints.

use std::collections::BTreeMap;

use crate::schema::{AttributeType, Block, NestingMode, Schema};

use super::naming::{self, FieldName, META_ARGUMENTS, to_pascal_case};

/// Rust type of a generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustType {
    String,
    Number,
    Bool,
    Json,
    List(Box<RustType>),
    Map(Box<RustType>),
    Struct(String),
}

impl RustType {
    /// Type as written in a struct field.
    pub fn render(&self) -> String {
        match self {
            RustType::String => "String".to_string(),
            RustType::Number => "f64".to_string(),
            RustType::Bool => "bool".to_string(),
            RustType::Json => "serde_json::Value".to_string(),
            RustType::List(inner) => format!("Vec<{}>", inner.render()),
            RustType::Map(inner) => format!("HashMap<String, {}>", inner.render()),
            RustType::Struct(name) => name.clone(),
        }
    }

    /// Whether the rendered type mentions `HashMap`.
    pub fn uses_map(&self) -> bool {
        match self {
            RustType::Map(_) => true,
            RustType::List(inner) => inner.uses_map(),
            _ => false,
        }
    }

    /// Whether values are `Copy` and returned by value from getters.
    pub fn is_copy(&self) -> bool {
        matches!(self, RustType::Number | RustType::Bool)
    }
}

/// How a field is stored and mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar, collection or object attribute, changed with `set_x`.
    Attribute,
    /// Block holding at most one item, replaced with `put_x`.
    Block,
    /// Repeated block, replaced with `put_x` and indexed through `x_ref`.
    BlockList { item_ref: String, wraps_set: bool },
}

/// One field of a generated struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub tf_name: String,
    pub name: FieldName,
    pub ty: RustType,
    pub required: bool,
    pub kind: FieldKind,
    pub description: Option<String>,
}

/// A generated configuration struct.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: String,
    pub doc: String,
    pub fields: Vec<Field>,
    /// Flattens `MetaArguments` into the struct.
    pub meta: bool,
    /// Gets a builder; object attribute structs derive `Default` instead.
    pub builder: bool,
}

impl StructDef {
    pub fn has_required(&self) -> bool {
        self.fields.iter().any(|field| field.required)
    }
}

/// A list accessor on an item reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefList {
    pub tf_name: String,
    pub name: FieldName,
    pub item_ref: String,
    pub wraps_set: bool,
}

/// Reference to one element of a list, exposing interpolation tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct RefDef {
    pub name: String,
    pub doc: String,
    pub attributes: Vec<(String, FieldName)>,
    pub lists: Vec<RefList>,
}

/// Accessor for an attribute that is only known after apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    pub tf_name: String,
    pub name: FieldName,
    pub description: Option<String>,
    /// Set when the attribute is a list of objects.
    pub list: Option<RefList>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    Resource,
    DataSource,
    Provider,
}

/// Everything emitted for one resource, data source or provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Construct {
    pub kind: ConstructKind,
    /// Terraform type, or the provider name for providers.
    pub tf_type: String,
    /// Full provider source the schema was read from.
    pub source: String,
    pub name: String,
    pub module: String,
    pub description: Option<String>,
    pub config: StructDef,
    /// Nested block and object structs, parents before children.
    pub structs: Vec<StructDef>,
    pub refs: Vec<RefDef>,
    pub computed: Vec<Computed>,
}

impl Construct {
    pub fn resource(tf_type: &str, schema: &Schema, prefix: &str, source: &str) -> Self {
        let name = naming::resource_struct_name(tf_type, prefix);
        let module = naming::resource_module_name(tf_type, prefix);
        Self::build(
            ConstructKind::Resource,
            tf_type,
            source,
            name,
            module,
            &schema.block,
        )
    }

    pub fn data_source(tf_type: &str, schema: &Schema, source: &str) -> Self {
        let name = naming::data_source_struct_name(tf_type);
        let module = naming::data_source_module_name(tf_type);
        Self::build(
            ConstructKind::DataSource,
            tf_type,
            source,
            name,
            module,
            &schema.block,
        )
    }

    pub fn provider(provider_name: &str, schema: &Schema, source: &str) -> Self {
        let name = format!("{}Provider", to_pascal_case(provider_name));
        let mut construct = Self::build(
            ConstructKind::Provider,
            provider_name,
            source,
            name,
            "provider".to_string(),
            &schema.block,
        );

        if !schema.block.attributes.contains_key("alias") {
            let alias = Field {
                tf_name: "alias".to_string(),
                name: naming::field_name("alias"),
                ty: RustType::String,
                required: false,
                kind: FieldKind::Attribute,
                description: Some("Alias distinguishing several provider configurations.".into()),
            };
            construct.config.fields.insert(0, alias);
        }
        // Providers have no addressable attributes.
        construct.computed.clear();
        construct.refs.clear();
        construct
    }

    fn build(
        kind: ConstructKind,
        tf_type: &str,
        source: &str,
        name: String,
        module: String,
        block: &Block,
    ) -> Self {
        let mut builder = ModelBuilder::default();
        let meta = kind != ConstructKind::Provider;
        let (fields, computed) = builder.fields(&name, block, meta, tf_type);
        let config = StructDef {
            name: format!("{name}Config"),
            doc: format!("Configuration of [`{name}`]."),
            fields,
            meta,
            builder: true,
        };

        Self {
            kind,
            tf_type: tf_type.to_string(),
            source: source.to_string(),
            name,
            module,
            description: first_paragraph(block.description.as_deref()),
            config,
            structs: builder.structs,
            refs: builder.refs,
            computed,
        }
    }

    /// Whether any emitted type uses `HashMap`.
    pub fn uses_map(&self) -> bool {
        std::iter::once(&self.config)
            .chain(self.structs.iter())
            .flat_map(|def| def.fields.iter())
            .any(|field| field.ty.uses_map())
    }

    /// Whether any accessor hands out a `ComplexList`.
    pub fn uses_lists(&self) -> bool {
        let block_lists = std::iter::once(&self.config)
            .chain(self.structs.iter())
            .flat_map(|def| def.fields.iter())
            .any(|field| matches!(field.kind, FieldKind::BlockList { .. }));
        block_lists
            || !self.refs.is_empty()
            || self.computed.iter().any(|computed| computed.list.is_some())
    }
}

#[derive(Default)]
struct ModelBuilder {
    structs: Vec<StructDef>,
    refs: Vec<RefDef>,
}

impl ModelBuilder {
    /// Fields of the struct for `block`; `base` prefixes nested type names.
    fn fields(
        &mut self,
        base: &str,
        block: &Block,
        meta: bool,
        path: &str,
    ) -> (Vec<Field>, Vec<Computed>) {
        let mut fields = Vec::new();
        let mut computed = Vec::new();

        for (tf_name, attribute) in &block.attributes {
            if meta && META_ARGUMENTS.contains(&tf_name.as_str()) {
                warn!("{path}.{tf_name}: shadowed by the meta-argument, skipped");
                continue;
            }
            let description = first_paragraph(attribute.description.as_deref());
            let type_base = format!("{base}{}", to_pascal_case(tf_name));

            if attribute.is_computed_only() {
                let list = attribute
                    .attribute_type
                    .object_list_fields()
                    .map(|object| RefList {
                        tf_name: tf_name.clone(),
                        name: naming::field_name(tf_name),
                        item_ref: self.object_ref(&type_base, object),
                        wraps_set: matches!(attribute.attribute_type, AttributeType::Set(_)),
                    });
                computed.push(Computed {
                    tf_name: tf_name.clone(),
                    name: naming::field_name(tf_name),
                    description,
                    list,
                });
                continue;
            }

            fields.push(Field {
                tf_name: tf_name.clone(),
                name: naming::field_name(tf_name),
                ty: self.rust_type(&attribute.attribute_type, &type_base),
                required: attribute.required,
                kind: FieldKind::Attribute,
                description,
            });
        }

        for (tf_name, nested) in &block.block_types {
            let child = format!("{base}{}", to_pascal_case(tf_name));
            let nested_path = format!("{path}.{tf_name}");
            let description = first_paragraph(nested.block.description.as_deref());

            let slot = self.structs.len();
            self.structs.push(StructDef {
                name: child.clone(),
                doc: String::new(),
                fields: Vec::new(),
                meta: false,
                builder: true,
            });
            let (child_fields, child_computed) =
                self.fields(&child, &nested.block, false, &nested_path);

            let (ty, kind) = if nested.is_single() {
                (RustType::Struct(child.clone()), FieldKind::Block)
            } else if nested.nesting_mode == NestingMode::Map {
                (
                    RustType::Map(Box::new(RustType::Struct(child.clone()))),
                    FieldKind::Attribute,
                )
            } else {
                let item_ref = format!("{child}OutputReference");
                self.block_ref(
                    &item_ref,
                    &child,
                    &nested.block,
                    &child_fields,
                    child_computed,
                );
                (
                    RustType::List(Box::new(RustType::Struct(child.clone()))),
                    FieldKind::BlockList {
                        item_ref,
                        wraps_set: nested.wraps_set(),
                    },
                )
            };

            self.structs[slot] = StructDef {
                name: child.clone(),
                doc: match &description {
                    Some(text) => text.clone(),
                    None => format!("The `{tf_name}` block."),
                },
                fields: child_fields,
                meta: false,
                builder: true,
            };

            fields.push(Field {
                tf_name: tf_name.clone(),
                name: naming::field_name(tf_name),
                ty,
                required: nested.is_required(),
                kind,
                description,
            });
        }

        (fields, computed)
    }

    fn rust_type(&mut self, ty: &AttributeType, struct_name: &str) -> RustType {
        match ty {
            AttributeType::String => RustType::String,
            AttributeType::Number => RustType::Number,
            AttributeType::Bool => RustType::Bool,
            AttributeType::Dynamic | AttributeType::Tuple(_) => RustType::Json,
            AttributeType::List(inner) | AttributeType::Set(inner) => {
                RustType::List(Box::new(self.rust_type(inner, struct_name)))
            }
            AttributeType::Map(inner) => {
                RustType::Map(Box::new(self.rust_type(inner, struct_name)))
            }
            AttributeType::Object(object) => {
                if !self.structs.iter().any(|def| def.name == struct_name) {
                    let slot = self.structs.len();
                    self.structs.push(StructDef {
                        name: struct_name.to_string(),
                        doc: String::new(),
                        fields: Vec::new(),
                        meta: false,
                        builder: false,
                    });
                    let fields = object
                        .iter()
                        .map(|(tf_name, field_ty)| Field {
                            tf_name: tf_name.clone(),
                            name: naming::field_name(tf_name),
                            ty: self.rust_type(
                                field_ty,
                                &format!("{struct_name}{}", to_pascal_case(tf_name)),
                            ),
                            required: false,
                            kind: FieldKind::Attribute,
                            description: None,
                        })
                        .collect();
                    self.structs[slot] = StructDef {
                        name: struct_name.to_string(),
                        doc: "Object attribute value.".to_string(),
                        fields,
                        meta: false,
                        builder: false,
                    };
                }
                RustType::Struct(struct_name.to_string())
            }
        }
    }

    /// Item reference for a repeated block.
    fn block_ref(
        &mut self,
        name: &str,
        block_struct: &str,
        block: &Block,
        fields: &[Field],
        computed: Vec<Computed>,
    ) {
        let mut lists: Vec<RefList> = fields
            .iter()
            .filter_map(|field| match &field.kind {
                FieldKind::BlockList {
                    item_ref,
                    wraps_set,
                } => Some(RefList {
                    tf_name: field.tf_name.clone(),
                    name: field.name.clone(),
                    item_ref: item_ref.clone(),
                    wraps_set: *wraps_set,
                }),
                _ => None,
            })
            .collect();
        lists.extend(computed.into_iter().filter_map(|computed| computed.list));
        lists.sort_by(|a, b| a.tf_name.cmp(&b.tf_name));

        let attributes = block
            .attributes
            .keys()
            .filter(|tf_name| !lists.iter().any(|list| &list.tf_name == *tf_name))
            .map(|tf_name| (tf_name.clone(), naming::field_name(tf_name)))
            .collect();

        self.refs.push(RefDef {
            name: name.to_string(),
            doc: format!("Reference to one [`{block_struct}`] item."),
            attributes,
            lists,
        });
    }

    /// Item reference for a computed list of objects; returns its name.
    fn object_ref(&mut self, base: &str, object: &BTreeMap<String, AttributeType>) -> String {
        let name = format!("{base}OutputReference");
        let mut attributes = Vec::new();
        let mut lists = Vec::new();

        for (tf_name, ty) in object {
            match ty.object_list_fields() {
                Some(nested) => {
                    let nested_base = format!("{base}{}", to_pascal_case(tf_name));
                    lists.push(RefList {
                        tf_name: tf_name.clone(),
                        name: naming::field_name(tf_name),
                        item_ref: self.object_ref(&nested_base, nested),
                        wraps_set: matches!(ty, AttributeType::Set(_)),
                    });
                }
                None => attributes.push((tf_name.clone(), naming::field_name(tf_name))),
            }
        }

        self.refs.push(RefDef {
            name: name.clone(),
            doc: "Reference to one computed item.".to_string(),
            attributes,
            lists,
        });
        name
    }
}

/// First paragraph of a schema description, trimmed.
fn first_paragraph(description: Option<&str>) -> Option<String> {
    let text = description?.trim();
    let paragraph = text.split("\n\n").next().unwrap_or(text).trim();
    (!paragraph.is_empty()).then(|| paragraph.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schema(block: serde_json::Value) -> Schema {
        serde_json::from_value(json!({ "version": 0, "block": block })).unwrap()
    }

    fn provisioned_product() -> Schema {
        schema(json!({
            "attributes": {
                "name": { "type": "string", "required": true },
                "arn": { "type": "string", "computed": true },
                "tags": { "type": ["map", "string"], "optional": true },
                "count": { "type": "number", "optional": true },
                "outputs": {
                    "type": ["set", ["object", {
                        "description": "string",
                        "key": "string",
                        "value": "string"
                    }]],
                    "computed": true
                }
            },
            "block_types": {
                "provisioning_parameters": {
                    "nesting_mode": "list",
                    "block": {
                        "attributes": {
                            "key": { "type": "string", "required": true },
                            "value": { "type": "string", "optional": true }
                        }
                    }
                },
                "timeouts": {
                    "nesting_mode": "single",
                    "block": {
                        "attributes": {
                            "create": { "type": "string", "optional": true }
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn test_resource_model() {
        let construct = Construct::resource(
            "aws_servicecatalog_provisioned_product",
            &provisioned_product(),
            "aws",
            "registry.terraform.io/hashicorp/aws",
        );
        assert_eq!(construct.name, "ServicecatalogProvisionedProduct");
        assert_eq!(construct.module, "servicecatalog_provisioned_product");
        assert_eq!(
            construct.config.name,
            "ServicecatalogProvisionedProductConfig"
        );
        assert!(construct.config.meta);

        let names: Vec<&str> = construct
            .config
            .fields
            .iter()
            .map(|field| field.tf_name.as_str())
            .collect();
        // `count` is a meta-argument, `arn` and `outputs` are computed.
        assert_eq!(
            names,
            vec!["name", "tags", "provisioning_parameters", "timeouts"]
        );

        let params = &construct.config.fields[2];
        assert_eq!(
            params.kind,
            FieldKind::BlockList {
                item_ref: "ServicecatalogProvisionedProductProvisioningParametersOutputReference"
                    .to_string(),
                wraps_set: false,
            }
        );
        assert!(!params.required);
        assert_eq!(
            construct.config.fields[3].ty,
            RustType::Struct("ServicecatalogProvisionedProductTimeouts".to_string())
        );

        let struct_names: Vec<&str> = construct.structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            struct_names,
            vec![
                "ServicecatalogProvisionedProductProvisioningParameters",
                "ServicecatalogProvisionedProductTimeouts",
            ]
        );
        assert!(construct.uses_map());
        assert!(construct.uses_lists());
    }

    #[test]
    fn test_computed_object_list() {
        let construct = Construct::resource(
            "aws_servicecatalog_provisioned_product",
            &provisioned_product(),
            "aws",
            "registry.terraform.io/hashicorp/aws",
        );
        let outputs = construct
            .computed
            .iter()
            .find(|computed| computed.tf_name == "outputs")
            .unwrap();
        let list = outputs.list.as_ref().unwrap();
        assert!(list.wraps_set);
        assert_eq!(
            list.item_ref,
            "ServicecatalogProvisionedProductOutputsOutputReference"
        );

        let item_ref = construct
            .refs
            .iter()
            .find(|def| def.name == list.item_ref)
            .unwrap();
        let attributes: Vec<&str> = item_ref
            .attributes
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(attributes, vec!["description", "key", "value"]);
    }

    #[test]
    fn test_provider_model_has_alias() {
        let construct = Construct::provider(
            "aws",
            &schema(json!({
                "attributes": { "region": { "type": "string", "optional": true } }
            })),
            "registry.terraform.io/hashicorp/aws",
        );
        assert_eq!(construct.name, "AwsProvider");
        assert_eq!(construct.module, "provider");
        assert!(!construct.config.meta);
        assert_eq!(construct.config.fields[0].tf_name, "alias");
        assert_eq!(construct.config.fields[1].tf_name, "region");
    }

    #[test]
    fn test_object_attribute_struct() {
        let construct = Construct::data_source(
            "aws_thing",
            &schema(json!({
                "attributes": {
                    "filter": {
                        "type": ["list", ["object", { "name": "string", "values": ["list", "string"] }]],
                        "optional": true
                    }
                }
            })),
            "registry.terraform.io/hashicorp/aws",
        );
        assert_eq!(construct.name, "DataAwsThing");
        let filter = &construct.config.fields[0];
        assert_eq!(filter.ty.render(), "Vec<DataAwsThingFilter>");
        assert!(!construct.structs[0].builder);
        assert_eq!(construct.structs[0].fields[1].ty.render(), "Vec<String>");
    }

    #[test]
    fn test_first_paragraph() {
        assert_eq!(first_paragraph(None), None);
        assert_eq!(first_paragraph(Some("  ")), None);
        assert_eq!(
            first_paragraph(Some("Name of the portfolio.\n\nMore text.")),
            Some("Name of the portfolio.".to_string())
        );
    }
}
