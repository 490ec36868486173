//! Rendering of the codegen model to Rust source.

use crate::schema::short_source;

use super::model::{
    Computed, Construct, ConstructKind, Field, FieldKind, RefDef, RustType, StructDef,
};

/// Line-based source buffer with indentation.
#[derive(Default)]
struct CodeWriter {
    buf: String,
    indent: usize,
}

impl CodeWriter {
    fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.buf.push_str("    ");
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.indent += 1;
    }

    fn close(&mut self, text: impl AsRef<str>) {
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    fn doc(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
    }

    fn module_doc(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//!");
            return;
        }
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.line("//!");
            } else {
                self.line(format!("//! {line}"));
            }
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn kind_label(kind: ConstructKind) -> &'static str {
    match kind {
        ConstructKind::Resource => "resource",
        ConstructKind::DataSource => "data source",
        ConstructKind::Provider => "provider",
    }
}

/// Render the module for one construct.
pub fn construct(construct: &Construct) -> String {
    let mut w = CodeWriter::default();

    w.module_doc(&format!(
        "Bindings for the `{}` {}.",
        construct.tf_type,
        kind_label(construct.kind)
    ));
    if let Some(description) = &construct.description {
        w.module_doc("");
        w.module_doc(description);
    }
    w.module_doc("");
    w.module_doc(&format!(
        "Code generated from the `{}` schema. DO NOT EDIT.",
        construct.source
    ));
    w.blank();

    imports(&mut w, construct);
    wrapper(&mut w, construct);

    w.blank();
    config_struct(&mut w, &construct.config);
    for def in &construct.structs {
        w.blank();
        config_struct(&mut w, def);
    }
    for def in &construct.refs {
        w.blank();
        item_ref(&mut w, def);
    }

    w.finish()
}

fn imports(w: &mut CodeWriter, construct: &Construct) {
    if construct.uses_map() {
        w.line("use std::collections::HashMap;");
        w.blank();
    }
    w.line("use serde::{Deserialize, Serialize};");

    let mut names = vec!["BindingError"];
    if construct.kind == ConstructKind::DataSource {
        names.push("BlockKind");
    }
    if construct.uses_lists() && construct.kind != ConstructKind::Provider {
        names.push("ComplexList");
    }
    names.push("ConstructNode");
    if !construct.refs.is_empty() {
        names.push("ListItemRef");
    }
    if construct.kind == ConstructKind::Provider {
        names.extend(["Scope", "TerraformProvider"]);
    } else {
        names.extend(["MetaArguments", "Scope", "TerraformResource"]);
    }
    w.line(format!("use tfbind::{{{}}};", names.join(", ")));
    w.blank();
}

fn wrapper(w: &mut CodeWriter, construct: &Construct) {
    let name = &construct.name;
    let config = &construct.config.name;
    let is_provider = construct.kind == ConstructKind::Provider;

    w.doc(&format!(
        "The `{}` {}.",
        construct.tf_type,
        kind_label(construct.kind)
    ));
    w.line("#[derive(Debug, Clone, PartialEq)]");
    w.open(format!("pub struct {name} {{"));
    w.line("node: ConstructNode,");
    w.line(format!("config: {config},"));
    w.close("}");
    w.blank();

    w.open(format!("impl {name} {{"));
    if is_provider {
        w.line(format!(
            "pub const TF_PROVIDER_NAME: &'static str = \"{}\";",
            construct.tf_type
        ));
        w.line(format!(
            "pub const TF_PROVIDER_SOURCE: &'static str = \"{}\";",
            short_source(&construct.source)
        ));
    } else {
        w.line(format!(
            "pub const TF_RESOURCE_TYPE: &'static str = \"{}\";",
            construct.tf_type
        ));
    }
    w.blank();
    w.doc(
        "Defines `id` in `scope`.\n\n# Errors\n\nReturns [`BindingError::InvalidConstructId`] if `id` is not a valid\nconstruct id.",
    );
    w.open(format!(
        "pub fn new(scope: &Scope, id: &str, config: {config}) -> Result<Self, BindingError> {{"
    ));
    w.open("Ok(Self {");
    w.line("node: scope.node(id)?,");
    w.line("config,");
    w.close("})");
    w.close("}");
    w.blank();
    w.open(format!("pub fn config(&self) -> &{config} {{"));
    w.line("&self.config");
    w.close("}");

    if construct.config.meta {
        w.blank();
        w.open("pub fn meta_mut(&mut self) -> &mut MetaArguments {");
        w.line("&mut self.config.meta");
        w.close("}");
    }

    for field in &construct.config.fields {
        accessors(w, field, !is_provider);
    }
    for computed in &construct.computed {
        computed_accessor(w, computed);
    }
    w.close("}");
    w.blank();

    if is_provider {
        w.open(format!("impl TerraformProvider for {name} {{"));
        w.open("fn terraform_provider_name(&self) -> &'static str {");
        w.line("Self::TF_PROVIDER_NAME");
        w.close("}");
        w.blank();
        w.open("fn terraform_provider_source(&self) -> &'static str {");
        w.line("Self::TF_PROVIDER_SOURCE");
        w.close("}");
        w.blank();
        node_and_synth(w, |w| {
            w.open("fn alias(&self) -> Option<&str> {");
            w.line("self.config.alias.as_deref()");
            w.close("}");
            w.blank();
        });
    } else {
        w.open(format!("impl TerraformResource for {name} {{"));
        w.open("fn terraform_resource_type(&self) -> &'static str {");
        w.line("Self::TF_RESOURCE_TYPE");
        w.close("}");
        w.blank();
        if construct.kind == ConstructKind::DataSource {
            w.open("fn kind(&self) -> BlockKind {");
            w.line("BlockKind::DataSource");
            w.close("}");
            w.blank();
        }
        node_and_synth(w, |_| {});
    }
    w.close("}");
}

fn node_and_synth(w: &mut CodeWriter, between: impl FnOnce(&mut CodeWriter)) {
    w.open("fn node(&self) -> &ConstructNode {");
    w.line("&self.node");
    w.close("}");
    w.blank();
    between(w);
    w.open("fn synthesize_attributes(&self) -> tfbind::Result<serde_json::Value> {");
    w.line("Ok(serde_json::to_value(&self.config)?)");
    w.close("}");
}

/// Getter return type and expression for a field of `self.config`.
fn getter(field: &Field) -> (String, String) {
    let access = format!("self.config.{}", field.name.ident);
    let (borrowed, owned_copy) = match &field.ty {
        RustType::String => (Some("str".to_string()), false),
        RustType::List(inner) => (Some(format!("[{}]", inner.render())), false),
        ty if ty.is_copy() => (None, true),
        _ => (None, false),
    };
    let target = borrowed.clone().unwrap_or_else(|| field.ty.render());

    match (field.required, borrowed.is_some(), owned_copy) {
        (true, _, true) => (target, access),
        (true, _, false) => (format!("&{target}"), format!("&{access}")),
        (false, _, true) => (format!("Option<{target}>"), access),
        (false, true, false) => (format!("Option<&{target}>"), format!("{access}.as_deref()")),
        (false, false, false) => (format!("Option<&{target}>"), format!("{access}.as_ref()")),
    }
}

/// Setter parameter type and the expression storing it.
fn setter_param(ty: &RustType) -> (String, &'static str) {
    match ty {
        RustType::String => ("impl Into<String>".to_string(), "value.into()"),
        other => (other.render(), "value"),
    }
}

fn accessors(w: &mut CodeWriter, field: &Field, with_refs: bool) {
    let ident = &field.name.ident;
    let bare = &field.name.bare;
    let (ret, expr) = getter(field);
    let (param, stored) = setter_param(&field.ty);
    let stored = if field.required {
        stored.to_string()
    } else {
        format!("Some({stored})")
    };
    let verb = match field.kind {
        FieldKind::Attribute => "set",
        FieldKind::Block | FieldKind::BlockList { .. } => "put",
    };

    w.blank();
    if let Some(description) = &field.description {
        w.doc(description);
    }
    w.open(format!("pub fn {ident}(&self) -> {ret} {{"));
    w.line(expr);
    w.close("}");
    w.blank();
    w.open(format!("pub fn {verb}_{bare}(&mut self, value: {param}) {{"));
    w.line(format!("self.config.{ident} = {stored};"));
    w.close("}");

    if !field.required {
        w.blank();
        w.open(format!("pub fn reset_{bare}(&mut self) {{"));
        w.line(format!("self.config.{ident} = None;"));
        w.close("}");
    }

    if let FieldKind::BlockList {
        item_ref,
        wraps_set,
    } = &field.kind
    {
        if !with_refs {
            return;
        }
        w.blank();
        w.open(format!("pub fn {bare}_ref(&self) -> ComplexList<{item_ref}> {{"));
        if field.required {
            w.open(format!(
                "ComplexList::new(self.fqn(), \"{}\", {wraps_set})",
                field.tf_name
            ));
            w.line(format!(".with_len(self.config.{ident}.len())"));
            w.indent -= 1;
        } else {
            w.line(format!(
                "let list = ComplexList::new(self.fqn(), \"{}\", {wraps_set});",
                field.tf_name
            ));
            w.open(format!("match &self.config.{ident} {{"));
            w.line("Some(items) => list.with_len(items.len()),");
            w.line("None => list,");
            w.close("}");
        }
        w.close("}");
    }
}

fn computed_accessor(w: &mut CodeWriter, computed: &Computed) {
    let ident = &computed.name.ident;
    w.blank();
    if let Some(description) = &computed.description {
        w.doc(description);
    }
    match &computed.list {
        Some(list) => {
            w.open(format!("pub fn {ident}(&self) -> ComplexList<{}> {{", list.item_ref));
            w.line(format!(
                "ComplexList::new(self.fqn(), \"{}\", {})",
                computed.tf_name, list.wraps_set
            ));
        }
        None => {
            w.open(format!("pub fn {ident}(&self) -> String {{"));
            w.line(format!("self.interpolation_for_attribute(\"{}\")", computed.tf_name));
        }
    }
    w.close("}");
}

fn serde_attribute(field: &Field) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(rename) = &field.name.serde_rename {
        parts.push(format!("rename = \"{rename}\""));
    }
    if !field.required {
        parts.push("default".to_string());
        parts.push("skip_serializing_if = \"Option::is_none\"".to_string());
    }
    (!parts.is_empty()).then(|| format!("#[serde({})]", parts.join(", ")))
}

fn field_type(field: &Field) -> String {
    if field.required {
        field.ty.render()
    } else {
        format!("Option<{}>", field.ty.render())
    }
}

fn config_struct(w: &mut CodeWriter, def: &StructDef) {
    let name = &def.name;
    let derive_default = !def.has_required();

    w.doc(&def.doc);
    if derive_default {
        w.line("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]");
    } else {
        w.line("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]");
    }
    w.open(format!("pub struct {name} {{"));
    if def.meta {
        w.line("#[serde(flatten)]");
        w.line("pub meta: MetaArguments,");
    }
    for field in &def.fields {
        if let Some(description) = &field.description {
            w.doc(description);
        }
        if let Some(attribute) = serde_attribute(field) {
            w.line(attribute);
        }
        w.line(format!("pub {}: {},", field.name.ident, field_type(field)));
    }
    w.close("}");

    if def.builder {
        w.blank();
        builder(w, def);
    }
}

fn builder(w: &mut CodeWriter, def: &StructDef) {
    let name = &def.name;
    let builder = format!("{name}Builder");
    let fallible = def.has_required();

    w.open(format!("impl {name} {{"));
    w.open(format!("pub fn builder() -> {builder} {{"));
    w.line(format!("{builder}::default()"));
    w.close("}");
    w.close("}");
    w.blank();

    w.doc(&format!("Builder for [`{name}`]."));
    w.line("#[derive(Debug, Clone, Default)]");
    w.open(format!("pub struct {builder} {{"));
    if def.meta {
        w.line("meta: MetaArguments,");
    }
    for field in &def.fields {
        w.line(format!("{}: Option<{}>,", field.name.ident, field.ty.render()));
    }
    w.close("}");
    w.blank();

    w.open(format!("impl {builder} {{"));
    let mut first = true;
    if def.meta {
        w.open("pub fn meta(mut self, meta: MetaArguments) -> Self {");
        w.line("self.meta = meta;");
        w.line("self");
        w.close("}");
        first = false;
    }
    for field in &def.fields {
        if !first {
            w.blank();
        }
        first = false;
        let (param, stored) = setter_param(&field.ty);
        w.open(format!(
            "pub fn {}(mut self, value: {param}) -> Self {{",
            field.name.ident
        ));
        w.line(format!("self.{} = Some({stored});", field.name.ident));
        w.line("self");
        w.close("}");
    }
    if !first {
        w.blank();
    }

    if fallible {
        w.doc(
            "# Errors\n\nReturns [`BindingError::MissingRequiredProperty`] if a required\nproperty was not set.",
        );
        w.open(format!("pub fn build(self) -> Result<{name}, BindingError> {{"));
        w.open(format!("Ok({name} {{"));
    } else {
        w.open(format!("pub fn build(self) -> {name} {{"));
        w.open(format!("{name} {{"));
    }
    if def.meta {
        w.line("meta: self.meta,");
    }
    for field in &def.fields {
        let ident = &field.name.ident;
        if field.required {
            w.open(format!("{ident}: self"));
            w.line(format!(".{ident}"));
            w.line(format!(
                ".ok_or_else(|| BindingError::missing_property(\"{name}\", \"{}\"))?,",
                field.tf_name
            ));
            w.indent -= 1;
        } else {
            w.line(format!("{ident}: self.{ident},"));
        }
    }
    w.close(if fallible { "})" } else { "}" });
    w.close("}");
    w.close("}");
}

fn item_ref(w: &mut CodeWriter, def: &RefDef) {
    let name = &def.name;
    w.doc(&def.doc);
    w.line("#[derive(Debug, Clone, PartialEq, Eq)]");
    w.line(format!("pub struct {name}(ListItemRef);"));
    w.blank();
    w.open(format!("impl From<ListItemRef> for {name} {{"));
    w.open("fn from(item: ListItemRef) -> Self {");
    w.line("Self(item)");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl {name} {{"));
    w.open("pub fn item(&self) -> &ListItemRef {");
    w.line("&self.0");
    w.close("}");
    for (tf_name, field_name) in &def.attributes {
        w.blank();
        w.open(format!("pub fn {}(&self) -> String {{", field_name.ident));
        w.line(format!("self.0.interpolation_for_attribute(\"{tf_name}\")"));
        w.close("}");
    }
    for list in &def.lists {
        w.blank();
        w.open(format!(
            "pub fn {}(&self) -> ComplexList<{}> {{",
            list.name.ident, list.item_ref
        ));
        w.line(format!("self.0.list(\"{}\", {})", list.tf_name, list.wraps_set));
        w.close("}");
    }
    w.close("}");
}

/// Render the module index re-exporting every construct.
pub fn index(source: &str, constructs: &[Construct]) -> String {
    let mut w = CodeWriter::default();
    w.module_doc(&format!("Bindings for the `{source}` provider."));
    w.module_doc("");
    w.module_doc("Code generated from the provider schema. DO NOT EDIT.");
    w.blank();

    let mut sorted: Vec<&Construct> = constructs.iter().collect();
    sorted.sort_by(|a, b| a.module.cmp(&b.module));

    for construct in &sorted {
        w.line(format!("pub mod {};", construct.module));
    }
    w.blank();
    for construct in &sorted {
        w.line(format!(
            "pub use {}::{{{}, {}}};",
            construct.module, construct.name, construct.config.name
        ));
    }
    w.finish()
}
