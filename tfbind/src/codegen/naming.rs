//! Identifier conversion from terraform names to Rust names.

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Names already used by methods or fields of generated types.
const RESERVED_MEMBERS: &[&str] = &[
    "build", "builder", "config", "fqn", "kind", "meta", "meta_mut", "new", "node",
];

/// Terraform meta-argument names, never valid as schema attributes.
pub const META_ARGUMENTS: &[&str] = &["count", "depends_on", "for_each", "lifecycle", "provider"];

/// Convert `snake_case` (or `kebab-case`) to `PascalCase`.
pub fn to_pascal_case(name: &str) -> String {
    name.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// A field name as written in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    /// Identifier for the field, getter and builder method (`r#type`).
    pub ident: String,
    /// Bare name used to derive `set_`, `reset_` and `put_` methods (`type`).
    pub bare: String,
    /// Terraform attribute name when it differs from the identifier.
    pub serde_rename: Option<String>,
}

/// Map a terraform attribute or block name to a Rust field name.
pub fn field_name(tf_name: &str) -> FieldName {
    let mut bare = tf_name.replace('-', "_");
    if bare.starts_with(|c: char| c.is_ascii_digit()) {
        bare = format!("_{bare}");
    }
    if RESERVED_MEMBERS.contains(&bare.as_str()) || NON_RAW_KEYWORDS.contains(&bare.as_str()) {
        bare = format!("{bare}_attribute");
    }

    let ident = if KEYWORDS.contains(&bare.as_str()) {
        format!("r#{bare}")
    } else {
        bare.clone()
    };
    let serde_rename = (bare != tf_name).then(|| tf_name.to_string());

    FieldName {
        ident,
        bare,
        serde_rename,
    }
}

/// Name of the wrapper struct for a resource type.
///
/// `aws_servicecatalog_portfolio` becomes `ServicecatalogPortfolio`.
pub fn resource_struct_name(tf_type: &str, provider_prefix: &str) -> String {
    let stripped = tf_type
        .strip_prefix(provider_prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(tf_type);
    to_pascal_case(stripped)
}

/// Name of the wrapper struct for a data source type.
///
/// `aws_servicecatalog_portfolio` becomes `DataAwsServicecatalogPortfolio`.
pub fn data_source_struct_name(tf_type: &str) -> String {
    format!("Data{}", to_pascal_case(tf_type))
}

/// Name of the module holding a resource.
pub fn resource_module_name(tf_type: &str, provider_prefix: &str) -> String {
    tf_type
        .strip_prefix(provider_prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .unwrap_or(tf_type)
        .replace('-', "_")
}

/// Name of the module holding a data source.
pub fn data_source_module_name(tf_type: &str) -> String {
    format!("data_{}", tf_type.replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(
            to_pascal_case("servicecatalog_portfolio"),
            "ServicecatalogPortfolio"
        );
        assert_eq!(
            to_pascal_case("provisioning_artifact_parameters"),
            "ProvisioningArtifactParameters"
        );
        assert_eq!(to_pascal_case("tag-option"), "TagOption");
        assert_eq!(to_pascal_case("a__b"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_struct_names() {
        assert_eq!(
            resource_struct_name("aws_servicecatalog_portfolio", "aws"),
            "ServicecatalogPortfolio"
        );
        assert_eq!(resource_struct_name("random_pet", "aws"), "RandomPet");
        assert_eq!(
            data_source_struct_name("aws_servicecatalog_launch_paths"),
            "DataAwsServicecatalogLaunchPaths"
        );
        assert_eq!(
            resource_module_name("aws_servicecatalog_tag_option", "aws"),
            "servicecatalog_tag_option"
        );
        assert_eq!(
            data_source_module_name("aws_servicecatalog_portfolio"),
            "data_aws_servicecatalog_portfolio"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(
            field_name("name"),
            FieldName {
                ident: "name".to_string(),
                bare: "name".to_string(),
                serde_rename: None,
            }
        );

        let ty = field_name("type");
        assert_eq!(ty.ident, "r#type");
        assert_eq!(ty.bare, "type");
        assert_eq!(ty.serde_rename, None);

        let meta = field_name("meta");
        assert_eq!(meta.ident, "meta_attribute");
        assert_eq!(meta.serde_rename.as_deref(), Some("meta"));

        let slf = field_name("self");
        assert_eq!(slf.ident, "self_attribute");

        let dashed = field_name("accept-language");
        assert_eq!(dashed.ident, "accept_language");
        assert_eq!(dashed.serde_rename.as_deref(), Some("accept-language"));

        assert_eq!(field_name("3d").ident, "_3d");
    }
}
