//! Scopes and construct identifiers.
//!
//! Every resource, data source and provider lives in a [`Scope`]. The root
//! scope is named after the stack; child scopes group constructs the way a
//! module would. A [`ConstructNode`] is the scoped identity of one construct
//! and determines its terraform logical id.

use crate::error::{BindingError, Result};

/// A position in the construct tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    path: Vec<String>,
}

impl Scope {
    /// Creates the root scope of a stack.
    pub fn root(stack_name: &str) -> Self {
        Self {
            path: vec![stack_name.to_string()],
        }
    }

    /// Creates a nested scope.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn child(&self, id: &str) -> Result<Scope> {
        validate_id(id)?;
        let mut path = self.path.clone();
        path.push(id.to_string());
        Ok(Scope { path })
    }

    /// Creates the node of a construct defined directly in this scope.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidConstructId`] if `id` is not a valid
    /// construct id.
    pub fn node(&self, id: &str) -> Result<ConstructNode> {
        validate_id(id)?;
        Ok(ConstructNode {
            scope: self.path.clone(),
            id: id.to_string(),
        })
    }

    /// Name of the stack this scope belongs to.
    pub fn stack_name(&self) -> &str {
        &self.path[0]
    }

    /// Slash-separated path of this scope.
    pub fn path(&self) -> String {
        self.path.join("/")
    }
}

/// Scoped identity of a single construct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructNode {
    scope: Vec<String>,
    id: String,
}

impl ConstructNode {
    /// The id given at construction, unique among siblings.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the owning stack.
    pub fn stack_name(&self) -> &str {
        &self.scope[0]
    }

    /// Full slash-separated construct path including the stack name.
    pub fn path(&self) -> String {
        format!("{}/{}", self.scope.join("/"), self.id)
    }

    /// Terraform logical id: the path below the stack joined with `_`.
    pub fn logical_id(&self) -> String {
        let mut parts: Vec<&str> = self.scope[1..].iter().map(String::as_str).collect();
        parts.push(&self.id);
        parts.join("_")
    }
}

fn validate_id(id: &str) -> Result<()> {
    let invalid = |reason| {
        Err(BindingError::InvalidConstructId {
            id: id.to_string(),
            reason,
        })
    };

    let Some(first) = id.chars().next() else {
        return invalid("must not be empty");
    };
    if id.contains('/') {
        return invalid("must not contain '/'");
    }
    if !(first.is_ascii_alphabetic() || first == '_') {
        return invalid("must start with a letter or underscore");
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return invalid("may only contain letters, digits, '_' and '-'");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node() {
        let scope = Scope::root("catalog");
        let node = scope.node("portfolio").unwrap();
        assert_eq!(node.id(), "portfolio");
        assert_eq!(node.stack_name(), "catalog");
        assert_eq!(node.path(), "catalog/portfolio");
        assert_eq!(node.logical_id(), "portfolio");
    }

    #[test]
    fn test_nested_scope_logical_id() {
        let scope = Scope::root("catalog").child("team-a").unwrap();
        assert_eq!(scope.path(), "catalog/team-a");
        assert_eq!(scope.stack_name(), "catalog");

        let node = scope.node("share").unwrap();
        assert_eq!(node.path(), "catalog/team-a/share");
        assert_eq!(node.logical_id(), "team-a_share");
    }

    #[test]
    fn test_invalid_ids() {
        let scope = Scope::root("catalog");
        for id in ["", "a/b", "1st", "with space", "dot.ted"] {
            let err = scope.node(id).unwrap_err();
            assert!(
                matches!(err, BindingError::InvalidConstructId { .. }),
                "{id:?} should be rejected"
            );
        }
        assert!(scope.child("").is_err());
    }

    #[test]
    fn test_rejection_reasons() {
        let scope = Scope::root("catalog");
        let cases = [
            ("", "must not be empty"),
            ("a/b", "must not contain '/'"),
            ("1st", "must start with a letter or underscore"),
            ("-x", "must start with a letter or underscore"),
            ("dot.ted", "may only contain letters, digits, '_' and '-'"),
            ("with space", "may only contain letters, digits, '_' and '-'"),
        ];
        for (id, expected) in cases {
            match scope.node(id) {
                Err(BindingError::InvalidConstructId { reason, .. }) => {
                    assert_eq!(reason, expected, "{id:?}")
                }
                other => panic!("{id:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_terraform_identifiers_accepted() {
        let scope = Scope::root("catalog");
        for id in ["a", "_private", "team-a", "Tag_2", "x-1_y"] {
            assert!(scope.node(id).is_ok(), "{id:?} should be accepted");
        }
    }

    #[test]
    fn test_same_id_same_node() {
        let scope = Scope::root("catalog");
        assert_eq!(scope.node("tag").unwrap(), scope.node("tag").unwrap());
    }
}
