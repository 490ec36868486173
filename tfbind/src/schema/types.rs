use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::schema::SchemaError;

/// Terraform attribute type as encoded in the provider schema JSON.
///
/// Primitive types are plain strings (`"string"`), collection types are
/// two-element arrays (`["list", "string"]`), objects carry a map of
/// attribute types and tuples a list of element types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
    Bool,
    /// Any type, decided at runtime.
    Dynamic,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(BTreeMap<String, AttributeType>),
    Tuple(Vec<AttributeType>),
}

impl AttributeType {
    /// Parse a type expression.
    ///
    /// `path` is used in error messages only.
    pub fn from_value(value: &Value, path: &str) -> Result<Self, SchemaError> {
        match value {
            Value::String(s) => match s.as_str() {
                "string" => Ok(AttributeType::String),
                "number" => Ok(AttributeType::Number),
                "bool" => Ok(AttributeType::Bool),
                "dynamic" => Ok(AttributeType::Dynamic),
                other => Err(SchemaError::TypeMismatch {
                    path: path.to_string(),
                    expected: "one of: string, number, bool, dynamic".to_string(),
                    actual: other.to_string(),
                }),
            },
            Value::Array(parts) => {
                let [kind, inner] = parts.as_slice() else {
                    return Err(SchemaError::TypeMismatch {
                        path: path.to_string(),
                        expected: "[kind, element type]".to_string(),
                        actual: format!("{}", value),
                    });
                };
                let kind = kind.as_str().ok_or_else(|| SchemaError::TypeMismatch {
                    path: path.to_string(),
                    expected: "collection kind string".to_string(),
                    actual: format!("{}", kind),
                })?;
                let element_path = format!("{path}.{kind}");
                match kind {
                    "list" => Ok(AttributeType::List(Box::new(Self::from_value(
                        inner,
                        &element_path,
                    )?))),
                    "set" => Ok(AttributeType::Set(Box::new(Self::from_value(
                        inner,
                        &element_path,
                    )?))),
                    "map" => Ok(AttributeType::Map(Box::new(Self::from_value(
                        inner,
                        &element_path,
                    )?))),
                    "object" => {
                        let Value::Object(fields) = inner else {
                            return Err(SchemaError::TypeMismatch {
                                path: element_path,
                                expected: "object of attribute types".to_string(),
                                actual: format!("{}", inner),
                            });
                        };
                        let mut attributes = BTreeMap::new();
                        for (name, ty) in fields {
                            let field_path = format!("{element_path}.{name}");
                            attributes.insert(name.clone(), Self::from_value(ty, &field_path)?);
                        }
                        Ok(AttributeType::Object(attributes))
                    }
                    "tuple" => {
                        let Value::Array(elements) = inner else {
                            return Err(SchemaError::TypeMismatch {
                                path: element_path,
                                expected: "array of element types".to_string(),
                                actual: format!("{}", inner),
                            });
                        };
                        elements
                            .iter()
                            .enumerate()
                            .map(|(i, ty)| Self::from_value(ty, &format!("{element_path}[{i}]")))
                            .collect::<Result<Vec<_>, _>>()
                            .map(AttributeType::Tuple)
                    }
                    other => Err(SchemaError::TypeMismatch {
                        path: path.to_string(),
                        expected: "one of: list, set, map, object, tuple".to_string(),
                        actual: other.to_string(),
                    }),
                }
            }
            _ => Err(SchemaError::TypeMismatch {
                path: path.to_string(),
                expected: "string or array".to_string(),
                actual: format!("{}", value),
            }),
        }
    }

    /// Element type of a list, set or map.
    pub fn element(&self) -> Option<&AttributeType> {
        match self {
            AttributeType::List(inner) | AttributeType::Set(inner) | AttributeType::Map(inner) => {
                Some(inner)
            }
            _ => None,
        }
    }

    /// Object attributes, when this is a list or set of objects.
    pub fn object_list_fields(&self) -> Option<&BTreeMap<String, AttributeType>> {
        match self {
            AttributeType::List(inner) | AttributeType::Set(inner) => match inner.as_ref() {
                AttributeType::Object(fields) => Some(fields),
                _ => None,
            },
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for AttributeType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        AttributeType::from_value(&value, "type").map_err(serde::de::Error::custom)
    }
}
