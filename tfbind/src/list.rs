//! Index-based references into repeated nested blocks.
//!
//! A [`ComplexList`] points at a list (or set) attribute of a construct and
//! hands out one typed item reference per index. Item references only render
//! interpolation tokens; the list itself is never materialized.
//!
//! Lists built from configured input know their length and reject indices
//! past the end. Computed lists are only known after apply, so any index is
//! accepted there.

use std::marker::PhantomData;

use crate::error::{BindingError, Result};

/// Reference to one element of a list attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListItemRef {
    list_expression: String,
    index: usize,
    from_set: bool,
}

impl ListItemRef {
    /// Creates a reference to `list_expression[index]`.
    ///
    /// When `from_set` is true the expression is wrapped in `tolist()` so the
    /// element can be addressed by index.
    pub fn new(list_expression: impl Into<String>, index: usize, from_set: bool) -> Self {
        Self {
            list_expression: list_expression.into(),
            index,
            from_set,
        }
    }

    /// Index of the element in its list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Terraform expression addressing the element.
    pub fn expression(&self) -> String {
        if self.from_set {
            format!("tolist({})[{}]", self.list_expression, self.index)
        } else {
            format!("{}[{}]", self.list_expression, self.index)
        }
    }

    /// Interpolation token for one attribute of the element.
    pub fn interpolation_for_attribute(&self, attribute: &str) -> String {
        format!("${{{}.{}}}", self.expression(), attribute)
    }

    /// Reference to a computed list nested inside the element.
    pub fn list<R: From<ListItemRef>>(&self, attribute: &str, wraps_set: bool) -> ComplexList<R> {
        ComplexList::new(self.expression(), attribute, wraps_set)
    }
}

/// Typed reference to a list attribute of a construct or list element.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexList<R> {
    parent_expression: String,
    attribute: String,
    wraps_set: bool,
    len: Option<usize>,
    _item: PhantomData<fn() -> R>,
}

impl<R: From<ListItemRef>> ComplexList<R> {
    /// Creates a reference to a list whose length is unknown.
    pub fn new(parent_expression: impl Into<String>, attribute: &str, wraps_set: bool) -> Self {
        Self {
            parent_expression: parent_expression.into(),
            attribute: attribute.to_string(),
            wraps_set,
            len: None,
            _item: PhantomData,
        }
    }

    /// Records the number of configured elements, enabling bounds checks.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);
        self
    }

    /// Number of configured elements, if known.
    pub fn len(&self) -> Option<usize> {
        self.len
    }

    /// Whether the list is known to be empty.
    pub fn is_empty(&self) -> bool {
        self.len == Some(0)
    }

    /// Terraform expression addressing the whole list.
    pub fn expression(&self) -> String {
        format!("{}.{}", self.parent_expression, self.attribute)
    }

    /// Interpolation token for the whole list.
    pub fn to_interpolation(&self) -> String {
        format!("${{{}}}", self.expression())
    }

    /// Returns the item reference at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::IndexOutOfRange`] when the length is known and
    /// `index` is past the end.
    pub fn get(&self, index: usize) -> Result<R> {
        if let Some(len) = self.len {
            if index >= len {
                return Err(BindingError::IndexOutOfRange {
                    attribute: self.attribute.clone(),
                    index,
                    len,
                });
            }
        }
        Ok(R::from(ListItemRef::new(self.expression(), index, self.wraps_set)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct OutputRef(ListItemRef);

    impl From<ListItemRef> for OutputRef {
        fn from(item: ListItemRef) -> Self {
            Self(item)
        }
    }

    impl OutputRef {
        fn key(&self) -> String {
            self.0.interpolation_for_attribute("key")
        }

        fn nested(&self) -> ComplexList<OutputRef> {
            self.0.list("nested", false)
        }
    }

    #[test]
    fn test_computed_list_accepts_any_index() {
        let list: ComplexList<OutputRef> = ComplexList::new(
            "aws_servicecatalog_provisioned_product.app",
            "outputs",
            false,
        );
        assert_eq!(list.len(), None);

        let item = list.get(42).unwrap();
        assert_eq!(
            item.key(),
            "${aws_servicecatalog_provisioned_product.app.outputs[42].key}"
        );
    }

    #[test]
    fn test_known_length_is_bounds_checked() {
        let list: ComplexList<OutputRef> =
            ComplexList::new("aws_thing.main", "params", false).with_len(2);
        assert!(list.get(1).is_ok());

        match list.get(2) {
            Err(BindingError::IndexOutOfRange {
                attribute,
                index,
                len,
            }) => {
                assert_eq!(attribute, "params");
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let empty: ComplexList<OutputRef> =
            ComplexList::new("aws_thing.main", "params", false).with_len(0);
        assert!(empty.is_empty());
        assert!(empty.get(0).is_err());
    }

    #[test]
    fn test_get_is_structurally_stable() {
        let list: ComplexList<OutputRef> = ComplexList::new("aws_thing.main", "params", false);
        assert_eq!(list.get(3).unwrap(), list.get(3).unwrap());
        assert_ne!(list.get(3).unwrap(), list.get(4).unwrap());
    }

    #[test]
    fn test_set_wrapping_and_nesting() {
        let list: ComplexList<OutputRef> = ComplexList::new("data.aws_x.main", "items", true);
        assert_eq!(list.to_interpolation(), "${data.aws_x.main.items}");

        let item = list.get(0).unwrap();
        assert_eq!(item.0.expression(), "tolist(data.aws_x.main.items)[0]");

        let nested = item.nested().get(1).unwrap();
        assert_eq!(
            nested.key(),
            "${tolist(data.aws_x.main.items)[0].nested[1].key}"
        );
    }
}
