//! Common types used throughout the compiler
//!
//! This module defines the resolved source-level type and the named symbol
//! that semantic analysis attaches to declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const INT_TYPE_NAME: &str = "int";
pub const BOOLEAN_TYPE_NAME: &str = "boolean";
pub const STRING_TYPE_NAME: &str = "String";
pub const VOID_TYPE_NAME: &str = "void";

/// A resolved source type: a name plus an array flag
///
/// Arrays are single-dimensional; the element is always the scalar named by
/// `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    pub is_array: bool,
}

impl Type {
    pub fn new(name: impl Into<String>, is_array: bool) -> Self {
        Self {
            name: name.into(),
            is_array,
        }
    }

    pub fn int() -> Self {
        Self::new(INT_TYPE_NAME, false)
    }

    pub fn boolean() -> Self {
        Self::new(BOOLEAN_TYPE_NAME, false)
    }

    pub fn string() -> Self {
        Self::new(STRING_TYPE_NAME, false)
    }

    pub fn void() -> Self {
        Self::new(VOID_TYPE_NAME, false)
    }

    pub fn int_array() -> Self {
        Self::new(INT_TYPE_NAME, true)
    }

    pub fn object(class_name: impl Into<String>) -> Self {
        Self::new(class_name, false)
    }

    /// The type of one element of this array type
    pub fn element(&self) -> Type {
        Type::new(self.name.clone(), false)
    }

    pub fn is_void(&self) -> bool {
        self.name == VOID_TYPE_NAME
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array {
            write!(f, "{}[]", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// A named, typed declaration (field, parameter or local)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(rename = "type")]
    pub symbol_type: Type,
    /// Trailing `int...` parameter; `symbol_type` is then `int[]`
    #[serde(default)]
    pub is_varargs: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, symbol_type: Type) -> Self {
        Self {
            name: name.into(),
            symbol_type,
            is_varargs: false,
        }
    }

    pub fn varargs(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol_type: Type::int_array(),
            is_varargs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_equality_is_structural() {
        assert_eq!(Type::int_array(), Type::new("int", true));
        assert_ne!(Type::int(), Type::int_array());
    }

    #[test]
    fn test_type_display() {
        assert_eq!(Type::int_array().to_string(), "int[]");
        assert_eq!(Type::object("Foo").to_string(), "Foo");
    }

    #[test]
    fn test_symbol_json_shape() {
        let symbol: Symbol =
            serde_json::from_str(r#"{"name":"a","type":{"name":"int","is_array":false}}"#).unwrap();
        assert_eq!(symbol, Symbol::new("a", Type::int()));
    }
}
