//! IR Type System
//!
//! Scalar types, class references and single-dimensional arrays.

use jmm_common::{Type, BOOLEAN_TYPE_NAME, INT_TYPE_NAME, STRING_TYPE_NAME, VOID_TYPE_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// IR Type system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrType {
    Int32,
    Boolean,
    String,
    Void,
    /// Reference to an instance of the named class
    Object(String),
    /// Array of a scalar element type
    Array(Box<IrType>),
}

impl IrType {
    /// Map a resolved source type onto the IR type system
    pub fn from_type(source: &Type) -> Self {
        let scalar = match source.name.as_str() {
            INT_TYPE_NAME => IrType::Int32,
            BOOLEAN_TYPE_NAME => IrType::Boolean,
            STRING_TYPE_NAME => IrType::String,
            VOID_TYPE_NAME => IrType::Void,
            class_name => IrType::Object(class_name.to_string()),
        };

        if source.is_array {
            IrType::Array(Box::new(scalar))
        } else {
            scalar
        }
    }

    pub fn int_array() -> Self {
        IrType::Array(Box::new(IrType::Int32))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, IrType::Array(_))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, IrType::Void)
    }

    /// Get the element type of an array type
    pub fn element_type(&self) -> Option<&IrType> {
        match self {
            IrType::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for IrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrType::Int32 => write!(f, ".i32"),
            IrType::Boolean => write!(f, ".bool"),
            IrType::String => write!(f, ".String"),
            IrType::Void => write!(f, ".V"),
            IrType::Object(name) => write!(f, ".{name}"),
            IrType::Array(element) => write!(f, ".array{element}"),
        }
    }
}
