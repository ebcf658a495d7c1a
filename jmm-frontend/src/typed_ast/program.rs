//! Typed program and top-level definitions
//!
//! This module defines the top-level structure of a typed compilation unit:
//! one class plus its imports.

use super::statements::TypedStmt;
use jmm_common::{CompilerError, Symbol, Type};
use serde::{Deserialize, Serialize};

/// Typed method definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedMethod {
    pub name: String,
    #[serde(default = "default_public")]
    pub is_public: bool,
    #[serde(default)]
    pub is_static: bool,
    pub return_type: Type,
    pub parameters: Vec<Symbol>,
    #[serde(default)]
    pub locals: Vec<Symbol>,
    pub body: Vec<TypedStmt>,
}

fn default_public() -> bool {
    true
}

/// Typed class declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedClass {
    pub name: String,
    #[serde(default)]
    pub super_class: Option<String>,
    #[serde(default)]
    pub fields: Vec<Symbol>,
    pub methods: Vec<TypedMethod>,
}

/// Typed compilation unit (entire program)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedProgram {
    /// Each import as its dot-separated path segments
    #[serde(default)]
    pub imports: Vec<Vec<String>>,
    pub class: TypedClass,
}

impl TypedProgram {
    /// Read a typed program serialized by the semantic analysis stage
    pub fn from_json(source: &str) -> Result<Self, CompilerError> {
        serde_json::from_str(source)
            .map_err(|e| CompilerError::internal(format!("malformed typed program: {e}")))
    }
}
