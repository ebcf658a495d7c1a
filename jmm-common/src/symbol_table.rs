//! Symbol table handed over by semantic analysis
//!
//! Both code generation stages only read from it.

use crate::types::{Symbol, Type};
use serde::{Deserialize, Serialize};

/// Everything the code generator needs to know about one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<Symbol>,
    pub locals: Vec<Symbol>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

fn default_public() -> bool {
    true
}

impl MethodSignature {
    /// Check if the last parameter is `int...`
    pub fn is_varargs(&self) -> bool {
        self.parameters.last().is_some_and(|p| p.is_varargs)
    }

    pub fn parameter(&self, name: &str) -> Option<&Symbol> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn local(&self, name: &str) -> Option<&Symbol> {
        self.locals.iter().find(|l| l.name == name)
    }
}

/// Resolved class-level information
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    pub class_name: String,
    pub super_class: Option<String>,
    /// Fully qualified, dot-separated
    pub imports: Vec<String>,
    pub fields: Vec<Symbol>,
    pub methods: Vec<MethodSignature>,
}

impl SymbolTable {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&Symbol> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }

    /// The field `name` refers to inside `method`, unless a local or
    /// parameter of that method hides it
    pub fn visible_field(&self, method: &str, name: &str) -> Option<&Symbol> {
        let shadowed = self
            .method(method)
            .is_some_and(|m| m.local(name).is_some() || m.parameter(name).is_some());
        if shadowed {
            return None;
        }
        self.field(name)
    }

    /// Check if `name` is the current class or the simple name of an import
    pub fn is_class_reference(&self, name: &str) -> bool {
        name == self.class_name || self.imported_class(name).is_some()
    }

    /// Return the full import path whose last segment is `name`
    pub fn imported_class(&self, name: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|import| import.rsplit('.').next() == Some(name))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        let mut table = SymbolTable::new("Foo");
        table.imports = vec!["io".to_string(), "java.util.List".to_string()];
        table.fields = vec![Symbol::new("x", Type::int()), Symbol::new("y", Type::boolean())];
        table.methods = vec![MethodSignature {
            name: "bar".to_string(),
            return_type: Type::int(),
            parameters: vec![Symbol::new("y", Type::int()), Symbol::varargs("rest")],
            locals: vec![Symbol::new("x", Type::int_array())],
            is_static: false,
            is_public: true,
        }];
        table
    }

    #[test]
    fn test_class_reference() {
        let table = table();
        assert!(table.is_class_reference("Foo"));
        assert!(table.is_class_reference("io"));
        assert!(table.is_class_reference("List"));
        assert!(!table.is_class_reference("java"));
        assert_eq!(table.imported_class("List"), Some("java.util.List"));
    }

    #[test]
    fn test_shadowing() {
        let table = table();
        assert_eq!(table.visible_field("bar", "x"), None);
        assert_eq!(table.visible_field("bar", "y"), None);
        assert_eq!(table.visible_field("main", "x"), Some(&Symbol::new("x", Type::int())));
        assert_eq!(table.visible_field("bar", "z"), None);
    }

    #[test]
    fn test_varargs_signature() {
        let table = table();
        assert!(table.method("bar").unwrap().is_varargs());
        assert_eq!(table.method_names(), vec!["bar"]);
    }
}
