//! IR Compilation Unit
//!
//! One class per unit: its imports, superclass, fields and methods.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::ir::{IrType, Method};

/// Instance field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: IrType,
}

/// IR Class - the top-level container handed to bytecode emission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassUnit {
    pub name: String,
    pub super_class: Option<String>,
    /// Fully qualified, dot-separated import paths
    pub imports: Vec<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    /// Print a `.construct` with a bare `invokespecial(this, "<init>")`
    pub has_default_constructor: bool,
}

impl ClassUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_class: None,
            imports: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            has_default_constructor: true,
        }
    }

    pub fn add_field(&mut self, name: impl Into<String>, ty: IrType) {
        self.fields.push(Field { name: name.into(), ty });
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn get_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

impl fmt::Display for ClassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for import in &self.imports {
            writeln!(f, "import {import};")?;
        }
        if !self.imports.is_empty() {
            writeln!(f)?;
        }

        match &self.super_class {
            Some(super_class) => writeln!(f, "{} extends {super_class} {{", self.name)?,
            None => writeln!(f, "{} {{", self.name)?,
        }

        for field in &self.fields {
            writeln!(f, "    .field public {}{};", field.name, field.ty)?;
        }

        if self.has_default_constructor {
            writeln!(f)?;
            writeln!(f, "    .construct {}().V {{", self.name)?;
            writeln!(f, "        invokespecial(this, \"<init>\").V;")?;
            writeln!(f, "    }}")?;
        }

        for method in &self.methods {
            writeln!(f)?;
            for line in method.to_string().lines() {
                writeln!(f, "    {line}")?;
            }
        }

        write!(f, "}}")
    }
}
