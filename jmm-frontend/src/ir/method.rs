//! IR Methods
//!
//! A method is a flat, label-addressed instruction list. There are no basic
//! blocks; control flow is expressed with `Branch`, `Goto` and `Label`.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::ir::{Instruction, IrType};

/// Method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: IrType,
}

/// IR Method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub is_public: bool,
    pub is_static: bool,
    /// The last parameter is an `int...` array
    pub is_varargs: bool,
    pub parameters: Vec<Parameter>,
    pub return_type: IrType,
    pub body: Vec<Instruction>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: IrType) -> Self {
        Self {
            name: name.into(),
            is_public: true,
            is_static: false,
            is_varargs: false,
            parameters: Vec::new(),
            return_type,
            body: Vec::new(),
        }
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, ty: IrType) {
        self.parameters.push(Parameter { name: name.into(), ty });
    }

    pub fn parameter_types(&self) -> impl Iterator<Item = &IrType> {
        self.parameters.iter().map(|p| &p.ty)
    }

    /// Check if the body ends in a return
    pub fn ends_with_return(&self) -> bool {
        matches!(self.body.last(), Some(Instruction::Return { .. }))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".method ")?;
        if self.is_public {
            write!(f, "public ")?;
        }
        if self.is_static {
            write!(f, "static ")?;
        }
        if self.is_varargs {
            write!(f, "varargs ")?;
        }
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}{}", param.name, param.ty)?;
        }
        writeln!(f, "){} {{", self.return_type)?;

        for instr in &self.body {
            match instr {
                Instruction::Label(_) => writeln!(f, "    {instr}")?,
                _ => writeln!(f, "        {instr};")?,
            }
        }
        write!(f, "}}")
    }
}
