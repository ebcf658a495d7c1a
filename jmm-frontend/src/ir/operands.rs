//! IR Operand Representations
//!
//! Operands are explicit tagged variants; nothing downstream needs to parse
//! their printed form to recover an array base or index.

use crate::ir::IrType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// IR Operand - the inputs and destinations of IR instructions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// Integer or boolean constant (booleans are 0 / 1)
    Literal { value: i32, ty: IrType },

    /// Named local, parameter or temporary
    Variable { name: String, ty: IrType },

    /// `array[index]`; `ty` is the element type
    ArrayElement {
        array: String,
        index: Box<Operand>,
        ty: IrType,
    },

    /// The receiver of an instance method
    This { ty: IrType },

    /// A class name used as the target of a static call or `new`
    Class { name: String },
}

impl Operand {
    pub fn int(value: i32) -> Self {
        Operand::Literal {
            value,
            ty: IrType::Int32,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Operand::Literal {
            value: i32::from(value),
            ty: IrType::Boolean,
        }
    }

    pub fn var(name: impl Into<String>, ty: IrType) -> Self {
        Operand::Variable {
            name: name.into(),
            ty,
        }
    }

    /// Get the type of the value this operand denotes
    pub fn ty(&self) -> IrType {
        match self {
            Operand::Literal { ty, .. }
            | Operand::Variable { ty, .. }
            | Operand::ArrayElement { ty, .. }
            | Operand::This { ty } => ty.clone(),
            Operand::Class { name } => IrType::Object(name.clone()),
        }
    }

    /// Name of the variable this operand reads, if it reads one
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Operand::Variable { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal { value, ty } => write!(f, "{value}{ty}"),
            Operand::Variable { name, ty } => write!(f, "{name}{ty}"),
            Operand::ArrayElement { array, index, ty } => write!(f, "{array}[{index}]{ty}"),
            Operand::This { ty } => write!(f, "this{ty}"),
            Operand::Class { name } => write!(f, "{name}"),
        }
    }
}
