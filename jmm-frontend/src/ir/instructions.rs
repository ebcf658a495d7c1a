//! IR Instructions
//!
//! Defines all instruction types available in the IR.
//!
//! An `Instruction` plays two roles: at statement level it is one line of a
//! method body, and as the `rhs` of an `Assign` it is the expression whose
//! value is stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::ir::{IrBinaryOp, IrType, IrUnaryOp, Operand};

/// The four label families; they share one counter per compilation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    IfBody,
    EndIf,
    WhileBody,
    EndWhile,
}

/// A branch target, printed as `ifbody_3`, `endwhile_7`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub kind: LabelKind,
    pub id: u32,
}

impl Label {
    pub fn new(kind: LabelKind, id: u32) -> Self {
        Self { kind, id }
    }
}

/// Invocation flavour of a call instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallKind {
    /// Object or array allocation
    New,
    /// Constructor invocation
    InvokeSpecial,
    InvokeVirtual,
    InvokeStatic,
    ArrayLength,
}

/// Condition of a conditional branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Branch when the boolean operand is true
    Single(Operand),
    /// Branch when `lhs op rhs` holds
    Compare {
        op: IrBinaryOp,
        lhs: Operand,
        rhs: Operand,
    },
}

/// IR Instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Assignment: dest :=.ty rhs
    Assign {
        dest: Operand,
        ty: IrType,
        rhs: Box<Instruction>,
    },

    /// A bare operand used as a value
    SingleOp(Operand),

    /// Binary operation: lhs op.ty rhs
    BinaryOp {
        op: IrBinaryOp,
        lhs: Operand,
        rhs: Operand,
        ty: IrType,
    },

    /// Unary operation: op.ty operand
    UnaryOp {
        op: IrUnaryOp,
        operand: Operand,
        ty: IrType,
    },

    /// Return from method, `value` is absent for void methods
    Return {
        value: Option<Operand>,
        ty: IrType,
    },

    /// Read an instance field: getfield(object, field.ty).ty
    GetField {
        object: Operand,
        field: String,
        ty: IrType,
    },

    /// Write an instance field: putfield(object, field.ty, value).V
    PutField {
        object: Operand,
        field: String,
        ty: IrType,
        value: Operand,
    },

    /// Allocation, invocation or `arraylength`
    ///
    /// Array allocation is a `New` call whose return type is an array; the
    /// size is then the single argument.
    Call {
        kind: CallKind,
        receiver: Operand,
        method: Option<String>,
        arguments: Vec<Operand>,
        return_type: IrType,
    },

    /// Conditional branch: if (condition) goto target
    Branch {
        condition: Condition,
        target: Label,
    },

    /// Unconditional branch
    Goto(Label),

    /// Label definition (pseudo-instruction)
    Label(Label),
}

impl Instruction {
    /// Type of the value this instruction yields when used as an expression
    pub fn value_type(&self) -> IrType {
        match self {
            Instruction::Assign { ty, .. }
            | Instruction::BinaryOp { ty, .. }
            | Instruction::UnaryOp { ty, .. }
            | Instruction::GetField { ty, .. } => ty.clone(),
            Instruction::SingleOp(operand) => operand.ty(),
            Instruction::Call { return_type, .. } => return_type.clone(),
            Instruction::Return { .. }
            | Instruction::PutField { .. }
            | Instruction::Branch { .. }
            | Instruction::Goto(_)
            | Instruction::Label(_) => IrType::Void,
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::IfBody => write!(f, "ifbody"),
            LabelKind::EndIf => write!(f, "endif"),
            LabelKind::WhileBody => write!(f, "whilebody"),
            LabelKind::EndWhile => write!(f, "endwhile"),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.id)
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallKind::New => write!(f, "new"),
            CallKind::InvokeSpecial => write!(f, "invokespecial"),
            CallKind::InvokeVirtual => write!(f, "invokevirtual"),
            CallKind::InvokeStatic => write!(f, "invokestatic"),
            CallKind::ArrayLength => write!(f, "arraylength"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Single(operand) => write!(f, "{operand}"),
            Condition::Compare { op, lhs, rhs } => write!(f, "{lhs} {op}.bool {rhs}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Assign { dest, ty, rhs } => write!(f, "{dest} :={ty} {rhs}"),
            Instruction::SingleOp(operand) => write!(f, "{operand}"),
            Instruction::BinaryOp { op, lhs, rhs, ty } => write!(f, "{lhs} {op}{ty} {rhs}"),
            Instruction::UnaryOp { op, operand, ty } => write!(f, "{op}{ty} {operand}"),
            Instruction::Return { value: Some(value), ty } => write!(f, "ret{ty} {value}"),
            Instruction::Return { value: None, ty } => write!(f, "ret{ty}"),
            Instruction::GetField { object, field, ty } => {
                write!(f, "getfield({object}, {field}{ty}){ty}")
            }
            Instruction::PutField { object, field, ty, value } => {
                write!(f, "putfield({object}, {field}{ty}, {value}).V")
            }
            Instruction::Call { kind, receiver, method, arguments, return_type } => {
                match kind {
                    CallKind::New if return_type.is_array() => write!(f, "new(array")?,
                    CallKind::New | CallKind::ArrayLength => write!(f, "{kind}({receiver}")?,
                    CallKind::InvokeSpecial | CallKind::InvokeVirtual | CallKind::InvokeStatic => {
                        write!(f, "{kind}({receiver}, \"{}\"", method.as_deref().unwrap_or_default())?
                    }
                }
                for argument in arguments {
                    write!(f, ", {argument}")?;
                }
                write!(f, "){return_type}")
            }
            Instruction::Branch { condition, target } => write!(f, "if ({condition}) goto {target}"),
            Instruction::Goto(target) => write!(f, "goto {target}"),
            Instruction::Label(label) => write!(f, "{label}:"),
        }
    }
}
