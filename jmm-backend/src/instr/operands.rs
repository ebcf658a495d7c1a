//! Operand loading
//!
//! Pushes the value an IR operand denotes onto the operand stack.

use super::MethodEmitter;
use jmm_codegen::{load, push_int, JvmInst, SlotKind};
use jmm_common::CompilerError;
use jmm_frontend::ir::{IrType, Operand};

/// Opcode family used to move values of `ty` in and out of slots
pub fn slot_kind(ty: &IrType) -> Result<SlotKind, CompilerError> {
    match ty {
        IrType::Int32 | IrType::Boolean => Ok(SlotKind::Int),
        IrType::String | IrType::Object(_) | IrType::Array(_) => Ok(SlotKind::Reference),
        IrType::Void => Err(CompilerError::unsupported("variable of type void")),
    }
}

/// Element load for an array of `ty`
pub fn array_load(ty: &IrType) -> Result<JvmInst, CompilerError> {
    match ty {
        IrType::Int32 => Ok(JvmInst::Iaload),
        IrType::Boolean => Ok(JvmInst::Baload),
        IrType::String | IrType::Object(_) => Ok(JvmInst::Aaload),
        other => Err(CompilerError::unsupported(format!("array element of type {other}"))),
    }
}

/// Element store for an array of `ty`
pub fn array_store(ty: &IrType) -> Result<JvmInst, CompilerError> {
    match ty {
        IrType::Int32 => Ok(JvmInst::Iastore),
        IrType::Boolean => Ok(JvmInst::Bastore),
        IrType::String | IrType::Object(_) => Ok(JvmInst::Aastore),
        other => Err(CompilerError::unsupported(format!("array element of type {other}"))),
    }
}

/// Push one operand
pub fn load_operand(em: &MethodEmitter, operand: &Operand) -> Result<Vec<JvmInst>, CompilerError> {
    match operand {
        Operand::Literal { value, .. } => Ok(vec![push_int(*value)]),

        Operand::Variable { name, ty } => Ok(vec![load(slot_kind(ty)?, em.slot(name)?)]),

        Operand::ArrayElement { array, index, ty } => {
            let element_load = array_load(ty)?;
            let mut insts = vec![load(SlotKind::Reference, em.slot(array)?)];
            insts.extend(load_operand(em, index)?);
            insts.push(element_load);
            Ok(insts)
        }

        Operand::This { .. } => {
            if em.method.is_static {
                return Err(CompilerError::unsupported(format!(
                    "'this' in static method '{}'",
                    em.method.name
                )));
            }
            Ok(vec![load(SlotKind::Reference, 0)])
        }

        Operand::Class { name } => Err(CompilerError::unsupported(format!("class name '{name}' used as a value"))),
    }
}
