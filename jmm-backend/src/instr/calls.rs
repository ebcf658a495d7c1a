//! Call instruction lowering
//!
//! Covers allocation (`new`), `arraylength` and the three invocation kinds.
//! Whether the call leaves a value on the stack follows from its descriptor.

use super::{load_operand, MethodEmitter};
use jmm_codegen::JvmInst;
use jmm_common::CompilerError;
use jmm_frontend::ir::{CallKind, Instruction, IrType, Operand};
use log::trace;

/// A call in statement position; a returned value is popped
pub fn lower_call_statement(em: &mut MethodEmitter, instr: &Instruction) -> Result<Vec<JvmInst>, CompilerError> {
    let (mut insts, pushes) = lower_call(em, instr)?;
    if pushes {
        insts.push(JvmInst::Pop);
    }
    Ok(insts)
}

/// A call whose result is used
pub fn lower_call_value(em: &mut MethodEmitter, instr: &Instruction) -> Result<Vec<JvmInst>, CompilerError> {
    let (insts, pushes) = lower_call(em, instr)?;
    if !pushes {
        return Err(CompilerError::unsupported(format!("void call '{instr}' used as a value")));
    }
    Ok(insts)
}

/// Returns the instructions and whether they leave a value on the stack
fn lower_call(em: &mut MethodEmitter, instr: &Instruction) -> Result<(Vec<JvmInst>, bool), CompilerError> {
    let Instruction::Call { kind, receiver, method, arguments, return_type } = instr else {
        return Err(CompilerError::internal(format!("'{instr}' is not a call")));
    };
    trace!("lower_call: {kind} on {receiver}");

    match kind {
        CallKind::New if return_type.is_array() => {
            if return_type.element_type() != Some(&IrType::Int32) {
                return Err(CompilerError::unsupported(format!("allocation of {return_type}")));
            }
            let [size] = arguments.as_slice() else {
                return Err(CompilerError::internal(format!("array allocation '{instr}' needs exactly one size")));
            };
            let mut insts = load_operand(em, size)?;
            insts.push(JvmInst::NewIntArray);
            Ok((insts, true))
        }

        CallKind::New => Ok((vec![JvmInst::New(em.class.class_of(receiver)?)], true)),

        CallKind::ArrayLength => {
            let mut insts = load_operand(em, receiver)?;
            insts.push(JvmInst::Arraylength);
            Ok((insts, true))
        }

        CallKind::InvokeStatic => {
            let class = em.class.class_of(receiver)?;
            let method_ref = em.class.method_ref(class, name_of(instr, method)?, arguments, return_type);
            let mut insts = load_arguments(em, arguments)?;
            let pushes = method_ref.returns_value();
            insts.push(JvmInst::Invokestatic(method_ref));
            Ok((insts, pushes))
        }

        CallKind::InvokeVirtual => {
            let class = em.class.class_of(receiver)?;
            let method_ref = em.class.method_ref(class, name_of(instr, method)?, arguments, return_type);
            let mut insts = load_operand(em, receiver)?;
            insts.extend(load_arguments(em, arguments)?);
            let pushes = method_ref.returns_value();
            insts.push(JvmInst::Invokevirtual(method_ref));
            Ok((insts, pushes))
        }

        CallKind::InvokeSpecial => {
            let name = name_of(instr, method)?;
            let (class, mut insts) = match receiver {
                // the reference left by `new; dup` is still on the stack
                Operand::Variable { name: var, .. } if em.take_pending_init(var) => {
                    (em.class.class_of(receiver)?, Vec::new())
                }
                Operand::This { .. } => (em.class.super_class.clone(), load_operand(em, receiver)?),
                _ => (em.class.class_of(receiver)?, load_operand(em, receiver)?),
            };
            let method_ref = em.class.method_ref(class, name, arguments, return_type);
            insts.extend(load_arguments(em, arguments)?);
            let pushes = method_ref.returns_value();
            insts.push(JvmInst::Invokespecial(method_ref));
            Ok((insts, pushes))
        }
    }
}

fn name_of<'i>(instr: &Instruction, method: &'i Option<String>) -> Result<&'i str, CompilerError> {
    method
        .as_deref()
        .ok_or_else(|| CompilerError::internal(format!("invocation '{instr}' has no method name")))
}

fn load_arguments(em: &MethodEmitter, arguments: &[Operand]) -> Result<Vec<JvmInst>, CompilerError> {
    let mut insts = Vec::new();
    for argument in arguments {
        insts.extend(load_operand(em, argument)?);
    }
    Ok(insts)
}
