//! Instruction lowering modules
//!
//! This module contains the implementation for lowering individual IR
//! instructions to JVM instructions. Every IR instruction kind is handled by
//! one arm of [`MethodEmitter::lower_instruction`].

pub mod operands;
pub mod values;
pub mod assign;
pub mod calls;
pub mod fields;
pub mod branch;
pub mod ret;

pub use operands::{array_load, array_store, load_operand, slot_kind};
pub use values::lower_value;

use crate::context::ClassContext;
use crate::frame::Frame;
use crate::naming::NameGenerator;
use jmm_codegen::JvmInst;
use jmm_common::error::SymbolKind;
use jmm_common::CompilerError;
use jmm_frontend::ir::{Instruction, Method};
use log::trace;
use std::collections::HashSet;

/// Per-method emission state
pub struct MethodEmitter<'a> {
    pub class: &'a ClassContext<'a>,
    pub method: &'a Method,
    pub frame: &'a Frame,
    pub naming: &'a mut NameGenerator,
    /// Temporaries holding a `new` object whose duplicated reference is
    /// still on the stack, waiting for its `<init>` call
    pending_init: HashSet<String>,
}

impl<'a> MethodEmitter<'a> {
    pub fn new(
        class: &'a ClassContext<'a>,
        method: &'a Method,
        frame: &'a Frame,
        naming: &'a mut NameGenerator,
    ) -> Self {
        Self {
            class,
            method,
            frame,
            naming,
            pending_init: HashSet::new(),
        }
    }

    /// Lower one statement-level IR instruction
    pub fn lower_instruction(&mut self, instr: &Instruction) -> Result<Vec<JvmInst>, CompilerError> {
        trace!("lower_instruction: {instr}");

        match instr {
            Instruction::Assign { dest, rhs, .. } => assign::lower_assign(self, dest, rhs),

            Instruction::Call { .. } => calls::lower_call_statement(self, instr),

            Instruction::PutField { object, field, ty, value } => {
                fields::lower_putfield(self, object, field, ty, value)
            }

            Instruction::Return { value, ty } => ret::lower_return(self, value.as_ref(), ty),

            Instruction::Branch { condition, target } => branch::lower_branch_cond(self, condition, target),

            Instruction::Goto(target) => Ok(vec![JvmInst::Goto(target.to_string())]),

            Instruction::Label(label) => Ok(vec![JvmInst::Label(label.to_string())]),

            // A bare value in statement position is computed and dropped
            Instruction::SingleOp(_)
            | Instruction::BinaryOp { .. }
            | Instruction::UnaryOp { .. }
            | Instruction::GetField { .. } => {
                let mut insts = values::lower_value(self, instr)?;
                insts.push(JvmInst::Pop);
                Ok(insts)
            }
        }
    }

    /// Slot of a variable in the current frame
    pub fn slot(&self, name: &str) -> Result<u16, CompilerError> {
        self.frame.slot(name).ok_or_else(|| {
            CompilerError::unresolved(SymbolKind::Variable, name, format!("method '{}'", self.method.name))
        })
    }

    pub(crate) fn mark_pending_init(&mut self, name: &str) {
        self.pending_init.insert(name.to_string());
    }

    /// Consume the pending mark of `name`, if any
    pub(crate) fn take_pending_init(&mut self, name: &str) -> bool {
        self.pending_init.remove(name)
    }
}
