//! Method frame descriptor
//!
//! Maps every variable a method touches to a local slot. `this` takes slot 0
//! in instance methods, parameters follow in declaration order, and every
//! other variable gets the next free slot the first time it appears.

use jmm_common::CompilerError;
use jmm_frontend::ir::{Condition, Instruction, Method, Operand};
use log::trace;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    slots: HashMap<String, u16>,
    next_slot: u16,
}

impl Frame {
    /// Build the slot table of a method
    pub fn build(method: &Method) -> Result<Self, CompilerError> {
        let mut frame = Frame {
            slots: HashMap::new(),
            next_slot: 0,
        };

        if !method.is_static {
            frame.next_slot = 1;
        }
        for param in &method.parameters {
            frame.assign(&param.name)?;
        }

        for instr in &method.body {
            let mut names = Vec::new();
            collect_instruction(instr, &mut names);
            for name in names {
                frame.assign(name)?;
            }
        }

        trace!("Frame for '{}': {} slots", method.name, frame.next_slot);
        Ok(frame)
    }

    fn assign(&mut self, name: &str) -> Result<(), CompilerError> {
        if self.slots.contains_key(name) {
            return Ok(());
        }
        self.slots.insert(name.to_string(), self.next_slot);
        self.next_slot = self
            .next_slot
            .checked_add(1)
            .ok_or_else(|| CompilerError::internal("too many local variables"))?;
        Ok(())
    }

    /// Slot of a variable, parameter or temporary
    pub fn slot(&self, name: &str) -> Option<u16> {
        self.slots.get(name).copied()
    }

    /// Value of `.limit locals`
    pub fn max_locals(&self) -> u16 {
        self.next_slot
    }
}

fn collect_operand<'a>(operand: &'a Operand, names: &mut Vec<&'a str>) {
    match operand {
        Operand::Variable { name, .. } => names.push(name),
        Operand::ArrayElement { array, index, .. } => {
            names.push(array);
            collect_operand(index, names);
        }
        Operand::Literal { .. } | Operand::This { .. } | Operand::Class { .. } => {}
    }
}

fn collect_instruction<'a>(instr: &'a Instruction, names: &mut Vec<&'a str>) {
    match instr {
        Instruction::Assign { dest, rhs, .. } => {
            collect_operand(dest, names);
            collect_instruction(rhs, names);
        }
        Instruction::SingleOp(operand) => collect_operand(operand, names),
        Instruction::BinaryOp { lhs, rhs, .. } => {
            collect_operand(lhs, names);
            collect_operand(rhs, names);
        }
        Instruction::UnaryOp { operand, .. } => collect_operand(operand, names),
        Instruction::Return { value, .. } => {
            if let Some(value) = value {
                collect_operand(value, names);
            }
        }
        Instruction::GetField { object, .. } => collect_operand(object, names),
        Instruction::PutField { object, value, .. } => {
            collect_operand(object, names);
            collect_operand(value, names);
        }
        Instruction::Call { receiver, arguments, .. } => {
            collect_operand(receiver, names);
            for argument in arguments {
                collect_operand(argument, names);
            }
        }
        Instruction::Branch { condition, .. } => match condition {
            Condition::Single(operand) => collect_operand(operand, names),
            Condition::Compare { lhs, rhs, .. } => {
                collect_operand(lhs, names);
                collect_operand(rhs, names);
            }
        },
        Instruction::Goto(_) | Instruction::Label(_) => {}
    }
}
