//! Operand stack depth accounting
//!
//! One forward walk over the final instruction list of a method. Every jump
//! records the depth its target will be entered with; a label that can only
//! be reached by jumping (it follows a `goto` or a return) resumes from that
//! recorded depth instead of the depth left over by the dead fall-through.

use crate::asm::JvmInst;
use jmm_common::CompilerError;
use log::trace;
use std::collections::HashMap;

/// Result of walking one method body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackUsage {
    pub max_depth: u16,
    /// Depth after the last instruction
    pub final_depth: u16,
}

/// Running operand stack counter
#[derive(Debug, Default)]
pub struct StackTracker {
    depth: i32,
    max_depth: i32,
    reachable: bool,
    entry_depths: HashMap<String, i32>,
}

impl StackTracker {
    pub fn new() -> Self {
        Self {
            reachable: true,
            ..Default::default()
        }
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    /// Account for one instruction, failing if it would pop an empty stack
    pub fn step(&mut self, method: &str, inst: &JvmInst) -> Result<(), CompilerError> {
        if let JvmInst::Label(label) = inst {
            if !self.reachable {
                self.depth = self.entry_depths.get(label).copied().unwrap_or(0);
            }
            self.reachable = true;
            return Ok(());
        }

        if self.depth < inst.stack_required() {
            return Err(CompilerError::StackUnderflow {
                method: method.to_string(),
                instruction: inst.to_string(),
            });
        }

        self.depth += inst.stack_delta();
        self.max_depth = self.max_depth.max(self.depth);
        trace!("{:<40} depth {}", inst.to_string(), self.depth);

        if let Some(target) = inst.branch_target() {
            self.entry_depths.entry(target.to_string()).or_insert(self.depth);
        }
        if inst.is_unconditional() {
            self.reachable = false;
        }
        Ok(())
    }
}

/// Compute the maximum operand stack depth of a method body
pub fn compute_max_stack(method: &str, instructions: &[JvmInst]) -> Result<StackUsage, CompilerError> {
    let mut tracker = StackTracker::new();
    for inst in instructions {
        tracker.step(method, inst)?;
    }

    let to_u16 = |depth: i32| {
        u16::try_from(depth).map_err(|_| CompilerError::internal(format!("stack depth {depth} out of range in '{method}'")))
    };
    Ok(StackUsage {
        max_depth: to_u16(tracker.max_depth())?,
        final_depth: to_u16(tracker.depth())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::{Comparison, SlotKind};
    use crate::select::{load, push_int, store};

    #[test]
    fn test_expression_leaves_one_value() {
        // a + b * 2
        let code = vec![
            load(SlotKind::Int, 1),
            load(SlotKind::Int, 2),
            push_int(2),
            JvmInst::Imul,
            JvmInst::Iadd,
        ];
        let usage = compute_max_stack("m", &code).unwrap();
        assert_eq!(usage.max_depth, 3);
        assert_eq!(usage.final_depth, 1);
    }

    #[test]
    fn test_jump_only_label_restores_depth() {
        // a < b materialised as 0/1
        let code = vec![
            load(SlotKind::Int, 1),
            load(SlotKind::Int, 2),
            JvmInst::IfIcmp(Comparison::Lt, "cmp_0_true".to_string()),
            push_int(0),
            JvmInst::Goto("cmp_0_end".to_string()),
            JvmInst::Label("cmp_0_true".to_string()),
            push_int(1),
            JvmInst::Label("cmp_0_end".to_string()),
            store(SlotKind::Int, 3),
        ];
        let usage = compute_max_stack("m", &code).unwrap();
        assert_eq!(usage.max_depth, 2);
        assert_eq!(usage.final_depth, 0);
    }

    #[test]
    fn test_underflow_is_fatal() {
        let code = vec![push_int(1), JvmInst::Iadd];
        let err = compute_max_stack("broken", &code).unwrap_err();
        assert_eq!(
            err,
            CompilerError::StackUnderflow {
                method: "broken".to_string(),
                instruction: "iadd".to_string(),
            }
        );
    }
}
