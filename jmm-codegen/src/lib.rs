//! J-- Compiler Backend - JVM Code Generation
//!
//! This crate holds the target side of bytecode emission:
//!
//! - The JVM instruction subset and its Jasmin mnemonics
//! - Constant and local-slot instruction selection
//! - Per-instruction operand stack effects and max-stack computation
//! - Method block text emission

pub mod asm;
pub mod select;
pub mod stack;
pub mod emit;

pub use asm::{Comparison, FieldRef, JvmInst, MethodRef, SlotKind};
pub use select::{load, push_int, store};
pub use stack::{compute_max_stack, StackTracker, StackUsage};
pub use emit::{emit_instructions, MethodBlock};
