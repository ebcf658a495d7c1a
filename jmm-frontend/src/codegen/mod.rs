//! Code generation from TypedAST to IR
//!
//! This module transforms the typed AST handed over by semantic analysis into
//! the three-address IR consumed by bytecode emission.
//!
//! Every lowering function returns its instructions instead of writing into a
//! shared buffer; callers concatenate explicitly.

mod allocator;
pub mod expressions;
pub mod statements;
pub mod codegen;

pub use allocator::IdAllocator;
pub use codegen::TypedCodeGenerator;
pub use expressions::{ExprContext, ExprResult};

/// Stage-1 configuration
#[derive(Debug, Clone)]
pub struct LoweringOptions {
    /// Emit `.construct C().V` ahead of the first method
    pub emit_default_constructor: bool,
}

impl Default for LoweringOptions {
    fn default() -> Self {
        Self {
            emit_default_constructor: true,
        }
    }
}
