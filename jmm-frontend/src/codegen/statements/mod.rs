//! Statement code generation modules

mod assignments;
mod control_flow;
mod jumps;
mod misc;

pub use assignments::generate_assignment;
pub use control_flow::{generate_if, generate_while};
pub use jumps::generate_return;
pub use misc::{generate_block, generate_expression_stmt};

use crate::codegen::IdAllocator;
use crate::ir::Instruction;
use crate::typed_ast::TypedStmt;
use super::expressions::TypedExpressionGenerator;
use jmm_common::{CompilerError, MethodSignature, SymbolTable};

/// Typed statement generator context
pub struct TypedStatementGenerator<'a> {
    pub symbols: &'a SymbolTable,
    pub method: &'a MethodSignature,
    pub allocator: &'a mut IdAllocator,
}

impl<'a> TypedStatementGenerator<'a> {
    /// Generate IR for a typed statement
    pub fn generate(&mut self, stmt: &TypedStmt) -> Result<Vec<Instruction>, CompilerError> {
        match stmt {
            TypedStmt::Block { statements } => misc::generate_block(self, statements),

            TypedStmt::Expression { expr } => misc::generate_expression_stmt(self, expr),

            TypedStmt::Assign { target, value } => assignments::generate_assignment(self, target, value),

            TypedStmt::If { condition, then_stmt, else_stmt } => {
                control_flow::generate_if(self, condition, then_stmt, else_stmt.as_deref())
            }

            TypedStmt::While { condition, body } => control_flow::generate_while(self, condition, body),

            TypedStmt::Return { value } => jumps::generate_return(self, value.as_ref()),
        }
    }

    pub(super) fn create_expression_generator(&mut self) -> TypedExpressionGenerator<'_> {
        TypedExpressionGenerator {
            symbols: self.symbols,
            method: self.method,
            allocator: &mut *self.allocator,
        }
    }
}
