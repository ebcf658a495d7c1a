//! Literal expression code generation

use super::ExprResult;
use crate::ir::Operand;

pub fn generate_int_literal(value: i32) -> ExprResult {
    ExprResult::operand(Operand::int(value))
}

/// Booleans are carried as `0.bool` / `1.bool`
pub fn generate_bool_literal(value: bool) -> ExprResult {
    ExprResult::operand(Operand::boolean(value))
}
