//! Identifier and variable reference code generation

use super::{ExprResult, TypedExpressionGenerator};
use crate::ir::{Instruction, IrType, Operand};
use jmm_common::error::SymbolKind;
use jmm_common::CompilerError;

/// Resolve a name: locals and parameters first, then unshadowed fields, then
/// class names (the current class or an import)
pub fn generate_identifier(
    gen: &mut TypedExpressionGenerator,
    name: &str,
) -> Result<ExprResult, CompilerError> {
    let declared = gen.method.local(name).or_else(|| gen.method.parameter(name));
    if let Some(symbol) = declared {
        let ty = IrType::from_type(&symbol.symbol_type);
        return Ok(ExprResult::operand(Operand::var(name, ty)));
    }

    if let Some(field) = gen.symbols.visible_field(&gen.method.name, name) {
        let ty = IrType::from_type(&field.symbol_type);
        let get = Instruction::GetField {
            object: gen.this_operand(),
            field: name.to_string(),
            ty,
        };
        return Ok(gen.finish(get, Vec::new(), false));
    }

    if gen.symbols.is_class_reference(name) {
        return Ok(ExprResult::operand(Operand::Class {
            name: name.to_string(),
        }));
    }

    Err(CompilerError::unresolved(SymbolKind::Variable, name, gen.context()))
}

pub fn generate_this(gen: &TypedExpressionGenerator) -> ExprResult {
    ExprResult::operand(gen.this_operand())
}
