//! Assignment statement code generation

use super::TypedStatementGenerator;
use crate::codegen::expressions::ExprContext;
use crate::ir::{Instruction, IrType, Operand};
use crate::typed_ast::TypedExpr;
use jmm_common::error::SymbolKind;
use jmm_common::CompilerError;

/// Lower `target = value;`
///
/// The right-hand side is lowered first. Then the target decides the form:
/// a field becomes `putfield`, a variable a direct `:=`, and an array element
/// an indexed `:=`.
pub fn generate_assignment(
    gen: &mut TypedStatementGenerator,
    target: &TypedExpr,
    value: &TypedExpr,
) -> Result<Vec<Instruction>, CompilerError> {
    match target.unparenthesized() {
        TypedExpr::Identifier { name, .. } => {
            let method = gen.method;
            let symbols = gen.symbols;
            let declared = method.local(name).or_else(|| method.parameter(name));

            if let Some(symbol) = declared {
                let ty = IrType::from_type(&symbol.symbol_type);
                let mut expr_gen = gen.create_expression_generator();
                let rhs = expr_gen.generate(value, ExprContext::AssignRhs)?;

                let mut instructions = rhs.computation;
                instructions.push(Instruction::Assign {
                    dest: Operand::var(name.as_str(), ty.clone()),
                    ty,
                    rhs: Box::new(rhs.value),
                });
                return Ok(instructions);
            }

            if let Some(field) = symbols.visible_field(&method.name, name) {
                let mut expr_gen = gen.create_expression_generator();
                let (rhs, mut instructions) = expr_gen.generate_operand(value)?;
                instructions.push(Instruction::PutField {
                    object: expr_gen.this_operand(),
                    field: name.clone(),
                    ty: IrType::from_type(&field.symbol_type),
                    value: rhs,
                });
                return Ok(instructions);
            }

            Err(CompilerError::unresolved(
                SymbolKind::Variable,
                name.as_str(),
                format!("method '{}'", method.name),
            ))
        }

        TypedExpr::ArrayAccess { array, index, expr_type } => {
            let mut expr_gen = gen.create_expression_generator();
            let rhs = expr_gen.generate(value, ExprContext::AssignRhs)?;
            let (base, base_computation) = expr_gen.generate_operand(array)?;
            let (index, index_computation) = expr_gen.generate_operand(index)?;

            let ty = IrType::from_type(expr_type);
            let dest = match base.variable_name() {
                Some(array_name) => Operand::ArrayElement {
                    array: array_name.to_string(),
                    index: Box::new(index),
                    ty: ty.clone(),
                },
                None => {
                    return Err(CompilerError::unsupported(format!(
                        "assignment into element of {base}"
                    )))
                }
            };

            let mut instructions = rhs.computation;
            instructions.extend(base_computation);
            instructions.extend(index_computation);
            instructions.push(Instruction::Assign {
                dest,
                ty,
                rhs: Box::new(rhs.value),
            });
            Ok(instructions)
        }

        other => Err(CompilerError::unsupported(format!(
            "assignment to {}",
            other.kind_name()
        ))),
    }
}
