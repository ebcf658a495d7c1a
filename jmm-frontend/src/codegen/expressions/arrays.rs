//! Array code generation: indexing, allocation and array literals

use super::{ExprContext, ExprResult, TypedExpressionGenerator};
use crate::ir::{CallKind, Instruction, IrType, Operand};
use crate::typed_ast::TypedExpr;
use jmm_common::{CompilerError, Type};

pub fn generate_array_access(
    gen: &mut TypedExpressionGenerator,
    array: &TypedExpr,
    index: &TypedExpr,
    elem_type: &Type,
    ctx: ExprContext,
) -> Result<ExprResult, CompilerError> {
    let (base, mut computation) = gen.generate_operand(array)?;
    let (index, index_computation) = gen.generate_operand(index)?;
    computation.extend(index_computation);

    let element = element_operand(&base, index, IrType::from_type(elem_type))?;
    Ok(gen.finish(Instruction::SingleOp(element), computation, ctx == ExprContext::AssignRhs))
}

pub fn generate_new_array(
    gen: &mut TypedExpressionGenerator,
    size: &TypedExpr,
    ctx: ExprContext,
) -> Result<ExprResult, CompilerError> {
    let (size, computation) = gen.generate_operand(size)?;
    Ok(gen.finish(new_int_array(size), computation, ctx == ExprContext::AssignRhs))
}

/// `[e1, e2, ...]` becomes a fresh array filled element by element
pub fn generate_array_init(
    gen: &mut TypedExpressionGenerator,
    elements: &[TypedExpr],
) -> Result<ExprResult, CompilerError> {
    let mut values = Vec::with_capacity(elements.len());
    let mut computation = Vec::new();
    for element in elements {
        let (value, element_computation) = gen.generate_operand(element)?;
        computation.extend(element_computation);
        values.push(value);
    }

    let array = gen.new_temp(IrType::int_array());
    computation.extend(fill_int_array(&array, values)?);
    Ok(ExprResult::new(Instruction::SingleOp(array), computation))
}

/// `new(array, size.i32).array.i32`
pub(crate) fn new_int_array(size: Operand) -> Instruction {
    Instruction::Call {
        kind: CallKind::New,
        receiver: Operand::Class {
            name: "array".to_string(),
        },
        method: None,
        arguments: vec![size],
        return_type: IrType::int_array(),
    }
}

/// Allocate `array` with one slot per value and store the values in order
pub(crate) fn fill_int_array(array: &Operand, values: Vec<Operand>) -> Result<Vec<Instruction>, CompilerError> {
    let length = i32::try_from(values.len())
        .map_err(|_| CompilerError::internal("array literal too long"))?;

    let mut instructions = vec![Instruction::Assign {
        dest: array.clone(),
        ty: IrType::int_array(),
        rhs: Box::new(new_int_array(Operand::int(length))),
    }];

    for (position, value) in (0..length).zip(values) {
        instructions.push(Instruction::Assign {
            dest: element_operand(array, Operand::int(position), IrType::Int32)?,
            ty: IrType::Int32,
            rhs: Box::new(Instruction::SingleOp(value)),
        });
    }
    Ok(instructions)
}

/// `base[index]` where `base` must name an array variable
pub(crate) fn element_operand(base: &Operand, index: Operand, ty: IrType) -> Result<Operand, CompilerError> {
    let array = base
        .variable_name()
        .ok_or_else(|| CompilerError::unsupported(format!("indexing a non-variable operand {base}")))?;

    Ok(Operand::ArrayElement {
        array: array.to_string(),
        index: Box::new(index),
        ty,
    })
}
