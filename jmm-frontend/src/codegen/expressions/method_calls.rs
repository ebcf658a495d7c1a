//! Method call code generation
//!
//! Handles dispatch selection (static vs virtual), the `length` pseudo-method
//! and packing of trailing varargs into a temporary array.

use super::arrays::fill_int_array;
use super::{ExprContext, ExprResult, TypedExpressionGenerator};
use crate::ir::{CallKind, Instruction, IrType, Operand};
use crate::typed_ast::TypedExpr;
use jmm_common::{CompilerError, Type};
use log::trace;

pub fn generate_method_call(
    gen: &mut TypedExpressionGenerator,
    receiver: &TypedExpr,
    method: &str,
    arguments: &[TypedExpr],
    return_type: &Type,
    ctx: ExprContext,
) -> Result<ExprResult, CompilerError> {
    let receiver_type = receiver.get_type();
    if method == "length" && arguments.is_empty() && receiver_type.is_array {
        let (array, computation) = gen.generate_operand(receiver)?;
        let length = Instruction::Call {
            kind: CallKind::ArrayLength,
            receiver: array,
            method: None,
            arguments: Vec::new(),
            return_type: IrType::Int32,
        };
        return Ok(gen.finish(length, computation, ctx == ExprContext::AssignRhs));
    }

    let (kind, target, mut computation) = match static_target(gen, receiver) {
        Some(class_name) => (
            CallKind::InvokeStatic,
            Operand::Class {
                name: class_name.to_string(),
            },
            Vec::new(),
        ),
        None => {
            let (object, computation) = gen.generate_operand(receiver)?;
            (CallKind::InvokeVirtual, object, computation)
        }
    };

    // Only methods of the class being compiled have a known signature
    let targets_self = match &target {
        Operand::Class { name } => *name == gen.symbols.class_name,
        _ => !receiver_type.is_array && receiver_type.name == gen.symbols.class_name,
    };
    let fixed_arity = if targets_self {
        gen.symbols
            .method(method)
            .filter(|signature| signature.is_varargs())
            .map(|signature| signature.parameters.len() - 1)
    } else {
        None
    };

    let operands = generate_arguments(gen, arguments, fixed_arity, &mut computation)?;
    trace!("{kind} {target}.{method} with {} argument(s)", operands.len());

    let return_type = IrType::from_type(return_type);
    let call = Instruction::Call {
        kind,
        receiver: target,
        method: Some(method.to_string()),
        arguments: operands,
        return_type: return_type.clone(),
    };

    match ctx {
        ExprContext::AssignRhs | ExprContext::Discard => Ok(ExprResult::new(call, computation)),
        ExprContext::Value | ExprContext::Condition if return_type.is_void() => Err(
            CompilerError::unsupported(format!("void call to '{method}' used as a value")),
        ),
        ExprContext::Value | ExprContext::Condition => Ok(gen.finish(call, computation, false)),
    }
}

/// A receiver that names the current class or an import (and is not shadowed
/// by a variable) selects static dispatch
fn static_target<'e>(gen: &TypedExpressionGenerator, receiver: &'e TypedExpr) -> Option<&'e str> {
    match receiver.unparenthesized() {
        TypedExpr::Identifier { name, .. }
            if !gen.is_local(name)
                && gen.symbols.field(name).is_none()
                && gen.symbols.is_class_reference(name) =>
        {
            Some(name)
        }
        _ => None,
    }
}

/// Lower call arguments left to right. With `fixed_arity` set, everything
/// past the fixed parameters is packed into one `int[]` unless it already is
/// a single array argument.
fn generate_arguments(
    gen: &mut TypedExpressionGenerator,
    arguments: &[TypedExpr],
    fixed_arity: Option<usize>,
    computation: &mut Vec<Instruction>,
) -> Result<Vec<Operand>, CompilerError> {
    let split = fixed_arity.unwrap_or(arguments.len()).min(arguments.len());
    let (fixed, rest) = arguments.split_at(split);

    let mut operands = Vec::with_capacity(split + 1);
    for argument in fixed {
        let (operand, argument_computation) = gen.generate_operand(argument)?;
        computation.extend(argument_computation);
        operands.push(operand);
    }

    if fixed_arity.is_none() {
        return Ok(operands);
    }

    if let [single] = rest {
        if single.get_type().is_array {
            let (operand, argument_computation) = gen.generate_operand(single)?;
            computation.extend(argument_computation);
            operands.push(operand);
            return Ok(operands);
        }
    }

    let mut values = Vec::with_capacity(rest.len());
    for argument in rest {
        let (operand, argument_computation) = gen.generate_operand(argument)?;
        computation.extend(argument_computation);
        values.push(operand);
    }

    let packed = gen.new_temp(IrType::int_array());
    computation.extend(fill_int_array(&packed, values)?);
    operands.push(packed);
    Ok(operands)
}
