//! Object construction code generation

use super::{ExprResult, TypedExpressionGenerator};
use crate::ir::{CallKind, Instruction, IrType, Operand};
use jmm_common::CompilerError;

/// `new C()` always goes through a temporary:
///
/// ```text
/// tmp.C :=.C new(C).C;
/// invokespecial(tmp.C, "<init>").V;
/// ```
pub fn generate_new_object(
    gen: &mut TypedExpressionGenerator,
    class_name: &str,
) -> Result<ExprResult, CompilerError> {
    let ty = IrType::Object(class_name.to_string());
    let object = gen.new_temp(ty.clone());

    let allocate = Instruction::Assign {
        dest: object.clone(),
        ty: ty.clone(),
        rhs: Box::new(Instruction::Call {
            kind: CallKind::New,
            receiver: Operand::Class {
                name: class_name.to_string(),
            },
            method: None,
            arguments: Vec::new(),
            return_type: ty,
        }),
    };
    let construct = Instruction::Call {
        kind: CallKind::InvokeSpecial,
        receiver: object.clone(),
        method: Some("<init>".to_string()),
        arguments: Vec::new(),
        return_type: IrType::Void,
    };

    Ok(ExprResult::new(Instruction::SingleOp(object), vec![allocate, construct]))
}
