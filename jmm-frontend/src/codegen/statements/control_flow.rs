//! Control flow statement code generation (if, while)

use super::TypedStatementGenerator;
use crate::ir::Instruction;
use crate::typed_ast::{TypedExpr, TypedStmt};
use jmm_common::CompilerError;
use log::debug;

/// Lower an if statement. The false branch is placed inline and the true
/// branch after it:
///
/// ```text
///     <condition>
///     if (cond) goto ifbody_N;
///     <else>
///     goto endif_N;
/// ifbody_N:
///     <then>
/// endif_N:
/// ```
pub fn generate_if(
    gen: &mut TypedStatementGenerator,
    condition: &TypedExpr,
    then_stmt: &TypedStmt,
    else_stmt: Option<&TypedStmt>,
) -> Result<Vec<Instruction>, CompilerError> {
    let mut expr_gen = gen.create_expression_generator();
    let (cond, mut instructions) = expr_gen.generate_condition(condition)?;

    let (body_label, end_label) = gen.allocator.new_if_labels();
    debug!("if in '{}': {body_label}/{end_label}", gen.method.name);

    instructions.push(Instruction::Branch {
        condition: cond,
        target: body_label,
    });
    if let Some(else_stmt) = else_stmt {
        instructions.extend(gen.generate(else_stmt)?);
    }
    instructions.push(Instruction::Goto(end_label));
    instructions.push(Instruction::Label(body_label));
    instructions.extend(gen.generate(then_stmt)?);
    instructions.push(Instruction::Label(end_label));

    Ok(instructions)
}

/// Lower a while loop. The guard is lowered twice: once on entry and once at
/// the bottom of the body, each copy with its own temporaries.
///
/// ```text
///     <condition>
///     if (cond) goto whilebody_N;
///     goto endwhile_N;
/// whilebody_N:
///     <body>
///     <condition>
///     if (cond) goto whilebody_N;
/// endwhile_N:
/// ```
pub fn generate_while(
    gen: &mut TypedStatementGenerator,
    condition: &TypedExpr,
    body: &TypedStmt,
) -> Result<Vec<Instruction>, CompilerError> {
    let mut expr_gen = gen.create_expression_generator();
    let (entry_cond, mut instructions) = expr_gen.generate_condition(condition)?;

    let (body_label, end_label) = gen.allocator.new_while_labels();
    debug!("while in '{}': {body_label}/{end_label}", gen.method.name);

    instructions.push(Instruction::Branch {
        condition: entry_cond,
        target: body_label,
    });
    instructions.push(Instruction::Goto(end_label));
    instructions.push(Instruction::Label(body_label));
    instructions.extend(gen.generate(body)?);

    let mut expr_gen = gen.create_expression_generator();
    let (loop_cond, guard) = expr_gen.generate_condition(condition)?;
    instructions.extend(guard);
    instructions.push(Instruction::Branch {
        condition: loop_cond,
        target: body_label,
    });
    instructions.push(Instruction::Label(end_label));

    Ok(instructions)
}
