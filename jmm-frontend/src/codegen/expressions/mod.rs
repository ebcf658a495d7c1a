//! Expression code generation modules
//!
//! Each expression lowers to an [`ExprResult`]: the instructions that must run
//! first, plus the value they make available. Whether that value may stay a
//! compound instruction (a binary operation, a call, an indexed operand) or
//! must be a plain operand is decided by the [`ExprContext`] the parent asks
//! for.

mod literals;
mod identifiers;
mod binary_ops;
mod logical;
mod arrays;
mod objects;
mod method_calls;

pub use literals::{generate_bool_literal, generate_int_literal};
pub use identifiers::{generate_identifier, generate_this};
pub use binary_ops::generate_binary_operation;
pub use logical::{generate_logical_and, generate_not};
pub use arrays::{generate_array_access, generate_array_init, generate_new_array};
pub use objects::generate_new_object;
pub use method_calls::generate_method_call;

use crate::codegen::IdAllocator;
use crate::ir::{Condition, Instruction, IrType, Operand};
use crate::typed_ast::TypedExpr;
use jmm_common::{CompilerError, MethodSignature, SymbolTable};

/// Where the parent will use the lowered value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprContext {
    /// Plain operand: literal, variable or `this`
    Value,
    /// Right-hand side of `:=`; binary ops, calls and indexed operands fold in
    AssignRhs,
    /// Test of a conditional branch; relational ops fold in
    Condition,
    /// Statement position; a call may stand alone
    Discard,
}

/// Lowered expression: run `computation`, then `value` is valid
#[derive(Debug, Clone, PartialEq)]
pub struct ExprResult {
    pub value: Instruction,
    pub computation: Vec<Instruction>,
}

impl ExprResult {
    pub fn new(value: Instruction, computation: Vec<Instruction>) -> Self {
        Self { value, computation }
    }

    /// A ready operand that needs no instructions
    pub fn operand(operand: Operand) -> Self {
        Self::new(Instruction::SingleOp(operand), Vec::new())
    }

    pub fn as_operand(&self) -> Option<&Operand> {
        match &self.value {
            Instruction::SingleOp(operand) => Some(operand),
            _ => None,
        }
    }
}

/// Typed expression generator context
pub struct TypedExpressionGenerator<'a> {
    pub symbols: &'a SymbolTable,
    pub method: &'a MethodSignature,
    pub allocator: &'a mut IdAllocator,
}

impl<'a> TypedExpressionGenerator<'a> {
    /// Generate IR for a typed expression
    pub fn generate(&mut self, expr: &TypedExpr, ctx: ExprContext) -> Result<ExprResult, CompilerError> {
        match expr {
            TypedExpr::IntLiteral { value } => Ok(literals::generate_int_literal(*value)),

            TypedExpr::BoolLiteral { value } => Ok(literals::generate_bool_literal(*value)),

            TypedExpr::Identifier { name, .. } => identifiers::generate_identifier(self, name),

            TypedExpr::This { .. } => Ok(identifiers::generate_this(self)),

            TypedExpr::Parentheses { inner } => self.generate(inner, ctx),

            TypedExpr::ArrayAccess { array, index, expr_type } => {
                arrays::generate_array_access(self, array, index, expr_type, ctx)
            }

            TypedExpr::NewArray { size } => arrays::generate_new_array(self, size, ctx),

            TypedExpr::ArrayInit { elements } => arrays::generate_array_init(self, elements),

            TypedExpr::NewObject { class_name } => objects::generate_new_object(self, class_name),

            TypedExpr::Not { operand } => logical::generate_not(self, operand, ctx),

            TypedExpr::Binary { op, left, right, expr_type } => {
                binary_ops::generate_binary_operation(self, *op, left, right, expr_type, ctx)
            }

            TypedExpr::MethodCall { receiver, method, arguments, expr_type } => {
                method_calls::generate_method_call(self, receiver, method, arguments, expr_type, ctx)
            }
        }
    }

    /// Lower `expr` down to a plain operand
    pub fn generate_operand(&mut self, expr: &TypedExpr) -> Result<(Operand, Vec<Instruction>), CompilerError> {
        let result = self.generate(expr, ExprContext::Value)?;
        match result.value {
            Instruction::SingleOp(operand) => Ok((operand, result.computation)),
            other => Err(CompilerError::internal(format!(
                "{} did not lower to an operand: {other}",
                expr.kind_name()
            ))),
        }
    }

    /// Lower the test of an `if`, `while` or `&&`
    pub fn generate_condition(&mut self, expr: &TypedExpr) -> Result<(Condition, Vec<Instruction>), CompilerError> {
        let result = self.generate(expr, ExprContext::Condition)?;
        let condition = match result.value {
            Instruction::SingleOp(operand) => Condition::Single(operand),
            Instruction::BinaryOp { op, lhs, rhs, .. } if op.is_comparison() => {
                Condition::Compare { op, lhs, rhs }
            }
            other => {
                return Err(CompilerError::internal(format!(
                    "{} is not a branch condition: {other}",
                    expr.kind_name()
                )))
            }
        };
        Ok((condition, result.computation))
    }

    /// Keep `value` as is when the parent can take it, otherwise store it in
    /// a fresh temporary
    pub(crate) fn finish(
        &mut self,
        value: Instruction,
        mut computation: Vec<Instruction>,
        fold: bool,
    ) -> ExprResult {
        let plain = matches!(&value, Instruction::SingleOp(op) if !matches!(op, Operand::ArrayElement { .. }));
        if fold || plain {
            return ExprResult::new(value, computation);
        }

        let ty = value.value_type();
        let temp = self.new_temp(ty.clone());
        computation.push(Instruction::Assign {
            dest: temp.clone(),
            ty,
            rhs: Box::new(value),
        });
        ExprResult::new(Instruction::SingleOp(temp), computation)
    }

    /// Allocate a temporary whose name no declared variable uses
    pub(crate) fn new_temp(&mut self, ty: IrType) -> Operand {
        loop {
            let name = self.allocator.new_temp_name();
            if !self.is_local(&name) && self.symbols.field(&name).is_none() {
                return Operand::var(name, ty);
            }
        }
    }

    /// Check if `name` is a local or parameter of the current method
    pub(crate) fn is_local(&self, name: &str) -> bool {
        self.method.local(name).is_some() || self.method.parameter(name).is_some()
    }

    pub(crate) fn this_operand(&self) -> Operand {
        Operand::This {
            ty: IrType::Object(self.symbols.class_name.clone()),
        }
    }

    pub(crate) fn context(&self) -> String {
        format!("method '{}'", self.method.name)
    }
}
