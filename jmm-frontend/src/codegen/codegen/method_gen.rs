//! Method code generation

use super::super::statements::TypedStatementGenerator;
use crate::codegen::IdAllocator;
use crate::ir::{Instruction, IrType, Method};
use crate::typed_ast::TypedMethod;
use jmm_common::error::SymbolKind;
use jmm_common::{CompilerError, SymbolTable};
use log::debug;

/// Generate IR for a method
pub fn generate_method(
    symbols: &SymbolTable,
    allocator: &mut IdAllocator,
    method: &TypedMethod,
) -> Result<Method, CompilerError> {
    let signature = symbols.method(&method.name).ok_or_else(|| {
        CompilerError::unresolved(SymbolKind::Method, method.name.as_str(), format!("class '{}'", symbols.class_name))
    })?;

    let return_type = IrType::from_type(&method.return_type);
    let mut lowered = Method::new(method.name.clone(), return_type.clone());
    lowered.is_public = method.is_public;
    lowered.is_static = method.is_static;
    lowered.is_varargs = signature.is_varargs();
    for param in &method.parameters {
        lowered.add_parameter(param.name.clone(), IrType::from_type(&param.symbol_type));
    }

    let mut stmt_gen = TypedStatementGenerator {
        symbols,
        method: signature,
        allocator,
    };
    for stmt in &method.body {
        lowered.body.extend(stmt_gen.generate(stmt)?);
    }

    // Add implicit return if needed
    if return_type.is_void() && !lowered.ends_with_return() {
        lowered.body.push(Instruction::Return {
            value: None,
            ty: IrType::Void,
        });
    }

    debug!("Lowered method '{}': {} instructions", lowered.name, lowered.body.len());
    Ok(lowered)
}
