//! Typed code generation from TypedAST to IR
//!
//! Lowers one typed class into one [`ClassUnit`]. A generator owns the
//! temporary/label allocator of the unit it is lowering and resets it on
//! every call to [`TypedCodeGenerator::generate`].

mod method_gen;

use crate::codegen::{IdAllocator, LoweringOptions};
use crate::ir::{ClassUnit, IrType};
use crate::typed_ast::TypedProgram;
use jmm_common::{CompilerError, SymbolTable};
use log::info;

/// Typed code generator - transforms TypedAST to IR
pub struct TypedCodeGenerator {
    options: LoweringOptions,
    allocator: IdAllocator,
}

impl TypedCodeGenerator {
    /// Create a new typed code generator
    pub fn new(options: LoweringOptions) -> Self {
        Self {
            options,
            allocator: IdAllocator::new(),
        }
    }

    /// Generate the IR unit of a typed program
    pub fn generate(&mut self, program: &TypedProgram, symbols: &SymbolTable) -> Result<ClassUnit, CompilerError> {
        self.allocator.reset();

        let class = &program.class;
        info!("Lowering class '{}' ({} methods)", class.name, class.methods.len());

        let mut unit = ClassUnit::new(class.name.clone());
        unit.super_class = class.super_class.clone();
        unit.imports = symbols.imports.clone();
        unit.has_default_constructor = self.options.emit_default_constructor;

        for field in &class.fields {
            unit.add_field(field.name.clone(), IrType::from_type(&field.symbol_type));
        }

        for method in &class.methods {
            let lowered = method_gen::generate_method(symbols, &mut self.allocator, method)?;
            unit.add_method(lowered);
        }

        Ok(unit)
    }
}

impl Default for TypedCodeGenerator {
    fn default() -> Self {
        Self::new(LoweringOptions::default())
    }
}
