//! Class Lowering - Handles lowering of entire class units
//!
//! Produces the class header, the field declarations, the default
//! constructor and one method block per IR method.

use super::method::lower_method;
use crate::context::ClassContext;
use crate::naming::NameGenerator;
use crate::EmitOptions;
use jmm_codegen::{compute_max_stack, load, JvmInst, MethodBlock, MethodRef, SlotKind};
use jmm_common::CompilerError;
use jmm_frontend::ir::ClassUnit;
use log::{debug, info};

/// Lower a whole class unit to assembly text
pub fn lower_class(unit: &ClassUnit, options: &EmitOptions) -> Result<String, CompilerError> {
    info!("Emitting class '{}' with {} method(s)", unit.name, unit.methods.len());

    let class = ClassContext::new(unit, &options.default_super);
    let mut naming = NameGenerator::new();
    let mut out = String::new();

    out.push_str(&format!(".class public {}\n", class.class_name()));
    out.push_str(&format!(".super {}\n", class.super_class));

    if !unit.fields.is_empty() {
        out.push('\n');
        for field in &unit.fields {
            out.push_str(&format!(".field public '{}' {}\n", field.name, class.descriptor(&field.ty)));
        }
    }

    if unit.has_default_constructor {
        out.push('\n');
        out.push_str("; default constructor\n");
        out.push_str(&default_constructor(&class)?.emit(&options.indent));
    }

    for method in &unit.methods {
        out.push('\n');
        out.push_str(&lower_method(&class, method, &mut naming)?.emit(&options.indent));
    }

    info!("Class '{}' emitted ({} bytes)", unit.name, out.len());
    Ok(out)
}

/// `<init>()V` that only calls the superclass constructor
fn default_constructor(class: &ClassContext) -> Result<MethodBlock, CompilerError> {
    debug!("Default constructor for '{}' calls '{}'", class.class_name(), class.super_class);

    let body = vec![
        load(SlotKind::Reference, 0),
        JvmInst::Invokespecial(MethodRef::new(class.super_class.clone(), "<init>", Vec::new(), "V")),
        JvmInst::Return,
    ];
    let usage = compute_max_stack("<init>", &body)?;

    Ok(MethodBlock {
        header: "public <init>()V".to_string(),
        max_stack: usage.max_depth,
        max_locals: 1,
        body,
    })
}
