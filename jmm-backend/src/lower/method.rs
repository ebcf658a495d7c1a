//! IR Method Lowering - Converts IR methods to method blocks
//!
//! The body is lowered instruction by instruction into one flat list. Stack
//! limits are computed afterwards over that exact list, so the declared
//! `.limit stack` always describes the code that is emitted.

use crate::context::ClassContext;
use crate::frame::Frame;
use crate::instr::MethodEmitter;
use crate::naming::NameGenerator;
use jmm_codegen::{compute_max_stack, MethodBlock};
use jmm_common::CompilerError;
use jmm_frontend::ir::Method;
use log::debug;

/// Lower one IR method
pub fn lower_method(
    class: &ClassContext,
    method: &Method,
    naming: &mut NameGenerator,
) -> Result<MethodBlock, CompilerError> {
    debug!("Lowering method '{}' ({} IR instructions)", method.name, method.body.len());

    let frame = Frame::build(method)?;
    let mut emitter = MethodEmitter::new(class, method, &frame, naming);

    let mut body = Vec::new();
    for instr in &method.body {
        body.extend(emitter.lower_instruction(instr)?);
    }

    let usage = compute_max_stack(&method.name, &body)?;
    debug!(
        "Method '{}': {} instructions, max stack {}, {} locals",
        method.name,
        body.len(),
        usage.max_depth,
        frame.max_locals()
    );

    Ok(MethodBlock {
        header: method_header(class, method),
        max_stack: usage.max_depth,
        max_locals: frame.max_locals(),
        body,
    })
}

/// `public static varargs name(params)ret`
fn method_header(class: &ClassContext, method: &Method) -> String {
    let mut header = String::new();
    if method.is_public {
        header.push_str("public ");
    }
    if method.is_static {
        header.push_str("static ");
    }
    if method.is_varargs {
        header.push_str("varargs ");
    }

    let params: String = method.parameter_types().map(|ty| class.descriptor(ty)).collect();
    header.push_str(&format!("{}({}){}", method.name, params, class.descriptor(&method.return_type)));
    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::OBJECT_CLASS;
    use jmm_frontend::ir::{ClassUnit, IrType};

    #[test]
    fn test_method_header() {
        let unit = ClassUnit::new("Foo");
        let class = ClassContext::new(&unit, OBJECT_CLASS);

        let mut main = Method::new("main", IrType::Void);
        main.is_static = true;
        main.add_parameter("args", IrType::Array(Box::new(IrType::String)));
        assert_eq!(method_header(&class, &main), "public static main([Ljava/lang/String;)V");

        let mut sum = Method::new("sum", IrType::Int32);
        sum.is_varargs = true;
        sum.add_parameter("first", IrType::Boolean);
        sum.add_parameter("rest", IrType::int_array());
        assert_eq!(method_header(&class, &sum), "public varargs sum(Z[I)I");
    }
}
