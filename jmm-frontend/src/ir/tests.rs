//! Unit tests for the IR module

use super::*;
use jmm_common::Type;
use pretty_assertions::assert_eq;

#[test]
fn test_ir_types() {
    assert_eq!(IrType::Int32.to_string(), ".i32");
    assert_eq!(IrType::Boolean.to_string(), ".bool");
    assert_eq!(IrType::Void.to_string(), ".V");
    assert_eq!(IrType::int_array().to_string(), ".array.i32");
    assert_eq!(IrType::Array(Box::new(IrType::String)).to_string(), ".array.String");
    assert_eq!(IrType::from_type(&Type::object("Foo")), IrType::Object("Foo".to_string()));
    assert_eq!(IrType::from_type(&Type::int_array()), IrType::int_array());
}

#[test]
fn test_operands() {
    let index = Operand::var("i", IrType::Int32);
    let element = Operand::ArrayElement {
        array: "a".to_string(),
        index: Box::new(index),
        ty: IrType::Int32,
    };

    assert_eq!(Operand::int(42).to_string(), "42.i32");
    assert_eq!(Operand::boolean(true).to_string(), "1.bool");
    assert_eq!(element.to_string(), "a[i.i32].i32");
    assert_eq!(element.ty(), IrType::Int32);
    assert_eq!(
        Operand::This { ty: IrType::Object("Foo".to_string()) }.to_string(),
        "this.Foo"
    );
}

#[test]
fn test_instruction_text() {
    let assign = Instruction::Assign {
        dest: Operand::var("tmp0", IrType::Int32),
        ty: IrType::Int32,
        rhs: Box::new(Instruction::BinaryOp {
            op: IrBinaryOp::Add,
            lhs: Operand::var("a", IrType::Int32),
            rhs: Operand::int(1),
            ty: IrType::Int32,
        }),
    };
    assert_eq!(assign.to_string(), "tmp0.i32 :=.i32 a.i32 +.i32 1.i32");

    let branch = Instruction::Branch {
        condition: Condition::Compare {
            op: IrBinaryOp::Lt,
            lhs: Operand::var("i", IrType::Int32),
            rhs: Operand::int(10),
        },
        target: Label::new(LabelKind::WhileBody, 2),
    };
    assert_eq!(branch.to_string(), "if (i.i32 <.bool 10.i32) goto whilebody_2");
    assert_eq!(Instruction::Label(Label::new(LabelKind::EndIf, 0)).to_string(), "endif_0:");
}

#[test]
fn test_call_text() {
    let call = Instruction::Call {
        kind: CallKind::InvokeStatic,
        receiver: Operand::Class { name: "io".to_string() },
        method: Some("println".to_string()),
        arguments: vec![Operand::var("x", IrType::Int32)],
        return_type: IrType::Void,
    };
    assert_eq!(call.to_string(), "invokestatic(io, \"println\", x.i32).V");

    let new_array = Instruction::Call {
        kind: CallKind::New,
        receiver: Operand::Class { name: "array".to_string() },
        method: None,
        arguments: vec![Operand::int(3)],
        return_type: IrType::int_array(),
    };
    assert_eq!(new_array.to_string(), "new(array, 3.i32).array.i32");

    let length = Instruction::Call {
        kind: CallKind::ArrayLength,
        receiver: Operand::var("a", IrType::int_array()),
        method: None,
        arguments: vec![],
        return_type: IrType::Int32,
    };
    assert_eq!(length.to_string(), "arraylength(a.array.i32).i32");
}

#[test]
fn test_method_display() {
    let mut method = Method::new("foo", IrType::Int32);
    method.add_parameter("a", IrType::Int32);
    method.body.push(Instruction::Return {
        value: Some(Operand::var("a", IrType::Int32)),
        ty: IrType::Int32,
    });

    assert!(method.ends_with_return());
    assert_eq!(
        method.to_string(),
        ".method public foo(a.i32).i32 {\n        ret.i32 a.i32;\n}"
    );
}

#[test]
fn test_class_unit_display() {
    let mut unit = ClassUnit::new("Foo");
    unit.imports.push("io".to_string());
    unit.add_field("x", IrType::Int32);

    let mut main = Method::new("main", IrType::Void);
    main.is_static = true;
    main.add_parameter("args", IrType::Array(Box::new(IrType::String)));
    main.body.push(Instruction::Return { value: None, ty: IrType::Void });
    unit.add_method(main);

    let expected = "\
import io;

Foo {
    .field public x.i32;

    .construct Foo().V {
        invokespecial(this, \"<init>\").V;
    }

    .method public static main(args.array.String).V {
            ret.V;
    }
}";
    assert_eq!(unit.to_string(), expected);
    assert!(unit.get_method("main").is_some());
}
