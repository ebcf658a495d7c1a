//! Unit tests for class emission, driven from typed programs

use crate::{generate_jasmin, EmitOptions};
use jmm_common::{CompilerError, Symbol, Type};
use jmm_frontend::typed_ast::{BinaryOp, TypedClass, TypedExpr, TypedMethod, TypedProgram, TypedStmt};
use jmm_frontend::Frontend;
use pretty_assertions::assert_eq;

fn method(name: &str, return_type: Type, parameters: Vec<Symbol>, locals: Vec<Symbol>, body: Vec<TypedStmt>) -> TypedMethod {
    TypedMethod {
        name: name.to_string(),
        is_public: true,
        is_static: false,
        return_type,
        parameters,
        locals,
        body,
    }
}

fn program(super_class: Option<&str>, methods: Vec<TypedMethod>) -> TypedProgram {
    TypedProgram {
        imports: vec![vec!["io".to_string()], vec!["util".to_string(), "Helper".to_string()]],
        class: TypedClass {
            name: "Foo".to_string(),
            super_class: super_class.map(str::to_string),
            fields: Vec::new(),
            methods,
        },
    }
}

fn emit(program: &TypedProgram) -> Result<String, CompilerError> {
    let unit = Frontend::compile_to_ir(program)?;
    generate_jasmin(&unit, &EmitOptions::default())
}

/// Lines of the method block whose header contains `signature`
fn method_lines(asm: &str, signature: &str) -> Vec<String> {
    asm.lines()
        .skip_while(|line| !(line.starts_with(".method") && line.contains(signature)))
        .take_while(|line| *line != ".end method")
        .map(|line| line.trim().to_string())
        .collect()
}

fn int_var(name: &str) -> TypedExpr {
    TypedExpr::ident(name, Type::int())
}

fn this() -> TypedExpr {
    TypedExpr::This {
        expr_type: Type::object("Foo"),
    }
}

#[test]
fn test_class_header_and_default_constructor() {
    let asm = emit(&program(Some("Helper"), vec![])).unwrap();
    assert_eq!(
        asm,
        ".class public Foo\n\
         .super util/Helper\n\
         \n\
         ; default constructor\n\
         .method public <init>()V\n    \
         .limit stack 1\n    \
         .limit locals 1\n    \
         aload_0\n    \
         invokespecial util/Helper/<init>()V\n    \
         return\n\
         .end method\n"
    );
}

#[test]
fn test_expression_stack_limit() {
    // return a + b * 2 - c;
    let expr = TypedExpr::binary(
        BinaryOp::Sub,
        TypedExpr::binary(
            BinaryOp::Add,
            int_var("a"),
            TypedExpr::binary(BinaryOp::Mul, int_var("b"), TypedExpr::int(2)),
        ),
        int_var("c"),
    );
    let p = program(
        None,
        vec![method(
            "calc",
            Type::int(),
            vec![Symbol::new("a", Type::int()), Symbol::new("b", Type::int()), Symbol::new("c", Type::int())],
            vec![],
            vec![TypedStmt::ret(Some(expr))],
        )],
    );
    let asm = emit(&p).unwrap();

    assert_eq!(
        method_lines(&asm, "calc(III)I"),
        vec![
            ".method public calc(III)I",
            ".limit stack 2",
            ".limit locals 7",
            "iload_2",
            "iconst_2",
            "imul",
            "istore 4",
            "iload_1",
            "iload 4",
            "iadd",
            "istore 5",
            "iload 5",
            "iload_3",
            "isub",
            "istore 6",
            "iload 6",
            "ireturn",
        ]
    );
}

#[test]
fn test_short_circuit_skips_right_operand() {
    let call = TypedExpr::call(this(), "check", vec![], Type::boolean());
    let p = program(
        None,
        vec![
            method(
                "run",
                Type::void(),
                vec![],
                vec![Symbol::new("b", Type::boolean())],
                vec![TypedStmt::assign(
                    TypedExpr::ident("b", Type::boolean()),
                    TypedExpr::binary(BinaryOp::And, TypedExpr::boolean(false), call),
                )],
            ),
            method("check", Type::boolean(), vec![], vec![], vec![TypedStmt::ret(Some(TypedExpr::boolean(true)))]),
        ],
    );
    let asm = emit(&p).unwrap();

    assert_eq!(
        method_lines(&asm, "run()V"),
        vec![
            ".method public run()V",
            ".limit stack 1",
            ".limit locals 4",
            "iconst_0",
            "ifne ifbody_0",
            "iconst_0",
            "istore_1",
            "goto endif_0",
            "ifbody_0:",
            "aload_0",
            "invokevirtual Foo/check()Z",
            "istore_2",
            "iload_2",
            "istore_1",
            "endif_0:",
            "iload_1",
            "istore_3",
            "return",
        ]
    );
}

#[test]
fn test_short_circuit_while_guard() {
    // while (i < n && flag) i = i + 1;
    let guard = TypedExpr::binary(
        BinaryOp::And,
        TypedExpr::binary(BinaryOp::Less, int_var("i"), int_var("n")),
        TypedExpr::ident("flag", Type::boolean()),
    );
    let p = program(
        None,
        vec![method(
            "count",
            Type::void(),
            vec![Symbol::new("n", Type::int())],
            vec![Symbol::new("i", Type::int()), Symbol::new("flag", Type::boolean())],
            vec![TypedStmt::While {
                condition: guard,
                body: Box::new(TypedStmt::assign(
                    int_var("i"),
                    TypedExpr::binary(BinaryOp::Add, int_var("i"), TypedExpr::int(1)),
                )),
            }],
        )],
    );
    let asm = emit(&p).unwrap();

    assert_eq!(
        method_lines(&asm, "count(I)V"),
        vec![
            ".method public count(I)V",
            ".limit stack 2",
            ".limit locals 6",
            "iload_2",
            "iload_1",
            "if_icmplt ifbody_0",
            "iconst_0",
            "istore_3",
            "goto endif_0",
            "ifbody_0:",
            "iload 4",
            "istore_3",
            "endif_0:",
            "iload_3",
            "ifne whilebody_1",
            "goto endwhile_1",
            "whilebody_1:",
            "iload_2",
            "iconst_1",
            "iadd",
            "istore_2",
            "iload_2",
            "iload_1",
            "if_icmplt ifbody_2",
            "iconst_0",
            "istore 5",
            "goto endif_2",
            "ifbody_2:",
            "iload 4",
            "istore 5",
            "endif_2:",
            "iload 5",
            "ifne whilebody_1",
            "endwhile_1:",
            "return",
        ]
    );
}

#[test]
fn test_varargs_call_packs_trailing_arguments() {
    let mut callee = method(
        "sum",
        Type::int(),
        vec![Symbol::new("a", Type::int()), Symbol::varargs("rest")],
        vec![],
        vec![TypedStmt::ret(Some(int_var("a")))],
    );
    callee.is_static = true;

    let call = TypedExpr::call(
        TypedExpr::ident("Foo", Type::object("Foo")),
        "sum",
        vec![TypedExpr::int(7), TypedExpr::int(1), TypedExpr::int(2), TypedExpr::int(3)],
        Type::int(),
    );
    let p = program(
        None,
        vec![
            method("run", Type::void(), vec![], vec![Symbol::new("x", Type::int())], vec![TypedStmt::assign(int_var("x"), call)]),
            callee,
        ],
    );
    let asm = emit(&p).unwrap();

    assert!(asm.contains(".method public static varargs sum(I[I)I\n"));
    assert_eq!(
        method_lines(&asm, "run()V"),
        vec![
            ".method public run()V",
            ".limit stack 3",
            ".limit locals 3",
            "iconst_3",
            "newarray int",
            "astore_1",
            "aload_1",
            "iconst_0",
            "iconst_1",
            "iastore",
            "aload_1",
            "iconst_1",
            "iconst_2",
            "iastore",
            "aload_1",
            "iconst_2",
            "iconst_3",
            "iastore",
            "bipush 7",
            "aload_1",
            "invokestatic Foo/sum(I[I)I",
            "istore_2",
            "return",
        ]
    );
}

#[test]
fn test_static_and_virtual_dispatch() {
    let helper = TypedExpr::ident("h", Type::object("Helper"));
    let p = program(
        None,
        vec![method(
            "run",
            Type::void(),
            vec![Symbol::new("h", Type::object("Helper"))],
            vec![],
            vec![
                TypedStmt::expr(TypedExpr::call(
                    TypedExpr::ident("io", Type::object("io")),
                    "println",
                    vec![TypedExpr::int(1)],
                    Type::void(),
                )),
                TypedStmt::expr(TypedExpr::call(helper, "next", vec![], Type::int())),
            ],
        )],
    );
    let asm = emit(&p).unwrap();

    assert!(asm.contains("    invokestatic io/println(I)V\n"));
    assert!(asm.contains("    aload_1\n    invokevirtual util/Helper/next()I\n    pop\n"));
}

#[test]
fn test_labels_unique_across_loops() {
    let guard = || TypedExpr::binary(BinaryOp::Less, int_var("i"), TypedExpr::int(10));
    let step = || {
        TypedStmt::assign(
            int_var("i"),
            TypedExpr::binary(BinaryOp::Add, int_var("i"), TypedExpr::int(1)),
        )
    };
    let p = program(
        None,
        vec![method(
            "loops",
            Type::void(),
            vec![],
            vec![Symbol::new("i", Type::int())],
            vec![
                TypedStmt::While {
                    condition: guard(),
                    body: Box::new(step()),
                },
                TypedStmt::While {
                    condition: guard(),
                    body: Box::new(step()),
                },
            ],
        )],
    );
    let asm = emit(&p).unwrap();

    for label in ["whilebody_0:", "endwhile_0:", "whilebody_1:", "endwhile_1:"] {
        assert_eq!(asm.lines().filter(|line| *line == label).count(), 1, "{label}");
    }
    assert!(asm.contains(".limit stack 2\n"));
}

#[test]
fn test_relational_value_and_not() {
    // b = !(a < 3);
    let p = program(
        None,
        vec![method(
            "neg",
            Type::boolean(),
            vec![Symbol::new("a", Type::int())],
            vec![Symbol::new("b", Type::boolean())],
            vec![
                TypedStmt::assign(
                    TypedExpr::ident("b", Type::boolean()),
                    TypedExpr::Not {
                        operand: Box::new(TypedExpr::Parentheses {
                            inner: Box::new(TypedExpr::binary(BinaryOp::Less, int_var("a"), TypedExpr::int(3))),
                        }),
                    },
                ),
                TypedStmt::ret(Some(TypedExpr::ident("b", Type::boolean()))),
            ],
        )],
    );
    let asm = emit(&p).unwrap();

    assert_eq!(
        method_lines(&asm, "neg(I)Z"),
        vec![
            ".method public neg(I)Z",
            ".limit stack 2",
            ".limit locals 4",
            "iload_1",
            "iconst_3",
            "if_icmplt cmp_0_true",
            "iconst_0",
            "goto cmp_0_end",
            "cmp_0_true:",
            "iconst_1",
            "cmp_0_end:",
            "istore_2",
            "iload_2",
            "iconst_1",
            "ixor",
            "istore_3",
            "iload_3",
            "ireturn",
        ]
    );
}

#[test]
fn test_string_array_element_uses_reference_opcodes() {
    // static void main(String[] args) { s = args[0]; }
    let args = Type::new("String", true);
    let mut main = method(
        "main",
        Type::void(),
        vec![Symbol::new("args", args.clone())],
        vec![Symbol::new("s", Type::string())],
        vec![TypedStmt::assign(
            TypedExpr::ident("s", Type::string()),
            TypedExpr::index(TypedExpr::ident("args", args), TypedExpr::int(0)),
        )],
    );
    main.is_static = true;
    let asm = emit(&program(None, vec![main])).unwrap();

    assert_eq!(
        method_lines(&asm, "main([Ljava/lang/String;)V"),
        vec![
            ".method public static main([Ljava/lang/String;)V",
            ".limit stack 2",
            ".limit locals 2",
            "aload_0",
            "iconst_0",
            "aaload",
            "astore_1",
            "return",
        ]
    );
}

#[test]
fn test_custom_options() {
    let unit = Frontend::compile_to_ir(&program(None, vec![])).unwrap();
    let options = EmitOptions {
        default_super: "Base".to_string(),
        indent: "\t".to_string(),
    };
    let asm = generate_jasmin(&unit, &options).unwrap();
    assert!(asm.starts_with(".class public Foo\n.super Base\n"));
    assert!(asm.contains("\taload_0\n\tinvokespecial Base/<init>()V\n"));
}
