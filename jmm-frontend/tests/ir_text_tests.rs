//! End-to-end lowering of a serialized typed program into IR text

use jmm_frontend::Frontend;
use pretty_assertions::assert_eq;

const PROGRAM: &str = r#"{
  "imports": [["io"]],
  "class": {
    "name": "Counter",
    "super_class": null,
    "fields": [{ "name": "count", "type": { "name": "int", "is_array": false } }],
    "methods": [
      {
        "name": "bump",
        "return_type": { "name": "int", "is_array": false },
        "parameters": [{ "name": "by", "type": { "name": "int", "is_array": false } }],
        "body": [
          {
            "kind": "Assign",
            "target": { "kind": "Identifier", "name": "count", "expr_type": { "name": "int", "is_array": false } },
            "value": {
              "kind": "Binary",
              "op": "+",
              "left": { "kind": "Identifier", "name": "count", "expr_type": { "name": "int", "is_array": false } },
              "right": { "kind": "Identifier", "name": "by", "expr_type": { "name": "int", "is_array": false } },
              "expr_type": { "name": "int", "is_array": false }
            }
          },
          {
            "kind": "Return",
            "value": { "kind": "Identifier", "name": "count", "expr_type": { "name": "int", "is_array": false } }
          }
        ]
      },
      {
        "name": "main",
        "is_static": true,
        "return_type": { "name": "void", "is_array": false },
        "parameters": [{ "name": "args", "type": { "name": "String", "is_array": true } }],
        "body": [
          {
            "kind": "Expression",
            "expr": {
              "kind": "MethodCall",
              "receiver": { "kind": "Identifier", "name": "io", "expr_type": { "name": "io", "is_array": false } },
              "method": "println",
              "arguments": [{ "kind": "IntLiteral", "value": 1 }],
              "expr_type": { "name": "void", "is_array": false }
            }
          }
        ]
      }
    ]
  }
}"#;

#[test]
fn test_program_renders_as_ir_text() {
    let unit = Frontend::compile_json(PROGRAM).unwrap();

    let expected = r#"import io;

Counter {
    .field public count.i32;

    .construct Counter().V {
        invokespecial(this, "<init>").V;
    }

    .method public bump(by.i32).i32 {
            tmp0.i32 :=.i32 getfield(this.Counter, count.i32).i32;
            tmp1.i32 :=.i32 tmp0.i32 +.i32 by.i32;
            putfield(this.Counter, count.i32, tmp1.i32).V;
            tmp2.i32 :=.i32 getfield(this.Counter, count.i32).i32;
            ret.i32 tmp2.i32;
    }

    .method public static main(args.array.String).V {
            invokestatic(io, "println", 1.i32).V;
            ret.V;
    }
}"#;
    assert_eq!(unit.to_string(), expected);
}

#[test]
fn test_malformed_program_is_rejected() {
    let err = Frontend::compile_json("{ \"class\": 3 }").unwrap_err();
    assert!(err.to_string().starts_with("Internal compiler error: malformed typed program"));
}
