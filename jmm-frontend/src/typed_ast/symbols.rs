//! Symbol table construction from a typed program

use super::program::TypedProgram;
use jmm_common::{MethodSignature, SymbolTable};

/// Collect the class-level symbols of a typed program
pub fn build_symbol_table(program: &TypedProgram) -> SymbolTable {
    let class = &program.class;

    let methods = class
        .methods
        .iter()
        .map(|method| MethodSignature {
            name: method.name.clone(),
            return_type: method.return_type.clone(),
            parameters: method.parameters.clone(),
            locals: method.locals.clone(),
            is_static: method.is_static,
            is_public: method.is_public,
        })
        .collect();

    SymbolTable {
        class_name: class.name.clone(),
        super_class: class.super_class.clone(),
        imports: program.imports.iter().map(|segments| segments.join(".")).collect(),
        fields: class.fields.clone(),
        methods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed_ast::{TypedClass, TypedMethod};
    use jmm_common::{Symbol, Type};

    #[test]
    fn test_build_symbol_table() {
        let program = TypedProgram {
            imports: vec![vec!["java".into(), "util".into(), "List".into()], vec!["io".into()]],
            class: TypedClass {
                name: "Foo".into(),
                super_class: Some("Bar".into()),
                fields: vec![Symbol::new("x", Type::int())],
                methods: vec![TypedMethod {
                    name: "main".into(),
                    is_public: true,
                    is_static: true,
                    return_type: Type::void(),
                    parameters: vec![Symbol::new("args", Type::new("String", true))],
                    locals: vec![Symbol::new("a", Type::int())],
                    body: vec![],
                }],
            },
        };

        let table = build_symbol_table(&program);
        assert_eq!(table.class_name, "Foo");
        assert_eq!(table.super_class.as_deref(), Some("Bar"));
        assert_eq!(table.imports, vec!["java.util.List", "io"]);
        assert_eq!(table.fields.len(), 1);
        let main = table.method("main").unwrap();
        assert!(main.is_static);
        assert_eq!(main.locals[0].name, "a");
    }
}
