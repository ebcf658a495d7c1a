//! Class-level emission context
//!
//! Resolves class names to their JVM internal form through the unit's
//! imports and builds the field and method descriptors instructions need.

use jmm_codegen::{FieldRef, MethodRef};
use jmm_common::CompilerError;
use jmm_frontend::ir::{ClassUnit, IrType, Operand};

pub const OBJECT_CLASS: &str = "java/lang/Object";
pub const STRING_CLASS: &str = "java/lang/String";

/// Everything about the class being emitted that instructions may need
pub struct ClassContext<'a> {
    pub unit: &'a ClassUnit,
    /// Internal name of the superclass
    pub super_class: String,
}

impl<'a> ClassContext<'a> {
    pub fn new(unit: &'a ClassUnit, default_super: &str) -> Self {
        let mut ctx = Self {
            unit,
            super_class: default_super.to_string(),
        };
        if let Some(super_class) = &unit.super_class {
            ctx.super_class = ctx.qualify(super_class);
        }
        ctx
    }

    pub fn class_name(&self) -> &str {
        &self.unit.name
    }

    /// Internal name of a class: `a.b.C` imported as `C` becomes `a/b/C`
    pub fn qualify(&self, name: &str) -> String {
        if name == self.unit.name {
            return name.to_string();
        }
        self.unit
            .imports
            .iter()
            .find(|import| import.rsplit('.').next() == Some(name))
            .map(|import| import.replace('.', "/"))
            .unwrap_or_else(|| name.replace('.', "/"))
    }

    /// Field descriptor of an IR type
    pub fn descriptor(&self, ty: &IrType) -> String {
        match ty {
            IrType::Int32 => "I".to_string(),
            IrType::Boolean => "Z".to_string(),
            IrType::Void => "V".to_string(),
            IrType::String => format!("L{STRING_CLASS};"),
            IrType::Object(name) => format!("L{};", self.qualify(name)),
            IrType::Array(element) => format!("[{}", self.descriptor(element)),
        }
    }

    /// Internal name of the class an operand's value is an instance of
    pub fn class_of(&self, operand: &Operand) -> Result<String, CompilerError> {
        match operand {
            Operand::This { .. } => Ok(self.unit.name.clone()),
            Operand::Class { name } => Ok(self.qualify(name)),
            other => match other.ty() {
                IrType::Object(name) => Ok(self.qualify(&name)),
                IrType::String => Ok(STRING_CLASS.to_string()),
                ty => Err(CompilerError::unsupported(format!("member access on {other} of type {ty}"))),
            },
        }
    }

    pub fn field_ref(&self, object: &Operand, field: &str, ty: &IrType) -> Result<FieldRef, CompilerError> {
        Ok(FieldRef {
            class: self.class_of(object)?,
            name: field.to_string(),
            descriptor: self.descriptor(ty),
        })
    }

    /// Reference to a method called with `arguments`
    ///
    /// Methods of the class being emitted use their declared parameter types;
    /// for any other class the argument types stand in for the formals.
    pub fn method_ref(
        &self,
        class: String,
        name: &str,
        arguments: &[Operand],
        return_type: &IrType,
    ) -> MethodRef {
        let declared = (class == self.unit.name)
            .then(|| self.unit.get_method(name))
            .flatten()
            .filter(|method| method.parameters.len() == arguments.len());

        let params = match declared {
            Some(method) => method.parameter_types().map(|ty| self.descriptor(ty)).collect(),
            None => arguments.iter().map(|arg| self.descriptor(&arg.ty())).collect(),
        };
        MethodRef::new(class, name, params, self.descriptor(return_type))
    }
}
