//! JVM Assembly Instruction Definitions
//!
//! This module defines the subset of the JVM instruction set the backend
//! selects from, in the textual form accepted by Jasmin.

use std::fmt;

/// Which opcode family moves a value between a slot and the operand stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// `int` and `boolean`
    Int,
    /// Objects, strings and arrays
    Reference,
}

impl SlotKind {
    fn prefix(&self) -> char {
        match self {
            SlotKind::Int => 'i',
            SlotKind::Reference => 'a',
        }
    }
}

/// Integer comparison tested by a conditional jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Ne,
    Lt,
    Ge,
    Gt,
    Le,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Ne => write!(f, "ne"),
            Comparison::Lt => write!(f, "lt"),
            Comparison::Ge => write!(f, "ge"),
            Comparison::Gt => write!(f, "gt"),
            Comparison::Le => write!(f, "le"),
        }
    }
}

/// Symbolic reference to a method: `pkg/Class/name(params)ret`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub class: String,
    pub name: String,
    /// One field descriptor per formal parameter
    pub params: Vec<String>,
    pub ret: String,
}

impl MethodRef {
    pub fn new(class: impl Into<String>, name: impl Into<String>, params: Vec<String>, ret: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            name: name.into(),
            params,
            ret: ret.into(),
        }
    }

    /// `(params)ret`
    pub fn descriptor(&self) -> String {
        format!("({}){}", self.params.concat(), self.ret)
    }

    pub fn returns_value(&self) -> bool {
        self.ret != "V"
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.class, self.name, self.descriptor())
    }
}

/// Symbolic reference to a field: `pkg/Class/name descriptor`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub class: String,
    pub name: String,
    pub descriptor: String,
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.class, self.name, self.descriptor)
    }
}

/// JVM Assembly Instructions
///
/// Short encodings (`iconst_n`, `iload_n`, ...) are separate variants; see
/// `select` for the rules that pick them.
#[derive(Debug, Clone, PartialEq)]
pub enum JvmInst {
    // Constants
    IconstM1,
    Iconst(u8),                   // iconst_0 .. iconst_5
    Bipush(i8),
    Sipush(i16),
    Ldc(i32),

    // Locals
    LoadN(SlotKind, u8),          // iload_0 .. aload_3
    Load(SlotKind, u16),          // iload n / aload n
    StoreN(SlotKind, u8),
    Store(SlotKind, u16),

    // Arrays
    Iaload,
    Iastore,
    Baload,
    Bastore,
    Aaload,
    Aastore,
    NewIntArray,                  // newarray int
    Arraylength,

    // Objects
    New(String),
    Getfield(FieldRef),
    Putfield(FieldRef),

    // Stack manipulation
    Dup,
    Pop,

    // Arithmetic and logic
    Iadd,
    Isub,
    Imul,
    Idiv,
    Iand,
    Ixor,

    // Control flow
    If(Comparison, String),       // compare top of stack with zero
    IfIcmp(Comparison, String),   // compare the two topmost ints
    Goto(String),

    // Invocation
    Invokevirtual(MethodRef),
    Invokestatic(MethodRef),
    Invokespecial(MethodRef),
    Ireturn,
    Areturn,
    Return,

    // Assembly Pseudo-Instructions
    Label(String),
}

impl JvmInst {
    /// Net change of the operand stack depth when this instruction executes
    pub fn stack_delta(&self) -> i32 {
        match self {
            JvmInst::IconstM1
            | JvmInst::Iconst(_)
            | JvmInst::Bipush(_)
            | JvmInst::Sipush(_)
            | JvmInst::Ldc(_)
            | JvmInst::LoadN(..)
            | JvmInst::Load(..)
            | JvmInst::New(_)
            | JvmInst::Dup => 1,

            JvmInst::StoreN(..) | JvmInst::Store(..) | JvmInst::Pop => -1,

            // pop arrayref + index, push value
            JvmInst::Iaload | JvmInst::Baload | JvmInst::Aaload => -1,
            // pop arrayref + index + value
            JvmInst::Iastore | JvmInst::Bastore | JvmInst::Aastore => -3,
            JvmInst::NewIntArray | JvmInst::Arraylength => 0,

            JvmInst::Getfield(_) => 0,
            JvmInst::Putfield(_) => -2,

            JvmInst::Iadd | JvmInst::Isub | JvmInst::Imul | JvmInst::Idiv | JvmInst::Iand | JvmInst::Ixor => -1,

            JvmInst::If(..) => -1,
            JvmInst::IfIcmp(..) => -2,
            JvmInst::Goto(_) => 0,

            JvmInst::Invokestatic(method) => invoke_delta(method, false),
            JvmInst::Invokevirtual(method) | JvmInst::Invokespecial(method) => invoke_delta(method, true),

            JvmInst::Ireturn | JvmInst::Areturn => -1,
            JvmInst::Return => 0,

            JvmInst::Label(_) => 0,
        }
    }

    /// Smallest operand stack depth this instruction needs before it runs
    pub fn stack_required(&self) -> i32 {
        match self {
            JvmInst::StoreN(..) | JvmInst::Store(..) | JvmInst::Pop | JvmInst::Dup => 1,
            JvmInst::NewIntArray | JvmInst::Arraylength | JvmInst::Getfield(_) => 1,
            JvmInst::If(..) | JvmInst::Ireturn | JvmInst::Areturn => 1,
            JvmInst::Iaload | JvmInst::Baload | JvmInst::Aaload => 2,
            JvmInst::Putfield(_) | JvmInst::IfIcmp(..) => 2,
            JvmInst::Iadd | JvmInst::Isub | JvmInst::Imul | JvmInst::Idiv | JvmInst::Iand | JvmInst::Ixor => 2,
            JvmInst::Iastore | JvmInst::Bastore | JvmInst::Aastore => 3,
            JvmInst::Invokestatic(method) => method.params.len() as i32,
            JvmInst::Invokevirtual(method) | JvmInst::Invokespecial(method) => method.params.len() as i32 + 1,
            _ => 0,
        }
    }

    /// Target label of a jump
    pub fn branch_target(&self) -> Option<&str> {
        match self {
            JvmInst::If(_, label) | JvmInst::IfIcmp(_, label) | JvmInst::Goto(label) => Some(label),
            _ => None,
        }
    }

    /// Check if execution never falls through to the next instruction
    pub fn is_unconditional(&self) -> bool {
        matches!(self, JvmInst::Goto(_) | JvmInst::Ireturn | JvmInst::Areturn | JvmInst::Return)
    }
}

fn invoke_delta(method: &MethodRef, has_receiver: bool) -> i32 {
    let popped = method.params.len() as i32 + i32::from(has_receiver);
    let pushed = i32::from(method.returns_value());
    pushed - popped
}

impl fmt::Display for JvmInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Constants
            JvmInst::IconstM1 => write!(f, "iconst_m1"),
            JvmInst::Iconst(n) => write!(f, "iconst_{}", n),
            JvmInst::Bipush(v) => write!(f, "bipush {}", v),
            JvmInst::Sipush(v) => write!(f, "sipush {}", v),
            JvmInst::Ldc(v) => write!(f, "ldc {}", v),

            // Locals
            JvmInst::LoadN(kind, slot) => write!(f, "{}load_{}", kind.prefix(), slot),
            JvmInst::Load(kind, slot) => write!(f, "{}load {}", kind.prefix(), slot),
            JvmInst::StoreN(kind, slot) => write!(f, "{}store_{}", kind.prefix(), slot),
            JvmInst::Store(kind, slot) => write!(f, "{}store {}", kind.prefix(), slot),

            // Arrays
            JvmInst::Iaload => write!(f, "iaload"),
            JvmInst::Iastore => write!(f, "iastore"),
            JvmInst::Baload => write!(f, "baload"),
            JvmInst::Bastore => write!(f, "bastore"),
            JvmInst::Aaload => write!(f, "aaload"),
            JvmInst::Aastore => write!(f, "aastore"),
            JvmInst::NewIntArray => write!(f, "newarray int"),
            JvmInst::Arraylength => write!(f, "arraylength"),

            // Objects
            JvmInst::New(class) => write!(f, "new {}", class),
            JvmInst::Getfield(field) => write!(f, "getfield {}", field),
            JvmInst::Putfield(field) => write!(f, "putfield {}", field),

            // Stack
            JvmInst::Dup => write!(f, "dup"),
            JvmInst::Pop => write!(f, "pop"),

            // Arithmetic
            JvmInst::Iadd => write!(f, "iadd"),
            JvmInst::Isub => write!(f, "isub"),
            JvmInst::Imul => write!(f, "imul"),
            JvmInst::Idiv => write!(f, "idiv"),
            JvmInst::Iand => write!(f, "iand"),
            JvmInst::Ixor => write!(f, "ixor"),

            // Control Flow
            JvmInst::If(cmp, label) => write!(f, "if{} {}", cmp, label),
            JvmInst::IfIcmp(cmp, label) => write!(f, "if_icmp{} {}", cmp, label),
            JvmInst::Goto(label) => write!(f, "goto {}", label),

            // Invocation
            JvmInst::Invokevirtual(method) => write!(f, "invokevirtual {}", method),
            JvmInst::Invokestatic(method) => write!(f, "invokestatic {}", method),
            JvmInst::Invokespecial(method) => write!(f, "invokespecial {}", method),
            JvmInst::Ireturn => write!(f, "ireturn"),
            JvmInst::Areturn => write!(f, "areturn"),
            JvmInst::Return => write!(f, "return"),

            // Pseudo
            JvmInst::Label(label) => write!(f, "{}:", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_display() {
        assert_eq!(format!("{}", JvmInst::IconstM1), "iconst_m1");
        assert_eq!(format!("{}", JvmInst::LoadN(SlotKind::Reference, 0)), "aload_0");
        assert_eq!(format!("{}", JvmInst::Store(SlotKind::Int, 7)), "istore 7");
        assert_eq!(format!("{}", JvmInst::IfIcmp(Comparison::Ge, "L1".to_string())), "if_icmpge L1");
        assert_eq!(format!("{}", JvmInst::If(Comparison::Ne, "ifbody_0".to_string())), "ifne ifbody_0");
        assert_eq!(format!("{}", JvmInst::Label("endif_0".to_string())), "endif_0:");
        assert_eq!(format!("{}", JvmInst::Aaload), "aaload");
        assert_eq!(format!("{}", JvmInst::Bastore), "bastore");
    }

    #[test]
    fn test_member_references() {
        let method = MethodRef::new("Foo", "sum", vec!["I".to_string(), "[I".to_string()], "I");
        assert_eq!(format!("{}", JvmInst::Invokestatic(method)), "invokestatic Foo/sum(I[I)I");

        let field = FieldRef {
            class: "a/b/Foo".to_string(),
            name: "x".to_string(),
            descriptor: "Z".to_string(),
        };
        assert_eq!(format!("{}", JvmInst::Getfield(field)), "getfield a/b/Foo/x Z");
    }

    #[test]
    fn test_invoke_stack_delta() {
        let virtual_call = MethodRef::new("Foo", "get", vec!["I".to_string()], "I");
        assert_eq!(JvmInst::Invokevirtual(virtual_call.clone()).stack_delta(), -1);
        assert_eq!(JvmInst::Invokevirtual(virtual_call).stack_required(), 2);

        let static_call = MethodRef::new("io", "println", vec!["I".to_string()], "V");
        assert_eq!(JvmInst::Invokestatic(static_call).stack_delta(), -1);

        let constructor = MethodRef::new("java/lang/Object", "<init>", vec![], "V");
        assert_eq!(JvmInst::Invokespecial(constructor).stack_delta(), -1);
    }
}
