//! Assembly text emission
//!
//! Renders instruction lists and method blocks in Jasmin syntax.

use crate::asm::JvmInst;

/// Render instructions one per line; labels stay flush left
pub fn emit_instructions(instructions: &[JvmInst], indent: &str) -> String {
    let mut out = String::new();
    for inst in instructions {
        match inst {
            JvmInst::Label(_) => {
                out.push_str(&format!("{inst}\n"));
            }
            _ => {
                out.push_str(&format!("{indent}{inst}\n"));
            }
        }
    }
    out
}

/// Header, frame limits and body of one method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodBlock {
    /// Everything after `.method `, e.g. `public static main([Ljava/lang/String;)V`
    pub header: String,
    pub max_stack: u16,
    pub max_locals: u16,
    pub body: Vec<JvmInst>,
}

impl MethodBlock {
    pub fn emit(&self, indent: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(".method {}\n", self.header));
        out.push_str(&format!("{indent}.limit stack {}\n", self.max_stack));
        out.push_str(&format!("{indent}.limit locals {}\n", self.max_locals));
        out.push_str(&emit_instructions(&self.body, indent));
        out.push_str(".end method\n");
        out
    }
}
