//! Instruction selection for constants and local variable slots
//!
//! Always picks the shortest encoding that can represent the operand.

use crate::asm::{JvmInst, SlotKind};

/// Push an `int` constant
///
/// `-1` and `0..=5` have dedicated opcodes, then `bipush`, `sipush` and
/// finally a constant-pool `ldc`.
pub fn push_int(value: i32) -> JvmInst {
    if value == -1 {
        return JvmInst::IconstM1;
    }
    if let Ok(small @ 0..=5) = u8::try_from(value) {
        return JvmInst::Iconst(small);
    }
    if let Ok(byte) = i8::try_from(value) {
        return JvmInst::Bipush(byte);
    }
    if let Ok(short) = i16::try_from(value) {
        return JvmInst::Sipush(short);
    }
    JvmInst::Ldc(value)
}

/// Load a local: `xload_n` for slots 0-3, `xload n` otherwise
pub fn load(kind: SlotKind, slot: u16) -> JvmInst {
    match u8::try_from(slot) {
        Ok(short @ 0..=3) => JvmInst::LoadN(kind, short),
        _ => JvmInst::Load(kind, slot),
    }
}

/// Store into a local: `xstore_n` for slots 0-3, `xstore n` otherwise
pub fn store(kind: SlotKind, slot: u16) -> JvmInst {
    match u8::try_from(slot) {
        Ok(short @ 0..=3) => JvmInst::StoreN(kind, short),
        _ => JvmInst::Store(kind, slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(inst: JvmInst) -> String {
        inst.to_string()
    }

    #[test]
    fn test_int_constant_boundaries() {
        assert_eq!(text(push_int(-1)), "iconst_m1");
        assert_eq!(text(push_int(0)), "iconst_0");
        assert_eq!(text(push_int(5)), "iconst_5");
        assert_eq!(text(push_int(6)), "bipush 6");
        assert_eq!(text(push_int(-2)), "bipush -2");
        assert_eq!(text(push_int(127)), "bipush 127");
        assert_eq!(text(push_int(-128)), "bipush -128");
        assert_eq!(text(push_int(128)), "sipush 128");
        assert_eq!(text(push_int(-129)), "sipush -129");
        assert_eq!(text(push_int(32767)), "sipush 32767");
        assert_eq!(text(push_int(-32768)), "sipush -32768");
        assert_eq!(text(push_int(32768)), "ldc 32768");
        assert_eq!(text(push_int(40000)), "ldc 40000");
        assert_eq!(text(push_int(i32::MIN)), "ldc -2147483648");
    }

    #[test]
    fn test_slot_forms() {
        assert_eq!(text(store(SlotKind::Int, 2)), "istore_2");
        assert_eq!(text(store(SlotKind::Int, 5)), "istore 5");
        assert_eq!(text(load(SlotKind::Int, 3)), "iload_3");
        assert_eq!(text(load(SlotKind::Int, 4)), "iload 4");
        assert_eq!(text(load(SlotKind::Reference, 0)), "aload_0");
        assert_eq!(text(store(SlotKind::Reference, 300)), "astore 300");
    }
}
