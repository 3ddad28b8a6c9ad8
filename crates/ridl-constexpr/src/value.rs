//! Kind-guarded access to the 64-bit stored value.
//!
//! Every folded value is stored as a `u64` bit pattern and reinterpreted at
//! a scalar kind whenever it is read. All narrowing and widening happens in
//! this module, exactly once per read or write, so call sites cannot pick
//! the wrong width or sign-extend by accident.
//!
//! The stored pattern is canonical: writing a value at a kind sign-extends
//! signed kinds and zero-extends unsigned kinds out to 64 bits, matching the
//! conversion a C++ compiler performs when assigning the narrow result back
//! into a `uint64_t` slot.

use ridl_core::ScalarKind;

/// Reinterpret `raw` at `kind` and widen the result to `i64`.
pub(crate) fn read_i64(kind: ScalarKind, raw: u64) -> i64 {
    match kind {
        ScalarKind::Bool => (raw != 0) as i64,
        ScalarKind::Int8 => raw as i8 as i64,
        ScalarKind::Uint8 => raw as u8 as i64,
        ScalarKind::Int16 => raw as i16 as i64,
        ScalarKind::Uint16 => raw as u16 as i64,
        ScalarKind::Int32 => raw as i32 as i64,
        ScalarKind::Uint32 => raw as u32 as i64,
        ScalarKind::Int64 => raw as i64,
        ScalarKind::Uint64 => raw as i64,
        // Non-integral kinds never reach arithmetic; read the full pattern.
        ScalarKind::Opaque | ScalarKind::Float | ScalarKind::Double => raw as i64,
    }
}

/// Reinterpret `raw` at `kind` and widen the result to `u64`.
pub(crate) fn read_u64(kind: ScalarKind, raw: u64) -> u64 {
    match kind {
        ScalarKind::Bool => (raw != 0) as u64,
        ScalarKind::Int8 => raw as i8 as i64 as u64,
        ScalarKind::Uint8 => raw as u8 as u64,
        ScalarKind::Int16 => raw as i16 as i64 as u64,
        ScalarKind::Uint16 => raw as u16 as u64,
        ScalarKind::Int32 => raw as i32 as i64 as u64,
        ScalarKind::Uint32 => raw as u32 as u64,
        ScalarKind::Int64 => raw,
        ScalarKind::Uint64 => raw,
        ScalarKind::Opaque | ScalarKind::Float | ScalarKind::Double => raw,
    }
}

/// Truncate a wide two's-complement pattern to `kind` and produce the
/// canonical stored form.
pub(crate) fn store(kind: ScalarKind, wide: u64) -> u64 {
    match kind {
        ScalarKind::Bool => (wide != 0) as u64,
        ScalarKind::Int8 => wide as i8 as i64 as u64,
        ScalarKind::Uint8 => wide as u8 as u64,
        ScalarKind::Int16 => wide as i16 as i64 as u64,
        ScalarKind::Uint16 => wide as u16 as u64,
        ScalarKind::Int32 => wide as i32 as i64 as u64,
        ScalarKind::Uint32 => wide as u32 as u64,
        ScalarKind::Int64 => wide,
        ScalarKind::Uint64 => wide,
        ScalarKind::Opaque | ScalarKind::Float | ScalarKind::Double => wide,
    }
}

/// Nonzero test at the value's kind.
pub(crate) fn is_truthy(kind: ScalarKind, raw: u64) -> bool {
    read_u64(kind, raw) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_reads_sign_extend() {
        assert_eq!(read_i64(ScalarKind::Int8, 0xff), -1);
        assert_eq!(read_i64(ScalarKind::Int16, 0x8000), i16::MIN as i64);
        assert_eq!(read_i64(ScalarKind::Int32, 0xffff_ffff), -1);
    }

    #[test]
    fn unsigned_reads_zero_extend() {
        assert_eq!(read_u64(ScalarKind::Uint8, 0xfff), 0xff);
        assert_eq!(read_u64(ScalarKind::Uint32, u64::MAX), 0xffff_ffff);
    }

    #[test]
    fn store_normalizes_to_canonical_form() {
        // A negative int8 is stored sign-extended across all 64 bits.
        assert_eq!(store(ScalarKind::Int8, 0xff), u64::MAX);
        assert_eq!(store(ScalarKind::Uint8, 0x1ff), 0xff);
        assert_eq!(store(ScalarKind::Bool, 42), 1);
        assert_eq!(store(ScalarKind::Bool, 0), 0);
    }

    #[test]
    fn round_trip_read_after_store() {
        let raw = store(ScalarKind::Int16, (-300i64) as u64);
        assert_eq!(read_i64(ScalarKind::Int16, raw), -300);
        assert_eq!(read_u64(ScalarKind::Uint16, raw), 65236);
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(ScalarKind::Int32, store(ScalarKind::Int32, (-1i64) as u64)));
        assert!(!is_truthy(ScalarKind::Uint8, 0x100)); // truncates to zero
        assert!(is_truthy(ScalarKind::Bool, 1));
    }
}
