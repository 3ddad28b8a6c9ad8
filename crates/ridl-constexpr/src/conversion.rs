//! Integral promotion and usual arithmetic conversion.
//!
//! The rules follow the C++ model with one deliberate restriction: the
//! "signed type cannot represent the unsigned operand" fallback can never
//! fire for this kind catalog (a signed kind outranking an unsigned kind is
//! always strictly wider), so reaching it is reported as a
//! [`ConversionDefect`] instead of being silently resolved.

use ridl_core::{ConversionDefect, ScalarKind};

/// Integral promotion: anything narrower than `int32` (including `bool`)
/// becomes `int32`; everything else passes through.
pub fn integral_promotion(kind: ScalarKind) -> ScalarKind {
    if kind < ScalarKind::Int32 {
        ScalarKind::Int32
    } else {
        kind
    }
}

/// Usual arithmetic conversion: select the common kind for two operands.
///
/// Both operands must be integral (`bool..uint64`). The rules, in order:
///
/// 1. Equal kinds need no conversion.
/// 2. `bool` converts to the other operand's kind.
/// 3. Same signedness: the higher-rank kind wins.
/// 4. Mixed signedness: the unsigned kind wins on rank ties or better,
///    otherwise the signed kind (which is strictly wider here) wins.
pub fn usual_arithmetic_conversion(
    left: ScalarKind,
    right: ScalarKind,
) -> Result<ScalarKind, ConversionDefect> {
    if !left.is_integral() || !right.is_integral() {
        return Err(ConversionDefect::new(left, right));
    }

    if left == right {
        return Ok(left);
    }
    if left == ScalarKind::Bool {
        return Ok(right);
    }
    if right == ScalarKind::Bool {
        return Ok(left);
    }

    if left.is_signed() == right.is_signed() {
        return Ok(left.max(right));
    }

    let (unsigned_kind, signed_kind) = if left.is_signed() {
        (right, left)
    } else {
        (left, right)
    };
    if unsigned_kind >= signed_kind {
        return Ok(unsigned_kind);
    }
    if signed_kind > unsigned_kind {
        return Ok(signed_kind);
    }

    // The C-standard "unsigned counterpart of the signed operand" fallback.
    // Unreachable for any pair this catalog can produce; if control gets
    // here the table above is wrong.
    Err(ConversionDefect::new(left, right))
}
