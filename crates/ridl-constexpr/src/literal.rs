//! Integer literal parsing.
//!
//! Turns a literal token's text into a 64-bit magnitude and an inferred
//! scalar kind. The grammar never produces negative or floating literals
//! here; `-1` is the unary minus operator applied to `1`.

use ridl_core::{FoldError, ScalarKind};

/// A successfully parsed literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLiteral {
    /// The magnitude as a 64-bit unsigned value.
    pub value: u64,
    /// The kind inferred from the suffix, base, and value range.
    pub kind: ScalarKind,
}

/// Parse a literal token: optional `0x`/`0X` prefix, decimal or hex digits,
/// optional trailing combination of `u`/`U` and `l`/`L` in either order.
///
/// The inferred kind is the first of the candidate kinds (per suffix and
/// base) whose bound covers the value:
///
/// | suffix      | decimal           | hexadecimal                      |
/// |-------------|-------------------|----------------------------------|
/// | none        | `int32`, `int64`  | `int32`, `uint32`, `int64`, `uint64` |
/// | `u`         | `uint32`, `uint64`| same                             |
/// | `l`         | `int64`           | `int64`                          |
/// | `ul`        | `uint64`          | `uint64`                         |
///
/// A suffix-free decimal literal beyond `int64`'s bound gets `uint64`, the
/// only remaining kind that covers it.
pub fn parse_literal(text: &str) -> Result<ParsedLiteral, FoldError> {
    let bytes = text.as_bytes();

    let mut is_unsigned = false;
    let mut is_long = false;
    let mut end = bytes.len();
    while end > 0 {
        match bytes[end - 1] {
            b'u' | b'U' => is_unsigned = true,
            b'l' | b'L' => is_long = true,
            _ => break,
        }
        end -= 1;
    }

    let digits = &text[..end];
    let (radix, magnitude) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(rest) => (16, rest),
        None => (10, digits),
    };

    let value = u64::from_str_radix(magnitude, radix).map_err(|_| FoldError::LiteralParse {
        text: text.to_string(),
    })?;

    let kind = match (is_long, is_unsigned) {
        (true, true) => ScalarKind::Uint64,
        (true, false) => ScalarKind::Int64,
        (false, true) => {
            if value <= u32::MAX as u64 {
                ScalarKind::Uint32
            } else {
                ScalarKind::Uint64
            }
        }
        (false, false) if radix == 16 => {
            if value <= i32::MAX as u64 {
                ScalarKind::Int32
            } else if value <= u32::MAX as u64 {
                ScalarKind::Uint32
            } else if value <= i64::MAX as u64 {
                ScalarKind::Int64
            } else {
                ScalarKind::Uint64
            }
        }
        (false, false) => {
            if value <= i32::MAX as u64 {
                ScalarKind::Int32
            } else if value <= i64::MAX as u64 {
                ScalarKind::Int64
            } else {
                ScalarKind::Uint64
            }
        }
    };

    Ok(ParsedLiteral { value, kind })
}
