//! Value renderers for code generation and diagnostics.
//!
//! All renderers are pure queries and never fail: an invalid node falls
//! back to its preserved source text so the caller always gets something
//! printable.

use ridl_core::ScalarKind;

use crate::expr::ConstExpr;
use crate::value;

impl ConstExpr {
    /// Render the value as decimal text at `as_kind`.
    ///
    /// The stored pattern is read at the node's own kind first, then
    /// converted to `as_kind` (the same double cast a C++ compiler would
    /// perform), so a `uint32` node holding 2^32-1 renders as `4294967295`
    /// under `int64` but `-1` under `int32`.
    pub fn raw_text(&self, as_kind: ScalarKind) -> String {
        if !self.is_valid() {
            return self.source().to_string();
        }
        let wide = value::read_u64(self.kind(), self.raw());
        let raw = value::store(as_kind, wide);
        if as_kind.is_signed() {
            value::read_i64(as_kind, raw).to_string()
        } else {
            // Bool renders as 0/1 here; the Java profile spells true/false.
            value::read_u64(as_kind, raw).to_string()
        }
    }

    /// Render the value at the node's own kind.
    pub fn value(&self) -> String {
        if !self.is_valid() {
            return self.source().to_string();
        }
        self.raw_text(self.kind())
    }

    /// Render a C++ literal for `cast_kind`.
    ///
    /// Appends `u` for the unsigned 32/64-bit kinds and `ll` for the 64-bit
    /// kinds. The `int64` minimum cannot be written as a plain signed
    /// literal (its magnitude overflows `int64_t` before negation), so it
    /// is emitted as a signed cast wrapped around the unsigned bit-pattern
    /// literal.
    pub fn cpp_value(&self, cast_kind: ScalarKind) -> String {
        if !self.is_valid() {
            return self.source().to_string();
        }
        let mut literal = self.raw_text(cast_kind);
        if cast_kind == ScalarKind::Int64 && self.raw() as i64 == i64::MIN {
            return format!("({})({}ull)", ScalarKind::Int64.cpp_name(), literal);
        }
        if matches!(cast_kind, ScalarKind::Uint32 | ScalarKind::Uint64) {
            literal.push('u');
        }
        if matches!(cast_kind, ScalarKind::Int64 | ScalarKind::Uint64) {
            literal.push_str("ll");
        }
        literal
    }

    /// Render a Java literal for `cast_kind`.
    ///
    /// Java has no unsigned types, so unsigned kinds re-render through the
    /// signed kind of the same width (bit pattern preserved), and `bool`
    /// spells the `true`/`false` keywords.
    pub fn java_value(&self, cast_kind: ScalarKind) -> String {
        match cast_kind {
            ScalarKind::Uint64 => self.raw_text(ScalarKind::Int64),
            ScalarKind::Uint32 => self.raw_text(ScalarKind::Int32),
            ScalarKind::Uint16 => self.raw_text(ScalarKind::Int16),
            ScalarKind::Uint8 => self.raw_text(ScalarKind::Int8),
            ScalarKind::Bool => {
                if !self.is_valid() {
                    return self.source().to_string();
                }
                if value::is_truthy(self.kind(), self.raw()) {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
            other => self.raw_text(other),
        }
    }

    /// Render `(<type name>)<source>` for diagnostics, or the source alone
    /// if the node is invalid.
    pub fn describe(&self) -> String {
        if !self.is_valid() {
            return self.source().to_string();
        }
        format!("({}){}", self.kind().cpp_name(), self.source())
    }
}
