//! The scalar-kind catalog shared by the whole compiler.
//!
//! Every scalar type the IDL understands is one [`ScalarKind`]. The
//! declaration order *is* the conversion rank: promotion and usual
//! arithmetic conversion compare kinds directly, so reordering variants
//! changes the type rules.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Scalar type kinds, in conversion-rank order.
///
/// Only `Bool..=Uint64` participate in constant arithmetic. `Opaque` is the
/// raw-pointer kind and `Float`/`Double` are carried for the catalog's sake;
/// none of the three ever reaches an evaluator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u8)]
pub enum ScalarKind {
    Bool = 0,
    Opaque,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
}

impl ScalarKind {
    /// Conversion rank. Equivalent to comparing kinds with `<`/`>`.
    pub fn rank(self) -> u8 {
        self.into()
    }

    /// Look a kind up by its catalog index (rank).
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::try_from(rank).ok()
    }

    /// Whether this kind takes part in integral constant arithmetic.
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            ScalarKind::Bool
                | ScalarKind::Int8
                | ScalarKind::Uint8
                | ScalarKind::Int16
                | ScalarKind::Uint16
                | ScalarKind::Int32
                | ScalarKind::Uint32
                | ScalarKind::Int64
                | ScalarKind::Uint64
        )
    }

    /// Signedness for conversion purposes. `Bool` counts as unsigned.
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            ScalarKind::Int8 | ScalarKind::Int16 | ScalarKind::Int32 | ScalarKind::Int64
        )
    }

    /// Width in bits of the value representation.
    pub fn bit_width(self) -> u32 {
        match self {
            ScalarKind::Bool => 1,
            ScalarKind::Int8 | ScalarKind::Uint8 => 8,
            ScalarKind::Int16 | ScalarKind::Uint16 => 16,
            ScalarKind::Int32 | ScalarKind::Uint32 | ScalarKind::Float => 32,
            ScalarKind::Opaque | ScalarKind::Int64 | ScalarKind::Uint64 | ScalarKind::Double => 64,
        }
    }

    /// Get the IDL-facing name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Opaque => "opaque",
            ScalarKind::Int8 => "int8",
            ScalarKind::Uint8 => "uint8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Uint16 => "uint16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }

    /// Get the C++ type name used by the native code generator.
    pub const fn cpp_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Opaque => "void *",
            ScalarKind::Int8 => "int8_t",
            ScalarKind::Uint8 => "uint8_t",
            ScalarKind::Int16 => "int16_t",
            ScalarKind::Uint16 => "uint16_t",
            ScalarKind::Int32 => "int32_t",
            ScalarKind::Uint32 => "uint32_t",
            ScalarKind::Int64 => "int64_t",
            ScalarKind::Uint64 => "uint64_t",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }

    /// Get the Java type name used by the managed code generator.
    ///
    /// Java has no unsigned types; unsigned kinds map to the signed type of
    /// the same width and the value renderer re-renders the bit pattern.
    pub const fn java_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "boolean",
            ScalarKind::Opaque => "long",
            ScalarKind::Int8 | ScalarKind::Uint8 => "byte",
            ScalarKind::Int16 | ScalarKind::Uint16 => "short",
            ScalarKind::Int32 | ScalarKind::Uint32 => "int",
            ScalarKind::Int64 | ScalarKind::Uint64 => "long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
