//! Facade crate for the ridl compiler's constant-expression core.
//!
//! Re-exports the scalar-kind catalog and error types from `ridl-core`
//! together with the folding and rendering machinery from `ridl-constexpr`.

pub use ridl_core::{ConversionDefect, FoldError, RidlError, ScalarKind};

pub use ridl_constexpr::{
    BinaryCategory, BinaryOp, ConstExpr, ParsedLiteral, Provenance, UnaryOp, integral_promotion,
    parse_literal, usual_arithmetic_conversion,
};
