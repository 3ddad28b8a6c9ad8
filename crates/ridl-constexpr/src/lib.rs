//! Constant-expression folding for the ridl compiler front end.
//!
//! The parser hands literal tokens and operator symbols to [`ConstExpr`],
//! which folds each expression bottom-up at construction time, tracking
//! the scalar kind of every intermediate result under C-family promotion
//! rules, and later re-renders the folded value as C++ or Java source
//! text during code generation.
//!
//! ```
//! use ridl_constexpr::ConstExpr;
//! use ridl_core::ScalarKind;
//!
//! let one = ConstExpr::literal("1");
//! let thirty_one = ConstExpr::literal("31");
//! let shifted = ConstExpr::binary(&one, "<<", &thirty_one).unwrap();
//!
//! assert_eq!(shifted.kind(), ScalarKind::Int32);
//! assert_eq!(shifted.value(), "-2147483648");
//! assert_eq!(shifted.cpp_value(ScalarKind::Uint32), "2147483648u");
//! ```

pub mod conversion;
pub mod expr;
pub mod literal;
pub mod ops;
mod render;
mod value;

pub use conversion::{integral_promotion, usual_arithmetic_conversion};
pub use expr::{ConstExpr, Provenance};
pub use literal::{ParsedLiteral, parse_literal};
pub use ops::{BinaryCategory, BinaryOp, UnaryOp};
