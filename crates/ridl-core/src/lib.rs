//! Core type catalog and error types for the ridl compiler.
//!
//! This crate carries the pieces every compiler stage agrees on: the ordered
//! [`ScalarKind`] catalog (with its per-target type-name tables) and the
//! error hierarchy for constant folding.

pub mod error;
pub mod scalar;

pub use error::{ConversionDefect, FoldError, RidlError};
pub use scalar::ScalarKind;
