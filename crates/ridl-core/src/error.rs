//! Error types for constant-expression folding.
//!
//! Two families with very different contracts:
//!
//! - [`FoldError`]: recoverable. The node being built degrades to its
//!   invalid state and construction continues; the compiler reports a
//!   diagnostic later using the node's preserved source text.
//! - [`ConversionDefect`]: fatal. The usual-arithmetic-conversion table
//!   reached a branch that is unreachable for any input the grammar can
//!   produce, which means the evaluator itself is wrong. It is surfaced as
//!   a typed error so the hosting compiler decides whether to abort.

use thiserror::Error;

use crate::scalar::ScalarKind;

/// Recoverable folding failures. Each one turns exactly one node invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    /// The numeral text of a literal token could not be parsed.
    #[error("could not parse '{text}' as an integer literal")]
    LiteralParse { text: String },

    /// The operator symbol is not in any evaluator category.
    #[error("unsupported operator '{symbol}'")]
    UnsupportedOperator { symbol: String },

    /// An operand was already invalid; no evaluation was attempted.
    #[error("operand is already invalid")]
    PropagatedInvalid,

    /// The divisor of a `/` or `%` folded to zero.
    #[error("division by zero in constant expression")]
    DivisionByZero,
}

/// Internal invariant violation in the conversion table.
///
/// Unlike [`FoldError`] this never describes bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no usual arithmetic conversion for {left} and {right}")]
pub struct ConversionDefect {
    /// Kind of the left (or true-branch) operand.
    pub left: ScalarKind,
    /// Kind of the right (or false-branch) operand.
    pub right: ScalarKind,
}

impl ConversionDefect {
    pub fn new(left: ScalarKind, right: ScalarKind) -> Self {
        Self { left, right }
    }
}

/// Unified error type for the constant-expression core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RidlError {
    /// A recoverable fold failure.
    #[error(transparent)]
    Fold(#[from] FoldError),

    /// A fatal internal defect.
    #[error(transparent)]
    Conversion(#[from] ConversionDefect),
}

impl RidlError {
    /// Whether the hosting compiler may continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RidlError::Fold(_))
    }
}
