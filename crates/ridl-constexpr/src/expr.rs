//! The folded constant-expression node.
//!
//! A [`ConstExpr`] is built bottom-up while the parser assembles the
//! expression tree: construction *is* evaluation, and the node never
//! changes afterwards. Composite constructors only borrow their children
//! for the duration of the call; the surrounding AST keeps ownership.
//!
//! A node is either fully valid (kind and value resolved) or invalid
//! (folding failed or an operand was already invalid). Invalid nodes keep
//! their formatted source text so the compiler can still point at the
//! offending expression.

use ridl_core::{ConversionDefect, FoldError, ScalarKind};

use crate::conversion::{integral_promotion, usual_arithmetic_conversion};
use crate::literal::parse_literal;
use crate::ops::{self, BinaryCategory, BinaryOp, UnaryOp};
use crate::value;

/// How a node was built. Only affects diagnostics and rendering fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Literal,
    Unary,
    Binary,
    Ternary,
    Invalid,
}

/// An immutable folded constant expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstExpr {
    /// Original formatted source text; always present, even when invalid.
    source: String,
    provenance: Provenance,
    /// Resolved kind of the folded value. Meaningless when invalid.
    kind: ScalarKind,
    /// Folded value as a canonical 64-bit pattern, reinterpreted via
    /// [`crate::value`] at `kind` (or a caller-supplied kind) on every read.
    raw: u64,
}

impl ConstExpr {
    /// Fold a literal token. Malformed numeral text yields an invalid node.
    pub fn literal(text: &str) -> ConstExpr {
        match parse_literal(text) {
            Ok(parsed) => ConstExpr {
                source: text.to_string(),
                provenance: Provenance::Literal,
                kind: parsed.kind,
                raw: parsed.value,
            },
            Err(_) => ConstExpr::invalid(text.to_string()),
        }
    }

    /// Build a node directly from a kind and a value.
    ///
    /// Used by the enum layer for implicit values (auto-incremented
    /// enumerators) that have no literal token of their own.
    pub fn value_of(kind: ScalarKind, wide: u64) -> ConstExpr {
        let raw = value::store(kind, wide);
        let mut node = ConstExpr {
            source: String::new(),
            provenance: Provenance::Literal,
            kind,
            raw,
        };
        node.source = node.value();
        node
    }

    /// Fold a unary operation. The result kind equals the operand's kind;
    /// no promotion is applied (a deliberate deviation from C, so `-1u`
    /// stays `uint32` and wraps).
    pub fn unary(symbol: &str, operand: &ConstExpr) -> ConstExpr {
        let source = format!("({}{})", symbol, operand.source);
        match Self::fold_unary(symbol, operand) {
            Ok((kind, raw)) => ConstExpr {
                source,
                provenance: Provenance::Unary,
                kind,
                raw,
            },
            Err(_) => ConstExpr::invalid(source),
        }
    }

    fn fold_unary(symbol: &str, operand: &ConstExpr) -> Result<(ScalarKind, u64), FoldError> {
        if !operand.is_valid() {
            return Err(FoldError::PropagatedInvalid);
        }
        let op = UnaryOp::parse(symbol).ok_or_else(|| FoldError::UnsupportedOperator {
            symbol: symbol.to_string(),
        })?;
        Ok((operand.kind, ops::eval_unary(op, operand.kind, operand.raw)))
    }

    /// Fold a binary operation, dispatching on the operator's category.
    ///
    /// Recoverable failures (unknown operator, invalid operand, zero
    /// divisor) degrade to an invalid node; the `Err` channel carries only
    /// the internal conversion defect, which signals an evaluator bug
    /// rather than bad input.
    pub fn binary(
        left: &ConstExpr,
        symbol: &str,
        right: &ConstExpr,
    ) -> Result<ConstExpr, ConversionDefect> {
        let source = format!("({} {} {})", left.source, symbol, right.source);
        if !left.is_valid() || !right.is_valid() {
            return Ok(ConstExpr::invalid(source));
        }
        let Some(op) = BinaryOp::parse(symbol) else {
            return Ok(ConstExpr::invalid(source));
        };

        let (kind, folded) = match op.category() {
            BinaryCategory::Arithmetic | BinaryCategory::Bitwise => {
                let promoted = usual_arithmetic_conversion(
                    integral_promotion(left.kind),
                    integral_promotion(right.kind),
                )?;
                (promoted, ops::eval_binary_common(op, promoted, left.raw, right.raw))
            }
            BinaryCategory::Comparison => {
                let promoted = usual_arithmetic_conversion(
                    integral_promotion(left.kind),
                    integral_promotion(right.kind),
                )?;
                // Comparison evaluates at the promoted kind but yields bool.
                (
                    ScalarKind::Bool,
                    ops::eval_binary_common(op, promoted, left.raw, right.raw),
                )
            }
            BinaryCategory::Shift => {
                // Only the left operand's kind matters; the right one is
                // just read as a signed 64-bit count.
                let promoted = integral_promotion(left.kind);
                let count = value::read_i64(right.kind, right.raw);
                (promoted, ops::eval_shift(op, promoted, left.raw, count))
            }
            BinaryCategory::Logical => (
                ScalarKind::Bool,
                ops::eval_logical(
                    op,
                    value::is_truthy(left.kind, left.raw),
                    value::is_truthy(right.kind, right.raw),
                ),
            ),
        };

        Ok(match folded {
            Ok(raw) => ConstExpr {
                source,
                provenance: Provenance::Binary,
                kind,
                raw,
            },
            Err(_) => ConstExpr::invalid(source),
        })
    }

    /// Fold a ternary conditional.
    ///
    /// The result kind is the usual arithmetic conversion of the two branch
    /// kinds with **no** integral promotion step, unlike the binary path,
    /// so two `int8` branches stay `int8`.
    pub fn ternary(
        cond: &ConstExpr,
        true_val: &ConstExpr,
        false_val: &ConstExpr,
    ) -> Result<ConstExpr, ConversionDefect> {
        let source = format!("({}?{}:{})", cond.source, true_val.source, false_val.source);
        if !cond.is_valid() || !true_val.is_valid() || !false_val.is_valid() {
            return Ok(ConstExpr::invalid(source));
        }

        let kind = usual_arithmetic_conversion(true_val.kind, false_val.kind)?;
        let chosen = if value::is_truthy(cond.kind, cond.raw) {
            true_val
        } else {
            false_val
        };
        Ok(ConstExpr {
            source,
            provenance: Provenance::Ternary,
            kind,
            raw: value::store(kind, chosen.raw),
        })
    }

    fn invalid(source: String) -> ConstExpr {
        ConstExpr {
            source,
            provenance: Provenance::Invalid,
            kind: ScalarKind::Opaque,
            raw: 0,
        }
    }

    /// The original formatted expression text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// How this node was built.
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// The resolved kind of the folded value. Meaningless for invalid nodes.
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// Whether folding succeeded.
    pub fn is_valid(&self) -> bool {
        self.provenance != Provenance::Invalid
    }

    pub(crate) fn raw(&self) -> u64 {
        self.raw
    }
}
