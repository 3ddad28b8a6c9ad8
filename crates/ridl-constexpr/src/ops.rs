//! Operator tables and per-category evaluators.
//!
//! Operator symbols arrive from the parser as plain text; unknown symbols
//! simply fail to parse into [`UnaryOp`]/[`BinaryOp`] and the node being
//! built degrades to invalid. Each evaluator computes at a fixed scalar
//! kind through the accessors in [`crate::value`], so narrow kinds wrap
//! exactly like native-width machine arithmetic.

use ridl_core::{FoldError, ScalarKind};

use crate::value;

/// Unary operators: `+ - ! ~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+`
    Plus,
    /// `-`
    Neg,
    /// `!`
    LogicalNot,
    /// `~`
    BitNot,
}

impl UnaryOp {
    /// Look up an operator by its source symbol.
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(UnaryOp::Plus),
            "-" => Some(UnaryOp::Neg),
            "!" => Some(UnaryOp::LogicalNot),
            "~" => Some(UnaryOp::BitNot),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::LogicalNot => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

/// Binary operators, grouped by evaluator category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,

    // Bitwise
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,

    // Comparison
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,

    // Shift
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,

    // Logical
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
}

/// The evaluator category a binary operator dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryCategory {
    Arithmetic,
    Bitwise,
    Comparison,
    Shift,
    Logical,
}

impl BinaryOp {
    /// Look up an operator by its source symbol.
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "%" => Some(BinaryOp::Mod),
            "|" => Some(BinaryOp::BitOr),
            "^" => Some(BinaryOp::BitXor),
            "&" => Some(BinaryOp::BitAnd),
            "<" => Some(BinaryOp::Less),
            ">" => Some(BinaryOp::Greater),
            "<=" => Some(BinaryOp::LessEqual),
            ">=" => Some(BinaryOp::GreaterEqual),
            "==" => Some(BinaryOp::Equal),
            "!=" => Some(BinaryOp::NotEqual),
            "<<" => Some(BinaryOp::ShiftLeft),
            ">>" => Some(BinaryOp::ShiftRight),
            "&&" => Some(BinaryOp::LogicalAnd),
            "||" => Some(BinaryOp::LogicalOr),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        }
    }

    /// Fixed membership table deciding the evaluator category.
    pub fn category(self) -> BinaryCategory {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
                BinaryCategory::Arithmetic
            }
            BinaryOp::BitOr | BinaryOp::BitXor | BinaryOp::BitAnd => BinaryCategory::Bitwise,
            BinaryOp::Less
            | BinaryOp::Greater
            | BinaryOp::LessEqual
            | BinaryOp::GreaterEqual
            | BinaryOp::Equal
            | BinaryOp::NotEqual => BinaryCategory::Comparison,
            BinaryOp::ShiftLeft | BinaryOp::ShiftRight => BinaryCategory::Shift,
            BinaryOp::LogicalAnd | BinaryOp::LogicalOr => BinaryCategory::Logical,
        }
    }

    fn not_in_category(self) -> FoldError {
        FoldError::UnsupportedOperator {
            symbol: self.symbol().to_string(),
        }
    }
}

// =============================================================================
// Evaluators
// =============================================================================

/// Evaluate a unary operator at the operand's exact kind.
///
/// The result kind equals the operand kind, so e.g. `-` on a `uint32`
/// operand wraps modulo 2^32 and `~` on a `bool` behaves like C++'s
/// int-promote-then-truncate (`~false` is true).
pub(crate) fn eval_unary(op: UnaryOp, kind: ScalarKind, raw: u64) -> u64 {
    match op {
        UnaryOp::Plus => value::store(kind, value::read_u64(kind, raw)),
        UnaryOp::Neg => {
            if kind.is_signed() {
                value::store(kind, value::read_i64(kind, raw).wrapping_neg() as u64)
            } else {
                value::store(kind, value::read_u64(kind, raw).wrapping_neg())
            }
        }
        UnaryOp::BitNot => value::store(kind, !value::read_u64(kind, raw)),
        UnaryOp::LogicalNot => value::store(kind, (value::read_u64(kind, raw) == 0) as u64),
    }
}

/// Evaluate an arithmetic, bitwise, or comparison operator with both
/// operands reinterpreted at the promoted kind.
///
/// Comparison results are 0/1; the caller assigns the `bool` result kind.
pub(crate) fn eval_binary_common(
    op: BinaryOp,
    kind: ScalarKind,
    lraw: u64,
    rraw: u64,
) -> Result<u64, FoldError> {
    if kind.is_signed() {
        let l = value::read_i64(kind, lraw);
        let r = value::read_i64(kind, rraw);
        let wide = match op {
            BinaryOp::Add => l.wrapping_add(r) as u64,
            BinaryOp::Sub => l.wrapping_sub(r) as u64,
            BinaryOp::Mul => l.wrapping_mul(r) as u64,
            BinaryOp::Div => {
                if r == 0 {
                    return Err(FoldError::DivisionByZero);
                }
                l.wrapping_div(r) as u64
            }
            BinaryOp::Mod => {
                if r == 0 {
                    return Err(FoldError::DivisionByZero);
                }
                l.wrapping_rem(r) as u64
            }
            BinaryOp::BitOr => (l | r) as u64,
            BinaryOp::BitXor => (l ^ r) as u64,
            BinaryOp::BitAnd => (l & r) as u64,
            BinaryOp::Less => return Ok((l < r) as u64),
            BinaryOp::Greater => return Ok((l > r) as u64),
            BinaryOp::LessEqual => return Ok((l <= r) as u64),
            BinaryOp::GreaterEqual => return Ok((l >= r) as u64),
            BinaryOp::Equal => return Ok((l == r) as u64),
            BinaryOp::NotEqual => return Ok((l != r) as u64),
            other => return Err(other.not_in_category()),
        };
        Ok(value::store(kind, wide))
    } else {
        let l = value::read_u64(kind, lraw);
        let r = value::read_u64(kind, rraw);
        let wide = match op {
            BinaryOp::Add => l.wrapping_add(r),
            BinaryOp::Sub => l.wrapping_sub(r),
            BinaryOp::Mul => l.wrapping_mul(r),
            BinaryOp::Div => {
                if r == 0 {
                    return Err(FoldError::DivisionByZero);
                }
                l / r
            }
            BinaryOp::Mod => {
                if r == 0 {
                    return Err(FoldError::DivisionByZero);
                }
                l % r
            }
            BinaryOp::BitOr => l | r,
            BinaryOp::BitXor => l ^ r,
            BinaryOp::BitAnd => l & r,
            BinaryOp::Less => return Ok((l < r) as u64),
            BinaryOp::Greater => return Ok((l > r) as u64),
            BinaryOp::LessEqual => return Ok((l <= r) as u64),
            BinaryOp::GreaterEqual => return Ok((l >= r) as u64),
            BinaryOp::Equal => return Ok((l == r) as u64),
            BinaryOp::NotEqual => return Ok((l != r) as u64),
            other => return Err(other.not_in_category()),
        };
        Ok(value::store(kind, wide))
    }
}

/// Evaluate a shift at the promoted left-operand kind.
///
/// A negative count shifts in the other direction (defined here, unlike C).
/// The count is masked modulo the operand width, pinning down native-width
/// wraparound (`1 << 32 == 1` at `int32`) as the fixed policy.
pub(crate) fn eval_shift(
    op: BinaryOp,
    kind: ScalarKind,
    lraw: u64,
    count: i64,
) -> Result<u64, FoldError> {
    let (op, magnitude) = if count < 0 {
        let flipped = match op {
            BinaryOp::ShiftLeft => BinaryOp::ShiftRight,
            BinaryOp::ShiftRight => BinaryOp::ShiftLeft,
            other => other,
        };
        (flipped, count.unsigned_abs())
    } else {
        (op, count as u64)
    };
    let shift = (magnitude & u64::from(kind.bit_width() - 1)) as u32;

    match op {
        BinaryOp::ShiftLeft => {
            if kind.is_signed() {
                Ok(value::store(kind, (value::read_i64(kind, lraw) << shift) as u64))
            } else {
                Ok(value::store(kind, value::read_u64(kind, lraw) << shift))
            }
        }
        BinaryOp::ShiftRight => {
            if kind.is_signed() {
                // Sign-extended read makes this an arithmetic shift.
                Ok(value::store(kind, (value::read_i64(kind, lraw) >> shift) as u64))
            } else {
                Ok(value::store(kind, value::read_u64(kind, lraw) >> shift))
            }
        }
        other => Err(other.not_in_category()),
    }
}

/// Evaluate `&&`/`||` over already-folded operands. No promotion; both
/// sides are just nonzero-tested. Result is 0/1 at kind `bool`.
pub(crate) fn eval_logical(op: BinaryOp, left: bool, right: bool) -> Result<u64, FoldError> {
    match op {
        BinaryOp::LogicalAnd => Ok((left && right) as u64),
        BinaryOp::LogicalOr => Ok((left || right) as u64),
        other => Err(other.not_in_category()),
    }
}
