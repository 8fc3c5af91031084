//! Constant evaluation of expressions.
//!
//! Both entry points are partial: an expression that cannot be decided from
//! its own sub-expressions evaluates to `None`, never to an error. Division
//! by zero, oversized exponents, and unsupported node kinds all degrade to
//! `None` so that callers can only act on definite information.

use itertools::Itertools;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{
    BoolOp, CmpOp, Expr, ExprBinOp, ExprBoolOp, ExprCompare, ExprNumberLiteral,
    ExprParenthesized, ExprUnaryOp, Number, Operator, UnaryOp,
};

/// The largest exponent `integer_value` will raise a base to. Larger (or
/// negative, or non-machine-sized) exponents evaluate to `None`.
const MAX_EXPONENT: u32 = 65_536;

/// Return the exact integer value of `expr`, if it has one.
pub fn integer_value(expr: &Expr) -> Option<BigInt> {
    match expr {
        Expr::NumberLiteral(ExprNumberLiteral {
            value: Number::Int(value),
            ..
        }) => Some(value.clone()),
        Expr::UnaryOp(ExprUnaryOp {
            op: UnaryOp::USub,
            operand,
            ..
        }) => Some(-integer_value(operand)?),
        Expr::BinOp(ExprBinOp {
            left, op, right, ..
        }) => binary_integer_value(&integer_value(left)?, *op, &integer_value(right)?),
        Expr::Parenthesized(ExprParenthesized { value, .. }) => integer_value(value),
        _ => None,
    }
}

fn binary_integer_value(left: &BigInt, op: Operator, right: &BigInt) -> Option<BigInt> {
    match op {
        Operator::Add => Some(left + right),
        Operator::Sub => Some(left - right),
        Operator::Mult => Some(left * right),
        Operator::Div => {
            // `/` is float division: only an exact quotient is an integer
            // constant.
            if right.is_zero() || !(left % right).is_zero() {
                return None;
            }
            Some(left / right)
        }
        Operator::FloorDiv => (!right.is_zero()).then(|| left.div_floor(right)),
        Operator::Mod => (!right.is_zero()).then(|| left.mod_floor(right)),
        Operator::Pow => {
            let Some(exponent) = right.to_u32().filter(|exponent| *exponent <= MAX_EXPONENT)
            else {
                log::debug!("ignoring `**` with exponent {right} outside the supported range");
                return None;
            };
            Some(left.pow(exponent))
        }
        _ => None,
    }
}

/// Return the boolean value of `expr`, if it has one.
///
/// Evaluation is three-valued: an `and`/`or` chain is decided as soon as one
/// operand pins the result, even when the remaining operands are unknown.
pub fn boolean_value(expr: &Expr) -> Option<bool> {
    match expr {
        Expr::BooleanLiteral(literal) => Some(literal.value),
        Expr::UnaryOp(ExprUnaryOp {
            op: UnaryOp::Not,
            operand,
            ..
        }) => Some(!boolean_value(operand)?),
        Expr::BoolOp(ExprBoolOp { op, values, .. }) => bool_op_value(*op, values),
        Expr::Compare(compare) => compare_value(compare),
        Expr::Parenthesized(ExprParenthesized { value, .. }) => boolean_value(value),
        _ => None,
    }
}

fn bool_op_value(op: BoolOp, values: &[Expr]) -> Option<bool> {
    // The operand value that decides the chain on its own: `False` for
    // `and`, `True` for `or`.
    let decisive = matches!(op, BoolOp::Or);
    let mut result = Some(!decisive);
    for value in values {
        match boolean_value(value) {
            Some(value) if value == decisive => return Some(decisive),
            Some(_) => {}
            None => result = None,
        }
    }
    result
}

fn compare_value(compare: &ExprCompare) -> Option<bool> {
    if compare.ops.is_empty() || compare.ops.len() != compare.comparators.len() {
        return None;
    }
    // A chain is the conjunction of its adjacent pairs; fold them with the
    // same three-valued rule as `and`.
    let mut result = Some(true);
    for ((left, right), op) in std::iter::once(compare.left.as_ref())
        .chain(&compare.comparators)
        .tuple_windows()
        .zip(&compare.ops)
    {
        match comparison_value(left, *op, right) {
            Some(false) => return Some(false),
            Some(true) => {}
            None => result = None,
        }
    }
    result
}

fn comparison_value(left: &Expr, op: CmpOp, right: &Expr) -> Option<bool> {
    if let (Some(left), Some(right)) = (integer_value(left), integer_value(right)) {
        return match op {
            CmpOp::Lt => Some(left < right),
            CmpOp::LtE => Some(left <= right),
            CmpOp::Gt => Some(left > right),
            CmpOp::GtE => Some(left >= right),
            CmpOp::Eq => Some(left == right),
            CmpOp::NotEq => Some(left != right),
            _ => None,
        };
    }
    match op {
        CmpOp::Eq => Some(boolean_value(left)? == boolean_value(right)?),
        CmpOp::NotEq => Some(boolean_value(left)? != boolean_value(right)?),
        _ => None,
    }
}
