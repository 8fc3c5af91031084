//! Symbolic constraints over named integer variables.
//!
//! [`Equation::of`] derives, for a condition expression, a constraint that
//! holds exactly when the condition does. The algebra is closed: negation
//! and conjunction always produce another valid equation, and
//! [`Equation::is_satisfiable`] decides whether any variable assignment can
//! satisfy it. Conditions the algebra cannot express map to
//! [`Equation::Unknown`], which can never produce a finding in either
//! polarity.

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use lintel_python_ast::helpers::{boolean_value, integer_value};
use lintel_python_ast::{
    BoolOp, CmpOp, Expr, ExprBoolOp, ExprCompare, ExprName, ExprParenthesized, ExprUnaryOp,
    UnaryOp,
};

/// A restriction on the values named variables may take.
///
/// Equations are immutable values; every operation is pure and returns a new
/// equation. `And`/`Or` members are kept in a set, so member order never
/// affects semantics and structurally equal members collapse.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Equation {
    /// The variable equals the value.
    Eq(String, BigInt),
    /// The variable differs from the value.
    NotEq(String, BigInt),
    /// The variable is at most the bound.
    LowerEqual(String, BigInt),
    /// The variable is at least the bound.
    GreaterEqual(String, BigInt),
    /// The variable is truthy (nonzero).
    Truly(String),
    /// The variable is falsy (zero).
    Falsy(String),
    /// Every member holds.
    And(BTreeSet<Equation>),
    /// At least one member holds.
    Or(BTreeSet<Equation>),
    /// Holds under every assignment.
    Tautology,
    /// Holds under no assignment.
    Contradiction,
    /// Nothing is known about the condition; conservatively satisfiable,
    /// and a fixpoint of negation.
    Unknown,
}

impl Equation {
    /// Build the constraint under which `expr`, read as a boolean condition,
    /// holds.
    pub fn of(expr: &Expr) -> Equation {
        match expr {
            Expr::BoolOp(ExprBoolOp {
                op: BoolOp::And,
                values,
                ..
            }) => values
                .iter()
                .map(Equation::of)
                .fold(Equation::Tautology, Equation::merge),
            Expr::BoolOp(ExprBoolOp {
                op: BoolOp::Or,
                values,
                ..
            }) => or_of(values.iter().map(Equation::of)),
            Expr::UnaryOp(ExprUnaryOp {
                op: UnaryOp::Not,
                operand,
                ..
            }) => Equation::of(operand).negate(),
            Expr::Compare(compare) => {
                let ([op], [comparator]) = (compare.ops.as_slice(), compare.comparators.as_slice())
                else {
                    // Chained comparisons carry no single-variable
                    // restriction; fall back to constant folding.
                    return constant_equation(expr);
                };
                match (compare.left.as_ref(), comparator) {
                    (Expr::Name(_), Expr::Name(_)) => Equation::Unknown,
                    (Expr::Name(name), value) => variable_restriction(name, *op, value),
                    (value, Expr::Name(name)) => {
                        // Mirror the comparison so the variable reads as the
                        // left operand; `==`/`!=` are symmetric already.
                        let op = match op {
                            CmpOp::Eq | CmpOp::NotEq => *op,
                            _ => op.negate(),
                        };
                        variable_restriction(name, op, value)
                    }
                    _ => constant_equation(expr),
                }
            }
            Expr::BinOp(_) => constant_equation(expr),
            // A bare variable used as a condition holds iff it is truthy.
            Expr::Name(name) => Equation::Truly(name.id.clone()),
            Expr::Parenthesized(ExprParenthesized { value, .. }) => Equation::of(value),
            _ => Equation::Unknown,
        }
    }

    /// The constraint under which this one does not hold. Involutive on
    /// every single-variable restriction.
    #[must_use]
    pub fn negate(self) -> Equation {
        match self {
            Equation::Eq(name, value) => Equation::NotEq(name, value),
            Equation::NotEq(name, value) => Equation::Eq(name, value),
            Equation::LowerEqual(name, bound) => Equation::GreaterEqual(name, bound + BigInt::one()),
            Equation::GreaterEqual(name, bound) => Equation::LowerEqual(name, bound - BigInt::one()),
            Equation::Truly(name) => Equation::Falsy(name),
            Equation::Falsy(name) => Equation::Truly(name),
            Equation::And(members) => {
                Equation::Or(members.into_iter().map(Equation::negate).collect())
            }
            Equation::Or(members) => {
                Equation::And(members.into_iter().map(Equation::negate).collect())
            }
            Equation::Tautology => Equation::Contradiction,
            Equation::Contradiction => Equation::Tautology,
            Equation::Unknown => Equation::Unknown,
        }
    }

    /// Conjoin two equations into the tightest constraint this algebra can
    /// express, or [`Equation::Contradiction`] if they are mutually
    /// exclusive on the same variable.
    ///
    /// Merging an [`Equation::Unknown`] operand yields the other operand:
    /// dropping an unknowable conjunct only enlarges the solution set, so an
    /// unsatisfiable result still proves the full conjunction unsatisfiable.
    #[must_use]
    pub fn merge(self, other: Equation) -> Equation {
        match (self, other) {
            (Equation::Contradiction, _) | (_, Equation::Contradiction) => Equation::Contradiction,
            (Equation::Tautology, other) => other,
            (this, Equation::Tautology) => this,
            (this, Equation::And(members)) => members.into_iter().fold(this, Equation::merge),
            (Equation::And(members), other) => members.into_iter().fold(other, Equation::merge),
            (this, Equation::Or(members)) => {
                or_of(members.into_iter().map(|member| this.clone().merge(member)))
            }
            (Equation::Or(members), other) => {
                or_of(members.into_iter().map(|member| member.merge(other.clone())))
            }
            (Equation::Unknown, other) => other,
            (this, Equation::Unknown) => this,
            (this, other) => {
                if this.variable() == other.variable() {
                    merge_same_variable(&this, &other)
                } else {
                    and_of([this, other])
                }
            }
        }
    }

    /// Whether some variable assignment satisfies the equation.
    ///
    /// The check is purely syntactic per variable: `And` members are tested
    /// independently, without re-deriving cross-member contradictions.
    pub fn is_satisfiable(&self) -> bool {
        match self {
            Equation::Contradiction => false,
            Equation::And(members) => members.iter().all(Equation::is_satisfiable),
            Equation::Or(members) => members.iter().any(Equation::is_satisfiable),
            _ => true,
        }
    }

    /// The variable a single-variable restriction constrains.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Equation::Eq(name, _)
            | Equation::NotEq(name, _)
            | Equation::LowerEqual(name, _)
            | Equation::GreaterEqual(name, _)
            | Equation::Truly(name)
            | Equation::Falsy(name) => Some(name),
            _ => None,
        }
    }
}

fn variable_restriction(name: &ExprName, op: CmpOp, value: &Expr) -> Equation {
    let Some(value) = integer_value(value) else {
        return Equation::Unknown;
    };
    match op {
        CmpOp::Lt => Equation::LowerEqual(name.id.clone(), value - BigInt::one()),
        CmpOp::Gt => Equation::GreaterEqual(name.id.clone(), value + BigInt::one()),
        CmpOp::LtE => Equation::LowerEqual(name.id.clone(), value),
        CmpOp::GtE => Equation::GreaterEqual(name.id.clone(), value),
        CmpOp::Eq => Equation::Eq(name.id.clone(), value),
        CmpOp::NotEq => Equation::NotEq(name.id.clone(), value),
        _ => Equation::Unknown,
    }
}

/// Fold a condition with no variable restriction down to its constant value,
/// if it has one.
fn constant_equation(expr: &Expr) -> Equation {
    if let Some(value) = boolean_value(expr) {
        return if value {
            Equation::Tautology
        } else {
            Equation::Contradiction
        };
    }
    if let Some(value) = integer_value(expr) {
        return if value.is_zero() {
            Equation::Contradiction
        } else {
            Equation::Tautology
        };
    }
    Equation::Unknown
}

/// Conjoin two restrictions on the same variable.
///
/// The table is directional: a cell may keep the first operand where the
/// swapped cell keeps a conjunction. Both directions always agree on
/// satisfiability, which is what the verdict consumes.
fn merge_same_variable(a: &Equation, b: &Equation) -> Equation {
    use Equation::{Contradiction, Eq, Falsy, GreaterEqual, LowerEqual, NotEq, Truly};
    match (a, b) {
        (Eq(_, v), Eq(_, v2)) => pick(v == v2, a),
        (Eq(_, v), NotEq(_, v2)) => pick(v != v2, a),
        (Eq(_, v), LowerEqual(_, bound)) => pick(v <= bound, a),
        (Eq(_, v), GreaterEqual(_, bound)) => pick(v >= bound, a),
        (Eq(_, v), Truly(_)) => pick(!v.is_zero(), a),
        (Eq(_, v), Falsy(_)) => pick(v.is_zero(), a),

        (NotEq(_, v), Eq(_, v2)) => pick(v != v2, b),
        (NotEq(_, v), NotEq(_, v2)) => {
            if v == v2 {
                a.clone()
            } else {
                and_of([a.clone(), b.clone()])
            }
        }
        (NotEq(_, v), LowerEqual(_, bound)) => keep_or_join(v > bound, a, b),
        (NotEq(_, v), GreaterEqual(_, bound)) => keep_or_join(v < bound, a, b),
        (NotEq(..), Truly(_)) => a.clone(),
        (NotEq(_, v), Falsy(_)) => pick(!v.is_zero(), a),

        (LowerEqual(_, bound), Eq(_, v)) => pick(v <= bound, b),
        (LowerEqual(_, bound), NotEq(_, v)) => keep_or_join(bound > v, a, b),
        (LowerEqual(_, bound), LowerEqual(_, other)) => {
            if bound <= other {
                a.clone()
            } else {
                b.clone()
            }
        }
        (LowerEqual(_, bound), GreaterEqual(_, other)) => contradict_or_join(bound < other, a, b),
        (LowerEqual(..), Truly(_)) => a.clone(),
        (LowerEqual(_, bound), Falsy(_)) => pick(!bound.is_negative(), a),

        (GreaterEqual(_, bound), Eq(_, v)) => pick(v >= bound, b),
        (GreaterEqual(_, bound), NotEq(_, v)) => keep_or_join(bound < v, a, b),
        (GreaterEqual(_, bound), LowerEqual(_, other)) => contradict_or_join(bound > other, a, b),
        (GreaterEqual(_, bound), GreaterEqual(_, other)) => {
            if bound >= other {
                a.clone()
            } else {
                b.clone()
            }
        }
        (GreaterEqual(..), Truly(_)) => a.clone(),
        (GreaterEqual(_, bound), Falsy(_)) => pick(!bound.is_positive(), a),

        (Truly(_), Eq(_, v)) => pick(!v.is_zero(), b),
        (Truly(_), NotEq(..)) | (Truly(_), LowerEqual(..)) | (Truly(_), GreaterEqual(..)) => {
            and_of([a.clone(), b.clone()])
        }
        (Truly(_), Truly(_)) => a.clone(),
        (Truly(_), Falsy(_)) | (Falsy(_), Truly(_)) => Contradiction,

        (Falsy(_), Eq(_, v)) => pick(v.is_zero(), b),
        (Falsy(_), NotEq(_, v)) => pick(!v.is_zero(), a),
        (Falsy(_), LowerEqual(_, bound)) => pick(!bound.is_negative(), a),
        (Falsy(_), GreaterEqual(_, bound)) => pick(!bound.is_positive(), a),
        (Falsy(_), Falsy(_)) => a.clone(),

        _ => unreachable!("merge_same_variable is only called on single-variable restrictions"),
    }
}

/// The surviving restriction if the pair is compatible, else a contradiction.
fn pick(compatible: bool, survivor: &Equation) -> Equation {
    if compatible {
        survivor.clone()
    } else {
        Equation::Contradiction
    }
}

/// Keep `a` alone when it already subsumes the pair, else retain both.
fn keep_or_join(subsumes: bool, a: &Equation, b: &Equation) -> Equation {
    if subsumes {
        a.clone()
    } else {
        and_of([a.clone(), b.clone()])
    }
}

/// A contradiction when the pair excludes every value, else retain both.
fn contradict_or_join(contradicts: bool, a: &Equation, b: &Equation) -> Equation {
    if contradicts {
        Equation::Contradiction
    } else {
        and_of([a.clone(), b.clone()])
    }
}

fn and_of(members: impl IntoIterator<Item = Equation>) -> Equation {
    let mut set = BTreeSet::new();
    for member in members {
        match member {
            Equation::Tautology => {}
            Equation::Contradiction => return Equation::Contradiction,
            Equation::And(inner) => set.extend(inner),
            member => {
                set.insert(member);
            }
        }
    }
    collapse(set, Equation::Tautology, Equation::And)
}

fn or_of(members: impl IntoIterator<Item = Equation>) -> Equation {
    let mut set = BTreeSet::new();
    for member in members {
        match member {
            Equation::Contradiction => {}
            Equation::Tautology => return Equation::Tautology,
            Equation::Or(inner) => set.extend(inner),
            member => {
                set.insert(member);
            }
        }
    }
    collapse(set, Equation::Contradiction, Equation::Or)
}

fn collapse(
    mut set: BTreeSet<Equation>,
    empty: Equation,
    compose: fn(BTreeSet<Equation>) -> Equation,
) -> Equation {
    if set.len() > 1 {
        return compose(set);
    }
    set.pop_first().unwrap_or(empty)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use lintel_python_ast::{
        BoolOp, CmpOp, Expr, ExprBoolOp, ExprCall, ExprCompare, ExprName, ExprNumberLiteral,
        ExprParenthesized, ExprUnaryOp, Number, TextRange, UnaryOp,
    };

    use super::Equation;

    fn eq(value: i64) -> Equation {
        Equation::Eq("x".to_string(), BigInt::from(value))
    }

    fn ne(value: i64) -> Equation {
        Equation::NotEq("x".to_string(), BigInt::from(value))
    }

    fn le(bound: i64) -> Equation {
        Equation::LowerEqual("x".to_string(), BigInt::from(bound))
    }

    fn ge(bound: i64) -> Equation {
        Equation::GreaterEqual("x".to_string(), BigInt::from(bound))
    }

    fn truly() -> Equation {
        Equation::Truly("x".to_string())
    }

    fn falsy() -> Equation {
        Equation::Falsy("x".to_string())
    }

    fn and(members: Vec<Equation>) -> Equation {
        Equation::And(members.into_iter().collect())
    }

    fn or(members: Vec<Equation>) -> Equation {
        Equation::Or(members.into_iter().collect())
    }

    fn int(value: i64) -> Expr {
        ExprNumberLiteral {
            range: TextRange::default(),
            value: Number::Int(BigInt::from(value)),
        }
        .into()
    }

    fn name(id: &str) -> Expr {
        ExprName {
            range: TextRange::default(),
            id: id.to_string(),
        }
        .into()
    }

    fn call(func: &str) -> Expr {
        ExprCall {
            range: TextRange::default(),
            func: Box::new(name(func)),
            args: vec![],
        }
        .into()
    }

    fn compare(left: Expr, op: CmpOp, right: Expr) -> Expr {
        ExprCompare {
            range: TextRange::default(),
            left: Box::new(left),
            ops: vec![op],
            comparators: vec![right],
        }
        .into()
    }

    fn bool_op(op: BoolOp, values: Vec<Expr>) -> Expr {
        ExprBoolOp {
            range: TextRange::default(),
            op,
            values,
        }
        .into()
    }

    fn not(operand: Expr) -> Expr {
        ExprUnaryOp {
            range: TextRange::default(),
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }
        .into()
    }

    fn paren(value: Expr) -> Expr {
        ExprParenthesized {
            range: TextRange::default(),
            value: Box::new(value),
        }
        .into()
    }

    #[test_case(eq(3))]
    #[test_case(ne(3))]
    #[test_case(le(5))]
    #[test_case(ge(5))]
    #[test_case(truly())]
    #[test_case(falsy())]
    #[test_case(and(vec![le(5), ge(1)]))]
    #[test_case(or(vec![eq(1), eq(2)]))]
    #[test_case(Equation::Tautology)]
    #[test_case(Equation::Contradiction)]
    #[test_case(Equation::Unknown)]
    fn negation_is_involutive(equation: Equation) {
        assert_eq!(equation.clone().negate().negate(), equation);
    }

    #[test]
    fn negation_per_kind() {
        assert_eq!(eq(3).negate(), ne(3));
        assert_eq!(le(5).negate(), ge(6));
        assert_eq!(ge(5).negate(), le(4));
        assert_eq!(truly().negate(), falsy());
        assert_eq!(
            and(vec![le(5), ge(1)]).negate(),
            or(vec![ge(6), le(0)]),
        );
        assert_eq!(Equation::Tautology.negate(), Equation::Contradiction);
        assert_eq!(Equation::Unknown.negate(), Equation::Unknown);
    }

    #[test_case(eq(3), eq(4))]
    #[test_case(eq(3), ne(3))]
    #[test_case(eq(7), le(5))]
    #[test_case(eq(3), ge(5))]
    #[test_case(eq(0), truly())]
    #[test_case(eq(3), falsy())]
    #[test_case(ne(0), falsy())]
    #[test_case(le(4), ge(5))]
    #[test_case(le(-1), falsy())]
    #[test_case(ge(1), falsy())]
    #[test_case(truly(), falsy())]
    fn exclusive_pairs_merge_to_a_contradiction(a: Equation, b: Equation) {
        assert_eq!(a.clone().merge(b.clone()), Equation::Contradiction);
        assert_eq!(b.merge(a), Equation::Contradiction);
    }

    #[test_case(eq(3), le(5), eq(3); "an exact value inside a bound survives")]
    #[test_case(le(5), eq(3), eq(3))]
    #[test_case(eq(3), ge(1), eq(3))]
    #[test_case(le(4), le(7), le(4); "the tighter upper bound wins")]
    #[test_case(le(7), le(4), le(4))]
    #[test_case(ge(7), ge(4), ge(7); "the tighter lower bound wins")]
    #[test_case(le(5), truly(), le(5))]
    #[test_case(truly(), eq(3), eq(3))]
    #[test_case(falsy(), le(5), falsy())]
    #[test_case(eq(0), falsy(), eq(0))]
    #[test_case(ne(7), le(5), ne(7))]
    #[test_case(truly(), truly(), truly())]
    fn compatible_pairs_subsume(a: Equation, b: Equation, expected: Equation) {
        assert_eq!(a.merge(b), expected);
    }

    #[test_case(ne(3), le(5), and(vec![ne(3), le(5)]))]
    #[test_case(ne(3), ge(1), and(vec![ne(3), ge(1)]))]
    #[test_case(le(5), ge(1), and(vec![le(5), ge(1)]))]
    #[test_case(truly(), ne(3), and(vec![truly(), ne(3)]))]
    #[test_case(ne(3), ne(4), and(vec![ne(3), ne(4)]))]
    #[test_case(ne(3), ne(3), ne(3); "identical restrictions collapse")]
    fn overlapping_pairs_are_retained(a: Equation, b: Equation, expected: Equation) {
        assert_eq!(a.merge(b), expected);
    }

    #[test]
    fn restrictions_on_different_variables_are_independent() {
        let merged = eq(1).merge(Equation::Eq("y".to_string(), BigInt::from(2)));
        assert_eq!(
            merged,
            and(vec![eq(1), Equation::Eq("y".to_string(), BigInt::from(2))])
        );
        assert!(merged.is_satisfiable());
    }

    #[test]
    fn sentinels() {
        assert_eq!(Equation::Tautology.merge(le(5)), le(5));
        assert_eq!(le(5).merge(Equation::Tautology), le(5));
        assert_eq!(Equation::Contradiction.merge(le(5)), Equation::Contradiction);
        assert_eq!(le(5).merge(Equation::Contradiction), Equation::Contradiction);
        assert_eq!(Equation::Unknown.merge(le(5)), le(5));
        assert_eq!(le(5).merge(Equation::Unknown), le(5));
        assert_eq!(
            Equation::Unknown.merge(Equation::Unknown),
            Equation::Unknown
        );
    }

    #[test]
    fn merging_distributes_over_disjunctions() {
        // x <= 0 and (x >= 10 or x == -5): only the second alternative
        // survives.
        assert_eq!(le(0).merge(or(vec![ge(10), eq(-5)])), eq(-5));
        // Every alternative dies: the whole disjunction is a contradiction.
        assert_eq!(le(0).merge(or(vec![ge(10), eq(5)])), Equation::Contradiction);
    }

    #[test]
    fn merging_folds_over_conjunctions() {
        let both = and(vec![eq(1), Equation::Eq("y".to_string(), BigInt::from(2))]);
        assert_eq!(both.merge(eq(3)), Equation::Contradiction);
    }

    #[test_case(eq(3), le(2))]
    #[test_case(ne(5), le(3))]
    #[test_case(le(5), ge(5))]
    #[test_case(truly(), eq(0))]
    #[test_case(falsy(), ge(0))]
    #[test_case(ne(3), le(5))]
    #[test_case(falsy(), ne(0))]
    fn merge_is_commutative_up_to_satisfiability(a: Equation, b: Equation) {
        assert_eq!(
            a.clone().merge(b.clone()).is_satisfiable(),
            b.merge(a).is_satisfiable()
        );
    }

    #[test_case(le(4), ge(5), truly())]
    #[test_case(ne(3), le(5), ge(1))]
    #[test_case(truly(), falsy(), eq(0))]
    #[test_case(eq(2), le(5), ge(3))]
    fn merge_is_associative_up_to_satisfiability(a: Equation, b: Equation, c: Equation) {
        assert_eq!(
            a.clone().merge(b.clone()).merge(c.clone()).is_satisfiable(),
            a.merge(b.merge(c)).is_satisfiable()
        );
    }

    #[test]
    fn member_order_is_irrelevant() {
        assert_eq!(and(vec![le(5), ge(1)]), and(vec![ge(1), le(5)]));
        assert_eq!(or(vec![eq(1), eq(2)]), or(vec![eq(2), eq(1)]));
    }

    #[test]
    fn satisfiability_of_composites() {
        assert!(and(vec![le(5), ge(1)]).is_satisfiable());
        assert!(or(vec![eq(3), ne(3)]).is_satisfiable());
        assert!(!and(vec![le(5), Equation::Contradiction]).is_satisfiable());
        assert!(!or(vec![Equation::Contradiction]).is_satisfiable());
        assert!(or(vec![Equation::Contradiction, truly()]).is_satisfiable());
        assert!(Equation::Unknown.is_satisfiable());
        assert!(Equation::Tautology.is_satisfiable());
    }

    #[test_case(compare(name("x"), CmpOp::Lt, int(5)), le(4))]
    #[test_case(compare(name("x"), CmpOp::Gt, int(5)), ge(6))]
    #[test_case(compare(name("x"), CmpOp::LtE, int(5)), le(5))]
    #[test_case(compare(name("x"), CmpOp::GtE, int(5)), ge(5))]
    #[test_case(compare(name("x"), CmpOp::Eq, int(5)), eq(5))]
    #[test_case(compare(name("x"), CmpOp::NotEq, int(5)), ne(5))]
    fn restrictions_from_comparisons(expr: Expr, expected: Equation) {
        assert_eq!(Equation::of(&expr), expected);
    }

    #[test_case(compare(int(5), CmpOp::Lt, name("x")), ge(5))]
    #[test_case(compare(int(5), CmpOp::Gt, name("x")), le(5))]
    #[test_case(compare(int(5), CmpOp::LtE, name("x")), ge(6))]
    #[test_case(compare(int(5), CmpOp::GtE, name("x")), le(4))]
    #[test_case(compare(int(5), CmpOp::Eq, name("x")), eq(5))]
    #[test_case(compare(int(5), CmpOp::NotEq, name("x")), ne(5))]
    fn restrictions_from_mirrored_comparisons(expr: Expr, expected: Equation) {
        assert_eq!(Equation::of(&expr), expected);
    }

    #[test]
    fn unsupported_conditions_are_unknown() {
        // Comparing two variables is out of reach, including a variable
        // against itself.
        assert_eq!(
            Equation::of(&compare(name("y"), CmpOp::Lt, name("z"))),
            Equation::Unknown
        );
        assert_eq!(
            Equation::of(&compare(name("x"), CmpOp::Lt, name("x"))),
            Equation::Unknown
        );
        assert_eq!(
            Equation::of(&compare(name("x"), CmpOp::Lt, call("f"))),
            Equation::Unknown
        );
        assert_eq!(Equation::of(&call("f")), Equation::Unknown);
        assert_eq!(Equation::of(&not(call("f"))), Equation::Unknown);
        assert_eq!(
            Equation::of(&compare(name("x"), CmpOp::Is, int(5))),
            Equation::Unknown
        );
    }

    #[test]
    fn conditions_over_expressions() {
        assert_eq!(Equation::of(&name("x")), truly());
        assert_eq!(Equation::of(&paren(name("x"))), truly());
        assert_eq!(Equation::of(&not(name("x"))), falsy());

        let contradiction = bool_op(
            BoolOp::And,
            vec![
                compare(name("x"), CmpOp::Lt, int(5)),
                compare(name("x"), CmpOp::Gt, int(10)),
            ],
        );
        assert_eq!(Equation::of(&contradiction), Equation::Contradiction);

        // An unknowable conjunct does not hide the contradiction.
        let with_unknown = bool_op(
            BoolOp::And,
            vec![
                call("f"),
                compare(name("x"), CmpOp::Lt, int(5)),
                compare(name("x"), CmpOp::Gt, int(10)),
            ],
        );
        assert_eq!(Equation::of(&with_unknown), Equation::Contradiction);

        // Structural de-duplication: both alternatives are the same value.
        let duplicated = bool_op(
            BoolOp::Or,
            vec![
                compare(name("x"), CmpOp::Eq, int(3)),
                compare(name("x"), CmpOp::Eq, int(3)),
            ],
        );
        assert_eq!(Equation::of(&duplicated), eq(3));

        let negated = not(paren(bool_op(
            BoolOp::And,
            vec![
                compare(name("x"), CmpOp::GtE, int(0)),
                compare(name("x"), CmpOp::LtE, int(-1)),
            ],
        )));
        assert_eq!(Equation::of(&negated), Equation::Tautology);
    }

    #[test]
    fn constant_conditions_fold() {
        assert_eq!(
            Equation::of(&compare(int(1), CmpOp::Eq, int(1))),
            Equation::Tautology
        );
        assert_eq!(
            Equation::of(&compare(int(1), CmpOp::Eq, int(2))),
            Equation::Contradiction
        );
    }
}
