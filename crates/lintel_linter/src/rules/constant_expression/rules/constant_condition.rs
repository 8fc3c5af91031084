use lintel_diagnostics::{Diagnostic, DiagnosticKind, Violation};
use lintel_python_ast::helpers::boolean_value;
use lintel_python_ast::stmt_if::if_elif_branches;
use lintel_python_ast::{Ranged, StmtIf};

use crate::checkers::ast::Checker;
use crate::rules::constant_expression::equation::Equation;

/// ## What it does
/// Checks for `if` and `elif` conditions that are provably always true or
/// always false.
///
/// ## Why is this bad?
/// A branch guarded by a constant condition either always runs or can never
/// run. The guard is at best redundant and at worst hides a typo in the
/// intended condition.
///
/// ## Example
/// ```python
/// if x < 5 and x > 10:
///     handle_midrange(x)
/// ```
///
/// The two bounds exclude each other, so the body is dead code.
pub struct ConstantCondition {
    value: bool,
}

impl Violation for ConstantCondition {
    const NAME: &'static str = "constant-condition";

    fn message(&self) -> String {
        let ConstantCondition { value } = self;
        format!("The condition is always {value}")
    }
}

impl From<ConstantCondition> for DiagnosticKind {
    fn from(violation: ConstantCondition) -> Self {
        Self {
            name: ConstantCondition::NAME.to_string(),
            body: violation.message(),
        }
    }
}

/// Report every branch of `stmt_if` whose condition has a provable constant
/// value. Each clause is checked in isolation.
pub(crate) fn constant_condition(checker: &mut Checker, stmt_if: &StmtIf) {
    for branch in if_elif_branches(stmt_if) {
        // A condition that folds to a definite boolean needs no constraint
        // reasoning.
        if let Some(value) = boolean_value(branch.test) {
            checker.report_diagnostic(Diagnostic::new(
                ConstantCondition { value },
                branch.test.range(),
            ));
            continue;
        }
        let equation = Equation::of(branch.test);
        if !equation.is_satisfiable() {
            // No assignment satisfies the condition: the branch can never be
            // taken.
            checker.report_diagnostic(Diagnostic::new(
                ConstantCondition { value: false },
                branch.test.range(),
            ));
        } else if !equation.negate().is_satisfiable() {
            // No assignment falsifies the condition: the branch is always
            // taken.
            checker.report_diagnostic(Diagnostic::new(
                ConstantCondition { value: true },
                branch.test.range(),
            ));
        }
    }
}
