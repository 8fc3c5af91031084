use lintel_diagnostics::Diagnostic;
use lintel_python_ast::statement_visitor::{walk_stmt, StatementVisitor};
use lintel_python_ast::Stmt;

use crate::rules::constant_expression::rules::constant_condition;

/// Collects the diagnostics for one statement tree.
///
/// A checker is created per [`check_suite`] call and carries no state across
/// calls; every condition is re-derived from its own sub-expressions.
pub(crate) struct Checker {
    diagnostics: Vec<Diagnostic>,
}

impl Checker {
    fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<'a> StatementVisitor<'a> for Checker {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        if let Stmt::If(stmt_if) = stmt {
            constant_condition(self, stmt_if);
        }
        walk_stmt(self, stmt);
    }
}

/// Check every branch condition in `suite`, in source order.
///
/// The traversal is pure and self-contained; callers may check independent
/// trees concurrently.
pub fn check_suite(suite: &[Stmt]) -> Vec<Diagnostic> {
    let mut checker = Checker::new();
    checker.visit_body(suite);
    checker.diagnostics
}
