use std::iter;

use text_size::TextRange;

use crate::{Expr, Ranged, Stmt, StmtIf};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BranchKind {
    If,
    Elif,
}

/// One guarded branch of an `if` statement: the `if` itself or an `elif`
/// clause. A final `else` clause carries no test and is not a branch in
/// this sense.
#[derive(Debug)]
pub struct IfElifBranch<'a> {
    pub kind: BranchKind,
    pub test: &'a Expr,
    pub body: &'a [Stmt],
    range: TextRange,
}

impl Ranged for IfElifBranch<'_> {
    fn range(&self) -> TextRange {
        self.range
    }
}

/// Iterate over the guarded branches of `stmt_if`, each as an independent
/// root: no state carries over from one clause to the next.
pub fn if_elif_branches<'a>(stmt_if: &'a StmtIf) -> impl Iterator<Item = IfElifBranch<'a>> + 'a {
    iter::once(IfElifBranch {
        kind: BranchKind::If,
        test: stmt_if.test.as_ref(),
        body: stmt_if.body.as_slice(),
        range: TextRange::new(
            stmt_if.range.start(),
            stmt_if.body.last().map_or(stmt_if.test.end(), Ranged::end),
        ),
    })
    .chain(stmt_if.elif_else_clauses.iter().filter_map(|clause| {
        Some(IfElifBranch {
            kind: BranchKind::Elif,
            test: clause.test.as_ref()?,
            body: clause.body.as_slice(),
            range: clause.range,
        })
    }))
}
