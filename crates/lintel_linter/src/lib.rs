//! Static analysis of branch conditions.
//!
//! [`check_suite`] walks a statement tree and reports a diagnostic for every
//! `if`/`elif` condition that is provably always true or always false from
//! purely local information: constant folding over exact integers and
//! booleans, plus a per-variable constraint algebra for conditions over
//! named variables. A condition that cannot be decided produces no finding;
//! false negatives are acceptable, false positives are not.

pub mod checkers;
pub mod rules;

pub use checkers::ast::check_suite;
