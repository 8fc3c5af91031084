//! A read-only Python expression and statement tree, as supplied by an
//! embedding host, together with constant-evaluation helpers over it.
//!
//! The tree is a closed sum type per node category: adding a node kind means
//! extending the enum and updating every match site, which the compiler
//! enforces. Nodes are never mutated by analysis code.

pub mod helpers;
mod nodes;
pub mod statement_visitor;
pub mod stmt_if;

pub use nodes::*;
pub use text_size::{TextRange, TextSize};
