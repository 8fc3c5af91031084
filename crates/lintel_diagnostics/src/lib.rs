//! The diagnostic values reported by analysis rules, and the [`Violation`]
//! contract rules implement to describe themselves.

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use violation::Violation;

mod diagnostic;
mod violation;
