/// A finding a rule can report. Implementors convert into
/// [`DiagnosticKind`](crate::DiagnosticKind) at the report site.
pub trait Violation {
    /// The identifier of the rule, in kebab case.
    const NAME: &'static str;

    /// The message body to display to the user, to explain the diagnostic.
    fn message(&self) -> String;
}
