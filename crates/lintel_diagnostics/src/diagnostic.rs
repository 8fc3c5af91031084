use text_size::TextRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticKind {
    /// The identifier of the diagnostic, used to align the diagnostic with a
    /// rule.
    pub name: String,
    /// The message body to display to the user, to explain the diagnostic.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: TextRange,
}

impl Diagnostic {
    pub fn new<T: Into<DiagnosticKind>>(kind: T, range: TextRange) -> Self {
        Self {
            kind: kind.into(),
            range,
        }
    }
}
