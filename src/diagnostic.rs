use oxc_span::Span;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single lint finding: which rule fired, the message, and where.
///
/// Byte offsets (`start`/`end`) locate the offending node for highlighting;
/// `line`/`column` are 1-based and derived from the source text by the
/// [`crate::LintContext`] that creates the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub rule: String,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    pub fn error(rule: &str, message: String, span: Span, line: u32, column: u32) -> Self {
        Self::new(rule, DiagnosticSeverity::Error, message, span, line, column)
    }

    pub fn warning(rule: &str, message: String, span: Span, line: u32, column: u32) -> Self {
        Self::new(rule, DiagnosticSeverity::Warning, message, span, line, column)
    }

    fn new(
        rule: &str,
        severity: DiagnosticSeverity,
        message: String,
        span: Span,
        line: u32,
        column: u32,
    ) -> Self {
        Diagnostic {
            rule: rule.to_string(),
            severity,
            message,
            start: span.start,
            end: span.end,
            line,
            column,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}
