use oxc_span::{SourceType, Span};

use crate::diagnostic::{Diagnostic, DiagnosticSeverity};

/// Context passed to rules during linting: the source under analysis plus
/// an ordered diagnostic sink.
///
/// One context is created per file and discarded after the traversal; rules
/// hold no state across files.
pub struct LintContext<'a> {
    source_text: &'a str,
    source_type: SourceType,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            diagnostics: Vec::new(),
        }
    }

    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Slice of source text covered by a span.
    pub fn span_text(&self, span: Span) -> &'a str {
        &self.source_text[span.start as usize..span.end as usize]
    }

    /// Report a finding anchored at `span`.
    pub fn report(&mut self, rule: &str, severity: DiagnosticSeverity, message: String, span: Span) {
        let (line, column) = line_column(self.source_text, span.start);
        let diagnostic = match severity {
            DiagnosticSeverity::Error => Diagnostic::error(rule, message, span, line, column),
            DiagnosticSeverity::Warning => Diagnostic::warning(rule, message, span, line, column),
        };
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// 1-based line/column for a byte offset. Offsets past the end clamp to the
/// last position.
fn line_column(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let mut line = 1u32;
    let mut line_start = 0usize;
    for (idx, byte) in source.as_bytes()[..offset].iter().enumerate() {
        if *byte == b'\n' {
            line += 1;
            line_start = idx + 1;
        }
    }
    let column = source[line_start..offset].chars().count() as u32 + 1;
    (line, column)
}
