//! Parse-and-lint entry points.
//!
//! The engine itself is handed a parsed program; these helpers own the
//! allocator/parser setup for hosts that start from source text. Each call
//! is independent and side-effect-free, so files can be linted concurrently
//! without shared state.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::display_name::{DisplayName, DisplayNameOptions};

/// Lint one file with the `display-name` rule and return its diagnostics in
/// source order.
///
/// The rule runs on whatever program the parser produced; a malformed
/// subtree is the parser collaborator's concern and never aborts analysis
/// of its siblings.
pub fn lint_display_name(
    source_text: &str,
    source_type: SourceType,
    options: DisplayNameOptions,
) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source_text, source_type).parse();
    let mut ctx = LintContext::new(source_text, source_type);
    DisplayName::new(options).run(&ret.program, &mut ctx);
    ctx.into_diagnostics()
}

/// Same as [`lint_display_name`], taking the raw JSON options object the
/// host passes for the rule (`{"acceptTranspilerName": bool}`).
pub fn lint_display_name_json(
    source_text: &str,
    source_type: SourceType,
    options: &serde_json::Value,
) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source_text, source_type).parse();
    let mut ctx = LintContext::new(source_text, source_type);
    DisplayName::from_json(options).run(&ret.program, &mut ctx);
    ctx.into_diagnostics()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jsx() -> SourceType {
        SourceType::default().with_module(true).with_jsx(true)
    }

    #[test]
    fn json_options_reach_the_rule() {
        let code = "var Hello = React.createClass({ render: function() { return <div />; } });";
        let strict = lint_display_name_json(code, jsx(), &serde_json::json!({}));
        assert_eq!(strict.len(), 1);
        let lenient =
            lint_display_name_json(code, jsx(), &serde_json::json!({ "acceptTranspilerName": true }));
        assert!(lenient.is_empty());
    }

    #[test]
    fn rejected_sibling_does_not_abort_analysis() {
        // the argument-less factory call is rejected locally; the class
        // next to it is still classified and reported
        let code = "React.createClass();\n\
                    class Hello extends React.Component { render() { return null; } }";
        let diagnostics = lint_display_name(code, jsx(), DisplayNameOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Hello component definition is missing display name"
        );
    }

    #[test]
    fn no_components_no_diagnostics() {
        let code = "function add(a, b) { return a + b; }";
        assert!(lint_display_name(code, jsx(), DisplayNameOptions::default()).is_empty());
    }
}
