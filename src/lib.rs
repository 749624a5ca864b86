//! React lint rules over the oxc AST.
//!
//! Rules here are ports of eslint-plugin-react rules. Each rule is a plain
//! struct that walks a parsed [`oxc_ast::ast::Program`] and reports
//! diagnostics through a [`LintContext`]; parsing, option-schema validation
//! and report formatting belong to the host.
//!
//! Currently implemented:
//! - `display-name`: every component definition must have a resolvable
//!   display name.

mod component;
mod context;
mod diagnostic;
mod display_name;
mod resolver;
mod runner;

pub use component::{
    classify, classify_call, classify_class, unwrap_arrow, unwrap_function, Binder,
    Classification, ComponentDefinition, ComponentKind,
};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use display_name::{DisplayName, DisplayNameOptions};
pub use resolver::{resolve, FileBindings, InlineName, NameCandidate};
pub use runner::{lint_display_name, lint_display_name_json};

/// Rule category, following the usual lint taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect.
    Correctness,
    /// Rules that suggest improvements.
    Pedantic,
    /// Rules that encourage best practices.
    Style,
}

/// Rule metadata.
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;

    /// URL to the upstream rule documentation.
    fn docs_url() -> String {
        format!(
            "https://github.com/jsx-eslint/eslint-plugin-react/blob/master/docs/rules/{}.md",
            Self::NAME
        )
    }
}
