//! `display-name` rule: reports component definitions with no resolvable
//! display name.
//!
//! The rule runs two passes over the program. The first collects the
//! file-level binding table ([`FileBindings`]). The second walks the whole
//! tree, including nested function bodies, offering candidate nodes to the
//! Component Identifier; binding-aware sites (declarator initializers,
//! plain assignments, default exports) are offered before the generic walk
//! reaches the same node, and a span-keyed dedup keeps the first
//! classification, so a wrapped component is diagnosed once, at the
//! innermost definition. Candidates are then resolved in source order and
//! every unresolved one produces a diagnostic anchored at the definition
//! itself, never at a wrapping function.

use oxc_ast::ast::{
    ArrowFunctionExpression, AssignmentExpression, AssignmentTarget, BindingPattern,
    CallExpression, Class, ExportDefaultDeclaration, ExportDefaultDeclarationKind, Function,
    Program, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_syntax::operator::AssignmentOperator;
use oxc_syntax::scope::ScopeFlags;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::component::{self, Binder, Classification, ComponentDefinition};
use crate::context::LintContext;
use crate::diagnostic::DiagnosticSeverity;
use crate::resolver::{self, FileBindings, NameCandidate};
use crate::{RuleCategory, RuleMeta};

/// Rule options, as they arrive from the host configuration:
/// `{ "acceptTranspilerName": bool }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayNameOptions {
    /// Accept a name mechanically inferable from the surrounding binding
    /// (variable name, class name) in lieu of an explicit `displayName`.
    pub accept_transpiler_name: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayName {
    options: DisplayNameOptions,
}

impl RuleMeta for DisplayName {
    const NAME: &'static str = "display-name";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl DisplayName {
    pub fn new(options: DisplayNameOptions) -> Self {
        Self { options }
    }

    /// Build the rule from a raw JSON options object. Unknown or malformed
    /// options fall back to the defaults; schema validation is the host's
    /// concern.
    pub fn from_json(options: &serde_json::Value) -> Self {
        serde_json::from_value(options.clone())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn run(&self, program: &Program<'_>, ctx: &mut LintContext<'_>) {
        let bindings = FileBindings::collect(program);

        let mut collector = CandidateCollector::default();
        collector.visit_program(program);
        let mut definitions = collector.definitions;
        definitions.sort_by_key(|def| def.span.start);

        for def in &definitions {
            if resolver::resolve(def, &bindings, &self.options) == NameCandidate::Unresolved {
                let message = match def.own_name() {
                    Some(name) => format!("{name} component definition is missing display name"),
                    None => "Component definition is missing display name".to_string(),
                };
                ctx.report(Self::NAME, DiagnosticSeverity::Error, message, def.span);
            }
        }
    }
}

#[derive(Default)]
struct CandidateCollector {
    /// Anchor offsets already claimed; keeps the first (binding-aware)
    /// classification of a node and prevents double-reporting wrapped
    /// components.
    seen: FxHashSet<u32>,
    definitions: Vec<ComponentDefinition>,
}

impl CandidateCollector {
    fn offer(&mut self, classification: Classification) {
        if let Classification::Component(def) = classification {
            if self.seen.insert(def.span.start) {
                self.definitions.push(def);
            }
        }
    }
}

impl<'b> Visit<'b> for CandidateCollector {
    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'b>) {
        if let (BindingPattern::BindingIdentifier(ident), Some(init)) = (&decl.id, &decl.init) {
            self.offer(component::classify(
                init,
                Some(Binder::VarInit(ident.name.to_string())),
            ));
        }
        walk::walk_variable_declarator(self, decl);
    }

    fn visit_assignment_expression(&mut self, expr: &AssignmentExpression<'b>) {
        if expr.operator == AssignmentOperator::Assign {
            if let AssignmentTarget::AssignmentTargetIdentifier(ident) = &expr.left {
                self.offer(component::classify(
                    &expr.right,
                    Some(Binder::Assignment {
                        name: ident.name.to_string(),
                        at: expr.span.start,
                    }),
                ));
            }
        }
        walk::walk_assignment_expression(self, expr);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'b>) {
        self.offer(component::classify_call(call, None));
        walk::walk_call_expression(self, call);
    }

    fn visit_class(&mut self, class: &Class<'b>) {
        self.offer(component::classify_class(class, None));
        walk::walk_class(self, class);
    }

    fn visit_function(&mut self, func: &Function<'b>, flags: ScopeFlags) {
        self.offer(component::unwrap_function(func));
        walk::walk_function(self, func, flags);
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'b>) {
        self.offer(component::unwrap_arrow(arrow));
        walk::walk_arrow_function_expression(self, arrow);
    }

    fn visit_export_default_declaration(&mut self, decl: &ExportDefaultDeclaration<'b>) {
        match &decl.declaration {
            ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                self.offer(component::classify_class(class, Some(Binder::DefaultExport)));
            }
            ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                self.offer(component::unwrap_function(func));
            }
            _ => {}
        }
        walk::walk_export_default_declaration(self, decl);
    }
}
