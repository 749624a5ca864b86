//! Name Resolver: decides whether a classified component definition has a
//! resolvable display name.
//!
//! Two strategies, in fixed priority order: an explicit `displayName`
//! (property in the factory object, static class field or getter, or a
//! post-hoc `X.displayName = ...` assignment anywhere in file scope), then
//! a transpiler-inferred name from the surrounding binding, consulted only
//! when `acceptTranspilerName` is enabled. Resolution is pure; running it
//! twice over the same tree and options yields the same candidate.

use oxc_ast::ast::{
    AssignmentExpression, AssignmentTarget, Class, ClassElement, Expression, Function,
    MethodDefinitionKind, ObjectExpression, ObjectPropertyKind, Program, Statement,
    VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_syntax::operator::AssignmentOperator;
use rustc_hash::FxHashMap;

use crate::component::{property_key_name, Binder, ComponentDefinition};
use crate::display_name::DisplayNameOptions;

/// What a definition body itself declares for `displayName`.
///
/// Presence is sufficient: a `displayName` whose value cannot be statically
/// read still counts as explicit. The scanners inspect top-level keys only;
/// spread elements and computed keys never participate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineName {
    /// `displayName` with a statically readable string value.
    Literal(String),
    /// `displayName` is present but its value is not a string literal.
    Present,
    /// No `displayName` in the definition body.
    Absent,
}

/// Result of resolution. `Resolved` carries the name when it is statically
/// readable; `None` means the display name is established but its text is
/// not visible to the engine (non-literal value, or a host-synthesized name
/// for an anonymous default export).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCandidate {
    Resolved(Option<String>),
    Unresolved,
}

/// `displayName` property of a factory-call object argument.
pub(crate) fn scan_object_display_name(obj: &ObjectExpression<'_>) -> InlineName {
    for prop in &obj.properties {
        let ObjectPropertyKind::ObjectProperty(p) = prop else {
            continue;
        };
        if p.computed || property_key_name(&p.key) != Some("displayName") {
            continue;
        }
        return match &p.value {
            Expression::StringLiteral(lit) => InlineName::Literal(lit.value.to_string()),
            _ => InlineName::Present,
        };
    }
    InlineName::Absent
}

/// `static displayName` field or `static get displayName()` in a class
/// body. The getter form counts as explicit regardless of configuration.
pub(crate) fn scan_class_display_name(class: &Class<'_>) -> InlineName {
    for element in &class.body.body {
        match element {
            ClassElement::PropertyDefinition(p)
                if p.r#static && !p.computed && property_key_name(&p.key) == Some("displayName") =>
            {
                return match &p.value {
                    Some(Expression::StringLiteral(lit)) => {
                        InlineName::Literal(lit.value.to_string())
                    }
                    _ => InlineName::Present,
                };
            }
            ClassElement::MethodDefinition(m)
                if m.r#static
                    && !m.computed
                    && m.kind == MethodDefinitionKind::Get
                    && property_key_name(&m.key) == Some("displayName") =>
            {
                return match getter_return_literal(&m.value) {
                    Some(name) => InlineName::Literal(name),
                    None => InlineName::Present,
                };
            }
            _ => {}
        }
    }
    InlineName::Absent
}

fn getter_return_literal(func: &Function<'_>) -> Option<String> {
    let body = func.body.as_deref()?;
    for stmt in &body.statements {
        if let Statement::ReturnStatement(ret) = stmt {
            if let Some(Expression::StringLiteral(lit)) = &ret.argument {
                return Some(lit.value.to_string());
            }
        }
    }
    None
}

#[derive(Debug, Clone, Copy)]
struct VarDecl {
    start: u32,
    has_init: bool,
}

/// File-level binding table, collected once per file before resolution and
/// immutable afterwards. Tracks every variable declarator and every
/// `X.displayName = ...` assignment target. Reachability of the assignments
/// is deliberately not analyzed: any textual match in file scope counts.
#[derive(Debug, Default)]
pub struct FileBindings {
    declarations: FxHashMap<String, Vec<VarDecl>>,
    display_name_assignments: FxHashMap<String, Option<String>>,
}

impl FileBindings {
    pub fn collect(program: &Program<'_>) -> Self {
        let mut collector = BindingCollector {
            bindings: FileBindings::default(),
        };
        collector.visit_program(program);
        collector.bindings
    }

    /// Is there a `name.displayName = ...` assignment anywhere in the file?
    pub fn has_display_name_assignment(&self, name: &str) -> bool {
        self.display_name_assignments.contains_key(name)
    }

    /// The assigned display name, when it was a string literal.
    pub fn display_name_assignment(&self, name: &str) -> Option<String> {
        self.display_name_assignments.get(name)?.clone()
    }

    /// Was `name` declared with no initializer before byte offset `at`?
    /// Supports the `var X; X = factory({...})` declaration-then-assignment
    /// convention.
    pub fn declared_without_init_before(&self, name: &str, at: u32) -> bool {
        self.declarations
            .get(name)
            .is_some_and(|decls| decls.iter().any(|d| !d.has_init && d.start < at))
    }
}

struct BindingCollector {
    bindings: FileBindings,
}

impl<'b> Visit<'b> for BindingCollector {
    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'b>) {
        if let oxc_ast::ast::BindingPattern::BindingIdentifier(ident) = &decl.id {
            self.bindings
                .declarations
                .entry(ident.name.to_string())
                .or_default()
                .push(VarDecl {
                    start: decl.span.start,
                    has_init: decl.init.is_some(),
                });
        }
        walk::walk_variable_declarator(self, decl);
    }

    fn visit_assignment_expression(&mut self, expr: &AssignmentExpression<'b>) {
        if expr.operator == AssignmentOperator::Assign {
            if let AssignmentTarget::StaticMemberExpression(member) = &expr.left {
                if member.property.name == "displayName" {
                    if let Expression::Identifier(object) = &member.object {
                        let value = match &expr.right {
                            Expression::StringLiteral(lit) => Some(lit.value.to_string()),
                            _ => None,
                        };
                        self.bindings
                            .display_name_assignments
                            .insert(object.name.to_string(), value);
                    }
                }
            }
        }
        walk::walk_assignment_expression(self, expr);
    }
}

/// Resolve a display name for `def`, first explicit, then (when enabled)
/// transpiler-inferred. First success wins.
pub fn resolve(
    def: &ComponentDefinition,
    bindings: &FileBindings,
    options: &DisplayNameOptions,
) -> NameCandidate {
    match &def.inline_name {
        InlineName::Literal(name) => return NameCandidate::Resolved(Some(name.clone())),
        InlineName::Present => return NameCandidate::Resolved(None),
        InlineName::Absent => {}
    }

    if let Some(bound) = def.bound_name() {
        if bindings.has_display_name_assignment(bound) {
            return NameCandidate::Resolved(bindings.display_name_assignment(bound));
        }
    }

    if options.accept_transpiler_name {
        match &def.binder {
            Some(Binder::Assignment { name, at }) => {
                if bindings.declared_without_init_before(name, *at) {
                    return NameCandidate::Resolved(Some(name.clone()));
                }
            }
            Some(Binder::VarInit(name)) | Some(Binder::ClassName(name)) => {
                return NameCandidate::Resolved(Some(name.clone()));
            }
            Some(Binder::DefaultExport) => return NameCandidate::Resolved(None),
            None => {}
        }
    }

    NameCandidate::Unresolved
}
