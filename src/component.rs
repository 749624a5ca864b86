//! Component Identifier: classifies AST subtrees as React component
//! definitions.
//!
//! A definition takes one of three shapes: a `createClass`-style factory
//! call whose argument is an object literal with a `render` method, a class
//! extending the React base component type with a `render` method, or a
//! function whose body returns one of the former (the inner definition is
//! hoisted as the effective component). A bare object literal with a
//! `render` method that never reaches a factory call is explicitly not a
//! component.

use oxc_ast::ast::{
    Argument, ArrowFunctionExpression, CallExpression, Class, ClassElement, Expression, Function,
    MethodDefinitionKind, ObjectExpression, ObjectPropertyKind, PropertyKey, Statement,
};
use oxc_span::Span;

use crate::resolver::{self, InlineName};

/// Nesting bound for the function-unwrapping recursion. Deeper towers of
/// functions-returning-functions are rejected rather than followed.
const MAX_UNWRAP_DEPTH: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// `React.createClass({ render() {...} })`
    FactoryCall,
    /// `class X extends React.Component { render() {...} }`
    ClassExtendingBase,
    /// A function whose body returns one of the other shapes; the inner
    /// definition is the component, the function itself is transparent.
    FunctionReturningFactory,
}

/// The identifier a definition is syntactically bound to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binder {
    /// `var Name = <definition>`
    VarInit(String),
    /// `Name = <definition>`; `at` is the byte offset of the assignment,
    /// used to check that `Name` was declared (without initializer) earlier.
    Assignment { name: String, at: u32 },
    /// The class's own name.
    ClassName(String),
    /// Anonymous `export default`; the host synthesizes a name.
    DefaultExport,
}

/// A classified component definition. Owns everything it needs so it can
/// outlive the traversal that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    pub kind: ComponentKind,
    /// Anchor node: the class itself or the factory call's object literal.
    pub span: Span,
    pub binder: Option<Binder>,
    /// What the definition body declares for `displayName`, scanned at
    /// classification time (see [`crate::resolver`] for the semantics).
    pub inline_name: InlineName,
}

impl ComponentDefinition {
    /// Name the definition is bound to, whatever the binding style.
    pub fn bound_name(&self) -> Option<&str> {
        match &self.binder {
            Some(Binder::VarInit(name))
            | Some(Binder::Assignment { name, .. })
            | Some(Binder::ClassName(name)) => Some(name),
            _ => None,
        }
    }

    /// The definition's own name: present only when the class names itself.
    /// Diagnostic messages use this, not the surrounding binding.
    pub fn own_name(&self) -> Option<&str> {
        match &self.binder {
            Some(Binder::ClassName(name)) => Some(name),
            _ => None,
        }
    }
}

/// Outcome of classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Component(ComponentDefinition),
    /// Object literal with a `render` method that was not reached through a
    /// factory call. Rejected: incidental objects with a method named
    /// `render` are not components.
    StandaloneObjectLiteral,
    NotComponent,
}

/// Classify an expression, carrying the binding it appears under (if any).
///
/// Detection order: function unwrapping first (recursively), then factory
/// call, then class. Unwrapping drops the binder hint: the outer binding
/// never names the inner component.
pub fn classify(expr: &Expression<'_>, binder: Option<Binder>) -> Classification {
    classify_at_depth(expr, binder, 0)
}

fn classify_at_depth(expr: &Expression<'_>, binder: Option<Binder>, depth: u32) -> Classification {
    if depth > MAX_UNWRAP_DEPTH {
        return Classification::NotComponent;
    }
    match expr {
        Expression::ParenthesizedExpression(paren) => {
            classify_at_depth(&paren.expression, binder, depth)
        }
        Expression::FunctionExpression(func) => unwrap_function_at_depth(func, depth),
        Expression::ArrowFunctionExpression(arrow) => unwrap_arrow_at_depth(arrow, depth),
        Expression::CallExpression(call) => classify_call(call, binder),
        Expression::ClassExpression(class) => classify_class(class, binder),
        Expression::ObjectExpression(obj) if object_has_render(obj) => {
            Classification::StandaloneObjectLiteral
        }
        _ => Classification::NotComponent,
    }
}

/// Classify a factory call: callee must be a known creation function and the
/// first argument an object literal containing a top-level `render` key.
pub fn classify_call(call: &CallExpression<'_>, binder: Option<Binder>) -> Classification {
    if !is_factory_callee(&call.callee) {
        return Classification::NotComponent;
    }
    let Some(Argument::ObjectExpression(obj)) = call.arguments.first() else {
        return Classification::NotComponent;
    };
    if !object_has_render(obj) {
        return Classification::NotComponent;
    }
    Classification::Component(ComponentDefinition {
        kind: ComponentKind::FactoryCall,
        span: obj.span,
        binder,
        inline_name: resolver::scan_object_display_name(obj),
    })
}

/// Classify a class: the superclass must resolve, directly or through a
/// member-access chain, to the base component type, and the body must
/// define a `render` method. A named class binds to its own name and
/// ignores any surrounding binding.
pub fn classify_class(class: &Class<'_>, binder: Option<Binder>) -> Classification {
    if !extends_component_base(class) || !class_has_render(class) {
        return Classification::NotComponent;
    }
    let binder = match &class.id {
        Some(id) => Some(Binder::ClassName(id.name.to_string())),
        None => binder,
    };
    Classification::Component(ComponentDefinition {
        kind: ComponentKind::ClassExtendingBase,
        span: class.span,
        binder,
        inline_name: resolver::scan_class_display_name(class),
    })
}

/// Unwrap a function: if its body returns a component definition, hoist the
/// inner definition as the effective component.
pub fn unwrap_function(func: &Function<'_>) -> Classification {
    unwrap_function_at_depth(func, 0)
}

fn unwrap_function_at_depth(func: &Function<'_>, depth: u32) -> Classification {
    let Some(body) = &func.body else {
        return Classification::NotComponent;
    };
    returned_component(&body.statements, depth + 1)
}

/// Unwrap an arrow function; an expression body (`() => expr`) is treated as
/// a returned expression.
pub fn unwrap_arrow(arrow: &ArrowFunctionExpression<'_>) -> Classification {
    unwrap_arrow_at_depth(arrow, 0)
}

fn unwrap_arrow_at_depth(arrow: &ArrowFunctionExpression<'_>, depth: u32) -> Classification {
    if arrow.expression {
        if let Some(Statement::ExpressionStatement(stmt)) = arrow.body.statements.first() {
            return hoist(classify_at_depth(&stmt.expression, None, depth + 1));
        }
        return Classification::NotComponent;
    }
    returned_component(&arrow.body.statements, depth + 1)
}

/// Scan statements for a `return` whose argument classifies as a component.
/// Recurses through control flow but never into nested function bodies; a
/// return inside those does not return from this function.
fn returned_component(stmts: &[Statement<'_>], depth: u32) -> Classification {
    for stmt in stmts {
        let found = returned_component_in_statement(stmt, depth);
        if matches!(found, Classification::Component(_)) {
            return found;
        }
    }
    Classification::NotComponent
}

fn returned_component_in_statement(stmt: &Statement<'_>, depth: u32) -> Classification {
    match stmt {
        Statement::ReturnStatement(ret) => match &ret.argument {
            Some(argument) => hoist(classify_at_depth(argument, None, depth)),
            None => Classification::NotComponent,
        },
        Statement::BlockStatement(block) => returned_component(&block.body, depth),
        Statement::IfStatement(stmt) => {
            let found = returned_component_in_statement(&stmt.consequent, depth);
            if matches!(found, Classification::Component(_)) {
                return found;
            }
            match &stmt.alternate {
                Some(alternate) => returned_component_in_statement(alternate, depth),
                None => Classification::NotComponent,
            }
        }
        Statement::TryStatement(stmt) => {
            let found = returned_component(&stmt.block.body, depth);
            if matches!(found, Classification::Component(_)) {
                return found;
            }
            if let Some(handler) = &stmt.handler {
                let found = returned_component(&handler.body.body, depth);
                if matches!(found, Classification::Component(_)) {
                    return found;
                }
            }
            match &stmt.finalizer {
                Some(finalizer) => returned_component(&finalizer.body, depth),
                None => Classification::NotComponent,
            }
        }
        Statement::SwitchStatement(stmt) => {
            for case in &stmt.cases {
                let found = returned_component(&case.consequent, depth);
                if matches!(found, Classification::Component(_)) {
                    return found;
                }
            }
            Classification::NotComponent
        }
        Statement::WhileStatement(stmt) => returned_component_in_statement(&stmt.body, depth),
        Statement::DoWhileStatement(stmt) => returned_component_in_statement(&stmt.body, depth),
        Statement::ForStatement(stmt) => returned_component_in_statement(&stmt.body, depth),
        Statement::ForInStatement(stmt) => returned_component_in_statement(&stmt.body, depth),
        Statement::ForOfStatement(stmt) => returned_component_in_statement(&stmt.body, depth),
        Statement::LabeledStatement(stmt) => returned_component_in_statement(&stmt.body, depth),
        _ => Classification::NotComponent,
    }
}

/// Re-tag an unwrapped inner definition. The wrapping function is
/// transparent to naming, so the binder stays whatever the inner definition
/// established on its own (its class name, or nothing).
fn hoist(inner: Classification) -> Classification {
    match inner {
        Classification::Component(mut def) => {
            if def.own_name().is_none() {
                def.binder = None;
            }
            def.kind = ComponentKind::FunctionReturningFactory;
            Classification::Component(def)
        }
        _ => Classification::NotComponent,
    }
}

fn is_factory_callee(callee: &Expression<'_>) -> bool {
    match callee {
        Expression::StaticMemberExpression(member) => member.property.name == "createClass",
        Expression::Identifier(ident) => {
            ident.name == "createClass" || ident.name == "createReactClass"
        }
        _ => false,
    }
}

fn object_has_render(obj: &ObjectExpression<'_>) -> bool {
    obj.properties.iter().any(|prop| match prop {
        ObjectPropertyKind::ObjectProperty(p) => {
            !p.computed && property_key_name(&p.key) == Some("render")
        }
        ObjectPropertyKind::SpreadProperty(_) => false,
    })
}

fn extends_component_base(class: &Class<'_>) -> bool {
    let Some(super_class) = &class.super_class else {
        return false;
    };
    matches!(
        member_chain_tail(super_class),
        Some("Component") | Some("PureComponent")
    )
}

/// Last identifier of a (possibly chained) member access, or the identifier
/// itself: `React.Component` and `Component` both yield `Component`.
fn member_chain_tail<'b>(expr: &'b Expression<'_>) -> Option<&'b str> {
    match expr {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        _ => None,
    }
}

fn class_has_render(class: &Class<'_>) -> bool {
    class.body.body.iter().any(|element| match element {
        ClassElement::MethodDefinition(m) => {
            m.kind == MethodDefinitionKind::Method
                && !m.computed
                && property_key_name(&m.key) == Some("render")
        }
        _ => false,
    })
}

/// Statically readable property-key name: identifier or string-literal keys
/// only. Computed and private keys yield `None`.
pub(crate) fn property_key_name<'b>(key: &'b PropertyKey<'_>) -> Option<&'b str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn jsx_source_type() -> SourceType {
        SourceType::default().with_module(true).with_jsx(true)
    }

    /// Classify the initializer of the first variable declarator, with a
    /// `VarInit` binder, the way the rule coordinator offers it.
    fn classify_first_init(code: &str) -> Classification {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, code, jsx_source_type()).parse();
        for stmt in &ret.program.body {
            if let Statement::VariableDeclaration(decl) = stmt {
                let declarator = decl.declarations.first().expect("declarator");
                let init = declarator.init.as_ref().expect("initializer");
                let oxc_ast::ast::BindingPattern::BindingIdentifier(ident) = &declarator.id
                else {
                    panic!("expected identifier binding");
                };
                return classify(init, Some(Binder::VarInit(ident.name.to_string())));
            }
        }
        panic!("no variable declaration in fixture");
    }

    fn expect_component(classification: Classification) -> ComponentDefinition {
        match classification {
            Classification::Component(def) => def,
            other => panic!("expected component, got {other:?}"),
        }
    }

    #[test]
    fn factory_call_is_component() {
        let def = expect_component(classify_first_init(
            "var Hello = React.createClass({ render: function() { return <div/>; } });",
        ));
        assert_eq!(def.kind, ComponentKind::FactoryCall);
        assert_eq!(def.bound_name(), Some("Hello"));
        assert_eq!(def.inline_name, InlineName::Absent);
    }

    #[test]
    fn factory_call_reads_inline_display_name() {
        let def = expect_component(classify_first_init(
            "var Hello = React.createClass({ displayName: 'Hello', render: function() { return <div/>; } });",
        ));
        assert_eq!(def.inline_name, InlineName::Literal("Hello".to_string()));
    }

    #[test]
    fn factory_call_without_render_is_not_component() {
        let classification =
            classify_first_init("var config = React.createClass({ onClick: function() {} });");
        assert_eq!(classification, Classification::NotComponent);
    }

    #[test]
    fn bare_create_react_class_is_factory() {
        let def = expect_component(classify_first_init(
            "var Hello = createReactClass({ render: function() { return <div/>; } });",
        ));
        assert_eq!(def.kind, ComponentKind::FactoryCall);
    }

    #[test]
    fn standalone_object_with_render_is_rejected() {
        let classification =
            classify_first_init("var impostor = { render: function() { return 1; } };");
        assert_eq!(classification, Classification::StandaloneObjectLiteral);
    }

    #[test]
    fn class_extending_react_component() {
        let def = expect_component(classify_first_init(
            "var X = class Hello extends React.Component { render() { return <div/>; } };",
        ));
        assert_eq!(def.kind, ComponentKind::ClassExtendingBase);
        // the class's own name wins over the variable binding
        assert_eq!(def.own_name(), Some("Hello"));
    }

    #[test]
    fn anonymous_class_expression_keeps_var_binder() {
        let def = expect_component(classify_first_init(
            "var Hello = class extends React.Component { render() { return <div/>; } };",
        ));
        assert_eq!(def.own_name(), None);
        assert_eq!(def.bound_name(), Some("Hello"));
    }

    #[test]
    fn class_without_react_base_is_not_component() {
        let classification = classify_first_init(
            "var Hello = class Hello { render() { return 'Hello World'; } };",
        );
        assert_eq!(classification, Classification::NotComponent);
    }

    #[test]
    fn class_extending_other_base_is_not_component() {
        let classification = classify_first_init(
            "var Hello = class extends Widget { render() { return <div/>; } };",
        );
        assert_eq!(classification, Classification::NotComponent);
    }

    #[test]
    fn class_without_render_is_not_component() {
        let classification =
            classify_first_init("var Hello = class extends React.Component { foo() {} };");
        assert_eq!(classification, Classification::NotComponent);
    }

    #[test]
    fn pure_component_base_is_recognized() {
        let def = expect_component(classify_first_init(
            "var Hello = class extends React.PureComponent { render() { return <div/>; } };",
        ));
        assert_eq!(def.kind, ComponentKind::ClassExtendingBase);
    }

    #[test]
    fn function_returning_factory_is_unwrapped() {
        let def = expect_component(classify_first_init(
            "var make = function() { return React.createClass({ render: function() { return <div/>; } }); };",
        ));
        assert_eq!(def.kind, ComponentKind::FunctionReturningFactory);
        // the outer binding never names the inner component
        assert_eq!(def.bound_name(), None);
    }

    #[test]
    fn arrow_expression_body_is_unwrapped() {
        let def = expect_component(classify_first_init(
            "var make = () => React.createClass({ render: function() { return <div/>; } });",
        ));
        assert_eq!(def.kind, ComponentKind::FunctionReturningFactory);
        assert_eq!(def.bound_name(), None);
    }

    #[test]
    fn return_inside_if_block_is_found() {
        let def = expect_component(classify_first_init(
            "var make = function(flag) { if (flag) { return React.createClass({ render: function() { return <div/>; } }); } return null; };",
        ));
        assert_eq!(def.kind, ComponentKind::FunctionReturningFactory);
    }

    #[test]
    fn return_inside_nested_function_is_not_unwrapped() {
        let classification = classify_first_init(
            "var make = function() { var inner = function() { return React.createClass({ render: function() { return <div/>; } }); }; return null; };",
        );
        assert_eq!(classification, Classification::NotComponent);
    }

    #[test]
    fn function_returning_nothing_is_not_component() {
        let classification = classify_first_init("var make = function() { return 42; };");
        assert_eq!(classification, Classification::NotComponent);
    }

    #[test]
    fn anchor_span_is_object_literal() {
        let code = "var Hello = React.createClass({ render: function() { return <div/>; } });";
        let def = expect_component(classify_first_init(code));
        let anchored = &code[def.span.start as usize..def.span.end as usize];
        assert!(anchored.starts_with('{'));
        assert!(anchored.ends_with('}'));
    }
}
