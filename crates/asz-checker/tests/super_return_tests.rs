//! Tests for super calls in constructors, `return` statements and the
//! falls-off-the-end control-flow check.

use crate::state::{CheckOutcome, SkipReason, SuperState};
use crate::test_fixture::{Fixture, init_tracing};
use asz_ast::{ClassData, FunctionData, NodeIndex};
use asz_binder::{BuiltinType, ClassInfo, DefId, Definition, FunctionRole, ParameterInfo};
use asz_common::diagnostics::diagnostic_codes;
use asz_lowering::{InstructionList, Opcode};

/// A function node named `name` whose body holds `statements`, declared
/// with `role` and an optional return type.
fn declared_function(
    fixture: &mut Fixture,
    name: &str,
    role: FunctionRole,
    return_type: Option<BuiltinType>,
    statements: Vec<NodeIndex>,
) -> (NodeIndex, DefId) {
    let arena = fixture.arena();
    let name_node = arena.add_identifier(name);
    let body = arena.add_block(statements);
    let fn_node = arena.add_function(FunctionData {
        name: name_node,
        body,
        ..FunctionData::default()
    });
    let info = fixture.function_info(role, Vec::new(), None);
    let mut def = Definition::function(name, info);
    if let Some(ty) = return_type {
        def = def.with_type(fixture.builtin_type(ty));
    }
    (fn_node, fixture.declare(def, fn_node))
}

fn super_call(fixture: &mut Fixture, arguments: Vec<NodeIndex>) -> NodeIndex {
    let arena = fixture.arena();
    let callee = arena.add_super();
    arena.add_call(callee, arguments)
}

// =============================================================================
// Explicit super calls
// =============================================================================

#[test]
fn test_second_super_call_is_extraneous() {
    init_tracing();
    let mut fixture = Fixture::new();
    let first = super_call(&mut fixture, Vec::new());
    let second = super_call(&mut fixture, Vec::new());
    declared_function(&mut fixture, "Widget", FunctionRole::Constructor, None, vec![first, second]);

    let mut checker = fixture.checker();
    let scope = checker.enter_constructor();
    checker.check_explicit_super_call(first, &[]);
    assert_eq!(checker.super_state(), SuperState::Armed);
    checker.check_explicit_super_call(second, &[]);
    checker.leave_constructor(scope);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::EXTRANEOUS_SUPER_STATEMENT]);
    assert_eq!(checker.super_state(), SuperState::Invalid);
}

#[test]
fn test_super_call_after_return() {
    let mut fixture = Fixture::new();
    let ret = fixture.arena().add_return(NodeIndex::NONE);
    let call = super_call(&mut fixture, Vec::new());
    declared_function(&mut fixture, "Widget", FunctionRole::Constructor, None, vec![ret, call]);

    let mut checker = fixture.checker();
    let scope = checker.enter_constructor();
    checker.check_return_void(ret);
    checker.check_explicit_super_call(call, &[]);
    checker.leave_constructor(scope);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::EXTRANEOUS_SUPER_STATEMENT]);
}

#[test]
fn test_super_call_outside_constructor() {
    let mut fixture = Fixture::new();
    let call = super_call(&mut fixture, Vec::new());
    declared_function(&mut fixture, "draw", FunctionRole::Plain, None, vec![call]);

    let mut checker = fixture.checker();
    checker.check_explicit_super_call(call, &[]);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::INVALID_SUPER_STATEMENT]);
}

/// `class Derived extends Base { function Derived() { body } }`, where the
/// base constructor takes one `int` (optional when `base_default`). Returns
/// the derived class node.
fn derived_class(fixture: &mut Fixture, body: Vec<NodeIndex>, base_default: bool, explicit_ctor: bool) -> NodeIndex {
    let project_scope = fixture.project.project_scope();
    let scope = fixture.add_function_scope(project_scope);
    let param_node = fixture.arena().add_identifier("size");
    let int = fixture.builtin_type(BuiltinType::Int);
    let param = fixture.parameter(
        "size",
        Some(int),
        ParameterInfo {
            has_default: base_default,
            ..ParameterInfo::default()
        },
        param_node,
        scope,
    );
    let info = fixture.function_info(FunctionRole::Constructor, vec![param], Some(scope));
    let base_ctor = fixture.project.add_definition(Definition::function("Base", info));
    let base_node = fixture.arena().add_identifier("Base");
    let (base, _) = fixture.add_class(
        "Base",
        ClassInfo {
            constructor: Some(base_ctor),
            ..ClassInfo::default()
        },
        base_node,
    );

    let mut members = Vec::new();
    let mut ctor_node = NodeIndex::NONE;
    if explicit_ctor {
        let arena = fixture.arena();
        let name = arena.add_identifier("Derived");
        let ctor_body = arena.add_block(body);
        ctor_node = arena.add_function(FunctionData {
            name,
            body: ctor_body,
            ..FunctionData::default()
        });
        members.push(ctor_node);
    }
    let arena = fixture.arena();
    let name = arena.add_identifier("Derived");
    let extends = arena.add_identifier("Base");
    let class_body = arena.add_block(members);
    let class_node = arena.add_class(ClassData {
        name,
        base: extends,
        body: class_body,
        ..ClassData::default()
    });
    fixture.bind(extends, base, "Base");

    let ctor = explicit_ctor.then(|| {
        let info = fixture.function_info(FunctionRole::Constructor, Vec::new(), None);
        fixture.declare(Definition::function("Derived", info), ctor_node)
    });
    fixture.add_class(
        "Derived",
        ClassInfo {
            base_class: Some(base),
            constructor: ctor,
            ..ClassInfo::default()
        },
        class_node,
    );
    class_node
}

#[test]
fn test_super_arguments_are_checked_against_base_constructor() {
    let mut fixture = Fixture::new();
    let argument = fixture.arena().add_string("big");
    let call = super_call(&mut fixture, vec![argument]);
    derived_class(&mut fixture, vec![call], false, true);
    let argument_start = fixture.arena().span(argument).start;

    let mut checker = fixture.checker();
    let scope = checker.enter_constructor();
    checker.check_explicit_super_call(call, &[argument]);
    checker.leave_constructor(scope);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]
    );
    assert_eq!(checker.diagnostics[0].start, argument_start);
}

#[test]
fn test_super_call_missing_required_argument() {
    let mut fixture = Fixture::new();
    let call = super_call(&mut fixture, Vec::new());
    derived_class(&mut fixture, vec![call], false, true);

    let mut checker = fixture.checker();
    let scope = checker.enter_constructor();
    checker.check_explicit_super_call(call, &[]);
    checker.leave_constructor(scope);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::TOO_FEW_FUNCTION_PARAMETERS]);
}

#[test]
fn test_implicit_super_call_needs_default_base_constructor() {
    let mut fixture = Fixture::new();
    let class_node = derived_class(&mut fixture, Vec::new(), false, false);
    let class_start = fixture.arena().span(class_node).start;

    let mut checker = fixture.checker();
    checker.check_default_super_call(class_node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::NO_DEFAULT_CONSTRUCTOR_IN_BASE_CLASS]
    );
    assert_eq!(checker.diagnostics[0].start, class_start);
    assert!(checker.diagnostics[0].message_text.contains("Base"));
}

#[test]
fn test_implicit_super_call_with_optional_base_parameter() {
    let mut fixture = Fixture::new();
    let class_node = derived_class(&mut fixture, Vec::new(), true, false);
    let mut checker = fixture.checker();
    checker.check_default_super_call(class_node);
    assert!(checker.diagnostics.is_empty(), "got: {:?}", checker.diagnostic_codes());
}

// =============================================================================
// return
// =============================================================================

fn return_codes(return_type: Option<BuiltinType>, role: FunctionRole, value: impl FnOnce(&mut Fixture) -> NodeIndex) -> Vec<u32> {
    let mut fixture = Fixture::new();
    let expression = value(&mut fixture);
    let ret = fixture.arena().add_return(expression);
    declared_function(&mut fixture, "f", role, return_type, vec![ret]);
    let mut checker = fixture.checker();
    assert_eq!(checker.check_return_value(ret), CheckOutcome::Checked);
    checker.diagnostic_codes()
}

#[test]
fn test_returned_value_converts_to_return_type() {
    let codes = return_codes(Some(BuiltinType::Number), FunctionRole::Plain, |f| {
        f.arena().add_string("hi")
    });
    assert_eq!(codes, vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]);

    let codes = return_codes(Some(BuiltinType::Number), FunctionRole::Plain, |f| {
        f.arena().add_number(1.5)
    });
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_void_function_returning_a_value() {
    let codes = return_codes(Some(BuiltinType::Void), FunctionRole::Plain, |f| {
        f.arena().add_number(1.0)
    });
    assert_eq!(codes, vec![diagnostic_codes::RETURN_VALUE_MUST_BE_UNDEFINED]);
}

#[test]
fn test_void_function_returning_undefined() {
    let codes = return_codes(Some(BuiltinType::Void), FunctionRole::Plain, |f| {
        let undefined = f.project.undefined_value();
        let node = f.arena().add_identifier("undefined");
        f.bind(node, undefined, "undefined");
        node
    });
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_constructor_returning_a_value() {
    let codes = return_codes(None, FunctionRole::Constructor, |f| f.arena().add_number(1.0));
    assert_eq!(codes, vec![diagnostic_codes::RETURN_VALUE_IN_CONSTRUCTOR]);
}

#[test]
fn test_return_without_expression_node_is_skipped() {
    let mut fixture = Fixture::new();
    let ret = fixture.arena().add_return(NodeIndex::NONE);
    declared_function(&mut fixture, "f", FunctionRole::Plain, Some(BuiltinType::Int), vec![ret]);
    let mut checker = fixture.checker();
    assert_eq!(
        checker.check_return_value(ret),
        CheckOutcome::Skip(SkipReason::MissingReturnExpression)
    );
    assert!(checker.diagnostics.is_empty());
}

#[test]
fn test_return_outside_any_function() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let value = arena.add_number(1.0);
    let ret = arena.add_return(value);
    let mut checker = fixture.checker();
    checker.check_return_value(ret);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::RETURN_CANNOT_BE_USED_IN_GLOBAL]
    );
}

#[test]
fn test_return_in_class_body() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let ret = arena.add_return(NodeIndex::NONE);
    let name = arena.add_identifier("Widget");
    let body = arena.add_block(vec![ret]);
    arena.add_class(ClassData {
        name,
        body,
        ..ClassData::default()
    });
    let mut checker = fixture.checker();
    checker.check_return_void(ret);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::RETURN_CANNOT_BE_USED_IN_STATIC]
    );
}

#[test]
fn test_bare_return_in_value_function() {
    let mut fixture = Fixture::new();
    let ret = fixture.arena().add_return(NodeIndex::NONE);
    declared_function(&mut fixture, "f", FunctionRole::Plain, Some(BuiltinType::Int), vec![ret]);
    let mut checker = fixture.checker();
    checker.check_return_void(ret);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::RETURN_MUST_RETURN_VALUE]);
}

#[test]
fn test_bare_return_in_void_function() {
    let mut fixture = Fixture::new();
    let ret = fixture.arena().add_return(NodeIndex::NONE);
    declared_function(&mut fixture, "f", FunctionRole::Plain, Some(BuiltinType::Void), vec![ret]);
    let mut checker = fixture.checker();
    checker.check_return_void(ret);
    assert!(checker.diagnostics.is_empty());
}

// =============================================================================
// Control flow
// =============================================================================

/// Entry block branching to a `returnvalue` block and, when `reachable`, to
/// a block ending in the synthesized `returnvoid`.
fn branching_body(reachable: bool) -> InstructionList {
    let mut list = InstructionList::new();
    let entry = list.start_block();
    list.push(Opcode::GetLocal);
    list.push(Opcode::IfTrue);
    let returns = list.start_block();
    list.push(Opcode::GetLocal);
    list.push(Opcode::ReturnValue);
    let falls_off = list.start_block();
    list.push_synthesized_return_void();
    list.add_edge(entry, returns);
    if reachable {
        list.add_edge(entry, falls_off);
    }
    list
}

#[test]
fn test_reachable_end_of_value_function() {
    let mut fixture = Fixture::new();
    let (fn_node, _) = declared_function(&mut fixture, "f", FunctionRole::Plain, Some(BuiltinType::Int), Vec::new());
    let mut checker = fixture.checker();
    checker.check_control_flow(fn_node, &branching_body(true));
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::RETURN_MUST_RETURN_VALUE]);
}

#[test]
fn test_unreachable_end_of_value_function() {
    let mut fixture = Fixture::new();
    let (fn_node, _) = declared_function(&mut fixture, "f", FunctionRole::Plain, Some(BuiltinType::Int), Vec::new());
    let mut checker = fixture.checker();
    checker.check_control_flow(fn_node, &branching_body(false));
    assert!(checker.diagnostics.is_empty());
}

#[test]
fn test_untyped_function_may_fall_off_the_end() {
    let mut fixture = Fixture::new();
    let (fn_node, _) = declared_function(&mut fixture, "f", FunctionRole::Plain, None, Vec::new());
    let mut checker = fixture.checker();
    checker.check_control_flow(fn_node, &branching_body(true));
    assert!(checker.diagnostics.is_empty());
}
