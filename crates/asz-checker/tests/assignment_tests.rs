//! Tests for assignment targets and values, `delete` and `++`/`--`.

use crate::test_fixture::{Fixture, init_tracing};
use asz_ast::{BinaryOperator, NodeIndex};
use asz_binder::{
    Binding, BuiltinType, ClassInfo, DefId, Definition, FunctionRole, Name, TypeAnnotation,
};
use asz_common::PooledValue;
use asz_common::diagnostics::diagnostic_codes;

/// Declare a variable of type `ty` and return an identifier bound to it.
fn variable_of(fixture: &mut Fixture, name: &str, ty: Option<TypeAnnotation>) -> (NodeIndex, Binding) {
    let mut def = Definition::variable(name);
    if let Some(ty) = ty {
        def = def.with_type(ty);
    }
    let def = fixture.project.add_definition(def);
    reference_to(fixture, name, def)
}

fn reference_to(fixture: &mut Fixture, name: &str, def: DefId) -> (NodeIndex, Binding) {
    let node = fixture.arena().add_identifier(name);
    fixture.bind(node, def, name);
    (node, Binding::resolved(node, def, Name::new(name)))
}

fn assign_codes(fixture: &mut Fixture, target: NodeIndex, binding: &Binding, value: NodeIndex) -> Vec<u32> {
    let node = fixture.arena().add_assignment(target, value);
    let mut checker = fixture.checker();
    checker.check_assignment(node, binding);
    checker.diagnostic_codes()
}

// =============================================================================
// Assignment targets
// =============================================================================

#[test]
fn test_assign_to_constant() {
    init_tracing();
    let mut fixture = Fixture::new();
    let int = fixture.builtin_type(BuiltinType::Int);
    let limit = fixture
        .project
        .add_definition(Definition::constant("LIMIT", Some(PooledValue::Int(3))).with_type(int));
    let (target, binding) = reference_to(&mut fixture, "LIMIT", limit);
    let value = fixture.arena().add_number(5.0);
    let codes = assign_codes(&mut fixture, target, &binding, value);
    assert_eq!(codes, vec![diagnostic_codes::ASSIGN_TO_CONST]);
}

#[test]
fn test_assign_to_getter_without_setter() {
    let mut fixture = Fixture::new();
    let info = fixture.function_info(FunctionRole::Getter, Vec::new(), None);
    let getter = fixture.project.add_definition(Definition::function("size", info));
    let (target, binding) = reference_to(&mut fixture, "size", getter);
    let value = fixture.arena().add_number(5.0);
    let codes = assign_codes(&mut fixture, target, &binding, value);
    assert_eq!(codes, vec![diagnostic_codes::ASSIGN_TO_READ_ONLY_PROPERTY]);
}

#[test]
fn test_assign_to_function() {
    let mut fixture = Fixture::new();
    let info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    let function = fixture.project.add_definition(Definition::function("update", info));
    let (target, binding) = reference_to(&mut fixture, "update", function);
    let value = fixture.arena().add_null();
    let codes = assign_codes(&mut fixture, target, &binding, value);
    assert_eq!(codes, vec![diagnostic_codes::ASSIGN_TO_FUNCTION]);
}

#[test]
fn test_assign_to_class() {
    let mut fixture = Fixture::new();
    let class_node = fixture.arena().add_identifier("Widget");
    let (widget, _) = fixture.add_class("Widget", ClassInfo::default(), class_node);
    let (target, binding) = reference_to(&mut fixture, "Widget", widget);
    let value = fixture.arena().add_null();
    let codes = assign_codes(&mut fixture, target, &binding, value);
    assert_eq!(codes, vec![diagnostic_codes::ILLEGAL_ASSIGNMENT_TO_CLASS]);
}

#[test]
fn test_assign_to_this() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let this = arena.add_this();
    let value = arena.add_null();
    let binding = Binding::unresolved(this, Name::new("this"));
    let codes = assign_codes(&mut fixture, this, &binding, value);
    assert_eq!(codes, vec![diagnostic_codes::ASSIGN_TO_NON_REFERENCE_VALUE]);
}

#[test]
fn test_assign_to_undefined_name() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let target = arena.add_identifier("missing");
    let value = arena.add_number(1.0);
    let binding = Binding::unresolved(target, Name::new("missing"));
    let target_start = fixture.arena().span(target).start;
    let node = fixture.arena().add_assignment(target, value);

    let mut checker = fixture.checker();
    checker.check_assignment(node, &binding);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::ACCESS_UNDEFINED_PROPERTY]);
    assert_eq!(checker.diagnostics[0].start, target_start);
    assert!(checker.diagnostics[0].message_text.contains("missing"));
}

#[test]
fn test_assignment_as_loop_condition() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin_type(BuiltinType::Int);
    let (target, binding) = variable_of(&mut fixture, "x", Some(int));
    let arena = fixture.arena();
    let value = arena.add_number(1.0);
    let node = arena.add_assignment(target, value);
    let body = arena.add_block(Vec::new());
    arena.add_while(node, body);

    let mut checker = fixture.checker();
    checker.check_assignment(node, &binding);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::ASSIGNMENT_IN_CONDITIONAL]);
}

// =============================================================================
// Assigned values
// =============================================================================

#[test]
fn test_null_stored_into_int() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin_type(BuiltinType::Int);
    let (target, binding) = variable_of(&mut fixture, "count", Some(int));
    let value = fixture.arena().add_null();
    let node = fixture.arena().add_assignment(target, value);
    let mut checker = fixture.checker();
    checker.check_assignment(node, &binding);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::NULL_USED_WHERE_OTHER_EXPECTED]);
    assert!(checker.diagnostics[0].message_text.contains("int"));
}

#[test]
fn test_string_stored_into_int() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin_type(BuiltinType::Int);
    let (target, binding) = variable_of(&mut fixture, "count", Some(int));
    let value = fixture.arena().add_string("many");
    let codes = assign_codes(&mut fixture, target, &binding, value);
    assert_eq!(codes, vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]);
}

#[test]
fn test_initializer_checked_against_declared_type() {
    let mut fixture = Fixture::new();
    let boolean = fixture.builtin_type(BuiltinType::Boolean);
    let string = fixture.builtin_type(BuiltinType::String);
    let (_, flag) = variable_of(&mut fixture, "flag", Some(boolean));
    let (_, label) = variable_of(&mut fixture, "label", Some(string));
    let arena = fixture.arena();
    let text = arena.add_string("yes");
    let number = arena.add_number(2.0);

    let mut checker = fixture.checker();
    checker.check_initialization(text, &flag);
    assert!(checker.diagnostics.is_empty(), "anything converts to Boolean");
    checker.check_initialization(number, &label);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]
    );
}

// =============================================================================
// Compound assignment
// =============================================================================

fn compound_codes(fixture: &mut Fixture, op: BinaryOperator, target: NodeIndex, binding: &Binding, value: NodeIndex) -> Vec<u32> {
    let node = fixture.arena().add_compound_assignment(op, target, value);
    let mut checker = fixture.checker();
    checker.check_compound_assignment(node, binding);
    checker.diagnostic_codes()
}

#[test]
fn test_string_append_accepts_numbers() {
    let mut fixture = Fixture::new();
    let string = fixture.builtin_type(BuiltinType::String);
    let (target, binding) = variable_of(&mut fixture, "s", Some(string));
    let value = fixture.arena().add_number(5.0);
    let codes = compound_codes(&mut fixture, BinaryOperator::Add, target, &binding, value);
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_numeric_compound_assignment_is_fine() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin_type(BuiltinType::Int);
    let (target, binding) = variable_of(&mut fixture, "i", Some(int));
    let value = fixture.arena().add_number(2.5);
    let codes = compound_codes(&mut fixture, BinaryOperator::Multiply, target, &binding, value);
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_subtracting_from_a_string() {
    let mut fixture = Fixture::new();
    let string = fixture.builtin_type(BuiltinType::String);
    let (target, binding) = variable_of(&mut fixture, "s", Some(string));
    let value = fixture.arena().add_number(1.0);
    let target_start = fixture.arena().span(target).start;
    let value_start = fixture.arena().span(value).start;
    let node = fixture
        .arena()
        .add_compound_assignment(BinaryOperator::Subtract, target, value);

    let mut checker = fixture.checker();
    checker.check_compound_assignment(node, &binding);
    // The operand converts to Number, and the Number result does not
    // convert back to String.
    assert_eq!(
        checker.diagnostic_codes(),
        vec![
            diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE,
            diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE
        ]
    );
    assert_eq!(checker.diagnostics[0].start, target_start);
    assert_eq!(checker.diagnostics[1].start, value_start);
}

#[test]
fn test_untyped_sum_into_class_variable() {
    let mut fixture = Fixture::new();
    let class_node = fixture.arena().add_identifier("Widget");
    let (widget, _) = fixture.add_class("Widget", ClassInfo::default(), class_node);
    let (target, binding) = variable_of(&mut fixture, "w", Some(TypeAnnotation::resolved("Widget", widget)));
    let value = fixture.arena().add_number(1.0);
    // `Widget + int` has no static type, so nothing is known to mismatch.
    let codes = compound_codes(&mut fixture, BinaryOperator::Add, target, &binding, value);
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_numeric_sum_into_class_variable() {
    let mut fixture = Fixture::new();
    let class_node = fixture.arena().add_identifier("Widget");
    let (widget, _) = fixture.add_class("Widget", ClassInfo::default(), class_node);
    let (target, binding) = variable_of(&mut fixture, "w", Some(TypeAnnotation::resolved("Widget", widget)));
    let value = fixture.arena().add_number(1.0);
    let value_start = fixture.arena().span(value).start;
    let node = fixture
        .arena()
        .add_compound_assignment(BinaryOperator::Multiply, target, value);

    let mut checker = fixture.checker();
    checker.check_compound_assignment(node, &binding);
    assert!(
        checker
            .diagnostics
            .iter()
            .any(|d| d.code == diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE && d.start == value_start),
        "got: {:?}",
        checker.diagnostic_codes()
    );
}

// =============================================================================
// delete
// =============================================================================

/// `obj.x` where `obj` has static type `Widget` (or is untyped) and `x` is a
/// declared field of `Widget`.
fn widget_field_access(fixture: &mut Fixture, typed: bool) -> (NodeIndex, Binding) {
    let class_node = fixture.arena().add_identifier("Widget");
    let (widget, scope) = fixture.add_class("Widget", ClassInfo::default(), class_node);
    let field = fixture.project.add_definition(
        Definition::variable("x").with_parent(widget).in_scope(scope),
    );
    let ty = typed.then(|| TypeAnnotation::resolved("Widget", widget));
    let (object, _) = variable_of(fixture, "obj", ty);
    let arena = fixture.arena();
    let member = arena.add_identifier("x");
    let access = arena.add_member_access(object, member);
    fixture.bind(member, field, "x");
    (access, Binding::resolved(member, field, Name::new("x")))
}

#[test]
fn test_delete_fixed_property() {
    let mut fixture = Fixture::new();
    let (access, binding) = widget_field_access(&mut fixture, true);
    let node = fixture.arena().add_delete(access);
    let mut checker = fixture.checker();
    checker.check_delete_expr(node, &binding);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::ATTEMPT_TO_DELETE_FIXED_PROPERTY]
    );
}

#[test]
fn test_delete_through_untyped_base_is_allowed() {
    let mut fixture = Fixture::new();
    let (access, binding) = widget_field_access(&mut fixture, false);
    let node = fixture.arena().add_delete(access);
    let mut checker = fixture.checker();
    checker.check_delete_expr(node, &binding);
    assert!(checker.diagnostics.is_empty(), "got: {:?}", checker.diagnostic_codes());
}

#[test]
fn test_delete_of_missing_member_on_fixed_type() {
    let mut fixture = Fixture::new();
    let class_node = fixture.arena().add_identifier("Widget");
    let (widget, _) = fixture.add_class("Widget", ClassInfo::default(), class_node);
    let (object, _) = variable_of(&mut fixture, "obj", Some(TypeAnnotation::resolved("Widget", widget)));
    let arena = fixture.arena();
    let member = arena.add_identifier("gone");
    let access = arena.add_member_access(object, member);
    let node = arena.add_delete(access);
    let binding = Binding::unresolved(member, Name::new("gone"));

    let mut checker = fixture.checker();
    checker.check_delete_expr(node, &binding);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::ACCESS_UNDEFINED_MEMBER]);
    assert!(checker.diagnostics[0].message_text.contains("Widget"));
}

// =============================================================================
// ++ and --
// =============================================================================

#[test]
fn test_increment_of_constant() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin_type(BuiltinType::Int);
    let limit = fixture
        .project
        .add_definition(Definition::constant("LIMIT", Some(PooledValue::Int(3))).with_type(int));
    let (operand, binding) = reference_to(&mut fixture, "LIMIT", limit);
    let node = fixture.arena().add_inc_dec(true, false, operand);
    let mut checker = fixture.checker();
    checker.check_inc_dec_reference(node, &binding);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::INVALID_INCREMENT_OPERAND]);
}

#[test]
fn test_increment_of_variable_is_fine() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin_type(BuiltinType::Int);
    let (operand, binding) = variable_of(&mut fixture, "i", Some(int));
    let node = fixture.arena().add_inc_dec(true, true, operand);
    let mut checker = fixture.checker();
    checker.check_inc_dec_reference(node, &binding);
    assert!(checker.diagnostics.is_empty(), "got: {:?}", checker.diagnostic_codes());
}

#[test]
fn test_decrement_of_call_result() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let callee = arena.add_identifier("next");
    let call = arena.add_call(callee, Vec::new());
    let node = arena.add_inc_dec(false, true, call);
    let binding = Binding {
        node: call,
        definition: None,
        name: None,
    };
    let mut checker = fixture.checker();
    checker.check_inc_dec_reference(node, &binding);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::DECREMENT_MUST_BE_REFERENCE]);
}
