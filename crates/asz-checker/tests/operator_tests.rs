//! Tests for operator operand conversions, comparisons and type tests.

use crate::test_fixture::{Fixture, init_tracing};
use asz_ast::{BinaryOperator, NodeIndex, UnaryOperator};
use asz_binder::{BuiltinType, ClassInfo, Definition};
use asz_common::diagnostics::diagnostic_codes;

/// An identifier referring to a variable of type `ty`; `None` is untyped.
fn typed_reference(fixture: &mut Fixture, name: &str, ty: Option<BuiltinType>) -> NodeIndex {
    let mut def = Definition::variable(name);
    if let Some(ty) = ty {
        def = def.with_type(fixture.builtin_type(ty));
    }
    let def = fixture.project.add_definition(def);
    let node = fixture.arena().add_identifier(name);
    fixture.bind(node, def, name);
    node
}

fn nan_reference(fixture: &mut Fixture) -> NodeIndex {
    let nan = fixture.project.nan_value();
    let node = fixture.arena().add_identifier("NaN");
    fixture.bind(node, nan, "NaN");
    node
}

fn undefined_reference(fixture: &mut Fixture) -> NodeIndex {
    let undefined = fixture.project.undefined_value();
    let node = fixture.arena().add_identifier("undefined");
    fixture.bind(node, undefined, "undefined");
    node
}

fn binary_codes(fixture: &mut Fixture, op: BinaryOperator, left: NodeIndex, right: NodeIndex) -> Vec<u32> {
    let node = fixture.arena().add_binary(op, left, right);
    let mut checker = fixture.checker();
    checker.check_binary_operator(node);
    checker.diagnostic_codes()
}

// =============================================================================
// Comparisons
// =============================================================================

#[test]
fn test_comparison_with_nan_is_illogical() {
    init_tracing();
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", Some(BuiltinType::Number));
    let nan = nan_reference(&mut fixture);
    let codes = binary_codes(&mut fixture, BinaryOperator::LessThan, x, nan);
    assert_eq!(codes, vec![diagnostic_codes::ILLOGICAL_COMPARISON_WITH_NAN]);
}

#[test]
fn test_typed_value_compared_with_undefined() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", Some(BuiltinType::Int));
    let undefined = undefined_reference(&mut fixture);
    let codes = binary_codes(&mut fixture, BinaryOperator::Equal, x, undefined);
    assert_eq!(codes, vec![diagnostic_codes::ILLOGICAL_COMPARISON_WITH_UNDEFINED]);
}

#[test]
fn test_undefined_on_the_left_is_reported_at_the_right() {
    let mut fixture = Fixture::new();
    let undefined = undefined_reference(&mut fixture);
    let x = typed_reference(&mut fixture, "x", Some(BuiltinType::String));
    let x_start = fixture.arena().span(x).start;
    let node = fixture.arena().add_binary(BinaryOperator::StrictEqual, undefined, x);
    let mut checker = fixture.checker();
    checker.check_binary_operator(node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::ILLOGICAL_COMPARISON_WITH_UNDEFINED]
    );
    assert_eq!(checker.diagnostics[0].start, x_start);
}

#[test]
fn test_untyped_value_may_be_undefined() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", None);
    let undefined = undefined_reference(&mut fixture);
    let codes = binary_codes(&mut fixture, BinaryOperator::Equal, x, undefined);
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_comparison_between_unrelated_types() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let text = arena.add_string("abc");
    let five = arena.add_number(5.0);
    let node = arena.add_binary(BinaryOperator::Equal, text, five);
    let mut checker = fixture.checker();
    checker.check_binary_operator(node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::COMPARISON_BETWEEN_UNRELATED_TYPES]
    );
    let message = &checker.diagnostics[0].message_text;
    assert!(message.contains("String") && message.contains("int"), "got: {message}");
}

#[test]
fn test_numeric_types_compare_freely() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", Some(BuiltinType::Number));
    let one = fixture.arena().add_number(1.0);
    let codes = binary_codes(&mut fixture, BinaryOperator::GreaterOrEqual, x, one);
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_numeric_compared_with_null() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", Some(BuiltinType::UInt));
    let null = fixture.arena().add_null();
    let codes = binary_codes(&mut fixture, BinaryOperator::Equal, x, null);
    assert_eq!(codes, vec![diagnostic_codes::COMPARISON_BETWEEN_UNRELATED_TYPES]);
}

#[test]
fn test_object_compared_with_null_is_fine() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", Some(BuiltinType::Array));
    let null = fixture.arena().add_null();
    let codes = binary_codes(&mut fixture, BinaryOperator::Equal, x, null);
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_not_equal_is_not_sanity_checked() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let text = arena.add_string("abc");
    let five = arena.add_number(5.0);
    let codes = binary_codes(&mut fixture, BinaryOperator::NotEqual, text, five);
    assert!(codes.is_empty(), "got: {codes:?}");
}

// =============================================================================
// Type tests
// =============================================================================

#[test]
fn test_instanceof_is_deprecated() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", None);
    let y = typed_reference(&mut fixture, "y", None);
    let codes = binary_codes(&mut fixture, BinaryOperator::InstanceOf, x, y);
    assert_eq!(codes, vec![diagnostic_codes::INSTANCE_OF]);
}

#[test]
fn test_is_against_a_number_literal() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", None);
    let five = fixture.arena().add_number(5.0);
    let codes = binary_codes(&mut fixture, BinaryOperator::Is, x, five);
    assert_eq!(
        codes,
        vec![diagnostic_codes::IMPLICIT_TYPE_CHECK_COERCION_TO_UNRELATED_TYPE]
    );
}

#[test]
fn test_as_null_names_the_literal() {
    let mut fixture = Fixture::new();
    let x = typed_reference(&mut fixture, "x", None);
    let null = fixture.arena().add_null();
    let node = fixture.arena().add_binary(BinaryOperator::As, x, null);
    let mut checker = fixture.checker();
    checker.check_binary_operator(node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_TYPE_CHECK_COERCION_TO_UNRELATED_TYPE]
    );
    assert!(checker.diagnostics[0].message_text.contains("null"));
}

#[test]
fn test_is_against_a_class_is_fine() {
    let mut fixture = Fixture::new();
    let class_node = fixture.arena().add_identifier("Widget");
    let (widget, _) = fixture.add_class("Widget", ClassInfo::default(), class_node);
    let x = typed_reference(&mut fixture, "x", None);
    let target = fixture.arena().add_identifier("Widget");
    fixture.bind(target, widget, "Widget");
    let codes = binary_codes(&mut fixture, BinaryOperator::Is, x, target);
    assert!(codes.is_empty(), "got: {codes:?}");
}

// =============================================================================
// Implicit conversions
// =============================================================================

#[test]
fn test_arithmetic_on_a_string_operand() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let text = arena.add_string("abc");
    let one = arena.add_number(1.0);
    let node = arena.add_binary(BinaryOperator::Subtract, text, one);
    let mut checker = fixture.checker();
    checker.check_binary_operator(node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]
    );
    let message = &checker.diagnostics[0].message_text;
    assert!(message.contains("String") && message.contains("Number"), "got: {message}");
}

#[test]
fn test_addition_accepts_any_operands() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let text = arena.add_string("abc");
    let one = arena.add_number(1.0);
    let codes = binary_codes(&mut fixture, BinaryOperator::Add, text, one);
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_negating_a_string() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let text = arena.add_string("abc");
    let node = arena.add_unary(UnaryOperator::Negate, text);
    let mut checker = fixture.checker();
    checker.check_unary_operator(node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]
    );
}

#[test]
fn test_typeof_accepts_anything() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let text = arena.add_string("abc");
    let node = arena.add_unary(UnaryOperator::TypeOf, text);
    let mut checker = fixture.checker();
    checker.check_unary_operator(node);
    assert!(checker.diagnostics.is_empty());
}

#[test]
fn test_downcast_is_a_possibly_unrelated_coercion() {
    let mut fixture = Fixture::new();
    let class_node = fixture.arena().add_identifier("Widget");
    let (widget, _) = fixture.add_class("Widget", ClassInfo::default(), class_node);
    let object = fixture.builtin(BuiltinType::Object);
    let value = typed_reference(&mut fixture, "thing", Some(BuiltinType::Object));

    let mut checker = fixture.checker();
    assert_eq!(checker.ctx.resolve_type(value), Some(object));
    checker.check_implicit_conversion(value, Some(widget));
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_SUBTYPE]
    );
}

#[test]
fn test_logical_operands_are_checked_separately() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin(BuiltinType::Int);
    let arena = fixture.arena();
    let text = arena.add_string("abc");
    let one = arena.add_number(1.0);
    let node = arena.add_logical_and(text, one);
    let text_start = arena.span(text).start;

    let mut checker = fixture.checker();
    checker.check_implicit_conversion(node, Some(int));
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]
    );
    assert_eq!(checker.diagnostics[0].start, text_start);
}

#[test]
fn test_ternary_branches_are_checked_separately() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin(BuiltinType::Int);
    let arena = fixture.arena();
    let condition = arena.add_boolean(true);
    let one = arena.add_number(1.0);
    let text = arena.add_string("abc");
    let node = arena.add_ternary(condition, one, text);

    let mut checker = fixture.checker();
    checker.check_implicit_conversion(node, Some(int));
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]
    );
}
