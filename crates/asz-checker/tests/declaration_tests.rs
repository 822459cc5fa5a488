//! Tests for function, parameter, accessor and variable declaration checks.

use crate::test_fixture::{Fixture, init_tracing};
use asz_ast::{FunctionData, ModifierKeyword, NodeIndex, ParameterData, VariableData};
use asz_binder::{
    Binding, BuiltinType, ClassInfo, CompilerOptions, DefId, Definition, FunctionRole, Modifiers,
    Name, NamespaceRef, ParameterInfo, ScopeId,
};
use asz_common::diagnostics::diagnostic_codes;

/// Parameter node `name: type_name = default`.
fn parameter_node(fixture: &mut Fixture, name: &str, type_name: Option<&str>, has_default: bool, is_rest: bool) -> NodeIndex {
    let arena = fixture.arena();
    let name = arena.add_identifier(name);
    let type_annotation = type_name.map_or(NodeIndex::NONE, |t| arena.add_identifier(t));
    let default_value = if has_default { arena.add_number(0.0) } else { NodeIndex::NONE };
    arena.add_parameter(ParameterData {
        name,
        type_annotation,
        default_value,
        is_rest,
    })
}

/// Function node with a return type annotation and an empty body.
fn function_node(fixture: &mut Fixture, name: &str, parameters: Vec<NodeIndex>, return_type: Option<&str>) -> NodeIndex {
    let arena = fixture.arena();
    let name = arena.add_identifier(name);
    let return_type = return_type.map_or(NodeIndex::NONE, |t| arena.add_identifier(t));
    let body = arena.add_block(Vec::new());
    arena.add_function(FunctionData {
        name,
        parameters,
        return_type,
        body,
        ..FunctionData::default()
    })
}

/// A public method of `class` declared in `scope`.
fn declare_method(fixture: &mut Fixture, node: NodeIndex, name: &str, role: FunctionRole, parameters: Vec<DefId>, return_type: BuiltinType, class: DefId, scope: ScopeId) -> DefId {
    let info = fixture.function_info(role, parameters, None);
    let return_annotation = fixture.builtin_type(return_type);
    fixture.declare(
        Definition::function(name, info)
            .with_namespace(NamespaceRef::PUBLIC)
            .with_type(return_annotation)
            .with_parent(class)
            .in_scope(scope),
        node,
    )
}

fn widget_class(fixture: &mut Fixture) -> (DefId, ScopeId) {
    let class_node = fixture.arena().add_identifier("Widget");
    fixture.add_class("Widget", ClassInfo::default(), class_node)
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn test_accessor_pair_types_must_match() {
    init_tracing();
    let mut fixture = Fixture::new();
    let (class, scope) = widget_class(&mut fixture);

    let getter_node = function_node(&mut fixture, "width", Vec::new(), Some("int"));
    declare_method(&mut fixture, getter_node, "width", FunctionRole::Getter, Vec::new(), BuiltinType::Int, class, scope);

    let value_node = parameter_node(&mut fixture, "value", Some("String"), false, false);
    let setter_node = function_node(&mut fixture, "width", vec![value_node], Some("void"));
    let setter_scope = fixture.add_function_scope(scope);
    let string = fixture.builtin_type(BuiltinType::String);
    let value = fixture.parameter("value", Some(string), ParameterInfo::default(), value_node, setter_scope);
    declare_method(&mut fixture, setter_node, "width", FunctionRole::Setter, vec![value], BuiltinType::Void, class, scope);

    let return_type_start = {
        let arena = fixture.arena();
        let return_type = arena.get_function(setter_node).map(|f| f.return_type).unwrap_or_default();
        arena.span(return_type).start
    };

    let mut checker = fixture.checker();
    checker.check_function_definition(setter_node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::ACCESSOR_TYPES_MUST_MATCH]
    );
    assert_eq!(checker.diagnostics[0].start, return_type_start);
}

#[test]
fn test_matching_accessor_pair_is_clean() {
    let mut fixture = Fixture::new();
    let (class, scope) = widget_class(&mut fixture);

    let getter_node = function_node(&mut fixture, "width", Vec::new(), Some("int"));
    declare_method(&mut fixture, getter_node, "width", FunctionRole::Getter, Vec::new(), BuiltinType::Int, class, scope);

    let value_node = parameter_node(&mut fixture, "value", Some("int"), false, false);
    let setter_node = function_node(&mut fixture, "width", vec![value_node], Some("void"));
    let setter_scope = fixture.add_function_scope(scope);
    let int = fixture.builtin_type(BuiltinType::Int);
    let value = fixture.parameter("value", Some(int), ParameterInfo::default(), value_node, setter_scope);
    declare_method(&mut fixture, setter_node, "width", FunctionRole::Setter, vec![value], BuiltinType::Void, class, scope);

    let mut checker = fixture.checker();
    checker.check_function_definition(getter_node);
    checker.check_function_definition(setter_node);
    assert!(checker.diagnostics.is_empty(), "got: {:?}", checker.diagnostic_codes());
}

#[test]
fn test_getter_shape_problems() {
    let mut fixture = Fixture::new();
    let (class, scope) = widget_class(&mut fixture);
    let param_node = parameter_node(&mut fixture, "i", Some("int"), false, false);
    let getter_node = function_node(&mut fixture, "height", vec![param_node], Some("void"));
    declare_method(&mut fixture, getter_node, "height", FunctionRole::Getter, Vec::new(), BuiltinType::Void, class, scope);

    let mut checker = fixture.checker();
    checker.check_function_definition(getter_node);
    let codes = checker.diagnostic_codes();
    assert!(codes.contains(&diagnostic_codes::GETTER_CANNOT_HAVE_PARAMETERS), "got: {codes:?}");
    assert!(codes.contains(&diagnostic_codes::GETTER_MUST_NOT_BE_VOID), "got: {codes:?}");
}

#[test]
fn test_setter_shape_problems() {
    let mut fixture = Fixture::new();
    let (class, scope) = widget_class(&mut fixture);
    let first = parameter_node(&mut fixture, "a", Some("int"), true, false);
    let second = parameter_node(&mut fixture, "b", Some("int"), true, false);
    let setter_node = function_node(&mut fixture, "depth", vec![first, second], Some("int"));
    declare_method(&mut fixture, setter_node, "depth", FunctionRole::Setter, Vec::new(), BuiltinType::Int, class, scope);

    let mut checker = fixture.checker();
    checker.check_function_definition(setter_node);
    let codes = checker.diagnostic_codes();
    assert!(codes.contains(&diagnostic_codes::SETTER_CANNOT_HAVE_OPTIONAL), "got: {codes:?}");
    assert!(codes.contains(&diagnostic_codes::BAD_SETTER_RETURN_TYPE), "got: {codes:?}");
    assert!(codes.contains(&diagnostic_codes::SETTER_MUST_HAVE_ONE_PARAMETER), "got: {codes:?}");
}

#[test]
fn test_parameter_order_problems() {
    let mut fixture = Fixture::new();
    let rest = parameter_node(&mut fixture, "rest", Some("Array"), false, true);
    let optional = parameter_node(&mut fixture, "opt", Some("int"), true, false);
    let required = parameter_node(&mut fixture, "req", Some("int"), false, false);
    let fn_node = function_node(&mut fixture, "f", vec![rest, optional, required], Some("void"));
    let info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    let void = fixture.builtin_type(BuiltinType::Void);
    fixture.declare(
        Definition::function("f", info).with_namespace(NamespaceRef::PUBLIC).with_type(void),
        fn_node,
    );

    let mut checker = fixture.checker();
    checker.check_function_definition(fn_node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![
            diagnostic_codes::REST_PARAMETER_MUST_BE_LAST,
            diagnostic_codes::REQUIRED_PARAMETER_AFTER_OPTIONAL,
        ]
    );
}

#[test]
fn test_missing_annotations_are_reported() {
    let mut fixture = Fixture::new();
    let untyped = parameter_node(&mut fixture, "x", None, false, false);
    let fn_node = function_node(&mut fixture, "g", vec![untyped], None);
    let info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    fixture.declare(Definition::function("g", info).with_namespace(NamespaceRef::PUBLIC), fn_node);

    let mut checker = fixture.checker();
    checker.check_function_definition(fn_node);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![
            diagnostic_codes::RETURN_VALUE_HAS_NO_TYPE_DECLARATION,
            diagnostic_codes::PARAMETER_HAS_NO_TYPE_DECLARATION,
        ]
    );
    assert!(checker.diagnostics[1].message_text.contains('x'));
}

#[test]
fn test_function_without_body_is_reported() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let name = arena.add_identifier("bodiless");
    let return_type = arena.add_identifier("void");
    let fn_node = arena.add_function(FunctionData {
        name,
        return_type,
        ..FunctionData::default()
    });
    let info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    fixture.declare(Definition::function("bodiless", info), fn_node);

    let mut checker = fixture.checker();
    checker.check_function_body(fn_node);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::FUNCTION_WITHOUT_BODY]);
}

#[test]
fn test_native_function_needs_no_body_but_must_not_have_one() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let name = arena.add_identifier("trace");
    let fn_node = arena.add_function(FunctionData {
        name,
        ..FunctionData::default()
    });
    let info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    fixture.declare(
        Definition::function("trace", info).with_modifiers(Modifiers::NATIVE),
        fn_node,
    );
    let with_body = function_node(&mut fixture, "native_with_body", Vec::new(), Some("void"));

    let mut checker = fixture.checker();
    checker.check_function_body(fn_node);
    assert!(checker.diagnostics.is_empty());
    checker.check_native_method(with_body);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::NATIVE_METHOD_WITH_BODY]);
}

#[test]
fn test_this_in_closure_is_reported() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let this = arena.add_this();
    let inner_return = arena.add_return(this);
    let inner_body = arena.add_block(vec![inner_return]);
    let inner = arena.add_function(FunctionData {
        body: inner_body,
        ..FunctionData::default()
    });
    let outer_body = arena.add_block(vec![inner]);
    let outer_name = arena.add_identifier("outer");
    let outer = arena.add_function(FunctionData {
        name: outer_name,
        body: outer_body,
        ..FunctionData::default()
    });
    let outer_info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    fixture.declare(Definition::function("outer", outer_info), outer);
    let inner_info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    fixture.declare(Definition::function("", inner_info), inner);

    let mut checker = fixture.checker();
    checker.check_function_body(outer);
    assert!(checker.diagnostics.is_empty(), "outer is not a closure");
    checker.check_function_body(inner);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::THIS_USED_IN_CLOSURE]);
}

#[test]
fn test_rest_parameter_must_be_array() {
    let mut fixture = Fixture::new();
    let string = fixture.builtin(BuiltinType::String);
    let array = fixture.builtin(BuiltinType::Array);
    let bad = parameter_node(&mut fixture, "rest", Some("String"), false, true);
    let good = parameter_node(&mut fixture, "rest", Some("Array"), false, true);
    let bad_type = fixture.arena().get_parameter(bad).map(|p| p.type_annotation).unwrap_or_default();
    let good_type = fixture.arena().get_parameter(good).map(|p| p.type_annotation).unwrap_or_default();
    fixture.bind(bad_type, string, "String");
    fixture.bind(good_type, array, "Array");

    let mut checker = fixture.checker();
    checker.check_rest_parameter(good);
    assert!(checker.diagnostics.is_empty());
    checker.check_rest_parameter(bad);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::INVALID_REST_PARAMETER_DECLARATION]
    );
}

#[test]
fn test_public_local_function_is_reported() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let namespace = arena.add_identifier("public");
    let inner_name = arena.add_identifier("helper");
    let inner_return = arena.add_identifier("void");
    let inner_body = arena.add_block(Vec::new());
    let inner = arena.add_function(FunctionData {
        name: inner_name,
        namespace,
        return_type: inner_return,
        body: inner_body,
        ..FunctionData::default()
    });
    let outer_body = arena.add_block(vec![inner]);
    arena.add_function(FunctionData {
        body: outer_body,
        ..FunctionData::default()
    });
    let info = fixture.function_info(FunctionRole::Plain, Vec::new(), None);
    let void = fixture.builtin_type(BuiltinType::Void);
    fixture.declare(
        Definition::function("helper", info).with_namespace(NamespaceRef::PUBLIC).with_type(void),
        inner,
    );

    let mut checker = fixture.checker();
    checker.check_function_definition(inner);
    let codes = checker.diagnostic_codes();
    assert!(
        codes.contains(&diagnostic_codes::NAMESPACE_ACCESSOR_OVERRIDE_INSIDE_FUNCTION),
        "got: {codes:?}"
    );
}

// =============================================================================
// Modifiers and variables
// =============================================================================

/// `var name:type_name` with no initializer.
fn variable_node(fixture: &mut Fixture, name: &str, type_name: Option<&str>) -> NodeIndex {
    let arena = fixture.arena();
    let name = arena.add_identifier(name);
    let type_annotation = type_name.map_or(NodeIndex::NONE, |t| arena.add_identifier(t));
    arena.add_variable(VariableData {
        name,
        type_annotation,
        ..VariableData::default()
    })
}

#[test]
fn test_duplicate_modifiers_are_reported() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let first = arena.add_modifier(ModifierKeyword::Static);
    let second = arena.add_modifier(ModifierKeyword::Static);
    let name = arena.add_identifier("count");
    let variable = arena.add_variable(VariableData {
        name,
        modifiers: vec![first, second],
        ..VariableData::default()
    });

    let mut checker = fixture.checker();
    checker.check_for_duplicate_modifiers(variable);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::DUPLICATE_ATTRIBUTE]);
    assert!(checker.diagnostics[0].message_text.contains("static"));
}

#[test]
fn test_local_variable_modifiers_are_reported() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let modifier = arena.add_modifier(ModifierKeyword::Static);
    let name = arena.add_identifier("local");
    let type_annotation = arena.add_identifier("int");
    let variable = arena.add_variable(VariableData {
        name,
        modifiers: vec![modifier],
        type_annotation,
        ..VariableData::default()
    });
    let body = arena.add_block(vec![variable]);
    arena.add_function(FunctionData {
        body,
        ..FunctionData::default()
    });

    let mut checker = fixture.checker();
    checker.check_variable_declaration(variable);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::STATIC_OUTSIDE_CLASS]);
}

#[test]
fn test_untyped_and_uninitialized_const() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let name = arena.add_identifier("LIMIT");
    let variable = arena.add_variable(VariableData {
        name,
        is_const: true,
        ..VariableData::default()
    });

    let mut checker = fixture.checker();
    checker.check_variable_declaration(variable);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![
            diagnostic_codes::VARIABLE_HAS_NO_TYPE_DECLARATION,
            diagnostic_codes::CONST_NOT_INITIALIZED,
        ]
    );
}

#[test]
fn test_type_arguments_only_apply_to_vector() {
    let mut fixture = Fixture::new();
    let array = fixture.builtin(BuiltinType::Array);
    let vector = fixture.builtin(BuiltinType::Vector);
    let arena = fixture.arena();
    let array_ref = arena.add_identifier("Array");
    let element = arena.add_identifier("int");
    let bad_type = arena.add_typed_expression(array_ref, element);
    let bad_name = arena.add_identifier("items");
    let bad = arena.add_variable(VariableData {
        name: bad_name,
        type_annotation: bad_type,
        ..VariableData::default()
    });
    let vector_ref = arena.add_identifier("Vector");
    let vector_element = arena.add_identifier("int");
    let good_type = arena.add_typed_expression(vector_ref, vector_element);
    let good_name = arena.add_identifier("values");
    let good = arena.add_variable(VariableData {
        name: good_name,
        type_annotation: good_type,
        ..VariableData::default()
    });
    fixture.bind(array_ref, array, "Array");
    fixture.bind(vector_ref, vector, "Vector");

    let mut checker = fixture.checker();
    checker.check_variable_declaration(good);
    assert!(checker.diagnostics.is_empty(), "got: {:?}", checker.diagnostic_codes());
    checker.check_variable_declaration(bad);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::TYPE_PARAMETERS_WITH_NON_PARAMETERIZED_TYPE]
    );
}

/// Two `var x:int` declarations in one function scope.
fn duplicate_variables(options: CompilerOptions) -> Vec<u32> {
    let mut fixture = Fixture::with_options(options);
    let project_scope = fixture.project.project_scope();
    let scope = fixture.add_function_scope(project_scope);
    let first = variable_node(&mut fixture, "x", Some("int"));
    let second = variable_node(&mut fixture, "x", Some("int"));
    let int = fixture.builtin_type(BuiltinType::Int);
    fixture.declare(Definition::variable("x").with_type(int.clone()).in_scope(scope), first);
    fixture.declare(Definition::variable("x").with_type(int).in_scope(scope), second);

    let mut checker = fixture.checker();
    checker.check_variable_declaration(first);
    checker.check_variable_declaration(second);
    checker.diagnostic_codes()
}

#[test]
fn test_duplicate_variable_reported_in_strict_mode() {
    let codes = duplicate_variables(CompilerOptions::default());
    assert_eq!(codes, vec![diagnostic_codes::DUPLICATE_VARIABLE_DEFINITION]);
}

#[test]
fn test_duplicate_variable_tolerated_outside_strict_mode() {
    let codes = duplicate_variables(CompilerOptions {
        strict: false,
        ..CompilerOptions::default()
    });
    assert!(codes.is_empty(), "got: {codes:?}");
}

#[test]
fn test_variable_shadowing_parameter_is_reported() {
    let mut fixture = Fixture::new();
    let project_scope = fixture.project.project_scope();
    let scope = fixture.add_function_scope(project_scope);
    let param_node = parameter_node(&mut fixture, "p", Some("int"), false, false);
    let int = fixture.builtin_type(BuiltinType::Int);
    fixture.parameter("p", Some(int.clone()), ParameterInfo::default(), param_node, scope);
    let variable = variable_node(&mut fixture, "p", Some("int"));
    fixture.declare(Definition::variable("p").with_type(int).in_scope(scope), variable);

    let mut checker = fixture.checker();
    checker.check_variable_declaration(variable);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::VARIABLE_DEFINITION_DUPLICATES_PARAMETER]
    );
}

#[test]
fn test_null_initializer_for_numeric_const() {
    let mut fixture = Fixture::new();
    let arena = fixture.arena();
    let name = arena.add_identifier("ZERO");
    let type_annotation = arena.add_identifier("int");
    let initializer = arena.add_null();
    let variable = arena.add_variable(VariableData {
        name,
        type_annotation,
        initializer,
        is_const: true,
        ..VariableData::default()
    });
    let int = fixture.builtin_type(BuiltinType::Int);
    fixture.declare(Definition::constant("ZERO", None).with_type(int), variable);

    let mut checker = fixture.checker();
    checker.check_variable_declaration(variable);
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::INCOMPATIBLE_DEFAULT_VALUE_OF_TYPE_NULL]
    );
}

#[test]
fn test_bindable_local_is_reported() {
    let mut fixture = Fixture::new();
    let variable = variable_node(&mut fixture, "flag", Some("Boolean"));
    let boolean = fixture.builtin_type(BuiltinType::Boolean);
    fixture.declare(Definition::variable("flag").with_type(boolean).bindable(), variable);

    let mut checker = fixture.checker();
    checker.check_bindable_variable_declaration(variable);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::LOCAL_BINDABLE_PROPERTY]);
}

#[test]
fn test_class_field_with_unknown_type() {
    let mut fixture = Fixture::new();
    let (class, scope) = widget_class(&mut fixture);
    let field = variable_node(&mut fixture, "renderer", Some("Renderer"));
    let type_node = fixture.arena().get_variable(field).map(|v| v.type_annotation).unwrap_or_default();
    fixture.bind_unresolved(type_node, "Renderer");
    fixture.declare(
        Definition::variable("renderer")
            .with_namespace(NamespaceRef::PUBLIC)
            .with_parent(class)
            .in_scope(scope),
        field,
    );

    let mut checker = fixture.checker();
    checker.check_class_field(field);
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::UNKNOWN_TYPE]);
    assert!(checker.diagnostics[0].message_text.contains("Renderer"));
}

fn ambiguous_field_codes(options: CompilerOptions) -> Vec<u32> {
    let mut fixture = Fixture::with_options(options);
    let (class, scope) = widget_class(&mut fixture);
    let field = variable_node(&mut fixture, "renderer", Some("Renderer"));
    let type_node = fixture.arena().get_variable(field).map(|v| v.type_annotation).unwrap_or_default();
    fixture.bind(type_node, DefId::AMBIGUOUS, "Renderer");
    fixture.declare(
        Definition::variable("renderer")
            .with_namespace(NamespaceRef::PUBLIC)
            .with_parent(class)
            .in_scope(scope),
        field,
    );
    let mut checker = fixture.checker();
    checker.check_class_field(field);
    checker.diagnostic_codes()
}

#[test]
fn test_ambiguous_field_type_follows_option() {
    assert_eq!(
        ambiguous_field_codes(CompilerOptions::default()),
        vec![diagnostic_codes::AMBIGUOUS_REFERENCE]
    );
    let quiet = CompilerOptions {
        report_ambiguous_types: false,
        ..CompilerOptions::default()
    };
    assert!(ambiguous_field_codes(quiet).is_empty());
}

#[test]
fn test_type_name_bound_to_variable_is_unknown_type() {
    let mut fixture = Fixture::new();
    let node = fixture.arena().add_identifier("value");
    let variable = fixture.project.add_definition(Definition::variable("value"));
    let mut checker = fixture.checker();
    checker.check_type_name(&Binding::resolved(node, variable, Name::new("value")));
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::UNKNOWN_TYPE]);
}

// =============================================================================
// Vector literals
// =============================================================================

#[test]
fn test_fractional_element_in_int_vector_is_lossy() {
    let mut fixture = Fixture::new();
    let int = fixture.builtin(BuiltinType::Int);
    let arena = fixture.arena();
    let element_type = arena.add_identifier("int");
    let fraction = arena.add_number(1.5);
    let whole = arena.add_number(2.0);
    let literal = arena.add_vector_literal(element_type, vec![fraction, whole]);

    let mut checker = fixture.checker();
    checker.check_vector_literal(literal, Some(int));
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::LOSSY_CONVERSION]);
}

#[test]
fn test_negative_element_in_uint_vector_is_lossy() {
    let mut fixture = Fixture::new();
    let uint = fixture.builtin(BuiltinType::UInt);
    let arena = fixture.arena();
    let element_type = arena.add_identifier("uint");
    let negative = arena.add_number(-1.0);
    let literal = arena.add_vector_literal(element_type, vec![negative]);

    let mut checker = fixture.checker();
    checker.check_vector_literal(literal, Some(uint));
    assert_eq!(checker.diagnostic_codes(), vec![diagnostic_codes::LOSSY_CONVERSION]);
}

#[test]
fn test_null_element_in_boolean_vector() {
    let mut fixture = Fixture::new();
    let boolean = fixture.builtin(BuiltinType::Boolean);
    let arena = fixture.arena();
    let element_type = arena.add_identifier("Boolean");
    let null = arena.add_null();
    let literal = arena.add_vector_literal(element_type, vec![null]);

    let mut checker = fixture.checker();
    checker.check_vector_literal(literal, Some(boolean));
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::NULL_USED_WHERE_OTHER_EXPECTED]
    );
}

#[test]
fn test_unrelated_element_in_string_vector() {
    let mut fixture = Fixture::new();
    let string = fixture.builtin(BuiltinType::String);
    let arena = fixture.arena();
    let element_type = arena.add_identifier("String");
    let flag = arena.add_boolean(true);
    let literal = arena.add_vector_literal(element_type, vec![flag]);

    let mut checker = fixture.checker();
    checker.check_vector_literal(literal, Some(string));
    assert_eq!(
        checker.diagnostic_codes(),
        vec![diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE]
    );
}
