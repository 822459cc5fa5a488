//! Diagnostic catalog: one code, category and message template per problem kind.
//!
//! Templates use `{0}`, `{1}`, ... placeholders filled by `format_message`.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const IMPLICIT_COERCION_TO_UNRELATED_TYPE: u32 = 1067;
    pub const IMPLICIT_COERCION_TO_SUBTYPE: u32 = 1118;
    pub const IMPLICIT_TYPE_CHECK_COERCION_TO_UNRELATED_TYPE: u32 = 1119;
    pub const COMPARISON_BETWEEN_UNRELATED_TYPES: u32 = 1176;
    pub const ILLOGICAL_COMPARISON_WITH_NAN: u32 = 3551;
    pub const ILLOGICAL_COMPARISON_WITH_UNDEFINED: u32 = 3553;
    pub const NULL_USED_WHERE_OTHER_EXPECTED: u32 = 3590;
    pub const INCOMPATIBLE_DEFAULT_VALUE_OF_TYPE_NULL: u32 = 1184;
    pub const INCOMPATIBLE_INITIALIZER_TYPE: u32 = 3593;
    pub const INITIALIZER_VALUE_NOT_AN_INTEGER: u32 = 3594;
    pub const INITIALIZER_VALUE_OUT_OF_RANGE: u32 = 3595;
    pub const LOSSY_CONVERSION: u32 = 3596;
    pub const INSTANCE_OF: u32 = 3555;
    pub const ARRAY_CAST: u32 = 3597;
    pub const ARRAY_DOWNCAST: u32 = 3598;
    pub const DATE_CAST: u32 = 3575;
    pub const ACCESS_UNDEFINED_PROPERTY: u32 = 1120;
    pub const ACCESS_UNDEFINED_MEMBER: u32 = 2119;
    pub const ACCESS_UNDEFINED_PROPERTY_IN_PACKAGE: u32 = 1121;
    pub const CALL_UNDEFINED_METHOD: u32 = 1180;
    pub const STRICT_UNDEFINED_METHOD: u32 = 1061;
    pub const INACCESSIBLE_PROPERTY_REFERENCE: u32 = 1178;
    pub const INACCESSIBLE_METHOD_REFERENCE: u32 = 1195;
    pub const INACCESSIBLE_CONSTRUCTOR_REFERENCE: u32 = 1203;
    pub const PROPERTY_IS_WRITE_ONLY: u32 = 1059;
    pub const ASSIGN_TO_READ_ONLY_PROPERTY: u32 = 2059;
    pub const ASSIGN_TO_CONST: u32 = 1049;
    pub const ASSIGN_TO_FUNCTION: u32 = 1050;
    pub const ILLEGAL_ASSIGNMENT_TO_CLASS: u32 = 1051;
    pub const ASSIGN_TO_NON_REFERENCE_VALUE: u32 = 2050;
    pub const AMBIGUOUS_REFERENCE: u32 = 1000;
    pub const MISSING_PROPERTY_NAME: u32 = 1084;
    pub const TOO_MANY_FUNCTION_PARAMETERS: u32 = 1137;
    pub const TOO_FEW_FUNCTION_PARAMETERS: u32 = 1136;
    pub const CALL_NON_FUNCTION: u32 = 2195;
    pub const ATTRIBUTES_ARE_NOT_CALLABLE: u32 = 1197;
    pub const INTERFACE_CANNOT_BE_INSTANTIATED: u32 = 2180;
    pub const ABSTRACT_CLASS_CANNOT_BE_INSTANTIATED: u32 = 1156;
    pub const METHOD_CANNOT_BE_CONSTRUCTOR: u32 = 1153;
    pub const UNRESOLVED_CLASS_REFERENCE: u32 = 1046;
    pub const NO_DEFAULT_CONSTRUCTOR_IN_BASE_CLASS: u32 = 2203;
    pub const INVALID_SUPER_STATEMENT: u32 = 1006;
    pub const EXTRANEOUS_SUPER_STATEMENT: u32 = 1007;
    pub const INVALID_SUPER_EXPRESSION: u32 = 1008;
    pub const RETURN_VALUE_MUST_BE_UNDEFINED: u32 = 2051;
    pub const RETURN_VALUE_IN_CONSTRUCTOR: u32 = 1052;
    pub const RETURN_MUST_RETURN_VALUE: u32 = 1170;
    pub const RETURN_CANNOT_BE_USED_IN_GLOBAL: u32 = 1105;
    pub const RETURN_CANNOT_BE_USED_IN_PACKAGE: u32 = 1106;
    pub const RETURN_CANNOT_BE_USED_IN_STATIC: u32 = 1107;
    pub const ATTEMPT_TO_DELETE_FIXED_PROPERTY: u32 = 1189;
    pub const INVALID_INCREMENT_OPERAND: u32 = 1113;
    pub const INVALID_DECREMENT_OPERAND: u32 = 1114;
    pub const INCREMENT_MUST_BE_REFERENCE: u32 = 1115;
    pub const DECREMENT_MUST_BE_REFERENCE: u32 = 1116;
    pub const ASSIGNMENT_IN_CONDITIONAL: u32 = 3567;
    pub const THIS_USED_IN_STATIC_FUNCTION: u32 = 1042;
    pub const THIS_USED_IN_CLOSURE: u32 = 3601;
    pub const REST_PARAM_AND_ARGUMENTS_USED_TOGETHER: u32 = 1063;
    pub const PACKAGE_CANNOT_BE_USED_AS_VALUE: u32 = 1204;
    pub const ABSTRACT_METHOD_WITH_BODY: u32 = 1216;
    pub const FUNCTION_WITHOUT_BODY: u32 = 1071;
    pub const NATIVE_METHOD_WITH_BODY: u32 = 1072;
    pub const SETTER_CANNOT_HAVE_OPTIONAL: u32 = 1044;
    pub const REST_PARAMETER_MUST_BE_LAST: u32 = 1045;
    pub const REQUIRED_PARAMETER_AFTER_OPTIONAL: u32 = 1138;
    pub const BAD_SETTER_RETURN_TYPE: u32 = 1031;
    pub const ACCESSOR_TYPES_MUST_MATCH: u32 = 1032;
    pub const GETTER_CANNOT_HAVE_PARAMETERS: u32 = 1033;
    pub const GETTER_MUST_NOT_BE_VOID: u32 = 1034;
    pub const SETTER_MUST_HAVE_ONE_PARAMETER: u32 = 1035;
    pub const INVALID_REST_PARAMETER_DECLARATION: u32 = 1140;
    pub const NATIVE_VARIABLE: u32 = 1155;
    pub const DYNAMIC_NOT_ON_CLASS: u32 = 1100;
    pub const FINAL_OUTSIDE_CLASS: u32 = 1101;
    pub const INVALID_OVERRIDE: u32 = 1102;
    pub const VIRTUAL_OUTSIDE_CLASS: u32 = 1103;
    pub const STATIC_OUTSIDE_CLASS: u32 = 1104;
    pub const ABSTRACT_OUTSIDE_CLASS: u32 = 1217;
    pub const CONST_NOT_INITIALIZED: u32 = 3698;
    pub const TYPE_PARAMETERS_WITH_NON_PARAMETERIZED_TYPE: u32 = 1199;
    pub const BURM_DIAGNOSTIC_NOT_ALLOWED_HERE: u32 = 1064;
    pub const LOCAL_BINDABLE_PROPERTY: u32 = 1209;
    pub const SYNTAX_ERROR: u32 = 2084;
    pub const DUPLICATE_ATTRIBUTE: u32 = 1150;
    pub const DUPLICATE_FUNCTION_DEFINITION: u32 = 1021;
    pub const DUPLICATE_VARIABLE_DEFINITION: u32 = 3696;
    pub const VARIABLE_DEFINITION_DUPLICATES_PARAMETER: u32 = 3697;
    pub const CONFLICTING_NAME_IN_NAMESPACE: u32 = 1151;
    pub const CONFLICTING_INHERITED_NAME_IN_NAMESPACE: u32 = 1152;
    pub const DEFINITION_SHADOWED_BY_PACKAGE_NAME: u32 = 3599;
    pub const INTERFACE_METHOD_OVERRIDE: u32 = 1023;
    pub const UNKNOWN_SUPERCLASS: u32 = 1017;
    pub const CANNOT_EXTEND_INTERFACE: u32 = 1016;
    pub const BASE_CLASS_IS_FINAL: u32 = 1015;
    pub const CIRCULAR_TYPE_REFERENCE: u32 = 1020;
    pub const PARAMETER_HAS_NO_TYPE_DECLARATION: u32 = 2008;
    pub const RETURN_VALUE_HAS_NO_TYPE_DECLARATION: u32 = 1009;
    pub const VARIABLE_HAS_NO_TYPE_DECLARATION: u32 = 1010;
    pub const UNKNOWN_TYPE: u32 = 2046;
    pub const DEPRECATED_API: u32 = 3600;
    pub const DEPRECATED_API_WITH_MESSAGE: u32 = 3605;
    pub const DEPRECATED_API_WITH_SINCE: u32 = 3602;
    pub const DEPRECATED_API_WITH_REPLACEMENT: u32 = 3603;
    pub const DEPRECATED_API_WITH_SINCE_AND_REPLACEMENT: u32 = 3604;
    pub const SCOPED_TO_DEFAULT_NAMESPACE: u32 = 1011;
    pub const NAMESPACE_OVERRIDE_INSIDE_FUNCTION: u32 = 1182;
    pub const NAMESPACE_ACCESSOR_OVERRIDE_INSIDE_FUNCTION: u32 = 1183;
    pub const INVALID_NAMESPACE: u32 = 2114;
    pub const INVALID_PUBLIC_NAMESPACE_ATTR: u32 = 2214;
    pub const INVALID_PROTECTED_NAMESPACE_ATTR: u32 = 2115;
    pub const INVALID_PRIVATE_NAMESPACE_ATTR: u32 = 2116;
    pub const INVALID_PUBLIC_NAMESPACE: u32 = 1117;
    pub const INVALID_PROTECTED_NAMESPACE: u32 = 2118;
    pub const INVALID_PRIVATE_NAMESPACE: u32 = 2219;
    pub const UNRESOLVED_NAMESPACE: u32 = 2120;
    pub const UNKNOWN_NAMESPACE: u32 = 2121;
    pub const UNKNOWN_IMPORT: u32 = 1172;
    pub const UNKNOWN_WILDCARD_IMPORT: u32 = 1173;
    pub const INLINE_NESTED_INLINING_NOT_SUPPORTED: u32 = 5001;
    pub const INLINE_NO_SOURCE: u32 = 5002;
    pub const INLINE_FUNCTION_NOT_FINAL_STATIC_OR_GLOBAL: u32 = 5003;
    pub const INLINE_FUNCTION_TOO_LARGE: u32 = 5004;
    pub const INLINE_UNSUPPORTED_NODE: u32 = 5005;
    pub const INLINE_UNSUPPORTED_INSTRUCTION: u32 = 5006;
}

pub mod diagnostic_messages {
    pub const IMPLICIT_COERCION_TO_UNRELATED_TYPE: &str = "Implicit coercion of a value of type {0} to an unrelated type {1}.";
    pub const IMPLICIT_COERCION_TO_SUBTYPE: &str = "Implicit coercion of a value with static type {0} to a possibly unrelated type {1}.";
    pub const IMPLICIT_TYPE_CHECK_COERCION_TO_UNRELATED_TYPE: &str = "Implicit coercion of a value of type {0} to an unrelated type {1} in a type check.";
    pub const COMPARISON_BETWEEN_UNRELATED_TYPES: &str = "Comparison between a value with static type {0} and a possibly unrelated type {1}.";
    pub const ILLOGICAL_COMPARISON_WITH_NAN: &str = "Illogical comparison with NaN. Any comparison operation involving NaN will evaluate to false because NaN != NaN.";
    pub const ILLOGICAL_COMPARISON_WITH_UNDEFINED: &str = "Illogical comparison with undefined. Only untyped variables (or variables of type *) can be undefined.";
    pub const NULL_USED_WHERE_OTHER_EXPECTED: &str = "null used where a {0} value was expected.";
    pub const INCOMPATIBLE_DEFAULT_VALUE_OF_TYPE_NULL: &str = "Incompatible default value of type Null where {0} is expected.";
    pub const INCOMPATIBLE_INITIALIZER_TYPE: &str = "Initializer value of type {0} is not compatible with type {1}; it will be converted to {2}.";
    pub const INITIALIZER_VALUE_NOT_AN_INTEGER: &str = "Initializer value {1} is not an integer; {0} will be initialized to {2}.";
    pub const INITIALIZER_VALUE_OUT_OF_RANGE: &str = "Initializer value {1} for type {0} is outside the range {2} to {3}; it will be converted to {4}.";
    pub const LOSSY_CONVERSION: &str = "Literal value will lose precision when converted to {0}.";
    pub const INSTANCE_OF: &str = "The instanceof operator is deprecated, use the is operator instead.";
    pub const ARRAY_CAST: &str = "Array(x) behaves the same as new Array(x). To cast a value to type Array use the expression x as Array instead of Array(x).";
    pub const ARRAY_DOWNCAST: &str = "Array(x) behaves the same as new Array(x); it does not cast an untyped value to Array.";
    pub const DATE_CAST: &str = "Date(x) behaves the same as new Date().toString(). To cast a value to type Date use x as Date instead of Date(x).";
    pub const ACCESS_UNDEFINED_PROPERTY: &str = "Access of undefined property {0}.";
    pub const ACCESS_UNDEFINED_MEMBER: &str = "Access of possibly undefined property {0} through a reference with static type {1}.";
    pub const ACCESS_UNDEFINED_PROPERTY_IN_PACKAGE: &str = "Access of undefined property {0} in package {1}.";
    pub const CALL_UNDEFINED_METHOD: &str = "Call to a possibly undefined method {0}.";
    pub const STRICT_UNDEFINED_METHOD: &str = "Call to a possibly undefined method {0} through a reference with static type {1}.";
    pub const INACCESSIBLE_PROPERTY_REFERENCE: &str = "Attempted access of inaccessible property {0} through a reference with static type {1}.";
    pub const INACCESSIBLE_METHOD_REFERENCE: &str = "Attempted access of inaccessible method {0} through a reference with static type {1}.";
    pub const INACCESSIBLE_CONSTRUCTOR_REFERENCE: &str = "Attempted access of inaccessible constructor through a reference with static type {0}.";
    pub const PROPERTY_IS_WRITE_ONLY: &str = "Property {0} is write-only.";
    pub const ASSIGN_TO_READ_ONLY_PROPERTY: &str = "Property {0} is read-only.";
    pub const ASSIGN_TO_CONST: &str = "Illegal assignment to a variable specified as constant.";
    pub const ASSIGN_TO_FUNCTION: &str = "Illegal assignment to function {0}.";
    pub const ILLEGAL_ASSIGNMENT_TO_CLASS: &str = "Illegal assignment to class {0}.";
    pub const ASSIGN_TO_NON_REFERENCE_VALUE: &str = "Cannot assign to a non-reference value.";
    pub const AMBIGUOUS_REFERENCE: &str = "Ambiguous reference to {0}.";
    pub const MISSING_PROPERTY_NAME: &str = "Missing property name after the '.' operator.";
    pub const TOO_MANY_FUNCTION_PARAMETERS: &str = "Incorrect number of arguments.  Expected no more than {0}.";
    pub const TOO_FEW_FUNCTION_PARAMETERS: &str = "Incorrect number of arguments.  Expected {0}.";
    pub const CALL_NON_FUNCTION: &str = "Attempted to call {0}, which is not a function.";
    pub const ATTRIBUTES_ARE_NOT_CALLABLE: &str = "Attributes are not callable.";
    pub const INTERFACE_CANNOT_BE_INSTANTIATED: &str = "Interfaces cannot be instantiated with the new operator.";
    pub const ABSTRACT_CLASS_CANNOT_BE_INSTANTIATED: &str = "Abstract classes cannot be instantiated with the new operator.";
    pub const METHOD_CANNOT_BE_CONSTRUCTOR: &str = "A method cannot be used as a constructor.";
    pub const UNRESOLVED_CLASS_REFERENCE: &str = "Type was not found or was not a compile-time constant: {0}.";
    pub const NO_DEFAULT_CONSTRUCTOR_IN_BASE_CLASS: &str = "No default constructor found in base class {0}.";
    pub const INVALID_SUPER_STATEMENT: &str = "A super statement can be used only inside class instance constructors.";
    pub const EXTRANEOUS_SUPER_STATEMENT: &str = "Only one super statement may be used in a constructor.";
    pub const INVALID_SUPER_EXPRESSION: &str = "A super expression can be used only inside class instance methods.";
    pub const RETURN_VALUE_MUST_BE_UNDEFINED: &str = "Return value must be undefined.";
    pub const RETURN_VALUE_IN_CONSTRUCTOR: &str = "A return value is not allowed because the function is a constructor.";
    pub const RETURN_MUST_RETURN_VALUE: &str = "Function does not return a value.";
    pub const RETURN_CANNOT_BE_USED_IN_GLOBAL: &str = "The return statement cannot be used in global initialization code.";
    pub const RETURN_CANNOT_BE_USED_IN_PACKAGE: &str = "The return statement cannot be used in package initialization code.";
    pub const RETURN_CANNOT_BE_USED_IN_STATIC: &str = "The return statement cannot be used in static initialization code.";
    pub const ATTEMPT_TO_DELETE_FIXED_PROPERTY: &str = "Attempt to delete the fixed property {0}. Only dynamically defined properties can be deleted.";
    pub const INVALID_INCREMENT_OPERAND: &str = "Invalid increment operand.";
    pub const INVALID_DECREMENT_OPERAND: &str = "Invalid decrement operand.";
    pub const INCREMENT_MUST_BE_REFERENCE: &str = "Operand of increment must be a reference.";
    pub const DECREMENT_MUST_BE_REFERENCE: &str = "Operand of decrement must be a reference.";
    pub const ASSIGNMENT_IN_CONDITIONAL: &str = "Assignment within conditional. Did you mean == instead of =?";
    pub const THIS_USED_IN_STATIC_FUNCTION: &str = "The this keyword can not be used in static methods. It can only be used in instance methods, function closures, and global code.";
    pub const THIS_USED_IN_CLOSURE: &str = "The this keyword is used inside a function closure; its value depends on how the closure is called.";
    pub const REST_PARAM_AND_ARGUMENTS_USED_TOGETHER: &str = "The arguments object cannot be used together with a ...rest parameter.";
    pub const PACKAGE_CANNOT_BE_USED_AS_VALUE: &str = "Package {0} cannot be used as a value.";
    pub const ABSTRACT_METHOD_WITH_BODY: &str = "An abstract method cannot have a body.";
    pub const FUNCTION_WITHOUT_BODY: &str = "Function does not have a body.";
    pub const NATIVE_METHOD_WITH_BODY: &str = "Native methods cannot have a body.";
    pub const SETTER_CANNOT_HAVE_OPTIONAL: &str = "A setter definition cannot have optional parameters.";
    pub const REST_PARAMETER_MUST_BE_LAST: &str = "Rest parameters must be the last parameter.";
    pub const REQUIRED_PARAMETER_AFTER_OPTIONAL: &str = "Required parameters are not permitted after optional parameters.";
    pub const BAD_SETTER_RETURN_TYPE: &str = "Return type of a setter definition must be unspecified or void.";
    pub const ACCESSOR_TYPES_MUST_MATCH: &str = "Accessor types must match.";
    pub const GETTER_CANNOT_HAVE_PARAMETERS: &str = "A getter definition must have no parameters.";
    pub const GETTER_MUST_NOT_BE_VOID: &str = "A getter definition must not have a void return type.";
    pub const SETTER_MUST_HAVE_ONE_PARAMETER: &str = "A setter definition must have exactly one parameter.";
    pub const INVALID_REST_PARAMETER_DECLARATION: &str = "Parameters specified after the ...rest parameter definition keyword can only be an Array data type.";
    pub const NATIVE_VARIABLE: &str = "Variables cannot be native.";
    pub const DYNAMIC_NOT_ON_CLASS: &str = "The dynamic attribute can be used only with class definitions.";
    pub const FINAL_OUTSIDE_CLASS: &str = "The final attribute can be used only on a method defined in a class.";
    pub const INVALID_OVERRIDE: &str = "The override attribute can be used only on a method defined in a class.";
    pub const VIRTUAL_OUTSIDE_CLASS: &str = "The virtual attribute can be used only on a method defined in a class.";
    pub const STATIC_OUTSIDE_CLASS: &str = "The static attribute can be used only on definitions inside a class.";
    pub const ABSTRACT_OUTSIDE_CLASS: &str = "The abstract attribute can be used only on a class or a method defined in a class.";
    pub const CONST_NOT_INITIALIZED: &str = "Constant {0} was not initialized.";
    pub const TYPE_PARAMETERS_WITH_NON_PARAMETERIZED_TYPE: &str = "Type parameters with non-parameterized type.";
    pub const BURM_DIAGNOSTIC_NOT_ALLOWED_HERE: &str = "This declaration is not permitted here.";
    pub const LOCAL_BINDABLE_PROPERTY: &str = "The [Bindable] metadata can only be used on class members.";
    pub const SYNTAX_ERROR: &str = "Syntax error: unexpected '{0}'.";
    pub const DUPLICATE_ATTRIBUTE: &str = "Attribute {0} was specified multiple times.";
    pub const DUPLICATE_FUNCTION_DEFINITION: &str = "Duplicate function definition: {0}.";
    pub const DUPLICATE_VARIABLE_DEFINITION: &str = "Duplicate variable definition: {0}.";
    pub const VARIABLE_DEFINITION_DUPLICATES_PARAMETER: &str = "Variable definition duplicates parameter: {0}.";
    pub const CONFLICTING_NAME_IN_NAMESPACE: &str = "A conflict exists with definition {0} in namespace {1}.";
    pub const CONFLICTING_INHERITED_NAME_IN_NAMESPACE: &str = "A conflict exists with inherited definition {0} in namespace {1}.";
    pub const DEFINITION_SHADOWED_BY_PACKAGE_NAME: &str = "Definition name is the same as an imported package name. Unqualified references to that name will resolve to the package and not the definition.";
    pub const INTERFACE_METHOD_OVERRIDE: &str = "Incompatible override of {0} in interface {1}.";
    pub const UNKNOWN_SUPERCLASS: &str = "The definition of base class {0} was not found.";
    pub const CANNOT_EXTEND_INTERFACE: &str = "A class cannot extend an interface.";
    pub const BASE_CLASS_IS_FINAL: &str = "Base class is final.";
    pub const CIRCULAR_TYPE_REFERENCE: &str = "Circular type reference was detected in {0}.";
    pub const PARAMETER_HAS_NO_TYPE_DECLARATION: &str = "Parameter {0} of function {1} has no type declaration.";
    pub const RETURN_VALUE_HAS_NO_TYPE_DECLARATION: &str = "Return value of function {0} has no type declaration.";
    pub const VARIABLE_HAS_NO_TYPE_DECLARATION: &str = "Variable {0} has no type declaration.";
    pub const UNKNOWN_TYPE: &str = "Type was not found or was not a compile-time constant: {0}.";
    pub const DEPRECATED_API: &str = "{0} has been deprecated.";
    pub const DEPRECATED_API_WITH_MESSAGE: &str = "{0}";
    pub const DEPRECATED_API_WITH_SINCE: &str = "{0} has been deprecated since {1}.";
    pub const DEPRECATED_API_WITH_REPLACEMENT: &str = "{0} has been deprecated. Please use {1}.";
    pub const DEPRECATED_API_WITH_SINCE_AND_REPLACEMENT: &str = "{0} has been deprecated since {1}. Please use {2}.";
    pub const SCOPED_TO_DEFAULT_NAMESPACE: &str = "{0} will be scoped to the default namespace: {1}: internal. It will not be visible outside of this package.";
    pub const NAMESPACE_OVERRIDE_INSIDE_FUNCTION: &str = "Namespace attributes are not permitted on definitions inside a function.";
    pub const NAMESPACE_ACCESSOR_OVERRIDE_INSIDE_FUNCTION: &str = "Access specifiers are not permitted on definitions inside a function.";
    pub const INVALID_NAMESPACE: &str = "A user-defined namespace attribute can only be used at the top level of a class definition.";
    pub const INVALID_PUBLIC_NAMESPACE_ATTR: &str = "The public attribute can only be used inside a package.";
    pub const INVALID_PROTECTED_NAMESPACE_ATTR: &str = "The protected attribute can only be used on class property definitions.";
    pub const INVALID_PRIVATE_NAMESPACE_ATTR: &str = "The private attribute may be used only on class property definitions.";
    pub const INVALID_PUBLIC_NAMESPACE: &str = "The public namespace can only be used inside a package.";
    pub const INVALID_PROTECTED_NAMESPACE: &str = "The protected namespace can only be used inside a class.";
    pub const INVALID_PRIVATE_NAMESPACE: &str = "The private namespace can only be used inside a class.";
    pub const UNRESOLVED_NAMESPACE: &str = "Namespace was not found or is not a compile-time constant.";
    pub const UNKNOWN_NAMESPACE: &str = "Unknown namespace {0}.";
    pub const UNKNOWN_IMPORT: &str = "Definition {0} could not be found.";
    pub const UNKNOWN_WILDCARD_IMPORT: &str = "Import {0} could not be found.";
    pub const INLINE_NESTED_INLINING_NOT_SUPPORTED: &str = "Function {0} could not be inlined, as nested inlining is not supported.";
    pub const INLINE_NO_SOURCE: &str = "Function {0} could not be inlined, as no source is available.";
    pub const INLINE_FUNCTION_NOT_FINAL_STATIC_OR_GLOBAL: &str = "Function {0} could not be inlined, as only final, static or global functions can be inlined.";
    pub const INLINE_FUNCTION_TOO_LARGE: &str = "Function {0} could not be inlined, as its body contains {1} expressions and the maximum is {2}.";
    pub const INLINE_UNSUPPORTED_NODE: &str = "Function {0} could not be inlined, as it contains an unsupported construct.";
    pub const INLINE_UNSUPPORTED_INSTRUCTION: &str = "Function {0} could not be inlined, as it contains an instruction which can not be inlined.";

    // Related information; these have no code.
    pub const CONFLICTING_DEFINITION_HERE: &str = "{0} is also defined here.";
    pub const INHERITED_DEFINITION_HERE: &str = "{0} is inherited from here.";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IMPLICIT_COERCION_TO_UNRELATED_TYPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::IMPLICIT_COERCION_TO_SUBTYPE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IMPLICIT_COERCION_TO_SUBTYPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::IMPLICIT_TYPE_CHECK_COERCION_TO_UNRELATED_TYPE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::IMPLICIT_TYPE_CHECK_COERCION_TO_UNRELATED_TYPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::COMPARISON_BETWEEN_UNRELATED_TYPES,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::COMPARISON_BETWEEN_UNRELATED_TYPES,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ILLOGICAL_COMPARISON_WITH_NAN,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::ILLOGICAL_COMPARISON_WITH_NAN,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ILLOGICAL_COMPARISON_WITH_UNDEFINED,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::ILLOGICAL_COMPARISON_WITH_UNDEFINED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NULL_USED_WHERE_OTHER_EXPECTED,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::NULL_USED_WHERE_OTHER_EXPECTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INCOMPATIBLE_DEFAULT_VALUE_OF_TYPE_NULL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INCOMPATIBLE_DEFAULT_VALUE_OF_TYPE_NULL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INCOMPATIBLE_INITIALIZER_TYPE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INCOMPATIBLE_INITIALIZER_TYPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INITIALIZER_VALUE_NOT_AN_INTEGER,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INITIALIZER_VALUE_NOT_AN_INTEGER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INITIALIZER_VALUE_OUT_OF_RANGE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INITIALIZER_VALUE_OUT_OF_RANGE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::LOSSY_CONVERSION,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::LOSSY_CONVERSION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INSTANCE_OF,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INSTANCE_OF,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ARRAY_CAST,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::ARRAY_CAST,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ARRAY_DOWNCAST,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::ARRAY_DOWNCAST,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DATE_CAST,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DATE_CAST,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ACCESS_UNDEFINED_PROPERTY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ACCESS_UNDEFINED_PROPERTY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ACCESS_UNDEFINED_MEMBER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ACCESS_UNDEFINED_MEMBER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ACCESS_UNDEFINED_PROPERTY_IN_PACKAGE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ACCESS_UNDEFINED_PROPERTY_IN_PACKAGE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CALL_UNDEFINED_METHOD,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CALL_UNDEFINED_METHOD,
    },
    DiagnosticMessage {
        code: diagnostic_codes::STRICT_UNDEFINED_METHOD,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::STRICT_UNDEFINED_METHOD,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INACCESSIBLE_PROPERTY_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INACCESSIBLE_PROPERTY_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INACCESSIBLE_METHOD_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INACCESSIBLE_METHOD_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INACCESSIBLE_CONSTRUCTOR_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INACCESSIBLE_CONSTRUCTOR_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PROPERTY_IS_WRITE_ONLY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::PROPERTY_IS_WRITE_ONLY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ASSIGN_TO_READ_ONLY_PROPERTY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ASSIGN_TO_READ_ONLY_PROPERTY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ASSIGN_TO_CONST,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ASSIGN_TO_CONST,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ASSIGN_TO_FUNCTION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ASSIGN_TO_FUNCTION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ILLEGAL_ASSIGNMENT_TO_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ILLEGAL_ASSIGNMENT_TO_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ASSIGN_TO_NON_REFERENCE_VALUE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ASSIGN_TO_NON_REFERENCE_VALUE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::AMBIGUOUS_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::AMBIGUOUS_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::MISSING_PROPERTY_NAME,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::MISSING_PROPERTY_NAME,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TOO_MANY_FUNCTION_PARAMETERS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TOO_MANY_FUNCTION_PARAMETERS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TOO_FEW_FUNCTION_PARAMETERS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TOO_FEW_FUNCTION_PARAMETERS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CALL_NON_FUNCTION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CALL_NON_FUNCTION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ATTRIBUTES_ARE_NOT_CALLABLE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ATTRIBUTES_ARE_NOT_CALLABLE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INTERFACE_CANNOT_BE_INSTANTIATED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INTERFACE_CANNOT_BE_INSTANTIATED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ABSTRACT_CLASS_CANNOT_BE_INSTANTIATED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ABSTRACT_CLASS_CANNOT_BE_INSTANTIATED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::METHOD_CANNOT_BE_CONSTRUCTOR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::METHOD_CANNOT_BE_CONSTRUCTOR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNRESOLVED_CLASS_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNRESOLVED_CLASS_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NO_DEFAULT_CONSTRUCTOR_IN_BASE_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NO_DEFAULT_CONSTRUCTOR_IN_BASE_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_SUPER_STATEMENT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_SUPER_STATEMENT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::EXTRANEOUS_SUPER_STATEMENT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::EXTRANEOUS_SUPER_STATEMENT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_SUPER_EXPRESSION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_SUPER_EXPRESSION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_VALUE_MUST_BE_UNDEFINED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_VALUE_MUST_BE_UNDEFINED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_VALUE_IN_CONSTRUCTOR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_VALUE_IN_CONSTRUCTOR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_MUST_RETURN_VALUE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_MUST_RETURN_VALUE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_CANNOT_BE_USED_IN_GLOBAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_CANNOT_BE_USED_IN_GLOBAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_CANNOT_BE_USED_IN_PACKAGE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_CANNOT_BE_USED_IN_PACKAGE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_CANNOT_BE_USED_IN_STATIC,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RETURN_CANNOT_BE_USED_IN_STATIC,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ATTEMPT_TO_DELETE_FIXED_PROPERTY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ATTEMPT_TO_DELETE_FIXED_PROPERTY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_INCREMENT_OPERAND,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_INCREMENT_OPERAND,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_DECREMENT_OPERAND,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_DECREMENT_OPERAND,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INCREMENT_MUST_BE_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INCREMENT_MUST_BE_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DECREMENT_MUST_BE_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::DECREMENT_MUST_BE_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ASSIGNMENT_IN_CONDITIONAL,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::ASSIGNMENT_IN_CONDITIONAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::THIS_USED_IN_STATIC_FUNCTION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::THIS_USED_IN_STATIC_FUNCTION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::THIS_USED_IN_CLOSURE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::THIS_USED_IN_CLOSURE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::REST_PARAM_AND_ARGUMENTS_USED_TOGETHER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::REST_PARAM_AND_ARGUMENTS_USED_TOGETHER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PACKAGE_CANNOT_BE_USED_AS_VALUE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::PACKAGE_CANNOT_BE_USED_AS_VALUE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ABSTRACT_METHOD_WITH_BODY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ABSTRACT_METHOD_WITH_BODY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::FUNCTION_WITHOUT_BODY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::FUNCTION_WITHOUT_BODY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NATIVE_METHOD_WITH_BODY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NATIVE_METHOD_WITH_BODY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::SETTER_CANNOT_HAVE_OPTIONAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::SETTER_CANNOT_HAVE_OPTIONAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::REST_PARAMETER_MUST_BE_LAST,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::REST_PARAMETER_MUST_BE_LAST,
    },
    DiagnosticMessage {
        code: diagnostic_codes::REQUIRED_PARAMETER_AFTER_OPTIONAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::REQUIRED_PARAMETER_AFTER_OPTIONAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::BAD_SETTER_RETURN_TYPE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::BAD_SETTER_RETURN_TYPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ACCESSOR_TYPES_MUST_MATCH,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ACCESSOR_TYPES_MUST_MATCH,
    },
    DiagnosticMessage {
        code: diagnostic_codes::GETTER_CANNOT_HAVE_PARAMETERS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::GETTER_CANNOT_HAVE_PARAMETERS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::GETTER_MUST_NOT_BE_VOID,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::GETTER_MUST_NOT_BE_VOID,
    },
    DiagnosticMessage {
        code: diagnostic_codes::SETTER_MUST_HAVE_ONE_PARAMETER,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::SETTER_MUST_HAVE_ONE_PARAMETER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_REST_PARAMETER_DECLARATION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_REST_PARAMETER_DECLARATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NATIVE_VARIABLE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NATIVE_VARIABLE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DYNAMIC_NOT_ON_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::DYNAMIC_NOT_ON_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::FINAL_OUTSIDE_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::FINAL_OUTSIDE_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_OVERRIDE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_OVERRIDE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::VIRTUAL_OUTSIDE_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::VIRTUAL_OUTSIDE_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::STATIC_OUTSIDE_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::STATIC_OUTSIDE_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::ABSTRACT_OUTSIDE_CLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::ABSTRACT_OUTSIDE_CLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CONST_NOT_INITIALIZED,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::CONST_NOT_INITIALIZED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_PARAMETERS_WITH_NON_PARAMETERIZED_TYPE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TYPE_PARAMETERS_WITH_NON_PARAMETERIZED_TYPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::BURM_DIAGNOSTIC_NOT_ALLOWED_HERE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::BURM_DIAGNOSTIC_NOT_ALLOWED_HERE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::LOCAL_BINDABLE_PROPERTY,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::LOCAL_BINDABLE_PROPERTY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::SYNTAX_ERROR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::SYNTAX_ERROR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DUPLICATE_ATTRIBUTE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::DUPLICATE_ATTRIBUTE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DUPLICATE_FUNCTION_DEFINITION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::DUPLICATE_FUNCTION_DEFINITION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DUPLICATE_VARIABLE_DEFINITION,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DUPLICATE_VARIABLE_DEFINITION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::VARIABLE_DEFINITION_DUPLICATES_PARAMETER,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::VARIABLE_DEFINITION_DUPLICATES_PARAMETER,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CONFLICTING_NAME_IN_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CONFLICTING_NAME_IN_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CONFLICTING_INHERITED_NAME_IN_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CONFLICTING_INHERITED_NAME_IN_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DEFINITION_SHADOWED_BY_PACKAGE_NAME,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DEFINITION_SHADOWED_BY_PACKAGE_NAME,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INTERFACE_METHOD_OVERRIDE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INTERFACE_METHOD_OVERRIDE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNKNOWN_SUPERCLASS,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNKNOWN_SUPERCLASS,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CANNOT_EXTEND_INTERFACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CANNOT_EXTEND_INTERFACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::BASE_CLASS_IS_FINAL,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::BASE_CLASS_IS_FINAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CIRCULAR_TYPE_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CIRCULAR_TYPE_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_HAS_NO_TYPE_DECLARATION,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::PARAMETER_HAS_NO_TYPE_DECLARATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RETURN_VALUE_HAS_NO_TYPE_DECLARATION,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::RETURN_VALUE_HAS_NO_TYPE_DECLARATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::VARIABLE_HAS_NO_TYPE_DECLARATION,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::VARIABLE_HAS_NO_TYPE_DECLARATION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNKNOWN_TYPE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNKNOWN_TYPE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DEPRECATED_API,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DEPRECATED_API,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DEPRECATED_API_WITH_MESSAGE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DEPRECATED_API_WITH_MESSAGE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DEPRECATED_API_WITH_SINCE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DEPRECATED_API_WITH_SINCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DEPRECATED_API_WITH_REPLACEMENT,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DEPRECATED_API_WITH_REPLACEMENT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DEPRECATED_API_WITH_SINCE_AND_REPLACEMENT,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DEPRECATED_API_WITH_SINCE_AND_REPLACEMENT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::SCOPED_TO_DEFAULT_NAMESPACE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::SCOPED_TO_DEFAULT_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NAMESPACE_OVERRIDE_INSIDE_FUNCTION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NAMESPACE_OVERRIDE_INSIDE_FUNCTION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NAMESPACE_ACCESSOR_OVERRIDE_INSIDE_FUNCTION,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NAMESPACE_ACCESSOR_OVERRIDE_INSIDE_FUNCTION,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_PUBLIC_NAMESPACE_ATTR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_PUBLIC_NAMESPACE_ATTR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_PROTECTED_NAMESPACE_ATTR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_PROTECTED_NAMESPACE_ATTR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_PRIVATE_NAMESPACE_ATTR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_PRIVATE_NAMESPACE_ATTR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_PUBLIC_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_PUBLIC_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_PROTECTED_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_PROTECTED_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVALID_PRIVATE_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVALID_PRIVATE_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNRESOLVED_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNRESOLVED_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNKNOWN_NAMESPACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNKNOWN_NAMESPACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNKNOWN_IMPORT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNKNOWN_IMPORT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNKNOWN_WILDCARD_IMPORT,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::UNKNOWN_WILDCARD_IMPORT,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INLINE_NESTED_INLINING_NOT_SUPPORTED,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INLINE_NESTED_INLINING_NOT_SUPPORTED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INLINE_NO_SOURCE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INLINE_NO_SOURCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INLINE_FUNCTION_NOT_FINAL_STATIC_OR_GLOBAL,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INLINE_FUNCTION_NOT_FINAL_STATIC_OR_GLOBAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INLINE_FUNCTION_TOO_LARGE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INLINE_FUNCTION_TOO_LARGE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INLINE_UNSUPPORTED_NODE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INLINE_UNSUPPORTED_NODE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INLINE_UNSUPPORTED_INSTRUCTION,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::INLINE_UNSUPPORTED_INSTRUCTION,
    },
];
