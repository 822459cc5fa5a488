//! Declaration Checking Module
//!
//! Function, parameter, accessor and variable declarations: missing type
//! annotations, parameter ordering, accessor shape, modifier legality, type
//! names used in declarations and vector literal elements.

use crate::state::CheckerState;
use asz_ast::{ModifierKeyword, NodeIndex, NodeKind};
use asz_binder::{Binding, BuiltinType, DefId, LanguageNamespace};
use asz_common::diagnostics::diagnostic_codes;
use asz_common::ecma::{to_int32, to_uint32};
use rustc_hash::FxHashSet;
use tracing::trace;

impl<'a> CheckerState<'a> {
    // =========================================================================
    // Functions
    // =========================================================================

    /// Signature of a function definition: annotations, parameter order,
    /// accessor rules and the namespace it is declared in.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?fn_node))]
    pub fn check_function_definition(&mut self, fn_node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(func) = arena.get_function(fn_node) else {
            return;
        };
        let Some(def) = ctx.definition_of(fn_node) else {
            return;
        };
        let definition = ctx.def(def);

        self.check_return_value_has_no_type_declaration(fn_node, def);
        self.check_parameters_have_no_type_declaration(fn_node, def);

        if ctx.is_in_function(fn_node) {
            self.check_for_namespace_in_function(fn_node, def);
        }

        let last = func.parameters.len().saturating_sub(1);
        let mut found_optional = false;
        for (i, &param_node) in func.parameters.iter().enumerate() {
            let Some(param) = arena.get_parameter(param_node) else {
                continue;
            };
            if param.default_value.is_some() {
                found_optional = true;
                if definition.is_setter() {
                    self.error_at_node_msg(param_node, diagnostic_codes::SETTER_CANNOT_HAVE_OPTIONAL, &[]);
                }
            } else if param.is_rest {
                if i != last {
                    self.error_at_node_msg(param_node, diagnostic_codes::REST_PARAMETER_MUST_BE_LAST, &[]);
                }
            } else if found_optional {
                self.error_at_node_msg(
                    param_node,
                    diagnostic_codes::REQUIRED_PARAMETER_AFTER_OPTIONAL,
                    &[],
                );
            }
        }

        let return_type = ctx.return_type_of(def);
        if definition.is_setter()
            && return_type.is_some()
            && !ctx.is_builtin(return_type, BuiltinType::Void)
            && !ctx.is_builtin(return_type, BuiltinType::AnyType)
        {
            self.error_at_node_msg(func.return_type, diagnostic_codes::BAD_SETTER_RETURN_TYPE, &[]);
        }

        if definition.is_accessor() {
            let this_type = ctx.type_of_definition(def);
            if let Some(other) = ctx.resolve_corresponding_accessor(def) {
                let other_type = ctx.type_of_definition(other);
                if other_type != this_type
                    && !ctx.is_builtin(this_type, BuiltinType::AnyType)
                    && !ctx.is_builtin(other_type, BuiltinType::AnyType)
                {
                    trace!(?this_type, ?other_type, "accessor pair types differ");
                    let site = self.accessor_type_site(fn_node, definition.is_setter());
                    self.error_at_node_msg(site, diagnostic_codes::ACCESSOR_TYPES_MUST_MATCH, &[]);
                }
            }
            if definition.is_getter() {
                if let Some(&first) = func.parameters.first() {
                    self.error_at_node_msg(first, diagnostic_codes::GETTER_CANNOT_HAVE_PARAMETERS, &[]);
                }
                if ctx.is_builtin(this_type, BuiltinType::Void) {
                    self.error_at_node_msg(func.return_type, diagnostic_codes::GETTER_MUST_NOT_BE_VOID, &[]);
                }
            }
            if definition.is_setter() && func.parameters.len() != 1 {
                self.error_at_node_msg(func.name, diagnostic_codes::SETTER_MUST_HAVE_ONE_PARAMETER, &[]);
            }
        }

        self.check_namespace_of_definition(fn_node, def);
    }

    /// Where a mismatch between paired accessor types is reported: the
    /// return type of a setter or the parameter of a getter, falling back to
    /// the name.
    fn accessor_type_site(&self, fn_node: NodeIndex, is_setter: bool) -> NodeIndex {
        let Some(func) = self.ctx.arena.get_function(fn_node) else {
            return fn_node;
        };
        let site = if is_setter {
            func.return_type
        } else {
            func.parameters.first().copied().unwrap_or(NodeIndex::NONE)
        };
        if site.is_some() { site } else { func.name }
    }

    /// Functions other than constructors must declare a return type.
    /// Synthesized functions are skipped.
    pub fn check_return_value_has_no_type_declaration(&mut self, fn_node: NodeIndex, def: DefId) {
        let ctx = self.ctx;
        let definition = ctx.def(def);
        if definition.is_constructor() || ctx.arena.span(fn_node).is_synthetic() {
            return;
        }
        let Some(func) = ctx.arena.get_function(fn_node) else {
            return;
        };
        if func.return_type.is_none() {
            let site = if func.name.is_some() { func.name } else { fn_node };
            self.error_at_node_msg(
                site,
                diagnostic_codes::RETURN_VALUE_HAS_NO_TYPE_DECLARATION,
                &[&definition.name],
            );
        }
    }

    pub fn check_parameters_have_no_type_declaration(&mut self, fn_node: NodeIndex, def: DefId) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(func) = arena.get_function(fn_node) else {
            return;
        };
        let function_name = ctx.def(def).name.as_str();
        for &param_node in &func.parameters {
            let Some(param) = arena.get_parameter(param_node) else {
                continue;
            };
            if param.type_annotation.is_none() {
                let param_name = arena.identifier_text(param.name).unwrap_or_default();
                self.error_at_node_msg(
                    param_node,
                    diagnostic_codes::PARAMETER_HAS_NO_TYPE_DECLARATION,
                    &[param_name, function_name],
                );
            }
        }
    }

    /// Body of a function: `this` captured by a closure, and whether a body
    /// is present where one is required or forbidden.
    pub fn check_function_body(&mut self, fn_node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(func) = arena.get_function(fn_node) else {
            return;
        };
        let Some(def) = ctx.definition_of(fn_node) else {
            return;
        };
        let definition = ctx.def(def);

        if ctx.is_function_closure(fn_node) {
            for this_node in self.this_references(fn_node) {
                self.error_at_node_msg(this_node, diagnostic_codes::THIS_USED_IN_CLOSURE, &[]);
            }
        }

        let has_body = func.body.is_some();
        let site = if func.name.is_some() { func.name } else { fn_node };
        if ctx.options().allow_abstract_classes
            && definition.is_abstract()
            && ctx.can_be_abstract(fn_node)
        {
            if has_body {
                self.error_at_node_msg(site, diagnostic_codes::ABSTRACT_METHOD_WITH_BODY, &[]);
            }
        } else if !has_body
            && !definition.is_native()
            && !definition.is_dynamic()
            && !definition.is_constructor()
        {
            self.error_at_node_msg(site, diagnostic_codes::FUNCTION_WITHOUT_BODY, &[]);
        }
    }

    /// `this` expressions in a function body, not counting nested functions,
    /// which bind their own.
    fn this_references(&self, fn_node: NodeIndex) -> Vec<NodeIndex> {
        let arena = self.ctx.arena;
        let mut found = Vec::new();
        let mut stack: Vec<NodeIndex> = arena.children(fn_node).into_iter().collect();
        while let Some(node) = stack.pop() {
            match arena.kind(node) {
                Some(NodeKind::This) => found.push(node),
                Some(NodeKind::Function) => {}
                _ => stack.extend(arena.children(node)),
            }
        }
        found.sort_unstable();
        found
    }

    /// Native methods are implemented by the runtime.
    pub fn check_native_method(&mut self, fn_node: NodeIndex) {
        let ctx = self.ctx;
        if let Some(func) = ctx.arena.get_function(fn_node)
            && func.body.is_some()
        {
            self.error_at_node_msg(fn_node, diagnostic_codes::NATIVE_METHOD_WITH_BODY, &[]);
        }
    }

    /// Parameter types of a function declaration must name types.
    pub fn check_function_decl(&mut self, fn_node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(func) = arena.get_function(fn_node) else {
            return;
        };
        for &param_node in &func.parameters {
            let Some(param_def) = ctx.definition_of(param_node) else {
                continue;
            };
            let Some(type_node) = arena.get_parameter(param_node).map(|p| p.type_annotation) else {
                continue;
            };
            let param_type = ctx.type_of_definition(param_def);
            if param_type.is_some_and(|t| ctx.def(t).is_type()) {
                continue;
            }
            let display = ctx.def(param_def).type_name().unwrap_or("*").to_string();
            let site = if type_node.is_some() { type_node } else { param_node };
            self.add_type_problem(site, param_type, &display, ctx.options().report_ambiguous_types);
        }
    }

    /// A function declared inside another function: plain redeclaration is
    /// legal at run time, but reported.
    pub fn check_nested_function_decl(&mut self, fn_node: NodeIndex) {
        let ctx = self.ctx;
        let Some(def) = ctx.definition_of(fn_node) else {
            return;
        };
        if ctx.find_potential_function_conflicts(def).len() > 1 {
            let name = ctx.def(def).name.clone();
            self.error_at_node_msg(fn_node, diagnostic_codes::DUPLICATE_FUNCTION_DEFINITION, &[&name]);
        }
    }

    pub fn check_rest_parameter(&mut self, param_node: NodeIndex) {
        let ctx = self.ctx;
        let Some(param) = ctx.arena.get_parameter(param_node) else {
            return;
        };
        if param.type_annotation.is_none() {
            return;
        }
        let ty = ctx.resolve_reference(param.type_annotation);
        if !ctx.is_builtin(ty, BuiltinType::Array) && !ctx.is_builtin(ty, BuiltinType::AnyType) {
            self.error_at_node_msg(
                param.type_annotation,
                diagnostic_codes::INVALID_REST_PARAMETER_DECLARATION,
                &[],
            );
        }
    }

    // =========================================================================
    // Modifiers and namespaces
    // =========================================================================

    pub fn check_for_duplicate_modifiers(&mut self, node: NodeIndex) {
        let arena = self.ctx.arena;
        let mut seen = FxHashSet::default();
        for &modifier_node in arena.modifier_nodes(node) {
            let Some(keyword) = arena.get_modifier(modifier_node) else {
                continue;
            };
            if !seen.insert(keyword) {
                self.error_at_node_msg(
                    modifier_node,
                    diagnostic_codes::DUPLICATE_ATTRIBUTE,
                    &[keyword.as_str()],
                );
            }
        }
    }

    /// Definitions inside a function body can only be in the default
    /// namespace.
    pub fn check_for_namespace_in_function(&mut self, node: NodeIndex, def: DefId) {
        let ctx = self.ctx;
        let namespace = &ctx.def(def).namespace;
        if namespace.is(LanguageNamespace::Internal) || namespace.is(LanguageNamespace::FilePrivate) {
            return;
        }
        let ns_node = ctx.arena.namespace_node(node);
        let site = if ns_node.is_some() { ns_node } else { node };
        let code = if namespace.is_language_namespace() {
            diagnostic_codes::NAMESPACE_ACCESSOR_OVERRIDE_INSIDE_FUNCTION
        } else {
            diagnostic_codes::NAMESPACE_OVERRIDE_INSIDE_FUNCTION
        };
        self.error_at_node_msg(site, code, &[]);
    }

    // =========================================================================
    // Variables
    // =========================================================================

    /// `var`/`const` declaration, local or member.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn check_variable_declaration(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(var) = arena.get_variable(node) else {
            return;
        };
        let def = ctx.definition_of(node);

        if ctx.is_in_function(node) {
            if let Some(def) = def {
                self.check_for_namespace_in_function(node, def);
            }
            // Locals take no attributes other than a namespace.
            let site = if var.name.is_some() { var.name } else { node };
            for &modifier_node in &var.modifiers {
                let code = match arena.get_modifier(modifier_node) {
                    Some(ModifierKeyword::Native) => diagnostic_codes::NATIVE_VARIABLE,
                    Some(ModifierKeyword::Dynamic) => diagnostic_codes::DYNAMIC_NOT_ON_CLASS,
                    Some(ModifierKeyword::Final) => diagnostic_codes::FINAL_OUTSIDE_CLASS,
                    Some(ModifierKeyword::Override) => diagnostic_codes::INVALID_OVERRIDE,
                    Some(ModifierKeyword::Virtual) => diagnostic_codes::VIRTUAL_OUTSIDE_CLASS,
                    Some(ModifierKeyword::Static) => diagnostic_codes::STATIC_OUTSIDE_CLASS,
                    Some(ModifierKeyword::Abstract) if ctx.options().allow_abstract_classes => {
                        diagnostic_codes::ABSTRACT_OUTSIDE_CLASS
                    }
                    _ => continue,
                };
                self.error_at_node_msg(site, code, &[]);
            }
        }

        if let Some(def) = def {
            self.check_variable_for_conflicting_definitions(node, def);
            self.check_namespace_of_definition(node, def);
        }

        let name = arena.identifier_text(var.name).unwrap_or_default();
        if var.type_annotation.is_none() && !arena.span(node).is_synthetic() {
            let site = if var.name.is_some() { var.name } else { node };
            self.error_at_node_msg(site, diagnostic_codes::VARIABLE_HAS_NO_TYPE_DECLARATION, &[name]);
        }

        // `Foo.<T>` is only legal when `Foo` is `Vector`, at every level of
        // nesting.
        let mut type_node = var.type_annotation;
        while arena.is_kind(type_node, NodeKind::TypedExpression) {
            let Some(pair) = arena.get_pair(type_node) else {
                break;
            };
            let collection = ctx.resolve_reference(pair.left);
            if !ctx.is_builtin(collection, BuiltinType::Vector) {
                self.error_at_node_msg(
                    pair.left,
                    diagnostic_codes::TYPE_PARAMETERS_WITH_NON_PARAMETERIZED_TYPE,
                    &[],
                );
            }
            type_node = pair.right;
        }

        if var.is_const && var.initializer.is_none() {
            self.error_at_node_msg(node, diagnostic_codes::CONST_NOT_INITIALIZED, &[name]);
        }
        if var.initializer.is_some()
            && let Some(def) = def
        {
            self.check_assignment_value(def, var.initializer);
        }

        if ctx.is_nested_class_property(node) {
            self.error_at_node_msg(node, diagnostic_codes::BURM_DIAGNOSTIC_NOT_ALLOWED_HERE, &[]);
        }
    }

    /// `[Bindable]` applies to class members only.
    pub fn check_bindable_variable_declaration(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let parent_is_class = ctx
            .definition_of(node)
            .and_then(|d| ctx.def(d).parent)
            .is_some_and(|p| ctx.def(p).is_class());
        if !parent_is_class {
            self.error_at_node_msg(node, diagnostic_codes::LOCAL_BINDABLE_PROPERTY, &[]);
        }
        self.check_variable_declaration(node);
    }

    /// Member variable of a class: the declaration checks plus its type
    /// annotation must name a type.
    pub fn check_class_field(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        self.check_variable_declaration(node);

        let Some(var) = arena.get_variable(node) else {
            return;
        };
        let type_node = var.type_annotation;
        if type_node.is_none() {
            return;
        }
        let type_def = ctx.resolve_reference(type_node);
        if type_def.is_some_and(|t| !t.is_ambiguous() && ctx.def(t).is_type()) {
            return;
        }
        let description = arena
            .identifier_text(type_node)
            .map(str::to_string)
            .or_else(|| ctx.dotted_name(type_node))
            .or_else(|| {
                ctx.definition_of(node)
                    .and_then(|d| ctx.def(d).type_name().map(str::to_string))
            })
            .unwrap_or_default();
        self.add_type_problem(type_node, type_def, &description, ctx.options().report_ambiguous_types);
    }

    // =========================================================================
    // Type names
    // =========================================================================

    /// A name used where a type is expected.
    pub fn check_type_name(&mut self, binding: &Binding) {
        let ctx = self.ctx;
        if binding.node.is_none() {
            return;
        }
        let Some(name) = binding.name.as_ref() else {
            return;
        };
        let def = binding.definition;
        let names_a_type = def.is_some_and(|d| !d.is_ambiguous() && ctx.def(d).is_type());
        if !names_a_type {
            self.add_type_problem(binding.node, def, &name.base_name, false);
        }
        self.check_reference(binding, false);
    }

    /// `desc` names something that is not a type: either an ambiguous
    /// reference or an unknown one.
    fn add_type_problem(
        &mut self,
        node: NodeIndex,
        def: Option<DefId>,
        desc: &str,
        report_ambiguous: bool,
    ) {
        if def.is_some_and(DefId::is_ambiguous) {
            if report_ambiguous {
                self.error_at_node_msg(node, diagnostic_codes::AMBIGUOUS_REFERENCE, &[desc]);
            }
        } else {
            self.error_at_node_msg(node, diagnostic_codes::UNKNOWN_TYPE, &[desc]);
        }
    }

    // =========================================================================
    // Vector literals
    // =========================================================================

    /// `new <T>[...]`: integral element types cannot hold fractional or
    /// out-of-range literals, numeric and `Boolean` ones cannot hold `null`.
    pub fn check_vector_literal(&mut self, node: NodeIndex, element_type: Option<DefId>) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(literal) = arena.get_vector_literal(node) else {
            return;
        };

        if ctx.is_numeric_type_or_boolean(element_type) {
            let type_name = element_type.map(|t| ctx.def(t).name.clone()).unwrap_or_default();
            let integral = ctx.builtin_of(element_type);
            for &element in &literal.elements {
                if let Some(value) = arena.number_value(element)
                    && arena.is_kind(element, NodeKind::NumericLiteral)
                {
                    let lossy = match integral {
                        Some(BuiltinType::Int) => value != f64::from(to_int32(value)),
                        Some(BuiltinType::UInt) => value != f64::from(to_uint32(value)),
                        _ => false,
                    };
                    if lossy {
                        self.error_at_node_msg(element, diagnostic_codes::LOSSY_CONVERSION, &[&type_name]);
                    }
                }
                if ctx.is_builtin(ctx.resolve_type(element), BuiltinType::Null) {
                    self.error_at_node_msg(
                        element,
                        diagnostic_codes::NULL_USED_WHERE_OTHER_EXPECTED,
                        &[&type_name],
                    );
                }
            }
        }

        for &element in &literal.elements {
            self.check_implicit_conversion(element, element_type);
        }
    }
}
