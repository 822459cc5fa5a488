//! Call Checking Module
//!
//! Function calls, casts through type names, and `new` expressions: arity
//! and argument conversions, calls to non-functions, and constructors that
//! cannot be invoked from here.

use crate::state::CheckerState;
use asz_ast::{NodeIndex, NodeKind};
use asz_binder::{Binding, BuiltinType, DefId, LanguageNamespace};
use asz_common::diagnostics::diagnostic_codes;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

impl<'a> CheckerState<'a> {
    // =========================================================================
    // Function calls
    // =========================================================================

    /// `f(args)` and `base.f(args)`, with `binding` the binding of `f`.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node, args = arguments.len()))]
    pub fn check_function_call(&mut self, node: NodeIndex, binding: &Binding, arguments: &[NodeIndex]) {
        let ctx = self.ctx;
        // Synthesized calls carry no name.
        let Some(name) = binding.name.as_ref() else {
            return;
        };
        let site = Self::reference_site(binding, node);
        let base_name = name.base_name.as_str();

        if name.is_attribute_name() {
            self.error_at_node_msg(site, diagnostic_codes::ATTRIBUTES_ARE_NOT_CALLABLE, &[]);
        }

        let def = binding
            .definition
            .or_else(|| self.bindable_event_dispatcher_method(node, base_name));

        let number_like = |ty: Option<DefId>| {
            matches!(
                ctx.builtin_of(ty),
                Some(
                    BuiltinType::Number
                        | BuiltinType::Boolean
                        | BuiltinType::Int
                        | BuiltinType::UInt
                        | BuiltinType::String
                )
            )
        };

        match def {
            None => {
                if ctx.definition_can_be_analyzed(node, binding) {
                    self.report_undefined_method(node, site, binding, base_name);
                }
            }
            Some(id) if id.is_ambiguous() => {}
            Some(id) => {
                let definition = ctx.def(id);
                if definition.is_accessor() {
                    if number_like(ctx.type_of_definition(id)) {
                        self.error_at_node_msg(node, diagnostic_codes::CALL_NON_FUNCTION, &[base_name]);
                    }
                } else if definition.is_function() {
                    self.check_formals_vs_actuals(node, id, arguments);
                } else if definition.is_variable_like() {
                    if number_like(ctx.type_of_definition(id)) {
                        self.error_at_node_msg(node, diagnostic_codes::CALL_NON_FUNCTION, &[base_name]);
                    }
                } else if ctx.is_builtin(Some(id), BuiltinType::Array) {
                    self.check_array_call(node, arguments);
                } else if definition.qualified_name() == "Date" {
                    if !arguments.is_empty() {
                        self.error_at_node_msg(node, diagnostic_codes::DATE_CAST, &[]);
                    }
                } else if definition.is_type() {
                    // A cast takes exactly one operand.
                    match arguments.len() {
                        0 => self.error_at_node_msg(node, diagnostic_codes::TOO_FEW_FUNCTION_PARAMETERS, &["1"]),
                        1 => {}
                        _ => self.error_at_node_msg(node, diagnostic_codes::TOO_MANY_FUNCTION_PARAMETERS, &["1"]),
                    }
                }
            }
        }

        self.check_reference(binding, false);
    }

    fn report_undefined_method(&mut self, node: NodeIndex, site: NodeIndex, binding: &Binding, name: &str) {
        let ctx = self.ctx;
        if ctx.is_inaccessible(node, binding) {
            // `toString` is reachable on every object at run time.
            if name != "toString" {
                let stem = ctx.type_of_stem(node);
                self.error_at_node_msg(site, diagnostic_codes::INACCESSIBLE_METHOD_REFERENCE, &[name, &stem]);
            }
        } else if ctx.has_explicit_stem(node) && ctx.has_underlying_type(node) {
            let stem = ctx.type_of_stem(node);
            self.error_at_node_msg(site, diagnostic_codes::STRICT_UNDEFINED_METHOD, &[name, &stem]);
        } else {
            self.error_at_node_msg(site, diagnostic_codes::CALL_UNDEFINED_METHOD, &[name]);
        }
    }

    /// Classes made bindable get an `IEventDispatcher` implementation added by
    /// the compiler after binding; calls to its methods resolve to the
    /// interface's declaration.
    fn bindable_event_dispatcher_method(&self, node: NodeIndex, name: &str) -> Option<DefId> {
        let ctx = self.ctx;
        let underlying = ctx.definition_of_underlying_type(node)?;
        ctx.def(underlying).class_info()?;
        let mut visited = FxHashSet::default();
        let mut class = Some(underlying);
        let mut needs_dispatcher = false;
        while let Some(current) = class {
            if !visited.insert(current) {
                break;
            }
            let Some(info) = ctx.def(current).class_info() else {
                break;
            };
            if info.needs_event_dispatcher {
                needs_dispatcher = true;
                break;
            }
            class = info.base_class;
        }
        if !needs_dispatcher {
            return None;
        }
        let dispatcher = ctx.project.event_dispatcher_interface()?;
        let scope = ctx.def(dispatcher).contained_scope()?;
        match ctx.project.scopes().local(scope, name) {
            [single] => {
                debug!(name, "call resolved through bindable IEventDispatcher");
                Some(*single)
            }
            _ => None,
        }
    }

    /// `Array(x)` always builds a new array; with one untyped argument it
    /// looks like a downcast.
    fn check_array_call(&mut self, node: NodeIndex, arguments: &[NodeIndex]) {
        let ctx = self.ctx;
        let downcast = match arguments {
            [argument] => {
                let ty = ctx.resolve_type(*argument);
                ty.is_none()
                    || matches!(
                        ctx.builtin_of(ty),
                        Some(BuiltinType::Array | BuiltinType::Object | BuiltinType::AnyType)
                    )
            }
            _ => false,
        };
        let code = if downcast {
            diagnostic_codes::ARRAY_DOWNCAST
        } else {
            diagnostic_codes::ARRAY_CAST
        };
        self.error_at_node_msg(node, code, &[]);
    }

    /// Arity and argument types of a call against the formal parameters of
    /// `func`. Calls through accessors are not checked.
    pub fn check_formals_vs_actuals(&mut self, node: NodeIndex, func: DefId, arguments: &[NodeIndex]) {
        let ctx = self.ctx;
        let definition = ctx.def(func);
        if definition.is_accessor() {
            return;
        }
        let Some(info) = definition.function_info() else {
            return;
        };
        let formals = &info.parameters;
        let param_info = |p: DefId| ctx.def(p).parameter_info().unwrap_or_default();

        let last_is_rest = formals.last().is_some_and(|&p| param_info(p).is_rest);
        if arguments.len() > formals.len() && !last_is_rest {
            let max = formals.len().to_string();
            self.error_at_node_msg(node, diagnostic_codes::TOO_MANY_FUNCTION_PARAMETERS, &[&max]);
        }

        let required = formals
            .iter()
            .take_while(|&&p| {
                let info = param_info(p);
                !info.has_default && !info.is_rest
            })
            .count();
        if arguments.len() < required {
            let required = required.to_string();
            self.error_at_node_msg(node, diagnostic_codes::TOO_FEW_FUNCTION_PARAMETERS, &[&required]);
        }

        for (&argument, &formal) in arguments.iter().zip(formals.iter()) {
            if !param_info(formal).is_rest {
                self.check_implicit_conversion(argument, ctx.type_of_definition(formal));
            }
        }
    }

    // =========================================================================
    // new
    // =========================================================================

    /// `new C(args)` with `binding` the binding of `C`.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn check_new_expr(&mut self, node: NodeIndex, binding: &Binding, arguments: &[NodeIndex]) {
        let ctx = self.ctx;
        let site = Self::reference_site(binding, node);
        let name = binding.base_name().unwrap_or_default();

        match binding.definition {
            None => {
                let is_type_name = binding.name.as_ref().is_some_and(|n| n.is_type_name());
                if ctx.definition_can_be_analyzed(node, binding) && !is_type_name {
                    self.error_at_node_msg(site, diagnostic_codes::CALL_UNDEFINED_METHOD, &[name]);
                }
            }
            Some(id) if id.is_ambiguous() => {}
            Some(id) => {
                let definition = ctx.def(id);
                if definition.is_interface() {
                    self.error_at_node_msg(site, diagnostic_codes::INTERFACE_CANNOT_BE_INSTANTIATED, &[]);
                } else if let Some(class) = definition.class_info() {
                    if ctx.options().allow_abstract_classes && definition.is_abstract() {
                        self.error_at_node_msg(
                            site,
                            diagnostic_codes::ABSTRACT_CLASS_CANNOT_BE_INSTANTIATED,
                            &[],
                        );
                    }
                    if let Some(ctor) = class.constructor {
                        self.check_formals_vs_actuals(node, ctor, arguments);
                        self.check_private_constructor(node, site, id, ctor);
                    }
                } else if definition.is_getter() {
                    // The getter may return a class.
                } else if definition.is_function() {
                    if definition.is_constructor() {
                        if let Some(class) = definition.parent {
                            self.check_private_constructor(node, site, class, id);
                        }
                    } else if self.is_type_member(id) {
                        self.error_at_node_msg(site, diagnostic_codes::METHOD_CANNOT_BE_CONSTRUCTOR, &[]);
                    }
                } else if definition.is_variable_like() {
                    let ty = ctx.type_of_definition(id);
                    let constructible = ty.is_none()
                        || matches!(
                            ctx.builtin_of(ty),
                            Some(
                                BuiltinType::Class
                                    | BuiltinType::Function
                                    | BuiltinType::Object
                                    | BuiltinType::AnyType
                            )
                        );
                    if !constructible {
                        trace!(?ty, "new through a variable of a fixed type");
                        self.error_at_node_msg(site, diagnostic_codes::CALL_UNDEFINED_METHOD, &[name]);
                    }
                }
            }
        }

        self.check_reference(binding, false);
    }

    /// `new a.b.C(...)`: the callee is a member access resolved as a whole.
    pub fn check_new_member_access(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(call) = arena.get_call(node) else {
            return;
        };
        let callee = call.callee;
        if !arena.is_kind(callee, NodeKind::MemberAccess) {
            return;
        }

        match ctx.resolve_reference(callee) {
            None => {
                let display = ctx.dotted_name(callee).unwrap_or_default();
                self.error_at_node_msg(node, diagnostic_codes::UNRESOLVED_CLASS_REFERENCE, &[&display]);
            }
            Some(id) if id.is_ambiguous() => {}
            Some(id) => {
                let definition = ctx.def(id);
                if definition.is_interface() {
                    self.error_at_node_msg(node, diagnostic_codes::INTERFACE_CANNOT_BE_INSTANTIATED, &[]);
                } else if let Some(class) = definition.class_info() {
                    if let Some(ctor) = class.constructor {
                        self.check_private_constructor(node, node, id, ctor);
                    }
                } else if definition.is_getter() {
                    // The getter may return a class.
                } else if definition.is_function() {
                    if self.is_type_member(id) {
                        self.error_at_node_msg(node, diagnostic_codes::METHOD_CANNOT_BE_CONSTRUCTOR, &[]);
                    }
                    if definition.is_constructor()
                        && let Some(class) = definition.parent
                    {
                        self.check_private_constructor(node, node, class, id);
                    }
                }
            }
        }
    }

    /// A method declared directly in a class or interface body.
    fn is_type_member(&self, func: DefId) -> bool {
        let ctx = self.ctx;
        ctx.def(func).parent.is_some_and(|p| ctx.def(p).is_type())
    }

    /// A `private` constructor may only be invoked from inside its class.
    fn check_private_constructor(&mut self, node: NodeIndex, site: NodeIndex, class: DefId, ctor: DefId) {
        let ctx = self.ctx;
        if !ctx.options().allow_private_constructors
            || !ctx.def(ctor).namespace.is(LanguageNamespace::Private)
        {
            return;
        }
        if ctx.enclosing_class_definition(node) == Some(class) {
            return;
        }
        let class_name = ctx.def(class).qualified_name();
        self.error_at_node_msg(site, diagnostic_codes::INACCESSIBLE_CONSTRUCTOR_REFERENCE, &[&class_name]);
    }
}
