//! Super-call checks: explicit `super(...)` statements against the
//! constructor state machine, and the default super call the compiler
//! inserts when a constructor has none.

use crate::state::{CheckerState, SuperState};
use asz_ast::{NodeIndex, NodeKind};
use asz_binder::DefId;
use asz_common::diagnostics::diagnostic_codes;
use tracing::trace;

impl<'a> CheckerState<'a> {
    /// Constructor of the base class of the class enclosing `node`.
    fn base_constructor(&self, class: DefId) -> Option<(DefId, DefId)> {
        let ctx = self.ctx;
        let base = ctx.def(class).class_info()?.base_class?;
        let ctor = ctx.def(base).class_info()?.constructor?;
        Some((base, ctor))
    }

    /// An explicit `super(args)` statement.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn check_explicit_super_call(&mut self, node: NodeIndex, arguments: &[NodeIndex]) {
        let ctx = self.ctx;
        if !ctx.is_in_constructor(node) {
            self.error_at_node_msg(node, diagnostic_codes::INVALID_SUPER_STATEMENT, &[]);
        } else if self.super_state == SuperState::Initial {
            self.super_state = SuperState::Armed;
        } else {
            // A second super call, or one after `return`/`throw`.
            self.error_at_node_msg(node, diagnostic_codes::EXTRANEOUS_SUPER_STATEMENT, &[]);
        }

        let site = ctx.arena.get_call(node).map_or(node, |call| call.callee);
        if let Some(class) = ctx.enclosing_class_definition(node)
            && let Some((_, ctor)) = self.base_constructor(class)
        {
            self.check_formals_vs_actuals(site, ctor, arguments);
        }
    }

    /// The implicit `super()` of a constructor that has no explicit one.
    /// `node` is the constructor, or the class when the constructor itself
    /// is synthesized.
    pub fn check_default_super_call(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        if node.is_none() {
            return;
        }
        let class_node = if arena.is_kind(node, NodeKind::Class) {
            node
        } else {
            arena.ancestor_of_kind(node, NodeKind::Class)
        };
        let Some(class) = ctx.definition_of(class_node) else {
            return;
        };
        let Some((base, ctor)) = self.base_constructor(class) else {
            return;
        };
        let Some(&first) = ctx.def(ctor).function_info().and_then(|f| f.parameters.first()) else {
            return;
        };
        let first = ctx.def(first).parameter_info().unwrap_or_default();
        if first.has_default || first.is_rest {
            return;
        }

        // With no constructor in source there is nothing else to point at.
        let own_ctor_is_implicit = ctx
            .def(class)
            .class_info()
            .and_then(|c| c.constructor)
            .is_none_or(|c| ctx.def(c).is_implicit);
        let site = if own_ctor_is_implicit { class_node } else { node };
        trace!(?base, "base constructor requires arguments");
        let base_name = ctx.def(base).name.clone();
        self.error_at_node_msg(site, diagnostic_codes::NO_DEFAULT_CONSTRUCTOR_IN_BASE_CLASS, &[&base_name]);
    }
}
