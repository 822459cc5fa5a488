//! Inlining Eligibility Module
//!
//! Decides whether a call to a function may be replaced by its body. A
//! function qualifies when it is final, static or global, is not a
//! constructor, and its body is small and free of constructs that need their
//! own scope. Problems are only reported for functions explicitly marked
//! inline; other candidates are rejected silently.

use crate::state::CheckerState;
use asz_ast::{NodeIndex, NodeKind};
use asz_binder::DefId;
use asz_common::diagnostics::diagnostic_codes;
use asz_common::limits::MAX_EXPR_IN_BODY;
use asz_lowering::InstructionList;
use tracing::debug;

impl<'a> CheckerState<'a> {
    /// The getter of `accessor`, which may be given as either half of the
    /// pair, can be inlined.
    pub fn can_getter_be_inlined(&mut self, accessor: DefId) -> bool {
        let ctx = self.ctx;
        let getter = if ctx.def(accessor).is_setter() {
            ctx.resolve_corresponding_accessor(accessor)
        } else {
            Some(accessor)
        };
        getter.is_some_and(|g| self.can_function_be_inlined(g))
    }

    /// The setter of `accessor`, which may be given as either half of the
    /// pair, can be inlined.
    pub fn can_setter_be_inlined(&mut self, accessor: DefId) -> bool {
        let ctx = self.ctx;
        let setter = if ctx.def(accessor).is_getter() {
            ctx.resolve_corresponding_accessor(accessor)
        } else {
            Some(accessor)
        };
        setter.is_some_and(|s| self.can_function_be_inlined(s))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(function = ?function))]
    pub fn can_function_be_inlined(&mut self, function: DefId) -> bool {
        let ctx = self.ctx;
        if !ctx.options().inlining_enabled {
            return false;
        }
        let definition = ctx.def(function);
        let report = definition.function_info().is_some_and(|f| f.is_inline);
        let name = definition.name.as_str();

        if self.in_inline_function {
            if report {
                self.error_at_node_msg(
                    NodeIndex::NONE,
                    diagnostic_codes::INLINE_NESTED_INLINING_NOT_SUPPORTED,
                    &[name],
                );
            }
            return false;
        }

        // Only functions declared in this unit have a body to copy.
        let in_this_unit = definition
            .decl
            .and_then(|d| ctx.project.unit(d.unit))
            .is_some_and(|unit| std::ptr::eq(unit, ctx.unit));
        let fn_node = if in_this_unit { definition.node() } else { NodeIndex::NONE };
        let has_body = ctx.arena.get_function(fn_node).is_some_and(|f| f.body.is_some());
        if !has_body {
            if report {
                self.error_at_node_msg(NodeIndex::NONE, diagnostic_codes::INLINE_NO_SOURCE, &[name]);
            }
            return false;
        }

        let global = definition.parent.is_none();
        if !(definition.is_final() || definition.is_static() || global) || definition.is_constructor() {
            if report {
                self.error_at_node_msg(
                    fn_node,
                    diagnostic_codes::INLINE_FUNCTION_NOT_FINAL_STATIC_OR_GLOBAL,
                    &[name],
                );
            }
            return false;
        }

        let body = ctx.arena.get_function(fn_node).map_or(NodeIndex::NONE, |f| f.body);
        !self.function_body_has_non_inlineable_nodes(body, report, name)
    }

    /// Scan `body` in source order for constructs that cannot be inlined,
    /// counting expressions and stopping as soon as the count passes the
    /// limit.
    fn function_body_has_non_inlineable_nodes(&mut self, body: NodeIndex, report: bool, name: &str) -> bool {
        let arena = self.ctx.arena;
        if body.is_none() {
            return false;
        }
        let mut expression_count = 0usize;
        let mut stack = vec![body];
        while let Some(node) = stack.pop() {
            let Some(kind) = arena.kind(node) else {
                continue;
            };
            if kind.is_expression() {
                expression_count += 1;
                if expression_count > MAX_EXPR_IN_BODY {
                    debug!(expression_count, "inline candidate too large");
                    if report {
                        let count = expression_count.to_string();
                        let max = MAX_EXPR_IN_BODY.to_string();
                        self.error_at_node_msg(
                            NodeIndex::NONE,
                            diagnostic_codes::INLINE_FUNCTION_TOO_LARGE,
                            &[name, &count, &max],
                        );
                    }
                    return true;
                }
            }
            match kind {
                NodeKind::Function
                | NodeKind::FunctionObject
                | NodeKind::Try
                | NodeKind::Catch
                | NodeKind::Finally
                | NodeKind::With => {
                    if report {
                        self.error_at_node_msg(node, diagnostic_codes::INLINE_UNSUPPORTED_NODE, &[name]);
                    }
                    return true;
                }
                _ => stack.extend(arena.children(node).into_iter().rev()),
            }
        }
        false
    }

    /// The lowered body of an inline candidate must not touch the scope
    /// chain. An empty list means lowering failed.
    pub fn function_body_has_non_inlineable_instructions(
        &mut self,
        instructions: &InstructionList,
        report: bool,
        function_name: &str,
    ) -> bool {
        if instructions.is_empty() {
            return true;
        }
        let scope_dependent = instructions
            .instructions()
            .iter()
            .any(|i| i.opcode.is_scope_dependent());
        if scope_dependent && report {
            self.error_at_node_msg(
                NodeIndex::NONE,
                diagnostic_codes::INLINE_UNSUPPORTED_INSTRUCTION,
                &[function_name],
            );
        }
        scope_dependent
    }
}
