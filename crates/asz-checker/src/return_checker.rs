//! Return Checking Module
//!
//! `return` with and without a value, `throw`, and the flow-sensitive check
//! that every path through a value-returning function returns one.

use crate::state::{CheckOutcome, CheckerState, SkipReason};
use asz_ast::{NodeIndex, NodeKind};
use asz_binder::BuiltinType;
use asz_common::diagnostics::diagnostic_codes;
use asz_lowering::InstructionList;
use tracing::debug;

impl<'a> CheckerState<'a> {
    /// `return expr;`.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn check_return_value(&mut self, node: NodeIndex) -> CheckOutcome {
        let ctx = self.ctx;
        let outcome = if let Some(func) = ctx.enclosing_function_definition(node) {
            let expression = ctx.arena.get_single(node);
            if expression.is_none() {
                debug!(?node, "return without an expression node; skipping value checks");
                CheckOutcome::Skip(SkipReason::MissingReturnExpression)
            } else {
                let return_type = ctx.return_type_of(func);
                if ctx.is_builtin(return_type, BuiltinType::Void) {
                    let value_type = ctx.resolve_type(expression);
                    if value_type.is_some() && !ctx.is_builtin(value_type, BuiltinType::Void) {
                        self.error_at_node_msg(
                            expression,
                            diagnostic_codes::RETURN_VALUE_MUST_BE_UNDEFINED,
                            &[],
                        );
                    }
                } else if ctx.def(func).is_constructor() {
                    self.error_at_node_msg(expression, diagnostic_codes::RETURN_VALUE_IN_CONSTRUCTOR, &[]);
                } else {
                    self.check_implicit_conversion(expression, return_type);
                }
                CheckOutcome::Checked
            }
        } else {
            let in_package = self.is_in_package_definition(node);
            let in_class = self.is_in_class_definition(node);
            if in_package {
                self.error_at_node_msg(node, diagnostic_codes::RETURN_CANNOT_BE_USED_IN_PACKAGE, &[]);
            } else if in_class {
                self.error_at_node_msg(node, diagnostic_codes::RETURN_CANNOT_BE_USED_IN_STATIC, &[]);
            } else if !ctx.unit.mxml {
                self.error_at_node_msg(node, diagnostic_codes::RETURN_CANNOT_BE_USED_IN_GLOBAL, &[]);
            }
            CheckOutcome::Checked
        };

        self.arm_super_state();
        outcome
    }

    /// `return;`.
    pub fn check_return_void(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        if ctx.is_in_function(node) {
            if ctx.function_must_return_value(node) {
                self.error_at_node_msg(node, diagnostic_codes::RETURN_MUST_RETURN_VALUE, &[]);
            }
        } else if self.is_in_class_definition(node) {
            self.error_at_node_msg(node, diagnostic_codes::RETURN_CANNOT_BE_USED_IN_STATIC, &[]);
        } else if self.is_in_package_definition(node) {
            self.error_at_node_msg(node, diagnostic_codes::RETURN_CANNOT_BE_USED_IN_PACKAGE, &[]);
        } else if !ctx.unit.mxml {
            self.error_at_node_msg(node, diagnostic_codes::RETURN_CANNOT_BE_USED_IN_GLOBAL, &[]);
        }
        self.arm_super_state();
    }

    /// `throw expr;`.
    pub fn check_throw(&mut self, _node: NodeIndex) {
        self.arm_super_state();
    }

    /// After lowering: a reachable block ending in the synthesized
    /// `returnvoid` means some path falls off the end of a function that
    /// must return a value. Reported once per function.
    pub fn check_control_flow(&mut self, function_node: NodeIndex, instructions: &InstructionList) {
        let ctx = self.ctx;
        if instructions.is_empty()
            || !instructions.ends_with_synthesized_return()
            || !ctx.function_must_return_value(function_node)
        {
            return;
        }
        let falls_off_end = instructions
            .blocks_in_control_flow_order()
            .into_iter()
            .any(|block| block.last().is_some_and(|i| i.is_synthesized_return_void()));
        if falls_off_end {
            self.error_at_node_msg(function_node, diagnostic_codes::RETURN_MUST_RETURN_VALUE, &[]);
        }
    }

    fn is_in_package_definition(&self, node: NodeIndex) -> bool {
        self.ctx.arena.ancestor_of_kind(node, NodeKind::Package).is_some()
    }

    fn is_in_class_definition(&self, node: NodeIndex) -> bool {
        self.ctx.arena.ancestor_of_kind(node, NodeKind::Class).is_some()
    }
}
