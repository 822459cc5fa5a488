//! Assignment Checking Module
//!
//! Storage-mutating expressions: plain and compound assignment, variable
//! initialization, `delete`, and `++`/`--`.

use crate::state::CheckerState;
use asz_ast::{BinaryOperator, NodeIndex};
use asz_binder::{Binding, BuiltinType, DefId};
use asz_common::diagnostics::diagnostic_codes;
use asz_lowering::binary_opcode;
use tracing::trace;

impl<'a> CheckerState<'a> {
    // =========================================================================
    // Lvalues
    // =========================================================================

    /// The target of an assignment or other storage-mutating operation.
    pub fn check_lvalue(&mut self, node: NodeIndex, binding: &Binding) {
        let ctx = self.ctx;
        let def = binding.definition;
        let name = binding.base_name().unwrap_or_default();
        let site = Self::reference_site(binding, node);

        if ctx.is_this_keyword(binding.node) {
            self.error_at_node_msg(binding.node, diagnostic_codes::ASSIGN_TO_NON_REFERENCE_VALUE, &[]);
        } else if let Some(id) = def {
            let definition = ctx.def(id);
            if definition.is_constant() {
                self.error_at_node_msg(node, diagnostic_codes::ASSIGN_TO_CONST, &[]);
            } else if ctx.is_read_only_definition(def) {
                self.error_at_node_msg(node, diagnostic_codes::ASSIGN_TO_READ_ONLY_PROPERTY, &[name]);
            } else if definition.is_accessor() {
                // Setter, or a getter paired with one.
            } else if definition.is_function() {
                self.error_at_node_msg(node, diagnostic_codes::ASSIGN_TO_FUNCTION, &[name]);
            } else if definition.is_class() {
                self.error_at_node_msg(site, diagnostic_codes::ILLEGAL_ASSIGNMENT_TO_CLASS, &[name]);
            }
        } else if !ctx.has_dynamic_base(binding.node) && !ctx.is_in_with(binding.node) {
            self.report_undefined_property(binding, site);
        }

        self.check_reference(binding, true);
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// `lhs = rhs`.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn check_assignment(&mut self, node: NodeIndex, binding: &Binding) {
        let ctx = self.ctx;
        let Some(assignment) = ctx.arena.get_assignment(node) else {
            return;
        };
        self.check_lvalue(node, binding);

        if ctx.is_unprotected_assignment_in_conditional(node) {
            self.error_at_node_msg(assignment.left, diagnostic_codes::ASSIGNMENT_IN_CONDITIONAL, &[]);
        }

        if let Some(def) = binding.definition {
            // Assigning to a class is already an error; its type says nothing
            // about the value.
            if !ctx.def(def).is_type() {
                let left_type = ctx.type_of_definition(def);
                self.check_implicit_conversion(assignment.right, left_type);
            }
            self.check_assignment_value(def, assignment.right);
        }
    }

    /// `null` stored into a numeric or `Boolean` slot becomes `0` or `false`.
    pub fn check_assignment_value(&mut self, left: DefId, right: NodeIndex) {
        let ctx = self.ctx;
        if right.is_none() {
            return;
        }
        let left_type = ctx.type_of_definition(left);
        if !ctx.is_numeric_type_or_boolean(left_type) {
            return;
        }
        if !ctx.is_builtin(ctx.resolve_type(right), BuiltinType::Null) {
            return;
        }
        let type_name = left_type.map(|t| ctx.def(t).name.clone()).unwrap_or_default();
        let code = if ctx.def(left).is_constant() {
            diagnostic_codes::INCOMPATIBLE_DEFAULT_VALUE_OF_TYPE_NULL
        } else {
            diagnostic_codes::NULL_USED_WHERE_OTHER_EXPECTED
        };
        self.error_at_node_msg(right, code, &[&type_name]);
    }

    /// Initializer of a declared variable, checked against its type.
    pub fn check_initialization(&mut self, initializer: NodeIndex, binding: &Binding) {
        let ctx = self.ctx;
        if let Some(def) = binding.definition {
            self.check_implicit_conversion(initializer, ctx.type_of_definition(def));
        }
    }

    /// `lhs op= rhs`.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn check_compound_assignment(&mut self, node: NodeIndex, binding: &Binding) {
        let ctx = self.ctx;
        let Some(assignment) = ctx.arena.get_assignment(node) else {
            return;
        };
        let Some(op) = assignment.op else {
            self.check_assignment(node, binding);
            return;
        };
        self.check_lvalue(node, binding);

        if ctx.is_unprotected_assignment_in_conditional(node) {
            self.error_at_node_msg(assignment.left, diagnostic_codes::ASSIGNMENT_IN_CONDITIONAL, &[]);
        }

        self.check_binary_operands(node, assignment.left, assignment.right, op);

        let Some(def) = binding.definition else {
            return;
        };
        let lhs_type = ctx.type_of_definition(def);
        let result_type = ctx.operator_result_type(op, assignment.left, assignment.right);
        if !ctx.is_valid_implicit_op_assignment(lhs_type, result_type, binary_opcode(op)) {
            trace!(?lhs_type, ?result_type, ?op, "compound result does not convert back");
            self.check_implicit_conversion(assignment.right, lhs_type);
        } else if matches!(op, BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr) {
            // `&&=` and `||=` store one of their operands.
            self.check_implicit_conversion(assignment.right, lhs_type);
        }
    }

    // =========================================================================
    // delete
    // =========================================================================

    /// `delete ref`: only dynamically added properties can be deleted.
    pub fn check_delete_expr(&mut self, node: NodeIndex, binding: &Binding) {
        let ctx = self.ctx;
        let name = binding.base_name().unwrap_or_default();
        let site = Self::reference_site(binding, node);

        if binding.definition.is_some() {
            if !ctx.has_dynamic_base(binding.node) && !ctx.is_in_with(binding.node) {
                self.error_at_node_msg(
                    site,
                    diagnostic_codes::ATTEMPT_TO_DELETE_FIXED_PROPERTY,
                    &[name],
                );
            }
        } else if ctx.has_base_node(binding.node) && !ctx.has_dynamic_base(binding.node) {
            let base_type = ctx.type_of_base(binding.node);
            self.error_at_node_msg(site, diagnostic_codes::ACCESS_UNDEFINED_MEMBER, &[name, &base_type]);
        } else {
            self.check_lvalue(node, binding);
        }
    }

    // =========================================================================
    // ++ and --
    // =========================================================================

    /// The operand of `++`/`--` converts to `Number` and must be writable.
    pub fn check_inc_dec(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let Some(inc_dec) = ctx.arena.get_inc_dec(node) else {
            return;
        };
        let number = Some(ctx.builtin(BuiltinType::Number));
        self.check_implicit_conversion(inc_dec.operand, number);

        let def = ctx.resolve_reference(inc_dec.operand);
        let invalid = if ctx.is_read_only_definition(def) {
            true
        } else if let Some(id) = def {
            let definition = ctx.def(id);
            if definition.is_accessor() {
                false
            } else {
                definition.is_function() || definition.is_class() || definition.is_constant()
            }
        } else {
            false
        };
        if invalid {
            let code = if inc_dec.increment {
                diagnostic_codes::INVALID_INCREMENT_OPERAND
            } else {
                diagnostic_codes::INVALID_DECREMENT_OPERAND
            };
            self.error_at_node_msg(node, code, &[]);
        }
    }

    /// `++`/`--` on a bound reference. An operand with no name is not a
    /// reference at all.
    pub fn check_inc_dec_reference(&mut self, node: NodeIndex, binding: &Binding) {
        let ctx = self.ctx;
        self.check_inc_dec(node);
        if binding.name.is_some() {
            self.check_get_property(binding);
            return;
        }
        let increment = ctx.arena.get_inc_dec(node).is_none_or(|d| d.increment);
        let code = if increment {
            diagnostic_codes::INCREMENT_MUST_BE_REFERENCE
        } else {
            diagnostic_codes::DECREMENT_MUST_BE_REFERENCE
        };
        self.error_at_node_msg(node, code, &[]);
    }
}
