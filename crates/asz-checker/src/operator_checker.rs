//! Operator Checking Module
//!
//! Implicit conversions of operands and values, comparison sanity checks and
//! the `is`/`as`/`instanceof` type tests.

use crate::query::SpecialValue;
use crate::state::CheckerState;
use asz_ast::{BinaryOperator, NodeIndex, NodeKind, UnaryOperator};
use asz_binder::{BuiltinType, DefId};
use asz_common::diagnostics::diagnostic_codes;
use tracing::trace;

impl<'a> CheckerState<'a> {
    // =========================================================================
    // Implicit conversions
    // =========================================================================

    /// Report when the value of `node` does not implicitly convert to
    /// `expected`. The operands of `&&` and `||` and the branches of `?:` are
    /// checked one by one.
    pub fn check_implicit_conversion(&mut self, node: NodeIndex, expected: Option<DefId>) {
        let ctx = self.ctx;
        match ctx.arena.kind(node) {
            Some(NodeKind::LogicalAnd | NodeKind::LogicalOr) => {
                if let Some(pair) = ctx.arena.get_pair(node) {
                    self.check_implicit_conversion(pair.left, expected);
                    self.check_implicit_conversion(pair.right, expected);
                }
                return;
            }
            Some(NodeKind::Ternary) => {
                if let Some(ternary) = ctx.arena.get_ternary(node) {
                    self.check_implicit_conversion(ternary.when_true, expected);
                    self.check_implicit_conversion(ternary.when_false, expected);
                }
                return;
            }
            _ => {}
        }

        let actual = ctx.resolve_type(node);
        if ctx.is_valid_type_conversion_in_unit(expected, actual) {
            return;
        }
        let (Some(expected), Some(actual)) = (expected, actual) else {
            return;
        };
        let code = if ctx.is_instance_of(expected, actual) {
            diagnostic_codes::IMPLICIT_COERCION_TO_SUBTYPE
        } else {
            diagnostic_codes::IMPLICIT_COERCION_TO_UNRELATED_TYPE
        };
        let actual_name = ctx.def(actual).qualified_name();
        let expected_name = ctx.def(expected).qualified_name();
        self.error_at_node_msg(node, code, &[&actual_name, &expected_name]);
    }

    /// The right operand of `is` and `as` must be a class. Literal `null`
    /// and `undefined` convert to `Class` but are never meaningful there.
    pub fn check_type_check_implicit_conversion(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let expected = Some(ctx.builtin(BuiltinType::Class));
        let expected_name = ctx.type_display_name(expected);
        let actual = ctx.resolve_type(node);

        let actual_name = if !ctx.is_valid_type_conversion_in_unit(expected, actual) {
            ctx.type_display_name(actual)
        } else if ctx.special_value(node) == SpecialValue::Undefined {
            "undefined".to_string()
        } else if ctx.arena.is_kind(node, NodeKind::NullLiteral) {
            "null".to_string()
        } else {
            return;
        };
        self.error_at_node_msg(
            node,
            diagnostic_codes::IMPLICIT_TYPE_CHECK_COERCION_TO_UNRELATED_TYPE,
            &[&actual_name, &expected_name],
        );
    }

    fn check_number_operand(&mut self, operand: NodeIndex) {
        let number = Some(self.ctx.builtin(BuiltinType::Number));
        self.check_implicit_conversion(operand, number);
    }

    // =========================================================================
    // Binary and unary operators
    // =========================================================================

    /// Check a binary operator expression.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn check_binary_operator(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let Some(binary) = ctx.arena.get_binary(node) else {
            return;
        };
        self.check_binary_operands(node, binary.left, binary.right, binary.op);
    }

    /// Operand checks shared by binary expressions and compound assignments.
    pub(crate) fn check_binary_operands(
        &mut self,
        node: NodeIndex,
        left: NodeIndex,
        right: NodeIndex,
        op: BinaryOperator,
    ) {
        match op {
            BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo
            | BinaryOperator::LeftShift
            | BinaryOperator::RightShift
            | BinaryOperator::UnsignedRightShift
            | BinaryOperator::BitwiseAnd
            | BinaryOperator::BitwiseOr
            | BinaryOperator::BitwiseXor => {
                self.check_number_operand(left);
                self.check_number_operand(right);
            }
            BinaryOperator::Is | BinaryOperator::As => {
                self.check_type_check_implicit_conversion(right);
            }
            // `!=` and `!==` are not sanity-checked.
            BinaryOperator::Equal
            | BinaryOperator::StrictEqual
            | BinaryOperator::LessThan
            | BinaryOperator::LessOrEqual
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterOrEqual => self.check_comparison(left, right),
            BinaryOperator::InstanceOf => {
                self.error_at_node_msg(node, diagnostic_codes::INSTANCE_OF, &[]);
            }
            BinaryOperator::Add
            | BinaryOperator::NotEqual
            | BinaryOperator::StrictNotEqual
            | BinaryOperator::In
            | BinaryOperator::LogicalAnd
            | BinaryOperator::LogicalOr => {}
        }
    }

    /// `-x`, `+x` and `~x` convert their operand to `Number`.
    pub fn check_unary_operator(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let Some(unary) = ctx.arena.get_unary(node) else {
            return;
        };
        match unary.op {
            UnaryOperator::Negate | UnaryOperator::Plus | UnaryOperator::BitwiseNot => {
                self.check_number_operand(unary.operand);
            }
            UnaryOperator::TypeOf | UnaryOperator::Void => {}
        }
    }

    // =========================================================================
    // Comparisons
    // =========================================================================

    /// Flag comparisons that can never be true or compare unrelated types.
    pub fn check_comparison(&mut self, left: NodeIndex, right: NodeIndex) {
        let ctx = self.ctx;
        let left_value = ctx.special_value(left);
        let right_value = ctx.special_value(right);

        if left_value == SpecialValue::NaN || right_value == SpecialValue::NaN {
            self.error_at_node_msg(left, diagnostic_codes::ILLOGICAL_COMPARISON_WITH_NAN, &[]);
        }

        let (Some(left_type), Some(right_type)) = (ctx.resolve_type(left), ctx.resolve_type(right)) else {
            return;
        };

        let any = ctx.builtin(BuiltinType::AnyType);
        if right_value == SpecialValue::Undefined && left_type != any {
            self.error_at_node_msg(left, diagnostic_codes::ILLOGICAL_COMPARISON_WITH_UNDEFINED, &[]);
        }
        if left_value == SpecialValue::Undefined && right_type != any {
            self.error_at_node_msg(right, diagnostic_codes::ILLOGICAL_COMPARISON_WITH_UNDEFINED, &[]);
        }

        // Special values are checked before this shortcut.
        if left_type == right_type {
            return;
        }

        let left_numeric = ctx.is_numeric_type(Some(left_type));
        let right_numeric = ctx.is_numeric_type(Some(right_type));

        // An interface compares against any object.
        if (ctx.def(left_type).is_interface() && !right_numeric)
            || (ctx.def(right_type).is_interface() && !left_numeric)
        {
            return;
        }

        let left_null = ctx.is_builtin(Some(left_type), BuiltinType::Null);
        let right_null = ctx.is_builtin(Some(right_type), BuiltinType::Null);
        let numeric_against_null = (left_numeric && right_null) || (right_numeric && left_null);

        if !numeric_against_null
            && (ctx.is_valid_type_conversion_in_unit(Some(left_type), Some(right_type))
                || ctx.is_valid_type_conversion_in_unit(Some(right_type), Some(left_type)))
        {
            return;
        }

        trace!(?left_type, ?right_type, "unrelated comparison");
        let left_name = ctx.def(left_type).name.clone();
        let right_name = ctx.def(right_type).name.clone();
        self.error_at_node_msg(
            left,
            diagnostic_codes::COMPARISON_BETWEEN_UNRELATED_TYPES,
            &[&left_name, &right_name],
        );
    }
}
