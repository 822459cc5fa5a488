//! Static types of expressions and of the definitions they reference.

use super::SemanticQueries;
use asz_ast::{BinaryOperator, NodeIndex, NodeKind, UnaryOperator};
use asz_binder::{BuiltinType, DefId, DefinitionKind, TypeAnnotation};
use asz_common::limits::{INT_MAX, INT_MIN, UINT_MAX};
use asz_common::{PooledValue, ValueKind};

/// Constants a comparison treats specially.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialValue {
    None,
    NaN,
    Undefined,
}

impl<'a> SemanticQueries<'a> {
    // =========================================================================
    // Definition types
    // =========================================================================

    /// Type a declared annotation stands for. No annotation and `*` are the
    /// any type; an annotation the binder could not resolve is unknown.
    #[must_use]
    pub fn annotation_type(&self, annotation: Option<&TypeAnnotation>) -> Option<DefId> {
        match annotation {
            None => Some(self.builtin(BuiltinType::AnyType)),
            Some(t) => t
                .resolved
                .or_else(|| (t.name == "*").then(|| self.builtin(BuiltinType::AnyType))),
        }
    }

    /// Static type of a reference to `def`.
    #[must_use]
    pub fn type_of_definition(&self, def: DefId) -> Option<DefId> {
        let definition = self.def(def);
        match &definition.kind {
            DefinitionKind::Variable | DefinitionKind::Constant { .. } => {
                self.annotation_type(definition.declared_type.as_ref())
            }
            DefinitionKind::Parameter(info) => {
                if info.is_rest && definition.declared_type.is_none() {
                    Some(self.builtin(BuiltinType::Array))
                } else {
                    self.annotation_type(definition.declared_type.as_ref())
                }
            }
            DefinitionKind::Function(_) => {
                if definition.is_getter() {
                    self.return_type_of(def)
                } else if definition.is_setter() {
                    self.setter_value_type(def)
                } else {
                    Some(self.builtin(BuiltinType::Function))
                }
            }
            DefinitionKind::Class(_) | DefinitionKind::Interface(_) => {
                Some(self.builtin(BuiltinType::Class))
            }
            DefinitionKind::Namespace { .. } => Some(self.builtin(BuiltinType::Namespace)),
            DefinitionKind::Package | DefinitionKind::Ambiguous => None,
        }
    }

    /// Declared return type of a function.
    #[must_use]
    pub fn return_type_of(&self, function: DefId) -> Option<DefId> {
        self.annotation_type(self.def(function).declared_type.as_ref())
    }

    /// Type of a setter's value parameter.
    #[must_use]
    pub fn setter_value_type(&self, setter: DefId) -> Option<DefId> {
        let param = self
            .def(setter)
            .function_info()
            .and_then(|f| f.parameters.first().copied())?;
        self.type_of_definition(param)
    }

    /// Type of the value a pooled constant holds.
    #[must_use]
    pub fn type_of_pooled_value(&self, value: &PooledValue) -> DefId {
        self.builtin(match value.kind() {
            ValueKind::Int => BuiltinType::Int,
            ValueKind::UInt => BuiltinType::UInt,
            ValueKind::Double => BuiltinType::Number,
            ValueKind::Utf8 => BuiltinType::String,
            ValueKind::True | ValueKind::False => BuiltinType::Boolean,
            ValueKind::Undefined => BuiltinType::Void,
            ValueKind::Null => BuiltinType::Null,
            ValueKind::Namespace => BuiltinType::Namespace,
        })
    }

    // =========================================================================
    // Expression types
    // =========================================================================

    /// Static type of an expression: the binder's recorded type when there is
    /// one, otherwise what the expression's shape implies.
    #[must_use]
    pub fn resolve_type(&self, node: NodeIndex) -> Option<DefId> {
        if let Some(ty) = self.unit.recorded_type(node) {
            return Some(ty);
        }
        let arena = self.arena;
        match arena.kind(node)? {
            NodeKind::NumericLiteral => {
                let value = arena.number_value(node)?;
                Some(self.builtin(numeric_literal_type(value)))
            }
            NodeKind::StringLiteral => Some(self.builtin(BuiltinType::String)),
            NodeKind::BooleanLiteral | NodeKind::LogicalNot | NodeKind::Delete => {
                Some(self.builtin(BuiltinType::Boolean))
            }
            NodeKind::NullLiteral => Some(self.builtin(BuiltinType::Null)),
            NodeKind::ArrayLiteral => Some(self.builtin(BuiltinType::Array)),
            NodeKind::FunctionObject => Some(self.builtin(BuiltinType::Function)),
            NodeKind::IncDec => Some(self.builtin(BuiltinType::Number)),
            NodeKind::Unary => {
                let unary = arena.get_unary(node)?;
                Some(self.builtin(match unary.op {
                    UnaryOperator::TypeOf => BuiltinType::String,
                    UnaryOperator::Void => BuiltinType::Void,
                    UnaryOperator::BitwiseNot => BuiltinType::Int,
                    UnaryOperator::Negate | UnaryOperator::Plus => BuiltinType::Number,
                }))
            }
            NodeKind::Binary => self.binary_result_type(node),
            NodeKind::Assignment => {
                let assignment = arena.get_assignment(node)?;
                self.resolve_type(assignment.right)
            }
            NodeKind::Container => arena
                .get_list(node)
                .last()
                .and_then(|&last| self.resolve_type(last)),
            NodeKind::Ternary => {
                let ternary = arena.get_ternary(node)?;
                let when_true = self.resolve_type(ternary.when_true);
                (when_true == self.resolve_type(ternary.when_false))
                    .then_some(when_true)
                    .flatten()
            }
            NodeKind::This => self.enclosing_class_definition(node),
            NodeKind::Call => {
                let call = arena.get_call(node)?;
                let callee = self.resolve_reference(call.callee)?;
                let definition = self.def(callee);
                if definition.is_type() {
                    Some(callee)
                } else if definition.is_function() && !definition.is_accessor() {
                    self.return_type_of(callee)
                } else {
                    None
                }
            }
            NodeKind::New => {
                let call = arena.get_call(node)?;
                let callee = self.resolve_reference(call.callee)?;
                self.def(callee).is_class().then_some(callee)
            }
            NodeKind::Identifier | NodeKind::MemberAccess | NodeKind::NamespaceAccess => {
                let def = self.resolve_reference(node)?;
                self.type_of_definition(def)
            }
            _ => None,
        }
    }

    fn binary_result_type(&self, node: NodeIndex) -> Option<DefId> {
        let binary = self.arena.get_binary(node)?;
        self.operator_result_type(binary.op, binary.left, binary.right)
    }

    /// Static type of `left op right`, also the value a compound assignment
    /// `left op= right` stores.
    #[must_use]
    pub fn operator_result_type(&self, op: BinaryOperator, left: NodeIndex, right: NodeIndex) -> Option<DefId> {
        let ty = match op {
            BinaryOperator::Equal
            | BinaryOperator::NotEqual
            | BinaryOperator::StrictEqual
            | BinaryOperator::StrictNotEqual
            | BinaryOperator::LessThan
            | BinaryOperator::LessOrEqual
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterOrEqual
            | BinaryOperator::Is
            | BinaryOperator::InstanceOf
            | BinaryOperator::In => BuiltinType::Boolean,
            BinaryOperator::As => {
                let target = self.resolve_reference(right)?;
                return self.def(target).is_type().then_some(target);
            }
            BinaryOperator::LeftShift
            | BinaryOperator::RightShift
            | BinaryOperator::BitwiseAnd
            | BinaryOperator::BitwiseOr
            | BinaryOperator::BitwiseXor => BuiltinType::Int,
            BinaryOperator::UnsignedRightShift => BuiltinType::UInt,
            BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo => BuiltinType::Number,
            BinaryOperator::Add => {
                let left = self.resolve_type(left);
                let right = self.resolve_type(right);
                if self.is_builtin(left, BuiltinType::String) || self.is_builtin(right, BuiltinType::String) {
                    BuiltinType::String
                } else if self.is_numeric_type(left) && self.is_numeric_type(right) {
                    BuiltinType::Number
                } else {
                    return None;
                }
            }
            BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => return None,
        };
        Some(self.builtin(ty))
    }

    // =========================================================================
    // Bases and stems
    // =========================================================================

    /// The object expression a reference is made through: the left side of
    /// `a.b`, for both the access and its member name, and for calls through
    /// an access.
    #[must_use]
    pub fn base_node(&self, node: NodeIndex) -> NodeIndex {
        let arena = self.arena;
        match arena.kind(node) {
            Some(NodeKind::MemberAccess) => arena.get_pair(node).map_or(NodeIndex::NONE, |p| p.left),
            Some(NodeKind::Call | NodeKind::New) => arena
                .get_call(node)
                .map_or(NodeIndex::NONE, |c| self.base_node(c.callee)),
            _ => {
                let parent = arena.parent(node);
                match arena.get_pair(parent) {
                    Some(pair) if arena.is_kind(parent, NodeKind::MemberAccess) && pair.right == node => {
                        pair.left
                    }
                    _ => NodeIndex::NONE,
                }
            }
        }
    }

    #[must_use]
    pub fn has_base_node(&self, node: NodeIndex) -> bool {
        self.base_node(node).is_some()
    }

    /// Display type of the base of a reference, `*` when unknown.
    #[must_use]
    pub fn type_of_base(&self, node: NodeIndex) -> String {
        let base = self.base_node(node);
        self.type_display_name(self.resolve_type(base))
    }

    /// The type whose members a reference is looked up in: the type of its
    /// explicit base, or the enclosing class inside a class method.
    #[must_use]
    pub fn definition_of_underlying_type(&self, node: NodeIndex) -> Option<DefId> {
        let base = self.base_node(node);
        if base.is_some() {
            if let Some(def) = self.resolve_reference(base)
                && self.def(def).is_type()
            {
                return Some(def);
            }
            return self.resolve_type(base);
        }
        if self.is_in_instance_function(node) || self.is_in_static_class_function(node) {
            return self.enclosing_class_definition(node);
        }
        None
    }

    #[must_use]
    pub fn has_underlying_type(&self, node: NodeIndex) -> bool {
        self.definition_of_underlying_type(node).is_some()
    }

    /// Base name of the underlying type, `?` when there is none.
    #[must_use]
    pub fn type_of_stem(&self, node: NodeIndex) -> String {
        self.definition_of_underlying_type(node)
            .map_or_else(|| "?".to_string(), |d| self.def(d).name.clone())
    }

    /// The reference is written with an explicit `base.` prefix.
    #[must_use]
    pub fn has_explicit_stem(&self, node: NodeIndex) -> bool {
        self.has_base_node(node)
    }

    /// `NaN` or `undefined` when the expression names one of those global
    /// constants.
    #[must_use]
    pub fn special_value(&self, node: NodeIndex) -> SpecialValue {
        let Some(def) = self.resolve_reference(node) else {
            return SpecialValue::None;
        };
        if def == self.project.undefined_value() {
            return SpecialValue::Undefined;
        }
        match &self.def(def).kind {
            DefinitionKind::Constant {
                value: Some(value @ PooledValue::Double(_)),
            } if value.is_nan() => SpecialValue::NaN,
            _ => SpecialValue::None,
        }
    }
}

/// `int` for integral literals in the signed range, then `uint`, else
/// `Number`.
fn numeric_literal_type(value: f64) -> BuiltinType {
    if value.fract() != 0.0 || !value.is_finite() {
        return BuiltinType::Number;
    }
    if value >= INT_MIN as f64 && value <= INT_MAX as f64 {
        BuiltinType::Int
    } else if value >= 0.0 && value <= UINT_MAX as f64 {
        BuiltinType::UInt
    } else {
        BuiltinType::Number
    }
}
