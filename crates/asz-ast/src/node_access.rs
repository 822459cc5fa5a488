//! Read-only access to nodes: typed payload getters, positional children and
//! ancestor walks.

use crate::base::NodeIndex;
use crate::node::*;
use crate::node_arena::children_of;
use asz_common::Span;
use smallvec::SmallVec;

impl NodeArena {
    #[inline]
    #[must_use]
    pub fn get(&self, node: NodeIndex) -> Option<&Node> {
        if node.is_none() {
            return None;
        }
        self.nodes.get(node.0 as usize)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self, node: NodeIndex) -> Option<NodeKind> {
        self.get(node).map(|n| n.kind)
    }

    #[inline]
    #[must_use]
    pub fn is_kind(&self, node: NodeIndex, kind: NodeKind) -> bool {
        self.kind(node) == Some(kind)
    }

    #[inline]
    #[must_use]
    pub fn parent(&self, node: NodeIndex) -> NodeIndex {
        self.get(node).map_or(NodeIndex::NONE, |n| n.parent)
    }

    #[must_use]
    pub fn span(&self, node: NodeIndex) -> Span {
        self.get(node).map_or(Span::SYNTHETIC, |n| n.span)
    }

    /// Positional children, skipping absent slots.
    #[must_use]
    pub fn children(&self, node: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        match self.get(node) {
            Some(n) => children_of(n.kind, &n.data).into_iter().collect(),
            None => SmallVec::new(),
        }
    }

    #[must_use]
    pub fn child(&self, node: NodeIndex, position: usize) -> NodeIndex {
        self.children(node)
            .get(position)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    /// Position of `child` among its parent's children.
    #[must_use]
    pub fn child_position(&self, child: NodeIndex) -> Option<usize> {
        let parent = self.parent(child);
        self.children(parent).iter().position(|&c| c == child)
    }

    /// Strict ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut current = self.parent(node);
        std::iter::from_fn(move || {
            if current.is_none() {
                return None;
            }
            let result = current;
            current = self.parent(current);
            Some(result)
        })
    }

    /// Nearest strict ancestor of the given kind.
    #[must_use]
    pub fn ancestor_of_kind(&self, node: NodeIndex, kind: NodeKind) -> NodeIndex {
        self.ancestors(node)
            .find(|&a| self.is_kind(a, kind))
            .unwrap_or(NodeIndex::NONE)
    }

    // =========================================================================
    // Typed payloads
    // =========================================================================

    #[must_use]
    pub fn get_class(&self, node: NodeIndex) -> Option<&ClassData> {
        match &self.get(node)?.data {
            NodeData::Class(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_function(&self, node: NodeIndex) -> Option<&FunctionData> {
        match &self.get(node)?.data {
            NodeData::Function(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_parameter(&self, node: NodeIndex) -> Option<&ParameterData> {
        match &self.get(node)?.data {
            NodeData::Parameter(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_variable(&self, node: NodeIndex) -> Option<&VariableData> {
        match &self.get(node)?.data {
            NodeData::Variable(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_namespace_decl(&self, node: NodeIndex) -> Option<&NamespaceDeclData> {
        match &self.get(node)?.data {
            NodeData::NamespaceDecl(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_import(&self, node: NodeIndex) -> Option<&ImportData> {
        match &self.get(node)?.data {
            NodeData::Import(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_modifier(&self, node: NodeIndex) -> Option<ModifierKeyword> {
        match &self.get(node)?.data {
            NodeData::Modifier(keyword) => Some(*keyword),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_pair(&self, node: NodeIndex) -> Option<&PairData> {
        match &self.get(node)?.data {
            NodeData::Pair(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_call(&self, node: NodeIndex) -> Option<&CallData> {
        match &self.get(node)?.data {
            NodeData::Call(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_binary(&self, node: NodeIndex) -> Option<&BinaryData> {
        match &self.get(node)?.data {
            NodeData::Binary(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_assignment(&self, node: NodeIndex) -> Option<&AssignmentData> {
        match &self.get(node)?.data {
            NodeData::Assignment(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_unary(&self, node: NodeIndex) -> Option<&UnaryData> {
        match &self.get(node)?.data {
            NodeData::Unary(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_inc_dec(&self, node: NodeIndex) -> Option<&IncDecData> {
        match &self.get(node)?.data {
            NodeData::IncDec(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_ternary(&self, node: NodeIndex) -> Option<&TernaryData> {
        match &self.get(node)?.data {
            NodeData::Ternary(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_vector_literal(&self, node: NodeIndex) -> Option<&VectorLiteralData> {
        match &self.get(node)?.data {
            NodeData::VectorLiteral(data) => Some(data),
            _ => None,
        }
    }

    /// The single child of `return`, `throw`, `delete`, `!`, `finally`,
    /// function objects and `use namespace`.
    #[must_use]
    pub fn get_single(&self, node: NodeIndex) -> NodeIndex {
        match self.get(node).map(|n| &n.data) {
            Some(NodeData::Single(child)) => *child,
            _ => NodeIndex::NONE,
        }
    }

    #[must_use]
    pub fn get_list(&self, node: NodeIndex) -> &[NodeIndex] {
        match self.get(node).map(|n| &n.data) {
            Some(NodeData::List(items)) => items,
            _ => &[],
        }
    }

    #[must_use]
    pub fn package_name(&self, node: NodeIndex) -> Option<&str> {
        match &self.get(node)?.data {
            NodeData::Package { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    #[must_use]
    pub fn identifier_text(&self, node: NodeIndex) -> Option<&str> {
        match &self.get(node)?.data {
            NodeData::Identifier(text) => Some(text.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn number_value(&self, node: NodeIndex) -> Option<f64> {
        match self.get(node)?.data {
            NodeData::Number(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn string_value(&self, node: NodeIndex) -> Option<&str> {
        match &self.get(node)?.data {
            NodeData::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn boolean_value(&self, node: NodeIndex) -> Option<bool> {
        match self.get(node)?.data {
            NodeData::Boolean(value) => Some(value),
            _ => None,
        }
    }

    /// Name text of a declaration node (class, function, variable, parameter
    /// or namespace).
    #[must_use]
    pub fn declaration_name(&self, node: NodeIndex) -> Option<&str> {
        let name = match &self.get(node)?.data {
            NodeData::Class(c) => c.name,
            NodeData::Function(f) => f.name,
            NodeData::Variable(v) => v.name,
            NodeData::Parameter(p) => p.name,
            NodeData::NamespaceDecl(n) => n.name,
            _ => return None,
        };
        self.identifier_text(name)
    }

    /// Modifier nodes of a definition node.
    #[must_use]
    pub fn modifier_nodes(&self, node: NodeIndex) -> &[NodeIndex] {
        match self.get(node).map(|n| &n.data) {
            Some(NodeData::Class(c)) => &c.modifiers,
            Some(NodeData::Function(f)) => &f.modifiers,
            Some(NodeData::Variable(v)) => &v.modifiers,
            Some(NodeData::NamespaceDecl(n)) => &n.modifiers,
            _ => &[],
        }
    }

    /// Namespace decoration node of a definition (`public`, `mx_internal`, ...).
    #[must_use]
    pub fn namespace_node(&self, node: NodeIndex) -> NodeIndex {
        match self.get(node).map(|n| &n.data) {
            Some(NodeData::Class(c)) => c.namespace,
            Some(NodeData::Function(f)) => f.namespace,
            Some(NodeData::Variable(v)) => v.namespace,
            Some(NodeData::NamespaceDecl(n)) => n.namespace,
            _ => NodeIndex::NONE,
        }
    }
}
