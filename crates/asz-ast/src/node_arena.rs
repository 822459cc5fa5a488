//! NodeArena creation methods (add_* methods).
//!
//! Nodes are created bottom-up: children first, then the parent, which
//! takes ownership of the children by setting their parent link. Leaf nodes
//! get a fresh source position; composite nodes span their children.

use crate::base::NodeIndex;
use crate::node::*;
use asz_common::Span;

impl NodeArena {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> NodeArena {
        NodeArena {
            nodes: Vec::new(),
            file_name: file_name.into(),
            next_pos: 0,
        }
    }

    /// Source path of the compilation unit this arena belongs to.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node with an explicit span and adopt its children.
    pub fn add_node(&mut self, kind: NodeKind, span: Span, data: NodeData) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let children = children_of(kind, &data);
        self.nodes.push(Node {
            kind,
            span,
            parent: NodeIndex::NONE,
            data,
        });
        for child in children {
            if let Some(node) = self.nodes.get_mut(child.0 as usize) {
                node.parent = index;
            }
        }
        index
    }

    /// Add a node whose span is derived from its children, or a fresh
    /// one-character position when it has none.
    pub fn add(&mut self, kind: NodeKind, data: NodeData) -> NodeIndex {
        let children = children_of(kind, &data);
        let mut start = u32::MAX;
        let mut end = 0;
        for child in &children {
            if let Some(node) = self.nodes.get(child.0 as usize)
                && !node.span.is_synthetic()
            {
                start = start.min(node.span.start);
                end = end.max(node.span.end);
            }
        }
        let span = if start == u32::MAX {
            self.fresh_span(1)
        } else {
            Span::new(start, end)
        };
        self.add_node(kind, span, data)
    }

    fn fresh_span(&mut self, width: u32) -> Span {
        let start = self.next_pos;
        self.next_pos += width.max(1) + 1;
        Span::new(start, start + width.max(1))
    }

    /// Mark a node as compiler-synthesized (no source position).
    pub fn mark_synthetic(&mut self, node: NodeIndex) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.span = Span::SYNTHETIC;
        }
    }

    /// Replace the span of a node.
    pub fn set_span(&mut self, node: NodeIndex, span: Span) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.span = span;
        }
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    pub fn add_identifier(&mut self, text: impl Into<String>) -> NodeIndex {
        let text = text.into();
        let span = self.fresh_span(text.len() as u32);
        self.add_node(NodeKind::Identifier, span, NodeData::Identifier(text))
    }

    pub fn add_this(&mut self) -> NodeIndex {
        let span = self.fresh_span(4);
        self.add_node(NodeKind::This, span, NodeData::None)
    }

    pub fn add_super(&mut self) -> NodeIndex {
        let span = self.fresh_span(5);
        self.add_node(NodeKind::Super, span, NodeData::None)
    }

    pub fn add_number(&mut self, value: f64) -> NodeIndex {
        let span = self.fresh_span(1);
        self.add_node(NodeKind::NumericLiteral, span, NodeData::Number(value))
    }

    pub fn add_string(&mut self, value: impl Into<String>) -> NodeIndex {
        let value = value.into();
        let span = self.fresh_span(value.len() as u32 + 2);
        self.add_node(NodeKind::StringLiteral, span, NodeData::String(value))
    }

    pub fn add_boolean(&mut self, value: bool) -> NodeIndex {
        let span = self.fresh_span(if value { 4 } else { 5 });
        self.add_node(NodeKind::BooleanLiteral, span, NodeData::Boolean(value))
    }

    pub fn add_null(&mut self) -> NodeIndex {
        let span = self.fresh_span(4);
        self.add_node(NodeKind::NullLiteral, span, NodeData::None)
    }

    pub fn add_modifier(&mut self, keyword: ModifierKeyword) -> NodeIndex {
        let span = self.fresh_span(keyword.as_str().len() as u32);
        self.add_node(NodeKind::Modifier, span, NodeData::Modifier(keyword))
    }

    pub fn add_import(&mut self, target: impl Into<String>, alias: Option<String>) -> NodeIndex {
        let target = target.into();
        let span = self.fresh_span(target.len() as u32 + 7);
        self.add_node(
            NodeKind::Import,
            span,
            NodeData::Import(ImportData { target, alias }),
        )
    }

    // =========================================================================
    // Structure
    // =========================================================================

    pub fn add_source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::SourceFile, NodeData::List(statements))
    }

    pub fn add_package(&mut self, name: impl Into<String>, body: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::Package,
            NodeData::Package {
                name: name.into(),
                body,
            },
        )
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::Block, NodeData::List(statements))
    }

    pub fn add_container(&mut self, expressions: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::Container, NodeData::List(expressions))
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub fn add_class(&mut self, data: ClassData) -> NodeIndex {
        self.add(NodeKind::Class, NodeData::Class(data))
    }

    pub fn add_interface(&mut self, data: ClassData) -> NodeIndex {
        self.add(NodeKind::Interface, NodeData::Class(data))
    }

    pub fn add_function(&mut self, data: FunctionData) -> NodeIndex {
        self.add(NodeKind::Function, NodeData::Function(data))
    }

    pub fn add_function_object(&mut self, function: NodeIndex) -> NodeIndex {
        self.add(NodeKind::FunctionObject, NodeData::Single(function))
    }

    pub fn add_parameter(&mut self, data: ParameterData) -> NodeIndex {
        self.add(NodeKind::Parameter, NodeData::Parameter(data))
    }

    pub fn add_variable(&mut self, data: VariableData) -> NodeIndex {
        self.add(NodeKind::Variable, NodeData::Variable(data))
    }

    pub fn add_namespace_decl(&mut self, data: NamespaceDeclData) -> NodeIndex {
        self.add(NodeKind::NamespaceDecl, NodeData::NamespaceDecl(data))
    }

    pub fn add_use_namespace(&mut self, target: NodeIndex) -> NodeIndex {
        self.add(NodeKind::UseNamespace, NodeData::Single(target))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn add_if(&mut self, branches: Vec<NodeIndex>, else_branch: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::If,
            NodeData::If(IfData {
                branches,
                else_branch,
            }),
        )
    }

    pub fn add_conditional(&mut self, condition: NodeIndex, body: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::Conditional,
            NodeData::Loop(LoopData { condition, body }),
        )
    }

    pub fn add_while(&mut self, condition: NodeIndex, body: NodeIndex) -> NodeIndex {
        self.add(NodeKind::While, NodeData::Loop(LoopData { condition, body }))
    }

    pub fn add_do_while(&mut self, body: NodeIndex, condition: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::DoWhile,
            NodeData::Loop(LoopData { condition, body }),
        )
    }

    pub fn add_for(&mut self, data: ForData) -> NodeIndex {
        self.add(NodeKind::For, NodeData::For(data))
    }

    pub fn add_return(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(NodeKind::Return, NodeData::Single(expression))
    }

    pub fn add_throw(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(NodeKind::Throw, NodeData::Single(expression))
    }

    pub fn add_try(&mut self, data: TryData) -> NodeIndex {
        self.add(NodeKind::Try, NodeData::Try(data))
    }

    pub fn add_catch(&mut self, parameter: NodeIndex, block: NodeIndex) -> NodeIndex {
        self.add(NodeKind::Catch, NodeData::Catch { parameter, block })
    }

    pub fn add_finally(&mut self, block: NodeIndex) -> NodeIndex {
        self.add(NodeKind::Finally, NodeData::Single(block))
    }

    pub fn add_with(&mut self, object: NodeIndex, body: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::With,
            NodeData::Pair(PairData {
                left: object,
                right: body,
            }),
        )
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn add_member_access(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.add(NodeKind::MemberAccess, NodeData::Pair(PairData { left, right }))
    }

    pub fn add_namespace_access(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::NamespaceAccess,
            NodeData::Pair(PairData { left, right }),
        )
    }

    pub fn add_e4x_filter(&mut self, left: NodeIndex, predicate: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::E4XFilter,
            NodeData::Pair(PairData {
                left,
                right: predicate,
            }),
        )
    }

    pub fn add_call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::Call, NodeData::Call(CallData { callee, arguments }))
    }

    pub fn add_new(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::New, NodeData::Call(CallData { callee, arguments }))
    }

    pub fn add_binary(&mut self, op: BinaryOperator, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::Binary,
            NodeData::Binary(BinaryData { op, left, right }),
        )
    }

    pub fn add_logical_and(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.add(NodeKind::LogicalAnd, NodeData::Pair(PairData { left, right }))
    }

    pub fn add_logical_or(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.add(NodeKind::LogicalOr, NodeData::Pair(PairData { left, right }))
    }

    pub fn add_logical_not(&mut self, operand: NodeIndex) -> NodeIndex {
        self.add(NodeKind::LogicalNot, NodeData::Single(operand))
    }

    pub fn add_assignment(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::Assignment,
            NodeData::Assignment(AssignmentData {
                op: None,
                left,
                right,
            }),
        )
    }

    pub fn add_compound_assignment(
        &mut self,
        op: BinaryOperator,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add(
            NodeKind::Assignment,
            NodeData::Assignment(AssignmentData {
                op: Some(op),
                left,
                right,
            }),
        )
    }

    pub fn add_unary(&mut self, op: UnaryOperator, operand: NodeIndex) -> NodeIndex {
        self.add(NodeKind::Unary, NodeData::Unary(UnaryData { op, operand }))
    }

    pub fn add_inc_dec(&mut self, increment: bool, prefix: bool, operand: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::IncDec,
            NodeData::IncDec(IncDecData {
                increment,
                prefix,
                operand,
            }),
        )
    }

    pub fn add_delete(&mut self, operand: NodeIndex) -> NodeIndex {
        self.add(NodeKind::Delete, NodeData::Single(operand))
    }

    pub fn add_ternary(
        &mut self,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        self.add(
            NodeKind::Ternary,
            NodeData::Ternary(TernaryData {
                condition,
                when_true,
                when_false,
            }),
        )
    }

    pub fn add_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeKind::ArrayLiteral, NodeData::List(elements))
    }

    pub fn add_vector_literal(&mut self, element_type: NodeIndex, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add(
            NodeKind::VectorLiteral,
            NodeData::VectorLiteral(VectorLiteralData {
                element_type,
                elements,
            }),
        )
    }

    pub fn add_typed_expression(&mut self, collection: NodeIndex, type_arg: NodeIndex) -> NodeIndex {
        self.add(
            NodeKind::TypedExpression,
            NodeData::Pair(PairData {
                left: collection,
                right: type_arg,
            }),
        )
    }
}

/// Positional children of a node, skipping absent slots.
pub(crate) fn children_of(kind: NodeKind, data: &NodeData) -> Vec<NodeIndex> {
    let mut out = Vec::new();
    let mut push = |idx: NodeIndex| {
        if idx.is_some() {
            out.push(idx);
        }
    };
    match data {
        NodeData::None
        | NodeData::Identifier(_)
        | NodeData::Number(_)
        | NodeData::String(_)
        | NodeData::Boolean(_)
        | NodeData::Import(_)
        | NodeData::Modifier(_) => {}
        NodeData::List(items) => items.iter().copied().for_each(&mut push),
        NodeData::Single(child) => push(*child),
        NodeData::Package { body, .. } => push(*body),
        NodeData::Class(c) => {
            push(c.name);
            c.modifiers.iter().copied().for_each(&mut push);
            push(c.namespace);
            push(c.base);
            c.interfaces.iter().copied().for_each(&mut push);
            push(c.body);
        }
        NodeData::Function(f) => {
            push(f.name);
            f.modifiers.iter().copied().for_each(&mut push);
            push(f.namespace);
            f.parameters.iter().copied().for_each(&mut push);
            push(f.return_type);
            push(f.body);
        }
        NodeData::Parameter(p) => {
            push(p.name);
            push(p.type_annotation);
            push(p.default_value);
        }
        NodeData::Variable(v) => {
            push(v.name);
            v.modifiers.iter().copied().for_each(&mut push);
            push(v.namespace);
            push(v.type_annotation);
            push(v.initializer);
        }
        NodeData::NamespaceDecl(n) => {
            push(n.name);
            n.modifiers.iter().copied().for_each(&mut push);
            push(n.namespace);
            push(n.uri);
        }
        NodeData::If(i) => {
            i.branches.iter().copied().for_each(&mut push);
            push(i.else_branch);
        }
        NodeData::Loop(l) => {
            if kind == NodeKind::DoWhile {
                push(l.body);
                push(l.condition);
            } else {
                push(l.condition);
                push(l.body);
            }
        }
        NodeData::For(f) => {
            push(f.initializer);
            push(f.condition);
            push(f.update);
            push(f.body);
        }
        NodeData::Try(t) => {
            push(t.block);
            t.catches.iter().copied().for_each(&mut push);
            push(t.finally_block);
        }
        NodeData::Catch { parameter, block } => {
            push(*parameter);
            push(*block);
        }
        NodeData::Pair(p) => {
            push(p.left);
            push(p.right);
        }
        NodeData::Call(c) => {
            push(c.callee);
            c.arguments.iter().copied().for_each(&mut push);
        }
        NodeData::Binary(b) => {
            push(b.left);
            push(b.right);
        }
        NodeData::Assignment(a) => {
            push(a.left);
            push(a.right);
        }
        NodeData::Unary(u) => push(u.operand),
        NodeData::IncDec(i) => push(i.operand),
        NodeData::Ternary(t) => {
            push(t.condition);
            push(t.when_true);
            push(t.when_false);
        }
        NodeData::VectorLiteral(v) => {
            push(v.element_type);
            v.elements.iter().copied().for_each(&mut push);
        }
    }
    out
}
