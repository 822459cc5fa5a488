//! Node kinds and per-kind payloads.
//!
//! Every node stores its payload inline as a `NodeData` variant. Child slots
//! that may be absent hold `NodeIndex::NONE`. The positional order reported
//! by `NodeArena::children` is fixed per kind and documented on each payload;
//! some semantic checks depend on it (for example "is this expression the
//! condition of the enclosing `while`").

use crate::base::NodeIndex;
use asz_common::Span;

/// Discriminant of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Structure
    SourceFile,
    Package,
    Block,
    /// Parenthesized or otherwise implicit grouping of expressions.
    Container,

    // Declarations
    Class,
    Interface,
    Function,
    /// A function expression; wraps a `Function` node.
    FunctionObject,
    Parameter,
    Variable,
    NamespaceDecl,
    Import,
    UseNamespace,
    Modifier,

    // Statements
    If,
    /// One `if`/`else if` arm: condition then body.
    Conditional,
    While,
    DoWhile,
    For,
    Return,
    Throw,
    Try,
    Catch,
    Finally,
    With,

    // Expressions
    Identifier,
    This,
    Super,
    MemberAccess,
    NamespaceAccess,
    Call,
    New,
    Binary,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    Assignment,
    Unary,
    IncDec,
    Delete,
    Ternary,
    E4XFilter,
    NumericLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    ArrayLiteral,
    VectorLiteral,
    /// A parameterized type reference such as `Vector.<int>`.
    TypedExpression,
}

impl NodeKind {
    /// True for nodes that produce a value.
    #[must_use]
    pub const fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Identifier
                | NodeKind::This
                | NodeKind::Super
                | NodeKind::MemberAccess
                | NodeKind::NamespaceAccess
                | NodeKind::Call
                | NodeKind::New
                | NodeKind::Binary
                | NodeKind::LogicalAnd
                | NodeKind::LogicalOr
                | NodeKind::LogicalNot
                | NodeKind::Assignment
                | NodeKind::Unary
                | NodeKind::IncDec
                | NodeKind::Delete
                | NodeKind::Ternary
                | NodeKind::E4XFilter
                | NodeKind::NumericLiteral
                | NodeKind::StringLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NullLiteral
                | NodeKind::ArrayLiteral
                | NodeKind::VectorLiteral
                | NodeKind::TypedExpression
                | NodeKind::FunctionObject
        )
    }

    /// True for literal nodes.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            NodeKind::NumericLiteral
                | NodeKind::StringLiteral
                | NodeKind::BooleanLiteral
                | NodeKind::NullLiteral
        )
    }

    /// True for definitions that carry modifiers and a namespace decoration.
    #[must_use]
    pub const fn is_definition(self) -> bool {
        matches!(
            self,
            NodeKind::Class
                | NodeKind::Interface
                | NodeKind::Function
                | NodeKind::Variable
                | NodeKind::NamespaceDecl
        )
    }
}

/// Binary operators as written in source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    Is,
    As,
    InstanceOf,
    In,
    /// Only appears as the implied operator of `&&=`.
    LogicalAnd,
    /// Only appears as the implied operator of `||=`.
    LogicalOr,
}

/// Prefix operators other than increment, decrement, `!` and `delete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Plus,
    BitwiseNot,
    TypeOf,
    Void,
}

/// Definition attribute keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKeyword {
    Static,
    Final,
    Override,
    Native,
    Dynamic,
    Abstract,
    Virtual,
}

impl ModifierKeyword {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ModifierKeyword::Static => "static",
            ModifierKeyword::Final => "final",
            ModifierKeyword::Override => "override",
            ModifierKeyword::Native => "native",
            ModifierKeyword::Dynamic => "dynamic",
            ModifierKeyword::Abstract => "abstract",
            ModifierKeyword::Virtual => "virtual",
        }
    }
}

// =============================================================================
// Payloads
// =============================================================================

/// `class` / `interface` declaration. Children: name, modifiers, namespace,
/// base, interfaces, body.
#[derive(Clone, Debug, Default)]
pub struct ClassData {
    pub name: NodeIndex,
    pub modifiers: Vec<NodeIndex>,
    pub namespace: NodeIndex,
    pub base: NodeIndex,
    pub interfaces: Vec<NodeIndex>,
    pub body: NodeIndex,
}

/// Function, method, accessor or constructor. Children: name, modifiers,
/// namespace, parameters, return type, body.
#[derive(Clone, Debug, Default)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub modifiers: Vec<NodeIndex>,
    pub namespace: NodeIndex,
    pub parameters: Vec<NodeIndex>,
    pub return_type: NodeIndex,
    pub body: NodeIndex,
}

/// Formal parameter. Children: name, type, default value.
#[derive(Clone, Debug, Default)]
pub struct ParameterData {
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub default_value: NodeIndex,
    pub is_rest: bool,
}

/// `var` / `const` declaration. Children: name, modifiers, namespace, type,
/// initializer.
#[derive(Clone, Debug, Default)]
pub struct VariableData {
    pub name: NodeIndex,
    pub modifiers: Vec<NodeIndex>,
    pub namespace: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
    pub is_const: bool,
}

/// `namespace` declaration. Children: name, modifiers, namespace, uri.
#[derive(Clone, Debug, Default)]
pub struct NamespaceDeclData {
    pub name: NodeIndex,
    pub modifiers: Vec<NodeIndex>,
    pub namespace: NodeIndex,
    pub uri: NodeIndex,
}

/// `import a.b.C;`, `import a.b.*;` or an aliased import.
#[derive(Clone, Debug, Default)]
pub struct ImportData {
    /// Dotted target, ending in `.*` for wildcard imports.
    pub target: String,
    pub alias: Option<String>,
}

impl ImportData {
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.target.ends_with(".*")
    }
}

/// `if` statement. Children: each `Conditional` arm, then the else block.
#[derive(Clone, Debug, Default)]
pub struct IfData {
    pub branches: Vec<NodeIndex>,
    pub else_branch: NodeIndex,
}

/// Condition/body pair. `Conditional` and `While` list the condition first;
/// `DoWhile` lists the body first.
#[derive(Clone, Debug, Default)]
pub struct LoopData {
    pub condition: NodeIndex,
    pub body: NodeIndex,
}

/// `for (init; condition; update) body`.
#[derive(Clone, Debug, Default)]
pub struct ForData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub update: NodeIndex,
    pub body: NodeIndex,
}

/// `try` statement. Children: block, catches, finally.
#[derive(Clone, Debug, Default)]
pub struct TryData {
    pub block: NodeIndex,
    pub catches: Vec<NodeIndex>,
    pub finally_block: NodeIndex,
}

/// Left/right pair: member access, namespace access, `&&`, `||`, `with`
/// (object, body) and E4X filters (object, predicate).
#[derive(Clone, Debug, Default)]
pub struct PairData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// Call or `new` expression. Children: callee, then arguments.
#[derive(Clone, Debug, Default)]
pub struct CallData {
    pub callee: NodeIndex,
    pub arguments: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct BinaryData {
    pub op: BinaryOperator,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// Plain (`op == None`) or compound assignment.
#[derive(Clone, Debug)]
pub struct AssignmentData {
    pub op: Option<BinaryOperator>,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct UnaryData {
    pub op: UnaryOperator,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IncDecData {
    pub increment: bool,
    pub prefix: bool,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug, Default)]
pub struct TernaryData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// `new <T>[...]` vector literal. Children: element type, then elements.
#[derive(Clone, Debug, Default)]
pub struct VectorLiteralData {
    pub element_type: NodeIndex,
    pub elements: Vec<NodeIndex>,
}

/// Inline payload of a node.
#[derive(Clone, Debug, Default)]
pub enum NodeData {
    #[default]
    None,
    /// Statement list of a file, package body, block or container.
    List(Vec<NodeIndex>),
    /// Single child: `return`, `throw`, `delete`, `!`, `finally`, function
    /// objects and `use namespace`.
    Single(NodeIndex),
    Package {
        name: String,
        body: NodeIndex,
    },
    Class(ClassData),
    Function(FunctionData),
    Parameter(ParameterData),
    Variable(VariableData),
    NamespaceDecl(NamespaceDeclData),
    Import(ImportData),
    Modifier(ModifierKeyword),
    If(IfData),
    Loop(LoopData),
    For(ForData),
    Try(TryData),
    /// `catch (parameter) block`
    Catch {
        parameter: NodeIndex,
        block: NodeIndex,
    },
    Pair(PairData),
    Identifier(String),
    Call(CallData),
    Binary(BinaryData),
    Assignment(AssignmentData),
    Unary(UnaryData),
    IncDec(IncDecData),
    Ternary(TernaryData),
    Number(f64),
    String(String),
    Boolean(bool),
    VectorLiteral(VectorLiteralData),
}

/// A node in the arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: NodeIndex,
    pub data: NodeData,
}

/// Owner of all nodes of one compilation unit.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) file_name: String,
    pub(crate) next_pos: u32,
}
