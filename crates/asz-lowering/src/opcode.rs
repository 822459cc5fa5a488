//! AVM2 opcodes the semantic checks distinguish.
//!
//! Only opcodes that some check dispatches on are named; everything else a
//! lowering emits is carried as `Other(byte)`.

use asz_ast::BinaryOperator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Arithmetic and bitwise
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitAnd,
    BitOr,
    BitXor,
    Negate,
    BitNot,
    ConvertD,
    Not,
    TypeOf,

    // Comparison and type tests
    Equals,
    StrictEquals,
    LessThan,
    LessEquals,
    GreaterThan,
    GreaterEquals,
    IsTypeLate,
    AsTypeLate,
    InstanceOf,
    In,

    // Branches used by `&&=` and `||=`
    IfFalse,
    IfTrue,
    Jump,

    // Scope chain and object creation
    PushWith,
    PopScope,
    PushScope,
    NewFunction,
    NewActivation,
    NewClass,
    NewCatch,
    FindPropStrict,
    FindProperty,
    GetLex,
    GetScopeObject,
    GetOuterScope,

    // Returns
    ReturnVoid,
    ReturnValue,
    Throw,

    // Stack and locals
    PushNull,
    PushUndefined,
    GetLocal,
    SetLocal,
    GetProperty,
    SetProperty,
    CallProperty,
    Pop,

    Other(u8),
}

impl Opcode {
    /// Opcodes that read or change the scope chain, create closures or
    /// activation objects, or return from the enclosing method. A body using
    /// any of them cannot be spliced into a caller.
    #[must_use]
    pub const fn is_scope_dependent(self) -> bool {
        matches!(
            self,
            Opcode::PushWith
                | Opcode::PopScope
                | Opcode::PushScope
                | Opcode::NewFunction
                | Opcode::ReturnVoid
                | Opcode::ReturnValue
                | Opcode::NewActivation
                | Opcode::NewClass
                | Opcode::NewCatch
                | Opcode::FindPropStrict
                | Opcode::FindProperty
                | Opcode::GetLex
                | Opcode::GetScopeObject
                | Opcode::GetOuterScope
        )
    }

    /// Arithmetic and bitwise binary opcodes, whose operands coerce to
    /// `Number`.
    #[must_use]
    pub const fn is_numeric_binary(self) -> bool {
        matches!(
            self,
            Opcode::Multiply
                | Opcode::Divide
                | Opcode::Modulo
                | Opcode::Subtract
                | Opcode::LeftShift
                | Opcode::RightShift
                | Opcode::UnsignedRightShift
                | Opcode::BitAnd
                | Opcode::BitOr
                | Opcode::BitXor
        )
    }

    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Opcode::Equals
                | Opcode::StrictEquals
                | Opcode::LessThan
                | Opcode::LessEquals
                | Opcode::GreaterThan
                | Opcode::GreaterEquals
        )
    }
}

/// Opcode a binary operator (or the operator implied by a compound
/// assignment) lowers to. `!=` and `!==` lower to the equality opcode
/// followed by `not`; `&&` and `||` lower to branches.
#[must_use]
pub const fn binary_opcode(op: BinaryOperator) -> Opcode {
    match op {
        BinaryOperator::Add => Opcode::Add,
        BinaryOperator::Subtract => Opcode::Subtract,
        BinaryOperator::Multiply => Opcode::Multiply,
        BinaryOperator::Divide => Opcode::Divide,
        BinaryOperator::Modulo => Opcode::Modulo,
        BinaryOperator::LeftShift => Opcode::LeftShift,
        BinaryOperator::RightShift => Opcode::RightShift,
        BinaryOperator::UnsignedRightShift => Opcode::UnsignedRightShift,
        BinaryOperator::BitwiseAnd => Opcode::BitAnd,
        BinaryOperator::BitwiseOr => Opcode::BitOr,
        BinaryOperator::BitwiseXor => Opcode::BitXor,
        BinaryOperator::Equal | BinaryOperator::NotEqual => Opcode::Equals,
        BinaryOperator::StrictEqual | BinaryOperator::StrictNotEqual => Opcode::StrictEquals,
        BinaryOperator::LessThan => Opcode::LessThan,
        BinaryOperator::LessOrEqual => Opcode::LessEquals,
        BinaryOperator::GreaterThan => Opcode::GreaterThan,
        BinaryOperator::GreaterOrEqual => Opcode::GreaterEquals,
        BinaryOperator::Is => Opcode::IsTypeLate,
        BinaryOperator::As => Opcode::AsTypeLate,
        BinaryOperator::InstanceOf => Opcode::InstanceOf,
        BinaryOperator::In => Opcode::In,
        BinaryOperator::LogicalAnd => Opcode::IfFalse,
        BinaryOperator::LogicalOr => Opcode::IfTrue,
    }
}

