//! Builtin types.
//!
//! Every project creates one class definition per builtin type when it is
//! constructed; the registry maps the closed `BuiltinType` tag to that
//! definition and back. The registry is immutable after construction.

use crate::def::DefId;
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    AnyType,
    Void,
    Null,
    Object,
    Boolean,
    Int,
    UInt,
    Number,
    String,
    Array,
    Xml,
    XmlList,
    Function,
    Class,
    Namespace,
    Vector,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 16] = [
        BuiltinType::AnyType,
        BuiltinType::Void,
        BuiltinType::Null,
        BuiltinType::Object,
        BuiltinType::Boolean,
        BuiltinType::Int,
        BuiltinType::UInt,
        BuiltinType::Number,
        BuiltinType::String,
        BuiltinType::Array,
        BuiltinType::Xml,
        BuiltinType::XmlList,
        BuiltinType::Function,
        BuiltinType::Class,
        BuiltinType::Namespace,
        BuiltinType::Vector,
    ];

    /// Source name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinType::AnyType => "*",
            BuiltinType::Void => "void",
            BuiltinType::Null => "Null",
            BuiltinType::Object => "Object",
            BuiltinType::Boolean => "Boolean",
            BuiltinType::Int => "int",
            BuiltinType::UInt => "uint",
            BuiltinType::Number => "Number",
            BuiltinType::String => "String",
            BuiltinType::Array => "Array",
            BuiltinType::Xml => "XML",
            BuiltinType::XmlList => "XMLList",
            BuiltinType::Function => "Function",
            BuiltinType::Class => "Class",
            BuiltinType::Namespace => "Namespace",
            BuiltinType::Vector => "Vector",
        }
    }

    /// Package of the type; `Vector` lives in `__AS3__.vec`.
    #[must_use]
    pub const fn package(self) -> &'static str {
        match self {
            BuiltinType::Vector => "__AS3__.vec",
            _ => "",
        }
    }

    /// Types that cannot be referenced by name in a scope lookup.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            BuiltinType::AnyType | BuiltinType::Void | BuiltinType::Null
        )
    }

    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            BuiltinType::Boolean
                | BuiltinType::Int
                | BuiltinType::UInt
                | BuiltinType::Number
                | BuiltinType::String
                | BuiltinType::Xml
                | BuiltinType::XmlList
                | BuiltinType::Class
                | BuiltinType::Namespace
                | BuiltinType::Vector
        )
    }

    #[must_use]
    pub const fn is_dynamic(self) -> bool {
        matches!(
            self,
            BuiltinType::Object
                | BuiltinType::Array
                | BuiltinType::Function
                | BuiltinType::Class
                | BuiltinType::Xml
                | BuiltinType::XmlList
        )
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, BuiltinType::Int | BuiltinType::UInt | BuiltinType::Number)
    }
}

/// Maps builtin tags to the project's definitions.
#[derive(Clone, Debug)]
pub struct BuiltinRegistry {
    by_type: [DefId; BuiltinType::ALL.len()],
    by_def: FxHashMap<DefId, BuiltinType>,
}

impl BuiltinRegistry {
    /// `defs[i]` is the definition of `BuiltinType::ALL[i]`.
    pub(crate) fn new(defs: [DefId; BuiltinType::ALL.len()]) -> Self {
        let by_def = BuiltinType::ALL
            .iter()
            .zip(defs)
            .map(|(&ty, def)| (def, ty))
            .collect();
        Self {
            by_type: defs,
            by_def,
        }
    }

    #[must_use]
    pub fn get(&self, ty: BuiltinType) -> DefId {
        self.by_type[ty as usize]
    }

    #[must_use]
    pub fn builtin_of(&self, def: DefId) -> Option<BuiltinType> {
        self.by_def.get(&def).copied()
    }

    #[must_use]
    pub fn is(&self, def: DefId, ty: BuiltinType) -> bool {
        self.get(ty) == def
    }
}
