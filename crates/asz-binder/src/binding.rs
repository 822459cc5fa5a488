//! Bindings: references paired with what name resolution found for them.

use crate::def::DefId;
use crate::namespace::NamespaceRef;
use asz_ast::NodeIndex;
use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Kind flags of a qualified name.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct NameFlags: u8 {
        /// `@attr` E4X attribute name.
        const ATTRIBUTE = 1 << 0;
        /// Parameterized type name such as `Vector.<T>`.
        const TYPE_NAME = 1 << 1;
        /// `*` wildcard name.
        const ANY = 1 << 2;
    }
}

/// Internal qualified name: namespace set plus base name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    pub base_name: String,
    pub qualifiers: SmallVec<[NamespaceRef; 2]>,
    pub flags: NameFlags,
}

impl Name {
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            qualifiers: SmallVec::new(),
            flags: NameFlags::empty(),
        }
    }

    #[must_use]
    pub fn attribute(base_name: impl Into<String>) -> Self {
        Self {
            flags: NameFlags::ATTRIBUTE,
            ..Self::new(base_name)
        }
    }

    #[must_use]
    pub fn qualified(mut self, namespace: NamespaceRef) -> Self {
        self.qualifiers.push(namespace);
        self
    }

    #[must_use]
    pub const fn is_attribute_name(&self) -> bool {
        self.flags.contains(NameFlags::ATTRIBUTE)
    }

    #[must_use]
    pub const fn is_type_name(&self) -> bool {
        self.flags.contains(NameFlags::TYPE_NAME)
    }
}

/// A reference node, the definition it resolved to (if any) and the name it
/// was looked up by (absent for synthesized references).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub node: NodeIndex,
    pub definition: Option<DefId>,
    pub name: Option<Name>,
}

impl Binding {
    #[must_use]
    pub fn resolved(node: NodeIndex, def: DefId, name: Name) -> Self {
        Self {
            node,
            definition: Some(def),
            name: Some(name),
        }
    }

    #[must_use]
    pub fn unresolved(node: NodeIndex, name: Name) -> Self {
        Self {
            node,
            definition: None,
            name: Some(name),
        }
    }

    /// A compiler-generated reference with no source name.
    #[must_use]
    pub fn synthetic(node: NodeIndex, definition: Option<DefId>) -> Self {
        Self {
            node,
            definition,
            name: None,
        }
    }

    #[must_use]
    pub fn base_name(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.base_name.as_str())
    }

    /// Ambiguity sentinel counts as resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.definition.is_some()
    }
}
