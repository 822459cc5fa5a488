//! Namespace references attached to definitions and names.
//!
//! A definition lives in exactly one namespace: one of the language
//! namespaces (`public`, `internal`, ...) or a user-declared `namespace`.

use crate::def::DefId;

/// Namespaces the language defines implicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageNamespace {
    Public,
    Internal,
    Private,
    Protected,
    StaticProtected,
    /// Private to the declaring file (definitions outside any package).
    FilePrivate,
    /// `public`/`protected`/`private` written as a qualifier where no
    /// enclosing class gives it a meaning.
    CodeModelImplicit,
    /// The `*` wildcard namespace.
    Any,
}

impl LanguageNamespace {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageNamespace::Public => "public",
            LanguageNamespace::Internal => "internal",
            LanguageNamespace::Private => "private",
            LanguageNamespace::Protected => "protected",
            LanguageNamespace::StaticProtected => "static protected",
            LanguageNamespace::FilePrivate => "file private",
            LanguageNamespace::CodeModelImplicit => "implicit",
            LanguageNamespace::Any => "*",
        }
    }
}

/// Namespace of a definition as written by the user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamespaceRef {
    Language(LanguageNamespace),
    /// A user-declared namespace such as `mx_internal`, with the namespace
    /// definition the binder resolved it to.
    User {
        name: String,
        resolved: Option<DefId>,
    },
}

impl Default for NamespaceRef {
    fn default() -> Self {
        NamespaceRef::Language(LanguageNamespace::Internal)
    }
}

/// Canonical identity of a namespace after resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamespaceIdentity {
    Language(LanguageNamespace),
    Declared(DefId),
}

impl NamespaceRef {
    pub const PUBLIC: NamespaceRef = NamespaceRef::Language(LanguageNamespace::Public);
    pub const INTERNAL: NamespaceRef = NamespaceRef::Language(LanguageNamespace::Internal);
    pub const PRIVATE: NamespaceRef = NamespaceRef::Language(LanguageNamespace::Private);
    pub const PROTECTED: NamespaceRef = NamespaceRef::Language(LanguageNamespace::Protected);

    #[must_use]
    pub fn user(name: impl Into<String>, resolved: Option<DefId>) -> Self {
        NamespaceRef::User {
            name: name.into(),
            resolved,
        }
    }

    #[must_use]
    pub const fn is_language_namespace(&self) -> bool {
        matches!(self, NamespaceRef::Language(_))
    }

    #[must_use]
    pub const fn language(&self) -> Option<LanguageNamespace> {
        match self {
            NamespaceRef::Language(ns) => Some(*ns),
            NamespaceRef::User { .. } => None,
        }
    }

    #[must_use]
    pub fn is(&self, ns: LanguageNamespace) -> bool {
        self.language() == Some(ns)
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.is(LanguageNamespace::Public)
    }

    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.is(LanguageNamespace::Internal)
    }

    /// Visible outside the declaring compilation unit.
    #[must_use]
    pub fn is_externally_visible(&self) -> bool {
        match self {
            NamespaceRef::Language(ns) => matches!(ns, LanguageNamespace::Public),
            NamespaceRef::User { .. } => true,
        }
    }

    /// `None` for an unresolved user namespace.
    #[must_use]
    pub fn identity(&self) -> Option<NamespaceIdentity> {
        match self {
            NamespaceRef::Language(ns) => Some(NamespaceIdentity::Language(*ns)),
            NamespaceRef::User { resolved, .. } => resolved.map(NamespaceIdentity::Declared),
        }
    }

    /// Two references name the same namespace. Unresolved user namespaces
    /// compare by name.
    #[must_use]
    pub fn same_namespace(&self, other: &NamespaceRef) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => match (self, other) {
                (NamespaceRef::User { name: a, .. }, NamespaceRef::User { name: b, .. }) => a == b,
                _ => false,
            },
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            NamespaceRef::Language(ns) => ns.as_str(),
            NamespaceRef::User { name, .. } => name,
        }
    }
}
