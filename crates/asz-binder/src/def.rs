//! Definitions: the nodes of the project's symbol graph.
//!
//! A `Definition` is addressed by `DefId`. `DefId(0)` is reserved for the
//! ambiguity sentinel that qualified lookup returns when a name has more than
//! one incompatible definition in a class scope.

use crate::namespace::NamespaceRef;
use crate::scopes::ScopeId;
use crate::unit::UnitId;
use asz_ast::NodeIndex;
use asz_common::PooledValue;
use bitflags::bitflags;

// =============================================================================
// DefId
// =============================================================================

/// Handle to a definition owned by a `Project`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(pub u32);

impl DefId {
    /// The ambiguous-definition sentinel.
    pub const AMBIGUOUS: DefId = DefId(0);

    #[must_use]
    pub const fn is_ambiguous(self) -> bool {
        self.0 == Self::AMBIGUOUS.0
    }
}

// =============================================================================
// Modifiers
// =============================================================================

bitflags! {
    /// Definition attribute keywords.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const STATIC = 1 << 0;
        const FINAL = 1 << 1;
        const OVERRIDE = 1 << 2;
        const NATIVE = 1 << 3;
        const DYNAMIC = 1 << 4;
        const ABSTRACT = 1 << 5;
        const VIRTUAL = 1 << 6;
    }
}

// =============================================================================
// Auxiliary data
// =============================================================================

/// `[Deprecated]` metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deprecation {
    pub message: Option<String>,
    pub since: Option<String>,
    pub replacement: Option<String>,
}

/// A declared type reference (`:Foo`) and what the binder resolved it to.
///
/// `resolved == None` with `name == "*"` is the any type; any other
/// unresolved name is an unknown type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAnnotation {
    pub name: String,
    pub resolved: Option<DefId>,
}

impl TypeAnnotation {
    #[must_use]
    pub fn new(name: impl Into<String>, resolved: Option<DefId>) -> Self {
        Self {
            name: name.into(),
            resolved,
        }
    }

    #[must_use]
    pub fn resolved(name: impl Into<String>, def: DefId) -> Self {
        Self::new(name, Some(def))
    }
}

/// Where a definition was declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeclSite {
    pub unit: UnitId,
    pub node: NodeIndex,
}

/// Sub-kind of a function definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FunctionRole {
    #[default]
    Plain,
    Constructor,
    Getter,
    Setter,
}

impl FunctionRole {
    #[must_use]
    pub const fn is_accessor(self) -> bool {
        matches!(self, FunctionRole::Getter | FunctionRole::Setter)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassInfo {
    /// `None` only for `Object` and the special builtins.
    pub base_class: Option<DefId>,
    /// Source text of the `extends` reference, for diagnostics.
    pub base_class_name: Option<String>,
    pub interfaces: Vec<DefId>,
    pub constructor: Option<DefId>,
    pub scope: Option<ScopeId>,
    /// Set when `[Bindable]` makes the compiler add an `IEventDispatcher`
    /// implementation to the class.
    pub needs_event_dispatcher: bool,
    /// Element type of an applied `Vector.<T>`; `Some(None)` is `Vector.<*>`.
    pub vector_element: Option<Option<DefId>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub extends: Vec<DefId>,
    pub scope: Option<ScopeId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionInfo {
    pub role: FunctionRole,
    pub parameters: Vec<DefId>,
    /// Explicitly marked for inlining.
    pub is_inline: bool,
    pub scope: Option<ScopeId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParameterInfo {
    pub has_default: bool,
    pub is_rest: bool,
}

// =============================================================================
// Definition
// =============================================================================

/// Closed set of definition variants.
#[derive(Clone, Debug, PartialEq)]
pub enum DefinitionKind {
    Class(ClassInfo),
    Interface(InterfaceInfo),
    Function(FunctionInfo),
    Variable,
    Constant { value: Option<PooledValue> },
    Parameter(ParameterInfo),
    Namespace { uri: Option<String> },
    Package,
    /// The ambiguity sentinel.
    Ambiguous,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    pub name: String,
    /// Dotted package name for package-level definitions; `Some("")` is the
    /// unnamed package.
    pub package_name: Option<String>,
    pub namespace: NamespaceRef,
    pub modifiers: Modifiers,
    pub kind: DefinitionKind,
    /// Enclosing class, interface or function.
    pub parent: Option<DefId>,
    /// Scope this definition is registered in.
    pub containing_scope: Option<ScopeId>,
    pub decl: Option<DeclSite>,
    pub declared_type: Option<TypeAnnotation>,
    pub deprecation: Option<Deprecation>,
    /// Compiler-synthesized (`arguments`, default constructors).
    pub is_implicit: bool,
    /// Carries `[Bindable]` metadata.
    pub is_bindable: bool,
}

impl Definition {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            name: name.into(),
            package_name: None,
            namespace: NamespaceRef::default(),
            modifiers: Modifiers::empty(),
            kind,
            parent: None,
            containing_scope: None,
            decl: None,
            declared_type: None,
            deprecation: None,
            is_implicit: false,
            is_bindable: false,
        }
    }

    #[must_use]
    pub fn class(name: impl Into<String>, info: ClassInfo) -> Self {
        Self::new(name, DefinitionKind::Class(info))
    }

    #[must_use]
    pub fn interface(name: impl Into<String>, info: InterfaceInfo) -> Self {
        Self::new(name, DefinitionKind::Interface(info))
    }

    #[must_use]
    pub fn function(name: impl Into<String>, info: FunctionInfo) -> Self {
        Self::new(name, DefinitionKind::Function(info))
    }

    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(name, DefinitionKind::Variable)
    }

    #[must_use]
    pub fn constant(name: impl Into<String>, value: Option<PooledValue>) -> Self {
        Self::new(name, DefinitionKind::Constant { value })
    }

    #[must_use]
    pub fn parameter(name: impl Into<String>, info: ParameterInfo) -> Self {
        Self::new(name, DefinitionKind::Parameter(info))
    }

    // Builder-style setters used by the binder and by tests.

    #[must_use]
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package_name = Some(package.into());
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: NamespaceRef) -> Self {
        self.namespace = namespace;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: DefId) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn in_scope(mut self, scope: ScopeId) -> Self {
        self.containing_scope = Some(scope);
        self
    }

    #[must_use]
    pub fn declared_at(mut self, unit: UnitId, node: NodeIndex) -> Self {
        self.decl = Some(DeclSite { unit, node });
        self
    }

    #[must_use]
    pub fn with_type(mut self, annotation: TypeAnnotation) -> Self {
        self.declared_type = Some(annotation);
        self
    }

    #[must_use]
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecation = Some(deprecation);
        self
    }

    #[must_use]
    pub fn implicit(mut self) -> Self {
        self.is_implicit = true;
        self
    }

    #[must_use]
    pub fn bindable(mut self) -> Self {
        self.is_bindable = true;
        self
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// `pkg.name`, or the bare name for the unnamed package and members.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match self.package_name.as_deref() {
            Some(pkg) if !pkg.is_empty() => format!("{pkg}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    #[must_use]
    pub const fn is_final(&self) -> bool {
        self.modifiers.contains(Modifiers::FINAL)
    }

    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.modifiers.contains(Modifiers::DYNAMIC)
    }

    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.modifiers.contains(Modifiers::ABSTRACT)
    }

    #[must_use]
    pub const fn is_native(&self) -> bool {
        self.modifiers.contains(Modifiers::NATIVE)
    }

    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }

    #[must_use]
    pub const fn is_class(&self) -> bool {
        matches!(self.kind, DefinitionKind::Class(_))
    }

    #[must_use]
    pub const fn is_interface(&self) -> bool {
        matches!(self.kind, DefinitionKind::Interface(_))
    }

    /// Class or interface.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        self.is_class() || self.is_interface()
    }

    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self.kind, DefinitionKind::Function(_))
    }

    /// Variable, constant or parameter.
    #[must_use]
    pub const fn is_variable_like(&self) -> bool {
        matches!(
            self.kind,
            DefinitionKind::Variable
                | DefinitionKind::Constant { .. }
                | DefinitionKind::Parameter(_)
        )
    }

    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self.kind, DefinitionKind::Constant { .. })
    }

    #[must_use]
    pub const fn is_parameter(&self) -> bool {
        matches!(self.kind, DefinitionKind::Parameter(_))
    }

    #[must_use]
    pub const fn is_namespace(&self) -> bool {
        matches!(self.kind, DefinitionKind::Namespace { .. })
    }

    #[must_use]
    pub const fn is_package(&self) -> bool {
        matches!(self.kind, DefinitionKind::Package)
    }

    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        matches!(self.kind, DefinitionKind::Ambiguous)
    }

    #[must_use]
    pub const fn class_info(&self) -> Option<&ClassInfo> {
        match &self.kind {
            DefinitionKind::Class(info) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn interface_info(&self) -> Option<&InterfaceInfo> {
        match &self.kind {
            DefinitionKind::Interface(info) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn function_info(&self) -> Option<&FunctionInfo> {
        match &self.kind {
            DefinitionKind::Function(info) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn parameter_info(&self) -> Option<ParameterInfo> {
        match self.kind {
            DefinitionKind::Parameter(info) => Some(info),
            _ => None,
        }
    }

    #[must_use]
    pub fn function_role(&self) -> Option<FunctionRole> {
        self.function_info().map(|f| f.role)
    }

    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.function_role() == Some(FunctionRole::Constructor)
    }

    #[must_use]
    pub fn is_getter(&self) -> bool {
        self.function_role() == Some(FunctionRole::Getter)
    }

    #[must_use]
    pub fn is_setter(&self) -> bool {
        self.function_role() == Some(FunctionRole::Setter)
    }

    #[must_use]
    pub fn is_accessor(&self) -> bool {
        self.function_role().is_some_and(FunctionRole::is_accessor)
    }

    /// Scope holding this definition's members, for classes, interfaces and
    /// functions.
    #[must_use]
    pub fn contained_scope(&self) -> Option<ScopeId> {
        match &self.kind {
            DefinitionKind::Class(c) => c.scope,
            DefinitionKind::Interface(i) => i.scope,
            DefinitionKind::Function(f) => f.scope,
            _ => None,
        }
    }

    /// Resolved declared type, if any.
    #[must_use]
    pub fn type_def(&self) -> Option<DefId> {
        self.declared_type.as_ref().and_then(|t| t.resolved)
    }

    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.declared_type.as_ref().map(|t| t.name.as_str())
    }

    /// Node of the declaration, if declared in source.
    #[must_use]
    pub fn node(&self) -> NodeIndex {
        self.decl.map_or(NodeIndex::NONE, |d| d.node)
    }
}
