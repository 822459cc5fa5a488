//! Compilation units: one source file's AST plus the name-binding results
//! recorded against its nodes.

use crate::binding::{Binding, Name};
use crate::def::DefId;
use crate::scopes::ScopeId;
use asz_ast::{NodeArena, NodeIndex};
use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub u32);

#[derive(Clone, Debug)]
pub struct CompilationUnit {
    pub path: String,
    pub arena: NodeArena,
    /// Compiled in isolation; its definitions are not visible project-wide.
    pub invisible: bool,
    /// An MXML document's script block.
    pub mxml: bool,
    /// File-level scope, when the binder created one.
    pub scope: Option<ScopeId>,
    /// Package-level definitions declared in this unit, in order.
    pub top_level: Vec<DefId>,
    bindings: FxHashMap<NodeIndex, Binding>,
    expression_types: FxHashMap<NodeIndex, DefId>,
    declarations: FxHashMap<NodeIndex, DefId>,
}

impl CompilationUnit {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            arena: NodeArena::new(path.clone()),
            path,
            invisible: false,
            mxml: false,
            scope: None,
            top_level: Vec::new(),
            bindings: FxHashMap::default(),
            expression_types: FxHashMap::default(),
            declarations: FxHashMap::default(),
        }
    }

    // =========================================================================
    // Recording (name-binding pass)
    // =========================================================================

    pub fn record_binding(&mut self, binding: Binding) {
        self.bindings.insert(binding.node, binding);
    }

    /// Record that the reference at `node` named `name` resolved to `def`.
    pub fn bind(&mut self, node: NodeIndex, def: DefId, name: impl Into<String>) {
        self.record_binding(Binding::resolved(node, def, Name::new(name)));
    }

    /// Record a reference that failed to resolve.
    pub fn bind_unresolved(&mut self, node: NodeIndex, name: impl Into<String>) {
        self.record_binding(Binding::unresolved(node, Name::new(name)));
    }

    /// Record the static type of an expression.
    pub fn record_type(&mut self, node: NodeIndex, ty: DefId) {
        self.expression_types.insert(node, ty);
    }

    pub(crate) fn record_declaration(&mut self, node: NodeIndex, def: DefId) {
        self.declarations.insert(node, def);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn binding(&self, node: NodeIndex) -> Option<&Binding> {
        self.bindings.get(&node)
    }

    /// Definition a reference node resolved to.
    #[must_use]
    pub fn resolve(&self, node: NodeIndex) -> Option<DefId> {
        self.bindings.get(&node).and_then(|b| b.definition)
    }

    /// Recorded static type of an expression node.
    #[must_use]
    pub fn recorded_type(&self, node: NodeIndex) -> Option<DefId> {
        self.expression_types.get(&node).copied()
    }

    /// Definition declared by a declaration node.
    #[must_use]
    pub fn definition_of(&self, node: NodeIndex) -> Option<DefId> {
        self.declarations.get(&node).copied()
    }
}
