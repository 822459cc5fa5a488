//! Type & scope query layer.
//!
//! Read-only predicates and resolvers over one compilation unit and its
//! project. Every query is a method on `SemanticQueries`, a `Copy` handle of
//! shared references, so the checker can hold one and call into it freely
//! while it mutates its own diagnostic sink.
//!
//! - `conversion` - the type compatibility oracle
//! - `expression_types` - static types of expressions and special values
//! - `members` - member lookup, multi-definition classification, accessors
//! - `context` - where a node sits (function, class, `with`, conditional)
//! - `declarations` - read/write-only, deprecation and import queries

mod context;
mod conversion;
mod declarations;
mod expression_types;
mod members;

pub use expression_types::SpecialValue;
pub use members::MultiDefinitionType;

use asz_ast::{NodeArena, NodeIndex, NodeKind};
use asz_binder::{
    Binding, BuiltinType, CompilationUnit, CompilerOptions, DefId, Definition, Project,
};

/// Query handle bound to one compilation unit of a project.
#[derive(Clone, Copy)]
pub struct SemanticQueries<'a> {
    pub project: &'a Project,
    pub unit: &'a CompilationUnit,
    pub arena: &'a NodeArena,
}

impl<'a> SemanticQueries<'a> {
    #[must_use]
    pub fn new(project: &'a Project, unit: &'a CompilationUnit) -> Self {
        Self {
            project,
            unit,
            arena: &unit.arena,
        }
    }

    #[must_use]
    pub fn def(&self, id: DefId) -> &'a Definition {
        self.project.def(id)
    }

    #[must_use]
    pub fn options(&self) -> &'a CompilerOptions {
        self.project.options()
    }

    #[must_use]
    pub fn builtin(&self, ty: BuiltinType) -> DefId {
        self.project.builtin(ty)
    }

    /// `def` is the project's definition of the builtin `ty`.
    #[must_use]
    pub fn is_builtin(&self, def: Option<DefId>, ty: BuiltinType) -> bool {
        def.is_some_and(|d| self.project.builtins().is(d, ty))
    }

    #[must_use]
    pub fn builtin_of(&self, def: Option<DefId>) -> Option<BuiltinType> {
        def.and_then(|d| self.project.builtins().builtin_of(d))
    }

    #[must_use]
    pub fn binding(&self, node: NodeIndex) -> Option<&'a Binding> {
        self.unit.binding(node)
    }

    #[must_use]
    pub fn resolve(&self, node: NodeIndex) -> Option<DefId> {
        self.unit.resolve(node)
    }

    #[must_use]
    pub fn definition_of(&self, node: NodeIndex) -> Option<DefId> {
        self.unit.definition_of(node)
    }

    /// Binding of a reference expression. A member access may carry its
    /// binding on the access node or on its right-hand name.
    #[must_use]
    pub fn reference_binding(&self, node: NodeIndex) -> Option<&'a Binding> {
        if let Some(binding) = self.binding(node) {
            return Some(binding);
        }
        match self.arena.kind(node) {
            Some(NodeKind::MemberAccess | NodeKind::NamespaceAccess) => self
                .arena
                .get_pair(node)
                .and_then(|pair| self.binding(pair.right)),
            _ => None,
        }
    }

    /// Definition a reference expression resolved to.
    #[must_use]
    pub fn resolve_reference(&self, node: NodeIndex) -> Option<DefId> {
        self.reference_binding(node).and_then(|b| b.definition)
    }

    /// Qualified name of a type for diagnostics; `*` when unknown.
    #[must_use]
    pub fn type_display_name(&self, def: Option<DefId>) -> String {
        def.map_or_else(|| "*".to_string(), |d| self.def(d).qualified_name())
    }

    /// Source text of an identifier or dotted member access (`a.b.c`).
    #[must_use]
    pub fn dotted_name(&self, node: NodeIndex) -> Option<String> {
        match self.arena.kind(node)? {
            NodeKind::Identifier => self.arena.identifier_text(node).map(str::to_string),
            NodeKind::MemberAccess => {
                let pair = self.arena.get_pair(node)?;
                let left = self.dotted_name(pair.left)?;
                let right = self.arena.identifier_text(pair.right)?;
                Some(format!("{left}.{right}"))
            }
            _ => None,
        }
    }

    /// The name node a diagnostic about a reference should point at: the
    /// member name of an access, otherwise the node itself.
    #[must_use]
    pub fn name_site(&self, node: NodeIndex) -> NodeIndex {
        match self.arena.kind(node) {
            Some(NodeKind::MemberAccess | NodeKind::NamespaceAccess) => self
                .arena
                .get_pair(node)
                .map_or(node, |pair| pair.right),
            Some(NodeKind::Call | NodeKind::New) => self
                .arena
                .get_call(node)
                .map_or(node, |call| self.name_site(call.callee)),
            _ => node,
        }
    }
}
