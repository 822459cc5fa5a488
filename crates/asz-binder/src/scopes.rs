//! Lexical scopes.
//!
//! Scopes form a tree rooted at the project scope. Each scope maps a base
//! name to the definitions declared under it, in declaration order; a name
//! with more than one entry is a collision that qualified lookup classifies.

use crate::def::DefId;
use indexmap::IndexMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Project,
    Package,
    File,
    Class,
    Interface,
    Function,
    With,
    Catch,
}

impl ScopeKind {
    #[must_use]
    pub const fn is_type_scope(self) -> bool {
        matches!(self, ScopeKind::Class | ScopeKind::Interface)
    }
}

pub type DefinitionSet = SmallVec<[DefId; 2]>;

#[derive(Clone, Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    /// Class, interface or function owning the scope.
    pub owner: Option<DefId>,
    members: IndexMap<String, DefinitionSet>,
}

impl Scope {
    /// Definitions declared under `name` in this scope only.
    #[must_use]
    pub fn local(&self, name: &str) -> &[DefId] {
        self.members.get(name).map_or(&[], |set| set.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn definitions(&self) -> impl Iterator<Item = DefId> + '_ {
        self.members.values().flat_map(|set| set.iter().copied())
    }
}

/// Arena of all scopes of a project.
#[derive(Clone, Debug, Default)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl ScopeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: ScopeKind, parent: Option<ScopeId>, owner: Option<DefId>) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            kind,
            parent,
            owner,
            members: IndexMap::new(),
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0 as usize)
    }

    pub(crate) fn set_owner(&mut self, id: ScopeId, owner: DefId) {
        if let Some(scope) = self.scopes.get_mut(id.0 as usize) {
            scope.owner = Some(owner);
        }
    }

    pub(crate) fn declare(&mut self, id: ScopeId, name: &str, def: DefId) {
        if let Some(scope) = self.scopes.get_mut(id.0 as usize) {
            scope.members.entry(name.to_string()).or_default().push(def);
        }
    }

    #[must_use]
    pub fn local(&self, id: ScopeId, name: &str) -> &[DefId] {
        self.get(id).map_or(&[], |s| s.local(name))
    }

    #[must_use]
    pub fn kind(&self, id: ScopeId) -> Option<ScopeKind> {
        self.get(id).map(|s| s.kind)
    }

    #[must_use]
    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.get(id).and_then(|s| s.parent)
    }

    #[must_use]
    pub fn owner(&self, id: ScopeId) -> Option<DefId> {
        self.get(id).and_then(|s| s.owner)
    }

    /// `id` followed by its ancestors, innermost first.
    pub fn chain(&self, id: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(id), move |&s| self.parent(s))
    }

    /// First scope in the chain declaring `name`, with its definitions.
    #[must_use]
    pub fn lookup(&self, id: ScopeId, name: &str) -> Option<(ScopeId, &[DefId])> {
        self.chain(id).find_map(|s| {
            let found = self.local(s, name);
            (!found.is_empty()).then_some((s, found))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
