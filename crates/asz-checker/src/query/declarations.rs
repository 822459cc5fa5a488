//! Declaration-level queries: read/write-only accessors, deprecation and
//! import visibility.

use super::SemanticQueries;
use asz_ast::NodeIndex;
use asz_binder::DefId;
use asz_common::diagnostics::diagnostic_codes;

impl<'a> SemanticQueries<'a> {
    /// A constant, or a getter without a setter in the same namespace.
    #[must_use]
    pub fn is_read_only_definition(&self, def: Option<DefId>) -> bool {
        let Some(def) = def else {
            return false;
        };
        let definition = self.def(def);
        if definition.is_constant() {
            return true;
        }
        if !definition.is_getter() {
            return false;
        }
        match self.resolve_corresponding_accessor(def) {
            None => true,
            Some(setter) => !self.def(setter).namespace.same_namespace(&definition.namespace),
        }
    }

    /// A setter without a getter.
    #[must_use]
    pub fn is_write_only_definition(&self, def: Option<DefId>) -> bool {
        def.is_some_and(|d| {
            self.def(d).is_setter() && self.resolve_corresponding_accessor(d).is_none()
        })
    }

    /// `node` sits inside the declaration of a deprecated definition, so
    /// references from it are not reported.
    #[must_use]
    pub fn has_deprecated_ancestor(&self, node: NodeIndex) -> bool {
        self.arena.ancestors(node).any(|ancestor| {
            self.definition_of(ancestor)
                .is_some_and(|d| self.def(d).is_deprecated())
        })
    }

    /// Package a definition belongs to, following its parents.
    #[must_use]
    pub fn package_name_of(&self, def: DefId) -> Option<&'a str> {
        let mut current = Some(def);
        while let Some(id) = current {
            let definition = self.def(id);
            if let Some(package) = definition.package_name.as_deref() {
                return Some(package);
            }
            current = definition.parent;
        }
        None
    }

    /// The import target names something visible: project-wide, or for an
    /// invisible unit, an externally visible definition of this unit.
    #[must_use]
    pub fn is_valid_import(&self, target: &str) -> bool {
        if self.project.is_valid_import(target) {
            return true;
        }
        if !self.unit.invisible {
            return false;
        }
        let wildcard_package = target.strip_suffix(".*");
        self.unit.top_level.iter().any(|&id| {
            let def = self.def(id);
            if !def.namespace.is_externally_visible() {
                return false;
            }
            match wildcard_package {
                Some(package) => def.package_name.as_deref() == Some(package),
                None => def.qualified_name() == target,
            }
        })
    }

    /// Diagnostic code and arguments for a reference to a deprecated
    /// definition, shaped by which metadata fields are present. `None` when
    /// the definition is not deprecated.
    #[must_use]
    pub fn deprecation_problem(&self, def: DefId) -> Option<(u32, Vec<String>)> {
        let definition = self.def(def);
        let deprecation = definition.deprecation.as_ref()?;
        let name = definition.name.clone();
        let problem = match (
            deprecation.message.as_ref(),
            deprecation.since.as_ref(),
            deprecation.replacement.as_ref(),
        ) {
            (Some(message), _, _) => (diagnostic_codes::DEPRECATED_API_WITH_MESSAGE, vec![message.clone()]),
            (None, None, None) => (diagnostic_codes::DEPRECATED_API, vec![name]),
            (None, Some(since), None) => {
                (diagnostic_codes::DEPRECATED_API_WITH_SINCE, vec![name, since.clone()])
            }
            (None, None, Some(replacement)) => (
                diagnostic_codes::DEPRECATED_API_WITH_REPLACEMENT,
                vec![name, replacement.clone()],
            ),
            (None, Some(since), Some(replacement)) => (
                diagnostic_codes::DEPRECATED_API_WITH_SINCE_AND_REPLACEMENT,
                vec![name, since.clone(), replacement.clone()],
            ),
        };
        Some(problem)
    }
}
