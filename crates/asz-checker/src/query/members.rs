//! Member lookup, same-scope collision classification and accessor pairing.

use super::SemanticQueries;
use asz_ast::{NodeIndex, NodeKind};
use asz_binder::{Binding, DefId, FunctionRole, LanguageNamespace, ScopeId};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Classification of a definition that shares its name and namespace with
/// another definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiDefinitionType {
    None,
    /// Incompatible definitions; a language error.
    Ambiguous,
    /// A legal redeclaration, reported in strict mode.
    Multiple,
    /// A local variable redeclaring a parameter, reported in strict mode.
    ShadowsParam,
}

impl<'a> SemanticQueries<'a> {
    // =========================================================================
    // Member lookup
    // =========================================================================

    /// Class and interface scopes a reference at `node` is looked up in, with
    /// whether the lookup is static. The explicit base decides when there is
    /// one; otherwise the enclosing class method does.
    fn member_lookup_scopes(&self, node: NodeIndex) -> Option<(SmallVec<[ScopeId; 4]>, bool)> {
        let base = self.base_node(node);
        let (ty, is_static) = if base.is_some() {
            match self.resolve_reference(base) {
                Some(def) if self.def(def).is_type() => (def, true),
                _ => (self.resolve_type(base)?, false),
            }
        } else if self.is_in_instance_function(node) {
            (self.enclosing_class_definition(node)?, false)
        } else if self.is_in_static_class_function(node) {
            (self.enclosing_class_definition(node)?, true)
        } else {
            return None;
        };
        let scopes = self
            .type_hierarchy(ty)
            .into_iter()
            .filter_map(|t| self.def(t).contained_scope())
            .collect();
        Some((scopes, is_static))
    }

    /// `ty` followed by its base classes and implemented or extended
    /// interfaces, each once.
    #[must_use]
    pub fn type_hierarchy(&self, ty: DefId) -> Vec<DefId> {
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        let mut pending = vec![ty];
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            order.push(current);
            let def = self.def(current);
            if let Some(class) = def.class_info() {
                pending.extend(class.interfaces.iter().rev().copied());
                pending.extend(class.base_class);
            } else if let Some(interface) = def.interface_info() {
                pending.extend(interface.extends.iter().rev().copied());
            }
        }
        order
    }

    /// Look `name` up as a member of the type a reference at `node` goes
    /// through. A definition whose static-ness matches the reference wins;
    /// with `match_static` set, a definition of the other static-ness is
    /// returned when no matching one exists.
    #[must_use]
    pub fn find_member_by_name(&self, node: NodeIndex, name: &str, match_static: bool) -> Option<DefId> {
        let (scopes, is_static) = self.member_lookup_scopes(node)?;
        let mut other_static = None;
        for scope in scopes {
            for &candidate in self.project.scopes().local(scope, name) {
                if self.def(candidate).is_static() == is_static {
                    return Some(candidate);
                }
                other_static.get_or_insert(candidate);
            }
        }
        if match_static { other_static } else { None }
    }

    /// The binding did not resolve, yet a member by that name exists: it is
    /// there but not visible from here.
    #[must_use]
    pub fn is_inaccessible(&self, node: NodeIndex, binding: &Binding) -> bool {
        if binding.definition.is_some() {
            return false;
        }
        binding
            .base_name()
            .is_some_and(|name| self.find_member_by_name(node, name, true).is_some())
    }

    // =========================================================================
    // Same-scope collisions
    // =========================================================================

    /// The definition qualified lookup of `def`'s name and namespace finds,
    /// starting in `def`'s containing scope. Returns the ambiguity sentinel
    /// when a class or interface scope holds both a function and a variable
    /// under that name.
    #[must_use]
    pub fn find_property_qualified(&self, def: DefId) -> Option<DefId> {
        let definition = self.def(def);
        let scope = definition.containing_scope?;
        let scopes = self.project.scopes();
        for current in scopes.chain(scope) {
            let found: SmallVec<[DefId; 4]> = scopes
                .local(current, &definition.name)
                .iter()
                .copied()
                .filter(|&d| self.def(d).namespace.same_namespace(&definition.namespace))
                .collect();
            let Some(&first) = found.first() else {
                continue;
            };
            let in_type_scope = scopes.kind(current).is_some_and(|k| k.is_type_scope());
            let has_function = found.iter().any(|&d| self.def(d).is_function());
            let has_variable = found.iter().any(|&d| self.def(d).is_variable_like());
            if in_type_scope && has_function && has_variable {
                return Some(DefId::AMBIGUOUS);
            }
            return Some(first);
        }
        None
    }

    #[must_use]
    pub fn multi_definition_type(&self, def: DefId) -> MultiDefinitionType {
        let Some(found) = self.find_property_qualified(def) else {
            return MultiDefinitionType::None;
        };
        if found.is_ambiguous() {
            return MultiDefinitionType::Ambiguous;
        }
        if found != def && !self.is_getter_setter_pair(def, found) {
            return if self.def(found).is_parameter() {
                MultiDefinitionType::ShadowsParam
            } else {
                MultiDefinitionType::Multiple
            };
        }
        MultiDefinitionType::None
    }

    /// Other plain functions with the same name in the same scope, `def`
    /// included.
    #[must_use]
    pub fn find_potential_function_conflicts(&self, def: DefId) -> Vec<DefId> {
        let definition = self.def(def);
        let Some(scope) = definition.containing_scope else {
            return vec![def];
        };
        self.project
            .scopes()
            .local(scope, &definition.name)
            .iter()
            .copied()
            .filter(|&d| {
                let other = self.def(d);
                other.is_function()
                    && !other.is_accessor()
                    && other.namespace.same_namespace(&definition.namespace)
            })
            .collect()
    }

    /// A member of a class with the same name and namespace is declared in
    /// one of its base classes. Private members are never inherited.
    #[must_use]
    pub fn has_base_class_definition(&self, def: DefId) -> bool {
        self.inherited_definition(def).is_some()
    }

    /// The nearest base class member that `def` hides: same name, same
    /// namespace and not private.
    #[must_use]
    pub fn inherited_definition(&self, def: DefId) -> Option<DefId> {
        let definition = self.def(def);
        if definition.namespace.is(LanguageNamespace::Private) {
            return None;
        }
        let parent = definition.parent?;
        let mut visited = FxHashSet::default();
        let mut base = self.def(parent).class_info().and_then(|c| c.base_class);
        while let Some(current) = base {
            if !visited.insert(current) {
                break;
            }
            let class = self.def(current);
            if let Some(scope) = class.contained_scope() {
                let inherited = self.project.scopes().local(scope, &definition.name).iter().copied().find(|&d| {
                    let other = self.def(d);
                    !other.namespace.is(LanguageNamespace::Private)
                        && other.namespace.same_namespace(&definition.namespace)
                });
                if inherited.is_some() {
                    return inherited;
                }
            }
            base = class.class_info().and_then(|c| c.base_class);
        }
        None
    }

    /// The other definition `def` collides with in its own scope chain, when
    /// the collision is a plain redefinition rather than an ambiguity.
    #[must_use]
    pub fn conflicting_definition(&self, def: DefId) -> Option<DefId> {
        self.find_property_qualified(def)
            .filter(|&found| found != def && !found.is_ambiguous())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The setter of a getter or the getter of a setter: same name, same
    /// namespace and static-ness, declared in the accessor's scope or
    /// inherited from a base class.
    #[must_use]
    pub fn resolve_corresponding_accessor(&self, accessor: DefId) -> Option<DefId> {
        let definition = self.def(accessor);
        let wanted = match definition.function_role()? {
            FunctionRole::Getter => FunctionRole::Setter,
            FunctionRole::Setter => FunctionRole::Getter,
            _ => return None,
        };
        let matches = |d: DefId| {
            let other = self.def(d);
            other.function_role() == Some(wanted)
                && other.is_static() == definition.is_static()
                && other.namespace.same_namespace(&definition.namespace)
        };

        let scopes = self.project.scopes();
        if let Some(scope) = definition.containing_scope
            && let Some(found) = scopes.local(scope, &definition.name).iter().copied().find(|&d| matches(d))
        {
            return Some(found);
        }

        let parent = definition.parent?;
        let mut visited = FxHashSet::default();
        let mut base = self.def(parent).class_info().and_then(|c| c.base_class);
        while let Some(current) = base {
            if !visited.insert(current) {
                break;
            }
            let class = self.def(current);
            if let Some(scope) = class.contained_scope()
                && let Some(found) = scopes.local(scope, &definition.name).iter().copied().find(|&d| matches(d))
            {
                return Some(found);
            }
            base = class.class_info().and_then(|c| c.base_class);
        }
        None
    }

    /// Both are accessors and each is the other's corresponding accessor.
    #[must_use]
    pub fn is_getter_setter_pair(&self, a: DefId, b: DefId) -> bool {
        self.def(a).is_accessor()
            && self.def(b).is_accessor()
            && self.resolve_corresponding_accessor(a) == Some(b)
    }

    /// Class definition of the `extends` reference of a class node, or
    /// `None` when it does not name a class.
    #[must_use]
    pub fn base_class_reference(&self, class_node: NodeIndex) -> Option<DefId> {
        let base = self.arena.get_class(class_node)?.base;
        if base.is_none() || !self.arena.is_kind(class_node, NodeKind::Class) {
            return None;
        }
        self.resolve_reference(base)
    }
}
