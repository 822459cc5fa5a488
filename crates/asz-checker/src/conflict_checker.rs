//! Conflicting definitions: same-scope duplicates, ambiguous collisions,
//! members hiding inherited ones and names shadowing packages.

use crate::query::MultiDefinitionType;
use crate::state::CheckerState;
use asz_ast::NodeIndex;
use asz_binder::DefId;
use asz_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use rustc_hash::FxHashSet;
use tracing::debug;

impl<'a> CheckerState<'a> {
    /// Other definitions in the declaring scope of a function. Base classes
    /// are not searched; an illegal override is reported elsewhere. Returns
    /// whether a real conflict was found.
    pub fn check_function_for_conflicting_definitions(&mut self, node: NodeIndex, def: DefId) -> bool {
        let ctx = self.ctx;
        let definition = ctx.def(def);
        let mut found_conflict = false;
        match ctx.multi_definition_type(def) {
            MultiDefinitionType::Ambiguous => {
                self.error_at_node_msg(
                    node,
                    diagnostic_codes::CONFLICTING_NAME_IN_NAMESPACE,
                    &[&definition.name, definition.namespace.display_name()],
                );
                found_conflict = true;
            }
            MultiDefinitionType::Multiple | MultiDefinitionType::ShadowsParam => {
                if ctx.options().strict {
                    self.error_at_node_msg(
                        node,
                        diagnostic_codes::DUPLICATE_FUNCTION_DEFINITION,
                        &[&definition.name],
                    );
                    self.relate_to_conflicting_definition(def);
                } else {
                    debug!(?def, "duplicate function tolerated outside strict mode");
                }
            }
            MultiDefinitionType::None => {}
        }

        // Not a redefinition, so not counted as a conflict.
        if definition.is_accessor() && ctx.project.is_package_name(&definition.name) {
            let site = self.definition_name_site(node);
            self.error_at_node_msg(site, diagnostic_codes::DEFINITION_SHADOWED_BY_PACKAGE_NAME, &[]);
        }
        found_conflict
    }

    /// An interface method: duplicates in the interface itself, and methods
    /// of base interfaces it redeclares.
    pub fn check_interface_function_for_conflicting_definitions(&mut self, node: NodeIndex, def: DefId) {
        let ctx = self.ctx;
        self.check_function_for_conflicting_definitions(node, def);

        let definition = ctx.def(def);
        for overridden in self.overridden_interface_functions(def) {
            let other = ctx.def(overridden);
            // A getter in a base interface and a setter here form a pair.
            if (other.is_setter() && definition.is_getter()) || (other.is_getter() && definition.is_setter()) {
                continue;
            }
            let interface_name = other.parent.map(|p| ctx.def(p).name.clone()).unwrap_or_default();
            self.error_at_node_msg(
                node,
                diagnostic_codes::INTERFACE_METHOD_OVERRIDE,
                &[&definition.name, &interface_name],
            );
        }
    }

    /// Functions with the same name declared in the interfaces the parent of
    /// `def` extends, directly or transitively.
    fn overridden_interface_functions(&self, def: DefId) -> Vec<DefId> {
        let ctx = self.ctx;
        let definition = ctx.def(def);
        let Some(interface) = definition.parent.and_then(|p| ctx.def(p).interface_info()) else {
            return Vec::new();
        };
        let scopes = ctx.project.scopes();
        let mut found = Vec::new();
        let mut visited = FxHashSet::default();
        let mut pending = interface.extends.clone();
        while let Some(base) = pending.pop() {
            if !visited.insert(base) {
                continue;
            }
            let Some(info) = ctx.def(base).interface_info() else {
                continue;
            };
            if let Some(scope) = info.scope {
                found.extend(
                    scopes
                        .local(scope, &definition.name)
                        .iter()
                        .copied()
                        .filter(|&d| ctx.def(d).is_function()),
                );
            }
            pending.extend(info.extends.iter().copied());
        }
        found
    }

    /// Other definitions in the declaring scope of a variable, and for class
    /// members the same name inherited from a base class.
    pub fn check_variable_for_conflicting_definitions(&mut self, node: NodeIndex, def: DefId) {
        let ctx = self.ctx;
        let definition = ctx.def(def);
        let name = definition.name.as_str();
        let name_site = self.definition_name_site(node);

        match ctx.multi_definition_type(def) {
            MultiDefinitionType::None => {}
            MultiDefinitionType::Ambiguous => {
                self.error_at_node_msg(
                    node,
                    diagnostic_codes::CONFLICTING_NAME_IN_NAMESPACE,
                    &[name, definition.namespace.display_name()],
                );
            }
            MultiDefinitionType::Multiple if ctx.options().strict => {
                self.error_at_node_msg(name_site, diagnostic_codes::DUPLICATE_VARIABLE_DEFINITION, &[name]);
                self.relate_to_conflicting_definition(def);
            }
            MultiDefinitionType::ShadowsParam if ctx.options().strict => {
                self.error_at_node_msg(
                    name_site,
                    diagnostic_codes::VARIABLE_DEFINITION_DUPLICATES_PARAMETER,
                    &[name],
                );
                self.relate_to_conflicting_definition(def);
            }
            other => debug!(?def, ?other, "variable redefinition tolerated outside strict mode"),
        }

        if !definition.is_static()
            && let Some(inherited) = ctx.inherited_definition(def)
        {
            self.error_at_node_msg(
                node,
                diagnostic_codes::CONFLICTING_INHERITED_NAME_IN_NAMESPACE,
                &[name, definition.namespace.display_name()],
            );
            self.relate_to_definition(inherited, diagnostic_messages::INHERITED_DEFINITION_HERE);
        }

        if ctx.project.is_package_name(name) {
            self.error_at_node_msg(name_site, diagnostic_codes::DEFINITION_SHADOWED_BY_PACKAGE_NAME, &[]);
        }
    }

    fn relate_to_conflicting_definition(&mut self, def: DefId) {
        if let Some(other) = self.ctx.conflicting_definition(def) {
            self.relate_to_definition(other, diagnostic_messages::CONFLICTING_DEFINITION_HERE);
        }
    }

    /// Name node of a declaration, or the declaration itself.
    fn definition_name_site(&self, node: NodeIndex) -> NodeIndex {
        let arena = self.ctx.arena;
        let name = arena
            .get_function(node)
            .map(|f| f.name)
            .or_else(|| arena.get_variable(node).map(|v| v.name))
            .unwrap_or(NodeIndex::NONE);
        if name.is_some() { name } else { node }
    }
}
