//! Class declaration checks: the `extends` clause.

use crate::state::CheckerState;
use asz_ast::NodeIndex;
use asz_binder::{BuiltinType, DefId};
use asz_common::diagnostics::diagnostic_codes;
use tracing::debug;

impl<'a> CheckerState<'a> {
    /// Validate the base class of the class declared at `class_node` and
    /// return the class it effectively extends. A base that is unknown, an
    /// interface, final or the class itself is reported and replaced by
    /// `Object`. `None` for a class with no base, which is only `Object`.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?class_node))]
    pub fn resolve_base_class(&mut self, class_node: NodeIndex) -> Option<DefId> {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let class = ctx.definition_of(class_node)?;
        let info = ctx.def(class).class_info()?;
        let base_node = arena.get_class(class_node).map_or(NodeIndex::NONE, |c| c.base);
        if base_node.is_none() && info.base_class_name.is_none() {
            return None;
        }

        let site = if base_node.is_some() { base_node } else { class_node };
        let base_name = info
            .base_class_name
            .clone()
            .or_else(|| ctx.dotted_name(base_node))
            .unwrap_or_default();
        let referenced = if base_node.is_some() {
            ctx.resolve_reference(base_node)
        } else {
            info.base_class
        };
        let object = ctx.builtin(BuiltinType::Object);

        let superclass = match referenced {
            Some(def) if !def.is_ambiguous() && ctx.def(def).is_type() => {
                let definition = ctx.def(def);
                if definition.is_interface() {
                    self.error_at_node_msg(site, diagnostic_codes::CANNOT_EXTEND_INTERFACE, &[]);
                    object
                } else if definition.is_final() {
                    self.error_at_node_msg(site, diagnostic_codes::BASE_CLASS_IS_FINAL, &[]);
                    object
                } else if def == class {
                    let qualified = ctx.def(class).qualified_name();
                    self.error_at_node_msg(class_node, diagnostic_codes::CIRCULAR_TYPE_REFERENCE, &[&qualified]);
                    object
                } else {
                    def
                }
            }
            Some(def) if def.is_ambiguous() => {
                self.error_at_node_msg(site, diagnostic_codes::AMBIGUOUS_REFERENCE, &[&base_name]);
                object
            }
            _ => {
                debug!(base = %base_name, "base class not found; repairing to Object");
                self.error_at_node_msg(site, diagnostic_codes::UNKNOWN_SUPERCLASS, &[&base_name]);
                object
            }
        };

        self.check_deprecated(site, Some(superclass));
        Some(superclass)
    }
}
