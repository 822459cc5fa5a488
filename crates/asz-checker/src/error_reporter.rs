//! Diagnostic emission helpers.

use crate::state::CheckerState;
use asz_ast::NodeIndex;
use asz_binder::{Binding, DefId};
use asz_common::diagnostics::get_message_template;
use asz_common::{Diagnostic, format_message};
use tracing::{debug, trace};

impl<'a> CheckerState<'a> {
    /// Report `message` at `node`. Synthesized and absent nodes have no
    /// source position and are reported at offset 0 with no length.
    pub(crate) fn error_at_node(&mut self, node: NodeIndex, message: &str, code: u32) {
        let span = self.ctx.arena.span(node);
        let (start, length) = if span.is_synthetic() {
            (0, 0)
        } else {
            (span.start, span.len())
        };
        trace!(code, ?node, "report");
        self.diagnostics.push(Diagnostic::from_code(
            self.ctx.arena.file_name().to_string(),
            start,
            length,
            message.to_string(),
            code,
        ));
    }

    /// Report the catalog message for `code` at `node`, filling its
    /// placeholders from `args`.
    pub(crate) fn error_at_node_msg(&mut self, node: NodeIndex, code: u32, args: &[&str]) {
        let template = get_message_template(code).unwrap_or("Unexpected checker diagnostic code.");
        let message = format_message(template, args);
        self.error_at_node(node, &message, code);
    }

    /// Attach the declaration site of `other` to the most recent diagnostic.
    /// Definitions without a source position are not attached.
    pub(crate) fn relate_to_definition(&mut self, other: DefId, template: &str) {
        let ctx = self.ctx;
        let definition = ctx.def(other);
        let Some(site) = definition.decl else {
            return;
        };
        let Some(unit) = ctx.project.unit(site.unit) else {
            return;
        };
        let span = unit.arena.span(site.node);
        if span.is_synthetic() {
            return;
        }
        let Some(last) = self.diagnostics.pop() else {
            return;
        };
        trace!(?other, code = last.code, "related definition");
        self.diagnostics.push(last.with_related(
            unit.arena.file_name().to_string(),
            span.start,
            span.len(),
            format_message(template, &[&definition.name]),
        ));
    }

    /// Where a problem with a reference is reported: the bound name when
    /// there is one, otherwise the enclosing expression.
    pub(crate) fn reference_site(binding: &Binding, node: NodeIndex) -> NodeIndex {
        if binding.node.is_some() { binding.node } else { node }
    }

    /// Report a reference at `node` to a deprecated definition, unless the
    /// reference itself sits inside a deprecated definition.
    pub fn check_deprecated(&mut self, node: NodeIndex, def: Option<DefId>) {
        let ctx = self.ctx;
        let Some(def) = def else {
            return;
        };
        let Some((code, args)) = ctx.deprecation_problem(def) else {
            return;
        };
        if ctx.has_deprecated_ancestor(node) {
            debug!(?node, "deprecated reference inside deprecated definition");
            return;
        }
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.error_at_node_msg(node, code, &args);
    }
}
