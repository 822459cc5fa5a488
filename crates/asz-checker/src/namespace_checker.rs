//! Namespace and import checks: access qualifiers with no enclosing class,
//! user namespaces on non-members, unresolved and deprecated namespaces,
//! `use namespace` and `import` directives.

use crate::state::CheckerState;
use asz_ast::{NodeIndex, NodeKind};
use asz_binder::{Binding, DefId, LanguageNamespace, NamespaceRef};
use asz_common::diagnostics::diagnostic_codes;
use tracing::trace;

/// Access keywords that only mean something inside a class.
#[derive(Clone, Copy)]
enum AccessKeyword {
    Public,
    Protected,
    Private,
}

impl AccessKeyword {
    fn from_text(text: &str) -> Option<Self> {
        match text {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

impl<'a> CheckerState<'a> {
    // =========================================================================
    // Qualifiers and definitions
    // =========================================================================

    /// A namespace qualifier such as `private::x`. Outside a class the access
    /// keywords resolve to a placeholder namespace.
    pub fn check_qualifier(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let qualifier = ctx.resolve_reference(node);
        if qualifier == Some(ctx.project.code_model_implicit_namespace()) {
            let keyword = ctx.arena.identifier_text(node).and_then(AccessKeyword::from_text);
            let code = match keyword {
                Some(AccessKeyword::Public) => Some(diagnostic_codes::INVALID_PUBLIC_NAMESPACE),
                Some(AccessKeyword::Protected) => Some(diagnostic_codes::INVALID_PROTECTED_NAMESPACE),
                Some(AccessKeyword::Private) => Some(diagnostic_codes::INVALID_PRIVATE_NAMESPACE),
                None => None,
            };
            if let Some(code) = code {
                self.error_at_node_msg(node, code, &[]);
            }
        }
        self.check_deprecated(node, qualifier);
    }

    /// The namespace a definition is declared in.
    pub fn check_namespace_of_definition(&mut self, node: NodeIndex, def: DefId) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let definition = ctx.def(def);
        let namespace = &definition.namespace;
        let ns_node = arena.namespace_node(node);
        let ns_site = if ns_node.is_some() { ns_node } else { node };

        // A user namespace is only valid on class members. Inside a function
        // any namespace is already reported.
        let parent_is_class = definition.parent.is_some_and(|p| ctx.def(p).is_class());
        if !namespace.is_language_namespace() && !parent_is_class && !ctx.is_in_function(node) {
            self.error_at_node_msg(ns_site, diagnostic_codes::INVALID_NAMESPACE, &[]);
        }

        // Constructors stay in the placeholder namespace.
        if namespace.is(LanguageNamespace::CodeModelImplicit) && !definition.is_constructor() && ns_node.is_some() {
            let keyword = arena.identifier_text(ns_node).and_then(AccessKeyword::from_text);
            let code = match keyword {
                Some(AccessKeyword::Public) => Some(diagnostic_codes::INVALID_PUBLIC_NAMESPACE_ATTR),
                Some(AccessKeyword::Protected) => Some(diagnostic_codes::INVALID_PROTECTED_NAMESPACE_ATTR),
                Some(AccessKeyword::Private) => Some(diagnostic_codes::INVALID_PRIVATE_NAMESPACE_ATTR),
                None => None,
            };
            if let Some(code) = code {
                self.error_at_node_msg(ns_node, code, &[]);
            }
        }

        if let NamespaceRef::User { name, resolved } = namespace {
            if resolved.is_none() {
                trace!(namespace = %name, "unresolved namespace attribute");
                self.error_at_node_msg(ns_site, diagnostic_codes::UNRESOLVED_NAMESPACE, &[]);
            }
            self.check_deprecated(ns_site, *resolved);
        }
    }

    /// A definition with no namespace attribute lands in `internal`, which
    /// is reported so the choice is explicit.
    pub fn check_scoped_to_default_namespace(&mut self, node: NodeIndex, def: DefId, class_name: Option<&str>) {
        let ctx = self.ctx;
        if node.is_none() || ctx.arena.namespace_node(node).is_some() {
            return;
        }
        let definition = ctx.def(def);
        if !definition.namespace.is_internal() {
            return;
        }
        let kind = if definition.is_function() {
            "function"
        } else if definition.is_class() {
            "class"
        } else if definition.is_interface() {
            "interface"
        } else {
            "declaration"
        };
        let identifier = format!("{kind} '{}'", definition.name);
        self.error_at_node_msg(
            node,
            diagnostic_codes::SCOPED_TO_DEFAULT_NAMESPACE,
            &[&identifier, class_name.unwrap_or_default()],
        );
    }

    // =========================================================================
    // Namespace declarations and directives
    // =========================================================================

    /// `namespace ns = "uri";`.
    pub fn check_namespace_declaration(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let arena = ctx.arena;
        let Some(decl) = arena.get_namespace_decl(node) else {
            return;
        };
        if let Some(def) = ctx.definition_of(node) {
            self.check_namespace_of_definition(node, def);
            self.check_scoped_to_default_namespace(node, def, None);
            if ctx.is_in_function(node) {
                self.check_for_namespace_in_function(node, def);
            }
        }

        // Initialized from another, possibly deprecated, namespace.
        if decl.uri.is_some() && !arena.is_kind(decl.uri, NodeKind::StringLiteral) {
            self.check_deprecated(decl.uri, ctx.resolve_reference(decl.uri));
        }
    }

    /// `use namespace ns;`.
    pub fn check_use_namespace_directive(&mut self, node: NodeIndex, binding: &Binding) {
        let ctx = self.ctx;
        if binding.definition.is_none()
            && let Some(name) = binding.name.as_ref()
        {
            let full_name = ctx
                .arena
                .identifier_text(binding.node)
                .unwrap_or(name.base_name.as_str());
            let site = Self::reference_site(binding, node);
            self.error_at_node_msg(site, diagnostic_codes::UNKNOWN_NAMESPACE, &[full_name]);
        }
        self.check_reference(binding, false);
    }

    /// `import a.b.C;`, `import a.b.*;` and, when enabled, `import C = a.b.C;`.
    pub fn check_import_directive(&mut self, node: NodeIndex) {
        let ctx = self.ctx;
        let Some(import) = ctx.arena.get_import(node) else {
            return;
        };
        if import.alias.is_some() && !ctx.options().allow_import_aliases {
            self.error_at_node_msg(node, diagnostic_codes::SYNTAX_ERROR, &["="]);
        }

        if !ctx.is_valid_import(&import.target) {
            let code = if import.is_wildcard() {
                diagnostic_codes::UNKNOWN_WILDCARD_IMPORT
            } else {
                diagnostic_codes::UNKNOWN_IMPORT
            };
            self.error_at_node_msg(node, code, &[&import.target]);
        }

        if !import.is_wildcard() {
            let imported = ctx.project.lookup_qualified(&import.target).first().copied();
            self.check_deprecated(node, imported);
        }
    }
}
