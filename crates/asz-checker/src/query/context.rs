//! Where a node sits: enclosing function and class, static or package
//! context, `with` and E4X filter bodies, loop and `if` conditions.

use super::SemanticQueries;
use asz_ast::{NodeIndex, NodeKind};
use asz_binder::{Binding, BuiltinType, DefId};

impl<'a> SemanticQueries<'a> {
    // =========================================================================
    // Enclosing definitions
    // =========================================================================

    /// Nearest enclosing function declaration node.
    #[must_use]
    pub fn enclosing_function_node(&self, node: NodeIndex) -> NodeIndex {
        self.arena.ancestor_of_kind(node, NodeKind::Function)
    }

    /// Definition declared by a function node.
    #[must_use]
    pub fn function_definition(&self, function_node: NodeIndex) -> Option<DefId> {
        self.definition_of(function_node)
            .filter(|&d| self.def(d).is_function())
    }

    #[must_use]
    pub fn enclosing_function_definition(&self, node: NodeIndex) -> Option<DefId> {
        self.function_definition(self.enclosing_function_node(node))
    }

    /// Class or interface whose body contains `node`. A class node is its own
    /// enclosing class.
    #[must_use]
    pub fn enclosing_class_definition(&self, node: NodeIndex) -> Option<DefId> {
        let arena = self.arena;
        std::iter::once(node)
            .chain(arena.ancestors(node))
            .find(|&n| matches!(arena.kind(n), Some(NodeKind::Class | NodeKind::Interface)))
            .and_then(|n| self.definition_of(n))
    }

    #[must_use]
    pub fn enclosing_class_name(&self, node: NodeIndex) -> Option<String> {
        self.enclosing_class_definition(node)
            .map(|d| self.def(d).name.clone())
    }

    // =========================================================================
    // Context predicates
    // =========================================================================

    /// Inside a non-static method of a class.
    #[must_use]
    pub fn is_in_instance_function(&self, node: NodeIndex) -> bool {
        self.enclosing_function_definition(node).is_some_and(|f| {
            let def = self.def(f);
            !def.is_static() && def.parent.is_some_and(|p| self.def(p).is_class())
        })
    }

    /// Inside a static method of a class.
    #[must_use]
    pub fn is_in_static_class_function(&self, node: NodeIndex) -> bool {
        self.enclosing_function_definition(node).is_some_and(|f| {
            let def = self.def(f);
            def.is_static() && def.parent.is_some_and(|p| self.def(p).is_class())
        })
    }

    /// In a static method, or in class-level initialization code outside any
    /// method.
    #[must_use]
    pub fn is_in_static_context(&self, node: NodeIndex) -> bool {
        if self.enclosing_function_node(node).is_some() {
            return self.is_in_static_class_function(node);
        }
        self.arena.ancestor_of_kind(node, NodeKind::Class).is_some()
    }

    /// In package-level code outside any class or function.
    #[must_use]
    pub fn is_in_package_context(&self, node: NodeIndex) -> bool {
        for ancestor in self.arena.ancestors(node) {
            match self.arena.kind(ancestor) {
                Some(NodeKind::Function | NodeKind::Class | NodeKind::Interface) => return false,
                Some(NodeKind::Package) => return true,
                _ => {}
            }
        }
        false
    }

    #[must_use]
    pub fn is_in_function(&self, node: NodeIndex) -> bool {
        self.enclosing_function_node(node).is_some()
    }

    #[must_use]
    pub fn is_in_constructor(&self, node: NodeIndex) -> bool {
        self.enclosing_function_definition(node)
            .is_some_and(|f| self.def(f).is_constructor())
    }

    /// Inside the body of a `with` statement.
    #[must_use]
    pub fn is_in_with(&self, node: NodeIndex) -> bool {
        self.is_in_right_of(node, NodeKind::With)
    }

    /// Inside the predicate of an E4X filter `xml.(predicate)`.
    #[must_use]
    pub fn is_in_filter(&self, node: NodeIndex) -> bool {
        self.is_in_right_of(node, NodeKind::E4XFilter)
    }

    fn is_in_right_of(&self, node: NodeIndex, kind: NodeKind) -> bool {
        let arena = self.arena;
        let mut child = node;
        for ancestor in arena.ancestors(node) {
            if arena.is_kind(ancestor, kind)
                && arena.get_pair(ancestor).is_some_and(|p| p.right == child)
            {
                return true;
            }
            child = ancestor;
        }
        false
    }

    /// A function declared inside another function's body.
    #[must_use]
    pub fn is_function_closure(&self, function_node: NodeIndex) -> bool {
        for ancestor in self.arena.ancestors(function_node) {
            match self.arena.kind(ancestor) {
                Some(NodeKind::Function) => return true,
                Some(
                    NodeKind::Class | NodeKind::Interface | NodeKind::Package | NodeKind::SourceFile,
                ) => return false,
                _ => {}
            }
        }
        false
    }

    /// A class that is not final, or an instance method of an abstract class
    /// that is not final, a constructor or an accessor.
    #[must_use]
    pub fn can_be_abstract(&self, node: NodeIndex) -> bool {
        let Some(def) = self.definition_of(node) else {
            return false;
        };
        let definition = self.def(def);
        match self.arena.kind(node) {
            Some(NodeKind::Class) => !definition.is_final(),
            Some(NodeKind::Function) => {
                let Some(parent) = definition.parent else {
                    return false;
                };
                let parent_def = self.def(parent);
                parent_def.is_class()
                    && parent_def.is_abstract()
                    && !definition.is_static()
                    && !definition.is_final()
                    && !definition.is_constructor()
                    && !definition.is_accessor()
            }
            _ => false,
        }
    }

    /// The function enclosing `node` (or `node` itself) declares a return
    /// type that requires every path to return a value.
    #[must_use]
    pub fn function_must_return_value(&self, node: NodeIndex) -> bool {
        let function_node = if self.arena.is_kind(node, NodeKind::Function) {
            node
        } else {
            self.enclosing_function_node(node)
        };
        let Some(func) = self.function_definition(function_node) else {
            return false;
        };
        let definition = self.def(func);
        let return_type = self.return_type_of(func);
        if return_type.is_none()
            || self.is_builtin(return_type, BuiltinType::Void)
            || self.is_builtin(return_type, BuiltinType::AnyType)
            || definition.is_constructor()
        {
            return false;
        }
        let abstract_method = self.options().allow_abstract_classes
            && definition.is_abstract()
            && self.can_be_abstract(function_node);
        !abstract_method
    }

    /// An assignment used directly as the condition of `if`, `while` or
    /// `do ... while`, possibly under `!`, `&&`, `||` or parentheses.
    #[must_use]
    pub fn is_unprotected_assignment_in_conditional(&self, node: NodeIndex) -> bool {
        let arena = self.arena;
        let mut current = node;
        let mut parent = arena.parent(current);
        while matches!(
            arena.kind(parent),
            Some(NodeKind::LogicalAnd | NodeKind::LogicalOr | NodeKind::LogicalNot | NodeKind::Container)
        ) {
            current = parent;
            parent = arena.parent(current);
        }
        let condition_position = match arena.kind(parent) {
            Some(NodeKind::While | NodeKind::If | NodeKind::Conditional) => 0,
            Some(NodeKind::DoWhile) => 1,
            _ => return false,
        };
        arena.child(parent, condition_position) == current
    }

    // =========================================================================
    // Reference analyzability
    // =========================================================================

    /// The reference goes through a base whose members are not fixed: a
    /// dynamic class, an untyped or unknown value, or an XML identifier.
    /// A class named as the base is a static reference and not dynamic.
    #[must_use]
    pub fn has_dynamic_base(&self, node: NodeIndex) -> bool {
        let base = self.base_node(node);
        if base.is_none() {
            return false;
        }
        if let Some(def) = self.resolve_reference(base)
            && self.def(def).is_type()
        {
            return false;
        }
        let base_type = self.resolve_type(base);
        let Some(ty) = base_type else {
            return true;
        };
        if self.is_builtin(base_type, BuiltinType::AnyType) || self.def(ty).is_dynamic() {
            return true;
        }
        self.arena.is_kind(base, NodeKind::Identifier)
            && matches!(
                self.builtin_of(base_type),
                Some(BuiltinType::Xml | BuiltinType::XmlList)
            )
    }

    /// Whether an unresolved reference can be reported: it is not inside a
    /// `with` body or filter predicate, is not an `@attribute`, and does not
    /// go through a dynamic base.
    #[must_use]
    pub fn definition_can_be_analyzed(&self, node: NodeIndex, binding: &Binding) -> bool {
        !self.is_in_with(node)
            && !self.is_in_filter(node)
            && !binding.name.as_ref().is_some_and(|n| n.is_attribute_name())
            && !self.has_dynamic_base(node)
    }

    #[must_use]
    pub fn is_this_keyword(&self, node: NodeIndex) -> bool {
        self.arena.is_kind(node, NodeKind::This)
    }

    /// A reference to the implicit `arguments` object.
    #[must_use]
    pub fn is_arguments_reference(&self, node: NodeIndex, binding: &Binding) -> bool {
        if binding.base_name() != Some("arguments") {
            return false;
        }
        match binding.definition {
            Some(def) => self.def(def).is_implicit,
            None => self.arena.is_kind(node, NodeKind::Identifier) && !self.has_base_node(node),
        }
    }

    /// The expression spells a known package name (`flash.events`).
    #[must_use]
    pub fn is_package_reference(&self, node: NodeIndex) -> bool {
        self.dotted_name(node)
            .is_some_and(|name| self.project.is_package_name(&name))
    }

    /// A class variable declared inside control flow within the class body
    /// rather than directly in it.
    #[must_use]
    pub fn is_nested_class_property(&self, node: NodeIndex) -> bool {
        let Some(def) = self.definition_of(node) else {
            return false;
        };
        if !self.def(def).parent.is_some_and(|p| self.def(p).is_class()) {
            return false;
        }
        for ancestor in self.arena.ancestors(node) {
            match self.arena.kind(ancestor) {
                Some(NodeKind::Class) => return false,
                Some(NodeKind::Block) => {}
                _ => return true,
            }
        }
        false
    }
}
