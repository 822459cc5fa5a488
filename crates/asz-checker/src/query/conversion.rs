//! Type compatibility oracle: implicit conversions and nominal subtyping.

use super::SemanticQueries;
use asz_binder::{BuiltinType, DefId};
use asz_lowering::Opcode;
use rustc_hash::FxHashSet;

impl<'a> SemanticQueries<'a> {
    /// `int`, `uint` or `Number`.
    #[must_use]
    pub fn is_numeric_type(&self, def: Option<DefId>) -> bool {
        self.builtin_of(def).is_some_and(BuiltinType::is_numeric)
    }

    #[must_use]
    pub fn is_numeric_type_or_boolean(&self, def: Option<DefId>) -> bool {
        self.is_numeric_type(def) || self.is_builtin(def, BuiltinType::Boolean)
    }

    /// Nominal subtyping: `derived` is `base`, inherits from it, or
    /// implements it.
    ///
    /// `Null` is an instance of every type that is itself an instance of
    /// `Object`, and every applied `Vector.<T>` is an instance of
    /// `Vector.<*>`.
    #[must_use]
    pub fn is_instance_of(&self, derived: DefId, base: DefId) -> bool {
        let derived_def = self.def(derived);
        let base_def = self.def(base);
        if !derived_def.is_type() || !base_def.is_type() {
            return false;
        }
        if derived == base {
            return true;
        }

        let object = self.builtin(BuiltinType::Object);
        if self.is_builtin(Some(derived), BuiltinType::Null) {
            return self.is_instance_of(base, object);
        }
        if matches!(
            self.builtin_of(Some(derived)),
            Some(BuiltinType::AnyType | BuiltinType::Void)
        ) {
            return false;
        }
        if base == object {
            return true;
        }
        if self.is_builtin(Some(base), BuiltinType::Vector)
            && derived_def
                .class_info()
                .is_some_and(|c| c.vector_element.is_some())
        {
            return true;
        }

        let mut visited = FxHashSet::default();
        let mut pending = vec![derived];
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            if current == base {
                return true;
            }
            let def = self.def(current);
            if let Some(class) = def.class_info() {
                pending.extend(class.base_class);
                pending.extend(class.interfaces.iter().copied());
            } else if let Some(interface) = def.interface_info() {
                pending.extend(interface.extends.iter().copied());
            }
        }
        false
    }

    /// A value of static type `actual` implicitly converts to `expected`.
    ///
    /// Unknown types (`None`) always convert, so an unresolved reference is
    /// not reported twice.
    #[must_use]
    pub fn is_valid_type_conversion(&self, expected: Option<DefId>, actual: Option<DefId>) -> bool {
        let (Some(expected), Some(actual)) = (expected, actual) else {
            return true;
        };
        let expected_ty = self.builtin_of(Some(expected));
        let actual_ty = self.builtin_of(Some(actual));

        if expected_ty == Some(BuiltinType::AnyType) || actual_ty == Some(BuiltinType::AnyType) {
            return true;
        }
        if self.is_instance_of(actual, expected) {
            return true;
        }
        if actual_ty == Some(BuiltinType::Null) {
            return true;
        }
        match expected_ty {
            Some(BuiltinType::Boolean | BuiltinType::Void) => return true,
            Some(BuiltinType::String)
                if matches!(actual_ty, Some(BuiltinType::Xml | BuiltinType::XmlList)) =>
            {
                return true;
            }
            _ => {}
        }
        self.is_numeric_type(Some(expected)) && self.is_numeric_type(Some(actual))
    }

    /// Like `is_valid_type_conversion`, but in an invisible unit a failed
    /// check is retried with both sides normalized to the project's canonical
    /// definitions. Invisible units may hold private copies of definitions
    /// that the project also knows.
    #[must_use]
    pub fn is_valid_type_conversion_in_unit(
        &self,
        expected: Option<DefId>,
        actual: Option<DefId>,
    ) -> bool {
        if self.is_valid_type_conversion(expected, actual) {
            return true;
        }
        if !self.unit.invisible {
            return false;
        }
        let (Some(expected), Some(actual)) = (expected, actual) else {
            return false;
        };
        let (Some(norm_expected), Some(norm_actual)) =
            (self.normalize(expected), self.normalize(actual))
        else {
            return false;
        };
        if norm_expected == expected && norm_actual == actual {
            return false;
        }
        self.is_valid_type_conversion(Some(norm_expected), Some(norm_actual))
    }

    /// The project's canonical definition for a public or internal
    /// package-level definition: the first definition registered under the
    /// same qualified name.
    #[must_use]
    pub fn normalize(&self, def: DefId) -> Option<DefId> {
        let definition = self.def(def);
        let canonical_namespace =
            definition.namespace.is_public() || definition.namespace.is_internal();
        if !canonical_namespace || definition.package_name.is_none() {
            return Some(def);
        }
        self.project
            .lookup_qualified(&definition.qualified_name())
            .first()
            .copied()
    }

    /// Compound assignment `lhs op= rhs`: a valid conversion, or `String +=`
    /// anything, or `XMLList += XML`.
    #[must_use]
    pub fn is_valid_implicit_op_assignment(
        &self,
        lhs: Option<DefId>,
        rhs: Option<DefId>,
        opcode: Opcode,
    ) -> bool {
        if self.is_valid_type_conversion(lhs, rhs) {
            return true;
        }
        if opcode != Opcode::Add {
            return false;
        }
        self.is_builtin(lhs, BuiltinType::String)
            || (self.is_builtin(lhs, BuiltinType::XmlList) && self.is_builtin(rhs, BuiltinType::Xml))
    }
}
