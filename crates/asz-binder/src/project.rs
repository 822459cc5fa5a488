//! The project: owner of every definition, scope and compilation unit of one
//! compilation.
//!
//! `Project::new` seeds the builtin types and the global constants
//! (`undefined`, `NaN`, `Infinity`). The external name-binding pass then adds
//! user definitions and records bindings on the units; the semantic passes
//! only read the project.

use crate::builtins::{BuiltinRegistry, BuiltinType};
use crate::def::{ClassInfo, DefId, Definition, DefinitionKind, Modifiers, TypeAnnotation};
use crate::namespace::{LanguageNamespace, NamespaceRef};
use crate::options::CompilerOptions;
use crate::scopes::{ScopeId, ScopeKind, ScopeTable};
use crate::unit::{CompilationUnit, UnitId};
use asz_ast::NodeArena;
use asz_common::PooledValue;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::trace;

/// Qualified name of the interface `[Bindable]` classes implement.
pub const EVENT_DISPATCHER_INTERFACE: &str = "flash.events.IEventDispatcher";

#[derive(Clone, Debug)]
pub struct Project {
    options: CompilerOptions,
    defs: Vec<Definition>,
    scopes: ScopeTable,
    project_scope: ScopeId,
    builtins: BuiltinRegistry,
    units: Vec<CompilationUnit>,
    /// Package-level definitions by qualified name.
    qualified: FxHashMap<String, SmallVec<[DefId; 1]>>,
    package_names: FxHashSet<String>,
    packages: FxHashMap<String, DefId>,
    applied_vectors: FxHashMap<Option<DefId>, DefId>,
    undefined_value: DefId,
    nan_value: DefId,
    infinity_value: DefId,
    code_model_implicit: DefId,
}

impl Project {
    #[must_use]
    pub fn new(options: CompilerOptions) -> Self {
        let mut scopes = ScopeTable::new();
        let project_scope = scopes.add(ScopeKind::Project, None, None);
        let mut project = Project {
            options,
            // Slot 0 is the ambiguity sentinel.
            defs: vec![Definition::new("<ambiguous>", DefinitionKind::Ambiguous)],
            scopes,
            project_scope,
            builtins: BuiltinRegistry::new([DefId::AMBIGUOUS; BuiltinType::ALL.len()]),
            units: Vec::new(),
            qualified: FxHashMap::default(),
            package_names: FxHashSet::default(),
            packages: FxHashMap::default(),
            applied_vectors: FxHashMap::default(),
            undefined_value: DefId::AMBIGUOUS,
            nan_value: DefId::AMBIGUOUS,
            infinity_value: DefId::AMBIGUOUS,
            code_model_implicit: DefId::AMBIGUOUS,
        };
        project.seed_builtins();
        project
    }

    fn seed_builtins(&mut self) {
        let mut ids = [DefId::AMBIGUOUS; BuiltinType::ALL.len()];
        for (slot, ty) in ids.iter_mut().zip(BuiltinType::ALL) {
            let mut modifiers = Modifiers::empty();
            if ty.is_final() {
                modifiers |= Modifiers::FINAL;
            }
            if ty.is_dynamic() {
                modifiers |= Modifiers::DYNAMIC;
            }
            let class_scope = self.scopes.add(ScopeKind::Class, Some(self.project_scope), None);
            let info = ClassInfo {
                scope: Some(class_scope),
                vector_element: (ty == BuiltinType::Vector).then_some(None),
                ..ClassInfo::default()
            };
            let mut def = Definition::class(ty.name(), info)
                .in_package(ty.package())
                .with_namespace(NamespaceRef::PUBLIC)
                .with_modifiers(modifiers);
            if !ty.is_special() {
                def = def.in_scope(self.project_scope);
            }
            *slot = self.add_definition(def);
        }
        let object = ids[BuiltinType::Object as usize];
        for (&id, ty) in ids.iter().zip(BuiltinType::ALL) {
            if ty.is_special() || ty == BuiltinType::Object {
                continue;
            }
            if let Some(DefinitionKind::Class(info)) = self.defs.get_mut(id.0 as usize).map(|d| &mut d.kind) {
                info.base_class = Some(object);
                info.base_class_name = Some("Object".to_string());
            }
        }
        self.builtins = BuiltinRegistry::new(ids);

        let void = ids[BuiltinType::Void as usize];
        let number = ids[BuiltinType::Number as usize];
        self.undefined_value = self.add_global_constant("undefined", PooledValue::Undefined, "void", void);
        self.nan_value = self.add_global_constant("NaN", PooledValue::Double(f64::NAN), "Number", number);
        self.infinity_value =
            self.add_global_constant("Infinity", PooledValue::Double(f64::INFINITY), "Number", number);
        // What `public`/`protected`/`private` resolve to outside any class.
        self.code_model_implicit = self.add_definition(
            Definition::new("implicit", DefinitionKind::Namespace { uri: None })
                .with_namespace(NamespaceRef::Language(LanguageNamespace::CodeModelImplicit)),
        );
    }

    fn add_global_constant(&mut self, name: &str, value: PooledValue, type_name: &str, ty: DefId) -> DefId {
        let def = Definition::constant(name, Some(value))
            .in_package("")
            .with_namespace(NamespaceRef::PUBLIC)
            .with_type(TypeAnnotation::resolved(type_name, ty))
            .in_scope(self.project_scope);
        self.add_definition(def)
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Register a definition. It is declared in its containing scope, indexed
    /// by qualified name when package-level, and linked to its declaration
    /// node.
    pub fn add_definition(&mut self, def: Definition) -> DefId {
        let id = DefId(self.defs.len() as u32);
        trace!(name = %def.name, ?id, "add_definition");

        if let Some(scope) = def.containing_scope {
            self.scopes.declare(scope, &def.name, id);
            let package_level = matches!(
                self.scopes.kind(scope),
                Some(ScopeKind::Project | ScopeKind::Package | ScopeKind::File)
            );
            if package_level && def.package_name.is_some() {
                self.qualified.entry(def.qualified_name()).or_default().push(id);
                if let Some(site) = def.decl
                    && let Some(unit) = self.units.get_mut(site.unit.0 as usize)
                {
                    unit.top_level.push(id);
                }
            }
        }
        if let Some(scope) = def.contained_scope() {
            self.scopes.set_owner(scope, id);
        }
        if let Some(site) = def.decl
            && let Some(unit) = self.units.get_mut(site.unit.0 as usize)
        {
            unit.record_declaration(site.node, id);
        }
        self.defs.push(def);
        id
    }

    pub fn add_scope(&mut self, kind: ScopeKind, parent: Option<ScopeId>) -> ScopeId {
        self.scopes.add(kind, parent, None)
    }

    /// Register a package and its enclosing package names.
    pub fn add_package(&mut self, name: &str) -> DefId {
        if let Some(&id) = self.packages.get(name) {
            return id;
        }
        let mut prefix = String::new();
        for part in name.split('.') {
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(part);
            self.package_names.insert(prefix.clone());
        }
        let id = self.add_definition(Definition::new(name, DefinitionKind::Package));
        self.packages.insert(name.to_string(), id);
        id
    }

    pub fn add_unit(&mut self, path: impl Into<String>) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(CompilationUnit::new(path));
        id
    }

    /// The applied `Vector.<element>` class; `None` is `Vector.<*>`, which
    /// is the builtin `Vector` itself.
    pub fn applied_vector(&mut self, element: Option<DefId>) -> DefId {
        let Some(element_def) = element else {
            return self.builtin(BuiltinType::Vector);
        };
        if let Some(&id) = self.applied_vectors.get(&element) {
            return id;
        }
        let element_name = self.def(element_def).qualified_name();
        let scope = self.scopes.add(ScopeKind::Class, Some(self.project_scope), None);
        let info = ClassInfo {
            base_class: Some(self.builtin(BuiltinType::Object)),
            base_class_name: Some("Object".to_string()),
            scope: Some(scope),
            vector_element: Some(element),
            ..ClassInfo::default()
        };
        let def = Definition::class(format!("Vector.<{element_name}>"), info)
            .in_package("__AS3__.vec")
            .with_namespace(NamespaceRef::PUBLIC)
            .with_modifiers(Modifiers::FINAL);
        let id = self.add_definition(def);
        self.applied_vectors.insert(element, id);
        id
    }

    #[must_use]
    pub fn def_mut(&mut self, id: DefId) -> Option<&mut Definition> {
        self.defs.get_mut(id.0 as usize)
    }

    #[must_use]
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut CompilationUnit> {
        self.units.get_mut(id.0 as usize)
    }

    #[must_use]
    pub fn arena_mut(&mut self, id: UnitId) -> Option<&mut NodeArena> {
        self.unit_mut(id).map(|u| &mut u.arena)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub const fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Definition by id. Ids are only ever handed out by this project.
    #[must_use]
    pub fn def(&self, id: DefId) -> &Definition {
        &self.defs[id.0 as usize]
    }

    #[must_use]
    pub fn get(&self, id: DefId) -> Option<&Definition> {
        self.defs.get(id.0 as usize)
    }

    #[must_use]
    pub const fn scopes(&self) -> &ScopeTable {
        &self.scopes
    }

    #[must_use]
    pub const fn project_scope(&self) -> ScopeId {
        self.project_scope
    }

    #[must_use]
    pub const fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    #[must_use]
    pub fn builtin(&self, ty: BuiltinType) -> DefId {
        self.builtins.get(ty)
    }

    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&CompilationUnit> {
        self.units.get(id.0 as usize)
    }

    /// The global `undefined` constant.
    #[must_use]
    pub const fn undefined_value(&self) -> DefId {
        self.undefined_value
    }

    /// The global `NaN` constant.
    #[must_use]
    pub const fn nan_value(&self) -> DefId {
        self.nan_value
    }

    #[must_use]
    pub const fn infinity_value(&self) -> DefId {
        self.infinity_value
    }

    /// Namespace definition bound to a `public`, `protected` or `private`
    /// qualifier that no enclosing class gives a meaning.
    #[must_use]
    pub const fn code_model_implicit_namespace(&self) -> DefId {
        self.code_model_implicit
    }

    /// Package-level definitions with the given qualified name.
    #[must_use]
    pub fn lookup_qualified(&self, qualified_name: &str) -> &[DefId] {
        self.qualified
            .get(qualified_name)
            .map_or(&[], |defs| defs.as_slice())
    }

    #[must_use]
    pub fn is_package_name(&self, name: &str) -> bool {
        self.package_names.contains(name)
    }

    #[must_use]
    pub fn package(&self, name: &str) -> Option<DefId> {
        self.packages.get(name).copied()
    }

    /// `a.b.C` names a visible package-level definition, or `a.b.*` names a
    /// known package.
    #[must_use]
    pub fn is_valid_import(&self, target: &str) -> bool {
        match target.strip_suffix(".*") {
            Some(package) => self.is_package_name(package),
            None => self.lookup_qualified(target).iter().any(|&id| {
                let def = self.def(id);
                def.decl
                    .and_then(|site| self.unit(site.unit))
                    .is_none_or(|unit| !unit.invisible)
            }),
        }
    }

    /// `flash.events.IEventDispatcher`, when the project defines it.
    #[must_use]
    pub fn event_dispatcher_interface(&self) -> Option<DefId> {
        self.lookup_qualified(EVENT_DISPATCHER_INTERFACE)
            .iter()
            .copied()
            .find(|&id| self.def(id).is_interface())
    }

    pub fn definitions(&self) -> impl Iterator<Item = (DefId, &Definition)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, d)| (DefId(i as u32), d))
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new(CompilerOptions::default())
    }
}
