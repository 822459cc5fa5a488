//! Definition graph for the asz semantic analyzer.
//!
//! The name-binding pass itself is an external collaborator. This crate holds
//! what it produces and what the semantic passes read:
//! - `def` - `DefId`, `Definition` and its closed set of kinds
//! - `namespace` - namespace references and their resolved identity
//! - `scopes` - the scope tree with per-name definition sets
//! - `builtins` - `BuiltinType` and the per-project registry
//! - `binding` - `Binding` and qualified `Name`
//! - `unit` - compilation units with their recorded bindings and types
//! - `options` - `CompilerOptions`
//! - `project` - the owning `Project`

pub mod binding;
pub mod builtins;
pub mod def;
pub mod namespace;
pub mod options;
pub mod project;
pub mod scopes;
pub mod unit;

pub use binding::{Binding, Name, NameFlags};
pub use builtins::{BuiltinRegistry, BuiltinType};
pub use def::{
    ClassInfo, DeclSite, DefId, Definition, DefinitionKind, Deprecation, FunctionInfo,
    FunctionRole, InterfaceInfo, Modifiers, ParameterInfo, TypeAnnotation,
};
pub use namespace::{LanguageNamespace, NamespaceIdentity, NamespaceRef};
pub use options::CompilerOptions;
pub use project::{EVENT_DISPATCHER_INTERFACE, Project};
pub use scopes::{DefinitionSet, Scope, ScopeId, ScopeKind, ScopeTable};
pub use unit::{CompilationUnit, UnitId};

#[cfg(test)]
#[path = "../tests/project_tests.rs"]
mod project_tests;

#[cfg(test)]
#[path = "../tests/scopes_tests.rs"]
mod scopes_tests;
