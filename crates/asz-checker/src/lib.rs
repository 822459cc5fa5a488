//! Semantic analysis for the asz compiler.
//!
//! `SemanticQueries` answers type and scope questions over a bound
//! `Project`; `CheckerState` walks source constructs and reports
//! diagnostics. The checker is split by construct:
//! - `operator_checker` - binary, unary, compound and comparison operators
//! - `property_checker` - member access, E4X filters, `delete`, `this`
//! - `assignment_checker` - assignment targets and implicit conversions
//! - `call_checker` - calls, `new`, argument counts and abstract instantiation
//! - `super_checker` - `super` expressions and constructor super calls
//! - `return_checker` - `return` and `throw` against the enclosing function
//! - `declaration_checker` - functions, parameters, variables and vector literals
//! - `conflict_checker` - duplicate, ambiguous and inherited definitions
//! - `namespace_checker` - namespace attributes, qualifiers and imports
//! - `initial_value` - coercion of constant initializers to declared types
//! - `class_checker` - `extends` clauses
//! - `inline_checker` - eligibility of functions for inlining

pub mod query;
pub mod state;

pub mod assignment_checker;
pub mod call_checker;
pub mod class_checker;
pub mod conflict_checker;
pub mod declaration_checker;
mod error_reporter;
pub mod initial_value;
pub mod inline_checker;
pub mod namespace_checker;
pub mod operator_checker;
pub mod property_checker;
pub mod return_checker;
pub mod super_checker;

pub use query::{MultiDefinitionType, SemanticQueries, SpecialValue};
pub use state::{CheckOutcome, CheckerState, ConstructorScope, SkipReason, SuperState};

#[cfg(test)]
#[path = "../tests/test_fixture.rs"]
mod test_fixture;

#[cfg(test)]
#[path = "../tests/query_tests.rs"]
mod query_tests;

#[cfg(test)]
#[path = "../tests/operator_tests.rs"]
mod operator_tests;

#[cfg(test)]
#[path = "../tests/assignment_tests.rs"]
mod assignment_tests;

#[cfg(test)]
#[path = "../tests/call_tests.rs"]
mod call_tests;

#[cfg(test)]
#[path = "../tests/property_tests.rs"]
mod property_tests;

#[cfg(test)]
#[path = "../tests/super_return_tests.rs"]
mod super_return_tests;

#[cfg(test)]
#[path = "../tests/class_tests.rs"]
mod class_tests;

#[cfg(test)]
#[path = "../tests/conflict_tests.rs"]
mod conflict_tests;

#[cfg(test)]
#[path = "../tests/declaration_tests.rs"]
mod declaration_tests;

#[cfg(test)]
#[path = "../tests/namespace_tests.rs"]
mod namespace_tests;

#[cfg(test)]
#[path = "../tests/initial_value_tests.rs"]
mod initial_value_tests;

#[cfg(test)]
#[path = "../tests/inline_tests.rs"]
mod inline_tests;
