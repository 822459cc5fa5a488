//! Checker state: the query handle, the diagnostic sink and the super-call
//! state machine of the constructor currently being checked.

use crate::query::SemanticQueries;
use asz_binder::{CompilationUnit, Project};
use asz_common::Diagnostic;
use tracing::trace;

/// Legality of an explicit `super(...)` call in the constructor being
/// checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SuperState {
    /// Not inside a constructor body.
    #[default]
    Invalid,
    /// Constructor entered; no super call, `return` or `throw` seen yet.
    Initial,
    /// A super call, `return` or `throw` has been processed.
    Armed,
}

/// Token proving a constructor body is being checked. Returned by
/// `enter_constructor` and consumed by `leave_constructor`.
#[must_use = "pass the scope to leave_constructor when the body is done"]
#[derive(Debug)]
pub struct ConstructorScope {
    _private: (),
}

/// Why a check deliberately did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// A value-returning `return` whose expression node is missing, which
    /// happens when the parser recovered from a syntax error.
    MissingReturnExpression,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Checked,
    Skip(SkipReason),
}

/// Construct checker for one compilation unit.
///
/// One instance checks one function body at a time; its super-call state is
/// only meaningful between `enter_constructor` and `leave_constructor`.
pub struct CheckerState<'a> {
    pub ctx: SemanticQueries<'a>,
    pub diagnostics: Vec<Diagnostic>,
    pub(crate) super_state: SuperState,
    /// Set while checking the body of a function being inlined.
    pub(crate) in_inline_function: bool,
}

impl<'a> CheckerState<'a> {
    #[must_use]
    pub fn new(project: &'a Project, unit: &'a CompilationUnit) -> Self {
        Self {
            ctx: SemanticQueries::new(project, unit),
            diagnostics: Vec::new(),
            super_state: SuperState::Invalid,
            in_inline_function: false,
        }
    }

    #[must_use]
    pub const fn super_state(&self) -> SuperState {
        self.super_state
    }

    pub fn set_in_inline_function(&mut self, inlining: bool) {
        self.in_inline_function = inlining;
    }

    /// Codes of the diagnostics reported so far, in order.
    #[must_use]
    pub fn diagnostic_codes(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    // =========================================================================
    // Constructor bodies
    // =========================================================================

    /// Start checking a constructor body.
    ///
    /// # Panics
    ///
    /// When a constructor body is already being checked.
    pub fn enter_constructor(&mut self) -> ConstructorScope {
        assert_eq!(
            self.super_state,
            SuperState::Invalid,
            "enter_constructor while already in a constructor"
        );
        trace!("enter_constructor");
        self.super_state = SuperState::Initial;
        ConstructorScope { _private: () }
    }

    /// Finish checking a constructor body.
    ///
    /// # Panics
    ///
    /// When no constructor body is being checked.
    pub fn leave_constructor(&mut self, scope: ConstructorScope) {
        let ConstructorScope { _private: () } = scope;
        assert_ne!(
            self.super_state,
            SuperState::Invalid,
            "leave_constructor outside a constructor"
        );
        trace!(state = ?self.super_state, "leave_constructor");
        self.super_state = SuperState::Invalid;
    }

    /// `return` and `throw` before any super call arm the state machine.
    pub(crate) fn arm_super_state(&mut self) {
        if self.super_state == SuperState::Initial {
            self.super_state = SuperState::Armed;
        }
    }
}
