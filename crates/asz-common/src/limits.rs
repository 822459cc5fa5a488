//! Centralized limits and thresholds for the semantic analyzer.
//!
//! The checker itself performs a single walk driven by an external caller, so
//! there are few limits here. The ones that exist bound the work done by the
//! inlining analyzer and fix the legal ranges used by constant coercion.

// =============================================================================
// Inlining
// =============================================================================

/// Maximum number of expression nodes an inlinable function body may contain.
///
/// The inlining analyzer counts expressions while it scans a candidate body
/// and stops as soon as the count passes this value. A function marked
/// `[Inline]` that exceeds it gets an "inline function too large" warning
/// naming the observed count (always `MAX_EXPR_IN_BODY + 1`, since the scan
/// fails fast) and this maximum.
///
/// # ActionScript example
///
/// ```actionscript
/// [Inline]
/// public static function big(a:int):int {
///     // more than fifty expressions here ...
///     return a + a + a + a /* ... */;
/// }
/// ```
pub const MAX_EXPR_IN_BODY: usize = 50;

// =============================================================================
// Integer ranges used by initializer coercion
// =============================================================================

/// Smallest value representable by `int`.
pub const INT_MIN: i64 = i32::MIN as i64;

/// Largest value representable by `int`.
pub const INT_MAX: i64 = i32::MAX as i64;

/// Smallest value representable by `uint`.
pub const UINT_MIN: i64 = 0;

/// Largest value representable by `uint`.
pub const UINT_MAX: i64 = u32::MAX as i64;
