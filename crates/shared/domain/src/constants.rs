//! Domain-level constants.

// =============================================================================
// Result operators
// =============================================================================

/// Panic message when the value channel of a failed result is read
pub const MISUSE_VALUE_ON_ERROR: &str = "accessed value on an error result";

/// Panic message when the error channel of a successful result is read
pub const MISUSE_ERROR_ON_SUCCESS: &str = "accessed error on a successful result";

/// Internal code used when a failure does not name one
pub const DEFAULT_INTERNAL_CODE: i32 = 0;
