//! Capacity limits for the foreign-call binding layer.
//!
//! These constants size the fixed tables on the consumer side: any callback
//! registry built against this configuration must hold at least
//! [`MAX_CALLBACK`] entries covering [`CALLBACK_TYPES`] distinct signatures.

use std::num::NonZeroUsize;

/// Upper bound on foreign-call argument counts. Zero is the unbounded
/// sentinel; use [`max_args`] to read the resolved form.
pub const MAX_ARG: usize = 0;

/// Maximum number of registrable native callbacks.
pub const MAX_CALLBACK: usize = 10;

/// Number of distinct callback type signatures the binding layer supports.
pub const CALLBACK_TYPES: usize = 8;

/// Resolved argument limit. `None` means the argument count is unbounded.
#[must_use]
pub fn max_args() -> Option<NonZeroUsize> {
    NonZeroUsize::new(MAX_ARG)
}

/// Minimum capacity for a consumer-side callback table.
#[must_use]
pub const fn callback_capacity() -> usize {
    MAX_CALLBACK
}

/// Number of distinct callback signatures a consumer must dispatch on.
#[must_use]
pub const fn callback_signature_count() -> usize {
    CALLBACK_TYPES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_hold_fixed_values() {
        assert_eq!(MAX_CALLBACK, 10);
        assert_eq!(CALLBACK_TYPES, 8);
        assert_eq!(callback_capacity(), MAX_CALLBACK);
        assert_eq!(callback_signature_count(), CALLBACK_TYPES);
    }

    #[test]
    fn zero_max_arg_resolves_to_unbounded() {
        assert_eq!(MAX_ARG, 0);
        assert!(max_args().is_none(), "zero is the unbounded sentinel");
    }
}
