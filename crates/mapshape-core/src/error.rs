//! Error types for shape bindings.

use crate::lifecycle::Lifecycle;
use thiserror::Error;

/// Errors raised while driving a shape binding.
///
/// Invalid geometry or style values are not represented here: they are
/// forwarded untouched and left to the native library to reject.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The binding was rendered outside of any map.
    #[error("{component} Component must exist inside Map Component!")]
    ContextMissing { component: &'static str },
    /// The binding was updated after it had been unmounted.
    #[error("{component} was updated after it was unmounted")]
    Detached { component: &'static str },
    /// A lifecycle step was attempted out of order.
    #[error("Invalid lifecycle transition: {from:?} -> {to:?}")]
    InvalidTransition { from: Lifecycle, to: Lifecycle },
}

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_missing_message_names_component() {
        let err = BindingError::ContextMissing { component: "Ellipse" };
        assert_eq!(err.to_string(), "Ellipse Component must exist inside Map Component!");
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = BindingError::InvalidTransition {
            from: Lifecycle::Uninitialized,
            to: Lifecycle::Attached,
        };
        assert_eq!(err.to_string(), "Invalid lifecycle transition: Uninitialized -> Attached");
    }
}
