//! Lifecycle states of a shape binding.

use crate::error::{BindingError, BindingResult};

/// Where a binding is in its life.
///
/// `Uninitialized -> Constructed -> Attached -> Detached`. Detached is
/// terminal. Cleanup may jump to Detached from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// No native instance exists yet.
    #[default]
    Uninitialized,
    /// The native instance exists but is not on a map.
    Constructed,
    /// The native instance is on a map and receives prop updates.
    Attached,
    /// Cleanup has run. Nothing else may happen.
    Detached,
}

impl Lifecycle {
    /// Check if prop sync and event subscription are allowed.
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached)
    }

    /// Check if the binding has been torn down.
    pub fn is_detached(&self) -> bool {
        matches!(self, Self::Detached)
    }

    /// Move to `to`, rejecting steps that skip or reverse the order.
    ///
    /// `Attached -> Attached` is accepted: moving to a new map detaches and
    /// re-attaches the same instance.
    pub fn advance(&mut self, to: Lifecycle) -> BindingResult<()> {
        let allowed = matches!(
            (*self, to),
            (Self::Uninitialized, Self::Constructed)
                | (Self::Constructed, Self::Attached)
                | (Self::Attached, Self::Attached)
                | (_, Self::Detached)
        ) && !self.is_detached();

        if !allowed {
            return Err(BindingError::InvalidTransition { from: *self, to });
        }
        *self = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        let mut state = Lifecycle::default();
        state.advance(Lifecycle::Constructed).unwrap();
        state.advance(Lifecycle::Attached).unwrap();
        assert!(state.is_attached());
        state.advance(Lifecycle::Detached).unwrap();
        assert!(state.is_detached());
    }

    #[test]
    fn test_cannot_skip_construction() {
        let mut state = Lifecycle::Uninitialized;
        let err = state.advance(Lifecycle::Attached).unwrap_err();
        assert_eq!(
            err,
            BindingError::InvalidTransition {
                from: Lifecycle::Uninitialized,
                to: Lifecycle::Attached,
            }
        );
        assert_eq!(state, Lifecycle::Uninitialized);
    }

    #[test]
    fn test_cleanup_from_any_live_state() {
        for start in [Lifecycle::Uninitialized, Lifecycle::Constructed, Lifecycle::Attached] {
            let mut state = start;
            state.advance(Lifecycle::Detached).unwrap();
            assert!(state.is_detached());
        }
    }

    #[test]
    fn test_detached_is_terminal() {
        let mut state = Lifecycle::Detached;
        assert!(state.advance(Lifecycle::Attached).is_err());
        assert!(state.advance(Lifecycle::Detached).is_err());
    }

    #[test]
    fn test_reattach_keeps_state() {
        let mut state = Lifecycle::Attached;
        state.advance(Lifecycle::Attached).unwrap();
        assert!(state.is_attached());
    }
}
