//! Change-detecting setter invocation.

/// Remembers the arguments last pushed to a native setter and only calls the
/// setter again when they differ.
///
/// The first `apply` always fires, so a freshly attached instance receives
/// every property once.
#[derive(Debug, Clone)]
pub struct SetEffect<T> {
    previous: Option<T>,
}

impl<T: PartialEq + Clone> SetEffect<T> {
    /// Create an effect that has never run.
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Call `setter` with `args` if they changed since the last render.
    ///
    /// Returns whether the setter was called.
    pub fn apply(&mut self, args: &T, setter: impl FnOnce(&T)) -> bool {
        if self.previous.as_ref() == Some(args) {
            return false;
        }
        self.previous = Some(args.clone());
        setter(args);
        true
    }

    /// Whether the effect has run at least once.
    pub fn has_run(&self) -> bool {
        self.previous.is_some()
    }
}

impl<T: PartialEq + Clone> SetEffect<Option<T>> {
    /// Like [`SetEffect::apply`], but an absent value is recorded without
    /// reaching the setter.
    pub fn apply_present(&mut self, args: &Option<T>, setter: impl FnOnce(&T)) -> bool {
        let mut called = false;
        self.apply(args, |args| {
            if let Some(value) = args {
                setter(value);
                called = true;
            }
        });
        called
    }
}

impl<T: PartialEq + Clone> Default for SetEffect<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_apply_fires() {
        let mut effect = SetEffect::new();
        let mut calls = Vec::new();
        assert!(effect.apply(&(10.0, 20.0), |&(rx, ry)| calls.push((rx, ry))));
        assert_eq!(calls, vec![(10.0, 20.0)]);
        assert!(effect.has_run());
    }

    #[test]
    fn test_unchanged_args_skip_setter() {
        let mut effect = SetEffect::new();
        let mut calls = 0;
        effect.apply(&5, |_| calls += 1);
        effect.apply(&5, |_| calls += 1);
        effect.apply(&5, |_| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_changed_args_fire_once() {
        let mut effect = SetEffect::new();
        let mut seen = Vec::new();
        for value in [1, 1, 2, 2, 3] {
            effect.apply(&value, |v| seen.push(*v));
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_absent_value_never_reaches_setter() {
        let mut effect = SetEffect::new();
        let mut seen = Vec::new();
        for value in [None, Some(3), None, Some(3), Some(3)] {
            effect.apply_present(&value, |v| seen.push(*v));
        }
        assert_eq!(seen, vec![3, 3]);
    }
}
