//! Access to the enclosing map.

use crate::error::{BindingError, BindingResult};

/// The map a binding is rendered inside, if any.
///
/// The map itself is owned by whoever created it. Bindings only read the
/// context to attach or detach their own shape.
#[derive(Debug, Clone)]
pub struct MapContext<M> {
    map: Option<M>,
}

impl<M> MapContext<M> {
    /// A context providing `map`.
    pub fn new(map: M) -> Self {
        Self { map: Some(map) }
    }

    /// A context with no map, as seen by shapes rendered outside one.
    pub fn empty() -> Self {
        Self { map: None }
    }

    /// The current map, if any.
    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    /// The current map, or `ContextMissing` naming `component`.
    pub fn require(&self, component: &'static str) -> BindingResult<&M> {
        self.map
            .as_ref()
            .ok_or(BindingError::ContextMissing { component })
    }
}

impl<M> Default for MapContext<M> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<M> From<Option<M>> for MapContext<M> {
    fn from(map: Option<M>) -> Self {
        Self { map }
    }
}
