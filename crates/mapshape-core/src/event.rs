//! Native mouse events and their forwarding to callbacks.

use crate::native::NativeShape;
use std::fmt;
use std::rc::Rc;

/// Mouse events a shape can forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeEvent {
    MouseOver,
    MouseOut,
    MouseMove,
    MouseDown,
    Click,
}

impl ShapeEvent {
    /// Every forwarded event, in subscription order.
    pub const ALL: [ShapeEvent; 5] = [
        ShapeEvent::MouseOver,
        ShapeEvent::MouseOut,
        ShapeEvent::MouseMove,
        ShapeEvent::MouseDown,
        ShapeEvent::Click,
    ];

    /// The native event name.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeEvent::MouseOver => "mouseover",
            ShapeEvent::MouseOut => "mouseout",
            ShapeEvent::MouseMove => "mousemove",
            ShapeEvent::MouseDown => "mousedown",
            ShapeEvent::Click => "click",
        }
    }
}

impl fmt::Display for ShapeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Callback for a mouse event, receiving the shape and the native payload.
///
/// Two callbacks are equal only if they are clones of the same allocation,
/// so rebuilding a closure on every render counts as a new handler.
pub struct EventCallback<S: NativeShape>(Rc<dyn Fn(&S, &S::MouseEvent)>);

impl<S: NativeShape> EventCallback<S> {
    pub fn new(f: impl Fn(&S, &S::MouseEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn emit(&self, target: &S, event: &S::MouseEvent) {
        (self.0)(target, event)
    }
}

impl<S: NativeShape> Clone for EventCallback<S> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<S: NativeShape> PartialEq for EventCallback<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<S: NativeShape> fmt::Debug for EventCallback<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventCallback").field(&Rc::as_ptr(&self.0)).finish()
    }
}

/// Callback invoked with the native instance once it exists.
pub struct CreateCallback<S>(Rc<dyn Fn(&S)>);

impl<S> CreateCallback<S> {
    pub fn new(f: impl Fn(&S) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn emit(&self, target: &S) {
        (self.0)(target)
    }
}

impl<S> Clone for CreateCallback<S> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<S> PartialEq for CreateCallback<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<S> fmt::Debug for CreateCallback<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CreateCallback").field(&Rc::as_ptr(&self.0)).finish()
    }
}

/// Optional callback per forwarded event. `None` means no subscription.
pub struct EventHandlers<S: NativeShape> {
    pub on_mouseover: Option<EventCallback<S>>,
    pub on_mouseout: Option<EventCallback<S>>,
    pub on_mousemove: Option<EventCallback<S>>,
    pub on_mousedown: Option<EventCallback<S>>,
    pub on_click: Option<EventCallback<S>>,
}

impl<S: NativeShape> EventHandlers<S> {
    /// A set with no handlers.
    pub fn new() -> Self {
        Self {
            on_mouseover: None,
            on_mouseout: None,
            on_mousemove: None,
            on_mousedown: None,
            on_click: None,
        }
    }

    /// The handler registered for `event`.
    pub fn get(&self, event: ShapeEvent) -> Option<&EventCallback<S>> {
        self.slot(event).as_ref()
    }

    /// Replace the handler for `event`.
    pub fn set(&mut self, event: ShapeEvent, callback: Option<EventCallback<S>>) {
        *self.slot_mut(event) = callback;
    }

    fn slot(&self, event: ShapeEvent) -> &Option<EventCallback<S>> {
        match event {
            ShapeEvent::MouseOver => &self.on_mouseover,
            ShapeEvent::MouseOut => &self.on_mouseout,
            ShapeEvent::MouseMove => &self.on_mousemove,
            ShapeEvent::MouseDown => &self.on_mousedown,
            ShapeEvent::Click => &self.on_click,
        }
    }

    fn slot_mut(&mut self, event: ShapeEvent) -> &mut Option<EventCallback<S>> {
        match event {
            ShapeEvent::MouseOver => &mut self.on_mouseover,
            ShapeEvent::MouseOut => &mut self.on_mouseout,
            ShapeEvent::MouseMove => &mut self.on_mousemove,
            ShapeEvent::MouseDown => &mut self.on_mousedown,
            ShapeEvent::Click => &mut self.on_click,
        }
    }
}

impl<S: NativeShape> Default for EventHandlers<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: NativeShape> Clone for EventHandlers<S> {
    fn clone(&self) -> Self {
        Self {
            on_mouseover: self.on_mouseover.clone(),
            on_mouseout: self.on_mouseout.clone(),
            on_mousemove: self.on_mousemove.clone(),
            on_mousedown: self.on_mousedown.clone(),
            on_click: self.on_click.clone(),
        }
    }
}

impl<S: NativeShape> fmt::Debug for EventHandlers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for event in ShapeEvent::ALL {
            if self.get(event).is_some() {
                list.entry(&event);
            }
        }
        list.finish()
    }
}

/// Keeps one native subscription in step with one callback prop.
pub struct EventBinder<S: NativeShape> {
    event: ShapeEvent,
    active: Option<(EventCallback<S>, S::Listener)>,
}

impl<S: NativeShape> EventBinder<S> {
    pub fn new(event: ShapeEvent) -> Self {
        Self { event, active: None }
    }

    pub fn event(&self) -> ShapeEvent {
        self.event
    }

    pub fn is_bound(&self) -> bool {
        self.active.is_some()
    }

    /// Make the subscription on `target` match `callback`.
    ///
    /// Nothing happens while the callback identity is unchanged. A new
    /// identity removes the old listener before adding the new one. Returns
    /// whether the native subscriptions changed.
    pub fn bind(&mut self, target: &S, callback: Option<&EventCallback<S>>) -> bool {
        let unchanged = match (&self.active, callback) {
            (Some((current, _)), Some(next)) => current == next,
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        self.unbind(target);
        if let Some(callback) = callback {
            let handler_target = target.clone();
            let handler = callback.clone();
            let listener = target.add_listener(
                self.event,
                Box::new(move |event: &S::MouseEvent| handler.emit(&handler_target, event)),
            );
            log::trace!("subscribed {} listener", self.event);
            self.active = Some((callback.clone(), listener));
        }
        true
    }

    /// Remove the subscription, if any.
    pub fn unbind(&mut self, target: &S) {
        if let Some((_, listener)) = self.active.take() {
            target.remove_listener(self.event, listener);
            log::trace!("removed {} listener", self.event);
        }
    }
}

impl<S: NativeShape> fmt::Debug for EventBinder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBinder")
            .field("event", &self.event)
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessMouseEvent, HeadlessShape, NativeCall};
    use std::cell::Cell;

    fn shape() -> HeadlessShape {
        HeadlessShape::detached_for_tests()
    }

    #[test]
    fn test_event_names() {
        let names: Vec<_> = ShapeEvent::ALL.iter().map(ShapeEvent::name).collect();
        assert_eq!(names, vec!["mouseover", "mouseout", "mousemove", "mousedown", "click"]);
    }

    #[test]
    fn test_callback_identity() {
        let a = EventCallback::<HeadlessShape>::new(|_, _| {});
        let b = EventCallback::<HeadlessShape>::new(|_, _| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_bind_subscribes_once() {
        let target = shape();
        let mut binder = EventBinder::new(ShapeEvent::Click);
        let callback = EventCallback::<HeadlessShape>::new(|_, _| {});

        assert!(binder.bind(&target, Some(&callback)));
        assert!(!binder.bind(&target, Some(&callback.clone())));

        assert_eq!(target.listener_count(ShapeEvent::Click), 1);
        assert_eq!(target.count_calls(|c| matches!(c, NativeCall::AddListener(_))), 1);
    }

    #[test]
    fn test_replacing_callback_resubscribes() {
        let target = shape();
        let mut binder = EventBinder::new(ShapeEvent::Click);
        binder.bind(&target, Some(&EventCallback::<HeadlessShape>::new(|_, _| {})));
        target.clear_calls();

        binder.bind(&target, Some(&EventCallback::<HeadlessShape>::new(|_, _| {})));

        assert_eq!(
            target.calls(),
            vec![
                NativeCall::RemoveListener(ShapeEvent::Click),
                NativeCall::AddListener(ShapeEvent::Click),
            ]
        );
        assert_eq!(target.listener_count(ShapeEvent::Click), 1);
    }

    #[test]
    fn test_clearing_callback_unsubscribes() {
        let target = shape();
        let mut binder = EventBinder::new(ShapeEvent::MouseOut);
        binder.bind(&target, Some(&EventCallback::<HeadlessShape>::new(|_, _| {})));
        assert!(binder.bind(&target, None));
        assert!(!binder.is_bound());
        assert_eq!(target.listener_count(ShapeEvent::MouseOut), 0);
    }

    #[test]
    fn test_handler_receives_target_and_payload() {
        let target = shape();
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let expected = target.clone();
        let callback = EventCallback::<HeadlessShape>::new(move |shape: &HeadlessShape, event: &HeadlessMouseEvent| {
            assert!(shape.same_instance(&expected));
            assert_eq!(event.lat_lng.lat, 37.5);
            seen.set(seen.get() + 1);
        });

        let mut binder = EventBinder::new(ShapeEvent::MouseDown);
        binder.bind(&target, Some(&callback));
        target.emit(ShapeEvent::MouseDown, &HeadlessMouseEvent::at(37.5, 127.0));
        target.emit(ShapeEvent::Click, &HeadlessMouseEvent::at(37.5, 127.0));

        assert_eq!(hits.get(), 1);
        binder.unbind(&target);
    }

    #[test]
    fn test_handlers_get_set() {
        let mut handlers = EventHandlers::<HeadlessShape>::new();
        assert!(handlers.get(ShapeEvent::Click).is_none());
        handlers.set(ShapeEvent::Click, Some(EventCallback::<HeadlessShape>::new(|_, _| {})));
        assert!(handlers.on_click.is_some());
        assert_eq!(format!("{:?}", handlers), "[Click]");
    }
}
