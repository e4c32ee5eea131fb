//! In-memory map backend.
//!
//! Implements the native traits without any SDK behind them. Every call a
//! binding makes is recorded in order, listeners can be fired by hand, and
//! maps track which shapes sit on them. Used by the tests and by hosts that
//! drive bindings without a browser.

use crate::coords::Coordinate;
use crate::event::ShapeEvent;
use crate::native::{CircleInit, EllipseInit, NativeCircle, NativeEllipse, NativeShape};
use crate::shapes::ShapeOptions;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

thread_local! {
    static CREATED: Cell<usize> = const { Cell::new(0) };
}

/// A map surface that shapes attach to.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    id: Uuid,
    shapes: Rc<RefCell<Vec<Uuid>>>,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            shapes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Number of shapes currently on this map.
    pub fn shape_count(&self) -> usize {
        self.shapes.borrow().len()
    }

    /// Check if `shape` is currently on this map.
    pub fn contains(&self, shape: &HeadlessShape) -> bool {
        self.shapes.borrow().contains(&shape.id())
    }
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for HeadlessMap {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Mouse event payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessMouseEvent {
    /// Where the pointer was.
    pub lat_lng: Coordinate,
}

impl HeadlessMouseEvent {
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat_lng: Coordinate::new(lat, lng),
        }
    }
}

/// Which native constructor built a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessKind {
    Ellipse,
    Circle,
}

/// One native call, as recorded by [`HeadlessShape`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeCall {
    Create(HeadlessKind),
    /// Map id, or `None` when taken off the map.
    SetMap(Option<Uuid>),
    SetPosition(Coordinate),
    /// Ellipse radii.
    SetRadii(f64, f64),
    /// Circle radius.
    SetRadius(f64),
    SetZIndex(i32),
    SetOptions(ShapeOptions),
    AddListener(ShapeEvent),
    RemoveListener(ShapeEvent),
}

/// Current native-side values of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeState {
    pub kind: HeadlessKind,
    pub center: Coordinate,
    /// `(rx, ry)`; both equal the radius for circles.
    pub radii: (f64, f64),
    pub options: ShapeOptions,
    pub z_index: Option<i32>,
    pub map: Option<HeadlessMap>,
}

/// Subscription token.
#[derive(Debug)]
pub struct HeadlessListener {
    id: u64,
}

type Handler = Rc<dyn Fn(&HeadlessMouseEvent)>;

struct Inner {
    id: Uuid,
    state: ShapeState,
    calls: Vec<NativeCall>,
    listeners: Vec<(u64, ShapeEvent, Handler)>,
    next_listener: u64,
}

/// A recorded native shape. Clones share the same instance.
#[derive(Clone)]
pub struct HeadlessShape {
    inner: Rc<RefCell<Inner>>,
}

impl HeadlessShape {
    fn build(state: ShapeState) -> Self {
        CREATED.with(|created| created.set(created.get() + 1));
        let kind = state.kind;
        Self {
            inner: Rc::new(RefCell::new(Inner {
                id: Uuid::new_v4(),
                state,
                calls: vec![NativeCall::Create(kind)],
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// Number of shapes constructed on the current thread.
    pub fn created_on_this_thread() -> usize {
        CREATED.with(Cell::get)
    }

    pub fn id(&self) -> Uuid {
        self.inner.borrow().id
    }

    /// Check if two handles refer to the same native object.
    pub fn same_instance(&self, other: &HeadlessShape) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Snapshot of the native-side values.
    pub fn state(&self) -> ShapeState {
        self.inner.borrow().state.clone()
    }

    /// Every native call so far, oldest first.
    pub fn calls(&self) -> Vec<NativeCall> {
        self.inner.borrow().calls.clone()
    }

    /// Count recorded calls matching `pred`.
    pub fn count_calls(&self, pred: impl Fn(&NativeCall) -> bool) -> usize {
        self.inner.borrow().calls.iter().filter(|call| pred(call)).count()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    /// Number of live listeners for `event`.
    pub fn listener_count(&self, event: ShapeEvent) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, e, _)| *e == event)
            .count()
    }

    /// Fire `event` on every listener subscribed to it.
    pub fn emit(&self, event: ShapeEvent, payload: &HeadlessMouseEvent) {
        let handlers: Vec<Handler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(_, _, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(payload);
        }
    }

    fn record(&self, call: NativeCall) {
        self.inner.borrow_mut().calls.push(call);
    }

    #[cfg(test)]
    pub(crate) fn detached_for_tests() -> Self {
        <Self as NativeEllipse>::create(EllipseInit {
            center: Coordinate::new(0.0, 0.0),
            rx: 1.0,
            ry: 1.0,
            options: ShapeOptions::default(),
            z_index: None,
        })
    }
}

impl fmt::Debug for HeadlessShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("HeadlessShape")
            .field("id", &inner.id)
            .field("kind", &inner.state.kind)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl NativeShape for HeadlessShape {
    type Map = HeadlessMap;
    type LatLng = Coordinate;
    type MouseEvent = HeadlessMouseEvent;
    type Listener = HeadlessListener;

    fn lat_lng(coord: Coordinate) -> Coordinate {
        coord
    }

    fn set_map(&self, map: Option<&HeadlessMap>) {
        let id = self.id();
        let previous = self.inner.borrow_mut().state.map.take();
        if let Some(previous) = previous {
            previous.shapes.borrow_mut().retain(|shape| *shape != id);
        }
        if let Some(map) = map {
            map.shapes.borrow_mut().push(id);
            self.inner.borrow_mut().state.map = Some(map.clone());
        }
        self.record(NativeCall::SetMap(map.map(HeadlessMap::id)));
    }

    fn add_listener(
        &self,
        event: ShapeEvent,
        handler: Box<dyn Fn(&HeadlessMouseEvent)>,
    ) -> HeadlessListener {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((id, event, Rc::from(handler)));
        inner.calls.push(NativeCall::AddListener(event));
        HeadlessListener { id }
    }

    fn remove_listener(&self, event: ShapeEvent, listener: HeadlessListener) {
        // Handlers may own a clone of this shape; drop them outside the borrow.
        let removed: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut inner.listeners)
                .into_iter()
                .partition(|(id, _, _)| *id == listener.id);
            inner.listeners = kept;
            inner.calls.push(NativeCall::RemoveListener(event));
            removed
        };
        drop(removed);
    }

    fn set_position(&self, position: &Coordinate) {
        self.inner.borrow_mut().state.center = *position;
        self.record(NativeCall::SetPosition(*position));
    }

    fn set_options(&self, options: &ShapeOptions) {
        self.inner.borrow_mut().state.options = options.clone();
        self.record(NativeCall::SetOptions(options.clone()));
    }

    fn set_z_index(&self, z_index: i32) {
        self.inner.borrow_mut().state.z_index = Some(z_index);
        self.record(NativeCall::SetZIndex(z_index));
    }
}

impl NativeEllipse for HeadlessShape {
    fn create(init: EllipseInit<Coordinate>) -> Self {
        Self::build(ShapeState {
            kind: HeadlessKind::Ellipse,
            center: init.center,
            radii: (init.rx, init.ry),
            options: init.options,
            z_index: init.z_index,
            map: None,
        })
    }

    fn set_radius(&self, rx: f64, ry: f64) {
        self.inner.borrow_mut().state.radii = (rx, ry);
        self.record(NativeCall::SetRadii(rx, ry));
    }
}

impl NativeCircle for HeadlessShape {
    fn create(init: CircleInit<Coordinate>) -> Self {
        Self::build(ShapeState {
            kind: HeadlessKind::Circle,
            center: init.center,
            radii: (init.radius, init.radius),
            options: init.options,
            z_index: init.z_index,
            map: None,
        })
    }

    fn set_radius(&self, radius: f64) {
        self.inner.borrow_mut().state.radii = (radius, radius);
        self.record(NativeCall::SetRadius(radius));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_map_moves_between_maps() {
        let shape = HeadlessShape::detached_for_tests();
        let first = HeadlessMap::new();
        let second = HeadlessMap::new();

        shape.set_map(Some(&first));
        assert!(first.contains(&shape));

        shape.set_map(Some(&second));
        assert!(!first.contains(&shape));
        assert!(second.contains(&shape));

        shape.set_map(None);
        assert_eq!(second.shape_count(), 0);
        assert_eq!(shape.state().map, None);
    }

    #[test]
    fn test_remove_listener_only_removes_token() {
        let shape = HeadlessShape::detached_for_tests();
        let a = shape.add_listener(ShapeEvent::Click, Box::new(|_: &HeadlessMouseEvent| {}));
        let _b = shape.add_listener(ShapeEvent::Click, Box::new(|_: &HeadlessMouseEvent| {}));

        shape.remove_listener(ShapeEvent::Click, a);

        assert_eq!(shape.listener_count(ShapeEvent::Click), 1);
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let shape = HeadlessShape::detached_for_tests();
        shape.set_z_index(4);
        <HeadlessShape as NativeEllipse>::set_radius(&shape, 5.0, 6.0);
        assert_eq!(
            shape.calls(),
            vec![
                NativeCall::Create(HeadlessKind::Ellipse),
                NativeCall::SetZIndex(4),
                NativeCall::SetRadii(5.0, 6.0),
            ]
        );
        assert_eq!(shape.state().radii, (5.0, 6.0));
    }

    #[test]
    fn test_creation_counter() {
        let before = HeadlessShape::created_on_this_thread();
        let _shape = HeadlessShape::detached_for_tests();
        assert_eq!(HeadlessShape::created_on_this_thread(), before + 1);
    }
}
