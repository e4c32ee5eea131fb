//! Capabilities a map SDK must provide for its overlay objects.
//!
//! Native handles are cheap to clone and every clone refers to the same
//! underlying object, so all methods take `&self`.

use crate::coords::Coordinate;
use crate::event::ShapeEvent;
use crate::shapes::ShapeOptions;

/// Operations shared by every native overlay shape.
pub trait NativeShape: Clone + 'static {
    /// The map surface this shape can be placed on. Equality is identity.
    type Map: Clone + PartialEq + 'static;
    /// Native point object built from a [`Coordinate`].
    type LatLng: Clone + 'static;
    /// Payload delivered with mouse events.
    type MouseEvent: 'static;
    /// Token returned by [`NativeShape::add_listener`], needed to remove it.
    type Listener: 'static;

    /// Build a native point object.
    fn lat_lng(coord: Coordinate) -> Self::LatLng;

    /// Place the shape on `map`, or take it off the map with `None`.
    fn set_map(&self, map: Option<&Self::Map>);

    /// Subscribe `handler` to `event` on this shape.
    fn add_listener(
        &self,
        event: ShapeEvent,
        handler: Box<dyn Fn(&Self::MouseEvent)>,
    ) -> Self::Listener;

    /// Remove a subscription made by [`NativeShape::add_listener`].
    fn remove_listener(&self, event: ShapeEvent, listener: Self::Listener);

    /// Move the shape's anchor point.
    fn set_position(&self, position: &Self::LatLng);

    /// Push the style bundle in one call.
    fn set_options(&self, options: &ShapeOptions);

    /// Set the stacking order.
    fn set_z_index(&self, z_index: i32);
}

/// Construction arguments for a native ellipse.
#[derive(Debug, Clone)]
pub struct EllipseInit<L> {
    pub center: L,
    pub rx: f64,
    pub ry: f64,
    pub options: ShapeOptions,
    pub z_index: Option<i32>,
}

/// A native ellipse.
pub trait NativeEllipse: NativeShape {
    fn create(init: EllipseInit<Self::LatLng>) -> Self;
    fn set_radius(&self, rx: f64, ry: f64);
}

/// Construction arguments for a native circle.
#[derive(Debug, Clone)]
pub struct CircleInit<L> {
    pub center: L,
    pub radius: f64,
    pub options: ShapeOptions,
    pub z_index: Option<i32>,
}

/// A native circle.
pub trait NativeCircle: NativeShape {
    fn create(init: CircleInit<Self::LatLng>) -> Self;
    fn set_radius(&self, radius: f64);
}
