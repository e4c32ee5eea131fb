//! Circle shape binding.

use super::{CommonProps, common_prop_setters};
use crate::binding::{ShapeBinding, ShapeProps};
use crate::coords::Coordinate;
use crate::native::{CircleInit, NativeCircle};

/// Props of a circle drawn on the map.
pub struct CircleProps<S: NativeCircle> {
    pub common: CommonProps<S>,
    /// Radius in meters.
    pub radius: f64,
}

impl<S: NativeCircle> CircleProps<S> {
    pub fn new(center: Coordinate, radius: f64) -> Self {
        Self {
            common: CommonProps::new(center),
            radius,
        }
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    common_prop_setters!();
}

impl<S: NativeCircle> Clone for CircleProps<S> {
    fn clone(&self) -> Self {
        Self {
            common: self.common.clone(),
            radius: self.radius,
        }
    }
}

impl<S: NativeCircle> std::fmt::Debug for CircleProps<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircleProps")
            .field("common", &self.common)
            .field("radius", &self.radius)
            .finish()
    }
}

impl<S: NativeCircle> ShapeProps for CircleProps<S> {
    type Native = S;
    type Geometry = f64;

    const NAME: &'static str = "Circle";

    fn common(&self) -> &CommonProps<S> {
        &self.common
    }

    fn geometry(&self) -> f64 {
        self.radius
    }

    fn construct(&self, center: S::LatLng) -> S {
        S::create(CircleInit {
            center,
            radius: self.radius,
            options: self.common.options.clone(),
            z_index: self.common.z_index,
        })
    }

    fn apply_geometry(native: &S, radius: &f64) {
        native.set_radius(*radius);
    }
}

/// A mounted circle.
pub type Circle<S> = ShapeBinding<CircleProps<S>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MapContext;
    use crate::error::BindingError;
    use crate::event::{EventCallback, ShapeEvent};
    use crate::headless::{HeadlessKind, HeadlessMap, HeadlessMouseEvent, HeadlessShape, NativeCall};
    use crate::shapes::ShapeOptions;
    use std::cell::Cell;
    use std::rc::Rc;

    fn props() -> CircleProps<HeadlessShape> {
        CircleProps::new(Coordinate::new(37.5665, 126.978), 250.0)
    }

    #[test]
    fn test_missing_context_names_circle() {
        let err = Circle::mount(&props(), &MapContext::empty()).unwrap_err();
        assert_eq!(err.to_string(), "Circle Component must exist inside Map Component!");
        assert_eq!(err, BindingError::ContextMissing { component: "Circle" });
    }

    #[test]
    fn test_mount_sequence() {
        let ctx = MapContext::new(HeadlessMap::new());
        let circle = Circle::mount(&props(), &ctx).unwrap();
        let map_id = ctx.map().unwrap().id();

        assert_eq!(
            circle.instance().calls(),
            vec![
                NativeCall::Create(HeadlessKind::Circle),
                NativeCall::SetMap(Some(map_id)),
                NativeCall::SetPosition(Coordinate::new(37.5665, 126.978)),
                NativeCall::SetRadius(250.0),
                NativeCall::SetOptions(ShapeOptions::default()),
            ]
        );
    }

    #[test]
    fn test_radius_and_style_updates() {
        let ctx = MapContext::new(HeadlessMap::new());
        let mut circle = Circle::mount(&props(), &ctx).unwrap();
        circle.instance().clear_calls();

        circle.update(&props().radius(300.0), &ctx).unwrap();
        circle
            .update(&props().radius(300.0).stroke_opacity(1.0), &ctx)
            .unwrap();

        let mut expected_options = ShapeOptions::default();
        expected_options.stroke_opacity = 1.0;
        assert_eq!(
            circle.instance().calls(),
            vec![
                NativeCall::SetRadius(300.0),
                NativeCall::SetOptions(expected_options),
            ]
        );
        assert_eq!(circle.instance().state().radii, (300.0, 300.0));
    }

    #[test]
    fn test_mouseover_forwarding() {
        let hovered = Rc::new(Cell::new(false));
        let flag = Rc::clone(&hovered);
        let p = props().on(
            ShapeEvent::MouseOver,
            Some(EventCallback::<HeadlessShape>::new(move |_, event| {
                assert_eq!(event.lat_lng, Coordinate::new(37.0, 127.0));
                flag.set(true)
            })),
        );
        let ctx = MapContext::new(HeadlessMap::new());
        let mut circle = Circle::mount(&p, &ctx).unwrap();

        circle
            .instance()
            .emit(ShapeEvent::MouseOver, &HeadlessMouseEvent::at(37.0, 127.0));
        assert!(hovered.get());

        circle.unmount();
        assert_eq!(circle.instance().listener_count(ShapeEvent::MouseOver), 0);
    }
}
