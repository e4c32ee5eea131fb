//! Ellipse shape binding.

use super::{CommonProps, common_prop_setters};
use crate::binding::{ShapeBinding, ShapeProps};
use crate::coords::Coordinate;
use crate::native::{EllipseInit, NativeEllipse};

/// Props of an ellipse drawn on the map.
pub struct EllipseProps<S: NativeEllipse> {
    pub common: CommonProps<S>,
    /// Horizontal radius in meters.
    pub rx: f64,
    /// Vertical radius in meters.
    pub ry: f64,
}

impl<S: NativeEllipse> EllipseProps<S> {
    /// Create props with the default style and no handlers.
    pub fn new(center: Coordinate, rx: f64, ry: f64) -> Self {
        Self {
            common: CommonProps::new(center),
            rx,
            ry,
        }
    }

    /// Change both radii.
    pub fn radii(mut self, rx: f64, ry: f64) -> Self {
        self.rx = rx;
        self.ry = ry;
        self
    }

    common_prop_setters!();
}

impl<S: NativeEllipse> Clone for EllipseProps<S> {
    fn clone(&self) -> Self {
        Self {
            common: self.common.clone(),
            rx: self.rx,
            ry: self.ry,
        }
    }
}

impl<S: NativeEllipse> std::fmt::Debug for EllipseProps<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EllipseProps")
            .field("common", &self.common)
            .field("rx", &self.rx)
            .field("ry", &self.ry)
            .finish()
    }
}

impl<S: NativeEllipse> ShapeProps for EllipseProps<S> {
    type Native = S;
    type Geometry = (f64, f64);

    const NAME: &'static str = "Ellipse";

    fn common(&self) -> &CommonProps<S> {
        &self.common
    }

    fn geometry(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }

    fn construct(&self, center: S::LatLng) -> S {
        S::create(EllipseInit {
            center,
            rx: self.rx,
            ry: self.ry,
            options: self.common.options.clone(),
            z_index: self.common.z_index,
        })
    }

    fn apply_geometry(native: &S, &(rx, ry): &(f64, f64)) {
        native.set_radius(rx, ry);
    }
}

/// A mounted ellipse.
pub type Ellipse<S> = ShapeBinding<EllipseProps<S>>;
