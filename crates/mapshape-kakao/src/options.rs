//! Construction options in the shape the SDK constructors expect.

use mapshape_core::{CircleInit, EllipseInit, ShapeOptions};
use serde::Serialize;

/// Everything a `kakao.maps.Ellipse` / `kakao.maps.Circle` constructor takes
/// except `center`, which is a native `LatLng` and is set separately.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions<'a> {
    #[serde(flatten)]
    pub style: &'a ShapeOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ry: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl<'a> InitOptions<'a> {
    pub fn ellipse<L>(init: &'a EllipseInit<L>) -> Self {
        Self {
            style: &init.options,
            rx: Some(init.rx),
            ry: Some(init.ry),
            radius: None,
            z_index: init.z_index,
        }
    }

    pub fn circle<L>(init: &'a CircleInit<L>) -> Self {
        Self {
            style: &init.options,
            rx: None,
            ry: None,
            radius: Some(init.radius),
            z_index: init.z_index,
        }
    }
}
