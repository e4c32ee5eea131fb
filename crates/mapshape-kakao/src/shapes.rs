//! Native shape traits for the Kakao overlay types.

use crate::options::InitOptions;
use crate::sdk::{self, Circle, Ellipse, LatLng, Map, MouseEvent};
use mapshape_core::{
    CircleInit, Coordinate, EllipseInit, NativeCircle, NativeEllipse, NativeShape, ShapeEvent,
    ShapeOptions,
};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Install the panic hook and route `log` output to the browser console.
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }
}

/// A live `kakao.maps.event` subscription. Owns the JS closure.
pub struct KakaoListener {
    handler: Closure<dyn Fn(JsValue)>,
}

// Flattened option structs serialize as maps; keep them plain JS objects.
fn to_js(value: &impl Serialize) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or_else(|e| {
        log::error!("Failed to encode shape options: {}", e);
        js_sys::Object::new().into()
    })
}

fn init_object(options: InitOptions<'_>, center: &LatLng) -> JsValue {
    let object = to_js(&options);
    if let Err(e) = js_sys::Reflect::set(&object, &JsValue::from_str("center"), center) {
        log::error!("Failed to set shape center: {:?}", e);
    }
    object
}

fn listen(
    target: &JsValue,
    event: ShapeEvent,
    handler: Box<dyn Fn(&MouseEvent)>,
) -> KakaoListener {
    let handler = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
        handler(payload.unchecked_ref::<MouseEvent>())
    });
    sdk::add_listener(target, event.name(), handler.as_ref().unchecked_ref());
    KakaoListener { handler }
}

fn unlisten(target: &JsValue, event: ShapeEvent, listener: KakaoListener) {
    sdk::remove_listener(target, event.name(), listener.handler.as_ref().unchecked_ref());
}

fn map_value(map: Option<&Map>) -> JsValue {
    map.map_or(JsValue::NULL, |map| map.clone().into())
}

macro_rules! impl_native_shape {
    ($shape:ty) => {
        impl NativeShape for $shape {
            type Map = Map;
            type LatLng = LatLng;
            type MouseEvent = MouseEvent;
            type Listener = KakaoListener;

            fn lat_lng(coord: Coordinate) -> LatLng {
                LatLng::new(coord.lat, coord.lng)
            }

            fn set_map(&self, map: Option<&Map>) {
                <$shape>::set_map(self, &map_value(map));
            }

            fn add_listener(
                &self,
                event: ShapeEvent,
                handler: Box<dyn Fn(&MouseEvent)>,
            ) -> KakaoListener {
                listen(self.as_ref(), event, handler)
            }

            fn remove_listener(&self, event: ShapeEvent, listener: KakaoListener) {
                unlisten(self.as_ref(), event, listener);
            }

            fn set_position(&self, position: &LatLng) {
                <$shape>::set_position(self, position);
            }

            fn set_options(&self, options: &ShapeOptions) {
                <$shape>::set_options(self, &to_js(options));
            }

            fn set_z_index(&self, z_index: i32) {
                <$shape>::set_z_index(self, z_index);
            }
        }
    };
}

impl_native_shape!(Ellipse);
impl_native_shape!(Circle);

impl NativeEllipse for Ellipse {
    fn create(init: EllipseInit<LatLng>) -> Self {
        Ellipse::new(&init_object(InitOptions::ellipse(&init), &init.center))
    }

    fn set_radius(&self, rx: f64, ry: f64) {
        Ellipse::set_radius(self, rx, ry);
    }
}

impl NativeCircle for Circle {
    fn create(init: CircleInit<LatLng>) -> Self {
        Circle::new(&init_object(InitOptions::circle(&init), &init.center))
    }

    fn set_radius(&self, radius: f64) {
        Circle::set_radius(self, radius);
    }
}
