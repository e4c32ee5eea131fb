//! Raw `kakao.maps` imports.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = ["kakao", "maps"])]
extern "C" {
    /// `kakao.maps.Map`, created and owned by the host page.
    #[derive(Debug, Clone, PartialEq)]
    pub type Map;

    /// `kakao.maps.LatLng`.
    #[derive(Debug, Clone)]
    pub type LatLng;

    #[wasm_bindgen(constructor)]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method, js_name = getLat)]
    pub fn get_lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, js_name = getLng)]
    pub fn get_lng(this: &LatLng) -> f64;

    /// `kakao.maps.Ellipse`.
    #[derive(Debug, Clone)]
    pub type Ellipse;

    #[wasm_bindgen(constructor)]
    pub(crate) fn new(options: &JsValue) -> Ellipse;

    #[wasm_bindgen(method, js_name = setMap)]
    pub(crate) fn set_map(this: &Ellipse, map: &JsValue);

    #[wasm_bindgen(method, js_name = setPosition)]
    pub(crate) fn set_position(this: &Ellipse, position: &LatLng);

    #[wasm_bindgen(method, js_name = setRadius)]
    pub(crate) fn set_radius(this: &Ellipse, rx: f64, ry: f64);

    #[wasm_bindgen(method, js_name = setZIndex)]
    pub(crate) fn set_z_index(this: &Ellipse, z_index: i32);

    #[wasm_bindgen(method, js_name = setOptions)]
    pub(crate) fn set_options(this: &Ellipse, options: &JsValue);

    /// `kakao.maps.Circle`.
    #[derive(Debug, Clone)]
    pub type Circle;

    #[wasm_bindgen(constructor)]
    pub(crate) fn new(options: &JsValue) -> Circle;

    #[wasm_bindgen(method, js_name = setMap)]
    pub(crate) fn set_map(this: &Circle, map: &JsValue);

    #[wasm_bindgen(method, js_name = setPosition)]
    pub(crate) fn set_position(this: &Circle, position: &LatLng);

    #[wasm_bindgen(method, js_name = setRadius)]
    pub(crate) fn set_radius(this: &Circle, radius: f64);

    #[wasm_bindgen(method, js_name = setZIndex)]
    pub(crate) fn set_z_index(this: &Circle, z_index: i32);

    #[wasm_bindgen(method, js_name = setOptions)]
    pub(crate) fn set_options(this: &Circle, options: &JsValue);
}

#[wasm_bindgen(js_namespace = ["kakao", "maps", "event"])]
extern "C" {
    /// Payload of shape mouse events.
    #[derive(Debug, Clone)]
    pub type MouseEvent;

    #[wasm_bindgen(method, getter = latLng)]
    pub fn lat_lng(this: &MouseEvent) -> LatLng;

    #[wasm_bindgen(js_name = addListener)]
    pub(crate) fn add_listener(target: &JsValue, kind: &str, handler: &js_sys::Function);

    #[wasm_bindgen(js_name = removeListener)]
    pub(crate) fn remove_listener(target: &JsValue, kind: &str, handler: &js_sys::Function);
}
