//! Kakao Maps backend for mapshape.
//!
//! Binds the `kakao.maps` JavaScript SDK to the native shape traits so
//! `mapshape_core` bindings can drive real overlays in the browser. The SDK
//! bindings only exist on `wasm32`; the option encoding is shared.

mod options;

pub use options::InitOptions;

#[cfg(target_arch = "wasm32")]
mod sdk;
#[cfg(target_arch = "wasm32")]
mod shapes;

#[cfg(target_arch = "wasm32")]
pub use sdk::{Circle, Ellipse, LatLng, Map, MouseEvent};
#[cfg(target_arch = "wasm32")]
pub use shapes::{KakaoListener, init};

/// A mounted ellipse on a Kakao map.
#[cfg(target_arch = "wasm32")]
pub type KakaoEllipse = mapshape_core::Ellipse<Ellipse>;

/// Props for [`KakaoEllipse`].
#[cfg(target_arch = "wasm32")]
pub type KakaoEllipseProps = mapshape_core::EllipseProps<Ellipse>;

/// A mounted circle on a Kakao map.
#[cfg(target_arch = "wasm32")]
pub type KakaoCircle = mapshape_core::Circle<Circle>;

/// Props for [`KakaoCircle`].
#[cfg(target_arch = "wasm32")]
pub type KakaoCircleProps = mapshape_core::CircleProps<Circle>;
