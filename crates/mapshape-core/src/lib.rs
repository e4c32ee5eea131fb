//! mapshape Core Library
//!
//! Declarative bindings between value-typed shape props and the imperative
//! overlay objects of a map SDK. A binding constructs its native object once,
//! attaches it to the enclosing map, pushes only the props that changed on each
//! render, forwards native mouse events, and detaches everything on unmount.

pub mod binding;
pub mod context;
pub mod coords;
pub mod effect;
pub mod error;
pub mod event;
pub mod headless;
pub mod lifecycle;
pub mod native;
pub mod shapes;

pub use binding::{ShapeBinding, ShapeProps};
pub use context::MapContext;
pub use coords::{Coordinate, Memo};
pub use effect::SetEffect;
pub use error::{BindingError, BindingResult};
pub use event::{CreateCallback, EventBinder, EventCallback, EventHandlers, ShapeEvent};
pub use headless::{HeadlessKind, HeadlessMap, HeadlessMouseEvent, HeadlessShape, NativeCall, ShapeState};
pub use lifecycle::Lifecycle;
pub use native::{CircleInit, EllipseInit, NativeCircle, NativeEllipse, NativeShape};
pub use shapes::{
    Circle, CircleProps, CommonProps, Ellipse, EllipseProps, OptionsError, ShapeOptions, StrokeStyle,
};
