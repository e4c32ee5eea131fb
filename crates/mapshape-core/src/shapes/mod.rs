//! Shape props and the style options they share.

mod circle;
mod ellipse;

pub use circle::{Circle, CircleProps};
pub use ellipse::{Ellipse, EllipseProps};

use crate::coords::Coordinate;
use crate::event::{CreateCallback, EventHandlers};
use crate::native::NativeShape;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while reading shape options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid shape options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown stroke style: {0}")]
    UnknownStrokeStyle(String),
}

/// Stroke dash pattern, named by the native keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    #[default]
    Solid,
    ShortDash,
    ShortDot,
    ShortDashDot,
    ShortDashDotDot,
    Dot,
    Dash,
    DashDot,
    LongDash,
    LongDashDot,
    LongDashDotDot,
}

impl StrokeStyle {
    pub const ALL: [StrokeStyle; 11] = [
        StrokeStyle::Solid,
        StrokeStyle::ShortDash,
        StrokeStyle::ShortDot,
        StrokeStyle::ShortDashDot,
        StrokeStyle::ShortDashDotDot,
        StrokeStyle::Dot,
        StrokeStyle::Dash,
        StrokeStyle::DashDot,
        StrokeStyle::LongDash,
        StrokeStyle::LongDashDot,
        StrokeStyle::LongDashDotDot,
    ];

    /// The native keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeStyle::Solid => "solid",
            StrokeStyle::ShortDash => "shortdash",
            StrokeStyle::ShortDot => "shortdot",
            StrokeStyle::ShortDashDot => "shortdashdot",
            StrokeStyle::ShortDashDotDot => "shortdashdotdot",
            StrokeStyle::Dot => "dot",
            StrokeStyle::Dash => "dash",
            StrokeStyle::DashDot => "dashdot",
            StrokeStyle::LongDash => "longdash",
            StrokeStyle::LongDashDot => "longdashdot",
            StrokeStyle::LongDashDotDot => "longdashdotdot",
        }
    }
}

impl FromStr for StrokeStyle {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrokeStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| OptionsError::UnknownStrokeStyle(s.to_string()))
    }
}

impl fmt::Display for StrokeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual properties pushed to the native shape as one bundle.
///
/// Values are forwarded as given; the native library validates them.
/// Missing fields in JSON fall back to the library defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeOptions {
    /// `#xxxxxx` fill color.
    pub fill_color: String,
    /// Fill opacity (0.0 - 1.0).
    pub fill_opacity: f64,
    /// `#xxxxxx` stroke color.
    pub stroke_color: String,
    /// Stroke opacity (0.0 - 1.0).
    pub stroke_opacity: f64,
    pub stroke_style: StrokeStyle,
    /// Stroke width in pixels.
    pub stroke_weight: f64,
}

pub const DEFAULT_COLOR: &str = "#F10000";

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_COLOR.to_string(),
            fill_opacity: 0.0,
            stroke_color: DEFAULT_COLOR.to_string(),
            stroke_opacity: 0.6,
            stroke_style: StrokeStyle::Solid,
            stroke_weight: 3.0,
        }
    }
}

impl ShapeOptions {
    /// Read options from JSON, e.g. a style preset.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Props every shape binding carries besides its geometry.
pub struct CommonProps<S: NativeShape> {
    /// Anchor coordinate.
    pub center: Coordinate,
    pub options: ShapeOptions,
    /// Stacking order. `None` leaves the native value alone.
    pub z_index: Option<i32>,
    pub events: EventHandlers<S>,
    /// Called with the native instance once it exists.
    pub on_create: Option<CreateCallback<S>>,
}

impl<S: NativeShape> CommonProps<S> {
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            options: ShapeOptions::default(),
            z_index: None,
            events: EventHandlers::new(),
            on_create: None,
        }
    }
}

impl<S: NativeShape> Clone for CommonProps<S> {
    fn clone(&self) -> Self {
        Self {
            center: self.center,
            options: self.options.clone(),
            z_index: self.z_index,
            events: self.events.clone(),
            on_create: self.on_create.clone(),
        }
    }
}

impl<S: NativeShape> fmt::Debug for CommonProps<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommonProps")
            .field("center", &self.center)
            .field("options", &self.options)
            .field("z_index", &self.z_index)
            .field("events", &self.events)
            .field("on_create", &self.on_create.is_some())
            .finish()
    }
}

/// Builder setters shared by every props type that embeds [`CommonProps`].
macro_rules! common_prop_setters {
    () => {
        /// Move the shape.
        pub fn center(mut self, center: $crate::coords::Coordinate) -> Self {
            self.common.center = center;
            self
        }

        /// Replace the whole style bundle.
        pub fn options(mut self, options: $crate::shapes::ShapeOptions) -> Self {
            self.common.options = options;
            self
        }

        pub fn fill_color(mut self, color: impl Into<String>) -> Self {
            self.common.options.fill_color = color.into();
            self
        }

        pub fn fill_opacity(mut self, opacity: f64) -> Self {
            self.common.options.fill_opacity = opacity;
            self
        }

        pub fn stroke_color(mut self, color: impl Into<String>) -> Self {
            self.common.options.stroke_color = color.into();
            self
        }

        pub fn stroke_opacity(mut self, opacity: f64) -> Self {
            self.common.options.stroke_opacity = opacity;
            self
        }

        pub fn stroke_style(mut self, style: $crate::shapes::StrokeStyle) -> Self {
            self.common.options.stroke_style = style;
            self
        }

        pub fn stroke_weight(mut self, weight: f64) -> Self {
            self.common.options.stroke_weight = weight;
            self
        }

        pub fn z_index(mut self, z_index: Option<i32>) -> Self {
            self.common.z_index = z_index;
            self
        }

        /// Set or clear the handler for one mouse event.
        pub fn on(
            mut self,
            event: $crate::event::ShapeEvent,
            callback: Option<$crate::event::EventCallback<S>>,
        ) -> Self {
            self.common.events.set(event, callback);
            self
        }

        pub fn on_click(self, callback: $crate::event::EventCallback<S>) -> Self {
            self.on($crate::event::ShapeEvent::Click, Some(callback))
        }

        pub fn on_create(mut self, callback: Option<$crate::event::CreateCallback<S>>) -> Self {
            self.common.on_create = callback;
            self
        }
    };
}

pub(crate) use common_prop_setters;
