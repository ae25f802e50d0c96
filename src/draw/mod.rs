//! Defines [`DrawScene`], the interface between the curve editor and whatever shows it.
//!
//! A renderer receives a [`Scene`] borrowed from the model, so it always sees the state
//! after an edit has run to completion.
use std::fmt;

use nalgebra::{Matrix4, Vector2};

use crate::camera::Camera;
use crate::model::CurveModel;

/// Read-only snapshot of everything a frame shows.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Control points, drawn as dots
    pub control_points: &'a [Vector2<f64>],
    /// Interpolation targets, drawn as dots in a second color
    pub interpolation_targets: &'a [Vector2<f64>],
    /// Refined curve, drawn as a connected polyline
    pub curve_points: &'a [Vector2<f64>],
    /// World to clip space transform
    pub view_projection: Matrix4<f64>,
}

impl<'a> Scene<'a> {
    /// Takes a snapshot of `model` as seen through `camera`
    pub fn new(model: &'a CurveModel, camera: &Camera) -> Self {
        Scene {
            control_points: model.control_points(),
            interpolation_targets: model.interpolation_targets(),
            curve_points: model.curve_points(),
            view_projection: camera.view_projection(),
        }
    }

    /// The curve is only shown once there are two control points to connect.
    pub fn shows_curve(&self) -> bool {
        self.control_points.len() >= 2 && !self.curve_points.is_empty()
    }
}

/// Color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    /// Channels scaled to bytes
    pub fn to_bytes(self) -> [u8; 3] {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.0), byte(self.1), byte(self.2)]
    }
}

impl fmt::Display for Rgb {
    /// Formats as `#rrggbb`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Colors and sizes used to draw a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Control point color
    pub control_color: Rgb,
    /// Interpolation target color
    pub interpolation_color: Rgb,
    /// Curve color
    pub curve_color: Rgb,
    /// Clear color
    pub background: Rgb,
    /// Diameter of a point in pixels
    pub point_size: f64,
    /// Width of the curve in pixels
    pub line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            control_color: Rgb(1.0, 0.0, 0.0),
            interpolation_color: Rgb(0.0, 0.5, 0.0),
            curve_color: Rgb(1.0, 1.0, 0.0),
            background: Rgb(0.0, 0.0, 0.0),
            point_size: 6.0,
            line_width: 2.0,
        }
    }
}

/// Draw curve scenes on different "drawing contexts".
///
/// Use different crate features to enable contexts:
/// - `draw-svg` to render a frame as an svg document
pub trait DrawScene {
    /// Replace whatever the context shows with `scene`.
    fn draw_scene(&mut self, scene: &Scene<'_>, style: &Style);
}

#[cfg(feature = "draw-svg")]
pub mod svg;
