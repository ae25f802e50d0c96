//! Editor configuration.

use nalgebra::Vector2;

use crate::camera::Camera;
use crate::draw::Style;
use crate::error::{EditorError, Result};
use crate::input::Viewport;

/// Everything an [`Editor`](crate::editor::Editor) needs besides the curve itself.
///
/// The defaults reproduce the classic setup: a 600×600 pixel window looking at a
/// 20×20 world square centered on the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EditorConfig {
    /// Window size in pixels
    pub viewport: Viewport,
    /// Visible part of the world
    pub camera: Camera,
    /// Colors and sizes used to draw
    pub style: Style,
}

impl EditorConfig {
    /// Replaces the window size
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    /// Replaces the camera
    pub fn with_camera(mut self, center: Vector2<f64>, extent: Vector2<f64>) -> Self {
        self.camera = Camera::new(center, extent);
        self
    }

    /// Rejects an empty window and a degenerate camera.
    ///
    /// Either one makes the pixel to world mapping divide by zero.
    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(EditorError::Config(format!(
                "window size {}x{} is empty",
                self.viewport.width, self.viewport.height
            )));
        }
        let extent = self.camera.extent;
        if !(extent.x.is_finite() && extent.y.is_finite() && extent.x > 0.0 && extent.y > 0.0) {
            return Err(EditorError::Config(format!(
                "camera extent {}x{} is not positive",
                extent.x, extent.y
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(EditorConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_window_rejected() {
        for (width, height) in [(0, 600), (600, 0), (0, 0)] {
            let config = EditorConfig::default().with_viewport(width, height);
            assert!(matches!(config.validate(), Err(EditorError::Config(_))));
        }
    }

    #[test]
    fn degenerate_extent_rejected() {
        for extent in [0.0, -20.0, f64::NAN, f64::INFINITY] {
            let config =
                EditorConfig::default().with_camera(Vector2::zeros(), Vector2::new(extent, extent));
            assert!(matches!(config.validate(), Err(EditorError::Config(_))));
        }
    }
}
