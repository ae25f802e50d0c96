//! Fixed 2D camera mapping between world space and normalized device coordinates.

use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// Converts normalized device coordinates into world coordinates.
pub trait ScreenToWorld {
    /// Map a point in `[-1, 1]²` to the world point shown there
    fn screen_to_world(&self, ndc: Vector2<f64>) -> Vector2<f64>;
}

/// Converts world coordinates into clip space.
pub trait WorldToClip {
    /// Map a world point to `[-1, 1]²` if it is visible
    fn world_to_clip(&self, world: Vector2<f64>) -> Vector2<f64>;
}

/// Axis aligned camera looking at a rectangle of the world.
///
/// Matrices use the column vector convention: a world point `w` ends up at
/// `projection() * view() * w` in clip space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Center of the visible rectangle in world coordinates
    pub center: Vector2<f64>,
    /// Width and height of the visible rectangle in world units
    pub extent: Vector2<f64>,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            center: Vector2::zeros(),
            extent: Vector2::new(20.0, 20.0),
        }
    }
}

impl Camera {
    /// Creates a camera showing `extent` world units around `center`
    pub fn new(center: Vector2<f64>, extent: Vector2<f64>) -> Self {
        Camera { center, extent }
    }

    /// Translates the center to the origin
    pub fn view(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(-self.center.x, -self.center.y, 0.0))
    }

    /// Scales the visible rectangle to a square of edge length 2
    pub fn projection(&self) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(
            2.0 / self.extent.x,
            2.0 / self.extent.y,
            1.0,
        ))
    }

    /// Inverse of [`Camera::view`]
    pub fn view_inverse(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(self.center.x, self.center.y, 0.0))
    }

    /// Inverse of [`Camera::projection`]
    pub fn projection_inverse(&self) -> Matrix4<f64> {
        Matrix4::new_nonuniform_scaling(&Vector3::new(
            self.extent.x / 2.0,
            self.extent.y / 2.0,
            1.0,
        ))
    }

    /// World to clip space transform handed to renderers
    pub fn view_projection(&self) -> Matrix4<f64> {
        self.projection() * self.view()
    }
}

fn homogeneous(p: Vector2<f64>) -> Vector4<f64> {
    Vector4::new(p.x, p.y, 0.0, 1.0)
}

impl ScreenToWorld for Camera {
    fn screen_to_world(&self, ndc: Vector2<f64>) -> Vector2<f64> {
        let world = self.view_inverse() * self.projection_inverse() * homogeneous(ndc);
        world.xy()
    }
}

impl WorldToClip for Camera {
    fn world_to_clip(&self, world: Vector2<f64>) -> Vector2<f64> {
        (self.view_projection() * homogeneous(world)).xy()
    }
}

impl WorldToClip for Matrix4<f64> {
    fn world_to_clip(&self, world: Vector2<f64>) -> Vector2<f64> {
        (self * homogeneous(world)).xy()
    }
}
