//! The editable curve: control polygon, interpolation targets and the refined curve.

use log::{debug, trace, warn};
use nalgebra::Vector2;

use crate::error::CurveError;
use crate::subdivision::{limit_points, refine_rounds, MIN_POINTS, SUBDIVISION_ROUNDS};

/// Squared world-space distance below which a control point counts as hit.
pub const PICK_THRESHOLD_SQUARED: f64 = 0.5;

/// Control polygon of a subdivision curve together with everything derived from it.
///
/// The model keeps three sequences:
/// - the control points the user placed,
/// - the interpolation targets, which start as a copy of the control points and are
///   nudged by [`interpolation_step`] until their limit curve passes through the
///   control points,
/// - the refined curve points, which are always recomputed and never edited directly.
///
/// Moving a control point refreshes only the approximating curve. The interpolation
/// targets keep their old values until the next [`interpolation_step`] or
/// [`add_control_point`].
///
/// Further steps realign the targets after most drags. Dragging index 0 away from its
/// copy at `len - 2`, one of the repeated seed pair, stops interpolation from
/// converging: the limit at index 0 is the one of index `len - 2`, which never
/// depends on target 0, so every step pushes that target further away.
///
/// [`interpolation_step`]: CurveModel::interpolation_step
/// [`add_control_point`]: CurveModel::add_control_point
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveModel {
    control_points: Vec<Vector2<f64>>,
    interpolation_targets: Vec<Vector2<f64>>,
    curve_points: Vec<Vector2<f64>>,
}

impl CurveModel {
    /// Creates an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    /// Whether no control point was placed yet
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// Control points in insertion order
    pub fn control_points(&self) -> &[Vector2<f64>] {
        &self.control_points
    }

    /// Points the interpolation mode refines instead of the control points
    pub fn interpolation_targets(&self) -> &[Vector2<f64>] {
        &self.interpolation_targets
    }

    /// Refined curve, to be drawn as a connected polyline
    pub fn curve_points(&self) -> &[Vector2<f64>] {
        &self.curve_points
    }

    /// Adds a control point given in world coordinates.
    ///
    /// The second point seeds the loop `[P0, P1, P0, P1]`. Every later point is inserted in
    /// front of the repeated pair at the end. Any interpolation progress is discarded.
    pub fn add_control_point(&mut self, point: Vector2<f64>) {
        match self.control_points.len() {
            0 => {
                self.control_points.push(point);
            }
            1 => {
                let first = self.control_points[0];
                self.control_points.extend([point, first, point]);
                self.curve_points = self.control_points.clone();
            }
            len => {
                self.control_points.insert(len - 2, point);
                self.curve_points = refined(&self.control_points);
            }
        }
        self.interpolation_targets = self.control_points.clone();
        debug!(
            "added control point ({}, {}): {} control points, {} curve points",
            point.x,
            point.y,
            self.control_points.len(),
            self.curve_points.len()
        );
    }

    /// Returns the first control point closer than the pick threshold.
    ///
    /// Points are scanned in insertion order, so an earlier point inside the threshold wins
    /// over a nearer later one.
    pub fn pick_control_point(&self, point: Vector2<f64>) -> Option<usize> {
        self.control_points
            .iter()
            .position(|p| (p - point).norm_squared() < PICK_THRESHOLD_SQUARED)
    }

    /// Moves the control point at `index` and recomputes the approximating curve.
    ///
    /// The interpolation targets are left untouched.
    pub fn move_control_point(
        &mut self,
        index: usize,
        point: Vector2<f64>,
    ) -> Result<(), CurveError> {
        let len = self.control_points.len();
        let slot = self
            .control_points
            .get_mut(index)
            .ok_or(CurveError::InvalidIndex { index, len })?;
        *slot = point;

        self.curve_points = if len < MIN_POINTS {
            Vec::new()
        } else {
            refined(&self.control_points)
        };
        trace!("moved control point {} to ({}, {})", index, point.x, point.y);
        Ok(())
    }

    /// Moves every interpolation target by the gap between its control point and its
    /// current limit point, then refines the targets into the curve.
    ///
    /// Repeated calls converge towards a curve through the control points.
    pub fn interpolation_step(&mut self) -> Result<(), CurveError> {
        let limits = limit_points(&self.interpolation_targets)?;
        for ((target, control), limit) in self
            .interpolation_targets
            .iter_mut()
            .zip(self.control_points.iter())
            .zip(limits.iter())
        {
            *target += control - limit;
        }
        self.curve_points = refined(&self.interpolation_targets);
        debug!(
            "interpolation step: residual {}",
            self.interpolation_residual().unwrap_or(0.0)
        );
        Ok(())
    }

    /// Largest distance between a control point and the limit point of its interpolation
    /// target.
    ///
    /// Returns `None` until the loop is seeded.
    pub fn interpolation_residual(&self) -> Option<f64> {
        let limits = limit_points(&self.interpolation_targets).ok()?;
        self.control_points
            .iter()
            .zip(limits.iter())
            .map(|(control, limit)| (control - limit).norm())
            .reduce(f64::max)
    }
}

fn refined(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    match refine_rounds(points, SUBDIVISION_ROUNDS) {
        Ok(curve) => curve,
        Err(err) => {
            warn!("drawing the control polygon unrefined: {}", err);
            points.to_vec()
        }
    }
}
