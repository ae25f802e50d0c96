//! Corner-cutting refinement of control polygons and the matching limit-point estimate.
//!
//! The polygons handled here are the seeded loops built by [`CurveModel`]: the first two
//! control points are repeated at the end (`[P0, P1, .., P0, P1]`), so every round appends a
//! closing pair and the limit estimate wraps around with period `n - 2`.
//!
//! [`CurveModel`]: crate::model::CurveModel

use log::trace;
use nalgebra::{convert, RealField, Vector2};

use crate::error::CurveError;

/// Number of refinement rounds applied after every structural edit.
pub const SUBDIVISION_ROUNDS: usize = 4;

/// Shortest sequence [`refine`] and [`limit_points`] accept.
pub const MIN_POINTS: usize = 3;

/// Length of the sequence [`refine`] returns for an input of `n >= 3` points.
///
/// One midpoint/vertex pair per interior point plus the closing pair.
pub fn refined_len(n: usize) -> usize {
    2 * n.saturating_sub(2) + 2
}

fn check_len<T>(points: &[T]) -> Result<(), CurveError> {
    if points.len() < MIN_POINTS {
        return Err(CurveError::TooFewPoints {
            len: points.len(),
            min: MIN_POINTS,
        });
    }
    Ok(())
}

/// Performs a single refinement round.
///
/// Every edge contributes its midpoint `(S[i] + S[i+1]) / 2` and every interior point is
/// replaced by `(S[i-1] + 6 S[i] + S[i+1]) / 8`. The two are interleaved, and the first
/// midpoint/vertex pair is appended once more to close the loop.
pub fn refine<T: RealField + Copy>(points: &[Vector2<T>]) -> Result<Vec<Vector2<T>>, CurveError> {
    check_len(points)?;

    let two: T = convert(2.0);
    let six: T = convert(6.0);
    let eight: T = convert(8.0);

    let halves: Vec<Vector2<T>> = points.windows(2).map(|w| (w[0] + w[1]) / two).collect();
    let vertices: Vec<Vector2<T>> = points
        .windows(3)
        .map(|w| (w[0] + w[1] * six + w[2]) / eight)
        .collect();

    let mut refined = Vec::with_capacity(refined_len(points.len()));
    for (&half, &vertex) in halves.iter().zip(vertices.iter()) {
        refined.push(half);
        refined.push(vertex);
    }
    refined.push(halves[0]);
    refined.push(vertices[0]);

    Ok(refined)
}

/// Applies [`refine`] `rounds` times in sequence.
///
/// Zero rounds return a copy of the input without any length check.
pub fn refine_rounds<T: RealField + Copy>(
    points: &[Vector2<T>],
    rounds: usize,
) -> Result<Vec<Vector2<T>>, CurveError> {
    let mut curve = points.to_vec();
    for round in 0..rounds {
        curve = refine(&curve)?;
        trace!("refinement round {}: {} points", round + 1, curve.len());
    }
    Ok(curve)
}

/// Estimates the limit curve's point at every index using the 1-4-1 stencil.
///
/// The returned sequence has the same length as `points`. Its first entry is the limit at
/// index `n - 2`, which is where the seeded loop repeats index 0. The right neighbour of the
/// last index lies past the end and is taken from index 2, one period back.
pub fn limit_points<T: RealField + Copy>(
    points: &[Vector2<T>],
) -> Result<Vec<Vector2<T>>, CurveError> {
    check_len(points)?;

    let four: T = convert(4.0);
    let six: T = convert(6.0);
    let n = points.len();
    let neighbour = |i: usize| {
        if i < n {
            points[i]
        } else {
            points[i - (n - 2)]
        }
    };

    let mut limits: Vec<Vector2<T>> = (1..n)
        .map(|i| (points[i - 1] + points[i] * four + neighbour(i + 1)) / six)
        .collect();
    let wrapped = limits[limits.len() - 2];
    limits.insert(0, wrapped);

    Ok(limits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn refine_length() {
        for n in 3..12 {
            let points: Vec<_> = (0..n).map(|i| v(i as f64, (i * i) as f64)).collect();
            let refined = refine(&points).unwrap();
            assert_eq!(refined.len(), 2 * (n - 2) + 2);
            assert_eq!(refined.len(), refined_len(n));
        }
    }

    #[test]
    fn refine_values() {
        let points = [v(0.0, 0.0), v(4.0, 0.0), v(4.0, 8.0)];
        let refined = refine(&points).unwrap();
        assert_eq!(refined.len(), 4);
        assert_relative_eq!(refined[0], v(2.0, 0.0));
        // (0 + 6*4 + 4) / 8, (0 + 0 + 8) / 8
        assert_relative_eq!(refined[1], v(3.5, 1.0));
        // closing pair repeats the first midpoint and vertex
        assert_relative_eq!(refined[2], refined[0]);
        assert_relative_eq!(refined[3], refined[1]);
    }

    #[test]
    fn refine_keeps_straight_lines() {
        let points: Vec<_> = (0..6).map(|i| v(i as f64, 2.0 * i as f64)).collect();
        for p in refine(&points).unwrap() {
            assert_relative_eq!(p.y, 2.0 * p.x);
        }
    }

    #[test]
    fn refine_too_short() {
        assert_eq!(
            refine::<f64>(&[v(0.0, 0.0), v(1.0, 0.0)]),
            Err(CurveError::TooFewPoints { len: 2, min: 3 })
        );
        assert_eq!(
            refine::<f64>(&[]),
            Err(CurveError::TooFewPoints { len: 0, min: 3 })
        );
    }

    #[test]
    fn rounds_grow_as_expected() {
        let points = [v(0.0, 0.0), v(2.0, 0.0), v(1.0, 2.0), v(0.0, 0.0), v(2.0, 0.0)];
        let curve = refine_rounds(&points, SUBDIVISION_ROUNDS).unwrap();
        let expected = (0..SUBDIVISION_ROUNDS).fold(points.len(), |n, _| refined_len(n));
        assert_eq!(expected, 50);
        assert_eq!(curve.len(), expected);
    }

    #[test]
    fn zero_rounds_copies() {
        let points = [v(1.0, 1.0)];
        assert_eq!(refine_rounds(&points, 0).unwrap(), points.to_vec());
        assert!(refine_rounds(&points, 1).is_err());
    }

    #[test]
    fn refine_single_precision() {
        let points = [
            Vector2::new(0.0f32, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 0.0),
        ];
        let refined = refine(&points).unwrap();
        assert_relative_eq!(refined[1], Vector2::new(1.0f32, 0.75));
    }

    #[test]
    fn limit_of_constant_polygon() {
        let points = vec![v(3.0, -1.0); 5];
        for p in limit_points(&points).unwrap() {
            assert_relative_eq!(p, v(3.0, -1.0));
        }
    }

    #[test]
    fn limit_of_seeded_loop() {
        let a = v(0.0, 0.0);
        let b = v(6.0, 0.0);
        let limits = limit_points(&[a, b, a, b]).unwrap();
        assert_eq!(limits.len(), 4);
        // period 2: every A sees two Bs and vice versa
        assert_relative_eq!(limits[0], v(2.0, 0.0));
        assert_relative_eq!(limits[1], v(4.0, 0.0));
        assert_relative_eq!(limits[2], v(2.0, 0.0));
        assert_relative_eq!(limits[3], v(4.0, 0.0));
    }

    #[test]
    fn limit_wraps_with_period() {
        let (a, b, c) = (v(0.0, 0.0), v(6.0, 0.0), v(0.0, 6.0));
        let limits = limit_points(&[a, b, c, a, b]).unwrap();
        // the loop has period 3, so index i and i + 3 agree
        assert_relative_eq!(limits[0], limits[3]);
        assert_relative_eq!(limits[1], limits[4]);
        assert_relative_eq!(limits[0], (c + a * 4.0 + b) / 6.0);
    }
}
