use nalgebra::Vector2;
use once_cell::sync::Lazy;
use subdiv::CurveModel;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 0.0,      0.0    ),
    (-0.29734,  0.44984),
    (-0.52560,  0.42885),
    ( 1.42777, -0.02652),
    ( 1.98032, -0.67824),
    ( 0.44863, -0.91328),
    (-2.51139, -0.79100),
    (-3.10479, -0.59318),
    (-1.16022, -2.95591),
    (-1.07946,  0.78888),
];

/// Models built by clicking the first `n` sample points, for growing `n`
pub static MODELS: Lazy<Vec<CurveModel>> = Lazy::new(|| {
    [2, 3, 5, 10]
        .into_iter()
        .map(|n| {
            let mut model = CurveModel::new();
            for &(x, y) in &POINTS[..n] {
                model.add_control_point(Vector2::new(x, y));
            }
            model
        })
        .collect()
});
