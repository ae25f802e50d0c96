use criterion::{black_box, Criterion};
use nalgebra::Vector2;
use subdiv::subdivision::{refine, refine_rounds, SUBDIVISION_ROUNDS};
use crate::common::samples::MODELS;

pub fn refine_once(c: &mut Criterion) {
    c.bench_function("refine", |b| {
        for model in MODELS.iter() {
            b.iter(|| black_box(refine(model.control_points())))
        }
    });
}

pub fn refine_all_rounds(c: &mut Criterion) {
    c.bench_function("refine_rounds", |b| {
        for model in MODELS.iter() {
            b.iter(|| black_box(refine_rounds(model.control_points(), SUBDIVISION_ROUNDS)))
        }
    });
}

pub fn interpolation_step(c: &mut Criterion) {
    c.bench_function("interpolation_step", |b| {
        for model in MODELS.iter() {
            let mut model = model.clone();
            b.iter(|| black_box(model.interpolation_step()))
        }
    });
}

pub fn drag(c: &mut Criterion) {
    c.bench_function("move_control_point", |b| {
        for model in MODELS.iter() {
            let mut model = model.clone();
            b.iter(|| black_box(model.move_control_point(0, Vector2::new(0.5, 0.5))))
        }
    });
}

pub fn all(c: &mut Criterion) {
    refine_once(c);
    refine_all_rounds(c);
    interpolation_step(c);
    drag(c);
}
