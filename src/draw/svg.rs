//! Render a scene as an svg document

use std::fmt::{Display, Formatter};

use nalgebra::Vector2;

use crate::camera::WorldToClip;
use crate::draw::{DrawScene, Rgb, Scene, Style};
use crate::input::Viewport;

/// A single frame rendered to svg elements.
///
/// Drawing a scene replaces the previous content. The frame's [`Display`] implementation
/// writes the whole document.
///
/// ```
/// # use nalgebra::Vector2;
/// use subdiv::{Camera, CurveModel, Scene, Style, Viewport};
/// use subdiv::draw::DrawScene;
/// use subdiv::draw::svg::SvgFrame;
///
/// let mut model = CurveModel::new();
/// model.add_control_point(Vector2::new(0.0, 0.0));
///
/// let mut frame = SvgFrame::new(Viewport::new(200, 200));
/// frame.draw_scene(&Scene::new(&model, &Camera::default()), &Style::default());
/// assert!(frame.to_string().contains("<circle cx=\"100\" cy=\"100\" r=\"3\" fill=\"#ff0000\"/>"));
/// ```
pub struct SvgFrame {
    viewport: Viewport,
    elements: Vec<Box<dyn Display>>,
}

impl SvgFrame {
    /// Creates an empty frame of the given pixel size
    pub fn new(viewport: Viewport) -> Self {
        SvgFrame {
            viewport,
            elements: Vec::new(),
        }
    }

    /// Number of elements drawn so far, the background included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing was drawn yet
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }

    fn add_points(&mut self, scene: &Scene<'_>, points: &[Vector2<f64>], radius: f64, color: Rgb) {
        for &p in points {
            let center = self.viewport.to_pixel(scene.view_projection.world_to_clip(p));
            self.add_elem(Circle {
                center,
                radius,
                color,
            });
        }
    }
}

impl DrawScene for SvgFrame {
    fn draw_scene(&mut self, scene: &Scene<'_>, style: &Style) {
        self.elements.clear();
        self.add_elem(Rect {
            width: self.viewport.width,
            height: self.viewport.height,
            color: style.background,
        });

        let radius = style.point_size / 2.0;
        self.add_points(scene, scene.control_points, radius, style.control_color);
        self.add_points(scene, scene.interpolation_targets, radius, style.interpolation_color);

        if scene.shows_curve() {
            let points = scene
                .curve_points
                .iter()
                .map(|&p| self.viewport.to_pixel(scene.view_projection.world_to_clip(p)))
                .collect();
            self.add_elem(Polyline {
                points,
                width: style.line_width,
                color: style.curve_color,
            });
        }
    }
}

impl Display for SvgFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            concat!(
                "<svg viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" ",
                "xmlns=\"http://www.w3.org/2000/svg\">",
            ),
            w = self.viewport.width,
            h = self.viewport.height,
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")
    }
}

struct Rect {
    width: u32,
    height: u32,
    color: Rgb,
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            self.width, self.height, self.color
        )
    }
}

struct Circle {
    center: Vector2<f64>,
    radius: f64,
    color: Rgb,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            self.center[0], self.center[1], self.radius, self.color
        )
    }
}

struct Polyline {
    points: Vec<Vector2<f64>>,
    width: f64,
    color: Rgb,
}

impl Display for Polyline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<path stroke=\"{}\" fill=\"none\" stroke-width=\"{}\" d=\"",
            self.color, self.width
        )?;
        for (i, p) in self.points.iter().enumerate() {
            write!(f, "{} {} {} ", if i == 0 { "M" } else { "L" }, p[0], p[1])?;
        }
        writeln!(f, "\"/>")
    }
}
