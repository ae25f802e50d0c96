use js_sys::Array;
use nalgebra::Vector2;
use serde::Deserialize;
use std::f64::consts::PI;
use subdiv::draw::DrawScene;
use subdiv::{Button, Editor, EditorConfig, InputEvent, Scene, Style, Viewport, WorldToClip};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[derive(Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Draws scenes on a 2d canvas context of the viewport's size
struct Canvas<'c> {
    ctx: &'c CanvasRenderingContext2d,
    viewport: Viewport,
}

impl Canvas<'_> {
    fn pixel(&self, scene: &Scene<'_>, p: Vector2<f64>) -> Vector2<f64> {
        self.viewport.to_pixel(scene.view_projection.world_to_clip(p))
    }

    fn dots(&self, scene: &Scene<'_>, points: &[Vector2<f64>], radius: f64, color: &JsValue) {
        self.ctx.set_fill_style(color);
        for &p in points {
            let p = self.pixel(scene, p);
            self.ctx.begin_path();
            let _ = self.ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
            self.ctx.fill();
        }
    }
}

impl DrawScene for Canvas<'_> {
    fn draw_scene(&mut self, scene: &Scene<'_>, style: &Style) {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        self.ctx
            .set_fill_style(&JsValue::from_str(&style.background.to_string()));
        self.ctx.fill_rect(0.0, 0.0, width, height);

        let radius = style.point_size / 2.0;
        let control = JsValue::from_str(&style.control_color.to_string());
        self.dots(scene, scene.control_points, radius, &control);
        let targets = JsValue::from_str(&style.interpolation_color.to_string());
        self.dots(scene, scene.interpolation_targets, radius, &targets);

        if scene.shows_curve() {
            self.ctx.begin_path();
            let first = self.pixel(scene, scene.curve_points[0]);
            self.ctx.move_to(first.x, first.y);
            for &p in &scene.curve_points[1..] {
                let p = self.pixel(scene, p);
                self.ctx.line_to(p.x, p.y);
            }
            self.ctx.set_line_width(style.line_width);
            self.ctx
                .set_stroke_style(&JsValue::from_str(&style.curve_color.to_string()));
            self.ctx.stroke();
        }
    }
}

/// Maps `MouseEvent.button` to the editor's buttons
fn button(code: i16) -> Option<Button> {
    match code {
        0 => Some(Button::Primary),
        2 => Some(Button::Secondary),
        _ => None,
    }
}

fn handle(editor: &mut Editor, event: InputEvent) -> Result<bool, JsValue> {
    editor
        .handle(event)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub struct CurveEditor {
    editor: Editor,
    style: Style,
}

#[wasm_bindgen]
impl CurveEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> CurveEditor {
        let config = EditorConfig::default().with_viewport(width, height);
        CurveEditor {
            editor: Editor::new(&config),
            style: config.style,
        }
    }

    /// Creates an editor and clicks each `{x, y}` pixel position in order
    #[wasm_bindgen(js_name = fromPoints)]
    pub fn from_points(width: u32, height: u32, points: Array) -> Result<CurveEditor, JsValue> {
        let mut curve = CurveEditor::new(width, height);
        for i in 0..points.length() {
            let p: Point = points
                .get(i)
                .into_serde()
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            handle(
                &mut curve.editor,
                InputEvent::Press {
                    button: Button::Primary,
                    x: p.x,
                    y: p.y,
                },
            )?;
        }
        Ok(curve)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.editor.resize(Viewport::new(width, height));
    }

    /// Returns whether the canvas needs to be redrawn
    #[wasm_bindgen(js_name = mouseDown)]
    pub fn mouse_down(&mut self, code: i16, x: f64, y: f64) -> Result<bool, JsValue> {
        match button(code) {
            Some(button) => handle(&mut self.editor, InputEvent::Press { button, x, y }),
            None => Ok(false),
        }
    }

    #[wasm_bindgen(js_name = mouseUp)]
    pub fn mouse_up(&mut self, code: i16, x: f64, y: f64) -> Result<bool, JsValue> {
        match button(code) {
            Some(button) => handle(&mut self.editor, InputEvent::Release { button, x, y }),
            None => Ok(false),
        }
    }

    #[wasm_bindgen(js_name = mouseMove)]
    pub fn mouse_move(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        handle(&mut self.editor, InputEvent::Motion { x, y })
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> Result<bool, JsValue> {
        let key = key.chars().next().unwrap_or(' ');
        handle(&mut self.editor, InputEvent::Key(key))
    }

    #[wasm_bindgen(js_name = controlPointCount)]
    pub fn control_point_count(&self) -> usize {
        self.editor.model().len()
    }

    #[wasm_bindgen]
    pub fn draw(&self, ctx: CanvasRenderingContext2d) {
        let mut canvas = Canvas {
            ctx: &ctx,
            viewport: self.editor.viewport(),
        };
        canvas.draw_scene(&self.editor.scene(), &self.style);
    }
}
