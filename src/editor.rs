//! Event handling glue between device input and the [`CurveModel`].

use log::{debug, warn};
use nalgebra::Vector2;

use crate::camera::{Camera, ScreenToWorld};
use crate::config::EditorConfig;
use crate::draw::Scene;
use crate::error::CurveError;
use crate::input::{Button, InputEvent, Viewport};
use crate::model::CurveModel;

/// Interactive curve editor.
///
/// - primary press: add a control point
/// - secondary press: pick the control point under the pointer
/// - pointer motion: drag the picked point
/// - secondary release: drop the picked point
/// - any key: one interpolation step
#[derive(Clone, Debug)]
pub struct Editor {
    model: CurveModel,
    camera: Camera,
    viewport: Viewport,
    picked: Option<usize>,
}

impl Editor {
    /// Creates an editor with an empty curve
    pub fn new(config: &EditorConfig) -> Self {
        Editor {
            model: CurveModel::new(),
            camera: config.camera,
            viewport: config.viewport,
            picked: None,
        }
    }

    /// The curve being edited
    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    /// The camera used for both input and drawing
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current window size
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adapts the input mapping to a resized window
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Index of the control point currently being dragged
    pub fn picked(&self) -> Option<usize> {
        self.picked
    }

    /// Snapshot for a renderer
    pub fn scene(&self) -> Scene<'_> {
        Scene::new(&self.model, &self.camera)
    }

    fn world(&self, x: f64, y: f64) -> Vector2<f64> {
        self.camera.screen_to_world(self.viewport.to_ndc(x, y))
    }

    /// Applies a single event and reports whether the scene changed.
    pub fn handle(&mut self, event: InputEvent) -> Result<bool, CurveError> {
        match event {
            InputEvent::Press {
                button: Button::Primary,
                x,
                y,
            } => {
                let point = self.world(x, y);
                self.model.add_control_point(point);
                Ok(true)
            }
            InputEvent::Press {
                button: Button::Secondary,
                x,
                y,
            } => {
                self.picked = self.model.pick_control_point(self.world(x, y));
                debug!("picked control point {:?}", self.picked);
                Ok(true)
            }
            InputEvent::Release {
                button: Button::Secondary,
                ..
            } => {
                self.picked = None;
                Ok(false)
            }
            InputEvent::Release {
                button: Button::Primary,
                ..
            } => Ok(false),
            InputEvent::Motion { x, y } => match self.picked {
                Some(index) => {
                    let point = self.world(x, y);
                    self.model.move_control_point(index, point)?;
                    Ok(true)
                }
                None => Ok(false),
            },
            InputEvent::Key(_) => match self.model.interpolation_step() {
                Ok(()) => Ok(true),
                Err(CurveError::TooFewPoints { len, .. }) => {
                    warn!("interpolation needs two control points, have {}", len);
                    Ok(false)
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Applies events in order and returns how many of them changed the scene.
    pub fn replay<I>(&mut self, events: I) -> Result<usize, CurveError>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut changes = 0;
        for event in events {
            if self.handle(event)? {
                changes += 1;
            }
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn press(button: Button, x: f64, y: f64) -> InputEvent {
        InputEvent::Press { button, x, y }
    }

    fn release(button: Button) -> InputEvent {
        InputEvent::Release {
            button,
            x: 0.0,
            y: 0.0,
        }
    }

    fn editor() -> Editor {
        Editor::new(&EditorConfig::default())
    }

    #[test]
    fn click_adds_world_point() {
        let mut editor = editor();
        assert!(editor.handle(press(Button::Primary, 450.0, 150.0)).unwrap());
        assert_relative_eq!(editor.model().control_points()[0], Vector2::new(5.0, 5.0));
        assert!(!editor.handle(release(Button::Primary)).unwrap());
    }

    #[test]
    fn drag_moves_picked_point() {
        let mut editor = editor();
        editor
            .replay(vec![
                press(Button::Primary, 300.0, 300.0),
                press(Button::Primary, 450.0, 300.0),
                press(Button::Primary, 300.0, 150.0),
            ])
            .unwrap();

        editor.handle(press(Button::Secondary, 301.0, 151.0)).unwrap();
        assert_eq!(editor.picked(), Some(2));

        let targets = editor.model().interpolation_targets().to_vec();
        assert!(editor.handle(InputEvent::Motion { x: 150.0, y: 150.0 }).unwrap());
        assert_relative_eq!(editor.model().control_points()[2], Vector2::new(-5.0, 5.0));
        assert_eq!(editor.model().interpolation_targets(), &targets[..]);

        editor.handle(release(Button::Secondary)).unwrap();
        assert_eq!(editor.picked(), None);
        assert!(!editor.handle(InputEvent::Motion { x: 0.0, y: 0.0 }).unwrap());
        assert_relative_eq!(editor.model().control_points()[2], Vector2::new(-5.0, 5.0));
    }

    #[test]
    fn pick_miss_does_not_drag() {
        let mut editor = editor();
        editor.handle(press(Button::Primary, 300.0, 300.0)).unwrap();
        editor.handle(press(Button::Secondary, 500.0, 500.0)).unwrap();
        assert_eq!(editor.picked(), None);
        assert!(!editor.handle(InputEvent::Motion { x: 10.0, y: 10.0 }).unwrap());
    }

    #[test]
    fn key_on_empty_editor_is_ignored() {
        let mut editor = editor();
        assert!(!editor.handle(InputEvent::Key('a')).unwrap());
        editor.handle(press(Button::Primary, 300.0, 300.0)).unwrap();
        assert!(!editor.handle(InputEvent::Key('a')).unwrap());
        editor.handle(press(Button::Primary, 400.0, 300.0)).unwrap();
        assert!(editor.handle(InputEvent::Key('a')).unwrap());
    }

    #[test]
    fn resize_changes_mapping() {
        let mut editor = editor();
        editor.resize(Viewport::new(200, 100));
        editor.handle(press(Button::Primary, 200.0, 0.0)).unwrap();
        assert_relative_eq!(editor.model().control_points()[0], Vector2::new(10.0, 10.0));
    }

    #[test]
    fn configured_camera_maps_clicks() {
        let config = EditorConfig::default()
            .with_camera(Vector2::new(5.0, 0.0), Vector2::new(10.0, 10.0));
        let mut editor = Editor::new(&config);
        assert_eq!(editor.camera(), &config.camera);
        editor.handle(press(Button::Primary, 300.0, 300.0)).unwrap();
        editor.handle(press(Button::Primary, 600.0, 300.0)).unwrap();
        assert_relative_eq!(editor.model().control_points()[0], Vector2::new(5.0, 0.0));
        assert_relative_eq!(editor.model().control_points()[1], Vector2::new(10.0, 0.0));
    }
}
