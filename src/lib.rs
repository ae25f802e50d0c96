#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod camera;
pub mod config;
pub mod draw;
pub mod editor;
pub mod error;
pub mod input;
pub mod model;
pub mod subdivision;

pub use crate::camera::{Camera, ScreenToWorld, WorldToClip};
pub use crate::config::EditorConfig;
pub use crate::draw::{Scene, Style};
pub use crate::editor::Editor;
pub use crate::error::{CurveError, EditorError, Result};
pub use crate::input::{Button, InputEvent, Viewport};
pub use crate::model::CurveModel;
