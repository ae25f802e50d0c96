//! Device input: pixel to NDC mapping and the events the editor reacts to.
//!
//! Events can also be written down as text, one per line:
//!
//! ```text
//! # comment
//! press left 300 200
//! press right 300 200
//! move 320 180
//! release right 320 180
//! key i
//! ```

use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::{EditorError, Result};

/// Window area in pixels, used to map device coordinates to normalized ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 600,
            height: 600,
        }
    }
}

impl Viewport {
    /// Creates a viewport of the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    /// Maps a pixel position (origin top left, y down) to normalized device coordinates
    /// (origin in the center, y up).
    pub fn to_ndc(&self, x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(
            2.0 * x / f64::from(self.width) - 1.0,
            1.0 - 2.0 * y / f64::from(self.height),
        )
    }

    /// Maps normalized device coordinates back to a pixel position
    pub fn to_pixel(&self, ndc: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            (ndc.x + 1.0) * f64::from(self.width) / 2.0,
            (1.0 - ndc.y) * f64::from(self.height) / 2.0,
        )
    }
}

/// Pointer button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Usually the left button; places control points
    Primary,
    /// Usually the right button; picks and drags control points
    Secondary,
}

/// A single input event in device pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Button went down
    Press {
        /// Which button
        button: Button,
        /// Pixel column
        x: f64,
        /// Pixel row
        y: f64,
    },
    /// Button went up
    Release {
        /// Which button
        button: Button,
        /// Pixel column
        x: f64,
        /// Pixel row
        y: f64,
    },
    /// Pointer moved
    Motion {
        /// Pixel column
        x: f64,
        /// Pixel row
        y: f64,
    },
    /// A key was pressed
    Key(char),
}

impl FromStr for Button {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "left" | "primary" => Ok(Button::Primary),
            "right" | "secondary" => Ok(Button::Secondary),
            other => Err(format!("unknown button '{}'", other)),
        }
    }
}

fn coordinate(word: Option<&str>, name: &str) -> std::result::Result<f64, String> {
    let word = word.ok_or_else(|| format!("missing {} coordinate", name))?;
    word.parse()
        .map_err(|_| format!("invalid {} coordinate '{}'", name, word))
}

impl FromStr for InputEvent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or("empty event")?;
        let event = match command {
            "press" | "release" => {
                let button: Button = words.next().ok_or("missing button")?.parse()?;
                let x = coordinate(words.next(), "x")?;
                let y = coordinate(words.next(), "y")?;
                if command == "press" {
                    InputEvent::Press { button, x, y }
                } else {
                    InputEvent::Release { button, x, y }
                }
            }
            "move" => {
                let x = coordinate(words.next(), "x")?;
                let y = coordinate(words.next(), "y")?;
                InputEvent::Motion { x, y }
            }
            "key" => {
                let key = words.next().ok_or("missing key")?;
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => InputEvent::Key(c),
                    _ => return Err(format!("expected a single character, got '{}'", key)),
                }
            }
            other => return Err(format!("unknown event '{}'", other)),
        };
        if let Some(extra) = words.next() {
            return Err(format!("unexpected '{}'", extra));
        }
        Ok(event)
    }
}

/// Parses an event script, skipping blank lines and `#` comments.
pub fn parse_script(source: &str) -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line = match line.find('#') {
            Some(start) => &line[..start],
            None => line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let event = line.parse::<InputEvent>().map_err(|reason| EditorError::Script {
            line: index + 1,
            reason,
        })?;
        events.push(event);
    }
    Ok(events)
}
