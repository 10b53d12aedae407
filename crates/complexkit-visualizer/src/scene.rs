//! Recorded draw commands for one full redraw of the plane.
//!
//! A [`Scene`] is a display list: the renderer appends commands, the GTK
//! backend replays them onto a cairo context, and tests inspect them
//! directly.

use serde::{Deserialize, Serialize};

/// A pixel position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const AXIS: Color = Color::rgb(0xcc, 0xcc, 0xcc);
    pub const AXIS_LABEL: Color = Color::rgb(0x99, 0x99, 0x99);
    pub const ARC: Color = Color::rgb(0xaa, 0xaa, 0xaa);
    pub const ARC_LABEL: Color = Color::rgb(0x55, 0x55, 0x55);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0`, as cairo expects.
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Line styling for strokes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// On/off dash lengths in pixels; empty for a solid line.
    pub dash: Vec<f64>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: Vec::new(),
        }
    }

    pub fn dashed(color: Color, width: f64, dash: &[f64]) -> Self {
        Self {
            color,
            width,
            dash: dash.to_vec(),
        }
    }
}

/// Direction an arc is swept on screen (pixel y grows downward).
///
/// `Clockwise` follows increasing surface angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcDirection {
    Clockwise,
    CounterClockwise,
}

/// Which edge of a text run sits on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Left edge on the anchor
    Start,
    /// Right edge on the anchor
    End,
}

/// One primitive drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Erase the whole surface
    Clear,
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// Circular arc between two surface angles (radians, clockwise-positive)
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
        stroke: Stroke,
    },
    /// Text with its baseline at `position.y`
    Text {
        position: Point,
        text: String,
        color: Color,
        font_size: f64,
        anchor: TextAnchor,
    },
}

/// Display list for a single frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Empty display list for a surface of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(DrawCommand::Line { from, to, stroke });
    }

    pub fn text(
        &mut self,
        position: Point,
        text: impl Into<String>,
        color: Color,
        font_size: f64,
        anchor: TextAnchor,
    ) {
        self.push(DrawCommand::Text {
            position,
            text: text.into(),
            color,
            font_size,
            anchor,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of line segments stroked in `color`.
    pub fn line_count(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { stroke, .. } if stroke.color == color))
            .count()
    }

    pub fn arcs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
    }

    /// Serialized form used for logging and snapshot comparison.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_commands() {
        let mut scene = Scene::new(100.0, 100.0);
        scene.line(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Stroke::solid(Color::RED, 1.0),
        );
        scene.clear();
        assert_eq!(scene.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::AXIS.to_hex(), "#cccccc");
        assert_eq!(Color::PURPLE.to_hex(), "#800080");
        assert_eq!(Color::BLUE.to_unit_rgb(), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_command_json_is_tagged() {
        let mut scene = Scene::new(10.0, 10.0);
        scene.text(
            Point::new(1.0, 2.0),
            "Re",
            Color::AXIS_LABEL,
            10.0,
            TextAnchor::Start,
        );
        let value: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        assert_eq!(value["commands"][0]["op"], "text");
        assert_eq!(value["commands"][0]["anchor"], "start");
        assert_eq!(value["commands"][0]["text"], "Re");
    }
}
