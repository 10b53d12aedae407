//! Drawing area that replays the workbench scene with cairo.

use complexkit_core::types::Shared;
use complexkit_visualizer::{ArcDirection, Color, DrawCommand, Scene, Stroke, TextAnchor};
use complexkit_workbench::WorkbenchController;
use gtk4::cairo::{self, Context, FontSlant, FontWeight};
use gtk4::prelude::*;
use gtk4::{DrawingArea, Frame};

const FONT_FAMILY: &str = "sans-serif";

pub struct PlaneView {
    pub widget: Frame,
    drawing_area: DrawingArea,
}

impl PlaneView {
    /// A fixed-size surface painting whatever scene `controller` holds.
    pub fn new(controller: Shared<WorkbenchController>, width: i32, height: i32) -> Self {
        let drawing_area = DrawingArea::builder()
            .content_width(width)
            .content_height(height)
            .hexpand(false)
            .vexpand(false)
            .build();

        drawing_area.set_draw_func(move |_, cr, _width, _height| {
            let controller = controller.borrow();
            if let Err(e) = paint_scene(cr, controller.scene()) {
                tracing::error!("Failed to paint complex plane: {}", e);
            }
        });

        let widget = Frame::new(None);
        widget.add_css_class("plane-frame");
        widget.set_halign(gtk4::Align::Center);
        widget.set_valign(gtk4::Align::Center);
        widget.set_child(Some(&drawing_area));

        Self {
            widget,
            drawing_area,
        }
    }

    /// Schedule a repaint of the full scene.
    pub fn redraw(&self) {
        self.drawing_area.queue_draw();
    }
}

/// Replay every command of `scene` onto `cr`.
pub fn paint_scene(cr: &Context, scene: &Scene) -> Result<(), cairo::Error> {
    tracing::trace!("Painting {} draw commands", scene.len());

    for command in scene.commands() {
        match command {
            DrawCommand::Clear => {
                cr.set_source_rgb(1.0, 1.0, 1.0);
                cr.paint()?;
            }
            DrawCommand::Line { from, to, stroke } => {
                apply_stroke(cr, stroke);
                cr.move_to(from.x, from.y);
                cr.line_to(to.x, to.y);
                cr.stroke()?;
            }
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                direction,
                stroke,
            } => {
                apply_stroke(cr, stroke);
                cr.new_sub_path();
                match direction {
                    ArcDirection::Clockwise => {
                        cr.arc(center.x, center.y, *radius, *start_angle, *end_angle)
                    }
                    ArcDirection::CounterClockwise => {
                        cr.arc_negative(center.x, center.y, *radius, *start_angle, *end_angle)
                    }
                }
                cr.stroke()?;
                cr.set_dash(&[], 0.0);
            }
            DrawCommand::Text {
                position,
                text,
                color,
                font_size,
                anchor,
            } => {
                set_color(cr, *color);
                cr.select_font_face(FONT_FAMILY, FontSlant::Normal, FontWeight::Normal);
                cr.set_font_size(*font_size);
                let x = match anchor {
                    TextAnchor::Start => position.x,
                    TextAnchor::End => position.x - cr.text_extents(text)?.x_advance(),
                };
                cr.move_to(x, position.y);
                cr.show_text(text)?;
            }
        }
    }

    Ok(())
}

fn set_color(cr: &Context, color: Color) {
    let (r, g, b) = color.to_unit_rgb();
    cr.set_source_rgb(r, g, b);
}

fn apply_stroke(cr: &Context, stroke: &Stroke) {
    set_color(cr, stroke.color);
    cr.set_line_width(stroke.width);
    cr.set_dash(&stroke.dash, 0.0);
}
