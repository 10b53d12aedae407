//! Immediate-mode renderer for the complex plane.
//!
//! Each `draw_*` call appends primitives to a [`Scene`]. A frame always starts
//! from [`PlaneRenderer::begin_frame`], which clears the surface and draws the
//! axes; there is no partial redraw.

use complexkit_core::complex::format_fixed;
use complexkit_core::constants::{ARROW_HALF_ANGLE_RAD, ARROW_LENGTH_PX, MIN_ARC_RADIUS};
use complexkit_core::{radians_to_degrees, Complex};

use crate::scene::{ArcDirection, Color, DrawCommand, Point, Scene, Stroke, TextAnchor};
use crate::viewport::PlaneTransform;

const AXIS_LINE_WIDTH: f64 = 1.0;
const AXIS_FONT_SIZE: f64 = 10.0;
const TICK_HALF_LENGTH: f64 = 3.0;

const VECTOR_LINE_WIDTH: f64 = 2.0;
const VECTOR_FONT_SIZE: f64 = 12.0;
const LABEL_GAP: f64 = 5.0;
const LABEL_DROP: f64 = 15.0;

const ARC_LINE_WIDTH: f64 = 1.0;
const ARC_DASH: [f64; 2] = [3.0, 3.0];
const ARC_FONT_SIZE: f64 = 11.0;

/// Draws axes, vectors and rotation arcs through a [`PlaneTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaneRenderer {
    transform: PlaneTransform,
}

impl PlaneRenderer {
    pub fn new(transform: PlaneTransform) -> Self {
        Self { transform }
    }

    pub fn transform(&self) -> &PlaneTransform {
        &self.transform
    }

    /// A cleared scene with the axes already drawn.
    pub fn begin_frame(&self) -> Scene {
        let mut scene = Scene::new(self.transform.width(), self.transform.height());
        scene.clear();
        self.draw_axes(&mut scene);
        scene
    }

    /// Axis lines, unit ticks with numeric labels, and the Re/Im captions.
    pub fn draw_axes(&self, scene: &mut Scene) {
        let t = &self.transform;
        let (cx, cy) = (t.center_x(), t.center_y());
        let stroke = Stroke::solid(Color::AXIS, AXIS_LINE_WIDTH);

        scene.line(Point::new(0.0, cy), Point::new(t.width(), cy), stroke.clone());
        scene.line(Point::new(cx, 0.0), Point::new(cx, t.height()), stroke.clone());

        let real_extent = t.real_tick_extent();
        for i in (-real_extent..=real_extent).filter(|&i| i != 0) {
            let x = t.to_canvas_x(i as f64);
            scene.text(
                Point::new(x - 3.0, cy + 12.0),
                i.to_string(),
                Color::AXIS_LABEL,
                AXIS_FONT_SIZE,
                TextAnchor::Start,
            );
            scene.line(
                Point::new(x, cy - TICK_HALF_LENGTH),
                Point::new(x, cy + TICK_HALF_LENGTH),
                stroke.clone(),
            );
        }

        let imaginary_extent = t.imaginary_tick_extent();
        for i in (-imaginary_extent..=imaginary_extent).filter(|&i| i != 0) {
            let y = t.to_canvas_y(i as f64);
            scene.text(
                Point::new(cx + 5.0, y + 3.0),
                format!("{}i", i),
                Color::AXIS_LABEL,
                AXIS_FONT_SIZE,
                TextAnchor::Start,
            );
            scene.line(
                Point::new(cx - TICK_HALF_LENGTH, y),
                Point::new(cx + TICK_HALF_LENGTH, y),
                stroke.clone(),
            );
        }

        scene.text(
            Point::new(t.width() - 15.0, cy + 12.0),
            "Re",
            Color::AXIS_LABEL,
            AXIS_FONT_SIZE,
            TextAnchor::Start,
        );
        scene.text(
            Point::new(cx + 5.0, 12.0),
            "Im",
            Color::AXIS_LABEL,
            AXIS_FONT_SIZE,
            TextAnchor::Start,
        );
    }

    /// Arrow from the origin to `z`, with an optional label beside the tip.
    ///
    /// The label moves to the left of the tip when `z.re < 0` and below it
    /// when `z.im < 0` so it does not sit on the shaft.
    pub fn draw_vector(&self, scene: &mut Scene, z: Complex, color: Color, label: Option<&str>) {
        let origin = self.transform.origin();
        let tip = self.transform.to_canvas(z.re, z.im);
        let stroke = Stroke::solid(color, VECTOR_LINE_WIDTH);

        scene.line(origin, tip, stroke.clone());

        let direction = (tip.y - origin.y).atan2(tip.x - origin.x);
        for barb in [direction - ARROW_HALF_ANGLE_RAD, direction + ARROW_HALF_ANGLE_RAD] {
            let end = tip.offset(
                -ARROW_LENGTH_PX * barb.cos(),
                -ARROW_LENGTH_PX * barb.sin(),
            );
            scene.line(tip, end, stroke.clone());
        }

        let Some(label) = label.filter(|l| !l.is_empty()) else {
            return;
        };

        let (x, anchor) = if z.re < 0.0 {
            (tip.x - LABEL_GAP, TextAnchor::End)
        } else {
            (tip.x + LABEL_GAP, TextAnchor::Start)
        };
        let y = if z.im < 0.0 {
            tip.y + LABEL_DROP
        } else {
            tip.y - LABEL_GAP
        };
        scene.text(Point::new(x, y), label, color, VECTOR_FONT_SIZE, anchor);
    }

    /// Dashed arc from the positive real axis through `angle_rad`, labelled in
    /// degrees at its midpoint.
    ///
    /// Surface angles are clockwise-positive, so the arc ends at `-angle_rad`
    /// and is swept counter-clockwise on screen for positive rotations.
    /// Nothing is drawn when `radius` (in plane units) is at most 0.01.
    pub fn draw_rotation_arc(&self, scene: &mut Scene, angle_rad: f64, radius: f64) {
        if radius <= MIN_ARC_RADIUS {
            tracing::debug!("Skipping rotation arc for near-zero radius {}", radius);
            return;
        }

        let origin = self.transform.origin();
        let canvas_radius = radius * self.transform.scale();
        let direction = if angle_rad < 0.0 {
            ArcDirection::Clockwise
        } else {
            ArcDirection::CounterClockwise
        };

        scene.push(DrawCommand::Arc {
            center: origin,
            radius: canvas_radius,
            start_angle: 0.0,
            end_angle: -angle_rad,
            direction,
            stroke: Stroke::dashed(Color::ARC, ARC_LINE_WIDTH, &ARC_DASH),
        });

        let label_radius = canvas_radius * 0.5;
        let label_angle = -angle_rad / 2.0;
        scene.text(
            origin.offset(
                label_radius * label_angle.cos(),
                label_radius * label_angle.sin(),
            ),
            format!("{}°", format_fixed(radians_to_degrees(angle_rad), 1)),
            Color::ARC_LABEL,
            ARC_FONT_SIZE,
            TextAnchor::Start,
        );
    }
}
