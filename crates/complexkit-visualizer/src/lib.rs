//! # ComplexKit Visualizer
//!
//! Geometry and rendering for the complex plane view.
//! Rendering is immediate-mode: every redraw records a fresh [`Scene`] of
//! draw commands which a backend (the GTK/cairo view) paints verbatim.

pub mod renderer;
pub mod scene;
pub mod viewport;

pub use renderer::PlaneRenderer;
pub use scene::{ArcDirection, Color, DrawCommand, Point, Scene, Stroke, TextAnchor};
pub use viewport::PlaneTransform;
