// File: crates/weightplot-core/src/surface.rs
// Summary: Abstract drawing-surface trait the renderer draws through;
// backends turn these primitives into a concrete page description.

use std::io;

use crate::theme::Rgb;

/// Vector drawing primitives in page coordinates: the origin sits at the
/// layout's baseline offset, y grows upward, x increases left to right.
///
/// Write failures surface synchronously from each call; partial output
/// already emitted is not rolled back.
pub trait DrawingSurface {
    /// Begin a path at the given point.
    fn move_to(&mut self, x: f64, y: f64) -> io::Result<()>;
    /// Extend the current path with a segment to the given point.
    fn line_to(&mut self, x: f64, y: f64) -> io::Result<()>;
    /// Close the current path.
    fn close_path(&mut self) -> io::Result<()>;
    /// Set the color used by subsequent stroke, fill, arc, and text calls.
    fn set_color(&mut self, color: Rgb) -> io::Result<()>;
    /// Stroke and discard the current path.
    fn stroke(&mut self) -> io::Result<()>;
    /// Fill the closed polygon through the given points.
    fn fill_polygon(&mut self, points: &[(f64, f64)]) -> io::Result<()>;
    /// Fill a full circle of the given radius.
    fn draw_arc(&mut self, x: f64, y: f64, radius: f64) -> io::Result<()>;
    /// Draw text anchored at the given point, rotated counterclockwise by
    /// the given degrees.
    fn draw_text(&mut self, x: f64, y: f64, rotation: f64, text: &str) -> io::Result<()>;
}
