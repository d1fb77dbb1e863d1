// File: crates/weightplot-core/src/types.rs
// Summary: Chart layout constants and scalars.

/// Horizontal drawable span of the chart, in page units.
pub const DRAWABLE_WIDTH: f64 = 1100.0;
/// Maximum number of points the drawable span is divided across
/// (one month of daily entries plus the boundary day).
pub const POINT_SPAN: u32 = 31;
/// Weight range the vertical scale is normalized against.
pub const VALUE_SPAN: f64 = 400.0;
/// Baseline shift applied to every plotted y coordinate, in page units.
pub const BASELINE_OFFSET: f64 = 50.0;

/// Layout scalars the renderer folds each point through.
/// Contract: `x_step`, `y_scale` are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// X position of the cursor before the first point is plotted.
    pub x_origin: f64,
    /// Horizontal advance per plotted point.
    pub x_step: f64,
    /// Vertical scale factor applied to weights and averages.
    pub y_scale: f64,
    /// Vertical baseline shift.
    pub y_offset: f64,
}

impl ChartLayout {
    pub const fn new(x_origin: f64, x_step: f64, y_scale: f64, y_offset: f64) -> Self {
        Self { x_origin, x_step, y_scale, y_offset }
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(
            BASELINE_OFFSET,
            DRAWABLE_WIDTH / POINT_SPAN as f64,
            DRAWABLE_WIDTH / VALUE_SPAN,
            BASELINE_OFFSET,
        )
    }
}
