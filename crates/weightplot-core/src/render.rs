// File: crates/weightplot-core/src/render.rs
// Summary: Trend renderer: folds (date, weight, average) triples into
// drawing primitives, carrying the cursor between points.

use std::io;

use crate::surface::DrawingSurface;
use crate::theme::Theme;
use crate::types::ChartLayout;

/// Half-width of the triangle marker base.
const MARKER_HALF_WIDTH: f64 = 3.0;
/// Height of the triangle marker from base to apex.
const MARKER_HEIGHT: f64 = 5.0;
/// Radius of the filled dot at the trend point.
const DOT_RADIUS: f64 = 2.0;
/// Vertical clearance between a point and its value label.
const LABEL_GAP: f64 = 8.0;
/// Horizontal nudge that roughly centers a value label over its point.
const LABEL_NUDGE: f64 = -8.0;
/// Baseline of the rotated date labels, below the chart area.
const DATE_LABEL_Y: f64 = 4.0;

/// How a raw weight relates to the smoothed trend at the same point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointClass {
    /// Weight at or above the trend. Ties land here.
    Floater,
    /// Weight fell below the trend.
    Sinker,
}

impl PointClass {
    pub fn classify(weight: f64, average: f64) -> Self {
        if weight < average {
            Self::Sinker
        } else {
            Self::Floater
        }
    }
}

/// Plots one series of (date, weight, average) triples onto a surface.
///
/// The cursor (`prev_x`, `prev_y`) is renderer-local state threaded through
/// each call: every `plot` advances `prev_x` by exactly one layout step.
/// `finish` consumes the renderer, so plotting after finalization is
/// unrepresentable.
pub struct TrendRenderer<S: DrawingSurface> {
    surface: S,
    layout: ChartLayout,
    theme: Theme,
    prev_x: f64,
    prev_y: f64,
}

impl<S: DrawingSurface> TrendRenderer<S> {
    /// Create a renderer over the given surface, seeding the cursor from
    /// the seed average so the first trend segment starts on the baseline
    /// every later segment uses.
    pub fn new(surface: S, seed_average: f64, layout: ChartLayout) -> Self {
        let prev_y = seed_average * layout.y_scale + layout.y_offset;
        Self {
            surface,
            layout,
            theme: Theme::default(),
            prev_x: layout.x_origin,
            prev_y,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Current cursor position, advanced once per plotted point.
    pub fn position(&self) -> (f64, f64) {
        (self.prev_x, self.prev_y)
    }

    /// Plot one point: trend segment, deviation segment, markers, labels,
    /// and the rotated date label, then advance the cursor.
    pub fn plot(&mut self, date: &str, weight: f64, average: f64) -> io::Result<()> {
        let layout = self.layout;
        let x = self.prev_x + layout.x_step;
        let trend_y = average * layout.y_scale + layout.y_offset;
        let weight_y = weight * layout.y_scale + layout.y_offset;

        // Trend segment from the previous cursor to this point.
        self.surface.set_color(self.theme.trend)?;
        self.surface.move_to(self.prev_x, self.prev_y)?;
        self.surface.line_to(x, trend_y)?;
        self.surface.stroke()?;

        let class = PointClass::classify(weight, average);
        let color = match class {
            PointClass::Floater => self.theme.floater,
            PointClass::Sinker => self.theme.sinker,
        };

        // Deviation segment from the trend point to the raw weight.
        self.surface.set_color(color)?;
        self.surface.move_to(x, trend_y)?;
        self.surface.line_to(x, weight_y)?;
        self.surface.stroke()?;

        // Triangle marker at the weight point, apex away from the trend.
        let marker = match class {
            PointClass::Floater => [
                (x, weight_y + MARKER_HEIGHT),
                (x - MARKER_HALF_WIDTH, weight_y),
                (x + MARKER_HALF_WIDTH, weight_y),
            ],
            PointClass::Sinker => [
                (x, weight_y - MARKER_HEIGHT),
                (x - MARKER_HALF_WIDTH, weight_y),
                (x + MARKER_HALF_WIDTH, weight_y),
            ],
        };
        self.surface.fill_polygon(&marker)?;

        // Value labels on opposite sides of the line so they stay clear of
        // the segments: the weight label sits beyond the marker apex, the
        // average label on the far side of the trend point.
        let (weight_label_y, average_label_y) = match class {
            PointClass::Floater => {
                (weight_y + MARKER_HEIGHT + LABEL_GAP, trend_y - LABEL_GAP)
            }
            PointClass::Sinker => {
                (weight_y - MARKER_HEIGHT - LABEL_GAP, trend_y + LABEL_GAP)
            }
        };
        self.surface
            .draw_text(x + LABEL_NUDGE, weight_label_y, 0.0, &format!("{weight:.1}"))?;
        self.surface.set_color(self.theme.trend)?;
        self.surface
            .draw_text(x + LABEL_NUDGE, average_label_y, 0.0, &format!("{average:.1}"))?;

        // Dot at the trend point.
        self.surface.draw_arc(x, trend_y, DOT_RADIUS)?;

        // Date, rotated upright below the axis at this point's x.
        self.surface.set_color(self.theme.date_label)?;
        self.surface.draw_text(x, DATE_LABEL_Y, 90.0, date)?;

        self.prev_x = x;
        self.prev_y = trend_y;
        Ok(())
    }

    /// Finalize the chart and hand the surface back for document closing.
    /// Every point strokes and fills its own paths, so nothing is pending.
    pub fn finish(self) -> S {
        self.surface
    }
}
