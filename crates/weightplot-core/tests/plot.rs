// File: crates/weightplot-core/tests/plot.rs
// Purpose: Validate renderer output through a recording surface double:
// cursor monotonicity, classification boundary, and the empty chart.

use std::io;

use weightplot_core::{
    ChartLayout, DrawingSurface, PointClass, Rgb, TrendRenderer,
};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    SetColor(Rgb),
    Stroke,
    FillPolygon(Vec<(f64, f64)>),
    Arc(f64, f64, f64),
    Text(f64, f64, f64, String),
}

/// Surface double that records every primitive in call order.
#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl DrawingSurface for RecordingSurface {
    fn move_to(&mut self, x: f64, y: f64) -> io::Result<()> {
        self.ops.push(Op::MoveTo(x, y));
        Ok(())
    }
    fn line_to(&mut self, x: f64, y: f64) -> io::Result<()> {
        self.ops.push(Op::LineTo(x, y));
        Ok(())
    }
    fn close_path(&mut self) -> io::Result<()> {
        self.ops.push(Op::ClosePath);
        Ok(())
    }
    fn set_color(&mut self, color: Rgb) -> io::Result<()> {
        self.ops.push(Op::SetColor(color));
        Ok(())
    }
    fn stroke(&mut self) -> io::Result<()> {
        self.ops.push(Op::Stroke);
        Ok(())
    }
    fn fill_polygon(&mut self, points: &[(f64, f64)]) -> io::Result<()> {
        self.ops.push(Op::FillPolygon(points.to_vec()));
        Ok(())
    }
    fn draw_arc(&mut self, x: f64, y: f64, radius: f64) -> io::Result<()> {
        self.ops.push(Op::Arc(x, y, radius));
        Ok(())
    }
    fn draw_text(&mut self, x: f64, y: f64, rotation: f64, text: &str) -> io::Result<()> {
        self.ops.push(Op::Text(x, y, rotation, text.to_string()));
        Ok(())
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn cursor_advances_exactly_one_step_per_point() {
    let layout = ChartLayout::default();
    let mut renderer = TrendRenderer::new(RecordingSurface::default(), 150.0, layout);

    let points = [
        ("2022-01-01", 140.0, 149.0),
        ("2022-01-02", 160.0, 150.1),
        ("2022-01-03", 150.0, 150.09),
        ("2022-01-04", 152.5, 150.331),
    ];
    for (i, (date, weight, average)) in points.iter().enumerate() {
        renderer.plot(date, *weight, *average).expect("plot");
        let (x, _) = renderer.position();
        assert!(
            close(x, layout.x_origin + (i + 1) as f64 * layout.x_step),
            "cursor x after {} plots: {x}",
            i + 1
        );
    }
}

#[test]
fn trend_segment_starts_at_previous_cursor() {
    let layout = ChartLayout::default();
    let seed = 150.0;
    let mut renderer = TrendRenderer::new(RecordingSurface::default(), seed, layout);
    renderer.plot("2022-01-01", 140.0, 149.0).expect("plot");
    renderer.plot("2022-01-02", 160.0, 150.1).expect("plot");
    let surface = renderer.finish();

    // First MoveTo of each point is the trend segment origin.
    let moves: Vec<(f64, f64)> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::MoveTo(x, y) => Some((*x, *y)),
            _ => None,
        })
        .collect();
    let seed_y = seed * layout.y_scale + layout.y_offset;
    assert!(close(moves[0].0, layout.x_origin));
    assert!(close(moves[0].1, seed_y));

    // Second point's trend segment starts where the first one ended.
    let first_trend_y = 149.0 * layout.y_scale + layout.y_offset;
    assert!(close(moves[2].0, layout.x_origin + layout.x_step));
    assert!(close(moves[2].1, first_trend_y));
}

#[test]
fn weight_below_average_is_a_sinker() {
    assert_eq!(PointClass::classify(140.0, 149.0), PointClass::Sinker);
    assert_eq!(PointClass::classify(160.0, 150.1), PointClass::Floater);
}

#[test]
fn tie_classifies_as_floater_with_upward_marker() {
    assert_eq!(PointClass::classify(150.0, 150.0), PointClass::Floater);

    let layout = ChartLayout::default();
    let mut renderer = TrendRenderer::new(RecordingSurface::default(), 150.0, layout);
    renderer.plot("2022-01-01", 150.0, 150.0).expect("plot");
    let surface = renderer.finish();

    // The deviation color is the floater red, never blue.
    let colors: Vec<Rgb> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::SetColor(c) => Some(*c),
            _ => None,
        })
        .collect();
    assert!(colors.contains(&Rgb::RED));
    assert!(!colors.contains(&Rgb::BLUE));

    // Marker apex points up: apex y above the base corners.
    let marker = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::FillPolygon(pts) => Some(pts.clone()),
            _ => None,
        })
        .expect("marker polygon");
    assert_eq!(marker.len(), 3);
    assert!(marker[0].1 > marker[1].1);
    assert!(marker[0].1 > marker[2].1);
}

#[test]
fn sinker_marker_points_down_and_is_blue() {
    let layout = ChartLayout::default();
    let mut renderer = TrendRenderer::new(RecordingSurface::default(), 150.0, layout);
    renderer.plot("2022-01-01", 140.0, 149.0).expect("plot");
    let surface = renderer.finish();

    let colors: Vec<Rgb> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::SetColor(c) => Some(*c),
            _ => None,
        })
        .collect();
    assert!(colors.contains(&Rgb::BLUE));

    let marker = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::FillPolygon(pts) => Some(pts.clone()),
            _ => None,
        })
        .expect("marker polygon");
    assert!(marker[0].1 < marker[1].1);
    assert!(marker[0].1 < marker[2].1);
}

#[test]
fn each_point_labels_weight_average_and_date() {
    let layout = ChartLayout::default();
    let mut renderer = TrendRenderer::new(RecordingSurface::default(), 150.0, layout);
    renderer.plot("2022-01-02", 160.0, 150.1).expect("plot");
    let surface = renderer.finish();

    let texts: Vec<(f64, String)> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text(_, _, rot, s) => Some((*rot, s.clone())),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&(0.0, "160.0".to_string())));
    assert!(texts.contains(&(0.0, "150.1".to_string())));
    assert!(texts.contains(&(90.0, "2022-01-02".to_string())));

    // Exactly one trend dot per point.
    let dots = surface.ops.iter().filter(|op| matches!(op, Op::Arc(..))).count();
    assert_eq!(dots, 1);
}

#[test]
fn empty_series_emits_no_primitives() {
    let renderer =
        TrendRenderer::new(RecordingSurface::default(), 150.0, ChartLayout::default());
    let surface = renderer.finish();
    assert!(surface.ops.is_empty());
}
