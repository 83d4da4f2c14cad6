use serde_json::Value;
use termcandle::axis::{AxisConfig, HighlightSet, YAxis};
use termcandle::core::{AxisPlacement, Candle, ChartGeometry, VisibleCandleSet};
use termcandle::render::{AnsiColor, ColorSpec};

fn frame() -> VisibleCandleSet {
    let candle = Candle::new(0.0, 100.0, 200.0, 100.0, 200.0).expect("valid candle");
    VisibleCandleSet::new(vec![candle]).expect("valid window")
}

#[test]
fn snapshot_reports_frame_state_and_rows() {
    let set = frame();
    let geometry = ChartGeometry::new(20, AxisPlacement::Right, 0).expect("valid geometry");
    let axis = YAxis::new(&set, geometry, AxisConfig::default());

    let json = axis.snapshot_json(None).expect("snapshot");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["min_price"], 100.0);
    assert_eq!(value["max_price"], 200.0);
    assert_eq!(value["rows"].as_array().expect("rows array").len(), 20);
    assert_eq!(value["rows"][0], axis.render_row(0, None));
    assert_eq!(value["config"]["tick_spacing"], 4);
}

#[test]
fn snapshot_includes_highlight_overrides() {
    let set = frame();
    let geometry = ChartGeometry::new(100, AxisPlacement::Right, 0).expect("valid geometry");
    let axis = YAxis::new(&set, geometry, AxisConfig::default());

    let mut highlights = HighlightSet::new();
    highlights.insert(150.5, ColorSpec::Named(AnsiColor::Red));

    let json = axis.snapshot_json(Some(&highlights)).expect("snapshot");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    let row = value["rows"][50].as_str().expect("row 50");
    assert!(row.contains("150.50"));
    assert!(row.contains('\u{1b}'));
}

#[test]
fn snapshots_of_identical_frames_are_byte_identical() {
    let set = frame();
    let geometry = ChartGeometry::new(40, AxisPlacement::Left, 1).expect("valid geometry");
    let axis = YAxis::new(&set, geometry, AxisConfig::default());

    let first = axis.snapshot_json(None).expect("first snapshot");
    let second = axis.snapshot_json(None).expect("second snapshot");
    assert_eq!(first, second);
}
