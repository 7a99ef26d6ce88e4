use radarplot_render::layout_radar_chart;
use radarplot_render::model::RadarLayout;
use serde_json::Value;
use std::path::{Path, PathBuf};

const EPS: f64 = 1e-9;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture(name: &str) -> Value {
    let path = workspace_root().join("fixtures").join("radar").join(name);
    let text = std::fs::read_to_string(&path).expect("fixture");
    serde_json::from_str(&text).expect("fixture json")
}

fn fixture_names() -> Vec<String> {
    let dir = workspace_root().join("fixtures").join("radar");
    let mut out: Vec<String> = std::fs::read_dir(&dir)
        .expect("fixtures dir")
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .filter_map(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string())
        })
        .collect();
    out.sort();
    out
}

fn layout_fixture(name: &str) -> RadarLayout {
    let f = fixture(name);
    layout_radar_chart(&f["series"], &f["config"])
        .unwrap_or_else(|e| panic!("{name}: {e}"))
        .layout
}

fn assert_geometry_invariants(name: &str, layout: &RadarLayout) {
    let n = layout.dimension_count;
    assert!(n >= 3, "{name}");
    assert_eq!(layout.ranges.len(), n, "{name}");

    for ring in &layout.gridlines {
        assert_eq!(ring.points.len(), n, "{name}: ring {}", ring.step);
        for p in &ring.points {
            let d = p.distance_to(&layout.center);
            assert!((d - ring.radius).abs() < EPS, "{name}: ring vertex at {d}");
        }
    }
    if let Some(outer) = layout.gridlines.last() {
        assert!((outer.radius - layout.radius).abs() < EPS, "{name}");
    }

    for item in &layout.items {
        assert_eq!(item.points.len(), n, "{name}: item {}", item.index);
        for ((p, &t), range) in item.points.iter().zip(&item.normalized).zip(&layout.ranges) {
            assert!(range.max > range.min, "{name}");
            let d = p.distance_to(&layout.center);
            assert!(
                (d - layout.radius * t.abs()).abs() < 1e-6,
                "{name}: item vertex at {d}, normalized {t}"
            );
        }
    }
}

#[test]
fn every_fixture_lays_out_with_consistent_geometry() {
    let names = fixture_names();
    assert!(!names.is_empty());
    for name in names {
        let layout = layout_fixture(&name);
        assert_geometry_invariants(&name, &layout);
        assert_eq!(layout, layout_fixture(&name), "{name}: layout is not repeatable");
    }
}

#[test]
fn basic_fixture_matches_hand_computed_vertices() {
    let layout = layout_fixture("basic_uniform.json");
    assert_eq!(layout.dimension_count, 8);
    assert_eq!(layout.gridlines.len(), 10);
    assert_eq!(layout.items.len(), 1);

    // Default config: 600x600 plot area offset by 50px margins.
    assert_eq!((layout.center.x, layout.center.y), (350.0, 350.0));
    assert_eq!(layout.radius, 300.0);
    assert_eq!(layout.inscribed_radius, 300.0);

    let p = &layout.items[0].points;
    // Dimension 0 points straight up: 4 / 10 of the radius.
    assert!((p[0].x - 350.0).abs() < EPS);
    assert!((p[0].y - 230.0).abs() < EPS);
    // Dimension 2 points right: 8 / 10 of the radius.
    assert!((p[2].x - 590.0).abs() < EPS);
    assert!((p[2].y - 350.0).abs() < EPS);
    // Dimension 6 has value 0 and collapses onto the center.
    assert!(p[6].distance_to(&layout.center) < EPS);
}

#[test]
fn no_gridlines_fixture_still_lays_out_every_item() {
    let layout = layout_fixture("no_gridlines.json");
    assert!(layout.gridlines.is_empty());
    assert_eq!(layout.items.len(), 2);
    let order: Vec<_> = layout.items.iter().map(|i| i.index).collect();
    assert_eq!(order, vec![0, 1]);
}

#[test]
fn odd_fixture_uses_the_cosine_corrected_radius() {
    let layout = layout_fixture("per_dimension_auto.json");
    assert_eq!(layout.dimension_count, 5);
    let half = (std::f64::consts::PI / 5.0).cos();
    assert!((layout.radius - 400.0 / (1.0 + half)).abs() < EPS);
    assert!((layout.inscribed_radius - layout.radius * half).abs() < EPS);
    assert!((layout.center.x - 220.0).abs() < EPS);
    assert!((layout.center.y - 220.0).abs() < EPS);
}

#[test]
fn pinned_fixture_keeps_out_of_range_values() {
    let layout = layout_fixture("per_dimension_pinned.json");
    assert_eq!(layout.items[0].normalized, vec![0.5, 0.5, 0.25]);
    assert_eq!(layout.items[1].normalized, vec![1.5, 0.1, 0.75]);
    let outside = layout.items[1].points[0].distance_to(&layout.center);
    assert!(outside > layout.radius);
}

#[test]
fn reversing_items_mirrors_the_item_order_only() {
    let f = fixture("per_dimension_auto.json");
    let mut reversed = f["series"].clone();
    if let Some(items) = reversed["items"].as_array_mut() {
        items.reverse();
    }

    let a = layout_radar_chart(&f["series"], &f["config"]).unwrap().layout;
    let b = layout_radar_chart(&reversed, &f["config"]).unwrap().layout;
    assert_eq!(a.ranges, b.ranges);
    assert_eq!(a.gridlines, b.gridlines);
    assert_eq!(a.items[0].points, b.items[2].points);
    assert_eq!(a.items[2].points, b.items[0].points);
}

#[test]
fn layout_serializes_to_json() {
    let layout = layout_fixture("no_gridlines.json");
    let v = serde_json::to_value(&layout).expect("serialize");
    assert_eq!(v["dimension_count"], serde_json::json!(6));
    assert_eq!(v["items"].as_array().map(|a| a.len()), Some(2));
    let back: RadarLayout = serde_json::from_value(v).expect("deserialize");
    assert_eq!(back, layout);
}

#[test]
fn malformed_models_are_rejected_before_layout() {
    use radarplot_core::Error as CoreError;
    use radarplot_render::Error;

    let err = layout_radar_chart(&serde_json::json!({"items": []}), &Value::Null).unwrap_err();
    assert!(matches!(err, Error::Core(CoreError::EmptyInput)));

    let err = layout_radar_chart(
        &serde_json::json!({
            "dimensionCount": 3,
            "items": [{"values": [1, 2]}, {"values": [3, 4]}],
            "options": {"perDimension": true}
        }),
        &Value::Null,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Core(CoreError::ShapeMismatch {
            expected: 3,
            actual: 2,
            ..
        })
    ));
}
