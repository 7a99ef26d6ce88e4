//! Gridline and data polygon layout.
//!
//! Dimension `d` sits on the spoke at `d * 2π / N`, measured clockwise from straight up.
//! Screen space has y growing downwards, so a point at distance `r` on that spoke is
//! `(cx + r·sin θ, cy − r·cos θ)`.

use crate::Result;
use crate::model::{LayoutPoint, RadarGridlineLayout, RadarItemLayout, RadarLayout};
use radarplot_core::{
    Error, PlotArea, Point, RadarItem, RadarSeries, ResolvedRanges, resolve, validate_items,
};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarRadius {
    pub outer: f64,
    pub inscribed: f64,
}

/// Sizes the chart so its vertical extent matches `plot_area_height`.
///
/// With an even dimension count the polygon is symmetric top to bottom and half the height is
/// enough. With an odd count the bottom edge sits at `outer · cos(π/N)` below the center, so
/// the outer radius is `height / (1 + cos(π/N))`.
pub fn radar_radius(dimension_count: usize, plot_area_height: f64) -> RadarRadius {
    if dimension_count % 2 == 0 {
        let r = plot_area_height / 2.0;
        return RadarRadius {
            outer: r,
            inscribed: r,
        };
    }
    let half_angle_cos = (TAU / dimension_count as f64 / 2.0).cos();
    let outer = plot_area_height / (1.0 + half_angle_cos);
    RadarRadius {
        outer,
        inscribed: outer * half_angle_cos,
    }
}

/// Unit vector (screen space) for every spoke, in dimension order.
fn spokes(dimension_count: usize) -> Vec<(f64, f64)> {
    let angle_step = TAU / dimension_count as f64;
    (0..dimension_count)
        .map(|d| {
            let angle = d as f64 * angle_step;
            (angle.sin(), -angle.cos())
        })
        .collect()
}

fn project(center: Point, spoke: (f64, f64), distance: f64) -> LayoutPoint {
    LayoutPoint {
        x: center.x + distance * spoke.0,
        y: center.y + distance * spoke.1,
    }
}

/// Lays out one render pass.
///
/// Everything is validated before any geometry is produced: the dimension count, every item's
/// shape and values, every range, the plot height and the plot center. Values are normalized against their
/// dimension's range without clamping, so out-of-range values land outside the outer ring or
/// inside the center.
pub fn layout(
    dimension_count: usize,
    items: &[RadarItem],
    ranges: &ResolvedRanges,
    plot_area_height: f64,
    plot_center: Point,
    grid_step_count: usize,
) -> Result<RadarLayout> {
    validate_items(items, dimension_count)?;
    ranges.validate(dimension_count)?;
    if !plot_area_height.is_finite() || plot_area_height < 0.0 {
        return Err(Error::InvalidPlotArea {
            height: plot_area_height,
        }
        .into());
    }
    if !plot_center.x.is_finite() || !plot_center.y.is_finite() {
        return Err(Error::InvalidPlotCenter {
            x: plot_center.x,
            y: plot_center.y,
        }
        .into());
    }

    let radius = radar_radius(dimension_count, plot_area_height);
    let ranges = ranges.expand(dimension_count);
    let spokes = spokes(dimension_count);

    let gridlines: Vec<RadarGridlineLayout> = (1..=grid_step_count)
        .map(|step| {
            let r = step as f64 * (radius.outer / grid_step_count as f64);
            RadarGridlineLayout {
                step,
                radius: r,
                points: spokes
                    .iter()
                    .map(|&spoke| project(plot_center, spoke, r))
                    .collect(),
            }
        })
        .collect();

    let items: Vec<RadarItemLayout> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let normalized: Vec<f64> = item
                .values
                .iter()
                .zip(&ranges)
                .map(|(&v, range)| range.normalize(v))
                .collect();
            let points = normalized
                .iter()
                .zip(&spokes)
                .map(|(&n, &spoke)| project(plot_center, spoke, radius.outer * n))
                .collect();
            RadarItemLayout {
                index,
                normalized,
                points,
            }
        })
        .collect();

    tracing::debug!(
        dimension_count,
        radius = radius.outer,
        gridlines = gridlines.len(),
        items = items.len(),
        "radar layout"
    );

    Ok(RadarLayout {
        dimension_count,
        angle_step: TAU / dimension_count as f64,
        center: LayoutPoint {
            x: plot_center.x,
            y: plot_center.y,
        },
        radius: radius.outer,
        inscribed_radius: radius.inscribed,
        ranges,
        gridlines,
        items,
    })
}

/// Resolves the series' ranges and lays it out inside `area`.
pub fn layout_series(series: &RadarSeries, area: &PlotArea) -> Result<RadarLayout> {
    let dimension_count = series.effective_dimension_count()?;
    let resolution = resolve(&series.items, dimension_count, &series.range_policy)?;
    layout(
        dimension_count,
        &series.items,
        &resolution.ranges,
        area.height(),
        area.center(),
        series.grid_step_count,
    )
}
