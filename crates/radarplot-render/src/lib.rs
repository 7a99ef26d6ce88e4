#![forbid(unsafe_code)]

//! Headless radar chart layout and rendering.
//!
//! [`layout::layout`] turns resolved axis ranges and a set of items into screen-space
//! polygons: concentric gridline rings followed by one polygon per item. Those polygons are
//! painted through the [`render::RenderContext`] drawing primitive; [`svg`] provides an
//! implementation that emits a standalone SVG document.

pub mod layout;
pub mod model;
pub mod render;
pub mod svg;

use crate::model::RadarLayout;
use radarplot_core::{PlotArea, RadarConfig, RadarSeries};
use serde_json::Value;

pub use layout::{RadarRadius, layout, layout_series, radar_radius};
pub use render::{RenderContext, render_radar, render_series};
pub use svg::{SvgRenderContext, SvgRenderOptions, render_radar_svg, render_series_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] radarplot_core::Error),
    #[error("layout has {layout_items} item polygons but the series has {series_items} items")]
    LayoutMismatch {
        layout_items: usize,
        series_items: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A JSON series model laid out against its effective configuration.
#[derive(Debug, Clone)]
pub struct LayoutedChart {
    pub series: RadarSeries,
    pub plot_area: PlotArea,
    pub layout: RadarLayout,
}

/// Parses the JSON series model and lays it out in the plot area described by
/// `config` merged over [`RadarConfig::defaults`].
pub fn layout_radar_chart(semantic: &Value, config: &Value) -> Result<LayoutedChart> {
    let series = RadarSeries::from_value(semantic)?;
    let plot_area = RadarConfig::effective(config).plot_area();
    let layout = layout_series(&series, &plot_area)?;
    Ok(LayoutedChart {
        series,
        plot_area,
        layout,
    })
}

pub fn render_radar_chart_svg(
    semantic: &Value,
    config: &Value,
    options: &SvgRenderOptions,
) -> Result<String> {
    let chart = layout_radar_chart(semantic, config)?;
    render_radar_svg(&chart.layout, &chart.series, &chart.plot_area, options)
}
