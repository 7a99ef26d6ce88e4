#![forbid(unsafe_code)]

//! `radarplot` computes the geometry of radar (spider) charts without a drawing backend.
//!
//! Axis ranges are resolved from the series (shared or per dimension, pinned or computed),
//! then laid out as concentric gridline polygons plus one polygon per item. The polygons are
//! handed to a drawing primitive of your choice.
//!
//! # Features
//!
//! - `render`: enable layout, the drawing primitive trait and SVG output (`radarplot::render`)

pub use radarplot_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use radarplot_render::model::{
        Bounds, LayoutPoint, RadarGridlineLayout, RadarItemLayout, RadarLayout,
    };
    pub use radarplot_render::render::automatic_color;
    pub use radarplot_render::{
        LayoutedChart, RadarRadius, RenderContext, SvgRenderContext, SvgRenderOptions, layout,
        layout_radar_chart, layout_series, radar_radius, render_radar, render_radar_svg,
        render_series, render_series_svg,
    };

    use radarplot_core::{PlotArea, RadarConfig, RadarSeries};
    use serde_json::Value;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Model(#[from] radarplot_core::Error),
        #[error(transparent)]
        Render(#[from] radarplot_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several charts can
    /// be inlined in the same document.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `r-` when needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "r-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "r-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "r" {
            return "r-untitled".to_string();
        }
        out.to_string()
    }

    /// Parses a JSON series model and resolves the plot area from `config`.
    pub fn prepare(semantic: &Value, config: &Value) -> Result<(RadarSeries, PlotArea)> {
        let series = RadarSeries::from_value(semantic)?;
        let plot_area = RadarConfig::effective(config).plot_area();
        Ok((series, plot_area))
    }

    /// JSON series model in, SVG document out.
    pub fn render_svg(
        semantic: &Value,
        config: &Value,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let (series, plot_area) = prepare(semantic, config)?;
        Ok(radarplot_render::render_series_svg(
            &series,
            &plot_area,
            svg_options,
        )?)
    }
}
