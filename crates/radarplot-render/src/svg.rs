use crate::Result;
use crate::layout::layout_series;
use crate::model::{Bounds, LayoutPoint, RadarLayout};
use crate::render::{RenderContext, render_radar};
use radarplot_core::{PlotArea, RadarSeries};
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the computed viewBox.
    pub viewbox_padding: f64,
    /// Root `<svg id="...">`; defaults to `radar`.
    pub diagram_id: Option<String>,
    /// CSS background color of the root element. `None` keeps it transparent.
    pub background: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 8.0,
            diagram_id: None,
            background: Some("white".to_string()),
        }
    }
}

/// A [`RenderContext`] that writes SVG elements into a string buffer.
#[derive(Debug, Default)]
pub struct SvgRenderContext {
    out: String,
}

impl SvgRenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl RenderContext for SvgRenderContext {
    fn draw_polygon(
        &mut self,
        points: &[LayoutPoint],
        fill: Option<&str>,
        stroke: Option<&str>,
        stroke_thickness: f64,
    ) {
        let mut pts = String::new();
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                pts.push(' ');
            }
            let _ = write!(&mut pts, "{},{}", fmt(p.x), fmt(p.y));
        }
        let _ = write!(
            &mut self.out,
            r#"<polygon points="{pts}" fill="{fill}" stroke="{stroke}" stroke-width="{w}"/>"#,
            fill = paint(fill),
            stroke = paint(stroke),
            w = fmt(stroke_thickness)
        );
    }

    fn draw_circle(
        &mut self,
        center: LayoutPoint,
        radius: f64,
        fill: Option<&str>,
        stroke: Option<&str>,
        stroke_thickness: f64,
    ) {
        let _ = write!(
            &mut self.out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" stroke="{stroke}" stroke-width="{w}"/>"#,
            cx = fmt(center.x),
            cy = fmt(center.y),
            r = fmt(radius),
            fill = paint(fill),
            stroke = paint(stroke),
            w = fmt(stroke_thickness)
        );
    }
}

fn paint(color: Option<&str>) -> String {
    escape_xml(color.unwrap_or("none"))
}

/// Renders a laid-out chart as a standalone SVG document.
///
/// The viewBox covers both the plot area and every emitted vertex, so values past their range
/// max are not cut off.
pub fn render_radar_svg(
    layout: &RadarLayout,
    series: &RadarSeries,
    plot_area: &PlotArea,
    options: &SvgRenderOptions,
) -> Result<String> {
    let mut body = SvgRenderContext::new();
    render_radar(layout, series, &mut body)?;

    let chart = layout.bounds();
    let pad = options.viewbox_padding.max(0.0);
    let vb = Bounds::from_points([
        (chart.min_x, chart.min_y),
        (chart.max_x, chart.max_y),
        (plot_area.left(), plot_area.top()),
        (plot_area.right(), plot_area.bottom()),
    ])
    .unwrap_or(chart);
    let vb_x = vb.min_x - pad;
    let vb_y = vb.min_y - pad;
    let vb_w = vb.width() + pad * 2.0;
    let vb_h = vb.height() + pad * 2.0;

    let diagram_id = options.diagram_id.as_deref().unwrap_or("radar");

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg" viewBox="{x} {y} {w} {h}" role="graphics-document document" aria-roledescription="radar""#,
        id = escape_xml(diagram_id),
        x = fmt(vb_x),
        y = fmt(vb_y),
        w = fmt(vb_w),
        h = fmt(vb_h),
    );
    if let Some(bg) = options.background.as_deref() {
        let _ = write!(
            &mut out,
            r#" style="background-color: {bg};""#,
            bg = escape_xml(bg)
        );
    }
    out.push('>');
    let _ = write!(
        &mut out,
        r#"<g class="radar" data-dimensions="{n}">{body}</g></svg>"#,
        n = layout.dimension_count,
        body = body.as_str()
    );
    Ok(out)
}

/// Lays out `series` inside `plot_area` and renders it as SVG.
pub fn render_series_svg(
    series: &RadarSeries,
    plot_area: &PlotArea,
    options: &SvgRenderOptions,
) -> Result<String> {
    let layout = layout_series(series, plot_area)?;
    render_radar_svg(&layout, series, plot_area, options)
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form (like JS `Number#toString()`), without `-0` or tiny float
    // noise from our own trigonometry.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
