use crate::layout::layout_series;
use crate::model::{LayoutPoint, RadarLayout};
use crate::{Error, Result};
use radarplot_core::{PlotArea, RadarSeries};

/// The drawing surface a radar chart is painted onto.
///
/// `None` for a fill or stroke means that part is not painted.
pub trait RenderContext {
    fn draw_polygon(
        &mut self,
        points: &[LayoutPoint],
        fill: Option<&str>,
        stroke: Option<&str>,
        stroke_thickness: f64,
    );

    /// Vertex markers for items with a dot radius. Surfaces without circle support skip them.
    fn draw_circle(
        &mut self,
        _center: LayoutPoint,
        _radius: f64,
        _fill: Option<&str>,
        _stroke: Option<&str>,
        _stroke_thickness: f64,
    ) {
    }
}

/// Stroke for items that leave their color unset, picked by item index.
pub fn automatic_color(index: usize) -> &'static str {
    match index % 12 {
        0 => "hsl(240, 100%, 76.2745098039%)",
        1 => "hsl(60, 100%, 73.5294117647%)",
        2 => "hsl(80, 100%, 76.2745098039%)",
        3 => "hsl(270, 100%, 76.2745098039%)",
        4 => "hsl(300, 100%, 76.2745098039%)",
        5 => "hsl(330, 100%, 76.2745098039%)",
        6 => "hsl(0, 100%, 76.2745098039%)",
        7 => "hsl(30, 100%, 76.2745098039%)",
        8 => "hsl(90, 100%, 76.2745098039%)",
        9 => "hsl(150, 100%, 76.2745098039%)",
        10 => "hsl(180, 100%, 76.2745098039%)",
        _ => "hsl(210, 100%, 76.2745098039%)",
    }
}

/// Paints a laid-out chart: every gridline ring inner to outer, then each item's polygon in
/// series order followed by its vertex dots.
pub fn render_radar(
    layout: &RadarLayout,
    series: &RadarSeries,
    rc: &mut dyn RenderContext,
) -> Result<()> {
    let mismatch = layout.items.len() != series.items.len()
        || layout
            .items
            .iter()
            .any(|item| item.index >= series.items.len());
    if mismatch {
        return Err(Error::LayoutMismatch {
            layout_items: layout.items.len(),
            series_items: series.items.len(),
        });
    }

    for ring in &layout.gridlines {
        rc.draw_polygon(
            &ring.points,
            series.gridline_fill_color.as_deref(),
            series.gridline_stroke_color.as_deref(),
            series.gridline_stroke_thickness,
        );
    }

    for item_layout in &layout.items {
        let item = &series.items[item_layout.index];
        let stroke = item
            .stroke_color
            .as_deref()
            .unwrap_or_else(|| automatic_color(item_layout.index));
        rc.draw_polygon(
            &item_layout.points,
            item.fill_color.as_deref(),
            Some(stroke),
            item.stroke_thickness,
        );
        if item.dot_radius > 0.0 {
            for p in &item_layout.points {
                rc.draw_circle(*p, item.dot_radius, Some(stroke), None, 0.0);
            }
        }
    }
    Ok(())
}

/// Lays out `series` inside `area` and paints it. Nothing is drawn unless the whole layout
/// succeeds.
pub fn render_series(
    series: &RadarSeries,
    area: &PlotArea,
    rc: &mut dyn RenderContext,
) -> Result<RadarLayout> {
    let layout = layout_series(series, area)?;
    render_radar(&layout, series, rc)?;
    Ok(layout)
}
