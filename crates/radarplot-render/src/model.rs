use radarplot_core::AxisRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

impl LayoutPoint {
    pub fn distance_to(&self, other: &LayoutPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// One concentric ring of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGridlineLayout {
    /// 1-based; the ring at `step == grid_step_count` is the outer edge of the chart.
    pub step: usize,
    pub radius: f64,
    pub points: Vec<LayoutPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarItemLayout {
    /// Position of the item in the series, which is also its paint order.
    pub index: usize,
    /// Each value mapped onto its dimension's range, unclamped.
    pub normalized: Vec<f64>,
    pub points: Vec<LayoutPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLayout {
    pub dimension_count: usize,
    pub angle_step: f64,
    pub center: LayoutPoint,
    /// Radius of the outer gridline ring and of a value sitting at its range max.
    pub radius: f64,
    /// Radius of the circle inscribed in the outer ring. Equal to `radius` for an even
    /// dimension count.
    pub inscribed_radius: f64,
    /// The range each dimension was normalized against.
    pub ranges: Vec<AxisRange>,
    /// Inner to outer.
    #[serde(default)]
    pub gridlines: Vec<RadarGridlineLayout>,
    /// In series order.
    #[serde(default)]
    pub items: Vec<RadarItemLayout>,
}

impl RadarLayout {
    /// Extent of every emitted vertex (and the center).
    pub fn bounds(&self) -> Bounds {
        let center = std::iter::once((self.center.x, self.center.y));
        let rings = self.gridlines.iter().flat_map(|g| g.points.iter());
        let items = self.items.iter().flat_map(|i| i.points.iter());
        let vertices = rings.chain(items).map(|p| (p.x, p.y));
        Bounds::from_points(center.chain(vertices)).unwrap_or(Bounds {
            min_x: self.center.x,
            min_y: self.center.y,
            max_x: self.center.x,
            max_y: self.center.y,
        })
    }
}
