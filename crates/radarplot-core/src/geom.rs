pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// The drawable rectangle the host hands over for one render pass.
///
/// The chart is centered on the rectangle's midpoint and sized from its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea(Rect);

impl PlotArea {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self(Rect::new(point(left, top), Size::new(width, height)))
    }

    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn rect(&self) -> Rect {
        self.0
    }

    pub fn left(&self) -> f64 {
        self.0.min_x()
    }

    pub fn top(&self) -> f64 {
        self.0.min_y()
    }

    pub fn right(&self) -> f64 {
        self.0.max_x()
    }

    pub fn bottom(&self) -> f64 {
        self.0.max_y()
    }

    pub fn width(&self) -> f64 {
        self.0.size.width
    }

    pub fn height(&self) -> f64 {
        self.0.size.height
    }

    pub fn center(&self) -> Point {
        point(
            (self.left() + self.right()) / 2.0,
            (self.top() + self.bottom()) / 2.0,
        )
    }
}
