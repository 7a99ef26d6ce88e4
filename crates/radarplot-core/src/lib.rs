#![forbid(unsafe_code)]

//! Radar chart series model and axis range resolution (headless).
//!
//! This crate owns everything that happens before geometry: the series/item model handed
//! over by the host, its JSON form, the configuration layer and the axis range policy
//! (shared or per-dimension min/max, pinned or computed from the data).
//!
//! Polygon layout and drawing live in `radarplot-render`.

pub mod config;
pub mod error;
pub mod geom;
pub mod model;
pub mod range;

pub use config::RadarConfig;
pub use error::{Error, Result};
pub use geom::{PlotArea, Point};
pub use model::{
    MIN_DIMENSION_COUNT, RadarItem, RadarSeries, SeriesCapabilities, validate_dimension_count,
    validate_items,
};
pub use range::{
    AxisRange, DegenerateRange, RangeMode, RangePolicy, RangeResolution, ResolvedRanges, resolve,
};
