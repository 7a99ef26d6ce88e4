//! Axis range resolution.
//!
//! A chart normalizes every value against a `(min, max)` pair before projecting it onto its
//! spoke. The pair is either shared by all dimensions or kept per dimension, and each side is
//! either pinned by the caller or computed from the data on every render pass.

use crate::model::{RadarItem, validate_items};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps `value` onto the range; `min` lands on 0 and `max` on 1. Values outside the range
    /// map outside `[0, 1]`.
    ///
    /// Finite bounds whose difference overflows `f64` are handled by working on halved
    /// operands, so a valid range never yields NaN for a finite value.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span.is_finite() {
            let n = (value - self.min) / span;
            if n.is_finite() {
                return n;
            }
        }
        (value * 0.5 - self.min * 0.5) / (self.max * 0.5 - self.min * 0.5)
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    fn check(&self, dimension: Option<usize>) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidRange {
                dimension,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RangeMode<T> {
    /// Supplied by the caller and used as-is.
    Pinned(T),
    /// Recomputed from the items on every resolution.
    Auto,
}

impl<T> Default for RangeMode<T> {
    fn default() -> Self {
        Self::Auto
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RangePolicy {
    Uniform(RangeMode<AxisRange>),
    PerDimension(RangeMode<Vec<AxisRange>>),
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self::Uniform(RangeMode::Auto)
    }
}

impl RangePolicy {
    pub fn uniform_pinned(min: f64, max: f64) -> Self {
        Self::Uniform(RangeMode::Pinned(AxisRange::new(min, max)))
    }

    pub fn per_dimension_auto() -> Self {
        Self::PerDimension(RangeMode::Auto)
    }

    pub fn per_dimension_pinned(ranges: impl Into<Vec<AxisRange>>) -> Self {
        Self::PerDimension(RangeMode::Pinned(ranges.into()))
    }

    pub fn is_per_dimension(&self) -> bool {
        matches!(self, Self::PerDimension(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedRanges {
    Uniform(AxisRange),
    PerDimension(Vec<AxisRange>),
}

impl ResolvedRanges {
    /// The range dimension `d` normalizes against.
    pub fn for_dimension(&self, d: usize) -> Option<AxisRange> {
        match self {
            Self::Uniform(range) => Some(*range),
            Self::PerDimension(ranges) => ranges.get(d).copied(),
        }
    }

    /// One range per dimension, expanding the shared range in uniform mode.
    pub fn expand(&self, dimension_count: usize) -> Vec<AxisRange> {
        match self {
            Self::Uniform(range) => vec![*range; dimension_count],
            Self::PerDimension(ranges) => ranges.clone(),
        }
    }

    /// Checks that every range satisfies `max > min` and that a per-dimension set covers
    /// exactly `dimension_count` dimensions.
    pub fn validate(&self, dimension_count: usize) -> Result<()> {
        match self {
            Self::Uniform(range) => range.check(None),
            Self::PerDimension(ranges) => {
                if ranges.len() != dimension_count {
                    return Err(Error::PinnedRangeCount {
                        expected: dimension_count,
                        actual: ranges.len(),
                    });
                }
                ranges
                    .iter()
                    .enumerate()
                    .try_for_each(|(d, range)| range.check(Some(d)))
            }
        }
    }
}

/// A computed range whose min and max coincided and was widened to `(value, value + 1)`.
///
/// Where `value + 1` rounds back to `value` the max moves to the next representable float
/// instead; at `f64::MAX` the min moves down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateRange {
    /// `None` for the shared range in uniform mode.
    pub dimension: Option<usize>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeResolution {
    pub ranges: ResolvedRanges,
    pub corrections: Vec<DegenerateRange>,
}

/// Resolves the axis ranges for one render pass.
///
/// Pinned ranges are returned unchanged after validation. Computed ranges scan the items and
/// widen any `min == max` pair by one; each widening is logged and reported in
/// [`RangeResolution::corrections`].
pub fn resolve(
    items: &[RadarItem],
    dimension_count: usize,
    policy: &RangePolicy,
) -> Result<RangeResolution> {
    validate_items(items, dimension_count)?;

    let mut corrections = Vec::new();
    let ranges = match policy {
        RangePolicy::Uniform(RangeMode::Pinned(range)) => ResolvedRanges::Uniform(*range),
        RangePolicy::PerDimension(RangeMode::Pinned(ranges)) => {
            ResolvedRanges::PerDimension(ranges.clone())
        }
        RangePolicy::Uniform(RangeMode::Auto) => {
            let values = items.iter().flat_map(|item| item.values.iter().copied());
            ResolvedRanges::Uniform(scan(values, None, &mut corrections))
        }
        RangePolicy::PerDimension(RangeMode::Auto) => ResolvedRanges::PerDimension(
            (0..dimension_count)
                .map(|d| {
                    let values = items.iter().map(|item| item.values[d]);
                    scan(values, Some(d), &mut corrections)
                })
                .collect(),
        ),
    };
    ranges.validate(dimension_count)?;

    Ok(RangeResolution {
        ranges,
        corrections,
    })
}

fn scan(
    values: impl Iterator<Item = f64>,
    dimension: Option<usize>,
    corrections: &mut Vec<DegenerateRange>,
) -> AxisRange {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min == max {
        tracing::warn!(
            dimension = ?dimension,
            value = min,
            "degenerate axis range, widening max by 1"
        );
        corrections.push(DegenerateRange {
            dimension,
            value: min,
        });
        return widen(min);
    }
    AxisRange::new(min, max)
}

fn widen(value: f64) -> AxisRange {
    let max = value + 1.0;
    if max > value {
        return AxisRange::new(value, max);
    }
    let max = value.next_up();
    if max.is_finite() {
        AxisRange::new(value, max)
    } else {
        AxisRange::new(value.next_down(), value)
    }
}
