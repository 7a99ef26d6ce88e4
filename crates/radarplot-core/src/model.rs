use crate::range::{AxisRange, RangeMode, RangePolicy};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A radar chart needs at least a triangle.
pub const MIN_DIMENSION_COUNT: usize = 3;

pub const DEFAULT_GRID_STEP_COUNT: usize = 5;
pub const DEFAULT_GRIDLINE_STROKE_COLOR: &str = "#808080";
pub const DEFAULT_GRIDLINE_STROKE_THICKNESS: f64 = 0.3;
pub const DEFAULT_ITEM_STROKE_THICKNESS: f64 = 1.0;

fn default_item_stroke_thickness() -> f64 {
    DEFAULT_ITEM_STROKE_THICKNESS
}

/// One data series: a value per dimension plus how its polygon is painted.
///
/// Colors are opaque CSS color strings. `None` leaves the choice to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarItem {
    #[serde(alias = "value")]
    pub values: Vec<f64>,
    #[serde(default)]
    pub stroke_color: Option<String>,
    #[serde(default = "default_item_stroke_thickness")]
    pub stroke_thickness: f64,
    #[serde(default)]
    pub dot_radius: f64,
    #[serde(default)]
    pub fill_color: Option<String>,
}

impl RadarItem {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            stroke_color: None,
            stroke_thickness: DEFAULT_ITEM_STROKE_THICKNESS,
            dot_radius: 0.0,
            fill_color: None,
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, thickness: f64) -> Self {
        self.stroke_color = Some(color.into());
        self.stroke_thickness = thickness;
        self
    }

    pub fn with_fill(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = radius;
        self
    }
}

/// What the host framework needs to know about a series when registering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesCapabilities {
    /// Whether the series draws against the host's cartesian axes.
    pub requires_axes: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub items: Vec<RadarItem>,
    /// Taken from the first item when unset.
    pub dimension_count: Option<usize>,
    pub grid_step_count: usize,
    pub range_policy: RangePolicy,
    pub gridline_stroke_color: Option<String>,
    pub gridline_stroke_thickness: f64,
    pub gridline_fill_color: Option<String>,
}

impl Default for RadarSeries {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            dimension_count: None,
            grid_step_count: DEFAULT_GRID_STEP_COUNT,
            range_policy: RangePolicy::default(),
            gridline_stroke_color: Some(DEFAULT_GRIDLINE_STROKE_COLOR.to_string()),
            gridline_stroke_thickness: DEFAULT_GRIDLINE_STROKE_THICKNESS,
            gridline_fill_color: None,
        }
    }
}

impl RadarSeries {
    /// Radar charts lay themselves out around the plot area center and never use the host axes.
    pub const CAPABILITIES: SeriesCapabilities = SeriesCapabilities {
        requires_axes: false,
    };

    pub fn new(items: impl Into<Vec<RadarItem>>) -> Self {
        Self {
            items: items.into(),
            ..Self::default()
        }
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn with_grid_step_count(mut self, count: usize) -> Self {
        self.grid_step_count = count;
        self
    }

    pub fn with_dimension_count(mut self, count: usize) -> Self {
        self.dimension_count = Some(count);
        self
    }

    /// The dimension count for this render pass, checked against the minimum.
    pub fn effective_dimension_count(&self) -> Result<usize> {
        let count = match self.dimension_count {
            Some(count) => count,
            None => self.items.first().ok_or(Error::EmptyInput)?.values.len(),
        };
        validate_dimension_count(count)?;
        Ok(count)
    }

    /// Parses the JSON series model.
    ///
    /// ```json
    /// {
    ///   "items": [{ "values": [4, 3.2, 8], "strokeColor": "black", "strokeThickness": 1 }],
    ///   "dimensionCount": 3,
    ///   "options": { "gridStepCount": 10, "perDimension": false, "min": 0, "max": 10 }
    /// }
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let model = SeriesModel::deserialize(value)?;
        let options = model.options;

        let grid_step_count = match options.grid_step_count {
            None => DEFAULT_GRID_STEP_COUNT,
            Some(n) if n >= 0 => n as usize,
            Some(n) => {
                return Err(Error::InvalidModel {
                    message: format!("gridStepCount must not be negative, got {n}"),
                });
            }
        };

        let range_policy = if options.per_dimension {
            PerDimensionPin::from_options(options.mins, options.maxes)?.into_policy()
        } else {
            let mode = match (options.min, options.max) {
                (Some(min), Some(max)) => RangeMode::Pinned(AxisRange::new(min, max)),
                (None, None) => RangeMode::Auto,
                _ => {
                    return Err(Error::InvalidModel {
                        message: "min and max must be pinned together".to_string(),
                    });
                }
            };
            RangePolicy::Uniform(mode)
        };

        let defaults = Self::default();
        Ok(Self {
            items: model.items,
            dimension_count: model.dimension_count,
            grid_step_count,
            range_policy,
            gridline_stroke_color: options
                .gridline_stroke_color
                .or(defaults.gridline_stroke_color),
            gridline_stroke_thickness: options
                .gridline_stroke_thickness
                .unwrap_or(defaults.gridline_stroke_thickness),
            gridline_fill_color: options.gridline_fill_color,
        })
    }
}

struct PerDimensionPin(Option<Vec<AxisRange>>);

impl PerDimensionPin {
    fn from_options(mins: Option<Vec<f64>>, maxes: Option<Vec<f64>>) -> Result<Self> {
        match (mins, maxes) {
            (None, None) => Ok(Self(None)),
            (Some(mins), Some(maxes)) => {
                if mins.len() != maxes.len() {
                    return Err(Error::InvalidModel {
                        message: format!(
                            "mins has {} entries but maxes has {}",
                            mins.len(),
                            maxes.len()
                        ),
                    });
                }
                Ok(Self(Some(
                    mins.into_iter()
                        .zip(maxes)
                        .map(|(min, max)| AxisRange::new(min, max))
                        .collect(),
                )))
            }
            _ => Err(Error::InvalidModel {
                message: "mins and maxes must be pinned together".to_string(),
            }),
        }
    }

    fn into_policy(self) -> RangePolicy {
        match self.0 {
            Some(ranges) => RangePolicy::PerDimension(RangeMode::Pinned(ranges)),
            None => RangePolicy::PerDimension(RangeMode::Auto),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeriesModel {
    #[serde(default)]
    items: Vec<RadarItem>,
    #[serde(default)]
    dimension_count: Option<usize>,
    #[serde(default)]
    options: SeriesOptionsModel,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeriesOptionsModel {
    #[serde(default, alias = "axisStepCount")]
    grid_step_count: Option<i64>,
    #[serde(default, alias = "isDifferentAxisValue")]
    per_dimension: bool,
    #[serde(default)]
    min: Option<f64>,
    #[serde(default)]
    max: Option<f64>,
    #[serde(default)]
    mins: Option<Vec<f64>>,
    #[serde(default)]
    maxes: Option<Vec<f64>>,
    #[serde(default)]
    gridline_stroke_color: Option<String>,
    #[serde(default)]
    gridline_stroke_thickness: Option<f64>,
    #[serde(default)]
    gridline_fill_color: Option<String>,
}

pub fn validate_dimension_count(count: usize) -> Result<()> {
    if count < MIN_DIMENSION_COUNT {
        return Err(Error::DegenerateDimensionCount { count });
    }
    Ok(())
}

/// Checks the items of one render pass: at least one item, exactly `dimension_count` values
/// each, all of them finite.
pub fn validate_items(items: &[RadarItem], dimension_count: usize) -> Result<()> {
    validate_dimension_count(dimension_count)?;
    if items.is_empty() {
        return Err(Error::EmptyInput);
    }
    for (i, item) in items.iter().enumerate() {
        if item.values.len() != dimension_count {
            return Err(Error::ShapeMismatch {
                item: i,
                expected: dimension_count,
                actual: item.values.len(),
            });
        }
        if let Some(d) = item.values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteValue {
                item: i,
                dimension: d,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn series_never_requires_axes() {
        assert!(!RadarSeries::CAPABILITIES.requires_axes);
    }

    #[test]
    fn dimension_count_defaults_to_the_first_item() {
        let series = RadarSeries::new(vec![RadarItem::new(vec![1.0, 2.0, 3.0, 4.0])]);
        assert_eq!(series.effective_dimension_count().unwrap(), 4);

        let series = series.with_dimension_count(5);
        assert_eq!(series.effective_dimension_count().unwrap(), 5);

        let err = RadarSeries::default()
            .effective_dimension_count()
            .unwrap_err();
        assert!(matches!(err, Error::EmptyInput));

        let err = RadarSeries::new(vec![RadarItem::new(vec![1.0, 2.0])])
            .effective_dimension_count()
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateDimensionCount { count: 2 }));
    }

    #[test]
    fn validate_items_reports_the_first_bad_item() {
        let items = vec![
            RadarItem::new(vec![1.0, 2.0, 3.0]),
            RadarItem::new(vec![1.0, f64::NAN, 3.0]),
        ];
        let err = validate_items(&items, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::NonFiniteValue {
                item: 1,
                dimension: 1
            }
        ));
        assert!(validate_items(&items[..1], 3).is_ok());
    }

    #[test]
    fn parses_the_json_series_model() {
        let series = RadarSeries::from_value(&json!({
            "items": [
                {"values": [4, 3.2, 8, 9], "strokeColor": "black", "strokeThickness": 2, "dotRadius": 3},
                {"value": [1, 2, 3, 4], "fillColor": "rgba(0,0,255,0.2)"}
            ],
            "options": {"gridStepCount": 10, "min": 0, "max": 10, "gridlineStrokeColor": "gray"}
        }))
        .unwrap();

        assert_eq!(series.items.len(), 2);
        assert_eq!(
            series.items[0],
            RadarItem::new(vec![4.0, 3.2, 8.0, 9.0])
                .with_stroke("black", 2.0)
                .with_dot_radius(3.0)
        );
        assert_eq!(series.items[1].stroke_thickness, 1.0);
        assert_eq!(
            series.items[1].fill_color.as_deref(),
            Some("rgba(0,0,255,0.2)")
        );
        assert_eq!(series.grid_step_count, 10);
        assert_eq!(series.range_policy, RangePolicy::uniform_pinned(0.0, 10.0));
        assert_eq!(series.gridline_stroke_color.as_deref(), Some("gray"));
        assert_eq!(series.gridline_stroke_thickness, 0.3);
    }

    #[test]
    fn parses_per_dimension_pins() {
        let series = RadarSeries::from_value(&json!({
            "items": [{"values": [1, 2, 3]}],
            "options": {"perDimension": true, "mins": [0, 0, 0], "maxes": [1, 10, 100]}
        }))
        .unwrap();
        assert_eq!(
            series.range_policy,
            RangePolicy::per_dimension_pinned(vec![
                AxisRange::new(0.0, 1.0),
                AxisRange::new(0.0, 10.0),
                AxisRange::new(0.0, 100.0),
            ])
        );

        let series = RadarSeries::from_value(&json!({
            "items": [{"values": [1, 2, 3]}],
            "options": {"isDifferentAxisValue": true}
        }))
        .unwrap();
        assert_eq!(series.range_policy, RangePolicy::per_dimension_auto());
        assert_eq!(series.grid_step_count, DEFAULT_GRID_STEP_COUNT);
    }

    #[test]
    fn rejects_half_pinned_or_negative_options() {
        for options in [
            json!({"min": 0}),
            json!({"perDimension": true, "maxes": [1, 2, 3]}),
            json!({"perDimension": true, "mins": [0, 0], "maxes": [1, 2, 3]}),
            json!({"gridStepCount": -1}),
        ] {
            let err = RadarSeries::from_value(&json!({
                "items": [{"values": [1, 2, 3]}],
                "options": options
            }))
            .unwrap_err();
            assert!(matches!(err, Error::InvalidModel { .. }), "{err}");
        }

        let err = RadarSeries::from_value(&json!({"items": [{"values": "nope"}]})).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
