use crate::geom::PlotArea;
use serde_json::{Value, json};

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_MARGIN: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RadarConfig(Value);

impl Default for RadarConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl RadarConfig {
    /// Built-in chart geometry. Caller overrides are merged on top with [`Self::deep_merge`].
    pub fn defaults() -> Self {
        Self(json!({
            "radar": {
                "width": DEFAULT_WIDTH,
                "height": DEFAULT_HEIGHT,
                "marginLeft": DEFAULT_MARGIN,
                "marginRight": DEFAULT_MARGIN,
                "marginTop": DEFAULT_MARGIN,
                "marginBottom": DEFAULT_MARGIN,
            }
        }))
    }

    /// Defaults with `overrides` merged on top. Anything but a JSON object leaves the defaults
    /// untouched.
    pub fn effective(overrides: &Value) -> Self {
        let mut cfg = Self::defaults();
        if overrides.is_object() {
            cfg.deep_merge(overrides);
        }
        cfg
    }

    fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        let v = self.lookup(dotted_path)?;
        v.as_f64()
            .or_else(|| v.as_i64().map(|n| n as f64))
            .or_else(|| v.as_u64().map(|n| n as f64))
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }

    /// The drawable rectangle: the configured chart size offset by the left/top margins.
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::new(
            self.get_f64("radar.marginLeft").unwrap_or(DEFAULT_MARGIN),
            self.get_f64("radar.marginTop").unwrap_or(DEFAULT_MARGIN),
            self.get_f64("radar.width").unwrap_or(DEFAULT_WIDTH),
            self.get_f64("radar.height").unwrap_or(DEFAULT_HEIGHT),
        )
    }

    /// Full canvas size, plot area plus all four margins.
    pub fn canvas_size(&self) -> (f64, f64) {
        let area = self.plot_area();
        let right = self.get_f64("radar.marginRight").unwrap_or(DEFAULT_MARGIN);
        let bottom = self.get_f64("radar.marginBottom").unwrap_or(DEFAULT_MARGIN);
        (area.right() + right, area.bottom() + bottom)
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_a_square_plot_area_inside_margins() {
        let cfg = RadarConfig::defaults();
        let area = cfg.plot_area();
        assert_eq!(area.left(), 50.0);
        assert_eq!(area.top(), 50.0);
        assert_eq!(area.width(), 600.0);
        assert_eq!(area.height(), 600.0);
        assert_eq!(cfg.canvas_size(), (700.0, 700.0));
    }

    #[test]
    fn overrides_merge_over_defaults_without_dropping_siblings() {
        let cfg = RadarConfig::effective(&json!({"radar": {"height": 400, "marginTop": 10}}));
        assert_eq!(cfg.get_f64("radar.height"), Some(400.0));
        assert_eq!(cfg.get_f64("radar.marginTop"), Some(10.0));
        assert_eq!(cfg.get_f64("radar.width"), Some(600.0));

        let area = cfg.plot_area();
        assert_eq!(area.center().y, 10.0 + 200.0);
    }
}
