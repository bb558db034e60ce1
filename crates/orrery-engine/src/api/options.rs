use serde::{Deserialize, Serialize};

pub const DEFAULT_SPEED: f64 = 5.0;
pub const DEFAULT_MAX_SPEED: f64 = 20.0;
/// Ambient level once real view has been switched off.
pub const REAL_VIEW_OFF_AMBIENT: f32 = 0.5;

/// User-facing display settings. Mutated only between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Global simulation speed multiplier.
    pub speed: f64,
    /// Upper bound for `speed`, from the `ms` query parameter.
    pub max_speed: f64,
    /// Drop ambient light so the sun is the only light source.
    pub real_view: bool,
    pub show_path: bool,
    pub show_neos: bool,
    pub show_phos: bool,
    /// Ambient light level. Starts dark; only the real-view switch raises it.
    pub ambient: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            real_view: false,
            show_path: false,
            show_neos: false,
            show_phos: false,
            ambient: 0.0,
        }
    }
}

/// Immutable per-tick view of the options the integrator reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSnapshot {
    pub global_speed: f64,
}

impl DisplayOptions {
    /// Defaults, with `max_speed` taken from an `ms=<number>` query parameter
    /// when it holds a positive finite number. Accepts a leading `?`.
    pub fn with_query(query: &str) -> Self {
        let mut options = Self::default();
        let raw = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "ms")
            .map(|(_, value)| value);

        if let Some(raw) = raw {
            match raw.trim().parse::<f64>() {
                Ok(ms) if ms.is_finite() && ms > 0.0 => {
                    options.max_speed = ms;
                    options.speed = options.speed.min(ms);
                }
                _ => log::warn!("ignoring ms={raw:?}: expected a positive number"),
            }
        }
        options
    }

    /// Set the speed, clamped to `[0, max_speed]`. Non-finite values are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.speed = speed.clamp(0.0, self.max_speed);
        }
    }

    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot { global_speed: self.speed }
    }

    /// Switch real view. Turning it on darkens the ambient light; turning it
    /// off brings back the 0.5 fill.
    pub fn set_real_view(&mut self, on: bool) {
        self.real_view = on;
        self.ambient = if on { 0.0 } else { REAL_VIEW_OFF_AMBIENT };
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = DisplayOptions::default();
        assert_eq!(options.speed, 5.0);
        assert_eq!(options.max_speed, 20.0);
        assert!(!options.real_view && !options.show_path && !options.show_neos && !options.show_phos);
        assert_eq!(options.ambient_intensity(), 0.0);
    }

    #[test]
    fn real_view_switch_drives_ambient() {
        let mut options = DisplayOptions::default();
        options.set_real_view(true);
        assert!(options.real_view);
        assert_eq!(options.ambient_intensity(), 0.0);
        options.set_real_view(false);
        assert_eq!(options.ambient_intensity(), 0.5);
        options.set_real_view(true);
        assert_eq!(options.ambient_intensity(), 0.0);
    }

    #[test]
    fn query_sets_max_speed() {
        assert_eq!(DisplayOptions::with_query("?ms=50").max_speed, 50.0);
        assert_eq!(DisplayOptions::with_query("a=1&ms=7.5").max_speed, 7.5);
        let low = DisplayOptions::with_query("ms=2");
        assert_eq!(low.max_speed, 2.0);
        assert_eq!(low.speed, 2.0);
    }

    #[test]
    fn bad_query_keeps_default() {
        for query in ["", "?ms=", "?ms=abc", "?ms=-3", "?ms=0", "?ms=inf", "?other=9"] {
            assert_eq!(DisplayOptions::with_query(query).max_speed, 20.0, "{query}");
        }
    }

    #[test]
    fn set_speed_clamps() {
        let mut options = DisplayOptions::default();
        options.set_speed(100.0);
        assert_eq!(options.speed, 20.0);
        options.set_speed(-1.0);
        assert_eq!(options.speed, 0.0);
        options.set_speed(f64::NAN);
        assert_eq!(options.speed, 0.0);
        assert_eq!(options.snapshot().global_speed, 0.0);
    }

    #[test]
    fn json_round_trips_through_serde() {
        let mut options = DisplayOptions::default();
        options.show_neos = true;
        let json = options.to_json();
        assert!(json.contains("\"show_neos\":true"));
        let back: DisplayOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
        let partial: DisplayOptions = serde_json::from_str("{\"real_view\":true}").unwrap();
        assert!(partial.real_view);
        assert_eq!(partial.speed, 5.0);
    }
}
