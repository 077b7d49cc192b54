//! Advisory adjusters layered on top of a computed route.
//!
//! Each adjuster consumes a stop sequence plus base distance/time and
//! returns an adjusted time with human-readable annotations; the routing
//! core never depends on their internals. All datasets are injected at
//! construction so tests can supply alternate conditions.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

/// Adjusted travel estimate plus annotations for the rider.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    /// Adjusted walking time in seconds.
    pub adjusted_time: f64,
    pub notes: Vec<String>,
}

/// Contract every advisory adjuster satisfies.
pub trait RouteAdvisor {
    fn name(&self) -> &'static str;

    /// Assess a route given its ordered stop names, total distance in
    /// metres, and base walking time in seconds.
    fn assess(&self, stops: &[String], distance: f64, base_time: f64) -> Advisory;
}

/// Foot-traffic congestion model.
///
/// Combines per-location congestion factors with a peak-window
/// multiplier derived from the departure time.
#[derive(Debug, Clone)]
pub struct TrafficModel {
    congestion: HashMap<String, f64>,
    departure: NaiveTime,
}

impl TrafficModel {
    pub fn new(congestion: HashMap<String, f64>, departure: NaiveTime) -> Self {
        Self {
            congestion,
            departure,
        }
    }

    /// Default congestion dataset for the sample campus.
    pub fn sample(departure: NaiveTime) -> Self {
        let congestion = [
            ("Main Gate", 1.4),
            ("Banking Square", 1.5),
            ("Night Market", 1.6),
            ("Balme Library", 1.2),
            ("Bush Canteen", 1.5),
            ("Akuafo Hall", 1.1),
            ("Legon Hall", 1.1),
            ("Great Hall", 1.0),
            ("JQB", 1.3),
            ("Business School", 1.2),
        ]
        .into_iter()
        .map(|(name, factor)| (name.to_string(), factor))
        .collect();
        Self::new(congestion, departure)
    }

    fn factor_at(&self, stop: &str) -> f64 {
        let base = self.congestion.get(stop).copied().unwrap_or(1.0);
        base * peak_multiplier(self.departure.hour())
    }
}

fn peak_multiplier(hour: u32) -> f64 {
    match hour {
        8..=9 => 1.5,
        12..=13 => 1.3,
        17..=18 => 1.6,
        _ => 1.0,
    }
}

impl RouteAdvisor for TrafficModel {
    fn name(&self) -> &'static str {
        "traffic"
    }

    fn assess(&self, stops: &[String], _distance: f64, base_time: f64) -> Advisory {
        if stops.is_empty() {
            return Advisory {
                adjusted_time: base_time,
                notes: Vec::new(),
            };
        }

        let mut notes = Vec::new();
        let mut total = 0.0;
        for stop in stops {
            let factor = self.factor_at(stop);
            if factor > 1.8 {
                notes.push(format!("Heavy foot traffic expected around {stop}"));
            }
            total += factor;
        }
        let mean = total / stops.len() as f64;

        if mean > 1.5 {
            notes.push("Heavy congestion on this route, consider leaving 30 minutes later".into());
        } else if mean > 1.2 {
            notes.push("Moderate congestion, consider leaving 15 minutes later".into());
        } else {
            notes.push("Current departure time looks good".into());
        }

        Advisory {
            adjusted_time: base_time * mean,
            notes,
        }
    }
}

/// Weather snapshot for a single location.
#[derive(Debug, Clone)]
pub struct WeatherCondition {
    pub condition: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub visibility: f64,
    pub raining: bool,
}

/// Per-location weather model.
#[derive(Debug, Clone, Default)]
pub struct WeatherModel {
    conditions: HashMap<String, WeatherCondition>,
}

impl WeatherModel {
    pub fn new(conditions: HashMap<String, WeatherCondition>) -> Self {
        Self { conditions }
    }

    /// Default conditions for the sample campus.
    pub fn sample() -> Self {
        let conditions = [
            ("Main Gate", "Sunny", 31.0, 6.0, 10.0, false),
            ("Banking Square", "Sunny", 30.5, 5.0, 10.0, false),
            ("Balme Library", "Cloudy", 28.0, 8.0, 8.0, false),
            ("Sarbah Park", "Rain", 26.0, 12.0, 4.0, true),
            ("Bush Canteen", "Rain", 26.5, 11.0, 4.5, true),
            ("Great Hall", "Cloudy", 27.5, 9.0, 7.0, false),
            ("Night Market", "Sunny", 32.0, 4.0, 10.0, false),
        ]
        .into_iter()
        .map(|(name, condition, temperature, wind_speed, visibility, raining)| {
            (
                name.to_string(),
                WeatherCondition {
                    condition: condition.to_string(),
                    temperature,
                    wind_speed,
                    visibility,
                    raining,
                },
            )
        })
        .collect();
        Self::new(conditions)
    }
}

impl RouteAdvisor for WeatherModel {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn assess(&self, stops: &[String], _distance: f64, base_time: f64) -> Advisory {
        let mut notes = Vec::new();
        let mut flagged: HashSet<&str> = HashSet::new();
        let mut total = 0.0;
        let mut counted = 0usize;

        for stop in stops {
            let Some(weather) = self.conditions.get(stop) else {
                continue;
            };
            counted += 1;

            let mut factor = 1.0;
            if weather.raining {
                factor += 0.3;
                if flagged.insert("umbrella") {
                    notes.push("Bring an umbrella".into());
                }
            }
            if weather.visibility < 5.0 {
                factor += 0.2;
                if flagged.insert("visibility") {
                    notes.push("Be extra careful due to low visibility".into());
                }
            }
            if weather.temperature > 30.0 {
                factor += 0.1;
                if flagged.insert("hydration") {
                    notes.push("Stay hydrated".into());
                }
            }
            if weather.wind_speed > 10.0 && flagged.insert("wind") {
                notes.push("Strong winds expected".into());
            }
            total += factor;
        }

        let mean = if counted > 0 {
            total / counted as f64
        } else {
            1.0
        };
        if mean > 1.2 {
            notes.push("Weather conditions may slow your journey".into());
        } else if mean > 1.1 {
            notes.push("Slight weather impact expected".into());
        } else {
            notes.push("Good weather conditions".into());
        }

        Advisory {
            adjusted_time: base_time * mean,
            notes,
        }
    }
}

/// Mobility profile the accessibility model scores against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessibilityNeeds {
    #[default]
    Standard,
    Wheelchair,
    Elderly,
    VisuallyImpaired,
    MobilityImpaired,
}

/// Facility data for a single location.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibilityInfo {
    pub ramp: bool,
    pub elevator: bool,
    pub wide_path: bool,
    pub smooth_surface: bool,
    pub rest_area: bool,
    pub shade: bool,
    pub step_count: u32,
    pub path_width: f64,
}

/// Per-location accessibility model scored against a mobility profile.
#[derive(Debug, Clone)]
pub struct AccessibilityModel {
    features: HashMap<String, AccessibilityInfo>,
    needs: AccessibilityNeeds,
}

impl AccessibilityModel {
    pub fn new(features: HashMap<String, AccessibilityInfo>, needs: AccessibilityNeeds) -> Self {
        Self { features, needs }
    }

    /// Default facility dataset for the sample campus.
    pub fn sample(needs: AccessibilityNeeds) -> Self {
        let features = [
            (
                "Balme Library",
                AccessibilityInfo {
                    ramp: true,
                    elevator: true,
                    wide_path: true,
                    smooth_surface: true,
                    rest_area: true,
                    shade: true,
                    step_count: 0,
                    path_width: 3.0,
                },
            ),
            (
                "Main Gate",
                AccessibilityInfo {
                    ramp: true,
                    wide_path: true,
                    smooth_surface: true,
                    path_width: 4.0,
                    ..AccessibilityInfo::default()
                },
            ),
            (
                "JQB",
                AccessibilityInfo {
                    ramp: false,
                    step_count: 12,
                    path_width: 1.8,
                    ..AccessibilityInfo::default()
                },
            ),
            (
                "Akuafo Hall",
                AccessibilityInfo {
                    ramp: true,
                    rest_area: true,
                    shade: true,
                    smooth_surface: true,
                    step_count: 4,
                    path_width: 2.5,
                    ..AccessibilityInfo::default()
                },
            ),
            (
                "Great Hall",
                AccessibilityInfo {
                    step_count: 20,
                    shade: true,
                    path_width: 2.2,
                    ..AccessibilityInfo::default()
                },
            ),
        ]
        .into_iter()
        .map(|(name, info)| (name.to_string(), info))
        .collect();
        Self::new(features, needs)
    }

    fn score(&self, info: &AccessibilityInfo) -> f64 {
        let mut score: f64 = 1.0;
        match self.needs {
            AccessibilityNeeds::Wheelchair => {
                if info.ramp {
                    score += 0.3;
                }
                if info.elevator {
                    score += 0.3;
                }
                if info.wide_path {
                    score += 0.2;
                }
                if info.smooth_surface {
                    score += 0.2;
                }
                if info.step_count > 0 {
                    score -= 0.5;
                }
            }
            AccessibilityNeeds::Elderly => {
                if info.ramp {
                    score += 0.2;
                }
                if info.elevator {
                    score += 0.3;
                }
                if info.rest_area {
                    score += 0.3;
                }
                if info.shade {
                    score += 0.2;
                }
                if info.step_count > 10 {
                    score -= 0.3;
                }
            }
            AccessibilityNeeds::VisuallyImpaired => {
                if info.smooth_surface {
                    score += 0.4;
                }
                if info.wide_path {
                    score += 0.3;
                }
                if info.step_count == 0 {
                    score += 0.3;
                }
            }
            AccessibilityNeeds::MobilityImpaired => {
                if info.ramp {
                    score += 0.3;
                }
                if info.elevator {
                    score += 0.3;
                }
                if info.rest_area {
                    score += 0.2;
                }
                if info.smooth_surface {
                    score += 0.2;
                }
            }
            AccessibilityNeeds::Standard => {}
        }
        score.max(0.1)
    }

    fn time_multiplier(&self, mean_score: f64) -> f64 {
        let mut adjustment = match self.needs {
            AccessibilityNeeds::Standard => 1.0,
            AccessibilityNeeds::Wheelchair => 1.5,
            AccessibilityNeeds::Elderly => 1.3,
            AccessibilityNeeds::VisuallyImpaired => 1.4,
            AccessibilityNeeds::MobilityImpaired => 1.6,
        };
        if mean_score < 0.5 {
            adjustment *= 1.5;
        } else if mean_score < 0.8 {
            adjustment *= 1.2;
        }
        adjustment
    }
}

impl RouteAdvisor for AccessibilityModel {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn assess(&self, stops: &[String], _distance: f64, base_time: f64) -> Advisory {
        let mut notes = Vec::new();
        let mut total_score = 0.0;
        let mut total_steps = 0u32;
        let mut counted = 0usize;

        for stop in stops {
            let Some(info) = self.features.get(stop) else {
                continue;
            };
            counted += 1;
            total_score += self.score(info);
            total_steps += info.step_count;

            if info.ramp {
                notes.push(format!("Ramp available at {stop}"));
            }
            if info.elevator {
                notes.push(format!("Elevator available at {stop}"));
            }
            if info.rest_area {
                notes.push(format!("Rest area available at {stop}"));
            }
            if info.step_count > 0 {
                notes.push(format!("{} steps at {stop}", info.step_count));
            }
            if info.path_width > 0.0 && info.path_width < 2.0 {
                notes.push(format!("Narrow path ({:.1}m) at {stop}", info.path_width));
            }
        }

        let mean_score = if counted > 0 {
            total_score / counted as f64
        } else {
            1.0
        };

        if total_steps > 15 {
            notes.push("Consider requesting assistance for step-heavy areas".into());
        }
        if self.needs == AccessibilityNeeds::Wheelchair && total_steps > 0 {
            notes.push("Some areas may not be fully wheelchair accessible".into());
        }
        if self.needs == AccessibilityNeeds::Elderly {
            notes.push("Take breaks at rest areas along the route".into());
        }
        if self.needs == AccessibilityNeeds::VisuallyImpaired {
            notes.push("Consider using a guide or assistance device".into());
        }

        Advisory {
            adjusted_time: base_time * self.time_multiplier(mean_score),
            notes,
        }
    }
}
