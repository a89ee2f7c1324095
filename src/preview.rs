//! Pure derivation of the live preview.
//!
//! Everything here is a function of (configuration, instant). The ticking
//! "now" is injected by the run loop once per second; no function in this
//! module reads the wall clock or schedules anything, which keeps the
//! preview testable without timers.
//!
//! The preview approximates what the render service draws. Weather data is
//! an explicit mock: the service's data source is not part of this tool.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::widget::{ClockConfig, ClockMode, Forecast, Units, WeatherConfig};

/// Clock hand angles in degrees, measured clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Angles for an analog face showing the given wall-clock time.
pub fn hand_angles(hour: u32, minute: u32, second: u32) -> HandAngles {
    HandAngles {
        hour: f64::from(hour % 12) * 30.0 + f64::from(minute) * 0.5,
        minute: f64::from(minute) * 6.0,
        second: f64::from(second) * 6.0,
    }
}

/// What the clock preview should show for one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockFace {
    Digital {
        time: String,
        date: String,
    },
    Analog {
        angles: HandAngles,
        show_seconds: bool,
    },
}

/// Derive the clock face for "now" in the configured timezone.
///
/// An unparseable timezone falls back to local time rather than failing.
pub fn clock_face(config: &ClockConfig, now: DateTime<Utc>) -> ClockFace {
    match config.timezone.parse::<Tz>() {
        Ok(tz) => build_face(config, now.with_timezone(&tz)),
        Err(_) => build_face(config, now.with_timezone(&Local)),
    }
}

fn build_face<T: TimeZone>(config: &ClockConfig, local: DateTime<T>) -> ClockFace
where
    T::Offset: std::fmt::Display,
{
    if config.mode == ClockMode::Analog {
        return ClockFace::Analog {
            angles: hand_angles(local.hour(), local.minute(), local.second()),
            show_seconds: config.show_seconds,
        };
    }

    let format = match (config.mode, config.show_seconds) {
        (ClockMode::TwelveHour, true) => "%I:%M:%S %p",
        (ClockMode::TwelveHour, false) => "%I:%M %p",
        (_, true) => "%H:%M:%S",
        (_, false) => "%H:%M",
    };

    ClockFace::Digital {
        time: local.format(format).to_string(),
        date: long_date(local.year(), local.month(), local.day()),
    }
}

/// One derived forecast day in 3-day mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDay {
    pub label: &'static str,
    pub temp: i32,
    pub icon: &'static str,
}

/// Mock weather report shown in the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    pub city: String,
    pub temp: i32,
    pub unit: &'static str,
    pub condition: &'static str,
    pub icon: &'static str,
    pub outlook: Option<[ForecastDay; 2]>,
}

/// Derive the mock weather report: fixed base temperature per unit, fixed
/// offsets for the extra days. An empty city shows a placeholder.
pub fn weather_report(config: &WeatherConfig) -> WeatherReport {
    let (temp, unit) = match config.units {
        Units::Celsius => (22, "°C"),
        Units::Fahrenheit => (72, "°F"),
    };

    let city = if config.city.is_empty() {
        "City Name".to_string()
    } else {
        config.city.clone()
    };

    let outlook = match config.forecast {
        Forecast::Today => None,
        Forecast::ThreeDay => Some([
            ForecastDay {
                label: "Tomorrow",
                temp: temp + 2,
                icon: "⛅",
            },
            ForecastDay {
                label: "Day 3",
                temp: temp - 1,
                icon: "🌧",
            },
        ]),
    };

    WeatherReport {
        city,
        temp,
        unit,
        condition: "Sunny",
        icon: "☀",
        outlook,
    }
}

/// Remaining time until a countdown target, broken into whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub const ZERO: CountdownParts = CountdownParts {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };
}

/// Parse a `YYYY-MM-DD` target as UTC midnight. Empty or malformed input
/// means "no target".
pub fn parse_target_date(date: &str) -> Option<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0)?))
}

/// Long-form rendering of the countdown target, when one is set.
pub fn target_date_label(date: &str) -> Option<String> {
    parse_target_date(date).map(|d| long_date(d.year(), d.month(), d.day()))
}

/// Break down the time remaining until the target. Unset, malformed, and
/// already-passed targets all clamp to zeros; the countdown never goes
/// negative and never reports completion specially.
pub fn countdown_parts(date: &str, now: DateTime<Utc>) -> CountdownParts {
    let Some(target) = parse_target_date(date) else {
        return CountdownParts::ZERO;
    };

    let remaining = (target - now).num_seconds();
    if remaining <= 0 {
        return CountdownParts::ZERO;
    }

    CountdownParts {
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
    }
}

fn long_date(year: i32, month: u32, day: u32) -> String {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    format!("{} {}, {}", MONTHS[(month as usize - 1).min(11)], day, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_hand_angles_basic() {
        let angles = hand_angles(3, 0, 0);
        assert_eq!(angles.hour, 90.0);
        assert_eq!(angles.minute, 0.0);
        assert_eq!(angles.second, 0.0);

        // The hour hand drifts with the minutes.
        let angles = hand_angles(3, 30, 0);
        assert_eq!(angles.hour, 105.0);
        assert_eq!(angles.minute, 180.0);
    }

    #[test]
    fn test_hand_angles_periodic_in_360() {
        let noon = hand_angles(12, 0, 0);
        let midnight = hand_angles(0, 0, 0);
        assert_eq!(noon, midnight);
        assert_eq!(noon.hour % 360.0, 0.0);

        for s in 0..60 {
            assert!(hand_angles(0, 0, s).second < 360.0);
        }
    }

    #[test]
    fn test_second_hand_advances_monotonically() {
        let mut last = -1.0;
        for s in 0..60 {
            let angle = hand_angles(10, 15, s).second;
            assert!(angle > last, "second hand went backwards at {}", s);
            last = angle;
        }
    }

    #[test]
    fn test_second_hand_full_revolution_every_60_ticks() {
        let step = hand_angles(0, 0, 1).second - hand_angles(0, 0, 0).second;
        assert_eq!(step * 60.0, 360.0);
    }

    #[test]
    fn test_digital_clock_formats() {
        // Tokyo has no DST, so the offset is stable: 03:04:05 UTC = 12:04:05 JST.
        let now = utc(2026, 8, 7, 3, 4, 5);
        let mut config = ClockConfig {
            timezone: "Asia/Tokyo".to_string(),
            mode: ClockMode::TwelveHour,
            show_seconds: true,
        };

        match clock_face(&config, now) {
            ClockFace::Digital { time, date } => {
                assert_eq!(time, "12:04:05 PM");
                assert_eq!(date, "August 7, 2026");
            }
            face => panic!("expected digital face, got {:?}", face),
        }

        config.mode = ClockMode::TwentyFourHour;
        config.show_seconds = false;
        match clock_face(&config, now) {
            ClockFace::Digital { time, .. } => assert_eq!(time, "12:04"),
            face => panic!("expected digital face, got {:?}", face),
        }
    }

    #[test]
    fn test_analog_face_carries_angles() {
        let now = utc(2026, 8, 7, 0, 30, 15);
        let config = ClockConfig {
            timezone: "Europe/London".to_string(),
            mode: ClockMode::Analog,
            show_seconds: false,
        };

        // London is UTC+1 in August: 01:30:15.
        match clock_face(&config, now) {
            ClockFace::Analog {
                angles,
                show_seconds,
            } => {
                assert_eq!(angles.hour, 45.0);
                assert_eq!(angles.minute, 180.0);
                assert_eq!(angles.second, 90.0);
                assert!(!show_seconds);
            }
            face => panic!("expected analog face, got {:?}", face),
        }
    }

    #[test]
    fn test_unknown_timezone_falls_back_without_panicking() {
        let config = ClockConfig {
            timezone: "Not/AZone".to_string(),
            mode: ClockMode::TwelveHour,
            show_seconds: true,
        };
        match clock_face(&config, utc(2026, 1, 1, 0, 0, 0)) {
            ClockFace::Digital { time, .. } => assert!(!time.is_empty()),
            face => panic!("expected digital face, got {:?}", face),
        }
    }

    #[test]
    fn test_weather_base_temperatures() {
        let report = weather_report(&WeatherConfig::default());
        assert_eq!(report.temp, 22);
        assert_eq!(report.unit, "°C");
        assert_eq!(report.condition, "Sunny");
        assert_eq!(report.city, "City Name");
        assert!(report.outlook.is_none());

        let report = weather_report(&WeatherConfig {
            city: "Austin".to_string(),
            units: Units::Fahrenheit,
            forecast: Forecast::Today,
        });
        assert_eq!(report.temp, 72);
        assert_eq!(report.unit, "°F");
        assert_eq!(report.city, "Austin");
    }

    #[test]
    fn test_weather_three_day_offsets() {
        let report = weather_report(&WeatherConfig {
            forecast: Forecast::ThreeDay,
            ..WeatherConfig::default()
        });
        let outlook = report.outlook.expect("3-day mode has an outlook");
        assert_eq!(outlook[0].temp, 24);
        assert_eq!(outlook[1].temp, 21);
        assert_eq!(outlook[0].label, "Tomorrow");
        assert_eq!(outlook[1].label, "Day 3");
    }

    #[test]
    fn test_countdown_90061_seconds_out() {
        // Target midnight minus 90 061 s: 1 day, 1 hour, 1 minute, 1 second left.
        let now = utc(2026, 3, 10, 0, 0, 0) - chrono::Duration::seconds(90_061);
        let parts = countdown_parts("2026-03-10", now);
        assert_eq!(
            parts,
            CountdownParts {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1,
            }
        );
    }

    #[test]
    fn test_countdown_past_target_clamps_to_zero() {
        let parts = countdown_parts("2020-01-01", utc(2026, 1, 1, 0, 0, 0));
        assert_eq!(parts, CountdownParts::ZERO);

        // Exactly at the target also reads as zero.
        let parts = countdown_parts("2026-01-01", utc(2026, 1, 1, 0, 0, 0));
        assert_eq!(parts, CountdownParts::ZERO);
    }

    #[test]
    fn test_countdown_unset_or_malformed_date() {
        let now = utc(2026, 1, 1, 0, 0, 0);
        assert_eq!(countdown_parts("", now), CountdownParts::ZERO);
        assert_eq!(countdown_parts("next tuesday", now), CountdownParts::ZERO);
        assert_eq!(countdown_parts("2026-13-45", now), CountdownParts::ZERO);
    }

    #[test]
    fn test_target_date_label() {
        assert_eq!(
            target_date_label("2026-12-24").as_deref(),
            Some("December 24, 2026")
        );
        assert_eq!(target_date_label(""), None);
        assert_eq!(target_date_label("garbage"), None);
    }
}
