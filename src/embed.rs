//! Embed URL construction.
//!
//! The generated URL is the only contract with the render service: a base
//! endpoint plus a flat query string. Only the active widget kind's
//! parameters are emitted; the shared style parameters always follow.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::widget::{StyleConfig, Widget};

/// Render service endpoint used when the config file does not override it.
pub const DEFAULT_BASE_URL: &str = "https://api.aestheticnotion.io/render";

/// Query values escape everything outside the RFC 3986 unreserved set.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the embed URL for the given widget snapshot.
///
/// Values are percent-encoded as-is; free text is trusted, never rejected.
/// The result is a point-in-time snapshot and is not kept in sync with
/// later edits.
pub fn embed_url(widget: &Widget, style: &StyleConfig, base: &str) -> String {
    let seconds;
    let mut params: Vec<(&str, &str)> = vec![("type", widget.kind().param())];

    match widget {
        Widget::Clock(clock) => {
            seconds = clock.show_seconds.to_string();
            params.push(("tz", &clock.timezone));
            params.push(("clockType", clock.mode.param()));
            params.push(("seconds", &seconds));
        }
        Widget::Weather(weather) => {
            params.push(("city", &weather.city));
            params.push(("units", weather.units.param()));
            params.push(("forecast", weather.forecast.param()));
        }
        Widget::Countdown(countdown) => {
            params.push(("event", &countdown.event_name));
            params.push(("date", &countdown.date));
        }
    }

    let bg = if style.transparent {
        "transparent"
    } else {
        style.bg_color.as_str()
    };
    params.push(("bg", bg));
    params.push(("color", &style.text_color));
    params.push(("font", style.font.param()));
    params.push(("padding", style.padding.param()));

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{ClockConfig, ClockMode, CountdownConfig, WeatherConfig, WidgetState};

    fn query_of(url: &str) -> &str {
        url.split_once('?').expect("url has a query").1
    }

    fn keys_of(url: &str) -> Vec<&str> {
        query_of(url)
            .split('&')
            .map(|pair| pair.split_once('=').expect("key=value pair").0)
            .collect()
    }

    #[test]
    fn test_clock_url_contains_only_clock_params() {
        let widget = Widget::Clock(ClockConfig {
            timezone: "Europe/Paris".to_string(),
            mode: ClockMode::TwentyFourHour,
            show_seconds: false,
        });
        let url = embed_url(&widget, &StyleConfig::default(), DEFAULT_BASE_URL);

        let keys = keys_of(&url);
        assert_eq!(
            keys,
            ["type", "tz", "clockType", "seconds", "bg", "color", "font", "padding"]
        );
        assert!(url.contains("type=clock"));
        assert!(url.contains("tz=Europe%2FParis"));
        assert!(url.contains("clockType=24h"));
        assert!(url.contains("seconds=false"));
    }

    #[test]
    fn test_weather_url_omits_other_kinds() {
        let widget = Widget::Weather(WeatherConfig::default());
        let url = embed_url(&widget, &StyleConfig::default(), DEFAULT_BASE_URL);

        let keys = keys_of(&url);
        assert!(keys.contains(&"type"));
        assert!(keys.contains(&"city"));
        assert!(keys.contains(&"units"));
        assert!(keys.contains(&"forecast"));
        for absent in ["tz", "clockType", "seconds", "event", "date"] {
            assert!(!keys.contains(&absent), "unexpected key {}", absent);
        }
        assert!(url.contains("type=weather"));
        assert!(url.contains("units=celsius"));
        assert!(url.contains("forecast=today"));
    }

    #[test]
    fn test_countdown_url_keeps_raw_date() {
        let widget = Widget::Countdown(CountdownConfig {
            event_name: "My Birthday".to_string(),
            date: "2026-12-24".to_string(),
        });
        let url = embed_url(&widget, &StyleConfig::default(), DEFAULT_BASE_URL);

        assert!(url.contains("type=countdown"));
        assert!(url.contains("event=My%20Birthday"));
        assert!(url.contains("date=2026-12-24"));
        let keys = keys_of(&url);
        assert!(!keys.contains(&"city"));
        assert!(!keys.contains(&"tz"));
    }

    #[test]
    fn test_city_with_special_characters_is_encoded() {
        let widget = Widget::Weather(WeatherConfig {
            city: "São Paulo & friends".to_string(),
            ..WeatherConfig::default()
        });
        let url = embed_url(&widget, &StyleConfig::default(), DEFAULT_BASE_URL);

        assert!(url.contains("city=S%C3%A3o%20Paulo%20%26%20friends"));
    }

    #[test]
    fn test_transparent_overrides_background_hex() {
        let state = WidgetState::default();
        let mut style = StyleConfig {
            bg_color: "#ff00ff".to_string(),
            ..StyleConfig::default()
        };

        let url = embed_url(&state.active_widget(), &style, DEFAULT_BASE_URL);
        assert!(url.contains("bg=%23ff00ff"));

        style.transparent = true;
        let url = embed_url(&state.active_widget(), &style, DEFAULT_BASE_URL);
        assert!(url.contains("bg=transparent"));
        assert!(!url.contains("%23ff00ff"));
    }

    #[test]
    fn test_style_params_always_present() {
        for kind_widget in [
            Widget::Clock(ClockConfig::default()),
            Widget::Weather(WeatherConfig::default()),
            Widget::Countdown(CountdownConfig::default()),
        ] {
            let url = embed_url(&kind_widget, &StyleConfig::default(), DEFAULT_BASE_URL);
            let keys = keys_of(&url);
            for key in ["bg", "color", "font", "padding"] {
                assert!(keys.contains(&key), "missing style key {}", key);
            }
            assert!(url.contains("color=%2337352F"));
            assert!(url.contains("font=sans"));
            assert!(url.contains("padding=medium"));
        }
    }

    #[test]
    fn test_base_url_override() {
        let widget = Widget::Clock(ClockConfig::default());
        let url = embed_url(&widget, &StyleConfig::default(), "http://localhost:8080/render");
        assert!(url.starts_with("http://localhost:8080/render?type=clock"));
    }
}
