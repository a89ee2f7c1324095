//! Widget configuration model.
//!
//! The configurator edits three widget kinds (clock, weather, countdown)
//! plus a shared style block. Each kind keeps its own parameters, so the
//! active selection is a sum type: a generated URL can never mix clock
//! parameters into a weather widget.

/// Widget kind selected in the first form step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Clock,
    Weather,
    Countdown,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Clock, WidgetKind::Weather, WidgetKind::Countdown];

    /// Identifier used as the `type` query parameter.
    pub fn param(self) -> &'static str {
        match self {
            WidgetKind::Clock => "clock",
            WidgetKind::Weather => "weather",
            WidgetKind::Countdown => "countdown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WidgetKind::Clock => "Clock",
            WidgetKind::Weather => "Weather",
            WidgetKind::Countdown => "Countdown",
        }
    }

    pub fn next(self) -> Self {
        match self {
            WidgetKind::Clock => WidgetKind::Weather,
            WidgetKind::Weather => WidgetKind::Countdown,
            WidgetKind::Countdown => WidgetKind::Clock,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WidgetKind::Clock => WidgetKind::Countdown,
            WidgetKind::Weather => WidgetKind::Clock,
            WidgetKind::Countdown => WidgetKind::Weather,
        }
    }
}

/// Clock display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    TwelveHour,
    TwentyFourHour,
    Analog,
}

impl ClockMode {
    pub fn param(self) -> &'static str {
        match self {
            ClockMode::TwelveHour => "12h",
            ClockMode::TwentyFourHour => "24h",
            ClockMode::Analog => "analog",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClockMode::TwelveHour => "Digital (12h)",
            ClockMode::TwentyFourHour => "Digital (24h)",
            ClockMode::Analog => "Analog (Minimal)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ClockMode::TwelveHour => ClockMode::TwentyFourHour,
            ClockMode::TwentyFourHour => ClockMode::Analog,
            ClockMode::Analog => ClockMode::TwelveHour,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ClockMode::TwelveHour => ClockMode::Analog,
            ClockMode::TwentyFourHour => ClockMode::TwelveHour,
            ClockMode::Analog => ClockMode::TwentyFourHour,
        }
    }
}

/// Temperature units for the weather widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    pub fn param(self) -> &'static str {
        match self {
            Units::Celsius => "celsius",
            Units::Fahrenheit => "fahrenheit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Units::Celsius => "Celsius (°C)",
            Units::Fahrenheit => "Fahrenheit (°F)",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Units::Celsius => Units::Fahrenheit,
            Units::Fahrenheit => Units::Celsius,
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Units::Celsius
    }
}

/// Forecast range for the weather widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    Today,
    ThreeDay,
}

impl Forecast {
    pub fn param(self) -> &'static str {
        match self {
            Forecast::Today => "today",
            Forecast::ThreeDay => "3day",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Forecast::Today => "Today Only",
            Forecast::ThreeDay => "3-Day Forecast",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Forecast::Today => Forecast::ThreeDay,
            Forecast::ThreeDay => Forecast::Today,
        }
    }
}

impl Default for Forecast {
    fn default() -> Self {
        Forecast::Today
    }
}

/// Font family hint passed to the render service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Sans,
    Serif,
    Mono,
}

impl FontStyle {
    pub fn param(self) -> &'static str {
        match self {
            FontStyle::Sans => "sans",
            FontStyle::Serif => "serif",
            FontStyle::Mono => "mono",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontStyle::Sans => "Default (Sans Serif)",
            FontStyle::Serif => "Serif",
            FontStyle::Mono => "Mono",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FontStyle::Sans => FontStyle::Serif,
            FontStyle::Serif => FontStyle::Mono,
            FontStyle::Mono => FontStyle::Sans,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FontStyle::Sans => FontStyle::Mono,
            FontStyle::Serif => FontStyle::Sans,
            FontStyle::Mono => FontStyle::Serif,
        }
    }
}

/// Padding applied by the render service around the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    Small,
    Medium,
    Large,
}

impl Padding {
    pub fn param(self) -> &'static str {
        match self {
            Padding::Small => "small",
            Padding::Medium => "medium",
            Padding::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Padding::Small => "Small",
            Padding::Medium => "Medium",
            Padding::Large => "Large",
        }
    }

    /// Cell margin used when the preview approximates the padding.
    pub fn cells(self) -> u16 {
        match self {
            Padding::Small => 1,
            Padding::Medium => 2,
            Padding::Large => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Padding::Small => Padding::Medium,
            Padding::Medium => Padding::Large,
            Padding::Large => Padding::Small,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Padding::Small => Padding::Large,
            Padding::Medium => Padding::Small,
            Padding::Large => Padding::Medium,
        }
    }
}

/// Timezone choices offered by the timezone field. The detected host zone
/// may fall outside this list; cycling then starts from the first preset.
pub const TIMEZONE_PRESETS: [&str; 8] = [
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "Asia/Tokyo",
    "Australia/Sydney",
];

/// Fallback when the host zone cannot be resolved.
const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Resolve the host environment's IANA timezone name.
pub fn detect_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(tz) => tz,
        Err(e) => {
            tracing::warn!("Could not detect host timezone: {}", e);
            DEFAULT_TIMEZONE.to_string()
        }
    }
}

/// Clock widget parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// IANA timezone name, e.g. "Europe/Paris"
    pub timezone: String,
    pub mode: ClockMode,
    pub show_seconds: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: detect_timezone(),
            mode: ClockMode::TwelveHour,
            show_seconds: true,
        }
    }
}

impl ClockConfig {
    /// Step the timezone through the preset list. A zone outside the list
    /// (typically the detected host zone) restarts at the first preset.
    pub fn cycle_timezone(&mut self, forward: bool) {
        let pos = TIMEZONE_PRESETS.iter().position(|tz| *tz == self.timezone);
        let next = match (pos, forward) {
            (Some(i), true) => (i + 1) % TIMEZONE_PRESETS.len(),
            (Some(i), false) => (i + TIMEZONE_PRESETS.len() - 1) % TIMEZONE_PRESETS.len(),
            (None, _) => 0,
        };
        self.timezone = TIMEZONE_PRESETS[next].to_string();
    }
}

/// Weather widget parameters. The city is free text and may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherConfig {
    pub city: String,
    pub units: Units,
    pub forecast: Forecast,
}

/// Countdown widget parameters. The date is kept as the raw `YYYY-MM-DD`
/// input; an empty or malformed value means "no target".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownConfig {
    pub event_name: String,
    pub date: String,
}

/// Shared style parameters, applied regardless of widget kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub bg_color: String,
    pub transparent: bool,
    pub text_color: String,
    pub font: FontStyle,
    pub padding: Padding,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            bg_color: "#ffffff".to_string(),
            transparent: false,
            text_color: "#37352F".to_string(),
            font: FontStyle::Sans,
            padding: Padding::Medium,
        }
    }
}

/// Snapshot of the active widget: exactly one kind with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Clock(ClockConfig),
    Weather(WeatherConfig),
    Countdown(CountdownConfig),
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Clock(_) => WidgetKind::Clock,
            Widget::Weather(_) => WidgetKind::Weather,
            Widget::Countdown(_) => WidgetKind::Countdown,
        }
    }
}

/// Full configurator state: all three kinds plus style. Edits to an
/// inactive kind survive switching tabs.
#[derive(Debug, Clone)]
pub struct WidgetState {
    pub kind: WidgetKind,
    pub clock: ClockConfig,
    pub weather: WeatherConfig,
    pub countdown: CountdownConfig,
    pub style: StyleConfig,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            kind: WidgetKind::Clock,
            clock: ClockConfig::default(),
            weather: WeatherConfig::default(),
            countdown: CountdownConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl WidgetState {
    /// Snapshot the active kind for the URL builder and the preview.
    pub fn active_widget(&self) -> Widget {
        match self.kind {
            WidgetKind::Clock => Widget::Clock(self.clock.clone()),
            WidgetKind::Weather => Widget::Weather(self.weather.clone()),
            WidgetKind::Countdown => Widget::Countdown(self.countdown.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_params() {
        assert_eq!(WidgetKind::Clock.param(), "clock");
        assert_eq!(WidgetKind::Weather.param(), "weather");
        assert_eq!(WidgetKind::Countdown.param(), "countdown");
    }

    #[test]
    fn test_kind_cycle_wraps() {
        let mut kind = WidgetKind::Clock;
        for _ in 0..WidgetKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, WidgetKind::Clock);
        assert_eq!(WidgetKind::Clock.prev(), WidgetKind::Countdown);
    }

    #[test]
    fn test_style_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.bg_color, "#ffffff");
        assert_eq!(style.text_color, "#37352F");
        assert!(!style.transparent);
        assert_eq!(style.font, FontStyle::Sans);
        assert_eq!(style.padding, Padding::Medium);
    }

    #[test]
    fn test_clock_defaults() {
        let clock = ClockConfig::default();
        assert_eq!(clock.mode, ClockMode::TwelveHour);
        assert!(clock.show_seconds);
        assert!(!clock.timezone.is_empty());
    }

    #[test]
    fn test_timezone_cycle() {
        let mut clock = ClockConfig {
            timezone: "America/New_York".to_string(),
            ..ClockConfig::default()
        };
        clock.cycle_timezone(true);
        assert_eq!(clock.timezone, "America/Chicago");
        clock.cycle_timezone(false);
        assert_eq!(clock.timezone, "America/New_York");
        clock.cycle_timezone(false);
        assert_eq!(clock.timezone, "Australia/Sydney");
    }

    #[test]
    fn test_timezone_cycle_from_unknown_zone() {
        let mut clock = ClockConfig {
            timezone: "Antarctica/Troll".to_string(),
            ..ClockConfig::default()
        };
        clock.cycle_timezone(true);
        assert_eq!(clock.timezone, TIMEZONE_PRESETS[0]);
    }

    #[test]
    fn test_active_widget_matches_kind() {
        let mut state = WidgetState::default();
        assert_eq!(state.active_widget().kind(), WidgetKind::Clock);

        state.kind = WidgetKind::Countdown;
        state.countdown.event_name = "Launch".to_string();
        match state.active_widget() {
            Widget::Countdown(c) => assert_eq!(c.event_name, "Launch"),
            other => panic!("unexpected widget: {:?}", other),
        }
    }

    #[test]
    fn test_inactive_kind_edits_survive_switch() {
        let mut state = WidgetState::default();
        state.kind = WidgetKind::Weather;
        state.weather.city = "Lisbon".to_string();
        state.kind = WidgetKind::Clock;
        state.kind = WidgetKind::Weather;
        assert_eq!(state.weather.city, "Lisbon");
    }
}
