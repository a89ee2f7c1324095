use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::clipboard;
use crate::config::Config;
use crate::embed::embed_url;
use crate::ui::Theme;
use crate::widget::{WidgetKind, WidgetState};

/// A focusable form field. The visible set depends on the active widget
/// kind and on the transparency toggle (the background color input is
/// hidden while transparent is on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    // Clock
    Timezone,
    ClockMode,
    Seconds,
    // Weather
    City,
    Units,
    Forecast,
    // Countdown
    EventName,
    EventDate,
    // Style
    Background,
    Transparent,
    TextColor,
    Font,
    Padding,
    // Actions
    Generate,
}

impl Field {
    /// Whether Enter opens free-text editing on this field.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::City
                | Field::EventName
                | Field::EventDate
                | Field::Background
                | Field::TextColor
        )
    }
}

/// Application state
pub struct App {
    /// Widget configuration being edited
    state: WidgetState,
    /// Index into the current field list
    selected: usize,
    /// Whether a text field is being edited
    editing: bool,
    /// Snapshot URL from the last generate action; not kept in sync with
    /// later edits
    generated_url: Option<String>,
    /// Instant of the last successful copy; drives the "Copied!" indicator
    copied_at: Option<Instant>,
    /// Tick-injected "now" the preview is derived from
    now: DateTime<Utc>,
    /// Configuration
    config: Config,
    /// Resolved UI theme
    theme: Theme,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = config.resolve_theme();
        Self {
            state: WidgetState::default(),
            selected: 0,
            editing: false,
            generated_url: None,
            copied_at: None,
            now: Utc::now(),
            config,
            theme,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn generated_url(&self) -> Option<&str> {
        self.generated_url.as_deref()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.behavior.tick_ms.max(100))
    }

    /// Advance the preview clock. The draw pass is a pure function of
    /// (state, now); this is the only place "now" changes.
    pub fn on_tick(&mut self) {
        self.now = Utc::now();
    }

    /// The fields currently shown in the form, in display order.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = match self.state.kind {
            WidgetKind::Clock => vec![Field::Timezone, Field::ClockMode, Field::Seconds],
            WidgetKind::Weather => vec![Field::City, Field::Units, Field::Forecast],
            WidgetKind::Countdown => vec![Field::EventName, Field::EventDate],
        };
        if !self.state.style.transparent {
            fields.push(Field::Background);
        }
        fields.extend([
            Field::Transparent,
            Field::TextColor,
            Field::Font,
            Field::Padding,
            Field::Generate,
        ]);
        fields
    }

    pub fn selected_field(&self) -> Field {
        let fields = self.fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Move selection up
    pub fn previous_field(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down
    pub fn next_field(&mut self) {
        if self.selected + 1 < self.fields().len() {
            self.selected += 1;
        }
    }

    /// Switch to the next widget kind; per-kind edits are retained.
    pub fn next_kind(&mut self) {
        self.state.kind = self.state.kind.next();
        self.selected = 0;
    }

    /// Switch to the previous widget kind.
    pub fn prev_kind(&mut self) {
        self.state.kind = self.state.kind.prev();
        self.selected = 0;
    }

    /// Step the selected field backward (enums and toggles).
    pub fn cycle_left(&mut self) {
        self.cycle(false);
    }

    /// Step the selected field forward (enums and toggles).
    pub fn cycle_right(&mut self) {
        self.cycle(true);
    }

    fn cycle(&mut self, forward: bool) {
        match self.selected_field() {
            Field::Timezone => self.state.clock.cycle_timezone(forward),
            Field::ClockMode => {
                self.state.clock.mode = if forward {
                    self.state.clock.mode.next()
                } else {
                    self.state.clock.mode.prev()
                };
            }
            Field::Seconds => self.state.clock.show_seconds = !self.state.clock.show_seconds,
            Field::Units => self.state.weather.units = self.state.weather.units.toggle(),
            Field::Forecast => self.state.weather.forecast = self.state.weather.forecast.toggle(),
            Field::Transparent => self.toggle_transparent(),
            Field::Font => {
                self.state.style.font = if forward {
                    self.state.style.font.next()
                } else {
                    self.state.style.font.prev()
                };
            }
            Field::Padding => {
                self.state.style.padding = if forward {
                    self.state.style.padding.next()
                } else {
                    self.state.style.padding.prev()
                };
            }
            // Text fields and the generate button don't cycle.
            _ => {}
        }
    }

    fn toggle_transparent(&mut self) {
        self.state.style.transparent = !self.state.style.transparent;
        // The field list just changed length; keep the selection on the
        // transparency toggle.
        let fields = self.fields();
        if let Some(pos) = fields.iter().position(|f| *f == Field::Transparent) {
            self.selected = pos;
        }
    }

    /// Enter key: edit text fields, toggle switches, fire the generate
    /// action, cycle everything else.
    pub fn activate(&mut self) {
        let field = self.selected_field();
        if field.is_text() {
            self.editing = true;
        } else if field == Field::Generate {
            self.generate();
        } else {
            self.cycle_right();
        }
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// The text buffer behind the selected field, if it is editable.
    fn edit_value_mut(&mut self) -> Option<&mut String> {
        match self.selected_field() {
            Field::City => Some(&mut self.state.weather.city),
            Field::EventName => Some(&mut self.state.countdown.event_name),
            Field::EventDate => Some(&mut self.state.countdown.date),
            Field::Background => Some(&mut self.state.style.bg_color),
            Field::TextColor => Some(&mut self.state.style.text_color),
            _ => None,
        }
    }

    /// Append a character to the edited field. No validation: free text
    /// and dates degrade gracefully downstream.
    pub fn push_edit_char(&mut self, c: char) {
        if let Some(value) = self.edit_value_mut() {
            value.push(c);
        }
    }

    /// Remove the last character from the edited field
    pub fn pop_edit_char(&mut self) {
        if let Some(value) = self.edit_value_mut() {
            value.pop();
        }
    }

    /// Snapshot the embed URL for the current configuration. Stale until
    /// the user generates again.
    pub fn generate(&mut self) {
        let url = embed_url(
            &self.state.active_widget(),
            &self.state.style,
            &self.config.render.base_url,
        );
        tracing::debug!("Generated embed URL: {}", url);
        self.generated_url = Some(url);
    }

    /// Copy the generated URL to the clipboard. Fire-and-forget: a failed
    /// write just means the confirmation never shows.
    pub fn copy_url(&mut self) {
        if let Some(url) = &self.generated_url {
            if clipboard::copy(url).is_ok() {
                // A repeat copy restarts the 2-second window.
                self.copied_at = Some(Instant::now());
            }
        }
    }

    /// Whether the "Copied!" confirmation is currently visible.
    pub fn copied(&self) -> bool {
        match self.copied_at {
            Some(instant) => instant.elapsed().as_secs() < 2,
            None => false,
        }
    }
}
