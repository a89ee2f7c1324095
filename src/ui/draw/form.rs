//! The configuration form: widget kind tabs, per-kind fields, style fields,
//! and the generate action.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Field};
use crate::ui::theme::Theme;
use crate::widget::{WidgetKind, WidgetState};

/// Label column width; values start right after it.
const LABEL_WIDTH: usize = 14;

/// One form row: field, label, display value, placeholder for empty text.
struct Row {
    field: Field,
    label: &'static str,
    value: String,
    placeholder: &'static str,
}

impl Row {
    fn new(field: Field, label: &'static str, value: String) -> Self {
        Self {
            field,
            label,
            value,
            placeholder: "",
        }
    }

    fn text(field: Field, label: &'static str, value: &str, placeholder: &'static str) -> Self {
        Self {
            field,
            label,
            value: value.to_string(),
            placeholder,
        }
    }
}

fn switch(on: bool) -> String {
    if on { "[on]".to_string() } else { "[off]".to_string() }
}

fn choice(label: &str) -> String {
    format!("‹{}›", label)
}

fn kind_rows(state: &WidgetState) -> Vec<Row> {
    match state.kind {
        WidgetKind::Clock => vec![
            Row::new(Field::Timezone, "Timezone", choice(&state.clock.timezone)),
            Row::new(Field::ClockMode, "Clock Type", choice(state.clock.mode.label())),
            Row::new(Field::Seconds, "Show Seconds", switch(state.clock.show_seconds)),
        ],
        WidgetKind::Weather => vec![
            Row::text(Field::City, "City Name", &state.weather.city, "e.g., New York"),
            Row::new(Field::Units, "Units", choice(state.weather.units.label())),
            Row::new(Field::Forecast, "Forecast", choice(state.weather.forecast.label())),
        ],
        WidgetKind::Countdown => vec![
            Row::text(
                Field::EventName,
                "Event Name",
                &state.countdown.event_name,
                "e.g., My Birthday",
            ),
            Row::text(Field::EventDate, "Event Date", &state.countdown.date, "YYYY-MM-DD"),
        ],
    }
}

fn style_rows(state: &WidgetState) -> Vec<Row> {
    let mut rows = Vec::new();
    if !state.style.transparent {
        rows.push(Row::text(
            Field::Background,
            "Background",
            &state.style.bg_color,
            "#rrggbb",
        ));
    }
    rows.push(Row::new(
        Field::Transparent,
        "Transparent",
        switch(state.style.transparent),
    ));
    rows.push(Row::text(
        Field::TextColor,
        "Text Color",
        &state.style.text_color,
        "#rrggbb",
    ));
    rows.push(Row::new(Field::Font, "Font Style", choice(state.style.font.label())));
    rows.push(Row::new(Field::Padding, "Padding", choice(state.style.padding.label())));
    rows
}

pub(crate) fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let state = app.state();
    let selected = app.selected_field();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(" widgetforge ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor: Option<(u16, u16)> = None;

    // Step 1: widget kind tabs (switched with Tab, not focusable)
    lines.push(section_line("Step 1: Choose Widget Type", theme));
    lines.push(tabs_line(state.kind, theme));
    lines.push(Line::default());

    lines.push(section_line("Step 2: Customize", theme));
    for row in kind_rows(state) {
        push_row(&mut lines, &mut cursor, inner, &row, selected, app.is_editing(), theme);
    }
    lines.push(Line::default());

    lines.push(section_line("Step 3: Style Settings", theme));
    for row in style_rows(state) {
        push_row(&mut lines, &mut cursor, inner, &row, selected, app.is_editing(), theme);
    }
    lines.push(Line::default());

    // Generate action
    let generate_style = if selected == Field::Generate {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };
    let prefix = if selected == Field::Generate { "● " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(prefix.to_string(), generate_style),
        Span::styled("[ Generate Widget URL ]", generate_style),
    ]));

    f.render_widget(Paragraph::new(lines), inner);

    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }
}

fn section_line(title: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(theme.dimmed).add_modifier(Modifier::BOLD),
    ))
}

fn tabs_line(active: WidgetKind, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, kind) in WidgetKind::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.dimmed_alt)));
        }
        let style = if *kind == active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.dimmed)
        };
        spans.push(Span::styled(kind.label(), style));
    }
    Line::from(spans)
}

#[allow(clippy::too_many_arguments)]
fn push_row(
    lines: &mut Vec<Line<'static>>,
    cursor: &mut Option<(u16, u16)>,
    inner: Rect,
    row: &Row,
    selected: Field,
    editing: bool,
    theme: &Theme,
) {
    let is_selected = row.field == selected;
    let line_index = lines.len() as u16;

    let prefix_style = if is_selected {
        Style::default().fg(theme.highlight)
    } else {
        Style::default().fg(theme.dimmed)
    };
    let prefix = if is_selected { "● " } else { "  " };

    let value_style = if is_selected {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };

    let value_span = if row.value.is_empty() && !row.placeholder.is_empty() {
        Span::styled(
            row.placeholder,
            Style::default()
                .fg(theme.dimmed_alt)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(row.value.clone(), value_style)
    };

    lines.push(Line::from(vec![
        Span::styled(prefix.to_string(), prefix_style),
        Span::styled(
            format!("{:<width$}", row.label, width = LABEL_WIDTH),
            Style::default().fg(theme.dimmed),
        ),
        value_span,
    ]));

    // Place the terminal cursor at the end of the value being edited.
    if is_selected && editing {
        let x = inner.x + 2 + LABEL_WIDTH as u16 + row.value.width() as u16;
        let y = inner.y + line_index;
        if x < inner.right() && y < inner.bottom() {
            *cursor = Some((x, y));
        }
    }
}
