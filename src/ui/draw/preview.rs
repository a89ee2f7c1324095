//! The live preview pane.
//!
//! An approximation of what the render service will draw, recomputed from
//! (configuration, now) on every frame. Colors come from the user's own
//! hex values; parse failures fall back to the UI theme instead of
//! erroring. A terminal cannot switch fonts, so the font choice is shown
//! as a caption.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::app::App;
use crate::preview::{
    clock_face, countdown_parts, target_date_label, weather_report, ClockFace, HandAngles,
};
use crate::ui::theme::parse_hex_color;
use crate::widget::{CountdownConfig, Widget};

pub(crate) fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let style = &app.state().style;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(" Live Preview ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let widget_area = chunks[0];

    // Widget colors, not theme colors.
    let fg = parse_hex_color(&style.text_color).unwrap_or(theme.foreground);
    if !style.transparent {
        if let Ok(bg) = parse_hex_color(&style.bg_color) {
            f.render_widget(Block::default().style(Style::default().bg(bg)), widget_area);
        }
    }

    // The padding setting shrinks the drawable area, like the rendered
    // widget's padding shrinks its content box.
    let pad = style.padding.cells();
    let content = widget_area.inner(Margin {
        horizontal: pad,
        vertical: pad.min(2),
    });
    if content.height == 0 || content.width == 0 {
        return;
    }

    match app.state().active_widget() {
        Widget::Clock(clock) => match clock_face(&clock, app.now()) {
            ClockFace::Digital { time, date } => draw_digital_clock(f, content, &time, &date, fg),
            ClockFace::Analog {
                angles,
                show_seconds,
            } => draw_analog_clock(f, content, angles, show_seconds, fg),
        },
        Widget::Weather(weather) => {
            let report = weather_report(&weather);
            let mut lines = vec![
                Line::from(Span::styled(
                    report.city.clone(),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(
                    format!("{}{}", report.temp, report.unit),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} {}", report.icon, report.condition),
                    Style::default().fg(fg).add_modifier(Modifier::DIM),
                )),
            ];
            if let Some(outlook) = report.outlook {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} {}{} {}    {} {}{} {}",
                        outlook[0].label,
                        outlook[0].temp,
                        report.unit,
                        outlook[0].icon,
                        outlook[1].label,
                        outlook[1].temp,
                        report.unit,
                        outlook[1].icon,
                    ),
                    Style::default().fg(fg),
                )));
            }
            draw_centered_lines(f, content, lines);
        }
        Widget::Countdown(countdown) => draw_countdown(f, content, &countdown, app, fg),
    }

    // Caption: settings the terminal cannot visualize.
    let bg_label = if style.transparent {
        "transparent"
    } else {
        style.bg_color.as_str()
    };
    let caption = Paragraph::new(format!("font: {} · bg: {}", style.font.param(), bg_label))
        .style(Style::default().fg(theme.dimmed_alt))
        .alignment(Alignment::Right);
    f.render_widget(caption, chunks[1]);
}

/// Center a small block of lines vertically and horizontally.
fn draw_centered_lines(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[1]);
}

fn draw_digital_clock(f: &mut Frame, area: Rect, time: &str, date: &str, fg: Color) {
    draw_centered_lines(
        f,
        area,
        vec![
            Line::from(Span::styled(
                time.to_string(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                date.to_string(),
                Style::default().fg(fg).add_modifier(Modifier::DIM),
            )),
        ],
    );
}

/// Circular face with twelve hour ticks, hour/minute hands, an optional
/// second hand, and a center dot.
fn draw_analog_clock(f: &mut Frame, area: Rect, angles: HandAngles, show_seconds: bool, fg: Color) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.0,
                color: fg,
            });
            for i in 0..12 {
                let rad = f64::from(i * 30).to_radians();
                let (sin, cos) = rad.sin_cos();
                ctx.draw(&CanvasLine {
                    x1: 0.88 * sin,
                    y1: 0.88 * cos,
                    x2: sin,
                    y2: cos,
                    color: fg,
                });
            }
            draw_hand(ctx, angles.hour, 0.55, fg);
            draw_hand(ctx, angles.minute, 0.80, fg);
            if show_seconds {
                draw_hand(ctx, angles.second, 0.92, fg);
            }
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 0.04,
                color: fg,
            });
        });
    f.render_widget(canvas, area);
}

/// Hand angles are measured clockwise from 12 o'clock, so x follows sin
/// and y follows cos.
fn draw_hand(ctx: &mut Context, angle_deg: f64, length: f64, color: Color) {
    let rad = angle_deg.to_radians();
    ctx.draw(&CanvasLine {
        x1: 0.0,
        y1: 0.0,
        x2: length * rad.sin(),
        y2: length * rad.cos(),
        color,
    });
}

fn draw_countdown(f: &mut Frame, area: Rect, countdown: &CountdownConfig, app: &App, fg: Color) {
    let parts = countdown_parts(&countdown.date, app.now());
    let name = if countdown.event_name.is_empty() {
        "Event Name"
    } else {
        countdown.event_name.as_str()
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1), // Event name
            Constraint::Length(1),
            Constraint::Length(2), // Value/label grid
            Constraint::Length(1),
            Constraint::Length(1), // Target date
            Constraint::Fill(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(
            name.to_string(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[3]);
    let cells = [
        (parts.days, "Days"),
        (parts.hours, "Hours"),
        (parts.minutes, "Minutes"),
        (parts.seconds, "Seconds"),
    ];
    for (column, (value, label)) in columns.iter().zip(cells) {
        let cell = Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                label,
                Style::default().fg(fg).add_modifier(Modifier::DIM),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(cell, *column);
    }

    if let Some(date_label) = target_date_label(&countdown.date) {
        f.render_widget(
            Paragraph::new(Span::styled(
                date_label,
                Style::default().fg(fg).add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Center),
            rows[5],
        );
    }
}
