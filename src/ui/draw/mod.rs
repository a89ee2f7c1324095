//! Drawing functions for the TUI
//!
//! Split by pane:
//! - `form` - the configuration form (widget type, customize, style)
//! - `preview` - the live widget preview

mod form;
mod preview;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use form::draw_form;
use preview::draw_preview;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();

    // Fill background
    let bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Form + preview
            Constraint::Length(4), // Embed URL
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(20)])
        .split(chunks[0]);

    draw_form(f, app, panes[0]);
    draw_preview(f, app, panes[1]);
    draw_url_bar(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

/// Draw the embed URL section with the copy confirmation
fn draw_url_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let (url_line, hint_line) = match app.generated_url() {
        Some(url) => {
            let url_line = Line::from(Span::styled(
                url.to_string(),
                Style::default().fg(theme.foreground),
            ));
            let hint = if app.copied() {
                Line::from(Span::styled(
                    "Copied!",
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    "y: copy, then type /embed in your page and paste the link",
                    Style::default().fg(theme.dimmed_alt),
                ))
            };
            (url_line, hint)
        }
        None => (
            Line::from(Span::styled(
                "Press g to generate the widget URL",
                Style::default().fg(theme.dimmed),
            )),
            Line::from(Span::styled(
                "The URL is a snapshot; regenerate after changing settings",
                Style::default().fg(theme.dimmed_alt),
            )),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(" Step 4: Get Your Embed URL ");
    f.render_widget(Paragraph::new(vec![url_line, hint_line]).block(block), area);
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.is_editing() {
        " editing | type to change the value | Enter/Esc: done"
    } else {
        " Tab: widget | j/k: field | h/l: change | Enter: edit | g: generate | y: copy | q: quit"
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(app.theme().dimmed));
    f.render_widget(status_bar, area);
}
