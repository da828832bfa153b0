//! UI rendering for the timer.

use chrono::Duration;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::core::duration::format_duration_mmss;
use crate::core::Phase;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, duration controls, session info, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Duration controls
            Constraint::Min(7),    // Session info
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_durations(frame, app, chunks[1]);
    render_session(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(" pomo ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the duration controls.
fn render_durations(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focus = format_duration_mmss(Duration::minutes(app.timer.focus_minutes()));
    let brk = format_duration_mmss(Duration::minutes(app.timer.break_minutes()));

    let lines = vec![
        Line::from(vec![
            Span::raw("Focus Duration: "),
            Span::styled(
                focus,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Left/Right to adjust", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::raw("Break Duration: "),
            Span::styled(
                brk,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Up/Down to adjust", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let durations = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Durations ")
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(durations, area);
}

/// Render the current session, or a hint when idle.
fn render_session(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(session) = app.timer.session() else {
        let idle = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No session in progress.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press space to start focusing.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Session "));

        frame.render_widget(idle, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} for {} minutes",
                session.phase(),
                format_duration_mmss(session.total())
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} remaining",
            format_duration_mmss(session.remaining())
        )),
    ];

    if !app.timer.is_running() {
        lines.push(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Session ")
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(info, chunks[0]);

    let percent = session.progress() * 100.0;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(match session.phase() {
            Phase::Focusing => Color::Green,
            Phase::OnBreak => Color::Blue,
        }))
        .ratio(session.progress())
        .label(format!("{percent:.0}%"));

    frame.render_widget(gauge, chunks[1]);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | s:stop | Left/Right:focus | Up/Down:break | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
