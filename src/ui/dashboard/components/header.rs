//! Dashboard header component
//!
//! Renders the title and the next-refresh gauge

use super::super::state::DashboardState;
use super::super::utils::{TEAL_ACCENT, format_uptime};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render header with title and refresh countdown.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new("MAINTENANCE SCHEDULE")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(TEAL_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let uptime = format_uptime(state.start_time.elapsed().as_secs());
    let (label, gauge_color, percent) = match state.refresh_progress() {
        Some(progress) => {
            let remaining = state.refresh_interval.as_secs_f64() * (1.0 - progress);
            (
                format!(
                    "{} MONITORING - next refresh in {:.1}s | refreshes: {} | uptime: {}",
                    SPINNER[state.tick % SPINNER.len()],
                    remaining,
                    state.refresh_count(),
                    uptime
                ),
                Color::LightGreen,
                (progress * 100.0) as u16,
            )
        }
        None => (
            format!(
                "MONITORING STOPPED | refreshes: {} | uptime: {}",
                state.refresh_count(),
                uptime
            ),
            Color::LightRed,
            100,
        ),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent.min(100))
        .label(label);

    f.render_widget(gauge, header_chunks[1]);
}
