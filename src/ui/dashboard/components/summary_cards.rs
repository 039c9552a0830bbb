//! Summary card components
//!
//! Renders the total cost and time-since-last-maintenance cards

use super::super::state::DashboardState;
use super::super::utils::{TEAL_DARK, TEAL_LIGHT};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

const PLACEHOLDER: &str = "--";

/// Render both summary cards stacked vertically.
pub fn render_summary_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let snapshot = state.snapshot();
    let cost = snapshot
        .map(|s| s.formatted_cost())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let elapsed = snapshot
        .map(|s| s.elapsed_since_last_maintenance.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    render_card(f, card_chunks[0], "TOTAL MAINTENANCE COST", cost, TEAL_DARK);
    render_card(f, card_chunks[1], "TIME SINCE LAST MAINTENANCE", elapsed, TEAL_LIGHT);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::uniform(1));

    // Vertically center the value inside the card
    let inner_height = area.height.saturating_sub(4);
    let mut lines = vec![String::new(); usize::from(inner_height / 2)];
    lines.push(value);

    let card = Paragraph::new(lines.join("\n"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(card, area);
}
