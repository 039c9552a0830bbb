//! Maintenance table component
//!
//! Renders one row per component of the current snapshot

use super::super::state::DashboardState;
use super::super::utils::{TEAL_ACCENT, TEAL_LIGHT};

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table};

const COLUMN_TITLES: [&str; 4] = [
    "Serial No",
    "Component Name",
    "Last Maintenance",
    "Predictive Maintenance",
];

/// Render the maintenance-of-components table.
pub fn render_schedule_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("MAINTENANCE OF COMPONENTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(TEAL_ACCENT))
        .padding(Padding::horizontal(1));

    let Some(snapshot) = state.snapshot() else {
        let waiting = Paragraph::new("Waiting for first refresh...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(waiting, area);
        return;
    };

    let header = Row::new(COLUMN_TITLES)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(TEAL_LIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows = snapshot.records.iter().enumerate().map(|(index, record)| {
        // Zebra striping on even rows
        let style = if index % 2 == 1 {
            Style::default().bg(Color::Rgb(32, 38, 44))
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(record.id.to_string()),
            Cell::from(record.name),
            Cell::from(record.last_maintenance.to_string()),
            Cell::from(record.predictive_maintenance.to_string()),
        ])
        .style(style)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Fill(1),
            Constraint::Length(17),
            Constraint::Length(22),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);

    f.render_widget(table, area);
}
