//! Dashboard footer component
//!
//! Renders the monitoring controls and quit instructions

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer with key bindings.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let key_style = Style::default().add_modifier(Modifier::BOLD);
    let footer_line = Line::from(vec![
        Span::styled("[S] Start Monitoring", key_style.fg(Color::LightGreen)),
        Span::raw(" | "),
        Span::styled("[X] Stop Monitoring", key_style.fg(Color::LightRed)),
        Span::raw(" | "),
        Span::styled("[Q] Quit", key_style.fg(Color::Cyan)),
    ]);

    let footer = Paragraph::new(footer_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
