//! Status line and activity pane.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let color = if self.confirm_clear || self.pending_save.is_some() {
            Color::Red
        } else {
            Color::White
        };

        f.render_widget(
            Paragraph::new(self.status.clone())
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_activity(&self, f: &mut Frame, area: Rect) {
        let entries = self.logs.lines();

        // Tail that fits inside the borders, newest entry at the bottom.
        let visible = area.height.saturating_sub(2) as usize;
        let lines: Vec<Line> = entries
            .iter()
            .skip(entries.len().saturating_sub(visible))
            .map(|entry| Line::styled(entry.clone(), Style::default().add_modifier(Modifier::DIM)))
            .collect();

        let title = format!("Activity ({} events)", entries.len());
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
