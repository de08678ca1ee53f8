//! Score entry boxes with lock-aware styling.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    app::App,
    types::{EntryField, InputStatus, Tab},
};

impl App {
    pub(in crate::ui) fn draw_tab_bar(&self, f: &mut Frame, area: Rect) {
        let tab_name = match self.tab {
            Tab::Entry => "Score Entry",
            Tab::History => "Match History",
            Tab::Stats => "Statistics",
        };
        let text = format!(
            "{} | Ctrl+E: Entry | Ctrl+H: History | Ctrl+T: Stats | Ctrl+Q: Quit",
            tab_name
        );

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Gin Rummy Score Tracker"),
            ),
            area,
        );
    }

    pub(in crate::ui) fn draw_entry_fields(&self, f: &mut Frame, area: Rect) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_entry_field(f, halves[0], EntryField::Zayaka);
        self.draw_entry_field(f, halves[1], EntryField::Brian);
    }

    fn draw_entry_field(&self, f: &mut Frame, area: Rect, field: EntryField) {
        let enabled = self.field_enabled(field);
        let focused = self.focus == field;

        let text = match self.blocking_player(field) {
            // The lock cleared this field; show why instead of an input.
            Some(blocker) => format!("Blocked - {} has score", blocker),
            None => {
                let cursor = if focused { "▌" } else { "" };
                format!("{}{}", self.input_text(field), cursor)
            }
        };

        let border_color = if !enabled {
            Color::DarkGray
        } else {
            match self.input_status(field) {
                InputStatus::Incomplete => {
                    if focused {
                        Color::Yellow
                    } else {
                        Color::Gray
                    }
                }
                InputStatus::Valid => Color::Green,
                InputStatus::Invalid(_) => Color::Red,
            }
        };

        let subtitle = match self.input_status(field) {
            InputStatus::Invalid(msg) if enabled => format!(" - {msg}"),
            _ => String::new(),
        };
        let title = format!("{}'s Score{}", field.player(), subtitle);

        f.render_widget(
            Paragraph::new(text)
                .style(if enabled {
                    Style::default()
                } else {
                    Style::default().fg(Color::DarkGray)
                })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border_color))
                        .title(title),
                ),
            area,
        );
    }
}
