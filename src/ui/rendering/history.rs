//! Match history table rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::codec::encode_match;
use crate::model::{DATE_FORMAT, Player};
use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_history_tab(&self, f: &mut Frame, area: Rect) {
        let Some(ref records) = self.history else {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "History not loaded",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Press r to load match history"),
            ];
            f.render_widget(
                Paragraph::new(text)
                    .block(Block::default().borders(Borders::ALL).title("Match History")),
                area,
            );
            return;
        };

        if records.is_empty() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No matches recorded yet",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Finish a match on the entry tab to see it here"),
            ];
            f.render_widget(
                Paragraph::new(text)
                    .block(Block::default().borders(Borders::ALL).title("Match History")),
                area,
            );
            return;
        }

        let rows: Vec<Row> = records
            .iter()
            .map(|record| {
                let winner_style = match record.winner {
                    Player::Zayaka => Style::default().fg(Color::Cyan),
                    Player::Brian => Style::default().fg(Color::Magenta),
                };

                Row::new(vec![
                    record.completed_at.format(DATE_FORMAT).to_string(),
                    record.zayaka_total.to_string(),
                    record.brian_total.to_string(),
                    record.winner.to_string(),
                    encode_match(&record.hands),
                    record.id.to_string(),
                ])
                .style(winner_style)
            })
            .collect();

        let title = format!(
            "Match History ({} matches) | r: Refresh | c: Clear All",
            records.len()
        );

        let table = Table::new(
            rows,
            [
                Constraint::Length(20), // Date
                Constraint::Length(7),  // Zayaka
                Constraint::Length(7),  // Brian
                Constraint::Length(8),  // Winner
                Constraint::Min(20),    // Hand tokens
                Constraint::Length(5),  // ID
            ],
        )
        .header(
            Row::new(vec!["Date", "Zayaka", "Brian", "Winner", "Hands", "ID"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(table, area);
    }
}
