//! Current-match hand table and running totals.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::model::Player;
use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_current_match(&self, f: &mut Frame, area: Rect) {
        let hands = self.session.hands();

        let mut rows: Vec<Row> = hands
            .iter()
            .enumerate()
            .map(|(i, hand)| {
                Row::new(vec![
                    format!("Hand {}", i + 1),
                    hand.zayaka.to_string(),
                    hand.brian.to_string(),
                ])
            })
            .collect();

        if !hands.is_empty() {
            let (zayaka_total, brian_total) = self.session.totals();
            rows.push(
                Row::new(vec![
                    "TOTALS".to_string(),
                    zayaka_total.to_string(),
                    brian_total.to_string(),
                ])
                .style(
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        }

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Percentage(45),
                Constraint::Percentage(45),
            ],
        )
        .header(
            Row::new(vec!["Hand #", "Zayaka", "Brian"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Current Match Scores"),
        );

        f.render_widget(table, area);
    }

    pub(in crate::ui) fn draw_totals(&self, f: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw("  Zayaka: "),
            Span::styled(
                self.session.total_for(Player::Zayaka).to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    Brian: "),
            Span::styled(
                self.session.total_for(Player::Brian).to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    (first to 100 wins)"),
        ]);

        f.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Current Match Totals"),
            ),
            area,
        );
    }
}
