//! Statistics tab rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_stats_tab(&self, f: &mut Frame, area: Rect) {
        let Some(ref stats) = self.stats else {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No statistics computed",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Press r to compute statistics"),
            ];
            f.render_widget(
                Paragraph::new(text)
                    .block(Block::default().borders(Borders::ALL).title("Statistics")),
                area,
            );
            return;
        };

        let lines: Vec<Line> = stats
            .render()
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();

        let title = format!(
            "Statistics - {} matches, {} hands analyzed | r: Refresh",
            stats.total_matches, stats.total_hands
        );

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
    }
}
