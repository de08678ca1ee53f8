mod current_match;
mod entry;
mod history;
mod stats_view;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::{app::App, types::Tab};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Tab content
                Constraint::Length(3), // Status line
                Constraint::Length(6), // Activity pane
            ])
            .split(f.area());

        match self.tab {
            Tab::Entry => self.draw_entry_tab(f, layout[0]),
            Tab::History => self.draw_history_tab(f, layout[0]),
            Tab::Stats => self.draw_stats_tab(f, layout[0]),
        }

        self.draw_status(f, layout[1]);
        self.draw_activity(f, layout[2]);

        if let Some(ref banner) = self.banner {
            self.draw_banner(f, banner);
        }
    }

    fn draw_entry_tab(&self, f: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar / help
                Constraint::Length(3), // Entry fields
                Constraint::Min(6),    // Current match table
                Constraint::Length(3), // Totals
            ])
            .split(area);

        self.draw_tab_bar(f, layout[0]);
        self.draw_entry_fields(f, layout[1]);
        self.draw_current_match(f, layout[2]);
        self.draw_totals(f, layout[3]);
    }

    fn draw_banner(&self, f: &mut Frame, banner: &str) {
        let area = centered_rect(40, 12, f.area());
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(banner)
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Match Complete"),
                ),
            area,
        );
    }
}

/// A fixed-size rect centered inside `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
