//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{app::App, types::Tab};
use super::{HistoryHandler, ScoreHandler};

/// Helper struct for routing keyboard input to the right handler.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // The completed-match banner swallows the next keypress.
        if self.app.banner.is_some() {
            self.app.banner = None;
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('e' | 'E'), KeyModifiers::CONTROL) => {
                self.app.tab = Tab::Entry;
                self.app.confirm_clear = false;
            }

            (KeyCode::Char('h' | 'H'), KeyModifiers::CONTROL) => {
                self.app.log("Switching to match history");
                HistoryHandler::new(self.app).enter_history_tab();
            }

            (KeyCode::Char('t' | 'T'), KeyModifiers::CONTROL) => {
                self.app.log("Switching to statistics");
                HistoryHandler::new(self.app).enter_stats_tab();
            }

            _ => match self.app.tab {
                Tab::Entry => self.handle_entry_key(key),
                Tab::History => self.handle_history_key(key),
                Tab::Stats => self.handle_stats_key(key),
            },
        }
        false
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => ScoreHandler::new(self.app).submit(),
            KeyCode::Esc => ScoreHandler::new(self.app).clear_entries(),
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Backspace => {
                let field = self.app.focus;
                self.app.input_text_mut(field).pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let field = self.app.focus;
                if let Some(blocker) = self.app.blocking_player(field) {
                    self.app.status = format!("Blocked - {} has score", blocker);
                    return;
                }
                if self.app.input_text(field).len() < 3 {
                    self.app.input_text_mut(field).push(c);
                }
            }
            _ => {}
        }
    }

    fn switch_focus(&mut self) {
        let target = self.app.focus.other();
        match self.app.blocking_player(target) {
            None => self.app.focus = target,
            Some(blocker) => {
                self.app.status = format!("Blocked - {} has score", blocker);
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        if self.app.confirm_clear {
            match key.code {
                KeyCode::Char('y' | 'Y') => HistoryHandler::new(self.app).clear_all(),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    HistoryHandler::new(self.app).cancel_clear()
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('r' | 'R') => HistoryHandler::new(self.app).load_history(),
            KeyCode::Char('c' | 'C') => HistoryHandler::new(self.app).request_clear(),
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('r' | 'R') = key.code {
            HistoryHandler::new(self.app).refresh_stats();
        }
    }
}
