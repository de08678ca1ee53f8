//! Score submission and match finalization flow.

use crate::db::matches::insert_match;
use crate::error::TrackerError;
use crate::model::CompletedMatch;
use crate::session::HandOutcome;

use super::super::{app::App, types::EntryField};

/// Helper struct for driving the record-hand operation from the entry tab.
pub struct ScoreHandler<'a> {
    app: &'a mut App,
}

impl<'a> ScoreHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Enter pressed on the entry tab: retry a stuck save if there is one,
    /// otherwise record the pending entries as a hand.
    pub fn submit(&mut self) {
        if let Some(completed) = self.app.pending_save.take() {
            self.save_completed(completed);
            return;
        }

        let zayaka_text = self.app.zayaka_input.clone();
        let brian_text = self.app.brian_input.clone();

        match self.app.session.record_hand(&zayaka_text, &brian_text) {
            Ok(HandOutcome::InProgress {
                zayaka_total,
                brian_total,
            }) => {
                let hand = self.app.session.hands().last().copied();
                if let Some(hand) = hand {
                    self.app.status =
                        format!("Added score: Zayaka={}, Brian={}", hand.zayaka, hand.brian);
                }
                self.app
                    .log(format!("Totals now {zayaka_total}-{brian_total}"));
                self.reset_entries();
            }
            Ok(HandOutcome::MatchOver(completed)) => {
                self.reset_entries();
                self.save_completed(completed);
            }
            Err(TrackerError::NoScoreProvided) => {
                self.app.status = "Please enter at least one score".to_string();
            }
            Err(TrackerError::InvalidScoreInput(text)) => {
                self.app.status = format!("Error: {:?} is not a valid score (0-999)", text);
            }
            Err(err) => {
                self.app.status = format!("Error: {err}");
            }
        }
    }

    /// Clear un-submitted text in both entry fields; totals and history are
    /// untouched. Always legal.
    pub fn clear_entries(&mut self) {
        self.reset_entries();
        self.app.status = "Fields cleared".to_string();
    }

    fn reset_entries(&mut self) {
        self.app.zayaka_input.clear();
        self.app.brian_input.clear();
        self.app.focus = EntryField::Zayaka;
    }

    fn save_completed(&mut self, completed: CompletedMatch) {
        let result = self
            .app
            .block_on_db(insert_match(&self.app.db_pool, &completed));

        match result {
            Ok(id) => {
                self.app.log(format!("Match #{id} saved"));
                self.app.banner = Some(format!(
                    "Match Complete!\n\nWinner: {}\n\nFinal Scores:\nZayaka: {}\nBrian: {}\n\nPress any key for a new match",
                    completed.winner, completed.zayaka_total, completed.brian_total
                ));
                self.app.status = "New match started - enter scores".to_string();
                // Stale projections; reloaded on next tab entry.
                self.app.history = None;
                self.app.stats = None;
            }
            Err(err) => {
                tracing::error!("failed to save match: {err}");
                self.app.log(format!("Failed to save match: {err}"));
                self.app.status =
                    "Storage unavailable - press Enter to retry saving the match".to_string();
                self.app.pending_save = Some(completed);
            }
        }
    }
}
