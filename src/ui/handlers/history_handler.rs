//! History and statistics tab state management.

use crate::db::matches::{SortOrder, all_matches, clear_matches};
use crate::stats::MatchStatistics;

use super::super::{app::App, types::Tab};

/// Helper struct for loading, refreshing, and clearing stored matches.
pub struct HistoryHandler<'a> {
    app: &'a mut App,
}

impl<'a> HistoryHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn enter_history_tab(&mut self) {
        self.app.tab = Tab::History;
        self.app.confirm_clear = false;
        if self.app.history.is_none() {
            self.load_history();
        }
    }

    pub fn enter_stats_tab(&mut self) {
        self.app.tab = Tab::Stats;
        self.app.confirm_clear = false;
        if self.app.stats.is_none() {
            self.refresh_stats();
        }
    }

    /// Full re-read of the repository, newest first for display.
    pub fn load_history(&mut self) {
        match self
            .app
            .block_on_db(all_matches(&self.app.db_pool, SortOrder::NewestFirst))
        {
            Ok(records) => {
                self.app.log(format!("Loaded {} match(es)", records.len()));
                self.app.history = Some(records);
            }
            Err(err) => {
                self.app.log(format!("Failed to load history: {err}"));
                self.app.status = format!("Failed to load history: {err}");
            }
        }
    }

    /// Recompute statistics from a fresh full read, oldest first so the
    /// streak walk sees chronological order.
    pub fn refresh_stats(&mut self) {
        match self
            .app
            .block_on_db(all_matches(&self.app.db_pool, SortOrder::OldestFirst))
        {
            Ok(records) => {
                let stats = MatchStatistics::from_records(&records);
                self.app.log(format!(
                    "Statistics updated - {} matches, {} hands analyzed",
                    stats.total_matches, stats.total_hands
                ));
                self.app.stats = Some(stats);
            }
            Err(err) => {
                self.app.log(format!("Failed to compute statistics: {err}"));
                self.app.status = format!("Failed to compute statistics: {err}");
            }
        }
    }

    /// Start the clear-all flow; nothing is deleted until it is confirmed.
    pub fn request_clear(&mut self) {
        self.app.confirm_clear = true;
        self.app.status =
            "Clear ALL match history? This cannot be undone. (y/n)".to_string();
    }

    pub fn cancel_clear(&mut self) {
        self.app.confirm_clear = false;
        self.app.status = "Clear cancelled".to_string();
    }

    pub fn clear_all(&mut self) {
        self.app.confirm_clear = false;
        match self.app.block_on_db(clear_matches(&self.app.db_pool)) {
            Ok(removed) => {
                self.app.log(format!("Cleared {removed} match(es)"));
                self.app.status = "All match history cleared".to_string();
                self.app.history = Some(Vec::new());
                self.app.stats = None;
            }
            Err(err) => {
                self.app.log(format!("Failed to clear history: {err}"));
                self.app.status = format!("Failed to clear history: {err}");
            }
        }
    }
}
