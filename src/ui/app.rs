use std::future::Future;
use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use tracing::info;

use crate::model::{CompletedMatch, MAX_HAND_SCORE, MatchRecord, Player};
use crate::session::{EntryLock, MatchSession, entry_lock};
use crate::stats::MatchStatistics;

use super::types::{EntryField, InputStatus, LogBuffer, Tab};

/// Central application state for the TUI.
pub struct App {
    pub(in crate::ui) session: MatchSession,
    pub(in crate::ui) zayaka_input: String,
    pub(in crate::ui) brian_input: String,
    pub(in crate::ui) focus: EntryField,
    pub(in crate::ui) tab: Tab,
    pub(in crate::ui) status: String,
    /// Match history as loaded for display (newest first); None until loaded.
    pub(in crate::ui) history: Option<Vec<MatchRecord>>,
    pub(in crate::ui) stats: Option<MatchStatistics>,
    /// Set while the clear-history flow is waiting for a y/n answer.
    pub(in crate::ui) confirm_clear: bool,
    /// Completed-match announcement shown as an overlay until a key is pressed.
    pub(in crate::ui) banner: Option<String>,
    /// A finalized match whose save failed; retried on Enter.
    pub(in crate::ui) pending_save: Option<CompletedMatch>,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) db_pool: SqlitePool,
}

impl App {
    pub fn new(logs: LogBuffer, db_pool: SqlitePool) -> Self {
        Self {
            session: MatchSession::new(),
            zayaka_input: String::new(),
            brian_input: String::new(),
            focus: EntryField::Zayaka,
            tab: Tab::Entry,
            status: "Enter scores and press Enter to add".to_string(),
            history: None,
            stats: None,
            confirm_clear: false,
            banner: None,
            pending_save: None,
            logs,
            db_pool,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    /// The current entry lock, derived purely from the pending texts.
    pub(in crate::ui) fn entry_lock(&self) -> EntryLock {
        entry_lock(&self.zayaka_input, &self.brian_input)
    }

    /// Whether a field may accept input under the mutual-exclusion rule.
    pub(in crate::ui) fn field_enabled(&self, field: EntryField) -> bool {
        match self.entry_lock() {
            EntryLock::Either => true,
            EntryLock::ZayakaOnly => field == EntryField::Zayaka,
            EntryLock::BrianOnly => field == EntryField::Brian,
        }
    }

    pub(in crate::ui) fn input_text(&self, field: EntryField) -> &str {
        match field {
            EntryField::Zayaka => &self.zayaka_input,
            EntryField::Brian => &self.brian_input,
        }
    }

    pub(in crate::ui) fn input_text_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Zayaka => &mut self.zayaka_input,
            EntryField::Brian => &mut self.brian_input,
        }
    }

    pub(in crate::ui) fn input_status(&self, field: EntryField) -> InputStatus {
        let text = self.input_text(field).trim();
        if text.is_empty() {
            return InputStatus::Incomplete;
        }
        match text.parse::<u32>() {
            Ok(score) if score <= MAX_HAND_SCORE => InputStatus::Valid,
            Ok(_) => InputStatus::Invalid("score must be 0-999"),
            Err(_) => InputStatus::Invalid("digits only"),
        }
    }

    /// Whose turn the lock has blocked, for the blocked-field placeholder.
    pub(in crate::ui) fn blocking_player(&self, field: EntryField) -> Option<Player> {
        if self.field_enabled(field) {
            None
        } else {
            Some(field.player().opponent())
        }
    }

    /// Mirror a message into both the tracing log file and the activity pane.
    pub(in crate::ui) fn log(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        tracing::info!("{msg}");
        self.logs.push(msg.to_string());
    }

    /// Bridge a repository future onto the runtime from the sync draw loop.
    pub(in crate::ui) fn block_on_db<T, E>(
        &self,
        op: impl Future<Output = Result<T, E>>,
    ) -> Result<T, E> {
        let handle = tokio::runtime::Handle::current();
        tokio::task::block_in_place(move || handle.block_on(op))
    }
}
