use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use chrono::Local;

use crate::model::Player;

/// How many activity entries the UI keeps around by default.
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Shared ring buffer of recent UI activity, oldest entries evicted first.
/// Entries are stamped with the wall-clock time they were pushed.
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, msg: String) {
        let mut entries = self.entries.lock().unwrap();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(format!("{} {}", Local::now().format("%H:%M:%S"), msg));
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// The three application tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Entry,
    History,
    Stats,
}

/// Which score entry box currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Zayaka,
    Brian,
}

impl EntryField {
    pub fn player(&self) -> Player {
        match self {
            EntryField::Zayaka => Player::Zayaka,
            EntryField::Brian => Player::Brian,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            EntryField::Zayaka => EntryField::Brian,
            EntryField::Brian => EntryField::Zayaka,
        }
    }
}

/// Validation state of one entry box, for border styling.
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}
