use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of entries retained before the oldest are evicted
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// CommandHistory - bounded log of raw command strings, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    #[serde(skip, default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty history that keeps at most `limit` entries (minimum 1)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Change the bound, evicting the oldest entries if necessary
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.evict();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a raw command string
    pub fn add(&mut self, command_text: impl Into<String>) {
        self.entries.push_back(command_text.into());
        self.evict();
    }

    /// Entries from earliest to most recent
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict(&mut self) {
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }
}
