// src/services/transcript.rs
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryRole {
    User,
    Bot,
}

#[derive(Clone, Debug)]
pub struct TranscriptEntry {
    pub role: EntryRole,
    pub text: String,
    pub timestamp: Instant,
}

/// Ordered chat history for one widget. Display order is insertion order.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    // Append an entry and return the new length.
    pub fn append(&mut self, role: EntryRole, text: impl Into<String>) -> usize {
        self.entries.push(TranscriptEntry {
            role,
            text: text.into(),
            timestamp: Instant::now(),
        });
        self.entries.len()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
