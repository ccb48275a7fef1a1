//! Core data types shared by the listing and naming steps

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

/// A completed lesson with a recording
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChatRecord {
    pub(crate) tutor_id: String,
    pub(crate) video_url: String,
    /// Start time in the display timezone
    pub(crate) start_time: DateTime<FixedOffset>,
}

/// Chats that passed the cutoff, in API order
#[derive(Debug, Default, Clone)]
pub(crate) struct ChatList {
    pub(crate) chats: Vec<ChatRecord>,
    /// Tutor ids referenced by `chats`, in the same order (may repeat)
    pub(crate) tutor_ids: Vec<String>,
}

impl ChatList {
    pub(crate) fn push(&mut self, chat: ChatRecord) {
        self.tutor_ids.push(chat.tutor_id.clone());
        self.chats.push(chat);
    }

    pub(crate) fn len(&self) -> usize {
        self.chats.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}

/// Tutor id to display name
#[derive(Debug, Default, Clone)]
pub(crate) struct TutorDirectory {
    names: HashMap<String, String>,
}

impl TutorDirectory {
    pub(crate) fn get(&self, tutor_id: &str) -> Option<&str> {
        self.names.get(tutor_id).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

impl FromIterator<(String, String)> for TutorDirectory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// One file to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DownloadTask {
    pub(crate) file_name: String,
    pub(crate) video_url: String,
}
