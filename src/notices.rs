//! One-shot admin notices.
//!
//! A notice is queued under a key when a save is rejected and is shown on
//! the next admin settings render, which drains it. Queuing the same
//! key/code pair twice before it is shown keeps a single notice.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::BannerError;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    #[default]
    Error,
    Warning,
    Success,
    Info,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Error => "error",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
        }
    }
}

/// A queued admin notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Channel key the notice is displayed under
    pub key: String,
    /// Notice code, used for de-duplication
    pub code: String,
    /// User-facing message
    pub message: String,
    #[serde(default)]
    pub level: NoticeLevel,
}

impl Notice {
    pub fn error(key: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

/// At-most-once notice channel
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Mutex<Vec<Notice>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a queue from notices persisted by an earlier request
    pub fn from_notices(notices: Vec<Notice>) -> Self {
        let queue = Self::new();
        for notice in notices {
            queue.add(notice);
        }
        queue
    }

    /// Queue a notice unless one with the same key and code is already pending
    pub fn add(&self, notice: Notice) {
        let mut pending = self.pending.lock();
        if pending
            .iter()
            .any(|n| n.key == notice.key && n.code == notice.code)
        {
            return;
        }
        tracing::debug!(key = %notice.key, code = %notice.code, "Notice queued");
        pending.push(notice);
    }

    /// Remove and return every pending notice for `key`
    pub fn take(&self, key: &str) -> Vec<Notice> {
        let mut pending = self.pending.lock();
        let (taken, kept): (Vec<_>, Vec<_>) = pending.drain(..).partition(|n| n.key == key);
        *pending = kept;
        taken
    }

    /// Number of pending notices for `key`
    pub fn pending(&self, key: &str) -> usize {
        self.pending.lock().iter().filter(|n| n.key == key).count()
    }

    /// Copy of all pending notices, for persisting between requests
    pub fn snapshot(&self) -> Vec<Notice> {
        self.pending.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

/// Load notices persisted by an earlier request; a missing file is empty
pub fn load_notice_file(path: &Path) -> Result<NoticeQueue, BannerError> {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(NoticeQueue::new()),
        Ok(contents) => Ok(NoticeQueue::from_notices(serde_json::from_str(&contents)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(NoticeQueue::new()),
        Err(e) => Err(e.into()),
    }
}

/// Persist pending notices for the next request, removing the file when
/// nothing is pending
pub fn save_notice_file(path: &Path, queue: &NoticeQueue) -> Result<(), BannerError> {
    let pending = queue.snapshot();
    if pending.is_empty() {
        return match fs::remove_file(path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        };
    }
    fs::write(path, serde_json::to_vec_pretty(&pending)?)?;
    Ok(())
}
