//! JSON file backed settings store.
//!
//! The whole document is re-read on every `get` so separate invocations see
//! each other's writes. Writes go to a uniquely named sibling temp file that
//! is renamed over the document, so a reader never sees a half-written file.
//!
//! Stores opened on the same path within one process share a write lock.
//! There is no locking across processes: two invocations saving different
//! keys at the same moment can still lose one of the writes.

use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

use super::{SettingKey, SettingsStore};
use crate::error::BannerError;

type Document = BTreeMap<String, String>;

static WRITE_LOCKS: OnceLock<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

/// Write lock shared by every store on `path` in this process
fn write_lock_for(path: &Path) -> Arc<Mutex<()>> {
    WRITE_LOCKS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .entry(path.to_path_buf())
        .or_default()
        .clone()
}

/// Settings store persisted as a flat JSON object of key -> value
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on this path within the process
    write_lock: Arc<Mutex<()>>,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let write_lock = write_lock_for(&path);
        Self { path, write_lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Document, BannerError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Document::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            // First save establishes the document
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, document: &Document) -> Result<(), BannerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, serde_json::to_vec_pretty(document)?)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: SettingKey) -> Result<Option<String>, BannerError> {
        Ok(self.load()?.remove(key.as_str()))
    }

    fn set(&self, key: SettingKey, value: &str) -> Result<(), BannerError> {
        let _guard = self.write_lock.lock();
        let mut document = self.load()?;
        document.insert(key.as_str().to_string(), value.to_string());
        self.persist(&document)?;

        tracing::debug!(
            path = %self.path.display(),
            key = %key,
            "Setting persisted"
        );
        Ok(())
    }
}
