use super::backend::StorageBackend;
use crate::error::{CardError, Result};
use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File-based storage: the whole document lives in one JSON file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    /// Open the document at `path`, eagerly creating an empty one (and any
    /// parent directories) if nothing is there yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(CardError::Io)?;
                }
            }
            write_atomic(&path, "{}")?;
        }
        Ok(Self { path })
    }

    /// Open the document in the platform data directory
    /// (e.g. `~/.local/share/snapcards/cards.json`).
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "snapcards")
            .ok_or_else(|| CardError::Store("no home directory available".to_string()))?;
        Self::open(dirs.data_dir().join("cards.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FsBackend {
    fn load_document(&self) -> Document {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "card file unreadable, starting empty");
                return Document::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "card file corrupt, starting empty");
                Document::new()
            }
        }
    }

    fn save_document(&mut self, doc: &Document) -> Result<()> {
        let content = serde_json::to_string_pretty(doc).map_err(CardError::Serialization)?;
        write_atomic(&self.path, &content)
    }
}

/// Write to a sibling temp file, then rename over the target, so a reader
/// never observes a half-written document.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content).map_err(CardError::Io)?;
    fs::rename(&tmp, path).map_err(CardError::Io)?;
    Ok(())
}
