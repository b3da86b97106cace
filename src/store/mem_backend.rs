use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::Document;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemBackend {
    doc: Document,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemBackend {
    fn load_document(&self) -> Document {
        self.doc.clone()
    }

    fn save_document(&mut self, doc: &Document) -> Result<()> {
        self.doc = doc.clone();
        Ok(())
    }
}
