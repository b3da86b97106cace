use crate::error::Result;
use crate::model::Document;

/// Abstract interface for raw document I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`CardStore`](super::CardStore) handles the "what" (capacity,
/// validation, positions).
///
/// The document is always moved whole: implementations load the entire
/// mapping and replace it on save. There is no partial update.
pub trait StorageBackend {
    /// Load the whole document.
    ///
    /// Missing storage loads as an empty document. So does corrupt or
    /// unreadable storage: flashcard data is recoverable and refusing to
    /// serve is worse than starting empty, so implementations log the
    /// problem and fall back rather than surface it.
    fn load_document(&self) -> Document;

    /// Replace the stored document with `doc`.
    fn save_document(&mut self, doc: &Document) -> Result<()>;
}
