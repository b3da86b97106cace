use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numeric user identifier, supplied by the transport. Opaque to this crate.
pub type UserId = u64;

/// One flashcard: an opaque image reference plus its caption.
///
/// `image_ref` identifies an image in the transport's own storage and is
/// never interpreted here. The wire names (`image`, `caption`) are a
/// compatibility contract with existing saved documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "image")]
    pub image_ref: String,
    pub caption: String,
}

impl Card {
    pub fn new(image_ref: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            caption: caption.into(),
        }
    }
}

/// The persisted document: user-id-as-string to that user's ordered cards.
///
/// A BTreeMap keeps serialized output deterministically ordered, so saving
/// the same logical mapping always produces the same bytes.
pub type Document = BTreeMap<String, Vec<Card>>;

/// A card as returned by `list`: the stored fields plus the position index,
/// which is the only way cards are addressed for pagination and deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedCard {
    pub position: usize,
    pub image_ref: String,
    pub caption: String,
}

/// Outcome of a successful delete.
///
/// `next_position` is a reasonable card for the caller to display next:
/// the old index clamped to the shortened collection, or `None` when the
/// collection emptied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub remaining: usize,
    pub next_position: Option<usize>,
}
