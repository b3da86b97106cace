//! # Storage Layer
//!
//! Per-user card collections, persisted as a single JSON document mapping
//! user id to an ordered card list.
//!
//! Storage is split the same way as the rest of the crate's seams:
//!
//! - [`StorageBackend`]: raw whole-document I/O
//!   - [`fs_backend::FsBackend`]: production file storage (`cards.json`)
//!   - [`mem_backend::MemBackend`]: in-memory storage for testing
//! - [`CardStore`]: the business rules — caption validation, the per-user
//!   capacity limit, position addressing
//!
//! Every mutation is read-entire-document, apply, write-entire-document.
//! That keeps the file the unit of atomicity: a write can never merge
//! half-and-half with another, at the cost of last-write-wins under
//! concurrent writers. `CardStore` takes `&mut self` for mutations so a
//! caller serializes writers simply by owning one store.

use crate::error::{CardError, Result};
use crate::model::{Card, DeleteOutcome, ListedCard, UserId};
use tracing::debug;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

/// Default per-user collection cap.
pub const DEFAULT_MAX_CARDS: usize = 200;

/// Durable CRUD over per-user card collections.
pub struct CardStore<B: StorageBackend> {
    backend: B,
    max_cards: usize,
}

impl<B: StorageBackend> CardStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            max_cards: DEFAULT_MAX_CARDS,
        }
    }

    pub fn with_max_cards(mut self, max_cards: usize) -> Self {
        self.max_cards = max_cards;
        self
    }

    pub fn max_cards(&self) -> usize {
        self.max_cards
    }

    /// The user's cards in insertion order. Unknown users have an empty
    /// collection, never an error.
    pub fn cards(&self, user: UserId) -> Vec<Card> {
        self.backend
            .load_document()
            .remove(&user.to_string())
            .unwrap_or_default()
    }

    /// Like [`cards`](Self::cards), with each card's position attached.
    /// Positions are the only addressing scheme for deletion/pagination.
    pub fn list(&self, user: UserId) -> Vec<ListedCard> {
        self.cards(user)
            .into_iter()
            .enumerate()
            .map(|(position, card)| ListedCard {
                position,
                image_ref: card.image_ref,
                caption: card.caption,
            })
            .collect()
    }

    pub fn count(&self, user: UserId) -> usize {
        self.backend
            .load_document()
            .get(&user.to_string())
            .map_or(0, Vec::len)
    }

    /// Append a card and persist. Returns the new card's position.
    ///
    /// The caption is stored trimmed; a caption that trims to nothing is
    /// rejected before anything is loaded or written.
    pub fn add(&mut self, user: UserId, image_ref: &str, caption: &str) -> Result<usize> {
        let caption = caption.trim();
        if caption.is_empty() {
            return Err(CardError::InvalidCaption);
        }

        let mut doc = self.backend.load_document();
        let cards = doc.entry(user.to_string()).or_default();
        if cards.len() >= self.max_cards {
            return Err(CardError::CapacityExceeded {
                limit: self.max_cards,
            });
        }

        let position = cards.len();
        cards.push(Card::new(image_ref, caption));
        self.backend.save_document(&doc)?;
        debug!(user, position, "card added");
        Ok(position)
    }

    /// Remove the card at `index` and persist. Later cards shift down one.
    pub fn delete(&mut self, user: UserId, index: usize) -> Result<DeleteOutcome> {
        let mut doc = self.backend.load_document();
        let cards = doc.entry(user.to_string()).or_default();
        if index >= cards.len() {
            return Err(CardError::IndexOutOfRange {
                index,
                len: cards.len(),
            });
        }

        cards.remove(index);
        let remaining = cards.len();
        self.backend.save_document(&doc)?;
        debug!(user, index, remaining, "card deleted");

        Ok(DeleteOutcome {
            remaining,
            next_position: if remaining == 0 {
                None
            } else {
                Some(index.min(remaining - 1))
            },
        })
    }
}
