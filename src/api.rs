//! # API Facade
//!
//! The single entry point a transport adapter (chat bot, CLI, web) holds.
//! It dispatches to the store and the quiz engine and normalizes inputs;
//! business logic lives in [`crate::store`] and [`crate::quiz`].
//!
//! Generic over [`StorageBackend`]:
//! - Production: `CardsApi<FsBackend>`
//! - Testing: `CardsApi<MemBackend>`
//!
//! The quiz methods here draw from [`rand::thread_rng`]. Callers that need
//! deterministic questions (tests, replays) call the [`crate::quiz`]
//! functions directly with their own RNG.

use crate::error::Result;
use crate::model::{DeleteOutcome, ListedCard, UserId};
use crate::quiz::{self, CaptionQuestion, ImageQuestion};
use crate::store::{CardStore, FsBackend, MemBackend, StorageBackend};
use std::path::Path;

/// The main API facade for flashcard operations.
pub struct CardsApi<B: StorageBackend> {
    store: CardStore<B>,
}

impl CardsApi<FsBackend> {
    /// Store cards in the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(FsBackend::open_default()?))
    }

    /// Store cards in a caller-chosen file.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(FsBackend::open(path)?))
    }
}

impl CardsApi<MemBackend> {
    /// Non-persistent store, for tests and development.
    pub fn in_memory() -> Self {
        Self::new(MemBackend::new())
    }
}

impl<B: StorageBackend> CardsApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: CardStore::new(backend),
        }
    }

    pub fn with_max_cards(mut self, max_cards: usize) -> Self {
        self.store = self.store.with_max_cards(max_cards);
        self
    }

    pub fn add_card(&mut self, user: UserId, image_ref: &str, caption: &str) -> Result<usize> {
        self.store.add(user, image_ref, caption)
    }

    pub fn list_cards(&self, user: UserId) -> Vec<ListedCard> {
        self.store.list(user)
    }

    pub fn delete_card(&mut self, user: UserId, position: usize) -> Result<DeleteOutcome> {
        self.store.delete(user, position)
    }

    pub fn count_cards(&self, user: UserId) -> usize {
        self.store.count(user)
    }

    /// Build a "guess the caption" question from the user's current cards.
    pub fn caption_question(&self, user: UserId) -> Result<CaptionQuestion> {
        quiz::caption_question(&self.store.cards(user), &mut rand::thread_rng())
    }

    /// Build a "guess the image" question from the user's current cards.
    pub fn image_question(&self, user: UserId) -> Result<ImageQuestion> {
        quiz::image_question(&self.store.cards(user), &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    #[test]
    fn facade_wires_store_operations() {
        let mut api = CardsApi::in_memory();
        assert_eq!(api.add_card(42, "imgA", "cat").unwrap(), 0);
        assert_eq!(api.count_cards(42), 1);
        assert_eq!(api.list_cards(42)[0].caption, "cat");

        let outcome = api.delete_card(42, 0).unwrap();
        assert_eq!(outcome.remaining, 0);
    }

    #[test]
    fn facade_quiz_needs_three_cards() {
        let mut api = CardsApi::in_memory();
        api.add_card(42, "imgA", "cat").unwrap();
        assert!(matches!(
            api.caption_question(42),
            Err(CardError::InsufficientCards { have: 1 })
        ));
        assert!(matches!(
            api.image_question(42),
            Err(CardError::InsufficientCards { have: 1 })
        ));
    }

    #[test]
    fn facade_builds_questions_from_the_users_own_cards() {
        let mut api = CardsApi::in_memory();
        for (img, cap) in [("imgA", "cat"), ("imgB", "dog"), ("imgC", "bird")] {
            api.add_card(42, img, cap).unwrap();
        }
        // Another user's cards must not leak into 42's question.
        api.add_card(7, "imgZ", "zebra").unwrap();

        let q = api.caption_question(42).unwrap();
        assert_eq!(q.options.len(), 3);
        assert!(!q.options.iter().any(|o| o == "zebra"));
        assert!(q.check(q.correct_index).unwrap());
    }
}
