//! # Snapcards
//!
//! Snapcards is a **UI-agnostic flashcard library**: users collect
//! image+caption cards and get quizzed on them in two modes (guess the
//! caption, guess the image). The chat transport that delivers messages,
//! renders keyboards, and tracks conversation state lives outside this
//! crate and talks to it through [`CardsApi`]. Images are opaque string
//! references into the transport's storage and are never decoded here.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  API facade (api.rs)                                   │
//! │  - CardsApi<B>: dispatch + input normalization only    │
//! └────────────────────────────────────────────────────────┘
//!            │                          │
//!            ▼                          ▼
//! ┌─────────────────────────┐  ┌─────────────────────────┐
//! │  Store (store/)         │  │  Quiz engine (quiz.rs)  │
//! │  - CardStore: capacity, │  │  - pure functions over  │
//! │    validation, position │  │    a card snapshot and  │
//! │    addressing           │  │    an injected RNG      │
//! │  - StorageBackend trait │  └─────────────────────────┘
//! │    (fs / memory)        │
//! └─────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never touches stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal.
//!
//! ## Persistence model
//!
//! One JSON document maps user-id to that user's ordered card list. Every
//! mutation loads the whole document, applies the change, and writes the
//! whole document back (atomically, via temp-file-and-rename). A corrupt
//! document loads as empty rather than failing: that fallback is logged
//! through `tracing` and is a deliberate recovery policy, since losing
//! flashcards is recoverable and a wedged store is not.
//!
//! The design assumes one logical stream of requests. Two stores writing
//! the same file concurrently race at whole-document granularity
//! (last write wins); serialize mutations through one `CardStore` value.
//!
//! ## Module overview
//!
//! - [`api`]: the facade a transport adapter holds
//! - [`store`]: card collections, capacity, the storage backends
//! - [`quiz`]: question construction and grading
//! - [`model`]: core data types ([`Card`], the persisted [`Document`])
//! - [`error`]: error types

pub mod api;
pub mod error;
pub mod model;
pub mod quiz;
pub mod store;

pub use api::CardsApi;
pub use error::{CardError, Result};
pub use model::{Card, DeleteOutcome, Document, ListedCard, UserId};
pub use quiz::{CaptionQuestion, ImageQuestion, MIN_QUIZ_CARDS};
pub use store::{CardStore, FsBackend, MemBackend, StorageBackend, DEFAULT_MAX_CARDS};
