//! Main docstore crate providing an embeddable in-memory document repository.
//!
//! This crate is the primary entry point for users of docstore. It re-exports the core
//! types from the sub-crates and provides access to the in-memory backend.
//!
//! # Features
//!
//! - **Upsert** - Save documents, with identifiers and creation timestamps assigned on demand
//! - **Lookup** - Exact-identifier retrieval
//! - **Filtered search** - Title prefixes, content substrings, authors and creation ranges
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::builder().build());
//!
//! let saved = store.save(
//!     Document::new()
//!         .with_title("Test Title")
//!         .with_content("Test Content")
//!         .with_author(Author::new("author1").with_name("Author One")),
//! );
//!
//! let by_author = store.search(
//!     &SearchRequest::builder()
//!         .author_id("author1")
//!         .build(),
//! );
//!
//! assert_eq!(by_author, vec![saved]);
//! ```
//!
//! # Dynamic Dispatch
//!
//! A typed `DocumentStore` can be converted into a [`DynDocumentStore`](store::DynDocumentStore)
//! with `into_dyn`, for hosts that pick the backend at runtime.
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage; process restart discards all documents

pub mod prelude;

pub use docstore_core::{backend, document, error, identity, query, store};

// Re-export chrono so callers build timestamps with the same version
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstore_memory::{InMemoryStore, InMemoryStoreBuilder};
}
