//! Core abstractions for a small embeddable document repository.
//!
//! This crate is the core of the docstore project and provides:
//!
//! - **Document types** ([`document`]) - `Document`, `Author` and their JSON helpers
//! - **Identity policy** ([`identity`]) - Pluggable id generation and clocks
//! - **Search requests** ([`query`]) - Optional filter criteria and the visitor that evaluates them
//! - **Store backend abstraction** ([`backend`]) - The trait backends implement
//! - **Document store** ([`store`]) - The front-end hosts hold and inject
//! - **Error handling** ([`error`]) - Error and result types for the fallible edges
//!
//! # Example
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//!
//! store.save(
//!     Document::new()
//!         .with_title("Test title 1")
//!         .with_author(Author::new("author1")),
//! );
//!
//! let found = store.search(&SearchRequest::builder().title_prefix("Test").build());
//! assert_eq!(found.len(), 1);
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod identity;
pub mod query;
pub mod store;
