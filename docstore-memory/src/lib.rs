//! In-memory document storage backend for docstore.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It keeps every document in a lock-protected map and evaluates searches by scanning it.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads, serialized writes via a read-write lock
//! - **Upsert semantics** - Saving under an existing identifier replaces the stored document
//! - **Pluggable identity** - Custom id generators and clocks through the builder
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::builder().build());
//!
//! let saved = store.save(Document::new().with_title("Test title 1"));
//! let found = store.find_by_id(saved.id().unwrap());
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstore_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
