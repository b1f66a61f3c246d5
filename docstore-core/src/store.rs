//! Main document store interface.
//!
//! [`DocumentStore`] is the object hosts hold and inject. It owns its backend, so there is no
//! hidden global state: the repository lives exactly as long as the store instance.
//!
//! # Example
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(Document::new().with_title("Test title 1"));
//!
//! assert_eq!(store.find_by_id(saved.id().unwrap()), Some(saved));
//! ```

use std::sync::Arc;

use crate::{backend::StoreBackend, document::Document, query::SearchRequest};

/// A document store whose backend type is erased behind an `Arc`.
pub type DynDocumentStore = DocumentStore<Arc<dyn StoreBackend>>;

/// A document store bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug, Clone)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Upserts a document.
    ///
    /// A missing or empty identifier is replaced by a freshly generated one, and a missing
    /// creation timestamp is set to the current instant. Existing values are never
    /// overwritten. Any document previously stored under the same identifier is replaced.
    pub fn save(&self, document: Document) -> Document {
        self.backend.save(document)
    }

    /// Returns all documents matching every populated dimension of `request`.
    pub fn search(&self, request: &SearchRequest) -> Vec<Document> {
        self.backend.search(request)
    }

    /// Looks up a document by its exact identifier.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.backend.find_by_id(id)
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Returns `true` if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the store and returns its backend.
    pub fn into_inner(self) -> B {
        self.backend
    }

    /// Erases the backend type so stores with different backends share one type.
    pub fn into_dyn(self) -> DynDocumentStore
    where
        B: 'static,
    {
        tracing::trace!(
            backend = std::any::type_name::<B>(),
            "erasing document store backend type"
        );

        DocumentStore::new(Arc::new(self.backend) as Arc<dyn StoreBackend>)
    }
}
