//! In-memory storage implementation for the document store.
//!
//! Documents are kept in a `HashMap` keyed by identifier behind a read-write lock.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    identity::{Clock, IdGenerator, SystemClock, UuidGenerator},
    query::SearchRequest,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = HashMap<String, Document>;


/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, so clones share
/// the same documents. Searches and lookups take a shared lock; saves take the exclusive
/// lock for the whole identity-assignment-and-insert step.
///
/// # Performance
///
/// Searches scan every stored document. There is no indexing.
///
/// # Example
///
/// ```ignore
/// use docstore_memory::InMemoryStore;
/// use docstore::prelude::*;
///
/// let store = InMemoryStore::new();
/// let saved = store.save(Document::new().with_title("Notes"));
///
/// assert!(store.find_by_id(saved.id().unwrap()).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document
    documents: Arc<RwLock<DocumentMap>>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty store with UUID identifiers and the system clock.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::new())),
            id_generator: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use docstore_memory::InMemoryStore;
    /// use docstore::backend::StoreBackendBuilder;
    ///
    /// let store = InMemoryStore::builder()
    ///     .clock(FixedClock(Utc::now()))
    ///     .capacity(1024)
    ///     .build();
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}


impl StoreBackend for InMemoryStore {
    fn save(&self, mut document: Document) -> Document {
        let mut documents = self.documents.write();

        let generated = document.assign_identity(self.id_generator.as_ref(), self.clock.as_ref());
        let key = document.id().map(str::to_owned).unwrap_or_default();

        let replaced = documents.insert(key, document.clone()).is_some();

        tracing::debug!(id = document.id(), generated, replaced, "saved document");

        document
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let documents = self.documents.read();

        let found = match request.is_unconstrained() {
            true => documents.values().cloned().collect::<Vec<_>>(),
            false => DocumentEvaluator::filter_documents(documents.values(), request),
        };

        tracing::trace!(
            scanned = documents.len(),
            matched = found.len(),
            "searched documents"
        );

        found
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        let found = self.documents.read().get(id).cloned();

        tracing::trace!(id, hit = found.is_some(), "looked up document");

        found
    }

    fn len(&self) -> usize {
        self.documents.read().len()
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
///
/// Defaults to [`UuidGenerator`], [`SystemClock`] and no preallocated capacity.
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    id_generator: Option<Arc<dyn IdGenerator>>,
    clock: Option<Arc<dyn Clock>>,
    capacity: usize,
}

impl InMemoryStoreBuilder {
    /// Sets the source of identifiers for documents saved without one.
    pub fn id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Some(Arc::new(id_generator));
        self
    }

    /// Sets the clock used to stamp documents saved without a creation instant.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Preallocates room for `capacity` documents.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    fn build(self) -> Self::Backend {
        InMemoryStore {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(self.capacity))),
            id_generator: self.id_generator.unwrap_or_else(|| Arc::new(UuidGenerator)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}
