//! Storage backend abstraction for the document store.
//!
//! The [`StoreBackend`] trait is the single seam between the [`DocumentStore`](crate::store::DocumentStore)
//! front-end and whatever holds the documents. Implementations must be thread-safe
//! (`Send + Sync`) and every operation is synchronous: nothing blocks on I/O or suspends.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use std::{fmt::Debug, sync::Arc};

use crate::{document::Document, query::SearchRequest};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// All implementations must tolerate concurrent calls. Reads may run in parallel;
/// each [`save`](StoreBackend::save) must be atomic with respect to other calls on the
/// same identifier, with the last writer winning.
pub trait StoreBackend: Send + Sync + Debug {
    /// Upserts a document, assigning an identifier and creation timestamp when absent.
    ///
    /// Returns the document as stored, with `id` and `created` populated.
    fn save(&self, document: Document) -> Document;

    /// Returns every stored document matching all populated dimensions of `request`.
    ///
    /// Result order is unspecified. An empty result is not an error.
    fn search(&self, request: &SearchRequest) -> Vec<Document>;

    /// Retrieves the document stored under exactly `id`, if any.
    fn find_by_id(&self, id: &str) -> Option<Document>;

    /// Returns the number of stored documents.
    fn len(&self) -> usize;

    /// Returns `true` if no documents are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B> StoreBackend for &B
where
    B: StoreBackend + ?Sized,
{
    fn save(&self, document: Document) -> Document {
        (**self).save(document)
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        (**self).search(request)
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        (**self).find_by_id(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<B> StoreBackend for Arc<B>
where
    B: StoreBackend + ?Sized,
{
    fn save(&self, document: Document) -> Document {
        (**self).save(document)
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        (**self).search(request)
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        (**self).find_by_id(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<B> StoreBackend for Box<B>
where
    B: StoreBackend + ?Sized,
{
    fn save(&self, document: Document) -> Document {
        (**self).save(document)
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        (**self).search(request)
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        (**self).find_by_id(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Factory trait for constructing backend instances from configuration.
pub trait StoreBackendBuilder {
    /// The backend type this builder produces.
    type Backend: StoreBackend;

    /// Builds the backend.
    fn build(self) -> Self::Backend;
}
