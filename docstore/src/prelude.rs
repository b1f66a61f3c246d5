//! Convenient re-exports of commonly used types from docstore.
//!
//! ```ignore
//! use docstore::prelude::*;
//! ```

pub use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Author, Document, JsonExt},
    error::{DocumentStoreError, DocumentStoreResult},
    identity::{Clock, FixedClock, IdGenerator, SystemClock, UuidGenerator},
    query::{SearchRequest, SearchRequestBuilder, SearchVisitor},
    store::{DocumentStore, DynDocumentStore},
};
