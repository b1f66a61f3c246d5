//! Search request construction and the visitor protocol backends use to evaluate it.
//!
//! A [`SearchRequest`] is a conjunction of independently optional filter dimensions.
//! An absent dimension places no constraint on the result; a present one must be
//! satisfied by every returned document.
//!
//! # Query Building
//!
//! ```ignore
//! use docstore::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .title_prefix("Test")
//!     .author_id("author1")
//!     .created_from(Utc::now() - Duration::minutes(30))
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::JsonExt;

/// Filter criteria for [`StoreBackend::search`](crate::backend::StoreBackend::search).
///
/// Alternatives inside a list are OR-ed; dimensions are AND-ed. A present but empty list
/// matches nothing for its dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Case-sensitive title prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_prefixes: Option<Vec<String>>,
    /// Case-sensitive substrings, any of which the content must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_contents: Option<Vec<String>>,
    /// Accepted author identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on the creation instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request with no constraints, matching every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }

    /// Returns `true` when no dimension is populated.
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_none()
            && self.contains_contents.is_none()
            && self.author_ids.is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}

impl JsonExt for SearchRequest {}

#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a new request builder.
    pub fn new() -> Self {
        SearchRequestBuilder { request: SearchRequest::default() }
    }

    /// Adds one accepted title prefix.
    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.request.title_prefixes.get_or_insert_with(Vec::new).push(prefix.into());
        self
    }

    /// Replaces the accepted title prefixes.
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Adds one content substring.
    pub fn contains_content(mut self, needle: impl Into<String>) -> Self {
        self.request.contains_contents.get_or_insert_with(Vec::new).push(needle.into());
        self
    }

    /// Replaces the content substrings.
    pub fn contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = Some(needles.into_iter().map(Into::into).collect());
        self
    }

    /// Adds one accepted author identifier.
    pub fn author_id(mut self, id: impl Into<String>) -> Self {
        self.request.author_ids.get_or_insert_with(Vec::new).push(id.into());
        self
    }

    /// Replaces the accepted author identifiers.
    pub fn author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Evaluates the dimensions of a [`SearchRequest`] against some target.
///
/// Each `visit_*` method is only called when its dimension is present.
/// [`visit_request`](SearchVisitor::visit_request) combines them, stopping at the first
/// dimension that fails.
pub trait SearchVisitor {
    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> bool;
    fn visit_contains_contents(&mut self, needles: &[String]) -> bool;
    fn visit_author_ids(&mut self, ids: &[String]) -> bool;
    fn visit_created_from(&mut self, from: &DateTime<Utc>) -> bool;
    fn visit_created_to(&mut self, to: &DateTime<Utc>) -> bool;

    fn visit_request(&mut self, request: &SearchRequest) -> bool {
        if let Some(prefixes) = &request.title_prefixes {
            if !self.visit_title_prefixes(prefixes) {
                return false;
            }
        }

        if let Some(needles) = &request.contains_contents {
            if !self.visit_contains_contents(needles) {
                return false;
            }
        }

        if let Some(ids) = &request.author_ids {
            if !self.visit_author_ids(ids) {
                return false;
            }
        }

        if let Some(from) = &request.created_from {
            if !self.visit_created_from(from) {
                return false;
            }
        }

        if let Some(to) = &request.created_to {
            if !self.visit_created_to(to) {
                return false;
            }
        }

        true
    }
}
