//! Core value types for stored documents and their JSON representation.
//!
//! [`Document`] and [`Author`] are plain data: every field is public and optional where the
//! store tolerates absence. Construction carries no behavior beyond filling fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::{
    error::{DocumentStoreError, DocumentStoreResult},
    identity::{Clock, IdGenerator},
};

/// The author of a document.
///
/// Authors have no lifecycle of their own; they are embedded by value in each document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Identifier matched by [`SearchRequest::author_ids`](crate::query::SearchRequest::author_ids).
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Author {
    /// Creates an author with the given identifier and no display name.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A record held by the document store.
///
/// `id` and `created` may be left empty by the caller; the store fills them on save and
/// never overwrites them afterwards.
///
/// # Example
///
/// ```ignore
/// use docstore::prelude::*;
///
/// let document = Document::new()
///     .with_title("Quarterly report")
///     .with_content("Revenue grew.")
///     .with_author(Author::new("author1").with_name("Author One"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique key. Empty strings count as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Creation instant, assigned on first save when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Returns the identifier if one is present and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Back-fills a missing identifier and creation timestamp.
    ///
    /// A non-empty `id` and a present `created` are left untouched. Returns `true` when a new
    /// identifier was generated.
    pub fn assign_identity(&mut self, ids: &dyn IdGenerator, clock: &dyn Clock) -> bool {
        let generated = self.id().is_none();

        if generated {
            self.id = Some(ids.generate());
        }

        if self.created.is_none() {
            self.created = Some(clock.now());
        }

        generated
    }
}

/// JSON conversion helpers for the value types a hosting service exchanges with the store.
pub trait JsonExt: Serialize + DeserializeOwned {
    /// Converts this value to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a value from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidArgument`] unless `value` is a JSON object, and
    /// [`DocumentStoreError::Serialization`] if the object's structure is invalid.
    fn from_json(value: Value) -> DocumentStoreResult<Self> {
        if !value.is_object() {
            return Err(DocumentStoreError::InvalidArgument(format!(
                "expected {} object, got {}",
                std::any::type_name::<Self>().rsplit("::").next().unwrap_or("value"),
                json_type_name(&value),
            )));
        }

        Ok(from_value(value)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl JsonExt for Author {}
impl JsonExt for Document {}
