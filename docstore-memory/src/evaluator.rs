//! Search request evaluation for in-memory document filtering.

use chrono::{DateTime, Utc};

use docstore_core::{
    document::Document,
    query::{SearchRequest, SearchVisitor},
};

/// Evaluates a [`SearchRequest`] against a single document.
///
/// A document missing the attribute a dimension inspects fails that dimension.
pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, request: &SearchRequest) -> bool {
        self.visit_request(request)
    }

    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        request: &SearchRequest,
    ) -> Vec<Document> {
        documents
            .into_iter()
            .filter(|doc| DocumentEvaluator::new(doc).evaluate(request))
            .cloned()
            .collect::<Vec<_>>()
    }
}

impl<'a> SearchVisitor for DocumentEvaluator<'a> {
    fn visit_title_prefixes(&mut self, prefixes: &[String]) -> bool {
        match &self.document.title {
            Some(title) => prefixes
                .iter()
                .any(|prefix| title.starts_with(prefix.as_str())),
            None => false,
        }
    }

    fn visit_contains_contents(&mut self, needles: &[String]) -> bool {
        match &self.document.content {
            Some(content) => needles
                .iter()
                .any(|needle| content.contains(needle.as_str())),
            None => false,
        }
    }

    fn visit_author_ids(&mut self, ids: &[String]) -> bool {
        match &self.document.author {
            Some(author) => ids.iter().any(|id| *id == author.id),
            None => false,
        }
    }

    fn visit_created_from(&mut self, from: &DateTime<Utc>) -> bool {
        self.document.created.is_some_and(|created| created >= *from)
    }

    fn visit_created_to(&mut self, to: &DateTime<Utc>) -> bool {
        self.document.created.is_some_and(|created| created <= *to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use docstore_core::document::Author;

    fn matches(document: &Document, request: &SearchRequest) -> bool {
        DocumentEvaluator::new(document).evaluate(request)
    }

    fn sample() -> Document {
        Document::new()
            .with_id("1")
            .with_title("Test title 1")
            .with_content("This is a test document.")
            .with_author(Author::new("author1"))
            .with_created(Utc::now())
    }

    #[test]
    fn unconstrained_request_matches_anything() {
        assert!(matches(&sample(), &SearchRequest::new()));
        assert!(matches(&Document::new(), &SearchRequest::new()));
    }

    #[test]
    fn title_prefix_is_case_sensitive() {
        let doc = sample();

        assert!(matches(&doc, &SearchRequest::builder().title_prefix("Test").build()));
        assert!(!matches(&doc, &SearchRequest::builder().title_prefix("test").build()));
        assert!(!matches(&doc, &SearchRequest::builder().title_prefix("title").build()));
    }

    #[test]
    fn any_title_prefix_is_enough() {
        let request = SearchRequest::builder()
            .title_prefixes(["Draft", "Test"])
            .build();

        assert!(matches(&sample(), &request));
    }

    #[test]
    fn content_substring_matches_anywhere() {
        let testing = Document::new().with_content("Another document for testing.");
        let request = SearchRequest::builder().contains_content("test").build();

        assert!(matches(&sample(), &request));
        assert!(matches(&testing, &request));
        assert!(!matches(&testing, &SearchRequest::builder().contains_content("Test").build()));
    }

    #[test]
    fn missing_attributes_fail_their_dimension() {
        let bare = Document::new().with_created(Utc::now());

        assert!(!matches(&bare, &SearchRequest::builder().title_prefix("").build()));
        assert!(!matches(&bare, &SearchRequest::builder().contains_content("").build()));
        assert!(!matches(&bare, &SearchRequest::builder().author_id("author1").build()));
    }

    #[test]
    fn empty_alternative_lists_match_nothing() {
        let request = SearchRequest {
            author_ids: Some(vec![]),
            ..Default::default()
        };

        assert!(!matches(&sample(), &request));
    }

    #[test]
    fn author_membership() {
        let doc = sample();

        assert!(matches(&doc, &SearchRequest::builder().author_ids(["author2", "author1"]).build()));
        assert!(!matches(&doc, &SearchRequest::builder().author_id("author2").build()));
    }

    #[test]
    fn created_bounds_are_inclusive() {
        let created = Utc::now();
        let doc = sample().with_created(created);

        let exact = SearchRequest::builder()
            .created_from(created)
            .created_to(created)
            .build();
        assert!(matches(&doc, &exact));

        let after = SearchRequest::builder()
            .created_from(created + Duration::milliseconds(1))
            .build();
        assert!(!matches(&doc, &after));

        let before = SearchRequest::builder()
            .created_to(created - Duration::milliseconds(1))
            .build();
        assert!(!matches(&doc, &before));
    }

    #[test]
    fn dimensions_are_conjunctive() {
        let request = SearchRequest::builder()
            .title_prefix("Test")
            .author_id("author2")
            .build();

        assert!(!matches(&sample(), &request));
    }

    #[test]
    fn filter_documents_keeps_only_matches() {
        let docs = vec![
            sample(),
            Document::new()
                .with_id("2")
                .with_title("Other")
                .with_created(Utc::now()),
        ];

        let found = DocumentEvaluator::filter_documents(
            docs.iter(),
            &SearchRequest::builder().title_prefix("Test").build(),
        );

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), Some("1"));
    }
}
