use docstore::{memory::InMemoryStore, prelude::*};
use serde_json::{Value, json};

#[test]
fn search_request_from_host_json() {
    let store = DocumentStore::new(InMemoryStore::new());
    store.save(
        Document::from_json(json!({
            "title": "Test title 1",
            "content": "Content 1",
            "author": { "id": "author1", "name": "Author One" },
        }))
        .unwrap(),
    );
    store.save(Document::from_json(json!({ "title": "Other" })).unwrap());

    let request = SearchRequest::from_json(json!({
        "titlePrefixes": ["Test"],
        "authorIds": ["author1"],
    }))
    .unwrap();
    let found = store.search(&request);

    assert_eq!(found.len(), 1);
    let value = found[0].to_json().unwrap();
    assert_eq!(value["title"], "Test title 1");
    assert_eq!(value["author"]["name"], "Author One");
    assert!(value["id"].is_string());
    assert!(value["created"].is_string());
}

#[test]
fn empty_json_request_matches_everything() {
    let store = DocumentStore::new(InMemoryStore::new());
    store.save(Document::new());
    store.save(Document::new());

    let request = SearchRequest::from_json(json!({})).unwrap();

    assert!(request.is_unconstrained());
    assert_eq!(store.search(&request).len(), 2);
}

#[test]
fn null_request_is_an_invalid_argument() {
    let err = SearchRequest::from_json(Value::Null).unwrap_err();

    assert!(matches!(err, DocumentStoreError::InvalidArgument(_)));
    assert!(err.to_string().starts_with("Invalid argument"));
}

#[test]
fn malformed_request_is_a_serialization_error() {
    let err = SearchRequest::from_json(json!({ "createdFrom": "yesterday" })).unwrap_err();

    assert!(matches!(err, DocumentStoreError::Serialization(_)));
}

#[test]
fn non_object_requests_never_match_everything() {
    let store = DocumentStore::new(InMemoryStore::new());
    store.save(Document::new().with_title("Doc1"));
    store.save(Document::new().with_title("Doc2"));

    for value in [json!([]), json!("oops"), json!(42)] {
        let err = SearchRequest::from_json(value.clone()).unwrap_err();

        assert!(
            matches!(err, DocumentStoreError::InvalidArgument(_)),
            "{value} was accepted or misreported: {err}"
        );
    }
    assert_eq!(store.len(), 2);
}
