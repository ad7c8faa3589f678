mod common;

use std::sync::Arc;

use blogql::config::RelationLoading;
use blogql::graphql::BlogApi;
use common::{FailingFact, api, api_with, api_with_orphan};
use serde_json::{Value, json};

async fn query(api: &BlogApi, q: &str) -> Value {
    let response = api.execute(q).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

// =============================================================================
// Constant fields
// =============================================================================

#[tokio::test]
async fn test_hello_and_test() {
    let (_dir, api) = api(RelationLoading::Batched).await;

    let data = query(&api, "{ hello test }").await;
    assert_eq!(data, json!({ "hello": "Hello world!", "test": "test string" }));
}

// =============================================================================
// Relationships
// =============================================================================

#[tokio::test]
async fn test_all_authors_with_posts() {
    for relations in [RelationLoading::Lazy, RelationLoading::Batched] {
        let (_dir, api) = api(relations).await;

        let data = query(&api, "{ allAuthors { firstName posts { title } } }").await;
        let authors = data["allAuthors"].as_array().unwrap();
        assert_eq!(authors.len(), 10);

        for author in authors {
            let first_name = author["firstName"].as_str().unwrap();
            let posts = author["posts"].as_array().unwrap();
            assert_eq!(posts.len(), 1);
            assert_eq!(posts[0]["title"], format!("A post by {}", first_name));
        }
    }
}

#[tokio::test]
async fn test_posts_by_author_resolve_their_author() {
    for relations in [RelationLoading::Lazy, RelationLoading::Batched] {
        let (_dir, api) = api(relations).await;

        let data = query(&api, "{ posts(authorId: 3) { author { id } } }").await;
        let posts = data["posts"].as_array().unwrap();
        assert!(!posts.is_empty());
        for post in posts {
            assert_eq!(post["author"]["id"], 3);
        }
    }
}

#[tokio::test]
async fn test_posts_without_filter_returns_all() {
    let (_dir, api) = api(RelationLoading::Batched).await;

    let data = query(&api, "{ posts { id title text } }").await;
    assert_eq!(data["posts"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_posts_for_unknown_author_is_empty() {
    let (_dir, api) = api(RelationLoading::Batched).await;

    let data = query(&api, "{ posts(authorId: 999) { id } }").await;
    assert_eq!(data, json!({ "posts": [] }));
}

#[tokio::test]
async fn test_loading_modes_agree() {
    let q = "{ allAuthors { id lastName posts { id text author { firstName posts { id } } } } }";

    let (_a, lazy) = api(RelationLoading::Lazy).await;
    let (_b, batched) = api(RelationLoading::Batched).await;

    assert_eq!(query(&lazy, q).await, query(&batched, q).await);
}

#[tokio::test]
async fn test_author_id_is_not_exposed() {
    let (_dir, api) = api(RelationLoading::Batched).await;

    let response = api.execute("{ posts { authorId } }").await;
    assert!(!response.errors.is_empty());
}

// =============================================================================
// Query.author
// =============================================================================

#[tokio::test]
async fn test_author_lookup_by_name() {
    let (_dir, api) = api(RelationLoading::Batched).await;

    let all = query(&api, "{ allAuthors { firstName lastName } }").await;
    let first = &all["allAuthors"][0];
    let q = format!(
        r#"{{ author(firstName: "{}", lastName: "{}") {{ id firstName lastName }} }}"#,
        first["firstName"].as_str().unwrap(),
        first["lastName"].as_str().unwrap()
    );

    let data = query(&api, &q).await;
    assert_eq!(data["author"]["id"], 1);
    assert_eq!(data["author"]["firstName"], first["firstName"]);
}

#[tokio::test]
async fn test_author_lookup_without_match_is_null() {
    let (_dir, api) = api(RelationLoading::Batched).await;

    let data = query(
        &api,
        r#"{ author(firstName: "NoSuchName", lastName: "Nope") { id } }"#,
    )
    .await;
    assert_eq!(data, json!({ "author": null }));
}

// =============================================================================
// getFortuneCookie
// =============================================================================

#[tokio::test]
async fn test_fortune_cookie_returns_fact() {
    let (_dir, api) = api(RelationLoading::Batched).await;

    let data = query(&api, "{ getFortuneCookie }").await;
    assert_eq!(data["getFortuneCookie"], "Cats sleep 16 hours a day.");
}

#[tokio::test]
async fn test_fetch_failure_is_a_field_error() {
    let (_dir, api) = api_with(RelationLoading::Batched, Arc::new(FailingFact)).await;

    let response = api.execute("{ hello getFortuneCookie }").await;
    let body = serde_json::to_value(&response).unwrap();

    let data = body["data"].as_object().unwrap();
    assert_eq!(data["hello"], "Hello world!");
    assert!(data.contains_key("getFortuneCookie"));
    assert_eq!(data["getFortuneCookie"], Value::Null);

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], json!(["getFortuneCookie"]));
    assert_eq!(errors[0]["extensions"]["code"], "FETCH_FAILED");
}

#[tokio::test]
async fn test_fetch_failure_does_not_block_relationships() {
    let (_dir, api) = api_with(RelationLoading::Lazy, Arc::new(FailingFact)).await;

    let response = api
        .execute("{ getFortuneCookie allAuthors { posts { title } } }")
        .await;
    let data = response.data.into_json().unwrap();

    assert_eq!(response.errors.len(), 1);
    assert_eq!(data["getFortuneCookie"], Value::Null);
    assert!(data.as_object().unwrap().contains_key("getFortuneCookie"));
    assert_eq!(data["allAuthors"].as_array().unwrap().len(), 10);
}

// =============================================================================
// Missing owners
// =============================================================================

#[tokio::test]
async fn test_missing_author_is_a_null_field_with_not_found() {
    for relations in [RelationLoading::Lazy, RelationLoading::Batched] {
        let (_dir, api) = api_with_orphan(relations, 777).await;

        let response = api
            .execute("{ hello posts(authorId: 777) { id title author { id } } }")
            .await;
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(body["data"]["hello"], "Hello world!");
        let posts = body["data"]["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["id"], 11);
        assert_eq!(posts[0]["title"], "Orphaned post");
        assert!(posts[0].as_object().unwrap().contains_key("author"));
        assert_eq!(posts[0]["author"], Value::Null);

        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1, "{:?}", relations);
        assert_eq!(errors[0]["path"], json!(["posts", 0, "author"]));
        assert_eq!(errors[0]["extensions"]["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_missing_author_leaves_other_posts_intact() {
    for relations in [RelationLoading::Lazy, RelationLoading::Batched] {
        let (_dir, api) = api_with_orphan(relations, 777).await;

        let response = api.execute("{ posts { id author { id } } }").await;
        let data = response.data.into_json().unwrap();
        let posts = data["posts"].as_array().unwrap();

        assert_eq!(posts.len(), 11);
        assert_eq!(response.errors.len(), 1);
        for post in &posts[..10] {
            assert_eq!(post["author"]["id"], post["id"]);
        }
        assert_eq!(posts[10]["author"], Value::Null);
    }
}

#[tokio::test]
async fn test_relationship_fields_are_nullable() {
    let (_dir, api) = api(RelationLoading::Lazy).await;

    let sdl = api.schema().sdl();
    assert!(sdl.contains("posts: [Post!]\n"));
    assert!(sdl.contains("author: Author\n"));
    assert!(sdl.contains("getFortuneCookie: String\n"));
    assert!(!sdl.contains("type Mutation"));
}
