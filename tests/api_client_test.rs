//! Integration tests for the remote API client.

use blog_client::api::{ApiClient, ApiError};
use blog_client::config::Config;
use blog_client::models::{NewPost, PostId};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = Config {
        api_base: format!("{}/api", server.uri()),
        ..Config::for_testing()
    };
    ApiClient::new(&config).expect("Failed to create API client")
}

#[tokio::test]
async fn test_list_posts_decodes_reference_service_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "title": "B", "content": "b", "created_at": "2024-05-02T10:00:00.123456"},
            {"id": 1, "title": "A", "content": "a", "created_at": "2024-05-01T10:00:00.000001"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client_for(&server).list_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, PostId::Number(2.into()));
    assert_eq!(posts[1].title, "A");
}

#[tokio::test]
async fn test_list_posts_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_posts().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert!(err.to_string().contains("maintenance"));
}

#[tokio::test]
async fn test_list_posts_bad_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"posts": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).list_posts().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_create_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "标题", "content": "第一行\n第二行"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .create_post(&NewPost {
            title: "标题",
            content: "第一行\n第二行",
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_post_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .create_post(&NewPost {
            title: "t",
            content: "c",
        })
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_post_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Missing title or content"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_post(&NewPost {
            title: "t",
            content: "c",
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_transport_failure() {
    let config = Config {
        api_base: "http://127.0.0.1:9/api".to_string(),
        ..Config::for_testing()
    };
    let err = ApiClient::new(&config)
        .unwrap()
        .list_posts()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_get_post_found_and_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5, "title": "Five", "content": "5", "created_at": "2024-01-01T00:00:00"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/posts/6"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = client_for(&server);

    let post = api.get_post(&PostId::Number(5.into())).await.unwrap().unwrap();
    assert_eq!(post.title, "Five");

    assert!(api.get_post(&PostId::Number(6.into())).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_post_escapes_text_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/posts/a%2Fb"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server);
    let found = api
        .get_post(&PostId::Text("a/b".to_string()))
        .await
        .unwrap();
    assert!(found.is_none());
}
