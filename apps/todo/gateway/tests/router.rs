//! Router tests against an in-process ToDo gRPC server on an ephemeral port.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_todo::{InMemoryToDoStore, ToDoService};
use http_body_util::BodyExt;
use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tower::ServiceExt; // For oneshot()

async fn app() -> Router {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let service = todo_server::grpc_service(ToDoService::new(InMemoryToDoStore::new()), false);
    tokio::spawn(async move {
        Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    let channel = grpc_client::create_channel_lazy(format!("http://{}", addr)).unwrap();
    todo_gateway::router(ToDoServiceClient::new(channel))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_crud_scenario() {
    let app = app().await;

    let (status, body) = call(
        &app,
        "POST",
        "/v1/todo",
        Some(json!({
            "title": "title",
            "description": "description",
            "reminder": "2023-11-14T22:13:20Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"api": "v1", "id": 1}));

    let (status, body) = call(&app, "GET", "/v1/todo/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "api": "v1",
            "toDo": {
                "id": 1,
                "title": "title",
                "description": "description",
                "reminder": "2023-11-14T22:13:20Z"
            }
        })
    );

    // path id wins over the body
    let (status, body) = call(
        &app,
        "PUT",
        "/v1/todo/1",
        Some(json!({
            "id": 42,
            "title": "title",
            "description": "description + updated",
            "reminder": "2023-11-14T22:13:20Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"api": "v1", "updated": 1}));

    let (status, body) = call(&app, "GET", "/v1/todo/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["toDos"].as_array().unwrap().len(), 1);
    assert_eq!(body["toDos"][0]["description"], "description + updated");

    let (status, body) = call(&app, "DELETE", "/v1/todo/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"api": "v1", "deleted": 1}));

    let (status, body) = call(&app, "GET", "/v1/todo/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5);
    assert_eq!(body["message"], "ToDo with ID='1' is not found");
}

#[tokio::test]
async fn test_read_all_empty() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/v1/todo/all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"api": "v1", "toDos": []}));
}

#[tokio::test]
async fn test_version_mismatch_is_501() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/v2/todo/all", None).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["code"], 12);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("but asked for 'v2'")
    );
}

#[tokio::test]
async fn test_bad_reminder_is_400_before_rpc() {
    let app = app().await;

    let (status, body) = call(
        &app,
        "POST",
        "/v1/todo",
        Some(json!({"title": "t", "description": "d", "reminder": "soon"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3);

    // nothing was stored
    let (_, body) = call(&app, "GET", "/v1/todo/all", None).await;
    assert_eq!(body["toDos"], json!([]));
}

#[tokio::test]
async fn test_missing_entities_are_404() {
    let app = app().await;

    let (status, _) = call(
        &app,
        "PUT",
        "/v1/todo/7",
        Some(json!({"title": "t", "description": "d", "reminder": "2023-11-14T22:13:20Z"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "DELETE", "/v1/todo/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/v1/todo/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_unreachable_upstream_is_503() {
    // nothing listens on port 1
    let channel = grpc_client::create_channel_lazy("http://127.0.0.1:1").unwrap();
    let app = todo_gateway::router(ToDoServiceClient::new(channel));

    let (status, body) = call(&app, "GET", "/v1/todo/all", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], 14);
}
