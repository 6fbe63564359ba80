mod common;

use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::*;
use record_service::server::BODY_LIMIT_BYTES;
use record_service::ServiceKind;
use serde_json::json;

#[tokio::test]
async fn create_get_delete_round_trip() {
    let app = test_app(ServiceKind::Tasks).await;

    let (status, created) = post(
        &app,
        "/tasks",
        json!({"title": "T", "description": "D", "dueDate": "2024-01-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("numeric id");
    assert_eq!(created["status"], "pending");
    assert_eq!(created["title"], "T");
    assert_eq!(created["description"], "D");
    assert_eq!(created["dueDate"], "2024-01-01");

    let (status, fetched) = get(&app, &format!("/tasks/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = delete(&app, &format!("/tasks/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted"}));

    let (status, body) = get(&app, &format!("/tasks/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Task not found"}));
}

#[tokio::test]
async fn create_ignores_client_status() {
    let app = test_app(ServiceKind::Tasks).await;
    let (status, created) = post(&app, "/tasks", json!({"title": "T", "status": "done"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");

    let (_, fetched) = get(&app, &format!("/tasks/{}", created["id"])).await;
    assert_eq!(fetched["status"], "pending");
}

#[tokio::test]
async fn ids_are_generated_and_unique() {
    let app = test_app(ServiceKind::Tasks).await;
    let (_, a) = post(&app, "/tasks", json!({"title": "a", "id": 99})).await;
    let (_, b) = post(&app, "/tasks", json!({"title": "b", "id": 99})).await;
    assert_ne!(a["id"], b["id"]);
}

#[tokio::test]
async fn empty_list_is_an_array() {
    let app = test_app(ServiceKind::Tasks).await;
    let (status, body) = get(&app, "/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn list_returns_every_task() {
    let app = test_app(ServiceKind::Tasks).await;
    for title in ["one", "two", "three"] {
        post(&app, "/tasks", json!({"title": title})).await;
    }
    let (status, body) = get(&app, "/tasks").await;
    assert_eq!(status, StatusCode::OK);
    let mut titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    titles.sort();
    assert_eq!(titles, ["one", "three", "two"]);
}

#[tokio::test]
async fn update_overwrites_and_echoes_with_path_id() {
    let app = test_app(ServiceKind::Tasks).await;
    let (_, created) = post(&app, "/tasks", json!({"title": "old", "description": "d"})).await;
    let id = created["id"].as_i64().unwrap();

    let (status, echoed) = put(
        &app,
        &format!("/tasks/{id}"),
        json!({"id": 12345, "title": "new", "description": "", "dueDate": "soon", "status": "done"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        echoed,
        json!({"id": id, "title": "new", "description": "", "dueDate": "soon", "status": "done"})
    );

    let (_, fetched) = get(&app, &format!("/tasks/{id}")).await;
    assert_eq!(fetched, echoed);
}

#[tokio::test]
async fn update_missing_task_succeeds_without_creating_it() {
    let app = test_app(ServiceKind::Tasks).await;
    let (status, echoed) = put(&app, "/tasks/777", json!({"title": "ghost"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed["id"], 777);

    let (status, _) = get(&app, "/tasks/777").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = get(&app, "/tasks").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn delete_missing_task_still_reports_deleted() {
    let app = test_app(ServiceKind::Tasks).await;
    let (status, body) = delete(&app, "/tasks/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted"}));
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let app = test_app(ServiceKind::Tasks).await;

    let (status, body) = send_raw(&app, Method::POST, "/tasks", Body::from("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = post(&app, "/tasks", json!({"title": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = post(&app, "/tasks", json!(["title"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(&app, "/tasks/1", json!({"dueDate": false})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = get(&app, "/tasks").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = test_app(ServiceKind::Tasks).await;
    let title = "x".repeat(BODY_LIMIT_BYTES);
    let body = Body::from(serde_json::to_vec(&json!({ "title": title })).unwrap());
    let (status, body) = send_raw(&app, Method::POST, "/tasks", body).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].is_string());

    let (_, list) = get(&app, "/tasks").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn non_numeric_id_matches_no_task() {
    let app = test_app(ServiceKind::Tasks).await;
    let (_, created) = post(&app, "/tasks", json!({"title": "keep"})).await;

    let (status, body) = get(&app, "/tasks/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Task not found"}));

    let (status, echoed) = put(&app, "/tasks/abc", json!({"title": "changed"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed["id"], 0);
    assert_eq!(echoed["title"], "changed");

    let (status, body) = delete(&app, "/tasks/99999999999999999999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Task deleted"}));

    let (_, list) = get(&app, "/tasks").await;
    assert_eq!(list, json!([created]));
}

#[tokio::test]
async fn task_service_does_not_serve_library_routes() {
    let app = test_app(ServiceKind::Tasks).await;
    let (status, _) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
