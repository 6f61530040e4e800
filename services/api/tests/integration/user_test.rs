use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{ReadOnly, new_card, seed_user, seed_work_order, test_server, test_server_with_policy};

#[tokio::test]
async fn should_create_user_with_location() {
    let server = test_server().await;

    let response = server
        .post("/api/User")
        .json(&json!({ "firstName": "Dana", "lastName": "Scully" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    let id = body["id"].as_i64().expect("generated id");
    assert_eq!(body["firstName"], "Dana");
    assert_eq!(body["lastName"], "Scully");
    assert_eq!(response.header("location"), format!("/api/User/{id}").as_str());
}

#[tokio::test]
async fn should_ignore_id_on_create() {
    let server = test_server().await;

    let response = server
        .post("/api/User")
        .json(&json!({ "id": 999, "firstName": "Fox", "lastName": "Mulder" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_ne!(response.json::<Value>()["id"], 999);
}

#[tokio::test]
async fn should_get_and_list_users() {
    let server = test_server().await;
    let dana = seed_user(&server, "Dana", "Scully").await;
    seed_user(&server, "Fox", "Mulder").await;

    let one = server.get(&format!("/api/User/{dana}")).await;
    assert_eq!(one.status_code(), StatusCode::OK);
    assert_eq!(
        one.json::<Value>(),
        json!({ "id": dana, "firstName": "Dana", "lastName": "Scully" })
    );

    let all = server.get("/api/User").await.json::<Vec<Value>>();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn should_serve_legacy_collection_name() {
    let server = test_server().await;
    let dana = seed_user(&server, "Dana", "Scully").await;

    let response = server.get(&format!("/api/UserInternal/{dana}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["firstName"], "Dana");
}

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let server = test_server().await;

    let response = server.get("/api/User/42").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_replace_user() {
    let server = test_server().await;
    let dana = seed_user(&server, "Dana", "Scully").await;

    let response = server
        .put(&format!("/api/User/{dana}"))
        .json(&json!({ "id": dana, "firstName": "Monica", "lastName": "Reyes" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let stored = server.get(&format!("/api/User/{dana}")).await.json::<Value>();
    assert_eq!(stored["firstName"], "Monica");
    assert_eq!(stored["lastName"], "Reyes");
}

#[tokio::test]
async fn should_reject_replace_with_mismatched_id_without_mutation() {
    let server = test_server().await;
    let dana = seed_user(&server, "Dana", "Scully").await;
    let before = server.get(&format!("/api/User/{dana}")).await.json::<Value>();

    let response = server
        .put(&format!("/api/User/{dana}"))
        .json(&json!({ "id": dana + 1, "firstName": "X", "lastName": "Y" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let after = server.get(&format!("/api/User/{dana}")).await.json::<Value>();
    assert_eq!(before, after);
}

#[tokio::test]
async fn should_return_404_when_replacing_missing_user() {
    let server = test_server().await;

    let response = server
        .put("/api/User/7")
        .json(&json!({ "id": 7, "firstName": "X", "lastName": "Y" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(server.get("/api/User").await.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn should_delete_user_once() {
    let server = test_server().await;
    let dana = seed_user(&server, "Dana", "Scully").await;

    let first = server.delete(&format!("/api/User/{dana}")).await;
    assert_eq!(first.status_code(), StatusCode::NO_CONTENT);

    let second = server.delete(&format!("/api/User/{dana}")).await;
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_refuse_to_delete_creator_of_work_orders() {
    let server = test_server().await;
    let dana = seed_user(&server, "Dana", "Scully").await;
    seed_work_order(&server, new_card(dana, "Fix login bug", 0)).await;

    let response = server.delete(&format!("/api/User/{dana}")).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let still_there = server.get(&format!("/api/User/{dana}")).await;
    assert_eq!(still_there.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_forbid_writes_under_read_only_policy() {
    let server = test_server_with_policy(ReadOnly).await;

    let response = server
        .post("/api/User")
        .json(&json!({ "firstName": "Dana", "lastName": "Scully" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["kind"], "FORBIDDEN");

    let list = server.get("/api/User").await;
    assert_eq!(list.status_code(), StatusCode::OK);
}
