use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{new_card, seed_user, seed_work_order, test_server};

#[tokio::test]
async fn should_create_and_read_back_new_card() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;

    let response = server
        .post("/api/WorkOrder")
        .json(&new_card(creator, "Test card", 0))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created = response.json::<Value>();
    let id = created["id"].as_i64().expect("generated id");
    assert_eq!(
        response.header("location"),
        format!("/api/WorkOrder/{id}").as_str()
    );

    let fetched = server.get(&format!("/api/WorkOrder/{id}")).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    let row = fetched.json::<Value>();
    assert_eq!(row["stage"], 0);
    assert_eq!(row["complete"], false);
    assert_eq!(row["active"], false);
    assert_eq!(row["canceled"], false);
    assert_eq!(row["description"], "Test card");
    assert_eq!(row["createdById"], creator);
    assert_eq!(row["createdAtTime"], "2025-06-01T08:30:00.000Z");
    assert!(row["completedAtTime"].is_null());
    assert!(row["assignedTo"].is_null());
    assert_eq!(row["createdBy"]["firstName"], "Dana");
}

#[tokio::test]
async fn should_default_optional_fields_on_create() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;

    let created = seed_work_order(
        &server,
        json!({ "createdById": creator, "description": "Minimal" }),
    )
    .await;

    assert_eq!(created["stage"], 0);
    assert_eq!(created["active"], false);
    assert!(created["assignedToId"].is_null());
    assert!(created["createdAtTime"].is_string());
}

#[tokio::test]
async fn should_embed_assignee_on_list() {
    let server = test_server().await;
    let creator = seed_user(&server, "Walter", "Skinner").await;
    let dana = seed_user(&server, "Dana", "Scully").await;

    seed_work_order(&server, new_card(creator, "Fix login bug", 1)).await;
    let mut assigned = new_card(creator, "Update docs", 2);
    assigned["assignedToId"] = json!(dana);
    seed_work_order(&server, assigned).await;

    let list = server.get("/api/WorkOrder").await.json::<Vec<Value>>();
    assert_eq!(list.len(), 2);
    let docs = list
        .iter()
        .find(|w| w["description"] == "Update docs")
        .expect("assigned card");
    assert_eq!(docs["assignedTo"]["firstName"], "Dana");
    assert_eq!(docs["assignedTo"]["lastName"], "Scully");
    assert_eq!(docs["createdBy"]["firstName"], "Walter");
}

#[tokio::test]
async fn should_replace_full_entity_as_sent() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;
    let created = seed_work_order(&server, new_card(creator, "Fix login bug", 1)).await;
    let id = created["id"].as_i64().unwrap();

    // The server stores whatever flags the caller sends.
    let mut body = created.clone();
    body["stage"] = json!(3);
    body["active"] = json!(true);
    body["complete"] = json!(true);
    let response = server
        .put(&format!("/api/WorkOrder/{id}"))
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(response.text(), "");

    let stored = server
        .get(&format!("/api/WorkOrder/{id}"))
        .await
        .json::<Value>();
    assert_eq!(stored["stage"], 3);
    assert_eq!(stored["active"], true);
    assert_eq!(stored["complete"], true);
    assert_eq!(stored["description"], "Fix login bug");
}

#[tokio::test]
async fn should_reject_replace_with_mismatched_id_without_mutation() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;
    let created = seed_work_order(&server, new_card(creator, "Fix login bug", 1)).await;
    let id = created["id"].as_i64().unwrap();

    let mut body = created.clone();
    body["id"] = json!(id + 100);
    body["stage"] = json!(4);
    let response = server
        .put(&format!("/api/WorkOrder/{id}"))
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let stored = server
        .get(&format!("/api/WorkOrder/{id}"))
        .await
        .json::<Value>();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn should_return_404_when_replacing_missing_work_order() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;
    let mut body = new_card(creator, "Ghost", 0);
    body["id"] = json!(77);

    let response = server.put("/api/WorkOrder/77").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(
        server
            .get("/api/WorkOrder")
            .await
            .json::<Vec<Value>>()
            .is_empty()
    );
}

#[tokio::test]
async fn should_delete_work_order_once() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;
    let created = seed_work_order(&server, new_card(creator, "Fix login bug", 0)).await;
    let id = created["id"].as_i64().unwrap();

    let first = server.delete(&format!("/api/WorkOrder/{id}")).await;
    assert_eq!(first.status_code(), StatusCode::NO_CONTENT);

    let second = server.delete(&format!("/api/WorkOrder/{id}")).await;
    assert_eq!(second.status_code(), StatusCode::NOT_FOUND);

    let gone = server.get(&format!("/api/WorkOrder/{id}")).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_move_stage_on_server() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;
    let created = seed_work_order(&server, new_card(creator, "Fix login bug", 1)).await;
    let id = created["id"].as_i64().unwrap();

    for (stage, complete, active) in [
        (4, true, false),
        (2, false, true),
        (3, false, true),
        (0, false, false),
        (1, false, false),
    ] {
        let response = server
            .put(&format!("/api/WorkOrder/{id}/stage"))
            .json(&json!({ "stage": stage }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let moved = response.json::<Value>();
        assert_eq!(moved["stage"], stage);
        assert_eq!(moved["complete"], complete);
        assert_eq!(moved["active"], active);
        assert_eq!(moved["canceled"], false);

        let stored = server
            .get(&format!("/api/WorkOrder/{id}"))
            .await
            .json::<Value>();
        assert_eq!(stored, moved);
        assert_eq!(stored["description"], created["description"]);
        assert_eq!(stored["createdAtTime"], created["createdAtTime"]);
    }
}

#[tokio::test]
async fn should_reject_unknown_stage_on_move() {
    let server = test_server().await;
    let creator = seed_user(&server, "Dana", "Scully").await;
    let created = seed_work_order(&server, new_card(creator, "Fix login bug", 1)).await;
    let id = created["id"].as_i64().unwrap();

    for stage in [json!(9), json!(300), json!(-1)] {
        let response = server
            .put(&format!("/api/WorkOrder/{id}/stage"))
            .json(&json!({ "stage": stage }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["kind"], "UNKNOWN_STAGE");
    }

    let stored: Value = server.get(&format!("/api/WorkOrder/{id}")).await.json();
    assert_eq!(stored["stage"], 1);
}

#[tokio::test]
async fn should_return_404_when_moving_missing_work_order() {
    let server = test_server().await;

    let response = server
        .put("/api/WorkOrder/5/stage")
        .json(&json!({ "stage": 2 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_serve_health_endpoints() {
    let server = test_server().await;

    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}
