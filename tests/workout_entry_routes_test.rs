// ABOUTME: HTTP integration tests for workout entry routes
// ABOUTME: Covers list, get, create, replace, and delete including validation and not-found paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use workout_api::database::WorkoutEntryRepository;
use workout_api::models::WorkoutEntry;

async fn create_entry(app: &axum::Router, body: &Value) -> WorkoutEntry {
    let response = AxumTestRequest::post("/workoutEntry")
        .json(body)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    response.json()
}

// ============================================================================
// GET /workoutEntry
// ============================================================================

#[tokio::test]
async fn test_list_empty_store() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::get("/workoutEntry").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Vec<WorkoutEntry> = response.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_list_returns_entries_with_sets() {
    let (app, _) = common::create_test_app();
    create_entry(
        &app,
        &json!({
            "name": "Push",
            "workoutDate": "2024-02-01",
            "sets": [{ "exerciseName": "Bench", "repetitions": 5, "weight": 80.0 }]
        }),
    )
    .await;
    create_entry(&app, &json!({ "name": "Pull", "workoutDate": "2024-02-02" })).await;

    let response = AxumTestRequest::get("/workoutEntry").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Vec<WorkoutEntry> = response.json();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].name, "Push");
    assert_eq!(body[0].sets.len(), 1);
    assert_eq!(body[0].sets[0].exercise_name, "Bench");
    assert!(body[1].sets.is_empty());
}

// ============================================================================
// GET /workoutEntry/:id
// ============================================================================

#[tokio::test]
async fn test_get_missing_entry_returns_bare_id() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::get("/workoutEntry/1").send(app).await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.text(), "1");
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let (app, _) = common::create_test_app();
    let created = create_entry(
        &app,
        &json!({
            "name": "Legs",
            "workoutDate": "2024-03-03T07:30:00",
            "sets": [{ "exerciseName": "Squat", "repetitions": 5, "weight": 120.5 }]
        }),
    )
    .await;
    let uri = format!("/workoutEntry/{}", created.id);

    let first = AxumTestRequest::get(&uri).send(app.clone()).await;
    let second = AxumTestRequest::get(&uri).send(app).await;

    assert_eq!(first.status(), 200);
    assert_eq!(first.text(), second.text());
    let fetched: WorkoutEntry = first.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_with_non_numeric_id_is_rejected() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::get("/workoutEntry/abc").send(app).await;

    assert_eq!(response.status(), 400);
}

// ============================================================================
// POST /workoutEntry
// ============================================================================

#[tokio::test]
async fn test_create_leg_day() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::post("/workoutEntry")
        .json(&json!({ "name": "Leg Day", "workoutDate": "2024-01-01", "sets": [] }))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(
        response.header("location"),
        Some(format!("/workoutEntries/{id}").as_str())
    );
    assert_eq!(body["name"], "Leg Day");
    assert_eq!(body["workoutDate"], "2024-01-01T00:00:00");
    assert_eq!(body["sets"], json!([]));
}

#[tokio::test]
async fn test_create_ignores_client_ids() {
    let (app, _) = common::create_test_app();

    let created = create_entry(
        &app,
        &json!({
            "id": 77,
            "name": "Arms",
            "workoutDate": "2024-01-05",
            "sets": [{ "id": 900, "exerciseName": "Curl", "repetitions": 12, "weight": 15.0 }]
        }),
    )
    .await;

    assert_ne!(created.id, 77);
    assert_ne!(created.sets[0].id, 900);
    assert!(created.sets[0].id > 0);
}

#[tokio::test]
async fn test_create_round_trip() {
    let (app, _) = common::create_test_app();
    let created = create_entry(
        &app,
        &json!({
            "name": "Full Body",
            "workoutDate": "2024-04-10T18:00:00",
            "sets": [
                { "exerciseName": "Deadlift", "repetitions": 3, "weight": 180.0 },
                { "exerciseName": "Press", "repetitions": 8, "weight": 40.0 }
            ]
        }),
    )
    .await;

    let fetched: WorkoutEntry = AxumTestRequest::get(&format!("/workoutEntry/{}", created.id))
        .send(app)
        .await
        .json();

    assert_eq!(fetched.name, "Full Body");
    assert_eq!(fetched.workout_date.to_string(), "2024-04-10T18:00:00");
    let names: Vec<&str> = fetched
        .sets
        .iter()
        .map(|set| set.exercise_name.as_str())
        .collect();
    assert_eq!(names, ["Deadlift", "Press"]);
}

#[tokio::test]
async fn test_create_invalid_entry_echoes_body() {
    let (app, resources) = common::create_test_app();
    let rejected = json!({
        "name": "",
        "workoutDate": "2024-01-01",
        "sets": []
    });

    let response = AxumTestRequest::post("/workoutEntry")
        .json(&rejected)
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["name"], "");
    assert_eq!(body["id"], 0);
    assert!(resources.repository().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_without_date_is_rejected() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::post("/workoutEntry")
        .json(&json!({ "name": "Undated" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["workoutDate"], "0001-01-01T00:00:00");
}

#[tokio::test]
async fn test_create_with_invalid_nested_set_is_rejected() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::post("/workoutEntry")
        .json(&json!({
            "name": "Core",
            "workoutDate": "2024-01-01",
            "sets": [{ "exerciseName": "Plank", "repetitions": 0, "weight": 1.0 }]
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_create_with_overlong_name_is_rejected() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::post("/workoutEntry")
        .json(&json!({ "name": "x".repeat(301), "workoutDate": "2024-01-01" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_rejected() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::post("/workoutEntry")
        .header("content-type", "application/json")
        .send(app)
        .await;

    assert!((400..500).contains(&response.status()));
}

// ============================================================================
// PUT /workoutEntry/:id
// ============================================================================

#[tokio::test]
async fn test_update_replaces_fields() {
    let (app, _) = common::create_test_app();
    let created = create_entry(
        &app,
        &json!({
            "name": "Upper",
            "workoutDate": "2024-01-01",
            "sets": [
                { "exerciseName": "Row", "repetitions": 10, "weight": 50.0 },
                { "exerciseName": "Dip", "repetitions": 8, "weight": 10.0 }
            ]
        }),
    )
    .await;
    let uri = format!("/workoutEntry/{}", created.id);
    let kept = &created.sets[0];

    let response = AxumTestRequest::put(&uri)
        .json(&json!({
            "name": "Upper B",
            "workoutDate": "2024-01-02",
            "sets": [
                { "id": kept.id, "exerciseName": "Row", "repetitions": 12, "weight": 55.0 },
                { "exerciseName": "Chin-up", "repetitions": 6, "weight": 5.0 }
            ]
        }))
        .send(app.clone())
        .await;

    assert_eq!(response.status(), 204);
    assert!(response.is_empty());

    let fetched: WorkoutEntry = AxumTestRequest::get(&uri).send(app).await.json();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Upper B");
    assert_eq!(fetched.workout_date.to_string(), "2024-01-02T00:00:00");
    assert_eq!(fetched.sets.len(), 2);
    assert_eq!(fetched.sets[0].id, kept.id);
    assert_eq!(fetched.sets[0].repetitions, 12);
    assert_eq!(fetched.sets[1].exercise_name, "Chin-up");
    assert!(fetched.find_set(created.sets[1].id).is_none());
}

#[tokio::test]
async fn test_update_missing_entry_returns_id() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::put("/workoutEntry/42")
        .json(&json!({ "name": "Ghost", "workoutDate": "2024-01-01" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.text(), "42");
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::put("/workoutEntry/42")
        .json(&json!({ "name": "", "workoutDate": "2024-01-01" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_update_with_foreign_set_id_is_persistence_error() {
    let (app, _) = common::create_test_app();
    let first = create_entry(
        &app,
        &json!({
            "name": "A",
            "workoutDate": "2024-01-01",
            "sets": [{ "exerciseName": "Squat", "repetitions": 5, "weight": 100.0 }]
        }),
    )
    .await;
    let second = create_entry(
        &app,
        &json!({
            "name": "B",
            "workoutDate": "2024-01-01",
            "sets": [{ "exerciseName": "Bench", "repetitions": 5, "weight": 70.0 }]
        }),
    )
    .await;

    let response = AxumTestRequest::put(&format!("/workoutEntry/{}", first.id))
        .json(&json!({
            "name": "A",
            "workoutDate": "2024-01-01",
            "sets": [{ "id": second.sets[0].id, "exerciseName": "Bench", "repetitions": 5, "weight": 70.0 }]
        }))
        .send(app.clone())
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");

    let unchanged: WorkoutEntry = AxumTestRequest::get(&format!("/workoutEntry/{}", first.id))
        .send(app)
        .await
        .json();
    assert_eq!(unchanged, first);
}

// ============================================================================
// DELETE /workoutEntry/:id
// ============================================================================

#[tokio::test]
async fn test_delete_then_get_returns_not_found() {
    let (app, _) = common::create_test_app();
    let created = create_entry(
        &app,
        &json!({
            "name": "Cardio",
            "workoutDate": "2024-01-01",
            "sets": [{ "exerciseName": "Row", "repetitions": 1, "weight": 1.0 }]
        }),
    )
    .await;
    let uri = format!("/workoutEntry/{}", created.id);

    let response = AxumTestRequest::delete(&uri).send(app.clone()).await;
    assert_eq!(response.status(), 204);

    let response = AxumTestRequest::get(&uri).send(app).await;
    assert_eq!(response.status(), 404);
    assert_eq!(response.text(), created.id.to_string());
}

#[tokio::test]
async fn test_delete_missing_entry_returns_id() {
    let (app, _) = common::create_test_app();

    let response = AxumTestRequest::delete("/workoutEntry/9").send(app).await;

    assert_eq!(response.status(), 404);
    assert_eq!(response.text(), "9");
}

// ============================================================================
// SQLite backend end-to-end
// ============================================================================

#[tokio::test]
async fn test_sqlite_backend_create_and_fetch() {
    let (app, _) = common::create_sqlite_test_app().await.unwrap();
    let created = create_entry(
        &app,
        &json!({
            "name": "Leg Day",
            "workoutDate": "2024-01-01",
            "sets": [{ "exerciseName": "Lunge", "repetitions": 10, "weight": 20.0 }]
        }),
    )
    .await;

    let fetched: WorkoutEntry = AxumTestRequest::get(&format!("/workoutEntry/{}", created.id))
        .send(app)
        .await
        .json();

    assert_eq!(fetched, created);
}
