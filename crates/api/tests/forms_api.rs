//! Integration tests for form CRUD over HTTP.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_form, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

fn survey_body() -> serde_json::Value {
    json!({
        "title": "Survey",
        "description": "A small survey",
        "questions": [
            { "id": "q1", "type": "text", "title": "Say hi" },
            {
                "id": "q2",
                "type": "multiple_choice",
                "settings": { "options": [{ "text": "A", "correct": true }, { "text": "B" }] }
            }
        ]
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_form_round_trips_through_get(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = create_form(app.clone(), survey_body()).await;
    assert_eq!(created["title"], "Survey");
    assert_eq!(created["questions"].as_array().unwrap().len(), 2);
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());
    // Server defaults an omitted meta to an empty map.
    assert_eq!(created["meta"], json!({}));

    let response = get(app, &format!("/api/forms/{}", created["id"].as_str().unwrap())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_blank_title_is_rejected_and_not_persisted(pool: PgPool) {
    let app = common::build_test_app(pool);

    for title in ["", "   \t"] {
        let response = post_json(app.clone(), "/api/forms", json!({ "title": title })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Title is required");
    }

    let response = get(app, "/api/forms").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_duplicate_question_ids_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "title": "Survey",
        "questions": [
            { "id": "q1", "type": "text" },
            { "id": "q1", "type": "true_false" }
        ]
    });
    let response = post_json(app, "/api/forms", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("q1"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_question_type_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({
        "title": "Survey",
        "questions": [{ "id": "q1", "type": "ranking" }]
    });
    let response = post_json(app, "/api/forms", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_every_form(pool: PgPool) {
    let app = common::build_test_app(pool);

    create_form(app.clone(), json!({ "title": "First" })).await;
    create_form(app.clone(), json!({ "title": "Second" })).await;

    let response = get(app, "/api/forms").await;
    assert_eq!(response.status(), StatusCode::OK);
    let forms = body_json(response).await;
    assert_eq!(forms.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_form_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/forms/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Form not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_merges_patch_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = create_form(app.clone(), survey_body()).await;
    let id = created["id"].as_str().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/forms/{id}"),
        json!({ "title": "Renamed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["title"], "Renamed");
    // Fields absent from the patch keep their values.
    assert_eq!(updated["description"], "A small survey");
    assert_eq!(updated["questions"], created["questions"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_validates_patched_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = create_form(app.clone(), survey_body()).await;
    let id = created["id"].as_str().unwrap();

    let blank_title = put_json(
        app.clone(),
        &format!("/api/forms/{id}"),
        json!({ "title": "  " }),
    )
    .await;
    assert_eq!(blank_title.status(), StatusCode::BAD_REQUEST);

    let duplicate_ids = put_json(
        app.clone(),
        &format!("/api/forms/{id}"),
        json!({ "questions": [
            { "id": "q1", "type": "text" },
            { "id": "q1", "type": "text" }
        ]}),
    )
    .await;
    assert_eq!(duplicate_ids.status(), StatusCode::BAD_REQUEST);

    let missing = put_json(
        app,
        &format!("/api/forms/{}", uuid::Uuid::new_v4()),
        json!({ "title": "New" }),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_get_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let created = create_form(app.clone(), json!({ "title": "Doomed" })).await;
    let id = created["id"].as_str().unwrap();

    let response = delete(app.clone(), &format!("/api/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Form deleted successfully");

    let gone = get(app.clone(), &format!("/api/forms/{id}")).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let again = delete(app, &format!("/api/forms/{id}")).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
