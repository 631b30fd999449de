use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use carebook_server::state::AppState;
use carebook_store::memory::MemoryStore;

fn app() -> Router {
    carebook_server::router(AppState::new(Arc::new(MemoryStore::new())))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn submission(with_evaluation: bool) -> Value {
    let mut body = json!({
        "evaluatorName": "Jordan Reyes",
        "parentGuardianName": "Casey Reyes",
        "clientName": "Riley Reyes",
        "serviceProviderName": "Morgan Lee",
        "email": "jordan@example.com",
        "phone": "555-0100",
        "address": "12 Elm Street",
        "appointmentDate": "2026-09-15",
        "appointmentTime": "10:30:00",
        "serviceType": ["Respite", "Homemaker"],
    });
    if with_evaluation {
        body["evaluation"] = json!({
            "evaluationType": "staff",
            "responses": [
                {
                    "questionId": "q1",
                    "questionText": "Was the staff punctual and consistent with scheduled visits?",
                    "answer": "Yes",
                    "answerKind": "choice"
                }
            ]
        });
    }
    body
}

#[tokio::test]
async fn health_reports_backend_and_store() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
    assert_eq!(body["store"], "ok");
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let app = app();

    let (status, created) =
        send(&app, Method::POST, "/appointments", Some(submission(true))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["appointmentId"].is_string());
    assert!(created["evaluationId"].is_string());

    let (status, appointments) = send(&app, Method::GET, "/appointments", None).await;
    assert_eq!(status, StatusCode::OK);
    let appointments = appointments.as_array().unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["id"], created["appointmentId"]);
    assert_eq!(appointments[0]["status"], "pending");
    assert_eq!(appointments[0]["serviceType"], json!(["Respite", "Homemaker"]));

    let (status, evaluations) = send(&app, Method::GET, "/evaluations", None).await;
    assert_eq!(status, StatusCode::OK);
    let evaluations = evaluations.as_array().unwrap();
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0]["id"], created["evaluationId"]);
    assert_eq!(evaluations[0]["appointmentId"], created["appointmentId"]);
    assert_eq!(evaluations[0]["evaluatorName"], "Jordan Reyes");
}

#[tokio::test]
async fn create_without_evaluation_omits_evaluation_id() {
    let app = app();

    let (status, created) =
        send(&app, Method::POST, "/appointments", Some(submission(false))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("evaluationId").is_none());

    let (_, evaluations) = send(&app, Method::GET, "/evaluations", None).await;
    assert!(evaluations.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn status_update_changes_only_status() {
    let app = app();

    let (_, created) = send(&app, Method::POST, "/appointments", Some(submission(false))).await;
    let id = created["appointmentId"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/appointments/{id}/status"),
        Some(json!({ "status": "approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, appointments) = send(&app, Method::GET, "/appointments", None).await;
    let appointment = &appointments.as_array().unwrap()[0];
    assert_eq!(appointment["status"], "approved");
    assert_eq!(appointment["clientName"], "Riley Reyes");
}

#[tokio::test]
async fn status_update_rejects_unknown_value() {
    let app = app();

    let (_, created) = send(&app, Method::POST, "/appointments", Some(submission(false))).await;
    let id = created["appointmentId"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/appointments/{id}/status"),
        Some(json!({ "status": "archived" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_appointment_cascades_to_evaluations() {
    let app = app();

    let (_, created) = send(&app, Method::POST, "/appointments", Some(submission(true))).await;
    let id = created["appointmentId"].as_str().unwrap().to_string();

    let (status, _) = send(&app, Method::DELETE, &format!("/appointments/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, appointments) = send(&app, Method::GET, "/appointments", None).await;
    assert!(appointments.as_array().unwrap().is_empty());
    let (_, evaluations) = send(&app, Method::GET, "/evaluations", None).await;
    assert!(evaluations.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn mutations_against_missing_records_are_404() {
    let app = app();
    let id = uuid::Uuid::new_v4();

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/appointments/{id}/status"),
        Some(json!({ "status": "declined" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));

    let (status, _) = send(&app, Method::DELETE, &format!("/appointments/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/evaluations/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn questionnaires_are_served_as_schema_data() {
    let app = app();

    let (status, list) = send(&app, Method::GET, "/questionnaires", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "staff_service");
    assert_eq!(list[1]["id"], "parental_provider");

    let (status, detail) = send(&app, Method::GET, "/questionnaires/staff_service", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["evaluationType"], "staff");
    assert_eq!(detail["questions"].as_array().unwrap().len(), 17);

    let (status, body) = send(&app, Method::GET, "/questionnaires/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}
