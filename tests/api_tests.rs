//! Integration tests for the HTTP surface
//!
//! Drives the real route configuration through actix's test harness.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use textsum_rs::config::Config;
use textsum_rs::server::server::configure_app;
use textsum_rs::server::state::AppState;

fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState::from_config(Config::default()))
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_app),
        )
        .await
    };
}

#[actix_web::test]
async fn home_reports_active_status() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], json!("active"));
    assert_eq!(body["message"], json!("Text Processing API"));
    assert!(body["endpoints"].get("POST /process-text").is_some());
}

#[actix_web::test]
async fn health_check_reports_service_name() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["service"], json!("text-processing-api"));
}

#[actix_web::test]
async fn process_text_returns_cleaned_record() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/process-text")
        .set_json(json!({
            "text": "😀 Great news! Sales grew. Costs fell. Staff happy.",
            "sentences_count": 2
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], json!(true));
    let data = &body["data"];
    assert_eq!(
        data["cleaned_text"],
        json!("Great news! Sales grew. Costs fell. Staff happy.")
    );

    // Two sentences, drawn from the cleaned text, in original order
    let summary = data["summary"].as_str().unwrap();
    let terminals = summary.matches(['.', '!']).count();
    assert_eq!(terminals, 2);
    let cleaned = data["cleaned_text"].as_str().unwrap();
    let sentences = ["Great news!", "Sales grew.", "Costs fell.", "Staff happy."];
    let picked: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|s| summary.contains(s))
        .collect();
    assert_eq!(summary, picked.join(" "));
    assert!(picked.iter().all(|s| cleaned.contains(s)));

    assert_eq!(
        data["character_count_cleaned"].as_u64().unwrap(),
        cleaned.chars().count() as u64
    );
    // No id on the single-text path
    assert!(data.get("id").is_none());
}

#[actix_web::test]
async fn process_text_missing_text_is_400() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/process-text")
        .set_json(json!({ "sentences_count": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Missing 'text' field in request body"));
}

#[actix_web::test]
async fn process_text_coerces_invalid_sentences_count() {
    let app = test_app!();

    for bad in [json!("three"), json!(0), json!(-2), json!(2.5)] {
        let req = test::TestRequest::post()
            .uri("/process-text")
            .set_json(json!({ "text": "One. Two. Three. Four.", "sentences_count": bad }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}

#[actix_web::test]
async fn process_json_assigns_ids_and_skips_items() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/process-json")
        .set_json(json!({
            "data": [
                { "description": "First item to summarize." },
                { "description": "Second item to summarize.", "id": "x" },
                { "note": "missing description" }
            ],
            "sentences_count": 0
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], json!(true));
    let data = &body["data"];
    assert_eq!(data["total_items"], json!(2));

    let items = data["processed_items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], json!(1));
    assert_eq!(items[0]["original_id"], Value::Null);
    assert_eq!(items[1]["id"], json!("x"));
    assert_eq!(items[1]["original_id"], json!("x"));

    // Invalid sentences_count of 0 is coerced to the default
    assert_eq!(data["processing_info"]["sentences_count"], json!(3));
    assert_eq!(data["processing_info"]["language"], json!("english"));
    assert_eq!(data["processing_info"]["emoji_removal"], json!(true));
}

#[actix_web::test]
async fn process_json_accepts_single_object() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/process-json")
        .set_json(json!({ "data": { "description": "A single object payload." } }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["total_items"], json!(1));
    assert_eq!(body["data"]["processed_items"][0]["id"], json!(1));
}

#[actix_web::test]
async fn process_json_missing_data_is_400() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/process-json")
        .set_json(json!({ "sentences_count": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Missing 'data' field in request body"));
}

#[actix_web::test]
async fn process_json_rejects_invalid_shape() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/process-json")
        .set_json(json!({ "data": "just a string" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        json!("Input data must contain 'description' field")
    );
}

#[actix_web::test]
async fn unknown_endpoint_is_404() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Endpoint not found"));
    assert!(body["message"].as_str().unwrap().contains("root endpoint"));
}

#[actix_web::test]
async fn wrong_method_is_405() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/process-text").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Method not allowed"));

    let req = test::TestRequest::post().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}
