//! HTTP surface: routing, bearer auth and error bodies, end to end through
//! an in-memory store.
//!
//! Run with: `cargo test --test api_test`
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use uuid::Uuid;

use creator_collab_backend::Store;
use creator_collab_backend::auth::jwt::{Claims, Role, UserMetadata};
use creator_collab_backend::auth::middleware::JwtSecret;
use creator_collab_backend::handlers;

const TEST_SECRET: &str = "api-test-secret-at-least-256-bits-long-xxxxxxxxxxxx";

fn token(id: Uuid, email: &str, name: &str, role: Role) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: id.to_string(),
        exp: now + 3600,
        iat: Some(now),
        email: Some(email.to_string()),
        role: Some(role),
        user_metadata: Some(UserMetadata {
            full_name: Some(name.to_string()),
            name: None,
            email: None,
        }),
    };
    let jwt = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {jwt}")
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($store.clone()))
                .app_data(web::Data::new(JwtSecret(TEST_SECRET.to_string())))
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    };
}

#[actix_web::test]
async fn protected_routes_need_a_bearer_token() {
    let store = Store::in_memory().await.unwrap();
    let app = app!(store);

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn first_request_creates_the_profile() {
    let store = Store::in_memory().await.unwrap();
    let app = app!(store);
    let id = Uuid::new_v4();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", token(id, "acme@brand.example", "Acme", Role::Brand)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["principal"]["role"], "brand");
    assert_eq!(body["profile"]["name"], "Acme");
    assert_eq!(body["profile"]["id"], id.to_string());
}

#[actix_web::test]
async fn inquiry_flow_over_http() {
    let store = Store::in_memory().await.unwrap();
    let app = app!(store);
    let creator_id = Uuid::new_v4();
    let auth = token(creator_id, "mina@creator.example", "미나", Role::Creator);

    let req = test::TestRequest::post()
        .uri("/api/auth/complete-profile")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({ "username": "mina", "auto_response_enabled": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/creators/{creator_id}/templates"))
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({
            "name": "광고 문의",
            "type": "advertisement",
            "fields": [
                { "id": "f1", "name": "product", "label": "제품명", "required": true, "type": "text" }
            ]
        }))
        .to_request();
    let template: Value = test::call_and_read_body_json(&app, req).await;
    let template_id = template["id"].as_str().unwrap().to_string();

    // Public submission, no token.
    let req = test::TestRequest::post()
        .uri("/api/inquiries/mina")
        .set_json(json!({
            "brand_name": "Acme",
            "brand_email": "pr@acme.example",
            "template_id": template_id,
            "content": { "product": "립밤" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let inquiry: Value = test::read_body_json(resp).await;
    assert_eq!(inquiry["status"], "pending");
    let inquiry_id = inquiry["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/inquiries/{inquiry_id}/status?email=pr@acme.example"))
        .to_request();
    let status: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(status["status"], "pending");

    // Someone else's inquiry is off limits.
    let stranger = token(Uuid::new_v4(), "other@creator.example", "Other", Role::Creator);
    let req = test::TestRequest::get()
        .uri(&format!("/api/inquiries/{inquiry_id}"))
        .insert_header(("Authorization", stranger))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri(&format!("/api/inquiries/{inquiry_id}/convert"))
        .insert_header(("Authorization", auth.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let converted: Value = test::read_body_json(resp).await;
    assert_eq!(converted["inquiry"]["status"], "converted");
    assert_eq!(converted["collaboration"]["status"], "negotiation");

    let req = test::TestRequest::post()
        .uri(&format!("/api/inquiries/{inquiry_id}/respond"))
        .insert_header(("Authorization", auth))
        .set_json(json!({ "response": "늦었지만 답장드립니다" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_TRANSITION");
}

#[actix_web::test]
async fn unknown_ids_render_not_found() {
    let store = Store::in_memory().await.unwrap();
    let app = app!(store);
    let auth = token(Uuid::new_v4(), "x@creator.example", "X", Role::Creator);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/{}", Uuid::new_v4()))
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
}
