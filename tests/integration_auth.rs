mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{body_json, create_test_user, generate_unique_email, setup_test_app, signin_cookie};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use warden::modules::users::model::UserRole;

fn signup_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/sign-up")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn signin_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/sign-in")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    let response = app
        .oneshot(signup_request(json!({
            "name": "A",
            "email": email,
            "password": "password1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("sign-up should set the auth cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("HttpOnly"));

    let body = body_json(response).await;
    assert_eq!(body["message"], "User registered.");
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"]["id"].is_i64());
    // The credential never leaves the auth service
    assert!(!body.to_string().contains("password"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_empty_name(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(signup_request(json!({
            "name": "",
            "email": generate_unique_email(),
            "password": "password1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_duplicate_email(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    let response = app
        .clone()
        .oneshot(signup_request(json!({
            "name": "First User",
            "email": email,
            "password": "password1"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same email again, different password and role: still a conflict
    let response = app
        .oneshot(signup_request(json!({
            "name": "Second User",
            "email": email,
            "password": "different-pass",
            "role": "admin"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Email already exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_invalid_email(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(signup_request(json!({
            "name": "Jane Doe",
            "email": "not-an-email",
            "password": "password1"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed.");
    assert_eq!(body["details"][0]["field"], "email");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_missing_password(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(signup_request(json!({
            "name": "Jane Doe",
            "email": generate_unique_email()
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_success(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, "Test User", &email, "testpass123", UserRole::User).await;

    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(signin_request(json!({
            "email": email,
            "password": "testpass123"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());

    let body = body_json(response).await;
    assert_eq!(body["message"], "Signed in.");
    assert_eq!(body["user"]["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_wrong_password_and_unknown_email_are_identical(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, "Test User", &email, "correct-pass", UserRole::User).await;

    let app = setup_test_app(pool.clone());

    let wrong_password = app
        .clone()
        .oneshot(signin_request(json!({
            "email": email,
            "password": "wrong-pass"
        })))
        .await
        .unwrap();
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown_email = app
        .oneshot(signin_request(json!({
            "email": generate_unique_email(),
            "password": "whatever"
        })))
        .await
        .unwrap();
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Enumeration safety: both failures carry the same body
    let body_a = body_json(wrong_password).await;
    let body_b = body_json(unknown_email).await;
    assert_eq!(body_a, body_b);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signin_missing_password(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(signin_request(json!({
            "email": "test@test.com"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signout_clears_cookie(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/sign-out")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("sign-out should clear the auth cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("token="));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(response).await;
    assert_eq!(body["message"], "Signed out.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_auth_cookie_authenticates_follow_up_requests(pool: PgPool) {
    let email = generate_unique_email();
    let user = create_test_user(&pool, "Cookie User", &email, "testpass123", UserRole::User).await;

    let app = setup_test_app(pool.clone());
    let cookie = signin_cookie(app.clone(), &email, "testpass123").await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/users/{}", user.id))
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], email);
}
