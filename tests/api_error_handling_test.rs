use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use optigest::{api, auth, db};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serial_test::serial;
use tower::util::ServiceExt; // for `oneshot`

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn app(db: DatabaseConnection) -> Router {
    api::api_router(db)
}

// Helper to create a test admin user with a real password hash
async fn create_test_admin(db: &DatabaseConnection, password: &str) {
    let now = chrono::Utc::now().to_rfc3339();
    let admin = optigest::models::user::ActiveModel {
        username: Set("admin".to_string()),
        password_hash: Set(auth::hash_password(password).expect("hash")),
        role: Set("admin".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    admin.insert(db).await.expect("Failed to create admin");
}

async fn status_of(app: &Router, method: &str, uri: &str, body: Option<&str>) -> StatusCode {
    let builder = Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_missing_records_are_not_found() {
    let db = setup_test_db().await;
    let app = app(db);

    assert_eq!(
        status_of(&app, "GET", "/Product/missing", None).await,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(
            &app,
            "PUT",
            "/Product/missing",
            Some(
                r#"{"name":"n","description":"d","price":1.0,"priceForSale":2.0,
                   "quantity":1,"categoryID":"c","fournisseurId":"f"}"#
            )
        )
        .await,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(&app, "DELETE", "/Product/missing", None).await,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status_of(&app, "GET", "/Facture/missing/pdf", None).await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let db = setup_test_db().await;
    let app = app(db);

    // A number where the schema expects a string is a deserialization
    // failure, not a validation failure.
    let status = status_of(
        &app,
        "POST",
        "/Client",
        Some(r#"{"nom": 12, "prenom": "Amina", "telephone": "06"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let status = status_of(&app, "POST", "/Client", Some("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validation_failure_reports_the_field() {
    let db = setup_test_db().await;
    let app = app(db);

    let request = Request::builder()
        .uri("/Facture")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"nFacture":"384512","dateFacture":"pas une date","visiteId":"v-1"}"#,
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["dateFacture"], "La date de la facture est requise");
}

#[tokio::test]
#[serial]
async fn test_protected_routes_require_a_token() {
    let db = setup_test_db().await;
    let app = app(db);

    assert_eq!(
        status_of(&app, "GET", "/Database/backup", None).await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        status_of(
            &app,
            "POST",
            "/Account/changepassword",
            Some(r#"{"userId":1,"currentPassword":"a","newPassword":"b"}"#)
        )
        .await,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
#[serial]
async fn test_login_rejects_bad_credentials() {
    let db = setup_test_db().await;
    create_test_admin(&db, "s3cret").await;
    let app = app(db);

    let status = status_of(
        &app,
        "POST",
        "/Account/login",
        Some(r#"{"usernameOrEmail":"admin","password":"wrong","rememberMe":false}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let status = status_of(
        &app,
        "POST",
        "/Account/login",
        Some(r#"{"usernameOrEmail":"nobody","password":"s3cret","rememberMe":false}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn test_login_and_change_password_flow() {
    let db = setup_test_db().await;
    create_test_admin(&db, "s3cret").await;
    let app = app(db);

    // Login
    let request = Request::builder()
        .uri("/Account/login")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"usernameOrEmail":"admin","password":"s3cret","rememberMe":true}"#,
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let token = body["token"].as_str().expect("token issued").to_string();

    // The token authenticates the password change
    let request = Request::builder()
        .uri("/Account/changepassword")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(
            r#"{"userId":1,"currentPassword":"s3cret","newPassword":"n3w-s3cret"}"#,
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer works
    let status = status_of(
        &app,
        "POST",
        "/Account/login",
        Some(r#"{"usernameOrEmail":"admin","password":"s3cret","rememberMe":false}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
