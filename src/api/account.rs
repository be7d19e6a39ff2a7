use crate::auth::{create_jwt, hash_password, verify_password, Session};
use crate::models::user::{self, Entity as User};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "usernameOrEmail")]
    username_or_email: String,
    password: String,
    // Persisted console-side; the server only issues the token.
    #[serde(rename = "rememberMe", default)]
    #[allow(dead_code)]
    remember_me: bool,
}

pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    tracing::info!("Login attempt for user: {}", payload.username_or_email);

    let user = match user::Entity::find()
        .filter(user::Column::Username.eq(&payload.username_or_email))
        .one(&db)
        .await
    {
        Ok(Some(u)) => u,
        _ => {
            tracing::warn!("User not found: {}", payload.username_or_email);
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
                .into_response();
        }
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => match create_jwt(&user.username, &user.role) {
            Ok(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
            Err(e) => {
                tracing::error!("Failed to issue token for {}: {}", user.username, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to issue token" })),
                )
                    .into_response()
            }
        },
        _ => {
            tracing::warn!("Password verification failed for user: {}", user.username);
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "userId")]
    user_id: i32,
    #[serde(rename = "currentPassword")]
    current_password: String,
    #[serde(rename = "newPassword")]
    new_password: String,
}

pub async fn change_password(
    State(db): State<DatabaseConnection>,
    session: Session,
    Json(payload): Json<ChangePasswordRequest>,
) -> impl IntoResponse {
    let user = match User::find_by_id(payload.user_id).one(&db).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "User not found" })),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Database error: {}", e) })),
            )
                .into_response()
        }
    };

    // A caller can only change their own password.
    if user.username != session.sub {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Cannot change another user's password" })),
        )
            .into_response();
    }

    if !verify_password(&payload.current_password, &user.password_hash).unwrap_or(false) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
            .into_response();
    }

    let new_hash = match hash_password(&payload.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Failed to hash password: {}", e) })),
            )
                .into_response()
        }
    };

    let mut active: user::ActiveModel = user.into();
    active.password_hash = Set(new_hash);
    active.updated_at = Set(chrono::Utc::now().to_rfc3339());

    match active.update(&db).await {
        Ok(_) => Json(json!({ "message": "Password updated" })).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Failed to update password: {}", e) })),
        )
            .into_response(),
    }
}
