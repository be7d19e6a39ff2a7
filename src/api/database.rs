use std::fs;
use std::path::Path;

use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Local;
use serde_json::json;

use crate::auth::Session;
use crate::config::Config;

/// GET /Database/backup - copies the SQLite file to a timestamped
/// file under `backups/`.
pub async fn backup(_session: Session) -> impl IntoResponse {
    let config = Config::from_env();

    let source = match config.sqlite_path() {
        Some(path) => path,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Database is not file-backed"})),
            )
                .into_response()
        }
    };

    if !Path::new(&source).exists() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Database file not found"})),
        )
            .into_response();
    }

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let destination = format!("backups/optigest-{}.db", stamp);

    if let Err(e) = fs::create_dir_all("backups") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create backup directory: {}", e)})),
        )
            .into_response();
    }

    match fs::copy(&source, &destination) {
        Ok(_) => {
            tracing::info!("Database backed up to {}", destination);
            Json(json!({"backup": destination})).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Backup failed: {}", e)})),
        )
            .into_response(),
    }
}
