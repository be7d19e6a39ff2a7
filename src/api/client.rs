use crate::models::client::{ClientDto, Entity as Client};
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use serde_json::json;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/Client",
    responses((status = 200, description = "All clients"))
)]
pub async fn list_clients(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match Client::find().all(&db).await {
        Ok(clients) => {
            let dtos: Vec<ClientDto> = clients.into_iter().map(ClientDto::from).collect();
            Json(dtos).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/Client/{id}",
    responses(
        (status = 200, description = "Client by id"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn get_client(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match Client::find_by_id(id).one(&db).await {
        Ok(Some(client)) => Json(ClientDto::from(client)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Client not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/Client",
    responses(
        (status = 201, description = "Client created"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_client(
    State(db): State<DatabaseConnection>,
    Json(dto): Json<ClientDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    let mut active = dto.into_active(Uuid::new_v4().to_string(), &now);
    active.created_at = Set(now);

    match active.insert(&db).await {
        Ok(model) => (StatusCode::CREATED, Json(ClientDto::from(model))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create client: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/Client/{id}",
    responses(
        (status = 200, description = "Client updated"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn update_client(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    Json(dto): Json<ClientDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let existing = Client::find_by_id(id.clone()).one(&db).await.unwrap_or(None);
    if existing.is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Client not found"})),
        )
            .into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    let active = dto.into_active(id, &now);

    match active.update(&db).await {
        Ok(model) => Json(ClientDto::from(model)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to update client: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/Client/{id}",
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found")
    )
)]
pub async fn delete_client(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let client = Client::find_by_id(id).one(&db).await.unwrap_or(None);

    if let Some(client) = client {
        match client.delete(&db).await {
            Ok(_) => StatusCode::NO_CONTENT.into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Failed to delete client: {}", e)})),
            )
                .into_response(),
        }
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Client not found"})),
        )
            .into_response()
    }
}
