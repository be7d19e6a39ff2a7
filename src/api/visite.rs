use crate::models::visite::{Entity as Visite, VisiteDto};
use crate::services::periods::{day_range, month_range, today, week_range};
use crate::services::{visite_service, ServiceError};
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde_json::json;
use uuid::Uuid;

pub async fn list_visites(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match Visite::find()
        .order_by_desc(crate::models::visite::Column::DateVisite)
        .all(&db)
        .await
    {
        Ok(visites) => {
            let dtos: Vec<VisiteDto> = visites.into_iter().map(VisiteDto::from).collect();
            Json(dtos).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn get_visite(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match Visite::find_by_id(id).one(&db).await {
        Ok(Some(visite)) => Json(VisiteDto::from(visite)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Visite not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn create_visite(
    State(db): State<DatabaseConnection>,
    Json(dto): Json<VisiteDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    let mut active = dto.into_active(Uuid::new_v4().to_string(), &now);
    active.created_at = Set(now);

    match active.insert(&db).await {
        Ok(model) => (StatusCode::CREATED, Json(VisiteDto::from(model))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create visite: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn update_visite(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    Json(dto): Json<VisiteDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let existing = Visite::find_by_id(id.clone()).one(&db).await.unwrap_or(None);
    if existing.is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Visite not found"})),
        )
            .into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    match dto.into_active(id, &now).update(&db).await {
        Ok(model) => Json(VisiteDto::from(model)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to update visite: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn delete_visite(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match Visite::delete_by_id(id).exec(&db).await {
        Ok(result) if result.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Visite not found"})),
        )
            .into_response(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to delete visite: {}", e)})),
        )
            .into_response(),
    }
}

fn visites_response(result: Result<Vec<VisiteDto>, ServiceError>) -> axum::response::Response {
    match result {
        Ok(visites) => Json(visites).into_response(),
        Err(ServiceError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Client not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

fn total_response(result: Result<f64, ServiceError>) -> axum::response::Response {
    match result {
        Ok(total) => Json(total).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn current_day(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    visites_response(visite_service::visites_in(&db, day_range(today())).await)
}

pub async fn current_week(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    visites_response(visite_service::visites_in(&db, week_range(today())).await)
}

pub async fn current_month(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    visites_response(visite_service::visites_in(&db, month_range(today())).await)
}

pub async fn total_current_week(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    total_response(visite_service::total_in(&db, week_range(today())).await)
}

pub async fn total_current_month(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    total_response(visite_service::total_in(&db, month_range(today())).await)
}

pub async fn clients_due(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    visites_response(visite_service::clients_due(&db, today()).await)
}

pub async fn by_client(
    State(db): State<DatabaseConnection>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    visites_response(visite_service::by_client(&db, &client_id).await)
}
