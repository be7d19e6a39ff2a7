use crate::models::vente::{Entity as Vente, VenteDto};
use crate::services::periods::{day_range, month_range, today, week_range};
use crate::services::{vente_service, ServiceError};
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

pub async fn list_ventes(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match Vente::find()
        .order_by_desc(crate::models::vente::Column::SaleDate)
        .all(&db)
        .await
    {
        Ok(ventes) => {
            let dtos: Vec<VenteDto> = ventes.into_iter().map(VenteDto::from).collect();
            Json(dtos).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn get_vente(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match Vente::find_by_id(id).one(&db).await {
        Ok(Some(vente)) => Json(VenteDto::from(vente)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Vente not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn create_vente(
    State(db): State<DatabaseConnection>,
    Json(dto): Json<VenteDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    let mut active = dto.into_active(Uuid::new_v4().to_string(), &now);
    active.created_at = Set(now);

    match active.insert(&db).await {
        Ok(model) => (StatusCode::CREATED, Json(VenteDto::from(model))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create vente: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn update_vente(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    Json(dto): Json<VenteDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let existing = Vente::find_by_id(id.clone()).one(&db).await.unwrap_or(None);
    if existing.is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Vente not found"})),
        )
            .into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    match dto.into_active(id, &now).update(&db).await {
        Ok(model) => Json(VenteDto::from(model)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to update vente: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn delete_vente(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match Vente::delete_by_id(id).exec(&db).await {
        Ok(result) if result.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Vente not found"})),
        )
            .into_response(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to delete vente: {}", e)})),
        )
            .into_response(),
    }
}

/// DELETE /Vente/delete-all - wipes the sales history.
pub async fn delete_all(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match vente_service::delete_all(&db).await {
        Ok(deleted) => Json(json!({"deleted": deleted})).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

fn ventes_response(result: Result<Vec<VenteDto>, ServiceError>) -> axum::response::Response {
    match result {
        Ok(ventes) => Json(ventes).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

fn profit_response(result: Result<f64, ServiceError>) -> axum::response::Response {
    match result {
        Ok(profit) => Json(profit).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn daily_sales(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    ventes_response(vente_service::ventes_in(&db, day_range(today())).await)
}

pub async fn weekly_sales(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    ventes_response(vente_service::ventes_in(&db, week_range(today())).await)
}

pub async fn monthly_sales(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    ventes_response(vente_service::ventes_in(&db, month_range(today())).await)
}

pub async fn daily_profit(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    profit_response(vente_service::profit_in(&db, day_range(today())).await)
}

pub async fn weekly_profit(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    profit_response(vente_service::profit_in(&db, week_range(today())).await)
}

pub async fn monthly_profit(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    profit_response(vente_service::profit_in(&db, month_range(today())).await)
}

// The console's service layer exposed both names for the monthly
// figure; they share the same window.
pub async fn monthly_benefits(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    profit_response(vente_service::profit_in(&db, month_range(today())).await)
}
