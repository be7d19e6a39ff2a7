use crate::models::product::{Entity as Product, ProductDto};
use crate::validation::Validate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde_json::json;
use uuid::Uuid;

pub async fn list_products(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match Product::find().all(&db).await {
        Ok(products) => {
            let dtos: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
            Json(dtos).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn get_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match Product::find_by_id(id).one(&db).await {
        Ok(Some(product)) => Json(ProductDto::from(product)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn create_product(
    State(db): State<DatabaseConnection>,
    Json(dto): Json<ProductDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    let mut active = dto.into_active(Uuid::new_v4().to_string(), &now);
    active.created_at = Set(now);

    match active.insert(&db).await {
        Ok(model) => (StatusCode::CREATED, Json(ProductDto::from(model))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to create product: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn update_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    Json(dto): Json<ProductDto>,
) -> impl IntoResponse {
    if let Err(errors) = dto.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response();
    }

    let existing = Product::find_by_id(id.clone())
        .one(&db)
        .await
        .unwrap_or(None);
    if existing.is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response();
    }

    let now = chrono::Utc::now().to_rfc3339();
    match dto.into_active(id, &now).update(&db).await {
        Ok(model) => Json(ProductDto::from(model)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to update product: {}", e)})),
        )
            .into_response(),
    }
}

pub async fn delete_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match Product::delete_by_id(id).exec(&db).await {
        Ok(result) if result.rows_affected == 0 => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response(),
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to delete product: {}", e)})),
        )
            .into_response(),
    }
}
