use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, Months};
use optigest::{api, db};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn app(db: DatabaseConnection) -> Router {
    api::api_router(db)
}

fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn days_ago_string(days: i64) -> String {
    (Local::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

// Helper to create a test visite directly against the database
async fn create_test_visite(db: &DatabaseConnection, id: &str, fullname: &str, date: &str) {
    let now = chrono::Utc::now().to_rfc3339();
    let visite = optigest::models::visite::ActiveModel {
        id: Set(id.to_string()),
        fullname: Set(fullname.to_string()),
        telephone: Set("0600000000".to_string()),
        date_visite: Set(date.to_string()),
        od_sphere: Set("-1.00".to_string()),
        od_cylinder: Set("-0.25".to_string()),
        od_axis: Set(90.0),
        os_sphere: Set("-1.25".to_string()),
        os_cylinder: Set("-0.50".to_string()),
        os_axis: Set(85.0),
        addition: Set(0.0),
        pd: Set("62".to_string()),
        verre_od: Set("Organique".to_string()),
        verre_os: Set("Organique".to_string()),
        price_od: Set(500.0),
        price_os: Set(500.0),
        prix_monture: Set(300.0),
        total: Set(1300.0),
        avance: Set(500.0),
        reste: Set(800.0),
        remise: Set(0.0),
        doctor: Set("Dr. Alaoui".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
    };
    visite.insert(db).await.expect("Failed to create visite");
}

async fn create_test_vente(db: &DatabaseConnection, id: &str, date: &str, profit: f64) {
    let now = chrono::Utc::now().to_rfc3339();
    let vente = optigest::models::vente::ActiveModel {
        id: Set(id.to_string()),
        product_id: Set("p-1".to_string()),
        quantity: Set(1),
        sale_date: Set(date.to_string()),
        price: Set(350.0),
        profit: Set(profit),
        created_at: Set(now.clone()),
        updated_at: Set(now),
    };
    vente.insert(db).await.expect("Failed to create vente");
}

#[tokio::test]
async fn test_client_crud_roundtrip() {
    let db = setup_test_db().await;
    let app = app(db);

    // 1. Create
    let (status, created) = send(
        &app,
        "POST",
        "/Client",
        Some(serde_json::json!({
            "nom": "Berrada",
            "prenom": "Amina",
            "telephone": "0612345678"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("server assigns id").to_string();
    assert_eq!(created["nom"], "Berrada");

    // 2. List includes the new record
    let (status, list) = send(&app, "GET", "/Client", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["prenom"], "Amina");

    // 3. A second record, then a full-record update of the first
    let (status, _) = send(
        &app,
        "POST",
        "/Client",
        Some(serde_json::json!({
            "nom": "Tazi",
            "prenom": "Karim",
            "telephone": "0699999999"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/Client/{}", id),
        Some(serde_json::json!({
            "nom": "Berrada",
            "prenom": "Amina",
            "telephone": "0607070707"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["telephone"], "0607070707");

    let (_, list) = send(&app, "GET", "/Client", None).await;
    let list = list.as_array().unwrap().clone();
    assert_eq!(list.len(), 2);
    let other = list.iter().find(|c| c["id"] != id).unwrap();
    assert_eq!(other["telephone"], "0699999999"); // untouched

    // 4. Delete removes it from the list
    let (status, _) = send(&app, "DELETE", &format!("/Client/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, "GET", "/Client", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert!(list.iter().all(|c| c["id"] != id));
}

#[tokio::test]
async fn test_validation_blocks_creation() {
    let db = setup_test_db().await;
    let app = app(db);

    let (status, body) = send(
        &app,
        "POST",
        "/Client",
        Some(serde_json::json!({
            "nom": "Berrada",
            "prenom": "",
            "telephone": "0612345678"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Exactly one message, for the failing field
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["prenom"], "Prénom est requis");

    // Nothing was persisted
    let (_, list) = send(&app, "GET", "/Client", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_product_crud_and_validation_messages() {
    let db = setup_test_db().await;
    let app = app(db);

    let (status, body) = send(
        &app,
        "POST",
        "/Product",
        Some(serde_json::json!({
            "name": "Monture acétate",
            "description": "",
            "priceForSale": 350.0,
            "quantity": 5,
            "categoryID": "c-1",
            "fournisseurId": "f-1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["description"], "La description est requise");
    assert_eq!(errors["price"], "Le prix est requis");

    let (status, created) = send(
        &app,
        "POST",
        "/Product",
        Some(serde_json::json!({
            "name": "Monture acétate",
            "description": "Unisexe",
            "price": 180.0,
            "priceForSale": 350.0,
            "quantity": 5,
            "categoryID": "c-1",
            "fournisseurId": "f-1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["priceForSale"], 350.0);
    assert_eq!(created["categoryID"], "c-1");
}

#[tokio::test]
async fn test_visite_window_aggregates() {
    let db = setup_test_db().await;

    create_test_visite(&db, "v-today", "Amina Berrada", &today_string()).await;
    create_test_visite(&db, "v-old", "Karim Tazi", &days_ago_string(40)).await;

    let app = app(db);

    let (status, today) = send(&app, "GET", "/Visite/current-day", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(today.as_array().unwrap().len(), 1);
    assert_eq!(today[0]["id"], "v-today");

    let (_, week) = send(&app, "GET", "/Visite/current-week", None).await;
    assert_eq!(week.as_array().unwrap().len(), 1);

    let (_, month) = send(&app, "GET", "/Visite/current-month", None).await;
    assert_eq!(month.as_array().unwrap().len(), 1);

    // Bare-number totals over the same windows
    let (_, total_week) = send(&app, "GET", "/Visite/total/current-week", None).await;
    assert_eq!(total_week.as_f64().unwrap(), 1300.0);

    let (_, total_month) = send(&app, "GET", "/Visite/total/current-month", None).await;
    assert_eq!(total_month.as_f64().unwrap(), 1300.0);
}

#[tokio::test]
async fn test_clients_due_for_follow_up() {
    let db = setup_test_db().await;

    // One year ago today: the follow-up anniversary lands in the
    // current month.
    let a_year_ago = (Local::now().date_naive() - Months::new(12))
        .format("%Y-%m-%d")
        .to_string();
    create_test_visite(&db, "v-due", "Amina Berrada", &a_year_ago).await;
    create_test_visite(&db, "v-recent", "Karim Tazi", &days_ago_string(3)).await;

    let app = app(db);

    let (status, due) = send(&app, "GET", "/Visite/clients-due", None).await;
    assert_eq!(status, StatusCode::OK);
    let due = due.as_array().unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0]["id"], "v-due");
}

#[tokio::test]
async fn test_visites_by_client_matches_full_name() {
    let db = setup_test_db().await;

    let now = chrono::Utc::now().to_rfc3339();
    let client = optigest::models::client::ActiveModel {
        id: Set("c-1".to_string()),
        nom: Set("Berrada".to_string()),
        prenom: Set("Amina".to_string()),
        telephone: Set("0612345678".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
    };
    client.insert(&db).await.unwrap();

    create_test_visite(&db, "v-1", "Amina Berrada", "2024-04-02").await;
    create_test_visite(&db, "v-2", "Karim Tazi", "2024-04-02").await;

    let app = app(db);

    let (status, visites) = send(&app, "GET", "/Visite/by-client/c-1", None).await;
    assert_eq!(status, StatusCode::OK);
    let visites = visites.as_array().unwrap();
    assert_eq!(visites.len(), 1);
    assert_eq!(visites[0]["id"], "v-1");

    let (status, _) = send(&app, "GET", "/Visite/by-client/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vente_profit_aggregates_and_delete_all() {
    let db = setup_test_db().await;

    create_test_vente(&db, "s-today", &today_string(), 150.0).await;
    create_test_vente(&db, "s-old", &days_ago_string(40), 999.0).await;

    let app = app(db);

    let (_, daily) = send(&app, "GET", "/Vente/daily-profit", None).await;
    assert_eq!(daily.as_f64().unwrap(), 150.0);

    let (_, monthly) = send(&app, "GET", "/Vente/monthly-profit", None).await;
    assert_eq!(monthly.as_f64().unwrap(), 150.0);

    // monthly-benefits shares the monthly window
    let (_, benefits) = send(&app, "GET", "/Vente/monthly-benefits", None).await;
    assert_eq!(benefits.as_f64().unwrap(), 150.0);

    let (_, daily_sales) = send(&app, "GET", "/Vente/daily-sales", None).await;
    assert_eq!(daily_sales.as_array().unwrap().len(), 1);

    let (status, wiped) = send(&app, "DELETE", "/Vente/delete-all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wiped["deleted"], 2);

    let (_, list) = send(&app, "GET", "/Vente", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_order_preserves_optional_client_id() {
    let db = setup_test_db().await;
    let app = app(db);

    // No clientId at all: accepted
    let (status, created) = send(
        &app,
        "POST",
        "/Order",
        Some(serde_json::json!({
            "fournisseurId": "f-1",
            "productIds": ["p-1", "p-2"],
            "orderDate": "2024-05-01",
            "totalAmount": 720.0,
            "status": "pending"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("clientId").is_none());
    assert_eq!(created["productIds"].as_array().unwrap().len(), 2);

    // With clientId: stored and echoed back, but never required
    let (status, created) = send(
        &app,
        "POST",
        "/Order",
        Some(serde_json::json!({
            "fournisseurId": "f-1",
            "clientId": "c-9",
            "productIds": [],
            "orderDate": "2024-05-02",
            "totalAmount": 100.0,
            "status": "delivered"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["clientId"], "c-9");
}

#[tokio::test]
async fn test_facture_pdf_download() {
    let db = setup_test_db().await;

    create_test_visite(&db, "v-1", "Amina Berrada", "2024-04-02").await;
    let now = chrono::Utc::now().to_rfc3339();
    let facture = optigest::models::facture::ActiveModel {
        id: Set("f-1".to_string()),
        n_facture: Set("384512".to_string()),
        date_facture: Set("2024-04-03".to_string()),
        visite_id: Set("v-1".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
    };
    facture.insert(&db).await.unwrap();

    let app = app(db);

    let request = Request::builder()
        .uri("/Facture/f-1/pdf")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_facture_pdf_with_missing_visite_is_not_found() {
    let db = setup_test_db().await;

    let now = chrono::Utc::now().to_rfc3339();
    let orphan = optigest::models::facture::ActiveModel {
        id: Set("f-2".to_string()),
        n_facture: Set("384513".to_string()),
        date_facture: Set("2024-04-04".to_string()),
        visite_id: Set("v-missing".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now),
    };
    orphan.insert(&db).await.unwrap();

    let app = app(db);
    let (status, body) = send(&app, "GET", "/Facture/f-2/pdf", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Visite not found for this facture");
}
