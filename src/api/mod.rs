pub mod account;
pub mod category;
pub mod client;
pub mod database;
pub mod facture;
pub mod fournisseur;
pub mod health;
pub mod order;
pub mod product;
pub mod vente;
pub mod visite;

use axum::{
    routing::{delete, get, post},
    Router,
};
use sea_orm::DatabaseConnection;

/// Routes use the resource paths the console has always called
/// (capitalized roots, named aggregate sub-paths).
pub fn api_router(db: DatabaseConnection) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Account
        .route("/Account/login", post(account::login))
        .route("/Account/changepassword", post(account::change_password))
        // Clients
        .route(
            "/Client",
            get(client::list_clients).post(client::create_client),
        )
        .route(
            "/Client/:id",
            get(client::get_client)
                .put(client::update_client)
                .delete(client::delete_client),
        )
        // Visites
        .route(
            "/Visite",
            get(visite::list_visites).post(visite::create_visite),
        )
        .route("/Visite/current-day", get(visite::current_day))
        .route("/Visite/current-week", get(visite::current_week))
        .route("/Visite/current-month", get(visite::current_month))
        .route("/Visite/clients-due", get(visite::clients_due))
        .route("/Visite/total/current-week", get(visite::total_current_week))
        .route(
            "/Visite/total/current-month",
            get(visite::total_current_month),
        )
        .route("/Visite/by-client/:id", get(visite::by_client))
        .route(
            "/Visite/:id",
            get(visite::get_visite)
                .put(visite::update_visite)
                .delete(visite::delete_visite),
        )
        // Factures
        .route(
            "/Facture",
            get(facture::list_factures).post(facture::create_facture),
        )
        .route(
            "/Facture/:id",
            get(facture::get_facture)
                .put(facture::update_facture)
                .delete(facture::delete_facture),
        )
        .route("/Facture/:id/pdf", get(facture::download_pdf))
        // Fournisseurs
        .route(
            "/Fournisseur",
            get(fournisseur::list_fournisseurs).post(fournisseur::create_fournisseur),
        )
        .route(
            "/Fournisseur/:id",
            get(fournisseur::get_fournisseur)
                .put(fournisseur::update_fournisseur)
                .delete(fournisseur::delete_fournisseur),
        )
        // Categories
        .route(
            "/Category",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/Category/:id",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        // Products
        .route(
            "/Product",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/Product/:id",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        // Orders
        .route("/Order", get(order::list_orders).post(order::create_order))
        .route(
            "/Order/:id",
            get(order::get_order)
                .put(order::update_order)
                .delete(order::delete_order),
        )
        // Ventes
        .route("/Vente", get(vente::list_ventes).post(vente::create_vente))
        .route("/Vente/daily-sales", get(vente::daily_sales))
        .route("/Vente/weekly-sales", get(vente::weekly_sales))
        .route("/Vente/monthly-sales", get(vente::monthly_sales))
        .route("/Vente/daily-profit", get(vente::daily_profit))
        .route("/Vente/weekly-profit", get(vente::weekly_profit))
        .route("/Vente/monthly-profit", get(vente::monthly_profit))
        .route("/Vente/monthly-benefits", get(vente::monthly_benefits))
        .route("/Vente/delete-all", delete(vente::delete_all))
        .route(
            "/Vente/:id",
            get(vente::get_vente)
                .put(vente::update_vente)
                .delete(vente::delete_vente),
        )
        // Database maintenance
        .route("/Database/backup", get(database::backup))
        .with_state(db)
}
