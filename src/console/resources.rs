//! One method group per backend resource. Pure pass-through: each
//! function maps a CRUD verb or a named aggregate to one HTTP call.

use serde_json::Value;

use super::http::{ApiClient, ClientError};
use crate::models::category::CategoryDto;
use crate::models::client::ClientDto;
use crate::models::facture::FactureDto;
use crate::models::fournisseur::FournisseurDto;
use crate::models::order::OrderDto;
use crate::models::product::ProductDto;
use crate::models::vente::VenteDto;
use crate::models::visite::VisiteDto;

// Clients
impl ApiClient {
    pub async fn list_clients(&self) -> Result<Vec<ClientDto>, ClientError> {
        self.get_json("/Client").await
    }

    pub async fn get_client(&self, id: &str) -> Result<ClientDto, ClientError> {
        self.get_json(&format!("/Client/{}", id)).await
    }

    pub async fn create_client(&self, data: &ClientDto) -> Result<ClientDto, ClientError> {
        self.post_json("/Client", data).await
    }

    pub async fn update_client(&self, id: &str, data: &ClientDto) -> Result<(), ClientError> {
        self.put_json(&format!("/Client/{}", id), data).await
    }

    pub async fn delete_client(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Client/{}", id)).await
    }
}

// Visites
impl ApiClient {
    pub async fn list_visites(&self) -> Result<Vec<VisiteDto>, ClientError> {
        self.get_json("/Visite").await
    }

    pub async fn get_visite(&self, id: &str) -> Result<VisiteDto, ClientError> {
        self.get_json(&format!("/Visite/{}", id)).await
    }

    pub async fn create_visite(&self, data: &VisiteDto) -> Result<VisiteDto, ClientError> {
        self.post_json("/Visite", data).await
    }

    pub async fn update_visite(&self, id: &str, data: &VisiteDto) -> Result<(), ClientError> {
        self.put_json(&format!("/Visite/{}", id), data).await
    }

    pub async fn delete_visite(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Visite/{}", id)).await
    }

    pub async fn visites_of_current_day(&self) -> Result<Vec<VisiteDto>, ClientError> {
        self.get_json("/Visite/current-day").await
    }

    pub async fn visites_of_current_week(&self) -> Result<Vec<VisiteDto>, ClientError> {
        self.get_json("/Visite/current-week").await
    }

    pub async fn visites_of_current_month(&self) -> Result<Vec<VisiteDto>, ClientError> {
        self.get_json("/Visite/current-month").await
    }

    pub async fn clients_due_before_month_end(&self) -> Result<Vec<VisiteDto>, ClientError> {
        self.get_json("/Visite/clients-due").await
    }

    pub async fn total_of_current_week(&self) -> Result<f64, ClientError> {
        self.get_json("/Visite/total/current-week").await
    }

    pub async fn total_of_current_month(&self) -> Result<f64, ClientError> {
        self.get_json("/Visite/total/current-month").await
    }

    pub async fn visites_by_client(&self, client_id: &str) -> Result<Vec<VisiteDto>, ClientError> {
        self.get_json(&format!("/Visite/by-client/{}", client_id))
            .await
    }
}

// Factures
impl ApiClient {
    pub async fn list_factures(&self) -> Result<Vec<FactureDto>, ClientError> {
        self.get_json("/Facture").await
    }

    pub async fn get_facture(&self, id: &str) -> Result<FactureDto, ClientError> {
        self.get_json(&format!("/Facture/{}", id)).await
    }

    pub async fn create_facture(&self, data: &FactureDto) -> Result<FactureDto, ClientError> {
        self.post_json("/Facture", data).await
    }

    pub async fn update_facture(&self, id: &str, data: &FactureDto) -> Result<(), ClientError> {
        self.put_json(&format!("/Facture/{}", id), data).await
    }

    pub async fn delete_facture(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Facture/{}", id)).await
    }
}

// Fournisseurs
impl ApiClient {
    pub async fn list_fournisseurs(&self) -> Result<Vec<FournisseurDto>, ClientError> {
        self.get_json("/Fournisseur").await
    }

    pub async fn get_fournisseur(&self, id: &str) -> Result<FournisseurDto, ClientError> {
        self.get_json(&format!("/Fournisseur/{}", id)).await
    }

    pub async fn create_fournisseur(
        &self,
        data: &FournisseurDto,
    ) -> Result<FournisseurDto, ClientError> {
        self.post_json("/Fournisseur", data).await
    }

    pub async fn update_fournisseur(
        &self,
        id: &str,
        data: &FournisseurDto,
    ) -> Result<(), ClientError> {
        self.put_json(&format!("/Fournisseur/{}", id), data).await
    }

    pub async fn delete_fournisseur(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Fournisseur/{}", id)).await
    }
}

// Categories
impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<CategoryDto>, ClientError> {
        self.get_json("/Category").await
    }

    pub async fn create_category(&self, data: &CategoryDto) -> Result<CategoryDto, ClientError> {
        self.post_json("/Category", data).await
    }

    pub async fn update_category(&self, id: &str, data: &CategoryDto) -> Result<(), ClientError> {
        self.put_json(&format!("/Category/{}", id), data).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Category/{}", id)).await
    }
}

// Products
impl ApiClient {
    pub async fn list_products(&self) -> Result<Vec<ProductDto>, ClientError> {
        self.get_json("/Product").await
    }

    pub async fn get_product(&self, id: &str) -> Result<ProductDto, ClientError> {
        self.get_json(&format!("/Product/{}", id)).await
    }

    pub async fn create_product(&self, data: &ProductDto) -> Result<ProductDto, ClientError> {
        self.post_json("/Product", data).await
    }

    pub async fn update_product(&self, id: &str, data: &ProductDto) -> Result<(), ClientError> {
        self.put_json(&format!("/Product/{}", id), data).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Product/{}", id)).await
    }
}

// Orders
impl ApiClient {
    pub async fn list_orders(&self) -> Result<Vec<OrderDto>, ClientError> {
        self.get_json("/Order").await
    }

    pub async fn get_order(&self, id: &str) -> Result<OrderDto, ClientError> {
        self.get_json(&format!("/Order/{}", id)).await
    }

    pub async fn create_order(&self, data: &OrderDto) -> Result<OrderDto, ClientError> {
        self.post_json("/Order", data).await
    }

    pub async fn update_order(&self, id: &str, data: &OrderDto) -> Result<(), ClientError> {
        self.put_json(&format!("/Order/{}", id), data).await
    }

    pub async fn delete_order(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Order/{}", id)).await
    }
}

// Ventes
impl ApiClient {
    pub async fn list_ventes(&self) -> Result<Vec<VenteDto>, ClientError> {
        self.get_json("/Vente").await
    }

    pub async fn get_vente(&self, id: &str) -> Result<VenteDto, ClientError> {
        self.get_json(&format!("/Vente/{}", id)).await
    }

    pub async fn create_vente(&self, data: &VenteDto) -> Result<VenteDto, ClientError> {
        self.post_json("/Vente", data).await
    }

    pub async fn update_vente(&self, id: &str, data: &VenteDto) -> Result<(), ClientError> {
        self.put_json(&format!("/Vente/{}", id), data).await
    }

    pub async fn delete_vente(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/Vente/{}", id)).await
    }

    pub async fn daily_sales(&self) -> Result<Vec<VenteDto>, ClientError> {
        self.get_json("/Vente/daily-sales").await
    }

    pub async fn weekly_sales(&self) -> Result<Vec<VenteDto>, ClientError> {
        self.get_json("/Vente/weekly-sales").await
    }

    pub async fn monthly_sales(&self) -> Result<Vec<VenteDto>, ClientError> {
        self.get_json("/Vente/monthly-sales").await
    }

    pub async fn total_daily_profit(&self) -> Result<f64, ClientError> {
        self.get_json("/Vente/daily-profit").await
    }

    pub async fn total_weekly_profit(&self) -> Result<f64, ClientError> {
        self.get_json("/Vente/weekly-profit").await
    }

    pub async fn total_monthly_profit(&self) -> Result<f64, ClientError> {
        self.get_json("/Vente/monthly-profit").await
    }

    pub async fn monthly_benefits(&self) -> Result<f64, ClientError> {
        self.get_json("/Vente/monthly-benefits").await
    }

    pub async fn delete_all_sales(&self) -> Result<(), ClientError> {
        self.delete("/Vente/delete-all").await
    }
}

// Database maintenance
impl ApiClient {
    pub async fn backup_database(&self) -> Result<Value, ClientError> {
        self.get_json("/Database/backup").await
    }
}
