use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{rule, FieldKind, FieldRule, FieldValue, Validate};

/// Purchase order to a supplier. `product_ids` is stored as a JSON
/// array. `client_id` is accepted and echoed back but required
/// nowhere; the console historically filtered on it without ever
/// setting it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub fournisseur_id: String,
    pub client_id: Option<String>,
    pub product_ids: String,
    pub order_date: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "fournisseurId")]
    pub fournisseur_id: String,
    #[serde(rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "productIds")]
    pub product_ids: Vec<String>,
    #[serde(rename = "orderDate")]
    pub order_date: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: Option<f64>,
    pub status: String,
}

impl From<Model> for OrderDto {
    fn from(model: Model) -> Self {
        let product_ids: Vec<String> =
            serde_json::from_str(&model.product_ids).unwrap_or_default();
        Self {
            id: Some(model.id),
            fournisseur_id: model.fournisseur_id,
            client_id: model.client_id,
            product_ids,
            order_date: model.order_date,
            total_amount: Some(model.total_amount),
            status: model.status,
        }
    }
}

impl OrderDto {
    pub fn into_active(self, id: String, now: &str) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            fournisseur_id: Set(self.fournisseur_id),
            client_id: Set(self.client_id),
            product_ids: Set(serde_json::to_string(&self.product_ids).unwrap_or_default()),
            order_date: Set(self.order_date),
            total_amount: Set(self.total_amount.unwrap_or_default()),
            status: Set(self.status),
            created_at: NotSet,
            updated_at: Set(now.to_string()),
        }
    }
}

impl Validate for OrderDto {
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
        use FieldKind::*;
        vec![
            (
                rule("fournisseurId", RequiredString, "Le fournisseur est requis"),
                FieldValue::Str(&self.fournisseur_id),
            ),
            (
                rule(
                    "orderDate",
                    RequiredDate,
                    "La date de la commande est requise",
                ),
                FieldValue::Str(&self.order_date),
            ),
            (
                rule("totalAmount", RequiredNumber, "Le montant total est requis"),
                FieldValue::Num(self.total_amount),
            ),
            (
                rule("status", RequiredString, "Le statut est requis"),
                FieldValue::Str(&self.status),
            ),
        ]
    }
}
