use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{rule, FieldKind, FieldRule, FieldValue, Validate};

/// Single product sale transaction. `profit` is entered by the
/// caller when recording the sale and summed as-is by the profit
/// aggregates.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ventes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    pub sale_date: String,
    pub price: f64,
    pub profit: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VenteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "productId")]
    pub product_id: String,
    pub quantity: Option<i32>,
    #[serde(rename = "saleDate")]
    pub sale_date: String,
    pub price: Option<f64>,
    pub profit: Option<f64>,
}

impl From<Model> for VenteDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            product_id: model.product_id,
            quantity: Some(model.quantity),
            sale_date: model.sale_date,
            price: Some(model.price),
            profit: Some(model.profit),
        }
    }
}

impl VenteDto {
    pub fn into_active(self, id: String, now: &str) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            product_id: Set(self.product_id),
            quantity: Set(self.quantity.unwrap_or_default()),
            sale_date: Set(self.sale_date),
            price: Set(self.price.unwrap_or_default()),
            profit: Set(self.profit.unwrap_or_default()),
            created_at: NotSet,
            updated_at: Set(now.to_string()),
        }
    }
}

impl Validate for VenteDto {
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
        use FieldKind::*;
        vec![
            (
                rule("productId", RequiredString, "Le produit est requis"),
                FieldValue::Str(&self.product_id),
            ),
            (
                rule("quantity", RequiredNumber, "La quantité est requise"),
                FieldValue::Num(self.quantity.map(f64::from)),
            ),
            (
                rule("saleDate", RequiredDate, "La date de vente est requise"),
                FieldValue::Str(&self.sale_date),
            ),
            (
                rule("price", RequiredNumber, "Le prix est requis"),
                FieldValue::Num(self.price),
            ),
            (
                rule("profit", OptionalNumber, "Le bénéfice doit être un nombre"),
                FieldValue::Num(self.profit),
            ),
        ]
    }
}
