use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{rule, FieldKind, FieldRule, FieldValue, Validate};

/// Catalogue item. `price` is the purchase price, `price_for_sale`
/// the shop price; both are caller-entered.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_for_sale: f64,
    pub quantity: i32,
    pub category_id: String,
    pub fournisseur_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    #[serde(rename = "priceForSale")]
    pub price_for_sale: Option<f64>,
    pub quantity: Option<i32>,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    #[serde(rename = "fournisseurId")]
    pub fournisseur_id: String,
}

impl From<Model> for ProductDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: Some(model.price),
            price_for_sale: Some(model.price_for_sale),
            quantity: Some(model.quantity),
            category_id: model.category_id,
            fournisseur_id: model.fournisseur_id,
        }
    }
}

impl ProductDto {
    pub fn into_active(self, id: String, now: &str) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price.unwrap_or_default()),
            price_for_sale: Set(self.price_for_sale.unwrap_or_default()),
            quantity: Set(self.quantity.unwrap_or_default()),
            category_id: Set(self.category_id),
            fournisseur_id: Set(self.fournisseur_id),
            created_at: NotSet,
            updated_at: Set(now.to_string()),
        }
    }
}

impl Validate for ProductDto {
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
        use FieldKind::*;
        vec![
            (
                rule("name", RequiredString, "Le nom est requis"),
                FieldValue::Str(&self.name),
            ),
            (
                rule("description", RequiredString, "La description est requise"),
                FieldValue::Str(&self.description),
            ),
            (
                rule("price", RequiredNumber, "Le prix est requis"),
                FieldValue::Num(self.price),
            ),
            (
                rule(
                    "priceForSale",
                    RequiredNumber,
                    "Le prix de vente est requis",
                ),
                FieldValue::Num(self.price_for_sale),
            ),
            (
                rule("quantity", RequiredNumber, "La quantité est requise"),
                FieldValue::Num(self.quantity.map(f64::from)),
            ),
            (
                rule("categoryID", RequiredString, "La catégorie est requise"),
                FieldValue::Str(&self.category_id),
            ),
            (
                rule("fournisseurId", RequiredString, "Le fournisseur est requis"),
                FieldValue::Str(&self.fournisseur_id),
            ),
        ]
    }
}
