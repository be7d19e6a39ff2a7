use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{rule, FieldKind, FieldRule, FieldValue, Validate};

/// Invoice record: a sequential invoice number and date linked to
/// exactly one visite.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "factures")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub n_facture: String,
    pub date_facture: String,
    pub visite_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactureDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "nFacture")]
    pub n_facture: String,
    #[serde(rename = "dateFacture")]
    pub date_facture: String,
    #[serde(rename = "visiteId")]
    pub visite_id: String,
}

impl From<Model> for FactureDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            n_facture: model.n_facture,
            date_facture: model.date_facture,
            visite_id: model.visite_id,
        }
    }
}

impl FactureDto {
    pub fn into_active(self, id: String, now: &str) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            n_facture: Set(self.n_facture),
            date_facture: Set(self.date_facture),
            visite_id: Set(self.visite_id),
            created_at: NotSet,
            updated_at: Set(now.to_string()),
        }
    }
}

impl Validate for FactureDto {
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
        use FieldKind::*;
        vec![
            (
                rule(
                    "nFacture",
                    RequiredString,
                    "Le numéro de la facture est requis",
                ),
                FieldValue::Str(&self.n_facture),
            ),
            (
                rule(
                    "dateFacture",
                    RequiredDate,
                    "La date de la facture est requise",
                ),
                FieldValue::Str(&self.date_facture),
            ),
            (
                rule("visiteId", RequiredString, "La visite est requise"),
                FieldValue::Str(&self.visite_id),
            ),
        ]
    }
}
