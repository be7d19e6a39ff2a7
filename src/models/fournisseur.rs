use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{rule, FieldKind, FieldRule, FieldValue, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fournisseurs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nom: String,
    pub adresse: String,
    pub telephone: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FournisseurDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nom: String,
    pub adresse: String,
    pub telephone: String,
}

impl From<Model> for FournisseurDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            nom: model.nom,
            adresse: model.adresse,
            telephone: model.telephone,
        }
    }
}

impl FournisseurDto {
    pub fn into_active(self, id: String, now: &str) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            nom: Set(self.nom),
            adresse: Set(self.adresse),
            telephone: Set(self.telephone),
            created_at: NotSet,
            updated_at: Set(now.to_string()),
        }
    }
}

impl Validate for FournisseurDto {
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
        use FieldKind::*;
        vec![
            (
                rule("nom", RequiredString, "Le nom est requis"),
                FieldValue::Str(&self.nom),
            ),
            (
                rule("adresse", RequiredString, "L'adresse est requise"),
                FieldValue::Str(&self.adresse),
            ),
            (
                rule("telephone", RequiredString, "Le téléphone est requis"),
                FieldValue::Str(&self.telephone),
            ),
        ]
    }
}
