use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{rule, FieldKind, FieldRule, FieldValue, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Wire DTO. Visites reference clients by full name, not id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nom: String,
    pub prenom: String,
    pub telephone: String,
}

impl ClientDto {
    pub fn fullname(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }

    pub fn into_active(self, id: String, now: &str) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            nom: Set(self.nom),
            prenom: Set(self.prenom),
            telephone: Set(self.telephone),
            created_at: NotSet,
            updated_at: Set(now.to_string()),
        }
    }
}

impl From<Model> for ClientDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            nom: model.nom,
            prenom: model.prenom,
            telephone: model.telephone,
        }
    }
}

impl Validate for ClientDto {
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
        use FieldKind::*;
        vec![
            (
                rule("nom", RequiredString, "Nom est requis"),
                FieldValue::Str(&self.nom),
            ),
            (
                rule("prenom", RequiredString, "Prénom est requis"),
                FieldValue::Str(&self.prenom),
            ),
            (
                rule("telephone", RequiredString, "Téléphone est requis"),
                FieldValue::Str(&self.telephone),
            ),
        ]
    }
}
