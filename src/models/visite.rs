use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::validation::{rule, FieldKind, FieldRule, FieldValue, Validate};

/// Optical-prescription consultation record: per-eye measurements
/// (OD = right eye, OS/OG = left eye), the sale components (lenses,
/// frame) and the payment state. `reste = total - avance` is entered
/// by the caller and stored as-is, never recomputed.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub fullname: String,
    pub telephone: String,
    pub date_visite: String,
    pub od_sphere: String,
    pub od_cylinder: String,
    pub od_axis: f64,
    pub os_sphere: String,
    pub os_cylinder: String,
    pub os_axis: f64,
    pub addition: f64,
    pub pd: String,
    pub verre_od: String,
    pub verre_os: String,
    pub price_od: f64,
    pub price_os: f64,
    pub prix_monture: f64,
    pub total: f64,
    pub avance: f64,
    pub reste: f64,
    pub remise: f64,
    pub doctor: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Wire DTO with the field names the console forms use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VisiteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub fullname: String,
    pub telephone: String,
    #[serde(rename = "dateVisite")]
    pub date_visite: String,
    #[serde(rename = "oD_Sphere")]
    pub od_sphere: String,
    #[serde(rename = "oD_Cylinder")]
    pub od_cylinder: String,
    #[serde(rename = "oD_Axis")]
    pub od_axis: Option<f64>,
    #[serde(rename = "oS_Sphere")]
    pub os_sphere: String,
    #[serde(rename = "oS_Cylinder")]
    pub os_cylinder: String,
    #[serde(rename = "oS_Axis")]
    pub os_axis: Option<f64>,
    #[serde(rename = "add")]
    pub addition: Option<f64>,
    pub pd: String,
    #[serde(rename = "verreOD")]
    pub verre_od: String,
    #[serde(rename = "verreOS")]
    pub verre_os: String,
    #[serde(rename = "priceOD")]
    pub price_od: Option<f64>,
    #[serde(rename = "priceOS")]
    pub price_os: Option<f64>,
    pub prixmonture: Option<f64>,
    pub total: Option<f64>,
    pub avance: Option<f64>,
    pub reste: Option<f64>,
    pub remise: Option<f64>,
    pub doctor: String,
}

impl From<Model> for VisiteDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            fullname: model.fullname,
            telephone: model.telephone,
            date_visite: model.date_visite,
            od_sphere: model.od_sphere,
            od_cylinder: model.od_cylinder,
            od_axis: Some(model.od_axis),
            os_sphere: model.os_sphere,
            os_cylinder: model.os_cylinder,
            os_axis: Some(model.os_axis),
            addition: Some(model.addition),
            pd: model.pd,
            verre_od: model.verre_od,
            verre_os: model.verre_os,
            price_od: Some(model.price_od),
            price_os: Some(model.price_os),
            prixmonture: Some(model.prix_monture),
            total: Some(model.total),
            avance: Some(model.avance),
            reste: Some(model.reste),
            remise: Some(model.remise),
            doctor: model.doctor,
        }
    }
}

impl VisiteDto {
    pub fn into_active(self, id: String, now: &str) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            fullname: Set(self.fullname),
            telephone: Set(self.telephone),
            date_visite: Set(self.date_visite),
            od_sphere: Set(self.od_sphere),
            od_cylinder: Set(self.od_cylinder),
            od_axis: Set(self.od_axis.unwrap_or_default()),
            os_sphere: Set(self.os_sphere),
            os_cylinder: Set(self.os_cylinder),
            os_axis: Set(self.os_axis.unwrap_or_default()),
            addition: Set(self.addition.unwrap_or_default()),
            pd: Set(self.pd),
            verre_od: Set(self.verre_od),
            verre_os: Set(self.verre_os),
            price_od: Set(self.price_od.unwrap_or_default()),
            price_os: Set(self.price_os.unwrap_or_default()),
            prix_monture: Set(self.prixmonture.unwrap_or_default()),
            total: Set(self.total.unwrap_or_default()),
            avance: Set(self.avance.unwrap_or_default()),
            reste: Set(self.reste.unwrap_or_default()),
            remise: Set(self.remise.unwrap_or_default()),
            doctor: Set(self.doctor),
            created_at: NotSet,
            updated_at: Set(now.to_string()),
        }
    }
}

impl Validate for VisiteDto {
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
        use FieldKind::*;
        vec![
            (
                rule(
                    "fullname",
                    RequiredString,
                    "Le nom complet du client est requis",
                ),
                FieldValue::Str(&self.fullname),
            ),
            (
                rule(
                    "telephone",
                    RequiredString,
                    "Le numéro de téléphone est requis",
                ),
                FieldValue::Str(&self.telephone),
            ),
            (
                rule("dateVisite", RequiredDate, "La date de visite est requise"),
                FieldValue::Str(&self.date_visite),
            ),
            (
                rule("oD_Sphere", RequiredString, "La sphère OD est requise"),
                FieldValue::Str(&self.od_sphere),
            ),
            (
                rule("oD_Cylinder", RequiredString, "Le cylindre OD est requis"),
                FieldValue::Str(&self.od_cylinder),
            ),
            (
                rule("oD_Axis", RequiredNumber, "L'axe OD est requis"),
                FieldValue::Num(self.od_axis),
            ),
            (
                rule("oS_Sphere", RequiredString, "La sphère OS est requise"),
                FieldValue::Str(&self.os_sphere),
            ),
            (
                rule("oS_Cylinder", RequiredString, "Le cylindre OS est requis"),
                FieldValue::Str(&self.os_cylinder),
            ),
            (
                rule("oS_Axis", RequiredNumber, "L'axe OS est requis"),
                FieldValue::Num(self.os_axis),
            ),
            (
                rule("add", RequiredNumber, "L'addition est requise"),
                FieldValue::Num(self.addition),
            ),
            (
                rule("pd", RequiredString, "Le PD est requis"),
                FieldValue::Str(&self.pd),
            ),
            (
                rule("verreOD", RequiredString, "Le verre OD est requis"),
                FieldValue::Str(&self.verre_od),
            ),
            (
                rule("verreOS", RequiredString, "Le verre OS est requis"),
                FieldValue::Str(&self.verre_os),
            ),
            (
                rule("priceOD", RequiredNumber, "Le prix OD est requis"),
                FieldValue::Num(self.price_od),
            ),
            (
                rule("priceOS", RequiredNumber, "Le prix OS est requis"),
                FieldValue::Num(self.price_os),
            ),
            (
                rule(
                    "prixmonture",
                    RequiredNumber,
                    "Le prix de la monture est requis",
                ),
                FieldValue::Num(self.prixmonture),
            ),
            (
                rule("total", RequiredNumber, "Le total est requis"),
                FieldValue::Num(self.total),
            ),
            (
                rule("avance", RequiredNumber, "L'avance est requise"),
                FieldValue::Num(self.avance),
            ),
            (
                rule("reste", RequiredNumber, "Le reste est requis"),
                FieldValue::Num(self.reste),
            ),
            (
                rule("remise", OptionalNumber, "La remise doit être un nombre"),
                FieldValue::Num(self.remise),
            ),
        ]
    }
}
