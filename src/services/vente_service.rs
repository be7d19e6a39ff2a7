//! Sale queries behind the /Vente aggregate endpoints.

use sea_orm::*;

use super::periods::{stored_day, DateRange};
use super::ServiceError;
use crate::models::vente::{Entity as Vente, VenteDto};

/// Sales whose `saleDate` falls inside the window, newest first.
pub async fn ventes_in(
    db: &DatabaseConnection,
    range: DateRange,
) -> Result<Vec<VenteDto>, ServiceError> {
    let ventes = Vente::find()
        .order_by_desc(crate::models::vente::Column::SaleDate)
        .all(db)
        .await?;

    Ok(ventes
        .into_iter()
        .filter(|v| stored_day(&v.sale_date).is_some_and(|day| range.contains(day)))
        .map(VenteDto::from)
        .collect())
}

/// Sum of the recorded `profit` figures over the window. The figures
/// are caller-entered at sale time and summed as-is.
pub async fn profit_in(db: &DatabaseConnection, range: DateRange) -> Result<f64, ServiceError> {
    let ventes = ventes_in(db, range).await?;
    Ok(ventes.iter().map(|v| v.profit.unwrap_or_default()).sum())
}

/// Truncates the sales history. Returns the number of deleted rows.
pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let result = Vente::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}
