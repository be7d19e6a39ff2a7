//! Visit queries behind the /Visite aggregate endpoints.

use chrono::{Months, NaiveDate};
use sea_orm::*;

use super::periods::{month_range, stored_day, DateRange};
use super::ServiceError;
use crate::models::client::Entity as Client;
use crate::models::visite::{Entity as Visite, VisiteDto};

/// Visits whose `dateVisite` falls inside the window, newest first.
pub async fn visites_in(
    db: &DatabaseConnection,
    range: DateRange,
) -> Result<Vec<VisiteDto>, ServiceError> {
    let visites = Visite::find()
        .order_by_desc(crate::models::visite::Column::DateVisite)
        .all(db)
        .await?;

    Ok(visites
        .into_iter()
        .filter(|v| stored_day(&v.date_visite).is_some_and(|day| range.contains(day)))
        .map(VisiteDto::from)
        .collect())
}

/// Sum of the visits' `total` field over the window.
pub async fn total_in(db: &DatabaseConnection, range: DateRange) -> Result<f64, ServiceError> {
    let visites = visites_in(db, range).await?;
    Ok(visites.iter().map(|v| v.total.unwrap_or_default()).sum())
}

/// Clients due for their one-year follow-up before the end of the
/// current month: visits whose anniversary lands inside `today`'s
/// calendar month.
pub async fn clients_due(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<Vec<VisiteDto>, ServiceError> {
    let window = month_range(today);
    let visites = Visite::find().all(db).await?;

    Ok(visites
        .into_iter()
        .filter(|v| {
            stored_day(&v.date_visite)
                .map(|day| day + Months::new(12))
                .is_some_and(|anniversary| window.contains(anniversary))
        })
        .map(VisiteDto::from)
        .collect())
}

/// Visits are linked to clients by full name ("prenom nom"), not id.
pub async fn by_client(
    db: &DatabaseConnection,
    client_id: &str,
) -> Result<Vec<VisiteDto>, ServiceError> {
    let client = Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let fullname = format!("{} {}", client.prenom, client.nom);
    let visites = Visite::find()
        .filter(crate::models::visite::Column::Fullname.eq(fullname))
        .order_by_desc(crate::models::visite::Column::DateVisite)
        .all(db)
        .await?;

    Ok(visites.into_iter().map(VisiteDto::from).collect())
}
