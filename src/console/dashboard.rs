//! Dashboard aggregation: the seven summary fetches are issued
//! concurrently and joined before the page renders. The figures are
//! computed server-side; this only fans out and collects.

use serde::Serialize;

use super::http::{ApiClient, ClientError};
use crate::models::visite::VisiteDto;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub daily_visits: usize,
    pub weekly_visits: usize,
    pub monthly_visits: usize,
    pub daily_profit: f64,
    pub weekly_profit: f64,
    pub monthly_profit: f64,
    pub clients_due: Vec<VisiteDto>,
}

pub async fn load(api: &ApiClient) -> Result<DashboardSummary, ClientError> {
    let (
        clients_due,
        daily_visites,
        weekly_visites,
        monthly_visites,
        daily_profit,
        weekly_profit,
        monthly_profit,
    ) = tokio::try_join!(
        api.clients_due_before_month_end(),
        api.visites_of_current_day(),
        api.visites_of_current_week(),
        api.visites_of_current_month(),
        api.total_daily_profit(),
        api.total_weekly_profit(),
        api.total_monthly_profit(),
    )?;

    Ok(DashboardSummary {
        daily_visits: daily_visites.len(),
        weekly_visits: weekly_visites.len(),
        monthly_visits: monthly_visites.len(),
        daily_profit,
        weekly_profit,
        monthly_profit,
        clients_due,
    })
}
