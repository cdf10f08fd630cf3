use super::api::{AnalyticsSource, ApiError};
use contracts::dashboards::d404_shop_analytics::{
    DistrictSales, KpiSummary, ProductSales, RevenueTrendPoint, REVENUE_TREND_DAYS,
};

/// Everything the dashboard shows, exactly as the API returned it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub kpi: KpiSummary,
    pub revenue_trend: Vec<RevenueTrendPoint>,
    pub products: Vec<ProductSales>,
    pub districts: Vec<DistrictSales>,
}

/// Fetch the four aggregates concurrently and return them as one unit.
///
/// Fails with the first error; the remaining requests are dropped.
pub async fn load_dashboard<S>(source: &S) -> Result<DashboardData, ApiError>
where
    S: AnalyticsSource + ?Sized,
{
    let result = futures::try_join!(
        source.kpi(),
        source.revenue_trend(REVENUE_TREND_DAYS),
        source.sales_by_product(),
        source.sales_by_district(),
    );

    match result {
        Ok((kpi, revenue_trend, products, districts)) => {
            log::info!(
                "D404 loaded: {} trend points, {} products, {} districts",
                revenue_trend.len(),
                products.len(),
                districts.len()
            );
            Ok(DashboardData {
                kpi,
                revenue_trend,
                products,
                districts,
            })
        }
        Err(e) => {
            log::error!("Error loading D404 dashboard data: {}", e);
            Err(e)
        }
    }
}
