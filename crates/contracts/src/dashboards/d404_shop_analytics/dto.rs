use serde::{Deserialize, Serialize};

/// `GET /api/kpi`
pub const KPI_PATH: &str = "/api/kpi";
/// `GET /api/revenue-trend?days=N`
pub const REVENUE_TREND_PATH: &str = "/api/revenue-trend";
/// `GET /api/sales-by-product`
pub const SALES_BY_PRODUCT_PATH: &str = "/api/sales-by-product";
/// `GET /api/sales-by-district`
pub const SALES_BY_DISTRICT_PATH: &str = "/api/sales-by-district";

/// Window of the revenue trend requested by the dashboard, in days
pub const REVENUE_TREND_DAYS: u32 = 30;

/// Build the revenue trend path with its `days` query
pub fn revenue_trend_query(days: u32) -> String {
    format!("{}?days={}", REVENUE_TREND_PATH, days)
}

/// Precomputed revenue aggregates (response of `/api/kpi`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub today_revenue: f64,
    pub week_revenue: f64,
    pub month_revenue: f64,
    pub total_turnover: f64,
}

/// One day of the revenue trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueTrendPoint {
    /// Day as returned by the API, usually "YYYY-MM-DD"
    pub date: String,
    pub revenue: f64,
}

/// Sales aggregated per product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product: String,
    /// Number of orders; a JSON number, kept as f64 so fractional values decode too
    pub orders: f64,
    pub revenue: f64,
}

/// Sales aggregated per delivery district
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictSales {
    pub district: String,
    pub revenue: f64,
}
