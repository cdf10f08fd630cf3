use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;
use async_trait::async_trait;
use contracts::dashboards::d404_shop_analytics::{
    revenue_trend_query, DistrictSales, KpiSummary, ProductSales, RevenueTrendPoint, KPI_PATH,
    SALES_BY_DISTRICT_PATH, SALES_BY_PRODUCT_PATH,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Load failure of any analytics endpoint
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Read side of the analytics API, one method per endpoint
#[async_trait(?Send)]
pub trait AnalyticsSource {
    async fn kpi(&self) -> Result<KpiSummary, ApiError>;

    async fn revenue_trend(&self, days: u32) -> Result<Vec<RevenueTrendPoint>, ApiError>;

    async fn sales_by_product(&self) -> Result<Vec<ProductSales>, ApiError>;

    async fn sales_by_district(&self) -> Result<Vec<DistrictSales>, ApiError>;
}

/// gloo-net client for the analytics API
#[derive(Debug, Clone)]
pub struct HttpAnalyticsSource {
    base_url: String,
}

impl HttpAnalyticsSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.api_url())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = api_url(&self.base_url, path);
        log::debug!("GET {}", url);

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl AnalyticsSource for HttpAnalyticsSource {
    async fn kpi(&self) -> Result<KpiSummary, ApiError> {
        self.get_json(KPI_PATH).await
    }

    async fn revenue_trend(&self, days: u32) -> Result<Vec<RevenueTrendPoint>, ApiError> {
        self.get_json(&revenue_trend_query(days)).await
    }

    async fn sales_by_product(&self) -> Result<Vec<ProductSales>, ApiError> {
        self.get_json(SALES_BY_PRODUCT_PATH).await
    }

    async fn sales_by_district(&self) -> Result<Vec<DistrictSales>, ApiError> {
        self.get_json(SALES_BY_DISTRICT_PATH).await
    }
}
