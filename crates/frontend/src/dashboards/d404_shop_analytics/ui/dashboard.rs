use super::charts::{ChartCard, DistrictBarChart, ProductPieChart, RevenueLineChart};
use super::summary_table::ProductSummaryTable;
use crate::dashboards::d404_shop_analytics::api::HttpAnalyticsSource;
use crate::dashboards::d404_shop_analytics::loader::{load_dashboard, DashboardData};
use crate::dashboards::d404_shop_analytics::state::LoadPhase;
use crate::dashboards::d404_shop_analytics::view_model::kpi_cards;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::ApiConfig;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Shop analytics dashboard: KPI cards, three charts and the product table
#[component]
pub fn ShopAnalyticsDashboard() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::load);
    let phase = RwSignal::new(LoadPhase::Pending);

    // Load once on mount, no refresh
    let source = HttpAnalyticsSource::from_config(&config);
    spawn_local(async move {
        let result = load_dashboard(&source).await;
        // Signal is gone if the page was unmounted meanwhile; the result is dropped then
        let _ = phase.try_set(LoadPhase::from_result(result));
    });

    view! {
        <PageFrame page_id="d404_shop_analytics--dashboard" category=PAGE_CAT_DASHBOARD class="dashboard">
            {move || {
                let current = phase.get();
                if current.is_loading() {
                    view! { <LoadingView /> }.into_any()
                } else {
                    let error = current.error().map(str::to_string);
                    let data = current.data().into_owned();
                    view! { <DashboardContent data=data error=error /> }.into_any()
                }
            }}
        </PageFrame>
    }
}

#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner />
            <p>"Loading dashboard..."</p>
        </div>
    }
}

#[component]
fn DashboardContent(data: DashboardData, error: Option<String>) -> impl IntoView {
    let DashboardData {
        kpi,
        revenue_trend,
        products,
        districts,
    } = data;

    let cards = kpi_cards(&kpi)
        .into_iter()
        .map(|card| view! { <StatCard label=card.label value=card.value /> })
        .collect_view();
    let pie_products = products.clone();

    view! {
        <h1 class="dashboard-title">"📊 ShopTG Analytics"</h1>

        {error.map(|msg| view! {
            <div class="alert alert--error" role="alert">
                <strong>"⚠ Failed to load dashboard: "</strong>
                {msg}
            </div>
        })}

        <div class="kpi-grid">{cards}</div>

        <ChartCard title="Revenue Trend (30 Days)">
            <RevenueLineChart trend=revenue_trend />
        </ChartCard>

        <ChartCard title="Sales by Product">
            <ProductPieChart products=pie_products />
        </ChartCard>

        <ChartCard title="Sales by District">
            <DistrictBarChart districts=districts />
        </ChartCard>

        <ProductSummaryTable products=products />
    }
}
