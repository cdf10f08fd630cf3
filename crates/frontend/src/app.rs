use crate::dashboards::ShopAnalyticsDashboard;
use crate::shared::config::ApiConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Resolve the analytics API once and share it with every page
    provide_context(ApiConfig::load());

    view! {
        <ConfigProvider>
            <ShopAnalyticsDashboard />
        </ConfigProvider>
    }
}
