use leptos::prelude::*;

/// Single KPI tile: caption on top, preformatted value below
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Already formatted value
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-label">{label}</div>
            <div class="kpi-value">{value}</div>
        </div>
    }
}
