//! SVG charts of the d404 dashboard: revenue line, product pie, district bars.

use crate::dashboards::d404_shop_analytics::view_model::*;
use contracts::dashboards::d404_shop_analytics::{DistrictSales, ProductSales, RevenueTrendPoint};
use leptos::prelude::*;

const GRID_COLOR: &str = "#ccc";
const AXIS_COLOR: &str = "#666";

fn num(v: f64) -> String {
    format!("{:.2}", v)
}

/// Titled card around a chart
#[component]
pub fn ChartCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h2>{title}</h2>
            {children()}
        </div>
    }
}

/// Root `<svg>` of every chart, fixed height, full card width
#[component]
fn ChartSvg(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            width="100%"
            height=num(CHART_HEIGHT)
            role="img"
            aria-label=label
        >
            {children()}
        </svg>
    }
}

/// Dashed grid, axis lines and tick labels of a cartesian chart
#[component]
fn CartesianGrid(x_ticks: Vec<Tick>, y_ticks: Vec<Tick>) -> impl IntoView {
    let font_size = TICK_FONT_SIZE.to_string();

    let horizontal = y_ticks
        .iter()
        .map(|t| {
            view! {
                <line
                    x1=num(PLOT_LEFT)
                    y1=num(t.position)
                    x2=num(PLOT_RIGHT)
                    y2=num(t.position)
                    stroke=GRID_COLOR
                    stroke-dasharray=GRID_DASH
                />
                <text
                    x=num(PLOT_LEFT - 6.0)
                    y=num(t.position)
                    text-anchor="end"
                    dominant-baseline="middle"
                    font-size=font_size.clone()
                    fill=AXIS_COLOR
                >
                    {t.label.clone()}
                </text>
            }
        })
        .collect_view();

    let vertical = x_ticks
        .iter()
        .map(|t| {
            view! {
                <line
                    x1=num(t.position)
                    y1=num(PLOT_TOP)
                    x2=num(t.position)
                    y2=num(PLOT_BOTTOM)
                    stroke=GRID_COLOR
                    stroke-dasharray=GRID_DASH
                />
                <text
                    x=num(t.position)
                    y=num(PLOT_BOTTOM + 14.0)
                    text-anchor="middle"
                    font-size=font_size.clone()
                    fill=AXIS_COLOR
                >
                    {t.label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <g class="chart-grid">
            {horizontal}
            {vertical}
            <line
                x1=num(PLOT_LEFT)
                y1=num(PLOT_BOTTOM)
                x2=num(PLOT_RIGHT)
                y2=num(PLOT_BOTTOM)
                stroke=AXIS_COLOR
            />
            <line
                x1=num(PLOT_LEFT)
                y1=num(PLOT_TOP)
                x2=num(PLOT_LEFT)
                y2=num(PLOT_BOTTOM)
                stroke=AXIS_COLOR
            />
        </g>
    }
}

/// Hover box of the datum under the pointer
#[component]
fn ChartTooltip(hovered: RwSignal<Option<usize>>, tooltips: Vec<Tooltip>) -> impl IntoView {
    move || {
        hovered
            .get()
            .and_then(|i| tooltips.get(i).cloned())
            .map(|tip| {
                view! {
                    <g class="chart-tooltip" pointer-events="none">
                        <rect
                            x=num(tip.x)
                            y=num(tip.y)
                            width=num(TOOLTIP_WIDTH)
                            height=num(TOOLTIP_HEIGHT)
                            rx="4"
                            fill="#fff"
                            stroke=GRID_COLOR
                        />
                        <text x=num(tip.x + 8.0) y=num(tip.y + 14.0) font-size="11" font-weight="600">
                            {tip.title}
                        </text>
                        <text x=num(tip.x + 8.0) y=num(tip.y + 27.0) font-size="11">
                            {tip.detail}
                        </text>
                    </g>
                }
            })
    }
}

#[component]
pub fn RevenueLineChart(trend: Vec<RevenueTrendPoint>) -> impl IntoView {
    let model = line_chart(&trend);
    let hovered = RwSignal::new(None::<usize>);
    let tooltips: Vec<Tooltip> = model.points.iter().map(|p| p.tooltip.clone()).collect();

    let dots = model
        .points
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <circle
                    cx=num(p.x)
                    cy=num(p.y)
                    r="3"
                    fill="#fff"
                    stroke=LINE_COLOR
                    stroke-width="2"
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    view! {
        <ChartSvg label="Revenue trend">
            <CartesianGrid x_ticks=model.x_ticks y_ticks=model.y_ticks />
            <path d=model.path fill="none" stroke=LINE_COLOR stroke-width="2" />
            {dots}
            <ChartTooltip hovered=hovered tooltips=tooltips />
        </ChartSvg>
    }
}

#[component]
pub fn ProductPieChart(products: Vec<ProductSales>) -> impl IntoView {
    let model = pie_chart(&products);
    let hovered = RwSignal::new(None::<usize>);
    let tooltips: Vec<Tooltip> = model.slices.iter().map(|s| s.tooltip.clone()).collect();
    let font_size = TICK_FONT_SIZE.to_string();

    let slices = model
        .slices
        .into_iter()
        .enumerate()
        .filter(|(_, s)| !s.path.is_empty())
        .map(|(i, s)| {
            view! {
                <g class="pie-slice">
                    <path
                        d=s.path
                        fill=s.color
                        stroke="#fff"
                        on:mouseenter=move |_| hovered.set(Some(i))
                        on:mouseleave=move |_| hovered.set(None)
                    />
                    <text
                        x=num(s.label_x)
                        y=num(s.label_y)
                        text-anchor=s.label_anchor
                        dominant-baseline="central"
                        font-size=font_size.clone()
                        fill=s.color
                    >
                        {s.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <ChartSvg label="Sales by product">
            {slices}
            <ChartTooltip hovered=hovered tooltips=tooltips />
        </ChartSvg>
    }
}

#[component]
pub fn DistrictBarChart(districts: Vec<DistrictSales>) -> impl IntoView {
    let model = bar_chart(&districts);
    let hovered = RwSignal::new(None::<usize>);
    let tooltips: Vec<Tooltip> = model.bars.iter().map(|b| b.tooltip.clone()).collect();

    let bars = model
        .bars
        .into_iter()
        .enumerate()
        .map(|(i, b)| {
            view! {
                <rect
                    x=num(b.x)
                    y=num(b.y)
                    width=num(b.width)
                    height=num(b.height)
                    fill=BAR_COLOR
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    view! {
        <ChartSvg label="Sales by district">
            <CartesianGrid x_ticks=model.x_ticks y_ticks=model.y_ticks />
            {bars}
            <ChartTooltip hovered=hovered tooltips=tooltips />
        </ChartSvg>
    }
}
