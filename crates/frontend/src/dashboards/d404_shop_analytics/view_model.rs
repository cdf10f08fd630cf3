//! Rendering rules of the d404 dashboard as plain data.
//!
//! Every widget is computed here from resolved data only; the Leptos
//! components in `ui` just bind the results. Chart geometry is in SVG user
//! units of a `CHART_WIDTH x CHART_HEIGHT` viewBox.

use crate::shared::components::table::{format_axis_value, format_count, format_money};
use chrono::NaiveDate;
use contracts::dashboards::d404_shop_analytics::{
    DistrictSales, KpiSummary, ProductSales, RevenueTrendPoint,
};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Slice colours of the product pie, cycled by position
pub const PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];
pub const LINE_COLOR: &str = "#0088FE";
pub const BAR_COLOR: &str = "#00C49F";
pub const GRID_DASH: &str = "3 3";
pub const TICK_FONT_SIZE: u32 = 10;

pub const CHART_WIDTH: f64 = 400.0;
pub const CHART_HEIGHT: f64 = 200.0;
pub const PIE_OUTER_RADIUS: f64 = 60.0;

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 22.0;

pub const PLOT_LEFT: f64 = MARGIN_LEFT;
pub const PLOT_RIGHT: f64 = CHART_WIDTH - MARGIN_RIGHT;
pub const PLOT_TOP: f64 = MARGIN_TOP;
pub const PLOT_BOTTOM: f64 = CHART_HEIGHT - MARGIN_BOTTOM;

const Y_TICK_INTERVALS: usize = 4;
const MAX_X_LABELS: usize = 6;
const BAR_FILL_RATIO: f64 = 0.8;
const PIE_LABEL_OFFSET: f64 = 14.0;

pub const TOOLTIP_WIDTH: f64 = 130.0;
pub const TOOLTIP_HEIGHT: f64 = 34.0;

/// Colour of the `index`-th pie slice
pub fn slice_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

// ============================================================================
// KPI cards
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
}

pub fn kpi_cards(kpi: &KpiSummary) -> [KpiCard; 4] {
    [
        ("Today", kpi.today_revenue),
        ("Week", kpi.week_revenue),
        ("Month", kpi.month_revenue),
        ("Turnover", kpi.total_turnover),
    ]
    .map(|(label, value)| KpiCard {
        label,
        value: format_money(value),
    })
}

// ============================================================================
// Shared chart pieces
// ============================================================================

/// Axis tick: position along the axis (x or y, user units) and its label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Hover box, already placed inside the viewBox
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub detail: String,
}

impl Tooltip {
    /// Place the box next to the anchor point, kept inside the chart
    fn near(anchor_x: f64, anchor_y: f64, title: String, detail: String) -> Self {
        Self {
            x: (anchor_x + 8.0).clamp(0.0, CHART_WIDTH - TOOLTIP_WIDTH),
            y: (anchor_y - TOOLTIP_HEIGHT - 8.0).clamp(0.0, CHART_HEIGHT - TOOLTIP_HEIGHT),
            title,
            detail,
        }
    }
}

fn revenue_detail(revenue: f64) -> String {
    format!("revenue : {}", format_count(revenue))
}

/// Linear mapping of values onto the plot height; always includes zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (mut min, mut max) = (0.0_f64, 0.0_f64);
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if max - min <= 0.0 {
            max = min + 1.0;
        }
        Self { min, max }
    }

    /// y coordinate of `value`; non-finite values sit on the zero line
    pub fn y(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { 0.0 };
        let t = (value - self.min) / (self.max - self.min);
        PLOT_BOTTOM - t * (PLOT_BOTTOM - PLOT_TOP)
    }

    pub fn ticks(&self) -> Vec<Tick> {
        (0..=Y_TICK_INTERVALS)
            .map(|i| {
                let value = self.min + (self.max - self.min) * i as f64 / Y_TICK_INTERVALS as f64;
                Tick {
                    position: self.y(value),
                    label: format_axis_value(value),
                }
            })
            .collect()
    }
}

/// "2024-03-15" -> "15.03"; anything else is shown as is
pub fn short_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d.%m").to_string())
        .unwrap_or_else(|_| date.to_string())
}

// ============================================================================
// Revenue trend (line)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartModel {
    pub points: Vec<LinePoint>,
    /// SVG path through all points, empty when there are none
    pub path: String,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

fn point_x(index: usize, count: usize) -> f64 {
    if count <= 1 {
        (PLOT_LEFT + PLOT_RIGHT) / 2.0
    } else {
        PLOT_LEFT + index as f64 * (PLOT_RIGHT - PLOT_LEFT) / (count - 1) as f64
    }
}

pub fn line_chart(trend: &[RevenueTrendPoint]) -> LineChartModel {
    let scale = ValueScale::from_values(trend.iter().map(|p| p.revenue));
    let count = trend.len();

    let points: Vec<LinePoint> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = point_x(i, count);
            let y = scale.y(p.revenue);
            LinePoint {
                x,
                y,
                tooltip: Tooltip::near(x, y, p.date.clone(), revenue_detail(p.revenue)),
            }
        })
        .collect();

    let path = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{} {:.2},{:.2}", cmd, p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let step = count.div_ceil(MAX_X_LABELS).max(1);
    let x_ticks = trend
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(i, p)| Tick {
            position: point_x(i, count),
            label: short_date(&p.date),
        })
        .collect();

    LineChartModel {
        points,
        path,
        x_ticks,
        y_ticks: scale.ticks(),
    }
}

// ============================================================================
// Sales by district (bars)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub bars: Vec<Bar>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

pub fn bar_chart(districts: &[DistrictSales]) -> BarChartModel {
    let scale = ValueScale::from_values(districts.iter().map(|d| d.revenue));
    let band = if districts.is_empty() {
        0.0
    } else {
        (PLOT_RIGHT - PLOT_LEFT) / districts.len() as f64
    };
    let zero_y = scale.y(0.0);

    let mut bars = Vec::with_capacity(districts.len());
    let mut x_ticks = Vec::with_capacity(districts.len());
    for (i, d) in districts.iter().enumerate() {
        let band_left = PLOT_LEFT + i as f64 * band;
        let center = band_left + band / 2.0;
        let value_y = scale.y(d.revenue);
        let top = value_y.min(zero_y);

        bars.push(Bar {
            x: band_left + band * (1.0 - BAR_FILL_RATIO) / 2.0,
            y: top,
            width: band * BAR_FILL_RATIO,
            height: (zero_y - value_y).abs(),
            tooltip: Tooltip::near(center, top, d.district.clone(), revenue_detail(d.revenue)),
        });
        x_ticks.push(Tick {
            position: center,
            label: d.district.clone(),
        });
    }

    BarChartModel {
        bars,
        x_ticks,
        y_ticks: scale.ticks(),
    }
}

// ============================================================================
// Sales by product (pie)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// SVG path of the wedge, empty for zero-size slices
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    /// `text-anchor` of the label
    pub label_anchor: &'static str,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartModel {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub slices: Vec<PieSlice>,
}

pub fn pie_chart(products: &[ProductSales]) -> PieChartModel {
    let cx = CHART_WIDTH / 2.0;
    let cy = CHART_HEIGHT / 2.0;
    let r = PIE_OUTER_RADIUS;

    let weight = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let total: f64 = products.iter().map(|p| weight(p.revenue)).sum();

    let mut start = -FRAC_PI_2;
    let slices = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let sweep = if total > 0.0 {
                weight(p.revenue) / total * TAU
            } else {
                0.0
            };
            let mid = start + sweep / 2.0;
            let label_r = r + PIE_LABEL_OFFSET;

            let slice = PieSlice {
                path: wedge_path(cx, cy, r, start, sweep),
                color: slice_color(i),
                label: format_count(p.revenue),
                label_x: cx + label_r * mid.cos(),
                label_y: cy + label_r * mid.sin(),
                label_anchor: if mid.cos() >= 0.0 { "start" } else { "end" },
                tooltip: Tooltip::near(
                    cx + r / 2.0 * mid.cos(),
                    cy + r / 2.0 * mid.sin(),
                    p.product.clone(),
                    revenue_detail(p.revenue),
                ),
            };
            start += sweep;
            slice
        })
        .collect();

    PieChartModel {
        cx,
        cy,
        radius: r,
        slices,
    }
}

/// Wedge from `start` clockwise by `sweep` radians (12 o'clock is `-PI/2`)
fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, sweep: f64) -> String {
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= TAU - 1e-9 {
        // An arc cannot end where it starts, so a full disc is two half arcs
        return format!(
            "M {:.2},{:.2} A {r:.2},{r:.2} 0 1 1 {:.2},{:.2} A {r:.2},{r:.2} 0 1 1 {:.2},{:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
        );
    }

    let end = start + sweep;
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M {:.2},{:.2} L {:.2},{:.2} A {r:.2},{r:.2} 0 {} 1 {:.2},{:.2} Z",
        cx,
        cy,
        cx + r * start.cos(),
        cy + r * start.sin(),
        large_arc,
        cx + r * end.cos(),
        cy + r * end.sin(),
    )
}

// ============================================================================
// Product summary table
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub product: String,
    pub orders: String,
    pub revenue: String,
}

pub fn summary_rows(products: &[ProductSales]) -> Vec<SummaryRow> {
    products
        .iter()
        .map(|p| SummaryRow {
            product: p.product.clone(),
            orders: format_count(p.orders),
            revenue: format_money(p.revenue),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, orders: f64, revenue: f64) -> ProductSales {
        ProductSales {
            product: name.to_string(),
            orders,
            revenue,
        }
    }

    fn trend(n: usize) -> Vec<RevenueTrendPoint> {
        (0..n)
            .map(|i| RevenueTrendPoint {
                date: format!("2024-03-{:02}", i + 1),
                revenue: (i * 100) as f64,
            })
            .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_kpi_cards_format_two_decimals_with_currency() {
        let cards = kpi_cards(&KpiSummary {
            today_revenue: 1234.5,
            week_revenue: 10.0,
            month_revenue: 0.125,
            total_turnover: 99999.999,
        });
        let labels: Vec<_> = cards.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Today", "Week", "Month", "Turnover"]);
        assert_eq!(cards[0].value, "$1234.50");
        assert_eq!(cards[1].value, "$10.00");
        assert_eq!(cards[3].value, "$100000.00");
    }

    #[test]
    fn test_default_kpi_cards_are_zero() {
        for card in kpi_cards(&KpiSummary::default()) {
            assert_eq!(card.value, "$0.00");
        }
    }

    #[test]
    fn test_slice_color_cycles_palette() {
        let products: Vec<_> = (0..9).map(|i| product("p", 1.0, i as f64 + 1.0)).collect();
        let pie = pie_chart(&products);
        for (i, slice) in pie.slices.iter().enumerate() {
            assert_eq!(slice.color, PALETTE[i % 4]);
        }
        assert_eq!(pie.slices[4].color, "#0088FE");
        assert_eq!(pie.slices[7].color, "#FF8042");
    }

    #[test]
    fn test_pie_keeps_api_order_and_labels_values() {
        let pie = pie_chart(&[product("B", 1.0, 30.0), product("A", 2.0, 10.0)]);
        assert_eq!(pie.slices[0].tooltip.title, "B");
        assert_eq!(pie.slices[0].label, "30");
        assert_eq!(pie.slices[1].tooltip.title, "A");
        assert!(pie.slices.iter().all(|s| !s.path.is_empty()));
        assert!(approx(pie.radius, PIE_OUTER_RADIUS));
    }

    #[test]
    fn test_pie_single_slice_is_full_circle() {
        let pie = pie_chart(&[product("Only", 1.0, 5.0), product("Free", 1.0, 0.0)]);
        assert!(pie.slices[0].path.contains(" A "));
        assert_eq!(pie.slices[0].path.matches(" A ").count(), 2);
        assert!(pie.slices[1].path.is_empty());
    }

    #[test]
    fn test_pie_with_zero_total_draws_nothing() {
        let pie = pie_chart(&[product("x", 0.0, 0.0), product("y", 0.0, -4.0)]);
        assert!(pie.slices.iter().all(|s| s.path.is_empty()));
        assert_eq!(pie.slices.len(), 2);
    }

    #[test]
    fn test_pie_large_arc_flag() {
        let pie = pie_chart(&[product("big", 1.0, 75.0), product("small", 1.0, 25.0)]);
        assert!(pie.slices[0].path.contains(" 0 1 1 "));
        assert!(pie.slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_summary_rows_match_products() {
        let products = vec![product("Tea", 12.0, 240.5), product("Mug", 3.0, 7.0)];
        let rows = summary_rows(&products);
        assert_eq!(rows.len(), products.len());
        assert_eq!(
            rows[0],
            SummaryRow {
                product: "Tea".into(),
                orders: "12".into(),
                revenue: "$240.50".into(),
            }
        );
        assert_eq!(rows[1].revenue, "$7.00");
        assert!(summary_rows(&[]).is_empty());
    }

    #[test]
    fn test_line_chart_maps_dates_and_revenue() {
        let model = line_chart(&trend(3));
        assert_eq!(model.points.len(), 3);
        assert!(approx(model.points[0].x, PLOT_LEFT));
        assert!(approx(model.points[2].x, PLOT_RIGHT));
        // highest revenue touches the top, zero sits on the bottom
        assert!(approx(model.points[2].y, PLOT_TOP));
        assert!(approx(model.points[0].y, PLOT_BOTTOM));
        assert!(model.path.starts_with("M "));
        assert_eq!(model.path.matches(" L ").count(), 2);
        assert_eq!(model.points[1].tooltip.title, "2024-03-02");
        assert_eq!(model.points[1].tooltip.detail, "revenue : 100");
    }

    #[test]
    fn test_line_chart_thins_x_labels() {
        let model = line_chart(&trend(30));
        assert_eq!(model.points.len(), 30);
        assert!(model.x_ticks.len() <= MAX_X_LABELS);
        assert_eq!(model.x_ticks[0].label, "01.03");
        assert_eq!(model.x_ticks[1].label, "06.03");
    }

    #[test]
    fn test_empty_line_chart() {
        let model = line_chart(&[]);
        assert!(model.points.is_empty());
        assert!(model.path.is_empty());
        assert!(model.x_ticks.is_empty());
        assert_eq!(model.y_ticks.len(), Y_TICK_INTERVALS + 1);
        assert!(model.y_ticks.iter().all(|t| t.position.is_finite()));
    }

    #[test]
    fn test_single_point_is_centered() {
        let model = line_chart(&trend(1));
        assert!(approx(model.points[0].x, (PLOT_LEFT + PLOT_RIGHT) / 2.0));
        assert!(model.points[0].y.is_finite());
    }

    #[test]
    fn test_bar_chart_geometry() {
        let districts = vec![
            DistrictSales {
                district: "North".into(),
                revenue: 200.0,
            },
            DistrictSales {
                district: "South".into(),
                revenue: 100.0,
            },
        ];
        let model = bar_chart(&districts);
        assert_eq!(model.bars.len(), 2);
        assert_eq!(model.x_ticks[0].label, "North");
        assert_eq!(model.x_ticks[1].label, "South");

        let full = PLOT_BOTTOM - PLOT_TOP;
        assert!(approx(model.bars[0].height, full));
        assert!(approx(model.bars[1].height, full / 2.0));
        assert!(approx(model.bars[0].y + model.bars[0].height, PLOT_BOTTOM));
        assert!(model.bars[0].x + model.bars[0].width < model.bars[1].x);
    }

    #[test]
    fn test_bar_chart_negative_values_hang_below_zero() {
        let model = bar_chart(&[
            DistrictSales {
                district: "Up".into(),
                revenue: 50.0,
            },
            DistrictSales {
                district: "Down".into(),
                revenue: -50.0,
            },
        ]);
        let zero = (PLOT_TOP + PLOT_BOTTOM) / 2.0;
        assert!(approx(model.bars[0].y + model.bars[0].height, zero));
        assert!(approx(model.bars[1].y, zero));
    }

    #[test]
    fn test_value_scale_never_divides_by_zero() {
        let scale = ValueScale::from_values([0.0, 0.0]);
        assert!(approx(scale.y(0.0), PLOT_BOTTOM));
        assert!(scale.y(f64::NAN).is_finite());
        let ticks = scale.ticks();
        assert_eq!(ticks.len(), Y_TICK_INTERVALS + 1);
        assert_eq!(ticks[0].label, "0");
        assert_eq!(ticks[Y_TICK_INTERVALS].label, "1");
        assert!(approx(ticks[Y_TICK_INTERVALS].position, PLOT_TOP));
    }

    #[test]
    fn test_tooltip_stays_inside_chart() {
        let tip = Tooltip::near(CHART_WIDTH, 0.0, "t".into(), "d".into());
        assert!(tip.x + TOOLTIP_WIDTH <= CHART_WIDTH);
        assert!(tip.y >= 0.0);
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2024-03-15"), "15.03");
        assert_eq!(short_date("Mar 15"), "Mar 15");
    }
}
