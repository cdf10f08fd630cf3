use crate::dashboards::d404_shop_analytics::view_model::summary_rows;
use contracts::dashboards::d404_shop_analytics::ProductSales;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

/// One row per product, in API order
#[component]
pub fn ProductSummaryTable(products: Vec<ProductSales>) -> impl IntoView {
    let rows = summary_rows(&products);

    view! {
        <div class="table-card">
            <h2>"Product Summary"</h2>
            <Table class="summary-table">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Orders"</TableHeaderCell>
                        <TableHeaderCell>"Revenue"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <TableRow>
                                    <TableCell>{row.product}</TableCell>
                                    <TableCell class="text-right">{row.orders}</TableCell>
                                    <TableCell class="text-right">{row.revenue}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
