//! PageFrame — standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"d404_shop_analytics--dashboard"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
//!
//! #[component]
//! pub fn MyDashboard() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="d404_shop_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class `page--dashboard` for dashboard pages.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
