//! PageFrame - root wrapper of every page shown in the center area.

use super::page_standard::is_valid_page_id;
use leptos::prelude::*;

/// Sets `id` and `data-page-category` on the page root.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_material--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: malformed page id '{}'", page_id);
    }

    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}
