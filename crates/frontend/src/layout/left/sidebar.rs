//! Sidebar with one item per catalog page

use crate::layout::global_context::{AppGlobalContext, PAGES};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {PAGES
                .iter()
                .map(|&(id, label, icon_name)| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.with(|a| a == id)
                            style:padding-left="12px"
                            on:click=move |_| ctx.activate(id)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
