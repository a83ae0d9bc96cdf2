use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Active page and sidebar state, shared by the shell and the pages
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
