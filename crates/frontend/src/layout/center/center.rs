use crate::domain::a001_material::ui::list::MaterialList;
use crate::domain::a002_provider::ui::list::ProviderList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Page registered under the active key. Switching pages drops the old
/// page together with its store.
#[component]
pub fn ActivePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || match ctx.active.get().as_str() {
        "a002_provider" => view! { <ProviderList /> }.into_any(),
        _ => view! { <MaterialList /> }.into_any(),
    }
}
