use super::store::CrudStore;
use contracts::domain::common::CatalogEntity;
use contracts::shared::listing::EmptyState;
use leptos::prelude::*;

#[component]
pub fn EmptyStatePanel(state: EmptyState) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{state.title}</h3>
            <p>{state.hint}</p>
        </div>
    }
}

/// List area of a catalog page: loading text, load error, empty panel or cards.
///
/// `visible` is the cache after the search filter; `render_card` builds one
/// card with its own edit/delete handlers.
pub fn list_area<E, F>(store: CrudStore<E>, visible: Memo<Vec<E>>, render_card: F) -> impl IntoView
where
    E: CatalogEntity,
    F: Fn(E) -> AnyView + Clone + Send + Sync + 'static,
{
    move || {
        let state = store.load_state.get();
        if let Some(message) = state.error() {
            return view! { <p class="list-error">{message.to_string()}</p> }.into_any();
        }
        let total = store.cache.with(|c| c.len());
        if state.is_loading() && total == 0 {
            return view! { <p class="list-loading">"Cargando..."</p> }.into_any();
        }

        let items = visible.get();
        match EmptyState::for_listing(&E::TEXTS, total, items.len()) {
            Some(empty) => view! { <EmptyStatePanel state=empty /> }.into_any(),
            None => view! {
                <div class="card-grid">
                    {items.into_iter().map(render_card.clone()).collect_view()}
                </div>
            }
            .into_any(),
        }
    }
}
