use super::api;
use contracts::domain::common::{CatalogEntity, EntityId};
use contracts::shared::cache::EntityCache;
use contracts::shared::delete_gate::{DeleteGate, GateOutcome};
use contracts::shared::listing::LoadState;
use leptos::prelude::*;

/// Page-scoped state of one catalog screen: the cache and the load status.
///
/// Created by the list component and handed down; nothing here is global.
pub struct CrudStore<E: CatalogEntity> {
    pub cache: RwSignal<EntityCache<E>>,
    pub load_state: RwSignal<LoadState>,
}

impl<E: CatalogEntity> Clone for CrudStore<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: CatalogEntity> Copy for CrudStore<E> {}

impl<E: CatalogEntity> CrudStore<E> {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(EntityCache::new()),
            load_state: RwSignal::new(LoadState::Loading),
        }
    }

    /// Fetch the collection and replace the cache wholesale.
    ///
    /// On failure the cache is emptied and the list shows the error.
    /// Overlapping reloads are not coordinated: the last answer wins.
    pub fn reload(&self) {
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_all::<E>().await {
                Ok(items) => {
                    log::info!("{}: loaded {} records", E::TEXTS.list_title, items.len());
                    store.cache.update(|c| c.replace(Some(items)));
                    store.load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("{}: load failed: {}", E::TEXTS.list_title, e);
                    store.cache.update(|c| c.clear());
                    store.load_state.set(LoadState::failed(&E::TEXTS, &e));
                }
            }
        });
    }

    pub fn find(&self, id: EntityId) -> Option<E> {
        self.cache.with_untracked(|c| c.find(id).cloned())
    }

    /// Open the confirmation gate for a cached record
    pub fn request_delete(&self, gate: RwSignal<DeleteGate>, id: EntityId) {
        match self.find(id) {
            Some(entity) => gate.set(DeleteGate::open(id, entity.name(), E::CONFIRMATION)),
            None => log::warn!("{}: record {} not in cache", E::TEXTS.list_title, id),
        }
    }

    /// Issue the DELETE once the gate is unlocked. Reloads only on success.
    pub fn confirm_delete(&self, gate: RwSignal<DeleteGate>) {
        let Some(id) = gate.try_update(|g| g.confirm()).flatten() else {
            return;
        };
        let store = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::delete::<E>(id).await;
            if let Err(e) = &result {
                log::error!("{}: delete of {} failed: {}", E::TEXTS.list_title, id, e);
            }
            let outcome = gate.try_update(|g| g.resolve(id, result));
            if outcome.as_ref().is_some_and(GateOutcome::reloads_list) {
                log::info!("{}: deleted {}", E::TEXTS.list_title, id);
                store.reload();
            }
        });
    }
}
