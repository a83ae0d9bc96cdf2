use super::api;
use super::store::CrudStore;
use contracts::domain::common::{CatalogEntity, EntityForm, EntityId};
use contracts::shared::save_outcome::SaveOutcome;
use contracts::shared::validation::{validate_form, FormValidation};
use leptos::prelude::*;

/// ViewModel for a create/edit form of any catalog entity
///
/// Validation is recomputed on every keystroke against the store's cache;
/// its aggregate result gates the submit button.
pub struct FormViewModel<E: CatalogEntity> {
    pub form: RwSignal<E::Form>,
    /// `Some(id)` in edit mode; excluded from the duplicate-name check
    pub editing: RwSignal<Option<EntityId>>,
    /// Errors are rendered only after the user has typed something
    pub touched: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub validation: Memo<FormValidation>,
    store: CrudStore<E>,
}

impl<E: CatalogEntity> Clone for FormViewModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: CatalogEntity> Copy for FormViewModel<E> {}

impl<E: CatalogEntity> FormViewModel<E> {
    pub fn new(store: CrudStore<E>) -> Self {
        let form = RwSignal::new(E::Form::default());
        let editing = RwSignal::new(None::<EntityId>);
        let validation = Memo::new(move |_| {
            let editing = editing.get();
            form.with(|f| store.cache.with(|c| validate_form::<E>(f, c, editing)))
        });

        Self {
            form,
            editing,
            touched: RwSignal::new(false),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            validation,
            store,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.get().is_some()
    }

    /// Blank form in create mode
    pub fn start_create(&self) {
        self.form.set(E::Form::default());
        self.editing.set(None);
        self.touched.set(false);
        self.error.set(None);
    }

    /// Pre-fill from the cache. Returns `false` if the record is gone.
    pub fn start_edit(&self, id: EntityId) -> bool {
        let Some(entity) = self.store.find(id) else {
            return false;
        };
        self.form.set(entity.to_form());
        self.editing.set(Some(id));
        self.touched.set(true);
        self.error.set(None);
        true
    }

    pub fn value(&self, key: &'static str) -> String {
        self.form.with(|f| f.field_value(key).to_string())
    }

    pub fn set_field(&self, key: &'static str, value: String) {
        self.form.update(|f| {
            if let Some(slot) = f.field_mut(key) {
                *slot = value;
            }
        });
        self.touched.set(true);
    }

    /// Message to render under a field, if any
    pub fn visible_error(&self, key: &'static str) -> Option<&'static str> {
        if self.touched.get() {
            self.validation.with(|v| v.error(key))
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.validation.with(|v| v.is_valid()) && !self.saving.get()
    }

    /// POST in create mode, PUT in edit mode; reload the list on success.
    ///
    /// On failure the form stays as typed and the error is shown.
    pub fn save_command(&self, on_saved: Callback<()>) {
        if !self.validation.with_untracked(|v| v.is_valid()) || self.saving.get_untracked() {
            return;
        }

        let vm = *self;
        let payload = self.form.get_untracked();
        let editing = self.editing.get_untracked();
        self.saving.set(true);
        self.error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing {
                Some(id) => api::update::<E>(id, &payload).await,
                None => api::create::<E>(&payload).await,
            };
            vm.saving.set(false);

            match &result {
                Ok(()) => log::info!(
                    "{}: {} saved",
                    E::TEXTS.list_title,
                    editing.map(|id| id.to_string()).unwrap_or_else(|| "new record".into())
                ),
                Err(e) => log::error!("{}: save failed: {}", E::TEXTS.list_title, e),
            }

            let outcome = SaveOutcome::from_result(editing, &result);
            vm.error.set(outcome.error);
            if outcome.reset_form {
                vm.start_create();
            }
            if outcome.reload {
                vm.store.reload();
            }
            if outcome.close {
                on_saved.run(());
            }
        });
    }
}
