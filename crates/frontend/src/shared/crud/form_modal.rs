use super::form_field::schema_fields;
use super::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::common::CatalogEntity;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Create/edit dialog rendered from the entity schema
#[component]
pub fn CatalogFormModal<E>(
    vm: FormViewModel<E>,
    /// Prefix of the input ids, e.g. "prov"
    id_prefix: &'static str,
    /// Schema keys rendered as textareas
    #[prop(optional)]
    multiline: &'static [&'static str],
    on_close: Callback<()>,
) -> impl IntoView
where
    E: CatalogEntity,
{
    let title = Signal::derive(move || {
        if vm.is_edit_mode() {
            E::TEXTS.edit_title.to_string()
        } else {
            E::TEXTS.create_title.to_string()
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_close);
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="details-form" on:submit=on_submit>
                {schema_fields(vm, id_prefix, multiline)}

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || !vm.can_submit()>
                        {move || if vm.saving.get() {
                            "Guardando..."
                        } else if vm.is_edit_mode() {
                            "Guardar cambios"
                        } else {
                            "Registrar"
                        }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        {icon("x")}
                        "Cancelar"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
