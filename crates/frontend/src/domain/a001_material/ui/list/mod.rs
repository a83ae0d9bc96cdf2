use crate::shared::crud::form_field::schema_fields;
use crate::shared::crud::{list_area, CatalogFormModal, ConfirmDeleteModal, CrudStore, FormViewModel};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_material::aggregate::FIELD_DESCRIPCION;
use contracts::domain::a001_material::Material;
use contracts::domain::common::{CatalogEntity, EntityId};
use contracts::shared::delete_gate::DeleteGate;
use leptos::prelude::*;

const MULTILINE: &[&str] = &[FIELD_DESCRIPCION];

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let store = CrudStore::<Material>::new();
    let create_vm = FormViewModel::new(store);
    let edit_vm = FormViewModel::new(store);
    let (edit_open, set_edit_open) = signal(false);
    let gate = RwSignal::new(DeleteGate::Closed);
    let search = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let query = search.get();
        store.cache.with(|c| c.search(&query))
    });

    let handle_edit = move |id: EntityId| {
        if edit_vm.start_edit(id) {
            set_edit_open.set(true);
        }
    };

    let handle_delete = move |id: EntityId| store.request_delete(gate, id);

    let render_card = move |m: Material| {
        let id = m.id;
        let description = m.description_label().to_string();
        view! {
            <div class="card" data-id=id.as_string()>
                <div class="card__header">
                    <span class="card__icon">{icon("inventory")}</span>
                    <h3 class="card__title">{m.nombre}</h3>
                    <div class="card__actions">
                        <button
                            class="button button--icon"
                            title="Editar"
                            on:click=move |_| handle_edit(id)
                        >
                            {icon("edit")}
                        </button>
                        <button
                            class="button button--icon button--danger"
                            title="Eliminar"
                            on:click=move |_| handle_delete(id)
                        >
                            {icon("delete")}
                        </button>
                    </div>
                </div>
                <p class="card__text">{description}</p>
            </div>
        }
        .into_any()
    };

    let handle_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        create_vm.save_command(Callback::new(|_| {}));
    };

    store.reload();

    view! {
        <PageFrame page_id="a001_material--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Material::TEXTS.list_title}</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=move |_| store.reload()>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <form class="form-card" on:submit=handle_create>
                    <h2 class="form-card__title">{Material::TEXTS.create_title}</h2>
                    {schema_fields(create_vm, "mat", MULTILINE)}
                    {move || create_vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
                    <div class="details-actions">
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || !create_vm.can_submit()
                        >
                            {icon("plus")}
                            {move || if create_vm.saving.get() { "Guardando..." } else { "Guardar material" }}
                        </button>
                    </div>
                </form>

                <div class="search-box">
                    {icon("search")}
                    <input
                        type="search"
                        class="form__input"
                        placeholder="Buscar material..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>

                {list_area(store, visible, render_card)}
            </div>

            <Show when=move || edit_open.get()>
                <CatalogFormModal
                    vm=edit_vm
                    id_prefix="mat-edit"
                    multiline=MULTILINE
                    on_close=Callback::new(move |_| set_edit_open.set(false))
                />
            </Show>

            <ConfirmDeleteModal
                gate=gate
                entity_label="el material"
                on_confirm=Callback::new(move |_| store.confirm_delete(gate))
            />
        </PageFrame>
    }
}
