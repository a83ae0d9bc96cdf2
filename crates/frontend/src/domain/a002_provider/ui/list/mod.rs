use crate::shared::crud::{list_area, CatalogFormModal, ConfirmDeleteModal, CrudStore, FormViewModel};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_provider::Provider;
use contracts::domain::common::{CatalogEntity, EntityId};
use contracts::shared::delete_gate::DeleteGate;
use leptos::prelude::*;

fn detail_row(icon_name: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="card__row">
            {icon(icon_name)}
            <span>{text}</span>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProviderList() -> impl IntoView {
    let store = CrudStore::<Provider>::new();
    let vm = FormViewModel::new(store);
    let (form_open, set_form_open) = signal(false);
    let gate = RwSignal::new(DeleteGate::Closed);
    let search = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        let query = search.get();
        store.cache.with(|c| c.search(&query))
    });

    let handle_create_new = move || {
        vm.start_create();
        set_form_open.set(true);
    };

    let handle_edit = move |id: EntityId| {
        if vm.start_edit(id) {
            set_form_open.set(true);
        }
    };

    let handle_delete = move |id: EntityId| store.request_delete(gate, id);

    let render_card = move |p: Provider| {
        let id = p.id;
        let email = p.email_label().to_string();
        let address = p.address_label().to_string();
        view! {
            <div class="card" data-id=id.as_string()>
                <div class="card__header">
                    <span class="card__icon">{icon("suppliers")}</span>
                    <h3 class="card__title">{p.nombre}</h3>
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
                {detail_row("user", p.contacto)}
                {detail_row("phone", p.telefono)}
                {detail_row("mail", email)}
                {detail_row("map-pin", address)}
            </div>
        }
        .into_any()
    };

    store.reload();

    view! {
        <PageFrame page_id="a002_provider--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Provider::TEXTS.list_title}</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        "Nuevo proveedor"
                    </button>
                    <button class="button button--secondary" on:click=move |_| store.reload()>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="search"
                        class="form__input"
                        placeholder="Buscar por nombre, contacto, teléfono o correo..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>

                {list_area(store, visible, render_card)}
            </div>

            <Show when=move || form_open.get()>
                <CatalogFormModal
                    vm=vm
                    id_prefix="prov"
                    on_close=Callback::new(move |_| set_form_open.set(false))
                />
            </Show>

            <ConfirmDeleteModal
                gate=gate
                entity_label="el proveedor"
                on_confirm=Callback::new(move |_| store.confirm_delete(gate))
            />
        </PageFrame>
    }
}
