use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::shared::delete_gate::{DeleteGate, PendingDelete};
use leptos::prelude::*;

/// Modal that keeps the destructive button disabled until the user types
/// the required confirmation text
#[component]
pub fn ConfirmDeleteModal(
    gate: RwSignal<DeleteGate>,
    /// Article + noun, e.g. "el material"
    entity_label: &'static str,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let pending = move |f: fn(&PendingDelete) -> String| {
        gate.with(|g| g.pending().map(f).unwrap_or_default())
    };

    view! {
        <Show when=move || gate.with(|g| g.is_open())>
            <Modal
                title="Confirmar eliminación".to_string()
                class="modal--danger"
                on_close=Callback::new(move |_| gate.update(|g| g.close()))
            >
                <p class="delete-warning">
                    "Estás a punto de eliminar " {entity_label} " "
                    <strong>{move || pending(|p| p.name.clone())}</strong>
                    ". Esta acción no se puede deshacer."
                </p>
                <p>
                    "Para confirmar, escribe "
                    <code class="eliminar-input-validacion">{move || pending(|p| p.required.clone())}</code>
                </p>
                <input
                    type="text"
                    class="form__input"
                    autocomplete="off"
                    prop:value=move || pending(|p| p.typed.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        gate.update(|g| g.input(&text));
                    }
                />
                {move || {
                    gate.with(|g| g.pending().and_then(|p| p.error.clone()))
                        .map(|e| view! { <div class="error">{e}</div> })
                }}
                <div class="details-actions">
                    <button
                        type="button"
                        class="button button--danger"
                        disabled=move || !gate.with(|g| g.can_confirm())
                        on:click=move |_| on_confirm.run(())
                    >
                        {icon("delete")}
                        {move || {
                            if gate.with(|g| g.pending().map(|p| p.in_flight).unwrap_or(false)) {
                                "Eliminando..."
                            } else {
                                "Eliminar permanentemente"
                            }
                        }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| gate.update(|g| g.close())
                    >
                        "Cancelar"
                    </button>
                </div>
            </Modal>
        </Show>
    }
}
