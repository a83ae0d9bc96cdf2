use super::form_view_model::FormViewModel;
use contracts::domain::common::CatalogEntity;
use contracts::shared::validation::FieldSpec;
use leptos::prelude::*;

/// Labelled input with its validation message
#[component]
pub fn ValidatedField(
    spec: FieldSpec,
    /// HTML id of the input, e.g. "prov-telefono"
    input_id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    /// Render a textarea instead of a single-line input
    #[prop(optional)]
    multiline: bool,
) -> impl IntoView {
    let has_error = move || error.get().is_some();
    let label_id = input_id.clone();

    let control = if multiline {
        view! {
            <textarea
                id=input_id
                class="form__input"
                class:invalid=has_error
                rows="3"
                placeholder=spec.placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=input_id
                class="form__input"
                class:invalid=has_error
                type=spec.input_type
                placeholder=spec.placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label class="form__label" for=label_id>
                {spec.label}
                {spec.is_required().then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {control}
            <span class="validation-message" class:visible=has_error>
                {move || error.get().unwrap_or_default()}
            </span>
        </div>
    }
}

/// One `ValidatedField` per schema row, bound to the view model
pub fn schema_fields<E: CatalogEntity>(
    vm: FormViewModel<E>,
    id_prefix: &'static str,
    multiline: &'static [&'static str],
) -> impl IntoView {
    E::SCHEMA
        .iter()
        .map(|spec| {
            let key = spec.key;
            view! {
                <ValidatedField
                    spec=*spec
                    input_id=format!("{}-{}", id_prefix, key)
                    value=Signal::derive(move || vm.value(key))
                    on_input=Callback::new(move |v: String| vm.set_field(key, v))
                    error=Signal::derive(move || vm.visible_error(key))
                    multiline=multiline.contains(&key)
                />
            }
        })
        .collect_view()
}
