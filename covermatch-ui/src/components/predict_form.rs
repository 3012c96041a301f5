//! Prediction Form Component
//!
//! Health details and budget, submitted to `/predict`.

use leptos::*;

use crate::state::form::{FieldKey, FieldKind};
use crate::state::global::PageState;

/// Prediction form
#[component]
pub fn PredictForm() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <form id="predict-form" class="predict-form" on:submit=on_submit>
            <div class="fields">
                {FieldKey::ALL
                    .into_iter()
                    .map(|field| view! { <Field field=field /> })
                    .collect_view()}
            </div>

            <button type="submit" class="primary-btn">"Find Policies"</button>
        </form>
    }
}

#[component]
fn Field(field: FieldKey) -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");

    let value = move || state.form.with(|form| form.get(field).to_string());

    let control = match field.kind() {
        FieldKind::YesNo => view! {
            <select
                id=field.id()
                name=field.id()
                prop:value=value
                on:change=move |ev| state.set_field(field, event_target_value(&ev))
            >
                <option value="0">"No"</option>
                <option value="1">"Yes"</option>
            </select>
        }
        .into_view(),
        FieldKind::Number => view! {
            <input
                id=field.id()
                name=field.id()
                type="number"
                min="0"
                step="any"
                prop:value=value
                on:input=move |ev| state.set_field(field, event_target_value(&ev))
            />
        }
        .into_view(),
    };

    view! {
        <label class="field" for=field.id()>
            <span class="field-label">{field.label()}</span>
            {control}
        </label>
    }
}
