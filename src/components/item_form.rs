//! Item Form Component
//!
//! Create form that turns into an edit form while an item is being edited.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::DraftField;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating or editing an item
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let editing = move || store.editing_target().read().is_editing();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <section class="panel">
            <div class="panel-header">
                <div>
                    <h2>{move || if editing() { "Edit item" } else { "Add a new item" }}</h2>
                    <p>"Update your inventory in real time."</p>
                </div>
                <Show when=editing>
                    <button type="button" class="ghost" on:click=move |_| ctx.cancel_edit()>
                        "Cancel edit"
                    </button>
                </Show>
            </div>

            <form class="form" on:submit=on_submit>
                <DraftInput label="Name" field=DraftField::Name placeholder="Coffee Beans" />
                <DraftInput label="Description" field=DraftField::Description placeholder="Single origin, light roast" />
                <DraftInput label="Price" field=DraftField::Price placeholder="12.50" />
                <button type="submit" class="primary">
                    {move || if editing() { "Save changes" } else { "Add item" }}
                </button>
            </form>

            {move || store.error_message().get().map(|message| view! {
                <p class="error">{message}</p>
            })}
        </section>
    }
}

/// One labelled input bound to a draft field
#[component]
fn DraftInput(
    label: &'static str,
    field: DraftField,
    placeholder: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let name = label.to_lowercase();
    let input_mode = if field == DraftField::Price { "decimal" } else { "text" };
    let required = field.is_required();

    view! {
        <label>
            {label}
            <input
                name=name
                placeholder=placeholder
                inputmode=input_mode
                required=required
                prop:value=move || store.draft().read().get(field).to_string()
                on:input=move |ev| ctx.edit_draft(field, event_target_value(&ev))
            />
        </label>
    }
}
