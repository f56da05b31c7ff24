//! Item Row Component
//!
//! A single item in the list.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{price_display, Item};
use crate::store::{use_app_store, AppStateStoreFields};

/// A single item row with edit and delete actions
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id.clone();
    let name = item.name.clone();
    let description = item.description_label().to_string();
    let price = price_display(&item);

    let row_id = id.clone();
    let is_editing = move || store.editing_target().read().item_id() == Some(&row_id);

    let on_delete = Callback::new(move |_: ()| ctx.delete(id.clone()));

    view! {
        <div class="row" class:editing=is_editing>
            <div>
                <h3>{name}</h3>
                <p>{description}</p>
            </div>
            <div class="row-actions">
                <span class="price">{price}</span>
                <button class="ghost" on:click=move |_| ctx.begin_edit(&item)>
                    "Edit"
                </button>
                <DeleteConfirmButton button_class="danger" on_confirm=on_delete />
            </div>
        </div>
    }
}
