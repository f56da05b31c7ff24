//! Item List Component
//!
//! Mirrored collection with loading and empty states.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Item list panel with a manual refresh
#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <section class="panel list">
            <div class="panel-header">
                <div>
                    <h2>"Items"</h2>
                    <p>"Your current list from the server."</p>
                </div>
                <button class="ghost" on:click=move |_| ctx.reload()>
                    "Refresh"
                </button>
            </div>

            {move || {
                if store.loading().get() {
                    view! { <p class="muted">"Loading items..."</p> }.into_any()
                } else if store.items().read().is_empty() {
                    view! { <p class="muted">"No items yet. Add your first one!"</p> }.into_any()
                } else {
                    view! {
                        <div class="table">
                            <For
                                each=move || store.items().get()
                                key=|item| {
                                    // Every displayed field, so an edited row re-renders
                                    (
                                        item.id.clone(),
                                        item.name.clone(),
                                        item.description.clone(),
                                        item.price.to_bits(),
                                    )
                                }
                                children=move |item| view! { <ItemRow item=item /> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
