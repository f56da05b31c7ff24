//! Inventory Frontend App
//!
//! Main application component: header, item form and item list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemForm, ItemList};
use crate::context::AppContext;
use crate::models::build_config;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let config = build_config();
    let ctx = match AppContext::new(config.clone(), store) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!(error = %e, base_url = %config.base_url, "[APP] Invalid API configuration");
            return view! {
                <div class="page">
                    <p class="error">{format!("Invalid API configuration: {}", e)}</p>
                </div>
            }
            .into_any();
        }
    };
    provide_context(ctx);

    // Initial load on mount
    Effect::new(move |_| ctx.reload());

    view! {
        <div class="page">
            <header class="hero">
                <p class="badge">"Inventory"</p>
                <h1>"Keep your stock in sync."</h1>
                <p class="hero-subtitle">
                    "Create, read, update and delete items against the inventory API."
                </p>
                <span class="stats">
                    {move || format!("{} items tracked", store.items().read().len())}
                </span>
            </header>

            <main id="items-section" class="content">
                <ItemForm />
                <ItemList />
            </main>
        </div>
    }
    .into_any()
}
