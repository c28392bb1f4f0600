//! Order Sheet Frontend App
//!
//! Loads state from the URL fragment once on startup, then renders the
//! three tabbed panels. A malformed fragment is logged and replaced by
//! defaults; it is never surfaced as an error dialog.

use leptos::prelude::*;
use order_state::StateStore;

use crate::components::{AdminPanel, ConfirmPanel, OrderPanel, TabBar};
use crate::context::{AppContext, Tab};
use crate::hash;

#[component]
pub fn App() -> impl IntoView {
    let store = match StateStore::try_load(&hash::read_token()) {
        Ok(store) => store,
        Err(e) => {
            web_sys::console::error_1(&format!("読み込みエラー: {e}").into());
            StateStore::new()
        }
    };
    let ctx = AppContext::new(store);
    provide_context(ctx);

    view! {
        <div class="container">
            <h1>"備品注文シート"</h1>
            <TabBar />
            <Show when=move || ctx.active_tab.get() == Tab::Admin>
                <AdminPanel />
            </Show>
            <Show when=move || ctx.active_tab.get() == Tab::Order>
                <OrderPanel />
            </Show>
            <Show when=move || ctx.active_tab.get() == Tab::Confirm>
                <ConfirmPanel />
            </Show>
        </div>
    }
}
