//! Tab Bar Component

use leptos::prelude::*;

use crate::context::{AppContext, Tab};

const TABS: &[(Tab, &str)] = &[
    (Tab::Admin, "管理"),
    (Tab::Order, "注文"),
    (Tab::Confirm, "確認"),
];

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="tab-bar">
            {TABS.iter().map(|(tab, label)| {
                let tab = *tab;
                let tab_class = move || {
                    if ctx.active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.active_tab.set(tab)>
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
