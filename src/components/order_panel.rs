//! Order Panel Component
//!
//! Quantity entry per item, the remark field, and the share-URL button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::clipboard;
use crate::context::AppContext;
use crate::dialog;
use crate::hash;

#[component]
pub fn OrderPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let warnings = move || {
        let mut messages = Vec::new();
        ctx.store.with(|s| {
            if s.state().requesters.is_empty() {
                messages.push("・注文依頼者が登録されていません。管理画面から追加してください。");
            }
            if s.state().items.is_empty() {
                messages.push("・備品が登録されていません。管理画面から追加してください。");
            }
        });
        messages
    };

    view! {
        <div class="panel order-panel">
            <Show when=move || !warnings().is_empty()>
                <div class="setup-warning">
                    <strong>"【設定が必要です】"</strong>
                    {move || warnings().into_iter().map(|msg| view! { <div>{msg}</div> }).collect_view()}
                </div>
            </Show>

            <div class="items-container">
                <For
                    each=move || ctx.store.with(|s| s.state().items.clone())
                    key=|item| item.name.clone()
                    children=move |item| {
                        let quantity_name = item.name.clone();
                        let quantity = move || ctx.store.with(|s| s.quantity_for(&quantity_name));
                        let change_name = item.name.clone();
                        view! {
                            <div class="form-group">
                                <div class="item-info">
                                    <span class="item-name">{item.name.clone()}</span>
                                    {item.description.clone().map(|desc| view! {
                                        <div class="item-desc">{desc}</div>
                                    })}
                                    {match item.requester.clone() {
                                        Some(requester) => view! {
                                            <div class="item-requester-display">
                                                {format!("依頼者: {requester}")}
                                            </div>
                                        }.into_any(),
                                        None => view! {
                                            <div class="item-requester-display unset">
                                                "依頼者: 未設定"
                                            </div>
                                        }.into_any(),
                                    }}
                                </div>
                                <div class="item-controls">
                                    <input
                                        type="number"
                                        min="0"
                                        prop:value=move || quantity().to_string()
                                        on:change=move |ev| {
                                            let count = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                                            ctx.mutate(|store| store.set_quantity(&change_name, count));
                                        }
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <div class="form-group remark-group">
                <label>"備考"</label>
                <textarea
                    placeholder="注文に関する連絡事項"
                    prop:value=move || ctx.store.with(|s| s.state().remark.clone())
                    on:input=move |ev| {
                        ctx.mutate(|store| store.set_remark(&event_target_value(&ev)));
                    }
                ></textarea>
            </div>

            <CopyUrlButton />
        </div>
    }
}

/// Copies the shareable address; flips its label and color for three
/// seconds after a successful copy.
#[component]
fn CopyUrlButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (copied, set_copied) = signal(false);

    let copy_url = move |_| {
        // Make sure the address reflects the latest state before copying.
        ctx.persist();
        let url = hash::share_url();
        spawn_local(async move {
            match clipboard::write_text(&url).await {
                Ok(()) => {
                    set_copied.set(true);
                    dialog::alert("共有用URLをコピーしました！");
                    TimeoutFuture::new(3_000).await;
                    set_copied.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("コピー失敗: {e}").into());
                    dialog::alert(&format!("コピーできませんでした。このURLを共有してください:\n{url}"));
                }
            }
        });
    };

    view! {
        <button
            class=move || if copied.get() { "copy-btn btn-copied" } else { "copy-btn" }
            on:click=copy_url
        >
            {move || if copied.get() { "URLをコピーしました！" } else { "現在の状態をURLとしてコピー" }}
        </button>
    }
}
