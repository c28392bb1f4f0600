//! Confirm Panel Component
//!
//! Read-only summary of the selected quantities plus the notification
//! message section.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use order_state::{build_message, Item, NOTIFY_SLOTS};

use crate::clipboard;
use crate::context::AppContext;
use crate::dialog;

#[component]
pub fn ConfirmPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Items with a positive order count, in catalog order.
    let ordered = move || -> Vec<(Item, u32)> {
        ctx.store.with(|s| {
            s.state()
                .items
                .iter()
                .filter_map(|item| {
                    let count = s.quantity_for(&item.name);
                    (count > 0).then(|| (item.clone(), count))
                })
                .collect()
        })
    };
    let remark = move || ctx.store.with(|s| s.state().remark.trim().to_string());

    view! {
        <div class="panel confirm-panel">
            <Show when=move || !remark().is_empty()>
                <div class="remark-display">
                    <strong>"備考"</strong>
                    <p>{remark}</p>
                </div>
            </Show>

            <ul class="confirm-list">
                {move || {
                    let lines = ordered();
                    if lines.is_empty() {
                        view! { <li class="empty-msg">"注文アイテムはありません"</li> }.into_any()
                    } else {
                        lines.into_iter().map(|(item, count)| view! {
                            <li>
                                <div class="order-details">
                                    <span>{item.name.clone()}</span>
                                    {item.description.clone().map(|desc| view! {
                                        <small>{format!("({desc})")}</small>
                                    })}
                                    {item.requester.clone().map(|requester| view! {
                                        <div class="item-requester-display">
                                            {format!("依頼者: {requester}")}
                                        </div>
                                    })}
                                </div>
                                <strong>{format!("{count} 個")}</strong>
                            </li>
                        }).collect_view().into_any()
                    }
                }}
            </ul>

            <NotifySection />
        </div>
    }
}

/// The 7 mention slots and the copy-notification-message button.
#[component]
fn NotifySection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (copied, set_copied) = signal(false);

    let set_slot = move |slot: usize, value: String| {
        ctx.mutate(|store| {
            let mut recipients = store.state().notify_recipients.clone();
            recipients[slot] = value;
            store.set_notify_recipients(recipients);
        });
    };

    let copy_message = move |_| {
        let message = ctx.store.with_untracked(|s| build_message(s.state()));
        spawn_local(async move {
            match clipboard::write_text(&message).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(3_000).await;
                    set_copied.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("コピー失敗: {e}").into());
                    dialog::alert("通知メッセージをコピーできませんでした。");
                }
            }
        });
    };

    view! {
        <div class="notify-section">
            <h2>"通知メッセージ"</h2>
            <p class="notify-hint">"チャットでメンションする相手を入力してください（空欄可）"</p>
            <div class="notify-recipients">
                {(0..NOTIFY_SLOTS).map(|slot| {
                    let value = move || ctx.store.with(|s| s.state().notify_recipients[slot].clone());
                    view! {
                        <input
                            type="text"
                            placeholder=format!("メンション {}", slot + 1)
                            prop:value=value
                            on:input=move |ev| set_slot(slot, event_target_value(&ev))
                        />
                    }
                }).collect_view()}
            </div>
            <button
                class=move || if copied.get() { "copy-btn btn-copied" } else { "copy-btn" }
                on:click=copy_message
            >
                {move || if copied.get() { "メッセージをコピーしました！" } else { "通知メッセージをコピー" }}
            </button>
        </div>
    }
}
