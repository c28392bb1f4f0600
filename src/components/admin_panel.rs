//! Admin Panel Component
//!
//! Requester registration, item registration/update, and the reset action.

use leptos::prelude::*;
use order_state::{StoreError, Upsert};

use crate::context::AppContext;
use crate::dialog;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_requester, set_new_requester) = signal(String::new());
    let (item_name, set_item_name) = signal(String::new());
    let (item_desc, set_item_desc) = signal(String::new());
    let (item_requester, set_item_requester) = signal(String::new());

    let add_requester = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_requester.get();
        match ctx.mutate(|store| store.add_requester(&name)) {
            Ok(()) => {
                set_new_requester.set(String::new());
                dialog::alert(&format!("{} さんを依頼者リストに追加しました。", name.trim()));
            }
            Err(StoreError::DuplicateRequester(_)) => {
                dialog::alert("その名前は既に存在します。");
            }
            // Empty submits are ignored without a dialog.
            Err(StoreError::MissingName) => {}
        }
    };

    let upsert_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = item_name.get();
        let desc = item_desc.get();
        let requester = item_requester.get();
        let shown_requester = if requester.trim().is_empty() {
            "未設定".to_string()
        } else {
            requester.trim().to_string()
        };
        match ctx.mutate(|store| store.upsert_item(&name, &desc, &requester)) {
            Ok(outcome) => {
                let verb = match outcome {
                    Upsert::Added => "追加",
                    Upsert::Updated => "更新",
                };
                dialog::alert(&format!(
                    "「{}」を{}しました。\n(依頼者: {})",
                    name.trim(),
                    verb,
                    shown_requester
                ));
                set_item_name.set(String::new());
                set_item_desc.set(String::new());
                set_item_requester.set(String::new());
            }
            Err(_) => dialog::alert("備品名を入力してください"),
        }
    };

    let reset = move |_| {
        if dialog::confirm("全てのデータを削除して初期状態に戻しますか？") {
            ctx.reset();
            dialog::alert("リセットしました。管理画面から設定を行ってください。");
        }
    };

    view! {
        <div class="panel admin-panel">
            <h2>"依頼者の登録"</h2>
            <form class="admin-form" on:submit=add_requester>
                <input
                    type="text"
                    placeholder="依頼者の名前"
                    prop:value=move || new_requester.get()
                    on:input=move |ev| set_new_requester.set(event_target_value(&ev))
                />
                <button type="submit">"追加"</button>
            </form>

            <h2>"備品の登録・更新"</h2>
            <form class="admin-form" on:submit=upsert_item>
                <input
                    type="text"
                    placeholder="備品名（同名で上書き）"
                    prop:value=move || item_name.get()
                    on:input=move |ev| set_item_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="説明（任意）"
                    prop:value=move || item_desc.get()
                    on:input=move |ev| set_item_desc.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || item_requester.get()
                    on:change=move |ev| set_item_requester.set(event_target_value(&ev))
                >
                    <option value="">"-- 依頼者を選択してください --"</option>
                    <For
                        each=move || ctx.store.with(|s| s.state().requesters.clone())
                        key=|name| name.clone()
                        children=move |name| {
                            view! { <option value=name.clone()>{name.clone()}</option> }
                        }
                    />
                </select>
                <button type="submit">"登録"</button>
            </form>

            <h2>"リセット"</h2>
            <button class="danger-btn" on:click=reset>
                "全データを削除して初期状態に戻す"
            </button>
        </div>
    }
}
