//! End-to-end tests over the store/codec pipeline: the same sequences the
//! UI drives, minus the rendering.

use crate::{build_message, decode, merge_over_defaults, StateStore, StoreError, Upsert};

#[test]
fn test_full_session_round_trips_through_the_carrier() {
    let mut store = StateStore::new();
    store.add_requester("山田").expect("add failed");
    store.add_requester("Alice").expect("add failed");
    store
        .upsert_item("ペン", "青・0.5mm", "山田")
        .expect("upsert failed");
    store.upsert_item("Stapler", "", "Alice").expect("upsert failed");
    store.set_quantity("ペン", 3);
    store.set_remark("来週までにお願いします");
    let mut recipients = crate::default_recipients();
    recipients[0] = "alice".to_string();
    store.set_notify_recipients(recipients);

    // What the UI does after every mutation: encode, write, later reload.
    let token = store.to_token().expect("encode failed");
    let reloaded = StateStore::try_load(&token).expect("load failed");
    assert_eq!(reloaded, store);
}

#[test]
fn test_session_on_top_of_a_legacy_token() {
    // Legacy schema token: old key names, an assignments map, no
    // requester fields, no recipient list.
    let json = r#"{
        "staffList": ["Alice", "Bob"],
        "itemList": [{"name": "Pens", "desc": "blue"}, {"name": "Ink"}],
        "orders": {"Pens": 2},
        "orderRemark": "asap",
        "assignments": {"Pens": "Alice"}
    }"#;
    let token = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, json);

    let mut store = StateStore::try_load(&token).expect("load failed");
    let state = store.state();
    assert_eq!(state.requesters, vec!["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(
        state.find_item("Pens").and_then(|i| i.requester.as_deref()),
        Some("Alice")
    );
    assert_eq!(state.quantity("Ink"), 0, "backfilled on load");

    // Continue the session and round-trip under the current schema.
    assert_eq!(store.upsert_item("Ink", "black", "Bob"), Ok(Upsert::Updated));
    store.set_quantity("Ink", 1);
    let token = store.to_token().expect("encode failed");
    let reloaded = StateStore::try_load(&token).expect("load failed");
    assert_eq!(reloaded, store);
}

#[test]
fn test_unicode_survives_the_token_transform() {
    let mut store = StateStore::new();
    store.add_requester("田中 太郎").expect("add failed");
    store
        .upsert_item("蛍光ペン", "黄色／太字", "田中 太郎")
        .expect("upsert failed");
    store.set_remark("🖊️ なるべく早めに");
    let token = store.to_token().expect("encode failed");
    assert!(token.is_ascii());
    let reloaded = StateStore::try_load(&token).expect("load failed");
    assert_eq!(reloaded, store);
}

#[test]
fn test_failed_mutation_leaves_the_token_unchanged() {
    let mut store = StateStore::new();
    store.add_requester("Alice").expect("add failed");
    let before = store.to_token().expect("encode failed");
    assert_eq!(
        store.add_requester("Alice"),
        Err(StoreError::DuplicateRequester("Alice".to_string()))
    );
    assert_eq!(store.upsert_item(" ", "", ""), Err(StoreError::MissingName));
    assert_eq!(store.to_token().expect("encode failed"), before);
}

#[test]
fn test_reset_then_encode_matches_a_fresh_store() {
    let mut store = StateStore::new();
    store.upsert_item("Pens", "", "").expect("upsert failed");
    store.set_quantity("Pens", 9);
    store.reset();
    assert_eq!(
        store.to_token().expect("encode failed"),
        StateStore::new().to_token().expect("encode failed")
    );
}

#[test]
fn test_message_from_a_decoded_state() {
    let mut store = StateStore::new();
    store.upsert_item("ペン", "", "山田").expect("upsert failed");
    store.set_quantity("ペン", 2);
    let mut recipients = crate::default_recipients();
    recipients[0] = "suzuki".to_string();
    store.set_notify_recipients(recipients);

    let token = store.to_token().expect("encode failed");
    let raw = decode(&token).expect("decode failed").expect("token present");
    let state = merge_over_defaults(raw);
    let message = build_message(&state);
    assert!(message.starts_with("@suzuki\n"));
    assert!(message.contains("・ペン × 2｜依頼者: 山田"));
}

#[test]
fn test_merge_is_stable_across_repeated_encode_decode() {
    let mut store = StateStore::new();
    store.upsert_item("Pens", "blue", "").expect("upsert failed");
    let once = StateStore::try_load(&store.to_token().expect("encode failed")).expect("load failed");
    let twice = StateStore::try_load(&once.to_token().expect("encode failed")).expect("load failed");
    assert_eq!(once, twice);
}

#[test]
fn test_encode_never_emits_the_legacy_keys() {
    let mut store = StateStore::new();
    store.upsert_item("Pens", "blue", "Alice").expect("upsert failed");
    let token = store.to_token().expect("encode failed");
    let bytes = base64::Engine::decode(
        &base64::engine::general_purpose::URL_SAFE_NO_PAD,
        &token,
    )
    .expect("token is url-safe base64");
    let json = String::from_utf8(bytes).expect("payload is utf-8");
    assert!(json.contains("\"version\":1"));
    assert!(!json.contains("staffList"));
    assert!(!json.contains("assignments"));
    assert!(!json.contains("\"desc\""));
}
