//! State Store
//!
//! Explicitly owned container around [`OrderState`]. All UI-driven
//! mutations go through here; persistence (encode + carrier write) is the
//! caller's job after every successful mutation.

use crate::codec::{self, CodecError};
use crate::model::{Item, OrderState, NOTIFY_SLOTS};

/// Validation errors surfaced to the user as a blocking dialog. The
/// operation aborts with no state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    MissingName,
    DuplicateRequester(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::MissingName => write!(f, "A name is required"),
            StoreError::DuplicateRequester(name) => {
                write!(f, "Requester already exists: {name}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Outcome of [`StateStore::upsert_item`], so the UI can phrase its
/// confirmation accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStore {
    state: OrderState,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(mut state: OrderState) -> Self {
        codec::normalize(&mut state);
        Self { state }
    }

    /// Decode a carrier token and merge it over defaults. An absent token
    /// yields the default state; a malformed one is an error the caller
    /// should log before falling back to [`StateStore::new`].
    pub fn try_load(token: &str) -> Result<Self, CodecError> {
        let state = match codec::decode(token)? {
            Some(raw) => codec::merge_over_defaults(raw),
            None => OrderState::default(),
        };
        Ok(Self { state })
    }

    /// [`StateStore::try_load`] with the fallback applied: a malformed
    /// token is logged and replaced by the default state.
    pub fn load(token: &str) -> Self {
        match Self::try_load(token) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("discarding undecodable state token: {e}");
                Self::new()
            }
        }
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn quantity_for(&self, name: &str) -> u32 {
        self.state.quantity(name)
    }

    /// Encode the current state as a carrier token.
    pub fn to_token(&self) -> Result<String, CodecError> {
        codec::encode(&self.state)
    }

    /// Append a requester. Names are trimmed; empty and duplicate names
    /// are rejected.
    pub fn add_requester(&mut self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::MissingName);
        }
        if self.state.requesters.iter().any(|r| r == name) {
            return Err(StoreError::DuplicateRequester(name.to_string()));
        }
        self.state.requesters.push(name.to_string());
        Ok(())
    }

    /// Add a new item or update an existing one in place. A new item gets
    /// a zero quantity entry immediately.
    pub fn upsert_item(
        &mut self,
        name: &str,
        description: &str,
        requester: &str,
    ) -> Result<Upsert, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::MissingName);
        }
        let description = non_empty(description);
        let requester = non_empty(requester);
        if let Some(item) = self.state.items.iter_mut().find(|i| i.name == name) {
            item.description = description;
            item.requester = requester;
            Ok(Upsert::Updated)
        } else {
            self.state.items.push(Item {
                name: name.to_string(),
                description,
                requester,
            });
            self.state.quantities.insert(name.to_string(), 0);
            Ok(Upsert::Added)
        }
    }

    /// Store an order count, clamped to be non-negative.
    pub fn set_quantity(&mut self, name: &str, count: i64) {
        let clamped = count.clamp(0, i64::from(u32::MAX)) as u32;
        self.state.quantities.insert(name.to_string(), clamped);
    }

    pub fn set_remark(&mut self, text: &str) {
        self.state.remark = text.to_string();
    }

    pub fn set_notify_recipients(&mut self, recipients: [String; NOTIFY_SLOTS]) {
        self.state.notify_recipients = recipients;
    }

    /// Replace everything with a fresh default state. The caller clears
    /// the carrier.
    pub fn reset(&mut self) {
        self.state = OrderState::default();
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_requester() {
        let mut store = StateStore::new();
        store.add_requester("Alice").expect("add failed");
        assert_eq!(store.state().requesters, vec!["Alice".to_string()]);
    }

    #[test]
    fn test_duplicate_requester_is_rejected() {
        let mut store = StateStore::new();
        store.add_requester("Alice").expect("add failed");
        let err = store.add_requester("Alice").unwrap_err();
        assert_eq!(err, StoreError::DuplicateRequester("Alice".to_string()));
        assert_eq!(store.state().requesters.len(), 1);
    }

    #[test]
    fn test_empty_requester_is_rejected() {
        let mut store = StateStore::new();
        assert_eq!(store.add_requester("   "), Err(StoreError::MissingName));
        assert!(store.state().requesters.is_empty());
    }

    #[test]
    fn test_upsert_adds_item_with_zero_quantity() {
        let mut store = StateStore::new();
        let outcome = store.upsert_item("Stapler", "", "").expect("upsert failed");
        assert_eq!(outcome, Upsert::Added);
        assert_eq!(store.quantity_for("Stapler"), 0);
        assert!(store.state().quantities.contains_key("Stapler"));
        let item = store.state().find_item("Stapler").expect("item missing");
        assert_eq!(item.description, None);
        assert_eq!(item.requester, None);
    }

    #[test]
    fn test_upsert_updates_existing_item_in_place() {
        let mut store = StateStore::new();
        store.upsert_item("Pens", "blue", "Alice").expect("upsert failed");
        store.set_quantity("Pens", 4);
        let outcome = store.upsert_item("Pens", "red", "Bob").expect("upsert failed");
        assert_eq!(outcome, Upsert::Updated);
        assert_eq!(store.state().items.len(), 1);
        let item = store.state().find_item("Pens").expect("item missing");
        assert_eq!(item.description.as_deref(), Some("red"));
        assert_eq!(item.requester.as_deref(), Some("Bob"));
        // Quantity survives an update.
        assert_eq!(store.quantity_for("Pens"), 4);
    }

    #[test]
    fn test_upsert_requires_a_name() {
        let mut store = StateStore::new();
        assert_eq!(store.upsert_item("", "d", "r"), Err(StoreError::MissingName));
        assert!(store.state().items.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_negative_to_zero() {
        let mut store = StateStore::new();
        store.upsert_item("Stapler", "", "").expect("upsert failed");
        store.set_quantity("Stapler", -5);
        assert_eq!(store.quantity_for("Stapler"), 0);
    }

    #[test]
    fn test_set_remark_and_recipients() {
        let mut store = StateStore::new();
        store.set_remark("お願いします");
        let mut recipients = crate::model::default_recipients();
        recipients[2] = "bob".to_string();
        store.set_notify_recipients(recipients.clone());
        assert_eq!(store.state().remark, "お願いします");
        assert_eq!(store.state().notify_recipients, recipients);
    }

    #[test]
    fn test_from_state_backfills_quantities() {
        let mut state = crate::model::OrderState::default();
        state.items.push(Item::new("Pens"));
        let store = StateStore::from_state(state);
        assert_eq!(store.quantity_for("Pens"), 0);
        assert!(store.state().quantities.contains_key("Pens"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = StateStore::new();
        store.add_requester("Alice").expect("add failed");
        store.upsert_item("Pens", "", "").expect("upsert failed");
        store.reset();
        assert_eq!(store, StateStore::new());
    }

    #[test]
    fn test_load_falls_back_to_defaults_on_garbage() {
        let store = StateStore::load("not-base64-garbage!!");
        assert_eq!(store.state(), &crate::model::OrderState::default());
    }

    #[test]
    fn test_load_of_empty_token_gives_defaults() {
        let store = StateStore::load("");
        assert_eq!(store.state(), &crate::model::OrderState::default());
    }
}
