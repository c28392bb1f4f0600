//! Application Context
//!
//! The explicitly owned state container, provided via Leptos Context API.
//! Every mutation goes through [`AppContext::mutate`], which persists the
//! encoded state into the URL fragment afterwards.

use leptos::prelude::*;
use order_state::StateStore;

use crate::hash;

/// The three screens of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Admin,
    Order,
    Confirm,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single in-memory state, wrapped for reactivity.
    pub store: RwSignal<StateStore>,
    /// Currently visible screen.
    pub active_tab: RwSignal<Tab>,
}

impl AppContext {
    pub fn new(store: StateStore) -> Self {
        Self {
            store: RwSignal::new(store),
            active_tab: RwSignal::new(Tab::Order),
        }
    }

    /// Apply a mutation to the store, then write the carrier. The result
    /// of the mutation is handed back so callers can branch on validation
    /// outcomes.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut StateStore) -> R) -> R {
        let result = self
            .store
            .try_update(f)
            .expect("state store signal should be alive");
        self.persist();
        result
    }

    /// Encode the current state into the fragment.
    pub fn persist(&self) {
        match self.store.with_untracked(|store| store.to_token()) {
            Ok(token) => hash::write_token(&token),
            Err(e) => {
                web_sys::console::error_1(&format!("状態の保存に失敗しました: {e}").into());
            }
        }
    }

    /// Replace everything with a fresh default state and clear the
    /// fragment (this one adds a history entry).
    pub fn reset(&self) {
        self.store.update(|store| store.reset());
        hash::clear_token();
    }
}
