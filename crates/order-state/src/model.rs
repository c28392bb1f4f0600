//! Order Sheet Domain Model
//!
//! The single root entity the whole tool revolves around, plus the item
//! catalog entry. This layer has NO external dependencies (except serde
//! for serialization).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of notification mention slots. The recipient list always has
/// exactly this many entries; entries may be empty.
pub const NOTIFY_SLOTS: usize = 7;

/// Schema version written into every encoded token.
pub const SCHEMA_VERSION: u32 = 1;

/// An orderable catalog entry. `name` is the primary key and the join key
/// into [`OrderState::quantities`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Shown under the item name. Older tokens used the key `desc`.
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Who asked for this item; should reference an entry in `requesters`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            requester: None,
        }
    }
}

/// Canonical application state. Created once per page load, mutated in
/// place through [`crate::StateStore`] and re-encoded after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderState {
    /// People who can be assigned to items; insertion order is display order.
    pub requesters: Vec<String>,
    /// Orderable catalog entries; insertion order is display order.
    pub items: Vec<Item>,
    /// Current order count per item name. Every item has an entry; missing
    /// entries are backfilled as zero on load.
    pub quantities: HashMap<String, u32>,
    /// Free-text note shown on the confirmation view.
    pub remark: String,
    /// Notification mention targets. Fixed length by construction.
    pub notify_recipients: [String; NOTIFY_SLOTS],
}

impl Default for OrderState {
    fn default() -> Self {
        Self {
            requesters: Vec::new(),
            items: Vec::new(),
            quantities: HashMap::new(),
            remark: String::new(),
            notify_recipients: default_recipients(),
        }
    }
}

impl OrderState {
    /// Order count for an item, zero when absent.
    pub fn quantity(&self, name: &str) -> u32 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }
}

/// The default 7-slot recipient list (all slots empty).
pub fn default_recipients() -> [String; NOTIFY_SLOTS] {
    std::array::from_fn(|_| String::new())
}
