//! Order Sheet Core
//!
//! The canonical application state, the token codec that persists it into
//! a URL fragment, and the mutation surface the UI drives. No WASM or UI
//! dependencies; the test suite runs on the host.

mod codec;
mod model;
mod notify;
mod store;

#[cfg(test)]
mod tests;

pub use codec::{decode, encode, merge_over_defaults, normalize, CodecError, RawState};
pub use model::{default_recipients, Item, OrderState, NOTIFY_SLOTS, SCHEMA_VERSION};
pub use notify::build_message;
pub use store::{StateStore, StoreError, Upsert};
