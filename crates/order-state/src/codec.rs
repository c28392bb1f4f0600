//! State Codec
//!
//! Serializes the full state to a URL-fragment-safe token and back.
//! Two explicit steps: JSON (UTF-8 bytes), then base64. Decoding is
//! schema-tolerant: fields absent from older tokens fall back to defaults,
//! and a couple of legacy shapes are migrated during the merge.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::{default_recipients, Item, OrderState, NOTIFY_SLOTS, SCHEMA_VERSION};

/// Codec-level errors. Decode failures are never fatal: callers log and
/// fall back to the default state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    Serialize(String),
    InvalidToken(String),
    InvalidPayload(String),
    UnsupportedVersion(u32),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Serialize(msg) => write!(f, "Serialization failed: {msg}"),
            CodecError::InvalidToken(msg) => write!(f, "Invalid token: {msg}"),
            CodecError::InvalidPayload(msg) => write!(f, "Invalid payload: {msg}"),
            CodecError::UnsupportedVersion(v) => write!(f, "Unsupported schema version: {v}"),
        }
    }
}

impl std::error::Error for CodecError {}

/// Raw decoded payload: every field optional so that tokens from any older
/// schema merge cleanly over defaults. Unknown fields are ignored. The
/// aliases accept the key names the original schema shipped with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawState {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default, alias = "staffList")]
    pub requesters: Option<Vec<String>>,
    #[serde(default, alias = "itemList")]
    pub items: Option<Vec<Item>>,
    #[serde(default, alias = "orders")]
    pub quantities: Option<HashMap<String, i64>>,
    #[serde(default, alias = "orderRemark")]
    pub remark: Option<String>,
    #[serde(default, alias = "slackMembers")]
    pub notify_recipients: Option<Vec<String>>,
    /// Legacy schema: item name -> requester name, superseded by the
    /// per-item `requester` field.
    #[serde(default)]
    pub assignments: Option<HashMap<String, String>>,
}

/// Wire shape for encoding: the state plus an explicit schema version so
/// future migrations can key on it instead of field presence.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireState<'a> {
    version: u32,
    requesters: &'a [String],
    items: &'a [Item],
    quantities: &'a HashMap<String, u32>,
    remark: &'a str,
    notify_recipients: &'a [String],
}

/// Encode the full state as an opaque token. Pure; the caller writes the
/// token into the carrier.
pub fn encode(state: &OrderState) -> Result<String, CodecError> {
    let payload = WireState {
        version: SCHEMA_VERSION,
        requesters: &state.requesters,
        items: &state.items,
        quantities: &state.quantities,
        remark: &state.remark,
        notify_recipients: &state.notify_recipients,
    };
    let json = serde_json::to_vec(&payload).map_err(|e| CodecError::Serialize(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a token into a raw partial state. `Ok(None)` for an empty or
/// absent token; the caller should then initialize from defaults.
pub fn decode(token: &str) -> Result<Option<RawState>, CodecError> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(None);
    }
    let bytes = decode_base64(token)?;
    let raw: RawState =
        serde_json::from_slice(&bytes).map_err(|e| CodecError::InvalidPayload(e.to_string()))?;
    if let Some(version) = raw.version {
        if version > SCHEMA_VERSION {
            return Err(CodecError::UnsupportedVersion(version));
        }
    }
    Ok(Some(raw))
}

/// Legacy tokens used the standard alphabet with padding; kept for
/// backward-compatible decoding.
fn decode_base64(token: &str) -> Result<Vec<u8>, CodecError> {
    URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| STANDARD.decode(token))
        .map_err(|e| CodecError::InvalidToken(e.to_string()))
}

/// Merge a decoded payload over the default state, field by field, then
/// apply the schema-compatibility and integrity rules.
pub fn merge_over_defaults(raw: RawState) -> OrderState {
    let mut state = OrderState::default();
    if let Some(requesters) = raw.requesters {
        state.requesters = requesters;
    }
    if let Some(items) = raw.items {
        state.items = items;
    }
    if let Some(quantities) = raw.quantities {
        state.quantities = quantities
            .into_iter()
            .map(|(name, count)| (name, count.clamp(0, i64::from(u32::MAX)) as u32))
            .collect();
    }
    if let Some(remark) = raw.remark {
        state.remark = remark;
    }
    if let Some(recipients) = raw.notify_recipients {
        // A list of any other length is malformed; replace it wholesale.
        match <[String; NOTIFY_SLOTS]>::try_from(recipients) {
            Ok(slots) => state.notify_recipients = slots,
            Err(_) => state.notify_recipients = default_recipients(),
        }
    }
    if let Some(assignments) = raw.assignments {
        // Additive migration: never overwrites an explicit requester.
        for item in &mut state.items {
            if item.requester.is_none() {
                if let Some(who) = assignments.get(&item.name) {
                    item.requester = Some(who.clone());
                }
            }
        }
    }
    normalize(&mut state);
    state
}

/// Backfill a zero quantity entry for every item that lacks one.
/// Idempotent; running it on an already-normalized state is a no-op.
pub fn normalize(state: &mut OrderState) {
    let OrderState {
        items, quantities, ..
    } = state;
    for item in items.iter() {
        quantities.entry(item.name.clone()).or_insert(0);
    }
}
