//! Shallow typed extractors and the composite dashboard records built from
//! them.
//!
//! Extractors look at a value exactly as given; they do not see through
//! optional or response wrappers. Call sites that want see-through behavior
//! say so: `extract_uint(cv.unwrapped())`.
//!
//! Composite records are per-field independent: one malformed field defaults
//! without blocking its siblings.

use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::normalize::normalize;
use crate::number::{int_text_to_json, is_decimal_int};
use crate::value::ClarityValue;

/// Integer kinds only. `Some` carries a number or, past the safe-integer
/// range, the original decimal string; text that is not an integer yields
/// `None`.
pub fn extract_uint(value: &ClarityValue) -> Option<Json> {
    match value {
        ClarityValue::UInt(text) | ClarityValue::Int(text) if is_decimal_int(text) => {
            Some(int_text_to_json(text))
        }
        _ => None,
    }
}

/// Text kinds: ascii, utf8, principal.
pub fn extract_string(value: &ClarityValue) -> Option<&str> {
    match value {
        ClarityValue::StringAscii(s)
        | ClarityValue::StringUtf8(s)
        | ClarityValue::Principal(s) => Some(s),
        _ => None,
    }
}

pub fn extract_bool(value: &ClarityValue) -> Option<bool> {
    match value {
        ClarityValue::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Tuple kind, each field normalized. An empty tuple yields an empty map.
pub fn extract_tuple(value: &ClarityValue) -> Option<Map<String, Json>> {
    match value {
        ClarityValue::Tuple(fields) => Some(
            fields
                .iter()
                .map(|(name, field)| (name.clone(), normalize(field)))
                .collect(),
        ),
        _ => None,
    }
}

/// Pool-level staking numbers, `(get-total-staked)` + `(get-reward-rate)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingInfo {
    pub total_staked: Json,
    pub reward_rate: Json,
}

/// Either side defaults to `0` when it does not extract as an integer.
pub fn staking_info(total_staked: &ClarityValue, reward_rate: &ClarityValue) -> StakingInfo {
    StakingInfo {
        total_staked: extract_uint(total_staked).unwrap_or_else(|| Json::from(0)),
        reward_rate: extract_uint(reward_rate).unwrap_or_else(|| Json::from(0)),
    }
}

/// One staker's position, renamed from the contract's kebab-case tuple.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeRecord {
    pub amount: Json,
    pub staked_at: Json,
    pub lock_until: Json,
    pub reward_debt: Json,
    pub lock_multiplier: Json,
}

/// `None` when the input is not a tuple — no partially-filled record. A
/// field missing from the tuple is `null`.
pub fn stake_record(value: &ClarityValue) -> Option<StakeRecord> {
    let fields = extract_tuple(value)?;
    let take = |name: &str| fields.get(name).cloned().unwrap_or(Json::Null);
    Some(StakeRecord {
        amount: take("amount"),
        staked_at: take("staked-at"),
        lock_until: take("lock-until"),
        reward_debt: take("reward-debt"),
        lock_multiplier: take("lock-multiplier"),
    })
}

/// SIP-010 token identity from three independent read-only calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetadata {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Json,
}

/// Each field that fails its kind check is absent on its own; there is no
/// whole-record failure mode.
pub fn token_metadata(
    name: &ClarityValue,
    symbol: &ClarityValue,
    decimals: &ClarityValue,
) -> TokenMetadata {
    TokenMetadata {
        name: extract_string(name).map(str::to_owned),
        symbol: extract_string(symbol).map(str::to_owned),
        decimals: extract_uint(decimals).unwrap_or(Json::Null),
    }
}
