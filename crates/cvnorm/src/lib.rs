#![doc = include_str!("../README.md")]

pub mod decode;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod number;
pub mod value;

pub use crate::error::{Error, Result};
pub use crate::extract::{
    StakeRecord, StakingInfo, TokenMetadata, stake_record, staking_info, token_metadata,
};
pub use crate::normalize::{ResponseOutcome, normalize, response_outcome};
pub use crate::value::ClarityValue;

use std::io::Read;

/// Decode a tagged-value JSON document and normalize it in one step.
pub fn normalize_json_str(input: &str) -> Result<serde_json::Value> {
    let value = crate::decode::from_json_str(input)?;
    Ok(crate::normalize::normalize(&value))
}

/// Reader variant of [`normalize_json_str`].
pub fn normalize_json_reader<R: Read>(mut reader: R) -> Result<serde_json::Value> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    normalize_json_str(&buf)
}
