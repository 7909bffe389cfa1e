//! Normalization: [`ClarityValue`] trees into plain, serializable JSON.

use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::number::int_text_to_json;
use crate::value::ClarityValue;

/// Flag-preserving result of normalizing a `(response …)` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseOutcome {
    pub success: bool,
    pub value: Json,
}

/// Convert a decoded value into its plain JSON representation.
///
/// Pure and total: no input can make this fail, and repeated calls on the
/// same input yield identical output. Integers follow the number-or-string
/// policy of [`crate::number`]; `none` becomes JSON `null`; optional and
/// response wrappers unwrap one layer per node, with the response flag
/// discarded. Call sites that need the flag use [`response_outcome`].
pub fn normalize(value: &ClarityValue) -> Json {
    match value {
        ClarityValue::UInt(text) | ClarityValue::Int(text) => int_text_to_json(text),
        ClarityValue::Bool(b) => Json::Bool(*b),
        ClarityValue::StringAscii(s)
        | ClarityValue::StringUtf8(s)
        | ClarityValue::Principal(s) => Json::String(s.clone()),
        // Byte content stays in its wire encoding; decoding it into text is
        // the consumer's decision.
        ClarityValue::Buffer(hex) => Json::String(hex.clone()),
        ClarityValue::List(items) => Json::Array(items.iter().map(normalize).collect()),
        ClarityValue::Tuple(fields) => {
            let mut out = Map::new();
            for (name, field) in fields {
                out.insert(name.clone(), normalize(field));
            }
            Json::Object(out)
        }
        ClarityValue::Optional(None) => Json::Null,
        ClarityValue::Optional(Some(inner)) => normalize(inner),
        ClarityValue::Response { value, .. } => normalize(value),
        ClarityValue::Unknown { payload, .. } => payload.clone(),
    }
}

/// Flag-preserving sibling of [`normalize`] for `(response …)` values.
///
/// Returns `None` for any other kind rather than inventing a flag for a
/// value that never had one.
pub fn response_outcome(value: &ClarityValue) -> Option<ResponseOutcome> {
    match value {
        ClarityValue::Response { success, value } => Some(ResponseOutcome {
            success: *success,
            value: normalize(value),
        }),
        _ => None,
    }
}
