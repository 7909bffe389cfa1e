//! Wire adapter: `cvToJSON`-shaped tagged JSON into [`ClarityValue`].
//!
//! The node serializes a read-only call result as `{"type": …, "value": …}`
//! with an extra boolean `success` on response kinds. Kind strings are bare
//! words (`uint`, `bool`, `principal`) or parenthesized type expressions
//! (`(string-ascii 34)`, `(list 3 uint)`, `(optional none)`); the prefix
//! matching over those strings is confined to this module.
//!
//! Decoding is total: a node whose payload does not match its declared kind,
//! whose kind is unrecognized, or that is not a tagged object at all becomes
//! [`ClarityValue::Unknown`] carrying the raw JSON.

use serde_json::Value as Json;

use crate::error::Result;
use crate::value::ClarityValue;

/// Parse a JSON document and decode it. The only failure is malformed JSON.
pub fn from_json_str(input: &str) -> Result<ClarityValue> {
    let raw: Json = serde_json::from_str(input)?;
    Ok(from_json(&raw))
}

/// Decode one tagged node.
pub fn from_json(raw: &Json) -> ClarityValue {
    let Some(obj) = raw.as_object() else {
        return unknown("", raw);
    };
    let Some(kind) = obj.get("type").and_then(Json::as_str) else {
        return unknown("", raw);
    };
    let payload = obj.get("value");

    match kind {
        "uint" => match int_payload(payload) {
            Some(text) => ClarityValue::UInt(text),
            None => unknown(kind, raw),
        },
        "int" => match int_payload(payload) {
            Some(text) => ClarityValue::Int(text),
            None => unknown(kind, raw),
        },
        "bool" => match payload.and_then(Json::as_bool) {
            Some(b) => ClarityValue::Bool(b),
            None => unknown(kind, raw),
        },
        "principal" => match string_payload(payload) {
            Some(s) => ClarityValue::Principal(s),
            None => unknown(kind, raw),
        },
        _ => from_composite(kind, payload, raw),
    }
}

fn from_composite(kind: &str, payload: Option<&Json>, raw: &Json) -> ClarityValue {
    if kind.starts_with("(string-ascii") {
        return match string_payload(payload) {
            Some(s) => ClarityValue::StringAscii(s),
            None => unknown(kind, raw),
        };
    }
    if kind.starts_with("(string-utf8") {
        return match string_payload(payload) {
            Some(s) => ClarityValue::StringUtf8(s),
            None => unknown(kind, raw),
        };
    }
    if kind.starts_with("(buff") {
        return match string_payload(payload) {
            Some(s) => ClarityValue::Buffer(s),
            None => unknown(kind, raw),
        };
    }
    if kind.starts_with("(list") {
        return match payload.and_then(Json::as_array) {
            Some(items) => ClarityValue::List(items.iter().map(from_json).collect()),
            None => unknown(kind, raw),
        };
    }
    if kind.starts_with("(tuple") {
        return match payload {
            // A tuple with no payload is an empty record, not a failure.
            None | Some(Json::Null) => ClarityValue::Tuple(Vec::new()),
            Some(Json::Object(fields)) => ClarityValue::Tuple(
                fields
                    .iter()
                    .map(|(name, field)| (name.clone(), from_json(field)))
                    .collect(),
            ),
            Some(_) => unknown(kind, raw),
        };
    }
    if kind.starts_with("(optional") {
        // Covers both `(optional none)` and a typed optional whose payload
        // happens to be null.
        return match payload {
            None | Some(Json::Null) => ClarityValue::Optional(None),
            Some(inner) => ClarityValue::Optional(Some(Box::new(from_json(inner)))),
        };
    }
    if kind.starts_with("(response") {
        let success = raw
            .get("success")
            .and_then(Json::as_bool)
            .unwrap_or(false);
        let value = match payload {
            None | Some(Json::Null) => ClarityValue::Optional(None),
            Some(inner) => from_json(inner),
        };
        return ClarityValue::Response {
            success,
            value: Box::new(value),
        };
    }
    unknown(kind, raw)
}

fn int_payload(payload: Option<&Json>) -> Option<String> {
    match payload {
        Some(Json::String(s)) => Some(s.clone()),
        Some(Json::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn string_payload(payload: Option<&Json>) -> Option<String> {
    payload.and_then(Json::as_str).map(str::to_owned)
}

fn unknown(kind: &str, raw: &Json) -> ClarityValue {
    ClarityValue::Unknown {
        kind: kind.to_owned(),
        payload: raw.get("value").cloned().unwrap_or_else(|| raw.clone()),
    }
}
