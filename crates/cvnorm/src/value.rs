use serde_json::Value as Json;

/// A Clarity value returned by a read-only contract call, decoded from the
/// wire envelope into one variant per kind.
///
/// The model is closed: everything the decoder does not recognize lands in
/// [`ClarityValue::Unknown`], so matches over this type stay exhaustive
/// without losing the forward-compatibility passthrough.
#[derive(Debug, Clone, PartialEq)]
pub enum ClarityValue {
    /// `uint` payload as decimal text, kept verbatim so 128-bit magnitudes
    /// survive normalization unclipped.
    UInt(String),
    /// `int` payload as decimal text.
    Int(String),
    Bool(bool),
    StringAscii(String),
    StringUtf8(String),
    /// Standard or contract principal, as printed by the node.
    Principal(String),
    /// `(buff N)` content in its wire encoding (`0x…`), never re-encoded.
    Buffer(String),
    /// Elements may be heterogeneous; order is significant.
    List(Vec<ClarityValue>),
    /// Field names are unique; order is carried only so output is stable.
    Tuple(Vec<(String, ClarityValue)>),
    /// `(some v)` and `none` as one wrapper variant.
    Optional(Option<Box<ClarityValue>>),
    /// `(ok v)` / `(err v)`; `success` is true for `ok`.
    Response {
        success: bool,
        value: Box<ClarityValue>,
    },
    /// A kind this crate does not know, with its raw JSON payload carried
    /// through untouched.
    Unknown { kind: String, payload: Json },
}

impl ClarityValue {
    /// Peel `(ok …)`/`(err …)` and `(some …)` layers until a plain value
    /// remains. `none` is terminal and stays `Optional(None)`.
    ///
    /// Extractors in [`crate::extract`] look at a value exactly as given;
    /// call sites that want see-through behavior compose this explicitly,
    /// e.g. `extract_uint(cv.unwrapped())`.
    pub fn unwrapped(&self) -> &ClarityValue {
        let mut current = self;
        loop {
            match current {
                ClarityValue::Response { value, .. } => current = value.as_ref(),
                ClarityValue::Optional(Some(inner)) => current = inner.as_ref(),
                _ => return current,
            }
        }
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(
            self,
            ClarityValue::Optional(Some(_)) | ClarityValue::Response { .. }
        )
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ClarityValue::UInt(_) => "uint",
            ClarityValue::Int(_) => "int",
            ClarityValue::Bool(_) => "bool",
            ClarityValue::StringAscii(_) => "string-ascii",
            ClarityValue::StringUtf8(_) => "string-utf8",
            ClarityValue::Principal(_) => "principal",
            ClarityValue::Buffer(_) => "buffer",
            ClarityValue::List(_) => "list",
            ClarityValue::Tuple(_) => "tuple",
            ClarityValue::Optional(_) => "optional",
            ClarityValue::Response { .. } => "response",
            ClarityValue::Unknown { .. } => "unknown",
        }
    }
}
