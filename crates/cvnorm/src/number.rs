use serde_json::Value as Json;

/// Largest integer magnitude a JSON consumer can hold in an IEEE double
/// without loss (2^53 - 1).
pub const MAX_SAFE_INTEGER: i128 = 9_007_199_254_740_991;

/// Number-or-string policy for integer payloads.
///
/// Decimal text whose value fits `±MAX_SAFE_INTEGER` becomes a JSON number;
/// anything else — larger magnitudes as well as text that is not an integer
/// at all — passes through as the original string, byte for byte. Downstream
/// consumers read the output as doubles, so rounding a 128-bit token amount
/// here would corrupt it silently.
pub(crate) fn int_text_to_json(text: &str) -> Json {
    if let Ok(n) = text.parse::<i128>() {
        if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) {
            return Json::Number((n as i64).into());
        }
    }
    Json::String(text.to_owned())
}

/// ASCII digits with at most one leading sign.
pub(crate) fn is_decimal_int(text: &str) -> bool {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
