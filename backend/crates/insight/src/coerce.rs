use serde_json::Value;

/// Coerce a raw field to a finite number, defaulting to `0.0`.
///
/// Numbers pass through, numeric strings are parsed after trimming
/// (a blank string is `0.0`), booleans are `1.0`/`0.0`. An empty array is
/// `0.0` and a one-element array coerces through its element's text.
/// Everything else (missing, `null`, objects, longer arrays, unparseable
/// strings, `NaN`/`inf` spellings) is `0.0`. Negative values are kept as-is.
pub fn finite_or_zero(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_numeric(s),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => Some(0.0),
            [only] => array_element_numeric(only),
            _ => None,
        },
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

// `[x]` reads as the text of `x`, so `[true]` and `[{..}]` are not numbers.
fn array_element_numeric(item: &Value) -> Option<f64> {
    match item {
        Value::Null => Some(0.0),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric(s),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [only] => array_element_numeric(only),
            _ => None,
        },
        _ => None,
    }
}

fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

/// Coerce a raw field to its display string, defaulting to `""`.
///
/// Strings are returned byte-for-byte. Integral numbers render without a
/// fractional part; floats at or above `1e21` or below `1e-6` in magnitude
/// use exponent form (`1e+21`, `1e-7`). Booleans render as `true`/`false`,
/// arrays and objects as compact JSON text.
pub fn string_or_empty(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(number_text).unwrap_or_default()
            }
        }
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

fn number_text(n: f64) -> String {
    if n == 0.0 {
        return "0".to_owned();
    }
    let magnitude = n.abs();
    if magnitude < 1e21 && magnitude >= 1e-6 {
        return n.to_string();
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
