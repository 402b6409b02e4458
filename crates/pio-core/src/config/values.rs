//! Splitting of multi-value options such as `env_default` and `extra_configs`

use pio_ini::Value;

/// Split a written value into trimmed, non-empty items.
///
/// Items are separated by newlines and/or commas, so `a, b`, a two-line list
/// and a mixture of both all yield `["a", "b"]`.
pub fn parse_multi_values(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Items of a scalar or list value, split the same way.
pub(crate) fn multi_values(value: &Value) -> Vec<String> {
    match value {
        Value::Scalar(raw) => parse_multi_values(raw),
        Value::List(items) => items.iter().flat_map(|item| parse_multi_values(item)).collect(),
    }
}
