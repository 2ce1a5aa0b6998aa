//! Argument rendering for call logs
//!
//! Arguments are rendered by type: strings quoted and truncated, numbers and
//! booleans as-is, arrays and objects as a type tag with an element count.

use crate::args::Args;
use serde_json::Value;

/// Strings longer than this many characters are truncated
pub const DEFAULT_MAX_ARG_LEN: usize = 128;

fn cut(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

/// Render a single argument
pub fn render_argument(value: &Value, max_len: usize) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", cut(s, max_len)),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => format!("[list:{}]", items.len()),
        Value::Object(map) => format!("{{dict:{}}}", map.len()),
        Value::Null => "null".to_string(),
    }
}

/// Render a full argument list as `a, b, key=c`
pub fn render_arguments(args: &Args, max_len: usize) -> String {
    args.positional()
        .iter()
        .map(|v| render_argument(v, max_len))
        .chain(
            args.named_args()
                .iter()
                .map(|(k, v)| format!("{k}={}", render_argument(v, max_len))),
        )
        .collect::<Vec<_>>()
        .join(", ")
}
