//! Argument coercion for host calls.

use serde_json::Value;

/// The `index`th argument as a string, coerced the way a script engine
/// converts values to strings: missing and `null` become `""`.
pub fn string_arg(args: &[Value], index: usize) -> String {
    match args.get(index) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}
