//! Focus convention for numeric fields: an exact zero acts as a placeholder.

fn is_zero(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(|v| v == 0.0)
}

/// Field gains focus: a zero value is cleared so the user can type over it.
pub fn focus_in(value: &str) -> String {
    if is_zero(value) {
        String::new()
    } else {
        value.to_string()
    }
}

/// Field loses focus: an empty or zero value is reset to `"0"`.
pub fn focus_out(value: &str) -> String {
    if value.trim().is_empty() || is_zero(value) {
        "0".to_string()
    } else {
        value.to_string()
    }
}
