//! Setting value validation.

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SERVER_PORT" => {
            let v: u32 = value.parse().map_err(|_| "must be an integer")?;
            if !(1..=65535).contains(&v) {
                return Err("must be between 1 and 65535".into());
            }
        }
        "HOST" => {
            if value.chars().any(char::is_whitespace) {
                return Err("must not contain whitespace".into());
            }
        }
        "STATIC_DIR" | "TEMPLATE_PATH" => {
            if value.contains('\0') {
                return Err("must not contain NUL bytes".into());
            }
        }
        _ => {}
    }
    Ok(())
}
