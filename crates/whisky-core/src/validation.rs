//! Local form checks that run before anything is sent.

pub const MIN_PASSWORD_LEN: usize = 8;

/// Registration checks; returns the message to show inline
pub fn validate_registration(password: &str, confirm_password: &str) -> Result<(), String> {
    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {} characters", MIN_PASSWORD_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_reported_first() {
        assert_eq!(
            validate_registration("short", "other"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_length() {
        assert_eq!(
            validate_registration("1234567", "1234567"),
            Err("Password must be at least 8 characters".to_string())
        );
        assert_eq!(validate_registration("12345678", "12345678"), Ok(()));
    }
}
