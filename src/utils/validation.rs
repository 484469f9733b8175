use crate::utils::error::{InventoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(InventoryError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(InventoryError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

/// Parses a cost or quantity typed by the user. Surrounding whitespace is ignored.
pub fn parse_whole_number(field_name: &str, raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|e| {
        InventoryError::invalid_input(
            field_name,
            raw,
            format!("must be a whole number ({})", e),
        )
    })
}

/// Parses a signed amount; sign checks are left to the operation consuming it.
pub fn parse_amount(field_name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        InventoryError::invalid_input(field_name, raw, "must be a whole number")
    })
}

/// Text fields are written unquoted, so separators would corrupt the file.
pub fn validate_text_field(field_name: &str, value: &str) -> Result<()> {
    if value.contains(',') {
        return Err(InventoryError::invalid_input(
            field_name,
            value,
            "must not contain commas",
        ));
    }
    if value.contains('\n') || value.contains('\r') {
        return Err(InventoryError::invalid_input(
            field_name,
            value,
            "must not contain line breaks",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::invalid_input(
            field_name,
            value,
            "cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("cost", " 42 ").unwrap(), 42);
        assert!(parse_whole_number("cost", "abc").is_err());
        assert!(parse_whole_number("cost", "-1").is_err());
        assert!(parse_whole_number("cost", "4.5").is_err());
    }

    #[test]
    fn test_parse_amount_keeps_sign() {
        assert_eq!(parse_amount("quantity", "-3").unwrap(), -3);
        assert!(parse_amount("quantity", "three").is_err());
    }

    #[test]
    fn test_validate_text_field() {
        assert!(validate_text_field("product", "Air Max 90").is_ok());
        assert!(validate_text_field("product", "Air, Max").is_err());
        assert!(validate_text_field("country", "South\nAfrica").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("inventory.path", "inventory.txt").is_ok());
        assert!(validate_path("inventory.path", "  ").is_err());
        assert!(validate_path("inventory.path", "bad\0path").is_err());
    }
}
