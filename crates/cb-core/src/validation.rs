use crate::{CoreError, Result as CoreErrorResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_NAME_LENGTH: usize = 255;
pub const MIN_PER_PAGE: u32 = 1;
pub const MAX_PER_PAGE: u32 = 100;
pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 2.0;

#[track_caller]
pub(crate) fn require_name(field: &'static str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "cannot be empty"));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::validation(
            field,
            format!("exceeds {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[track_caller]
pub(crate) fn require_password(field: &'static str, value: &str) -> CoreErrorResult<()> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            field,
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[track_caller]
pub(crate) fn require_temperature(value: f64) -> CoreErrorResult<()> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
        return Err(CoreError::validation(
            "temperature",
            format!("must be {MIN_TEMPERATURE}-{MAX_TEMPERATURE}, got {value}"),
        ));
    }
    Ok(())
}

#[track_caller]
pub(crate) fn require_positive_tokens(value: u32) -> CoreErrorResult<()> {
    if value == 0 {
        return Err(CoreError::validation("max_tokens", "must be greater than 0"));
    }
    Ok(())
}
