//! Request validation for restaurant payloads.

use crate::error::AppError;
use crate::model::{NewRestaurant, RestaurantPatch};

/// Full validation for create: every field must be acceptable.
pub fn validate_new(new: &NewRestaurant) -> Result<(), AppError> {
    validate_name(&new.name)?;
    validate_max_guest(new.max_guest)
}

/// Partial validation for update: only supplied fields are checked.
pub fn validate_patch(patch: &RestaurantPatch) -> Result<(), AppError> {
    if let Some(ref name) = patch.name {
        validate_name(name)?;
    }
    if let Some(max_guest) = patch.max_guest {
        validate_max_guest(max_guest)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_max_guest(max_guest: i32) -> Result<(), AppError> {
    if max_guest < 1 {
        return Err(AppError::Validation("maxGuest must be at least 1".into()));
    }
    Ok(())
}
