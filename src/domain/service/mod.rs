//! Domain services encapsulating the business rules atop the repositories.
//!
//! Services own the transactional boundary: every mutating operation runs
//! inside one transaction so partial entity/association updates cannot be
//! observed.

mod cities;
mod directors;
mod hotels;
mod rooms;

pub use cities::CitiesService;
pub use directors::DirectorsService;
pub use hotels::HotelsService;
pub use rooms::RoomsService;

use crate::domain::error::DomainError;

/// Maximum accepted length for entity names.
const MAX_NAME_LEN: usize = 255;

/// Structural check applied to incoming names before any persistence attempt.
pub(crate) fn validate_name(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    if value.len() > MAX_NAME_LEN {
        return Err(DomainError::validation(
            field,
            format!("must not exceed {MAX_NAME_LEN} bytes"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let err = validate_name("name", "   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "name", .. }));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let err = validate_name("name", &"x".repeat(300)).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn regular_name_passes() {
        assert!(validate_name("name", "У Саши").is_ok());
    }
}
