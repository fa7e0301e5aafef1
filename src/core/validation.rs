//! Field-level checks run before any create or update reaches the store.

use crate::core::errors::{FieldError, ValidationErrors};
use crate::core::models::user::UserDraft;

pub const NAME_MAX_LENGTH: usize = 100;
pub const PHONE_MAX_LENGTH: usize = 15;
const EMAIL_MAX_LENGTH: usize = 254;

/// Checks every field of `draft` and reports all failures together.
pub fn validate_user(draft: &UserDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    } else if draft.name.chars().count() > NAME_MAX_LENGTH {
        errors.push(FieldError::new(
            "name",
            format!("Name cannot exceed {} characters", NAME_MAX_LENGTH),
        ));
    }

    if draft.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(&draft.email) {
        errors.push(FieldError::new("email", "Email should be valid"));
    }

    if let Some(phone) = &draft.phone {
        if phone.chars().count() > PHONE_MAX_LENGTH {
            errors.push(FieldError::new(
                "phone",
                format!("Phone number cannot exceed {} characters", PHONE_MAX_LENGTH),
            ));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LENGTH {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_graphic() && !"(),:;<>[\\]\"".contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
