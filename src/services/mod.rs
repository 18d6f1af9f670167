//! Store-backed operations. Each mutation holds the write lock of the
//! entity it changes for its whole read-check-write sequence.

pub mod calendar;
pub mod collaborations;
pub mod creators;
pub mod inquiries;
pub mod tasks;

use crate::error::{AppError, AppResult};

fn require_text(value: &str, what: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{what} must not be empty")));
    }
    Ok(())
}

fn require_non_negative(amount: Option<i64>, what: &str) -> AppResult<()> {
    match amount {
        Some(value) if value < 0 => Err(AppError::Validation(format!(
            "{what} must not be negative"
        ))),
        _ => Ok(()),
    }
}

/// Loose shape check: something before and after an `@`, and a dot in the
/// domain part.
fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_plausible_email("pr@brand.co.kr"));
        assert!(!is_plausible_email("brand.co.kr"));
        assert!(!is_plausible_email("@brand.com"));
        assert!(!is_plausible_email("pr@localhost"));
        assert!(!is_plausible_email("pr@brand.com."));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(require_non_negative(Some(-1), "budget").is_err());
        assert!(require_non_negative(Some(0), "budget").is_ok());
        assert!(require_non_negative(None, "budget").is_ok());
    }
}
