//! Form Field Checks
//!
//! Synchronous validation for the submit handlers. Failures surface through
//! the error toast only; fields are left untouched.

use thiserror::Error;

/// Minimum accepted password length for registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// A rejected form submission. The message is shown verbatim in the toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
    #[error("Please enter a workspace name")]
    MissingWorkspaceName,
    #[error("Please enter a task title")]
    MissingTaskTitle,
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long!")]
    PasswordTooShort,
}

fn require_all(fields: &[&str]) -> Result<(), ValidationError> {
    if fields.iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingRequired);
    }
    Ok(())
}

pub fn login(email: &str, password: &str) -> Result<(), ValidationError> {
    require_all(&[email, password])
}

pub fn registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    require_all(&[name, email, password, confirm])?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

pub fn workspace_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MissingWorkspaceName);
    }
    Ok(())
}

pub fn task_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::MissingTaskTitle);
    }
    Ok(())
}

pub fn profile(first_name: &str, last_name: &str) -> Result<(), ValidationError> {
    require_all(&[first_name, last_name])
}

pub fn contact(
    first_name: &str,
    last_name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<(), ValidationError> {
    require_all(&[first_name, last_name, email, subject, message])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required_field_rejected() {
        assert_eq!(login("", "secret123"), Err(ValidationError::MissingRequired));
        assert_eq!(login("a@b.com", ""), Err(ValidationError::MissingRequired));
        assert_eq!(
            contact("Ada", "Lovelace", "", "Hi", "Hello"),
            Err(ValidationError::MissingRequired)
        );
        assert_eq!(profile("", "Lovelace"), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_login_accepts_filled_fields() {
        assert_eq!(login("a@b.com", "secret123"), Ok(()));
    }

    #[test]
    fn test_registration_password_mismatch() {
        assert_eq!(
            registration("Ada", "a@b.com", "longenough", "different"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_registration_password_too_short() {
        assert_eq!(
            registration("Ada", "a@b.com", "short", "short"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_registration_valid() {
        assert_eq!(registration("Ada", "a@b.com", "longenough", "longenough"), Ok(()));
    }

    #[test]
    fn test_workspace_and_task_names() {
        assert_eq!(workspace_name(""), Err(ValidationError::MissingWorkspaceName));
        assert_eq!(workspace_name("Research"), Ok(()));
        assert_eq!(task_title(""), Err(ValidationError::MissingTaskTitle));
        assert_eq!(task_title("Ship it"), Ok(()));
    }

    #[test]
    fn test_toast_messages() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long!"
        );
        assert_eq!(
            ValidationError::MissingRequired.to_string(),
            "Please fill in all required fields"
        );
    }
}
