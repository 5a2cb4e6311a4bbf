//! Field validation for student records.
//!
//! Each field is checked on its own: first for presence, then for its
//! format. Every failing field is reported, not just the first one.
//!
//! | Field | Rule |
//! |-------|------|
//! | name | ASCII letters and whitespace |
//! | studentId | ASCII digits |
//! | email | `local@domain.tld`, no whitespace |
//! | contact | ASCII digits, at least [`MIN_CONTACT_DIGITS`] long |
//!
//! Values are trimmed before checking, and the trimmed values are what end
//! up in the returned [`Student`].

use crate::error::FieldErrors;
use crate::model::{Field, Student, StudentForm};

pub const MIN_CONTACT_DIGITS: usize = 10;

/// Validates a submitted form.
///
/// # Examples
/// ```
/// use roster::model::StudentForm;
/// use roster::validation::validate;
///
/// assert!(validate(&StudentForm::new("John", "123", "a@b.co", "1234567890")).is_ok());
///
/// let errors = validate(&StudentForm::new("J0hn!", "12a", "bad", "123")).unwrap_err();
/// assert_eq!(errors.len(), 4);
/// ```
pub fn validate(form: &StudentForm) -> Result<Student, FieldErrors> {
    let mut errors = FieldErrors::new();

    for field in Field::ALL {
        if let Err(message) = check_field(field, form.value(field).trim()) {
            errors.insert(field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Student {
        name: form.name.trim().to_string(),
        student_id: form.student_id.trim().to_string(),
        email: form.email.trim().to_string(),
        contact: form.contact.trim().to_string(),
    })
}

/// Checks a single, already trimmed value.
pub fn check_field(field: Field, value: &str) -> Result<(), &'static str> {
    match field {
        Field::Name => {
            if value.is_empty() {
                Err("Name is required")
            } else if !is_letters_and_spaces(value) {
                Err("Name must contain only letters and spaces")
            } else {
                Ok(())
            }
        }
        Field::StudentId => {
            if value.is_empty() {
                Err("Student ID is required")
            } else if !is_digits(value) {
                Err("Student ID must be numeric")
            } else {
                Ok(())
            }
        }
        Field::Email => {
            if value.is_empty() {
                Err("Email is required")
            } else if !is_valid_email(value) {
                Err("Enter a valid email")
            } else {
                Ok(())
            }
        }
        Field::Contact => {
            if value.is_empty() {
                Err("Contact number is required")
            } else if !is_digits(value) {
                Err("Contact must be numeric")
            } else if value.len() < MIN_CONTACT_DIGITS {
                Err("Contact must be at least 10 digits")
            } else {
                Ok(())
            }
        }
    }
}

fn is_letters_and_spaces(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// One `@`, non-empty local part, and a domain containing a dot with text on
/// both sides. Whitespace is not allowed anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx < domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, id: &str, email: &str, contact: &str) -> StudentForm {
        StudentForm::new(name, id, email, contact)
    }

    #[test]
    fn accepts_minimal_valid_input() {
        let student = validate(&form("John", "123", "a@b.co", "1234567890")).unwrap();
        assert_eq!(student.name, "John");
        assert_eq!(student.student_id, "123");
    }

    #[test]
    fn reports_all_four_format_errors_together() {
        let errors = validate(&form("J0hn!", "12a", "bad", "123")).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must contain only letters and spaces")
        );
        assert_eq!(errors.get(Field::StudentId), Some("Student ID must be numeric"));
        assert_eq!(errors.get(Field::Email), Some("Enter a valid email"));
        assert_eq!(
            errors.get(Field::Contact),
            Some("Contact must be at least 10 digits")
        );
    }

    #[test]
    fn contact_with_letters_is_not_numeric() {
        let errors = validate(&form("Ann", "1", "a@b.co", "12a4567890")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Contact), Some("Contact must be numeric"));
    }

    #[test]
    fn required_message_takes_precedence() {
        let errors = validate(&form("", "  ", "", "\t")).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::StudentId), Some("Student ID is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Contact), Some("Contact number is required"));
    }

    #[test]
    fn short_contact_is_rejected_after_numeric_check() {
        let errors = validate(&form("Ann", "1", "a@b.co", "123456789")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Contact),
            Some("Contact must be at least 10 digits")
        );
    }

    #[test]
    fn trims_values_before_storing() {
        let student = validate(&form("  Mary Jane ", " 7 ", " m@j.io ", " 0123456789 ")).unwrap();
        assert_eq!(student.name, "Mary Jane");
        assert_eq!(student.student_id, "7");
        assert_eq!(student.email, "m@j.io");
        assert_eq!(student.contact, "0123456789");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(is_valid_email("a@b.c."));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn non_ascii_digits_are_not_numeric() {
        assert!(!is_digits("١٢٣"));
        assert!(is_digits("0042"));
    }
}
