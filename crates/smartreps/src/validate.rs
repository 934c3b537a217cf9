//! Form validation for login and signup.
//!
//! Pure field checks; the forms collect the returned messages and render
//! them as an error list above the fields.

use smartreps_core::Role;

/// Email shape check: `local@domain.tld`, no whitespace, non-empty parts,
/// and a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

/// Validate the login form. Empty result means the form is acceptable.
pub fn validate_login(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.push("Invalid email format".to_string());
    }
    if password.is_empty() {
        errors.push("Password is required".to_string());
    }
    errors
}

/// Validate the signup form for `role`.
///
/// `name` doubles as the company name for company accounts; `age` is the
/// raw field text; `has_status` reports whether a current status was
/// picked (employee accounts only).
pub fn validate_signup(
    role: Role,
    name: &str,
    email: &str,
    age: &str,
    has_status: bool,
    agree_terms: bool,
) -> Vec<String> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        let message = if role == Role::Company {
            "Company name is required"
        } else {
            "Name is required"
        };
        errors.push(message.to_string());
    }

    if email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.push("Invalid email format".to_string());
    }

    if role == Role::Employee {
        let valid_age = matches!(age.trim().parse::<u32>(), Ok(a) if (18..=100).contains(&a));
        if !valid_age {
            errors.push("Valid age (18-100) is required".to_string());
        }
        if !has_status {
            errors.push("Current status is required".to_string());
        }
    }

    if !agree_terms {
        errors.push("You must agree to the terms".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@example."));
        assert!(!is_valid_email("jo hn@example.com"));
        assert!(!is_valid_email("john@exa@mple.com"));
    }

    #[test]
    fn test_login_required_fields() {
        assert_eq!(
            validate_login("", ""),
            vec!["Email is required", "Password is required"]
        );
        assert_eq!(validate_login("nope", "secret"), vec!["Invalid email format"]);
        assert!(validate_login("john@example.com", "secret").is_empty());
    }

    #[test]
    fn test_signup_employee_rules() {
        let errors = validate_signup(Role::Employee, "John", "john@example.com", "17", true, true);
        assert_eq!(errors, vec!["Valid age (18-100) is required"]);

        let errors = validate_signup(Role::Employee, "John", "john@example.com", "101", true, true);
        assert_eq!(errors, vec!["Valid age (18-100) is required"]);

        assert!(validate_signup(Role::Employee, "John", "john@example.com", "18", true, true).is_empty());
        assert!(validate_signup(Role::Employee, "John", "john@example.com", "100", true, true).is_empty());

        let errors = validate_signup(Role::Employee, "John", "john@example.com", "25", false, true);
        assert_eq!(errors, vec!["Current status is required"]);
    }

    #[test]
    fn test_signup_company_rules() {
        let errors = validate_signup(Role::Company, "", "hr@techcorp.com", "", false, true);
        assert_eq!(errors, vec!["Company name is required"]);

        assert!(validate_signup(Role::Company, "Tech Corp", "hr@techcorp.com", "", false, true).is_empty());
    }

    #[test]
    fn test_signup_terms_required_for_all_roles() {
        for role in Role::all() {
            let errors =
                validate_signup(*role, "Sarah", "sarah@expert.com", "30", true, false);
            assert!(errors.contains(&"You must agree to the terms".to_string()));
        }
    }
}
