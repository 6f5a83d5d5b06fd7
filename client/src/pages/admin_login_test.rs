use super::*;

#[test]
fn valid_credentials_pass() {
    assert!(validate_login_input("admin@henartdesign.com", "password123").is_empty());
    assert!(validate_login_input("  a.b+c@sub.example.co  ", "secret").is_empty());
}

#[test]
fn missing_fields_are_required() {
    let errors = validate_login_input("", "");
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["admin", "admin@", "@henart.com", "admin@henart", "admin@henart.c", "ad min@henart.com", "a@b.c0m"] {
        assert_eq!(validate_login_input(email, "password123").email, Some("Invalid email address"), "{email}");
    }
}

#[test]
fn short_password_is_rejected_at_five_and_accepted_at_six() {
    assert_eq!(
        validate_login_input("admin@henart.com", "12345").password,
        Some("Password must be at least 6 characters")
    );
    assert_eq!(validate_login_input("admin@henart.com", "123456").password, None);
}
