use super::*;

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "password123"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("john@example.com", ""), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_login_input_passes_values_through_untrimmed() {
    let (email, password) = validate_login_input(" john@example.com", "password123 ").unwrap();
    assert_eq!(email, " john@example.com");
    assert_eq!(password, "password123 ");
}

#[test]
fn untrimmed_email_does_not_match_directory() {
    let (email, password) = validate_login_input(" john@example.com", "password123").unwrap();
    assert!(crate::data::directory::lookup(&email, &password).is_none());
}
