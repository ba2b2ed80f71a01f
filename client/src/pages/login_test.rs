use super::*;

#[test]
fn validate_credentials_input_accepts_both_fields() {
    assert_eq!(validate_credentials_input("admin", "1234"), Ok(()));
}

#[test]
fn validate_credentials_input_requires_username() {
    assert_eq!(validate_credentials_input("", "1234"), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_credentials_input_requires_password() {
    assert_eq!(validate_credentials_input("admin", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_credentials_input_does_not_trim() {
    // Whitespace is passed through to the credential check untouched.
    assert_eq!(validate_credentials_input(" ", " "), Ok(()));
}
