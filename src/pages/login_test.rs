use super::*;

#[test]
fn validate_login_input_trims_username_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  alice  ", "secret"),
        Ok(Credentials {
            username: "alice".to_owned(),
            password: "secret".to_owned(),
        })
    );
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both username and password.")
    );
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let credentials = validate_login_input("alice", "  spaces kept  ").unwrap();
    assert_eq!(credentials.password, "  spaces kept  ");
}

#[test]
fn validate_register_input_requires_username_email_password() {
    assert_eq!(
        validate_register_input("", "a@b.com", "pw", "", "", "", false),
        Err("Username, email and password are required.")
    );
    assert_eq!(
        validate_register_input("bob", "  ", "pw", "", "", "", false),
        Err("Username, email and password are required.")
    );
    assert_eq!(
        validate_register_input("bob", "a@b.com", "", "", "", "", false),
        Err("Username, email and password are required.")
    );
}

#[test]
fn validate_register_input_trims_optional_fields() {
    let new_user =
        validate_register_input(" bob ", " bob@example.com ", "pw", " Bob ", " Ray ", " +1555 ", true)
            .unwrap();
    assert_eq!(new_user.username, "bob");
    assert_eq!(new_user.email, "bob@example.com");
    assert_eq!(new_user.first_name, "Bob");
    assert_eq!(new_user.last_name, "Ray");
    assert_eq!(new_user.phone_number, "+1555");
    assert!(new_user.is_driver);
}

#[test]
fn login_failed_message_matches_ui_copy() {
    assert_eq!(LOGIN_FAILED, "Login failed. Please check your credentials.");
}
