use crate::domain::value_objects::Email;
use crate::errors::ProfileError;

#[test]
fn test_email_happy_path() {
    let valid_emails = vec![
        "user@example.com",
        "Wisam.Gibran@example.com",
        // Contrôle par présence : la position du '.' n'est pas vérifiée
        "Peter.dorr@example",
        ".@",
    ];

    for addr in valid_emails {
        let result = Email::try_new(addr);
        assert!(result.is_ok(), "Should be valid: {}", addr);
        assert_eq!(result.unwrap().as_str(), addr);
    }
}

#[test]
fn test_email_invalid_formats() {
    let invalid_emails = vec![
        "",
        "Yosi.arnheim.com", // Pas de '@'
        "user@example",     // Pas de '.'
        "plainaddress",
    ];

    for addr in invalid_emails {
        assert_eq!(
            Email::try_new(addr),
            Err(ProfileError::InvalidEmailFormat),
            "L'adresse suivante devrait être REJETÉE : {}",
            addr
        );
    }
}

#[test]
fn test_email_keeps_case_and_whitespace() {
    let raw = "  USER@Example.COM ";
    let email = Email::try_new(raw).unwrap();
    assert_eq!(email.as_str(), raw);
    assert_eq!(String::from(email), raw);
}
