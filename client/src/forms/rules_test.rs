use super::*;

const POLICY: PasswordPolicy = PasswordPolicy { min: 8, max: 15 };

// =============================================================
// email
// =============================================================

#[test]
fn accepts_common_addresses() {
    for value in ["a@b.com", "john@x.com", "first.last+tag@mail.example.org", "USER_1@Domain.IO"] {
        assert!(is_email(value), "expected {value:?} to be an email");
    }
}

#[test]
fn rejects_addresses_without_user_domain_tld_shape() {
    for value in [
        "",
        "plain",
        "@b.com",
        "a@",
        "a@b",
        "a@b.c",
        "a@@b.com",
        "a b@c.com",
        "a@-b.com",
        "a.@b.com",
        ".a@b.com",
        "a..b@c.com",
        "a@b..com",
        "a@b.com ",
        "a@b.\u{212A}\u{212A}",
        "a@b.\u{017F}\u{017F}",
    ] {
        assert_eq!(
            check_email(value),
            Err(FieldError::InvalidFormat { what: "email address" }),
            "expected {value:?} to be rejected"
        );
    }
}

// =============================================================
// composition
// =============================================================

#[test]
fn composition_requires_upper_digit_and_special() {
    assert!(has_strong_composition("Abcdef1!"));
    assert!(has_strong_composition("Abcdef1_"));
    assert!(!has_strong_composition("abcdef1!"));
    assert!(!has_strong_composition("Abcdefg!"));
    assert!(!has_strong_composition("Abcdefg1"));
}

#[test]
fn composition_counts_non_ascii_as_special() {
    assert!(has_strong_composition("Abcdef1é"));
}

// =============================================================
// password policy
// =============================================================

#[test]
fn password_length_is_checked_before_composition() {
    assert_eq!(POLICY.check("abc"), Err(FieldError::TooShort { label: "Password", min: 8 }));
    assert_eq!(
        POLICY.check("abcdefghijklmnop"),
        Err(FieldError::TooLong { label: "Password", max: 15 })
    );
}

#[test]
fn password_bounds_are_inclusive() {
    assert_eq!(POLICY.check("Abcdef1!"), Ok(()));
    assert_eq!(POLICY.check("Abcdefghijk123!"), Ok(()));
}

#[test]
fn password_length_counts_utf16_units() {
    // Each emoji is two UTF-16 units.
    assert_eq!(utf16_len("Ab1!😀😀"), 8);
    assert_eq!(POLICY.check("Ab1!😀😀"), Ok(()));
    assert_eq!(POLICY.check("Ab1!😀"), Err(FieldError::TooShort { label: "Password", min: 8 }));
    assert_eq!(
        POLICY.check("Ab1!😀😀😀😀😀😀"),
        Err(FieldError::TooLong { label: "Password", max: 15 })
    );
}

#[test]
fn bmp_characters_count_once() {
    assert_eq!(POLICY.check("Ab1!ééé"), Err(FieldError::TooShort { label: "Password", min: 8 }));
    assert_eq!(POLICY.check("Ab1!éééé"), Ok(()));
}

// =============================================================
// name + terms
// =============================================================

#[test]
fn name_accepts_allowed_alphabet() {
    assert_eq!(check_name("John Doe"), Ok(()));
    assert_eq!(check_name("j.doe_99-x"), Ok(()));
}

#[test]
fn name_rejects_bad_length_or_characters() {
    let invalid = Err(FieldError::InvalidFormat { what: "name" });
    assert_eq!(check_name("ab"), invalid);
    assert_eq!(check_name(&"a".repeat(31)), invalid);
    assert_eq!(check_name("John@Doe"), invalid);
    assert_eq!(check_name("Zoë"), invalid);
}

#[test]
fn terms_must_be_accepted() {
    assert_eq!(check_terms(true), Ok(()));
    assert_eq!(check_terms(false), Err(FieldError::TermsNotAccepted));
}
