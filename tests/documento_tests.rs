//! Integration tests for the CPF and CNPJ validators: known public test
//! vectors, masking scenarios, and the format truth tables.

use cadastro::{cnpj, cpf};

// --- Known vectors ---

#[test]
fn known_valid_cpfs() {
    for doc in ["529.982.247-25", "52998224725", "111.444.777-35"] {
        assert!(cpf::validate(doc), "{doc} must validate");
    }
}

#[test]
fn known_valid_cnpjs() {
    for doc in [
        "11.222.333/0001-81",
        "11222333000181",
        "00.000.000/0001-91",
    ] {
        assert!(cnpj::validate(doc), "{doc} must validate");
    }
}

#[test]
fn cpf_mask_unmask_roundtrip_preserves_validity() {
    let masked = cpf::mask("52998224725").unwrap();
    assert_eq!(masked, "529.982.247-25");
    assert!(cpf::validate(&cpf::unmask(&masked)));
}

#[test]
fn cnpj_mask_unmask_roundtrip_preserves_validity() {
    let masked = cnpj::mask("11222333000181").unwrap();
    assert_eq!(masked, "11.222.333/0001-81");
    assert!(cnpj::validate(&cnpj::unmask(&masked)));
}

#[test]
fn cnpj_every_last_digit_mutation_fails() {
    for d in b'0'..=b'9' {
        if d == b'1' {
            continue;
        }
        let mutated = format!("11.222.333/0001-8{}", char::from(d));
        assert!(!cnpj::validate(&mutated), "{mutated} must be invalid");
    }
}

// --- Length handling ---

#[test]
fn wrong_length_fails_validate_and_mask() {
    for input in ["", "1", "12345", "123456789012345", "529.982.247-2"] {
        assert!(!cpf::validate(input));
        assert!(!cnpj::validate(input));
        assert!(cpf::mask(input).is_err());
        assert!(cnpj::mask(input).is_err());
    }
}

#[test]
fn mask_error_reports_both_counts() {
    let err = cpf::mask("1234").unwrap_err();
    assert_eq!((err.expected, err.found), (11, 4));

    let err = cnpj::mask("1234").unwrap_err();
    assert_eq!((err.expected, err.found), (14, 4));
}

#[test]
fn repeated_digits_in_masked_form_rejected() {
    assert!(!cpf::validate("111.111.111-11"));
    assert!(!cnpj::validate("11.111.111/1111-11"));
}

// --- Format truth tables ---

#[test]
fn cpf_format_truth_table() {
    assert!(cpf::is_valid_format("123.456.789-00"));
    assert!(cpf::is_valid_format("12345678900"));
    assert!(cpf::is_valid_format("123.456"));
    assert!(!cpf::is_valid_format("abc"));
}

#[test]
fn cnpj_format_truth_table() {
    assert!(cnpj::is_valid_format("11.222.333/0001-81"));
    assert!(cnpj::is_valid_format("11222333000181"));
    assert!(cnpj::is_valid_format("11.222"));
    assert!(!cnpj::is_valid_format("abc"));
}

#[test]
fn format_check_ignores_check_digits() {
    // Shape only: the checksum is wrong but the format is fine.
    assert!(cpf::is_valid_format("529.982.247-99"));
    assert!(!cpf::validate("529.982.247-99"));
}

// --- Generation ---

#[test]
fn generated_documents_survive_the_full_cycle() {
    for _ in 0..20 {
        let doc = cpf::generate();
        let masked = cpf::mask(&doc).unwrap();
        assert!(cpf::is_valid_format(&masked));
        assert!(cpf::validate(&masked));
        assert_eq!(cpf::unmask(&masked), doc);

        let doc = cnpj::generate();
        let masked = cnpj::mask(&doc).unwrap();
        assert!(cnpj::is_valid_format(&masked));
        assert!(cnpj::validate(&masked));
        assert_eq!(cnpj::unmask(&masked), doc);
    }
}
