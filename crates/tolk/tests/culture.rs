//! Tests for cultures and error handling policies.

use std::collections::BTreeSet;

use tolk::ambient::{ambient_culture_from, culture_from_posix_locale};
use tolk::{Culture, ErrorHandling, ResolvedErrorHandling};

// =========================================================================
// Culture Parsing
// =========================================================================

#[test]
fn parse_normalizes_case_and_separator() {
    let culture = Culture::parse("SV_se").unwrap();
    assert_eq!(culture.name(), "sv-SE");
    assert_eq!(culture.language(), "sv");
    assert_eq!(culture, Culture::parse("sv-SE").unwrap());
}

#[test]
fn invariant_aliases_parse_to_invariant() {
    for tag in ["", "und", "iv", "Invariant", "  "] {
        let culture = Culture::parse(tag).unwrap();
        assert!(culture.is_invariant(), "{tag:?}");
        assert_eq!(culture, Culture::invariant());
    }
}

#[test]
fn invariant_has_empty_name_and_readable_display() {
    let invariant = Culture::invariant();
    assert_eq!(invariant.name(), "");
    assert_eq!(invariant.to_string(), "invariant");
}

#[test]
fn invalid_tag_is_rejected() {
    let err = Culture::parse("not a culture").unwrap_err();
    assert_eq!(err.tag, "not a culture");
    assert!(err.to_string().contains("not a culture"));
}

#[test]
fn from_str_and_try_from_agree() {
    let parsed: Culture = "en-GB".parse().unwrap();
    let converted = Culture::try_from("en-GB").unwrap();
    assert_eq!(parsed, converted);
    assert_eq!(String::from(parsed), "en-GB");
}

// =========================================================================
// Comparison
// =========================================================================

#[test]
fn same_language_compares_primary_subtag() {
    let en_us = Culture::parse("en-US").unwrap();
    let en_gb = Culture::parse("en-GB").unwrap();
    let sv = Culture::parse("sv").unwrap();

    assert!(en_us.same_language(&en_gb));
    assert!(!en_us.same_language(&sv));
    assert!(!Culture::invariant().same_language(&Culture::invariant()));
}

#[test]
fn cultures_order_by_name() {
    let cultures: BTreeSet<Culture> = ["sv", "en-US", "de", "en"]
        .into_iter()
        .map(|tag| Culture::parse(tag).unwrap())
        .chain([Culture::invariant()])
        .collect();

    let names: Vec<&str> = cultures.iter().map(Culture::name).collect();
    assert_eq!(names, vec!["", "de", "en", "en-US", "sv"]);
}

// =========================================================================
// Ambient Culture
// =========================================================================

#[test]
fn posix_locale_strips_encoding_and_modifier() {
    let culture = culture_from_posix_locale("sv_SE.UTF-8@euro").unwrap();
    assert_eq!(culture.name(), "sv-SE");
}

#[test]
fn posix_c_locale_is_not_a_culture() {
    assert_eq!(culture_from_posix_locale("C"), None);
    assert_eq!(culture_from_posix_locale("POSIX"), None);
    assert_eq!(culture_from_posix_locale("C.UTF-8"), None);
    assert_eq!(culture_from_posix_locale(""), None);
}

#[test]
fn ambient_culture_prefers_lc_all() {
    let culture = ambient_culture_from(|name| match name {
        "LC_ALL" => Some("de_DE.UTF-8".to_string()),
        "LANG" => Some("en_US.UTF-8".to_string()),
        _ => None,
    });
    assert_eq!(culture, Some(Culture::parse("de-DE").unwrap()));
}

#[test]
fn ambient_culture_skips_unusable_values() {
    let culture = ambient_culture_from(|name| match name {
        "LC_ALL" => Some(String::new()),
        "LC_MESSAGES" => Some("C".to_string()),
        "LANG" => Some("nb_NO.UTF-8".to_string()),
        _ => None,
    });
    assert_eq!(culture, Some(Culture::parse("nb-NO").unwrap()));
}

// =========================================================================
// Error Handling
// =========================================================================

#[test]
fn explicit_policies_resolve_to_themselves() {
    for default in ErrorHandling::ALL {
        assert_eq!(
            ErrorHandling::Throw.resolve(default),
            ResolvedErrorHandling::Throw
        );
        assert_eq!(
            ErrorHandling::ReturnErrorInfo.resolve(default),
            ResolvedErrorHandling::ReturnErrorInfo
        );
        assert_eq!(
            ErrorHandling::ReturnErrorInfoPreserveNeutral.resolve(default),
            ResolvedErrorHandling::ReturnErrorInfoPreserveNeutral
        );
    }
}

#[test]
fn default_policy_takes_process_default() {
    assert_eq!(
        ErrorHandling::Default.resolve(ErrorHandling::ReturnErrorInfoPreserveNeutral),
        ResolvedErrorHandling::ReturnErrorInfoPreserveNeutral
    );
    assert_eq!(
        ErrorHandling::Default.resolve(ErrorHandling::Throw),
        ResolvedErrorHandling::Throw
    );
}

#[test]
fn default_over_default_is_throw() {
    assert_eq!(
        ErrorHandling::Default.resolve(ErrorHandling::Default),
        ResolvedErrorHandling::Throw
    );
}

#[test]
fn error_handling_parses_kebab_and_snake_case() {
    assert_eq!(
        "return-error-info".parse::<ErrorHandling>().unwrap(),
        ErrorHandling::ReturnErrorInfo
    );
    assert_eq!(
        "return_error_info_preserve_neutral".parse::<ErrorHandling>().unwrap(),
        ErrorHandling::ReturnErrorInfoPreserveNeutral
    );
    assert_eq!("THROW".parse::<ErrorHandling>().unwrap(), ErrorHandling::Throw);
    assert!("explode".parse::<ErrorHandling>().is_err());
}

#[test]
fn error_handling_parses_pascal_case() {
    assert_eq!(
        "ReturnErrorInfo".parse::<ErrorHandling>().unwrap(),
        ErrorHandling::ReturnErrorInfo
    );
    assert_eq!(
        "ReturnErrorInfoPreserveNeutral".parse::<ErrorHandling>().unwrap(),
        ErrorHandling::ReturnErrorInfoPreserveNeutral
    );
    assert_eq!("Throw".parse::<ErrorHandling>().unwrap(), ErrorHandling::Throw);
    assert_eq!("Default".parse::<ErrorHandling>().unwrap(), ErrorHandling::Default);
    assert!("ReturnErrorInformation".parse::<ErrorHandling>().is_err());
}

#[test]
fn error_handling_display_round_trips() {
    for error_handling in ErrorHandling::ALL {
        let shown = error_handling.to_string();
        assert_eq!(shown.parse::<ErrorHandling>().unwrap(), error_handling);
    }
}
