// Referral link validator and name normalizer tests

use referral_banner::error::BannerError;
use referral_banner::notices::NoticeQueue;
use referral_banner::settings::{MemorySettingsStore, SettingKey, SettingsStore};
use referral_banner::validator::{validate_referral_link, LinkMatch, SettingsValidator};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[case("https://brave.com/ab12XY")]
#[case("https://brave.com/ZZZZZZ")]
#[case("https://brave.com/000000")]
#[case("https://brave.com/ab12XYZ")]
#[case("Join me at https://brave.com/ab12XY today")]
#[case("  https://brave.com/ab12XY  ")]
fn test_contains_mode_accepts(#[case] value: &str) {
    assert!(validate_referral_link(value, LinkMatch::Contains).is_ok());
}

#[rstest]
#[case("https://brave.com/ab12")]
#[case("http://brave.com/ab12XY")]
#[case("https://www.brave.com/ab12XY")]
#[case("https://brave.com/ab_2XY")]
#[case("brave.com/ab12XY")]
#[case("")]
fn test_contains_mode_rejects(#[case] value: &str) {
    let result = validate_referral_link(value, LinkMatch::Contains);
    assert!(matches!(result, Err(BannerError::InvalidReferralLink)));
}

#[rstest]
#[case("https://brave.com/ab12XY", true)]
#[case("  https://brave.com/ab12XY\n", true)]
#[case("Join me at https://brave.com/ab12XY", false)]
#[case("https://brave.com/ab12XYZ", false)]
fn test_exact_mode(#[case] value: &str, #[case] accepted: bool) {
    assert_eq!(validate_referral_link(value, LinkMatch::Exact).is_ok(), accepted);
}

#[test]
fn test_accepted_link_is_sanitized() {
    let value = "<a href=\"x\">https://brave.com/ab12XY</a>";
    assert_eq!(
        validate_referral_link(value, LinkMatch::Contains).unwrap(),
        "https://brave.com/ab12XY"
    );
}

#[rstest]
#[case("<https://brave.com/zz99ZZ>")]
#[case("<script>https://brave.com/zz99ZZ</script>")]
#[case("<style>https://brave.com/zz99ZZ</style>")]
#[case("<a href=\"https://brave.com/zz99ZZ\">Try Brave</a>")]
#[case("<img src=\"https://brave.com/zz99ZZ\">")]
fn test_link_lost_in_sanitizing_is_rejected(#[case] value: &str) {
    for mode in [LinkMatch::Contains, LinkMatch::Exact] {
        let result = validate_referral_link(value, mode);
        assert!(
            matches!(result, Err(BannerError::InvalidReferralLink)),
            "{:?} accepted in {:?} mode",
            value,
            mode
        );
    }
}

#[rstest]
#[case("<b>https://brave.com/ab12XY</b>", "https://brave.com/ab12XY")]
#[case("https://brave.com/ab12XY<br/>", "https://brave.com/ab12XY")]
#[case("Try\n\thttps://brave.com/ab12XY", "Try https://brave.com/ab12XY")]
fn test_link_surviving_sanitizing_is_stored_sanitized(#[case] value: &str, #[case] expected: &str) {
    assert_eq!(
        validate_referral_link(value, LinkMatch::Contains).unwrap(),
        expected
    );
}

#[test]
fn test_invalid_link_error_message() {
    let err = validate_referral_link("nope", LinkMatch::Contains).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Referral link invalid. Please enter a valid referral link."
    );
    assert!(err.is_validation());
}

#[test]
fn test_rejection_queues_single_notice() {
    let store = MemorySettingsStore::new();
    let notices = Arc::new(NoticeQueue::new());
    let validator = SettingsValidator::new(&store, notices.clone(), "Acme");

    assert!(validator.validate_referral_link("https://brave.com/ab12").is_err());
    assert!(validator.validate_referral_link("garbage").is_err());

    assert_eq!(notices.pending("brb-invalid-ref-link"), 1);
    let taken = notices.take("brb-invalid-ref-link");
    assert_eq!(taken[0].code, "settings_updated");
}

#[test]
fn test_acceptance_queues_nothing() {
    let store = MemorySettingsStore::new();
    let notices = Arc::new(NoticeQueue::new());
    let validator = SettingsValidator::new(&store, notices.clone(), "Acme");

    assert!(validator.validate_referral_link("https://brave.com/ab12XY").is_ok());
    assert!(notices.is_empty());
}

#[rstest]
#[case("New Name", "Stored", "Acme", "New Name")]
#[case("", "Stored", "Acme", "Acme")]
#[case("", "Stored", "", "this site")]
#[case("<b>Bold</b>   Blog", "", "Acme", "Bold Blog")]
#[case("Cats < Dogs", "", "Acme", "Cats < Dogs")]
fn test_prepare_referral_name(
    #[case] submitted: &str,
    #[case] stored: &str,
    #[case] title: &str,
    #[case] expected: &str,
) {
    let store = MemorySettingsStore::new();
    if !stored.is_empty() {
        store.set(SettingKey::Name, stored).unwrap();
    }
    let validator = SettingsValidator::new(&store, Arc::new(NoticeQueue::new()), title);
    assert_eq!(validator.prepare_referral_name(submitted).unwrap(), expected);
}

#[test]
fn test_is_enabled_requires_exact_flag() {
    let store = MemorySettingsStore::new();
    let validator = SettingsValidator::new(&store, Arc::new(NoticeQueue::new()), "");
    assert!(!validator.is_enabled().unwrap());

    store.set(SettingKey::Enabled, "true").unwrap();
    assert!(!validator.is_enabled().unwrap());

    store.set(SettingKey::Enabled, "1").unwrap();
    assert!(validator.is_enabled().unwrap());
}
