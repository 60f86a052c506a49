// Save and render pipeline tests against the in-memory store

use referral_banner::admin::PublicAssetContext;
use referral_banner::config::Config;
use referral_banner::notices::NoticeQueue;
use referral_banner::pipeline::{FormSubmission, RenderPipeline, SavePipeline};
use referral_banner::settings::{MemorySettingsStore, SettingKey, SettingsStore};
use std::sync::Arc;

fn setup() -> (Arc<MemorySettingsStore>, Arc<NoticeQueue>) {
    (Arc::new(MemorySettingsStore::new()), Arc::new(NoticeQueue::new()))
}

#[test]
fn test_valid_submission_is_stored() {
    let (store, notices) = setup();
    let pipeline = SavePipeline::new(store.clone(), notices.clone(), "Acme");

    let report = pipeline
        .save(&FormSubmission::full_form([
            ("referral_enabled", "1"),
            ("referral_style", "red"),
            ("referral_position", "top"),
            ("referral_link", "https://brave.com/ab12XY"),
            ("referral_name", "Bob's Blog"),
        ]))
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(report.saved.len(), 5);
    assert_eq!(store.get_or_empty(SettingKey::Link).unwrap(), "https://brave.com/ab12XY");
    assert_eq!(store.get_or_empty(SettingKey::Name).unwrap(), "Bob's Blog");
    assert!(notices.is_empty());
}

#[test]
fn test_rejected_link_keeps_prior_value_and_other_fields_save() {
    let (store, notices) = setup();
    store.set(SettingKey::Link, "https://brave.com/ab12XY").unwrap();
    let pipeline = SavePipeline::new(store.clone(), notices.clone(), "Acme");

    let report = pipeline
        .save(&FormSubmission::partial([
            ("referral_link", "https://brave.com/ab12"),
            ("referral_style", "gray"),
        ]))
        .unwrap();

    assert_eq!(report.rejected, vec![SettingKey::Link]);
    assert_eq!(report.saved, vec![SettingKey::Style]);
    assert_eq!(store.get_or_empty(SettingKey::Link).unwrap(), "https://brave.com/ab12XY");
    assert_eq!(store.get_or_empty(SettingKey::Style).unwrap(), "gray");
    assert_eq!(notices.pending("brb-invalid-ref-link"), 1);
}

#[test]
fn test_full_form_without_checkbox_disables_banner() {
    let (store, notices) = setup();
    store.set(SettingKey::Enabled, "1").unwrap();
    let pipeline = SavePipeline::new(store.clone(), notices, "Acme");

    pipeline
        .save(&FormSubmission::full_form([(
            "referral_link",
            "https://brave.com/ab12XY",
        )]))
        .unwrap();

    assert_eq!(store.get_or_empty(SettingKey::Enabled).unwrap(), "");
}

#[test]
fn test_empty_name_submission_uses_site_title() {
    let (store, notices) = setup();
    store.set(SettingKey::Name, "Old Name").unwrap();
    let pipeline = SavePipeline::new(store.clone(), notices, "Acme");

    pipeline
        .save(&FormSubmission::partial([("referral_name", "")]))
        .unwrap();

    assert_eq!(store.get_or_empty(SettingKey::Name).unwrap(), "Acme");
}

#[test]
fn test_unknown_fields_are_reported_not_stored() {
    let (store, notices) = setup();
    let pipeline = SavePipeline::new(store.clone(), notices, "Acme");

    let report = pipeline
        .save(&FormSubmission::partial([("option_page", "brb-settings-group")]))
        .unwrap();

    assert_eq!(report.ignored, vec!["option_page".to_string()]);
    assert!(store.is_empty());
}

#[test]
fn test_anchored_policy_rejects_embedded_link() {
    let (store, notices) = setup();
    let mut config = Config::in_memory("Acme");
    config.link_policy.anchored = true;
    let pipeline = SavePipeline::from_config(store.clone(), notices.clone(), &config);

    let report = pipeline
        .save(&FormSubmission::partial([(
            "referral_link",
            "Join me at https://brave.com/ab12XY",
        )]))
        .unwrap();

    assert_eq!(report.rejected, vec![SettingKey::Link]);
    assert_eq!(store.get_or_empty(SettingKey::Link).unwrap(), "");
}

#[test]
fn test_render_public_suppressed_until_enabled_with_link() {
    let (store, notices) = setup();
    let render = RenderPipeline::new(store.clone(), notices, "Acme");
    assert!(render.render_public().unwrap().is_none());
    assert!(render
        .public_assets(PublicAssetContext::default())
        .unwrap()
        .is_empty());

    store.set(SettingKey::Enabled, "1").unwrap();
    assert!(render.render_public().unwrap().is_none());

    store.set(SettingKey::Link, "https://brave.com/ab12XY").unwrap();
    let html = render.render_public().unwrap().unwrap();
    assert!(html.contains("brb-bottom"));
    assert!(html.contains(">Acme</span>"));
    assert_eq!(
        render
            .public_assets(PublicAssetContext::default())
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn test_render_admin_hides_configuration_rows_when_disabled() {
    let (store, notices) = setup();
    let render = RenderPipeline::new(store, notices, "Acme");
    let html = render.render_admin().unwrap();

    assert!(html.contains("row-hidden"));
    assert!(html.contains("preview-hidden"));
    assert!(html.contains("Banner Preview:"));
    assert!(!html.contains("brb-bottom"));
}

#[test]
fn test_render_escapes_stored_name() {
    let (store, notices) = setup();
    store.set(SettingKey::Enabled, "1").unwrap();
    store.set(SettingKey::Link, "https://brave.com/ab12XY").unwrap();
    store.set(SettingKey::Name, "<script>x</script>").unwrap();
    let render = RenderPipeline::new(store, notices, "Acme");

    let html = render.render_public().unwrap().unwrap();
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_link_stripped_by_sanitizing_keeps_prior_link() {
    let (store, notices) = setup();
    store.set(SettingKey::Enabled, "1").unwrap();
    store.set(SettingKey::Link, "https://brave.com/ab12XY").unwrap();
    let pipeline = SavePipeline::new(store.clone(), notices.clone(), "Acme");

    for value in [
        "<https://brave.com/zz99ZZ>",
        "<script>https://brave.com/zz99ZZ</script>",
    ] {
        let report = pipeline
            .save(&FormSubmission::partial([("referral_link", value)]))
            .unwrap();
        assert_eq!(report.rejected, vec![SettingKey::Link], "value: {:?}", value);
        assert!(report.saved.is_empty());
        assert_eq!(
            store.get_or_empty(SettingKey::Link).unwrap(),
            "https://brave.com/ab12XY"
        );
    }

    assert_eq!(notices.pending("brb-invalid-ref-link"), 1);
    let render = RenderPipeline::new(store, notices, "Acme");
    assert!(render.render_public().unwrap().is_some());
}

#[test]
fn test_link_wrapped_in_markup_is_stored_without_it() {
    let (store, notices) = setup();
    let pipeline = SavePipeline::new(store.clone(), notices.clone(), "Acme");

    let report = pipeline
        .save(&FormSubmission::partial([(
            "referral_link",
            "<b>https://brave.com/ab12XY</b>",
        )]))
        .unwrap();

    assert_eq!(report.saved, vec![SettingKey::Link]);
    assert_eq!(
        store.get_or_empty(SettingKey::Link).unwrap(),
        "https://brave.com/ab12XY"
    );
    assert!(notices.is_empty());
}

#[test]
fn test_name_with_lone_less_than_is_escaped_once() {
    let (store, notices) = setup();
    store.set(SettingKey::Enabled, "1").unwrap();
    store.set(SettingKey::Link, "https://brave.com/ab12XY").unwrap();
    SavePipeline::new(store.clone(), notices.clone(), "Acme")
        .save(&FormSubmission::partial([("referral_name", "Cats < Dogs")]))
        .unwrap();
    assert_eq!(store.get_or_empty(SettingKey::Name).unwrap(), "Cats < Dogs");

    let render = RenderPipeline::new(store, notices, "Acme");
    let public = render.render_public().unwrap().unwrap();
    assert!(public.contains(r#"<span class="brb-referral-name">Cats &lt; Dogs</span>"#));

    let admin = render.render_admin().unwrap();
    assert!(admin.contains(r#"value="Cats &lt; Dogs""#));
    assert!(!admin.contains("&amp;lt;"));
}
