// Notices carried between separate requests through the sidecar file

use referral_banner::config::{StoreBackend, StoreConfig};
use referral_banner::notices::{load_notice_file, save_notice_file};
use referral_banner::pipeline::{FormSubmission, RenderPipeline, SavePipeline};
use referral_banner::settings::{notice_path, open_store};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_rejection_notice_survives_to_next_admin_render() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        backend: StoreBackend::File,
        path: dir.path().join("settings.json"),
    };
    let sidecar = notice_path(&config).unwrap();

    // Save request
    {
        let store = open_store(&config);
        let notices = Arc::new(load_notice_file(&sidecar).unwrap());
        let save = SavePipeline::new(store, notices.clone(), "Acme");
        save.save(&FormSubmission::partial([("referral_link", "not a link")]))
            .unwrap();
        save_notice_file(&sidecar, &notices).unwrap();
    }
    assert!(sidecar.exists());

    // Admin render request
    {
        let store = open_store(&config);
        let notices = Arc::new(load_notice_file(&sidecar).unwrap());
        let render = RenderPipeline::new(store, notices.clone(), "Acme");
        let html = render.render_admin().unwrap();
        assert!(html.contains("notice-error"));
        save_notice_file(&sidecar, &notices).unwrap();
    }
    assert!(!sidecar.exists());

    // Following render shows nothing
    let store = open_store(&config);
    let notices = Arc::new(load_notice_file(&sidecar).unwrap());
    let html = RenderPipeline::new(store, notices, "Acme")
        .render_admin()
        .unwrap();
    assert!(!html.contains("notice-error"));
}

/// Store whose writes always fail
struct ReadOnlyStore;

impl referral_banner::settings::SettingsStore for ReadOnlyStore {
    fn get(
        &self,
        _key: referral_banner::settings::SettingKey,
    ) -> Result<Option<String>, referral_banner::error::BannerError> {
        Ok(None)
    }

    fn set(
        &self,
        _key: referral_banner::settings::SettingKey,
        _value: &str,
    ) -> Result<(), referral_banner::error::BannerError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

#[test]
fn test_notice_queued_before_store_failure_is_persisted() {
    let dir = TempDir::new().unwrap();
    let sidecar = dir.path().join("settings.json.notices");
    let notices = Arc::new(load_notice_file(&sidecar).unwrap());

    // Link is rejected first, then the style write fails
    let save = SavePipeline::new(Arc::new(ReadOnlyStore), notices.clone(), "Acme");
    let result = save.save(&FormSubmission::partial([
        ("referral_link", "not a link"),
        ("referral_style", "red"),
    ]));
    assert!(result.is_err());
    assert!(!result.unwrap_err().is_validation());

    save_notice_file(&sidecar, &notices).unwrap();
    let next = load_notice_file(&sidecar).unwrap();
    assert_eq!(next.pending("brb-invalid-ref-link"), 1);
}
