// Pipeline module - explicit composition of the save and render flows
//
// Save:   submission -> validator -> settings store (rejected writes dropped)
// Render: settings store -> resolver -> template
//
// The two flows never call each other; they only share the settings store.

use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::{
    admin_assets, build_fields, public_assets, render_admin_page, render_notices, AdminPage,
    Asset, PublicAssetContext,
};
use crate::config::Config;
use crate::error::BannerError;
use crate::notices::NoticeQueue;
use crate::resolver::{BannerResolver, BannerState, RenderContext};
use crate::settings::{SettingKey, SettingsStore};
use crate::template::{resolve_template, TemplateContext, BANNER_TEMPLATE, PREVIEW_HEADING_TEMPLATE};
use crate::validator::{LinkMatch, SettingsValidator};

pub mod submission;

pub use submission::FormSubmission;

/// Outcome of one settings save
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub request_id: String,
    /// Keys written to the store
    pub saved: Vec<SettingKey>,
    /// Keys whose submitted value was rejected (prior value kept)
    pub rejected: Vec<SettingKey>,
    /// Submitted field names that are not banner settings
    pub ignored: Vec<String>,
}

impl SaveReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Admin save flow: validates each submitted field before persisting it
pub struct SavePipeline<S: SettingsStore> {
    store: S,
    validator: SettingsValidator<S>,
}

impl<S: SettingsStore + Clone> SavePipeline<S> {
    pub fn new(store: S, notices: Arc<NoticeQueue>, site_title: impl Into<String>) -> Self {
        let validator = SettingsValidator::new(store.clone(), notices, site_title);
        Self { store, validator }
    }

    pub fn from_config(store: S, notices: Arc<NoticeQueue>, config: &Config) -> Self {
        let validator = SettingsValidator::new(store.clone(), notices, config.site.title.clone())
            .with_link_match(LinkMatch::from_config(config));
        Self { store, validator }
    }
}

impl<S: SettingsStore> SavePipeline<S> {
    pub fn validator(&self) -> &SettingsValidator<S> {
        &self.validator
    }

    /// Validate and persist every field of a submission.
    ///
    /// A rejected link is dropped and reported; it never aborts the other
    /// fields. Store failures abort the save.
    pub fn save(&self, submission: &FormSubmission) -> Result<SaveReport, BannerError> {
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("settings_save", request_id = %request_id);
        let _enter = span.enter();

        let mut report = SaveReport {
            request_id,
            ignored: submission.unknown_fields().to_vec(),
            ..SaveReport::default()
        };

        for (key, value) in submission.fields() {
            match self.normalize(*key, value) {
                Ok(normalized) => {
                    self.store.set(*key, &normalized)?;
                    report.saved.push(*key);
                }
                Err(e) if e.is_validation() => report.rejected.push(*key),
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            saved = report.saved.len(),
            rejected = report.rejected.len(),
            ignored = report.ignored.len(),
            "Settings save processed"
        );
        Ok(report)
    }

    fn normalize(&self, key: SettingKey, value: &str) -> Result<String, BannerError> {
        match key {
            SettingKey::Link => self.validator.validate_referral_link(value),
            SettingKey::Name => self.validator.prepare_referral_name(value),
            SettingKey::Enabled | SettingKey::Style | SettingKey::Position => Ok(value.to_string()),
        }
    }
}

/// Page render flow: resolves state from the store and fills templates
pub struct RenderPipeline<S: SettingsStore> {
    resolver: BannerResolver<S>,
    notices: Arc<NoticeQueue>,
    page: AdminPage,
}

impl<S: SettingsStore> RenderPipeline<S> {
    pub fn new(store: S, notices: Arc<NoticeQueue>, site_title: impl Into<String>) -> Self {
        Self {
            resolver: BannerResolver::new(store, site_title),
            notices,
            page: AdminPage::default(),
        }
    }

    pub fn resolver(&self) -> &BannerResolver<S> {
        &self.resolver
    }

    pub fn page(&self) -> &AdminPage {
        &self.page
    }

    /// Resolved template state
    pub fn state(&self, context: RenderContext) -> Result<BannerState, BannerError> {
        self.resolver.state(context)
    }

    /// Banner markup for a public page, `None` while the banner is suppressed
    pub fn render_public(&self) -> Result<Option<String>, BannerError> {
        let state = self.resolver.state(RenderContext::Public)?;
        if !state.is_active() {
            tracing::debug!(status = ?state.status, "Banner suppressed on public page");
            return Ok(None);
        }
        Ok(Some(render_banner(&state)))
    }

    /// Full admin settings page, draining pending notices
    pub fn render_admin(&self) -> Result<String, BannerError> {
        let request_id = Uuid::new_v4().to_string();
        let span = tracing::info_span!("admin_render", request_id = %request_id);
        let _enter = span.enter();

        let state = self.resolver.state(RenderContext::AdminPreview)?;
        let fields = build_fields(&self.resolver)?;
        let notices = render_notices(&self.notices);
        let preview = render_banner(&state);

        Ok(render_admin_page(
            &self.page,
            &fields,
            state.enabled,
            &notices,
            &preview,
        ))
    }

    /// Assets for an admin screen
    pub fn admin_assets(&self, hook: &str) -> Vec<Asset> {
        admin_assets(hook)
    }

    /// Assets for a public page; empty while the banner is suppressed
    pub fn public_assets(&self, context: PublicAssetContext) -> Result<Vec<Asset>, BannerError> {
        let active = self.resolver.should_render_banner_on_public_pages()?;
        Ok(public_assets(active, context))
    }
}

/// Fill the banner template from resolved state
pub fn render_banner(state: &BannerState) -> String {
    let mut context = TemplateContext::new();
    context
        .set("preview_visibility_class", &state.preview_visibility_class)
        .set("position_class", &state.position_class)
        .set("color_class", &state.color_class)
        .set("display_name", &state.display_name)
        .set("link", &state.link);

    if state.context.is_admin() {
        context.set_markup("preview_heading", PREVIEW_HEADING_TEMPLATE);
    }

    resolve_template(BANNER_TEMPLATE, &context)
}
