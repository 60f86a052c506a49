//! Rendering state resolver.
//!
//! Converts stored settings into the values a template needs. Nothing here
//! can fail on settings content: absent or malformed values fall back to
//! defaults. Errors only come from reading the store itself.

use serde::Serialize;

use crate::constants::{
    COLOR_CLASS_PREFIX, DEFAULT_DISPLAY_NAME, DEFAULT_STYLE, ENABLED_FLAG, POSITION_CLASS_BOTTOM,
    POSITION_CLASS_TOP, PREVIEW_HIDDEN_CLASS, ROW_HIDDEN_CLASS,
};
use crate::error::BannerError;
use crate::sanitize::sanitize_class_token;
use crate::settings::{BannerPosition, SettingKey, SettingsStore};

/// Where the banner is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderContext {
    /// Public site pages
    Public,
    /// Inline preview on the admin settings page
    AdminPreview,
}

impl RenderContext {
    pub fn is_admin(&self) -> bool {
        matches!(self, RenderContext::AdminPreview)
    }
}

/// Stored name, else site title, else "this site"
pub fn resolve_display_name(stored_name: &str, site_title: &str) -> String {
    if !stored_name.is_empty() {
        stored_name.to_string()
    } else if !site_title.is_empty() {
        site_title.to_string()
    } else {
        DEFAULT_DISPLAY_NAME.to_string()
    }
}

/// Name shown in (or saved from) the admin name field.
///
/// With no submission the stored name is kept when present. A submitted
/// non-empty name wins; a submitted empty name skips the stored name and
/// starts the chain at the site title.
pub fn resolve_name_for_edit(submitted: Option<&str>, stored_name: &str, site_title: &str) -> String {
    match submitted {
        Some(name) if !name.is_empty() => name.to_string(),
        Some(_) => resolve_display_name("", site_title),
        None => resolve_display_name(stored_name, site_title),
    }
}

/// `bk-<style>`, with `black` substituted for an empty style.
///
/// Values outside the style catalog pass through; the token is only
/// restricted to class-safe characters.
pub fn resolve_color_class(stored_style: &str) -> String {
    let style = if stored_style.is_empty() {
        DEFAULT_STYLE
    } else {
        stored_style
    };
    format!("{}{}", COLOR_CLASS_PREFIX, sanitize_class_token(style))
}

/// `brb-top` / `brb-bottom` on public pages, empty in the admin preview
pub fn resolve_position_class(stored_position: &str, is_admin_context: bool) -> &'static str {
    if is_admin_context {
        return "";
    }
    match BannerPosition::from_stored(stored_position) {
        BannerPosition::Top => POSITION_CLASS_TOP,
        BannerPosition::Bottom => POSITION_CLASS_BOTTOM,
    }
}

/// Visibility token for admin configuration rows: empty when enabled
pub fn resolve_visibility(is_enabled: bool) -> &'static str {
    if is_enabled {
        ""
    } else {
        ROW_HIDDEN_CLASS
    }
}

/// Visibility token for the banner preview wrapper: empty when enabled
pub fn resolve_preview_visibility(is_enabled: bool) -> &'static str {
    if is_enabled {
        ""
    } else {
        PREVIEW_HIDDEN_CLASS
    }
}

/// Stored enabled flag is exactly "1"
pub fn is_enabled_flag(stored: &str) -> bool {
    stored == ENABLED_FLAG
}

/// Admission gate: enabled and a link is stored
pub fn should_render_banner(enabled_flag: &str, link: &str) -> bool {
    is_enabled_flag(enabled_flag) && !link.is_empty()
}

/// Observable banner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerStatus {
    /// Not enabled, or no link stored
    Suppressed,
    /// Enabled with a link
    Active,
}

/// Everything a banner template needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerState {
    pub status: BannerStatus,
    pub enabled: bool,
    pub display_name: String,
    pub color_class: String,
    pub position_class: String,
    pub visibility_class: String,
    pub preview_visibility_class: String,
    pub link: String,
    pub context: RenderContext,
}

impl BannerState {
    pub fn is_active(&self) -> bool {
        self.status == BannerStatus::Active
    }
}

/// Resolver bound to a settings store and the host site title
pub struct BannerResolver<S: SettingsStore> {
    store: S,
    site_title: String,
}

impl<S: SettingsStore> BannerResolver<S> {
    pub fn new(store: S, site_title: impl Into<String>) -> Self {
        Self {
            store,
            site_title: site_title.into(),
        }
    }

    /// Stored value as-is, empty when absent
    pub fn stored(&self, key: SettingKey) -> Result<String, BannerError> {
        self.store.get_or_empty(key)
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    pub fn is_enabled(&self) -> Result<bool, BannerError> {
        Ok(is_enabled_flag(&self.store.get_or_empty(SettingKey::Enabled)?))
    }

    pub fn display_name(&self) -> Result<String, BannerError> {
        let stored = self.store.get_or_empty(SettingKey::Name)?;
        Ok(resolve_display_name(&stored, &self.site_title))
    }

    /// Value for the admin name input (stored name kept when present)
    pub fn name_for_edit(&self) -> Result<String, BannerError> {
        let stored = self.store.get_or_empty(SettingKey::Name)?;
        Ok(resolve_name_for_edit(None, &stored, &self.site_title))
    }

    pub fn color_class(&self) -> Result<String, BannerError> {
        Ok(resolve_color_class(&self.store.get_or_empty(SettingKey::Style)?))
    }

    pub fn position_class(&self, context: RenderContext) -> Result<&'static str, BannerError> {
        let stored = self.store.get_or_empty(SettingKey::Position)?;
        Ok(resolve_position_class(&stored, context.is_admin()))
    }

    pub fn should_render_banner_on_public_pages(&self) -> Result<bool, BannerError> {
        let enabled = self.store.get_or_empty(SettingKey::Enabled)?;
        let link = self.store.get_or_empty(SettingKey::Link)?;
        Ok(should_render_banner(&enabled, &link))
    }

    /// Resolve the full template state for one render
    pub fn state(&self, context: RenderContext) -> Result<BannerState, BannerError> {
        let enabled_flag = self.store.get_or_empty(SettingKey::Enabled)?;
        let link = self.store.get_or_empty(SettingKey::Link)?;
        let enabled = is_enabled_flag(&enabled_flag);

        let status = if should_render_banner(&enabled_flag, &link) {
            BannerStatus::Active
        } else {
            BannerStatus::Suppressed
        };

        Ok(BannerState {
            status,
            enabled,
            display_name: self.display_name()?,
            color_class: self.color_class()?,
            position_class: self.position_class(context)?.to_string(),
            visibility_class: resolve_visibility(enabled).to_string(),
            preview_visibility_class: resolve_preview_visibility(enabled).to_string(),
            link,
            context,
        })
    }
}
