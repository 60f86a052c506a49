//! Conditional asset registration.
//!
//! Admin assets load only on the banner settings page. Public assets load
//! only while the admission gate is open.

use serde::Serialize;

use crate::constants::SETTINGS_HOOK;

/// Asset kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Style,
    Script,
}

/// A style or script the host should enqueue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub handle: &'static str,
    pub kind: AssetKind,
    /// Path relative to the plugin root; `None` for host-provided assets
    pub src: Option<&'static str>,
}

impl Asset {
    const fn style(handle: &'static str, src: &'static str) -> Self {
        Self {
            handle,
            kind: AssetKind::Style,
            src: Some(src),
        }
    }

    const fn script(handle: &'static str, src: &'static str) -> Self {
        Self {
            handle,
            kind: AssetKind::Script,
            src: Some(src),
        }
    }
}

pub const ADMIN_STYLE: Asset = Asset::style(
    "plugin_settings_style",
    "assets/admin/css/brave-referral-banner-admin.css",
);
pub const ADMIN_SCRIPT: Asset = Asset::script(
    "plugin_settings_script",
    "assets/admin/js/brave-referral-banner-admin.js",
);
pub const BANNER_STYLE: Asset = Asset::style(
    "brave_referral_banner_style",
    "assets/public/css/brave-referral-banner.css",
);
pub const BANNER_SCRIPT: Asset = Asset::script(
    "brave_referral_banner_script",
    "assets/public/js/brave-referral-banner.js",
);
pub const JQUERY: Asset = Asset {
    handle: "jquery",
    kind: AssetKind::Script,
    src: None,
};

/// Assets for an admin screen identified by its hook name
pub fn admin_assets(hook: &str) -> Vec<Asset> {
    if hook != SETTINGS_HOOK {
        return Vec::new();
    }
    // The banner stylesheet also styles the inline preview
    vec![ADMIN_STYLE, ADMIN_SCRIPT, BANNER_STYLE]
}

/// Host state relevant to public asset loading
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicAssetContext {
    /// Rendering inside the admin area
    pub is_admin: bool,
    /// jQuery already enqueued by the theme or another plugin
    pub jquery_enqueued: bool,
}

/// Assets for a public page render; empty when the banner is suppressed
pub fn public_assets(banner_active: bool, context: PublicAssetContext) -> Vec<Asset> {
    if !banner_active {
        return Vec::new();
    }

    let mut assets = Vec::with_capacity(3);
    // Already loaded by the admin screen
    if !context.is_admin {
        assets.push(BANNER_STYLE);
    }
    if !context.jquery_enqueued {
        assets.push(JQUERY);
    }
    assets.push(BANNER_SCRIPT);
    assets
}
