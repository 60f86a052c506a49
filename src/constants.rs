// Constants module - centralized identifiers and default values
//
// Setting keys, notice keys, CSS class tokens and host identifiers are
// defined here so the validator, resolver and admin page agree on them.

// =============================================================================
// Setting keys
// =============================================================================

/// Banner enabled flag ("1" when enabled)
pub const KEY_REFERRAL_ENABLED: &str = "referral_enabled";

/// Banner color style
pub const KEY_REFERRAL_STYLE: &str = "referral_style";

/// Banner position on public pages
pub const KEY_REFERRAL_POSITION: &str = "referral_position";

/// Referral link target
pub const KEY_REFERRAL_LINK: &str = "referral_link";

/// Publisher display name
pub const KEY_REFERRAL_NAME: &str = "referral_name";

/// Stored value of `referral_enabled` that means "on"
pub const ENABLED_FLAG: &str = "1";

// =============================================================================
// Host identifiers
// =============================================================================

/// Settings group the banner options are registered under
pub const SETTINGS_GROUP: &str = "brb-settings-group";

/// Admin page slug
pub const SETTINGS_SLUG: &str = "brave-referral-banner";

/// Hook name the host reports while the settings page is being rendered
pub const SETTINGS_HOOK: &str = "plugins_page_brave-referral-banner";

/// Notice key for rejected referral links
pub const NOTICE_INVALID_REF_LINK: &str = "brb-invalid-ref-link";

/// User-facing message for rejected referral links
pub const INVALID_REF_LINK_MESSAGE: &str =
    "Referral link invalid. Please enter a valid referral link.";

// =============================================================================
// Rendering defaults
// =============================================================================

/// Style used when none is stored
pub const DEFAULT_STYLE: &str = "black";

/// Last entry of the display name fallback chain
pub const DEFAULT_DISPLAY_NAME: &str = "this site";

/// Prefix of the color class token
pub const COLOR_CLASS_PREFIX: &str = "bk-";

/// Position class for banners pinned to the top of the page
pub const POSITION_CLASS_TOP: &str = "brb-top";

/// Position class for banners pinned to the bottom of the page
pub const POSITION_CLASS_BOTTOM: &str = "brb-bottom";

/// Visibility token applied to admin configuration rows when disabled
pub const ROW_HIDDEN_CLASS: &str = "row-hidden";

/// Visibility token applied to the banner preview when disabled
pub const PREVIEW_HIDDEN_CLASS: &str = "preview-hidden";

// =============================================================================
// Configuration defaults
// =============================================================================

/// Default settings file for the file-backed store
pub const DEFAULT_STORE_PATH: &str = "referral-banner-settings.json";

/// Default log level when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";
