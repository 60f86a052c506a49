//! Settings validator/normalizer.
//!
//! Gates every write to a setting so that only well-formed values reach the
//! store. Only the referral link can be rejected; the name is normalized
//! through the display name fallback chain and everything else is stored as
//! submitted.

use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::constants::{ENABLED_FLAG, INVALID_REF_LINK_MESSAGE, NOTICE_INVALID_REF_LINK};
use crate::error::BannerError;
use crate::notices::{Notice, NoticeQueue};
use crate::resolver::resolve_name_for_edit;
use crate::sanitize::sanitize_text;
use crate::settings::{SettingKey, SettingsStore};

/// Notice code attached to rejected link notices
pub const INVALID_LINK_NOTICE_CODE: &str = "settings_updated";

static LINK_PATTERN: OnceLock<Regex> = OnceLock::new();
static ANCHORED_LINK_PATTERN: OnceLock<Regex> = OnceLock::new();

fn link_pattern() -> &'static Regex {
    LINK_PATTERN.get_or_init(|| {
        Regex::new(r"https://brave\.com/[a-zA-Z0-9]{6}")
            .expect("Invalid referral link regex - this is a compile-time bug")
    })
}

fn anchored_link_pattern() -> &'static Regex {
    ANCHORED_LINK_PATTERN.get_or_init(|| {
        Regex::new(r"^https://brave\.com/[a-zA-Z0-9]{6}$")
            .expect("Invalid anchored referral link regex - this is a compile-time bug")
    })
}

/// How strictly a submitted value must match the referral URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMatch {
    /// The URL may appear anywhere in the value
    #[default]
    Contains,
    /// The trimmed value must be exactly the URL
    Exact,
}

impl LinkMatch {
    pub fn from_config(config: &Config) -> Self {
        if config.link_policy.anchored {
            LinkMatch::Exact
        } else {
            LinkMatch::Contains
        }
    }

    fn is_match(&self, value: &str) -> bool {
        match self {
            LinkMatch::Contains => link_pattern().is_match(value),
            LinkMatch::Exact => anchored_link_pattern().is_match(value.trim()),
        }
    }
}

/// Validate a submitted referral link.
///
/// Accepts when the value contains `https://brave.com/` followed by six
/// ASCII alphanumerics (or, with `LinkMatch::Exact`, is exactly that). The
/// accepted value is returned sanitized, and must still match once
/// sanitized.
pub fn validate_referral_link(value: &str, mode: LinkMatch) -> Result<String, BannerError> {
    if !mode.is_match(value) {
        return Err(BannerError::InvalidReferralLink);
    }

    // Sanitizing can strip the URL along with surrounding markup
    let sanitized = sanitize_text(value);
    if !mode.is_match(&sanitized) {
        return Err(BannerError::InvalidReferralLink);
    }
    Ok(sanitized)
}

/// Write-time validator bound to a settings store and notice channel
pub struct SettingsValidator<S: SettingsStore> {
    store: S,
    notices: Arc<NoticeQueue>,
    site_title: String,
    link_match: LinkMatch,
}

impl<S: SettingsStore> SettingsValidator<S> {
    pub fn new(store: S, notices: Arc<NoticeQueue>, site_title: impl Into<String>) -> Self {
        Self {
            store,
            notices,
            site_title: site_title.into(),
            link_match: LinkMatch::default(),
        }
    }

    pub fn with_link_match(mut self, link_match: LinkMatch) -> Self {
        self.link_match = link_match;
        self
    }

    pub fn link_match(&self) -> LinkMatch {
        self.link_match
    }

    /// Validate a referral link, queuing the one-shot admin notice on
    /// rejection. The caller must discard the write on `Err`.
    pub fn validate_referral_link(&self, value: &str) -> Result<String, BannerError> {
        validate_referral_link(value, self.link_match).map_err(|e| {
            tracing::warn!(
                key = %SettingKey::Link,
                link_match = ?self.link_match,
                "Referral link rejected"
            );
            self.notices.add(Notice::error(
                NOTICE_INVALID_REF_LINK,
                INVALID_LINK_NOTICE_CODE,
                INVALID_REF_LINK_MESSAGE,
            ));
            e
        })
    }

    /// Resolve the name to store for a submission.
    ///
    /// A non-empty submission wins; an empty one falls through to the site
    /// title and then to "this site". The result is sanitized.
    pub fn prepare_referral_name(&self, value: &str) -> Result<String, BannerError> {
        let stored = self.store.get_or_empty(SettingKey::Name)?;
        let resolved = resolve_name_for_edit(Some(value), &stored, &self.site_title);
        Ok(sanitize_text(&resolved))
    }

    /// Whether the stored enabled flag is exactly "1"
    pub fn is_enabled(&self) -> Result<bool, BannerError> {
        Ok(self.store.get_or_empty(SettingKey::Enabled)? == ENABLED_FLAG)
    }
}
