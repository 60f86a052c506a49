//! Banner settings model.
//!
//! Every setting is an independent scalar stored under its own key; there is
//! no structured record. This module names the keys and the option catalogs
//! the admin page offers for the enumerated settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{StoreBackend, StoreConfig};
use crate::constants::{
    KEY_REFERRAL_ENABLED, KEY_REFERRAL_LINK, KEY_REFERRAL_NAME, KEY_REFERRAL_POSITION,
    KEY_REFERRAL_STYLE,
};

pub mod file_store;
pub mod store;

pub use file_store::FileSettingsStore;
pub use store::{MemorySettingsStore, SettingsStore};

/// Persisted setting keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKey {
    #[serde(rename = "referral_enabled")]
    Enabled,
    #[serde(rename = "referral_style")]
    Style,
    #[serde(rename = "referral_position")]
    Position,
    #[serde(rename = "referral_link")]
    Link,
    #[serde(rename = "referral_name")]
    Name,
}

impl SettingKey {
    /// All keys in admin form order
    pub const ALL: [SettingKey; 5] = [
        SettingKey::Enabled,
        SettingKey::Style,
        SettingKey::Position,
        SettingKey::Link,
        SettingKey::Name,
    ];

    /// Storage key
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Enabled => KEY_REFERRAL_ENABLED,
            SettingKey::Style => KEY_REFERRAL_STYLE,
            SettingKey::Position => KEY_REFERRAL_POSITION,
            SettingKey::Link => KEY_REFERRAL_LINK,
            SettingKey::Name => KEY_REFERRAL_NAME,
        }
    }

    /// Look up a key by its storage name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Banner color styles offered by the admin page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerStyle {
    Red,
    Yellow,
    #[default]
    Black,
    Branded,
}

impl BannerStyle {
    /// Catalog in display order
    pub const ALL: [BannerStyle; 4] = [
        BannerStyle::Red,
        BannerStyle::Yellow,
        BannerStyle::Black,
        BannerStyle::Branded,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            BannerStyle::Red => "red",
            BannerStyle::Yellow => "yellow",
            BannerStyle::Black => "black",
            BannerStyle::Branded => "branded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BannerStyle::Red => "Red",
            BannerStyle::Yellow => "Yellow",
            BannerStyle::Black => "Black",
            BannerStyle::Branded => "Branded",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.value() == value)
    }
}

/// Banner positions offered by the admin page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerPosition {
    Top,
    #[default]
    Bottom,
}

impl BannerPosition {
    /// Catalog in display order
    pub const ALL: [BannerPosition; 2] = [BannerPosition::Top, BannerPosition::Bottom];

    pub fn value(&self) -> &'static str {
        match self {
            BannerPosition::Top => "top",
            BannerPosition::Bottom => "bottom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BannerPosition::Top => "Top of the Page",
            BannerPosition::Bottom => "Bottom of the Page",
        }
    }

    /// Anything other than "top" renders at the bottom
    pub fn from_stored(value: &str) -> Self {
        if value == BannerPosition::Top.value() {
            BannerPosition::Top
        } else {
            BannerPosition::Bottom
        }
    }
}

/// A select option: stored value and its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Option catalog for an enumerated setting, `None` for free-form settings
pub fn options_for(key: SettingKey) -> Option<Vec<SelectOption>> {
    match key {
        SettingKey::Style => Some(
            BannerStyle::ALL
                .iter()
                .map(|s| SelectOption {
                    value: s.value(),
                    label: s.label(),
                })
                .collect(),
        ),
        SettingKey::Position => Some(
            BannerPosition::ALL
                .iter()
                .map(|p| SelectOption {
                    value: p.value(),
                    label: p.label(),
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Open the settings store selected by the configuration
pub fn open_store(config: &StoreConfig) -> Arc<dyn SettingsStore> {
    match config.backend {
        StoreBackend::Memory => Arc::new(MemorySettingsStore::new()),
        StoreBackend::File => Arc::new(FileSettingsStore::new(config.path.clone())),
    }
}

/// Sidecar file holding pending notices for the file backend
pub fn notice_path(config: &StoreConfig) -> Option<PathBuf> {
    match config.backend {
        StoreBackend::Memory => None,
        StoreBackend::File => {
            let mut path = config.path.clone().into_os_string();
            path.push(".notices");
            Some(PathBuf::from(path))
        }
    }
}
