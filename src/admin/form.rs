//! Settings form model.
//!
//! Builds the admin form fields from the stored settings: the enabled
//! checkbox, the style and position selects, and the link and name text
//! inputs. Every field except the checkbox sits in a configuration row that
//! is hidden while the banner is disabled.

use crate::error::BannerError;
use crate::resolver::BannerResolver;
use crate::settings::{options_for, SelectOption, SettingKey, SettingsStore};

/// Input control for one setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Checkbox { checked: bool },
    Select { options: Vec<SelectOption>, selected: String },
    Text { value: String },
}

/// One row of the settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: SettingKey,
    pub label: &'static str,
    pub sub_label: Option<&'static str>,
    pub input: FieldInput,
    /// Configuration rows toggle with the enabled flag
    pub is_configuration: bool,
}

fn label_for(key: SettingKey) -> &'static str {
    match key {
        SettingKey::Enabled => "Banner Enabled:",
        SettingKey::Style => "Banner Style:",
        SettingKey::Position => "Banner Position:",
        SettingKey::Link => "Brave Referral Link:",
        SettingKey::Name => "Publisher Name:",
    }
}

/// Build the form fields, in display order, from the current settings
pub fn build_fields<S: SettingsStore>(
    resolver: &BannerResolver<S>,
) -> Result<Vec<FormField>, BannerError> {
    SettingKey::ALL
        .into_iter()
        .map(|key| -> Result<FormField, BannerError> {
            let input = match key {
                SettingKey::Enabled => FieldInput::Checkbox {
                    checked: resolver.is_enabled()?,
                },
                SettingKey::Style | SettingKey::Position => FieldInput::Select {
                    options: options_for(key).unwrap_or_default(),
                    selected: resolver.stored(key)?,
                },
                SettingKey::Link => FieldInput::Text {
                    value: resolver.stored(key)?,
                },
                SettingKey::Name => FieldInput::Text {
                    value: resolver.name_for_edit()?,
                },
            };

            Ok(FormField {
                key,
                label: label_for(key),
                sub_label: (key == SettingKey::Name).then_some("(Defaults to Site Title)"),
                input,
                is_configuration: key != SettingKey::Enabled,
            })
        })
        .collect()
}
