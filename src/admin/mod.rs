//! Admin settings page.
//!
//! Registration details for the host menu, the one-shot notices, and the
//! settings form with its inline banner preview.

use crate::constants::{NOTICE_INVALID_REF_LINK, SETTINGS_GROUP, SETTINGS_HOOK, SETTINGS_SLUG};
use crate::notices::{Notice, NoticeQueue};
use crate::resolver::resolve_visibility;
use crate::sanitize::escape_attr;
use crate::settings::SelectOption;
use crate::template::{
    resolve_template, TemplateContext, ADMIN_PAGE_TEMPLATE, CHECKBOX_TEMPLATE, NOTICE_TEMPLATE,
    OPTION_TEMPLATE, ROW_TEMPLATE, SELECT_TEMPLATE, TEXT_INPUT_TEMPLATE,
};

pub mod assets;
pub mod form;

pub use assets::{admin_assets, public_assets, Asset, AssetKind, PublicAssetContext};
pub use form::{build_fields, FieldInput, FormField};

/// Admin settings page registration handed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPage {
    pub page_title: &'static str,
    pub menu_title: &'static str,
    pub capability: &'static str,
    pub slug: &'static str,
    pub hook: &'static str,
    pub settings_group: &'static str,
}

impl Default for AdminPage {
    fn default() -> Self {
        Self {
            page_title: "Admin Settings",
            menu_title: "Brave Referral Banner",
            capability: "administrator",
            slug: SETTINGS_SLUG,
            hook: SETTINGS_HOOK,
            settings_group: SETTINGS_GROUP,
        }
    }
}

impl AdminPage {
    /// Check if the host hook is the banner settings page
    pub fn is_settings_hook(&self, hook: &str) -> bool {
        hook == self.hook
    }
}

fn render_notice(notice: &Notice) -> String {
    let mut context = TemplateContext::new();
    context
        .set("code", &notice.code)
        .set("level", notice.level.as_str())
        .set("message", &notice.message);
    resolve_template(NOTICE_TEMPLATE, &context)
}

/// Drain and render the invalid-link notices for this page load
pub fn render_notices(notices: &NoticeQueue) -> String {
    notices
        .take(NOTICE_INVALID_REF_LINK)
        .iter()
        .map(render_notice)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_options(options: &[SelectOption], selected: &str) -> String {
    options
        .iter()
        .map(|option| {
            let mut context = TemplateContext::new();
            context
                .set("value", option.value)
                .set("label", option.label)
                .set_markup(
                    "selected",
                    if option.value == selected {
                        " selected=\"selected\""
                    } else {
                        ""
                    },
                );
            resolve_template(OPTION_TEMPLATE, &context)
        })
        .collect()
}

fn render_input(field: &FormField) -> String {
    let mut context = TemplateContext::new();
    context.set("key", field.key.as_str());

    let template = match &field.input {
        FieldInput::Checkbox { checked } => {
            context.set_markup("checked", if *checked { " checked=\"checked\"" } else { "" });
            CHECKBOX_TEMPLATE
        }
        FieldInput::Select { options, selected } => {
            context.set_markup("options", render_options(options, selected));
            SELECT_TEMPLATE
        }
        FieldInput::Text { value } => {
            context.set("value", value);
            TEXT_INPUT_TEMPLATE
        }
    };
    resolve_template(template, &context)
}

fn render_row(field: &FormField, enabled: bool) -> String {
    let row_class = if field.is_configuration {
        format!("configuration {}", resolve_visibility(enabled))
    } else {
        String::new()
    };

    let sub_label = field
        .sub_label
        .map(|s| format!("<span class=\"sub-label\">{}</span>", escape_attr(s)))
        .unwrap_or_default();

    let mut context = TemplateContext::new();
    context
        .set("row_class", row_class.trim_end())
        .set("key", field.key.as_str())
        .set("label", field.label)
        .set_markup("sub_label", sub_label)
        .set_markup("input", render_input(field));
    resolve_template(ROW_TEMPLATE, &context)
}

/// Render the settings page: pending notices, the form, and the preview
pub fn render_admin_page(
    page: &AdminPage,
    fields: &[FormField],
    enabled: bool,
    notices_markup: &str,
    preview_markup: &str,
) -> String {
    let rows = fields
        .iter()
        .map(|field| render_row(field, enabled))
        .collect::<Vec<_>>()
        .join("\n");

    let preview_row_class = format!("configuration {}", resolve_visibility(enabled));

    let mut context = TemplateContext::new();
    context
        .set("settings_group", page.settings_group)
        .set("preview_row_class", preview_row_class.trim_end())
        .set_markup("notices", notices_markup)
        .set_markup("rows", rows)
        .set_markup("preview", preview_markup);
    resolve_template(ADMIN_PAGE_TEMPLATE, &context)
}
