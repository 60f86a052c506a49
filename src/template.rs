//! Template variable substitution for banner and admin page markup.
//!
//! Templates use `{{variable}}` placeholders. Values set through
//! [`TemplateContext::set`] are attribute-escaped on insertion; values set
//! through [`TemplateContext::set_markup`] are inserted verbatim and must
//! already be safe markup (nested rendered fragments).
//!
//! # Example
//!
//! ```
//! use referral_banner::template::{resolve_template, TemplateContext};
//!
//! let mut context = TemplateContext::new();
//! context.set("name", "Bob's Blog");
//!
//! let result = resolve_template("<span>{{name}}</span>", &context);
//! assert_eq!(result, "<span>Bob&#039;s Blog</span>");
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::sanitize::escape_attr;

/// Regex pattern for matching template variables: {{variable}}
static TEMPLATE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Gets the compiled template pattern regex.
///
/// The pattern is a compile-time constant; `test_template_regex_is_valid`
/// guards it.
fn get_template_pattern() -> &'static Regex {
    TEMPLATE_PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z0-9_.]+)\s*\}\}")
            .expect("Invalid template regex - this is a compile-time bug")
    })
}

/// Values available for template substitution
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    /// Creates a new empty template context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text value; it is escaped on insertion.
    pub fn set(&mut self, name: impl Into<String>, value: &str) -> &mut Self {
        self.values.insert(name.into(), escape_attr(value));
        self
    }

    /// Sets a pre-rendered markup fragment, inserted verbatim.
    pub fn set_markup(&mut self, name: impl Into<String>, markup: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), markup.into());
        self
    }

    /// Gets the (already escaped) value for a variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }
}

/// Resolves all template variables in the given text.
///
/// Unknown variables are replaced with an empty string.
pub fn resolve_template(template: &str, context: &TemplateContext) -> String {
    get_template_pattern()
        .replace_all(template, |caps: &regex::Captures| {
            context.get(&caps[1]).unwrap_or("").to_string()
        })
        .into_owned()
}

/// Banner markup, shared by public pages and the admin preview
pub const BANNER_TEMPLATE: &str = r#"<div class="preview-inner {{preview_visibility_class}}">
  {{preview_heading}}
  <div class="brb-banner {{position_class}} {{color_class}}">
    <span>Switch web browsers to Brave to protect your privacy and support</span>
    <span class="brb-referral-name">{{display_name}}</span>
    <a target="_blank" class="brb-referral-link" href="{{link}}">Try It Today &gt;&gt;..</a>
    <a class="brb-referral-close">X</a>
  </div>
</div>"#;

/// Heading shown above the banner in the admin preview
pub const PREVIEW_HEADING_TEMPLATE: &str = r#"<h2 class="preview-text">Banner Preview:</h2>"#;

/// A single admin notice
pub const NOTICE_TEMPLATE: &str =
    r#"<div id="setting-error-{{code}}" class="notice notice-{{level}} settings-error is-dismissible"><p><strong>{{message}}</strong></p></div>"#;

/// A settings table row
pub const ROW_TEMPLATE: &str = r#"<tr class="{{row_class}}">
  <th scope="row"><label for="{{key}}">{{label}}</label>{{sub_label}}</th>
  <td>{{input}}</td>
</tr>"#;

/// Enabled checkbox
pub const CHECKBOX_TEMPLATE: &str =
    r#"<input value="1" type="checkbox" id="{{key}}" name="{{key}}"{{checked}} />"#;

/// Free text input
pub const TEXT_INPUT_TEMPLATE: &str =
    r#"<input type="text" id="{{key}}" name="{{key}}" value="{{value}}" />"#;

/// Select wrapper
pub const SELECT_TEMPLATE: &str = r#"<select id="{{key}}" name="{{key}}">{{options}}</select>"#;

/// Select option
pub const OPTION_TEMPLATE: &str = r#"<option value="{{value}}"{{selected}}>{{label}}</option>"#;

/// Admin settings page
pub const ADMIN_PAGE_TEMPLATE: &str = r#"<div class="wrap">
  <h1>Brave Referral Banner</h1>
  {{notices}}
  <form method="post" action="options.php">
    <input type="hidden" name="option_page" value="{{settings_group}}" />
    <table class="form-table">
      <tbody>
{{rows}}
        <tr class="{{preview_row_class}}">
          <td colspan="2"><div class="preview-container">{{preview}}</div></td>
        </tr>
      </tbody>
    </table>
    <button type="submit" class="button brb-save">Update Banner</button>
  </form>
</div>"#;
