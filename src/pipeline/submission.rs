//! Settings form submissions.
//!
//! A submission is either the complete settings form as the host posts it,
//! or a partial update naming only some fields. In a complete form an
//! unchecked checkbox is simply missing, so every setting absent from the
//! post is submitted as an empty value.

use crate::error::BannerError;
use crate::settings::SettingKey;

/// Submitted setting values in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(SettingKey, String)>,
    unknown: Vec<String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partial update: only the named fields are submitted
    pub fn partial<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = Self::new();
        for (name, value) in pairs {
            submission.insert(name.as_ref(), value);
        }
        submission
    }

    /// Complete form post: missing settings are submitted empty
    pub fn full_form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::partial(pairs).complete()
    }

    /// Submit every setting missing from this submission as empty
    pub fn complete(mut self) -> Self {
        for key in SettingKey::ALL {
            if self.value(key).is_none() {
                self.fields.push((key, String::new()));
            }
        }
        self.fields.sort_by_key(|(key, _)| form_index(*key));
        self
    }

    /// Parse `key=value` arguments into a partial submission
    pub fn from_assignments<I, A>(assignments: I) -> Result<Self, BannerError>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        let mut pairs = Vec::new();
        for assignment in assignments {
            let assignment = assignment.as_ref();
            let (name, value) = assignment.split_once('=').ok_or_else(|| {
                BannerError::Config(format!(
                    "Invalid field assignment '{}': expected key=value",
                    assignment
                ))
            })?;
            pairs.push((name.trim().to_string(), value.to_string()));
        }
        Ok(Self::partial(pairs))
    }

    /// Add a field; a repeated setting replaces the earlier value
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match SettingKey::parse(name) {
            Some(key) => match self.fields.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => self.fields.push((key, value)),
            },
            None => self.unknown.push(name.to_string()),
        }
    }

    pub fn value(&self, key: SettingKey) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&SettingKey, &String)> {
        self.fields.iter().map(|(k, v)| (k, v))
    }

    pub fn unknown_fields(&self) -> &[String] {
        &self.unknown
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn form_index(key: SettingKey) -> usize {
    SettingKey::ALL
        .iter()
        .position(|k| *k == key)
        .unwrap_or(SettingKey::ALL.len())
}
