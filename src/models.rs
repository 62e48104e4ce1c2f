use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::QuestionType;

pub type Sections = Vec<Question>;

/// One survey question, either under construction in the workspace or
/// finished as a section. The shape doubles as the JSON export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    pub description: String,
    pub info: String,
    /// Option groups keyed by the registry's group key (`options`, `rows`, ...).
    #[serde(default)]
    pub options: BTreeMap<String, Vec<String>>,
    /// Scalar configuration keyed by the registry's field key.
    #[serde(default)]
    pub settings: BTreeMap<String, SettingValue>,
    /// Per-option uploads, index-aligned with the `items` group.
    /// Only the image-choice module reads or writes this.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_choices: Vec<Option<ImageAttachment>>,
}

impl Question {
    /// The entries of an option group, or `fallback` when the group is
    /// missing or empty.
    pub fn options_or<'a>(&'a self, key: &str, fallback: &'a [&'a str]) -> Vec<&'a str> {
        match self.options.get(key) {
            Some(list) if !list.is_empty() => list.iter().map(String::as_str).collect(),
            _ => fallback.to_vec(),
        }
    }

    /// A finite numeric setting. Absent, textual and non-finite values all
    /// count as unset so renderers can fall back.
    pub fn setting_number(&self, key: &str) -> Option<f64> {
        match self.settings.get(key) {
            Some(SettingValue::Number(n)) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// A non-empty text setting.
    pub fn setting_text(&self, key: &str) -> Option<&str> {
        match self.settings.get(key) {
            Some(SettingValue::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

/// A settings value as edited through the generated inputs. Numeric fields
/// that are cleared are removed from the map entirely rather than stored as
/// zero, so renderers see them as unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Number(f64),
    Text(String),
}

/// An uploaded image for one image-choice option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    /// `data:` URL of the uploaded bytes.
    pub data: String,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}
