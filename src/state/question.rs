// Mutations on the question currently being edited

use crate::{
    hooks,
    models::SettingValue,
    registry::{self, QuestionType, SettingKind},
    state::Builder,
};

impl Builder {
    /// Switch the workspace to a fresh question of `kind`, discarding the
    /// current draft and any in-progress section edit.
    pub async fn select_type(&self, kind: QuestionType) {
        let mut workspace = self.lock_workspace().await;
        workspace.selected_type = kind;
        workspace.editing = None;
        workspace.current = registry::new_question(kind);
    }

    pub async fn set_title(&self, title: String) {
        self.lock_workspace().await.current.title = title;
    }

    pub async fn set_description(&self, description: String) {
        self.lock_workspace().await.current.description = description;
    }

    pub async fn set_info(&self, info: String) {
        self.lock_workspace().await.current.info = info;
    }

    /// Append a new entry to an option group, labelled after the group's
    /// placeholder. No-ops at the group's maximum.
    pub async fn add_option(&self, group_key: &str) -> bool {
        let mut workspace = self.lock_workspace().await;
        let Some(group) = workspace.current.question_type.config().group(group_key) else {
            return false;
        };
        let items = workspace.current.options.entry(group.key.to_string()).or_default();
        if group.max.is_some_and(|max| items.len() >= max) {
            return false;
        }
        items.push(format!("{} {}", group.placeholder, items.len() + 1));
        hooks::option_added(&mut workspace.current, group.key);
        true
    }

    /// Remove the entry at `index`. No-ops at the group's minimum count or
    /// when the index is out of range.
    pub async fn remove_option(&self, group_key: &str, index: usize) -> bool {
        let mut workspace = self.lock_workspace().await;
        let Some(group) = workspace.current.question_type.config().group(group_key) else {
            return false;
        };
        let Some(items) = workspace.current.options.get_mut(group.key) else {
            return false;
        };
        if items.len() <= group.min || index >= items.len() {
            return false;
        }
        items.remove(index);
        hooks::option_removed(&mut workspace.current, group.key, index);
        true
    }

    /// Overwrite the text of one option entry.
    pub async fn set_option(&self, group_key: &str, index: usize, value: String) -> bool {
        let mut workspace = self.lock_workspace().await;
        let Some(items) = workspace.current.options.get_mut(group_key) else {
            return false;
        };
        let Some(slot) = items.get_mut(index) else {
            return false;
        };
        *slot = value;
        true
    }

    /// Store a settings value from its raw input text. Numeric fields are
    /// parsed; a cleared or unparseable numeric input removes the key so
    /// renderers fall back to their defaults. Unknown keys are ignored.
    pub async fn set_setting(&self, key: &str, raw: &str) -> bool {
        let mut workspace = self.lock_workspace().await;
        let Some(field) = workspace.current.question_type.config().setting_field(key) else {
            return false;
        };
        match field.kind {
            SettingKind::Number => match raw.trim() {
                "" => {
                    workspace.current.settings.remove(field.key);
                }
                trimmed => match trimmed.parse::<f64>() {
                    Ok(number) => {
                        workspace
                            .current
                            .settings
                            .insert(field.key.to_string(), SettingValue::Number(number));
                    }
                    Err(_) => {
                        workspace.current.settings.remove(field.key);
                    }
                },
            },
            SettingKind::Text => {
                workspace
                    .current
                    .settings
                    .insert(field.key.to_string(), SettingValue::Text(raw.to_string()));
            }
        }
        true
    }
}
