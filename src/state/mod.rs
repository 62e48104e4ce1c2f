// Builder state module - the in-memory workspace every editor mutates

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::{
    hooks,
    models::Question,
    registry::{self, QuestionType},
};

mod question;
mod section;
mod validate;

pub use section::SummaryEntry;
pub use validate::SectionError;

/// Everything the builder page shows: the question being edited, which type
/// is selected, whether an existing section is being reworked, and the
/// ordered section list.
#[derive(Debug)]
pub(crate) struct Workspace {
    pub selected_type: QuestionType,
    pub current: Question,
    /// Index into `sections` while an existing section is loaded for editing.
    pub editing: Option<usize>,
    pub sections: Vec<Question>,
}

impl Workspace {
    fn new() -> Self {
        let selected_type = QuestionType::MultipleSingle;
        Self {
            selected_type,
            current: registry::new_question(selected_type),
            editing: None,
            sections: Vec::new(),
        }
    }

    /// Editor-render preparation: option groups are never shown empty, and
    /// augmenting modules get to fix up their stores.
    fn prepare_for_editor(&mut self) {
        let config = self.current.question_type.config();
        for group in config.option_groups {
            let items = self.current.options.entry(group.key.to_string()).or_default();
            if items.is_empty() {
                items.push(group.placeholder.to_string());
            }
        }
        hooks::editor_rendering(&mut self.current);
    }
}

/// Cloneable handle to the single process-wide workspace.
#[derive(Clone)]
pub struct Builder {
    inner: Arc<Mutex<Workspace>>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Workspace::new())),
        }
    }

    pub(crate) async fn lock_workspace(&self) -> MutexGuard<'_, Workspace> {
        self.inner.lock().await
    }

    /// Snapshot of the workspace for rendering. Runs editor preparation
    /// first so views always see consistent option lists.
    pub async fn workspace(&self) -> WorkspaceView {
        let mut workspace = self.lock_workspace().await;
        workspace.prepare_for_editor();
        WorkspaceView {
            selected_type: workspace.selected_type,
            question: workspace.current.clone(),
            editing: workspace.editing,
        }
    }

    pub async fn selected_type(&self) -> QuestionType {
        self.lock_workspace().await.selected_type
    }

    pub async fn sections(&self) -> Vec<Question> {
        self.lock_workspace().await.sections.clone()
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot handed to the views.
#[derive(Debug, Clone)]
pub struct WorkspaceView {
    pub selected_type: QuestionType,
    pub question: Question,
    pub editing: Option<usize>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ----- editor preparation tests -----

    #[test]
    fn empty_option_groups_are_refilled_with_the_placeholder() {
        let mut workspace = Workspace::new();
        workspace.current.options.get_mut("options").unwrap().clear();

        workspace.prepare_for_editor();

        assert_eq!(workspace.current.options["options"], vec!["Option".to_string()]);
    }

    #[test]
    fn preparation_sizes_the_image_store() {
        let mut workspace = Workspace::new();
        workspace.selected_type = QuestionType::Images;
        workspace.current = registry::new_question(QuestionType::Images);
        assert!(workspace.current.image_choices.is_empty());

        workspace.prepare_for_editor();

        assert_eq!(workspace.current.image_choices.len(), 4);
    }
}
