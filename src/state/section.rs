// Section list operations: saving drafts, reloading them, assembling the survey

use crate::{
    registry,
    state::{validate, Builder, SectionError},
};

/// One line of the finish summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub title: String,
    pub type_label: &'static str,
}

impl Builder {
    /// Validate the current question and append it to the section list, or
    /// overwrite the section it was loaded from. On success the workspace
    /// resets to a fresh question of the selected type.
    pub async fn save_section(&self) -> Result<(), SectionError> {
        let mut workspace = self.lock_workspace().await;
        validate::validate(&workspace.current)?;
        let section = workspace.current.clone();
        match workspace.editing.take() {
            Some(index) if index < workspace.sections.len() => workspace.sections[index] = section,
            _ => workspace.sections.push(section),
        }
        let selected_type = workspace.selected_type;
        workspace.current = registry::new_question(selected_type);
        Ok(())
    }

    /// Load a saved section back into the editor. The workspace keeps a copy;
    /// the stored section only changes on the next successful save.
    pub async fn edit_section(&self, index: usize) -> bool {
        let mut workspace = self.lock_workspace().await;
        let Some(section) = workspace.sections.get(index) else {
            return false;
        };
        let section = section.clone();
        workspace.selected_type = section.question_type;
        workspace.editing = Some(index);
        workspace.current = section;
        true
    }

    /// Remove a section. An in-progress edit pointing at it is cancelled,
    /// and one pointing behind it shifts down with the list.
    pub async fn delete_section(&self, index: usize) -> bool {
        let mut workspace = self.lock_workspace().await;
        if index >= workspace.sections.len() {
            return false;
        }
        workspace.sections.remove(index);
        match workspace.editing {
            Some(editing) if editing == index => workspace.editing = None,
            Some(editing) if editing > index => workspace.editing = Some(editing - 1),
            _ => {}
        }
        true
    }

    /// Summary of the assembled survey, one entry per section in order.
    pub async fn finish(&self) -> Vec<SummaryEntry> {
        self.lock_workspace()
            .await
            .sections
            .iter()
            .map(|section| SummaryEntry {
                title: section.title.clone(),
                type_label: section.question_type.config().label,
            })
            .collect()
    }
}
