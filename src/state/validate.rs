// Save-time validation for the current question

use thiserror::Error;

use crate::models::Question;

/// Why a question cannot become a section yet. The web layer turns these
/// into localized alert messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("question title is blank")]
    MissingTitle,
    #[error("option group {label:?} needs at least {min} non-blank entries")]
    TooFewEntries { label: &'static str, min: usize },
}

/// A question is saveable when its title is non-blank and every option
/// group with a minimum has enough non-blank entries.
pub fn validate(question: &Question) -> Result<(), SectionError> {
    if question.title.trim().is_empty() {
        return Err(SectionError::MissingTitle);
    }
    let config = question.question_type.config();
    for group in config.option_groups {
        let filled = question
            .options
            .get(group.key)
            .map_or(0, |items| items.iter().filter(|item| !item.trim().is_empty()).count());
        if group.min > 0 && filled < group.min {
            return Err(SectionError::TooFewEntries {
                label: group.label,
                min: group.min,
            });
        }
    }
    Ok(())
}
