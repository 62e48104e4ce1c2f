//! Notification seam between the option editor and augmenting modules.
//!
//! The state layer announces list mutations and every editor render here,
//! and the editor view asks registered decorators for extra row markup.
//! Modules plug in by adding their functions to the tables below; the core
//! state and view code stays unaware of who is listening.

use maud::Markup;

use crate::{image_choice, models::Question};

type ListHook = fn(&mut Question, &str);
type RemovalHook = fn(&mut Question, &str, usize);
type RenderHook = fn(&mut Question);
type RowDecorator = fn(&Question, &str, usize, &str) -> Option<Markup>;

static OPTION_ADDED: &[ListHook] = &[image_choice::on_option_added];
static OPTION_REMOVED: &[RemovalHook] = &[image_choice::on_option_removed];
static EDITOR_RENDERING: &[RenderHook] = &[image_choice::on_editor_rendering];
static ROW_DECORATORS: &[RowDecorator] = &[image_choice::row_controls];

/// An entry was appended to `group`.
pub fn option_added(question: &mut Question, group: &str) {
    for hook in OPTION_ADDED {
        hook(question, group);
    }
}

/// The entry at `index` was removed from `group`.
pub fn option_removed(question: &mut Question, group: &str, index: usize) {
    for hook in OPTION_REMOVED {
        hook(question, group, index);
    }
}

/// The option editor is about to be rendered for `question`.
pub fn editor_rendering(question: &mut Question) {
    for hook in EDITOR_RENDERING {
        hook(question);
    }
}

/// Extra markup to append inside the editor row for one group entry.
pub fn decorate_row(question: &Question, group: &str, index: usize, locale: &str) -> Vec<Markup> {
    ROW_DECORATORS
        .iter()
        .filter_map(|decorate| decorate(question, group, index, locale))
        .collect()
}
