//! Image-choice augmentation for the option editor.
//!
//! Everything specific to per-option image uploads lives here, wired into
//! the builder through the [`crate::hooks`] tables: the image store is kept
//! index-aligned with the `items` group, and each editor row for an
//! image-choice question grows upload controls. No other module touches
//! `Question::image_choices`.

use base64::prelude::*;
use chrono::Utc;
use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    models::{ImageAttachment, Question},
    names,
    registry::QuestionType,
    state::Builder,
};

/// The option group the upload controls attach to.
const ITEMS_GROUP: &str = "items";

fn is_image_question(question: &Question) -> bool {
    question.question_type == QuestionType::Images
}

/// Pad with empty slots or truncate so the store matches the items list.
fn ensure_store(question: &mut Question) {
    let target = question.options.get(ITEMS_GROUP).map_or(0, Vec::len);
    question.image_choices.resize(target, None);
}

pub(crate) fn on_editor_rendering(question: &mut Question) {
    if is_image_question(question) {
        ensure_store(question);
    }
}

pub(crate) fn on_option_added(question: &mut Question, group: &str) {
    if is_image_question(question) && group == ITEMS_GROUP {
        question.image_choices.push(None);
    }
}

pub(crate) fn on_option_removed(question: &mut Question, group: &str, index: usize) {
    if is_image_question(question) && group == ITEMS_GROUP && index < question.image_choices.len() {
        question.image_choices.remove(index);
    }
}

/// Build the stored attachment for an upload, encoding the bytes the way the
/// browser's file reader would.
pub fn attachment_from_upload(bytes: &[u8], name: &str, mime_type: &str) -> ImageAttachment {
    ImageAttachment {
        data: format!("data:{mime_type};base64,{}", BASE64_STANDARD.encode(bytes)),
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        size: bytes.len() as u64,
        uploaded_at: Utc::now(),
    }
}

impl Builder {
    /// Store an uploaded image for the option at `index`. No-ops unless the
    /// current question is an image choice and the index is in range.
    pub async fn attach_image(&self, index: usize, attachment: ImageAttachment) -> bool {
        let mut workspace = self.lock_workspace().await;
        if !is_image_question(&workspace.current) {
            return false;
        }
        ensure_store(&mut workspace.current);
        let Some(slot) = workspace.current.image_choices.get_mut(index) else {
            return false;
        };
        *slot = Some(attachment);
        true
    }

    /// Drop the image for the option at `index`.
    pub async fn clear_image(&self, index: usize) -> bool {
        let mut workspace = self.lock_workspace().await;
        if !is_image_question(&workspace.current) {
            return false;
        }
        ensure_store(&mut workspace.current);
        let Some(slot) = workspace.current.image_choices.get_mut(index) else {
            return false;
        };
        *slot = None;
        true
    }
}

/// Upload controls for one editor row of the `items` group.
pub(crate) fn row_controls(
    question: &Question,
    group: &str,
    index: usize,
    locale: &str,
) -> Option<Markup> {
    if !is_image_question(question) || group != ITEMS_GROUP {
        return None;
    }
    let entry = question.image_choices.get(index).and_then(Option::as_ref);
    Some(html! {
        div class="image-upload-controls" {
            div class="image-upload-preview" {
                @if let Some(image) = entry {
                    img src=(image.data) alt=(t!("images.selected_alt", locale = locale));
                } @else {
                    div class="image-upload-placeholder" { (t!("images.none_yet", locale = locale)) }
                }
            }
            div class="image-upload-meta" {
                div class="image-upload-name" {
                    @if let Some(image) = entry {
                        (image.name)
                    } @else {
                        (t!("images.none_selected", locale = locale))
                    }
                }
                div class="image-upload-buttons" {
                    form hx-post=(names::image_url(index))
                        hx-encoding="multipart/form-data"
                        hx-trigger="change"
                        hx-target="#option-editor"
                        hx-swap="outerHTML" {
                        label class="ghost-btn image-upload-choose" {
                            (t!("images.choose", locale = locale))
                            input type="file" name="image" accept="image/*" class="image-upload-input" hidden;
                        }
                    }
                    button type="button"
                        class="ghost-btn image-upload-clear"
                        disabled[entry.is_none()]
                        hx-delete=(names::image_url(index))
                        hx-target="#option-editor"
                        hx-swap="outerHTML" {
                        (t!("images.clear", locale = locale))
                    }
                }
            }
        }
    })
}
