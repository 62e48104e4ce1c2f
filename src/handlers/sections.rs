use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use maud::html;
use rust_i18n::t;

use crate::{
    extractors::Locale,
    models::Sections,
    state::SectionError,
    views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/section", post(save_section))
        .route("/section/{index}/edit", get(edit_section))
        .route("/section/{index}", delete(delete_section))
        .route("/finish", post(finish))
        .route("/export", get(export))
}

/// Save the current question as a section. Success resets the workspace and
/// refreshes the sections panel out of band; a validation failure re-renders
/// the workspace with an alert and leaves the draft untouched.
async fn save_section(State(state): State<AppState>, Locale(locale): Locale) -> maud::Markup {
    match state.builder.save_section().await {
        Ok(()) => {
            let workspace = super::workspace_markup(&state.builder, None, &locale).await;
            let sections = state.builder.sections().await;
            html! {
                (workspace)
                (views::sections::panel_oob(&sections, &locale))
            }
        }
        Err(error) => {
            let message = validation_message(&error, &locale);
            super::workspace_markup(&state.builder, Some(&message), &locale).await
        }
    }
}

fn validation_message(error: &SectionError, locale: &str) -> String {
    match error {
        SectionError::MissingTitle => t!("validate.missing_title", locale = locale).into_owned(),
        SectionError::TooFewEntries { label, min } => {
            t!("validate.min_entries", locale = locale, min = min, label = label).into_owned()
        }
    }
}

async fn edit_section(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(index): Path<usize>,
) -> maud::Markup {
    state.builder.edit_section(index).await;
    super::workspace_markup(&state.builder, None, &locale).await
}

async fn delete_section(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(index): Path<usize>,
) -> maud::Markup {
    state.builder.delete_section(index).await;
    let sections = state.builder.sections().await;
    views::sections::panel(&sections, &locale)
}

async fn finish(State(state): State<AppState>, Locale(locale): Locale) -> maud::Markup {
    let entries = state.builder.finish().await;
    views::sections::finish_summary(&entries, &locale)
}

/// The assembled survey as JSON, in section order.
async fn export(State(state): State<AppState>) -> Json<Sections> {
    Json(state.builder.sections().await)
}
