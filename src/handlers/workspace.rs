use axum::{
    extract::{Form, Path, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, Locale},
    names,
    rejections::{AppError, ResultExt},
    registry::QuestionType,
    utils, views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(builder_page))
        .route("/type/{slug}", post(select_type))
        .route("/content", patch(update_content))
        .route("/option/{group}/add", post(add_option))
        .route("/option/{group}/{index}", patch(edit_option).delete(remove_option))
        .route("/setting/{key}", patch(edit_setting))
        .route("/set-locale", post(set_locale))
}

async fn builder_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> maud::Markup {
    let view = state.builder.workspace().await;
    let sections = state.builder.sections().await;
    views::render(
        is_htmx,
        "Umfrage-Editor",
        views::editor::builder_page(&view, &sections, &locale),
        &locale,
    )
}

async fn select_type(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(slug): Path<String>,
) -> Result<maud::Markup, AppError> {
    let kind = QuestionType::from_slug(&slug).ok_or(AppError::Input("unknown question type"))?;
    state.builder.select_type(kind).await;
    Ok(super::workspace_markup(&state.builder, None, &locale).await)
}

#[derive(Deserialize)]
struct ContentPatch {
    title: Option<String>,
    description: Option<String>,
    info: Option<String>,
}

async fn update_content(
    State(state): State<AppState>,
    Form(body): Form<ContentPatch>,
) -> maud::Markup {
    if let Some(title) = body.title {
        state.builder.set_title(title).await;
    }
    if let Some(description) = body.description {
        state.builder.set_description(description).await;
    }
    if let Some(info) = body.info {
        state.builder.set_info(info).await;
    }
    super::preview_markup(&state.builder).await
}

async fn add_option(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(group): Path<String>,
) -> Result<maud::Markup, AppError> {
    known_group(&state, &group).await?;
    state.builder.add_option(&group).await;
    Ok(super::option_editor_markup(&state.builder, &locale).await)
}

async fn remove_option(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path((group, index)): Path<(String, usize)>,
) -> Result<maud::Markup, AppError> {
    known_group(&state, &group).await?;
    state.builder.remove_option(&group, index).await;
    Ok(super::option_editor_markup(&state.builder, &locale).await)
}

#[derive(Deserialize)]
struct ValuePatch {
    value: String,
}

async fn edit_option(
    State(state): State<AppState>,
    Path((group, index)): Path<(String, usize)>,
    Form(body): Form<ValuePatch>,
) -> Result<maud::Markup, AppError> {
    known_group(&state, &group).await?;
    state.builder.set_option(&group, index, body.value).await;
    Ok(super::preview_markup(&state.builder).await)
}

async fn edit_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Form(body): Form<ValuePatch>,
) -> Result<maud::Markup, AppError> {
    let known = state.builder.set_setting(&key, &body.value).await;
    if !known {
        return Err(AppError::Input("unknown settings field"));
    }
    Ok(super::preview_markup(&state.builder).await)
}

/// Mutations referencing option groups the current type does not have are
/// client desyncs, not no-ops.
async fn known_group(state: &AppState, group: &str) -> Result<(), AppError> {
    let selected = state.builder.selected_type().await;
    if selected.config().group(group).is_none() {
        return Err(AppError::Input("unknown option group"));
    }
    Ok(())
}

#[derive(Deserialize)]
struct SetLocaleBody {
    lang: String,
}

async fn set_locale(
    State(state): State<AppState>,
    Form(body): Form<SetLocaleBody>,
) -> Result<impl IntoResponse, AppError> {
    let locale = match body.lang.as_str() {
        "en" => "en",
        _ => "de",
    };
    let cookie = utils::cookie(names::LOCALE_COOKIE_NAME, locale, state.secure_cookies)
        .reject("could not build locale cookie")?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    headers.insert("HX-Refresh", HeaderValue::from_static("true"));

    Ok((headers, ""))
}
