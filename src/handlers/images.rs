use axum::{
    extract::{Multipart, Path, State},
    routing::post,
    Router,
};

use crate::{extractors::Locale, image_choice, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/image/{index}", post(upload_image).delete(clear_image))
}

/// Store an uploaded image for one image-choice option. A submitted form
/// without a file clears the slot, and so does a failed read; the editor is
/// re-rendered either way.
async fn upload_image(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(index): Path<usize>,
    multipart: Multipart,
) -> maud::Markup {
    match read_image_field(multipart).await {
        Ok(Some(upload)) => {
            let attachment =
                image_choice::attachment_from_upload(&upload.bytes, &upload.name, &upload.mime_type);
            state.builder.attach_image(index, attachment).await;
        }
        Ok(None) => {
            state.builder.clear_image(index).await;
        }
        Err(error) => {
            tracing::error!("could not read uploaded image: {error}");
            state.builder.clear_image(index).await;
        }
    }
    super::option_editor_markup(&state.builder, &locale).await
}

async fn clear_image(
    State(state): State<AppState>,
    Locale(locale): Locale,
    Path(index): Path<usize>,
) -> maud::Markup {
    state.builder.clear_image(index).await;
    super::option_editor_markup(&state.builder, &locale).await
}

struct ImageUpload {
    bytes: axum::body::Bytes,
    name: String,
    mime_type: String,
}

/// The first `image` part with a filename, or `None` for an empty input.
async fn read_image_field(
    mut multipart: Multipart,
) -> Result<Option<ImageUpload>, axum::extract::multipart::MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        if name.is_empty() {
            return Ok(None);
        }
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(ImageUpload { bytes, name, mime_type }));
    }
    Ok(None)
}
