//! Handlers for palm reading analysis and retrieval.

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use palmlens_core::error::CoreError;
use palmlens_core::fortune::generate_reading;
use palmlens_core::language::Language;
use palmlens_storage::models::CreatePalmReading;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads::MAX_UPLOAD_SIZE_BYTES;

/// Multipart form field names accepted by the upload endpoint.
const FIELD_IMAGE: &str = "palmImage";
const FIELD_LANGUAGE: &str = "language";
const FIELD_BIRTH_DATE: &str = "birthDate";

/// The buffered upload, collected before any validation verdict.
struct UploadForm {
    image: Option<(Option<String>, Option<String>, Bytes)>,
    language: Option<String>,
    birth_date: Option<String>,
}

/// POST /api/palm-reading
///
/// Accept a multipart palm photo upload, run the mock analysis, persist
/// the reading, and return it. The image is validated (presence, MIME
/// type, magic bytes, size cap) before the generator runs; its content is
/// never inspected beyond that.
pub async fn analyze_palm(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = collect_form(multipart).await?;

    let (filename, content_type, data) = form
        .image
        .ok_or_else(|| AppError::BadRequest("No image file provided".to_string()))?;

    // Mirror the upload filter of the original deployment: image MIME
    // types only, 5 MiB cap. The magic-byte sniff catches mislabelled
    // payloads the MIME header alone would let through.
    if !content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("image/"))
    {
        return Err(AppError::BadRequest(
            "Only image files are allowed".to_string(),
        ));
    }
    if data.len() > MAX_UPLOAD_SIZE_BYTES {
        return Err(AppError::BadRequest(
            "File too large. Maximum size is 5MB".to_string(),
        ));
    }
    image::guess_format(&data)
        .map_err(|_| AppError::BadRequest("Only image files are allowed".to_string()))?;

    let language = Language::parse_or_default(form.language.as_deref().unwrap_or(""));
    let birth_date = form.birth_date.filter(|d| !d.trim().is_empty());

    let content = {
        let mut rng = rand::rng();
        generate_reading(&mut rng, language, birth_date.as_deref())
    };

    let image_url = state
        .uploads
        .save(filename.as_deref(), &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    let reading = state
        .storage
        .create_palm_reading(CreatePalmReading {
            image_url,
            birth_date,
            love_score: content.love_score,
            money_score: content.money_score,
            health_score: content.health_score,
            love_reading: content.love_reading,
            money_reading: content.money_reading,
            health_reading: content.health_reading,
            features: content.features,
            advice: content.advice,
            today_fortune: Some(content.today_fortune),
            new_year_fortune: Some(content.new_year_fortune),
            mbti_prediction: Some(content.mbti_prediction),
        })
        .await?;

    tracing::info!(
        reading_id = %reading.id,
        language = language.code(),
        size_bytes = data.len(),
        "Palm reading created",
    );

    Ok((StatusCode::CREATED, Json(reading)))
}

/// GET /api/palm-reading/{id}
pub async fn get_palm_reading(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let reading = state
        .storage
        .get_palm_reading(&id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Palm reading",
            id,
        }))?;

    Ok(Json(reading))
}

/// Drain the multipart stream into an [`UploadForm`], buffering the image
/// bytes. Unknown fields are ignored.
async fn collect_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm {
        image: None,
        language: None,
        birth_date: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // Copy the name out; reading the field body consumes it.
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some(FIELD_IMAGE) => {
                let filename = field.file_name().map(ToString::to_string);
                let content_type = field.content_type().map(ToString::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.image = Some((filename, content_type, data));
            }
            Some(FIELD_LANGUAGE) => {
                form.language = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            Some(FIELD_BIRTH_DATE) => {
                form.birth_date = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    Ok(form)
}
