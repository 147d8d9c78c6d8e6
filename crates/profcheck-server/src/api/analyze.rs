//! `POST /analyze` handler.
//!
//! Accepts `multipart/form-data` with an optional `image` file part and the
//! text parts `followers`, `following`, `posts`, `username`, `bio`,
//! `posted_same_day`. Any failure returns `500 {"error": "..."}` and no
//! partial result.

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use profcheck_core::{ClassificationVerdict, CoreError, FieldOverrides, RawOverrides};
use profcheck_ocr::{OcrEngine, OcrError};
use serde::Serialize;
use thiserror::Error;

use super::AppState;
use crate::middleware::RequestId;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("malformed form data: {0}")]
    Form(String),

    #[error("OCR failed: {0}")]
    Ocr(#[from] OcrError),

    #[error(transparent)]
    Override(#[from] CoreError),
}

impl From<MultipartError> for AnalyzeError {
    fn from(e: MultipartError) -> Self {
        Self::Form(e.body_text())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Form fields after reading the whole multipart body.
#[derive(Debug, Default)]
struct AnalyzeForm {
    image: Option<Vec<u8>>,
    raw: RawOverrides,
    posted_same_day: bool,
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AnalyzeError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was chosen.
                if !bytes.is_empty() {
                    form.image = Some(bytes.to_vec());
                }
            }
            "posted_same_day" => form.posted_same_day = field.text().await? == "true",
            "followers" => form.raw.followers = Some(field.text().await?),
            "following" => form.raw.following = Some(field.text().await?),
            "posts" => form.raw.posts = Some(field.text().await?),
            "username" => form.raw.username = Some(field.text().await?),
            "bio" => form.raw.bio = Some(field.text().await?),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    Ok(form)
}

/// Host adapter: OCR, coercion, then the analyzer. Errors are values here;
/// the analyzer itself cannot fail.
async fn run_analysis(
    ocr: &dyn OcrEngine,
    form: AnalyzeForm,
) -> Result<ClassificationVerdict, AnalyzeError> {
    let lines = match form.image {
        Some(image) => profcheck_analyzer::to_lines(&ocr.recognize(&image).await?),
        None => Vec::new(),
    };
    let overrides = FieldOverrides::from_raw(form.raw)?;

    Ok(profcheck_analyzer::analyze(
        &lines,
        &overrides,
        form.posted_same_day,
    ))
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassificationVerdict>, AnalyzeError> {
    let outcome = async {
        let multipart = multipart.map_err(|e| AnalyzeError::Form(e.body_text()))?;
        let form = read_form(multipart).await?;
        tracing::info!(
            request_id = %req_id.0,
            has_image = form.image.is_some(),
            posted_same_day = form.posted_same_day,
            "analyze request"
        );
        run_analysis(state.ocr.as_ref(), form).await
    }
    .await;

    match outcome {
        Ok(verdict) => {
            tracing::info!(
                request_id = %req_id.0,
                result = %verdict.result,
                reasons = verdict.explanation.len(),
                "analyze complete"
            );
            Ok(Json(verdict))
        }
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "analyze failed");
            Err(e)
        }
    }
}
