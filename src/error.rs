use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use crate::view;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Could not decode the uploaded file as an image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Unsupported file extension \"{0}\", expected jpg, jpeg or png")]
    UnsupportedExtension(String),
    #[error("Model inference failed: {0}")]
    Inference(#[from] tch::TchError),
    #[error("Failed to render the confidence gauge: {0}")]
    Render(image::ImageError),
    #[error("Failed to read the uploaded file: {0}")]
    Upload(String),
}

/// Fatal startup error. The server never comes up without a usable model,
/// so this is reported once from `main` and not part of the request cycle.
#[derive(Debug, thiserror::Error)]
#[error("Failed to load model from {path}: {source}")]
pub struct ModelLoadError {
    pub path: String,
    #[source]
    pub source: tch::TchError,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::UnsupportedExtension(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Inference(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/html; charset=utf-8")
            .body(view::error_page(&self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn decode_errors_are_unprocessable() {
        let err = AppError::Decode(image::ImageError::Unsupported(
            image::error::UnsupportedError::from_format_and_kind(
                image::error::ImageFormatHint::Unknown,
                image::error::UnsupportedErrorKind::GenericFeature("not an image".into()),
            ),
        ));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unsupported_extension_names_the_offender() {
        let err = AppError::UnsupportedExtension("gif".into());
        assert!(err.to_string().contains("gif"));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
