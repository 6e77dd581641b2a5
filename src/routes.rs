use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use futures::{StreamExt, TryStreamExt};
use log::info;
use std::io::Write;

use crate::error::AppError;
use crate::gauge::GaugeRenderer;
use crate::inference::classifier::Classifier;
use crate::inference::{decision, preprocess};
use crate::view;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(index))
            .route(web::post().to(classify)),
    );
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Idle state: nothing uploaded yet, render the upload prompt only.
async fn index() -> HttpResponse {
    html(view::index_page())
}

/// One upload, one full pipeline run: decode, infer, decide, draw the gauge,
/// compose the page. No state survives the request.
async fn classify(
    classifier: web::Data<dyn Classifier>,
    gauge: web::Data<GaugeRenderer>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut image_data = Vec::new();
    let mut filename = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        if filename.is_none() {
            filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_owned);
        }
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| AppError::Upload(e.to_string()))?;
            image_data
                .write_all(&data)
                .map_err(|e| AppError::Upload(e.to_string()))?;
        }
    }

    if image_data.is_empty() {
        return Ok(html(view::index_page()));
    }

    let mime = mime_for_upload(filename.as_deref())?;

    let tensor = preprocess::load(&image_data)?;
    let probability = classifier.predict(&tensor)?;
    let prediction = decision::decide(probability);
    info!(
        "Classified upload as {} ({:.1}%)",
        prediction.label.as_str(),
        prediction.confidence
    );

    let gauge_png = gauge.render(prediction.confidence)?;
    Ok(html(view::result_page(
        mime,
        &STANDARD.encode(&image_data),
        prediction.label.as_str(),
        &STANDARD.encode(&gauge_png),
    )))
}

/// Maps the upload's extension to the MIME type used when re-embedding it.
/// Anything outside {jpg, jpeg, png} is rejected before decoding starts.
fn mime_for_upload(filename: Option<&str>) -> Result<&'static str, AppError> {
    let name = filename.unwrap_or_default();
    let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        _ => Err(AppError::UnsupportedExtension(extension)),
    }
}
