mod error;
mod gauge;
mod inference;
mod routes;
mod view;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use gauge::GaugeRenderer;
use inference::classifier::{Classifier, TchClassifier};
use routes::configure_routes;
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| "pistachio_cnn.pt".to_string());

    // The model is a startup precondition: refuse to serve without it.
    let classifier: Arc<dyn Classifier> = match TchClassifier::load(&model_path) {
        Ok(classifier) => Arc::new(classifier),
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::other(format!("Model loading failed: {}", e)));
        }
    };
    let classifier = web::Data::from(classifier);
    let gauge = web::Data::new(GaugeRenderer::new());

    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_address = format!("0.0.0.0:{}", port);
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(classifier.clone())
            .app_data(gauge.clone())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
