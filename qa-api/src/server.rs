use crate::config::{ApiConfig, CorsConfig};
use crate::handlers::AppState;
use crate::routes::configure_routes;
use crate::storage::{QaStorage, SqliteQaStorage};
use actix_cors::Cors;
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{http::header, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;

fn build_cors(config: Option<&CorsConfig>) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    let origins = config.map(|c| c.allowed_origins.as_slice()).unwrap_or_default();
    if origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let storage = SqliteQaStorage::open(&config.database.path)?;
    info!(path = %config.database.path.display(), "Database ready");

    let state = web::Data::new(AppState::new(
        Arc::new(storage) as Arc<dyn QaStorage>,
        config.pagination,
    ));
    let cors_config = config.cors.clone();
    let bind_addr = config.bind_addr();

    info!("Starting qa-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(build_cors(cors_config.as_ref()))
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
