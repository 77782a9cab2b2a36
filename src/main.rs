use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;

use leave_desk::middleware::CorrelationIdMiddleware;
use leave_desk::{leave_service, routes, Config, InMemoryBackend};

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init();

    let config = Config::from_env()?;
    log::info!(
        "Starting leave-desk for tenant {} (environment: {})",
        config.tenant_id,
        config.environment
    );

    let backend = match &config.seed_file {
        Some(path) => InMemoryBackend::load_seed_file(path)?,
        None => {
            log::warn!("SEED_FILE not set, starting with an empty backend");
            InMemoryBackend::new()
        }
    };

    let service_data = web::Data::new(leave_service(&config, backend));
    let config_data = web::Data::new(config.clone());
    let server_address = config.server_address();
    let allowed_origin = config.client_base_url.clone();

    log::info!("Listening on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(service_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&allowed_origin)
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        "Content-Type",
                        "Accept",
                        "X-Employee-Id",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(CorrelationIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
