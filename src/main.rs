mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod utils;

use actix_web::{web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use log::info;
use env_logger::Env;
use actix_web::middleware::Logger;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::PgActivityStore;
use crate::services::activity::ActivityService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    // Initialize the database pool and make sure the table exists
    let pool = db::connect(&config)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("Failed to connect to the database: {}", err)))?;
    let service = web::Data::new(ActivityService::new(Arc::new(PgActivityStore::new(pool))));

    // Set up Prometheus metrics
    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "activity_tracker".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .const_labels(labels)
        .build()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("Failed to create Prometheus metrics: {}", err)))?;

    info!(
        "Starting server at {} with {} workers, allowing origin {}",
        config.bind_address, config.workers, config.cors_allowed_origin
    );

    let allowed_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(handlers::cors(&allowed_origin))
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .app_data(service.clone())
            .configure(handlers::configure)
    })
    .workers(config.workers)
    .bind(&config.bind_address)?
    .run()
    .await
}
