mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod state;
mod utils;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::io;
use std::sync::Arc;
use crate::config::{Config, StorageBackend};
use crate::db::{EmployeeRepository, MemoryEmployeeRepository, PgEmployeeRepository};
use crate::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let repo: Arc<dyn EmployeeRepository> = match &config.storage {
        StorageBackend::Postgres { database_url, max_connections } => {
            let pool = db::create_pool(database_url, *max_connections)
                .await
                .map_err(io::Error::other)?;
            info!("Connected to PostgreSQL");
            Arc::new(PgEmployeeRepository::new(pool))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; employees are lost on restart");
            Arc::new(MemoryEmployeeRepository::default())
        }
    };

    let state = web::Data::new(AppState::new(repo, config.store_timeout));
    let client_origin = config.client_origin.clone();

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&client_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
