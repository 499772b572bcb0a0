// src/bin/company_server.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::sync::Arc;

use company_search::services::importer::{seed_if_empty, ImportOutcome};
use company_search::{configure, static_files, AppConfig, AppState, CompanyStore, RedisCompanyStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // Nothing is served until the store answers.
    let store: Arc<dyn CompanyStore> = match RedisCompanyStore::connect(&config).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Error connecting to document store: {}", e);
            std::process::exit(1);
        }
    };

    match seed_if_empty(store.as_ref(), &config.seed_csv).await {
        Ok(ImportOutcome::Imported { count }) => info!("Seeded {} companies from {}", count, config.seed_csv),
        Ok(ImportOutcome::Skipped { existing }) => info!("Using existing {} companies", existing),
        Err(e) => error!("Error importing {}: {}", config.seed_csv, e),
    }

    let bind_address = config.bind_address();
    let static_dir = config.static_dir.clone();
    let state = web::Data::new(AppState::new(config));
    let store_data: web::Data<dyn CompanyStore> = web::Data::from(store);

    info!("🚀 Server is running on http://{}", bind_address);
    info!("  • GET /         - Search form");
    info!("  • GET /process  - Search results (?search=...&type=name|ticker)");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(store_data.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(static_files(&static_dir))
    })
    .shutdown_timeout(0)
    .bind(&bind_address)?
    .run()
    .await?;

    info!("Shutting down gracefully...");
    Ok(())
}
