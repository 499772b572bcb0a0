// src/server.rs
use actix_files::Files;
use actix_web::{web, HttpResponse, Result};
use log::{debug, error, info};
use std::path::Path;

use crate::config::AppConfig;
use crate::render::render_results;
use crate::services::store::{CompanyFilter, CompanyStore};
use crate::types::{SearchField, SearchParams};

/// Form page used when `home.html` is missing from the static directory.
pub const HOME_PAGE: &str = include_str!("../views/home.html");

pub const PROCESS_ERROR: &str = "An error occurred while processing your request.";

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

/// Registers `/` and `/process`. Static files are mounted separately with [`static_files`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/process", web::get().to(process));
}

pub fn static_files(static_dir: &str) -> Files {
    Files::new("/", static_dir)
}

pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    let path = Path::new(&state.config.static_dir).join("home.html");
    let body = match tokio::fs::read_to_string(&path).await {
        Ok(body) => body,
        Err(e) => {
            debug!("Serving built-in form page ({}: {})", path.display(), e);
            HOME_PAGE.to_string()
        }
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn process(
    query: web::Query<SearchParams>,
    store: web::Data<dyn CompanyStore>,
) -> Result<HttpResponse> {
    let params = query.into_inner();
    let search = params.search.as_deref().unwrap_or("");

    let Some(field) = SearchField::from_param(params.field.as_deref()) else {
        debug!("No search field selected (type={:?})", params.field);
        return Ok(html(render_results(&[])));
    };

    let results = match CompanyFilter::new(field, search) {
        Ok(filter) => store.find(&filter).await,
        Err(e) => Err(e),
    };

    match results {
        Ok(companies) => {
            info!(
                "Search {}='{}' returned {} companies",
                field.as_str(),
                search,
                companies.len()
            );
            Ok(html(render_results(&companies)))
        }
        Err(e) => {
            error!("Error processing request: {}", e);
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(PROCESS_ERROR))
        }
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
