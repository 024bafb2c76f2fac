// Route exports
pub mod animals;
pub mod fortune;
pub mod matches;
pub mod shelters;

use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};

use crate::core::Matcher;
use crate::models::HealthResponse;
use crate::services::{DirectoryClient, TextGenerator};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryClient>,
    pub matcher: Matcher,
    /// Absent when no text-generation collaborator is configured; match
    /// responses then simply carry no rationales.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub explain_top: usize,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api")
            .configure(matches::configure)
            .configure(animals::configure)
            .configure(fortune::configure)
            .configure(shelters::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
