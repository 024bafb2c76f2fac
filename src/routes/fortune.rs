use actix_web::{web, HttpResponse, Responder};

use super::AppState;
use crate::core::fortune;
use crate::models::{ErrorResponse, FortuneResponse};

/// Configure fortune routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/fortune/today", web::get().to(today));
}

/// Daily fortune draw
///
/// GET /api/fortune/today
///
/// The draw is seeded from today's date label, so every visitor sees the
/// same animal, slip and poem until midnight.
async fn today(state: web::Data<AppState>) -> impl Responder {
    let animals = match state.directory.fetch_animals().await {
        Ok(animals) => animals,
        Err(e) => {
            tracing::error!("Failed to fetch animal feed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate fortune".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let date_label = chrono::Local::now().format("%a %b %d %Y").to_string();

    match fortune::draw(&animals, &date_label) {
        Some(draw) => HttpResponse::Ok().json(FortuneResponse {
            animal: draw.animal.clone(),
            fortune: draw.slip,
            poem: draw.poem.to_string(),
            date: date_label,
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "No animals available".to_string(),
            message: "The feed has no animals with photos today".to_string(),
            status_code: 404,
        }),
    }
}
