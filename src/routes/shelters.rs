use actix_web::{web, HttpResponse, Responder};

use crate::models::{ErrorResponse, ShelterListQuery};
use crate::services::shelters;

/// Configure shelter directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/shelters", web::get().to(list_shelters))
        .route("/shelters/{id}", web::get().to(get_shelter));
}

/// Shelter directory, optionally narrowed to one city
///
/// GET /api/shelters?city=臺北市
async fn list_shelters(query: web::Query<ShelterListQuery>) -> impl Responder {
    let shelters: Vec<&shelters::Shelter> = match query.city.as_deref() {
        Some(city) => shelters::all().iter().filter(|s| s.city == city).collect(),
        None => shelters::all().iter().collect(),
    };

    HttpResponse::Ok().json(shelters)
}

/// Single shelter lookup
///
/// GET /api/shelters/{id}
async fn get_shelter(path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match shelters::by_id(id) {
        Some(shelter) => HttpResponse::Ok().json(shelter),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Shelter not found".to_string(),
            message: format!("No shelter with id {}", id),
            status_code: 404,
        }),
    }
}
