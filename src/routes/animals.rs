use std::collections::HashSet;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use super::AppState;
use crate::models::{Animal, AnimalListQuery, AnimalListResponse, ErrorResponse, StatsResponse};

/// Configure animal listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/animals", web::get().to(list_animals))
        .route("/animals/{id}", web::get().to(get_animal))
        .route("/stats", web::get().to(get_stats));
}

/// Paginated animal listing with attribute filters
///
/// GET /api/animals?type=狗&city=臺北&sex=M&size=SMALL&age=ADULT&page=1&limit=20
async fn list_animals(
    state: web::Data<AppState>,
    query: web::Query<AnimalListQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let animals = match state.directory.fetch_animals().await {
        Ok(animals) => animals,
        Err(e) => {
            tracing::error!("Failed to fetch animal feed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch animals".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let filtered: Vec<&Animal> = animals
        .iter()
        .filter(|a| query.kind.as_deref().map_or(true, |kind| a.animal_kind == kind))
        .filter(|a| {
            query.city.as_deref().map_or(true, |city| {
                a.shelter_address.contains(city) || a.shelter_name.contains(city)
            })
        })
        .filter(|a| query.sex.as_deref().map_or(true, |sex| a.animal_sex == sex))
        .filter(|a| query.size.as_deref().map_or(true, |size| a.animal_bodytype == size))
        .filter(|a| query.age.as_deref().map_or(true, |age| a.animal_age == age))
        .collect();

    let total = filtered.len();
    let total_pages = total.div_ceil(query.limit);
    let start = (query.page - 1) * query.limit;

    let data: Vec<Animal> = filtered
        .into_iter()
        .skip(start)
        .take(query.limit)
        .cloned()
        .collect();

    HttpResponse::Ok().json(AnimalListResponse {
        data,
        total,
        page: query.page,
        limit: query.limit,
        total_pages,
    })
}

/// Single animal lookup
///
/// GET /api/animals/{id}
async fn get_animal(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    let animals = match state.directory.fetch_animals().await {
        Ok(animals) => animals,
        Err(e) => {
            tracing::error!("Failed to fetch animal feed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch animal".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    match animals.iter().find(|a| a.animal_id == id) {
        Some(animal) => HttpResponse::Ok().json(animal),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Animal not found".to_string(),
            message: format!("No animal with id {}", id),
            status_code: 404,
        }),
    }
}

/// Feed statistics
///
/// GET /api/stats
async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let animals = match state.directory.fetch_animals().await {
        Ok(animals) => animals,
        Err(e) => {
            tracing::error!("Failed to fetch animal feed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch stats".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let dogs = animals.iter().filter(|a| a.is_dog()).count();
    let cats = animals.iter().filter(|a| a.is_cat()).count();
    let shelters = animals
        .iter()
        .map(|a| a.shelter_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    HttpResponse::Ok().json(StatsResponse {
        total: animals.len(),
        dogs,
        cats,
        shelters,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web::Data, App};

    use super::*;
    use crate::core::Matcher;
    use crate::services::DirectoryClient;

    const FEED_BODY: &str = r#"[
        {"animal_id": 1, "animal_kind": "狗", "animal_sex": "M", "shelter_name": "臺北市動物之家", "album_file": "https://img.example/1.jpg"},
        {"animal_id": 2, "animal_kind": "狗", "animal_sex": "F", "shelter_name": "臺北市動物之家", "album_file": "https://img.example/2.jpg"},
        {"animal_id": 3, "animal_kind": "狗", "animal_sex": "F", "shelter_name": "新北市板橋動物之家", "album_file": "https://img.example/3.jpg"},
        {"animal_id": 4, "animal_kind": "貓", "animal_sex": "M", "shelter_name": "新北市板橋動物之家", "album_file": "https://img.example/4.jpg"},
        {"animal_id": 5, "animal_kind": "貓", "animal_sex": "F", "shelter_name": "基隆市寵物銀行", "album_file": ""}
    ]"#;

    fn test_state(server: &mockito::ServerGuard) -> Data<AppState> {
        Data::new(AppState {
            directory: Arc::new(DirectoryClient::new(format!("{}/feed", server.url()), 5, 60)),
            matcher: Matcher::new(6),
            generator: None,
            explain_top: 3,
        })
    }

    fn mock_feed(server: &mut mockito::ServerGuard) -> mockito::Mock {
        server
            .mock("GET", "/feed")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(FEED_BODY)
    }

    #[actix_web::test]
    async fn test_listing_filters_and_paginates() {
        let mut server = mockito::Server::new_async().await;
        let _feed = mock_feed(&mut server).create_async().await;
        let state = test_state(&server);

        let app =
            test::init_service(App::new().app_data(state).configure(configure)).await;

        // type=狗, percent-encoded
        let req = test::TestRequest::get()
            .uri("/animals?type=%E7%8B%97&page=1&limit=2")
            .to_request();
        let body: AnimalListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 3);
        assert_eq!(body.total_pages, 2);
        assert_eq!(body.data.len(), 2);
        assert!(body.data.iter().all(|a| a.is_dog()));

        let req = test::TestRequest::get()
            .uri("/animals?type=%E7%8B%97&page=2&limit=2")
            .to_request();
        let body: AnimalListResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.data.len(), 1);
        assert_eq!(body.data[0].animal_id, 3);
    }

    #[actix_web::test]
    async fn test_listing_rejects_out_of_range_paging() {
        let mut server = mockito::Server::new_async().await;
        let _feed = mock_feed(&mut server).create_async().await;
        let state = test_state(&server);

        let app =
            test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/animals?limit=500")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_stats_counts_kinds_and_shelters() {
        let mut server = mockito::Server::new_async().await;
        let _feed = mock_feed(&mut server).create_async().await;
        let state = test_state(&server);

        let app =
            test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/stats").to_request();
        let body: StatsResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.total, 5);
        assert_eq!(body.dogs, 3);
        assert_eq!(body.cats, 2);
        assert_eq!(body.shelters, 3);
    }
}
