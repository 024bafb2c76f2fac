use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};

use super::AppState;
use crate::core::explain::annotate_top_matches;
use crate::models::{ErrorResponse, MatchAnswers, MatchResponse};

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(calculate_match));
}

/// Match quiz endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "space": "large|medium|small",
///   "activity": "high|moderate|low",
///   "experience": "experienced|some|none",
///   "time": "plenty|moderate|limited",
///   "preference": "狗|貓|any"
/// }
/// ```
async fn calculate_match(
    state: web::Data<AppState>,
    answers: web::Json<MatchAnswers>,
) -> impl Responder {
    let answers = answers.into_inner();

    let animals = match state.directory.fetch_animals().await {
        Ok(animals) => animals,
        Err(e) => {
            tracing::error!("Failed to fetch animal feed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to calculate match".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let mut outcome = state.matcher.rank(&animals, &answers);

    tracing::info!(
        "Ranked {} candidates into {} matches",
        outcome.total_considered,
        outcome.matches.len()
    );

    // The ranked order is final here; annotation only fills in rationales
    // for the leading subset and absorbs every collaborator failure.
    if let Some(generator) = &state.generator {
        annotate_top_matches(
            Arc::clone(generator),
            &answers,
            &mut outcome.matches,
            state.explain_top,
        )
        .await;
    }

    let top_match = outcome.top_match().cloned();
    let response = MatchResponse {
        matches: outcome.matches,
        top_match,
        total_considered: outcome.total_considered,
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, web::Data, App};

    use super::*;
    use crate::core::Matcher;
    use crate::services::DirectoryClient;

    const FEED_BODY: &str = r#"[
        {"animal_id": 1, "animal_kind": "狗", "animal_bodytype": "BIG", "animal_age": "CHILD", "album_file": "https://img.example/1.jpg"},
        {"animal_id": 2, "animal_kind": "狗", "animal_bodytype": "MEDIUM", "animal_age": "ADULT", "album_file": "https://img.example/2.jpg"},
        {"animal_id": 3, "animal_kind": "狗", "animal_bodytype": "SMALL", "animal_age": "ADULT", "album_file": ""},
        {"animal_id": 4, "animal_kind": "貓", "animal_bodytype": "SMALL", "animal_age": "ADULT", "album_file": "https://img.example/4.jpg"}
    ]"#;

    fn test_state(server: &mockito::ServerGuard) -> Data<AppState> {
        Data::new(AppState {
            directory: Arc::new(DirectoryClient::new(format!("{}/feed", server.url()), 5, 60)),
            matcher: Matcher::new(6),
            generator: None,
            explain_top: 3,
        })
    }

    #[actix_web::test]
    async fn test_match_endpoint_returns_ranked_result() {
        let mut server = mockito::Server::new_async().await;
        let _feed = server
            .mock("GET", "/feed")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(FEED_BODY)
            .create_async()
            .await;

        let app = test::init_service(
            App::new().app_data(test_state(&server)).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({
                "space": "large",
                "activity": "high",
                "experience": "experienced",
                "time": "plenty",
                "preference": "狗"
            }))
            .to_request();
        let body: MatchResponse = test::call_and_read_body_json(&app, req).await;

        // The photo-less dog and the cat never enter the pool.
        assert_eq!(body.total_considered, 2);
        assert_eq!(body.matches.len(), 2);
        let top = body.top_match.unwrap();
        assert_eq!(top.animal.animal_id, 1);
        assert_eq!(top.match_score, 100);
        // No collaborator configured, so no rationales anywhere.
        assert!(body.matches.iter().all(|m| m.ai_reason.is_none()));
    }

    #[actix_web::test]
    async fn test_match_endpoint_rejects_partial_answers() {
        let server = mockito::Server::new_async().await;

        let app = test::init_service(
            App::new().app_data(test_state(&server)).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({
                "space": "large",
                "activity": "high"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_match_endpoint_maps_feed_failure_to_500() {
        let mut server = mockito::Server::new_async().await;
        let _feed = server
            .mock("GET", "/feed")
            .with_status(502)
            .create_async()
            .await;

        let app = test::init_service(
            App::new().app_data(test_state(&server)).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/match")
            .set_json(serde_json::json!({
                "space": "medium",
                "activity": "moderate",
                "experience": "some",
                "time": "moderate",
                "preference": "any"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
