use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    portfolio_data: &'static str,
}

/// LIVENESS CHECK
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS CHECK
/// - Checks that the portfolio data snapshot loaded
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.source.load().await {
        Ok(_) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            portfolio_data: "ok",
        }),
        Err(_) => HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            portfolio_data: "unavailable",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::profile::adapter::outgoing::StaticPortfolioSource;
    use crate::profile::application::ports::outgoing::PortfolioLoadError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_ready_when_data_loaded() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(readiness),
        )
        .await;
        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["portfolio_data"], "ok");
    }

    #[actix_web::test]
    async fn test_not_ready_when_data_failed() {
        let state = TestAppStateBuilder::default()
            .with_source(StaticPortfolioSource::failed(
                PortfolioLoadError::LoadFailure("no such file".into()),
            ))
            .build();
        let app = test::init_service(App::new().app_data(state).service(readiness)).await;
        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["portfolio_data"], "unavailable");
    }
}
