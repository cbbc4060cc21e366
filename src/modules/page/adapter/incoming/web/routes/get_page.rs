use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::warn;

use crate::AppState;

/// Full page. Served with 200 even when the data failed to load, since the
/// page itself carries the fallback messages.
#[get("/")]
pub async fn get_page_handler(data: web::Data<AppState>) -> impl Responder {
    let page = data.page.render.execute().await;
    if !page.data_loaded {
        warn!("Serving page without portfolio data");
    }
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::page::application::ports::incoming::use_cases::RenderedPage;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubRenderPageUseCase;

    #[actix_web::test]
    async fn test_get_page_returns_html() {
        let app_state = TestAppStateBuilder::default()
            .with_render_page(StubRenderPageUseCase::new(RenderedPage {
                html: "<!DOCTYPE html>\n<html></html>".to_string(),
                data_loaded: true,
            }))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_page_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        assert_eq!(body, "<!DOCTYPE html>\n<html></html>");
    }

    #[actix_web::test]
    async fn test_get_page_without_data_still_ok() {
        let app_state = TestAppStateBuilder::default()
            .with_render_page(StubRenderPageUseCase::new(RenderedPage {
                html: "<p class=\"load-error\">Portfolio failed to load</p>".to_string(),
                data_loaded: false,
            }))
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(get_page_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body)
            .unwrap()
            .contains("Portfolio failed to load"));
    }
}
