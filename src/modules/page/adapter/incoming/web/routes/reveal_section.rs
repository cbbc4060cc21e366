use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    page::{
        application::{
            ports::incoming::use_cases::RevealSectionError, services::bootstrap::failure_element,
        },
        domain::Section,
    },
    shared::{api::ApiResponse, dom::Document},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct RevealQuery {
    pub shown: usize,
}

/// Next page of one section as an HTML fragment for the section's mount.
#[get("/sections/{section}/more")]
pub async fn reveal_section_handler(
    path: web::Path<String>,
    query: web::Query<RevealQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();
    let section: Section = match slug.parse() {
        Ok(section) => section,
        Err(_) => {
            return ApiResponse::not_found(
                "SECTION_NOT_FOUND",
                &format!("Unknown section '{}'", slug),
            )
        }
    };

    match data.page.reveal.execute(section, query.shown).await {
        Ok(fragment) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(fragment.html),

        Err(RevealSectionError::DataUnavailable(err)) => {
            error!("Reveal of {} failed: {}", section, err);
            let doc = Document::new(failure_element(section));
            HttpResponse::ServiceUnavailable()
                .content_type(ContentType::html())
                .body(doc.outer_html(doc.root()))
        }
    }
}
