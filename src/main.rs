pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::page;
pub use modules::profile;

use crate::config::AppConfig;
use crate::page::application::use_cases::{RenderPageService, RevealSectionService};
use crate::page::application::PageUseCases;
use crate::profile::adapter::outgoing::{JsonFilePortfolioSource, StaticPortfolioSource};
use crate::profile::application::ports::outgoing::PortfolioSource;
use crate::shared::api::custom_query_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub page: PageUseCases,
    pub source: Arc<dyn PortfolioSource + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Loaded once; a failure is served as fallback content for the lifetime
    // of the process.
    let snapshot = JsonFilePortfolioSource::new(config.data_path.clone()).load().await;
    if let Err(e) = &snapshot {
        error!(
            "Portfolio data at {} unavailable: {}",
            config.data_path.display(),
            e
        );
    }
    let source = StaticPortfolioSource::from_result(snapshot);

    let state = AppState {
        page: PageUseCases {
            render: Arc::new(RenderPageService::new(source.clone(), config.page_size)),
            reveal: Arc::new(RevealSectionService::new(source.clone(), config.page_size)),
        },
        source: Arc::new(source),
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_query_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Page
    cfg.service(crate::page::adapter::incoming::web::routes::get_page_handler);
    cfg.service(crate::page::adapter::incoming::web::routes::reveal_section_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
