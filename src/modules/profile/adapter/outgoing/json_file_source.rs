use crate::profile::{
    application::ports::outgoing::{PortfolioLoadError, PortfolioSource},
    domain::entities::Profile,
};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Name the bundle publishes the profile under.
pub const BINDING_NAME: &str = "portfolioData";

fn script_binding() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?:const|let|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*")
            .expect("script binding pattern is valid")
    })
}

/// Reads the data bundle from disk.
///
/// Accepts a bare JSON profile, a JSON object wrapping it under
/// `portfolioData`, or the script form `const portfolioData = {...};`
/// whose right-hand side is plain JSON.
#[derive(Debug, Clone)]
pub struct JsonFilePortfolioSource {
    path: PathBuf,
}

impl JsonFilePortfolioSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PortfolioSource for JsonFilePortfolioSource {
    async fn load(&self) -> Result<Profile, PortfolioLoadError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| {
                PortfolioLoadError::LoadFailure(format!("{}: {}", self.path.display(), err))
            })?;

        debug!(
            "Read {} bytes of portfolio data from {}",
            contents.len(),
            self.path.display()
        );

        let profile = parse_bundle(&contents)?;
        info!("Loaded portfolio data from {}", self.path.display());
        Ok(profile)
    }
}

pub fn parse_bundle(contents: &str) -> Result<Profile, PortfolioLoadError> {
    let trimmed = contents.trim_start_matches('\u{feff}').trim();

    let body = match script_binding().captures(trimmed) {
        Some(caps) => {
            let name = &caps[1];
            if name != BINDING_NAME {
                return Err(PortfolioLoadError::SchemaMissing(format!(
                    "expected binding `{}`, found `{}`",
                    BINDING_NAME, name
                )));
            }
            let rest = &trimmed[caps[0].len()..];
            rest.trim_end().trim_end_matches(';')
        }
        None => trimmed,
    };

    let value: Value = serde_json::from_str(body)
        .map_err(|err| PortfolioLoadError::LoadFailure(format!("invalid JSON: {}", err)))?;

    let value = match value {
        Value::Object(mut map) if map.contains_key(BINDING_NAME) => {
            map.remove(BINDING_NAME).unwrap_or(Value::Null)
        }
        other => other,
    };

    if !value.is_object() {
        return Err(PortfolioLoadError::SchemaMissing(format!(
            "`{}` is not an object",
            BINDING_NAME
        )));
    }

    serde_json::from_value(value)
        .map_err(|err| PortfolioLoadError::SchemaMissing(err.to_string()))
}
