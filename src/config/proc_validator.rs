//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - server bind address, metrics route, logging level, token wiring

use tracing::{error, info};

use crate::config::settings::{LoggingConfig, MetricsConfig, ServerConfig};
use crate::config::types::{ServiceConfig, TokenConfig};
use crate::generator::GeneratorKind;
use crate::server::routes::TOKENS_PATH;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_server(&cfg.settings.server, &mut errors);
    validate_metrics(&cfg.settings.metrics, &mut errors);
    if let Some(logging) = &cfg.settings.logging {
        validate_logging(logging, &mut errors);
    }
    validate_token(&cfg.token, &mut errors);

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config: {}", e);
        }
        Err(errors)
    }
}

fn validate_server(server: &ServerConfig, errors: &mut Vec<String>) {
    if server.host.trim().is_empty() {
        errors.push("settings.server.host must not be empty".to_string());
    }
    match server.port.parse::<u16>() {
        Ok(0) => errors.push("settings.server.port must not be 0".to_string()),
        Ok(_) => {}
        Err(_) => errors.push(format!(
            "settings.server.port '{}' is not a valid port",
            server.port
        )),
    }
}

fn validate_metrics(metrics: &MetricsConfig, errors: &mut Vec<String>) {
    if !metrics.path.starts_with('/') {
        errors.push(format!(
            "settings.metrics.path '{}' must start with '/'",
            metrics.path
        ));
    }
    if metrics.path.contains(['{', '}', '*']) {
        errors.push(format!(
            "settings.metrics.path '{}' must not contain '{{', '}}' or '*'",
            metrics.path
        ));
    }
    if metrics.path.split('/').any(|segment| segment.starts_with(':')) {
        errors.push(format!(
            "settings.metrics.path '{}' segments must not start with ':'",
            metrics.path
        ));
    }
    if metrics.is_enabled && overlaps_token_routes(&metrics.path) {
        errors.push(format!(
            "settings.metrics.path '{}' collides with token routes",
            metrics.path
        ));
    }
}

fn overlaps_token_routes(path: &str) -> bool {
    path == TOKENS_PATH
        || path
            .strip_prefix(TOKENS_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "settings.logging.level '{}' must be one of {:?}",
            logging.level, LOG_LEVELS
        ));
    }
}

fn validate_token(token: &TokenConfig, errors: &mut Vec<String>) {
    if token.node_id.is_some() && token.generator != GeneratorKind::Sequence {
        errors.push(format!(
            "token.node_id is only valid for the 'sequence' generator, got '{}'",
            token.generator.as_str()
        ));
    }
}
