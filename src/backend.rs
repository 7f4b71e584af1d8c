use std::{
    cmp::Ordering,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DIST_DIR: &str = "dist";

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_port(name: &str, default: u16) -> u16 {
    parse_env_value(std::env::var(name).ok(), default)
}

fn parse_env_value(raw: Option<String>, default: u16) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(default)
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn log_event(configured: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < configured {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

/// Serves the built frontend. The page itself makes no API calls; everything
/// under `dist/` (including the resume PDF) is plain static content, with
/// `index.html` as the not-found fallback.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = parse_env_port("PORT", DEFAULT_PORT);
    let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);
    let bind_address = format!("0.0.0.0:{port}");

    let index_fallback = ServeFile::new(format!("{DIST_DIR}/index.html"));
    let static_service = ServeDir::new(DIST_DIR).not_found_service(index_fallback);
    let app = Router::new().fallback_service(static_service);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        log_level,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "port": port,
            "dist_dir": DIST_DIR,
        }),
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parsing_accepts_valid_values() {
        assert_eq!(parse_env_value(Some("3000".to_string()), DEFAULT_PORT), 3000);
        assert_eq!(parse_env_value(Some(" 9090 ".to_string()), DEFAULT_PORT), 9090);
    }

    #[test]
    fn port_parsing_falls_back_on_garbage() {
        assert_eq!(parse_env_value(None, DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_env_value(Some("".to_string()), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_env_value(Some("not-a-port".to_string()), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_env_value(Some("0".to_string()), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_env_value(Some("70000".to_string()), DEFAULT_PORT), DEFAULT_PORT);
    }

    #[test]
    fn log_levels_order_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }
}
