use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::api::Identity;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
    #[serde(default, alias = "CURRENT_USER")]
    pub current_user: Option<Identity>,
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

fn read_global(name: &str) -> Option<RuntimeConfig> {
    // window.__PROCUREMENT_ENV = { API_BASE_URL: "...", LOG_LEVEL: "debug" }
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    parse_runtime_config(&json)
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    read_global("__PROCUREMENT_ENV").or_else(|| read_global("__PROCUREMENT_CONFIG"))
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(w) = window() else {
        return;
    };
    let Ok(json) = serde_json::to_string(cfg) else {
        return;
    };
    if let Ok(value) = js_sys::JSON::parse(&json) {
        let _ = js_sys::Reflect::set(&w, &"__PROCUREMENT_CONFIG".into(), &value);
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub fn parse_runtime_config(raw: &str) -> Option<RuntimeConfig> {
    serde_json::from_str::<RuntimeConfig>(raw).ok()
}

pub fn normalize_base_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_log_level(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|raw| raw.trim().parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info)
}

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg);
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

/// Resolves runtime configuration once: env.js globals, then `./config.json`,
/// then defaults.
pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache(existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        return cache(cfg);
    }
    cache(RuntimeConfig::default())
}

pub async fn await_api_base_url() -> String {
    let cfg = await_runtime_config().await;
    normalize_base_url(cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    log::set_max_level(parse_log_level(cfg.log_level.as_deref()));
    log::info!(
        "Runtime config initialized (api_base_url={})",
        normalize_base_url(cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_trailing_slashes() {
        assert_eq!(normalize_base_url("http://localhost:8080/api/"), "http://localhost:8080/api");
        assert_eq!(normalize_base_url("  "), "/api");
        assert_eq!(normalize_base_url("/api"), "/api");
    }

    #[test]
    fn parse_log_level_defaults_to_info() {
        assert_eq!(parse_log_level(None), log::LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(parse_log_level(Some("nonsense")), log::LevelFilter::Info);
    }

    #[test]
    fn runtime_config_accepts_env_js_key_casing() {
        let cfg = parse_runtime_config(
            r#"{"API_BASE_URL":"https://procure.example.com/api","LOG_LEVEL":"warn"}"#,
        )
        .unwrap();
        assert_eq!(
            cfg.api_base_url.as_deref(),
            Some("https://procure.example.com/api")
        );
        assert_eq!(cfg.log_level.as_deref(), Some("warn"));
        assert!(cfg.current_user.is_none());
    }

    #[test]
    fn runtime_config_can_carry_an_identity() {
        let cfg = parse_runtime_config(
            r#"{"api_base_url":"/api","current_user":{"id":"u-1","display_name":"Ops Admin"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.current_user.unwrap().id, "u-1");
    }
}
