// ABOUTME: Credential discovery with precedence chain
// ABOUTME: CLI flag → credentials file → env var, per credential

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn resolve_canvas_token(cli_token: Option<String>) -> Result<String> {
    resolve(
        cli_token,
        "canvas_access_token",
        "CANVAS_ACCESS_TOKEN",
        "No Canvas token found. Provide via --token, the credentials file, or CANVAS_ACCESS_TOKEN env var",
    )
}

pub fn resolve_openai_key(cli_key: Option<String>) -> Result<String> {
    resolve(
        cli_key,
        "openai_api_key",
        "OPENAI_API_KEY",
        "No OpenAI key found. Provide via --openai-key, the credentials file, or OPENAI_API_KEY env var (or pass --raw to skip formatting)",
    )
}

fn resolve(
    cli_value: Option<String>,
    file_key: &str,
    env_key: &str,
    missing: &str,
) -> Result<String> {
    // 1. CLI flag
    if let Some(value) = cli_value {
        return Ok(value);
    }

    // 2. Credentials file
    if let Some(path) = credentials_path() {
        if let Some(value) = read_credential(&path, file_key)? {
            return Ok(value);
        }
    }

    // 3. Environment variable
    if let Ok(value) = env::var(env_key) {
        return Ok(value);
    }

    Err(Error::Auth(missing.into()))
}

fn credentials_path() -> Option<PathBuf> {
    let config_home = env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = env::var("HOME").unwrap_or_default();
        format!("{}/.config", home)
    });

    if config_home.is_empty() {
        return None;
    }

    Some(PathBuf::from(config_home).join("coursepress/credentials.json"))
}

fn read_credential(path: &Path, key: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;

    Ok(json
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string()))
}
