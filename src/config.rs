use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub platform: PlatformConfig,
    pub account: AccountConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlatformConfig {
    /// Base URL of the public games platform (public profile pages).
    pub web_base_url: String,
    pub discord_invite_url: String,
    pub github_repo_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    pub user_id: String,
    /// Bearer token; usually supplied via STUDIO_ACCOUNT__AUTH_TOKEN.
    pub auth_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub theme: ThemeKind,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Default,
    Dark,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_tick_rate_ms() -> u64 {
    200
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("STUDIO").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("STUDIO").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn auth_token(&self) -> anyhow::Result<String> {
        self.account
            .auth_token
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no auth token configured (set STUDIO_ACCOUNT__AUTH_TOKEN)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[api]
base_url = "https://api.example.test"

[platform]
web_base_url = "https://play.example.test"
discord_invite_url = "https://discord.gg/example"
github_repo_url = "https://github.com/example/studio"

[account]
user_id = "user-123"
auth_token = "secret"

[ui]
locale = "en"
theme = "dark"
"#;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url, "https://api.example.test");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.account.user_id, "user-123");
        assert_eq!(config.ui.theme, ThemeKind::Dark);
        assert_eq!(config.ui.tick_rate_ms, 200);
        assert_eq!(config.auth_token().unwrap(), "secret");
    }

    #[test]
    fn test_missing_auth_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.toml");
        let without_token = SAMPLE.replace("auth_token = \"secret\"\n", "");
        std::fs::write(&path, without_token).unwrap();

        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        assert!(config.auth_token().is_err());
    }
}
