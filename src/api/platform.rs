//! URL builders for the public games platform.

use crate::config::PlatformConfig;

/// Public profile page for a user. Profiles with a username get the
/// vanity route; the id route covers the rest.
pub fn user_public_profile_url(
    platform: &PlatformConfig,
    user_id: &str,
    username: Option<&str>,
) -> String {
    let base = platform.web_base_url.trim_end_matches('/');
    match username.filter(|name| !name.is_empty()) {
        Some(name) => format!("{base}/{name}"),
        None => format!("{base}/user/{user_id}"),
    }
}

pub fn profile_settings_url(platform: &PlatformConfig) -> String {
    format!(
        "{}/settings/profile",
        platform.web_base_url.trim_end_matches('/')
    )
}

pub fn email_settings_url(platform: &PlatformConfig) -> String {
    format!(
        "{}/settings/email",
        platform.web_base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> PlatformConfig {
        PlatformConfig {
            web_base_url: "https://play.example.test/".to_string(),
            discord_invite_url: "https://discord.gg/example".to_string(),
            github_repo_url: "https://github.com/example/studio".to_string(),
        }
    }

    #[test]
    fn test_public_profile_url_prefers_username() {
        assert_eq!(
            user_public_profile_url(&platform(), "user-1", Some("alice")),
            "https://play.example.test/alice"
        );
    }

    #[test]
    fn test_public_profile_url_falls_back_to_id() {
        assert_eq!(
            user_public_profile_url(&platform(), "user-1", None),
            "https://play.example.test/user/user-1"
        );
        assert_eq!(
            user_public_profile_url(&platform(), "user-1", Some("")),
            "https://play.example.test/user/user-1"
        );
    }
}
