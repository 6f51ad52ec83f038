use serde::{Deserialize, Serialize};

/// Profile snapshot served by the user service. Only `id` is guaranteed;
/// every other field is "not set by the user" when absent, not an error.
/// `email`, `is_email_autogenerated` and `community_links` only appear on
/// the owner's private view of the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayedProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Bio text.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub donate_link: Option<String>,
    #[serde(default)]
    pub discord_username: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub is_email_autogenerated: Option<bool>,
    #[serde(default)]
    pub community_links: Option<CommunityLinks>,
}

/// Optional social/personal links attached to a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityLinks {
    #[serde(default)]
    pub personal_website_link: Option<String>,
    #[serde(default)]
    pub personal_website2_link: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub facebook_username: Option<String>,
    #[serde(default)]
    pub youtube_username: Option<String>,
    #[serde(default)]
    pub tiktok_username: Option<String>,
    #[serde(default)]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub reddit_username: Option<String>,
    #[serde(default)]
    pub snapchat_username: Option<String>,
    #[serde(default)]
    pub discord_server_link: Option<String>,
}

/// Subscription tier descriptor; only consumed to decide eligibility for
/// the Discord role perk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default)]
    pub plan_id: Option<String>,
}

/// Plans that unlock the role on the community Discord server.
pub const DISCORD_ROLE_PLAN_IDS: &[&str] = &["gold", "pro", "education"];

pub fn can_benefit_from_discord_role(subscription: Option<&Subscription>) -> bool {
    subscription
        .and_then(|subscription| subscription.plan_id.as_deref())
        .map(|plan_id| DISCORD_ROLE_PLAN_IDS.contains(&plan_id))
        .unwrap_or(false)
}

/// Unlockable credit reward record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub reward_value_in_credits: u64,
}

pub const GITHUB_STAR_ACHIEVEMENT_ID: &str = "github-star";

pub fn github_star_achievement(achievements: &[Achievement]) -> Option<&Achievement> {
    achievements
        .iter()
        .find(|achievement| achievement.id == GITHUB_STAR_ACHIEVEMENT_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_from_service_payload() {
        let profile: DisplayedProfile = serde_json::from_str(
            r#"{
                "id": "user-1",
                "email": "a@b.com",
                "username": "alice",
                "description": "makes games",
                "donateLink": "https://ko-fi.example/alice",
                "discordUsername": "alice#1234",
                "githubUsername": null,
                "isEmailAutogenerated": false,
                "communityLinks": { "twitterUsername": "alice_dev" }
            }"#,
        )
        .unwrap();

        assert_eq!(profile.id, "user-1");
        assert_eq!(profile.email.as_deref(), Some("a@b.com"));
        assert_eq!(profile.donate_link.as_deref(), Some("https://ko-fi.example/alice"));
        assert!(profile.github_username.is_none());
        let links = profile.community_links.unwrap();
        assert_eq!(links.twitter_username.as_deref(), Some("alice_dev"));
        assert!(links.facebook_username.is_none());
    }

    #[test]
    fn test_public_profile_omits_private_fields() {
        let profile: DisplayedProfile =
            serde_json::from_str(r#"{"id": "user-2", "username": "bob"}"#).unwrap();
        assert!(profile.email.is_none());
        assert!(profile.is_email_autogenerated.is_none());
        assert!(profile.community_links.is_none());
    }

    #[test]
    fn test_discord_role_eligibility() {
        let gold = Subscription {
            plan_id: Some("gold".to_string()),
        };
        let free = Subscription { plan_id: None };

        assert!(can_benefit_from_discord_role(Some(&gold)));
        assert!(!can_benefit_from_discord_role(Some(&free)));
        assert!(!can_benefit_from_discord_role(None));
        assert!(!can_benefit_from_discord_role(Some(&Subscription {
            plan_id: Some("silver".to_string()),
        })));
    }

    #[test]
    fn test_github_star_achievement_lookup() {
        let achievements = vec![
            Achievement {
                id: "first-game".to_string(),
                reward_value_in_credits: 10,
            },
            Achievement {
                id: "github-star".to_string(),
                reward_value_in_credits: 50,
            },
        ];

        assert_eq!(
            github_star_achievement(&achievements).map(|a| a.reward_value_in_credits),
            Some(50)
        );
        assert!(github_star_achievement(&achievements[..1]).is_none());
    }
}
