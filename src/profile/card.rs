//! Pure derivation of the profile card view model.
//!
//! [`ProfileCard::resolve`] turns the nullable profile snapshot into a
//! fully-populated struct so rendering never propagates nulls: absent
//! fields become fallback copy or explicit flags here.

use crate::api::avatar::{avatar_url, PROFILE_AVATAR_SIZE};
use crate::api::platform::user_public_profile_url;
use crate::config::PlatformConfig;
use crate::i18n::{fill, Catalog, MessageKey};
use crate::profile::community::{resolve_community_links, ResolvedLink};
use crate::profile::model::{
    can_benefit_from_discord_role, github_star_achievement, Achievement, DisplayedProfile,
    Subscription,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DiscordSection {
    pub body: String,
    /// The sync control exists only when the subscription is eligible AND
    /// a Discord username is set.
    pub sync_available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub display_name: String,
    /// True when the display name is the "pick a username" prompt; the
    /// rendering de-emphasizes it.
    pub display_name_is_fallback: bool,
    pub avatar_url: String,
    /// Present only on the owner's private view; no email block otherwise.
    pub email: Option<String>,
    pub discord: DiscordSection,
    pub github_text: String,
    pub bio_text: String,
    pub community_links: Vec<ResolvedLink>,
    pub donate_text: String,
    pub change_email_enabled: bool,
    pub public_profile_url: String,
}

impl ProfileCard {
    pub fn resolve(
        profile: &DisplayedProfile,
        subscription: Option<&Subscription>,
        achievements: &[Achievement],
        catalog: &Catalog,
        platform: &PlatformConfig,
    ) -> Self {
        let username = profile.username.as_deref().filter(|name| !name.is_empty());
        let (display_name, display_name_is_fallback) = match username {
            Some(name) => (name.to_string(), false),
            None => (catalog.text(MessageKey::UsernamePrompt).to_string(), true),
        };

        let eligible = can_benefit_from_discord_role(subscription);
        let discord_username = profile
            .discord_username
            .as_deref()
            .filter(|name| !name.is_empty());
        let discord_substitutions = [("discord", platform.discord_invite_url.as_str())];
        let discord_body = match (discord_username, eligible) {
            (None, false) => fill(
                catalog.text(MessageKey::DiscordNoUsernameNotEligible),
                &discord_substitutions,
            ),
            (None, true) => fill(
                catalog.text(MessageKey::DiscordNoUsernameEligible),
                &discord_substitutions,
            ),
            (Some(name), true) => name.to_string(),
            (Some(name), false) => format!(
                "{} - {}",
                name,
                fill(
                    catalog.text(MessageKey::DiscordUpsellSuffix),
                    &discord_substitutions,
                )
            ),
        };

        let github_username = profile
            .github_username
            .as_deref()
            .filter(|name| !name.is_empty());
        let github_text = match github_username {
            Some(name) => name.to_string(),
            None => {
                let credits = github_star_achievement(achievements)
                    .map(|achievement| achievement.reward_value_in_credits.to_string())
                    .unwrap_or_else(|| "-".to_string());
                fill(
                    catalog.text(MessageKey::GithubStarCta),
                    &[
                        ("repo", platform.github_repo_url.as_str()),
                        ("credits", credits.as_str()),
                    ],
                )
            }
        };

        let bio_text = profile
            .description
            .clone()
            .filter(|bio| !bio.is_empty())
            .unwrap_or_else(|| catalog.text(MessageKey::NoBio).to_string());

        let donate_text = profile
            .donate_link
            .clone()
            .filter(|link| !link.is_empty())
            .unwrap_or_else(|| catalog.text(MessageKey::NoDonateLink).to_string());

        let community_links = profile
            .community_links
            .as_ref()
            .map(resolve_community_links)
            .unwrap_or_default();

        ProfileCard {
            display_name,
            display_name_is_fallback,
            avatar_url: avatar_url(
                profile.email.as_deref().unwrap_or(""),
                PROFILE_AVATAR_SIZE,
            ),
            email: profile.email.clone(),
            discord: DiscordSection {
                body: discord_body,
                sync_available: eligible && discord_username.is_some(),
            },
            github_text,
            bio_text,
            community_links,
            donate_text,
            change_email_enabled: !profile.is_email_autogenerated.unwrap_or(false),
            public_profile_url: user_public_profile_url(platform, &profile.id, username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::profile::model::CommunityLinks;

    fn platform() -> PlatformConfig {
        PlatformConfig {
            web_base_url: "https://play.example.test".to_string(),
            discord_invite_url: "https://discord.gg/example".to_string(),
            github_repo_url: "https://github.com/example/studio".to_string(),
        }
    }

    fn profile() -> DisplayedProfile {
        DisplayedProfile {
            id: "user-1".to_string(),
            email: Some("a@b.com".to_string()),
            username: Some("alice".to_string()),
            description: Some("makes games".to_string()),
            donate_link: None,
            discord_username: Some("alice#1234".to_string()),
            github_username: None,
            is_email_autogenerated: Some(false),
            community_links: None,
        }
    }

    fn gold() -> Subscription {
        Subscription {
            plan_id: Some("gold".to_string()),
        }
    }

    fn resolve(
        profile: &DisplayedProfile,
        subscription: Option<&Subscription>,
        achievements: &[Achievement],
    ) -> ProfileCard {
        ProfileCard::resolve(
            profile,
            subscription,
            achievements,
            &Catalog::new(Locale::En),
            &platform(),
        )
    }

    #[test]
    fn test_display_name_uses_username_at_full_emphasis() {
        let card = resolve(&profile(), None, &[]);
        assert_eq!(card.display_name, "alice");
        assert!(!card.display_name_is_fallback);
    }

    #[test]
    fn test_display_name_falls_back_to_prompt() {
        let mut no_username = profile();
        no_username.username = None;

        let card = resolve(&no_username, None, &[]);
        assert_eq!(card.display_name, "Edit your profile to pick a username!");
        assert!(card.display_name_is_fallback);
    }

    #[test]
    fn test_email_block_only_for_private_view() {
        let card = resolve(&profile(), None, &[]);
        assert_eq!(card.email.as_deref(), Some("a@b.com"));

        let mut public = profile();
        public.email = None;
        let card = resolve(&public, None, &[]);
        assert!(card.email.is_none());
    }

    #[test]
    fn test_avatar_url_is_a_function_of_the_email() {
        let card_a = resolve(&profile(), None, &[]);
        let card_b = resolve(&profile(), None, &[]);
        assert_eq!(card_a.avatar_url, card_b.avatar_url);

        let mut other = profile();
        other.email = Some("c@d.com".to_string());
        assert_ne!(resolve(&other, None, &[]).avatar_url, card_a.avatar_url);
    }

    #[test]
    fn test_discord_no_username_not_eligible_combines_both_calls_to_action() {
        let mut p = profile();
        p.discord_username = None;

        let card = resolve(&p, None, &[]);
        assert!(card.discord.body.contains("Add it and get a Gold, Pro or Education"));
        assert!(card.discord.body.contains("https://discord.gg/example"));
        assert!(!card.discord.sync_available);
    }

    #[test]
    fn test_discord_no_username_eligible_prompts_only_for_username() {
        let mut p = profile();
        p.discord_username = None;

        let card = resolve(&p, Some(&gold()), &[]);
        assert!(card.discord.body.starts_with("No Discord username defined. Add it to claim"));
        assert!(!card.discord.sync_available);
    }

    #[test]
    fn test_discord_username_eligible_shows_it_plainly_with_sync_control() {
        let card = resolve(&profile(), Some(&gold()), &[]);
        assert_eq!(card.discord.body, "alice#1234");
        assert!(card.discord.sync_available);
    }

    #[test]
    fn test_discord_username_not_eligible_appends_upsell() {
        let card = resolve(&profile(), None, &[]);
        assert!(card.discord.body.starts_with("alice#1234 - "));
        assert!(card.discord.body.contains("Gold or Pro subscription"));
        assert!(!card.discord.sync_available);
    }

    #[test]
    fn test_github_block_carries_reward_credits() {
        let achievements = vec![Achievement {
            id: "github-star".to_string(),
            reward_value_in_credits: 50,
        }];

        let card = resolve(&profile(), None, &achievements);
        assert!(card.github_text.contains("50"));
        assert!(card.github_text.contains("https://github.com/example/studio"));
    }

    #[test]
    fn test_github_block_falls_back_to_dash_without_achievement() {
        let card = resolve(&profile(), None, &[]);
        assert!(card.github_text.contains("get - free credits"));
    }

    #[test]
    fn test_github_username_shown_plainly_when_set() {
        let mut p = profile();
        p.github_username = Some("alice-gh".to_string());
        let card = resolve(&p, None, &[]);
        assert_eq!(card.github_text, "alice-gh");
    }

    #[test]
    fn test_bio_and_donate_fallbacks() {
        let mut p = profile();
        p.description = None;
        p.donate_link = None;

        let card = resolve(&p, None, &[]);
        assert_eq!(card.bio_text, "No bio defined.");
        assert_eq!(card.donate_text, "No link defined.");
    }

    #[test]
    fn test_community_links_flow_into_the_card() {
        let mut p = profile();
        p.community_links = Some(CommunityLinks {
            twitter_username: Some("foo".to_string()),
            ..Default::default()
        });

        let card = resolve(&p, None, &[]);
        assert_eq!(card.community_links.len(), 1);
        assert_eq!(card.community_links[0].url, "https://twitter.com/foo");

        let mut empty = profile();
        empty.community_links = Some(CommunityLinks::default());
        assert!(resolve(&empty, None, &[]).community_links.is_empty());
    }

    #[test]
    fn test_change_email_disabled_for_autogenerated_email() {
        let mut p = profile();
        p.is_email_autogenerated = Some(true);
        assert!(!resolve(&p, None, &[]).change_email_enabled);

        assert!(resolve(&profile(), None, &[]).change_email_enabled);
    }

    #[test]
    fn test_public_profile_url_built_from_id_and_username() {
        let card = resolve(&profile(), None, &[]);
        assert_eq!(card.public_profile_url, "https://play.example.test/alice");

        let mut no_username = profile();
        no_username.username = None;
        let card = resolve(&no_username, None, &[]);
        assert_eq!(card.public_profile_url, "https://play.example.test/user/user-1");
    }
}
