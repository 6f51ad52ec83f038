//! Community link table: fixed display order, per-platform URL prefixes
//! and the short icon tag each line is rendered with.

use crate::profile::model::CommunityLinks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityLinkKey {
    PersonalWebsite,
    PersonalWebsite2,
    Twitter,
    Facebook,
    Youtube,
    Tiktok,
    Instagram,
    Reddit,
    Snapchat,
    DiscordServer,
}

pub struct CommunityLinkSpec {
    pub key: CommunityLinkKey,
    pub icon: &'static str,
    /// Handle-based platforms get prefix + handle; `None` means the
    /// stored value is already a full URL and is used verbatim.
    pub prefix: Option<&'static str>,
}

pub const TWITTER_PREFIX: &str = "https://twitter.com/";

/// Display order of the community links block.
pub const COMMUNITY_LINKS: &[CommunityLinkSpec] = &[
    CommunityLinkSpec {
        key: CommunityLinkKey::PersonalWebsite,
        icon: "web",
        prefix: None,
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::PersonalWebsite2,
        icon: "web",
        prefix: None,
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::Twitter,
        icon: "tw",
        prefix: Some(TWITTER_PREFIX),
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::Facebook,
        icon: "fb",
        prefix: Some("https://facebook.com/"),
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::Youtube,
        icon: "yt",
        prefix: Some("https://youtube.com/"),
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::Tiktok,
        icon: "tt",
        prefix: Some("https://tiktok.com/@"),
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::Instagram,
        icon: "ig",
        prefix: Some("https://instagram.com/"),
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::Reddit,
        icon: "rd",
        prefix: Some("https://www.reddit.com/user/"),
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::Snapchat,
        icon: "sc",
        prefix: Some("https://www.snapchat.com/add/"),
    },
    CommunityLinkSpec {
        key: CommunityLinkKey::DiscordServer,
        icon: "dc",
        prefix: None,
    },
];

/// A community-link line ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub icon: &'static str,
    pub url: String,
}

/// Resolve a profile's links into displayable lines, in display order.
/// Entries with no value (or an empty one) are omitted entirely.
pub fn resolve_community_links(links: &CommunityLinks) -> Vec<ResolvedLink> {
    COMMUNITY_LINKS
        .iter()
        .filter_map(|spec| {
            let value = raw_value(links, spec.key)?;
            if value.is_empty() {
                return None;
            }
            let url = match spec.prefix {
                Some(prefix) => format!("{prefix}{value}"),
                None => value.to_string(),
            };
            Some(ResolvedLink {
                icon: spec.icon,
                url,
            })
        })
        .collect()
}

fn raw_value(links: &CommunityLinks, key: CommunityLinkKey) -> Option<&str> {
    match key {
        CommunityLinkKey::PersonalWebsite => links.personal_website_link.as_deref(),
        CommunityLinkKey::PersonalWebsite2 => links.personal_website2_link.as_deref(),
        CommunityLinkKey::Twitter => links.twitter_username.as_deref(),
        CommunityLinkKey::Facebook => links.facebook_username.as_deref(),
        CommunityLinkKey::Youtube => links.youtube_username.as_deref(),
        CommunityLinkKey::Tiktok => links.tiktok_username.as_deref(),
        CommunityLinkKey::Instagram => links.instagram_username.as_deref(),
        CommunityLinkKey::Reddit => links.reddit_username.as_deref(),
        CommunityLinkKey::Snapchat => links.snapchat_username.as_deref(),
        CommunityLinkKey::DiscordServer => links.discord_server_link.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_twitter_handle_resolves_with_prefix() {
        let links = CommunityLinks {
            twitter_username: Some("foo".to_string()),
            ..Default::default()
        };

        let resolved = resolve_community_links(&links);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].url, format!("{TWITTER_PREFIX}foo"));
    }

    #[test]
    fn test_empty_mapping_resolves_to_no_lines() {
        assert!(resolve_community_links(&CommunityLinks::default()).is_empty());
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let links = CommunityLinks {
            twitter_username: Some(String::new()),
            discord_server_link: Some(String::new()),
            ..Default::default()
        };
        assert!(resolve_community_links(&links).is_empty());
    }

    #[test]
    fn test_links_keep_display_order() {
        let links = CommunityLinks {
            discord_server_link: Some("https://discord.gg/mygame".to_string()),
            personal_website_link: Some("https://alice.example".to_string()),
            reddit_username: Some("alice".to_string()),
            ..Default::default()
        };

        let resolved = resolve_community_links(&links);
        let urls: Vec<&str> = resolved.iter().map(|link| link.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://alice.example",
                "https://www.reddit.com/user/alice",
                "https://discord.gg/mygame",
            ]
        );
    }

    #[test]
    fn test_site_and_server_links_are_verbatim() {
        let links = CommunityLinks {
            personal_website_link: Some("https://alice.example/home".to_string()),
            discord_server_link: Some("https://discord.gg/mygame".to_string()),
            ..Default::default()
        };

        let resolved = resolve_community_links(&links);
        assert_eq!(resolved[0].url, "https://alice.example/home");
        assert_eq!(resolved[1].url, "https://discord.gg/mygame");
    }
}
