//! Message catalog for user-visible copy.
//!
//! Every string shown in the TUI or CLI output goes through [`Catalog`],
//! keyed by [`MessageKey`]. Templates carry `{placeholder}` markers that
//! callers fill with [`fill`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
}

impl Locale {
    /// Parse a locale tag, falling back to English for anything unknown.
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Locale::En,
            _ => Locale::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    UsernamePrompt,
    EmailLabel,
    DiscordLabel,
    GithubLabel,
    BioLabel,
    DonateLabel,
    DiscordNoUsernameNotEligible,
    DiscordNoUsernameEligible,
    DiscordUpsellSuffix,
    GithubStarCta,
    NoBio,
    NoDonateLink,
    ProfileLoadError,
    ProfileLoading,
    RetryHint,
    ActionEditProfile,
    ActionChangeEmail,
    ActionPublicProfile,
    AlertDiscordUserNotFoundTitle,
    AlertDiscordUserNotFoundMessage,
    AlertSyncFailedTitle,
    AlertSyncFailedMessage,
    AlertDismissHint,
}

pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn text(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::En => en_text(key),
        }
    }
}

fn en_text(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        UsernamePrompt => "Edit your profile to pick a username!",
        EmailLabel => "Email",
        DiscordLabel => "Discord username",
        GithubLabel => "GitHub username",
        BioLabel => "Bio",
        DonateLabel => "Donate link",
        DiscordNoUsernameNotEligible => {
            "No Discord username defined. Add it and get a Gold, Pro or Education subscription to claim your role on the community Discord server ({discord})."
        }
        DiscordNoUsernameEligible => {
            "No Discord username defined. Add it to claim your role on the community Discord server ({discord})."
        }
        DiscordUpsellSuffix => {
            "Get a Gold or Pro subscription to claim your role on the community Discord server ({discord})."
        }
        GithubStarCta => {
            "Star the repository ({repo}) and add your GitHub username here to get {credits} free credits as a thank you!"
        }
        NoBio => "No bio defined.",
        NoDonateLink => "No link defined.",
        ProfileLoadError => {
            "Unable to load the profile, please verify your internet connection or try again later."
        }
        ProfileLoading => "Loading profile...",
        RetryHint => "Press r to retry",
        ActionEditProfile => "Edit my profile",
        ActionChangeEmail => "Change my email",
        ActionPublicProfile => "Access public profile",
        AlertDiscordUserNotFoundTitle => "Discord user not found",
        AlertDiscordUserNotFoundMessage => {
            "Ensure you don't have any typo in your username and that you have joined the community Discord server."
        }
        AlertSyncFailedTitle => "Discord username sync failed",
        AlertSyncFailedMessage => {
            "Something went wrong while syncing your Discord username. Please try again later."
        }
        AlertDismissHint => "Press Enter to dismiss",
    }
}

/// Replace `{name}` placeholders in a catalog template.
pub fn fill(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in substitutions {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(Locale::parse("fr"), Locale::En);
        assert_eq!(Locale::parse("EN-US"), Locale::En);
    }

    #[test]
    fn test_fill_replaces_placeholders() {
        let catalog = Catalog::new(Locale::En);
        let text = fill(
            catalog.text(MessageKey::GithubStarCta),
            &[("repo", "https://github.com/studio-dev/studio"), ("credits", "50")],
        );
        assert!(text.contains("50 free credits"));
        assert!(text.contains("https://github.com/studio-dev/studio"));
        assert!(!text.contains('{'));
    }
}
