use sha2::{Digest, Sha256};

/// Avatar size used by the profile card.
pub const PROFILE_AVATAR_SIZE: u32 = 40;

/// Build the avatar URL for an email address.
///
/// The avatar service addresses images by the hex SHA-256 of the
/// lowercase, trimmed email, so the URL is a deterministic function of
/// the email string. Profiles without an email hash the empty string.
pub fn avatar_url(email: &str, size: u32) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{}?s={}&d=identicon",
        hex::encode(digest),
        size
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_is_deterministic() {
        assert_eq!(avatar_url("a@b.com", 40), avatar_url("a@b.com", 40));
        assert_ne!(avatar_url("a@b.com", 40), avatar_url("c@d.com", 40));
    }

    #[test]
    fn test_avatar_url_normalizes_email() {
        assert_eq!(avatar_url(" A@B.com ", 40), avatar_url("a@b.com", 40));
    }

    #[test]
    fn test_avatar_url_carries_size() {
        assert!(avatar_url("a@b.com", 40).contains("s=40"));
    }

    #[test]
    fn test_empty_email_still_yields_a_url() {
        let url = avatar_url("", 40);
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
    }
}
