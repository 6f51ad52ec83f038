use unicode_width::UnicodeWidthStr;

use crate::error::Result;

/// Truncate a string in the middle, keeping both ends, when it exceeds
/// `max_width` terminal columns.
pub fn truncate_middle(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width || max_width < 8 {
        return s.to_string();
    }
    let keep = (max_width - 3) / 2;
    let head: String = s.chars().take(keep).collect();
    let tail: String = s
        .chars()
        .rev()
        .take(keep)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{}...{}", head, tail)
}

/// Format timestamp in human-readable format
pub fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Opens a URL in the user's external browsing context.
#[cfg_attr(test, mockall::automock)]
pub trait UrlOpener: Send + Sync {
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default browser command.
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        let command = "open";
        #[cfg(target_os = "windows")]
        let command = "explorer";
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let command = "xdg-open";

        std::process::Command::new(command).arg(url).spawn()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_middle_short_string() {
        assert_eq!(truncate_middle("short", 40), "short");
    }

    #[test]
    fn test_truncate_middle_long_string() {
        let url = "https://play.example.test/some/very/long/profile/path";
        let truncated = truncate_middle(url, 24);
        assert!(truncated.starts_with("https://pl"));
        assert!(truncated.contains("..."));
        assert!(UnicodeWidthStr::width(truncated.as_str()) <= 24);
    }
}
