//! Known social platforms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms the renderer ships an icon for.
///
/// Unknown names fail to deserialize, so a typo in `quill.toml` is caught
/// at load time instead of silently rendering a link without an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Github,
    #[serde(rename = "CV")]
    Cv,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
}

impl SocialPlatform {
    pub const ALL: [Self; 21] = [
        Self::Github,
        Self::Cv,
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::Mail,
        Self::Twitter,
        Self::Twitch,
        Self::YouTube,
        Self::WhatsApp,
        Self::Snapchat,
        Self::Pinterest,
        Self::TikTok,
        Self::CodePen,
        Self::Discord,
        Self::GitLab,
        Self::Reddit,
        Self::Skype,
        Self::Steam,
        Self::Telegram,
        Self::Mastodon,
    ];

    /// Name as written in `quill.toml`, also the icon key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Cv => "CV",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::Twitter => "Twitter",
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::TikTok => "TikTok",
            Self::CodePen => "CodePen",
            Self::Discord => "Discord",
            Self::GitLab => "GitLab",
            Self::Reddit => "Reddit",
            Self::Skype => "Skype",
            Self::Steam => "Steam",
            Self::Telegram => "Telegram",
            Self::Mastodon => "Mastodon",
        }
    }

    /// Link title template used when an entry does not set `link_title`.
    pub fn default_title_template(&self) -> String {
        match self {
            Self::Github | Self::LinkedIn => format!("{{author}} on {}", self.as_str()),
            Self::Cv => "{author} CV".to_string(),
            Self::Mail => "Send an email to {author}".to_string(),
            _ => format!("{{title}} on {}", self.as_str()),
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
