//! Share links for the news detail dialog.

use serde::{Deserialize, Serialize};
use urlencoding::encode;

/// Supported share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Vk,
    Telegram,
    Twitter,
    Linkedin,
}

impl SharePlatform {
    /// Parse a `data-share` value.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vk" => Some(SharePlatform::Vk),
            "telegram" => Some(SharePlatform::Telegram),
            "twitter" => Some(SharePlatform::Twitter),
            "linkedin" => Some(SharePlatform::Linkedin),
            _ => None,
        }
    }

    /// Share URL for a page. LinkedIn takes no title.
    pub fn share_url(&self, url: &str, title: &str) -> String {
        match self {
            SharePlatform::Vk => format!(
                "https://vk.com/share.php?url={}&title={}",
                encode(url),
                encode(title)
            ),
            SharePlatform::Telegram => format!(
                "https://t.me/share/url?url={}&text={}",
                encode(url),
                encode(title)
            ),
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encode(url),
                encode(title)
            ),
            SharePlatform::Linkedin => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                encode(url)
            ),
        }
    }
}
