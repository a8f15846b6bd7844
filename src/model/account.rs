use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The social platforms a creator account can live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Tiktok,
    Instagram,
    X,
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::X => "x",
        };
        write!(f, "{}", name)
    }
}

/// A connected social-media account.
///
/// Accounts are created and mutated only by user action: connect, toggle
/// `auto_scan`, remove. The opportunistic scheduler reads the `auto_scan`
/// flag but never writes to accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub platform: Platform,
    /// Display handle, always stored with a leading `@`.
    pub username: String,
    pub connected: bool,
    pub followers: u32,
    /// Marks the account as eligible for unattended job creation.
    pub auto_scan: bool,
}

impl Account {
    /// Creates a connected account with `auto_scan` off. The handle is
    /// normalized to a leading `@`.
    pub fn new(
        id: impl Into<String>,
        platform: Platform,
        username: impl Into<String>,
        followers: u32,
    ) -> Self {
        let username = username.into();
        let username = if username.starts_with('@') {
            username
        } else {
            format!("@{}", username)
        };
        Self {
            id: id.into(),
            platform,
            username,
            connected: true,
            followers,
            auto_scan: false,
        }
    }
}

/// Payload for connecting a new account.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub platform: Platform,
    pub username: String,
    /// Seeded by the engagement simulator at the call site; the store
    /// itself stays free of randomness.
    pub followers: u32,
}
