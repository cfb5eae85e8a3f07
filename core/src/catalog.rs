use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Twitch,
    Instagram,
    TikTok,
    Discord,
    YouTube,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitch => "twitch",
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::Discord => "discord",
            Platform::YouTube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gradient endpoints and shadow tint for one social button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub from: &'static str,
    pub to: &'static str,
    pub shadow: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialChannel {
    pub name: &'static str,
    pub platform: Platform,
    pub url: &'static str,
    pub colors: ColorScheme,
}

impl SocialChannel {
    pub fn aria_label(&self) -> String {
        format!("Visit {} on {}", self.name, self.platform)
    }

    /// Stable render key; names repeat across platforms so the index is part of it.
    pub fn key(&self, index: usize) -> String {
        format!("{}-{}-{}", self.platform, self.name, index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub avatar_src: &'static str,
    pub avatar_alt: &'static str,
}

impl ProfileInfo {
    pub fn monogram(&self) -> String {
        self.name
            .chars()
            .find(|ch| ch.is_alphanumeric())
            .map(|ch| ch.to_uppercase().collect())
            .unwrap_or_default()
    }
}

pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";
pub const NAV_LABEL: &str = "Social media links";
pub const BUTTON_STAGGER_MS: u32 = 100;

pub const PROFILE: ProfileInfo = ProfileInfo {
    name: "zSimonn",
    title: "Content Creator & Twitch Moderator",
    avatar_src: "/logo.png",
    avatar_alt: "zSimonn Logo",
};

pub const SOCIAL_CHANNELS: &[SocialChannel] = &[
    SocialChannel {
        name: "7Simonn",
        platform: Platform::Twitch,
        url: "https://twitch.tv/7simonn",
        colors: ColorScheme {
            from: "#9146FF",
            to: "#6441A5",
            shadow: "rgba(145, 70, 255, 0.25)",
        },
    },
    SocialChannel {
        name: "ulrsimon",
        platform: Platform::Instagram,
        url: "https://instagram.com/ulrsimon",
        colors: ColorScheme {
            from: "#833AB4",
            to: "#FD1D1D",
            shadow: "rgba(225, 48, 108, 0.25)",
        },
    },
    SocialChannel {
        name: "zSimonn",
        platform: Platform::TikTok,
        url: "https://www.tiktok.com/@zsimonn",
        colors: ColorScheme {
            from: "#FF0050",
            to: "#00F2EA",
            shadow: "rgba(255, 0, 80, 0.25)",
        },
    },
    SocialChannel {
        name: "Simon's Lounge",
        platform: Platform::Discord,
        url: "https://discord.gg/9Gx43wBddD",
        colors: ColorScheme {
            from: "#5865F2",
            to: "#4752C4",
            shadow: "rgba(88, 101, 242, 0.25)",
        },
    },
    SocialChannel {
        name: "7Simonn",
        platform: Platform::YouTube,
        url: "https://www.youtube.com/@7simonn",
        colors: ColorScheme {
            from: "#FF0000",
            to: "#CC0000",
            shadow: "rgba(255, 0, 0, 0.25)",
        },
    },
];

pub fn button_animation_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(BUTTON_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_keys_are_unique() {
        let mut keys: Vec<String> = SOCIAL_CHANNELS
            .iter()
            .enumerate()
            .map(|(index, channel)| channel.key(index))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), SOCIAL_CHANNELS.len());
    }

    #[test]
    fn aria_label_names_channel_and_platform() {
        let label = SOCIAL_CHANNELS[3].aria_label();
        assert_eq!(label, "Visit Simon's Lounge on discord");
    }

    #[test]
    fn monogram_uses_first_alphanumeric() {
        assert_eq!(PROFILE.monogram(), "Z");
    }
}
