pub const FULL_NAME: &str = "Amirhossein Maleki";
pub const EMAIL: &str = "mr.amirhosseinmaleki@gmail.com";
pub const PHONE: &str = "+98 901 407 7602";
pub const GITHUB_PROFILE: &str = "https://github.com/AHM-ID";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Telegram,
}

impl SocialKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::GitHub => "gh",
            Self::LinkedIn => "in",
            Self::Telegram => "✈",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::GitHub => "social--github",
            Self::LinkedIn => "social--linkedin",
            Self::Telegram => "social--telegram",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::GitHub,
        name: "GitHub",
        href: GITHUB_PROFILE,
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/ahm-id/",
    },
    SocialLink {
        kind: SocialKind::Telegram,
        name: "Telegram",
        href: "https://t.me/AHM_ID",
    },
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

pub fn tel() -> String {
    format!("tel:{PHONE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::hero::HERO;

    #[test]
    fn social_row_links_github_linkedin_telegram() {
        let hrefs: Vec<_> = SOCIAL_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(
            hrefs,
            [
                "https://github.com/AHM-ID",
                "https://www.linkedin.com/in/ahm-id/",
                "https://t.me/AHM_ID",
            ]
        );
    }

    #[test]
    fn splash_name_matches_english_hero() {
        assert_eq!(FULL_NAME, HERO.en.name);
    }
}
