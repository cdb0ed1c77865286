#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fa,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Language {
    #[cfg(test)]
    pub const ALL: [Language; 2] = [Language::En, Language::Fa];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fa => "fa",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "fa" => Some(Self::Fa),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Fa,
            Self::Fa => Self::En,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Fa => TextDirection::Rtl,
        }
    }

    pub fn font_family(self) -> &'static str {
        match self {
            Self::En => "Inter, sans-serif",
            Self::Fa => "Vazirmatn, Inter, sans-serif",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::En => "Change language",
            Self::Fa => "تغییر زبان",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bilingual<T> {
    pub en: T,
    pub fa: T,
}

impl<T> Bilingual<T> {
    pub const fn new(en: T, fa: T) -> Self {
        Self { en, fa }
    }

    pub fn select(&self, language: Language) -> &T {
        match language {
            Language::En => &self.en,
            Language::Fa => &self.fa,
        }
    }
}

pub fn pick(language: Language, en: &'static str, fa: &'static str) -> &'static str {
    match language {
        Language::En => en,
        Language::Fa => fa,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_returns_bundle_for_active_language() {
        let table = Bilingual::new("About Me", "درباره من");

        assert_eq!(*table.select(Language::En), "About Me");
        assert_eq!(*table.select(Language::Fa), "درباره من");
    }

    #[test]
    fn persian_is_right_to_left_with_its_own_font() {
        assert_eq!(Language::Fa.direction(), TextDirection::Rtl);
        assert!(Language::Fa.font_family().starts_with("Vazirmatn"));
        assert_eq!(Language::En.direction().as_str(), "ltr");
    }

    #[test]
    fn stored_language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_str(language.as_str()), Some(language));
        }
        assert_eq!(Language::from_str("de"), None);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }
}
