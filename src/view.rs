use crate::i18n::{pick, Language, TextDirection};

pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self, language: Language) -> &'static str {
        match self.toggled() {
            Self::Dark => pick(language, "Switch to dark theme", "تغییر به حالت تاریک"),
            Self::Light => pick(language, "Switch to light theme", "تغییر به حالت روشن"),
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewConfig {
    pub language: Language,
    pub theme: Theme,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub dir: TextDirection,
    pub lang: &'static str,
    pub font_family: &'static str,
    pub dark: bool,
}

impl ViewConfig {
    pub fn new(language: Language, theme: Theme) -> Self {
        Self { language, theme }
    }

    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn document_attributes(self) -> DocumentAttributes {
        DocumentAttributes {
            dir: self.language.direction(),
            lang: self.language.as_str(),
            font_family: self.language.font_family(),
            dark: self.theme.is_dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_attributes_follow_language_and_theme_only() {
        let view = ViewConfig::new(Language::Fa, Theme::Dark);
        let attributes = view.document_attributes();

        assert_eq!(attributes.dir, TextDirection::Rtl);
        assert_eq!(attributes.lang, "fa");
        assert_eq!(attributes.font_family, "Vazirmatn, Inter, sans-serif");
        assert!(attributes.dark);

        let english = view.with_language(Language::En).with_theme(Theme::Light);
        let attributes = english.document_attributes();
        assert_eq!(attributes.dir, TextDirection::Ltr);
        assert_eq!(attributes.lang, "en");
        assert!(!attributes.dark);
    }

    #[test]
    fn same_inputs_produce_same_attributes() {
        let a = ViewConfig::new(Language::En, Theme::Dark).document_attributes();
        let b = ViewConfig::new(Language::En, Theme::Dark).document_attributes();
        assert_eq!(a, b);
    }

    #[test]
    fn theme_toggle_label_names_next_theme() {
        assert_eq!(Theme::Light.toggle_label(Language::En), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(Language::En), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(Language::Fa), "تغییر به حالت تاریک");
        assert_eq!(Theme::Dark.toggle_label(Language::Fa), "تغییر به حالت روشن");
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("sepia"), None);
    }
}
