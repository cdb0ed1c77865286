use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub anchor: &'static str,
}

shaped_record!(NavItem { name, anchor });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavContent {
    pub brand: &'static str,
    pub items: &'static [NavItem],
    pub menu_label: &'static str,
    pub theme_label: &'static str,
}

shaped_record!(NavContent {
    brand,
    items,
    menu_label,
    theme_label,
});

pub static NAV: Bilingual<NavContent> = Bilingual::new(
    NavContent {
        brand: "A.H.M",
        items: &[
            NavItem { name: "Home", anchor: "hero" },
            NavItem { name: "About", anchor: "about" },
            NavItem { name: "Education", anchor: "education" },
            NavItem { name: "Experience", anchor: "experience" },
            NavItem { name: "Skills", anchor: "skills" },
            NavItem { name: "Projects", anchor: "projects" },
            NavItem { name: "Contact", anchor: "contact" },
        ],
        menu_label: "Toggle menu",
        theme_label: "Toggle dark mode",
    },
    NavContent {
        brand: "A.H.M",
        items: &[
            NavItem { name: "خانه", anchor: "hero" },
            NavItem { name: "درباره من", anchor: "about" },
            NavItem { name: "تحصیلات", anchor: "education" },
            NavItem { name: "تجربه", anchor: "experience" },
            NavItem { name: "مهارت‌ها", anchor: "skills" },
            NavItem { name: "پروژه‌ها", anchor: "projects" },
            NavItem { name: "تماس", anchor: "contact" },
        ],
        menu_label: "باز و بسته کردن منو",
        theme_label: "تغییر حالت تاریک",
    },
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_are_shared_between_languages() {
        let en: Vec<_> = NAV.en.items.iter().map(|item| item.anchor).collect();
        let fa: Vec<_> = NAV.fa.items.iter().map(|item| item.anchor).collect();
        assert_eq!(en, fa);
    }
}
