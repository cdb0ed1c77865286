use super::header::NavItem;
use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Copyright {
    pub text: &'static str,
    pub by: &'static str,
    pub rights: &'static str,
}

shaped_record!(Copyright { text, by, rights });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterContent {
    pub name: &'static str,
    pub description: &'static str,
    pub quick_links_title: &'static str,
    pub quick_links: &'static [NavItem],
    pub contact_title: &'static str,
    pub social_title: &'static str,
    pub copyright: Copyright,
    pub back_to_top: &'static str,
}

shaped_record!(FooterContent {
    name,
    description,
    quick_links_title,
    quick_links,
    contact_title,
    social_title,
    copyright,
    back_to_top,
});

pub static FOOTER: Bilingual<FooterContent> = Bilingual::new(
    FooterContent {
        name: "Amirhossein Maleki",
        description: "DevOps & Data Engineer passionate about building scalable, reliable infrastructure and data solutions.",
        quick_links_title: "Quick Links",
        quick_links: &[
            NavItem { name: "About", anchor: "about" },
            NavItem { name: "Experience", anchor: "experience" },
            NavItem { name: "Skills", anchor: "skills" },
            NavItem { name: "Projects", anchor: "projects" },
            NavItem { name: "Contact", anchor: "contact" },
        ],
        contact_title: "Contact Info",
        social_title: "Follow Me",
        copyright: Copyright {
            text: "Made with",
            by: "by Amirhossein Maleki",
            rights: "All rights reserved.",
        },
        back_to_top: "Back to top",
    },
    FooterContent {
        name: "امیرحسین ملکی",
        description: "مهندس DevOps و مهندسی داده با علاقه به ساخت زیرساخت‌های مقیاس‌پذیر، قابل اعتماد و راه‌حل‌های داده محور.",
        quick_links_title: "لینک‌های سریع",
        quick_links: &[
            NavItem { name: "درباره من", anchor: "about" },
            NavItem { name: "تجربه", anchor: "experience" },
            NavItem { name: "مهارت‌ها", anchor: "skills" },
            NavItem { name: "پروژه‌ها", anchor: "projects" },
            NavItem { name: "تماس", anchor: "contact" },
        ],
        contact_title: "اطلاعات تماس",
        social_title: "دنبال کنید",
        copyright: Copyright {
            text: "ساخته شده با",
            by: "توسط امیرحسین ملکی",
            rights: "تمام حقوق محفوظ است.",
        },
        back_to_top: "بازگشت به بالا",
    },
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::header::NAV;

    #[test]
    fn quick_links_point_at_existing_sections() {
        for link in FOOTER.en.quick_links {
            assert!(NAV.en.items.iter().any(|item| item.anchor == link.anchor));
        }
    }
}
