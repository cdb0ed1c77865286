use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroContent {
    pub greeting: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub scroll_down: &'static str,
    pub portrait_alt: &'static str,
}

shaped_record!(HeroContent {
    greeting,
    name,
    title,
    company,
    location,
    description,
    cta,
    scroll_down,
    portrait_alt,
});

pub const PORTRAIT_SRC: &str = "/assets/profile-img.jpg";

pub static HERO: Bilingual<HeroContent> = Bilingual::new(
    HeroContent {
        greeting: "Hello, I'm",
        name: "Amirhossein Maleki",
        title: "DevOps & Data Engineer",
        company: "@ SGI (Scientific Green Co. Ltd.)",
        location: "Tehran, Iran",
        description: "I’m a DevOps and Data Engineer focused on building scalable, automated, and data-driven systems. Combining a strong engineering background with a passion for cloud technologies and automation, I work to create reliable and sustainable infrastructures at SGI.",
        cta: "Get In Touch",
        scroll_down: "Scroll Down",
        portrait_alt: "Amirhossein Maleki - DevOps & Data Engineer",
    },
    HeroContent {
        greeting: "سلام، من",
        name: "امیرحسین ملکی",
        title: "مهندس DevOps و داده",
        company: "در شرکت علوم سبز (SGI)",
        location: "تهران، ایران",
        description: "من مهندس DevOps و داده هستم که بر طراحی و توسعه زیرساخت‌های مقیاس‌پذیر، خودکارسازی‌شده و داده‌محور تمرکز دارم. با تکیه بر پیشینه‌ی مهندسی و علاقه‌ی عمیق به فناوری‌های ابری و خودکارسازی، در شرکت SGI زیرساخت‌های پایدار و قابل اعتماد طراحی و پیاده‌سازی می‌کنم.",
        cta: "تماس با من",
        scroll_down: "ادامه مطالب",
        portrait_alt: "امیرحسین ملکی - مهندس DevOps و داده",
    },
);
