use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub heading: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub period: &'static str,
}

shaped_record!(InfoCard {
    title,
    heading,
    organization,
    location,
    period,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Target,
    Sparkles,
    Award,
}

impl StatIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Target => "◎",
            Self::Sparkles => "✦",
            Self::Award => "✪",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: StatIcon,
}

shaped_record!(Stat { number, label });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AboutContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub education: InfoCard,
    pub experience: InfoCard,
    pub interests_title: &'static str,
    pub interests: &'static [&'static str],
    pub stats: &'static [Stat],
}

shaped_record!(AboutContent {
    title,
    subtitle,
    description,
    education,
    experience,
    interests_title,
    interests,
    stats,
});

pub static ABOUT: Bilingual<AboutContent> = Bilingual::new(
    AboutContent {
        title: "About Me",
        subtitle: "Professional Background & Education",
        description: "I am a DevOps and Data Engineer passionate about building reliable, scalable, and automated infrastructures. With a strong background in Computer Engineering and hands-on experience in cloud technologies, data pipelines, and CI/CD automation, I focus on bridging the gap between software development and data-driven operations. My goal is to design systems that are not only efficient and secure but also sustainable and adaptable to future challenges.",
        education: InfoCard {
            title: "Education",
            heading: "M.Sc. in Computer Engineering",
            organization: "Iran University of Science & Technology",
            location: "Tehran, Iran",
            period: "2025 - Present",
        },
        experience: InfoCard {
            title: "Current Role",
            heading: "DevOps & Data Engineer",
            organization: "SGI (Scientific Green Co. Ltd.)",
            location: "Tehran, Iran",
            period: "2025 - Present",
        },
        interests_title: "Professional Interests",
        interests: &[
            "Infrastructure as Code (IaC) implementation",
            "Data engineering and distributed systems",
            "Cloud computing and container orchestration",
            "Automation and CI/CD pipelines",
            "Scalable and sustainable infrastructure design",
        ],
        stats: &[
            Stat { number: "3+", label: "Years Experience", icon: StatIcon::Target },
            Stat { number: "15+", label: "Projects Completed", icon: StatIcon::Sparkles },
            Stat { number: "5+", label: "Technologies Mastered", icon: StatIcon::Award },
        ],
    },
    AboutContent {
        title: "درباره من",
        subtitle: "پیشینه حرفه‌ای و تحصیلات",
        description: "من مهندس DevOps و مهندس داده هستم که به طراحی و توسعه زیرساخت‌های قابل اعتماد، مقیاس‌پذیر و خودکارسازی‌شده علاقه‌مندم. با پیشینه‌ای در مهندسی کامپیوتر و تجربه عملی در حوزه‌های فناوری ابری، پایپ‌لاین‌های داده و خودکارسازی فرآیندهای CI/CD، تمرکزم بر ایجاد پلی میان توسعه نرم‌افزار و عملیات داده‌محور است. هدفم طراحی سیستم‌هایی است که علاوه بر کارایی و امنیت بالا، پایداری و انعطاف‌پذیری لازم برای رشد آینده را نیز فراهم کنند.",
        education: InfoCard {
            title: "تحصیلات",
            heading: "کارشناسی ارشد مهندسی کامپیوتر",
            organization: "دانشگاه علم و صنعت ایران",
            location: "تهران، ایران",
            period: "۱۴۰۴ - تاکنون",
        },
        experience: InfoCard {
            title: "نقش فعلی",
            heading: "مهندس DevOps و مهندس داده",
            organization: "شرکت SGI (علوم سبز)",
            location: "تهران، ایران",
            period: "۱۴۰۴ - تاکنون",
        },
        interests_title: "علایق حرفه‌ای",
        interests: &[
            "پیاده‌سازی Infrastructure as Code (IaC)",
            "مهندسی داده و سیستم‌های توزیع‌شده",
            "رایانش ابری و ارکستراسیون کانتینرها",
            "خودکارسازی و پایپ‌لاین‌های CI/CD",
            "طراحی زیرساخت‌های مقیاس‌پذیر و پایدار",
        ],
        stats: &[
            Stat { number: "۳+", label: "سال تجربه", icon: StatIcon::Target },
            Stat { number: "۱۵+", label: "پروژه تکمیل‌شده", icon: StatIcon::Sparkles },
            Stat { number: "۵+", label: "فناوری تسلط‌یافته", icon: StatIcon::Award },
        ],
    },
);
