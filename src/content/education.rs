use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent--blue",
            Self::Green => "accent--green",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Degree {
    pub degree: &'static str,
    pub field: &'static str,
    pub university: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub gpa: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub accent: Accent,
}

shaped_record!(Degree {
    degree,
    field,
    university,
    location,
    period,
    gpa,
    description,
    achievements,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub status: &'static str,
}

shaped_record!(Certification {
    name,
    issuer,
    status,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub degrees: &'static [Degree],
    pub achievements_label: &'static str,
    pub certifications_title: &'static str,
    pub certifications: &'static [Certification],
}

shaped_record!(EducationContent {
    title,
    subtitle,
    degrees,
    achievements_label,
    certifications_title,
    certifications,
});

pub static EDUCATION: Bilingual<EducationContent> = Bilingual::new(
    EducationContent {
        title: "Education",
        subtitle: "Academic Background & Achievements",
        degrees: &[
            Degree {
                degree: "Master of Science (M.Sc.)",
                field: "Computer Engineering",
                university: "Iran University of Science & Technology",
                location: "Tehran, Iran",
                period: "2025 - Present",
                gpa: "N/A",
                description: "Focused on advanced topics in DevOps, Data Engineering, and Cloud Computing. Exploring scalable infrastructure design, data pipeline optimization, and automation in distributed systems.",
                achievements: &[
                    "Research on data-driven infrastructure automation and cloud-native architectures",
                    "Developed and deployed data engineering pipelines using modern DevOps tools",
                    "Graduate coursework covering Big Data processing, distributed systems, and cloud orchestration",
                ],
                accent: Accent::Blue,
            },
            Degree {
                degree: "Bachelor of Science (B.Sc.)",
                field: "Computer Engineering",
                university: "Shahed University of Tehran",
                location: "Tehran, Iran",
                period: "2021 - 2025",
                gpa: "N/A",
                description: "Built a strong foundation in computer science, software engineering, and web application development. Specialized in backend development using .NET Core and modern web technologies.",
                achievements: &[
                    "Designed and developed web-based systems using ASP.NET Core",
                    "Gained hands-on experience with relational databases and RESTful APIs",
                    "Capstone project focused on developing a scalable web service architecture",
                ],
                accent: Accent::Green,
            },
        ],
        achievements_label: "Key Achievements",
        certifications_title: "Professional Certifications & Training",
        certifications: &[
            Certification {
                name: "Arvan Certified Cloud Architect",
                issuer: "Arvan Academy",
                status: "In Progress",
            },
            Certification {
                name: "Certified Kubernetes Administrator (CKA)",
                issuer: "Cloud Native Computing Foundation",
                status: "Planned",
            },
            Certification {
                name: "Arvan Certified Expert DevOps Engineer",
                issuer: "Arvan Academy",
                status: "Ongoing",
            },
        ],
    },
    EducationContent {
        title: "تحصیلات",
        subtitle: "پیشینه تحصیلی و دستاوردها",
        degrees: &[
            Degree {
                degree: "کارشناسی ارشد",
                field: "مهندسی کامپیوتر",
                university: "دانشگاه علم و صنعت ایران",
                location: "تهران، ایران",
                period: "۱۴۰۴ - تاکنون",
                gpa: "N/A",
                description: "تمرکز بر موضوعات پیشرفته در حوزه‌های DevOps، مهندسی داده و رایانش ابری. پژوهش و توسعه در زمینه طراحی زیرساخت‌های مقیاس‌پذیر، بهینه‌سازی جریان‌های داده و خودکارسازی در سیستم‌های توزیع‌شده.",
                achievements: &[
                    "تحقیق در زمینه خودکارسازی زیرساخت داده و معماری‌های cloud-native",
                    "توسعه و استقرار پایپ‌لاین‌های مهندسی داده با بهره‌گیری از ابزارهای مدرن DevOps",
                    "پوشش دروس تخصصی در زمینه پردازش داده‌های حجیم، سیستم‌های توزیع‌شده و ارکستراسیون ابری",
                ],
                accent: Accent::Blue,
            },
            Degree {
                degree: "کارشناسی",
                field: "مهندسی کامپیوتر",
                university: "دانشگاه شاهد تهران",
                location: "تهران، ایران",
                period: "۱۴۰۰ - ۱۴۰۴",
                gpa: "N/A",
                description: "ایجاد پایه‌ای قوی در مهندسی کامپیوتر، نرم‌افزار و توسعه اپلیکیشن‌های وب. تمرکز بر برنامه‌نویسی سمت سرور با NET Core. و استفاده از فناوری‌های مدرن وب.",
                achievements: &[
                    "طراحی و توسعه سیستم‌های مبتنی بر وب با استفاده از ASP.NET Core",
                    "کسب تجربه عملی در کار با پایگاه‌های داده رابطه‌ای و APIهای RESTful",
                    "پروژه پایانی با محوریت طراحی معماری مقیاس‌پذیر برای سرویس‌های وب",
                ],
                accent: Accent::Green,
            },
        ],
        achievements_label: "دستاوردهای کلیدی",
        certifications_title: "گواهینامه‌ها و آموزش‌های حرفه‌ای",
        certifications: &[
            Certification {
                name: "Arvan Certified Cloud Architect",
                issuer: "آروان آکادمی",
                status: "در حال انجام",
            },
            Certification {
                name: "Certified Kubernetes Administrator (CKA)",
                issuer: "Cloud Native Computing Foundation",
                status: "برنامه‌ریزی شده",
            },
            Certification {
                name: "Arvan Certified Expert DevOps Engineer",
                issuer: "آروان آکادمی",
                status: "در حال انجام",
            },
        ],
    },
);
