use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub kind: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

shaped_record!(Position {
    title,
    company,
    location,
    period,
    kind,
    description,
    technologies,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub positions: &'static [Position],
    pub technologies_label: &'static str,
    pub cta: &'static str,
}

shaped_record!(ExperienceContent {
    title,
    subtitle,
    positions,
    technologies_label,
    cta,
});

const SGI_STACK: &[&str] = &[
    "Kafka",
    "Avro",
    "ClickHouse",
    "Vagrant",
    "Jenkins",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Packer",
    "Git",
    "Go",
    "Bash",
];

const INTERNSHIP_STACK: &[&str] = &[
    "NET Core",
    "C#",
    "SQL Server",
    "PostgreSQL",
    "EF Core",
    "REST APIs",
    "Docker",
];

pub static EXPERIENCE: Bilingual<ExperienceContent> = Bilingual::new(
    ExperienceContent {
        title: "Professional Experience",
        subtitle: "My Journey in DevOps & Data Engineering",
        positions: &[
            Position {
                title: "Data Engineer & DevOps Specialist",
                company: "SGI (Scientific Green Co. Ltd.)",
                location: "Tehran, Iran",
                period: "2025 - Present",
                kind: "Full-time",
                description: &[
                    "Design and maintain data pipelines and analytical infrastructures supporting large-scale data processing",
                    "Integrate DevOps practices into data workflows using Jenkins, Docker, and Kubernetes for automation and deployment",
                    "Develop and optimize data ingestion, transformation, and storage solutions using modern Big Data technologies",
                    "Collaborate with development and analytics teams to enhance data reliability, scalability, and performance",
                    "Continuously evaluate emerging technologies to improve data processing efficiency and system architecture",
                ],
                technologies: SGI_STACK,
            },
            Position {
                title: "Backend Developer Intern",
                company: "Samaneh Dadeh Salamat Co.",
                location: "Tehran, Iran",
                period: "2023 - 2023 (4 Months)",
                kind: "Internship",
                description: &[
                    "Contributed to the design and development of backend services for healthcare data systems",
                    "Worked with RESTful APIs and relational databases to improve data integrity and system performance",
                    "Collaborated with data engineers and software developers to implement efficient data processing workflows",
                    "Gained hands-on experience in .NET ecosystem and modern backend development practices",
                ],
                technologies: INTERNSHIP_STACK,
            },
        ],
        technologies_label: "Technologies Used",
        cta: "Let's Work Together",
    },
    ExperienceContent {
        title: "تجربه حرفه‌ای",
        subtitle: "مسیر من در DevOps و مهندسی داده",
        positions: &[
            Position {
                title: "مهندس داده و متخصص DevOps",
                company: "SGI (Scientific Green Co. Ltd.)",
                location: "تهران، ایران",
                period: "۱۴۰۴ - تاکنون",
                kind: "تمام‌وقت",
                description: &[
                    "طراحی و نگهداری جریان‌های داده و زیرساخت‌های تحلیلی برای پردازش داده‌های در مقیاس بزرگ",
                    "ادغام رویکردهای DevOps در فرایندهای داده با استفاده از Jenkins، Docker و Kubernetes برای خودکارسازی و استقرار",
                    "توسعه و بهینه‌سازی فرآیندهای جمع‌آوری، پردازش و ذخیره‌سازی داده با بهره‌گیری از فناوری‌های نوین Big Data",
                    "همکاری نزدیک با تیم‌های توسعه و تحلیل داده جهت افزایش قابلیت اطمینان، مقیاس‌پذیری و کارایی سیستم‌ها",
                    "بررسی و ارزیابی مداوم فناوری‌های نوین برای ارتقای معماری و کارایی زیرساخت داده",
                ],
                technologies: SGI_STACK,
            },
            Position {
                title: "کارآموز توسعه‌دهنده Backend",
                company: "شرکت سامانه داده سلامت",
                location: "تهران، ایران",
                period: "۱۴۰۲ - ۱۴۰۲ (۴ ماه)",
                kind: "کارآموزی",
                description: &[
                    "مشارکت در طراحی و توسعه‌ی سرویس‌های Backend مرتبط با سامانه‌های داده‌ی سلامت",
                    "کار با APIهای RESTful و پایگاه‌های داده رابطه‌ای به‌منظور بهبود عملکرد و یکپارچگی داده‌ها",
                    "همکاری نزدیک با تیم‌های مهندسی داده و توسعه نرم‌افزار برای پیاده‌سازی جریان‌های پردازش داده‌ی بهینه",
                    "کسب تجربه‌ی عملی در اکوسیستم .NET و روش‌های نوین توسعه Backend",
                ],
                technologies: INTERNSHIP_STACK,
            },
        ],
        technologies_label: "فناوری‌های استفاده شده",
        cta: "بیایید با هم کار کنیم",
    },
);
