use super::{Shape, Shaped};
use crate::i18n::{pick, Bilingual, Language};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Devops,
    Automation,
    Data,
    Software,
    Academic,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Devops => "devops",
            Self::Automation => "automation",
            Self::Data => "data",
            Self::Software => "software",
            Self::Academic => "academic",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.as_str(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::All => "▦",
            Self::Category(ProjectCategory::Devops) => "▤",
            Self::Category(ProjectCategory::Automation) => "⚙",
            Self::Category(ProjectCategory::Data) => "⛁",
            Self::Category(ProjectCategory::Software) => "⟨⟩",
            Self::Category(ProjectCategory::Academic) => "✎",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == category,
        }
    }
}

impl Shaped for ProjectCategory {
    fn shape(&self) -> Shape {
        Shape::Id(self.as_str())
    }
}

impl Shaped for ProjectFilter {
    fn shape(&self) -> Shape {
        Shape::Id(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterLabel {
    pub filter: ProjectFilter,
    pub name: &'static str,
}

shaped_record!(FilterLabel { filter, name });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub featured: bool,
}

shaped_record!(Project {
    title,
    description,
    category,
    technologies,
    github_url,
    featured,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectsContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub filters: &'static [FilterLabel],
    pub projects: &'static [Project],
    pub cta: &'static str,
}

shaped_record!(ProjectsContent {
    title,
    subtitle,
    filters,
    projects,
    cta,
});

pub fn filter_projects(projects: &'static [Project], filter: ProjectFilter) -> Vec<&'static Project> {
    projects.iter().filter(|project| filter.matches(project)).collect()
}

pub fn featured_label(language: Language) -> &'static str {
    pick(language, "Featured", "منتخب")
}

pub fn company_project_label(language: Language) -> &'static str {
    pick(language, "Company Project", "پروژه شرکتی")
}

const CEPH_STACK: &[&str] = &["Vagrant", "vSphere", "Ceph", "Traefik", "Kafka", "ELK Stack", "Terraform"];
const OFFLINE_CICD_STACK: &[&str] = &["Jenkins", "GitLab", "Nexus", "Docker", "Nginx"];
const IOT_STACK: &[&str] = &[
    "Podman",
    "Kubernetes",
    "Microservices",
    "Clean Architecture",
    "RealTime Monitoring",
    "IoT",
];
const AVRO_STACK: &[&str] = &["Go", "Avro", "CSV", "Data Conversion"];
const SOCKET_STACK: &[&str] = &["C#", "Sockets", "Networking", "Multithreading"];
const CHAT_STACK: &[&str] = &["C", "Sockets", "Linux", "Multithreading"];
const NQUEEN_STACK: &[&str] = &["JavaScript", "Algorithms", "Visualization"];
const FORTRAN_STACK: &[&str] = &["C", "Compiler Design", "Flex/Bison"];
const TEMPLATE_STACK: &[&str] = &["HTML", "CSS", "JavaScript"];

const SOCKET_REPO: &str = "https://github.com/AHM-ID/AP-FinalProject";
const CHAT_REPO: &str = "https://github.com/AHM-ID/unix-chat-app";
const MAZE_REPO: &str = "https://github.com/AHM-ID/AI_Maze_Solver";
const NQUEEN_REPO: &str = "https://github.com/AHM-ID/N-Queens";
const FORTRAN_REPO: &str = "https://github.com/AHM-ID/FORTRAN_Compiler";
const TEMPLATE_REPO: &str = "https://github.com/AHM-ID/Website-Template-01";

pub static PROJECTS: Bilingual<ProjectsContent> = Bilingual::new(
    ProjectsContent {
        title: "Featured Projects",
        subtitle: "DevOps, Data & Distributed Systems",
        filters: &[
            FilterLabel { filter: ProjectFilter::All, name: "All Projects" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Devops), name: "DevOps" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Automation), name: "Automation & Tools" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Data), name: "Data Engineering" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Software), name: "Software Systems" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Academic), name: "Academic Projects" },
        ],
        projects: &[
            Project {
                title: "Ceph Cluster Infrastructure as Code",
                description: "Designed a Ceph storage cluster using Infrastructure as Code. Virtual machines were provisioned via Vagrant on vSphere, with Traefik as reverse proxy/load balancer, Kafka for log brokering, and an ELK stack for observability and monitoring.",
                category: ProjectCategory::Devops,
                technologies: CEPH_STACK,
                github_url: None,
                featured: true,
            },
            Project {
                title: "Distributed Kafka Consumer & Data Pipeline",
                description: "Developed a distributed Kafka consumer architecture configurable by node count. The data pipeline reads, processes, and writes messages in a three-layer design using channel-based data structures — handling up to 30 billion records per day.",
                category: ProjectCategory::Data,
                technologies: &["Kafka", ".Net", "Channels", "Data Pipeline", "Concurrency"],
                github_url: None,
                featured: true,
            },
            Project {
                title: "Offline CI/CD Infrastructure",
                description: "Implemented a fully offline CI/CD stack using Jenkins, GitLab, and Nexus. Enabled secure, self-hosted build, test, and deployment automation without internet dependency.",
                category: ProjectCategory::Devops,
                technologies: OFFLINE_CICD_STACK,
                github_url: None,
                featured: false,
            },
            Project {
                title: "IoT Microservices Architecture",
                description: "Designed and deployed a distributed IoT system with a Clean Architecture and microservices. Fully containerized and orchestrated for scalable device communication and data collection.",
                category: ProjectCategory::Devops,
                technologies: IOT_STACK,
                github_url: None,
                featured: true,
            },
            Project {
                title: "avro2csv Engine",
                description: "Developed a high-performance Go-based engine to convert Avro files into CSV format optimized for database storage and analytics.",
                category: ProjectCategory::Automation,
                technologies: AVRO_STACK,
                github_url: None,
                featured: true,
            },
            Project {
                title: "Windows Socket File Transfer",
                description: "Developed a Windows-based socket application similar to SHAREit for transferring files and voice messages between multiple clients.",
                category: ProjectCategory::Software,
                technologies: SOCKET_STACK,
                github_url: Some(SOCKET_REPO),
                featured: false,
            },
            Project {
                title: "Linux Terminal Chat App",
                description: "Created a terminal-based chat application for Linux using socket programming and multithreaded communication.",
                category: ProjectCategory::Software,
                technologies: CHAT_STACK,
                github_url: Some(CHAT_REPO),
                featured: false,
            },
            Project {
                title: "AI Pathfinding Visualization",
                description: "Developed an interactive visualization tool demonstrating classical pathfinding algorithms (A*, Dijkstra, BFS, DFS) for academic purposes.",
                category: ProjectCategory::Academic,
                technologies: &["JavaScript", "HTML/CSS", "Algorithms", "Visualization"],
                github_url: Some(MAZE_REPO),
                featured: false,
            },
            Project {
                title: "N-Queen Problem Visualization",
                description: "Built an educational visualizer for solving and animating the N-Queen problem using backtracking algorithms.",
                category: ProjectCategory::Academic,
                technologies: NQUEEN_STACK,
                github_url: Some(NQUEEN_REPO),
                featured: false,
            },
            Project {
                title: "Fortran Compiler Demo",
                description: "Implemented a simulated Fortran compiler as part of a compiler design course project, covering lexical, syntax, and semantic analysis.",
                category: ProjectCategory::Academic,
                technologies: FORTRAN_STACK,
                github_url: Some(FORTRAN_REPO),
                featured: false,
            },
            Project {
                title: "HTML Template Design",
                description: "Created responsive HTML and CSS templates for personal and educational projects with a focus on clean and minimal UI.",
                category: ProjectCategory::Software,
                technologies: TEMPLATE_STACK,
                github_url: Some(TEMPLATE_REPO),
                featured: false,
            },
        ],
        cta: "View All Projects on GitHub",
    },
    ProjectsContent {
        title: "پروژه‌های منتخب",
        subtitle: "راه‌حل‌های DevOps، داده و سیستم‌های توزیع‌شده",
        filters: &[
            FilterLabel { filter: ProjectFilter::All, name: "همه پروژه‌ها" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Devops), name: "DevOps" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Automation), name: "خودکارسازی و ابزارها" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Data), name: "مهندسی داده" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Software), name: "سیستم‌های نرم‌افزاری" },
            FilterLabel { filter: ProjectFilter::Category(ProjectCategory::Academic), name: "پروژه‌های دانشگاهی" },
        ],
        projects: &[
            Project {
                title: "زیرساخت کلاستر Ceph به صورت IaC",
                description: "طراحی و پیاده‌سازی کلاستر ذخیره‌سازی Ceph با رویکرد Infrastructure as Code. ساخت ماشین‌های مجازی با Vagrant روی vSphere، استفاده از Traefik به عنوان Load Balancer و Reverse Proxy، Kafka برای مدیریت لاگ‌ها و پشته ELK برای مانیتورینگ و Observability.",
                category: ProjectCategory::Devops,
                technologies: CEPH_STACK,
                github_url: None,
                featured: true,
            },
            Project {
                title: "KafkaConsumer توزیع‌شده و معماری پایپلاین داده",
                description: "طراحی معماری KafkaConsumer توزیع‌شده با قابلیت پیکربندی تعداد نودها. پایپلاین داده در سه لایه پیام‌ها را خوانده، پردازش و ذخیره می‌کند. استفاده از ساختار داده کانال برای ارتباطات بین بخشی و پشتیبانی از ۳۰ میلیارد رکورد در روز.",
                category: ProjectCategory::Data,
                technologies: &["Kafka", "Net.", "Channels", "Data Pipeline", "Concurrency"],
                github_url: None,
                featured: true,
            },
            Project {
                title: "زیرساخت CI/CD آفلاین",
                description: "پیاده‌سازی کامل زیرساخت CI/CD به‌صورت آفلاین با Jenkins، GitLab و Nexus جهت خودکارسازی ساخت، تست و استقرار بدون وابستگی به اینترنت.",
                category: ProjectCategory::Devops,
                technologies: OFFLINE_CICD_STACK,
                github_url: None,
                featured: false,
            },
            Project {
                title: "معماری IoT مبتنی بر Microservice",
                description: "طراحی و استقرار سیستم IoT توزیع‌شده با معماری Clean و Microservice به‌صورت کانتینری و ارکستراسیون‌شده برای ارتباط و جمع‌آوری داده از دستگاه‌ها.",
                category: ProjectCategory::Devops,
                technologies: IOT_STACK,
                github_url: None,
                featured: true,
            },
            Project {
                title: "انجین avro2csv",
                description: "توسعه یک موتور سریع برای تبدیل فایل‌های Avro به فرمت CSV به منظور ذخیره‌سازی و تحلیل در پایگاه داده‌ها.",
                category: ProjectCategory::Automation,
                technologies: AVRO_STACK,
                github_url: None,
                featured: true,
            },
            Project {
                title: "انتقال فایل با سوکت ویندوزی",
                description: "ساخت نرم‌افزار انتقال فایل و پیام صوتی مشابه SHAREit با استفاده از سوکت‌های ویندوزی برای ارتباط میان چند کلاینت.",
                category: ProjectCategory::Software,
                technologies: SOCKET_STACK,
                github_url: Some(SOCKET_REPO),
                featured: false,
            },
            Project {
                title: "نرم‌افزار چت لینوکسی مبتنی بر ترمینال",
                description: "توسعه نرم‌افزار چت در محیط ترمینال لینوکس با استفاده از برنامه‌نویسی سوکت و ارتباط چندریسمانی.",
                category: ProjectCategory::Software,
                technologies: CHAT_STACK,
                github_url: Some(CHAT_REPO),
                featured: false,
            },
            Project {
                title: "بصری‌سازی مسیریابی هوش مصنوعی",
                description: "پیاده‌سازی ابزار مصورسازی برای نمایش الگوریتم‌های کلاسیک مسیریابی مانند A*، Dijkstra، BFS و DFS برای اهداف آموزشی.",
                category: ProjectCategory::Academic,
                technologies: &["JavaScript", "HTML", "Algorithms", "Visualization"],
                github_url: Some(MAZE_REPO),
                featured: false,
            },
            Project {
                title: "بصری‌سازی مسئله N-Queen",
                description: "توسعه برنامه مصورساز برای حل و نمایش گام‌به‌گام مسئله N-Queen با استفاده از الگوریتم بازگشتی Backtracking.",
                category: ProjectCategory::Academic,
                technologies: NQUEEN_STACK,
                github_url: Some(NQUEEN_REPO),
                featured: false,
            },
            Project {
                title: "کامپایلر نمایشی Fortran",
                description: "پیاده‌سازی کامپایلر نمایشی زبان Fortran برای پروژه درسی طراحی کامپایلر شامل تحلیل واژگانی، نحوی و معنایی.",
                category: ProjectCategory::Academic,
                technologies: FORTRAN_STACK,
                github_url: Some(FORTRAN_REPO),
                featured: false,
            },
            Project {
                title: "طراحی قالب HTML",
                description: "طراحی قالب‌های واکنش‌گرا با HTML و CSS برای پروژه‌های شخصی و آموزشی با تمرکز بر سادگی و رابط کاربری تمیز.",
                category: ProjectCategory::Software,
                technologies: TEMPLATE_STACK,
                github_url: Some(TEMPLATE_REPO),
                featured: false,
            },
        ],
        cta: "مشاهده همه پروژه‌ها در GitHub",
    },
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ParityError;

    #[test]
    fn all_filter_keeps_every_project_in_order() {
        let projects = PROJECTS.en.projects;
        let visible = filter_projects(projects, ProjectFilter::All);

        assert_eq!(visible.len(), projects.len());
        assert_eq!(visible[0].title, "Ceph Cluster Infrastructure as Code");
    }

    #[test]
    fn category_filter_selects_matching_projects() {
        let academic = filter_projects(
            PROJECTS.en.projects,
            ProjectFilter::Category(ProjectCategory::Academic),
        );
        let titles: Vec<_> = academic.iter().map(|project| project.title).collect();

        assert_eq!(
            titles,
            [
                "AI Pathfinding Visualization",
                "N-Queen Problem Visualization",
                "Fortran Compiler Demo",
            ]
        );
    }

    #[test]
    fn filters_select_the_same_projects_in_both_languages() {
        for (en, fa) in PROJECTS.en.filters.iter().zip(PROJECTS.fa.filters) {
            assert_eq!(en.filter, fa.filter);
        }
        for (en, fa) in PROJECTS.en.projects.iter().zip(PROJECTS.fa.projects) {
            assert_eq!(en.category, fa.category, "project {}", en.title);
        }
        for label in PROJECTS.en.filters {
            let en = filter_projects(PROJECTS.en.projects, label.filter).len();
            let fa = filter_projects(PROJECTS.fa.projects, label.filter).len();
            assert_eq!(en, fa, "filter {}", label.filter.id());
        }
    }

    #[test]
    fn parity_catches_project_filed_under_another_category() {
        let project = PROJECTS.en.projects[0];
        let misfiled = Project {
            category: ProjectCategory::Academic,
            ..project
        };
        let table = Bilingual::new(project, misfiled);

        let error = table.check_parity("projects").expect_err("categories differ");
        assert!(matches!(
            error,
            ParityError::ShapeMismatch { ref path, .. } if path == "category"
        ));

        let label = PROJECTS.en.filters[1];
        let rebound = FilterLabel {
            filter: ProjectFilter::All,
            ..PROJECTS.fa.filters[1]
        };
        assert!(Bilingual::new(label, rebound).check_parity("projects").is_err());
    }

    #[test]
    fn company_projects_have_no_repository_link() {
        let devops = filter_projects(
            PROJECTS.en.projects,
            ProjectFilter::Category(ProjectCategory::Devops),
        );
        assert!(devops.iter().all(|project| project.github_url.is_none()));
        assert_eq!(company_project_label(Language::Fa), "پروژه شرکتی");
    }
}
