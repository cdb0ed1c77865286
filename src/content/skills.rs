use crate::i18n::Bilingual;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    Settings,
    Server,
    Cloud,
    GitBranch,
    Database,
    Code,
}

impl CategoryIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Settings => "⚙",
            Self::Server => "▤",
            Self::Cloud => "☁",
            Self::GitBranch => "⑂",
            Self::Database => "⛁",
            Self::Code => "⟨⟩",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Settings => "accent--blue",
            Self::Server => "accent--green",
            Self::Cloud => "accent--purple",
            Self::GitBranch => "accent--orange",
            Self::Database => "accent--red",
            Self::Code => "accent--indigo",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

shaped_record!(Skill { name, level });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: CategoryIcon,
    pub skills: &'static [Skill],
}

shaped_record!(SkillCategory { title, skills });

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillsContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub categories: &'static [SkillCategory],
    pub learning_title: &'static str,
    pub learning_body: &'static str,
}

shaped_record!(SkillsContent {
    title,
    subtitle,
    categories,
    learning_title,
    learning_body,
});

pub fn bar_width(skill: &Skill, visible: bool) -> String {
    if visible {
        format!("width: {}%;", skill.level.min(100))
    } else {
        "width: 0%;".to_string()
    }
}

const IAC: &[Skill] = &[
    Skill { name: "Terraform", level: 60 },
    Skill { name: "Vagrant", level: 70 },
    Skill { name: "Ansible", level: 60 },
    Skill { name: "Packer", level: 80 },
];

const CONTAINERS: &[Skill] = &[
    Skill { name: "Docker", level: 80 },
    Skill { name: "Kubernetes", level: 50 },
    Skill { name: "Docker Compose", level: 90 },
    Skill { name: "Podman", level: 80 },
];

const CLOUD: &[Skill] = &[
    Skill { name: "AWS", level: 75 },
    Skill { name: "Azure", level: 70 },
    Skill { name: "Google Cloud", level: 65 },
    Skill { name: "Arvan Cloud", level: 80 },
];

const CICD: &[Skill] = &[
    Skill { name: "Git", level: 95 },
    Skill { name: "Jenkins", level: 85 },
    Skill { name: "ArgoCD", level: 70 },
    Skill { name: "GitLab CI", level: 80 },
];

const DATA: &[Skill] = &[
    Skill { name: "Apache Spark", level: 70 },
    Skill { name: "Apache Kafka", level: 80 },
    Skill { name: "Apache Pulsar", level: 60 },
    Skill { name: "Elasticsearch", level: 85 },
    Skill { name: "ClickHouse", level: 75 },
];

const PROGRAMMING: &[Skill] = &[
    Skill { name: ".Net/C#", level: 90 },
    Skill { name: "Bash/Shell", level: 80 },
    Skill { name: "Go", level: 70 },
    Skill { name: "JavaScript", level: 60 },
];

pub static SKILLS: Bilingual<SkillsContent> = Bilingual::new(
    SkillsContent {
        title: "Technical Skills",
        subtitle: "DevOps & Data Engineering Expertise",
        categories: &[
            SkillCategory { title: "Infrastructure as Code", icon: CategoryIcon::Settings, skills: IAC },
            SkillCategory { title: "Containerization & Orchestration", icon: CategoryIcon::Server, skills: CONTAINERS },
            SkillCategory { title: "Cloud Platforms", icon: CategoryIcon::Cloud, skills: CLOUD },
            SkillCategory { title: "CI/CD & Version Control", icon: CategoryIcon::GitBranch, skills: CICD },
            SkillCategory { title: "Data Engineering", icon: CategoryIcon::Database, skills: DATA },
            SkillCategory { title: "Programming & Scripting", icon: CategoryIcon::Code, skills: PROGRAMMING },
        ],
        learning_title: "Continuous Learning",
        learning_body: "I am deeply committed to mastering modern concepts and technologies in DevOps and Data Engineering. Through hands-on practice, specialized training programs, and active participation in open-source projects, I strive to continuously expand and refine my professional expertise.",
    },
    SkillsContent {
        title: "مهارت‌های فنی",
        subtitle: "تخصص در DevOps و مهندسی داده",
        categories: &[
            SkillCategory { title: "Infrastructure as Code", icon: CategoryIcon::Settings, skills: IAC },
            SkillCategory { title: "کانتینرسازی و ارکستراسیون", icon: CategoryIcon::Server, skills: CONTAINERS },
            SkillCategory { title: "پلتفرم‌های ابری", icon: CategoryIcon::Cloud, skills: CLOUD },
            SkillCategory { title: "CI/CD و کنترل نسخه", icon: CategoryIcon::GitBranch, skills: CICD },
            SkillCategory { title: "مهندسی داده", icon: CategoryIcon::Database, skills: DATA },
            SkillCategory { title: "برنامه‌نویسی و اسکریپت‌نویسی", icon: CategoryIcon::Code, skills: PROGRAMMING },
        ],
        learning_title: "یادگیری مداوم",
        learning_body: "من به‌صورت جدی به یادگیری و تسلط بر جدیدترین مفاهیم و فناوری‌های حوزه‌ی DevOps و مهندسی داده علاقه‌مندم. تلاش می‌کنم با یادگیری عملی، شرکت در دوره‌ها و کارگاه‌های تخصصی، و مشارکت در پروژه‌های متن‌باز، دانش و مهارت‌های خود را همواره به‌روز و کارآمد نگه دارم.",
    },
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn levels_are_percentages() {
        for language in Language::ALL {
            for category in SKILLS.select(language).categories {
                assert!(category.skills.iter().all(|skill| skill.level <= 100));
            }
        }
    }

    #[test]
    fn bar_stays_empty_until_revealed() {
        let skill = Skill { name: "Git", level: 95 };

        assert_eq!(bar_width(&skill, false), "width: 0%;");
        assert_eq!(bar_width(&skill, true), "width: 95%;");
    }
}
