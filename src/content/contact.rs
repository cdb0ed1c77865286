use crate::i18n::{pick, Bilingual, Language};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormLabels {
    pub name: &'static str,
    pub email: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
}

shaped_record!(FormLabels {
    name,
    email,
    subject,
    message,
    send,
    sending,
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub phone_display: &'static str,
    pub location: &'static str,
    pub form: FormLabels,
    pub social_title: &'static str,
}

shaped_record!(ContactContent {
    title,
    subtitle,
    description,
    phone_display,
    location,
    form,
    social_title,
});

pub fn email_label(language: Language) -> &'static str {
    pick(language, "Email", "ایمیل")
}

pub fn phone_label(language: Language) -> &'static str {
    pick(language, "Phone", "تلفن")
}

pub fn location_label(language: Language) -> &'static str {
    pick(language, "Location", "موقعیت")
}

pub static CONTACT: Bilingual<ContactContent> = Bilingual::new(
    ContactContent {
        title: "Get In Touch",
        subtitle: "Ready for your next project? Let’s talk.",
        description: "I’m always open to new opportunities and exciting collaborations. Whether you need DevOps consulting, scalable infrastructure design, or end-to-end data engineering solutions, I’d be thrilled to help bring your vision to life. Feel free to reach out!",
        phone_display: "+98 901 407 7602",
        location: "Tehran, Iran",
        form: FormLabels {
            name: "Your Name",
            email: "Your Email",
            subject: "Subject",
            message: "Your Message",
            send: "Send Message",
            sending: "Sending...",
        },
        social_title: "Connect With Me",
    },
    ContactContent {
        title: "تماس با من",
        subtitle: "برای پروژهٔ بعدی‌تان آماده‌اید؟ بیایید صحبت کنیم.",
        description: "همیشه برای فرصت‌های جدید و همکاری‌های الهام‌بخش آماده‌ام. چه به مشاورهٔ DevOps، طراحی زیرساخت‌های مقیاس‌پذیر، یا راه‌حل‌های جامع مهندسی داده نیاز داشته باشید، از همکاری با شما برای تحقق ایده‌هایتان خوشحال خواهم شد. حتماً با من در ارتباط باشید!",
        phone_display: "۷۶۰۲ ۴۰۷ ۹۰۱ ۹۸+",
        location: "تهران، ایران",
        form: FormLabels {
            name: "نام شما",
            email: "ایمیل شما",
            subject: "موضوع",
            message: "پیام شما",
            send: "ارسال پیام",
            sending: "در حال ارسال...",
        },
        social_title: "با من در ارتباط باشید",
    },
);
