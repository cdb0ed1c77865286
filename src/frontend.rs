mod about;
mod bubbles;
mod contact;
mod dom;
mod education;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod recaptcha;
mod reveal;
mod skills;

use crate::config::SiteConfig;
use crate::content;
use crate::logging::{self, log_event, LogLevel};
use crate::content::profile::FULL_NAME;
use crate::splash::{start_splash, SplashPhase, TimeoutScheduler, LOADING_TITLE};
use crate::view::ViewConfig;
use serde_json::json;
use web_sys::window;
use yew::prelude::*;

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub view: ViewConfig,
}

#[function_component(Splash)]
fn splash() -> Html {
    html! {
        <div class="splash" role="status" aria-live="polite">
            <div class="splash-body">
                <div class="splash-spinner" aria-hidden="true"></div>
                <h2 class="gradient-text">{LOADING_TITLE}</h2>
                <p class="muted">{FULL_NAME}</p>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::from_build_env());
    let view = use_state(|| ViewConfig::new(dom::resolve_language(), dom::resolve_theme()));
    let phase = use_state(SplashPhase::default);

    {
        let initial = *view;
        let phase = phase.clone();
        let delay = config.splash_delay;
        use_effect_with((), move |_| {
            dom::apply_view(initial);
            let guard = start_splash(&TimeoutScheduler, delay, move |next| {
                log_event(LogLevel::Info, "splash_ready", json!({}));
                phase.set(next);
            });
            move || drop(guard)
        });
    }

    let on_toggle_language = {
        let view = view.clone();
        Callback::from(move |_| {
            let next = view.with_language(view.language.toggled());
            dom::persist_language(next.language);
            dom::apply_view(next);
            log_event(
                LogLevel::Info,
                "language_changed",
                json!({ "language": next.language.as_str() }),
            );
            view.set(next);
        })
    };

    let on_toggle_theme = {
        let view = view.clone();
        Callback::from(move |_| {
            let next = view.with_theme(view.theme.toggled());
            dom::persist_theme(next.theme);
            dom::apply_view_with_transition(next);
            log_event(LogLevel::Info, "theme_changed", json!({ "theme": next.theme.as_str() }));
            view.set(next);
        })
    };

    if phase.is_loading() {
        return html! { <Splash /> };
    }

    let view = *view;
    html! {
        <>
            <Header {view} {on_toggle_language} {on_toggle_theme} />
            <main id="content">
                <Hero {view} />
                <About {view} />
                <Education {view} />
                <Experience {view} />
                <Skills {view} />
                <Projects {view} />
                <Contact {view} config={config.clone()} />
            </main>
            <Footer {view} />
        </>
    }
}

pub fn run() {
    let config = SiteConfig::from_build_env();
    logging::init(config.log_level);

    if let Err(error) = content::verify_all() {
        log_event(
            LogLevel::Error,
            "content_parity_failed",
            json!({ "error": error.to_string() }),
        );
    }

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();

    log_event(
        LogLevel::Info,
        "app_mounted",
        json!({
            "splash_delay_ms": config.splash_delay.as_millis() as u64,
            "recaptcha_configured": config.recaptcha_site_key.is_some(),
        }),
    );
}
