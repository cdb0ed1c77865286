use super::reveal::use_reveal;
use super::SectionProps;
use crate::content::education::EDUCATION;
use crate::reveal::{
    achievement_delay, reveal_class, transition_delay, CERTIFICATION_STAGGER, SECTION_STAGGER,
    TIMELINE_DOT_STAGGER,
};
use yew::prelude::*;

#[function_component(Education)]
pub fn education(props: &SectionProps) -> Html {
    let content = EDUCATION.select(props.view.language);
    let (node, visible) = use_reveal("education");
    let class = reveal_class(visible);

    html! {
        <section id="education" class="section" ref={node}>
            <div class="container">
                <header class={classes!(class, "section-header")} style={SECTION_STAGGER.style(0)}>
                    <h2 class="gradient-text">{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                </header>

                <ol class="timeline">
                    { for content.degrees.iter().enumerate().map(|(entry, degree)| html! {
                        <li class={classes!(class, "timeline-entry")} style={SECTION_STAGGER.style(entry + 1)}>
                            <span
                                class={classes!(class, "timeline-dot", degree.accent.class())}
                                style={TIMELINE_DOT_STAGGER.style(entry)}
                            />
                            <div class="card">
                                <p class="muted">{degree.period}</p>
                                <h3>{degree.degree}</h3>
                                <p class="card-heading">{degree.field}</p>
                                <p>{degree.university}</p>
                                <p class="muted">{degree.location}{" · GPA: "}{degree.gpa}</p>
                                <p>{degree.description}</p>
                                <h4>{content.achievements_label}</h4>
                                <ul>
                                    { for degree.achievements.iter().enumerate().map(|(item, achievement)| html! {
                                        <li class={class} style={transition_delay(achievement_delay(entry, item))}>
                                            {*achievement}
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </li>
                    }) }
                </ol>

                <div class={classes!(class, "certifications")} style={SECTION_STAGGER.style(content.degrees.len() + 1)}>
                    <h3>{content.certifications_title}</h3>
                    <div class="certification-grid">
                        { for content.certifications.iter().enumerate().map(|(index, certification)| html! {
                            <div class={classes!(class, "card")} style={CERTIFICATION_STAGGER.style(index)}>
                                <h4>{certification.name}</h4>
                                <p class="muted">{certification.issuer}</p>
                                <span class="badge">{certification.status}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
