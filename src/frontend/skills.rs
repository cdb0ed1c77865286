use super::bubbles::FloatingBubbles;
use super::reveal::use_reveal;
use super::SectionProps;
use crate::bubbles::BubbleColor;
use crate::content::skills::{bar_width, SKILLS};
use crate::reveal::{reveal_class, skill_bar_delay, DENSE_SECTION_STAGGER};
use yew::prelude::*;

#[function_component(Skills)]
pub fn skills(props: &SectionProps) -> Html {
    let content = SKILLS.select(props.view.language);
    let (node, visible) = use_reveal("skills");
    let class = reveal_class(visible);

    html! {
        <section id="skills" class="section" ref={node}>
            <FloatingBubbles count={5} color={BubbleColor::Secondary} />
            <div class="container">
                <header class={classes!(class, "section-header")} style={DENSE_SECTION_STAGGER.style(0)}>
                    <h2 class="gradient-text">{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                </header>

                <div class="skill-grid">
                    { for content.categories.iter().enumerate().map(|(category_index, category)| html! {
                        <div class={classes!(class, "card")} style={DENSE_SECTION_STAGGER.style(category_index + 1)}>
                            <div class="skill-category">
                                <span class={classes!("skill-icon", category.icon.accent_class())} aria-hidden="true">
                                    {category.icon.glyph()}
                                </span>
                                <h3>{category.title}</h3>
                            </div>
                            { for category.skills.iter().enumerate().map(|(skill_index, skill)| {
                                let style = format!(
                                    "{} transition-delay: {:.2}s;",
                                    bar_width(skill, visible),
                                    skill_bar_delay(category_index, skill_index),
                                );
                                html! {
                                    <div class="skill">
                                        <div class="skill-label">
                                            <span>{skill.name}</span>
                                            <span class="muted">{format!("{}%", skill.level)}</span>
                                        </div>
                                        <div class="skill-track">
                                            <div class="skill-bar" {style} />
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    }) }
                </div>

                <div
                    class={classes!(class, "card", "learning")}
                    style={DENSE_SECTION_STAGGER.style(content.categories.len() + 1)}
                >
                    <h3>{content.learning_title}</h3>
                    <p>{content.learning_body}</p>
                </div>
            </div>
        </section>
    }
}
