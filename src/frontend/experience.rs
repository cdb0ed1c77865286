use super::bubbles::FloatingBubbles;
use super::dom::scroll_to_section;
use super::reveal::use_reveal;
use super::SectionProps;
use crate::bubbles::BubbleColor;
use crate::content::experience::EXPERIENCE;
use crate::reveal::{reveal_class, SECTION_STAGGER, TECHNOLOGY_STAGGER};
use yew::prelude::*;

#[function_component(Experience)]
pub fn experience(props: &SectionProps) -> Html {
    let content = EXPERIENCE.select(props.view.language);
    let (node, visible) = use_reveal("experience");
    let class = reveal_class(visible);
    let on_cta = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <section id="experience" class="section section--alt" ref={node}>
            <FloatingBubbles count={4} color={BubbleColor::Primary} />
            <div class="container">
                <header class={classes!(class, "section-header")} style={SECTION_STAGGER.style(0)}>
                    <h2 class="gradient-text">{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                </header>

                { for content.positions.iter().enumerate().map(|(index, position)| html! {
                    <article class={classes!(class, "card", "position")} style={SECTION_STAGGER.style(index + 1)}>
                        <div class="position-header">
                            <div>
                                <h3>{position.title}</h3>
                                <p class="card-heading">{position.company}</p>
                            </div>
                            <div class="position-meta">
                                <span class="badge">{position.kind}</span>
                                <p class="muted">{position.period}</p>
                                <p class="muted">{position.location}</p>
                            </div>
                        </div>
                        <ul class="position-duties">
                            { for position.description.iter().map(|duty| html! { <li>{*duty}</li> }) }
                        </ul>
                        <h4>{content.technologies_label}</h4>
                        <div class="chips">
                            { for position.technologies.iter().enumerate().map(|(tech, name)| html! {
                                <span class={classes!(class, "chip")} style={TECHNOLOGY_STAGGER.style(tech)}>{*name}</span>
                            }) }
                        </div>
                    </article>
                }) }

                <div class={classes!(class, "section-cta")} style={SECTION_STAGGER.style(content.positions.len() + 1)}>
                    <button class="button button--primary" type="button" onclick={on_cta}>{content.cta}</button>
                </div>
            </div>
        </section>
    }
}
