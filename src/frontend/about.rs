use super::bubbles::FloatingBubbles;
use super::reveal::use_reveal;
use super::SectionProps;
use crate::bubbles::BubbleColor;
use crate::content::about::{InfoCard, ABOUT};
use crate::reveal::{reveal_class, INTEREST_STAGGER, SECTION_STAGGER, STAT_STAGGER};
use yew::prelude::*;

fn info_card(card: &InfoCard, accent: &'static str) -> Html {
    html! {
        <div class={classes!("card", accent)}>
            <h3 class="card-title">{card.title}</h3>
            <p class="card-heading">{card.heading}</p>
            <p>{card.organization}</p>
            <p class="muted">{card.location}{" · "}{card.period}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    let content = ABOUT.select(props.view.language);
    let (node, visible) = use_reveal("about");
    let class = reveal_class(visible);

    html! {
        <section id="about" class="section section--alt" ref={node}>
            <FloatingBubbles count={4} color={BubbleColor::Mixed} />
            <div class="container">
                <header class={classes!(class, "section-header")} style={SECTION_STAGGER.style(0)}>
                    <h2 class="gradient-text">{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                </header>

                <div class="about-grid">
                    <div class={class} style={SECTION_STAGGER.style(1)}>
                        <p class="lead">{content.description}</p>
                        <div class="card-pair">
                            { info_card(&content.education, "accent--blue") }
                            { info_card(&content.experience, "accent--green") }
                        </div>
                    </div>

                    <div class={class} style={SECTION_STAGGER.style(2)}>
                        <h3>{content.interests_title}</h3>
                        <ul class="interest-list">
                            { for content.interests.iter().enumerate().map(|(index, interest)| html! {
                                <li class={class} style={INTEREST_STAGGER.style(index)}>{*interest}</li>
                            }) }
                        </ul>
                        <div class="stats">
                            { for content.stats.iter().enumerate().map(|(index, stat)| html! {
                                <div class={classes!(class, "stat")} style={STAT_STAGGER.style(index)}>
                                    <span class="stat-icon" aria-hidden="true">{stat.icon.glyph()}</span>
                                    <span class="stat-number">{stat.number}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
