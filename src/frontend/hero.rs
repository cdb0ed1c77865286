use super::bubbles::FloatingBubbles;
use super::dom::scroll_to_section;
use super::reveal::use_entered;
use super::SectionProps;
use crate::bubbles::BubbleColor;
use crate::content::hero::{HERO, PORTRAIT_SRC};
use crate::content::profile::SOCIAL_LINKS;
use crate::reveal::{reveal_class, SECTION_STAGGER};
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let content = HERO.select(props.view.language);
    let visible = use_entered();
    let item = |index: usize| (reveal_class(visible), SECTION_STAGGER.style(index));

    let on_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let on_scroll_down = Callback::from(|_: MouseEvent| scroll_to_section("about"));

    let (class0, style0) = item(0);
    let (class1, style1) = item(1);
    let (class2, style2) = item(2);
    let (class3, style3) = item(3);
    let (class4, style4) = item(4);

    html! {
        <section id="hero" class="section hero">
            <FloatingBubbles count={6} color={BubbleColor::Mixed} />
            <div class="container hero-grid">
                <div class="hero-copy">
                    <p class={class0} style={style0}>{content.greeting}</p>
                    <h1 class={classes!(class1, "gradient-text")} style={style1}>{content.name}</h1>
                    <div class={class2} style={style2}>
                        <p class="hero-title">{content.title}</p>
                        <p class="hero-company">{content.company}</p>
                        <p class="hero-location">{"⌖ "}{content.location}</p>
                    </div>
                    <p class={classes!(class3, "hero-description")} style={style3}>{content.description}</p>
                    <div class={classes!(class4, "hero-actions")} style={style4.clone()}>
                        <button class="button button--primary" type="button" onclick={on_contact}>
                            {content.cta}
                        </button>
                        <div class="socials">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a
                                    class={classes!("social", link.kind.class())}
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    title={link.name}
                                >
                                    <span aria-hidden="true">{link.kind.icon()}</span>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
                <div class={classes!(reveal_class(visible), "hero-portrait")} style={style4}>
                    <img src={PORTRAIT_SRC} alt={content.portrait_alt} />
                </div>
            </div>
            <button class="scroll-down" type="button" onclick={on_scroll_down}>
                <span>{content.scroll_down}</span>
                <span aria-hidden="true">{"↓"}</span>
            </button>
        </section>
    }
}
