use super::dom::{scroll_to_section, scroll_to_top};
use super::reveal::use_reveal;
use super::SectionProps;
use crate::calendar::copyright_year;
use crate::content::contact::{email_label, location_label, phone_label, CONTACT};
use crate::content::footer::FOOTER;
use crate::content::profile::{mailto, tel, EMAIL, SOCIAL_LINKS};
use crate::reveal::{reveal_class, transition_delay, NAV_STAGGER};
use chrono::Local;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
    let language = props.view.language;
    let content = FOOTER.select(language);
    let contact = CONTACT.select(language);
    let (node, visible) = use_reveal("footer");
    let class = reveal_class(visible);
    let year = copyright_year(language, Local::now().date_naive());

    let on_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer" ref={node}>
            <div class="container footer-grid">
                <div class={classes!(class, "footer-brand")} style={transition_delay(0.0)}>
                    <h3 class="gradient-text">{content.name}</h3>
                    <p>{content.description}</p>
                    <h4>{content.social_title}</h4>
                    <div class="socials">
                        { for SOCIAL_LINKS.iter().enumerate().map(|(index, link)| html! {
                            <a
                                class={classes!(class, "social", link.kind.class())}
                                style={NAV_STAGGER.style(index)}
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

                <div class={class} style={transition_delay(0.2)}>
                    <h4>{content.quick_links_title}</h4>
                    <ul class="quick-links">
                        { for content.quick_links.iter().map(|link| {
                            let anchor = link.anchor;
                            let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(anchor));
                            html! {
                                <li key={link.anchor}>
                                    <button type="button" class="nav-link" {onclick}>{link.name}</button>
                                </li>
                            }
                        }) }
                    </ul>
                </div>

                <div class={class} style={transition_delay(0.4)}>
                    <h4>{content.contact_title}</h4>
                    <p class="muted">{email_label(language)}</p>
                    <a href={mailto()}>{EMAIL}</a>
                    <p class="muted">{phone_label(language)}</p>
                    <a href={tel()} class="isolate">{contact.phone_display}</a>
                    <p class="muted">{location_label(language)}</p>
                    <p>{contact.location}</p>
                </div>
            </div>

            <div class={classes!(class, "container", "footer-bottom")} style={transition_delay(0.6)}>
                <p>
                    {content.copyright.text}
                    <span class="heart" aria-hidden="true">{" ♥ "}</span>
                    {content.copyright.by}
                </p>
                <p class="muted">{format!("© {year} {}", content.copyright.rights)}</p>
            </div>

            <button type="button" class="back-to-top" aria-label={content.back_to_top} onclick={on_top}>
                {"↑"}
            </button>
        </footer>
    }
}
