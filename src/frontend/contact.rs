use super::bubbles::FloatingBubbles;
use super::dom::alert;
use super::recaptcha::RecaptchaHandle;
use super::reveal::use_reveal;
use crate::bubbles::BubbleColor;
use crate::config::SiteConfig;
use crate::contact::{success_alert, ContactController, FormField, FormTransport, GlooTransport};
use crate::content::contact::{email_label, location_label, phone_label, CONTACT};
use crate::content::profile::{mailto, tel, EMAIL, SOCIAL_LINKS};
use crate::logging::{log_event, LogLevel};
use crate::reveal::{reveal_class, SECTION_STAGGER};
use crate::view::ViewConfig;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub view: ViewConfig,
    pub config: Rc<SiteConfig>,
}

type SharedController = Rc<RefCell<ContactController<RecaptchaHandle>>>;

fn field_input(controller: &SharedController, redraw: &UseForceUpdateHandle, field: FormField) -> Callback<InputEvent> {
    let controller = controller.clone();
    let redraw = redraw.clone();
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| event.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
            .unwrap_or_default();
        controller.borrow_mut().set_field(field, value);
        redraw.force_update();
    })
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let language = props.view.language;
    let content = CONTACT.select(language);
    let (node, visible) = use_reveal("contact");
    let class = reveal_class(visible);

    let controller: SharedController = use_mut_ref(|| ContactController::new(RecaptchaHandle::default()));
    let redraw = use_force_update();
    let captcha_node = use_node_ref();

    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let captcha_node = captcha_node.clone();
        let site_key = props.config.recaptcha_site_key.clone();
        use_effect_with((), move |_| {
            match (site_key, captcha_node.cast::<web_sys::Element>()) {
                (Some(site_key), Some(container)) => {
                    let widget = controller.borrow().widget().clone();
                    let on_token = Callback::from(move |token: Option<String>| {
                        controller.borrow_mut().set_captcha_token(token);
                        redraw.force_update();
                    });
                    widget.render(container, site_key, on_token);
                }
                (None, _) => {
                    log_event(LogLevel::Warn, "recaptcha_unconfigured", json!({}));
                }
                (Some(_), None) => {}
            }
            || ()
        });
    }

    let onsubmit = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let endpoint = props.config.contact_form_endpoint.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let payload = match controller.borrow_mut().begin() {
                Ok(payload) => payload,
                Err(error) => {
                    if let Some(message) = error.alert(language) {
                        alert(message);
                    }
                    return;
                }
            };
            redraw.force_update();

            let controller = controller.clone();
            let redraw = redraw.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let outcome = GlooTransport.send(&endpoint, &payload).await;
                let result = controller.borrow_mut().finish(outcome);
                redraw.force_update();

                match result {
                    Ok(()) => alert(success_alert(language)),
                    Err(error) => {
                        if let Some(message) = error.alert(language) {
                            alert(message);
                        }
                    }
                }
            });
        })
    };

    let state = controller.borrow();
    let form = state.form();
    let submitting = state.is_submitting();

    html! {
        <section id="contact" class="section" ref={node}>
            <FloatingBubbles count={4} color={BubbleColor::Primary} />
            <div class="container">
                <header class={classes!(class, "section-header")} style={SECTION_STAGGER.style(0)}>
                    <h2 class="gradient-text">{content.title}</h2>
                    <p class="section-subtitle">{content.subtitle}</p>
                    <p class="lead">{content.description}</p>
                </header>

                <div class="contact-grid">
                    <div class={class} style={SECTION_STAGGER.style(1)}>
                        <div class="card contact-item">
                            <h3>{email_label(language)}</h3>
                            <a href={mailto()}>{EMAIL}</a>
                        </div>
                        <div class="card contact-item">
                            <h3>{phone_label(language)}</h3>
                            <a href={tel()} class="isolate">{content.phone_display}</a>
                        </div>
                        <div class="card contact-item">
                            <h3>{location_label(language)}</h3>
                            <p>{content.location}</p>
                        </div>

                        <h3>{content.social_title}</h3>
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

                    <form class={classes!(class, "card", "contact-form")} style={SECTION_STAGGER.style(2)} {onsubmit}>
                        <div class="form-row">
                            <label>
                                {content.form.name}
                                <input
                                    type="text"
                                    name="name"
                                    required=true
                                    value={form.name.clone()}
                                    oninput={field_input(&controller, &redraw, FormField::Name)}
                                />
                            </label>
                            <label>
                                {content.form.email}
                                <input
                                    type="email"
                                    name="email"
                                    required=true
                                    value={form.email.clone()}
                                    oninput={field_input(&controller, &redraw, FormField::Email)}
                                />
                            </label>
                        </div>
                        <label>
                            {content.form.subject}
                            <input
                                type="text"
                                name="subject"
                                required=true
                                value={form.subject.clone()}
                                oninput={field_input(&controller, &redraw, FormField::Subject)}
                            />
                        </label>
                        <label>
                            {content.form.message}
                            <textarea
                                name="message"
                                rows="6"
                                required=true
                                value={form.message.clone()}
                                oninput={field_input(&controller, &redraw, FormField::Message)}
                            />
                        </label>

                        <div class="captcha" ref={captcha_node}></div>

                        <button class="button button--primary" type="submit" disabled={submitting}>
                            if submitting {
                                <span class="spinner" aria-hidden="true" />
                                {content.form.sending}
                            } else {
                                {content.form.send}
                            }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
