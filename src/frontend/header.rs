use super::dom::{scroll_to_section, scroll_y};
use super::reveal::use_entered;
use crate::content::header::NAV;
use crate::reveal::{is_scrolled, reveal_class, NAV_STAGGER};
use crate::view::ViewConfig;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub view: ViewConfig,
    pub on_toggle_language: Callback<()>,
    pub on_toggle_theme: Callback<()>,
}

#[hook]
fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| is_scrolled(scroll_y()));

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut()>::new(move || {
                scrolled.set(is_scrolled(scroll_y()));
            });

            if let Some(win) = window() {
                let _ = win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    *scrolled
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let language = props.view.language;
    let theme = props.view.theme;
    let content = NAV.select(language);
    let scrolled = use_scrolled();
    let menu_open = use_state(|| false);
    let entered = use_entered();

    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_brand = Callback::from(|_: MouseEvent| scroll_to_section("hero"));

    let on_language = props.on_toggle_language.reform(|_: MouseEvent| ());
    let on_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    let nav_items = content.items.iter().enumerate().map(|(index, item)| {
        let onclick = {
            let menu_open = menu_open.clone();
            let anchor = item.anchor;
            Callback::from(move |_: MouseEvent| {
                scroll_to_section(anchor);
                menu_open.set(false);
            })
        };
        html! {
            <li key={item.anchor} class={reveal_class(entered)} style={NAV_STAGGER.style(index)}>
                <button type="button" class="nav-link" {onclick}>{item.name}</button>
            </li>
        }
    });

    html! {
        <header class={classes!("site-header", scrolled.then_some("is-scrolled"))}>
            <div class="container header-bar">
                <button type="button" class="brand gradient-text" onclick={on_brand}>{content.brand}</button>

                <nav class={classes!("site-nav", menu_open.then_some("is-open"))}>
                    <ul>{ for nav_items }</ul>
                </nav>

                <div class="header-actions">
                    <button
                        type="button"
                        class="icon-button"
                        aria-label={language.toggle_label()}
                        onclick={on_language}
                    >
                        {language.toggled().as_str().to_uppercase()}
                    </button>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label={content.theme_label}
                        title={theme.toggle_label(language)}
                        aria-pressed={theme.is_dark().to_string()}
                        onclick={on_theme}
                    >
                        <span aria-hidden="true">{theme.icon()}</span>
                    </button>
                    <button
                        type="button"
                        class="icon-button menu-toggle"
                        aria-label={content.menu_label}
                        aria-expanded={menu_open.to_string()}
                        onclick={on_menu}
                    >
                        <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
