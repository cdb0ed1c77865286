use crate::i18n::Language;
use crate::view::{Theme, ViewConfig, DARK_CLASS};
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage};

const THEME_KEY: &str = "portfolio-theme";
const LANGUAGE_KEY: &str = "portfolio-language";

fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

fn store(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn resolve_theme() -> Theme {
    read_stored(THEME_KEY)
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or_else(|| {
            if media_matches("(prefers-color-scheme: dark)") {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

pub fn resolve_language() -> Language {
    read_stored(LANGUAGE_KEY)
        .and_then(|value| Language::from_str(&value))
        .unwrap_or_default()
}

pub fn persist_theme(theme: Theme) {
    store(THEME_KEY, theme.as_str());
}

pub fn persist_language(language: Language) {
    store(LANGUAGE_KEY, language.as_str());
}

pub fn apply_view(view: ViewConfig) {
    let attributes = view.document_attributes();
    let Some(document) = document() else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("dir", attributes.dir.as_str());
        let _ = root.set_attribute("lang", attributes.lang);
        let classes = root.class_list();
        let _ = if attributes.dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }

    if let Some(body) = document.body() {
        let _ = body.style().set_property("font-family", attributes.font_family);
    }
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn apply_view_with_transition(view: ViewConfig) {
    if prefers_reduced_motion() {
        apply_view(view);
        return;
    }

    let Some(document) = document() else {
        apply_view(view);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) = Reflect::get(&document_js, &JsValue::from_str("startViewTransition")) else {
        apply_view(view);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_view(view);
        return;
    };

    let callback = Closure::once_into_js(move || apply_view(view));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_view(view);
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_section(anchor: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(anchor)) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
