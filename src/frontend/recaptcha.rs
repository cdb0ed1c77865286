use crate::contact::CaptchaWidget;
use crate::logging::{log_event, LogLevel};
use js_sys::{Function, Object, Reflect};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element};
use yew::Callback;

type TokenCallback = Closure<dyn FnMut(JsValue)>;

#[derive(Clone, Default)]
pub struct RecaptchaHandle {
    widget_id: Rc<Cell<Option<f64>>>,
    callbacks: Rc<RefCell<Vec<TokenCallback>>>,
}

fn grecaptcha() -> Option<JsValue> {
    let window: JsValue = window()?.into();
    Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .ok()
        .filter(|value| value.is_object())
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

impl RecaptchaHandle {
    /// Renders the widget into `container` once the script is ready.
    /// `on_token` receives the token on completion and `None` on expiry or error.
    pub fn render(&self, container: Element, site_key: String, on_token: Callback<Option<String>>) {
        let Some(grecaptcha) = grecaptcha() else {
            log_event(LogLevel::Warn, "recaptcha_unavailable", json!({}));
            return;
        };

        let Some(ready) = method(&grecaptcha, "ready") else {
            self.render_now(&grecaptcha, &container, &site_key, on_token);
            return;
        };

        let handle = self.clone();
        let target = grecaptcha.clone();
        let on_ready = Closure::once_into_js(move || {
            handle.render_now(&target, &container, &site_key, on_token);
        });
        let _ = ready.call1(&grecaptcha, &on_ready);
    }

    fn render_now(&self, grecaptcha: &JsValue, container: &Element, site_key: &str, on_token: Callback<Option<String>>) {
        let Some(render) = method(grecaptcha, "render") else {
            return;
        };

        let completed = {
            let on_token = on_token.clone();
            TokenCallback::new(move |token: JsValue| on_token.emit(token.as_string()))
        };
        let expired = {
            let on_token = on_token.clone();
            TokenCallback::new(move |_| on_token.emit(None))
        };
        let errored = TokenCallback::new(move |_| on_token.emit(None));

        let options = Object::new();
        let _ = Reflect::set(&options, &JsValue::from_str("sitekey"), &JsValue::from_str(site_key));
        let _ = Reflect::set(&options, &JsValue::from_str("callback"), completed.as_ref());
        let _ = Reflect::set(&options, &JsValue::from_str("expired-callback"), expired.as_ref());
        let _ = Reflect::set(&options, &JsValue::from_str("error-callback"), errored.as_ref());

        match render.call2(grecaptcha, container, &options) {
            Ok(widget_id) => self.widget_id.set(widget_id.as_f64()),
            Err(_) => {
                log_event(LogLevel::Warn, "recaptcha_render_failed", json!({}));
                return;
            }
        }

        self.callbacks.borrow_mut().extend([completed, expired, errored]);
    }
}

impl CaptchaWidget for RecaptchaHandle {
    fn reset(&self) {
        let Some(grecaptcha) = grecaptcha() else {
            return;
        };
        let Some(reset) = method(&grecaptcha, "reset") else {
            return;
        };

        let widget_id = self.widget_id.get().map(JsValue::from_f64).unwrap_or(JsValue::UNDEFINED);
        let _ = reset.call1(&grecaptcha, &widget_id);
    }
}
