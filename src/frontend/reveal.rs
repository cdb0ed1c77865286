use crate::logging::{log_event, LogLevel};
use crate::reveal::{RevealLatch, ENTER_DELAY_MS, REVEAL_THRESHOLD};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(node: &NodeRef, section: &'static str, visible: UseStateHandle<bool>) -> Option<Observation> {
    let element = node.cast::<web_sys::Element>()?;
    let latch = Rc::new(RefCell::new(RevealLatch::new()));

    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let flipped = latch
                .borrow_mut()
                .observe(entry.is_intersecting(), entry.intersection_ratio());

            if flipped {
                log_event(LogLevel::Debug, "section_revealed", json!({ "section": section }));
                visible.set(true);
                observer.disconnect();
                return;
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&element);

    Some(Observation {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_reveal(section: &'static str) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let observation = observe(&node, section, visible);
            move || drop(observation)
        });
    }

    (node, *visible)
}

#[hook]
pub fn use_entered() -> bool {
    let entered = use_state_eq(|| false);

    {
        let entered = entered.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(ENTER_DELAY_MS, move || entered.set(true));
            move || drop(timeout)
        });
    }

    *entered
}
