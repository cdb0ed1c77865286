// Rendered only by the wasm frontend; native builds run their tests.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod bubbles;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod calendar;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod config;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod content;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod i18n;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod logging;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod reveal;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod splash;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod view;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
