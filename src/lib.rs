use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

use pages::landing::Landing;
use utils::storage::BrowserStore;
use utils::theme;

// Global flag so a repeated bootstrap call cannot mount the app twice
static BOOTSTRAPPED: AtomicBool = AtomicBool::new(false);

#[function_component(App)]
pub fn app() -> Html {
    html! { <Landing /> }
}

/// Boot the landing page. Defers until `DOMContentLoaded` when the parser is
/// still running, otherwise mounts right away. Later calls are no-ops.
pub fn run() {
    if BOOTSTRAPPED.swap(true, Ordering::SeqCst) {
        return;
    }
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("studyflow frontend starting");
    match utils::dom::document() {
        Some(doc) if doc.ready_state() == "loading" => {
            let callback = Closure::<dyn Fn()>::new(mount);
            let _ = doc.add_event_listener_with_callback(
                "DOMContentLoaded",
                callback.as_ref().unchecked_ref(),
            );
            callback.forget();
        }
        Some(_) => mount(),
        None => log::error!("document unavailable, nothing to mount"),
    }
}

fn mount() {
    // Restore the saved theme before the first paint of the app
    theme::init(&BrowserStore);
    yew::Renderer::<App>::new().render();
    log::info!("landing page mounted");
}
