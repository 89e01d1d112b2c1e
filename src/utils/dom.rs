use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

/// Class added to an element once it has scrolled into view.
pub const REVEALED_CLASS: &str = "revealed";

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Height of the fixed navbar; anchor targets land just below it.
const HEADER_OFFSET: f64 = 80.0;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// All elements matching a selector; empty when the document or the query
/// is unavailable.
pub fn query_all(selector: &str) -> Vec<Element> {
    let mut found = Vec::new();
    if let Some(doc) = document() {
        if let Ok(list) = doc.query_selector_all(selector) {
            for index in 0..list.length() {
                if let Some(node) = list.item(index) {
                    if let Ok(element) = node.dyn_into::<Element>() {
                        found.push(element);
                    }
                }
            }
        }
    }
    found
}

/// Whether the runtime exposes `IntersectionObserver`.
pub fn observers_supported() -> bool {
    match web_sys::window() {
        Some(window) => {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        }
        None => false,
    }
}

/// Options for the reveal watcher: trigger at 10% visibility with the
/// viewport bottom pulled up by 50px, so elements animate just before they
/// would naturally appear.
pub fn reveal_options() -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options
}

/// Watch `targets` and run `on_visible` once per element the first time it
/// comes into view; each element is unobserved right after, so the effect
/// never repeats. `None` keeps the stock observer settings. No targets means
/// no observer.
pub fn observe_once(
    targets: &[Element],
    options: Option<IntersectionObserverInit>,
    on_visible: impl Fn(&Element) + 'static,
) {
    if targets.is_empty() {
        return;
    }
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        let target = entry.target();
                        on_visible(&target);
                        observer.unobserve(&target);
                    }
                }
            }
        },
    );
    let observer = match &options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    if let Ok(observer) = observer {
        for element in targets {
            observer.observe(element);
        }
        // The observer lives for the page, so the callback is never dropped
        callback.forget();
    }
}

/// Mark an element revealed. The class list deduplicates, so repeating the
/// call leaves the element in the same terminal state.
pub fn reveal(element: &Element) {
    let _ = element.class_list().add_1(REVEALED_CLASS);
}

/// Swap a deferred image source into place and drop the placeholder class.
/// Elements without `data-src` are left untouched.
pub fn load_deferred_image(element: &Element) {
    if let Some(src) = element.get_attribute("data-src") {
        let _ = element.set_attribute("src", &src);
        let _ = element.class_list().remove_1("lazy");
    }
}

/// Smooth-scroll the viewport so `target` sits just below the fixed navbar.
pub fn scroll_to_anchor(target: &Element) {
    if let Some(window) = web_sys::window() {
        let top = target.get_bounding_client_rect().top()
            + window.page_y_offset().unwrap_or(0.0)
            - HEADER_OFFSET;
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
