//! Browser checks for the landing page building blocks.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use studyflow_frontend::components::agent_modal::{AgentModal, AgentModalProps};
use studyflow_frontend::components::navbar::Navbar;
use studyflow_frontend::components::signup::SignupForm;
use studyflow_frontend::config;
use studyflow_frontend::utils::dom;
use studyflow_frontend::utils::storage::{BrowserStore, MemoryStore, PreferenceStore};
use studyflow_frontend::utils::theme;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh container attached to the body, so component events can bubble.
fn mount_point() -> Element {
    let host = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&host).unwrap();
    host
}

fn type_into(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    let init = web_sys::InputEventInit::new();
    init.set_bubbles(true);
    let event = web_sys::InputEvent::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

/// Bubbling, cancelable click whose `default_prevented` flag stays readable
/// after dispatch.
fn synthetic_click() -> web_sys::MouseEvent {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    web_sys::MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn reveal_is_one_way() {
    let element = document().create_element("div").unwrap();
    dom::reveal(&element);
    assert!(element.class_list().contains("revealed"));
    dom::reveal(&element);
    assert_eq!(element.class_name(), "revealed");
}

#[wasm_bindgen_test]
fn deferred_image_upgrades_once_marked() {
    let image = document().create_element("img").unwrap();
    image.set_class_name("lazy");
    image.set_attribute("data-src", "/assets/example.svg").unwrap();
    dom::load_deferred_image(&image);
    assert_eq!(
        image.get_attribute("src").as_deref(),
        Some("/assets/example.svg")
    );
    assert!(!image.class_list().contains("lazy"));
}

#[wasm_bindgen_test]
fn image_without_deferred_source_is_untouched() {
    let image = document().create_element("img").unwrap();
    dom::load_deferred_image(&image);
    assert!(image.get_attribute("src").is_none());
}

#[wasm_bindgen_test]
fn intersection_observers_are_detected() {
    assert!(dom::observers_supported());
}

#[wasm_bindgen_test]
fn reveal_options_carry_the_animation_tuning() {
    let options = dom::reveal_options();
    let threshold = options.get_threshold().as_f64();
    assert_eq!(threshold, Some(0.1));
    assert_eq!(
        options.get_root_margin().as_deref(),
        Some("0px 0px -50px 0px")
    );
}

#[wasm_bindgen_test]
async fn stock_watcher_fires_once_for_a_visible_target() {
    let target = document().create_element("div").unwrap();
    // Pin it inside the viewport no matter what else the page holds
    target
        .set_attribute("style", "position:fixed;top:0;left:0;width:10px;height:10px")
        .unwrap();
    document().body().unwrap().append_child(&target).unwrap();

    let hits = Rc::new(Cell::new(0u32));
    let seen = hits.clone();
    dom::observe_once(&[target.clone()], None, move |element| {
        seen.set(seen.get() + 1);
        dom::reveal(element);
    });

    let mut polls = 0;
    while hits.get() == 0 && polls < 20 {
        TimeoutFuture::new(50).await;
        polls += 1;
    }
    assert_eq!(hits.get(), 1);
    assert!(target.class_list().contains("revealed"));

    target.remove();
}

#[wasm_bindgen_test]
fn browser_store_round_trips_local_storage() {
    let store = BrowserStore;
    store.write("studyflow_test_key", "hello");
    assert_eq!(store.read("studyflow_test_key").as_deref(), Some("hello"));
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item("studyflow_test_key").unwrap();
}

#[wasm_bindgen_test]
fn theme_apply_tags_the_document_element() {
    theme::apply("dark");
    let root = document().document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn theme_init_restores_saved_preference() {
    let store = MemoryStore::new();
    store.write("studyflow_theme", "light");
    theme::init(&store);
    let root = document().document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn theme_set_applies_and_persists() {
    let store = MemoryStore::new();
    theme::set(&store, "dark");
    let root = document().document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(store.read("studyflow_theme").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
async fn menu_toggle_mirrors_state_into_class_and_aria() {
    let host = mount_point();
    yew::Renderer::<Navbar>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let toggle = host.query_selector(".menu-toggle").unwrap().unwrap();
    let links = host.query_selector(".nav-links").unwrap().unwrap();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!links.class_list().contains("active"));

    toggle.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(links.class_list().contains("active"));

    toggle.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!links.class_list().contains("active"));

    host.remove();
}

#[wasm_bindgen_test]
async fn any_nav_link_click_closes_the_menu() {
    let host = mount_point();
    yew::Renderer::<Navbar>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let toggle = host.query_selector(".menu-toggle").unwrap().unwrap();
    toggle.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;
    let links = host.query_selector(".nav-links").unwrap().unwrap();
    assert!(links.class_list().contains("active"));

    let link = host.query_selector(".nav-link").unwrap().unwrap();
    link.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;

    assert!(!links.class_list().contains("active"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    host.remove();
}

#[wasm_bindgen_test]
async fn nav_links_only_capture_clicks_with_an_in_page_target() {
    let host = mount_point();
    yew::Renderer::<Navbar>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let link = host.query_selector("a[href='#agents']").unwrap().unwrap();

    // No agents section on the page yet, so the default jump stays live
    let event = synthetic_click();
    link.dispatch_event(&event).unwrap();
    assert!(!event.default_prevented());

    let section = document().create_element("div").unwrap();
    section.set_id("agents");
    document().body().unwrap().append_child(&section).unwrap();

    let event = synthetic_click();
    link.dispatch_event(&event).unwrap();
    assert!(event.default_prevented());

    section.remove();
    host.remove();
}

#[wasm_bindgen_test]
async fn modal_renders_catalog_entry() {
    let host = mount_point();
    let props = AgentModalProps {
        agent: config::agent_info("planner"),
        on_close: Callback::noop(),
    };
    yew::Renderer::<AgentModal>::with_root_and_props(host.clone(), props).render();
    TimeoutFuture::new(50).await;

    let modal = host.query_selector(".modal").unwrap().unwrap();
    assert!(modal.class_list().contains("active"));
    assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("false"));
    let title = host.query_selector("#modal-title").unwrap().unwrap();
    assert_eq!(
        title.text_content().as_deref(),
        Some("Planner Agent - Personalized Study Scheduling")
    );

    host.remove();
}

#[wasm_bindgen_test]
async fn modal_stays_hidden_without_a_selection() {
    let host = mount_point();
    let props = AgentModalProps {
        agent: None,
        on_close: Callback::noop(),
    };
    yew::Renderer::<AgentModal>::with_root_and_props(host.clone(), props).render();
    TimeoutFuture::new(50).await;

    let modal = host.query_selector(".modal").unwrap().unwrap();
    assert!(!modal.class_list().contains("active"));
    assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert!(host.query_selector("#modal-title").unwrap().is_none());

    host.remove();
}

#[wasm_bindgen_test]
async fn escape_asks_an_open_modal_to_close() {
    let host = mount_point();
    let closed = Rc::new(Cell::new(false));
    let on_close = {
        let closed = closed.clone();
        Callback::from(move |_| closed.set(true))
    };
    let props = AgentModalProps {
        agent: config::agent_info("rag"),
        on_close,
    };
    yew::Renderer::<AgentModal>::with_root_and_props(host.clone(), props).render();
    TimeoutFuture::new(50).await;

    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let event =
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
    TimeoutFuture::new(50).await;

    assert!(closed.get());
    host.remove();
}

#[wasm_bindgen_test]
async fn close_button_asks_to_close_exactly_once() {
    let host = mount_point();
    let closes = Rc::new(Cell::new(0u32));
    let on_close = {
        let closes = closes.clone();
        Callback::from(move |_| closes.set(closes.get() + 1))
    };
    let props = AgentModalProps {
        agent: config::agent_info("explainer"),
        on_close,
    };
    yew::Renderer::<AgentModal>::with_root_and_props(host.clone(), props).render();
    TimeoutFuture::new(50).await;

    let button = host.query_selector(".modal-close").unwrap().unwrap();
    button.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;

    // The click also bubbles to the backdrop handler, which must ignore it
    assert_eq!(closes.get(), 1);

    host.remove();
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_but_content_clicks_do_not() {
    let host = mount_point();
    let closed = Rc::new(Cell::new(false));
    let on_close = {
        let closed = closed.clone();
        Callback::from(move |_| closed.set(true))
    };
    let props = AgentModalProps {
        agent: config::agent_info("planner"),
        on_close,
    };
    yew::Renderer::<AgentModal>::with_root_and_props(host.clone(), props).render();
    TimeoutFuture::new(50).await;

    let content = host.query_selector(".modal-content").unwrap().unwrap();
    content.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;
    assert!(!closed.get());

    let backdrop = host.query_selector(".modal").unwrap().unwrap();
    backdrop.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(50).await;
    assert!(closed.get());

    host.remove();
}

#[wasm_bindgen_test]
async fn signup_shows_inline_error_and_keeps_storage_clean() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item("studyflow_email").unwrap();

    let host = mount_point();
    yew::Renderer::<SignupForm>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let input: HtmlInputElement = host
        .query_selector("input[type=email]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    type_into(&input, "not an email");
    TimeoutFuture::new(50).await;

    let form: HtmlFormElement = host
        .query_selector("form")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    form.request_submit().unwrap();
    TimeoutFuture::new(50).await;

    let message = host.query_selector(".error-message").unwrap().unwrap();
    assert_eq!(
        message.text_content().as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(BrowserStore.read("studyflow_email"), None);
    // The rejected input stays in the field
    assert_eq!(input.value(), "not an email");

    host.remove();
}

#[wasm_bindgen_test]
async fn signup_persists_trimmed_email_and_resets_the_field() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item("studyflow_email").unwrap();

    let host = mount_point();
    yew::Renderer::<SignupForm>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let input: HtmlInputElement = host
        .query_selector("input[type=email]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    type_into(&input, "  student@example.com  ");
    TimeoutFuture::new(50).await;

    let form: HtmlFormElement = host
        .query_selector("form")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    form.request_submit().unwrap();
    TimeoutFuture::new(50).await;

    assert_eq!(
        BrowserStore.read("studyflow_email").as_deref(),
        Some("student@example.com")
    );
    assert!(host.query_selector(".success-message").unwrap().is_some());
    assert_eq!(input.value(), "");

    storage.remove_item("studyflow_email").unwrap();
    host.remove();
}

// Mounts the whole app, so it runs last and leaves the page as-is.
#[wasm_bindgen_test]
async fn bootstrap_mounts_exactly_once() {
    let body = document().body().unwrap();
    studyflow_frontend::run();
    TimeoutFuture::new(100).await;
    let children_after_first = body.child_element_count();

    studyflow_frontend::run();
    TimeoutFuture::new(100).await;
    assert_eq!(body.child_element_count(), children_after_first);
}
