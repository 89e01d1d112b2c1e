use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config::AgentInfo;
use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct AgentModalProps {
    /// Catalog entry shown in the dialog; `None` keeps the modal hidden.
    pub agent: Option<&'static AgentInfo>,
    pub on_close: Callback<()>,
}

#[function_component(AgentModal)]
pub fn agent_modal(props: &AgentModalProps) -> Html {
    let active = props.agent.is_some();

    // Move focus into the dialog when it opens
    {
        use_effect_with_deps(
            move |active| {
                if *active {
                    if let Some(dialog) = dom::element_by_id("agent-modal")
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    {
                        let _ = dialog.focus();
                    }
                }
                || ()
            },
            active,
        );
    }

    // Escape closes the dialog; the listener only exists while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |active| {
                let destructor: Box<dyn FnOnce()> = if *active {
                    if let Some(doc) = dom::document() {
                        let callback = Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(
                            move |e: web_sys::KeyboardEvent| {
                                if e.key() == "Escape" {
                                    on_close.emit(());
                                }
                            },
                        );
                        let _ = doc.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(doc) = dom::document() {
                                let _ = doc.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            active,
        );
    }

    // Only a click on the backdrop itself closes; clicks inside the content
    // bubble up with a different target and are ignored.
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .map(|element| element.id() == "agent-modal")
                .unwrap_or(false);
            if on_backdrop {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id="agent-modal"
            class={classes!("modal", if active { "active" } else { "" })}
            role="dialog"
            aria-modal="true"
            aria-hidden={if active { "false" } else { "true" }}
            tabindex="-1"
            onclick={on_backdrop_click}
        >
            <div class="modal-content">
                <button class="modal-close" aria-label="Close dialog" onclick={on_close_click}>
                    {"\u{00d7}"}
                </button>
                {
                    if let Some(agent) = props.agent {
                        html! {
                            <>
                                <h3 id="modal-title">{agent.title}</h3>
                                <p id="modal-description">{agent.description}</p>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
    .modal {
        position: fixed;
        inset: 0;
        display: none;
        align-items: center;
        justify-content: center;
        background: rgba(15, 18, 30, 0.55);
        z-index: 200;
    }
    .modal.active {
        display: flex;
    }
    .modal-content {
        position: relative;
        width: min(480px, calc(100% - 2rem));
        background: #fff;
        border-radius: 12px;
        padding: 2.5rem 2rem 2rem;
        box-shadow: 0 18px 50px rgba(15, 18, 30, 0.25);
    }
    .modal-close {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        border: none;
        background: none;
        font-size: 1.5rem;
        line-height: 1;
        cursor: pointer;
        color: #6B7280;
    }
    .modal-close:hover {
        color: #1F2430;
    }
    #modal-title {
        margin: 0 0 0.75rem;
        font-size: 1.35rem;
        color: #1F2430;
    }
    #modal-description {
        margin: 0;
        color: #4B5563;
        line-height: 1.6;
    }
                "#}
            </style>
        </div>
    }
}
