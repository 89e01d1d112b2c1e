use yew::prelude::*;

use crate::utils::dom;

// In-page sections reachable from the navigation bar
const NAV_LINKS: [(&str, &str); 4] = [
    ("#agents", "Agents"),
    ("#how-it-works", "How It Works"),
    ("#features", "Features"),
    ("#signup", "Get Started"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Each link closes the mobile menu; when its target exists on the page
    // the default jump is replaced by an offset smooth scroll.
    let nav_link = {
        let menu_open = menu_open.clone();
        move |href: &'static str, label: &'static str| {
            let menu_open = menu_open.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                menu_open.set(false);
                if let Some(id) = href.strip_prefix('#') {
                    if let Some(target) = dom::element_by_id(id) {
                        e.prevent_default();
                        dom::scroll_to_anchor(&target);
                    }
                }
            });
            html! {
                <a class="nav-link" href={href} onclick={onclick}>{label}</a>
            }
        }
    };

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a class="nav-logo" href="#top"
                    onclick={Callback::from(|e: MouseEvent| {
                        if let Some(target) = dom::element_by_id("top") {
                            e.prevent_default();
                            dom::scroll_to_anchor(&target);
                        }
                    })}
                >
                    {"StudyFlow"}
                </a>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                </button>
                <div class={classes!("nav-links", if *menu_open { "active" } else { "" })}>
                    { for NAV_LINKS.iter().map(|&(href, label)| nav_link(href, label)) }
                </div>
            </div>
            <style>
                {r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 80px;
        background: rgba(255, 255, 255, 0.92);
        backdrop-filter: blur(8px);
        border-bottom: 1px solid rgba(31, 36, 48, 0.08);
        z-index: 100;
    }
    .nav-container {
        max-width: 1100px;
        height: 100%;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.4rem;
        font-weight: 700;
        text-decoration: none;
        background: linear-gradient(45deg, #5B6CFF, #9B7BFF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        color: #1F2430;
        text-decoration: none;
        font-weight: 500;
        transition: color 0.2s ease;
    }
    .nav-link:hover {
        color: #5B6CFF;
    }
    .menu-toggle {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.5rem;
    }
    .menu-bar {
        width: 24px;
        height: 2px;
        background: #1F2430;
    }
    @media (max-width: 768px) {
        .menu-toggle {
            display: flex;
        }
        .nav-links {
            position: absolute;
            top: 80px;
            left: 0;
            right: 0;
            display: none;
            flex-direction: column;
            gap: 0;
            background: #fff;
            border-bottom: 1px solid rgba(31, 36, 48, 0.08);
        }
        .nav-links.active {
            display: flex;
        }
        .nav-link {
            padding: 1rem 1.5rem;
        }
    }
                "#}
            </style>
        </nav>
    }
}
