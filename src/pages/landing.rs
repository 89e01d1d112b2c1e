use yew::prelude::*;

use crate::components::agent_modal::AgentModal;
use crate::components::navbar::Navbar;
use crate::components::signup::SignupForm;
use crate::config::{self, AgentInfo};
use crate::utils::{dom, perf};

// Card copy shown on the page; the detail dialog pulls the longer copy out
// of the catalog by id.
const AGENT_CARDS: [(&str, &str, &str, &str); 3] = [
    (
        "rag",
        "fas fa-book-open",
        "RAG Agent",
        "Ask questions and get cited answers straight from your own notes, slides, and textbooks.",
    ),
    (
        "planner",
        "fas fa-calendar-days",
        "Planner Agent",
        "Turn deadlines and free hours into a week-by-week study schedule that adapts as you go.",
    ),
    (
        "explainer",
        "fas fa-lightbulb",
        "Explainer Agent",
        "Get tough concepts broken down into plain language, analogies, and worked examples.",
    ),
];

const PROBLEM_CARDS: [(&str, &str, &str); 3] = [
    (
        "fas fa-layer-group",
        "Scattered materials",
        "Notes in five apps, slides buried in email, past papers somewhere else entirely.",
    ),
    (
        "fas fa-hourglass-half",
        "No plan that sticks",
        "Deadlines pile up faster than any to-do list can keep up with.",
    ),
    (
        "fas fa-circle-question",
        "Concepts that won't click",
        "Rereading the same chapter three times is not the same as understanding it.",
    ),
];

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "fas fa-magnifying-glass",
        "Cited answers",
        "Every answer links back to the exact page of your material it came from.",
    ),
    (
        "fas fa-calendar-check",
        "Adaptive scheduling",
        "Missed a session? The plan rebalances itself instead of guilt-tripping you.",
    ),
    (
        "fas fa-graduation-cap",
        "Exam mode",
        "Short, focused review sessions in the final week before the exam.",
    ),
    (
        "fas fa-mobile-screen",
        "Works everywhere",
        "Runs in the browser on any device. Nothing to install.",
    ),
];

// Offset smooth scroll for in-page links; missing targets keep the default
// jump behavior.
fn scroll_link(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some(id) = href.strip_prefix('#') {
            if let Some(target) = dom::element_by_id(id) {
                e.prevent_default();
                dom::scroll_to_anchor(&target);
            }
        }
    })
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let selected_agent = use_state(|| None::<&'static AgentInfo>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Wire the reveal and lazy-image observers once the sections exist,
    // then report the page load time
    {
        use_effect_with_deps(
            move |_| {
                let revealables =
                    dom::query_all(".problem-card, .agent-card, .feature-item, section");
                if dom::observers_supported() {
                    dom::observe_once(&revealables, Some(dom::reveal_options()), dom::reveal);
                    // Deferred images upgrade at first sight, without the
                    // reveal offset
                    let deferred = dom::query_all("img[data-src]");
                    dom::observe_once(&deferred, None, dom::load_deferred_image);
                } else {
                    // No observers: show everything at once and leave the
                    // deferred images as placeholders
                    for element in &revealables {
                        dom::reveal(element);
                    }
                }
                perf::report_page_load();
                || ()
            },
            (),
        );
    }

    let open_agent = {
        let selected_agent = selected_agent.clone();
        move |id: &'static str| {
            let selected_agent = selected_agent.clone();
            Callback::from(move |_: MouseEvent| {
                // Ids without a catalog entry leave the dialog untouched
                if let Some(info) = config::agent_info(id) {
                    selected_agent.set(Some(info));
                }
            })
        }
    };

    let close_modal = {
        let selected_agent = selected_agent.clone();
        Callback::from(move |_| selected_agent.set(None))
    };

    html! {
        <div class="landing-page" id="top">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <Navbar />
            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Study Smarter, Not Longer"}</h1>
                    <p class="hero-subtitle">
                        {"Three AI study agents that answer from your own materials, plan your week, and explain what the textbook can't."}
                    </p>
                    <div class="hero-cta-group">
                        <a class="hero-cta" href="#signup" onclick={scroll_link("#signup")}>
                            {"Get Early Access"}
                        </a>
                        <a class="hero-secondary" href="#agents" onclick={scroll_link("#agents")}>
                            {"Meet the agents"}
                        </a>
                    </div>
                </div>
            </header>

            <section id="problem" class="problem-section">
                <h2>{"Studying alone is the hard way"}</h2>
                <div class="problem-grid">
                    { for PROBLEM_CARDS.iter().map(|&(icon, heading, text)| html! {
                        <div class="problem-card">
                            <i class={icon}></i>
                            <h3>{heading}</h3>
                            <p>{text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="agents" class="agents-section">
                <h2>{"Meet your study agents"}</h2>
                <p class="section-intro">
                    {"Each agent does one job well. Together they cover the whole study loop."}
                </p>
                <div class="agent-grid">
                    { for AGENT_CARDS.iter().map(|&(id, icon, heading, text)| html! {
                        <div class="agent-card" data-agent={id}>
                            <i class={icon}></i>
                            <h3>{heading}</h3>
                            <p>{text}</p>
                            <button class="learn-more" onclick={open_agent(id)}>
                                {"Learn more"}
                            </button>
                        </div>
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="showcase-section">
                <h2>{"How it works"}</h2>
                <div class="showcase-grid">
                    <div class="showcase-step">
                        <span class="step-number">{"1"}</span>
                        <h3>{"Drop in your materials"}</h3>
                        <p>{"Slides, notes, scanned chapters. StudyFlow indexes them privately for you."}</p>
                        <img class="lazy showcase-image" data-src="/assets/dashboard-preview.svg" alt="StudyFlow dashboard preview" />
                    </div>
                    <div class="showcase-step">
                        <span class="step-number">{"2"}</span>
                        <h3>{"Get a plan and follow it"}</h3>
                        <p>{"The planner spreads your revision over the weeks you actually have."}</p>
                        <img class="lazy showcase-image" data-src="/assets/planner-preview.svg" alt="Weekly study plan preview" />
                    </div>
                </div>
            </section>

            <section id="features" class="features-section">
                <h2>{"Built for real studying"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|&(icon, heading, text)| html! {
                        <div class="feature-item">
                            <i class={icon}></i>
                            <div>
                                <h3>{heading}</h3>
                                <p>{text}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="signup" class="signup-section">
                <h2>{"Be first in line"}</h2>
                <p class="section-intro">
                    {"StudyFlow is rolling out in small cohorts. Leave your email and we'll save you a spot."}
                </p>
                <SignupForm />
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <p class="footer-brand">{"StudyFlow"}</p>
                    <p class="footer-tagline">{"Your materials. Your schedule. Your pace."}</p>
                    <div class="footer-links">
                        <a href="#agents" onclick={scroll_link("#agents")}>{"Agents"}</a>
                        <a href="#features" onclick={scroll_link("#features")}>{"Features"}</a>
                        <a href="#signup" onclick={scroll_link("#signup")}>{"Early access"}</a>
                    </div>
                    <p class="footer-copyright">{"\u{00a9} 2026 StudyFlow"}</p>
                </div>
            </footer>

            <AgentModal agent={*selected_agent} on_close={close_modal} />

            <style>
                {r#"
    body {
        margin: 0;
        font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
        background: #F7F8FC;
        color: #1F2430;
    }
    .landing-page {
        padding-top: 80px;
    }
    .landing-page h2 {
        font-size: 2.2rem;
        margin: 0 0 1rem;
        text-align: center;
        background: linear-gradient(45deg, #1F2430, #5B6CFF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-intro {
        max-width: 560px;
        margin: 0 auto 2.5rem;
        text-align: center;
        color: #4B5563;
        line-height: 1.6;
    }
    section {
        padding: 4.5rem 1.5rem;
    }

    /* Reveal-on-scroll: elements start shifted and fade in once observed */
    .problem-card, .agent-card, .feature-item, section {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .revealed {
        opacity: 1;
        transform: translateY(0);
    }
    @media (prefers-reduced-motion: reduce) {
        .problem-card, .agent-card, .feature-item, section {
            transition: none;
        }
    }

    .hero {
        padding: 6rem 1.5rem 5rem;
        text-align: center;
        background:
            radial-gradient(circle at 20% 20%, rgba(91, 108, 255, 0.12), transparent 40%),
            radial-gradient(circle at 80% 10%, rgba(155, 123, 255, 0.12), transparent 45%);
    }
    .hero-title {
        font-size: 3rem;
        margin: 0 0 1rem;
        background: linear-gradient(45deg, #5B6CFF, #9B7BFF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        max-width: 620px;
        margin: 0 auto 2.5rem;
        font-size: 1.25rem;
        color: #4B5563;
        line-height: 1.6;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .hero-cta {
        padding: 0.95rem 2rem;
        border-radius: 8px;
        background: linear-gradient(45deg, #5B6CFF, #9B7BFF);
        color: #fff;
        font-weight: 600;
        text-decoration: none;
        box-shadow: 0 10px 24px rgba(91, 108, 255, 0.3);
    }
    .hero-secondary {
        padding: 0.95rem 2rem;
        border-radius: 8px;
        border: 1px solid rgba(91, 108, 255, 0.4);
        color: #5B6CFF;
        font-weight: 600;
        text-decoration: none;
    }

    .problem-grid, .agent-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
        max-width: 1000px;
        margin: 0 auto;
    }
    .problem-card, .agent-card {
        background: #fff;
        border-radius: 12px;
        padding: 2rem 1.5rem;
        box-shadow: 0 8px 24px rgba(31, 36, 48, 0.06);
        text-align: center;
    }
    .problem-card i, .agent-card i {
        font-size: 1.8rem;
        color: #5B6CFF;
        margin-bottom: 1rem;
    }
    .problem-card h3, .agent-card h3 {
        margin: 0 0 0.5rem;
        font-size: 1.15rem;
    }
    .problem-card p, .agent-card p {
        margin: 0;
        color: #4B5563;
        line-height: 1.55;
    }
    .learn-more {
        margin-top: 1.25rem;
        padding: 0.55rem 1.3rem;
        border: 1px solid rgba(91, 108, 255, 0.4);
        border-radius: 6px;
        background: none;
        color: #5B6CFF;
        font-weight: 600;
        cursor: pointer;
    }
    .learn-more:hover {
        background: rgba(91, 108, 255, 0.08);
    }

    .showcase-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 2rem;
        max-width: 1000px;
        margin: 0 auto;
    }
    .showcase-step {
        text-align: center;
    }
    .step-number {
        display: inline-flex;
        width: 2.2rem;
        height: 2.2rem;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: linear-gradient(45deg, #5B6CFF, #9B7BFF);
        color: #fff;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .showcase-step h3 {
        margin: 0 0 0.5rem;
    }
    .showcase-step p {
        color: #4B5563;
        margin: 0 0 1.25rem;
    }
    .showcase-image {
        width: 100%;
        min-height: 200px;
        border-radius: 12px;
        background: #E9ECF8;
        box-shadow: 0 8px 24px rgba(31, 36, 48, 0.08);
    }

    .feature-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 1.5rem;
        max-width: 900px;
        margin: 0 auto;
    }
    .feature-item {
        display: flex;
        gap: 1rem;
        background: #fff;
        border-radius: 12px;
        padding: 1.5rem;
        box-shadow: 0 8px 24px rgba(31, 36, 48, 0.06);
    }
    .feature-item i {
        font-size: 1.4rem;
        color: #5B6CFF;
        margin-top: 0.2rem;
    }
    .feature-item h3 {
        margin: 0 0 0.35rem;
        font-size: 1.05rem;
    }
    .feature-item p {
        margin: 0;
        color: #4B5563;
        line-height: 1.5;
    }

    .signup-section {
        text-align: center;
    }

    .footer {
        padding: 3rem 1.5rem;
        background: #1F2430;
        color: #E6E8F0;
        text-align: center;
    }
    .footer-brand {
        margin: 0 0 0.25rem;
        font-size: 1.3rem;
        font-weight: 700;
    }
    .footer-tagline {
        margin: 0 0 1.5rem;
        color: rgba(230, 232, 240, 0.7);
    }
    .footer-links {
        display: flex;
        gap: 1.5rem;
        justify-content: center;
        margin-bottom: 1.5rem;
    }
    .footer-links a {
        color: #AAB4FF;
        text-decoration: none;
    }
    .footer-links a:hover {
        text-decoration: underline;
    }
    .footer-copyright {
        margin: 0;
        color: rgba(230, 232, 240, 0.5);
        font-size: 0.9rem;
    }

    [data-theme="dark"] body {
        background: #12151F;
        color: #E6E8F0;
    }
    [data-theme="dark"] .navbar {
        background: rgba(18, 21, 31, 0.92);
        border-bottom-color: rgba(230, 232, 240, 0.1);
    }
    [data-theme="dark"] .nav-link {
        color: #E6E8F0;
    }
    [data-theme="dark"] .menu-bar {
        background: #E6E8F0;
    }
    [data-theme="dark"] .landing-page h2 {
        background: linear-gradient(45deg, #E6E8F0, #AAB4FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    [data-theme="dark"] .problem-card,
    [data-theme="dark"] .agent-card,
    [data-theme="dark"] .feature-item,
    [data-theme="dark"] .modal-content {
        background: #1C2130;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
    }
    [data-theme="dark"] .problem-card h3,
    [data-theme="dark"] .agent-card h3,
    [data-theme="dark"] .feature-item h3,
    [data-theme="dark"] #modal-title {
        color: #E6E8F0;
    }
    [data-theme="dark"] .problem-card p,
    [data-theme="dark"] .agent-card p,
    [data-theme="dark"] .feature-item p,
    [data-theme="dark"] .hero-subtitle,
    [data-theme="dark"] .section-intro,
    [data-theme="dark"] #modal-description {
        color: #A9B0C2;
    }
    [data-theme="dark"] .signup-form input {
        background: #1C2130;
        border-color: rgba(230, 232, 240, 0.2);
        color: #E6E8F0;
    }
    [data-theme="dark"] .nav-links {
        background: #12151F;
    }

    @media (max-width: 768px) {
        .hero-title {
            font-size: 2.2rem;
        }
        .landing-page h2 {
            font-size: 1.8rem;
        }
        section {
            padding: 3rem 1rem;
        }
    }
                "#}
            </style>
        </div>
    }
}
