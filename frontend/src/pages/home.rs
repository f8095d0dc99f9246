use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::PAGE_TITLE;
use crate::layout::{SectionKind, SectionStates, PAGE_SECTIONS};
use crate::sections::{
    cta::CallToAction, features::Features, footer::Footer, hero::Hero, nav::Nav, services::Services,
    stats::Stats, testimonials::Testimonials,
};

const PAGE_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page {
        background: #0f172a;
        color: #fff;
        overflow-x: hidden;
    }
    .landing-page h2 {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
        color: #fff;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #cbd5e1;
        max-width: 48rem;
        margin: 0 auto;
    }
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        border-radius: 0.5rem;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
        transition: background-color 0.3s, border-color 0.3s, color 0.3s;
    }
    .btn-small {
        padding: 0.5rem 1.5rem;
    }
    .btn-large {
        padding: 1rem 2rem;
        font-size: 1.125rem;
    }
    .btn-primary {
        background: #2563eb;
        color: #fff;
    }
    .btn-primary:hover {
        background: #1d4ed8;
    }
    .btn-outline {
        border: 1px solid #94a3b8;
        color: #fff;
    }
    .btn-outline:hover {
        border-color: #60a5fa;
    }
    .icon {
        width: 1.5rem;
        height: 1.5rem;
    }
    .icon-small {
        width: 1.25rem;
        height: 1.25rem;
    }
    .icon-large {
        width: 3rem;
        height: 3rem;
    }
"#;

/// The landing page: every section in page order, each revealed once.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let states = use_reducer(SectionStates::new);
    use_title(PAGE_TITLE.to_string());

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

    let on_reveal = {
        let states = states.dispatcher();
        Callback::from(move |kind: SectionKind| states.dispatch(kind))
    };

    debug!(
        "Rendering landing page, visible sections: {:?}",
        states.visible().collect::<Vec<_>>()
    );

    let sections = PAGE_SECTIONS.iter().map(|&kind| {
        let visibility = states.visibility(kind);
        let on_reveal = on_reveal.clone();
        match kind {
            SectionKind::Nav => html! { <Nav key={kind.name()} {visibility} {on_reveal} /> },
            SectionKind::Hero => html! { <Hero key={kind.name()} {visibility} {on_reveal} /> },
            SectionKind::Services => html! { <Services key={kind.name()} {visibility} {on_reveal} /> },
            SectionKind::Features => html! { <Features key={kind.name()} {visibility} {on_reveal} /> },
            SectionKind::Stats => html! { <Stats key={kind.name()} {visibility} {on_reveal} /> },
            SectionKind::Testimonials => html! { <Testimonials key={kind.name()} {visibility} {on_reveal} /> },
            SectionKind::CallToAction => html! { <CallToAction key={kind.name()} {visibility} {on_reveal} /> },
            SectionKind::Footer => html! { <Footer key={kind.name()} {visibility} {on_reveal} /> },
        }
    });

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            { for sections }
        </div>
    }
}
