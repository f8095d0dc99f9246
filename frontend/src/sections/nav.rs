use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::motion::Motion;
use crate::components::reveal::{SectionFrame, SectionProps};
use crate::config;
use crate::content::{BRAND, NAV_LINKS};
use crate::interaction::{BUTTON, GROW};
use crate::layout::SectionKind;

const NAV_CSS: &str = r#"
    .nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: rgba(15, 23, 42, 0.95);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #1e293b;
    }
    .nav.scrolled {
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.35);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
        height: 4rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #fff;
        text-decoration: none;
    }
    .nav-brand .icon {
        width: 2rem;
        height: 2rem;
        color: #60a5fa;
    }
    .nav-brand span {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        color: #cbd5e1;
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-link:hover {
        color: #60a5fa;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #cbd5e1;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
        }
        .nav-right.mobile-menu-open {
            display: flex;
            flex-direction: column;
            position: absolute;
            top: 4rem;
            left: 0;
            right: 0;
            padding: 1.5rem;
            background: rgba(15, 23, 42, 0.98);
        }
    }
"#;

#[function_component(Nav)]
pub fn nav(props: &SectionProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().and_then(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(scroll_y) = scroll_window.scroll_y() {
                        is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD_PX);
                    }
                }) as Box<dyn FnMut()>);

                match window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    Ok(()) => Some((window, scroll_callback)),
                    Err(err) => {
                        warn!("Could not listen to scroll events: {:?}", err);
                        None
                    }
                }
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let slide = SectionKind::Nav
        .entrance()
        .map(|entrance| entrance.style(props.visibility, 0));

    html! {
        <SectionFrame
            kind={SectionKind::Nav}
            tag="nav"
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
            class={classes!((*is_scrolled).then(|| "scrolled"))}
            style={slide.map(AttrValue::from)}
        >
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <Motion interaction={GROW} tag="a" href="#" class="nav-brand">
                    <IconSvg icon={Icon::Shield} />
                    <span>{BRAND}</span>
                </Motion>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <a href={link.anchor} class="nav-link" onclick={close_menu.clone()}>
                                {link.label}
                            </a>
                        }).collect::<Html>()
                    }
                    <Motion interaction={BUTTON} tag="a" href="#contact" class="btn btn-primary btn-small" onclick={close_menu.clone()}>
                        {"Get Started"}
                    </Motion>
                </div>
            </div>
        </SectionFrame>
    }
}

