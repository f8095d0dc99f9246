use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::animation::{HERO_ACTIONS, HERO_HEADLINE, HERO_SUBTITLE};
use crate::components::icons::{Icon, IconSvg};
use crate::components::motion::Motion;
use crate::components::reveal::{RevealItem, SectionFrame, SectionProps};
use crate::config;
use crate::content::{self, HERO_HEADLINE_ACCENT, HERO_IMAGE, HERO_SUBTITLE as SUBTITLE};
use crate::interaction::{BUTTON, PRIMARY_BUTTON};
use crate::layout::SectionKind;
use crate::particles::{self, PARTICLE_CSS};

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
        background-repeat: no-repeat;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
        text-align: center;
    }
    .hero h1 {
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
        background: linear-gradient(to right, #fff, #dbeafe, #93c5fd);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero h1 .accent {
        color: #60a5fa;
        -webkit-text-fill-color: #60a5fa;
    }
    .hero-subtitle {
        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
        color: #cbd5e1;
        margin: 0 auto 2rem;
        max-width: 48rem;
        line-height: 1.6;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
        align-items: center;
    }
    .hero-particles {
        position: absolute;
        inset: 0;
    }
"#;

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    // sampled once per mount
    let particles = use_state(|| particles::scatter(config::PARTICLE_COUNT, Math::random));

    html! {
        <SectionFrame
            kind={SectionKind::Hero}
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
        >
            <style>{HERO_CSS}{PARTICLE_CSS}</style>
            <div class="hero-background" style={content::overlay_background(HERO_IMAGE, 0.85)}></div>

            <div class="hero-content">
                <RevealItem descriptor={HERO_HEADLINE} tag="h1">
                    {content::HERO_HEADLINE}
                    <br />
                    <span class="accent">{HERO_HEADLINE_ACCENT}</span>
                </RevealItem>

                <RevealItem descriptor={HERO_SUBTITLE} tag="p" class="hero-subtitle">
                    {SUBTITLE}
                </RevealItem>

                <RevealItem descriptor={HERO_ACTIONS} class="hero-actions">
                    <Motion interaction={PRIMARY_BUTTON} tag="a" href="#services" class="btn btn-primary btn-large">
                        {"Explore Solutions"}
                        <IconSvg icon={Icon::ArrowRight} class="icon-small" />
                    </Motion>
                    <Motion interaction={BUTTON} tag="a" href="#contact" class="btn btn-outline btn-large">
                        {"Request Demo"}
                    </Motion>
                </RevealItem>
            </div>

            <div class="hero-particles">
                {
                    particles.iter().enumerate().map(|(i, particle)| html! {
                        <div key={i} class="particle" style={particle.style()}></div>
                    }).collect::<Html>()
                }
            </div>
        </SectionFrame>
    }
}
