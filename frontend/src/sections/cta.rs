use yew::prelude::*;

use crate::animation::FADE_IN_UP;
use crate::components::motion::Motion;
use crate::components::reveal::{RevealItem, SectionFrame, SectionProps};
use crate::content::{CTA_HEADING, CTA_TEXT};
use crate::interaction::{BUTTON, LIGHT_BUTTON};
use crate::layout::SectionKind;

const CTA_CSS: &str = r#"
    .call-to-action {
        padding: 5rem 0;
        background: linear-gradient(to right, #1e3a8a, #0f172a);
        text-align: center;
    }
    .call-to-action .container {
        max-width: 56rem;
    }
    .call-to-action p {
        font-size: 1.25rem;
        color: #dbeafe;
        margin: 0 auto 2rem;
        max-width: 42rem;
    }
    .cta-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }
    .btn-light {
        background: #fff;
        color: #1e3a8a;
    }
    .btn-light:hover {
        background: #eff6ff;
    }
    .btn-ghost {
        border: 1px solid #fff;
        color: #fff;
    }
    .btn-ghost:hover {
        background: #fff;
        color: #1e3a8a;
    }
"#;

#[function_component(CallToAction)]
pub fn call_to_action(props: &SectionProps) -> Html {
    html! {
        <SectionFrame
            kind={SectionKind::CallToAction}
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
        >
            <style>{CTA_CSS}</style>
            <div class="container">
                <RevealItem descriptor={FADE_IN_UP}>
                    <h2>{CTA_HEADING}</h2>
                    <p>{CTA_TEXT}</p>
                    <div class="cta-actions">
                        <Motion interaction={LIGHT_BUTTON} tag="a" href="#contact" class="btn btn-light btn-large">
                            {"Start Your Project"}
                        </Motion>
                        <Motion interaction={BUTTON} tag="a" href="#contact" class="btn btn-ghost btn-large">
                            {"Schedule Consultation"}
                        </Motion>
                    </div>
                </RevealItem>
            </div>
        </SectionFrame>
    }
}
