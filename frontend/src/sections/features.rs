use yew::prelude::*;

use crate::animation::{FADE_IN_LEFT, FEATURE_BULLET, SCALE_IN};
use crate::components::icons::{Icon, IconSvg};
use crate::components::reveal::{RevealGroup, RevealItem, SectionFrame, SectionProps};
use crate::content::{BRAND, FEATURES, FEATURES_IMAGE, FEATURES_INTRO};
use crate::layout::SectionKind;

const FEATURES_CSS: &str = r#"
    .features {
        padding: 5rem 0;
        background: #0f172a;
    }
    .features-layout {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
        gap: 4rem;
        align-items: center;
    }
    .features h2 .accent {
        color: #60a5fa;
    }
    .features-intro {
        font-size: 1.25rem;
        color: #cbd5e1;
        margin-bottom: 2rem;
    }
    .feature-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .feature-item {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #cbd5e1;
        font-size: 1.125rem;
    }
    .feature-item .icon {
        flex-shrink: 0;
        width: 1.5rem;
        height: 1.5rem;
        color: #4ade80;
    }
    .features-visual {
        position: relative;
    }
    .features-image {
        width: 100%;
        height: 24rem;
        border-radius: 1rem;
        background-size: cover;
        background-position: center;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .features-image-fade {
        position: absolute;
        inset: 0;
        border-radius: 1rem;
        background: linear-gradient(to top, rgba(15, 23, 42, 0.8), transparent);
    }
"#;

#[function_component(Features)]
pub fn features(props: &SectionProps) -> Html {
    html! {
        <SectionFrame
            kind={SectionKind::Features}
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
        >
            <style>{FEATURES_CSS}</style>
            <div class="container features-layout">
                <RevealItem descriptor={FADE_IN_LEFT}>
                    <h2>
                        {"Why Choose "}<span class="accent">{BRAND}</span>{"?"}
                    </h2>
                    <p class="features-intro">{FEATURES_INTRO}</p>

                    <RevealGroup class="feature-list">
                        {
                            FEATURES.iter().enumerate().map(|(index, feature)| html! {
                                <RevealItem key={*feature} descriptor={FEATURE_BULLET} {index} class="feature-item">
                                    <IconSvg icon={Icon::CheckCircle} />
                                    <span>{*feature}</span>
                                </RevealItem>
                            }).collect::<Html>()
                        }
                    </RevealGroup>
                </RevealItem>

                <RevealItem descriptor={SCALE_IN} class="features-visual">
                    <div class="features-image" style={format!("background-image: url('{}');", FEATURES_IMAGE)}></div>
                    <div class="features-image-fade"></div>
                </RevealItem>
            </div>
        </SectionFrame>
    }
}
