use yew::prelude::*;

use crate::animation::{FADE_IN_UP, STAGGER_CONTAINER};
use crate::components::reveal::{RevealGroup, RevealItem, SectionFrame, SectionProps};
use crate::content::STATS;
use crate::layout::SectionKind;

const STATS_CSS: &str = r#"
    .stats {
        padding: 5rem 0;
        background: #1e293b;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
        gap: 2rem;
        text-align: center;
    }
    .stat {
        padding: 1.5rem;
    }
    .stat-value {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 700;
        color: #60a5fa;
        margin-bottom: 0.5rem;
    }
    .stat-label {
        color: #cbd5e1;
        font-size: 1.125rem;
    }
"#;

#[function_component(Stats)]
pub fn stats(props: &SectionProps) -> Html {
    html! {
        <SectionFrame
            kind={SectionKind::Stats}
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
        >
            <style>{STATS_CSS}</style>
            <div class="container">
                <RevealGroup descriptor={STAGGER_CONTAINER} class="stats-grid">
                    {
                        STATS.iter().enumerate().map(|(index, stat)| html! {
                            <RevealItem key={stat.label} descriptor={FADE_IN_UP} {index} class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </RevealItem>
                        }).collect::<Html>()
                    }
                </RevealGroup>
            </div>
        </SectionFrame>
    }
}
