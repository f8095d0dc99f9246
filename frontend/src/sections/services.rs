use yew::prelude::*;

use crate::animation::{Stagger, FADE_IN_UP, STAGGER_CONTAINER};
use crate::components::icons::{Icon, IconSvg};
use crate::components::motion::Motion;
use crate::components::reveal::{RevealGroup, RevealItem, SectionFrame, SectionProps};
use crate::content::{Service, SERVICES, SERVICES_HEADING, SERVICES_INTRO};
use crate::interaction::{CARD, NUDGE};
use crate::layout::SectionKind;

const SERVICES_CSS: &str = r#"
    .services {
        padding: 5rem 0;
        background: #1e293b;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
        gap: 2rem;
    }
    .service-card {
        height: 100%;
        background: rgba(51, 65, 85, 0.5);
        backdrop-filter: blur(4px);
        border: 1px solid #475569;
        border-radius: 1rem;
        padding: 1.5rem;
        transition: border-color 0.3s;
    }
    .service-card:hover {
        border-color: #3b82f6;
    }
    .service-image {
        width: 100%;
        height: 12rem;
        border-radius: 0.5rem;
        margin-bottom: 1.5rem;
        background-size: cover;
        background-position: center;
    }
    .service-card .icon-large {
        color: #60a5fa;
        margin-bottom: 1rem;
    }
    .service-card h3 {
        font-size: 1.25rem;
        font-weight: 600;
        margin-bottom: 0.75rem;
    }
    .service-card p {
        color: #cbd5e1;
        line-height: 1.6;
    }
    .learn-more {
        margin-top: 1rem;
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        color: #60a5fa;
        font-weight: 500;
        background: none;
        border: none;
        padding: 0;
        cursor: pointer;
    }
    .learn-more:hover {
        color: #93c5fd;
    }
"#;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    html! {
        <RevealItem descriptor={FADE_IN_UP} index={props.index}>
            <Motion interaction={CARD} class="service-card">
                <div class="service-image" style={format!("background-image: url('{}');", service.image)}></div>
                <IconSvg icon={service.icon} class="icon-large" />
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <Motion interaction={NUDGE} tag="button" class="learn-more">
                    {"Learn More"}
                    <IconSvg icon={Icon::ArrowRight} class="icon-small" />
                </Motion>
            </Motion>
        </RevealItem>
    }
}

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    html! {
        <SectionFrame
            kind={SectionKind::Services}
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
        >
            <style>{SERVICES_CSS}</style>
            <div class="container">
                <RevealGroup descriptor={STAGGER_CONTAINER} class="section-heading">
                    <RevealItem descriptor={FADE_IN_UP} tag="h2" index={0}>
                        {SERVICES_HEADING}
                    </RevealItem>
                    <RevealItem descriptor={FADE_IN_UP} tag="p" index={1}>
                        {SERVICES_INTRO}
                    </RevealItem>
                </RevealGroup>

                <RevealGroup descriptor={STAGGER_CONTAINER} stagger={Stagger::CHILDREN} class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard key={service.title} service={*service} {index} />
                        }).collect::<Html>()
                    }
                </RevealGroup>
            </div>
        </SectionFrame>
    }
}
