use yew::prelude::*;

use crate::animation::{FADE_IN_UP, STAGGER_CONTAINER};
use crate::components::icons::{Icon, IconSvg};
use crate::components::reveal::{RevealGroup, RevealItem, SectionFrame, SectionProps};
use crate::content::{TESTIMONIALS, TESTIMONIALS_HEADING, TESTIMONIALS_INTRO, TESTIMONIAL_STARS};
use crate::layout::SectionKind;

const TESTIMONIALS_CSS: &str = r#"
    .testimonials {
        padding: 5rem 0;
        background: #0f172a;
    }
    .testimonials-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 2rem;
    }
    .testimonial {
        height: 100%;
        background: rgba(51, 65, 85, 0.5);
        backdrop-filter: blur(4px);
        border: 1px solid #475569;
        border-radius: 1rem;
        padding: 2rem;
    }
    .testimonial-stars {
        display: flex;
        color: #60a5fa;
        margin-bottom: 1rem;
    }
    .testimonial-stars .icon {
        width: 1.25rem;
        height: 1.25rem;
        fill: currentColor;
    }
    .testimonial-quote {
        color: #cbd5e1;
        font-size: 1.125rem;
        line-height: 1.6;
        margin-bottom: 1.5rem;
    }
    .testimonial-author {
        font-weight: 600;
        color: #fff;
    }
    .testimonial-role {
        color: #94a3b8;
    }
"#;

#[function_component(Testimonials)]
pub fn testimonials(props: &SectionProps) -> Html {
    html! {
        <SectionFrame
            kind={SectionKind::Testimonials}
            visibility={props.visibility}
            on_reveal={props.on_reveal.clone()}
        >
            <style>{TESTIMONIALS_CSS}</style>
            <div class="container">
                <RevealItem descriptor={FADE_IN_UP} class="section-heading">
                    <h2>{TESTIMONIALS_HEADING}</h2>
                    <p>{TESTIMONIALS_INTRO}</p>
                </RevealItem>

                <RevealGroup descriptor={STAGGER_CONTAINER} class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <RevealItem key={testimonial.author} descriptor={FADE_IN_UP} {index} class="testimonial">
                                <div class="testimonial-stars">
                                    { for (0..TESTIMONIAL_STARS).map(|_| html! { <IconSvg icon={Icon::Star} /> }) }
                                </div>
                                <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                                <div>
                                    <div class="testimonial-author">{testimonial.author}</div>
                                    <div class="testimonial-role">{testimonial.role}</div>
                                </div>
                            </RevealItem>
                        }).collect::<Html>()
                    }
                </RevealGroup>
            </div>
        </SectionFrame>
    }
}
